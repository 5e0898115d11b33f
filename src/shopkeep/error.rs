use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShopError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),

    #[error("Invalid price: {0:?} is not a non-negative amount")]
    InvalidPrice(String),

    #[error("Invalid quantity: {0:?} is not a whole number of units")]
    InvalidQuantity(String),

    #[error("Item name cannot be empty")]
    EmptyName,
}

impl ShopError {
    /// Validation errors are raised by operator input and can be re-prompted.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            ShopError::InvalidPrice(_) | ShopError::InvalidQuantity(_) | ShopError::EmptyName
        )
    }
}

pub type Result<T> = std::result::Result<T, ShopError>;
