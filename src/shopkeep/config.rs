use crate::error::Result;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "shopkeep.json";
const DEFAULT_INVENTORY_FILE: &str = "inventory.csv";
const DEFAULT_SALES_FILE: &str = "sales.csv";

/// Configuration for shopkeep, stored in `<data dir>/shopkeep.json`
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ShopConfig {
    /// Inventory table file name, relative to the data directory
    #[serde(default = "default_inventory_file")]
    pub inventory_file: String,

    /// Sales log file name, relative to the data directory
    #[serde(default = "default_sales_file")]
    pub sales_file: String,
}

fn default_inventory_file() -> String {
    DEFAULT_INVENTORY_FILE.to_string()
}

fn default_sales_file() -> String {
    DEFAULT_SALES_FILE.to_string()
}

impl Default for ShopConfig {
    fn default() -> Self {
        Self {
            inventory_file: default_inventory_file(),
            sales_file: default_sales_file(),
        }
    }
}

impl ShopConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: ShopConfig = serde_json::from_str(&content)?;
        tracing::debug!(path = %config_path.display(), "loaded config");
        Ok(config)
    }

    pub fn inventory_path<P: AsRef<Path>>(&self, data_dir: P) -> PathBuf {
        data_dir.as_ref().join(&self.inventory_file)
    }

    pub fn sales_path<P: AsRef<Path>>(&self, data_dir: P) -> PathBuf {
        data_dir.as_ref().join(&self.sales_file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = ShopConfig::default();
        assert_eq!(config.inventory_file, "inventory.csv");
        assert_eq!(config.sales_file, "sales.csv");
    }

    #[test]
    fn test_load_missing_config() {
        let temp_dir = TempDir::new().unwrap();

        let config = ShopConfig::load(temp_dir.path()).unwrap();
        assert_eq!(config, ShopConfig::default());
    }

    #[test]
    fn test_load_renamed_tables() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join(CONFIG_FILENAME),
            r#"{ "inventory_file": "stock.csv", "sales_file": "ledger.csv" }"#,
        )
        .unwrap();

        let config = ShopConfig::load(temp_dir.path()).unwrap();
        assert_eq!(config.inventory_path(temp_dir.path()), temp_dir.path().join("stock.csv"));
        assert_eq!(config.sales_path(temp_dir.path()), temp_dir.path().join("ledger.csv"));
    }

    #[test]
    fn test_missing_fields_fall_back_to_defaults() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join(CONFIG_FILENAME),
            r#"{ "sales_file": "ledger.csv" }"#,
        )
        .unwrap();

        let config = ShopConfig::load(temp_dir.path()).unwrap();
        assert_eq!(config.inventory_file, "inventory.csv");
        assert_eq!(config.sales_file, "ledger.csv");
    }

    #[test]
    fn test_malformed_config_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join(CONFIG_FILENAME), "not json").unwrap();

        assert!(ShopConfig::load(temp_dir.path()).is_err());
    }

    #[test]
    fn test_paths_are_relative_to_data_dir() {
        let config = ShopConfig::default();
        let dir = Path::new("/srv/shop");

        assert_eq!(config.inventory_path(dir), dir.join("inventory.csv"));
        assert_eq!(config.sales_path(dir), dir.join("sales.csv"));
    }
}
