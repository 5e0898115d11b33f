//! Terminal front end: the menu state machine plus its rendering helpers.

mod controller;
mod print;
mod render;

pub use controller::{Exit, MenuController};
