pub mod config;
pub mod deck;
pub mod logging;
pub mod shutdown;
pub mod ui;
