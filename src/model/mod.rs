pub mod config;
pub mod roster;

pub use config::*;
pub use roster::*;
