pub mod roster_ops;
pub mod search;
