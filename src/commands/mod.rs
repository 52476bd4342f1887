//! Command implementations
//!
//! Each command is a module with an execute function that takes the loaded
//! catalog plus parsed options and reports through an `OutputWriter`.

pub mod filter;
pub mod label;
pub mod pick;

// Re-export execute functions for convenience
pub use filter::execute as filter;
pub use label::execute as label;
pub use pick::execute as pick;
