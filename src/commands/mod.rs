//! Command surface: line parsing and the interactive dispatch loop.

pub mod executor;
pub mod parser;

pub use executor::run;
pub use parser::Command;
