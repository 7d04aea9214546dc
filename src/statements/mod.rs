// src/statements/mod.rs
pub mod definitions;
pub mod extract;

// Re-export the pieces orchestration needs
pub use definitions::ALL_STATEMENTS;
pub use extract::{extract_statement, StatementRow};
