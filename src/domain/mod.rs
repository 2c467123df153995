pub mod error;

// Tabular data model for the clean command
pub mod table;
