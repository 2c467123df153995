// ============================================================
// TABLE DOMAIN LAYER
// ============================================================
// Core types for the in-memory table the clean command mutates
// No I/O, no async, no external dependencies

mod cell;
mod column_kind;
mod frame;

pub use cell::Cell;
pub use column_kind::ColumnKind;
pub use frame::Table;
