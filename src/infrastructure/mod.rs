pub mod bootstrap;
pub mod config;
pub mod csv;
pub mod storage;
pub mod text;
