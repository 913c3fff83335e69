pub mod error;
pub mod range_table;
pub mod tables;
