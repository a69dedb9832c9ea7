//! Physical types of Parquet columns.
pub mod types;
