//! Readers of the levels of data pages.
pub mod levels;

pub use levels::{
    get_bit_width, read_definition_levels_v2, read_repetition_levels_v2, split_buffer_v2,
};
pub use parquet_format_safe::DataPageHeaderV2;

pub use crate::parquet_bridge::DataPageHeaderExt;
