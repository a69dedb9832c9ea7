#![forbid(unsafe_code)]
//! Decoders and encoders of the value encodings of Apache Parquet data pages:
//! the RLE/bit-packed hybrid, dictionary indices and byte stream split, together
//! with the readers of the repetition and definition levels of v2 data pages.
//!
//! Every operation works on a [`encoding::Cursor`] over a borrowed buffer, advances it
//! past the bytes it consumed and keeps no state between calls.
pub mod encoding;
pub mod error;
mod parquet_bridge;
pub mod read;
pub mod schema;
pub mod types;

pub use encoding::{Cursor, Encoding, Options};
pub use schema::types::PhysicalType;
pub use types::DecodedArray;
