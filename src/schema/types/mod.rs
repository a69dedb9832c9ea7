pub use parquet_format_safe::Type;

mod physical_type;
pub use physical_type::*;
