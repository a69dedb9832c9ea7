/// A physical native representation of a Parquet fixed-sized type.
pub trait NativeType: Sized + Copy + std::fmt::Debug {
    type Bytes: AsRef<[u8]> + AsMut<[u8]> + Default;

    fn to_le_bytes(&self) -> Self::Bytes;

    fn from_le_bytes(bytes: Self::Bytes) -> Self;
}

macro_rules! native {
    ($type:ty) => {
        impl NativeType for $type {
            type Bytes = [u8; std::mem::size_of::<Self>()];
            #[inline]
            fn to_le_bytes(&self) -> Self::Bytes {
                Self::to_le_bytes(*self)
            }

            #[inline]
            fn from_le_bytes(bytes: Self::Bytes) -> Self {
                Self::from_le_bytes(bytes)
            }
        }
    };
}

native!(i32);
native!(i64);
native!(f32);
native!(f64);

/// Values decoded from a page, in the order they were encoded.
#[derive(Debug, Clone, PartialEq)]
pub enum DecodedArray {
    Int32(Vec<i32>),
    Int64(Vec<i64>),
    Float32(Vec<f32>),
    Float64(Vec<f64>),
    /// Values of a `FIXED_LEN_BYTE_ARRAY`, each with the same length.
    FixedLenBinary(Vec<Vec<u8>>),
}

impl DecodedArray {
    /// The number of values.
    pub fn len(&self) -> usize {
        match self {
            DecodedArray::Int32(values) => values.len(),
            DecodedArray::Int64(values) => values.len(),
            DecodedArray::Float32(values) => values.len(),
            DecodedArray::Float64(values) => values.len(),
            DecodedArray::FixedLenBinary(values) => values.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
