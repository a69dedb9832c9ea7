#[cfg(feature = "serde_types")]
use serde_derive::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Parameters of a single encode or decode call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde_types", derive(Deserialize, Serialize))]
pub struct Options {
    /// The number of bits of each value of a RLE/bit-packed hybrid stream.
    pub bit_width: Option<u32>,
    /// Whether the hybrid stream is written without its 4-byte length prefix.
    pub disable_envelope: bool,
    /// The size in bytes of each value of a `FIXED_LEN_BYTE_ARRAY`.
    pub type_length: Option<usize>,
}

impl Options {
    #[must_use]
    pub fn with_bit_width(mut self, bit_width: u32) -> Self {
        self.bit_width = Some(bit_width);
        self
    }

    #[must_use]
    pub fn with_disable_envelope(mut self, disable_envelope: bool) -> Self {
        self.disable_envelope = disable_envelope;
        self
    }

    #[must_use]
    pub fn with_type_length(mut self, type_length: usize) -> Self {
        self.type_length = Some(type_length);
        self
    }

    /// Returns the bit width.
    /// # Errors
    /// Errors iff the bit width is not set or is larger than 32.
    pub fn bit_width(&self) -> Result<u32> {
        match self.bit_width {
            Some(bit_width) if bit_width <= 32 => Ok(bit_width),
            Some(bit_width) => {
                log::debug!("rejected options {:?}", self);
                Err(Error::InvalidParameter(format!(
                    "bit width must be at most 32, got {}",
                    bit_width
                )))
            }
            None => {
                log::debug!("rejected options {:?}", self);
                Err(Error::InvalidParameter("bitWidth is required".to_string()))
            }
        }
    }
}
