use crate::error::EbfError;

/// Header information read without parsing grey values.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EbfInfo {
    pub height: u32,
    pub width: u32,
}

impl EbfInfo {
    /// Check the magic tag and read the dimensions.
    ///
    /// Only the header is validated; value count and content are not.
    pub fn from_bytes(data: &[u8]) -> Result<Self, EbfError> {
        crate::ebf::probe_header(data)
    }

    /// Number of grey values the body must contain.
    pub fn value_count(&self) -> u64 {
        u64::from(self.height) * u64::from(self.width)
    }
}
