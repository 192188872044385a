use crate::error::EbfError;

/// Caller-imposed caps on a grid, tighter than the format's own
/// `1..=262144` dimension range.
///
/// All fields default to `None`. Checked once the header is read, before
/// any grid storage is reserved.
#[derive(Clone, Debug, Default)]
pub struct Limits {
    pub max_height: Option<u32>,
    pub max_width: Option<u32>,
    /// Maximum value count (height * width).
    pub max_pixels: Option<u64>,
    /// Maximum size of the grid buffer in bytes (four per value).
    pub max_memory_bytes: Option<u64>,
}

fn over(what: &str, actual: u64, limit: Option<u64>) -> Result<(), EbfError> {
    match limit {
        Some(limit) if actual > limit => Err(EbfError::LimitExceeded(alloc::format!(
            "{what} {actual} exceeds limit {limit}"
        ))),
        _ => Ok(()),
    }
}

impl Limits {
    /// Check a `height x width` grid against every cap.
    pub(crate) fn check_grid(&self, height: u32, width: u32) -> Result<(), EbfError> {
        over("height", height.into(), self.max_height.map(u64::from))?;
        over("width", width.into(), self.max_width.map(u64::from))?;

        // Dimensions are range-checked already, at most 2^18 each.
        let values = u64::from(height) * u64::from(width);
        over("value count", values, self.max_pixels)?;
        over(
            "grid size in bytes",
            values * core::mem::size_of::<u32>() as u64,
            self.max_memory_bytes,
        )
    }
}
