//! EBF container: 2-byte magic tag, `height width`, then `height * width`
//! whitespace-separated unsigned grey values in row-major order.

pub(crate) mod decode;
mod encode;

#[cfg(feature = "std")]
pub(crate) use encode::write_rows;
pub(crate) use encode::encode_ebf;

use crate::error::EbfError;
use crate::grid::Grid;
use crate::info::EbfInfo;
use crate::limits::Limits;
use enough::Stop;

/// First magic byte (`'e'`).
pub const MAGIC_FIRST: u8 = 0x65;
/// Second magic byte (`'b'`).
pub const MAGIC_SECOND: u8 = 0x62;
/// The magic tag as it appears on disk. Read as a little-endian u16 this is `0x6265`.
pub const MAGIC: [u8; 2] = [MAGIC_FIRST, MAGIC_SECOND];

/// Smallest accepted height or width.
pub const MIN_DIMENSION: u32 = 1;
/// Largest accepted height or width.
pub const MAX_DIMENSION: u32 = 262_144;

/// Parsed EBF header (internal).
pub(crate) struct EbfHeader {
    pub height: u32,
    pub width: u32,
    /// Byte offset just past the width token.
    pub data_offset: usize,
}

/// Range-check a `(height, width)` pair as read from the file.
pub(crate) fn check_dimensions(height: i64, width: i64) -> Result<(u32, u32), EbfError> {
    let range = i64::from(MIN_DIMENSION)..=i64::from(MAX_DIMENSION);
    if !range.contains(&height) || !range.contains(&width) {
        return Err(EbfError::BadDimensions(alloc::format!(
            "{height}x{width} outside {MIN_DIMENSION}..={MAX_DIMENSION}"
        )));
    }
    Ok((height as u32, width as u32))
}

/// `height * width` as a buffer length. Only overflows on targets where
/// `usize` is narrower than 37 bits.
pub(crate) fn value_count(height: u32, width: u32) -> Result<usize, EbfError> {
    (height as usize)
        .checked_mul(width as usize)
        .ok_or(EbfError::AllocationFailure { bytes: usize::MAX })
}

/// Probe header for EbfInfo without parsing values.
pub(crate) fn probe_header(data: &[u8]) -> Result<EbfInfo, EbfError> {
    let header = decode::parse_header(data)?;
    Ok(EbfInfo {
        height: header.height,
        width: header.width,
    })
}

/// Decode EBF data (called from DecodeRequest).
pub(crate) fn decode(
    data: &[u8],
    limits: Option<&Limits>,
    stop: &dyn Stop,
) -> Result<Grid, EbfError> {
    let header = decode::parse_header(data)?;
    log::debug!("ebf header: {}x{} (height x width)", header.height, header.width);

    if let Some(limits) = limits {
        limits.check_grid(header.height, header.width)?;
    }
    let count = value_count(header.height, header.width)?;

    stop.check()?;

    let body = &data[header.data_offset..];
    let values = decode::decode_values(body, count, stop)?;
    Ok(Grid::from_parts(values, header.height, header.width))
}
