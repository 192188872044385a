use alloc::vec::Vec;

use crate::grid::Grid;

/// Serialize a grid: magic tag, `"<height> <width>\n"`, then one line per row.
pub fn encode(grid: &Grid) -> Vec<u8> {
    crate::ebf::encode_ebf(grid)
}

/// Stream the encoded grid into `w` row by row.
///
/// Produces the same bytes as [`encode`] without building the whole output
/// in memory. Errors come only from the writer.
#[cfg(feature = "std")]
pub fn write_to<W: std::io::Write>(grid: &Grid, mut w: W) -> std::io::Result<()> {
    crate::ebf::write_rows(grid, &mut w)
}
