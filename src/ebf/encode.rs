//! EBF encoder.

use alloc::format;
use alloc::vec::Vec;

use super::MAGIC;
use crate::grid::Grid;

/// Append `value` in decimal without going through `core::fmt`.
fn push_decimal(out: &mut Vec<u8>, mut value: u32) {
    let mut buf = [0u8; 10];
    let mut i = buf.len();
    loop {
        i -= 1;
        buf[i] = b'0' + (value % 10) as u8;
        value /= 10;
        if value == 0 {
            break;
        }
    }
    out.extend_from_slice(&buf[i..]);
}

/// Append one row: values separated by a single space, then `\n`.
fn push_row(out: &mut Vec<u8>, row: &[u32]) {
    for (i, &v) in row.iter().enumerate() {
        if i > 0 {
            out.push(b' ');
        }
        push_decimal(out, v);
    }
    out.push(b'\n');
}

fn header(grid: &Grid) -> Vec<u8> {
    let dims = format!("{} {}\n", grid.height(), grid.width());
    let mut out = Vec::with_capacity(MAGIC.len() + dims.len());
    out.extend_from_slice(&MAGIC);
    out.extend_from_slice(dims.as_bytes());
    out
}

/// Serialize a grid to EBF bytes.
pub(crate) fn encode_ebf(grid: &Grid) -> Vec<u8> {
    let mut out = header(grid);
    // Most grey values are short; this is a starting size, not a bound.
    out.reserve(grid.values().len().saturating_mul(4));
    for row in grid.rows() {
        push_row(&mut out, row);
    }
    out
}

/// Stream a grid to `w` one row at a time.
#[cfg(feature = "std")]
pub(crate) fn write_rows<W: std::io::Write>(grid: &Grid, w: &mut W) -> std::io::Result<()> {
    w.write_all(&header(grid))?;
    let mut line = Vec::with_capacity(grid.width() as usize * 4);
    for row in grid.rows() {
        line.clear();
        push_row(&mut line, row);
        w.write_all(&line)?;
    }
    Ok(())
}
