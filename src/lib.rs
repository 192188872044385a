//! # zenebf
//!
//! Strict decoder and normalizing encoder for EBF, a small text raster format.
//!
//! ## Format
//!
//! - Bytes 0–1: the magic tag `eb` (`0x65 0x62`; `0x6265` as a little-endian u16)
//! - Whitespace-separated `height width`, each in `1..=262144`
//! - Exactly `height * width` unsigned grey values in row-major order
//!
//! There is no end-of-grid marker. The value count is the only delimiter, so
//! decoding rejects both short bodies and any numeric token after the last
//! expected value. Non-numeric trailing text is ignored.
//!
//! Encoding writes the magic tag, `"<height> <width>\n"`, then each row as
//! space-separated values terminated by `\n`. Decoding the output yields the
//! same grid.
//!
//! ## Non-Goals
//!
//! - Pixel processing (scaling, color, filters)
//! - Other encodings or compression
//! - Unbounded streaming input
//!
//! ## Usage
//!
//! ```no_run
//! use zenebf::{EbfInfo, Unstoppable};
//!
//! let data: &[u8] = b"eb2 3\n1 2 3 4 5 6\n";
//!
//! // Probe without parsing values
//! let info = EbfInfo::from_bytes(data)?;
//! println!("{}x{}", info.height, info.width);
//!
//! let grid = zenebf::decode(data, Unstoppable)?;
//! assert_eq!(grid.row(1), Some(&[4, 5, 6][..]));
//!
//! let encoded = zenebf::encode(&grid);
//! assert_eq!(encoded, b"eb2 3\n1 2 3\n4 5 6\n");
//! # Ok::<(), zenebf::EbfError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

mod error;
mod grid;
mod info;
mod limits;

pub mod ebf;

mod decode;
mod encode;

// Re-exports
pub use decode::{DecodeRequest, decode};
#[cfg(feature = "std")]
pub use encode::write_to;
pub use encode::encode;
pub use enough::{Stop, StopReason, Unstoppable};
pub use error::EbfError;
pub use grid::Grid;
pub use info::EbfInfo;
pub use limits::Limits;
