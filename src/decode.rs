use enough::Stop;

use crate::error::EbfError;
use crate::grid::Grid;
use crate::limits::Limits;

/// Decode builder.
///
/// ```no_run
/// use zenebf::{DecodeRequest, Limits, Unstoppable};
///
/// let data: &[u8] = b"eb1 2\n0 255\n";
/// let limits = Limits { max_pixels: Some(1 << 20), ..Default::default() };
/// let grid = DecodeRequest::new(data).with_limits(&limits).decode(Unstoppable)?;
/// assert_eq!(grid.row(0), Some(&[0, 255][..]));
/// # Ok::<(), zenebf::EbfError>(())
/// ```
#[derive(Clone, Debug)]
pub struct DecodeRequest<'a> {
    data: &'a [u8],
    limits: Option<&'a Limits>,
}

impl<'a> DecodeRequest<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, limits: None }
    }

    pub fn with_limits(mut self, limits: &'a Limits) -> Self {
        self.limits = Some(limits);
        self
    }

    /// Validate the whole input and return the grid.
    ///
    /// Nothing partial is returned: any failure discards the values parsed so far.
    pub fn decode(self, stop: impl Stop) -> Result<Grid, EbfError> {
        crate::ebf::decode(self.data, self.limits, &stop)
    }
}

/// Decode EBF bytes with no limits beyond the format's dimension cap.
pub fn decode(data: &[u8], stop: impl Stop) -> Result<Grid, EbfError> {
    DecodeRequest::new(data).decode(stop)
}
