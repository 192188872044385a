//! EBF decoder: magic check, header tokens, exact-count value parsing.

use alloc::string::String;
use alloc::vec::Vec;
use enough::Stop;

use super::{EbfHeader, MAGIC_FIRST, MAGIC_SECOND, check_dimensions};
use crate::error::EbfError;

// ── Token cursor over whitespace-separated text ─────────────────────

/// C `isspace` set: space, \t, \n, \v, \f, \r.
fn is_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | 0x0b | 0x0c | b'\r')
}

struct Tokens<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Tokens<'a> {
    fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Next whitespace-delimited token, or `None` at end of input.
    fn next_token(&mut self) -> Option<&'a [u8]> {
        while self.pos < self.data.len() && is_space(self.data[self.pos]) {
            self.pos += 1;
        }
        if self.pos >= self.data.len() {
            return None;
        }
        let start = self.pos;
        while self.pos < self.data.len() && !is_space(self.data[self.pos]) {
            self.pos += 1;
        }
        Some(&self.data[start..self.pos])
    }
}

/// Lossy text of a token for error messages, truncated.
fn show(token: &[u8]) -> String {
    let shown = &token[..token.len().min(32)];
    String::from_utf8_lossy(shown).into_owned()
}

fn parse_signed(token: &[u8]) -> Option<i64> {
    core::str::from_utf8(token).ok()?.parse().ok()
}

/// Unsigned value token. A leading `-` never parses.
fn parse_unsigned(token: &[u8]) -> Option<u32> {
    core::str::from_utf8(token).ok()?.parse().ok()
}

/// Whether a token starts like an integer: optional sign, then a digit.
fn looks_numeric(token: &[u8]) -> bool {
    let digits = match token.first() {
        Some(b'+' | b'-') => &token[1..],
        _ => token,
    };
    digits.first().is_some_and(u8::is_ascii_digit)
}

// ── Header ──────────────────────────────────────────────────────────

/// Check the magic tag and parse `height width`.
pub(crate) fn parse_header(data: &[u8]) -> Result<EbfHeader, EbfError> {
    match data {
        [MAGIC_FIRST, MAGIC_SECOND, ..] => {}
        _ => return Err(EbfError::BadMagicNumber),
    }

    let mut tokens = Tokens::new(&data[2..]);
    let mut dimension = |name: &str| -> Result<i64, EbfError> {
        let token = tokens
            .next_token()
            .ok_or_else(|| EbfError::BadDimensions(alloc::format!("missing {name}")))?;
        parse_signed(token).ok_or_else(|| {
            EbfError::BadDimensions(alloc::format!("{name} {:?} is not an integer", show(token)))
        })
    };
    let height = dimension("height")?;
    let width = dimension("width")?;
    let (height, width) = check_dimensions(height, width)?;

    Ok(EbfHeader {
        height,
        width,
        data_offset: 2 + tokens.pos,
    })
}

// ── Values ──────────────────────────────────────────────────────────

/// Parse exactly `count` unsigned values from `body`, then reject any
/// numeric token left in the remainder.
pub(crate) fn decode_values(
    body: &[u8],
    count: usize,
    stop: &dyn Stop,
) -> Result<Vec<u32>, EbfError> {
    // Each value takes at least one digit plus one separator, so a short body
    // cannot fill a huge grid; reserve only what it could hold. The count loop
    // below reports the shortfall.
    let capacity = count.min(body.len() / 2 + 1);
    let mut values = Vec::new();
    values
        .try_reserve_exact(capacity)
        .map_err(|_| EbfError::AllocationFailure {
            bytes: count.saturating_mul(core::mem::size_of::<u32>()),
        })?;

    let mut tokens = Tokens::new(body);
    for i in 0..count {
        if i % 65_536 == 0 {
            stop.check()?;
        }
        let token = tokens.next_token().ok_or_else(|| {
            EbfError::BadData(alloc::format!("expected {count} values, found {i}"))
        })?;
        let value = parse_unsigned(token).ok_or_else(|| {
            EbfError::BadData(alloc::format!(
                "value {} of {count} is not an unsigned integer: {:?}",
                i + 1,
                show(token)
            ))
        })?;
        values.push(value);
    }

    while let Some(token) = tokens.next_token() {
        if looks_numeric(token) {
            return Err(EbfError::BadData(alloc::format!(
                "extra value {:?} after {count} values",
                show(token)
            )));
        }
        log::trace!("ignoring trailing token {:?}", show(token));
    }

    Ok(values)
}
