//! Reading problem input and writing per-window counts.
//!
//! The input format is a header line holding the window count `N` and
//! the window width `k`, followed by a whitespace-separated list of
//! `N + k - 1` integer measurements. Anything past the expected number
//! of measurements is ignored; the reference input carries a spurious
//! trailing token.

use std::fmt::Display;
use std::io::{self, BufRead, Write};
use std::str::FromStr;
use thiserror::Error;

/// Errors raised while reading problem input.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The underlying reader failed.
    #[error("read error: {0}")]
    Io(#[from] io::Error),
    /// The header line with the window count and width is missing or
    /// incomplete.
    #[error("missing header line with window count and window width")]
    MissingHeader,
    /// A token could not be parsed as an integer.
    #[error("invalid integer token `{token}`")]
    BadInteger {
        /// The offending token.
        token: String,
    },
    /// The window width was zero.
    #[error("window width must be at least 1")]
    ZeroWidth,
    /// The measurement list ended early.
    #[error("expected {expected} measurements, found {got}")]
    TooFewValues {
        /// Number of measurements the header promised.
        expected: usize,
        /// Number of measurements actually present.
        got: usize,
    },
}

fn parse_token<T: FromStr>(token: &str) -> Result<T, ParseError> {
    token.parse().map_err(|_| ParseError::BadInteger {
        token: token.to_owned(),
    })
}

/// One parsed problem instance: a window count, a window width, and the
/// measurement sequence.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Problem {
    /// Number of windows, `N`.
    pub windows: usize,
    /// Window width, `k`.
    pub width: usize,
    /// The `N + k - 1` measurements, in order.
    pub values: Vec<i64>,
}

impl Problem {
    /// Read a problem instance from `reader`.
    ///
    /// # Errors
    /// Fails fast on a missing or short header, a zero window width,
    /// non-integer tokens, or fewer than `N + k - 1` measurements.
    pub fn from_reader<R: BufRead>(mut reader: R) -> Result<Self, ParseError> {
        let mut header = String::new();
        if reader.read_line(&mut header)? == 0 {
            return Err(ParseError::MissingHeader);
        }
        let mut fields = header.split_whitespace();
        let windows: usize =
            parse_token(fields.next().ok_or(ParseError::MissingHeader)?)?;
        let width: usize =
            parse_token(fields.next().ok_or(ParseError::MissingHeader)?)?;
        if width == 0 {
            return Err(ParseError::ZeroWidth);
        }

        let expected = windows + width - 1;
        let mut rest = String::new();
        reader.read_to_string(&mut rest)?;
        let values = rest
            .split_whitespace()
            .take(expected)
            .map(parse_token)
            .collect::<Result<Vec<i64>, ParseError>>()?;
        if values.len() < expected {
            return Err(ParseError::TooFewValues {
                expected,
                got: values.len(),
            });
        }

        Ok(Self {
            windows,
            width,
            values,
        })
    }
}

/// Write one count per line to `writer`.
///
/// # Errors
/// If the counts cannot be written, an error is returned.
pub fn write_counts<W: Write, T: Display>(
    mut writer: W,
    counts: &[T],
) -> io::Result<()> {
    counts.iter().try_for_each(|c| writeln!(writer, "{c}"))
}
