//! Line scanner over the implementation-status document.
//!
//! After a fixed positional header skip, every line is searched for the
//! first backtick-quoted token made of word chars, `.` and `_`. Lines with
//! no such token are passed over. Results are produced lazily, one line
//! read at a time.

mod transform;

pub use transform::runtime_name;

use regex::Regex;
use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::Path;

use crate::error::ExtractError;

/// Backtick-quoted operator token; group 1 is the token itself.
pub const OPERATOR_PATTERN: &str = r"`([\w._]+)`";

/// A matched operator token and its derived runtime name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Operator {
    pub token: String,
    pub name: String,
}

impl Operator {
    pub fn from_token(token: &str) -> Self {
        Self {
            token: token.to_string(),
            name: runtime_name(token),
        }
    }
}

/// Compiled [`OPERATOR_PATTERN`].
#[derive(Debug, Clone)]
pub struct OperatorPattern(Regex);

impl OperatorPattern {
    pub fn new() -> Result<Self, ExtractError> {
        Ok(Self(Regex::new(OPERATOR_PATTERN)?))
    }

    /// Leftmost token on `line`, without the backticks.
    pub fn first_token<'l>(&self, line: &'l str) -> Option<&'l str> {
        self.0
            .captures(line)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    }
}

/// Lazy, forward-only sequence of operators read from `R`.
///
/// Stops after the first read error; a fresh scan needs a fresh reader.
pub struct Operators<R> {
    lines: Lines<R>,
    pattern: OperatorPattern,
    skip_lines: usize,
    line_no: usize,
    scanned: usize,
    found: usize,
    failed: bool,
}

impl<R: BufRead> Operators<R> {
    pub fn new(reader: R, skip_lines: usize) -> Result<Self, ExtractError> {
        Ok(Self {
            lines: reader.lines(),
            pattern: OperatorPattern::new()?,
            skip_lines,
            line_no: 0,
            scanned: 0,
            found: 0,
            failed: false,
        })
    }

    /// Lines searched so far (header lines excluded).
    pub fn lines_scanned(&self) -> usize {
        self.scanned
    }

    pub fn operators_found(&self) -> usize {
        self.found
    }
}

impl<R: BufRead> Iterator for Operators<R> {
    type Item = Result<Operator, ExtractError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        loop {
            let line = self.lines.next()?;
            self.line_no += 1;
            let line = match line {
                Ok(l) => l,
                Err(source) => {
                    self.failed = true;
                    return Some(Err(ExtractError::Read {
                        line: self.line_no,
                        source,
                    }));
                }
            };
            if self.line_no <= self.skip_lines {
                continue;
            }
            self.scanned += 1;
            if let Some(token) = self.pattern.first_token(&line) {
                self.found += 1;
                return Some(Ok(Operator::from_token(token)));
            }
        }
    }
}

/// Opens `path` and returns the operator sequence over its contents.
pub fn open(path: &Path, skip_lines: usize) -> Result<Operators<BufReader<File>>, ExtractError> {
    let file = File::open(path).map_err(|source| ExtractError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!("scanning {} (skipping {} lines)", path.display(), skip_lines);
    Operators::new(BufReader::new(file), skip_lines)
}
