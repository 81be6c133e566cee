//! Branch Trace Reader.
//!
//! A trace is a sequence of whitespace-separated `<hex-address> <outcome>` pairs in
//! program order, for example:
//!
//! ```text
//! 7f3a10 1
//! 0x7f3a24 0
//! ```
//!
//! Pairs may share a line or be split across lines; only token order matters. The
//! address may carry a `0x` prefix. The outcome must be `0` (not taken) or `1` (taken).
//! The reader streams events and never holds the whole trace in memory.

use std::collections::VecDeque;
use std::io::{BufRead, Cursor};

use crate::common::error::TraceError;

/// One observed branch: where it was and which way it went.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TraceEvent {
    /// Instruction address of the branch.
    pub address: u64,
    /// True if the branch was taken.
    pub taken: bool,
}

impl TraceEvent {
    /// Creates a new trace event.
    pub const fn new(address: u64, taken: bool) -> Self {
        Self { address, taken }
    }
}

/// Parses a hexadecimal address token, with or without a `0x` prefix.
fn parse_address(line: usize, token: &str) -> Result<u64, TraceError> {
    let digits = token
        .strip_prefix("0x")
        .or_else(|| token.strip_prefix("0X"))
        .unwrap_or(token);
    u64::from_str_radix(digits, 16).map_err(|_| TraceError::InvalidAddress {
        line,
        token: token.to_string(),
    })
}

/// Parses an outcome token; only `0` and `1` are accepted.
fn parse_outcome(line: usize, token: &str) -> Result<bool, TraceError> {
    match token {
        "0" => Ok(false),
        "1" => Ok(true),
        _ => Err(TraceError::InvalidOutcome {
            line,
            token: token.to_string(),
        }),
    }
}

/// Streaming iterator over the events of a trace.
///
/// Yields `Err` at most once; after the first error the iterator is exhausted,
/// since later events could no longer be trusted to be in program order.
#[derive(Debug)]
pub struct TraceReader<R> {
    reader: R,
    /// Tokens of the current line not yet consumed, with their line number.
    pending: VecDeque<(usize, String)>,
    /// Scratch buffer reused for each line read.
    buf: String,
    /// 1-based number of the last line read.
    line: usize,
    done: bool,
}

impl<R: BufRead> TraceReader<R> {
    /// Wraps a buffered reader.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
            buf: String::new(),
            line: 0,
            done: false,
        }
    }

    /// Number of lines read so far.
    pub const fn lines_read(&self) -> usize {
        self.line
    }

    /// Returns the next token and its line number, reading more lines as needed.
    fn next_token(&mut self) -> Result<Option<(usize, String)>, TraceError> {
        while self.pending.is_empty() {
            self.buf.clear();
            if self.reader.read_line(&mut self.buf)? == 0 {
                return Ok(None);
            }
            self.line += 1;
            let line = self.line;
            self.pending
                .extend(self.buf.split_whitespace().map(|t| (line, t.to_string())));
        }
        Ok(self.pending.pop_front())
    }

    /// Reads one `<address> <outcome>` pair.
    fn next_event(&mut self) -> Result<Option<TraceEvent>, TraceError> {
        let Some((addr_line, addr_token)) = self.next_token()? else {
            return Ok(None);
        };
        let address = parse_address(addr_line, &addr_token)?;

        let Some((line, outcome_token)) = self.next_token()? else {
            return Err(TraceError::MissingOutcome { line: addr_line });
        };
        let taken = parse_outcome(line, &outcome_token)?;

        Ok(Some(TraceEvent { address, taken }))
    }
}

impl<R: BufRead> Iterator for TraceReader<R> {
    type Item = Result<TraceEvent, TraceError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.next_event() {
            Ok(Some(event)) => Some(Ok(event)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

impl<R: BufRead> std::iter::FusedIterator for TraceReader<R> {}

/// Parses a complete trace held in memory.
///
/// # Errors
///
/// Returns the first [`TraceError`] encountered.
pub fn parse_trace(text: &str) -> Result<Vec<TraceEvent>, TraceError> {
    TraceReader::new(Cursor::new(text)).collect()
}
