//! Run accumulation state machine
//!
//! Code points are fed one at a time in decode order. Matching code points
//! extend the pending run; the first non-matching code point closes it, and
//! a closed run of at least `min_run_length` code points is emitted with the
//! byte cursor as it stands *after* that non-matching code point.
//!
//! A run that is still open when the stream ends is dropped under
//! [`TrailingRunPolicy::Discard`]. Only [`TrailingRunPolicy::Flush`] gives it
//! a length check at end of stream.

use crate::category::CategoryPredicate;
use crate::config::{Configuration, TrailingRunPolicy};
use crate::decoder::CodePoint;
use crate::emitter::Emitter;
use crate::error::Result;

/// Bytes consumed from the stream so far
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct ByteCursor(u64);

impl ByteCursor {
    pub fn new() -> Self {
        Self(0)
    }

    #[inline]
    pub fn advance(&mut self, width: usize) {
        self.0 += width as u64;
    }

    pub fn position(self) -> u64 {
        self.0
    }
}

/// Pending sequence of matching code points
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Run {
    text: String,
    /// Length in code points, not bytes
    len: usize,
}

impl Run {
    fn starting_with(ch: char) -> Self {
        let mut text = String::new();
        text.push(ch);
        Self { text, len: 1 }
    }

    fn push(&mut self, ch: char) {
        self.text.push(ch);
        self.len += 1;
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// Accumulator state
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RunState {
    /// No pending run
    #[default]
    Idle,
    /// One pending run of length >= 1
    Accumulating(Run),
}

/// Counters describing a finished scan
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScanSummary {
    pub bytes_consumed: u64,
    pub code_points: u64,
    pub runs_emitted: u64,
    /// An open run was dropped at end of stream
    pub trailing_run_discarded: bool,
}

/// Delimits runs with a [`CategoryPredicate`] and hands qualifying ones to an [`Emitter`]
pub struct RunAccumulator<'a, E: Emitter + ?Sized> {
    predicate: &'a CategoryPredicate,
    min_run_length: usize,
    trailing_run: TrailingRunPolicy,
    emitter: &'a mut E,
    cursor: ByteCursor,
    state: RunState,
    code_points: u64,
    runs_emitted: u64,
}

impl<'a, E: Emitter + ?Sized> RunAccumulator<'a, E> {
    pub fn new(
        predicate: &'a CategoryPredicate,
        config: &Configuration,
        emitter: &'a mut E,
    ) -> Self {
        Self {
            predicate,
            min_run_length: config.min_run_length(),
            trailing_run: config.trailing_run(),
            emitter,
            cursor: ByteCursor::new(),
            state: RunState::Idle,
            code_points: 0,
            runs_emitted: 0,
        }
    }

    pub fn state(&self) -> &RunState {
        &self.state
    }

    pub fn cursor(&self) -> ByteCursor {
        self.cursor
    }

    /// Advance the cursor past `code_point`, then classify it
    pub fn feed(&mut self, code_point: CodePoint) -> Result<()> {
        self.cursor.advance(code_point.width);
        self.code_points += 1;

        if self.predicate.matches(code_point.ch) {
            match &mut self.state {
                RunState::Idle => {
                    self.state = RunState::Accumulating(Run::starting_with(code_point.ch));
                }
                RunState::Accumulating(run) => run.push(code_point.ch),
            }
        } else if let RunState::Accumulating(run) = std::mem::take(&mut self.state) {
            self.close(run)?;
        }

        Ok(())
    }

    /// End of stream; applies the trailing run policy to any open run
    pub fn finish(mut self) -> Result<ScanSummary> {
        let mut trailing_run_discarded = false;

        if let RunState::Accumulating(run) = std::mem::take(&mut self.state) {
            match self.trailing_run {
                TrailingRunPolicy::Discard => {
                    log::trace!(
                        "dropping open run of {} code points at end of stream",
                        run.len()
                    );
                    trailing_run_discarded = true;
                }
                TrailingRunPolicy::Flush => self.close(run)?,
            }
        }

        Ok(ScanSummary {
            bytes_consumed: self.cursor.position(),
            code_points: self.code_points,
            runs_emitted: self.runs_emitted,
            trailing_run_discarded,
        })
    }

    fn close(&mut self, run: Run) -> Result<()> {
        if run.len() >= self.min_run_length {
            self.emitter.emit(run.text(), self.cursor.position())?;
            self.runs_emitted += 1;
        }
        Ok(())
    }
}
