//! One-call scanning of a byte stream

use crate::accumulator::{RunAccumulator, ScanSummary};
use crate::category::CategoryPredicate;
use crate::config::Configuration;
use crate::decoder::Decoder;
use crate::emitter::{CollectingEmitter, EmittedRun, Emitter, LineEmitter};
use crate::error::Result;
use std::io::{Read, Write};

/// A configuration with its predicate compiled, reusable across streams
///
/// Holds no per-stream state; every call to [`Scanner::scan`] starts from a
/// fresh cursor and an idle accumulator.
#[derive(Debug, Clone)]
pub struct Scanner {
    config: Configuration,
    predicate: CategoryPredicate,
}

impl Scanner {
    pub fn new(config: Configuration) -> Result<Self> {
        let predicate = CategoryPredicate::new(&config)?;
        Ok(Self { config, predicate })
    }

    pub fn config(&self) -> &Configuration {
        &self.config
    }

    /// Scan `reader` to exhaustion, writing one line per qualifying run to `sink`
    ///
    /// The scan never closes the stream; pass `&mut reader` to keep using it.
    pub fn scan<R: Read, W: Write + ?Sized>(
        &self,
        reader: R,
        sink: &mut W,
    ) -> Result<ScanSummary> {
        let mut emitter = LineEmitter::new(sink, self.config.emit_offsets());
        self.scan_with(reader, &mut emitter)
    }

    /// Scan `reader`, handing qualifying runs to a custom emitter
    pub fn scan_with<R: Read, E: Emitter + ?Sized>(
        &self,
        reader: R,
        emitter: &mut E,
    ) -> Result<ScanSummary> {
        let mut accumulator = RunAccumulator::new(&self.predicate, &self.config, emitter);
        for code_point in Decoder::new(reader) {
            accumulator.feed(code_point)?;
        }
        accumulator.finish()
    }
}

/// Scan a single stream with `config`
pub fn scan<R: Read, W: Write + ?Sized>(
    reader: R,
    config: &Configuration,
    sink: &mut W,
) -> Result<ScanSummary> {
    Scanner::new(config.clone())?.scan(reader, sink)
}

/// Scan an in-memory buffer and return the emitted runs
pub fn scan_bytes(bytes: &[u8], config: &Configuration) -> Result<Vec<EmittedRun>> {
    let mut emitter = CollectingEmitter::default();
    Scanner::new(config.clone())?.scan_with(bytes, &mut emitter)?;
    Ok(emitter.runs)
}
