//! Snapshot recording as JSON lines.
//!
//! Each line is one serialized `GameSnapshot`. A snapshot identical to the
//! previously written one is skipped, so a recording holds one line per
//! visible state change.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use crate::core::GameSnapshot;

pub struct SnapshotRecorder<W: Write> {
    out: W,
    last: Option<GameSnapshot>,
    written: usize,
}

impl SnapshotRecorder<BufWriter<File>> {
    /// Create (truncate) a recording file
    pub fn create(path: &Path) -> Result<Self> {
        let file = File::create(path)
            .with_context(|| format!("creating recording {}", path.display()))?;
        Ok(Self::new(BufWriter::new(file)))
    }

    /// Recorder for `BLOCKFALL_RECORD_PATH`, if set
    pub fn from_env() -> Result<Option<Self>> {
        match std::env::var_os("BLOCKFALL_RECORD_PATH") {
            Some(path) if !path.is_empty() => Self::create(Path::new(&path)).map(Some),
            _ => Ok(None),
        }
    }
}

impl<W: Write> SnapshotRecorder<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            last: None,
            written: 0,
        }
    }

    /// Write `snapshot` unless it equals the last one. Returns whether a line
    /// was written.
    pub fn record(&mut self, snapshot: &GameSnapshot) -> Result<bool> {
        if self.last.as_ref() == Some(snapshot) {
            return Ok(false);
        }

        serde_json::to_writer(&mut self.out, snapshot)?;
        self.out.write_all(b"\n")?;
        self.written += 1;

        match &mut self.last {
            Some(last) => last.clone_from(snapshot),
            None => self.last = Some(snapshot.clone()),
        }
        Ok(true)
    }

    pub fn written(&self) -> usize {
        self.written
    }

    pub fn flush(&mut self) -> Result<()> {
        self.out.flush()?;
        debug!(lines = self.written, "recording flushed");
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
