//! Text snapshots of the lattice.
//!
//! A block is N lines of N space-separated spins followed by a line `END`.
//! Blocks from every run of a scan are appended to the same sink.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::{IsingError, IsingResult};
use crate::lattice::Lattice;

/// Terminator line written after each block.
pub const END_MARKER: &str = "END";

pub struct SnapshotWriter<W: Write> {
    inner: W,
    label: PathBuf,
    blocks: usize,
}

impl SnapshotWriter<BufWriter<File>> {
    /// Create (or truncate) the snapshot file at `path`.
    pub fn create(path: impl AsRef<Path>) -> IsingResult<Self> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|e| IsingError::io(path, e))?;
        Ok(Self::with_label(BufWriter::new(file), path))
    }
}

impl SnapshotWriter<io::Sink> {
    /// Writer that discards every block.
    pub fn sink() -> Self {
        Self::with_label(io::sink(), "<discarded>")
    }
}

impl SnapshotWriter<Vec<u8>> {
    /// In-memory writer, used to render a run before it is merged into a
    /// shared artifact.
    pub fn buffer() -> Self {
        Self::with_label(Vec::new(), "<memory>")
    }
}

impl<W: Write> SnapshotWriter<W> {
    pub fn new(inner: W) -> Self {
        Self::with_label(inner, "<stream>")
    }

    /// Wrap `inner`, reporting errors against `label`.
    pub fn with_label(inner: W, label: impl Into<PathBuf>) -> Self {
        Self { inner, label: label.into(), blocks: 0 }
    }

    /// Append one block for the current lattice configuration.
    pub fn write_lattice(&mut self, lattice: &Lattice) -> IsingResult<()> {
        self.write_block(lattice).map_err(|e| IsingError::io(&self.label, e))?;
        self.blocks += 1;
        Ok(())
    }

    fn write_block(&mut self, lattice: &Lattice) -> io::Result<()> {
        for row in lattice.rows() {
            let mut first = true;
            for &s in row {
                if !first {
                    self.inner.write_all(b" ")?;
                }
                first = false;
                write!(self.inner, "{s}")?;
            }
            self.inner.write_all(b"\n")?;
        }
        writeln!(self.inner, "{END_MARKER}")
    }

    /// Copy already rendered blocks into this writer.
    pub fn append_rendered(&mut self, rendered: SnapshotWriter<Vec<u8>>) -> IsingResult<()> {
        let blocks = rendered.blocks;
        self.inner
            .write_all(&rendered.inner)
            .map_err(|e| IsingError::io(&self.label, e))?;
        self.blocks += blocks;
        Ok(())
    }

    /// Blocks written so far.
    pub fn blocks(&self) -> usize {
        self.blocks
    }

    pub fn label(&self) -> &Path {
        &self.label
    }

    pub fn flush(&mut self) -> IsingResult<()> {
        self.inner.flush().map_err(|e| IsingError::io(&self.label, e))
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}
