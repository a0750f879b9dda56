//! The `ReportWriter` trait and its backends.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::info;

use crate::{OutputResult, ReportKind};

/// Persists rendered reports.
///
/// Each call is independent: a failed write must leave previously written
/// reports intact.
pub trait ReportWriter {
    fn write_report(&mut self, kind: ReportKind, contents: &str) -> OutputResult<()>;
}

// ── Directory backend ─────────────────────────────────────────────────────────

/// Writes each report to `<dir>/<kind.file_name()>`.
pub struct DirReportWriter {
    dir: PathBuf,
}

impl DirReportWriter {
    /// Create `dir` (and parents) if needed.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        std::fs::create_dir_all(dir)?;
        Ok(Self { dir: dir.to_path_buf() })
    }

    pub fn path_of(&self, kind: ReportKind) -> PathBuf {
        self.dir.join(kind.file_name())
    }
}

impl ReportWriter for DirReportWriter {
    fn write_report(&mut self, kind: ReportKind, contents: &str) -> OutputResult<()> {
        let path = self.path_of(kind);
        let mut out = BufWriter::new(File::create(&path)?);
        out.write_all(contents.as_bytes())?;
        out.flush()?;
        info!(path = %path.display(), "output written");
        Ok(())
    }
}

// ── In-memory backend ─────────────────────────────────────────────────────────

/// Keeps reports in memory, e.g. for tests or for serving them directly.
#[derive(Debug, Default)]
pub struct MemoryReportWriter {
    pub reports: BTreeMap<ReportKind, String>,
}

impl MemoryReportWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, kind: ReportKind) -> Option<&str> {
        self.reports.get(&kind).map(String::as_str)
    }
}

impl ReportWriter for MemoryReportWriter {
    fn write_report(&mut self, kind: ReportKind, contents: &str) -> OutputResult<()> {
        self.reports.insert(kind, contents.to_owned());
        Ok(())
    }
}
