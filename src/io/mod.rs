//! IO module: GeoJSON input, SVG output, and atomic file writes.
//!
//! - `geojson` - FeatureCollection parsing and line extraction
//! - `svg` - flow map document rendering

pub mod geojson;
pub mod svg;

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use tempfile::NamedTempFile;

pub fn assert_not_stdout(path: &Path) -> Result<()> {
    if path == Path::new("-") {
        bail!("stdout is not supported; provide a real file path.");
    }
    Ok(())
}

/// Write-then-rename wrapper: the target only appears once the write is finalized.
pub struct PendingWrite {
    target: PathBuf,
    tmp: NamedTempFile,
}

pub fn open_for_big_write(target: &Path) -> Result<PendingWrite> {
    let parent = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent)
        .with_context(|| format!("create dir {}", parent.display()))?;
    let tmp = NamedTempFile::new_in(parent)
        .context("create temp file")?;

    Ok(PendingWrite { target: target.to_path_buf(), tmp })
}

impl Write for PendingWrite {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> { self.tmp.write(buf) }

    fn flush(&mut self) -> std::io::Result<()> { self.tmp.flush() }
}

pub fn finalize_big_write(mut pending: PendingWrite) -> Result<()> {
    pending.tmp.flush().context("flush temp file")?;
    pending.tmp.as_file().sync_all().ok(); // best-effort fsync file
    pending.tmp.persist(&pending.target)
        .with_context(|| format!("rename to {}", pending.target.display()))?;
    if let Some(dir) = pending.target.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        let _ = File::open(dir).and_then(|f| f.sync_all());
    }
    Ok(())
}
