// src/file.rs

use std::{
    fs::{self, File},
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};

use serde::Serialize;

use crate::error::Result;

/// JSON array written one record at a time.
///
/// `[` goes out on creation, `, ` before every record but the first, `]` on
/// [`finish`](Self::finish). A writer finished with no records leaves `[]`.
pub struct JsonArrayWriter<W: Write> {
    out: W,
    count: usize,
}

impl JsonArrayWriter<BufWriter<File>> {
    /// Create/truncate `path`, making its parent directory if needed.
    pub fn create(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                ensure_directory(parent)?;
            }
        }
        let file = File::create(path)?; // truncate/overwrite
        Self::new(BufWriter::new(file))
    }
}

impl<W: Write> JsonArrayWriter<W> {
    pub fn new(mut out: W) -> Result<Self> {
        out.write_all(b"[")?;
        Ok(Self { out, count: 0 })
    }

    pub fn push<T: Serialize>(&mut self, record: &T) -> Result<()> {
        if self.count > 0 {
            self.out.write_all(b", ")?;
        }
        serde_json::to_writer(&mut self.out, record)?;
        self.out.write_all(b"\n")?;
        self.out.flush()?;
        self.count += 1;
        Ok(())
    }

    pub fn count(&self) -> usize {
        self.count
    }

    /// Close the array and hand back the sink.
    pub fn finish(mut self) -> Result<W> {
        self.out.write_all(b"]")?;
        self.out.flush()?;
        Ok(self.out)
    }
}

pub fn ensure_directory(dir: &Path) -> io::Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(io::Error::new(
            io::ErrorKind::AlreadyExists,
            format!("Path exists but is not a directory: {}", dir.display()),
        ));
    }
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }
    Ok(())
}

pub fn normalize_separators(p: &str) -> String {
    let sep = std::path::MAIN_SEPARATOR;
    p.chars().map(|c| if c == '/' || c == '\\' { sep } else { c }).collect()
}

pub fn normalize_dir_path(p: &str) -> PathBuf {
    PathBuf::from(normalize_separators(p.trim()))
}
