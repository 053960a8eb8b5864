// src/file.rs

use std::{
    fs::{self, File},
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};

use crate::error::ExportError;
use crate::export::Download;

/// Saves downloads as files in one directory (created on demand).
pub struct FileDownload {
    dir: PathBuf,
}

impl FileDownload {
    pub fn new<P: Into<PathBuf>>(dir: P) -> Self {
        Self { dir: PathBuf::from(normalize_separators(&dir.into().to_string_lossy())) }
    }
}

impl Download for FileDownload {
    fn save(&mut self, file_name: &str, contents: &str) -> Result<PathBuf, ExportError> {
        if !self.dir.as_os_str().is_empty() {
            ensure_directory(&self.dir)?;
        }
        let path = self.dir.join(file_name);
        write_atomic(&path, contents.as_bytes())?;
        logf!("Export: wrote {} bytes to {}", contents.len(), path.display());
        Ok(path)
    }
}

/// Write to `<path>.part`, then rename over `path`.
/// A failed write leaves the previous file (or nothing) in place.
pub fn write_atomic(path: &Path, bytes: &[u8]) -> io::Result<()> {
    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".part");
    let tmp = PathBuf::from(tmp);

    let result = (|| -> io::Result<()> {
        let mut out = BufWriter::new(File::create(&tmp)?);
        out.write_all(bytes)?;
        out.flush()?;
        drop(out);
        fs::rename(&tmp, path)
    })();

    if result.is_err() {
        let _ = fs::remove_file(&tmp);
    }
    result
}

pub fn normalize_separators(p: &str) -> String {
    let sep = std::path::MAIN_SEPARATOR;
    p.chars().map(|c| if c=='/'||c=='\\' { sep } else { c }).collect()
}

pub fn ensure_directory(dir: &Path) -> io::Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(io::Error::other(format!("Path exists but is not a directory: {}", dir.display())));
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}

pub fn looks_like_dir_hint(p: &Path) -> bool {
    let s = p.to_string_lossy();
    s.ends_with('/') || s.ends_with('\\')
}
