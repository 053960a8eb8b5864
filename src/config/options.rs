// src/config/options.rs
use std::ffi::OsString;
use std::ops::RangeInclusive;
use std::path::{ Path, PathBuf };
use std::time::Duration;
use super::consts::*;

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct AppOptions {
    pub export: ExportOptions,
    pub timer: TimerOptions,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PageKind {
    Channels,
    Timer,
}

/* ---------------- Export ---------------- */

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    out_path: OutputPath,
    /// Ask to open the follow-up channel after a successful export.
    pub follow_up: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            out_path: OutputPath::default(),
            follow_up: true,
        }
    }
}

impl ExportOptions {
    pub fn out_path(&self) -> PathBuf {
        self.out_path.dir.join(&self.out_path.file_name)
    }

    pub fn out_dir(&self) -> &Path {
        &self.out_path.dir
    }

    pub fn file_name(&self) -> String {
        self.out_path.file_name.to_string_lossy().into_owned()
    }

    pub fn set_dir<P: Into<PathBuf>>(&mut self, dir: P) {
        self.out_path.dir = dir.into();
    }

    pub fn set_file_name(&mut self, name: &str) {
        let name = name.trim();
        if !name.is_empty() {
            self.out_path.file_name = OsString::from(name);
        }
    }

    /// Parse GUI text into dir + file name.
    /// A trailing separator (or an existing directory) keeps the current file name.
    pub fn set_path(&mut self, text: &str) {
        let s = text.trim();
        if s.is_empty() { return; }

        let p = Path::new(s);
        if crate::file::looks_like_dir_hint(p) || p.is_dir() {
            self.out_path.dir = p.to_path_buf();
            return;
        }
        if let Some(parent) = p.parent() {
            self.out_path.dir = parent.to_path_buf();
        }
        if let Some(name) = p.file_name() {
            self.out_path.file_name = name.to_os_string();
        }
    }

    pub fn is_default(&self) -> bool {
        self.out_path == OutputPath::default()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutputPath {
    dir: PathBuf,
    file_name: OsString,
}

impl Default for OutputPath {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(DEFAULT_OUT_DIR),
            file_name: OsString::from(EXPORT_FILE),
        }
    }
}

/* ---------------- Timer ---------------- */

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Preset {
    pub label: String,
    pub minutes: u32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TimerOptions {
    pub default_minutes: u32,
    pub presets: Vec<Preset>,
    pub custom_range: RangeInclusive<u32>,
    pub tick: Duration,
}

impl Default for TimerOptions {
    fn default() -> Self {
        Self {
            default_minutes: DEFAULT_MINUTES,
            presets: PRESET_MINUTES
                .iter()
                .map(|&m| Preset { label: format!("{m} мин"), minutes: m })
                .collect(),
            custom_range: CUSTOM_MIN_MINUTES..=CUSTOM_MAX_MINUTES,
            tick: Duration::from_millis(TICK_MS),
        }
    }
}
