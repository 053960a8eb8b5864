// src/export.rs
//
// One export invocation: load page -> scan cards -> build CSV -> deliver file
// -> offer the follow-up link. Everything that talks to the user goes through
// the `Dialogs` port; the file goes through `Download`.

use std::io::{self, Read};
use std::path::PathBuf;

use crate::config::consts::*;
use crate::config::options::ExportOptions;
use crate::csv::to_export_string;
use crate::error::ExportError;
use crate::specs::channels::{self, ChannelRecord};

/// Where the finished CSV goes.
pub trait Download {
    /// Store `contents` under `file_name`; returns the final location.
    fn save(&mut self, file_name: &str, contents: &str) -> Result<PathBuf, ExportError>;
}

/// User-facing messages. Frontends decide how to show them.
pub trait Dialogs {
    fn alert(&mut self, msg: &str);

    /// Ask `prompt`; open `url` in a browser if the user agrees.
    fn confirm_open(&mut self, prompt: &str, url: &str);
}

/// Where the saved listing page comes from.
#[derive(Clone, Debug)]
pub enum PageSource {
    File(PathBuf),
    Stdin,
    Inline(String),
}

impl PageSource {
    /// Page text. Bytes that are not UTF-8 become U+FFFD instead of failing the export.
    pub fn read(&self) -> io::Result<String> {
        let bytes = match self {
            PageSource::File(p) => std::fs::read(p)?,
            PageSource::Stdin => {
                let mut buf = Vec::new();
                io::stdin().read_to_end(&mut buf)?;
                buf
            }
            PageSource::Inline(html) => return Ok(html.clone()),
        };
        Ok(decode_lossy(bytes))
    }

    pub fn describe(&self) -> String {
        match self {
            PageSource::File(p) => p.display().to_string(),
            PageSource::Stdin => s!("<stdin>"),
            PageSource::Inline(html) => format!("<inline, {} bytes>", html.len()),
        }
    }
}

fn decode_lossy(bytes: Vec<u8>) -> String {
    match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => {
            logw!("Export: page is not valid UTF-8, undecodable bytes replaced");
            String::from_utf8_lossy(e.as_bytes()).into_owned()
        }
    }
}

#[derive(Debug)]
pub enum ExportOutcome {
    Exported { path: PathBuf, records: Vec<ChannelRecord> },
    NoChannels,
    Failed(String),
}

impl ExportOutcome {
    pub fn is_exported(&self) -> bool {
        matches!(self, ExportOutcome::Exported { .. })
    }
}

/// Full CSV text for a set of records: preamble, header, rows.
pub fn build_csv(records: &[ChannelRecord]) -> String {
    let rows: Vec<Vec<String>> = records.iter().map(ChannelRecord::to_row).collect();
    to_export_string(CSV_PREAMBLE, CSV_HEADERS, &rows, CSV_SEP)
}

pub fn failure_message(err: &ExportError) -> String {
    join!(MSG_ERROR_PREFIX, &err.to_string(), MSG_ERROR_HINT)
}

/// Steps 1-4. Nothing is delivered unless every card was read and the CSV built.
pub fn run_export(
    source: &PageSource,
    file_name: &str,
    download: &mut dyn Download,
) -> Result<(PathBuf, Vec<ChannelRecord>), ExportError> {
    let html = source.read()?;
    let records = channels::scan_html(&html)?;
    if records.is_empty() {
        return Err(ExportError::NoChannels);
    }
    let csv = build_csv(&records);
    let path = download.save(file_name, &csv)?;
    Ok((path, records))
}

/// Top-level export. Never returns an error: failures become alerts.
pub fn export_channels(
    source: &PageSource,
    options: &ExportOptions,
    download: &mut dyn Download,
    dialogs: &mut dyn Dialogs,
) -> ExportOutcome {
    logf!("Export: start ({})", source.describe());

    match run_export(source, &options.file_name(), download) {
        Ok((path, records)) => {
            logf!("Export: {} channel(s) -> {}", records.len(), path.display());
            if options.follow_up {
                dialogs.confirm_open(MSG_EXPORTED, FOLLOW_UP_URL);
            }
            ExportOutcome::Exported { path, records }
        }
        Err(ExportError::NoChannels) => {
            logw!("Export: no channel cards in {}", source.describe());
            dialogs.alert(MSG_NO_CHANNELS);
            ExportOutcome::NoChannels
        }
        Err(e) => {
            loge!("Export: failed: {e}");
            let msg = failure_message(&e);
            dialogs.alert(&msg);
            ExportOutcome::Failed(msg)
        }
    }
}
