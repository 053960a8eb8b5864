// src/cli.rs
//
// Terminal frontend: `export` runs the exporter once, `timer` runs one
// countdown to completion. Dialogs and notifications go to stdin/stdout.

use std::error::Error;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::{Command, Stdio};
use std::sync::mpsc::{self, Receiver};
use std::thread;

use clap::{Parser, Subcommand};

use crate::config::options::AppOptions;
use crate::export::{export_channels, Dialogs, ExportOutcome, PageSource};
use crate::file::FileDownload;
use crate::timer::{
    Notice, Notifier, Permission, PhaseKind, Pomodoro, Ports, StatusClass, SystemBeeper,
    SystemClock, TimerView,
};

#[derive(Parser, Debug)]
#[command(name = "cli", version, about = "TGStat channel exporter and Pomodoro timer")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Cmd,
}

#[derive(Subcommand, Debug)]
pub enum Cmd {
    /// Export channel cards from a saved TGStat listing page to CSV
    Export {
        /// Saved HTML page; `-` or nothing reads stdin
        #[arg(short, long)]
        input: Option<String>,

        /// Output directory
        #[arg(short, long)]
        out: Option<PathBuf>,

        /// Output file name
        #[arg(long)]
        file_name: Option<String>,

        /// Don't ask about the follow-up channel after exporting
        #[arg(long)]
        no_prompt: bool,
    },
    /// Run one countdown in the terminal
    Timer {
        /// Duration in minutes (1-180)
        #[arg(short, long)]
        minutes: Option<i64>,
    },
}

pub fn run() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    let mut options = AppOptions::default();

    match cli.command {
        Cmd::Export { input, out, file_name, no_prompt } => {
            if let Some(dir) = out {
                options.export.set_dir(dir);
            }
            if let Some(name) = file_name {
                options.export.set_file_name(&name);
            }
            options.export.follow_up = !no_prompt;
            let source = match input.as_deref() {
                None | Some("-") => PageSource::Stdin,
                Some(p) => PageSource::File(PathBuf::from(p)),
            };
            export(&source, &options)
        }
        Cmd::Timer { minutes } => countdown(&options, minutes),
    }
}

fn export(source: &PageSource, options: &AppOptions) -> Result<(), Box<dyn Error>> {
    let mut download = FileDownload::new(options.export.out_dir());
    let mut dialogs = TerminalDialogs;

    match export_channels(source, &options.export, &mut download, &mut dialogs) {
        ExportOutcome::Exported { path, records } => {
            println!("{} channel(s) -> {}", records.len(), path.display());
            Ok(())
        }
        ExportOutcome::NoChannels => Err("no channel cards found".into()),
        ExportOutcome::Failed(msg) => Err(msg.into()),
    }
}

fn countdown(options: &AppOptions, minutes: Option<i64>) -> Result<(), Box<dyn Error>> {
    let ports = Ports {
        clock: Box::new(SystemClock),
        notifier: Box::new(BellNotifier),
        beeper: Box::new(SystemBeeper::new()),
    };
    let mut timer = Pomodoro::new(TerminalView::default(), options.timer.clone(), ports);

    if let Some(m) = minutes {
        timer.set_custom_duration(m)?;
    }

    timer.start();
    while timer.phase() != PhaseKind::Completed {
        if let Some(wait) = timer.next_tick_in() {
            thread::sleep(wait);
        }
        timer.advance();
    }
    println!();
    Ok(())
}

/* ---------------- Terminal ports ---------------- */

struct TerminalDialogs;

impl Dialogs for TerminalDialogs {
    fn alert(&mut self, msg: &str) {
        eprintln!("{msg}");
    }

    fn confirm_open(&mut self, prompt: &str, url: &str) {
        print!("{prompt} [y/N] ");
        let _ = io::stdout().flush();

        let mut line = s!();
        if io::stdin().lock().read_line(&mut line).is_err() {
            return;
        }
        if matches!(line.trim().to_lowercase().as_str(), "y" | "yes" | "д" | "да") {
            if let Err(e) = open_in_browser(url) {
                logw!("CLI: could not open {url}: {e}");
                eprintln!("Open {url} manually");
            }
        }
    }
}

fn open_in_browser(url: &str) -> io::Result<()> {
    let mut cmd = if cfg!(target_os = "windows") {
        let mut c = Command::new("cmd");
        c.args(["/C", "start", "", url]);
        c
    } else if cfg!(target_os = "macos") {
        let mut c = Command::new("open");
        c.arg(url);
        c
    } else {
        let mut c = Command::new("xdg-open");
        c.arg(url);
        c
    };
    cmd.stdout(Stdio::null()).stderr(Stdio::null()).spawn()?;
    Ok(())
}

/// Redraws one status line in place.
#[derive(Default)]
struct TerminalView {
    time: String,
    status: String,
}

impl TerminalView {
    fn redraw(&self) {
        print!("\r{}  {:<24}", self.time, self.status);
        let _ = io::stdout().flush();
    }
}

impl TimerView for TerminalView {
    fn show_time(&mut self, text: &str) {
        self.time = s!(text);
        self.redraw();
    }

    fn show_progress(&mut self, _percent: f32) {}

    fn show_status(&mut self, text: &str, _class: StatusClass) {
        self.status = s!(text);
        self.redraw();
    }

    fn set_controls(&mut self, _start: bool, _pause: bool) {}

    fn set_title(&mut self, _title: &str) {}

    fn set_custom_minutes(&mut self, _minutes: u32) {}

    fn alert(&mut self, msg: &str) {
        eprintln!("{msg}");
    }

    fn pulse(&mut self) {}
}

/// A terminal can always ring; permission is implicit.
struct BellNotifier;

impl Notifier for BellNotifier {
    fn permission(&self) -> Permission { Permission::Granted }

    fn request_permission(&mut self) -> Receiver<Permission> {
        let (tx, rx) = mpsc::channel();
        let _ = tx.send(Permission::Granted);
        rx
    }

    fn show(&mut self, notice: &Notice) {
        println!("\n\x07{}: {}", notice.title, notice.body);
    }
}
