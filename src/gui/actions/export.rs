// src/gui/actions/export.rs
use std::path::PathBuf;

use crate::{
    export::{export_channels, ExportOutcome, PageSource},
    file::FileDownload,
    gui::{app::App, notices::ModalQueue},
};

pub fn export(app: &mut App) {
    let input = app.state.gui.input_path.trim().to_string();
    if input.is_empty() {
        app.status("Choose a saved listing page first");
        logd!("Export: Clicked, but there's no input page");
        return;
    }

    // Map the typed output path into ExportOptions before using it.
    app.state.options.export.set_path(&app.state.gui.out_path_text);
    let export = app.state.options.export.clone();
    logf!("Export: Out path → {}", export.out_path().display());

    let source = PageSource::File(PathBuf::from(&input));
    let mut download = FileDownload::new(export.out_dir());
    let mut dialogs = ModalQueue::default();

    let outcome = export_channels(&source, &export, &mut download, &mut dialogs);
    app.modals.append(&mut dialogs.modals);

    match outcome {
        ExportOutcome::Exported { path, records } => {
            app.status(format!("Exported {} channel(s) to {}", records.len(), path.display()));
            app.records = records;
        }
        ExportOutcome::NoChannels => {
            app.status("No channels found");
            app.records.clear();
        }
        ExportOutcome::Failed(_) => {
            app.status("Export failed");
        }
    }
    app.state.gui.out_path_text = export.out_path().to_string_lossy().into_owned();
}
