use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::state::{AppState, PlotKind};

// ---------------------------------------------------------------------------
// Left side panel – structural summary (the df.info() view)
// ---------------------------------------------------------------------------

/// Render the left panel: column names, dtypes, non-null counts.
pub fn side_panel(ui: &mut Ui, state: &AppState) {
    ui.heading("Columns");
    ui.separator();

    let dataset = match &state.dataset {
        Some(ds) => ds,
        None => {
            ui.label("No dataset loaded.");
            return;
        }
    };

    ui.label(format!(
        "{} entries, {} columns",
        dataset.len(),
        dataset.column_names.len()
    ));
    ui.add_space(4.0);

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            egui::Grid::new("column_info")
                .striped(true)
                .num_columns(3)
                .show(ui, |ui: &mut Ui| {
                    ui.strong("column");
                    ui.strong("non-null");
                    ui.strong("dtype");
                    ui.end_row();

                    for col in &dataset.column_names {
                        ui.label(col);
                        ui.label(format!("{}", dataset.non_null_count(col)));
                        ui.label(dataset.dtype(col));
                        ui.end_row();
                    }
                });
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / plot selector.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        for kind in PlotKind::ALL {
            if ui
                .selectable_label(state.active_plot == kind, kind.label())
                .clicked()
            {
                state.active_plot = kind;
            }
        }

        ui.separator();

        if let Some(ds) = &state.dataset {
            ui.label(format!("{} records loaded", ds.len()));
        }

        if let Some(msg) = &state.status_message {
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open student performance data")
        .add_filter("Supported files", &["csv", "json", "parquet", "pq"])
        .add_filter("CSV", &["csv"])
        .add_filter("JSON", &["json"])
        .add_filter("Parquet", &["parquet", "pq"])
        .pick_file();

    if let Some(path) = file {
        match crate::eda::run(&path) {
            Ok((dataset, report)) => {
                log::info!(
                    "Analysed {} records with columns {:?}",
                    dataset.len(),
                    dataset.column_names
                );
                state.set_analysis(dataset, report);
            }
            Err(e) => {
                log::error!("Failed to analyse file: {e:#}");
                state.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }
}
