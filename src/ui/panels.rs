use eframe::egui::{self, Color32, RichText, Ui};

use crate::state::AppState;
use crate::ui::plot;
use crate::views::DASHBOARD_VIEWS;

// ---------------------------------------------------------------------------
// View sections (central panel)
// ---------------------------------------------------------------------------

/// Render every dashboard view: heading, selector dropdown, output region.
pub fn view_sections(ui: &mut Ui, state: &mut AppState) {
    for (index, view) in DASHBOARD_VIEWS.iter().enumerate() {
        ui.add_space(12.0);
        ui.heading(view.title);

        let options = state.options(view);
        if options.is_empty() {
            ui.weak("No data loaded for this view.");
            continue;
        }

        let current = state.selections[index].clone();
        egui::ComboBox::from_id_salt(view.id)
            .selected_text(&current)
            .width(240.0)
            .show_ui(ui, |ui: &mut Ui| {
                for option in &options {
                    if ui.selectable_label(current == *option, option).clicked() {
                        state.selections[index] = option.clone();
                    }
                }
            });

        // Immediate mode: the artifact is recomputed from the selection each
        // frame, never cached.
        let artifact = state.artifact(index);
        plot::artifact(ui, view.id, &artifact, state.color_map(index));

        ui.add_space(8.0);
        ui.separator();
    }
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / status bar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_database_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        ui.label(format!(
            "{} datasets, {} rows — {}",
            state.registry().len(),
            state.registry().total_rows(),
            state.db_path.display()
        ));

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

/// Point the dashboard at a different statistics database.
pub fn open_database_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open statistics database")
        .add_filter("SQLite database", &["db", "sqlite", "sqlite3"])
        .pick_file();

    if let Some(path) = file {
        state.reload_from(&path);
    }
}
