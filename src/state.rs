use std::path::{Path, PathBuf};

use crate::color::ColorMap;
use crate::data::pipeline::{self, Artifact, PresentationMode, TableGrid};
use crate::data::registry::DatasetRegistry;
use crate::data::source::DataSource;
use crate::views::{ViewSpec, DASHBOARD_VIEWS};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state: the immutable dataset registry plus one transient
/// selection per view.  Artifacts are recomputed from these on every frame,
/// never cached.
pub struct AppState {
    registry: DatasetRegistry,
    /// Current dropdown value per view, parallel to [`DASHBOARD_VIEWS`].
    pub selections: Vec<String>,
    /// Stable per-view colour maps, keyed by the dataset's full group
    /// domain so colours survive filter changes.
    color_maps: Vec<ColorMap>,
    /// Status / error message shown in the top bar.
    pub status_message: Option<String>,
    /// Database the registry was loaded from.
    pub db_path: PathBuf,
}

impl AppState {
    /// Build state from a freshly loaded registry.
    pub fn new(registry: DatasetRegistry, db_path: PathBuf) -> Self {
        let selections = DASHBOARD_VIEWS
            .iter()
            .map(|view| seed_selection(&registry, view))
            .collect();
        let color_maps = DASHBOARD_VIEWS
            .iter()
            .map(|view| build_color_map(&registry, view))
            .collect();

        Self {
            registry,
            selections,
            color_maps,
            status_message: None,
            db_path,
        }
    }

    pub fn registry(&self) -> &DatasetRegistry {
        &self.registry
    }

    /// Selector options for one view, first-seen order from the query.
    pub fn options(&self, view: &ViewSpec) -> Vec<String> {
        self.registry
            .distinct_values(view.dataset, view.filter_column)
            .iter()
            .map(|v| v.to_string())
            .collect()
    }

    /// Recompute the artifact for one view from its current selection.
    pub fn artifact(&self, index: usize) -> Artifact {
        let view = &DASHBOARD_VIEWS[index];
        let Some(dataset) = self.registry.get(view.dataset) else {
            // Registry is loaded from the same static table the views
            // reference; a miss here is a config bug, not user error.
            log::warn!("view '{}' refers to unknown dataset '{}'", view.id, view.dataset);
            return empty_artifact(view.mode);
        };
        pipeline::render(dataset, view.filter_column, &self.selections[index], view.mode)
    }

    pub fn color_map(&self, index: usize) -> &ColorMap {
        &self.color_maps[index]
    }

    /// Replace the registry with one loaded from another database file.
    /// On failure the current registry is kept and the error surfaced in
    /// the status line.
    pub fn reload_from(&mut self, path: &Path) {
        let loaded = DataSource::open(path).and_then(|src| DatasetRegistry::load_all(&src));
        match loaded {
            Ok(registry) => {
                log::info!(
                    "reloaded {} datasets from {}",
                    registry.len(),
                    path.display()
                );
                let previous: Vec<String> = std::mem::take(&mut self.selections);
                *self = AppState::new(registry, path.to_path_buf());
                // Keep selections that are still in the new data's domain.
                for (i, (view, prev)) in DASHBOARD_VIEWS.iter().zip(previous).enumerate() {
                    if self.options(view).contains(&prev) {
                        self.selections[i] = prev;
                    }
                }
            }
            Err(e) => {
                log::error!("failed to reload from {}: {e}", path.display());
                self.status_message = Some(format!("Error: {e}"));
            }
        }
    }
}

/// Initial dropdown value: the view's declared default when present in the
/// data, otherwise the first option, otherwise empty.
fn seed_selection(registry: &DatasetRegistry, view: &ViewSpec) -> String {
    let options = registry.distinct_values(view.dataset, view.filter_column);
    if options.iter().any(|v| v.matches(view.default_value)) {
        return view.default_value.to_string();
    }
    options.first().map(|v| v.to_string()).unwrap_or_default()
}

fn empty_artifact(mode: PresentationMode) -> Artifact {
    match mode {
        PresentationMode::TrendLine { .. } => Artifact::TrendLine {
            x_labels: Vec::new(),
            series: Vec::new(),
        },
        PresentationMode::ProportionPie { .. } => Artifact::ProportionPie { slices: Vec::new() },
        PresentationMode::TabularSnapshot => Artifact::TabularSnapshot(TableGrid {
            columns: Vec::new(),
            kinds: Vec::new(),
            rows: Vec::new(),
        }),
    }
}

/// Colour map over the column that names series (trend) or slices (pie).
fn build_color_map(registry: &DatasetRegistry, view: &ViewSpec) -> ColorMap {
    let column = match view.mode {
        PresentationMode::TrendLine { series, .. } => series,
        PresentationMode::ProportionPie { label, .. } => label,
        PresentationMode::TabularSnapshot => view.filter_column,
    };
    let labels: Vec<String> = registry
        .distinct_values(view.dataset, column)
        .iter()
        .map(|v| v.to_string())
        .collect();
    ColorMap::new(&labels)
}
