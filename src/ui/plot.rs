use eframe::egui::{self, Sense, Stroke, Ui, Vec2};
use egui_plot::{Legend, Line, Plot, PlotPoints};

use crate::color::ColorMap;
use crate::data::model::ColumnKind;
use crate::data::pipeline::{Artifact, Series, Slice, TableGrid};

// ---------------------------------------------------------------------------
// Artifact rendering
// ---------------------------------------------------------------------------

/// Render one computed artifact into its output region.
pub fn artifact(ui: &mut Ui, id: &str, artifact: &Artifact, colors: &ColorMap) {
    if artifact.is_empty() {
        ui.weak("No rows match the current selection.");
        return;
    }
    match artifact {
        Artifact::TrendLine { x_labels, series } => trend_line(ui, id, x_labels, series, colors),
        Artifact::ProportionPie { slices } => proportion_pie(ui, slices, colors),
        Artifact::TabularSnapshot(grid) => tabular_snapshot(ui, id, grid),
    }
}

// ---------------------------------------------------------------------------
// Trend line
// ---------------------------------------------------------------------------

fn trend_line(ui: &mut Ui, id: &str, x_labels: &[String], series: &[Series], colors: &ColorMap) {
    // Term labels map to integer x positions; the formatter maps them back.
    let labels = x_labels.to_vec();

    Plot::new(id)
        .legend(Legend::default())
        .height(280.0)
        .x_axis_formatter(move |mark, _range| {
            let idx = mark.value.round() as i64;
            if (mark.value - idx as f64).abs() > 1e-6 {
                return String::new();
            }
            labels
                .get(usize::try_from(idx).unwrap_or(usize::MAX))
                .cloned()
                .unwrap_or_default()
        })
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(false)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for s in series {
                let points: PlotPoints = s
                    .points
                    .iter()
                    .filter_map(|p| {
                        let x = x_labels.iter().position(|l| *l == p.label)?;
                        Some([x as f64, p.value])
                    })
                    .collect();

                let line = Line::new(points)
                    .name(&s.name)
                    .color(colors.color_for(&s.name))
                    .width(1.5);
                plot_ui.line(line);
            }
        });
}

// ---------------------------------------------------------------------------
// Proportion pie
// ---------------------------------------------------------------------------

/// egui_plot has no pie primitive, so slices are painted as circle sectors.
fn proportion_pie(ui: &mut Ui, slices: &[Slice], colors: &ColorMap) {
    let total: f64 = slices.iter().map(|s| s.value).sum();
    if total <= 0.0 {
        ui.weak("No counts to chart for the current selection.");
        return;
    }

    ui.horizontal(|ui: &mut Ui| {
        let side = 240.0;
        let (response, painter) = ui.allocate_painter(Vec2::splat(side), Sense::hover());
        let rect = response.rect;
        let center = rect.center();
        let radius = side * 0.45;

        let mut angle = -std::f64::consts::FRAC_PI_2;
        for slice in slices {
            let sweep = slice.value / total * std::f64::consts::TAU;
            let color = colors.color_for(&slice.label);

            // Fan of short chords approximating the sector arc.
            let steps = ((sweep / 0.05).ceil() as usize).max(2);
            let mut points = Vec::with_capacity(steps + 2);
            points.push(center);
            for i in 0..=steps {
                let a = angle + sweep * i as f64 / steps as f64;
                points.push(egui::pos2(
                    center.x + radius * a.cos() as f32,
                    center.y + radius * a.sin() as f32,
                ));
            }
            painter.add(egui::Shape::convex_polygon(points, color, Stroke::NONE));
            angle += sweep;
        }

        // Legend with share percentages.
        ui.vertical(|ui: &mut Ui| {
            for slice in slices {
                let pct = slice.value / total * 100.0;
                ui.horizontal(|ui: &mut Ui| {
                    let (dot, dot_painter) =
                        ui.allocate_painter(Vec2::splat(10.0), Sense::hover());
                    dot_painter.circle_filled(
                        dot.rect.center(),
                        4.0,
                        colors.color_for(&slice.label),
                    );
                    ui.label(format!("{}  {} ({pct:.1}%)", slice.label, slice.value));
                });
            }
        });
    });
}

// ---------------------------------------------------------------------------
// Tabular snapshot
// ---------------------------------------------------------------------------

fn tabular_snapshot(ui: &mut Ui, id: &str, grid: &TableGrid) {
    use egui_extras::{Column, TableBuilder};

    let numeric = |i: usize| {
        matches!(
            grid.kinds.get(i),
            Some(ColumnKind::Integer | ColumnKind::Percent)
        )
    };

    ui.push_id(id, |ui: &mut Ui| {
        TableBuilder::new(ui)
            .striped(true)
            .resizable(true)
            .vscroll(false)
            .columns(Column::auto().at_least(80.0), grid.columns.len())
            .header(20.0, |mut header| {
                for name in &grid.columns {
                    header.col(|ui| {
                        ui.strong(name);
                    });
                }
            })
            .body(|body| {
                body.rows(18.0, grid.rows.len(), |mut row| {
                    let cells = &grid.rows[row.index()];
                    for (i, cell) in cells.iter().enumerate() {
                        row.col(|ui| {
                            if numeric(i) {
                                ui.with_layout(
                                    egui::Layout::right_to_left(egui::Align::Center),
                                    |ui: &mut Ui| {
                                        ui.label(cell);
                                    },
                                );
                            } else {
                                ui.label(cell);
                            }
                        });
                    }
                });
            });
    });
}
