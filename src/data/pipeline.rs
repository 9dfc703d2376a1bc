use super::model::{CellValue, ColumnKind, Dataset};

// ---------------------------------------------------------------------------
// Presentation modes
// ---------------------------------------------------------------------------

/// How a filtered subset becomes a renderable artifact.  Each variant
/// carries the axis columns it reads; tabular snapshots use the dataset's
/// declared column order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresentationMode {
    /// One line per distinct `series` value in the subset; x labels from
    /// the `x` column, numeric values from `y`.
    TrendLine {
        x: &'static str,
        y: &'static str,
        series: &'static str,
    },
    /// One slice per matching row: `label` names the category, `value`
    /// its magnitude.  No summing; one row per category is assumed.
    ProportionPie {
        label: &'static str,
        value: &'static str,
    },
    /// The filtered subset as a string grid in declared column order.
    TabularSnapshot,
}

// ---------------------------------------------------------------------------
// Artifacts
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct TrendPoint {
    pub label: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub name: String,
    pub points: Vec<TrendPoint>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Slice {
    pub label: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TableGrid {
    pub columns: Vec<String>,
    /// Column kinds, aligned to `columns`; lets the table view right-align
    /// numeric cells.
    pub kinds: Vec<ColumnKind>,
    pub rows: Vec<Vec<String>>,
}

/// The fully computed result of one filter + present operation.  Pure data,
/// recomputed on every render, comparable so determinism is testable.
#[derive(Debug, Clone, PartialEq)]
pub enum Artifact {
    TrendLine {
        /// Distinct x labels of the subset, first-seen order; point labels
        /// index into this for axis placement.
        x_labels: Vec<String>,
        series: Vec<Series>,
    },
    ProportionPie { slices: Vec<Slice> },
    TabularSnapshot(TableGrid),
}

impl Artifact {
    /// Whether the artifact carries nothing to draw.
    pub fn is_empty(&self) -> bool {
        match self {
            Artifact::TrendLine { series, .. } => series.is_empty(),
            Artifact::ProportionPie { slices } => slices.is_empty(),
            Artifact::TabularSnapshot(grid) => grid.rows.is_empty(),
        }
    }

    fn empty(mode: PresentationMode, dataset: &Dataset) -> Self {
        match mode {
            PresentationMode::TrendLine { .. } => Artifact::TrendLine {
                x_labels: Vec::new(),
                series: Vec::new(),
            },
            PresentationMode::ProportionPie { .. } => {
                Artifact::ProportionPie { slices: Vec::new() }
            }
            PresentationMode::TabularSnapshot => Artifact::TabularSnapshot(TableGrid {
                columns: dataset.columns.iter().map(|c| c.name.clone()).collect(),
                kinds: dataset.columns.iter().map(|c| c.kind).collect(),
                rows: Vec::new(),
            }),
        }
    }
}

// ---------------------------------------------------------------------------
// render – the one pipeline every view instantiates
// ---------------------------------------------------------------------------

/// Filter `dataset` to the rows whose `filter_column` cell equals
/// `selected`, then present the subset in the given mode.
///
/// Pure and deterministic.  A `selected` value outside the column's domain
/// is not an error: the subset is simply empty, and so is the artifact.
/// Point/row order always follows the dataset's natural row order; the
/// upstream query decides display order.
pub fn render(
    dataset: &Dataset,
    filter_column: &str,
    selected: &str,
    mode: PresentationMode,
) -> Artifact {
    let Some(filter_idx) = dataset.column_index(filter_column) else {
        log::warn!(
            "view refers to unknown filter column '{filter_column}' in dataset '{}'",
            dataset.name
        );
        return Artifact::empty(mode, dataset);
    };

    let subset: Vec<&Vec<CellValue>> = dataset
        .rows
        .iter()
        .filter(|row| row[filter_idx].matches(selected))
        .collect();

    match mode {
        PresentationMode::TrendLine { x, y, series } => {
            let (Some(x_idx), Some(y_idx), Some(series_idx)) = (
                dataset.column_index(x),
                dataset.column_index(y),
                dataset.column_index(series),
            ) else {
                log::warn!(
                    "trend-line axis columns '{x}'/'{y}'/'{series}' not all present in '{}'",
                    dataset.name
                );
                return Artifact::empty(mode, dataset);
            };

            let mut x_labels: Vec<String> = Vec::new();
            let mut out: Vec<Series> = Vec::new();
            for row in &subset {
                let label = row[x_idx].to_string();
                if !x_labels.contains(&label) {
                    x_labels.push(label.clone());
                }
                // Blank / non-numeric metrics leave a gap, matching the
                // source charts.
                let Some(value) = row[y_idx].as_f64() else {
                    continue;
                };
                let name = row[series_idx].to_string();
                let entry = match out.iter_mut().find(|s| s.name == name) {
                    Some(s) => s,
                    None => {
                        out.push(Series {
                            name,
                            points: Vec::new(),
                        });
                        out.last_mut().unwrap()
                    }
                };
                entry.points.push(TrendPoint { label, value });
            }
            Artifact::TrendLine {
                x_labels,
                series: out,
            }
        }

        PresentationMode::ProportionPie { label, value } => {
            let (Some(label_idx), Some(value_idx)) =
                (dataset.column_index(label), dataset.column_index(value))
            else {
                log::warn!(
                    "pie columns '{label}'/'{value}' not all present in '{}'",
                    dataset.name
                );
                return Artifact::empty(mode, dataset);
            };

            let slices = subset
                .iter()
                .filter_map(|row| {
                    let value = row[value_idx].as_f64()?;
                    Some(Slice {
                        label: row[label_idx].to_string(),
                        value,
                    })
                })
                .collect();
            Artifact::ProportionPie { slices }
        }

        PresentationMode::TabularSnapshot => Artifact::TabularSnapshot(TableGrid {
            columns: dataset.columns.iter().map(|c| c.name.clone()).collect(),
            kinds: dataset.columns.iter().map(|c| c.kind).collect(),
            rows: subset
                .iter()
                .map(|row| row.iter().map(CellValue::to_string).collect())
                .collect(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{Column, ColumnKind};

    /// The three-row sample dataset used throughout: two Filipino terms and
    /// one Vietnamese term.
    fn sample() -> Dataset {
        let text = |s: &str| CellValue::Text(s.into());
        Dataset {
            name: "counts".into(),
            columns: vec![
                Column { name: "group".into(), kind: ColumnKind::Text },
                Column { name: "semester".into(), kind: ColumnKind::Term },
                Column { name: "total".into(), kind: ColumnKind::Integer },
            ],
            rows: vec![
                vec![text("Filipino"), text("Fall 2019"), CellValue::Int(100)],
                vec![text("Filipino"), text("Spring 2020"), CellValue::Int(110)],
                vec![text("Vietnamese"), text("Fall 2019"), CellValue::Int(50)],
            ],
        }
    }

    const TREND: PresentationMode = PresentationMode::TrendLine {
        x: "semester",
        y: "total",
        series: "group",
    };

    const PIE: PresentationMode = PresentationMode::ProportionPie {
        label: "group",
        value: "total",
    };

    #[test]
    fn tabular_snapshot_returns_exactly_the_matching_rows() {
        let ds = sample();
        for group in ["Filipino", "Vietnamese"] {
            let expected = ds
                .rows
                .iter()
                .filter(|r| r[0].matches(group))
                .count();
            let Artifact::TabularSnapshot(grid) =
                render(&ds, "group", group, PresentationMode::TabularSnapshot)
            else {
                panic!("wrong artifact kind");
            };
            assert_eq!(grid.rows.len(), expected);
            for row in &grid.rows {
                assert_eq!(row[0], group);
            }
        }
    }

    #[test]
    fn out_of_domain_value_yields_empty_artifact_not_error() {
        let ds = sample();
        assert!(render(&ds, "group", "Hmong", TREND).is_empty());
        assert!(render(&ds, "semester", "Fall 1999", PIE).is_empty());
        assert!(render(&ds, "group", "Hmong", PresentationMode::TabularSnapshot).is_empty());
    }

    #[test]
    fn trend_line_keeps_original_row_order() {
        let Artifact::TrendLine { x_labels, series } =
            render(&sample(), "group", "Filipino", TREND)
        else {
            panic!("wrong artifact kind");
        };
        assert_eq!(x_labels, vec!["Fall 2019", "Spring 2020"]);
        assert_eq!(series.len(), 1);
        assert_eq!(series[0].name, "Filipino");
        assert_eq!(
            series[0].points,
            vec![
                TrendPoint { label: "Fall 2019".into(), value: 100.0 },
                TrendPoint { label: "Spring 2020".into(), value: 110.0 },
            ]
        );
    }

    #[test]
    fn pie_filtered_by_term_covers_all_groups() {
        let Artifact::ProportionPie { slices } = render(&sample(), "semester", "Fall 2019", PIE)
        else {
            panic!("wrong artifact kind");
        };
        assert_eq!(
            slices,
            vec![
                Slice { label: "Filipino".into(), value: 100.0 },
                Slice { label: "Vietnamese".into(), value: 50.0 },
            ]
        );
    }

    #[test]
    fn render_is_idempotent() {
        let ds = sample();
        for mode in [TREND, PIE, PresentationMode::TabularSnapshot] {
            let a = render(&ds, "group", "Filipino", mode);
            let b = render(&ds, "group", "Filipino", mode);
            assert_eq!(a, b);
        }
    }

    #[test]
    fn blank_metric_renders_as_empty_string_in_snapshot() {
        let mut ds = sample();
        ds.rows[1][2] = CellValue::Blank;
        let Artifact::TabularSnapshot(grid) =
            render(&ds, "group", "Filipino", PresentationMode::TabularSnapshot)
        else {
            panic!("wrong artifact kind");
        };
        assert_eq!(grid.rows[1][2], "");
    }

    #[test]
    fn blank_metric_leaves_a_gap_in_trend_line() {
        let mut ds = sample();
        ds.rows[0][2] = CellValue::Blank;
        let Artifact::TrendLine { x_labels, series } =
            render(&ds, "group", "Filipino", TREND)
        else {
            panic!("wrong artifact kind");
        };
        // The blank row still contributes its x label but no point.
        assert_eq!(x_labels, vec!["Fall 2019", "Spring 2020"]);
        assert_eq!(series.len(), 1);
        assert_eq!(
            series[0].points,
            vec![TrendPoint { label: "Spring 2020".into(), value: 110.0 }]
        );
    }

    #[test]
    fn unknown_axis_column_yields_empty_artifact() {
        let bad = PresentationMode::TrendLine {
            x: "semester",
            y: "nope",
            series: "group",
        };
        assert!(render(&sample(), "group", "Filipino", bad).is_empty());
    }

    #[test]
    fn snapshot_preserves_declared_column_order() {
        let Artifact::TabularSnapshot(grid) =
            render(&sample(), "group", "Filipino", PresentationMode::TabularSnapshot)
        else {
            panic!("wrong artifact kind");
        };
        assert_eq!(grid.columns, vec!["group", "semester", "total"]);
    }
}
