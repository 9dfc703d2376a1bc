use crate::data::pipeline::PresentationMode;

// ---------------------------------------------------------------------------
// ViewSpec – one dropdown + output region on the page
// ---------------------------------------------------------------------------

/// Declarative description of one dashboard view.  The shell iterates the
/// catalogue to build its controls; every view is the same pipeline with
/// different parameters.
#[derive(Debug, Clone, Copy)]
pub struct ViewSpec {
    /// Stable id, used to key the egui widgets.
    pub id: &'static str,
    pub title: &'static str,
    /// Dataset name in the registry.
    pub dataset: &'static str,
    /// Column the dropdown filters on (group column, or the term column
    /// for the by-term pie views).
    pub filter_column: &'static str,
    /// Initial dropdown value; falls back to the first option when absent
    /// from the loaded data.
    pub default_value: &'static str,
    pub mode: PresentationMode,
}

const ASIAN_GROUP: &str = "Asian Group";
const PI_GROUP: &str = "Pacific Islander Group";
const DEFAULT_ASIAN: &str = "Filipino";
const DEFAULT_PI: &str = "Other Pac.Islander";
const DEFAULT_TERM: &str = "Fall 2019";

/// One FTF or transfer retention trend line for a single N-year metric.
const fn retention_line(
    id: &'static str,
    title: &'static str,
    dataset: &'static str,
    group_column: &'static str,
    default_value: &'static str,
    metric: &'static str,
) -> ViewSpec {
    ViewSpec {
        id,
        title,
        dataset,
        filter_column: group_column,
        default_value,
        mode: PresentationMode::TrendLine {
            x: "Cohort Semester",
            y: metric,
            series: group_column,
        },
    }
}

/// A group-filtered tabular snapshot (retention and standing views).
const fn snapshot_table(
    id: &'static str,
    title: &'static str,
    dataset: &'static str,
    group_column: &'static str,
    default_value: &'static str,
) -> ViewSpec {
    ViewSpec {
        id,
        title,
        dataset,
        filter_column: group_column,
        default_value,
        mode: PresentationMode::TabularSnapshot,
    }
}

/// Every view on the page, in display order.
pub const DASHBOARD_VIEWS: &[ViewSpec] = &[
    // ---- Enrollment trend lines ----
    ViewSpec {
        id: "enroll_asian_line",
        title: "Student Enrollment by Ethnic Sub-groups: Asian Groups",
        dataset: "asian_group_counts",
        filter_column: "asian_group",
        default_value: DEFAULT_ASIAN,
        mode: PresentationMode::TrendLine {
            x: "semester",
            y: "total",
            series: "asian_group",
        },
    },
    ViewSpec {
        id: "enroll_pi_line",
        title: "Student Enrollment by Ethnic Sub-groups: Pacific Islander Groups",
        dataset: "pacific_islander_group_counts",
        filter_column: "pacific_islander_group",
        default_value: DEFAULT_PI,
        mode: PresentationMode::TrendLine {
            x: "semester",
            y: "total",
            series: "pacific_islander_group",
        },
    },
    // ---- Enrollment proportion pies (filtered by term, not group) ----
    ViewSpec {
        id: "enroll_asian_pie",
        title: "Student Enrollment by Ethnic Sub-groups: Asian Groups",
        dataset: "asian_group_counts",
        filter_column: "semester",
        default_value: DEFAULT_TERM,
        mode: PresentationMode::ProportionPie {
            label: "asian_group",
            value: "total",
        },
    },
    ViewSpec {
        id: "enroll_pi_pie",
        title: "Student Enrollment by Ethnic Sub-groups: Pacific Islander Groups",
        dataset: "pacific_islander_group_counts",
        filter_column: "semester",
        default_value: DEFAULT_TERM,
        mode: PresentationMode::ProportionPie {
            label: "pacific_islander_group",
            value: "total",
        },
    },
    // ---- First-time-freshman retention lines ----
    retention_line(
        "ftf_asian_1yr",
        "FTF 1-Year Student Retention by Ethnic Sub-groups: Asian Groups",
        "ftf_asian_rtn",
        ASIAN_GROUP,
        DEFAULT_ASIAN,
        "Retention 1Yr",
    ),
    retention_line(
        "ftf_asian_2yr",
        "FTF 2-Year Student Retention by Ethnic Sub-groups: Asian Groups",
        "ftf_asian_rtn",
        ASIAN_GROUP,
        DEFAULT_ASIAN,
        "Retention 2Yr",
    ),
    retention_line(
        "ftf_asian_4yr",
        "FTF 4-Year Student Retention by Ethnic Sub-groups: Asian Groups",
        "ftf_asian_rtn",
        ASIAN_GROUP,
        DEFAULT_ASIAN,
        "Retention 4Yr",
    ),
    retention_line(
        "ftf_asian_6yr",
        "FTF 6-Year Student Retention by Ethnic Sub-groups: Asian Groups",
        "ftf_asian_rtn",
        ASIAN_GROUP,
        DEFAULT_ASIAN,
        "Retention 6Yr",
    ),
    retention_line(
        "ftf_pi_1yr",
        "FTF 1-Year Student Retention by Ethnic Sub-groups: Pacific Islander Groups",
        "ftf_pi_rtn",
        PI_GROUP,
        DEFAULT_PI,
        "Retention 1Yr",
    ),
    retention_line(
        "ftf_pi_2yr",
        "FTF 2-Year Student Retention by Ethnic Sub-groups: Pacific Islander Groups",
        "ftf_pi_rtn",
        PI_GROUP,
        DEFAULT_PI,
        "Retention 2Yr",
    ),
    retention_line(
        "ftf_pi_4yr",
        "FTF 4-Year Student Retention by Ethnic Sub-groups: Pacific Islander Groups",
        "ftf_pi_rtn",
        PI_GROUP,
        DEFAULT_PI,
        "Retention 4Yr",
    ),
    retention_line(
        "ftf_pi_6yr",
        "FTF 6-Year Student Retention by Ethnic Sub-groups: Pacific Islander Groups",
        "ftf_pi_rtn",
        PI_GROUP,
        DEFAULT_PI,
        "Retention 6Yr",
    ),
    // ---- Transfer retention lines ----
    retention_line(
        "trf_asian_1yr",
        "Transfer 1-Year Student Retention by Ethnic Sub-groups: Asian Groups",
        "trf_asian_rtn",
        ASIAN_GROUP,
        DEFAULT_ASIAN,
        "Retention 1Yr",
    ),
    retention_line(
        "trf_asian_2yr",
        "Transfer 2-Year Student Retention by Ethnic Sub-groups: Asian Groups",
        "trf_asian_rtn",
        ASIAN_GROUP,
        DEFAULT_ASIAN,
        "Retention 2Yr",
    ),
    retention_line(
        "trf_asian_4yr",
        "Transfer 4-Year Student Retention by Ethnic Sub-groups: Asian Groups",
        "trf_asian_rtn",
        ASIAN_GROUP,
        DEFAULT_ASIAN,
        "Retention 4Yr",
    ),
    retention_line(
        "trf_asian_6yr",
        "Transfer 6-Year Student Retention by Ethnic Sub-groups: Asian Groups",
        "trf_asian_rtn",
        ASIAN_GROUP,
        DEFAULT_ASIAN,
        "Retention 6Yr",
    ),
    retention_line(
        "trf_pi_1yr",
        "Transfer 1-Year Student Retention by Ethnic Sub-groups: Pacific Islander Groups",
        "trf_pi_rtn",
        PI_GROUP,
        DEFAULT_PI,
        "Retention 1Yr",
    ),
    retention_line(
        "trf_pi_2yr",
        "Transfer 2-Year Student Retention by Ethnic Sub-groups: Pacific Islander Groups",
        "trf_pi_rtn",
        PI_GROUP,
        DEFAULT_PI,
        "Retention 2Yr",
    ),
    retention_line(
        "trf_pi_4yr",
        "Transfer 4-Year Student Retention by Ethnic Sub-groups: Pacific Islander Groups",
        "trf_pi_rtn",
        PI_GROUP,
        DEFAULT_PI,
        "Retention 4Yr",
    ),
    retention_line(
        "trf_pi_6yr",
        "Transfer 6-Year Student Retention by Ethnic Sub-groups: Pacific Islander Groups",
        "trf_pi_rtn",
        PI_GROUP,
        DEFAULT_PI,
        "Retention 6Yr",
    ),
    // ---- Retention tabular snapshots ----
    snapshot_table(
        "ftf_asian_table",
        "FTF Student Retention by Ethnic Sub-groups: Asian Groups",
        "ftf_asian_rtn",
        ASIAN_GROUP,
        DEFAULT_ASIAN,
    ),
    snapshot_table(
        "ftf_pi_table",
        "FTF Student Retention by Ethnic Sub-groups: Pacific Islander Groups",
        "ftf_pi_rtn",
        PI_GROUP,
        DEFAULT_PI,
    ),
    snapshot_table(
        "trf_asian_table",
        "Transfer Student Retention by Ethnic Sub-groups: Asian Groups",
        "trf_asian_rtn",
        ASIAN_GROUP,
        DEFAULT_ASIAN,
    ),
    snapshot_table(
        "trf_pi_table",
        "Transfer Student Retention by Ethnic Sub-groups: Pacific Islander Groups",
        "trf_pi_rtn",
        PI_GROUP,
        DEFAULT_PI,
    ),
    // ---- Academic standing snapshots ----
    snapshot_table(
        "standing_asian_table",
        "Academic Standing by Ethnic Sub-groups: Asian Groups",
        "asian_standing",
        ASIAN_GROUP,
        DEFAULT_ASIAN,
    ),
    snapshot_table(
        "standing_pi_table",
        "Academic Standing by Ethnic Sub-groups: Pacific Islander Groups",
        "pi_standing",
        PI_GROUP,
        DEFAULT_PI,
    ),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::queries::DATASET_QUERIES;

    #[test]
    fn view_ids_are_unique() {
        for (i, a) in DASHBOARD_VIEWS.iter().enumerate() {
            for b in &DASHBOARD_VIEWS[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn every_view_references_a_registered_dataset_and_its_columns() {
        for view in DASHBOARD_VIEWS {
            let spec = DATASET_QUERIES
                .iter()
                .find(|q| q.name == view.dataset)
                .unwrap_or_else(|| panic!("view '{}': unknown dataset '{}'", view.id, view.dataset));
            let has = |col: &str| spec.columns.iter().any(|&(name, _)| name == col);

            assert!(
                has(view.filter_column),
                "view '{}': filter column '{}' missing from '{}'",
                view.id,
                view.filter_column,
                view.dataset
            );
            match view.mode {
                PresentationMode::TrendLine { x, y, series } => {
                    for col in [x, y, series] {
                        assert!(has(col), "view '{}': axis column '{col}' missing", view.id);
                    }
                }
                PresentationMode::ProportionPie { label, value } => {
                    for col in [label, value] {
                        assert!(has(col), "view '{}': pie column '{col}' missing", view.id);
                    }
                }
                PresentationMode::TabularSnapshot => {}
            }
        }
    }

    #[test]
    fn catalogue_covers_all_twenty_six_views() {
        assert_eq!(DASHBOARD_VIEWS.len(), 26);
    }

    #[test]
    fn pie_sections_reuse_the_enrollment_headings() {
        // The report page shows the by-term pies under the same headings as
        // the enrollment trend lines.
        assert_eq!(DASHBOARD_VIEWS[2].title, DASHBOARD_VIEWS[0].title);
        assert_eq!(DASHBOARD_VIEWS[3].title, DASHBOARD_VIEWS[1].title);
    }
}
