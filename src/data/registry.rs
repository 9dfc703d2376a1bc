use std::collections::BTreeMap;

use super::model::{CellValue, Dataset};
use super::queries::DATASET_QUERIES;
use super::source::{DataSource, QueryError};

// ---------------------------------------------------------------------------
// DatasetRegistry – every dataset, loaded once
// ---------------------------------------------------------------------------

/// All datasets the dashboard shows, loaded before the UI is constructed
/// and immutable afterwards.  A failed load here is fatal to startup.
pub struct DatasetRegistry {
    datasets: BTreeMap<String, Dataset>,
}

impl DatasetRegistry {
    /// Execute every registered query once against the source.
    pub fn load_all(source: &DataSource) -> Result<Self, QueryError> {
        let mut datasets = BTreeMap::new();
        for spec in DATASET_QUERIES {
            let ds = source.load(spec)?;
            if ds.is_empty() {
                log::warn!("dataset '{}' is empty", ds.name);
            } else {
                log::info!("dataset '{}' loaded ({} rows)", ds.name, ds.len());
            }
            datasets.insert(ds.name.clone(), ds);
        }
        Ok(Self { datasets })
    }

    /// Build a registry from already-materialized datasets.  Test seam.
    #[cfg(test)]
    pub fn from_datasets(datasets: impl IntoIterator<Item = Dataset>) -> Self {
        Self {
            datasets: datasets
                .into_iter()
                .map(|ds| (ds.name.clone(), ds))
                .collect(),
        }
    }

    pub fn get(&self, name: &str) -> Option<&Dataset> {
        self.datasets.get(name)
    }

    /// Selector options for one dataset column, first-seen order.
    pub fn distinct_values(&self, dataset: &str, column: &str) -> Vec<CellValue> {
        self.datasets
            .get(dataset)
            .map(|ds| ds.distinct_values(column))
            .unwrap_or_default()
    }

    /// Number of loaded datasets.
    pub fn len(&self) -> usize {
        self.datasets.len()
    }

    /// Whether no datasets are loaded.
    pub fn is_empty(&self) -> bool {
        self.datasets.is_empty()
    }

    /// Total row count across datasets (top-bar status line).
    pub fn total_rows(&self) -> usize {
        self.datasets.values().map(Dataset::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rusqlite::Connection;

    /// Schema covering all eight source tables, with deliberately padded
    /// text and NULL gaps.
    fn seeded_source() -> DataSource {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(
            "CREATE TABLE asian_group_counts (asian_group TEXT, year_term INTEGER, semester TEXT, total INTEGER);
             CREATE TABLE pacific_islander_group_counts (pacific_islander_group TEXT, year_term INTEGER, semester TEXT, total INTEGER);
             CREATE TABLE ftf_asian_rtn (asian_group TEXT, cohort_year_term INTEGER, cohort_semester TEXT, \"#ENTERING_COHORT\" INTEGER, retention_1yr REAL, retention_2yr REAL, retention_4yr REAL, retention_6yr REAL);
             CREATE TABLE ftf_pi_rtn (pacific_islander_group TEXT, cohort_year_term INTEGER, cohort_semester TEXT, \"#ENTERING_COHORT\" INTEGER, retention_1yr REAL, retention_2yr REAL, retention_4yr REAL, retention_6yr REAL);
             CREATE TABLE trf_asian_rtn (asian_group TEXT, cohort_year_term INTEGER, cohort_semester TEXT, \"#ENTERING_COHORT\" INTEGER, retention_1yr REAL, retention_2yr REAL, retention_4yr REAL, retention_6yr REAL);
             CREATE TABLE tfr_pi_rtn (pacific_islander_group TEXT, cohort_year_term INTEGER, cohort_semester TEXT, \"#ENTERING_COHORT\" INTEGER, retention_1yr REAL, retention_2yr REAL, retention_4yr REAL, retention_6yr REAL);
             CREATE TABLE asian_standing (asian_group TEXT, standing TEXT, year_term INTEGER, semester TEXT, total_enroll INTEGER, standing_count INTEGER, standing_pct REAL);
             CREATE TABLE pi_standing (pacific_islander_group TEXT, standing TEXT, year_term INTEGER, semester TEXT, total_enroll INTEGER, standing_count INTEGER, standing_pct REAL);

             INSERT INTO asian_group_counts VALUES ('  Filipino ', 2197, 'Fall 2019 ', 100);
             INSERT INTO asian_group_counts VALUES ('Vietnamese', 2197, 'Fall 2019 ', 50);
             INSERT INTO asian_group_counts VALUES ('  Filipino ', 2202, ' Spring 2020', 110);
             INSERT INTO pacific_islander_group_counts VALUES ('Other Pac.Islander', 2197, 'Fall 2019', 20);
             INSERT INTO ftf_asian_rtn VALUES ('Filipino', 2197, 'Fall 2019', 80, 90.0, 85.0, NULL, NULL);
             INSERT INTO ftf_pi_rtn VALUES ('Other Pac.Islander', 2197, 'Fall 2019', 12, 75.0, NULL, NULL, NULL);
             INSERT INTO trf_asian_rtn VALUES ('Filipino', 2197, 'Fall 2019', 40, 92.0, 88.0, 80.0, NULL);
             INSERT INTO tfr_pi_rtn VALUES ('Samoan', 2197, 'Fall 2019', 6, 66.7, NULL, NULL, NULL);
             INSERT INTO asian_standing VALUES ('Filipino', 'Good Standing', 2197, 'Fall 2019', 100, 88, 88.0);
             INSERT INTO asian_standing VALUES ('Filipino', 'Probation', 2197, 'Fall 2019', 4, 1, 25.0);
             INSERT INTO pi_standing VALUES ('Samoan', 'Good Standing', 2197, 'Fall 2019', 20, 17, 85.0);",
        )
        .unwrap();
        DataSource::from_connection(conn)
    }

    #[test]
    fn load_all_loads_every_dataset() {
        let registry = DatasetRegistry::load_all(&seeded_source()).unwrap();
        assert_eq!(registry.len(), DATASET_QUERIES.len());
        assert!(!registry.is_empty());
        for spec in DATASET_QUERIES {
            assert!(registry.get(spec.name).is_some(), "missing {}", spec.name);
        }
    }

    #[test]
    fn distinct_values_come_back_trimmed_in_query_order() {
        let registry = DatasetRegistry::load_all(&seeded_source()).unwrap();
        let groups = registry.distinct_values("asian_group_counts", "asian_group");
        assert_eq!(
            groups,
            vec![
                CellValue::Text("Filipino".into()),
                CellValue::Text("Vietnamese".into()),
            ]
        );
    }

    #[test]
    fn missing_retention_metrics_are_blank() {
        let registry = DatasetRegistry::load_all(&seeded_source()).unwrap();
        let ds = registry.get("ftf_asian_rtn").unwrap();
        let idx = ds.column_index("Retention 4Yr").unwrap();
        assert_eq!(ds.rows[0][idx], CellValue::Blank);
    }

    #[test]
    fn standing_query_excludes_small_cohorts() {
        let registry = DatasetRegistry::load_all(&seeded_source()).unwrap();
        // total_enroll = 4 row filtered out by the query predicate
        assert_eq!(registry.get("asian_standing").unwrap().len(), 1);
    }

    #[test]
    fn retention_datasets_omit_the_raw_term_code() {
        let registry = DatasetRegistry::load_all(&seeded_source()).unwrap();
        let ds = registry.get("ftf_asian_rtn").unwrap();
        assert!(ds.column_index("cohort_year_term").is_none());
        assert_eq!(ds.columns.len(), 7);
    }

    #[test]
    fn unknown_dataset_yields_no_options() {
        let registry = DatasetRegistry::load_all(&seeded_source()).unwrap();
        assert!(registry.distinct_values("nope", "asian_group").is_empty());
    }
}
