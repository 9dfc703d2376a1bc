use super::model::ColumnKind;

// ---------------------------------------------------------------------------
// QuerySpec – static description of one source dataset
// ---------------------------------------------------------------------------

/// One named, read-only SELECT plus the display columns its result maps to.
/// Grouping text is trimmed in the SQL itself so the application never has
/// to normalize whitespace.
#[derive(Debug, Clone, Copy)]
pub struct QuerySpec {
    pub name: &'static str,
    pub sql: &'static str,
    /// Display column names and kinds, in SELECT order.
    pub columns: &'static [(&'static str, ColumnKind)],
}

use ColumnKind::{Integer, Percent, Term, Text};

const RETENTION_COLUMNS_ASIAN: &[(&str, ColumnKind)] = &[
    ("Asian Group", Text),
    ("Cohort Semester", Term),
    ("#Entering Cohort", Integer),
    ("Retention 1Yr", Percent),
    ("Retention 2Yr", Percent),
    ("Retention 4Yr", Percent),
    ("Retention 6Yr", Percent),
];

const RETENTION_COLUMNS_PI: &[(&str, ColumnKind)] = &[
    ("Pacific Islander Group", Text),
    ("Cohort Semester", Term),
    ("#Entering Cohort", Integer),
    ("Retention 1Yr", Percent),
    ("Retention 2Yr", Percent),
    ("Retention 4Yr", Percent),
    ("Retention 6Yr", Percent),
];

const STANDING_COLUMNS_ASIAN: &[(&str, ColumnKind)] = &[
    ("Asian Group", Text),
    ("Academic Standing", Text),
    ("Term Code", Integer),
    ("Semester", Term),
    ("Total Enrollment", Integer),
    ("Standing Total", Integer),
    ("Standing %", Percent),
];

const STANDING_COLUMNS_PI: &[(&str, ColumnKind)] = &[
    ("Pacific Islander Group", Text),
    ("Academic Standing", Text),
    ("Term Code", Integer),
    ("Semester", Term),
    ("Total Enrollment", Integer),
    ("Standing Total", Integer),
    ("Standing %", Percent),
];

/// Every dataset the dashboard loads, one query per source table.
pub const DATASET_QUERIES: &[QuerySpec] = &[
    QuerySpec {
        name: "asian_group_counts",
        sql: "select trim(asian_group) asian_group, \
              year_term, \
              trim(semester) semester, \
              total \
              from asian_group_counts",
        columns: &[
            ("asian_group", Text),
            ("year_term", Integer),
            ("semester", Term),
            ("total", Integer),
        ],
    },
    QuerySpec {
        name: "pacific_islander_group_counts",
        sql: "select trim(pacific_islander_group) pacific_islander_group, \
              year_term, \
              trim(semester) semester, \
              total \
              from pacific_islander_group_counts",
        columns: &[
            ("pacific_islander_group", Text),
            ("year_term", Integer),
            ("semester", Term),
            ("total", Integer),
        ],
    },
    QuerySpec {
        name: "ftf_asian_rtn",
        sql: "select trim(asian_group) asian_group, \
              cohort_semester, \
              \"#ENTERING_COHORT\", \
              retention_1yr, \
              retention_2yr, \
              retention_4yr, \
              retention_6yr \
              from ftf_asian_rtn",
        columns: RETENTION_COLUMNS_ASIAN,
    },
    QuerySpec {
        name: "ftf_pi_rtn",
        sql: "select trim(pacific_islander_group) pacific_islander_group, \
              cohort_semester, \
              \"#ENTERING_COHORT\", \
              retention_1yr, \
              retention_2yr, \
              retention_4yr, \
              retention_6yr \
              from ftf_pi_rtn",
        columns: RETENTION_COLUMNS_PI,
    },
    QuerySpec {
        name: "trf_asian_rtn",
        sql: "select trim(asian_group) asian_group, \
              cohort_semester, \
              \"#ENTERING_COHORT\", \
              retention_1yr, \
              retention_2yr, \
              retention_4yr, \
              retention_6yr \
              from trf_asian_rtn",
        columns: RETENTION_COLUMNS_ASIAN,
    },
    QuerySpec {
        name: "trf_pi_rtn",
        sql: "select trim(pacific_islander_group) pacific_islander_group, \
              cohort_semester, \
              \"#ENTERING_COHORT\", \
              retention_1yr, \
              retention_2yr, \
              retention_4yr, \
              retention_6yr \
              from tfr_pi_rtn",
        columns: RETENTION_COLUMNS_PI,
    },
    QuerySpec {
        name: "asian_standing",
        sql: "select trim(asian_group) asian_group, \
              standing, \
              year_term, \
              semester, \
              total_enroll, \
              standing_count, \
              standing_pct \
              from asian_standing where total_enroll >= 5 \
              order by 3, 6 desc, 5 desc, 1",
        columns: STANDING_COLUMNS_ASIAN,
    },
    QuerySpec {
        name: "pi_standing",
        sql: "select trim(pacific_islander_group) pacific_islander_group, \
              standing, \
              year_term, \
              semester, \
              total_enroll, \
              standing_count, \
              standing_pct \
              from pi_standing where total_enroll >= 5 \
              order by 3, 6 desc, 5 desc, 1",
        columns: STANDING_COLUMNS_PI,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dataset_names_are_unique() {
        for (i, a) in DATASET_QUERIES.iter().enumerate() {
            for b in &DATASET_QUERIES[i + 1..] {
                assert_ne!(a.name, b.name);
            }
        }
    }

    #[test]
    fn every_query_selects_its_declared_arity() {
        // SELECT-list arity must match the declared columns; the loader
        // rejects mismatches at runtime, this catches them in CI.
        for spec in DATASET_QUERIES {
            let select = spec
                .sql
                .split(" from ")
                .next()
                .unwrap()
                .trim_start_matches("select ");
            let arity = select.split(',').count();
            assert_eq!(
                arity,
                spec.columns.len(),
                "query '{}' selects {} columns but declares {}",
                spec.name,
                arity,
                spec.columns.len()
            );
        }
    }
}
