use std::fmt;

// ---------------------------------------------------------------------------
// CellValue – a single cell of a loaded dataset
// ---------------------------------------------------------------------------

/// A dynamically-typed cell value mirroring the SQLite storage classes the
/// source tables use.  `Blank` is the explicit sentinel for SQL NULL: it
/// displays as the empty string so missing retention/standing metrics show
/// as blank cells, never as a "null" literal.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    Int(i64),
    Float(f64),
    Blank,
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Text(s) => write!(f, "{s}"),
            CellValue::Int(i) => write!(f, "{i}"),
            CellValue::Float(v) => write!(f, "{v}"),
            CellValue::Blank => Ok(()),
        }
    }
}

impl CellValue {
    /// Try to interpret the value as an `f64` for plotting.
    /// `Blank` and text cells have no numeric reading.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CellValue::Float(v) => Some(*v),
            CellValue::Int(i) => Some(*i as f64),
            _ => None,
        }
    }

    /// Exact, case-sensitive comparison against a selector value.
    /// Selector options are produced by `Display`, so this must agree with it.
    pub fn matches(&self, selected: &str) -> bool {
        match self {
            CellValue::Text(s) => s == selected,
            CellValue::Blank => selected.is_empty(),
            other => other.to_string() == selected,
        }
    }
}

// ---------------------------------------------------------------------------
// Columns
// ---------------------------------------------------------------------------

/// Semantic kind of a dataset column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    /// Free text (group names, standing labels).
    Text,
    /// Ordinal term label ("Fall 2019"); ordering comes from the query.
    Term,
    Integer,
    Percent,
}

/// One column of a dataset: display name plus semantic kind.
#[derive(Debug, Clone)]
pub struct Column {
    pub name: String,
    pub kind: ColumnKind,
}

// ---------------------------------------------------------------------------
// Dataset – one loaded query result
// ---------------------------------------------------------------------------

/// An immutable named table loaded from one source query.  Rows are
/// fixed-arity and aligned to `columns`; nothing mutates a dataset after
/// load.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub name: String,
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<CellValue>>,
}

impl Dataset {
    /// Index of a column by display name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.name == name)
    }

    /// Distinct values of a column in first-seen order.  The result is used
    /// verbatim as selector options, so order must follow the query result,
    /// not a sort.
    pub fn distinct_values(&self, column: &str) -> Vec<CellValue> {
        let Some(idx) = self.column_index(column) else {
            return Vec::new();
        };
        let mut seen: Vec<CellValue> = Vec::new();
        for row in &self.rows {
            let val = &row[idx];
            if !seen.contains(val) {
                seen.push(val.clone());
            }
        }
        seen
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the dataset has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dataset() -> Dataset {
        Dataset {
            name: "counts".into(),
            columns: vec![
                Column { name: "group".into(), kind: ColumnKind::Text },
                Column { name: "semester".into(), kind: ColumnKind::Term },
                Column { name: "total".into(), kind: ColumnKind::Integer },
            ],
            rows: vec![
                vec![
                    CellValue::Text("Filipino".into()),
                    CellValue::Text("Fall 2019".into()),
                    CellValue::Int(100),
                ],
                vec![
                    CellValue::Text("Vietnamese".into()),
                    CellValue::Text("Fall 2019".into()),
                    CellValue::Int(50),
                ],
                vec![
                    CellValue::Text("Filipino".into()),
                    CellValue::Text("Spring 2020".into()),
                    CellValue::Int(110),
                ],
            ],
        }
    }

    #[test]
    fn distinct_values_first_seen_order_no_duplicates() {
        let ds = dataset();
        let groups = ds.distinct_values("group");
        assert_eq!(
            groups,
            vec![
                CellValue::Text("Filipino".into()),
                CellValue::Text("Vietnamese".into()),
            ]
        );
        let terms = ds.distinct_values("semester");
        assert_eq!(
            terms,
            vec![
                CellValue::Text("Fall 2019".into()),
                CellValue::Text("Spring 2020".into()),
            ]
        );
    }

    #[test]
    fn distinct_values_unknown_column_is_empty() {
        assert!(dataset().distinct_values("nope").is_empty());
    }

    #[test]
    fn blank_displays_as_empty_string() {
        assert_eq!(CellValue::Blank.to_string(), "");
        assert!(CellValue::Blank.matches(""));
    }

    #[test]
    fn numeric_cells_match_their_display() {
        assert!(CellValue::Int(100).matches("100"));
        assert!(CellValue::Float(87.5).matches("87.5"));
        assert!(!CellValue::Int(100).matches("101"));
    }

    #[test]
    fn text_match_is_exact_and_case_sensitive() {
        let v = CellValue::Text("Filipino".into());
        assert!(v.matches("Filipino"));
        assert!(!v.matches("filipino"));
        assert!(!v.matches("Filipino "));
    }
}
