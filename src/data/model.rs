use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

// ---------------------------------------------------------------------------
// Column names expected from the student-performance table
// ---------------------------------------------------------------------------

pub const MATH_SCORE: &str = "math_score";
pub const READING_SCORE: &str = "reading_score";
pub const WRITING_SCORE: &str = "writing_score";
pub const AVERAGE_SCORE: &str = "average_score";
pub const GENDER: &str = "gender";
pub const TEST_PREPARATION: &str = "test_preparation";

// ---------------------------------------------------------------------------
// CellValue – a single cell of the table
// ---------------------------------------------------------------------------

/// A dynamically-typed cell value mirroring common Pandas dtypes.
/// Grouping keys live in `BTreeMap` / `BTreeSet` so `CellValue` must be `Ord`.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    String(String),
    Integer(i64),
    Float(f64),
    Null,
}

// -- Manual Eq/Ord so we can put CellValue in BTreeSet --

impl Eq for CellValue {}

impl PartialOrd for CellValue {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CellValue {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        use CellValue::*;
        fn discriminant(v: &CellValue) -> u8 {
            match v {
                Null => 0,
                Integer(_) => 1,
                Float(_) => 2,
                String(_) => 3,
            }
        }
        let da = discriminant(self);
        let db = discriminant(other);
        if da != db {
            return da.cmp(&db);
        }
        match (self, other) {
            (Null, Null) => std::cmp::Ordering::Equal,
            (Integer(a), Integer(b)) => a.cmp(b),
            (Float(a), Float(b)) => a.total_cmp(b),
            (String(a), String(b)) => a.cmp(b),
            _ => std::cmp::Ordering::Equal,
        }
    }
}

impl std::hash::Hash for CellValue {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            CellValue::String(s) => s.hash(state),
            CellValue::Integer(i) => i.hash(state),
            CellValue::Float(f) => f.to_bits().hash(state),
            CellValue::Null => {}
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::String(s) => write!(f, "{s}"),
            CellValue::Integer(i) => write!(f, "{i}"),
            CellValue::Float(v) => write!(f, "{v:.4}"),
            CellValue::Null => write!(f, "<null>"),
        }
    }
}

impl CellValue {
    /// Try to interpret the value as an `f64` for numeric aggregation.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CellValue::Float(v) => Some(*v),
            CellValue::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }

    /// Pandas-style dtype label used by the structural summary.
    pub fn dtype(&self) -> &'static str {
        match self {
            CellValue::String(_) => "object",
            CellValue::Integer(_) => "int64",
            CellValue::Float(_) => "float64",
            CellValue::Null => "null",
        }
    }
}

// ---------------------------------------------------------------------------
// Row – one record of the table
// ---------------------------------------------------------------------------

/// A single student record (one row of the source table): column_name → value.
pub type Row = BTreeMap<String, CellValue>;

// ---------------------------------------------------------------------------
// StudentDataset – the complete loaded table
// ---------------------------------------------------------------------------

/// The full parsed table with pre-computed column indices.
#[derive(Debug, Clone)]
pub struct StudentDataset {
    /// All records (rows).
    pub rows: Vec<Row>,
    /// Column names in source order.
    pub column_names: Vec<String>,
    /// For each column the sorted set of distinct non-null values.
    pub unique_values: BTreeMap<String, BTreeSet<CellValue>>,
}

impl StudentDataset {
    /// Build column indices from loaded rows, preserving source column order.
    pub fn from_rows(rows: Vec<Row>, column_names: Vec<String>) -> Self {
        let mut unique_values: BTreeMap<String, BTreeSet<CellValue>> = BTreeMap::new();

        for row in &rows {
            for (col, val) in row {
                if matches!(val, CellValue::Null) {
                    continue;
                }
                unique_values
                    .entry(col.clone())
                    .or_default()
                    .insert(val.clone());
            }
        }
        StudentDataset {
            rows,
            column_names,
            unique_values,
        }
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Append a derived column: `f` receives each row and returns the new cell.
    /// Row count is unchanged; the column is registered after the existing ones.
    pub fn add_column<F>(&mut self, name: &str, f: F)
    where
        F: Fn(&Row) -> CellValue,
    {
        for row in &mut self.rows {
            let val = f(row);
            if !matches!(val, CellValue::Null) {
                self.unique_values
                    .entry(name.to_string())
                    .or_default()
                    .insert(val.clone());
            }
            row.insert(name.to_string(), val);
        }
        if !self.column_names.iter().any(|c| c == name) {
            self.column_names.push(name.to_string());
        }
    }

    /// Non-null count for a column (the `df.info()` notion of non-null).
    pub fn non_null_count(&self, column: &str) -> usize {
        self.rows
            .iter()
            .filter(|r| !matches!(r.get(column), None | Some(CellValue::Null)))
            .count()
    }

    /// Dtype label for a column, taken from its first non-null cell.
    pub fn dtype(&self, column: &str) -> &'static str {
        self.rows
            .iter()
            .filter_map(|r| r.get(column))
            .find(|v| !matches!(v, CellValue::Null))
            .map(|v| v.dtype())
            .unwrap_or("null")
    }

    /// Columns whose non-null cells are all numeric (`select_dtypes(include='number')`).
    pub fn numeric_columns(&self) -> Vec<String> {
        self.column_names
            .iter()
            .filter(|col| {
                let mut any = false;
                for row in &self.rows {
                    match row.get(col.as_str()) {
                        None | Some(CellValue::Null) => {}
                        Some(v) if v.as_f64().is_some() => any = true,
                        Some(_) => return false,
                    }
                }
                any
            })
            .cloned()
            .collect()
    }

    /// All non-null numeric values of a column, in row order.
    pub fn numeric_values(&self, column: &str) -> Vec<f64> {
        self.rows
            .iter()
            .filter_map(|r| r.get(column).and_then(CellValue::as_f64))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(pairs: &[(&str, CellValue)]) -> Row {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    fn two_row_dataset() -> StudentDataset {
        let rows = vec![
            row(&[
                (MATH_SCORE, CellValue::Integer(80)),
                (READING_SCORE, CellValue::Integer(90)),
                (WRITING_SCORE, CellValue::Integer(70)),
                (GENDER, CellValue::String("F".into())),
                (TEST_PREPARATION, CellValue::String("completed".into())),
            ]),
            row(&[
                (MATH_SCORE, CellValue::Integer(60)),
                (READING_SCORE, CellValue::Integer(50)),
                (WRITING_SCORE, CellValue::Integer(55)),
                (GENDER, CellValue::String("M".into())),
                (TEST_PREPARATION, CellValue::String("none".into())),
            ]),
        ];
        let columns = vec![
            MATH_SCORE.to_string(),
            READING_SCORE.to_string(),
            WRITING_SCORE.to_string(),
            GENDER.to_string(),
            TEST_PREPARATION.to_string(),
        ];
        StudentDataset::from_rows(rows, columns)
    }

    #[test]
    fn add_column_preserves_row_count() {
        let mut ds = two_row_dataset();
        ds.add_column(AVERAGE_SCORE, |_| CellValue::Float(1.0));
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.column_names.last().map(String::as_str), Some(AVERAGE_SCORE));
    }

    #[test]
    fn numeric_columns_excludes_categoricals() {
        let ds = two_row_dataset();
        let numeric = ds.numeric_columns();
        assert_eq!(numeric, vec![MATH_SCORE, READING_SCORE, WRITING_SCORE]);
    }

    #[test]
    fn unique_values_tracks_distinct_groups() {
        let ds = two_row_dataset();
        let prep = ds.unique_values.get(TEST_PREPARATION).unwrap();
        assert_eq!(prep.len(), 2);
        assert!(prep.contains(&CellValue::String("completed".into())));
        assert!(prep.contains(&CellValue::String("none".into())));
    }

    #[test]
    fn non_null_count_ignores_nulls() {
        let mut ds = two_row_dataset();
        ds.rows[0].insert(MATH_SCORE.to_string(), CellValue::Null);
        assert_eq!(ds.non_null_count(MATH_SCORE), 1);
        assert_eq!(ds.non_null_count(GENDER), 2);
    }
}
