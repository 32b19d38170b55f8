use std::collections::BTreeMap;

use anyhow::{Context, Result, bail};

use super::stats::pearson;
use crate::data::model::{CellValue, StudentDataset};

// ---------------------------------------------------------------------------
// Pairwise Pearson correlation matrix
// ---------------------------------------------------------------------------

/// Correlation matrix over the dataset's numeric columns.
#[derive(Debug, Clone)]
pub struct CorrelationMatrix {
    /// Column labels, one per matrix row/column.
    pub labels: Vec<String>,
    /// `values[i][j]` = Pearson r between `labels[i]` and `labels[j]`;
    /// `NaN` where the coefficient is undefined (constant column).
    pub values: Vec<Vec<f64>>,
}

/// Compute the pairwise Pearson correlation of the given numeric columns.
///
/// Rows missing either value are dropped pairwise, matching `df.corr()`.
pub fn correlation_matrix(dataset: &StudentDataset, columns: &[String]) -> Result<CorrelationMatrix> {
    if columns.is_empty() {
        bail!("No numeric columns to correlate");
    }
    let n = columns.len();
    let mut values = vec![vec![f64::NAN; n]; n];

    for i in 0..n {
        values[i][i] = 1.0;
        for j in (i + 1)..n {
            let mut xs = Vec::new();
            let mut ys = Vec::new();
            for row in &dataset.rows {
                let x = row.get(&columns[i]).and_then(CellValue::as_f64);
                let y = row.get(&columns[j]).and_then(CellValue::as_f64);
                if let (Some(x), Some(y)) = (x, y) {
                    xs.push(x);
                    ys.push(y);
                }
            }
            let r = pearson(&xs, &ys).unwrap_or(f64::NAN);
            values[i][j] = r;
            values[j][i] = r;
        }
    }

    Ok(CorrelationMatrix {
        labels: columns.to_vec(),
        values,
    })
}

// ---------------------------------------------------------------------------
// Grouped mean summary (groupby(col)[cols].mean())
// ---------------------------------------------------------------------------

/// Per-group means of a set of numeric columns, keyed by the distinct values
/// of one categorical column.
#[derive(Debug, Clone)]
pub struct SummaryTable {
    pub group_column: String,
    pub value_columns: Vec<String>,
    /// group value → one mean per value column (`None` when the group has no
    /// non-null values for that column).
    pub groups: BTreeMap<CellValue, Vec<Option<f64>>>,
}

/// Group rows by `group_column` and average each of `value_columns`.
///
/// Null group keys are dropped (the `groupby` default); null cells are
/// skipped within each group's mean.
pub fn grouped_mean(
    dataset: &StudentDataset,
    group_column: &str,
    value_columns: &[String],
) -> Result<SummaryTable> {
    dataset
        .unique_values
        .get(group_column)
        .with_context(|| format!("Missing grouping column '{group_column}'"))?;

    let mut sums: BTreeMap<CellValue, Vec<(f64, usize)>> = BTreeMap::new();

    for row in &dataset.rows {
        let key = match row.get(group_column) {
            None | Some(CellValue::Null) => continue,
            Some(v) => v.clone(),
        };
        let acc = sums
            .entry(key)
            .or_insert_with(|| vec![(0.0, 0); value_columns.len()]);
        for (idx, col) in value_columns.iter().enumerate() {
            if let Some(v) = row.get(col).and_then(CellValue::as_f64) {
                acc[idx].0 += v;
                acc[idx].1 += 1;
            }
        }
    }

    let groups = sums
        .into_iter()
        .map(|(key, acc)| {
            let means = acc
                .into_iter()
                .map(|(sum, count)| (count > 0).then(|| sum / count as f64))
                .collect();
            (key, means)
        })
        .collect();

    Ok(SummaryTable {
        group_column: group_column.to_string(),
        value_columns: value_columns.to_vec(),
        groups,
    })
}

impl SummaryTable {
    /// Render as a bordered text table for the terminal.
    pub fn render(&self) -> String {
        use comfy_table::{Cell, Table};

        let mut table = Table::new();
        let mut header = vec![self.group_column.clone()];
        header.extend(self.value_columns.iter().cloned());
        table.set_header(header);

        for (key, means) in &self.groups {
            let mut row = vec![Cell::new(key.to_string())];
            for mean in means {
                row.push(match mean {
                    Some(m) => Cell::new(format!("{m:.2}")),
                    None => Cell::new("-"),
                });
            }
            table.add_row(row);
        }
        table.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{
        AVERAGE_SCORE, GENDER, MATH_SCORE, READING_SCORE, Row, TEST_PREPARATION, WRITING_SCORE,
    };

    fn row(pairs: &[(&str, CellValue)]) -> Row {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    fn example_dataset() -> StudentDataset {
        let rows = vec![
            row(&[
                (MATH_SCORE, CellValue::Integer(80)),
                (READING_SCORE, CellValue::Integer(90)),
                (WRITING_SCORE, CellValue::Integer(70)),
                (AVERAGE_SCORE, CellValue::Float(80.0)),
                (GENDER, CellValue::String("F".into())),
                (TEST_PREPARATION, CellValue::String("completed".into())),
            ]),
            row(&[
                (MATH_SCORE, CellValue::Integer(60)),
                (READING_SCORE, CellValue::Integer(50)),
                (WRITING_SCORE, CellValue::Integer(55)),
                (AVERAGE_SCORE, CellValue::Float(55.0)),
                (GENDER, CellValue::String("M".into())),
                (TEST_PREPARATION, CellValue::String("none".into())),
            ]),
        ];
        let columns = vec![
            MATH_SCORE.to_string(),
            READING_SCORE.to_string(),
            WRITING_SCORE.to_string(),
            AVERAGE_SCORE.to_string(),
            GENDER.to_string(),
            TEST_PREPARATION.to_string(),
        ];
        StudentDataset::from_rows(rows, columns)
    }

    #[test]
    fn summary_has_one_row_per_distinct_group() {
        let ds = example_dataset();
        let cols: Vec<String> = [MATH_SCORE, READING_SCORE, WRITING_SCORE, AVERAGE_SCORE]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let summary = grouped_mean(&ds, TEST_PREPARATION, &cols).unwrap();

        assert_eq!(summary.groups.len(), 2);
        let keys: Vec<String> = summary.groups.keys().map(|k| k.to_string()).collect();
        assert_eq!(keys, vec!["completed", "none"]);

        let completed = &summary.groups[&CellValue::String("completed".into())];
        assert_eq!(completed[0], Some(80.0));
        assert_eq!(completed[3], Some(80.0));
    }

    #[test]
    fn grouped_mean_skips_null_cells() {
        let mut ds = example_dataset();
        ds.rows[0].insert(MATH_SCORE.to_string(), CellValue::Null);
        let cols = vec![MATH_SCORE.to_string()];
        let summary = grouped_mean(&ds, TEST_PREPARATION, &cols).unwrap();

        let completed = &summary.groups[&CellValue::String("completed".into())];
        assert_eq!(completed[0], None);
    }

    #[test]
    fn grouped_mean_unknown_column_errors() {
        let ds = example_dataset();
        assert!(grouped_mean(&ds, "no_such_column", &[MATH_SCORE.to_string()]).is_err());
    }

    #[test]
    fn correlation_matrix_properties() {
        let ds = example_dataset();
        let cols = ds.numeric_columns();
        let corr = correlation_matrix(&ds, &cols).unwrap();

        let n = corr.labels.len();
        for i in 0..n {
            assert_eq!(corr.values[i][i], 1.0);
            for j in 0..n {
                let r = corr.values[i][j];
                assert_eq!(r.to_bits(), corr.values[j][i].to_bits());
                if !r.is_nan() {
                    assert!((-1.0..=1.0).contains(&r), "r = {r}");
                }
            }
        }
    }

    #[test]
    fn correlation_requires_columns() {
        let ds = example_dataset();
        assert!(correlation_matrix(&ds, &[]).is_err());
    }

    #[test]
    fn render_includes_group_keys() {
        let ds = example_dataset();
        let cols = vec![MATH_SCORE.to_string()];
        let summary = grouped_mean(&ds, TEST_PREPARATION, &cols).unwrap();
        let text = summary.render();
        assert!(text.contains("completed"));
        assert!(text.contains("none"));
    }
}
