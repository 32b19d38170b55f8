use std::path::Path;

use anyhow::{Context, Result};

use crate::analysis::stats::{Bin, BoxStats, histogram, kde_curve};
use crate::analysis::table::{
    CorrelationMatrix, SummaryTable, correlation_matrix, grouped_mean,
};
use crate::data::loader::load_file;
use crate::data::model::{
    AVERAGE_SCORE, CellValue, GENDER, MATH_SCORE, READING_SCORE, StudentDataset,
    TEST_PREPARATION, WRITING_SCORE,
};

/// Default input table.
pub const DEFAULT_DATA_PATH: &str = "data/stud.csv";

/// Fixed histogram bin count, matching the notebook's `bins=20`.
const HIST_BINS: usize = 20;

/// Grid resolution of the density overlay.
const KDE_GRID: usize = 200;

/// Rows shown by the head printout.
const HEAD_ROWS: usize = 5;

// ---------------------------------------------------------------------------
// EdaReport – plot-ready artifacts handed to the viewer
// ---------------------------------------------------------------------------

/// Everything the viewer needs, precomputed once per loaded dataset.
#[derive(Debug, Clone)]
pub struct EdaReport {
    /// `average_score` histogram (fixed bin count).
    pub histogram: Vec<Bin>,
    /// Density overlay, scaled to the histogram's count axis.
    pub density: Vec<[f64; 2]>,
    /// `average_score` box statistics per gender, in sorted group order.
    pub boxes: Vec<(String, BoxStats)>,
    /// Pairwise Pearson correlation of the numeric columns.
    pub correlation: CorrelationMatrix,
    /// Per-test-preparation means of the four score columns.
    pub summary: SummaryTable,
}

// ---------------------------------------------------------------------------
// The EDA routine
// ---------------------------------------------------------------------------

/// Run the full EDA over the table at `path`.
///
/// Loads the file, prints head and structural diagnostics, derives
/// `average_score`, builds the plot artifacts, prints the grouped summary,
/// and returns the augmented dataset together with the report.  Any failure
/// (missing file, missing column, non-numeric data) propagates uncaught.
pub fn run(path: &Path) -> Result<(StudentDataset, EdaReport)> {
    let mut dataset = load_file(path)?;
    log::info!(
        "Loaded {} records with columns {:?}",
        dataset.len(),
        dataset.column_names
    );

    println!("--- Head ---");
    print_head(&dataset, HEAD_ROWS);
    println!("\n--- Info ---");
    print_info(&dataset);

    add_average_score(&mut dataset);

    let report = build_report(&dataset)?;

    println!("\n--- Grouped Summary by Test Preparation ---");
    println!("{}", report.summary.render());

    Ok((dataset, report))
}

/// Derive `average_score` as the unweighted mean of the three score columns.
///
/// A row missing any of the three yields `Null`; no imputation.  Row count
/// is unchanged.
pub fn add_average_score(dataset: &mut StudentDataset) {
    dataset.add_column(AVERAGE_SCORE, |row| {
        let scores: Option<Vec<f64>> = [MATH_SCORE, READING_SCORE, WRITING_SCORE]
            .iter()
            .map(|col| row.get(*col).and_then(CellValue::as_f64))
            .collect();
        match scores {
            Some(s) => CellValue::Float(s.iter().sum::<f64>() / s.len() as f64),
            None => CellValue::Null,
        }
    });
}

/// Assemble the plot-ready report from the augmented dataset.
pub fn build_report(dataset: &StudentDataset) -> Result<EdaReport> {
    let averages = dataset.numeric_values(AVERAGE_SCORE);
    let bins = histogram(&averages, HIST_BINS);
    let bin_width = bins.first().map(|b| b.end - b.start).unwrap_or(1.0);
    let density = kde_curve(&averages, bin_width, KDE_GRID);

    let boxes = box_stats_by_gender(dataset)?;

    let numeric = dataset.numeric_columns();
    let correlation = correlation_matrix(dataset, &numeric)?;

    let score_columns: Vec<String> = [MATH_SCORE, READING_SCORE, WRITING_SCORE, AVERAGE_SCORE]
        .iter()
        .map(|s| s.to_string())
        .collect();
    let summary = grouped_mean(dataset, TEST_PREPARATION, &score_columns)?;

    Ok(EdaReport {
        histogram: bins,
        density,
        boxes,
        correlation,
        summary,
    })
}

/// Box statistics of `average_score` per distinct gender value.
fn box_stats_by_gender(dataset: &StudentDataset) -> Result<Vec<(String, BoxStats)>> {
    let genders = dataset
        .unique_values
        .get(GENDER)
        .with_context(|| format!("Missing grouping column '{GENDER}'"))?;

    let mut boxes = Vec::new();
    for gender in genders {
        let values: Vec<f64> = dataset
            .rows
            .iter()
            .filter(|r| r.get(GENDER) == Some(gender))
            .filter_map(|r| r.get(AVERAGE_SCORE).and_then(CellValue::as_f64))
            .collect();
        if let Some(stats) = BoxStats::from_values(&values) {
            boxes.push((gender.to_string(), stats));
        }
    }
    Ok(boxes)
}

// ---------------------------------------------------------------------------
// Stdout diagnostics (head / info) – not contractual
// ---------------------------------------------------------------------------

fn print_head(dataset: &StudentDataset, n: usize) {
    println!("{}", dataset.column_names.join("  "));
    for row in dataset.rows.iter().take(n) {
        let cells: Vec<String> = dataset
            .column_names
            .iter()
            .map(|col| row.get(col).map(|v| v.to_string()).unwrap_or_default())
            .collect();
        println!("{}", cells.join("  "));
    }
}

fn print_info(dataset: &StudentDataset) {
    println!("{} entries, {} columns", dataset.len(), dataset.column_names.len());
    for col in &dataset.column_names {
        println!(
            "{:<24} {:>6} non-null  {}",
            col,
            dataset.non_null_count(col),
            dataset.dtype(col)
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const TWO_ROW_CSV: &str = "\
math_score,reading_score,writing_score,gender,test_preparation
80,90,70,F,completed
60,50,55,M,none
";

    fn dataset_from_csv(contents: &str) -> (tempfile::TempDir, StudentDataset) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stud.csv");
        let mut f = std::fs::File::create(&path).unwrap();
        f.write_all(contents.as_bytes()).unwrap();
        let ds = load_file(&path).unwrap();
        (dir, ds)
    }

    #[test]
    fn average_score_is_unweighted_mean() {
        let (_dir, mut ds) = dataset_from_csv(TWO_ROW_CSV);
        add_average_score(&mut ds);

        assert_eq!(ds.len(), 2);
        assert_eq!(
            ds.rows[0].get(AVERAGE_SCORE),
            Some(&CellValue::Float(80.0))
        );
        assert_eq!(
            ds.rows[1].get(AVERAGE_SCORE),
            Some(&CellValue::Float(55.0))
        );
    }

    #[test]
    fn missing_source_score_yields_null() {
        let csv = "math_score,reading_score,writing_score,gender,test_preparation\n\
                   ,90,70,F,completed\n";
        let (_dir, mut ds) = dataset_from_csv(csv);
        add_average_score(&mut ds);

        assert_eq!(ds.rows[0].get(AVERAGE_SCORE), Some(&CellValue::Null));
        assert_eq!(ds.len(), 1);
    }

    #[test]
    fn run_returns_augmented_dataset_and_report() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stud.csv");
        std::fs::write(&path, TWO_ROW_CSV).unwrap();

        let (ds, report) = run(&path).unwrap();

        assert!(ds.column_names.iter().any(|c| c == AVERAGE_SCORE));
        assert_eq!(report.summary.groups.len(), 2);
        assert_eq!(
            report.histogram.iter().map(|b| b.count).sum::<usize>(),
            2
        );
        // average_score correlates with itself on the diagonal
        assert!(report.correlation.labels.iter().any(|l| l == AVERAGE_SCORE));
    }

    #[test]
    fn run_on_missing_file_errors() {
        assert!(run(Path::new("data/does_not_exist.csv")).is_err());
    }

    #[test]
    fn box_stats_cover_each_gender() {
        let (_dir, mut ds) = dataset_from_csv(TWO_ROW_CSV);
        add_average_score(&mut ds);
        let boxes = box_stats_by_gender(&ds).unwrap();

        let labels: Vec<&str> = boxes.iter().map(|(g, _)| g.as_str()).collect();
        assert_eq!(labels, vec!["F", "M"]);
        assert_eq!(boxes[0].1.median, 80.0);
        assert_eq!(boxes[1].1.median, 55.0);
    }
}
