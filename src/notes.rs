use std::path::Path;

use anyhow::{Context, Result};

// ---------------------------------------------------------------------------
// Static notes document
// ---------------------------------------------------------------------------

/// Default output file for the notes document.
pub const DEFAULT_NOTES_PATH: &str = "EDA_Student_Performance_Notes.md";

/// The notes document, written verbatim to disk.
pub const NOTES: &str = "
# Student Performance — EDA Notebook

## 1. Purpose
Explore student performance dataset to find patterns and factors influencing academic outcomes.

## 2. Example Dataset Columns
- `student_id`, `gender`, `age`, `parental_education`, `lunch`, `test_preparation`, `math_score`, `reading_score`, `writing_score`, `attendance_rate`

## 3. EDA Steps
1. Load and inspect data
2. Clean missing values / duplicates
3. Descriptive statistics
4. Visualizations: histograms, boxplots, bar charts, scatterplots, heatmaps
5. Grouped summaries and pivot tables
6. Optional statistical tests
7. Feature engineering: average_score, score_category, pass/fail
8. Quick modeling preparation checklist
";

/// Write the notes document to `path`, overwriting any existing file,
/// and confirm on stdout.  Errors (missing parent directory, permission)
/// propagate to the caller.
pub fn save(path: &Path) -> Result<()> {
    std::fs::write(path, NOTES)
        .with_context(|| format!("writing notes to {}", path.display()))?;
    println!("Saved notes to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_writes_document_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.md");

        save(&path).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), NOTES);
    }

    #[test]
    fn save_twice_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.md");

        save(&path).unwrap();
        let first = std::fs::read(&path).unwrap();
        save(&path).unwrap();
        let second = std::fs::read(&path).unwrap();

        assert_eq!(first, second);
        assert_eq!(second, NOTES.as_bytes());
    }

    #[test]
    fn save_into_missing_directory_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no_such_dir").join("notes.md");
        assert!(save(&path).is_err());
    }
}
