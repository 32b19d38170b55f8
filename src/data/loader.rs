use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result, bail};
use arrow::array::{
    Array, AsArray, BooleanArray, Float32Array, Float64Array, Int32Array, Int64Array, StringArray,
};
use arrow::datatypes::DataType;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use serde_json::Value as JsonValue;

use super::model::{CellValue, Row, StudentDataset};

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a student-performance table from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv`     – header row with column names, one record per line
/// * `.json`    – `[{ "math_score": 80, "gender": "F", ... }, ...]`
/// * `.parquet` – flat scalar columns, as written by Pandas/Polars
pub fn load_file(path: &Path) -> Result<StudentDataset> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "csv" => load_csv(path),
        "json" => load_json(path),
        "parquet" | "pq" => load_parquet(path),
        other => bail!("Unsupported file extension: .{other}"),
    }
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// CSV layout: header row with column names, every cell a scalar.
/// Cell types are inferred per value (int → float → string; empty → null).
fn load_csv(path: &Path) -> Result<StudentDataset> {
    let mut reader = csv::Reader::from_path(path).context("opening CSV")?;
    let headers: Vec<String> = reader
        .headers()
        .context("reading CSV headers")?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let mut rows = Vec::new();

    for (row_no, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("CSV row {row_no}"))?;

        let mut row = Row::new();
        for (col_idx, value) in record.iter().enumerate() {
            let Some(col_name) = headers.get(col_idx) else {
                bail!("CSV row {row_no}: more cells than header columns");
            };
            row.insert(col_name.clone(), guess_cell_type(value));
        }
        rows.push(row);
    }

    Ok(StudentDataset::from_rows(rows, headers))
}

fn guess_cell_type(s: &str) -> CellValue {
    if s.is_empty() {
        return CellValue::Null;
    }
    if let Ok(i) = s.parse::<i64>() {
        return CellValue::Integer(i);
    }
    if let Ok(f) = s.parse::<f64>() {
        return CellValue::Float(f);
    }
    CellValue::String(s.to_string())
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Expected JSON schema (records-oriented, the default `df.to_json(orient='records')`):
///
/// ```json
/// [
///   { "student_id": 1, "gender": "F", "math_score": 80, ... },
///   ...
/// ]
/// ```
fn load_json(path: &Path) -> Result<StudentDataset> {
    let text = std::fs::read_to_string(path).context("reading JSON file")?;
    let root: JsonValue = serde_json::from_str(&text).context("parsing JSON")?;

    let records = root.as_array().context("Expected top-level JSON array")?;

    let mut rows = Vec::with_capacity(records.len());
    let mut column_names: Vec<String> = Vec::new();

    for (i, rec) in records.iter().enumerate() {
        let obj = rec
            .as_object()
            .with_context(|| format!("Row {i} is not a JSON object"))?;

        let mut row = Row::new();
        for (key, val) in obj {
            if !column_names.iter().any(|c| c == key) {
                column_names.push(key.clone());
            }
            row.insert(key.clone(), json_to_cell(val));
        }
        rows.push(row);
    }

    Ok(StudentDataset::from_rows(rows, column_names))
}

fn json_to_cell(val: &JsonValue) -> CellValue {
    match val {
        JsonValue::String(s) => CellValue::String(s.clone()),
        JsonValue::Number(n) => {
            if let Some(i) = n.as_i64() {
                CellValue::Integer(i)
            } else if let Some(f) = n.as_f64() {
                CellValue::Float(f)
            } else {
                CellValue::String(n.to_string())
            }
        }
        JsonValue::Bool(b) => CellValue::String(b.to_string()),
        JsonValue::Null => CellValue::Null,
        other => CellValue::String(other.to_string()),
    }
}

// ---------------------------------------------------------------------------
// Parquet loader
// ---------------------------------------------------------------------------

/// Load a Parquet file containing a flat student table.
///
/// Every column must hold scalar values (strings, ints, floats, bools).
/// Works with files written by both **Pandas** (`df.to_parquet()`) and
/// **Polars** (`df.write_parquet()`).
fn load_parquet(path: &Path) -> Result<StudentDataset> {
    let file = std::fs::File::open(path).context("opening parquet file")?;
    let builder =
        ParquetRecordBatchReaderBuilder::try_new(file).context("reading parquet metadata")?;
    let reader = builder.build().context("building parquet reader")?;

    let mut rows = Vec::new();
    let mut column_names: Vec<String> = Vec::new();

    for batch_result in reader {
        let batch = batch_result.context("reading parquet record batch")?;
        let schema = batch.schema();

        if column_names.is_empty() {
            column_names = schema.fields().iter().map(|f| f.name().clone()).collect();
        }

        for row_idx in 0..batch.num_rows() {
            let mut row = Row::new();
            for (col_idx, field) in schema.fields().iter().enumerate() {
                let col = batch.column(col_idx);
                let value = extract_cell_value(col, row_idx).with_context(|| {
                    format!("Row {row_idx}: failed to read column '{}'", field.name())
                })?;
                row.insert(field.name().clone(), value);
            }
            rows.push(row);
        }
    }

    Ok(StudentDataset::from_rows(rows, column_names))
}

/// Extract a single scalar cell from an Arrow column at a given row.
fn extract_cell_value(col: &Arc<dyn Array>, row: usize) -> Result<CellValue> {
    if col.is_null(row) {
        return Ok(CellValue::Null);
    }
    let value = match col.data_type() {
        DataType::Utf8 | DataType::LargeUtf8 => {
            if let Some(s) = col.as_any().downcast_ref::<StringArray>() {
                CellValue::String(s.value(row).to_string())
            } else {
                // LargeStringArray
                let s = col.as_string::<i64>();
                CellValue::String(s.value(row).to_string())
            }
        }
        DataType::Int32 => {
            let arr = col.as_any().downcast_ref::<Int32Array>().unwrap();
            CellValue::Integer(arr.value(row) as i64)
        }
        DataType::Int64 => {
            let arr = col.as_any().downcast_ref::<Int64Array>().unwrap();
            CellValue::Integer(arr.value(row))
        }
        DataType::Float32 => {
            let arr = col.as_any().downcast_ref::<Float32Array>().unwrap();
            CellValue::Float(arr.value(row) as f64)
        }
        DataType::Float64 => {
            let arr = col.as_any().downcast_ref::<Float64Array>().unwrap();
            CellValue::Float(arr.value(row))
        }
        DataType::Boolean => {
            let arr = col.as_any().downcast_ref::<BooleanArray>().unwrap();
            CellValue::String(arr.value(row).to_string())
        }
        other => bail!("Expected a scalar column, got {other:?}"),
    };
    Ok(value)
}
