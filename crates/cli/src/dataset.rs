//! Datasets for framing: inline lists or CSV columns (read through polars).

use std::path::Path;

use anyhow::{bail, Context, Result};
use polars::prelude::*;

/// Parse `"1, 2, 2.5"` into samples.
pub fn parse_values(s: &str) -> Result<Vec<f64>> {
    s.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(|t| t.parse::<f64>().with_context(|| format!("bad number {t:?}")))
        .collect()
}

/// Parse `"1:2, 2:3"` into `(x, y)` pairs.
pub fn parse_pairs(s: &str) -> Result<Vec<[f64; 2]>> {
    s.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(|t| {
            let Some((x, y)) = t.split_once(':') else {
                bail!("bad pair {t:?}, expected x:y");
            };
            Ok([
                x.trim().parse().with_context(|| format!("bad x in {t:?}"))?,
                y.trim().parse().with_context(|| format!("bad y in {t:?}"))?,
            ])
        })
        .collect()
}

/// Read one numeric column of a CSV file; nulls are skipped.
pub fn read_column(path: &Path, column: &str) -> Result<Vec<f64>> {
    let df = LazyCsvReader::new(path)
        .with_infer_schema_length(Some(100))
        .finish()
        .with_context(|| format!("opening {}", path.display()))?
        .select([col(column).cast(DataType::Float64)])
        .collect()
        .with_context(|| format!("reading column {column:?} of {}", path.display()))?;
    let values: Vec<f64> = df.column(column)?.f64()?.into_iter().flatten().collect();
    tracing::debug!(rows = df.height(), kept = values.len(), column, "csv_column");
    Ok(values)
}

/// Read two numeric columns as `(x, y)` pairs; rows with a null in either are skipped.
pub fn read_pairs(path: &Path, x_column: &str, y_column: &str) -> Result<Vec<[f64; 2]>> {
    let df = LazyCsvReader::new(path)
        .with_infer_schema_length(Some(100))
        .finish()
        .with_context(|| format!("opening {}", path.display()))?
        .select([
            col(x_column).cast(DataType::Float64),
            col(y_column).cast(DataType::Float64),
        ])
        .collect()
        .with_context(|| format!("reading columns of {}", path.display()))?;
    let xs = df.column(x_column)?.f64()?;
    let ys = df.column(y_column)?.f64()?;
    let pairs: Vec<[f64; 2]> = xs
        .into_iter()
        .zip(ys.into_iter())
        .filter_map(|(x, y)| Some([x?, y?]))
        .collect();
    tracing::debug!(rows = df.height(), kept = pairs.len(), "csv_pairs");
    Ok(pairs)
}
