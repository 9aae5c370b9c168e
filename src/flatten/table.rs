use crate::flatten::flattener::flatten;
use anyhow::{Context, Result};
use serde_json::{Map, Value};
use std::collections::BTreeSet;
use std::io::Write;

/// Flatten every record and compute the header set
///
/// Headers are the lexicographically sorted union of all flat keys across
/// all records. Non-object records are skipped.
pub fn tabulate(records: &[Value]) -> (Vec<String>, Vec<Map<String, Value>>) {
    let rows: Vec<Map<String, Value>> = records
        .iter()
        .filter_map(Value::as_object)
        .map(flatten)
        .collect();

    let headers: BTreeSet<String> = rows.iter().flat_map(|row| row.keys().cloned()).collect();
    (headers.into_iter().collect(), rows)
}

/// Write a sequence of records as fully quoted CSV
///
/// Emits a header row followed by one row per record; a record missing a
/// header column gets an empty (but still quoted) cell. An empty header set
/// produces empty output rather than an error.
pub fn write_csv<W: Write>(writer: W, records: &[Value]) -> Result<()> {
    let (headers, rows) = tabulate(records);
    if headers.is_empty() {
        return Ok(());
    }

    let mut csv_writer = csv::WriterBuilder::new()
        .quote_style(csv::QuoteStyle::Always)
        .from_writer(writer);

    csv_writer
        .write_record(&headers)
        .context("writing CSV header")?;

    for row in &rows {
        let cells: Vec<String> = headers
            .iter()
            .map(|header| row.get(header).map(cell_text).unwrap_or_default())
            .collect();
        csv_writer.write_record(&cells).context("writing CSV row")?;
    }

    csv_writer.flush().context("flushing CSV output")?;
    Ok(())
}

/// Render a flattened scalar for a CSV cell
fn cell_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
