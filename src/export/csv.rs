use crate::errors::AppResult;
use crate::export::notify_export_success;
use crate::ui::messages::info;
use csv::{QuoteStyle, WriterBuilder};
use serde::Serialize;
use std::path::Path;

/// Write `rows` as CSV; the header comes from the row field names and every
/// non-numeric field is quoted.
pub(crate) fn write_rows<T: Serialize>(path: &Path, label: &str, rows: &[T]) -> AppResult<()> {
    info(format!("Exporting {label} to CSV: {}", path.display()));

    let mut wtr = WriterBuilder::new()
        .quote_style(QuoteStyle::NonNumeric)
        .from_path(path)?;

    for row in rows {
        wtr.serialize(row)?;
    }

    wtr.flush()?;

    notify_export_success(label, path);
    Ok(())
}

/// Header-only file for an empty export, so both files always exist.
pub(crate) fn write_header(path: &Path, label: &str, header: &[&str]) -> AppResult<()> {
    let mut wtr = WriterBuilder::new()
        .quote_style(QuoteStyle::NonNumeric)
        .from_path(path)?;

    wtr.write_record(header)?;
    wtr.flush()?;

    notify_export_success(label, path);
    Ok(())
}
