use serde::Serialize;
use std::fs;
use std::path::Path;

use crate::passes::{DateGroup, Pass, PassError};

pub const TODAY_FILE: &str = "iss_hoy.json";
pub const ALL_FILE: &str = "iss_pasos.json";

/// Passes listed for `date`, empty when the table had none.
pub fn select_day<'a>(grouped: &'a DateGroup, date: &str) -> &'a [Pass] {
    grouped.get(date).map(Vec::as_slice).unwrap_or(&[])
}

/// Pretty JSON with two-space indent; non-ASCII text is written as is.
pub fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<(), PassError> {
    let json = serde_json::to_string_pretty(value)?;
    fs::write(path, json)?;
    log::info!("Wrote {}", path.display());
    Ok(())
}

/// Write the passes for `date` and return how many were written.
pub fn write_day(grouped: &DateGroup, date: &str, path: &Path) -> Result<usize, PassError> {
    let passes = select_day(grouped, date);
    write_json(path, passes)?;
    Ok(passes.len())
}

pub fn day_summary(path: &Path, count: usize) -> String {
    format!(
        "Archivo '{}' generado con {} paso(s).",
        path.display(),
        count
    )
}

pub fn all_summary(path: &Path, grouped: &DateGroup) -> String {
    let passes: usize = grouped.values().map(Vec::len).sum();
    format!(
        "Archivo '{}' generado con {} paso(s) en {} fecha(s).",
        path.display(),
        passes,
        grouped.len()
    )
}
