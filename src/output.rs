//! Writes and reads the recipe output file.

use std::fs;
use std::path::Path;

use chrono::NaiveDate;

use crate::error::WriteError;
use crate::types::RecipeRecord;

/// Serialize a record as pretty-printed JSON and overwrite `path`.
pub fn write_record(path: &Path, record: &RecipeRecord) -> Result<(), WriteError> {
    let json = serde_json::to_string_pretty(record)?;

    fs::write(path, json).map_err(|source| WriteError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Read a previously written record back from `path`.
pub fn read_record(path: &Path) -> Result<RecipeRecord, WriteError> {
    let content = fs::read_to_string(path).map_err(|source| WriteError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(serde_json::from_str(&content)?)
}

/// Write the static fallback record, but only when no output exists yet.
/// A prior run's output is left untouched. Returns whether it wrote.
pub fn write_fallback_if_absent(path: &Path, today: NaiveDate) -> Result<bool, WriteError> {
    if path.exists() {
        return Ok(false);
    }

    write_record(path, &RecipeRecord::fallback(today))?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 2, 10).unwrap()
    }

    #[test]
    fn record_round_trips_through_the_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("daily_recipe.json");
        let record = RecipeRecord::fallback(date());

        write_record(&path, &record).unwrap();
        assert_eq!(read_record(&path).unwrap(), record);
    }

    #[test]
    fn write_fully_overwrites_prior_content() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("daily_recipe.json");
        fs::write(&path, "x".repeat(100_000)).unwrap();

        let record = RecipeRecord::fallback(date());
        write_record(&path, &record).unwrap();
        assert_eq!(read_record(&path).unwrap(), record);
    }

    #[test]
    fn fallback_writes_only_when_absent() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("daily_recipe.json");

        assert!(write_fallback_if_absent(&path, date()).unwrap());
        let first = fs::read(&path).unwrap();

        // Second call sees the file and leaves it alone.
        assert!(!write_fallback_if_absent(&path, date()).unwrap());
        assert_eq!(fs::read(&path).unwrap(), first);
    }

    #[test]
    fn write_to_missing_directory_is_an_io_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nope").join("daily_recipe.json");

        assert!(matches!(
            write_record(&path, &RecipeRecord::fallback(date())),
            Err(WriteError::Io { .. })
        ));
    }
}
