//! Append-only run log, mirrored to stdout.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

use chrono::Local;

/// Timestamped status log for one run. Lines are appended to the log file
/// (never rotated or truncated here) and mirrored to stdout so scheduled
/// runners capture them too.
pub struct RunLog {
    path: PathBuf,
}

impl RunLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Append `[YYYY-MM-DD HH:MM:SS] message`.
    ///
    /// A failure to write the log file is swallowed: the log is
    /// observability, and a broken log must not abort a run that can still
    /// produce the recipe file. The line still reaches stdout.
    pub fn append(&self, message: &str) {
        let line = format!("[{}] {}", Local::now().format("%Y-%m-%d %H:%M:%S"), message);
        println!("{line}");

        let result = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .and_then(|mut file| writeln!(file, "{line}"));

        if let Err(e) = result {
            tracing::warn!(path = %self.path.display(), error = %e, "failed to append to run log");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;
    use tempfile::tempdir;

    #[test]
    fn lines_accumulate_with_timestamp_prefixes() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("fetch_log.txt");
        let log = RunLog::new(&path);

        log.append("first");
        log.append("second");

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);

        for (line, message) in lines.iter().zip(["first", "second"]) {
            let stamp = &line[1..20];
            NaiveDateTime::parse_from_str(stamp, "%Y-%m-%d %H:%M:%S").unwrap();
            assert_eq!(&line[21..], format!(" {message}"));
        }
    }

    #[test]
    fn unwritable_log_path_does_not_panic() {
        let dir = tempdir().unwrap();
        let log = RunLog::new(dir.path()); // a directory, not a file
        log.append("goes to stdout only");
    }
}
