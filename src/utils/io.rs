//! File input and alert document output.

use crate::{error::LogHunterError, models::Alert};
use std::{
    fs::{self, File},
    io::{BufRead, BufReader, Write},
    path::Path,
};
use tracing::info;

/// Read a text file line by line
pub fn read_lines(path: impl AsRef<Path>) -> Result<Vec<String>, LogHunterError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| LogHunterError::io(path, e))?;

    BufReader::new(file)
        .lines()
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| LogHunterError::io(path, e))
}

/// Render alerts as a pretty-printed JSON array
pub fn render_alerts(alerts: &[Alert]) -> Result<String, LogHunterError> {
    Ok(serde_json::to_string_pretty(alerts)?)
}

/// Write the rendered alert document to `path`
pub fn write_alerts(path: impl AsRef<Path>, document: &str) -> Result<(), LogHunterError> {
    let path = path.as_ref();
    fs::write(path, format!("{document}\n")).map_err(|e| LogHunterError::io(path, e))?;

    info!(path = %path.display(), bytes = document.len(), "Wrote alert document");
    Ok(())
}

/// Print the rendered alert document to stdout
pub fn print_alerts(document: &str) -> Result<(), LogHunterError> {
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{document}")
        .and_then(|_| stdout.flush())
        .map_err(|e| LogHunterError::io("<stdout>", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tempfile::tempdir;

    #[test]
    fn test_render_empty_alerts() {
        assert_eq!(render_alerts(&[]).unwrap(), "[]");
    }

    #[test]
    fn test_write_then_read_document() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("alerts.json");

        let ts = NaiveDate::from_ymd_opt(2024, 5, 1)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap();
        let alerts = vec![Alert::bruteforce("root", "10.0.0.5", 1, 10, ts, ts)];
        let document = render_alerts(&alerts).unwrap();
        write_alerts(&path, &document).unwrap();

        let parsed: Vec<Alert> = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(parsed, alerts);
    }

    #[test]
    fn test_read_lines_missing_file() {
        let dir = tempdir().unwrap();
        let err = read_lines(dir.path().join("missing.log")).unwrap_err();
        assert!(matches!(err, LogHunterError::Io { .. }));
    }
}
