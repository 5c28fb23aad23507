//! Plain-text export of the response panel
//!
//! Files are named `stoic-response-YYYY-MM-DD.txt`. A second save on the
//! same day gets a `-2`, `-3`, ... suffix instead of overwriting.

use chrono::{Local, NaiveDate};
use std::fs;
use std::path::{Path, PathBuf};
use stoic_application::{ExportError, ResponseExporter, ResponseSnapshot};
use stoic_domain::AnswerResult;

const FILE_PREFIX: &str = "stoic-response";

/// Writes snapshots as UTF-8 text files
#[derive(Debug, Default)]
pub struct TextResponseExporter;

impl TextResponseExporter {
    pub fn new() -> Self {
        Self
    }

    /// Render a snapshot the way it is written to disk
    pub fn render(snapshot: &ResponseSnapshot) -> String {
        let label = match snapshot.result {
            AnswerResult::Success(_) => "Answer",
            AnswerResult::Failure(_) => "No answer",
        };
        format!(
            "Question:\n{}\n\n{}:\n{}\n",
            snapshot.question,
            label,
            snapshot.result.text()
        )
    }

    /// Export with an explicit date (the trait impl uses today's date)
    pub fn export_dated(
        &self,
        snapshot: &ResponseSnapshot,
        dir: &Path,
        date: NaiveDate,
    ) -> Result<PathBuf, ExportError> {
        fs::create_dir_all(dir)?;
        let path = Self::free_path(dir, date);
        fs::write(&path, Self::render(snapshot))?;
        Ok(path)
    }

    fn free_path(dir: &Path, date: NaiveDate) -> PathBuf {
        let stem = format!("{}-{}", FILE_PREFIX, date.format("%Y-%m-%d"));
        let first = dir.join(format!("{stem}.txt"));
        if !first.exists() {
            return first;
        }
        (2u32..)
            .map(|n| dir.join(format!("{stem}-{n}.txt")))
            .find(|path| !path.exists())
            .unwrap_or(first)
    }
}

impl ResponseExporter for TextResponseExporter {
    fn export(&self, snapshot: &ResponseSnapshot, dir: &Path) -> Result<PathBuf, ExportError> {
        self.export_dated(snapshot, dir, Local::now().date_naive())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stoic_domain::Question;
    use tempfile::TempDir;

    fn snapshot(result: AnswerResult) -> ResponseSnapshot {
        ResponseSnapshot::new(Question::new("What should I fear?").unwrap(), result)
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 15).unwrap()
    }

    #[test]
    fn test_render_success() {
        let text = TextResponseExporter::render(&snapshot(AnswerResult::Success(
            "Nothing outside your judgment.".to_string(),
        )));
        assert_eq!(
            text,
            "Question:\nWhat should I fear?\n\nAnswer:\nNothing outside your judgment.\n"
        );
    }

    #[test]
    fn test_render_failure() {
        let text =
            TextResponseExporter::render(&snapshot(AnswerResult::Failure("busy".to_string())));
        assert!(text.contains("No answer:\nbusy"));
    }

    #[test]
    fn test_export_writes_dated_file() {
        let dir = TempDir::new().unwrap();
        let exporter = TextResponseExporter::new();
        let snap = snapshot(AnswerResult::Success("Virtue.".to_string()));

        let path = exporter.export_dated(&snap, dir.path(), date()).unwrap();

        assert_eq!(path, dir.path().join("stoic-response-2026-10-15.txt"));
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            TextResponseExporter::render(&snap)
        );
    }

    #[test]
    fn test_export_does_not_overwrite_same_day() {
        let dir = TempDir::new().unwrap();
        let exporter = TextResponseExporter::new();
        let snap = snapshot(AnswerResult::Success("Virtue.".to_string()));

        let first = exporter.export_dated(&snap, dir.path(), date()).unwrap();
        let second = exporter.export_dated(&snap, dir.path(), date()).unwrap();
        let third = exporter.export_dated(&snap, dir.path(), date()).unwrap();

        assert_ne!(first, second);
        assert_eq!(second, dir.path().join("stoic-response-2026-10-15-2.txt"));
        assert_eq!(third, dir.path().join("stoic-response-2026-10-15-3.txt"));
    }

    #[test]
    fn test_export_creates_missing_dir() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("a").join("b");
        let snap = snapshot(AnswerResult::Success("Virtue.".to_string()));

        let path = TextResponseExporter::new()
            .export_dated(&snap, &nested, date())
            .unwrap();

        assert!(path.starts_with(&nested));
        assert!(path.exists());
    }

    #[test]
    fn test_export_into_file_path_is_io_error() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "not a dir").unwrap();
        let snap = snapshot(AnswerResult::Success("Virtue.".to_string()));

        let result = TextResponseExporter::new().export_dated(&snap, &blocker, date());

        assert!(matches!(result, Err(ExportError::Io(_))));
    }
}
