//! Validate command implementation
//!
//! Checks dropped cable archive files for consistent shape before they are
//! committed to conversion: a file passes when it is non-empty and every
//! record carries the same number of fields as the first. Optionally moves
//! each file to a success or failure directory and writes a report file
//! alongside, mirroring the drop-folder workflow the archives arrive
//! through.

use std::path::{Path, PathBuf};

use colored::Colorize;
use serde::Serialize;
use tracing::{debug, info, warn};
use walkdir::WalkDir;

use crate::cli::args::{OutputFormat, ValidateArgs};
use crate::constants::{
    CSV_DELIMITER, CSV_ESCAPE, CSV_INPUT_EXTENSION, CSV_QUOTE, VALIDATION_REPORT_SUFFIX,
};
use crate::{Error, Result};

/// Outcome of validating one file
#[derive(Debug, Clone, Serialize)]
pub struct FileOutcome {
    /// File the outcome refers to
    pub path: PathBuf,

    /// Whether the file passed validation
    pub passed: bool,

    /// Total records read (including the header row)
    pub records: usize,

    /// Failure reason, when the file did not pass
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// Run the validate command
pub fn run_validate(args: ValidateArgs) -> Result<()> {
    args.validate()?;

    let files = collect_csv_files(&args.input)?;
    if files.is_empty() {
        return Err(Error::configuration(format!(
            "no CSV files found under {}",
            args.input.display()
        )));
    }

    info!("Validating {} file(s)", files.len());

    let mut outcomes = Vec::with_capacity(files.len());
    for file in files {
        let outcome = validate_file(&file)?;
        if outcome.passed {
            debug!("{}: {} records, consistent", file.display(), outcome.records);
        } else {
            warn!(
                "{}: {}",
                file.display(),
                outcome.reason.as_deref().unwrap_or("failed")
            );
        }

        if args.moves_files() {
            let destination = if outcome.passed {
                args.success_dir.as_deref()
            } else {
                args.failure_dir.as_deref()
            };
            if let Some(dir) = destination {
                move_with_report(&file, dir, &outcome)?;
            }
        }

        outcomes.push(outcome);
    }

    match args.format {
        OutputFormat::Human => print_human_report(&outcomes),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&outcomes)?),
    }

    Ok(())
}

/// Gather the input file, or every `.csv` file below the input directory
fn collect_csv_files(input: &Path) -> Result<Vec<PathBuf>> {
    if input.is_file() {
        return Ok(vec![input.to_path_buf()]);
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(input) {
        let entry = entry?;
        if entry.file_type().is_file()
            && entry
                .path()
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case(CSV_INPUT_EXTENSION))
        {
            files.push(entry.path().to_path_buf());
        }
    }

    files.sort();
    Ok(files)
}

/// Check one file: non-empty, and every record the same width as the first
fn validate_file(path: &Path) -> Result<FileOutcome> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| Error::io(format!("failed to read {}", path.display()), e))?;

    if content.trim().is_empty() {
        return Ok(FileOutcome {
            path: path.to_path_buf(),
            passed: false,
            records: 0,
            reason: Some("empty file".to_string()),
        });
    }

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(CSV_DELIMITER)
        .quote(CSV_QUOTE)
        .escape(Some(CSV_ESCAPE))
        .flexible(true)
        .has_headers(false)
        .from_reader(content.as_bytes());

    let mut expected_width = None;
    let mut records = 0usize;

    for (index, result) in reader.records().enumerate() {
        let record = result.map_err(|e| {
            Error::csv_parsing(
                path.display().to_string(),
                format!("read failure at record {}", index + 1),
                Some(e),
            )
        })?;
        records += 1;

        let width = *expected_width.get_or_insert(record.len());
        if record.len() != width {
            return Ok(FileOutcome {
                path: path.to_path_buf(),
                passed: false,
                records,
                reason: Some(format!(
                    "record {} has {} fields, expected {}",
                    index + 1,
                    record.len(),
                    width
                )),
            });
        }
    }

    Ok(FileOutcome {
        path: path.to_path_buf(),
        passed: true,
        records,
        reason: None,
    })
}

/// Move a validated file into the outcome directory and write its report
fn move_with_report(file: &Path, dir: &Path, outcome: &FileOutcome) -> Result<()> {
    std::fs::create_dir_all(dir)
        .map_err(|e| Error::io(format!("failed to create {}", dir.display()), e))?;

    let file_name = file
        .file_name()
        .ok_or_else(|| Error::configuration(format!("invalid file path: {}", file.display())))?;
    let destination = dir.join(file_name);

    std::fs::rename(file, &destination).map_err(|e| {
        Error::io(
            format!(
                "failed to move {} to {}",
                file.display(),
                destination.display()
            ),
            e,
        )
    })?;

    let report = match &outcome.reason {
        Some(reason) => format!("FAILURE: {}\n", reason),
        None => format!("SUCCESS: {} records processed\n", outcome.records),
    };

    let mut report_name = file_name.to_os_string();
    report_name.push(VALIDATION_REPORT_SUFFIX);
    let report_path = dir.join(report_name);
    std::fs::write(&report_path, report)
        .map_err(|e| Error::io(format!("failed to write {}", report_path.display()), e))?;

    info!("Moved {} to {}", file.display(), destination.display());
    Ok(())
}

fn print_human_report(outcomes: &[FileOutcome]) {
    let mut passed = 0usize;

    for outcome in outcomes {
        if outcome.passed {
            passed += 1;
            println!(
                "{} {} ({} records)",
                "pass:".green().bold(),
                outcome.path.display(),
                outcome.records
            );
        } else {
            println!(
                "{} {} ({})",
                "fail:".red().bold(),
                outcome.path.display(),
                outcome.reason.as_deref().unwrap_or("failed")
            );
        }
    }

    println!(
        "{} of {} file(s) passed validation",
        passed,
        outcomes.len()
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_consistent_file_passes() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("cables.csv");
        std::fs::write(&file, "a,b,c\n1,2,3\n4,5,6\n").unwrap();

        let outcome = validate_file(&file).unwrap();
        assert!(outcome.passed);
        assert_eq!(outcome.records, 3);
    }

    #[test]
    fn test_width_mismatch_reports_record_number() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("cables.csv");
        std::fs::write(&file, "a,b,c\n1,2,3\n4,5\n7,8,9\n").unwrap();

        let outcome = validate_file(&file).unwrap();
        assert!(!outcome.passed);
        assert_eq!(outcome.reason.as_deref(), Some("record 3 has 2 fields, expected 3"));
    }

    #[test]
    fn test_empty_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("empty.csv");
        std::fs::write(&file, "").unwrap();

        let outcome = validate_file(&file).unwrap();
        assert!(!outcome.passed);
        assert_eq!(outcome.reason.as_deref(), Some("empty file"));
    }

    #[test]
    fn test_move_with_report() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("cables.csv");
        std::fs::write(&file, "a,b\n1,2\n").unwrap();
        let success_dir = dir.path().join("success");

        let outcome = validate_file(&file).unwrap();
        move_with_report(&file, &success_dir, &outcome).unwrap();

        assert!(!file.exists());
        assert!(success_dir.join("cables.csv").exists());
        let report =
            std::fs::read_to_string(success_dir.join("cables.csv.report.txt")).unwrap();
        assert_eq!(report, "SUCCESS: 2 records processed\n");
    }

    #[test]
    fn test_collect_csv_files_filters_extension() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("one.csv"), "a\n").unwrap();
        std::fs::write(dir.path().join("two.CSV"), "a\n").unwrap();
        std::fs::write(dir.path().join("note.txt"), "ignore").unwrap();

        let files = collect_csv_files(dir.path()).unwrap();
        assert_eq!(files.len(), 2);
    }
}
