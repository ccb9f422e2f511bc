//! File handling around the syntax checker.
//!
//! Finds the numbered input files (`1.txt`, `2.txt`, ...), checks each one
//! and renders the per-file verdicts into the plain-text report.

use std::{
    fmt::Display,
    fs, io,
    path::{Path, PathBuf},
};

use thiserror::Error;
use tracing::{debug, warn};

use crate::check_syntax_with;

#[derive(Error, Debug)]
pub enum FileError {
    #[error("File {} not found or could not be read.", .path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// The outcome of checking one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    /// The file name as shown in the report
    pub name: String,
    /// Formatted errors; empty if the file is syntactically correct
    pub errors: Vec<String>,
}

impl FileReport {
    pub fn is_correct(&self) -> bool {
        self.errors.is_empty()
    }
}

impl Display for FileReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_correct() {
            return write!(f, "{}: Syntactically Correct.", self.name);
        }

        write!(f, "{}: Syntax Errors:", self.name)?;
        for error in &self.errors {
            write!(f, "\n  {}", error)?;
        }
        Ok(())
    }
}

/// Lists `dir/1.txt`, `dir/2.txt`, ... up to the first missing number.
pub fn discover_files(dir: &Path) -> Vec<PathBuf> {
    let mut files = vec![];

    for index in 1.. {
        let path = dir.join(format!("{}.txt", index));
        if !path.exists() {
            break;
        }
        files.push(path);
    }

    debug!(dir = %dir.display(), count = files.len(), "discovered input files");
    files
}

/// Reads a source file, turning `\r\n` and lone `\r` line endings into `\n`.
pub fn read_source(path: &Path) -> Result<String, FileError> {
    let content = fs::read_to_string(path).map_err(|source| FileError::Unreadable {
        path: path.to_path_buf(),
        source,
    })?;

    if content.contains('\r') {
        Ok(content.replace("\r\n", "\n").replace('\r', "\n"))
    } else {
        Ok(content)
    }
}

/// Reads and checks one file.
///
/// A file that cannot be read gets a single error line describing the
/// failure instead of syntax errors.
pub fn check_file(path: &Path, debug: bool) -> FileReport {
    let errors = match read_source(path) {
        Ok(source) => check_syntax_with(&source, debug),
        Err(err) => {
            warn!(path = %path.display(), cause = %io_cause(&err), "could not read input file");
            vec![err.to_string()]
        }
    };

    FileReport {
        name: path.display().to_string(),
        errors,
    }
}

fn io_cause(err: &FileError) -> &io::Error {
    match err {
        FileError::Unreadable { source, .. } => source,
    }
}

pub fn check_files(paths: &[PathBuf], debug: bool) -> Vec<FileReport> {
    paths.iter().map(|path| check_file(path, debug)).collect()
}

/// Renders reports one after another, every line newline-terminated.
pub fn render(reports: &[FileReport]) -> String {
    let mut output = String::new();
    for report in reports {
        output.push_str(&report.to_string());
        output.push('\n');
    }
    output
}

pub fn write_report(path: &Path, reports: &[FileReport]) -> io::Result<()> {
    fs::write(path, render(reports))
}
