//! Output sink for typeset lines
//!
//! The sink writes the finished lines to a file, prints them to stdout,
//! or both. A write failure is reported on stderr and recovered: console
//! output still happens, and the caller keeps the lines either way.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Where the finished table goes.
#[derive(Debug, Clone, Default)]
pub struct OutputOptions {
    /// Destination file; parent directories are created, existing
    /// content is overwritten.
    pub file: Option<PathBuf>,
    /// Print to stdout. `None` means: print only when no file is given.
    pub show: Option<bool>,
}

impl OutputOptions {
    /// Write to a file, no console output unless requested.
    pub fn to_file(path: impl Into<PathBuf>) -> Self {
        OutputOptions {
            file: Some(path.into()),
            show: None,
        }
    }

    /// Console output only.
    pub fn shown() -> Self {
        OutputOptions {
            file: None,
            show: Some(true),
        }
    }

    /// Neither file nor console; useful when only the returned lines
    /// matter.
    pub fn silent() -> Self {
        OutputOptions {
            file: None,
            show: Some(false),
        }
    }
}

/// Hand the finished lines to their destinations.
pub fn write_lines(lines: &[String], opts: &OutputOptions) {
    if let Some(path) = &opts.file {
        if let Err(err) = write_file(lines, path) {
            eprintln!("Failed to write table to {:?}: {}", path, err);
        }
    }
    if opts.show.unwrap_or(opts.file.is_none()) {
        for line in lines {
            println!("{}", line);
        }
    }
}

fn write_file(lines: &[String], path: &Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let mut file = fs::File::create(path)?;
    for line in lines {
        writeln!(file, "{}", line)?;
    }
    Ok(())
}
