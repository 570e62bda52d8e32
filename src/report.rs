// SPDX-FileCopyrightText: © 2025 TTKB, LLC
// SPDX-License-Identifier: BSD-3-CLAUSE

use std::env;
use std::fmt::{Display, Formatter};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Result;
use log::{debug, trace};

use crate::error::PathResolutionError;

pub const GREETING: &str = "Hello, World!";

/// The name and absolute location of a program file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Report {
    name: String,
    path: PathBuf,
}

impl Report {
    /// The final segment of the path the program was located by.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The canonical, absolute path to the program.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Display for Report {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        writeln!(f, "{GREETING}")?;
        writeln!(f, "Script name: {}", self.name)?;
        writeln!(f, "Script path: {}", self.path.display())
    }
}

/// Builds a [Report] for the program stored at `path`. The name is taken
/// from `path` as given, the location is canonicalized against the current
/// directory and any symbolic links are resolved.
pub fn locate(path: &Path) -> Result<Report, PathResolutionError> {
    if path.as_os_str().is_empty() {
        return Err(PathResolutionError::Empty);
    }

    let name = path
        .file_name()
        .ok_or_else(|| PathResolutionError::NoFileName(path.to_path_buf()))?
        .to_string_lossy()
        .into_owned();

    let abs = fs::canonicalize(path).map_err(|source| PathResolutionError::Canonicalize {
        path: path.to_path_buf(),
        source,
    })?;
    trace!("canonicalized {} to {}", path.display(), abs.display());

    Ok(Report { name, path: abs })
}

/// Builds a [Report] for the currently running executable.
pub fn current() -> Result<Report, PathResolutionError> {
    let exe = env::current_exe().map_err(PathResolutionError::Unavailable)?;
    debug!("current executable: {}", exe.display());
    locate(&exe)
}

/// Greets and reports the running program to `out`. The program is located
/// before anything is written, so a failure leaves `out` untouched.
pub fn run<W: Write>(out: &mut W) -> Result<()> {
    emit(&current()?, out)
}

/// Like [run], for the program stored at `path`.
pub fn run_at<W: Write>(path: &Path, out: &mut W) -> Result<()> {
    emit(&locate(path)?, out)
}

fn emit<W: Write>(report: &Report, out: &mut W) -> Result<()> {
    write!(out, "{report}")?;
    out.flush()?;
    Ok(())
}
