// SPDX-FileCopyrightText: © 2025 TTKB, LLC
// SPDX-License-Identifier: BSD-3-CLAUSE

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Raised when the running program's own path cannot be determined.
#[derive(Debug, Error)]
pub enum PathResolutionError {
    /// The host could not report where the program lives.
    #[error("unable to determine the program path: {0}")]
    Unavailable(#[source] io::Error),

    #[error("the program path is empty")]
    Empty,

    /// The path ends in a root, prefix, or `..`.
    #[error("the program path has no file name: {}", .0.display())]
    NoFileName(PathBuf),

    #[error("unable to resolve {}: {source}", path.display())]
    Canonicalize {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
