// SPDX-FileCopyrightText: © 2025 TTKB, LLC
// SPDX-License-Identifier: BSD-3-CLAUSE

//! Greeter and self-locator
//!
//! This crate prints a greeting and reports the file name and absolute path
//! of the program that is currently running.
//!
//! # Quick Start
//!
//! ```no_run
//! use hello_script::report;
//! use anyhow::Result;
//!
//! fn main() -> Result<()> {
//!     report::run(&mut std::io::stdout().lock())
//! }
//! ```
//!
//! Locating an arbitrary program file:
//!
//! ```no_run
//! use std::path::Path;
//! use hello_script::report;
//! use anyhow::Result;
//!
//! fn main() -> Result<()> {
//!     let report = report::locate(Path::new("target/debug/hello-script"))?;
//!     print!("{report}");
//!     Ok(())
//! }
//! ```
//!
//! # Output
//!
//! | Line | Content                      |
//! |------|------------------------------|
//! | 1    | `Hello, World!`              |
//! | 2    | `Script name: <basename>`    |
//! | 3    | `Script path: <abspath>`     |

pub mod error;
pub mod report;

pub use error::PathResolutionError;
pub use report::Report;
