// SPDX-FileCopyrightText: © 2025 TTKB, LLC
// SPDX-License-Identifier: BSD-3-CLAUSE

use std::io;

use anyhow::Result;
use clap::Parser;

use hello_script::report;

/// Greets the world and reports the name and absolute path of this program.
#[derive(Debug, Parser)]
#[clap(name = env!("CARGO_CRATE_NAME"), version)]
#[command(version, about, long_about = None)]
pub struct App {}

fn main() -> Result<()> {
    env_logger::init();
    let _ = App::parse();

    report::run(&mut io::stdout().lock())
}
