// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use clap::Parser;
use termx_cmdr::keypress::{CLIArg, run_app};

fn main() -> miette::Result<()> { run_app(CLIArg::parse()) }
