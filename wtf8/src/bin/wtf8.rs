// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use clap::Parser;
use r3bl_wtf8::{CLIArg, ok, run, setup_default_miette_global_report_handler,
                try_initialize_logging_global};
use tracing::debug;

const ISSUES_URL: &str = "https://github.com/r3bl-org/r3bl-open-core/issues/new";

fn main() -> miette::Result<()> {
    setup_default_miette_global_report_handler(ISSUES_URL);

    let cli_arg = CLIArg::parse();

    // Logging goes to stderr, so it never mixes with the output below.
    try_initialize_logging_global(cli_arg.global_options.log_level)?;
    debug!("Start logging... cli_args {:?}", cli_arg);

    let output = run(cli_arg)?;
    println!("{output}");

    debug!("Stop logging...");
    ok!()
}
