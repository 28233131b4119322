// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use clap::Parser;
use formkit::{CommonResult, TracingConfig, init_tracing, ok,
              setup_default_miette_global_report_handler, try_initialize_logging_global};
use formkit_cmdr::{CLIArg, handle_fk_command, ui_str};

const REPORT_FOOTER: &str = "Run with --enable-logging to see what the engines did.";

fn main() -> CommonResult<()> {
    setup_default_miette_global_report_handler(REPORT_FOOTER);

    // If no args are passed, the following line will fail, and help will be printed
    // thanks to `arg_required_else_help(true)` in the `CLIArg` struct.
    let cli_arg = CLIArg::parse();

    let should_log =
        cli_arg.global_options.enable_logging || cli_arg.global_options.log_file.is_some();

    should_log.then(|| {
        let level_filter = tracing_core::LevelFilter::DEBUG;
        match &cli_arg.global_options.log_file {
            Some(path) => init_tracing(TracingConfig::new_file(level_filter, path.clone()))
                .map(|_| ())
                .ok(),
            None => try_initialize_logging_global(level_filter).ok(),
        };
        // % is Display, ? is Debug.
        tracing::debug!(message = "Start logging...", cli_arg = ?cli_arg);
    });

    let result = handle_fk_command(cli_arg);

    should_log.then(|| {
        tracing::debug!(message = "Stop logging...");
    });

    match result {
        Ok(fk_result) => {
            println!("{fk_result}");
            ok!()
        }
        // The miette hook renders the report.
        Err(report) => {
            // % is Display, ? is Debug.
            tracing::error!(
                message = "Could not run fk due to the following problem",
                error = ?report
            );
            eprintln!("{}", ui_str::unrecoverable_error_msg());
            Err(report)
        }
    }
}
