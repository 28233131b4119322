// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Global [`miette`] report handler for binaries built on the engines, eg: `fk`.
//!
//! The hook runs when a report is rendered (when `main` returns an `Err`), not when it is
//! installed. So the width is read from `COLUMNS` at that moment, and a run without
//! errors never looks at it.

use miette::{MietteHandlerOpts, ReportHandler};

/// Width used when `COLUMNS` isn't set or isn't a number, eg: output is piped.
pub const DEFAULT_REPORT_WIDTH: usize = 80;

/// Read the report width from the `COLUMNS` env var.
#[must_use]
pub fn report_width() -> usize {
    std::env::var("COLUMNS")
        .ok()
        .and_then(|it| it.trim().parse::<usize>().ok())
        .filter(|it| *it > 0)
        .unwrap_or(DEFAULT_REPORT_WIDTH)
}

/// Build the handler that renders a [`crate::FormkitError`] report, code, help text and
/// cause chain included. `footer` is printed under every report.
#[must_use]
pub fn create_report_handler(width: usize, footer: &str) -> Box<dyn ReportHandler> {
    Box::new(
        MietteHandlerOpts::new()
            .width(width)
            .force_graphical(true)
            .wrap_lines(true)
            .break_words(true)
            .unicode(true)
            .context_lines(2)
            .with_cause_chain()
            .footer(footer.to_string())
            .build(),
    )
}

/// Install the handler from [`create_report_handler`] as miette's global hook. Calling
/// this more than once is harmless, only the first call wins.
pub fn setup_default_miette_global_report_handler(footer: &'static str) {
    let result = miette::set_hook(Box::new(move |_report| {
        let width = report_width();
        tracing::debug!(message = "rendering miette report", width);
        create_report_handler(width, footer)
    }));
    if result.is_err() {
        tracing::debug!(message = "miette hook already installed");
    }
}
