// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Global [`miette`] report handler for the `wtf8` binary.
//!
//! The hook is only evaluated when a [`miette::Report`] is actually displayed (ie: when
//! `main() -> miette::Result<_>` returns an error), so the terminal width is read at
//! that moment and never if nothing fails.

use miette::MietteHandlerOpts;
use tracing::debug;

pub const DEFAULT_TERMINAL_WIDTH: usize = 80;

/// Width from the `COLUMNS` environment variable, or [`DEFAULT_TERMINAL_WIDTH`].
#[must_use]
pub fn terminal_width_from_env() -> usize {
    std::env::var("COLUMNS")
        .ok()
        .and_then(|it| it.trim().parse::<usize>().ok())
        .filter(|it| *it > 0)
        .unwrap_or(DEFAULT_TERMINAL_WIDTH)
}

pub fn setup_default_miette_global_report_handler(issues_url: &'static str) {
    miette::set_hook(Box::new(|_report| {
        let terminal_width = terminal_width_from_env();
        debug!("miette::set_hook -> terminal_width: {}", terminal_width);
        Box::new(
            MietteHandlerOpts::new()
                .width(terminal_width)
                .wrap_lines(true)
                .unicode(true)
                .context_lines(3)
                .tab_width(4)
                .break_words(true)
                .with_cause_chain()
                .footer(issues_url.to_string())
                .build(),
        )
    }))
    .ok();
}
