// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::path::Path;

use tracing_appender::rolling::{self, RollingFileAppender};

/// Log file appender for `--log-file`. The file is never rotated, one run of `fk` writes
/// one file. The writes are blocking, so there is no guard to keep alive.
///
/// # Errors
///
/// Returns an error if `path_str` has no file name, eg: `logs/` or `..`.
pub fn try_create_rolling_file_appender(path_str: &str) -> miette::Result<RollingFileAppender> {
    let path = Path::new(path_str);

    let Some(file_name) = path.file_name() else {
        return Err(miette::miette!(
            help = "Pass a path that ends in a file name, eg: `fk.log`",
            "Log file path '{}' has no file name",
            path.display()
        ));
    };

    // A bare file name has an empty parent, which means the current dir.
    let dir = match path.parent() {
        Some(it) if !it.as_os_str().is_empty() => it,
        _ => Path::new("."),
    };

    Ok(rolling::never(dir, file_name))
}
