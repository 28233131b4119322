// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use tracing_core::LevelFilter;

/// Where display output goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayPreference {
    Stdout,
    #[default]
    Stderr,
}

/// Which writers to attach. The `String` is the path of the log file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriterConfig {
    Display(DisplayPreference),
    File(String),
    DisplayAndFile(DisplayPreference, String),
}

impl Default for WriterConfig {
    fn default() -> Self { WriterConfig::Display(DisplayPreference::default()) }
}

/// Whether the subscriber is installed for the whole process, or just for the current
/// thread.
///
/// 1. [`TracingScope::Global`]: once set it can't be unset or changed. Great for apps.
/// 2. [`TracingScope::ThreadLocal`]: dropped with the returned guard. Great for tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TracingScope {
    #[default]
    Global,
    ThreadLocal,
}

/// Configure the tracing layers created by
/// [`try_create_layers`](crate::try_create_layers).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TracingConfig {
    pub scope: TracingScope,
    pub level_filter: LevelFilter,
    pub writer_config: WriterConfig,
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            scope: TracingScope::default(),
            level_filter: LevelFilter::INFO,
            writer_config: WriterConfig::default(),
        }
    }
}

impl TracingConfig {
    /// Log everything at `level_filter` and above to stderr, globally.
    #[must_use]
    pub fn new_display(level_filter: LevelFilter) -> Self {
        Self {
            level_filter,
            ..Default::default()
        }
    }

    /// Log everything at `level_filter` and above to the file at `path`, globally.
    #[must_use]
    pub fn new_file(level_filter: LevelFilter, path: impl Into<String>) -> Self {
        Self {
            level_filter,
            writer_config: WriterConfig::File(path.into()),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_scope(mut self, scope: TracingScope) -> Self {
        self.scope = scope;
        self
    }

    #[must_use]
    pub fn get_level_filter(&self) -> LevelFilter { self.level_filter }

    #[must_use]
    pub fn get_writer_config(&self) -> WriterConfig { self.writer_config.clone() }
}
