// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Tracing setup for the codec.
//!
//! The library itself only emits events: a `debug!` when a strict decode fails, and a
//! `trace!` for every byte the lossy decoder replaces. Nothing is printed unless a
//! subscriber is installed with [`try_initialize_logging_global`] (what the `wtf8`
//! binary does) or [`TracingConfig::install_thread_local`] (what tests do).

use std::{io::Write,
          sync::{Arc, Mutex}};

use miette::{IntoDiagnostic, WrapErr};
use tracing_core::LevelFilter;
use tracing_subscriber::{Layer, Registry, layer::SubscriberExt, registry::LookupSpan,
                         util::SubscriberInitExt};

/// Type alias for a boxed layer.
pub type DynLayer<S> = dyn Layer<S> + Send + Sync + 'static;

/// Where formatted log lines go.
#[derive(Debug, Clone)]
pub enum DisplayPreference {
    Stdout,
    Stderr,
    /// In memory sink, mostly for tests that need to look at what was logged.
    SharedBuffer(SharedLogBuffer),
}

#[derive(Debug, Clone)]
pub struct TracingConfig {
    pub level_filter: LevelFilter,
    pub display_preference: DisplayPreference,
}

/// Logs to stderr so that stdout stays clean for the codec's output.
impl From<LevelFilter> for TracingConfig {
    fn from(level_filter: LevelFilter) -> Self {
        Self {
            level_filter,
            display_preference: DisplayPreference::Stderr,
        }
    }
}

impl TracingConfig {
    /// # Errors
    ///
    /// If a global subscriber has already been installed.
    pub fn install_global(self) -> miette::Result<()> {
        tracing_subscriber::registry()
            .with(create_layers(self))
            .try_init()
            .into_diagnostic()
            .wrap_err("Failed to install the global tracing subscriber")
    }

    /// The subscriber stays active until the returned guard is dropped, and only on the
    /// current thread.
    #[must_use]
    pub fn install_thread_local(self) -> tracing::subscriber::DefaultGuard {
        let subscriber = tracing_subscriber::registry().with(create_layers(self));
        tracing::subscriber::set_default(subscriber)
    }
}

/// Does nothing for [`LevelFilter::OFF`].
///
/// # Errors
///
/// If a global subscriber has already been installed.
pub fn try_initialize_logging_global(
    options: impl Into<TracingConfig>,
) -> miette::Result<()> {
    let it: TracingConfig = options.into();

    if it.level_filter == LevelFilter::OFF {
        return Ok(());
    }

    it.install_global()
}

/// Returns the layers, without installing them.
#[must_use]
pub fn create_layers(tracing_config: TracingConfig) -> Vec<Box<DynLayer<Registry>>> {
    let mut return_it: Vec<Box<DynLayer<Registry>>> = vec![];

    // Set the level filter for the whole stack as well, so that layers without a filter
    // of their own don't see events below it.
    return_it.push(Box::new(tracing_config.level_filter));

    return_it.push(create_display_layer(
        tracing_config.level_filter,
        tracing_config.display_preference,
    ));

    return_it
}

/// This erases the concrete type of the writer, and returns a boxed layer.
#[must_use]
pub fn create_display_layer<S>(
    level_filter: LevelFilter,
    display_preference: DisplayPreference,
) -> Box<DynLayer<S>>
where
    S: tracing_core::Subscriber,
    for<'a> S: LookupSpan<'a>,
{
    let fmt_layer = tracing_subscriber::fmt::layer().with_target(true);

    match display_preference {
        DisplayPreference::Stdout => Box::new(
            fmt_layer
                .with_writer(std::io::stdout)
                .with_filter(level_filter),
        ),
        DisplayPreference::Stderr => Box::new(
            fmt_layer
                .with_writer(std::io::stderr)
                .with_filter(level_filter),
        ),
        DisplayPreference::SharedBuffer(buffer) => Box::new(
            fmt_layer
                .with_ansi(false)
                .with_writer(move || buffer.clone())
                .with_filter(level_filter),
        ),
    }
}

/// Cloneable handle to an in memory log. All clones write to the same buffer.
#[derive(Debug, Clone, Default)]
pub struct SharedLogBuffer {
    inner: Arc<Mutex<Vec<u8>>>,
}

impl SharedLogBuffer {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    /// Everything written so far, lossily converted to a string. Returns an empty
    /// string if a writer panicked while holding the lock.
    #[must_use]
    pub fn contents(&self) -> String {
        self.inner
            .lock()
            .map(|bytes| String::from_utf8_lossy(&bytes).into_owned())
            .unwrap_or_default()
    }
}

impl Write for SharedLogBuffer {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let mut bytes = self
            .inner
            .lock()
            .map_err(|_| std::io::Error::other("log buffer lock poisoned"))?;
        bytes.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> { Ok(()) }
}
