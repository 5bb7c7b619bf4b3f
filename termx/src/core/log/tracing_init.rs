// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::{DisplayPreference, TracingConfig, WriterConfig, rolling_file_appender_impl};
use tracing::dispatcher;
use tracing_core::LevelFilter;
use tracing_subscriber::{Layer, layer::SubscriberExt, registry::LookupSpan,
                         util::SubscriberInitExt};

pub type DynLayer<S> = dyn Layer<S> + Send + Sync + 'static;

/// Avoid gnarly type annotations by using a macro to create the `fmt` layer.
macro_rules! create_fmt {
    () => {
        tracing_subscriber::fmt::layer()
            .compact()
            .without_time()
            .with_thread_ids(true)
            .with_thread_names(false)
            .with_target(false)
            .with_file(false)
            .with_line_number(false)
    };
}

impl TracingConfig {
    /// Install as the global default subscriber. Fails if one is already installed.
    ///
    /// # Errors
    ///
    /// Returns a miette diagnostic if the log file can't be created or a global
    /// subscriber is already set.
    pub fn install_global(self) -> miette::Result<()> {
        let layers = self.try_create_layers()?;
        tracing_subscriber::registry()
            .with(layers)
            .try_init()
            .map_err(|e| miette::miette!("failed to install global tracing subscriber: {e}"))
    }

    /// Install for the current thread until the returned guard is dropped.
    ///
    /// # Errors
    ///
    /// Returns a miette diagnostic if the log file can't be created.
    pub fn install_thread_local(self) -> miette::Result<dispatcher::DefaultGuard> {
        let layers = self.try_create_layers()?;
        let subscriber = tracing_subscriber::registry().with(layers);
        Ok(tracing::subscriber::set_default(subscriber))
    }

    /// Returns the layers. This does not initialize the tracing system.
    ///
    /// # Errors
    ///
    /// Returns a miette diagnostic if the log file can't be created.
    pub fn try_create_layers(
        &self,
    ) -> miette::Result<Vec<Box<DynLayer<tracing_subscriber::Registry>>>> {
        let level_filter = self.get_level_filter();
        let mut return_it: Vec<Box<DynLayer<tracing_subscriber::Registry>>> = vec![];

        // Applies to every layer added below.
        return_it.push(Box::new(level_filter));

        if let Some(layer) = self.writer_config.try_create_display_layer(level_filter) {
            return_it.push(layer);
        }

        if let Some(layer) = self.writer_config.try_create_file_layer(level_filter)? {
            return_it.push(layer);
        }

        Ok(return_it)
    }
}

impl WriterConfig {
    /// Boxed `fmt` layer writing to stdout or stderr, if this config displays.
    pub fn try_create_display_layer<S>(&self, level_filter: LevelFilter) -> Option<Box<DynLayer<S>>>
    where
        S: tracing_core::Subscriber,
        for<'a> S: LookupSpan<'a>,
    {
        let fmt_layer = create_fmt!().with_ansi(true);

        match self {
            WriterConfig::Display(preferred_display)
            | WriterConfig::DisplayAndFile(preferred_display, _) => match preferred_display {
                DisplayPreference::Stdout => Some(Box::new(
                    fmt_layer.with_writer(std::io::stdout).with_filter(level_filter),
                )),
                DisplayPreference::Stderr => Some(Box::new(
                    fmt_layer.with_writer(std::io::stderr).with_filter(level_filter),
                )),
            },
            WriterConfig::None | WriterConfig::File(_) => None,
        }
    }

    /// Boxed `fmt` layer writing to the log file, if this config has one.
    ///
    /// # Errors
    ///
    /// Returns a miette diagnostic if the log file can't be created.
    pub fn try_create_file_layer<S>(
        &self,
        level_filter: LevelFilter,
    ) -> miette::Result<Option<Box<DynLayer<S>>>>
    where
        S: tracing_core::Subscriber,
        for<'a> S: LookupSpan<'a>,
    {
        let fmt_layer = create_fmt!().with_ansi(false);

        Ok(match self {
            WriterConfig::File(path) | WriterConfig::DisplayAndFile(_, path) => {
                let file = rolling_file_appender_impl::try_create(path)?;
                Some(Box::new(fmt_layer.with_writer(file).with_filter(level_filter)))
            }
            WriterConfig::None | WriterConfig::Display(_) => None,
        })
    }
}
