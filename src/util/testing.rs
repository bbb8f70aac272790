// src/util/testing.rs

use anyhow::{anyhow, Result};
use std::env;
use tracing::{debug, info};
use tracing_subscriber::{
    filter::filter_fn,
    fmt::{self, format::FmtSpan},
    prelude::*,
    EnvFilter,
};

use crate::application::CardSink;
use crate::domain::Card;

/// In-memory CardSink for testing use cases without touching the filesystem
///
/// # Examples
///
/// ```
/// use notion2anki::application::DeckExporter;
/// use notion2anki::util::testing::MockCardSink;
///
/// let mut exporter = DeckExporter::new(MockCardSink::builder().build());
/// assert_eq!(exporter.export(&[]).unwrap(), 0);
/// ```
pub struct MockCardSink {
    written: Vec<Card>,
    failure: Option<String>,
}

impl MockCardSink {
    pub fn builder() -> MockCardSinkBuilder {
        MockCardSinkBuilder::new()
    }

    /// Cards received so far, in write order
    pub fn written(&self) -> &[Card] {
        &self.written
    }
}

impl CardSink for MockCardSink {
    fn write_cards(&mut self, cards: &[Card]) -> Result<usize> {
        if let Some(message) = &self.failure {
            return Err(anyhow!("{message}"));
        }
        self.written.extend_from_slice(cards);
        Ok(cards.len())
    }
}

/// Builder for MockCardSink
pub struct MockCardSinkBuilder {
    failure: Option<String>,
}

impl MockCardSinkBuilder {
    pub fn new() -> Self {
        Self { failure: None }
    }

    /// Make every write fail with the given message
    pub fn failing(mut self, message: &str) -> Self {
        self.failure = Some(message.to_string());
        self
    }

    pub fn build(self) -> MockCardSink {
        MockCardSink {
            written: Vec::new(),
            failure: self.failure,
        }
    }
}

impl Default for MockCardSinkBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn init_test_setup() -> Result<()> {
    setup_test_logging();

    info!("Test Setup complete");
    Ok(())
}

fn setup_test_logging() {
    debug!("INIT: Attempting logger init from testing.rs");
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "trace");
    }

    // html5ever logs every parse error at debug level
    let noisy_modules = ["html5ever", "selectors", "markup5ever"];
    let module_filter = filter_fn(move |metadata| {
        !noisy_modules
            .iter()
            .any(|name| metadata.target().starts_with(name))
    });

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

    let subscriber = tracing_subscriber::registry().with(
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_thread_names(false)
            .with_span_events(FmtSpan::CLOSE)
            .with_filter(module_filter)
            .with_filter(env_filter),
    );

    // Only set if we haven't already set a global subscriber
    if tracing::dispatcher::has_been_set() {
        debug!("Tracing subscriber already set");
    } else {
        subscriber.try_init().unwrap_or_else(|e| {
            eprintln!("Error: Failed to set up logging: {}", e);
        });
    }
}
