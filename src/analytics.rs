//! Best-effort usage analytics.
//!
//! The emitter fans an event out to every configured sink and never reports a
//! failure to its caller. Sinks must not block the UI thread: the JSON-lines
//! sink hands events to a writer thread through a bounded channel and drops
//! them when the channel is full.

use anyhow::{anyhow, Context, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::{Map, Value};
use std::fs::{self, File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::mpsc::{sync_channel, Receiver, SyncSender, TrySendError};
use std::thread::JoinHandle;

/// Event recorded when the user picks a starting template.
pub const TEMPLATE_CLICKED: &str = "template_clicked";

/// Property carrying the picked template's name.
pub const CLICKED_TEMPLATE: &str = "clicked_template";

const EVENT_CHANNEL_SIZE: usize = 256;

/// A single usage signal.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalyticsEvent {
    /// Event name, e.g. `template_clicked`
    pub event: String,
    /// Event tags
    pub properties: Map<String, Value>,
    /// When the event was captured
    pub timestamp: DateTime<Utc>,
}

impl AnalyticsEvent {
    /// Creates an event stamped with the current time.
    pub fn new(event: impl Into<String>, properties: Map<String, Value>) -> Self {
        Self {
            event: event.into(),
            properties,
            timestamp: Utc::now(),
        }
    }

    /// Looks up a string property.
    pub fn property(&self, key: &str) -> Option<&str> {
        self.properties.get(key).and_then(Value::as_str)
    }
}

/// Destination for analytics events.
pub trait AnalyticsSink {
    /// Records one event. Errors are swallowed by [`AnalyticsEmitter`].
    fn capture(&self, event: &AnalyticsEvent) -> Result<()>;
}

/// Fire-and-forget event recorder used by the start screen.
#[derive(Default)]
pub struct AnalyticsEmitter {
    sinks: Vec<Box<dyn AnalyticsSink>>,
}

impl AnalyticsEmitter {
    /// Creates an emitter with no sinks. Every capture is a no-op.
    #[must_use]
    pub fn disabled() -> Self {
        Self::default()
    }

    /// Adds a sink.
    pub fn with_sink(mut self, sink: impl AnalyticsSink + 'static) -> Self {
        self.sinks.push(Box::new(sink));
        self
    }

    /// Number of attached sinks.
    pub fn sink_count(&self) -> usize {
        self.sinks.len()
    }

    /// Records an event on every sink, ignoring sink failures.
    pub fn capture(&self, event: &str, properties: Map<String, Value>) {
        if self.sinks.is_empty() {
            return;
        }

        let event = AnalyticsEvent::new(event, properties);
        for sink in &self.sinks {
            if let Err(e) = sink.capture(&event) {
                tracing::debug!("Analytics sink failed for {}: {e:#}", event.event);
            }
        }
    }

    /// Records which starting template the user picked.
    pub fn template_clicked(&self, template_name: &str) {
        let mut properties = Map::new();
        properties.insert(
            CLICKED_TEMPLATE.to_string(),
            Value::String(template_name.to_string()),
        );
        self.capture(TEMPLATE_CLICKED, properties);
    }
}

impl std::fmt::Debug for AnalyticsEmitter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnalyticsEmitter")
            .field("sinks", &self.sinks.len())
            .finish()
    }
}

/// Sink that emits each event through `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl AnalyticsSink for TracingSink {
    fn capture(&self, event: &AnalyticsEvent) -> Result<()> {
        let properties = Value::Object(event.properties.clone());
        tracing::info!(target: "analytics", event = %event.event, %properties, "analytics event");
        Ok(())
    }
}

/// Sink appending one JSON object per line to a file from a writer thread.
#[derive(Debug)]
pub struct JsonLinesSink {
    path: PathBuf,
    sender: Option<SyncSender<AnalyticsEvent>>,
    writer: Option<JoinHandle<()>>,
}

impl JsonLinesSink {
    /// Opens (or creates) `path` for appending and starts the writer thread.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).context(format!(
                "Failed to create analytics directory: {}",
                parent.display()
            ))?;
        }

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .context(format!("Failed to open analytics log: {}", path.display()))?;

        let (sender, receiver) = sync_channel(EVENT_CHANNEL_SIZE);
        let writer_path = path.clone();
        let writer = std::thread::Builder::new()
            .name("analytics-writer".to_string())
            .spawn(move || writer_loop(receiver, file, &writer_path))
            .context("Failed to spawn analytics writer thread")?;

        Ok(Self {
            path,
            sender: Some(sender),
            writer: Some(writer),
        })
    }

    /// File the events are appended to.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl AnalyticsSink for JsonLinesSink {
    fn capture(&self, event: &AnalyticsEvent) -> Result<()> {
        let sender = self
            .sender
            .as_ref()
            .ok_or_else(|| anyhow!("analytics writer already stopped"))?;

        sender.try_send(event.clone()).map_err(|e| match e {
            TrySendError::Full(_) => anyhow!("analytics queue full, event dropped"),
            TrySendError::Disconnected(_) => anyhow!("analytics writer stopped"),
        })
    }
}

impl Drop for JsonLinesSink {
    fn drop(&mut self) {
        // Closing the channel lets the writer drain and exit
        self.sender.take();
        if let Some(writer) = self.writer.take() {
            let _ = writer.join();
        }
    }
}

fn writer_loop(receiver: Receiver<AnalyticsEvent>, file: File, path: &Path) {
    let mut out = BufWriter::new(file);
    for event in receiver {
        if let Err(e) = write_event(&mut out, &event) {
            tracing::warn!("Failed to write analytics event to {}: {e:#}", path.display());
        }
    }
}

fn write_event(out: &mut impl Write, event: &AnalyticsEvent) -> Result<()> {
    serde_json::to_writer(&mut *out, event)?;
    writeln!(out)?;
    out.flush()?;
    Ok(())
}
