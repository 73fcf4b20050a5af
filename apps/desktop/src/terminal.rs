//! Terminal stand-ins for the description field, the generate button, and alert dialogs.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use client_core::{AlertSurface, Click, InputField, TriggerControl};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, Lines};
use tracing::warn;

#[derive(Debug, Default)]
pub struct TerminalField {
    value: Mutex<String>,
}

impl TerminalField {
    pub fn set(&self, value: String) {
        match self.value.lock() {
            Ok(mut guard) => *guard = value,
            Err(poisoned) => *poisoned.into_inner() = value,
        }
    }
}

impl InputField for TerminalField {
    fn value(&self) -> String {
        match self.value.lock() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

/// Treats every line read from `reader` as typing that line into the field
/// and pressing the generate button.
pub struct LineControl<R> {
    lines: Lines<R>,
    field: Arc<TerminalField>,
}

impl<R: AsyncBufRead + Unpin> LineControl<R> {
    pub fn new(reader: R, field: Arc<TerminalField>) -> Self {
        Self {
            lines: reader.lines(),
            field,
        }
    }
}

#[async_trait]
impl<R: AsyncBufRead + Unpin + Send> TriggerControl for LineControl<R> {
    async fn next_click(&mut self) -> Option<Click> {
        match self.lines.next_line().await {
            Ok(Some(line)) => {
                self.field.set(line);
                Some(Click)
            }
            Ok(None) => None,
            Err(err) => {
                warn!(error = %err, "stopped reading descriptions from input");
                None
            }
        }
    }
}

/// Prints alerts to stdout. Printing returns immediately, so there is no
/// dismissal step.
#[derive(Debug, Default, Clone, Copy)]
pub struct PrintAlerts;

impl AlertSurface for PrintAlerts {
    fn alert(&self, message: &str) {
        println!("{message}");
    }
}
