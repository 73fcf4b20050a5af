//! Seams between the submit handler and whatever UI hosts it.

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::mpsc;
use tracing::{error, info};

use crate::transport::RequestError;

/// One activation of the trigger control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Click;

#[async_trait]
pub trait TriggerControl: Send {
    /// Waits for the next click. `None` means the control is gone.
    async fn next_click(&mut self) -> Option<Click>;
}

#[async_trait]
impl TriggerControl for mpsc::Receiver<Click> {
    async fn next_click(&mut self) -> Option<Click> {
        self.recv().await
    }
}

#[async_trait]
impl TriggerControl for mpsc::UnboundedReceiver<Click> {
    async fn next_click(&mut self) -> Option<Click> {
        self.recv().await
    }
}

pub trait InputField: Send + Sync {
    /// Current text of the field, exactly as entered.
    fn value(&self) -> String;
}

impl InputField for String {
    fn value(&self) -> String {
        self.clone()
    }
}

impl InputField for &'static str {
    fn value(&self) -> String {
        (*self).to_string()
    }
}

pub trait AlertSurface: Send + Sync {
    /// Shows `message` and returns once the user has dismissed it.
    fn alert(&self, message: &str);
}

pub trait DiagnosticLog: Send + Sync {
    fn response(&self, data: &Value);
    fn error(&self, err: &RequestError);
}

/// Diagnostic log backed by `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingLog;

impl DiagnosticLog for TracingLog {
    fn response(&self, data: &Value) {
        info!(response = %data, "generate request accepted");
    }

    fn error(&self, err: &RequestError) {
        error!(error = %err, "generate request failed");
    }
}
