use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};

use futures::StreamExt;
use serde_json::Value;
use shared::{
    domain::{UserInput, EMPTY_DESCRIPTION_MESSAGE},
    protocol::GenerateRequest,
};
use thiserror::Error;

pub mod config;
pub mod surface;
pub mod transport;

pub use surface::{AlertSurface, Click, DiagnosticLog, InputField, TracingLog, TriggerControl};
pub use transport::{GenerateTransport, HttpGenerateClient, RequestError};

pub const SUCCESS_MESSAGE: &str = "Floorplan generation request sent successfully!";
pub const FAILURE_MESSAGE: &str = "Something went wrong. Please try again.";

/// The parsed JSON body returned by the generate endpoint. Its shape is not
/// inspected.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmitOutcome {
    pub response: Value,
}

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("description is empty")]
    EmptyInput,
    #[error(transparent)]
    Request(#[from] RequestError),
}

impl SubmitError {
    /// The single alert text shown for this failure.
    pub fn alert_message(&self) -> &'static str {
        match self {
            Self::EmptyInput => EMPTY_DESCRIPTION_MESSAGE,
            Self::Request(_) => FAILURE_MESSAGE,
        }
    }
}

/// Reads the description field, sends it to the generate endpoint, and
/// reports the result through an alert surface and a diagnostic log.
///
/// The handler keeps no per-request state. Each call to [`SubmitHandler::handle`]
/// is independent, and overlapping calls are neither serialized nor rejected.
pub struct SubmitHandler {
    input: Arc<dyn InputField>,
    transport: Arc<dyn GenerateTransport>,
    alerts: Arc<dyn AlertSurface>,
    log: Arc<dyn DiagnosticLog>,
}

impl SubmitHandler {
    pub fn new(
        input: Arc<dyn InputField>,
        transport: Arc<dyn GenerateTransport>,
        alerts: Arc<dyn AlertSurface>,
        log: Arc<dyn DiagnosticLog>,
    ) -> Self {
        Self {
            input,
            transport,
            alerts,
            log,
        }
    }

    /// Runs one click: snapshot the field, submit, then present the result.
    ///
    /// The field is read before the returned future is first polled, so the
    /// value sent is the one present at click time.
    pub fn handle(
        &self,
    ) -> impl std::future::Future<Output = Result<SubmitOutcome, SubmitError>> + Send + '_ {
        let user_input = UserInput::new(self.input.value());
        async move {
            let result = self.submit(user_input).await;
            self.present(&result);
            result
        }
    }

    /// Validates and sends `user_input` without touching the alert surface or log.
    pub async fn submit(&self, user_input: UserInput) -> Result<SubmitOutcome, SubmitError> {
        if user_input.is_blank() {
            return Err(SubmitError::EmptyInput);
        }

        let request = GenerateRequest { user_input };
        let response = self.transport.send_generate(&request).await?;
        Ok(SubmitOutcome { response })
    }

    pub fn present(&self, result: &Result<SubmitOutcome, SubmitError>) {
        match result {
            Ok(outcome) => {
                self.alerts.alert(SUCCESS_MESSAGE);
                self.log.response(&outcome.response);
            }
            Err(err) => {
                // Blank input is only alerted, never logged.
                if let SubmitError::Request(request_err) = err {
                    self.log.error(request_err);
                }
                self.alerts.alert(err.alert_message());
            }
        }
    }
}

/// A [`SubmitHandler`] wired to the control whose clicks drive it.
pub struct BoundSubmitHandler<C> {
    control: C,
    handler: SubmitHandler,
}

/// Binds a trigger control and a description field to a new handler.
pub fn bind<C: TriggerControl>(
    control: C,
    input: Arc<dyn InputField>,
    transport: Arc<dyn GenerateTransport>,
    alerts: Arc<dyn AlertSurface>,
    log: Arc<dyn DiagnosticLog>,
) -> BoundSubmitHandler<C> {
    BoundSubmitHandler {
        control,
        handler: SubmitHandler::new(input, transport, alerts, log),
    }
}

impl<C: TriggerControl> BoundSubmitHandler<C> {
    /// Handles clicks until the control closes and returns how many were seen.
    ///
    /// Requests from earlier clicks keep running while later clicks are
    /// accepted, so their completions may arrive in any order.
    pub async fn run(self) -> usize {
        let Self { control, handler } = self;
        let clicks = futures::stream::unfold(control, |mut control| async move {
            control.next_click().await.map(|click| (click, control))
        });

        let handled = AtomicUsize::new(0);
        let handler = &handler;
        let counter = &handled;
        clicks
            .for_each_concurrent(None, move |_click| {
                counter.fetch_add(1, Ordering::Relaxed);
                let pending = handler.handle();
                async move {
                    let _ = pending.await;
                }
            })
            .await;

        handled.into_inner()
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
