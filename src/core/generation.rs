//! Generation request lifecycle.
//!
//! The lifecycle is split in two layers:
//!
//! - [`GenerationState::reduce`] is a pure state machine
//!   (`Idle → Loading → Success | Error`) that takes an event and returns the
//!   next state. It owns the stale-response rule: every request carries a
//!   generation number and only the resolution matching the latest issued
//!   number is applied.
//! - [`GenerationController`] issues requests on a background task and feeds
//!   their resolutions back through a channel, like the file search task in
//!   the UI loop. It never blocks the caller.

use std::sync::Arc;

use serde::Serialize;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use super::service::GenerationService;

/// Text shown in the output region before the first generation.
pub const PLACEHOLDER_TEXT: &str = "Great meeting with Prime Minister Boris Johnson of the United Kingdom. A very productive discussion on trade, security, and NATO. The relationship between our two countries has never been stronger!";

/// Text shown in the output region while a request is in flight.
pub const LOADING_TEXT: &str = "Generating…";

/// Prefix of every user-visible failure message.
pub const ERROR_PREFIX: &str = "Error: ";

/// Channel buffer size for generation events.
const EVENT_CHANNEL_SIZE: usize = 64;

/// Immutable parameter snapshot sent to the generation service.
///
/// Serializes to exactly `{"temperature":..,"top_k":..,"max_tokens":..}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GenerationRequest {
    pub temperature: f64,
    pub top_k: u32,
    pub max_tokens: u32,
}

/// Outcome of one resolved request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationResult {
    /// Text returned by the service.
    Text(String),
    /// Failure description (without the `Error: ` prefix).
    Failure(String),
}

/// Phase of the generation state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GenerationPhase {
    /// Nothing requested yet.
    #[default]
    Idle,
    /// A request is in flight.
    Loading,
    /// The latest request produced text.
    Success,
    /// The latest request failed.
    Error,
}

impl GenerationPhase {
    /// Returns a short name for status display and logs.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::Loading => "Loading",
            Self::Success => "Success",
            Self::Error => "Error",
        }
    }
}

/// Inputs to the state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationEvent {
    /// A request tagged `generation` was issued.
    Started { generation: u64 },
    /// The request tagged `generation` resolved.
    Resolved {
        generation: u64,
        result: GenerationResult,
    },
}

/// Snapshot of the generation state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationState {
    phase: GenerationPhase,
    /// Text stored for `Idle`/`Success`, formatted error for `Error`, empty while `Loading`.
    output: String,
    /// Highest generation issued so far.
    latest: u64,
    /// Number of resolutions dropped because a newer request was issued.
    discarded: u64,
}

impl Default for GenerationState {
    fn default() -> Self {
        Self::new(PLACEHOLDER_TEXT)
    }
}

impl GenerationState {
    /// Creates an idle state showing `placeholder`.
    #[must_use]
    pub fn new(placeholder: impl Into<String>) -> Self {
        Self {
            phase: GenerationPhase::Idle,
            output: placeholder.into(),
            latest: 0,
            discarded: 0,
        }
    }

    /// Returns the next state after `event`.
    #[must_use]
    pub fn reduce(&self, event: GenerationEvent) -> Self {
        match event {
            GenerationEvent::Started { generation } => Self {
                phase: GenerationPhase::Loading,
                output: String::new(),
                latest: generation.max(self.latest),
                discarded: self.discarded,
            },
            GenerationEvent::Resolved { generation, .. } if generation != self.latest => Self {
                discarded: self.discarded + 1,
                ..self.clone()
            },
            GenerationEvent::Resolved { result, .. } => {
                let (phase, output) = match result {
                    GenerationResult::Text(text) => (GenerationPhase::Success, text),
                    GenerationResult::Failure(message) => {
                        (GenerationPhase::Error, format!("{ERROR_PREFIX}{message}"))
                    }
                };
                Self {
                    phase,
                    output,
                    latest: self.latest,
                    discarded: self.discarded,
                }
            }
        }
    }

    /// Returns the current phase.
    #[must_use]
    pub const fn phase(&self) -> GenerationPhase {
        self.phase
    }

    /// Returns true while a request is in flight.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.phase == GenerationPhase::Loading
    }

    /// Returns the stored output (empty while loading).
    #[must_use]
    pub fn output(&self) -> &str {
        &self.output
    }

    /// Returns what the output region should show for the current phase.
    #[must_use]
    pub fn display_text(&self) -> &str {
        match self.phase {
            GenerationPhase::Loading => LOADING_TEXT,
            GenerationPhase::Idle | GenerationPhase::Success | GenerationPhase::Error => {
                &self.output
            }
        }
    }

    /// Returns the highest generation issued so far.
    #[must_use]
    pub const fn latest_generation(&self) -> u64 {
        self.latest
    }

    /// Returns how many stale resolutions were discarded.
    #[must_use]
    pub const fn discarded(&self) -> u64 {
        self.discarded
    }
}

/// Issues generation requests and tracks their resolution.
pub struct GenerationController {
    state: GenerationState,
    service: Arc<dyn GenerationService>,
    event_tx: mpsc::Sender<GenerationEvent>,
    event_rx: mpsc::Receiver<GenerationEvent>,
}

impl GenerationController {
    /// Creates an idle controller backed by `service`.
    #[must_use]
    pub fn new(service: Arc<dyn GenerationService>) -> Self {
        Self::with_state(service, GenerationState::default())
    }

    /// Creates a controller starting from `state`.
    #[must_use]
    pub fn with_state(service: Arc<dyn GenerationService>, state: GenerationState) -> Self {
        let (event_tx, event_rx) = mpsc::channel(EVENT_CHANNEL_SIZE);
        Self {
            state,
            service,
            event_tx,
            event_rx,
        }
    }

    /// Returns the current state.
    #[must_use]
    pub fn state(&self) -> &GenerationState {
        &self.state
    }

    /// Enters `Loading` and sends `request` on a background task.
    ///
    /// Must be called from within a tokio runtime. Returns the generation
    /// number assigned to the request. Does not refuse re-entrant calls;
    /// older in-flight requests are superseded and their results dropped.
    pub fn generate(&mut self, request: GenerationRequest) -> u64 {
        let generation = self.state.latest_generation() + 1;
        self.apply(GenerationEvent::Started { generation });
        info!(
            generation,
            temperature = request.temperature,
            top_k = request.top_k,
            max_tokens = request.max_tokens,
            "issuing generation request"
        );

        let service = Arc::clone(&self.service);
        let event_tx = self.event_tx.clone();
        tokio::spawn(async move {
            let result = match service.generate(&request).await {
                Ok(text) => GenerationResult::Text(text),
                Err(e) => {
                    warn!(generation, error = %e, "generation request failed");
                    GenerationResult::Failure(e.to_string())
                }
            };
            // The receiver lives as long as the controller; a send error means shutdown.
            let _ = event_tx
                .send(GenerationEvent::Resolved { generation, result })
                .await;
        });

        generation
    }

    /// Applies every resolution that has arrived since the last call.
    ///
    /// Returns true if any event was applied.
    pub fn process_events(&mut self) -> bool {
        let mut changed = false;
        while let Ok(event) = self.event_rx.try_recv() {
            self.apply(event);
            changed = true;
        }
        changed
    }

    /// Waits for the next resolution and applies it.
    ///
    /// Returns `None` only if the channel closed.
    pub async fn next_event(&mut self) -> Option<GenerationPhase> {
        let event = self.event_rx.recv().await?;
        self.apply(event);
        Some(self.state.phase())
    }

    fn apply(&mut self, event: GenerationEvent) {
        let resolved = match &event {
            GenerationEvent::Resolved { generation, .. } => Some(*generation),
            GenerationEvent::Started { .. } => None,
        };
        let next = self.state.reduce(event);
        if let Some(generation) = resolved {
            if next.discarded() > self.state.discarded() {
                debug!(
                    generation,
                    latest = next.latest_generation(),
                    "discarding stale generation result"
                );
            } else {
                info!(generation, "generation request resolved");
            }
        }
        self.state = next;
    }
}
