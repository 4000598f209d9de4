//! Shared test utilities for the app module.
//!
//! - Scripted generation services (`StaticService`, `GatedService`, `RecordingService`)
//! - `create_test_app` and friends for building an `App` over in-memory storage
//! - `render_app_to_terminal` for `TestBackend` assertions
//! - Key event helpers (`char_key`, `key`, `ctrl_key`)

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};
use ratatui::{Terminal, backend::TestBackend};
use tokio::sync::oneshot;

use crate::app::App;
use crate::core::{GenerationError, GenerationRequest, GenerationService};
use crate::fs::{KeyValueStore, MemoryStore, ONBOARDING_KEY};

/// Creates a [`KeyEvent`] for a character key with no modifiers.
pub fn char_key(c: char) -> KeyEvent {
    key(KeyCode::Char(c))
}

/// Creates a [`KeyEvent`] for `code` with no modifiers.
pub fn key(code: KeyCode) -> KeyEvent {
    KeyEvent {
        code,
        modifiers: KeyModifiers::NONE,
        kind: KeyEventKind::Press,
        state: KeyEventState::NONE,
    }
}

/// Creates a [`KeyEvent`] for Ctrl + `c`.
pub fn ctrl_key(c: char) -> KeyEvent {
    KeyEvent {
        code: KeyCode::Char(c),
        modifiers: KeyModifiers::CONTROL,
        kind: KeyEventKind::Press,
        state: KeyEventState::NONE,
    }
}

/// Service that answers every request with the same result.
pub struct StaticService {
    reply: Result<String, GenerationError>,
}

impl StaticService {
    pub fn ok(text: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: Ok(text.to_string()),
        })
    }

    pub fn failing(error: GenerationError) -> Arc<Self> {
        Arc::new(Self { reply: Err(error) })
    }
}

#[async_trait]
impl GenerationService for StaticService {
    async fn generate(&self, _request: &GenerationRequest) -> Result<String, GenerationError> {
        self.reply.clone()
    }
}

/// Service whose responses are released by the test.
///
/// The n-th call waits on the n-th gate handed out by [`GatedService::new`],
/// so a test can resolve requests in any order.
pub struct GatedService {
    gates: Mutex<VecDeque<oneshot::Receiver<Result<String, GenerationError>>>>,
}

impl GatedService {
    /// Creates a service with `calls` gates and returns their senders in call order.
    pub fn new(
        calls: usize,
    ) -> (
        Arc<Self>,
        Vec<oneshot::Sender<Result<String, GenerationError>>>,
    ) {
        let (senders, receivers): (Vec<_>, VecDeque<_>) =
            (0..calls).map(|_| oneshot::channel()).unzip();
        (
            Arc::new(Self {
                gates: Mutex::new(receivers),
            }),
            senders,
        )
    }
}

#[async_trait]
impl GenerationService for GatedService {
    async fn generate(&self, _request: &GenerationRequest) -> Result<String, GenerationError> {
        let gate = self
            .gates
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .pop_front()
            .expect("more calls than gates");
        gate.await
            .unwrap_or_else(|_| Err(GenerationError::Transport("gate dropped".to_string())))
    }
}

/// Service that records every request it receives and echoes a fixed reply.
#[derive(Default)]
pub struct RecordingService {
    pub requests: Mutex<Vec<GenerationRequest>>,
}

impl RecordingService {
    pub fn recorded(&self) -> Vec<GenerationRequest> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[async_trait]
impl GenerationService for RecordingService {
    async fn generate(&self, request: &GenerationRequest) -> Result<String, GenerationError> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(*request);
        Ok("recorded".to_string())
    }
}

/// Returns a store where the onboarding overlay was already dismissed.
pub fn seen_store() -> MemoryStore {
    let store = MemoryStore::new();
    store.set(ONBOARDING_KEY, "true").unwrap();
    store
}

/// Creates an `App` past onboarding, backed by `service`.
pub fn create_test_app(service: Arc<dyn GenerationService>) -> App {
    App::new(service, Arc::new(seen_store()))
}

/// Creates an `App` that still shows onboarding, sharing `store` with the caller.
pub fn create_first_run_app(store: &MemoryStore) -> App {
    App::new(StaticService::ok("unused"), Arc::new(store.clone()))
}

/// Waits until the app applies a generation event, with a timeout.
pub async fn await_generation_event(app: &mut App) {
    tokio::time::timeout(Duration::from_secs(5), app.next_generation_event())
        .await
        .expect("timed out waiting for a generation result");
}

/// Renders the app to a `TestBackend` terminal.
///
/// Calls `update_layout()` before rendering, as the main loop does.
///
/// # Errors
///
/// Returns an error if terminal creation or rendering fails.
pub fn render_app_to_terminal(
    app: &mut App,
    width: u16,
    height: u16,
) -> Result<Terminal<TestBackend>> {
    use ratatui::layout::Rect;

    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend)?;

    app.update_layout(Rect::new(0, 0, width, height));

    terminal.draw(|f| app.render(f))?;

    Ok(terminal)
}

/// Returns the rendered buffer as one string per row.
#[must_use]
pub fn buffer_rows(terminal: &Terminal<TestBackend>) -> Vec<String> {
    let buffer = terminal.backend().buffer();
    let area = buffer.area;
    (0..area.height)
        .map(|y| {
            (0..area.width)
                .map(|x| buffer[(x, y)].symbol())
                .collect::<String>()
        })
        .collect()
}

/// Returns the rendered buffer as a single newline-joined string.
#[must_use]
pub fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
    buffer_rows(terminal).join("\n")
}
