//! ConversationStepper — accepts user submissions and schedules the scripted
//! assistant reply for each one.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::sync::{broadcast, RwLock};
use tokio::task::JoinHandle;
use tracing::{debug, info};
use uuid::Uuid;

use super::script::reply_for;
use super::session::{Message, SessionEvent, SessionState};
use super::stage::ConversationStage;

/// Default broadcast channel capacity.
const DEFAULT_BROADCAST_CAPACITY: usize = 64;

/// What happened to a submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Appended to the transcript; a reply is on its way.
    Accepted(Message),
    /// Empty or whitespace-only input.
    Ignored,
    /// A previous reply has not landed yet.
    Busy,
    /// The session was torn down.
    Closed,
}

impl SubmitOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted(_))
    }

    /// Short machine-readable label, used by the HTTP surface.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Accepted(_) => "accepted",
            Self::Ignored => "ignored",
            Self::Busy => "busy",
            Self::Closed => "closed",
        }
    }
}

/// Drives one chat session through the scripted stages.
///
/// Every accepted submission spawns a reply task that sleeps for the
/// configured delay and then appends the canned reply and advances the
/// stage under the session write lock. The task handle is kept so that
/// `teardown()` (or dropping the stepper) can abort it; the task also
/// re-checks `closed` before posting.
pub struct ConversationStepper {
    state: Arc<RwLock<SessionState>>,
    events: broadcast::Sender<SessionEvent>,
    reply_delay: Duration,
    pending: Mutex<Option<JoinHandle<()>>>,
}

impl ConversationStepper {
    /// Start a fresh session at the first stage.
    pub fn new(reply_delay: Duration) -> Arc<Self> {
        let (events, _rx) = broadcast::channel(DEFAULT_BROADCAST_CAPACITY);
        let state = SessionState::default();
        info!(session_id = %state.id, delay_ms = reply_delay.as_millis() as u64, "Chat session started");
        Arc::new(Self {
            state: Arc::new(RwLock::new(state)),
            events,
            reply_delay,
            pending: Mutex::new(None),
        })
    }

    /// Subscribe to transcript and stage changes.
    pub fn subscribe(&self) -> broadcast::Receiver<SessionEvent> {
        self.events.subscribe()
    }

    /// A copy of the current session state.
    pub async fn snapshot(&self) -> SessionState {
        self.state.read().await.clone()
    }

    pub async fn session_id(&self) -> Uuid {
        self.state.read().await.id
    }

    /// Store draft input without submitting it.
    pub async fn set_pending_input(&self, text: impl Into<String>) {
        let mut state = self.state.write().await;
        if !state.closed {
            state.pending_input = text.into();
        }
    }

    /// Submit whatever is currently in the draft input.
    pub async fn submit_pending(&self) -> SubmitOutcome {
        let draft = self.state.read().await.pending_input.clone();
        self.submit(&draft).await
    }

    /// Submit a user message.
    ///
    /// Appends the trimmed text to the transcript immediately and schedules
    /// the reply for the current stage. Blank input, a busy session, or a
    /// closed session leave the state untouched.
    pub async fn submit(&self, text: &str) -> SubmitOutcome {
        let text = text.trim();
        if text.is_empty() {
            debug!("Ignoring blank submission");
            return SubmitOutcome::Ignored;
        }

        let (session_id, stage, message) = {
            let mut state = self.state.write().await;
            if state.closed {
                debug!(session_id = %state.id, "Submission to closed session");
                return SubmitOutcome::Closed;
            }
            if state.busy {
                debug!(session_id = %state.id, "Submission refused while a reply is pending");
                return SubmitOutcome::Busy;
            }

            let message = Message::user(text);
            state.messages.push(message.clone());
            state.pending_input.clear();
            state.busy = true;

            // sent under the lock so subscribers see events in transcript order
            let _ = self.events.send(SessionEvent::MessageAppended {
                message: message.clone(),
            });
            (state.id, state.stage, message)
        };

        info!(session_id = %session_id, stage = %stage, "User message accepted");

        let handle = tokio::spawn(deliver_reply(
            Arc::clone(&self.state),
            self.events.clone(),
            self.reply_delay,
            stage,
            text.to_string(),
        ));
        self.track(handle);

        SubmitOutcome::Accepted(message)
    }

    /// Cancel any pending reply and close the session.
    pub async fn teardown(&self) {
        if let Some(handle) = self.take_pending() {
            handle.abort();
        }

        let mut state = self.state.write().await;
        if state.closed {
            return;
        }
        state.closed = true;
        state.busy = false;
        info!(
            session_id = %state.id,
            messages = state.messages.len(),
            stage = %state.stage,
            "Chat session closed"
        );
        let _ = self.events.send(SessionEvent::Closed {
            session_id: state.id,
        });
    }

    fn track(&self, handle: JoinHandle<()>) {
        let mut pending = self.pending.lock().unwrap_or_else(|e| e.into_inner());
        *pending = Some(handle);
    }

    fn take_pending(&self) -> Option<JoinHandle<()>> {
        self.pending
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .take()
    }
}

impl Drop for ConversationStepper {
    fn drop(&mut self) {
        if let Some(handle) = self.take_pending() {
            handle.abort();
        }
        if let Ok(mut state) = self.state.try_write() {
            state.closed = true;
            state.busy = false;
        }
    }
}

/// Wait out the reply delay, then post the canned reply for `stage`.
async fn deliver_reply(
    state: Arc<RwLock<SessionState>>,
    events: broadcast::Sender<SessionEvent>,
    delay: Duration,
    stage: ConversationStage,
    user_text: String,
) {
    tokio::time::sleep(delay).await;

    let reply = Message::assistant(reply_for(stage, &user_text));

    let mut state = state.write().await;
    if state.closed {
        debug!(session_id = %state.id, "Dropping reply for closed session");
        return;
    }

    state.messages.push(reply.clone());
    let new_stage = state.advance_past(stage);
    state.busy = false;

    let _ = events.send(SessionEvent::MessageAppended { message: reply });
    let _ = events.send(SessionEvent::StageAdvanced {
        stage: new_stage,
        stage_number: new_stage.number(),
        completion: state.completion,
    });

    info!(
        session_id = %state.id,
        answered = %stage,
        stage = %new_stage,
        completion = state.completion,
        "Assistant reply delivered"
    );
}
