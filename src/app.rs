//! App — view navigation and the chat session bound to the chat view.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tracing::info;

use crate::config::AppConfig;
use crate::error::AppError;
use crate::stepper::{ConversationStepper, SubmitOutcome};

/// The top-level screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum View {
    #[default]
    Landing,
    Chat,
    Dashboard,
    Resources,
}

impl std::fmt::Display for View {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Landing => "landing",
            Self::Chat => "chat",
            Self::Dashboard => "dashboard",
            Self::Resources => "resources",
        };
        write!(f, "{s}")
    }
}

impl std::str::FromStr for View {
    type Err = AppError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "landing" => Ok(Self::Landing),
            "chat" => Ok(Self::Chat),
            "dashboard" => Ok(Self::Dashboard),
            "resources" => Ok(Self::Resources),
            _ => Err(AppError::UnknownView(s.to_string())),
        }
    }
}

struct Navigation {
    view: View,
    session: Option<Arc<ConversationStepper>>,
}

/// Shared application state: which view is showing and, while the chat view
/// is open, its session.
///
/// A session lives exactly as long as the chat view. Leaving the view tears
/// the session down, which cancels any reply still in flight. Nothing is
/// carried over to the next visit.
pub struct App {
    config: AppConfig,
    nav: RwLock<Navigation>,
}

impl App {
    pub fn new(config: AppConfig) -> Arc<Self> {
        Arc::new(Self {
            config,
            nav: RwLock::new(Navigation {
                view: View::Landing,
                session: None,
            }),
        })
    }

    pub async fn view(&self) -> View {
        self.nav.read().await.view
    }

    /// The active chat session, if the chat view is open.
    pub async fn session(&self) -> Option<Arc<ConversationStepper>> {
        self.nav.read().await.session.clone()
    }

    /// Switch to `view`. Opening chat starts a fresh session; re-opening the
    /// chat view while it is showing keeps the current one.
    pub async fn open(&self, view: View) {
        let previous = {
            let mut nav = self.nav.write().await;
            if nav.view == view {
                return;
            }
            info!(from = %nav.view, to = %view, "Navigating");
            nav.view = view;
            let previous = nav.session.take();
            if view == View::Chat {
                nav.session = Some(ConversationStepper::new(self.config.reply_delay));
            }
            previous
        };

        if let Some(session) = previous {
            session.teardown().await;
        }
    }

    /// Return to the landing view, discarding any chat session.
    pub async fn back(&self) {
        self.open(View::Landing).await;
    }

    /// Forward a submission to the active chat session.
    pub async fn submit(&self, text: &str) -> Result<SubmitOutcome, AppError> {
        let session = self.session().await.ok_or(AppError::NoActiveSession)?;
        Ok(session.submit(text).await)
    }

    /// Tear down any session before the process exits.
    pub async fn shutdown(&self) {
        let session = self.nav.write().await.session.take();
        if let Some(session) = session {
            session.teardown().await;
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::stepper::SessionEvent;

    fn test_app(delay_ms: u64) -> Arc<App> {
        App::new(AppConfig {
            reply_delay: Duration::from_millis(delay_ms),
            ..AppConfig::default()
        })
    }

    #[test]
    fn view_parse_and_display() {
        for view in [View::Landing, View::Chat, View::Dashboard, View::Resources] {
            assert_eq!(view.to_string().parse::<View>().unwrap(), view);
        }
        assert!(matches!("settings".parse::<View>(), Err(AppError::UnknownView(_))));
    }

    #[tokio::test]
    async fn starts_on_landing_without_session() {
        let app = test_app(10);
        assert_eq!(app.view().await, View::Landing);
        assert!(app.session().await.is_none());
        assert!(matches!(app.submit("hi").await, Err(AppError::NoActiveSession)));
    }

    #[tokio::test]
    async fn opening_chat_starts_session() {
        let app = test_app(10);
        app.open(View::Chat).await;
        assert_eq!(app.view().await, View::Chat);
        let session = app.session().await.expect("session");

        // re-opening keeps the same session
        app.open(View::Chat).await;
        let again = app.session().await.expect("session");
        assert!(Arc::ptr_eq(&session, &again));
    }

    #[tokio::test]
    async fn back_tears_down_session_and_cancels_reply() {
        let app = test_app(50);
        app.open(View::Chat).await;
        let session = app.session().await.unwrap();
        let mut rx = session.subscribe();

        assert!(app.submit("Learn Rust").await.unwrap().is_accepted());
        app.back().await;

        assert_eq!(app.view().await, View::Landing);
        assert!(app.session().await.is_none());

        tokio::time::sleep(Duration::from_millis(150)).await;
        let state = session.snapshot().await;
        assert!(state.closed);
        assert_eq!(state.messages.len(), 1);

        // user message, then closed; the reply never arrives
        assert!(matches!(rx.recv().await.unwrap(), SessionEvent::MessageAppended { .. }));
        assert!(matches!(rx.recv().await.unwrap(), SessionEvent::Closed { .. }));
    }

    #[tokio::test]
    async fn returning_to_chat_starts_over() {
        let app = test_app(10);
        app.open(View::Chat).await;
        let first = app.session().await.unwrap();
        first.submit("Learn Rust").await;

        app.back().await;
        app.open(View::Chat).await;
        let second = app.session().await.unwrap();

        assert!(!Arc::ptr_eq(&first, &second));
        let state = second.snapshot().await;
        assert!(state.messages.is_empty());
        assert_eq!(state.stage.number(), 1);
    }

    #[tokio::test]
    async fn other_views_have_no_session() {
        let app = test_app(10);
        app.open(View::Chat).await;
        app.open(View::Dashboard).await;
        assert_eq!(app.view().await, View::Dashboard);
        assert!(app.session().await.is_none());
    }
}
