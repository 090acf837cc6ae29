//! Application core - owns the session and drives the terminal front-end

mod actions;
mod event_loop;
pub mod render_thread;
pub mod state;

use anyhow::Result;

use render_thread::RenderThread;

use crate::ai::{CompletionBackend, CompletionSettings, GroqClient};
use crate::config::Config;
use crate::input::KeyBindings;
use crate::session::Session;
use state::{AppState, Focus};

pub struct App {
    pub(crate) session: Session,
    pub(crate) client: GroqClient,
    pub(crate) state: AppState,
    pub(crate) bindings: KeyBindings,
    /// Dirty flag: when true, UI needs re-render. Skips renders when nothing changed.
    pub(crate) dirty: bool,
}

impl App {
    pub fn new(config: &Config, session: Session) -> Self {
        let client = GroqClient::new(CompletionSettings::from(&config.ai));

        let credential = session.credential_source();
        let mut state = AppState {
            tone: session.tone,
            credential,
            model: client.model().to_string(),
            // Ask for a key first when none was found
            focus: if credential.is_some() {
                Focus::Email
            } else {
                Focus::ApiKey
            },
            ..Default::default()
        };

        match credential {
            Some(source) => state
                .status
                .set_message(format!("API key loaded from {}", source)),
            None => state
                .status
                .set_message("No API key found. Enter one to use for this session."),
        }

        Self {
            session,
            client,
            state,
            bindings: KeyBindings::new(),
            dirty: true, // Start dirty for initial render
        }
    }

    /// Run the interactive session until the user quits, then tear it down
    pub async fn run(mut self) -> Result<()> {
        // Spawn background render thread (owns terminal setup/teardown)
        let render_thread = RenderThread::spawn()?;

        let result = self.event_loop(&render_thread).await;

        // Shutdown render thread (handles terminal cleanup)
        render_thread.shutdown();

        self.session.end();

        result
    }
}
