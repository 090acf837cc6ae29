//! Main event loop

use anyhow::Result;
use crossterm::event;
use std::time::Duration;

use crate::constants::POLL_INTERVAL_MS;
use crate::input::{InputResult, handle_input};

use super::App;
use super::render_thread::RenderThread;

impl App {
    pub(crate) async fn event_loop(&mut self, render_thread: &RenderThread) -> Result<()> {
        loop {
            // Clear expired errors and toasts
            if self.state.status.clear_error_if_expired() {
                self.dirty = true;
            }
            if self.state.status.clear_toast_if_expired() {
                self.dirty = true;
            }

            // Render only when dirty (non-blocking - sends to render thread)
            if self.dirty {
                render_thread.render(self.state.clone());
                self.dirty = false;
            }

            if event::poll(Duration::from_millis(POLL_INTERVAL_MS))? {
                let evt = event::read()?;
                // Any input event (including resize) requires re-render
                self.dirty = true;
                match handle_input(evt, &self.state, &self.bindings) {
                    InputResult::Quit => break,
                    InputResult::Action(action) => {
                        self.handle_action(action, render_thread).await;
                    }
                    InputResult::Char(c) => self.handle_char(c),
                    InputResult::Backspace => self.handle_backspace(),
                    InputResult::Paste(text) => self.handle_paste(&text),
                    InputResult::Continue => {}
                }
            }
        }

        Ok(())
    }
}
