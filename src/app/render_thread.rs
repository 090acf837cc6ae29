//! Terminal ownership for the reply screen.
//!
//! Drawing happens on its own thread so the event loop never waits on the
//! terminal. The event loop hands over `AppState` snapshots; the thread keeps
//! at most one pending snapshot and draws it. While a completion request is
//! awaited the event loop is parked, so the busy snapshot sent just before the
//! request must arrive and stays on screen until the answer comes back.

use std::io::{self, Stdout};
use std::sync::mpsc::{self, Receiver, SyncSender, TrySendError};
use std::thread::{self, JoinHandle};

use crossterm::{
    event::{DisableBracketedPaste, EnableBracketedPaste},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

use super::state::AppState;

type ScreenTerminal = Terminal<CrosstermBackend<Stdout>>;

enum RenderMsg {
    Draw(Box<AppState>),
    Stop,
}

/// Handle held by the event loop; call `shutdown` so the terminal is
/// restored before the process exits.
pub struct RenderThread {
    tx: SyncSender<RenderMsg>,
    worker: Option<JoinHandle<()>>,
}

/// Raw mode, alternate screen and bracketed paste (for pasted emails)
fn enter_terminal() -> io::Result<ScreenTerminal> {
    enable_raw_mode()?;

    let mut stdout = io::stdout();
    if let Err(e) = execute!(stdout, EnterAlternateScreen, EnableBracketedPaste) {
        disable_raw_mode().ok();
        return Err(e);
    }

    Terminal::new(CrosstermBackend::new(stdout)).inspect_err(|_| {
        disable_raw_mode().ok();
    })
}

fn leave_terminal(terminal: &mut ScreenTerminal) {
    disable_raw_mode().ok();
    execute!(
        terminal.backend_mut(),
        DisableBracketedPaste,
        LeaveAlternateScreen
    )
    .ok();
}

fn draw_loop(rx: Receiver<RenderMsg>) {
    let mut terminal = match enter_terminal() {
        Ok(terminal) => terminal,
        Err(e) => {
            tracing::error!("Terminal setup failed: {}", e);
            return;
        }
    };

    while let Ok(RenderMsg::Draw(state)) = rx.recv() {
        if let Err(e) = terminal.draw(|f| crate::ui::render(f, &state)) {
            tracing::error!("Render error: {}", e);
        }
    }

    leave_terminal(&mut terminal);
}

impl RenderThread {
    pub fn spawn() -> io::Result<Self> {
        // One slot: a newer snapshot supersedes anything not yet drawn
        let (tx, rx) = mpsc::sync_channel(1);
        let worker = thread::Builder::new()
            .name("render".to_string())
            .spawn(move || draw_loop(rx))?;

        Ok(Self {
            tx,
            worker: Some(worker),
        })
    }

    /// Hand a snapshot to the render thread.
    ///
    /// Busy snapshots wait for a free slot; all others are skipped while the
    /// previous one is still being drawn.
    pub fn render(&self, state: AppState) {
        if state.status.loading {
            self.deliver(state);
            return;
        }

        match self.tx.try_send(RenderMsg::Draw(Box::new(state))) {
            Ok(()) => {}
            Err(TrySendError::Full(_)) => tracing::trace!("Render thread busy, skipping frame"),
            Err(TrySendError::Disconnected(_)) => tracing::error!("Render thread disconnected"),
        }
    }

    fn deliver(&self, state: AppState) {
        if self.tx.send(RenderMsg::Draw(Box::new(state))).is_err() {
            tracing::error!("Render thread disconnected");
        }
    }

    /// Stop drawing, restore the terminal and join the thread
    pub fn shutdown(mut self) {
        self.tx.send(RenderMsg::Stop).ok();
        if let Some(worker) = self.worker.take() {
            worker.join().ok();
        }
    }
}
