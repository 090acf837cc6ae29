use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
};

use super::responder::{
    render_api_key_field, render_empty_results, render_metrics, render_raw_output,
    render_text_area, render_tone_selector,
};
use super::widgets::{StatusInfo, error_bar, help_bar, status_bar, toast, warning_bar};
use crate::app::state::{AppState, Focus};
use crate::constants::EMAIL_PANE_HEIGHT;

/// Screen layout areas; optional panes collapse when not shown
struct ScreenLayout {
    status_area: Rect,
    key_area: Option<Rect>,
    email_area: Rect,
    tone_area: Rect,
    metrics_area: Option<Rect>,
    draft_area: Rect,
    raw_area: Option<Rect>,
    help_area: Rect,
}

fn compute_layout(area: Rect, state: &AppState) -> ScreenLayout {
    let show_key = state.key_entry_open();
    let show_metrics = state.has_result();
    let show_raw = state.raw_output.is_some();

    let mut constraints = vec![Constraint::Length(1)]; // Status bar
    if show_key {
        constraints.push(Constraint::Length(3));
    }
    constraints.push(Constraint::Length(EMAIL_PANE_HEIGHT));
    constraints.push(Constraint::Length(3)); // Tone selector
    if show_metrics {
        constraints.push(Constraint::Length(3));
    }
    constraints.push(Constraint::Min(3)); // Draft
    if show_raw {
        constraints.push(Constraint::Length(6));
    }
    constraints.push(Constraint::Length(1)); // Help bar

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    let mut next = chunks.iter().copied();
    let mut take = move || next.next().unwrap_or_default();

    ScreenLayout {
        status_area: take(),
        key_area: show_key.then(&mut take),
        email_area: take(),
        tone_area: take(),
        metrics_area: show_metrics.then(&mut take),
        draft_area: take(),
        raw_area: show_raw.then(&mut take),
        help_area: take(),
    }
}

pub fn render(frame: &mut Frame, state: &AppState) {
    let layout = compute_layout(frame.area(), state);

    status_bar(
        frame,
        layout.status_area,
        &StatusInfo {
            model: &state.model,
            credential: state.credential,
            loading: state.status.loading,
            status_message: &state.status.message,
        },
    );

    if let Some(area) = layout.key_area {
        render_api_key_field(
            frame,
            area,
            &state.api_key_input,
            state.credential.is_some(),
            state.focus == Focus::ApiKey,
        );
    }

    render_text_area(
        frame,
        layout.email_area,
        "Incoming Email",
        &state.email_input,
        "Dear Team, I am writing to inquire about...",
        state.focus == Focus::Email,
    );

    render_tone_selector(
        frame,
        layout.tone_area,
        state.tone,
        state.focus == Focus::Tone,
    );

    match &state.result {
        Some(result) => {
            if let Some(area) = layout.metrics_area {
                render_metrics(frame, area, result);
            }
            render_text_area(
                frame,
                layout.draft_area,
                "Draft Reply",
                &state.draft,
                "[The model returned an empty reply]",
                state.focus == Focus::Draft,
            );
        }
        None => render_empty_results(frame, layout.draft_area, state),
    }

    if let (Some(area), Some(raw)) = (layout.raw_area, &state.raw_output) {
        render_raw_output(frame, area, raw);
    }

    // Help bar or error
    if let Some(ref error) = state.status.error {
        if state.status.warning {
            warning_bar(frame, layout.help_area, error);
        } else {
            error_bar(frame, layout.help_area, error);
        }
    } else {
        help_bar(frame, layout.help_area, hints_for(state));
    }

    if let Some(ref message) = state.status.toast {
        toast(frame, message);
    }
}

fn hints_for(state: &AppState) -> &'static [(&'static str, &'static str)] {
    if state.status.loading {
        return &[("…", "waiting for provider")];
    }
    match state.focus {
        Focus::ApiKey => &[("Enter", "use key"), ("Tab", "next"), ("Esc", "quit")],
        Focus::Tone => &[
            ("←/→", "tone"),
            ("Enter", "generate"),
            ("Tab", "next"),
            ("Esc", "quit"),
        ],
        Focus::Email => &[
            ("Ctrl+G", "generate"),
            ("Ctrl+T", "tone"),
            ("Ctrl+L", "clear"),
            ("Tab", "next"),
            ("Esc", "quit"),
        ],
        Focus::Draft => &[
            ("Ctrl+Y", "confirm"),
            ("Ctrl+R", "reset draft"),
            ("Ctrl+G", "regenerate"),
            ("Tab", "next"),
            ("Esc", "quit"),
        ],
    }
}
