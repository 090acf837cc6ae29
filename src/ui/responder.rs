//! Panels of the reply screen: inputs, tone selector and results

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::theme::{Theme, symbols};
use super::widgets::{mask_secret, sanitize_text, wrapped_line_count};
use crate::ai::Tone;
use crate::app::state::AppState;
use crate::session::SessionResult;

fn field_block(title: String, focused: bool) -> Block<'static> {
    let border_style = if focused {
        Theme::border_focused()
    } else {
        Theme::border()
    };

    Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(title)
}

fn with_cursor(value: &str, focused: bool) -> String {
    if focused {
        format!("{}{}", value, symbols::CURSOR)
    } else {
        value.to_string()
    }
}

/// Masked manual key entry, shown while no stored key was resolved
pub fn render_api_key_field(
    frame: &mut Frame,
    area: Rect,
    value: &str,
    key_set: bool,
    focused: bool,
) {
    let block = field_block(" Groq API Key (this session only) ".to_string(), focused);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let line = if value.is_empty() && !focused {
        let hint = if key_set {
            "Key set for this session. Type a new one and press Enter to replace it"
        } else {
            "Put GROQ_API_KEY in secrets.toml or the environment, or type it here"
        };
        Line::from(Span::styled(hint, Theme::text_muted()))
    } else {
        Line::from(Span::styled(
            with_cursor(&mask_secret(value), focused),
            Theme::text(),
        ))
    };

    frame.render_widget(Paragraph::new(line), inner);
}

/// Multi-line text area; scrolls so the end of the text stays visible
pub fn render_text_area(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    value: &str,
    placeholder: &str,
    focused: bool,
) {
    let char_count = value.chars().count();
    let block = field_block(format!(" {} ({} chars) ", title, char_count), focused);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if value.is_empty() && !focused {
        let paragraph = Paragraph::new(placeholder).style(Theme::text_muted());
        frame.render_widget(paragraph, inner);
        return;
    }

    let style = if focused {
        Theme::text()
    } else {
        Theme::text_secondary()
    };

    let text = with_cursor(&sanitize_text(value), focused);

    // Keep the cursor line in view
    let lines = wrapped_line_count(&text, inner.width);
    let scroll = lines.saturating_sub(inner.height);

    let paragraph = Paragraph::new(text)
        .style(style)
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0));
    frame.render_widget(paragraph, inner);
}

pub fn render_tone_selector(frame: &mut Frame, area: Rect, selected: Tone, focused: bool) {
    let block = field_block(" Target Tone ".to_string(), focused);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut spans = Vec::with_capacity(Tone::ALL.len() * 2);
    for tone in Tone::ALL {
        let (marker, style) = if tone == selected {
            let style = if focused {
                Theme::selected()
            } else {
                Theme::text_accent()
            };
            (symbols::TONE_SELECTED, style)
        } else {
            (symbols::TONE_UNSELECTED, Theme::text_secondary())
        };
        spans.push(Span::styled(format!(" {} {} ", marker, tone.label()), style));
        spans.push(Span::raw("  "));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), inner);
}

/// Intent and tone indicators side by side
pub fn render_metrics(frame: &mut Frame, area: Rect, result: &SessionResult) {
    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let intent_block = field_block(" Detected Intent ".to_string(), false);
    let intent_line = Line::from(Span::styled(
        result.intent.clone(),
        Theme::intent_label(result.intent_category()),
    ));
    frame.render_widget(Paragraph::new(intent_line).block(intent_block), panes[0]);

    let tone_block = field_block(" Suggested Tone ".to_string(), false);
    let tone_line = Line::from(Span::styled(result.tone.clone(), Theme::tone_label()));
    frame.render_widget(Paragraph::new(tone_line).block(tone_block), panes[1]);
}

/// Raw model output kept after a decode failure
pub fn render_raw_output(frame: &mut Frame, area: Rect, raw: &str) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Theme::border_error())
        .title(" Raw output ");

    let paragraph = Paragraph::new(sanitize_text(raw))
        .style(Theme::text_muted())
        .wrap(Wrap { trim: false })
        .block(block);
    frame.render_widget(paragraph, area);
}

/// Hint shown in place of the results until something was generated
pub fn render_empty_results(frame: &mut Frame, area: Rect, state: &AppState) {
    let hint = if state.status.loading {
        "Generating reply..."
    } else {
        "Paste an email above, pick a tone and press Ctrl+G to draft a reply."
    };
    let paragraph = Paragraph::new(hint)
        .style(Theme::text_muted())
        .block(field_block(" Draft Reply ".to_string(), false));
    frame.render_widget(paragraph, area);
}
