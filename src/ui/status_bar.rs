//! Status bar rendering with credential indicator and model name

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use super::theme::{Theme, symbols};
use crate::credentials::CredentialSource;

/// Status bar info for rendering
pub struct StatusInfo<'a> {
    pub model: &'a str,
    pub credential: Option<CredentialSource>,
    pub loading: bool,
    pub status_message: &'a str,
}

/// Calculate display width of a string (accounting for Unicode)
fn display_width(s: &str) -> usize {
    use unicode_width::UnicodeWidthStr;
    s.width()
}

/// Truncate string to fit display width
fn truncate_to_width(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    if max_width < 4 {
        return s.chars().take(max_width).collect();
    }

    let mut width = 0;
    let mut result = String::new();

    for c in s.chars() {
        let char_width = c.width().unwrap_or(1);
        if width + char_width > max_width - 3 {
            result.push_str("...");
            return result;
        }
        width += char_width;
        result.push(c);
    }
    result
}

/// Status bar: key indicator + app name on the left, message + model on the right
pub fn status_bar(frame: &mut Frame, area: Rect, info: &StatusInfo) {
    let style = Theme::status_bar();
    let width = area.width as usize;

    let (indicator, indicator_style) = match info.credential {
        Some(_) => (format!(" {} ", symbols::KEY_OK), Theme::status_ok()),
        None => (format!(" {} ", symbols::KEY_MISSING), Theme::status_missing()),
    };
    let key_label = match info.credential {
        Some(source) => format!("key: {} ", source),
        None => "no API key ".to_string(),
    };

    let left: Vec<(String, Style)> = vec![
        (indicator, indicator_style),
        ("mailreply │ ".to_string(), style),
        (key_label, style),
    ];
    let left_width: usize = left.iter().map(|(s, _)| display_width(s)).sum();

    let model = format!(" {} ", info.model);
    let (message, message_style) = if info.loading {
        (format!("{} │", info.status_message), Theme::status_busy())
    } else if info.status_message.is_empty() {
        (String::new(), style)
    } else {
        (format!("{} │", info.status_message), style)
    };

    // Message gets whatever room is left after the fixed parts
    let room = width.saturating_sub(left_width + display_width(&model) + 1);
    let message = if display_width(&message) > room {
        truncate_to_width(&message, room)
    } else {
        message
    };

    let used = left_width + display_width(&message) + display_width(&model);
    let padding = " ".repeat(width.saturating_sub(used));

    let mut spans: Vec<Span> = left
        .into_iter()
        .map(|(text, style)| Span::styled(text, style))
        .collect();
    spans.push(Span::styled(padding, style));
    spans.push(Span::styled(message, message_style));
    spans.push(Span::styled(model, style));

    let paragraph = Paragraph::new(Line::from(spans)).style(style);
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_to_width() {
        assert_eq!(truncate_to_width("hello", 10), "hello");
        assert_eq!(truncate_to_width("hello world", 8), "hello...");
        assert_eq!(truncate_to_width("hello", 3), "hel");
    }
}
