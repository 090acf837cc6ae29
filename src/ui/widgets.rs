//! Common UI widgets and utilities

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use super::theme::Theme;

pub use super::status_bar::{StatusInfo, status_bar};

pub fn error_bar(frame: &mut Frame, area: Rect, message: &str) {
    let style = Theme::error_bar();
    let paragraph = Paragraph::new(format!(" Error: {} ", message)).style(style);
    frame.render_widget(paragraph, area);
}

pub fn warning_bar(frame: &mut Frame, area: Rect, message: &str) {
    let style = Theme::warning_bar();
    let paragraph = Paragraph::new(format!(" {} ", message)).style(style);
    frame.render_widget(paragraph, area);
}

pub fn help_bar(frame: &mut Frame, area: Rect, hints: &[(&str, &str)]) {
    use unicode_width::UnicodeWidthStr;

    let available_width = area.width as usize;

    // Format: " key desc │" (separator between hints)
    let hint_widths: Vec<usize> = hints
        .iter()
        .enumerate()
        .map(|(i, (key, desc))| {
            let base = format!(" {} ", key).width() + desc.width();
            if i < hints.len() - 1 {
                base + 3 // " │ " separator
            } else {
                base + 1 // trailing space
            }
        })
        .collect();

    // Find how many hints we can fit
    let mut total_width = 0;
    let mut hints_to_show = 0;
    for width in &hint_widths {
        if total_width + width <= available_width {
            total_width += width;
            hints_to_show += 1;
        } else {
            break;
        }
    }

    // Show at least one hint if possible
    hints_to_show = hints_to_show.max(1).min(hints.len());

    let mut spans: Vec<Span> = Vec::new();
    for (i, (key, desc)) in hints.iter().take(hints_to_show).enumerate() {
        spans.push(Span::styled(format!(" {} ", key), Theme::help_key()));
        spans.push(Span::styled(desc.to_string(), Theme::help_desc()));
        if i < hints_to_show - 1 {
            spans.push(Span::styled(" │ ", Theme::text_muted()));
        }
    }
    spans.push(Span::styled(" ", Theme::text_muted()));

    let paragraph = Paragraph::new(Line::from(spans));
    frame.render_widget(paragraph, area);
}

/// Small bordered popup near the bottom of the screen
pub fn toast(frame: &mut Frame, message: &str) {
    use unicode_width::UnicodeWidthStr;

    let screen = frame.area();
    let width = (message.width() as u16 + 4).min(screen.width);
    let area = Rect {
        x: screen.x + screen.width.saturating_sub(width) / 2,
        y: screen.y + screen.height.saturating_sub(5),
        width,
        height: 3.min(screen.height),
    };

    frame.render_widget(Clear, area);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Theme::border_focused());
    let paragraph = Paragraph::new(message).style(Theme::toast()).block(block);
    frame.render_widget(paragraph, area);
}

/// Mask a secret for display, keeping only its length visible
pub fn mask_secret(secret: &str) -> String {
    std::iter::repeat_n(super::theme::symbols::MASK, secret.chars().count()).collect()
}

/// Rows `text` occupies when wrapped at `width` columns (character wrap;
/// word wrapping can only add rows, so this is a lower bound)
pub fn wrapped_line_count(text: &str, width: u16) -> u16 {
    use unicode_width::UnicodeWidthStr;

    let width = width.max(1) as usize;
    let rows: usize = text
        .split('\n')
        .map(|line| line.width().div_ceil(width).max(1))
        .sum();
    rows.min(u16::MAX as usize) as u16
}

/// Sanitize text for display: remove control characters and ANSI escape sequences
pub fn sanitize_text(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '\x1b' && chars.peek() == Some(&'[') {
            chars.next();
            // Skip until we hit a letter (end of sequence)
            while let Some(&ch) = chars.peek() {
                chars.next();
                if ch.is_ascii_alphabetic() {
                    break;
                }
            }
            continue;
        }
        // Replace other control characters (except newline and tab) with space
        if c.is_control() && c != '\n' && c != '\t' {
            result.push(' ');
        } else {
            result.push(c);
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_secret_keeps_length() {
        assert_eq!(mask_secret("gsk_1"), "•••••");
        assert_eq!(mask_secret(""), "");
    }

    #[test]
    fn test_wrapped_line_count() {
        assert_eq!(wrapped_line_count("", 10), 1);
        assert_eq!(wrapped_line_count("abc", 10), 1);
        assert_eq!(wrapped_line_count("abcdefghijk", 5), 3);
        assert_eq!(wrapped_line_count("a\n\nb", 10), 3);
        assert_eq!(wrapped_line_count("abc", 0), 3);
    }

    #[test]
    fn test_sanitize_strips_ansi_and_controls() {
        assert_eq!(sanitize_text("\x1b[31mred\x1b[0m"), "red");
        assert_eq!(sanitize_text("a\x07b\nc\td"), "a b\nc\td");
    }
}
