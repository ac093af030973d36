//! Shared UI components.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Render a two-line status bar: a centered status message above a centered
/// key legend.
pub fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    status_text: &str,
    status_color: Color,
    controls: &[(&str, &str)],
) {
    if area.height < 1 {
        return;
    }

    let mut lines = vec![Line::from(Span::styled(
        status_text.to_string(),
        Style::default().fg(status_color),
    ))];

    if !controls.is_empty() {
        let mut spans = Vec::new();
        for (i, (key, action)) in controls.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("  "));
            }
            spans.push(Span::styled(*key, Style::default().fg(Color::White)));
            spans.push(Span::styled(
                format!(" {}", action),
                Style::default().fg(Color::DarkGray),
            ));
        }
        lines.push(Line::from(spans));
    }

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

/// Clear the area and render a full-size bordered overlay with its content
/// vertically centered.
pub fn render_overlay(frame: &mut Frame, area: Rect, border_color: Color, lines: Vec<Line>) {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let content_height = (lines.len() as u16).min(inner.height);
    let y_offset = inner.y + inner.height.saturating_sub(content_height) / 2;

    let text = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(text, Rect::new(inner.x, y_offset, inner.width, content_height));
}
