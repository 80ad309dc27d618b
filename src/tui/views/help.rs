use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::tui::layout::centered_rect;

/// Draw the modal help overlay describing keys and what the panels show.
pub fn draw_help_overlay(f: &mut Frame, area: Rect) {
    let block = Block::default().title("Help").borders(Borders::ALL);
    let help_area = centered_rect(60, 60, area);

    f.render_widget(Clear, help_area);

    let heading = |text: &'static str| {
        Line::from(vec![Span::styled(
            text,
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )])
    };

    let help_text = vec![
        Line::from(vec![Span::styled(
            "ghpulse - Help",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )]),
        Line::from(""),
        heading("Keys:"),
        Line::from("  r           Refresh from GitHub (drops the cached history)"),
        Line::from("  w           Cycle weekday order (Mon-Sun / first seen / by count)"),
        Line::from("  h, F1       Toggle this help"),
        Line::from("  q, Esc      Quit"),
        Line::from(""),
        heading("Panels:"),
        Line::from("  Metrics     Total commits, active days, average per day, busiest hour"),
        Line::from("  Hours       Commits per hour of day in each commit's own timezone"),
        Line::from("  Weekdays    Commits per weekday"),
        Line::from("  Messages    Average message length and the newest 10 messages"),
        Line::from(""),
        Line::from(vec![Span::styled(
            "Press 'h' or 'Esc' to close this help",
            Style::default().fg(Color::Gray),
        )]),
    ];

    let help_paragraph = Paragraph::new(help_text)
        .block(block)
        .wrap(ratatui::widgets::Wrap { trim: true });
    f.render_widget(help_paragraph, help_area);
}
