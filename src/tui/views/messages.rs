use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::model::AnalysisReport;
use crate::util::message_headline;

/// Average message length plus the leading sample of messages.
pub fn draw_message_panel(f: &mut Frame, area: Rect, report: &AnalysisReport) {
    let width = area.width.saturating_sub(8) as usize;

    let mut lines = vec![
        Line::from(vec![
            Span::styled("Average commit message length: ", Style::default().fg(Color::White)),
            Span::styled(
                format!("{} characters", report.avg_message_length.trunc() as u64),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(""),
    ];

    lines.extend(report.sample_messages.iter().enumerate().map(|(i, message)| {
        Line::from(vec![
            Span::styled(format!("{:>3}. ", i + 1), Style::default().fg(Color::DarkGray)),
            Span::raw(message_headline(message, width.max(10))),
        ])
    }));

    let panel = Paragraph::new(lines).block(
        Block::default()
            .title("Commit Message Insights")
            .borders(Borders::ALL),
    );
    f.render_widget(panel, area);
}
