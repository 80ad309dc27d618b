use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::model::SummaryStats;
use crate::output::metric_lines;
use crate::tui::layout::metric_columns;

/// Four bordered tiles, one per headline metric.
pub fn draw_metrics(f: &mut Frame, area: Rect, stats: &SummaryStats) {
    let columns = metric_columns(area);
    let colors = [Color::Green, Color::Cyan, Color::Magenta, Color::Yellow];

    for (((label, value), column), color) in metric_lines(stats).into_iter().zip(columns).zip(colors) {
        let tile = Paragraph::new(Line::from(vec![Span::styled(
            value,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )]))
        .alignment(Alignment::Center)
        .block(Block::default().title(label).borders(Borders::ALL));
        f.render_widget(tile, column);
    }
}
