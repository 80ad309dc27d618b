use ratatui::layout::Alignment;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use super::layout::dashboard_areas;
use super::state::DashboardState;
use super::views::{
    draw_help_overlay, draw_hour_chart, draw_message_panel, draw_metrics, draw_weekday_chart,
};

/// Render the whole dashboard for the current state.
pub fn draw_frame(f: &mut Frame, state: &DashboardState) {
    let size = f.size();
    let areas = dashboard_areas(size);
    let report = &state.report;

    let title = Paragraph::new(Line::from(vec![
        Span::styled(
            "Commit Intelligence ",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(report.repository.clone(), Style::default().fg(Color::Cyan)),
        Span::styled(
            format!("  generated {}", report.generated_at.format("%Y-%m-%d %H:%M UTC")),
            Style::default().fg(Color::DarkGray),
        ),
    ]))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, areas.title);

    draw_metrics(f, areas.metrics, &report.stats);
    draw_hour_chart(f, areas.hour_chart, &report.hour_counts);
    draw_weekday_chart(f, areas.weekday_chart, &report.weekday_counts, state.weekday_order);
    draw_message_panel(f, areas.messages, report);
    f.render_widget(status_line(state), areas.status);

    if state.show_help {
        draw_help_overlay(f, size);
    }
}

fn status_line(state: &DashboardState) -> Paragraph<'static> {
    let hint = Span::styled(
        " q quit  r refresh  w weekday order  h help ",
        Style::default().fg(Color::Gray),
    );
    let line = if let Some(err) = &state.error {
        Line::from(vec![
            hint,
            Span::styled(
                format!(" Error: {err}"),
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
        ])
    } else if let Some(msg) = &state.status_message {
        Line::from(vec![hint, Span::styled(format!(" {msg}"), Style::default().fg(Color::Green))])
    } else {
        Line::from(hint)
    };
    Paragraph::new(line)
}

/// Chooses a style/color based on relative intensity of commit activity.
pub fn get_intensity_color(commits: u64, max: u64) -> Style {
    if max == 0 {
        return Style::default().fg(Color::White);
    }

    let ratio = commits as f64 / max as f64;
    if ratio > 0.8 {
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
    } else if ratio > 0.6 {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else if ratio > 0.4 {
        Style::default().fg(Color::Green)
    } else if ratio > 0.2 {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::Blue)
    }
}
