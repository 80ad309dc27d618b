use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Bar, BarChart, BarGroup, Block, Borders};
use ratatui::Frame;

use crate::analysis::WeekdayOrder;
use crate::model::{FrequencyEntry, HourCount};
use crate::tui::draw::get_intensity_color;

/// Counts for all 24 hours; hours missing from the table are zero.
pub fn hour_series(entries: &[HourCount]) -> [u64; 24] {
    let mut series = [0u64; 24];
    for entry in entries {
        if let Some(slot) = series.get_mut(entry.hour as usize) {
            *slot = entry.count as u64;
        }
    }
    series
}

pub fn draw_hour_chart(f: &mut Frame, area: Rect, entries: &[HourCount]) {
    let series = hour_series(entries);
    let max = series.iter().copied().max().unwrap_or(0);
    let labels: Vec<String> = (0..series.len()).map(|h| h.to_string()).collect();

    let bars: Vec<Bar> = series
        .iter()
        .zip(&labels)
        .map(|(&count, label)| {
            Bar::default()
                .value(count)
                .label(Line::from(label.as_str()))
                .style(get_intensity_color(count, max))
        })
        .collect();

    // Narrow the bars until all 24 hours fit inside the block.
    let inner_width = area.width.saturating_sub(2) as usize;
    let bar_width = ((inner_width / series.len()).saturating_sub(1)).clamp(1, 4) as u16;

    let chart = BarChart::default()
        .block(Block::default().title("Commits by Hour").borders(Borders::ALL))
        .data(BarGroup::default().bars(&bars))
        .bar_width(bar_width)
        .bar_gap(1)
        .value_style(Style::default().fg(Color::Black).bg(Color::Gray))
        .label_style(Style::default().fg(Color::White));
    f.render_widget(chart, area);
}

pub fn draw_weekday_chart(f: &mut Frame, area: Rect, entries: &[FrequencyEntry], order: WeekdayOrder) {
    let max = entries.iter().map(|e| e.count as u64).max().unwrap_or(0);
    let labels: Vec<String> = entries.iter().map(|e| e.label.chars().take(3).collect()).collect();

    let bars: Vec<Bar> = entries
        .iter()
        .zip(&labels)
        .map(|(entry, label)| {
            let count = entry.count as u64;
            Bar::default()
                .value(count)
                .label(Line::from(label.as_str()))
                .style(get_intensity_color(count, max))
        })
        .collect();

    let chart = BarChart::default()
        .block(
            Block::default()
                .title(format!("Commits by Weekday ({})", order.label()))
                .borders(Borders::ALL),
        )
        .data(BarGroup::default().bars(&bars))
        .bar_width(4)
        .bar_gap(1)
        .value_style(Style::default().fg(Color::Black).bg(Color::Gray))
        .label_style(Style::default().fg(Color::White));
    f.render_widget(chart, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hour(hour: u32, count: usize) -> HourCount {
        HourCount { hour, count }
    }

    #[test]
    fn hour_series_fills_gaps_with_zero() {
        let entries = vec![hour(0, 2), hour(23, 5)];
        let series = hour_series(&entries);
        assert_eq!(series[0], 2);
        assert_eq!(series[12], 0);
        assert_eq!(series[23], 5);
        assert_eq!(series.iter().sum::<u64>(), 7);
    }

    #[test]
    fn hour_series_ignores_out_of_range_hours() {
        let entries = vec![hour(24, 1), hour(99, 2)];
        assert_eq!(hour_series(&entries).iter().sum::<u64>(), 0);
    }
}
