mod charts;
mod help;
mod messages;
mod metrics;

pub use charts::{draw_hour_chart, draw_weekday_chart, hour_series};
pub use help::draw_help_overlay;
pub use messages::draw_message_panel;
pub use metrics::draw_metrics;
