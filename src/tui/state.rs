use crate::analysis::WeekdayOrder;
use crate::model::AnalysisReport;
use crossterm::event::KeyCode;

/// What the run loop should do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardAction {
    None,
    Quit,
    Refresh,
    Reorder(WeekdayOrder),
}

pub struct DashboardState {
    pub report: AnalysisReport,
    pub weekday_order: WeekdayOrder,
    pub show_help: bool,
    pub status_message: Option<String>,
    pub error: Option<String>,
}

impl DashboardState {
    pub fn new(report: AnalysisReport, weekday_order: WeekdayOrder) -> Self {
        Self {
            report,
            weekday_order,
            show_help: false,
            status_message: None,
            error: None,
        }
    }

    pub fn handle_key(&mut self, code: KeyCode) -> DashboardAction {
        if self.show_help {
            match code {
                KeyCode::Esc | KeyCode::Char('h') | KeyCode::F(1) => self.show_help = false,
                KeyCode::Char('q') => return DashboardAction::Quit,
                _ => {}
            }
            return DashboardAction::None;
        }

        match code {
            KeyCode::Char('q') | KeyCode::Esc => DashboardAction::Quit,
            KeyCode::Char('h') | KeyCode::F(1) => {
                self.show_help = true;
                DashboardAction::None
            }
            KeyCode::Char('r') => {
                self.status_message = Some("Refreshing from GitHub...".to_string());
                self.error = None;
                DashboardAction::Refresh
            }
            KeyCode::Char('w') => {
                self.weekday_order = self.weekday_order.next();
                DashboardAction::Reorder(self.weekday_order)
            }
            _ => DashboardAction::None,
        }
    }

    /// Swap in a freshly computed report, or keep the old one and show the error.
    pub fn apply_result<E: std::fmt::Display>(&mut self, result: Result<AnalysisReport, E>, done: &str) {
        match result {
            Ok(report) => {
                self.report = report;
                self.error = None;
                self.status_message = Some(done.to_string());
            }
            Err(e) => {
                self.status_message = None;
                self.error = Some(e.to_string());
            }
        }
    }
}
