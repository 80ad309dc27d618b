use std::io;
use std::time::Duration;

use crossterm::event::{poll, read, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::{Backend, CrosstermBackend};
use ratatui::Terminal;

use super::draw::draw_frame;
use super::state::{DashboardAction, DashboardState};
use crate::github::CommitSource;
use crate::model::AnalysisReport;
use crate::session::{AnalysisRequest, Session};

pub fn run<S: CommitSource>(
    session: &mut Session<S>,
    request: AnalysisRequest,
    report: AnalysisReport,
) -> io::Result<()> {
    enable_raw_mode()?;
    execute!(io::stdout(), EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
    terminal.clear()?;

    let result = event_loop(&mut terminal, session, request, report);

    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    result
}

fn event_loop<B: Backend, S: CommitSource>(
    terminal: &mut Terminal<B>,
    session: &mut Session<S>,
    mut request: AnalysisRequest,
    report: AnalysisReport,
) -> io::Result<()> {
    let mut state = DashboardState::new(report, request.weekday_order);

    loop {
        terminal.draw(|f| draw_frame(f, &state))?;

        if !poll(Duration::from_millis(200))? {
            continue;
        }
        let Event::Key(key_event) = read()? else {
            continue;
        };
        if key_event.kind != KeyEventKind::Press {
            continue;
        }

        match state.handle_key(key_event.code) {
            DashboardAction::None => {}
            DashboardAction::Quit => break,
            DashboardAction::Refresh => {
                // Show the status line before blocking on the network.
                terminal.draw(|f| draw_frame(f, &state))?;
                let result = session.refresh(&request);
                state.apply_result(result, "Refreshed");
            }
            DashboardAction::Reorder(order) => {
                request.weekday_order = order;
                let result = session.analyze(&request);
                state.apply_result(result, &format!("Weekdays ordered {}", order.label()));
            }
        }
    }

    Ok(())
}
