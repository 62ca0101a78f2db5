pub mod command_bar;
pub mod error_view;
pub mod help;
pub mod input;
pub mod report;
pub mod status_bar;
pub mod welcome;

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};

use crate::app::{App, AppMode, RequestState};

use command_bar::CommandBar;
use error_view::ErrorView;
use help::HelpView;
use report::ReportView;
use status_bar::StatusBar;
use welcome::WelcomeView;

pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    // Layout: main content + status bar + optional input bar
    let bottom_height = if app.mode != AppMode::Normal { 2 } else { 1 };

    let [main_area, bottom_area] =
        Layout::vertical([Constraint::Min(1), Constraint::Length(bottom_height)]).areas(area);

    // Split bottom into status bar and optional input bar
    if app.mode != AppMode::Normal {
        let [status_area, cmd_area] =
            Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).areas(bottom_area);
        frame.render_widget(StatusBar::new(app), status_area);
        frame.render_widget(CommandBar::new(app), cmd_area);
    } else {
        frame.render_widget(StatusBar::new(app), bottom_area);
    }

    // Render the main area from the current request state. A failure always
    // takes precedence; idle and loading fall back to the static welcome
    // content, which carries no data dependency.
    match &app.analysis.state {
        RequestState::Failed(message) => {
            frame.render_widget(ErrorView::new(message), main_area);
        }
        RequestState::Success(report) => {
            frame.render_widget(ReportView::new(report), main_area);
        }
        RequestState::Idle => {
            frame.render_widget(WelcomeView::new(), main_area);
        }
        RequestState::Loading => {
            frame.render_widget(WelcomeView::new().loading(true), main_area);
        }
    }

    // Help overlay (renders on top of everything)
    if app.show_help {
        frame.render_widget(HelpView::new(), main_area);
    }
}
