use ratatui::{
    layout::{Constraint, Layout},
    style::Style,
    widgets::{Block, Paragraph},
    Frame,
};

use crate::ui;
use crate::ui::components::render_statusbar;
use crate::ui::components::statusbar::SourceMode;
use crate::ui::{App, View};

pub(crate) fn render(f: &mut Frame, app: &App) {
    // Fill entire frame with app background (pure black)
    let bg_block = Block::default().style(Style::default().bg(ui::theme::BG_APP));
    f.render_widget(bg_block, f.area());

    let chunks = Layout::vertical([
        Constraint::Length(1), // header
        Constraint::Min(0),    // content
        Constraint::Length(1), // footer hints
        Constraint::Length(1), // global statusbar
    ])
    .split(f.area());

    // Chrome color flags the pending-quit state
    let chrome_color = if app.pending_quit {
        ui::theme::ACCENT_ERROR
    } else {
        ui::theme::ACCENT_PRIMARY
    };

    let title: String = match app.view {
        View::Dashboard => "IDEADECK — Ideas".to_string(),
        View::Detail => app
            .detail_idea()
            .map(|i| i.title.clone())
            .unwrap_or_else(|| "Idea".to_string()),
    };
    let header = Paragraph::new(format!(" {title}")).style(Style::default().fg(chrome_color));
    f.render_widget(header, chunks[0]);

    match app.view {
        View::Dashboard => ui::views::render_dashboard(f, app, chunks[1]),
        View::Detail => ui::views::render_detail(f, app, chunks[1]),
    }

    let (footer_text, footer_style) = if app.pending_quit {
        (
            "⚠ Press Ctrl+C again to quit".to_string(),
            Style::default().fg(ui::theme::ACCENT_ERROR),
        )
    } else {
        let text = match app.view {
            View::Dashboard => {
                "j/k move · enter open · f favorite · x hide · 1/2 tabs · c/r filter · s sort · m more · q quit"
            }
            View::Detail => "f favorite · x hide · esc back · q quit",
        };
        (text.to_string(), Style::default().fg(ui::theme::TEXT_MUTED))
    };
    f.render_widget(
        Paragraph::new(format!(" {footer_text}")).style(footer_style),
        chunks[2],
    );

    let mode = if app.loading {
        SourceMode::Loading
    } else if app.is_fallback() {
        SourceMode::Offline
    } else {
        SourceMode::Live
    };
    render_statusbar(f, chunks[3], app.current_notification(), mode);
}
