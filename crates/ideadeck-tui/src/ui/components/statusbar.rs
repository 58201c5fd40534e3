// Global status bar at the very bottom of the app. Notifications on the
// left, data-source mode on the right.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::ui::notifications::{Notification, NotificationLevel};
use crate::ui::theme;

/// Which data the session is running on, for the right-hand column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceMode {
    Loading,
    Live,
    Offline,
}

impl SourceMode {
    fn label(&self) -> &'static str {
        match self {
            SourceMode::Loading => "loading…",
            SourceMode::Live => "live data",
            SourceMode::Offline => "offline data",
        }
    }

    fn style(&self) -> Style {
        match self {
            SourceMode::Loading => theme::text_dim(),
            SourceMode::Live => theme::status_success(),
            SourceMode::Offline => theme::status_warning(),
        }
    }
}

/// Minimum width for the mode column so it doesn't collapse under a long
/// notification.
const MODE_COLUMN_MIN_WIDTH: u16 = 14;

pub fn render_statusbar(
    f: &mut Frame,
    area: Rect,
    current_notification: Option<&Notification>,
    mode: SourceMode,
) {
    let mode_label = format!("{} ", mode.label());
    let mode_width = (mode_label.width() + 1).max(MODE_COLUMN_MIN_WIDTH as usize) as u16;

    let chunks = Layout::horizontal([
        Constraint::Min(0),            // Notification (fills remaining space)
        Constraint::Length(mode_width), // Mode column
    ])
    .split(area);

    let notification_paragraph = if let Some(notification) = current_notification {
        let (icon, color) = match notification.level {
            NotificationLevel::Info => ("\u{2139}", theme::ACCENT_PRIMARY),    // ℹ
            NotificationLevel::Success => ("\u{2713}", theme::ACCENT_SUCCESS), // ✓
            NotificationLevel::Warning => ("\u{26A0}", theme::ACCENT_WARNING), // ⚠
            NotificationLevel::Error => ("\u{2717}", theme::ACCENT_ERROR),     // ✗
        };

        let icon_width = icon.width() + 2;
        let available = (chunks[0].width as usize).saturating_sub(icon_width);
        let message = crate::ui::format::truncate_with_ellipsis(&notification.message, available);

        let spans = vec![
            Span::styled(format!(" {} ", icon), Style::default().fg(color)),
            Span::styled(message, Style::default().fg(color)),
        ];
        Paragraph::new(Line::from(spans)).style(Style::default().bg(theme::BG_STATUSBAR))
    } else {
        Paragraph::new("").style(Style::default().bg(theme::BG_STATUSBAR))
    };
    f.render_widget(notification_paragraph, chunks[0]);

    // Right-align the mode label within its column
    let padding = (chunks[1].width as usize).saturating_sub(mode_label.width());
    let padded = format!("{}{}", " ".repeat(padding), mode_label);
    let mode_paragraph =
        Paragraph::new(padded).style(mode.style().bg(theme::BG_STATUSBAR));
    f.render_widget(mode_paragraph, chunks[1]);
}
