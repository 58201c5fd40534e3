use ideadeck_core::models::Idea;
use ideadeck_core::store::EmptyKind;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::ui::components::render_tab_bar;
use crate::ui::format::{format_relative_time, format_score, truncate_with_ellipsis};
use crate::ui::{theme, App};

const CARD_HEIGHT: u16 = 3;

pub fn render_dashboard(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::vertical([
        Constraint::Length(3), // metric tiles
        Constraint::Length(1), // tab bar
        Constraint::Length(1), // spacer
        Constraint::Min(0),    // idea list
    ])
    .split(area);

    render_metric_tiles(f, app, chunks[0]);
    render_tab_bar(f, app, chunks[1]);
    render_list(f, app, chunks[3]);
}

/// Four summary tiles mirroring the dashboard header: totals, high-rated,
/// mean score, and the current page position.
fn render_metric_tiles(f: &mut Frame, app: &App, area: Rect) {
    let stats = app.stats();
    let projection = app.projection();
    let columns = Layout::horizontal([
        Constraint::Ratio(1, 4),
        Constraint::Ratio(1, 4),
        Constraint::Ratio(1, 4),
        Constraint::Ratio(1, 4),
    ])
    .split(area);

    let tiles = [
        ("Ideas", stats.total.to_string()),
        ("High-rated", stats.high_rated.to_string()),
        (
            "Avg score",
            if stats.total > 0 {
                format!("{}/10", format_score(stats.avg_score))
            } else {
                "—".to_string()
            },
        ),
        (
            "Showing",
            format!("{}/{}", projection.items.len(), projection.total_filtered),
        ),
    ];

    for (column, (label, value)) in columns.iter().zip(tiles) {
        let lines = vec![
            Line::from(Span::styled(format!(" {label}"), theme::text_muted())),
            Line::from(Span::styled(format!(" {value}"), theme::text_bold())),
        ];
        f.render_widget(Paragraph::new(lines).style(theme::card_bg()), *column);
    }
}

fn render_list(f: &mut Frame, app: &App, area: Rect) {
    if app.loading {
        let msg = Paragraph::new("  Loading ideas…").style(theme::text_dim());
        f.render_widget(msg, area);
        return;
    }

    let projection = app.projection();

    if projection.items.is_empty() {
        let text = match projection.empty {
            EmptyKind::NoFavorites => {
                "  No favorites yet — press f on an idea to keep it here."
            }
            EmptyKind::NoMatches => "  No ideas match these filters.",
            EmptyKind::None => "  Nothing to show.",
        };
        f.render_widget(Paragraph::new(text).style(theme::text_dim()), area);
        return;
    }

    let mut y = area.y;
    for (i, idea) in projection.items.iter().enumerate() {
        if y + CARD_HEIGHT > area.y + area.height {
            break;
        }
        let card_area = Rect::new(area.x, y, area.width, CARD_HEIGHT);
        render_card(f, idea, i == app.selected, card_area);
        y += CARD_HEIGHT;
    }

    // Page footer inside the remaining space, when there is any
    if projection.has_more && y < area.y + area.height {
        let footer_area = Rect::new(area.x, y, area.width, 1);
        let footer = format!(
            "  {} of {} · m shows more",
            projection.items.len(),
            projection.total_filtered
        );
        f.render_widget(Paragraph::new(footer).style(theme::text_dim()), footer_area);
    }
}

fn render_card(f: &mut Frame, idea: &Idea, selected: bool, area: Rect) {
    let bg = if selected {
        theme::card_bg_selected()
    } else {
        theme::card_bg()
    };

    let tier = idea.tier();
    let tier_style = Style::default().fg(theme::tier_color(tier));

    let title_style = if idea.is_hidden {
        theme::hidden_marker()
    } else if selected {
        theme::text_bold()
    } else {
        theme::text_primary()
    };

    let max_title = (area.width as usize).saturating_sub(24);
    let mut title_spans = vec![
        Span::styled(format!(" {} ", format_score(idea.score)), tier_style),
        Span::styled(tier.grade(), tier_style),
        Span::raw(format!("  {} ", idea.emoji)),
        Span::styled(truncate_with_ellipsis(&idea.title, max_title), title_style),
    ];
    if idea.is_favorite {
        title_spans.push(Span::styled(" ★", theme::favorite_marker()));
    }
    if idea.is_hidden {
        title_spans.push(Span::styled(" (hidden)", theme::hidden_marker()));
    }
    if idea.is_trending {
        title_spans.push(Span::styled(" 🔥", theme::status_warning()));
    }

    let regions: Vec<&str> = [
        idea.regions.russia.then_some("RU"),
        idea.regions.armenia.then_some("AM"),
        idea.regions.global_market.then_some("Global"),
    ]
    .into_iter()
    .flatten()
    .collect();

    let meta = format!(
        "        {} · {} · {} · {}",
        idea.category.label(),
        regions.join(","),
        idea.source,
        format_relative_time(idea.created_at)
    );
    let meta_style = if idea.is_hidden {
        theme::hidden_marker()
    } else {
        theme::text_muted()
    };

    let lines = vec![
        Line::from(title_spans),
        Line::from(Span::styled(meta, meta_style)),
        Line::from(""),
    ];
    f.render_widget(Paragraph::new(lines).style(bg), area);
}
