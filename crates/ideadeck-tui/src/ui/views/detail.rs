use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::ui::format::{format_relative_time, format_score, meter};
use crate::ui::{theme, App};

const METER_WIDTH: usize = 20;

/// Full record for the opened idea: score, metric bars, regions, status.
pub fn render_detail(f: &mut Frame, app: &App, area: Rect) {
    let Some(idea) = app.detail_idea() else {
        f.render_widget(
            Paragraph::new("  Idea no longer available.").style(theme::text_dim()),
            area,
        );
        return;
    };

    let tier = idea.tier();
    let tier_style = Style::default().fg(theme::tier_color(tier));

    let regions: Vec<&str> = [
        idea.regions.russia.then_some("Russia"),
        idea.regions.armenia.then_some("Armenia"),
        idea.regions.global_market.then_some("Global"),
    ]
    .into_iter()
    .flatten()
    .collect();

    let mut lines: Vec<Line> = vec![
        Line::from(vec![
            Span::raw(format!("  {} ", idea.emoji)),
            Span::styled(idea.title.clone(), theme::text_bold()),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled(format!("  {}/10 ", format_score(idea.score)), tier_style),
            Span::styled(
                format!("· tier {} ({})", tier.grade(), tier.label()),
                tier_style,
            ),
        ]),
        Line::from(Span::styled(
            format!(
                "  {} · {} · {} · {}",
                idea.category.label(),
                regions.join(", "),
                idea.source,
                format_relative_time(idea.created_at)
            ),
            theme::text_muted(),
        )),
        Line::from(""),
    ];

    let metrics = [
        ("Market size ", idea.metrics.market_size),
        ("Competition ", idea.metrics.competition),
        ("Demand      ", idea.metrics.demand),
        ("Monetization", idea.metrics.monetization),
    ];
    for (label, value) in metrics {
        lines.push(Line::from(vec![
            Span::styled(format!("  {label} "), theme::text_muted()),
            Span::styled(
                meter(value, METER_WIDTH),
                Style::default().fg(theme::ACCENT_PRIMARY),
            ),
            Span::styled(format!(" {}/10", format_score(value)), theme::text_primary()),
        ]));
    }

    if let Some(description) = &idea.description {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("  {description}"),
            theme::text_primary(),
        )));
    }

    lines.push(Line::from(""));
    let mut status_spans: Vec<Span> = Vec::new();
    if idea.is_favorite {
        status_spans.push(Span::styled("  ★ favorited", theme::favorite_marker()));
    }
    if idea.is_hidden {
        status_spans.push(Span::styled("  hidden", theme::hidden_marker()));
    }
    if idea.is_trending {
        status_spans.push(Span::styled("  🔥 trending", theme::status_warning()));
    }
    if !status_spans.is_empty() {
        lines.push(Line::from(status_spans));
    }

    f.render_widget(Paragraph::new(lines), area);
}
