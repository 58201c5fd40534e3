use ideadeck_core::store::Tab;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::ui::{theme, App};

/// Renders the tab line: `1 All (12) │ 2 Favorites (3)` plus the active
/// filter/sort summary on the right.
pub fn render_tab_bar(f: &mut Frame, app: &App, area: Rect) {
    let ideas = app
        .store
        .as_ref()
        .map(|s| s.ideas())
        .unwrap_or(&[]);

    let all_count = match app.hidden_policy() {
        ideadeck_core::store::HiddenPolicy::Exclude => {
            ideas.iter().filter(|i| !i.is_hidden).count()
        }
        ideadeck_core::store::HiddenPolicy::Deprioritize => ideas.len(),
    };
    let favorites_count = ideas.iter().filter(|i| i.is_favorite).count();

    let mut spans: Vec<Span> = Vec::new();

    let tabs = [
        (Tab::All, format!("1 All ({})", all_count)),
        (Tab::Favorites, format!("2 Favorites ({})", favorites_count)),
    ];

    for (i, (tab, label)) in tabs.iter().enumerate() {
        let style = if app.params.tab == *tab {
            theme::tab_active()
        } else {
            theme::tab_inactive()
        };
        spans.push(Span::styled(format!(" {} ", label), style));
        if i + 1 < tabs.len() {
            spans.push(Span::styled(" │ ", Style::default().fg(theme::TEXT_MUTED)));
        }
    }

    // Filter/sort summary on the same line, separated from the tabs
    let category = app
        .params
        .category
        .map(|c| c.label())
        .unwrap_or("all categories");
    let region = app.params.region.map(|r| r.label()).unwrap_or("all regions");
    spans.push(Span::styled(
        format!(
            "   c:{}  r:{}  s:{}",
            category,
            region,
            app.params.sort_key.label()
        ),
        theme::text_dim(),
    ));

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
