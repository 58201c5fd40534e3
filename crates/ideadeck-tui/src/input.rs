//! Keyboard routing for the two views. All handlers run on the UI thread;
//! remote work they trigger comes back through the ApiEvent channel.

use crossterm::event::{KeyCode, KeyEvent};
use ideadeck_core::store::Tab;

use crate::ui::{App, View};

pub(crate) fn handle_key(app: &mut App, key: KeyEvent) {
    match app.view {
        View::Dashboard => handle_dashboard_key(app, key),
        View::Detail => handle_detail_key(app, key),
    }
}

fn handle_dashboard_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => app.quit(),
        KeyCode::Char('j') | KeyCode::Down => app.select_next(),
        KeyCode::Char('k') | KeyCode::Up => app.select_prev(),
        KeyCode::Enter => app.open_detail(),
        KeyCode::Char('f') => app.toggle_favorite(),
        KeyCode::Char('x') => app.toggle_hidden(),
        KeyCode::Char('m') => app.load_more(),
        KeyCode::Char('1') => app.switch_tab(Tab::All),
        KeyCode::Char('2') => app.switch_tab(Tab::Favorites),
        KeyCode::Tab => {
            let next = match app.params.tab {
                Tab::All => Tab::Favorites,
                Tab::Favorites => Tab::All,
            };
            app.switch_tab(next);
        }
        KeyCode::Char('c') => app.cycle_category(),
        KeyCode::Char('r') => app.cycle_region(),
        KeyCode::Char('s') => app.toggle_sort(),
        _ => {}
    }
}

fn handle_detail_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => app.quit(),
        KeyCode::Esc | KeyCode::Backspace => app.close_detail(),
        KeyCode::Char('f') => app.toggle_favorite(),
        KeyCode::Char('x') => app.toggle_hidden(),
        _ => {}
    }
}
