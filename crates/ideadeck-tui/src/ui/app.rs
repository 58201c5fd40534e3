use ideadeck_core::events::ApiEvent;
use ideadeck_core::models::{Category, Idea, Region};
use ideadeck_core::runtime::CoreHandle;
use ideadeck_core::stats::{self, IdeaStats};
use ideadeck_core::store::{
    project, store_from_listing, CurationLedger, CurationOverlay, EmptyKind, HiddenPolicy,
    IdeaStore, Projection, SortKey, Tab, ViewParams,
};

use crate::ui::notifications::{Notification, NotificationQueue};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Dashboard,
    Detail,
}

/// Top-level application state. All mutation happens here, on the UI
/// thread, in response to key events and `ApiEvent` completions.
pub struct App {
    pub running: bool,
    pub pending_quit: bool,
    pub view: View,
    /// True until the one-shot listing resolves.
    pub loading: bool,
    pub store: Option<IdeaStore>,
    pub overlay: CurationOverlay,
    pub ledger: CurationLedger,
    pub params: ViewParams,
    /// Index into the current projection's visible items.
    pub selected: usize,
    pub detail_id: Option<String>,
    core: CoreHandle,
    notifications: NotificationQueue,
}

impl App {
    pub fn new(core: CoreHandle, overlay: CurationOverlay) -> Self {
        Self {
            running: true,
            pending_quit: false,
            view: View::Dashboard,
            loading: true,
            store: None,
            overlay,
            ledger: CurationLedger::new(),
            params: ViewParams::new(),
            selected: 0,
            detail_id: None,
            core,
            notifications: NotificationQueue::new(),
        }
    }

    pub fn quit(&mut self) {
        self.running = false;
    }

    /// Frame tick - advances notification expiry.
    pub fn tick(&mut self) {
        self.notifications.tick();
    }

    pub fn notify(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }

    pub fn current_notification(&self) -> Option<&Notification> {
        self.notifications.current()
    }

    pub fn is_fallback(&self) -> bool {
        self.store.as_ref().map(|s| s.is_fallback()).unwrap_or(false)
    }

    /// Hidden ideas are removed entirely in fallback mode; the service mode
    /// dims and deprioritizes them instead.
    pub fn hidden_policy(&self) -> HiddenPolicy {
        if self.is_fallback() {
            HiddenPolicy::Exclude
        } else {
            HiddenPolicy::Deprioritize
        }
    }

    /// The visible, ordered, paginated subset for the current parameters.
    pub fn projection(&self) -> Projection<'_> {
        match self.store.as_ref() {
            Some(store) => project(store.ideas(), &self.params, self.hidden_policy()),
            None => Projection {
                items: Vec::new(),
                total_filtered: 0,
                has_more: false,
                empty: EmptyKind::None,
            },
        }
    }

    pub fn stats(&self) -> IdeaStats {
        stats::compute(self.store.as_ref().map(|s| s.ideas()).unwrap_or(&[]))
    }

    // -------------------------------------------------------------------------
    // Selection and navigation
    // -------------------------------------------------------------------------

    pub fn selected_id(&self) -> Option<String> {
        self.projection()
            .items
            .get(self.selected)
            .map(|i| i.id.clone())
    }

    pub fn select_next(&mut self) {
        let (shown, has_more) = {
            let p = self.projection();
            (p.items.len(), p.has_more)
        };
        if shown == 0 {
            return;
        }
        if self.selected + 1 < shown {
            self.selected += 1;
        } else if has_more {
            // Walking off the end of the page reveals the next one
            self.params.load_more();
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    fn clamp_selection(&mut self) {
        let shown = self.projection().items.len();
        if shown == 0 {
            self.selected = 0;
        } else if self.selected >= shown {
            self.selected = shown - 1;
        }
    }

    pub fn load_more(&mut self) {
        if self.projection().has_more {
            self.params.load_more();
        }
    }

    // -------------------------------------------------------------------------
    // Filters, sort, tabs - every change restarts selection and pagination
    // -------------------------------------------------------------------------

    pub fn switch_tab(&mut self, tab: Tab) {
        self.params.set_tab(tab);
        self.selected = 0;
    }

    pub fn cycle_category(&mut self) {
        let next = match self.params.category {
            None => Some(Category::ALL[0]),
            Some(current) => Category::ALL
                .iter()
                .position(|&c| c == current)
                .and_then(|i| Category::ALL.get(i + 1))
                .copied(),
        };
        self.params.set_category(next);
        self.selected = 0;
    }

    pub fn cycle_region(&mut self) {
        let next = match self.params.region {
            None => Some(Region::ALL[0]),
            Some(current) => Region::ALL
                .iter()
                .position(|&r| r == current)
                .and_then(|i| Region::ALL.get(i + 1))
                .copied(),
        };
        self.params.set_region(next);
        self.selected = 0;
    }

    pub fn toggle_sort(&mut self) {
        let next = match self.params.sort_key {
            SortKey::Score => SortKey::Date,
            SortKey::Date => SortKey::Score,
        };
        self.params.set_sort_key(next);
        self.selected = 0;
    }

    // -------------------------------------------------------------------------
    // Detail view
    // -------------------------------------------------------------------------

    pub fn open_detail(&mut self) {
        if let Some(id) = self.selected_id() {
            self.detail_id = Some(id);
            self.view = View::Detail;
        }
    }

    pub fn close_detail(&mut self) {
        self.detail_id = None;
        self.view = View::Dashboard;
    }

    pub fn detail_idea(&self) -> Option<&Idea> {
        let id = self.detail_id.as_deref()?;
        self.store.as_ref()?.get(id)
    }

    // -------------------------------------------------------------------------
    // Curation
    // -------------------------------------------------------------------------

    /// The idea a toggle applies to: the opened detail record, or the
    /// dashboard selection. Only ids from the live projection can be reached.
    fn curation_target(&self) -> Option<String> {
        match self.view {
            View::Detail => self.detail_id.clone(),
            View::Dashboard => self.selected_id(),
        }
    }

    pub fn toggle_favorite(&mut self) {
        let Some(id) = self.curation_target() else {
            return;
        };
        if self.is_fallback() {
            self.local_toggle(&id, |idea| idea.flags().toggled_favorite());
        } else {
            let seq = self.ledger.issue(&id);
            self.core.request_favorite_toggle(id, seq);
        }
    }

    pub fn toggle_hidden(&mut self) {
        let Some(id) = self.curation_target() else {
            return;
        };
        if self.is_fallback() {
            self.local_toggle(&id, |idea| idea.flags().toggled_hidden());
        } else {
            let seq = self.ledger.issue(&id);
            self.core.request_hidden_toggle(id, seq);
        }
    }

    /// Fallback-mode toggle: flip in memory and write the overlay through
    /// in the same update.
    fn local_toggle(
        &mut self,
        id: &str,
        transition: impl Fn(&Idea) -> ideadeck_core::models::CurationFlags,
    ) {
        let Some(store) = self.store.as_mut() else {
            return;
        };
        let Some(idea) = store.get(id) else {
            return;
        };
        let flags = transition(idea);
        store.apply_flags(id, flags);
        self.overlay.set(id, flags);
        self.clamp_selection();
    }

    // -------------------------------------------------------------------------
    // Remote completions
    // -------------------------------------------------------------------------

    pub fn handle_api_event(&mut self, event: ApiEvent) {
        match event {
            ApiEvent::Listing(result) => {
                let store = store_from_listing(result, &self.overlay);
                let fallback = store.is_fallback();
                self.store = Some(store);
                self.loading = false;
                self.selected = 0;
                if fallback {
                    self.notify(Notification::info(
                        "Scoring service unavailable - showing bundled ideas",
                    ));
                }
            }
            ApiEvent::ToggleResolved { id, seq, result } => {
                // A response for anything but the latest request on this id
                // is superseded; dropping it keeps rapid double-toggles from
                // settling on a stale server answer.
                if !self.ledger.is_current(&id, seq) {
                    tracing::debug!("discarding superseded toggle response for {}", id);
                    return;
                }
                match result {
                    Ok(flags) => {
                        if let Some(store) = self.store.as_mut() {
                            store.apply_flags(&id, flags);
                        }
                        self.clamp_selection();
                    }
                    Err(e) => {
                        tracing::warn!("toggle failed for {}: {}", id, e);
                        self.notify(Notification::warning(format!("Couldn't update idea: {e}")));
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;
    use ideadeck_core::config::CoreConfig;
    use ideadeck_core::fallback::fallback_ideas;
    use ideadeck_core::models::CurationFlags;
    use ideadeck_core::runtime::CoreRuntime;
    use tempfile::TempDir;

    fn test_app() -> (App, TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let config = CoreConfig::new(dir.path(), "http://localhost:9");
        let runtime = CoreRuntime::new(&config).unwrap();
        let overlay = CurationOverlay::load(dir.path());
        (App::new(runtime.handle(), overlay), dir)
    }

    fn fallback_app() -> (App, TempDir) {
        let (mut app, dir) = test_app();
        app.handle_api_event(ApiEvent::Listing(Err(anyhow!("connection refused"))));
        (app, dir)
    }

    fn remote_app() -> (App, TempDir) {
        let (mut app, dir) = test_app();
        app.handle_api_event(ApiEvent::Listing(Ok(fallback_ideas())));
        (app, dir)
    }

    #[test]
    fn test_failed_listing_enters_fallback_with_banner() {
        let (app, _dir) = fallback_app();
        assert!(app.is_fallback());
        assert!(!app.loading);
        assert!(!app.projection().items.is_empty());
        assert!(app.current_notification().is_some());
    }

    #[test]
    fn test_successful_listing_is_remote_and_silent() {
        let (app, _dir) = remote_app();
        assert!(!app.is_fallback());
        assert!(app.current_notification().is_none());
        assert_eq!(app.hidden_policy(), HiddenPolicy::Deprioritize);
    }

    #[test]
    fn test_fallback_toggle_is_idempotent_and_persisted() {
        let (mut app, dir) = fallback_app();
        let id = app.selected_id().unwrap();

        app.toggle_favorite();
        assert!(app.store.as_ref().unwrap().get(&id).unwrap().is_favorite);
        // Write-through: a fresh overlay sees the flag immediately
        let reloaded = CurationOverlay::load(dir.path());
        assert!(reloaded.flags_for(&id).is_favorite);

        app.toggle_favorite();
        assert!(!app.store.as_ref().unwrap().get(&id).unwrap().is_favorite);
        let reloaded = CurationOverlay::load(dir.path());
        assert!(!reloaded.flags_for(&id).is_favorite);
    }

    #[test]
    fn test_fallback_hide_clears_favorite_and_disappears() {
        let (mut app, dir) = fallback_app();
        let id = app.selected_id().unwrap();

        app.toggle_favorite();
        app.toggle_hidden();

        // Hidden ideas are excluded from fallback-mode projections entirely
        assert!(!app.projection().items.iter().any(|i| i.id == id));
        let flags = CurationOverlay::load(dir.path()).flags_for(&id);
        assert!(flags.is_hidden);
        assert!(!flags.is_favorite);
    }

    #[test]
    fn test_stale_toggle_response_discarded() {
        let (mut app, _dir) = remote_app();
        let id = app.selected_id().unwrap();

        // Two requests in flight; the later one resolves first and wins.
        let seq_a = app.ledger.issue(&id);
        let seq_b = app.ledger.issue(&id);

        app.handle_api_event(ApiEvent::ToggleResolved {
            id: id.clone(),
            seq: seq_b,
            result: Ok(CurationFlags {
                is_favorite: true,
                is_hidden: false,
            }),
        });
        assert!(app.store.as_ref().unwrap().get(&id).unwrap().is_favorite);

        app.handle_api_event(ApiEvent::ToggleResolved {
            id: id.clone(),
            seq: seq_a,
            result: Ok(CurationFlags::default()),
        });
        assert!(
            app.store.as_ref().unwrap().get(&id).unwrap().is_favorite,
            "stale response must not overwrite the newer result"
        );
    }

    #[test]
    fn test_toggle_error_leaves_flags_and_notifies() {
        let (mut app, _dir) = remote_app();
        let id = app.selected_id().unwrap();
        let seq = app.ledger.issue(&id);

        app.handle_api_event(ApiEvent::ToggleResolved {
            id: id.clone(),
            seq,
            result: Err(anyhow!("500 Internal Server Error")),
        });

        assert!(!app.store.as_ref().unwrap().get(&id).unwrap().is_favorite);
        assert!(app.current_notification().is_some());
    }

    #[test]
    fn test_select_next_loads_more_at_page_end() {
        let (mut app, _dir) = remote_app();
        let initial_visible = app.params.visible;
        let total = app.projection().total_filtered;
        assert!(total > initial_visible, "seed set must span two pages");

        for _ in 0..initial_visible {
            app.select_next();
        }
        assert!(app.params.visible > initial_visible);
        assert_eq!(app.selected, initial_visible);
    }

    #[test]
    fn test_filter_change_resets_selection_and_cursor() {
        let (mut app, _dir) = remote_app();
        app.load_more();
        for _ in 0..3 {
            app.select_next();
        }
        app.cycle_category();
        assert_eq!(app.selected, 0);
        assert_eq!(app.params.visible, ideadeck_core::constants::INITIAL_PAGE_SIZE);
    }

    #[test]
    fn test_toggle_does_not_reset_cursor() {
        let (mut app, _dir) = fallback_app();
        app.load_more();
        let grown = app.params.visible;
        app.toggle_favorite();
        assert_eq!(app.params.visible, grown);
    }

    #[test]
    fn test_detail_round_trip() {
        let (mut app, _dir) = remote_app();
        let id = app.selected_id().unwrap();

        app.open_detail();
        assert_eq!(app.view, View::Detail);
        assert_eq!(app.detail_idea().unwrap().id, id);

        app.close_detail();
        assert_eq!(app.view, View::Dashboard);
        assert!(app.detail_id.is_none());
    }
}
