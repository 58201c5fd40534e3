use tracing::instrument;

use crate::constants::{INITIAL_PAGE_SIZE, PAGE_INCREMENT};
use crate::models::{Category, Idea, Region};

/// Which list the user is looking at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    All,
    Favorites,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Date,
    Score,
}

impl SortKey {
    pub fn label(&self) -> &'static str {
        match self {
            SortKey::Date => "date",
            SortKey::Score => "score",
        }
    }
}

/// How hidden ideas participate in the projection. Full-API mode dims and
/// deprioritizes; fallback mode removes them from both tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HiddenPolicy {
    Exclude,
    Deprioritize,
}

/// Transient view parameters plus the pagination cursor. Not persisted;
/// reset wholesale when the dashboard is remounted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewParams {
    pub tab: Tab,
    pub category: Option<Category>,
    pub region: Option<Region>,
    pub sort_key: SortKey,
    /// Visible-count cursor. Grows by `PAGE_INCREMENT`, never shrinks,
    /// except when a filter/sort/tab value changes.
    pub visible: usize,
}

impl Default for ViewParams {
    fn default() -> Self {
        Self {
            tab: Tab::All,
            category: None,
            region: None,
            sort_key: SortKey::Score,
            visible: INITIAL_PAGE_SIZE,
        }
    }
}

impl ViewParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every filter change restarts pagination; a curation toggle does not
    /// (the list must not jump while the user is mid-scroll).
    fn reset_cursor(&mut self) {
        self.visible = INITIAL_PAGE_SIZE;
    }

    pub fn set_tab(&mut self, tab: Tab) {
        if self.tab != tab {
            self.tab = tab;
            self.reset_cursor();
        }
    }

    pub fn set_category(&mut self, category: Option<Category>) {
        if self.category != category {
            self.category = category;
            self.reset_cursor();
        }
    }

    pub fn set_region(&mut self, region: Option<Region>) {
        if self.region != region {
            self.region = region;
            self.reset_cursor();
        }
    }

    pub fn set_sort_key(&mut self, sort_key: SortKey) {
        if self.sort_key != sort_key {
            self.sort_key = sort_key;
            self.reset_cursor();
        }
    }

    pub fn load_more(&mut self) {
        self.visible += PAGE_INCREMENT;
    }
}

/// Why the visible list is empty - "no favorites yet" renders differently
/// from "nothing matches these filters".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyKind {
    None,
    NoFavorites,
    NoMatches,
}

/// The derived visible subset. Borrows from the store; rebuild on any
/// input change.
pub struct Projection<'a> {
    pub items: Vec<&'a Idea>,
    /// Size of the filtered set before pagination.
    pub total_filtered: usize,
    pub has_more: bool,
    pub empty: EmptyKind,
}

/// Derive the visible, ordered, paginated subset. Pure: identical inputs
/// always produce the identical ordered output.
///
/// Pipeline order is fixed: hidden policy, tab, category, region, stable
/// sort, slice.
#[instrument(skip(ideas), fields(n = ideas.len()))]
pub fn project<'a>(ideas: &'a [Idea], params: &ViewParams, policy: HiddenPolicy) -> Projection<'a> {
    let mut items: Vec<&Idea> = ideas.iter().collect();

    if policy == HiddenPolicy::Exclude {
        items.retain(|i| !i.is_hidden);
    }

    if params.tab == Tab::Favorites {
        items.retain(|i| i.is_favorite);
        if items.is_empty() {
            return Projection {
                items,
                total_filtered: 0,
                has_more: false,
                empty: EmptyKind::NoFavorites,
            };
        }
    }

    if let Some(category) = params.category {
        items.retain(|i| i.category == category);
    }

    if let Some(region) = params.region {
        items.retain(|i| i.regions.includes(region));
    }

    // Stable sorts: equal keys keep insertion order between renders. Under
    // the deprioritize policy hidden ideas sink below every non-hidden one
    // regardless of the sort key.
    items.sort_by(|a, b| {
        let hidden_rank = if policy == HiddenPolicy::Deprioritize {
            a.is_hidden.cmp(&b.is_hidden)
        } else {
            std::cmp::Ordering::Equal
        };
        hidden_rank.then_with(|| match params.sort_key {
            SortKey::Score => b.score.total_cmp(&a.score),
            SortKey::Date => b.created_at.cmp(&a.created_at),
        })
    });

    let total_filtered = items.len();
    let empty = if total_filtered == 0 {
        EmptyKind::NoMatches
    } else {
        EmptyKind::None
    };

    items.truncate(params.visible);

    Projection {
        has_more: params.visible < total_filtered,
        items,
        total_filtered,
        empty,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{IdeaMetrics, Regions};

    fn idea(id: &str, score: f64, created_at: u64) -> Idea {
        Idea {
            id: id.to_string(),
            title: format!("Idea {id}"),
            description: None,
            emoji: "💡".to_string(),
            source: "test".to_string(),
            category: Category::Saas,
            created_at,
            score,
            is_trending: false,
            regions: Regions::default(),
            metrics: IdeaMetrics::default(),
            is_favorite: false,
            is_hidden: false,
        }
    }

    fn ids<'a>(projection: &Projection<'a>) -> Vec<&'a str> {
        projection.items.iter().map(|i| i.id.as_str()).collect()
    }

    #[test]
    fn test_sort_by_score_and_date() {
        // id 1: higher score, newer; id 2: lower score, older
        let ideas = vec![idea("1", 9.0, 2000), idea("2", 5.0, 1000)];
        let mut params = ViewParams::new();

        params.set_sort_key(SortKey::Score);
        assert_eq!(ids(&project(&ideas, &params, HiddenPolicy::Exclude)), ["1", "2"]);

        params.set_sort_key(SortKey::Date);
        assert_eq!(ids(&project(&ideas, &params, HiddenPolicy::Exclude)), ["1", "2"]);
    }

    #[test]
    fn test_projection_is_deterministic() {
        let mut ideas: Vec<Idea> = (0..20)
            .map(|i| idea(&i.to_string(), (i % 4) as f64, 1000 + (i % 3) as u64))
            .collect();
        ideas[3].is_hidden = true;
        ideas[7].is_favorite = true;
        let params = ViewParams {
            visible: 50,
            ..ViewParams::new()
        };

        let first = ids(&project(&ideas, &params, HiddenPolicy::Deprioritize));
        let second = ids(&project(&ideas, &params, HiddenPolicy::Deprioritize));
        assert_eq!(first, second);
    }

    #[test]
    fn test_equal_scores_keep_insertion_order() {
        let ideas = vec![idea("a", 7.0, 10), idea("b", 7.0, 10), idea("c", 7.0, 10)];
        let params = ViewParams::new();
        assert_eq!(
            ids(&project(&ideas, &params, HiddenPolicy::Exclude)),
            ["a", "b", "c"]
        );
    }

    #[test]
    fn test_favorites_tab_filters() {
        let mut ideas = vec![idea("1", 9.0, 1), idea("2", 8.0, 2)];
        ideas[1].is_favorite = true;
        let mut params = ViewParams::new();
        params.set_tab(Tab::Favorites);

        let projection = project(&ideas, &params, HiddenPolicy::Exclude);
        assert_eq!(ids(&projection), ["2"]);
        assert_eq!(projection.empty, EmptyKind::None);
    }

    #[test]
    fn test_no_favorites_state_is_distinct() {
        let ideas = vec![idea("1", 9.0, 1)];
        let mut params = ViewParams::new();
        params.set_tab(Tab::Favorites);
        let projection = project(&ideas, &params, HiddenPolicy::Exclude);
        assert!(projection.items.is_empty());
        assert_eq!(projection.empty, EmptyKind::NoFavorites);

        // Filters that match nothing report NoMatches instead
        params.set_tab(Tab::All);
        params.set_region(Some(Region::Armenia));
        let ideas = vec![idea("1", 9.0, 1)]; // default regions: global only
        let projection = project(&ideas, &params, HiddenPolicy::Exclude);
        assert!(projection.items.is_empty());
        assert_eq!(projection.empty, EmptyKind::NoMatches);
    }

    #[test]
    fn test_category_and_region_filters() {
        let mut a = idea("a", 5.0, 1);
        a.category = Category::Fintech;
        a.regions.armenia = true;
        let b = idea("b", 6.0, 2);

        let mut params = ViewParams::new();
        params.set_category(Some(Category::Fintech));
        let ideas = vec![a, b];
        assert_eq!(ids(&project(&ideas, &params, HiddenPolicy::Exclude)), ["a"]);

        params.set_category(None);
        params.set_region(Some(Region::Armenia));
        assert_eq!(ids(&project(&ideas, &params, HiddenPolicy::Exclude)), ["a"]);
    }

    #[test]
    fn test_hidden_excluded_from_both_tabs() {
        let mut ideas = vec![idea("1", 9.0, 1), idea("2", 8.0, 2)];
        ideas[0].is_hidden = true;
        let params = ViewParams::new();
        assert_eq!(ids(&project(&ideas, &params, HiddenPolicy::Exclude)), ["2"]);
    }

    #[test]
    fn test_hidden_deprioritized_to_tail() {
        // Hidden idea has the top score but sorts after every visible one.
        let mut ideas = vec![idea("1", 9.9, 9), idea("2", 5.0, 1), idea("3", 7.0, 5)];
        ideas[0].is_hidden = true;
        let params = ViewParams::new();
        assert_eq!(
            ids(&project(&ideas, &params, HiddenPolicy::Deprioritize)),
            ["3", "2", "1"]
        );
    }

    #[test]
    fn test_pagination_slice_and_has_more() {
        let ideas: Vec<Idea> = (0..10).map(|i| idea(&i.to_string(), 5.0, i)).collect();
        let params = ViewParams::new(); // visible = 6
        let projection = project(&ideas, &params, HiddenPolicy::Exclude);
        assert_eq!(projection.items.len(), 6);
        assert_eq!(projection.total_filtered, 10);
        assert!(projection.has_more);
    }

    #[test]
    fn test_load_more_grows_and_saturates() {
        let ideas: Vec<Idea> = (0..8).map(|i| idea(&i.to_string(), 5.0, i)).collect();
        let mut params = ViewParams::new();
        params.load_more();
        assert_eq!(params.visible, INITIAL_PAGE_SIZE + PAGE_INCREMENT);

        let projection = project(&ideas, &params, HiddenPolicy::Exclude);
        // Visible count never exceeds the filtered set
        assert_eq!(projection.items.len(), 8);
        assert!(!projection.has_more);
    }

    #[test]
    fn test_cursor_resets_on_filter_change_only() {
        let mut params = ViewParams::new();
        params.load_more();
        params.load_more();
        let grown = params.visible;
        assert!(grown > INITIAL_PAGE_SIZE);

        // Re-setting the same value does not reset
        params.set_sort_key(SortKey::Score);
        assert_eq!(params.visible, grown);

        params.set_sort_key(SortKey::Date);
        assert_eq!(params.visible, INITIAL_PAGE_SIZE);

        params.load_more();
        params.set_tab(Tab::Favorites);
        assert_eq!(params.visible, INITIAL_PAGE_SIZE);

        params.load_more();
        params.set_category(Some(Category::Ai));
        assert_eq!(params.visible, INITIAL_PAGE_SIZE);

        params.load_more();
        params.set_region(Some(Region::Global));
        assert_eq!(params.visible, INITIAL_PAGE_SIZE);
    }

    #[test]
    fn test_hiding_a_favorite_moves_tabs() {
        let mut ideas = vec![idea("1", 9.0, 2), idea("2", 8.0, 1)];
        ideas[1].is_favorite = true;

        let mut params = ViewParams::new();
        params.set_tab(Tab::Favorites);
        assert_eq!(
            ids(&project(&ideas, &params, HiddenPolicy::Deprioritize)),
            ["2"]
        );

        // Hide it: favorite clears in the same update
        let flags = ideas[1].flags().toggled_hidden();
        ideas[1].set_flags(flags);

        let projection = project(&ideas, &params, HiddenPolicy::Deprioritize);
        assert!(projection.items.is_empty());
        assert_eq!(projection.empty, EmptyKind::NoFavorites);

        // ...and it lands at the deprioritized tail of the All tab
        params.set_tab(Tab::All);
        assert_eq!(
            ids(&project(&ideas, &params, HiddenPolicy::Deprioritize)),
            ["1", "2"]
        );
    }
}
