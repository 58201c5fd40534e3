//! Aggregate dashboard metrics over the session's idea store.

use std::collections::BTreeMap;

use crate::constants::HIGH_SCORE_THRESHOLD;
use crate::models::{Category, Idea};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct IdeaStats {
    pub total: usize,
    /// Ideas scoring at or above `HIGH_SCORE_THRESHOLD`.
    pub high_rated: usize,
    pub avg_score: f64,
    pub by_category: BTreeMap<Category, usize>,
}

pub fn compute(ideas: &[Idea]) -> IdeaStats {
    if ideas.is_empty() {
        return IdeaStats::default();
    }

    let mut by_category: BTreeMap<Category, usize> = BTreeMap::new();
    let mut score_sum = 0.0;
    let mut high_rated = 0;

    for idea in ideas {
        *by_category.entry(idea.category).or_insert(0) += 1;
        score_sum += idea.score;
        if idea.score >= HIGH_SCORE_THRESHOLD {
            high_rated += 1;
        }
    }

    IdeaStats {
        total: ideas.len(),
        high_rated,
        avg_score: score_sum / ideas.len() as f64,
        by_category,
    }
}
