//! Bundled idea dataset used when the scoring service is unreachable,
//! times out, or returns nothing. Keeps the dashboard usable offline.

use crate::models::{Category, Idea, IdeaMetrics, Regions};

/// Fixed reference point for the bundled timestamps so ordering is stable
/// across runs. The UI renders these relative to the current clock.
const BASE_TS: u64 = 1_762_000_000;

const HOUR: u64 = 3600;
const DAY: u64 = 24 * HOUR;

struct Seed {
    id: &'static str,
    title: &'static str,
    emoji: &'static str,
    source: &'static str,
    category: Category,
    age: u64,
    score: f64,
    trending: bool,
    russia: bool,
    armenia: bool,
    global_market: bool,
    metrics: [f64; 4],
}

const SEEDS: &[Seed] = &[
    Seed {
        id: "1",
        title: "AI Personal Chef App",
        emoji: "🍽️",
        source: "Reddit r/FoodTech",
        category: Category::Ai,
        age: 2 * HOUR,
        score: 8.4,
        trending: true,
        russia: true,
        armenia: false,
        global_market: true,
        metrics: [8.0, 6.0, 9.0, 8.0],
    },
    Seed {
        id: "2",
        title: "No-Code Automation Platform",
        emoji: "⚡",
        source: "Product Hunt",
        category: Category::Saas,
        age: 5 * HOUR,
        score: 9.1,
        trending: false,
        russia: false,
        armenia: false,
        global_market: true,
        metrics: [9.5, 7.0, 9.5, 8.5],
    },
    Seed {
        id: "3",
        title: "Telemedicine for Pets",
        emoji: "🏥",
        source: "TechCrunch",
        category: Category::Health,
        age: DAY,
        score: 7.8,
        trending: true,
        russia: false,
        armenia: true,
        global_market: true,
        metrics: [7.5, 5.5, 8.5, 8.0],
    },
    Seed {
        id: "4",
        title: "Micro-Loans for Gig Workers",
        emoji: "💳",
        source: "Hacker News",
        category: Category::Fintech,
        age: DAY + 3 * HOUR,
        score: 7.2,
        trending: false,
        russia: true,
        armenia: true,
        global_market: false,
        metrics: [7.0, 6.5, 7.5, 7.0],
    },
    Seed {
        id: "5",
        title: "Dropshipping Margin Optimizer",
        emoji: "🛒",
        source: "IndieHackers",
        category: Category::Ecommerce,
        age: 2 * DAY,
        score: 6.9,
        trending: false,
        russia: false,
        armenia: false,
        global_market: true,
        metrics: [6.5, 5.0, 7.0, 7.5],
    },
    Seed {
        id: "6",
        title: "Language Tutors Marketplace",
        emoji: "🗣️",
        source: "Twitter/X",
        category: Category::Education,
        age: 2 * DAY + 6 * HOUR,
        score: 8.0,
        trending: true,
        russia: true,
        armenia: true,
        global_market: true,
        metrics: [8.0, 7.5, 8.5, 7.0],
    },
    Seed {
        id: "7",
        title: "Interactive Fiction Studio",
        emoji: "🎮",
        source: "Steam trends",
        category: Category::Entertainment,
        age: 3 * DAY,
        score: 6.1,
        trending: false,
        russia: false,
        armenia: false,
        global_market: true,
        metrics: [6.0, 4.5, 6.5, 5.5],
    },
    Seed {
        id: "8",
        title: "Invoice Reconciliation Copilot",
        emoji: "🧾",
        source: "Reddit r/smallbusiness",
        category: Category::Saas,
        age: 4 * DAY,
        score: 8.7,
        trending: true,
        russia: false,
        armenia: false,
        global_market: true,
        metrics: [8.5, 6.0, 9.0, 9.0],
    },
    Seed {
        id: "9",
        title: "Clinic Queue Predictor",
        emoji: "⏱️",
        source: "Local news scan",
        category: Category::Health,
        age: 5 * DAY,
        score: 5.8,
        trending: false,
        russia: true,
        armenia: false,
        global_market: false,
        metrics: [5.5, 6.0, 6.0, 5.0],
    },
];

/// The bundled dataset, curation flags cleared. Non-empty by construction;
/// an empty return here would be a packaging error, not a runtime state.
pub fn fallback_ideas() -> Vec<Idea> {
    SEEDS
        .iter()
        .map(|seed| Idea {
            id: seed.id.to_string(),
            title: seed.title.to_string(),
            description: None,
            emoji: seed.emoji.to_string(),
            source: seed.source.to_string(),
            category: seed.category,
            created_at: BASE_TS - seed.age,
            score: seed.score,
            is_trending: seed.trending,
            regions: Regions {
                russia: seed.russia,
                armenia: seed.armenia,
                global_market: seed.global_market,
            },
            metrics: IdeaMetrics {
                market_size: seed.metrics[0],
                competition: seed.metrics[1],
                demand: seed.metrics[2],
                monetization: seed.metrics[3],
            },
            is_favorite: false,
            is_hidden: false,
        })
        .collect()
}
