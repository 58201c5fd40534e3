use chrono::DateTime;
use serde::{Deserialize, Serialize};

use crate::api::IdeaRecord;
use crate::constants::tiers;
use crate::models::Category;

/// A scored business-idea candidate. One record per idea per session; the
/// curation flags on it are the session's current view of that idea.
#[derive(Debug, Clone)]
pub struct Idea {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub emoji: String,
    pub source: String,
    pub category: Category,
    /// Unix timestamp (seconds) the idea was analyzed.
    pub created_at: u64,
    /// Composite score on the 0-10 scale.
    pub score: f64,
    pub is_trending: bool,
    pub regions: Regions,
    pub metrics: IdeaMetrics,
    pub is_favorite: bool,
    pub is_hidden: bool,
}

impl Idea {
    /// Build an idea from a wire record. Returns None for records that fail
    /// validation (unknown category) - bad records are dropped, not fatal.
    pub fn from_record(record: &IdeaRecord) -> Option<Self> {
        let category = match record.category.parse::<Category>() {
            Ok(c) => c,
            Err(e) => {
                tracing::warn!("dropping idea {}: {}", record.id, e);
                return None;
            }
        };

        let created_at = record
            .created_at
            .as_deref()
            .and_then(parse_timestamp)
            .unwrap_or(0);

        Some(Idea {
            id: record.id.clone(),
            title: record.title.clone(),
            description: record.description.clone(),
            emoji: record.emoji.clone().unwrap_or_else(|| "💡".to_string()),
            source: record.source.clone().unwrap_or_else(|| "AI Analysis".to_string()),
            category,
            created_at,
            score: normalize_score(record.score),
            is_trending: record.is_trending,
            regions: record.regions.clone(),
            metrics: record.metrics.clone().unwrap_or_default(),
            is_favorite: record.is_favorite,
            is_hidden: record.is_disliked,
        })
    }

    pub fn flags(&self) -> CurationFlags {
        CurationFlags {
            is_favorite: self.is_favorite,
            is_hidden: self.is_hidden,
        }
    }

    pub fn set_flags(&mut self, flags: CurationFlags) {
        let flags = flags.normalized();
        self.is_favorite = flags.is_favorite;
        self.is_hidden = flags.is_hidden;
    }

    pub fn tier(&self) -> Tier {
        Tier::for_score(self.score)
    }
}

/// The scoring service reports composite scores on a 0-100 total scale on
/// some paths and 0-10 on others; everything in-memory is 0-10.
pub fn normalize_score(raw: f64) -> f64 {
    if raw > 10.0 {
        raw / 10.0
    } else {
        raw
    }
}

fn parse_timestamp(s: &str) -> Option<u64> {
    DateTime::parse_from_rfc3339(s)
        .ok()
        .map(|dt| dt.timestamp().max(0) as u64)
}

/// Per-axis sub-scores, 0-10 scale.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IdeaMetrics {
    #[serde(rename = "marketSize", default)]
    pub market_size: f64,
    #[serde(default)]
    pub competition: f64,
    #[serde(default)]
    pub demand: f64,
    #[serde(default)]
    pub monetization: f64,
}

/// Region-relevance flags attached to each idea.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Regions {
    #[serde(default)]
    pub russia: bool,
    #[serde(default)]
    pub armenia: bool,
    #[serde(rename = "global", default = "default_true")]
    pub global_market: bool,
}

fn default_true() -> bool {
    true
}

impl Default for Regions {
    fn default() -> Self {
        Self {
            russia: false,
            armenia: false,
            global_market: true,
        }
    }
}

impl Regions {
    pub fn includes(&self, region: Region) -> bool {
        match region {
            Region::Russia => self.russia,
            Region::Armenia => self.armenia,
            Region::Global => self.global_market,
        }
    }
}

/// A single selectable region filter value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    Russia,
    Armenia,
    Global,
}

impl Region {
    pub const ALL: [Region; 3] = [Region::Russia, Region::Armenia, Region::Global];

    pub fn label(&self) -> &'static str {
        match self {
            Region::Russia => "Russia",
            Region::Armenia => "Armenia",
            Region::Global => "Global",
        }
    }
}

/// Favorite/hidden status for one idea, as a unit so the hide-clears-favorite
/// rule can be enforced in one place instead of at every call site.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CurationFlags {
    pub is_favorite: bool,
    pub is_hidden: bool,
}

impl CurationFlags {
    /// Enforce the invariant: a hidden idea is never also a favorite.
    pub fn normalized(self) -> Self {
        if self.is_hidden {
            Self {
                is_favorite: false,
                is_hidden: true,
            }
        } else {
            self
        }
    }

    pub fn toggled_favorite(self) -> Self {
        Self {
            is_favorite: !self.is_favorite,
            ..self
        }
        .normalized()
    }

    /// Hide/unhide transition. Hiding clears the favorite flag in the same
    /// update; unhiding does not restore it.
    pub fn toggled_hidden(self) -> Self {
        let hidden = !self.is_hidden;
        Self {
            is_hidden: hidden,
            is_favorite: if hidden { false } else { self.is_favorite },
        }
    }
}

/// Display grade derived from the composite score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    S,
    A,
    B,
    C,
}

impl Tier {
    pub fn for_score(score: f64) -> Tier {
        if score >= tiers::S_MIN {
            Tier::S
        } else if score >= tiers::A_MIN {
            Tier::A
        } else if score >= tiers::B_MIN {
            Tier::B
        } else {
            Tier::C
        }
    }

    pub fn grade(&self) -> &'static str {
        match self {
            Tier::S => "S",
            Tier::A => "A",
            Tier::B => "B",
            Tier::C => "C",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Tier::S => "Outstanding",
            Tier::A => "Excellent",
            Tier::B => "Good",
            Tier::C => "Average",
        }
    }
}
