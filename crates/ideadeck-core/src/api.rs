use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::constants::{paths, LIST_TIMEOUT_SECS, TOGGLE_TIMEOUT_SECS};
use crate::models::{CurationFlags, Idea, IdeaMetrics, Regions};

/// One idea as the scoring service serializes it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdeaRecord {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub emoji: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
    pub category: String,
    #[serde(rename = "isTrending", default)]
    pub is_trending: bool,
    #[serde(default)]
    pub regions: Regions,
    pub score: f64,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub metrics: Option<IdeaMetrics>,
    #[serde(rename = "isFavorite", default)]
    pub is_favorite: bool,
    #[serde(rename = "isDisliked", default)]
    pub is_disliked: bool,
}

/// Response from the idea listing endpoint.
#[derive(Debug, Deserialize)]
struct ListResponse {
    items: Vec<IdeaRecord>,
}

/// Envelope the toggle endpoints wrap their payload in.
#[derive(Debug, Deserialize)]
struct ToggleResponse {
    success: bool,
    data: ToggleFlags,
}

#[derive(Debug, Deserialize)]
struct ToggleFlags {
    #[serde(rename = "isFavorite", default)]
    is_favorite: bool,
    #[serde(rename = "isDisliked", default)]
    is_disliked: bool,
}

/// HTTP client for the idea scoring service.
pub struct IdeasClient {
    base_url: String,
    client: reqwest::Client,
}

impl IdeasClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(TOGGLE_TIMEOUT_SECS))
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client,
        })
    }

    /// Fetch the idea listing. Bounded by a hard timeout; the caller decides
    /// what an error or an empty list means (fallback, per the loader).
    pub async fn list_ideas(&self) -> Result<Vec<Idea>> {
        let url = format!("{}{}", self.base_url, paths::IDEAS_LIST);

        let response = self
            .client
            .get(&url)
            .timeout(Duration::from_secs(LIST_TIMEOUT_SECS))
            .send()
            .await
            .context("Failed to reach idea listing endpoint")?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            anyhow::bail!("Idea listing error ({}): {}", status, error_text);
        }

        let listing: ListResponse = response
            .json()
            .await
            .context("Failed to parse idea listing response")?;

        let ideas: Vec<Idea> = listing
            .items
            .iter()
            .filter_map(Idea::from_record)
            .collect();

        tracing::info!("listing returned {} usable ideas", ideas.len());
        Ok(ideas)
    }

    /// Flip the favorite flag server-side. The returned flags are
    /// authoritative - the server, not the caller, decides the result.
    pub async fn toggle_favorite(&self, id: &str) -> Result<CurationFlags> {
        self.toggle(id, "favorite").await
    }

    /// Flip the hidden (dislike) flag server-side. Same contract as
    /// `toggle_favorite`, hide semantics.
    pub async fn toggle_hidden(&self, id: &str) -> Result<CurationFlags> {
        self.toggle(id, "dislike").await
    }

    async fn toggle(&self, id: &str, action: &str) -> Result<CurationFlags> {
        let url = format!("{}{}/{}/{}", self.base_url, paths::IDEAS_BASE, id, action);

        let response = self
            .client
            .post(&url)
            .send()
            .await
            .with_context(|| format!("Failed to send {} toggle", action))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            anyhow::bail!("Toggle error ({}): {}", status, error_text);
        }

        let envelope: ToggleResponse = response
            .json()
            .await
            .with_context(|| format!("Failed to parse {} toggle response", action))?;

        if !envelope.success {
            anyhow::bail!("Service rejected {} toggle for idea {}", action, id);
        }

        Ok(CurationFlags {
            is_favorite: envelope.data.is_favorite,
            is_hidden: envelope.data.is_disliked,
        }
        .normalized())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_listing_payload() {
        let json = r#"{
            "items": [
                {
                    "id": "1",
                    "title": "AI Personal Chef App",
                    "emoji": "🍽️",
                    "source": "Reddit r/FoodTech",
                    "category": "ai",
                    "isTrending": true,
                    "regions": { "russia": false, "armenia": false, "global": true },
                    "score": 8.4,
                    "isFavorite": false,
                    "isDisliked": false
                },
                {
                    "id": "2",
                    "title": "Mystery Widget",
                    "category": "not-a-category",
                    "score": 5.0
                }
            ],
            "total": 2,
            "skip": 0,
            "limit": 20,
            "has_more": false
        }"#;

        let listing: ListResponse = serde_json::from_str(json).unwrap();
        assert_eq!(listing.items.len(), 2);

        // Unknown category is dropped at conversion, not a parse failure
        let ideas: Vec<Idea> = listing.items.iter().filter_map(Idea::from_record).collect();
        assert_eq!(ideas.len(), 1);
        assert_eq!(ideas[0].id, "1");
    }

    #[test]
    fn test_parse_toggle_envelope() {
        let json = r#"{ "success": true, "data": { "isFavorite": true, "isDisliked": false, "title": "x" } }"#;
        let envelope: ToggleResponse = serde_json::from_str(json).unwrap();
        assert!(envelope.success);
        assert!(envelope.data.is_favorite);
        assert!(!envelope.data.is_disliked);
    }

    #[test]
    fn test_toggle_flags_normalized() {
        // A service bug returning both flags set must not surface as
        // favorite-and-hidden; normalization keeps hidden and drops favorite.
        let flags = CurationFlags {
            is_favorite: true,
            is_hidden: true,
        }
        .normalized();
        assert!(flags.is_hidden && !flags.is_favorite);
    }

    #[tokio::test]
    #[ignore] // Requires a running scoring service
    async fn test_list_ideas_live() {
        let client = IdeasClient::new(crate::constants::DEFAULT_API_URL).unwrap();
        let ideas = client.list_ideas().await.unwrap();
        assert!(!ideas.is_empty());
    }
}
