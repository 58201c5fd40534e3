use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Business category an idea belongs to. The scoring service validates
/// against this fixed set, so anything else on the wire is a bad record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Ai,
    Saas,
    Ecommerce,
    Fintech,
    Health,
    Education,
    Entertainment,
}

impl Category {
    /// All categories, in the order they cycle through in the filter UI.
    pub const ALL: [Category; 7] = [
        Category::Ai,
        Category::Saas,
        Category::Ecommerce,
        Category::Fintech,
        Category::Health,
        Category::Education,
        Category::Entertainment,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::Ai => "AI",
            Category::Saas => "SaaS",
            Category::Ecommerce => "E-commerce",
            Category::Fintech => "Fintech",
            Category::Health => "Health",
            Category::Education => "Education",
            Category::Entertainment => "Entertainment",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Ai => "ai",
            Category::Saas => "saas",
            Category::Ecommerce => "ecommerce",
            Category::Fintech => "fintech",
            Category::Health => "health",
            Category::Education => "education",
            Category::Entertainment => "entertainment",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown idea category: {0}")]
pub struct ParseCategoryError(pub String);

impl FromStr for Category {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ai" => Ok(Category::Ai),
            "saas" => Ok(Category::Saas),
            "ecommerce" => Ok(Category::Ecommerce),
            "fintech" => Ok(Category::Fintech),
            "health" => Ok(Category::Health),
            "education" => Ok(Category::Education),
            "entertainment" => Ok(Category::Entertainment),
            other => Err(ParseCategoryError(other.to_string())),
        }
    }
}
