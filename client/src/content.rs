//! Static portfolio content.
//!
//! The page is driven by `content/portfolio.json`, embedded at compile time.
//! Records are plain data; nothing here changes after load.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

use serde::{Deserialize, Serialize};

use crate::state::roles::FALLBACK_ROLE;

const EMBEDDED: &str = include_str!("../content/portfolio.json");

/// Errors produced while loading content.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("content parse failed: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("content has no profile name")]
    MissingName,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    #[serde(default)]
    pub roles: Vec<String>,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub telegram: Option<String>,
    #[serde(default)]
    pub github: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

impl Profile {
    /// First letter of each word in the name, e.g. `"IT"`.
    #[must_use]
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .flat_map(char::to_uppercase)
            .collect()
    }

    #[must_use]
    pub fn mailto(&self) -> Option<String> {
        self.email.as_ref().map(|email| format!("mailto:{email}"))
    }

    #[must_use]
    pub fn tel(&self) -> Option<String> {
        self.phone
            .as_ref()
            .map(|phone| format!("tel:{}", phone.chars().filter(|c| !c.is_whitespace()).collect::<String>()))
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub live_url: Option<String>,
    #[serde(default)]
    pub github_url: Option<String>,
}

impl Project {
    #[must_use]
    pub fn has_links(&self) -> bool {
        self.live_url.is_some() || self.github_url.is_some()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillCategory {
    pub title: String,
    #[serde(default)]
    pub skills: Vec<String>,
}

/// Everything the page renders.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Portfolio {
    pub profile: Profile,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub skill_categories: Vec<SkillCategory>,
    #[serde(default)]
    pub additional_skills: Vec<String>,
}

impl Portfolio {
    /// Parse and validate a content document.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError`] when the JSON is malformed or the profile
    /// has no name.
    pub fn from_json(raw: &str) -> Result<Self, ContentError> {
        let portfolio: Self = serde_json::from_str(raw)?;
        if portfolio.profile.name.trim().is_empty() {
            return Err(ContentError::MissingName);
        }
        Ok(portfolio)
    }

    /// The embedded document, or [`Portfolio::fallback`] if it is unusable.
    #[must_use]
    pub fn load() -> Self {
        Self::from_json_or_fallback(EMBEDDED)
    }

    #[must_use]
    pub fn from_json_or_fallback(raw: &str) -> Self {
        match Self::from_json(raw) {
            Ok(portfolio) => portfolio,
            Err(err) => {
                log::warn!("using fallback portfolio content: {err}");
                Self::fallback()
            }
        }
    }

    /// Minimal content: a name and the fallback role, no lists.
    #[must_use]
    pub fn fallback() -> Self {
        Self {
            profile: Profile {
                name: "Portfolio".to_owned(),
                roles: vec![FALLBACK_ROLE.to_owned()],
                ..Profile::default()
            },
            ..Self::default()
        }
    }
}
