//! Page Configuration
//!
//! Copy and timings for the teaser page. Every field has a default, so a JSON
//! document only needs to name what it overrides.

use std::num::NonZeroU64;

use serde::{Deserialize, Serialize};

use crate::content::{self, Feature};
use crate::error::{Result, TeaserError};
use crate::particles::ParticleField;
use crate::scheduler::Millis;
use crate::typewriter::TaglineSet;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TeaserConfig {
    pub brand: String,
    pub headline: String,

    /// Rotating phrases under the headline
    pub taglines: Vec<String>,

    /// Delay between revealed characters
    pub char_interval_ms: Millis,

    /// Pause on a fully revealed tagline
    pub hold_ms: Millis,

    /// How long the "thanks" message stays up
    pub confirm_ms: Millis,

    pub email_placeholder: String,
    pub submit_label: String,
    pub confirmation_message: String,
    pub features: Vec<Feature>,
    pub particle_count: usize,
    pub footer_tagline: String,
}

impl Default for TeaserConfig {
    fn default() -> Self {
        Self {
            brand: content::BRAND.into(),
            headline: content::HEADLINE.into(),
            taglines: content::TAGLINES.iter().map(|&t| t.into()).collect(),
            char_interval_ms: 100,
            hold_ms: 2_000,
            confirm_ms: 3_000,
            email_placeholder: content::EMAIL_PLACEHOLDER.into(),
            submit_label: content::SUBMIT_LABEL.into(),
            confirmation_message: content::CONFIRMATION_MESSAGE.into(),
            features: content::default_features(),
            particle_count: ParticleField::DEFAULT_COUNT,
            footer_tagline: content::FOOTER_TAGLINE.into(),
        }
    }
}

impl TeaserConfig {
    /// Parse a (possibly partial) JSON document and validate it
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.taglines.is_empty() {
            return Err(TeaserError::EmptyTaglines);
        }
        for (name, value) in [
            ("char_interval_ms", self.char_interval_ms),
            ("hold_ms", self.hold_ms),
            ("confirm_ms", self.confirm_ms),
        ] {
            if value == 0 {
                return Err(TeaserError::InvalidInterval { name });
            }
        }
        if self.brand.trim().is_empty() {
            return Err(TeaserError::Config("brand must not be blank".into()));
        }
        Ok(())
    }

    pub fn tagline_set(&self) -> Result<TaglineSet> {
        TaglineSet::new(self.taglines.iter().cloned())
    }

    pub fn char_interval(&self) -> Result<NonZeroU64> {
        NonZeroU64::new(self.char_interval_ms)
            .ok_or(TeaserError::InvalidInterval { name: "char_interval_ms" })
    }

    pub fn footer(&self, year: i32) -> String {
        content::footer(year, &self.brand, &self.footer_tagline)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = TeaserConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.taglines.len(), 4);
        assert_eq!(config.char_interval().unwrap().get(), 100);
        assert_eq!(config.particle_count, 50);
    }

    #[test]
    fn test_partial_json_overrides() {
        let config = TeaserConfig::from_json(r#"{"taglines": ["Hi", "Yo"], "hold_ms": 500}"#).unwrap();
        assert_eq!(config.taglines, vec!["Hi", "Yo"]);
        assert_eq!(config.hold_ms, 500);
        assert_eq!(config.confirm_ms, 3_000);
        assert_eq!(config.brand, "OrbiBrain");
    }

    #[test]
    fn test_invalid_configs() {
        assert!(matches!(
            TeaserConfig::from_json(r#"{"taglines": []}"#),
            Err(TeaserError::EmptyTaglines)
        ));
        assert!(matches!(
            TeaserConfig::from_json(r#"{"confirm_ms": 0}"#),
            Err(TeaserError::InvalidInterval { name: "confirm_ms" })
        ));
        assert!(matches!(
            TeaserConfig::from_json(r#"{"brand": "  "}"#),
            Err(TeaserError::Config(_))
        ));
        assert!(matches!(
            TeaserConfig::from_json("not json"),
            Err(TeaserError::Json(_))
        ));
    }

    #[test]
    fn test_features_from_json() {
        let json = r#"{"features": [{"icon": "zap", "title": "Fast", "description": "Very"}]}"#;
        let config = TeaserConfig::from_json(json).unwrap();
        assert_eq!(config.features.len(), 1);
        assert_eq!(config.features[0].icon, crate::FeatureIcon::Zap);
    }
}
