//! Page Copy
//!
//! Default brand, tagline and feature-card text for the teaser page.

use serde::{Deserialize, Serialize};

pub const BRAND: &str = "OrbiBrain";
pub const HEADLINE: &str = "Coming Soon";

pub const TAGLINES: [&str; 4] = [
    "Revolutionizing Intelligence",
    "Powering Tomorrow's Minds",
    "Where Innovation Meets Intelligence",
    "The Future of Cognitive Technology",
];

pub const EMAIL_PLACEHOLDER: &str = "Enter your email";
pub const SUBMIT_LABEL: &str = "Notify Me";
pub const CONFIRMATION_MESSAGE: &str = "Thanks! We'll keep you updated.";
pub const FOOTER_TAGLINE: &str = "Building the future of intelligence.";

/// Icon shown at the top of a feature card
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeatureIcon {
    Brain,
    Zap,
    Globe,
    Mail,
    Check,
}

impl FeatureIcon {
    /// Text glyph the UI renders for the icon
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Brain => "🧠",
            Self::Zap => "⚡",
            Self::Globe => "🌐",
            Self::Mail => "✉",
            Self::Check => "✔",
        }
    }
}

/// One static feature card
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feature {
    pub icon: FeatureIcon,
    pub title: String,
    pub description: String,
}

impl Feature {
    pub fn new(icon: FeatureIcon, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            icon,
            title: title.into(),
            description: description.into(),
        }
    }
}

pub fn default_features() -> Vec<Feature> {
    vec![
        Feature::new(
            FeatureIcon::Brain,
            "AI-Powered Solutions",
            "Advanced artificial intelligence at your fingertips",
        ),
        Feature::new(
            FeatureIcon::Zap,
            "Lightning Fast",
            "Optimized performance for real-time processing",
        ),
        Feature::new(
            FeatureIcon::Globe,
            "Global Scale",
            "Built for worldwide deployment and accessibility",
        ),
    ]
}

/// Footer line, e.g. "© 2025 OrbiBrain. All rights reserved. | Building ..."
pub fn footer(year: i32, brand: &str, tagline: &str) -> String {
    format!("© {year} {brand}. All rights reserved. | {tagline}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_features() {
        let features = default_features();
        assert_eq!(features.len(), 3);
        assert_eq!(features[1].icon, FeatureIcon::Zap);
        assert_eq!(features[2].title, "Global Scale");
    }

    #[test]
    fn test_icon_serde() {
        let icon: FeatureIcon = serde_json::from_str(r#""globe""#).unwrap();
        assert_eq!(icon, FeatureIcon::Globe);
        assert_eq!(icon.glyph(), "🌐");
    }

    #[test]
    fn test_footer() {
        assert_eq!(
            footer(2025, BRAND, FOOTER_TAGLINE),
            "© 2025 OrbiBrain. All rights reserved. | Building the future of intelligence."
        );
    }
}
