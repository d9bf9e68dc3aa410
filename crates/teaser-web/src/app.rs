//! Main App Component

use leptos::prelude::*;
use teaser_core::TeaserConfig;

use crate::pages::ComingSoonPage;

const CONFIG_JSON: &str = include_str!("../teaser.json");

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    view! {
        <main class="app">
            <ComingSoonPage config=load_config() />
        </main>
    }
}

/// Embedded page config, or the built-in defaults if it does not parse
fn load_config() -> TeaserConfig {
    TeaserConfig::from_json(CONFIG_JSON).unwrap_or_else(|e| {
        leptos::logging::warn!("{}", e.user_message());
        TeaserConfig::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_config_is_valid() {
        let config = TeaserConfig::from_json(CONFIG_JSON).unwrap();
        assert_eq!(config, TeaserConfig::default());
    }
}
