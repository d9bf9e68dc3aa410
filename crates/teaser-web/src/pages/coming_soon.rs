//! Coming-Soon Page
//!
//! Owns the `TeaserPage` for as long as the view is mounted and ticks it from a
//! browser interval. Cleanup clears the interval before unmounting the page, so
//! no timer can fire into a disposed view.

use std::time::Duration;

use chrono::Datelike;
use leptos::prelude::*;
use teaser_core::{PageUpdate, ParticleField, TeaserConfig, TeaserPage};

use crate::clock;
use crate::components::{FeatureCard, Footer, Hero, Particles, SubscribeForm, Tagline};

/// Driver resolution. Timer due times come from the page, not from this tick.
const TICK: Duration = Duration::from_millis(20);

/// Signal setters the page's updates are mirrored into
#[derive(Clone, Copy)]
struct Sinks {
    tagline: WriteSignal<String>,
    confirmed: WriteSignal<bool>,
    email: WriteSignal<String>,
}

impl Sinks {
    fn apply(self, updates: Vec<PageUpdate>) {
        for update in updates {
            match update {
                PageUpdate::Tagline(text) => self.tagline.set(text),
                PageUpdate::Confirmation(confirmed) => self.confirmed.set(confirmed),
                PageUpdate::Email(email) => self.email.set(email),
            }
        }
    }
}

#[component]
pub fn ComingSoonPage(config: TeaserConfig) -> impl IntoView {
    let (tagline, set_tagline) = signal(String::new());
    let (confirmed, set_confirmed) = signal(false);
    let (email, set_email) = signal(String::new());
    let sinks = Sinks {
        tagline: set_tagline,
        confirmed: set_confirmed,
        email: set_email,
    };

    let page = match TeaserPage::mount(&config, clock::now_ms()) {
        Ok(page) => page,
        Err(e) => {
            leptos::logging::error!("Failed to mount teaser page: {e}");
            return view! { <p class="error">{e.user_message()}</p> }.into_any();
        }
    };
    sinks.apply(page.snapshot());
    let page = StoredValue::new_local(page);

    match set_interval_with_handle(
        move || {
            if let Some(updates) = page.try_update_value(|p| p.advance_to(clock::now_ms())) {
                sinks.apply(updates);
            }
        },
        TICK,
    ) {
        Ok(handle) => on_cleanup(move || {
            handle.clear();
            page.try_update_value(TeaserPage::unmount);
        }),
        Err(e) => leptos::logging::error!("Failed to start page timer: {e:?}"),
    }

    let on_input = Callback::new(move |text: String| {
        if let Some(updates) = page.try_update_value(|p| p.input(text)) {
            sinks.apply(updates);
        }
    });
    let on_submit = Callback::new(move |()| {
        if let Some((_, updates)) = page.try_update_value(|p| p.submit(clock::now_ms())) {
            sinks.apply(updates);
        }
    });

    let particles = ParticleField::from_seed(config.particle_count, clock::particle_seed()).into_vec();
    let footer = config.footer(chrono::Utc::now().year());

    view! {
        <div class="coming-soon">
            <div class="backdrop"></div>
            <Particles particles=particles />

            <div class="content">
                <Hero brand=config.brand headline=config.headline />
                <Tagline text=tagline />
                <SubscribeForm
                    email=email
                    confirmed=confirmed
                    placeholder=config.email_placeholder
                    label=config.submit_label
                    message=config.confirmation_message
                    on_input=on_input
                    on_submit=on_submit
                />

                <section class="features fade-up delayed">
                    {config
                        .features
                        .into_iter()
                        .map(|feature| view! { <FeatureCard feature=feature /> })
                        .collect_view()}
                </section>

                <Footer text=footer />
            </div>

            <div class="overlay"></div>
        </div>
    }
    .into_any()
}
