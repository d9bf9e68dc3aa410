//! UI Components

use leptos::prelude::*;
use teaser_core::{Feature, FeatureIcon, Particle};

/// Brand mark and headline
#[component]
pub fn Hero(brand: String, headline: String) -> impl IntoView {
    view! {
        <header class="hero">
            <div class="brand fade-down">
                <div class="brand-mark">{FeatureIcon::Brain.glyph()}</div>
                <h1 class="brand-name">{brand}</h1>
            </div>
            <h2 class="headline zoom-in">{headline}</h2>
        </header>
    }
}

/// Typed-out tagline with a blinking cursor
#[component]
pub fn Tagline(text: ReadSignal<String>) -> impl IntoView {
    view! {
        <div class="tagline-slot zoom-in">
            <p class="tagline">
                {move || text.get()}
                <span class="cursor">"|"</span>
            </p>
        </div>
    }
}

/// Email capture, swapped for a thank-you note while confirmed
#[component]
pub fn SubscribeForm(
    email: ReadSignal<String>,
    confirmed: ReadSignal<bool>,
    placeholder: String,
    label: String,
    message: String,
    on_input: Callback<String>,
    on_submit: Callback<()>,
) -> impl IntoView {
    view! {
        <section class="subscribe fade-up">
            <Show
                when=move || !confirmed.get()
                fallback=move || view! {
                    <div class="confirmation pop-in">
                        <span class="icon">{FeatureIcon::Check.glyph()}</span>
                        {message.clone()}
                    </div>
                }
            >
                <form
                    class="subscribe-form"
                    on:submit=move |ev| {
                        ev.prevent_default();
                        on_submit.run(());
                    }
                >
                    <input
                        type="email"
                        required
                        placeholder=placeholder.clone()
                        prop:value=move || email.get()
                        on:input=move |ev| on_input.run(event_target_value(&ev))
                    />
                    <button type="submit" class="btn btn-primary">
                        <span class="icon">{FeatureIcon::Mail.glyph()}</span>
                        {label.clone()}
                        <span class="icon">"→"</span>
                    </button>
                </form>
            </Show>
        </section>
    }
}

/// Static feature card
#[component]
pub fn FeatureCard(feature: Feature) -> impl IntoView {
    view! {
        <div class="feature">
            <div class="feature-icon">{feature.icon.glyph()}</div>
            <h3>{feature.title}</h3>
            <p>{feature.description}</p>
        </div>
    }
}

/// Floating dots behind the content
#[component]
pub fn Particles(particles: Vec<Particle>) -> impl IntoView {
    view! {
        <div class="particles" aria-hidden="true">
            {particles
                .into_iter()
                .map(|p| view! { <div class="particle" style=particle_style(&p)></div> })
                .collect_view()}
        </div>
    }
}

#[component]
pub fn Footer(text: String) -> impl IntoView {
    view! {
        <footer class="footer fade-in">
            <p>{text}</p>
        </footer>
    }
}

fn particle_style(p: &Particle) -> String {
    format!(
        "left: {:.2}%; top: {:.2}%; animation-duration: {:.2}s; animation-delay: {:.2}s;",
        p.x_pct, p.y_pct, p.duration_secs, p.delay_secs
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_particle_style() {
        let p = Particle {
            x_pct: 12.5,
            y_pct: 80.0,
            duration_secs: 3.25,
            delay_secs: 0.5,
        };
        assert_eq!(
            particle_style(&p),
            "left: 12.50%; top: 80.00%; animation-duration: 3.25s; animation-delay: 0.50s;"
        );
    }
}
