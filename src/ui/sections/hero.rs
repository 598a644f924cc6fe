//! Opening section; plays its entrance sequence once after hydration

use leptos::prelude::*;

use crate::core::catalog::asset_path;
use crate::core::motion::{HeroPart, hero_reveal};
use crate::core::navigation::Section;
use crate::ui::icon::{Icon, icons};
use crate::ui::scroll::scroll_to_section;

const TRUST_BADGES: [(&str, &str); 3] = [("18K", "GOLD"), ("100%", "HANDCRAFTED"), ("5★", "RATED")];

#[component]
pub fn Hero() -> impl IntoView {
    let (entered, set_entered) = signal(false);

    // Effects only run in the browser, after the server markup is painted
    Effect::new(move |_| set_entered.set(true));

    let style = move |part: HeroPart| move || hero_reveal(part).style(entered.get());

    view! {
        <section id=Section::Hero.id() class="zera-hero">
            <div class="zera-hero__image" style=style(HeroPart::Image)>
                <img src=asset_path("hero-ring.jpg") alt="Luxury gold ring on cream silk" />
                <div class="zera-hero__frame" aria-hidden="true"></div>
            </div>

            <div class="zera-hero__content" style=style(HeroPart::Content)>
                <div class="zera-hero__copy">
                    <div class="zera-accent" aria-hidden="true">
                        <span class="zera-rule"></span>
                        <Icon name=icons::SPARKLES class="zera-icon zera-icon--gold" />
                    </div>

                    <h1 class="zera-hero__wordmark" style=style(HeroPart::Wordmark)>
                        "ZERA " <span class="zera-gold">"XII"</span>
                    </h1>

                    <p class="zera-hero__tagline" style=style(HeroPart::Tagline)>
                        "Adorned In Elegance,"
                        <br />
                        <span class="zera-gold">"Defined By You."</span>
                    </p>

                    <p class="zera-hero__lead">
                        "Discover our exclusive collection of handcrafted luxury jewelry, designed to celebrate your unique style."
                    </p>

                    <button
                        class="zera-button"
                        style=style(HeroPart::Cta)
                        on:click=move |_| scroll_to_section(Section::Products)
                    >
                        <span>"Explore Collection"</span>
                        <Icon name=icons::ARROW_RIGHT />
                    </button>

                    <div class="zera-badges">
                        {TRUST_BADGES
                            .into_iter()
                            .map(|(value, label)| view! {
                                <div class="zera-badge">
                                    <span class="zera-badge__value">{value}</span>
                                    <p class="zera-badge__label">{label}</p>
                                </div>
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}
