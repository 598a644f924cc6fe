use leptos::html;
use leptos::prelude::*;

use crate::core::catalog::asset_path;
use crate::core::motion::{Part, PinnedTimeline};
use crate::core::navigation::Section;
use crate::ui::icon::{Icon, icons};
use crate::ui::scroll::{pin_height_style, scroll_to_section, use_pinned_timeline};

/// Pinned brand story with the model portrait
#[component]
pub fn About() -> impl IntoView {
    let section = NodeRef::<html::Section>::new();
    let styles = use_pinned_timeline(section, PinnedTimeline::about());

    view! {
        <section id=Section::About.id() class="zera-pinned" style=pin_height_style() node_ref=section>
            <div class="zera-pinned__stage">
                <div class="zera-pinned__image zera-pinned__image--left" style=styles.of(Part::Image)>
                    <img src=asset_path("collection-model.jpg") alt="Elegant woman wearing gold jewelry" />
                </div>

                <div class="zera-pinned__hairline zera-pinned__hairline--left" style=styles.of(Part::Divider)></div>

                <div class="zera-pinned__content zera-pinned__content--left" style=styles.of(Part::Content)>
                    <div class="zera-pinned__copy">
                        <h2 class="zera-heading" style=styles.of(Part::Title)>"The Collection"</h2>
                        <p class="zera-body" style=styles.of(Part::Body)>
                            "Pieces chosen for presence, crafted to move with you from morning light to evening gold. Each creation tells a story of elegance, designed for those who appreciate the finer details of life."
                        </p>
                        <button
                            class="zera-button"
                            style=styles.of(Part::Cta)
                            on:click=move |_| scroll_to_section(Section::Products)
                        >
                            <span>"Explore the Edit"</span>
                            <Icon name=icons::ARROW_RIGHT />
                        </button>
                    </div>
                </div>
            </div>
        </section>
    }
}
