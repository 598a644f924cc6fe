use leptos::html;
use leptos::prelude::*;

use crate::core::catalog::Product;
use crate::core::motion::{Layout, Part, PinnedTimeline};
use crate::core::orchestrator::Intent;
use crate::ui::icon::{Icon, icons};
use crate::ui::scroll::{pin_height_style, use_pinned_timeline};
use crate::ui::view_context::use_view_context;

/// Pinned full-screen feature of one product. Consecutive spotlights
/// alternate the side the image sits on.
#[component]
pub fn ProductSpotlight(product: &'static Product, index: usize) -> impl IntoView {
    let ctx = use_view_context();
    let layout = Layout::alternating(index);
    let section = NodeRef::<html::Section>::new();
    let styles = use_pinned_timeline(section, PinnedTimeline::spotlight(layout));

    view! {
        <section
            id=format!("spotlight-{}", product.id)
            class="zera-pinned"
            style=pin_height_style()
            node_ref=section
        >
            <div class="zera-pinned__stage">
                <div class=format!("zera-pinned__image zera-pinned__image--{}", layout) style=styles.of(Part::Image)>
                    <img src=product.image.clone() alt=product.name.clone() />
                </div>

                <div
                    class=format!("zera-pinned__hairline zera-pinned__hairline--{}", layout)
                    style=styles.of(Part::Divider)
                ></div>

                <div class=format!("zera-pinned__content zera-pinned__content--{}", layout) style=styles.of(Part::Content)>
                    <div class="zera-pinned__copy">
                        <span class="zera-label zera-gold" style=styles.of(Part::Label)>
                            {product.category_label()}
                        </span>
                        <h2 class="zera-heading" style=styles.of(Part::Title)>{product.name.clone()}</h2>
                        <p class="zera-body" style=styles.of(Part::Body)>{product.full_description.clone()}</p>
                        <button
                            class="zera-button"
                            style=styles.of(Part::Cta)
                            on:click=move |_| ctx.dispatch(Intent::ViewDetails(product.clone()))
                        >
                            <span>"Request Details"</span>
                            <Icon name=icons::ARROW_RIGHT />
                        </button>
                    </div>
                </div>
            </div>
        </section>
    }
}
