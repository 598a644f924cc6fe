//! Filterable product grid

use leptos::html;
use leptos::prelude::*;

use crate::core::catalog::{FILTER_CHIPS, Product, products};
use crate::core::contact::whatsapp_order_link;
use crate::core::filter::CategoryFilter;
use crate::core::motion::{PRODUCT_CARD_REVEAL, PRODUCT_STAGGER, RevealTrigger, SUBHEAD_REVEAL};
use crate::core::navigation::Section;
use crate::core::orchestrator::Intent;
use crate::ui::ENTER_KEYFRAMES;
use crate::ui::common::SectionHeading;
use crate::ui::icon::{Icon, icons};
use crate::ui::scroll::use_reveal;
use crate::ui::view_context::use_view_context;

#[component]
pub fn Products() -> impl IntoView {
    let ctx = use_view_context();
    let filters = ctx.filters;
    let visible = Memo::new(move |_| filters.with(|f| f.apply(products())));

    let controls = NodeRef::<html::Div>::new();
    let controls_revealed = use_reveal(controls, RevealTrigger::HEADLINE);
    let grid = NodeRef::<html::Div>::new();
    let grid_revealed = use_reveal(grid, RevealTrigger::CARDS);

    view! {
        <section id=Section::Products.id() class="zera-section zera-section--ivory">
            <div class="zera-container">
                <SectionHeading
                    label="OUR COLLECTION"
                    title="Exquisite Pieces"
                    lead="Discover our curated selection of luxury jewelry, each piece crafted to perfection"
                />

                // Search and Filters
                <div
                    class="zera-filters"
                    node_ref=controls
                    style=move || SUBHEAD_REVEAL.style(controls_revealed.get())
                >
                    <label class="zera-search-field">
                        <Icon name=icons::SEARCH class="zera-icon zera-icon--gold" />
                        <input
                            type="text"
                            class="zera-search-field__input"
                            placeholder="Search for jewelry..."
                            aria-label="Search the collection"
                            prop:value=move || filters.with(|f| f.search_query.clone())
                            on:input=move |ev| {
                                let query = event_target_value(&ev);
                                filters.update(|f| f.search_query = query);
                            }
                        />
                    </label>

                    <div class="zera-chips" role="group" aria-label="Filter by category">
                        {FILTER_CHIPS
                            .into_iter()
                            .map(|(id, label)| {
                                let selected = move || filters.with(|f| f.selected_category.is_selected(id));
                                view! {
                                    <button
                                        class=move || if selected() { "zera-chip zera-chip--active" } else { "zera-chip" }
                                        aria-pressed=move || selected().to_string()
                                        on:click=move |_| {
                                            filters.update(|f| f.selected_category = CategoryFilter::from_id(id))
                                        }
                                    >
                                        {label}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>

                // Products Grid
                <div class="zera-product-grid" node_ref=grid>
                    {move || {
                        // rebuilt whenever the visible set changes, which replays the stagger
                        let revealed = grid_revealed.get();
                        visible
                            .get()
                            .into_iter()
                            .enumerate()
                            .map(|(index, product)| {
                                let reveal = PRODUCT_CARD_REVEAL.staggered(index, PRODUCT_STAGGER);
                                let style = if revealed {
                                    reveal.animation(ENTER_KEYFRAMES)
                                } else {
                                    reveal.hidden.css()
                                };
                                view! { <ProductCard product=product style=style /> }
                            })
                            .collect_view()
                    }}
                </div>

                <Show when=move || visible.with(|v| v.is_empty())>
                    <div class="zera-empty">
                        <Icon name=icons::CROWN class="zera-icon zera-icon--muted" />
                        <p>"No pieces found matching your criteria"</p>
                        <button class="zera-button zera-button--outline" on:click=move |_| filters.update(|f| f.clear())>
                            "Clear Filters"
                        </button>
                    </div>
                </Show>
            </div>
        </section>
    }
}

#[component]
fn ProductCard(product: &'static Product, style: String) -> impl IntoView {
    let ctx = use_view_context();
    let order_link = whatsapp_order_link(product);

    view! {
        <article
            class="zera-product-card"
            style=style
            on:click=move |_| ctx.dispatch(Intent::ViewDetails(product.clone()))
        >
            <div class="zera-product-card__image zera-frame">
                <img src=product.image.clone() alt=product.name.clone() loading="lazy" />
                <span class="zera-product-card__badge zera-label">{product.category_label()}</span>
                <div class="zera-product-card__hover">
                    <a
                        class="zera-button zera-button--whatsapp"
                        href=order_link.clone()
                        target="_blank"
                        rel="noopener noreferrer"
                        on:click=|ev| ev.stop_propagation()
                    >
                        <Icon name=icons::MESSAGE_CIRCLE />
                        <span>"Order on WhatsApp"</span>
                    </a>
                    <span class="zera-product-card__hint">"Click for details"</span>
                </div>
            </div>
            <div class="zera-product-card__body">
                <span class="zera-rule zera-rule--center" aria-hidden="true"></span>
                <h3 class="zera-product-card__name">{product.name.clone()}</h3>
                <p class="zera-product-card__description">{product.description.clone()}</p>
                <a
                    class="zera-button zera-button--whatsapp zera-mobile-only"
                    href=order_link
                    target="_blank"
                    rel="noopener noreferrer"
                    on:click=|ev| ev.stop_propagation()
                >
                    <Icon name=icons::MESSAGE_CIRCLE />
                    <span>"Order on WhatsApp"</span>
                </a>
            </div>
        </article>
    }
}
