use leptos::html;
use leptos::prelude::*;

use crate::core::catalog::categories;
use crate::core::motion::{CATEGORY_CARD_REVEAL, CATEGORY_STAGGER, RevealTrigger};
use crate::core::navigation::{Section, category_target};
use crate::ui::common::SectionHeading;
use crate::ui::icon::{Icon, icons};
use crate::ui::scroll::{scroll_to_section, use_reveal};

/// Category grid; a card leads to the full product listing
#[component]
pub fn Categories() -> impl IntoView {
    let grid = NodeRef::<html::Div>::new();
    let revealed = use_reveal(grid, RevealTrigger::CARDS);

    view! {
        <section id=Section::Categories.id() class="zera-section zera-section--cream">
            <div class="zera-container">
                <SectionHeading
                    label="BROWSE BY CATEGORY"
                    title="Curated Collections"
                    lead="Each piece in our collection is meticulously crafted to embody elegance and sophistication"
                />

                <div class="zera-category-grid" node_ref=grid>
                    {categories()
                        .iter()
                        .enumerate()
                        .map(|(index, category)| {
                            let reveal = CATEGORY_CARD_REVEAL.staggered(index, CATEGORY_STAGGER);
                            let target = category_target(&category.id);
                            view! {
                                <button
                                    class="zera-category-card"
                                    style=move || reveal.style(revealed.get())
                                    on:click=move |_| scroll_to_section(target)
                                >
                                    <div class="zera-category-card__image zera-frame">
                                        <img src=category.image.clone() alt=category.name.clone() />
                                        <span class="zera-category-card__arrow" aria-hidden="true">
                                            <Icon name=icons::ARROW_RIGHT />
                                        </span>
                                    </div>
                                    <span class="zera-label zera-category-card__note">
                                        {category.description.clone()}
                                    </span>
                                    <h3 class="zera-category-card__name">{category.name.clone()}</h3>
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
