use leptos::html;
use leptos::prelude::*;

use crate::core::catalog::products;
use crate::core::filter::{POPULAR_SEARCHES, search_products};
use crate::core::orchestrator::Intent;
use crate::core::overlay::{ENTER_MS, OverlayKind, OverlayPhase};
use crate::ui::common::{CloseButton, OverlayFrame};
use crate::ui::icon::{Icon, icons};
use crate::ui::view_context::use_view_context;

/// Search panel dropping from the top of the page
#[component]
pub fn SearchModal() -> impl IntoView {
    let ctx = use_view_context();
    let phase = ctx.phase(OverlayKind::Search);
    let query = RwSignal::new(String::new());
    let results = Memo::new(move |_| query.with(|q| search_products(products(), q)));
    let input = NodeRef::<html::Input>::new();

    // Fresh query each time; focus the input once the panel is in place
    Effect::new(move |prev: Option<OverlayPhase>| {
        let current = phase.get();
        if !current.is_mounted() {
            query.set(String::new());
        }
        if current == OverlayPhase::Opening && prev != Some(OverlayPhase::Opening) {
            focus_after_enter(input);
        }
        current
    });

    view! {
        <OverlayFrame
            kind=OverlayKind::Search
            on_close=Intent::CloseSearch
            label="Search"
            panel_class="zera-panel zera-panel--search"
        >
            <div class="zera-search__bar">
                <Icon name=icons::SEARCH class="zera-icon zera-icon--gold zera-icon--large" />
                <input
                    type="text"
                    class="zera-search__input"
                    placeholder="Search for jewelry..."
                    aria-label="Search for jewelry"
                    node_ref=input
                    prop:value=move || query.get()
                    on:input=move |ev| query.set(event_target_value(&ev))
                />
                <CloseButton intent=Intent::CloseSearch />
            </div>

            <Show
                when=move || query.with(|q| !q.is_empty())
                fallback=move || view! {
                    <div class="zera-search__popular">
                        <div class="zera-accent">
                            <Icon name=icons::CROWN class="zera-icon zera-icon--gold zera-icon--small" />
                            <p class="zera-label zera-gold">"POPULAR SEARCHES"</p>
                        </div>
                        <div class="zera-chips">
                            {POPULAR_SEARCHES
                                .into_iter()
                                .map(|term| view! {
                                    <button class="zera-chip" on:click=move |_| query.set(term.to_string())>
                                        {term}
                                    </button>
                                })
                                .collect_view()}
                        </div>
                    </div>
                }
            >
                <div class="zera-search__results">
                    {move || {
                        let found = results.get();
                        if found.is_empty() {
                            view! {
                                <div class="zera-empty">
                                    <Icon name=icons::CROWN class="zera-icon zera-icon--muted" />
                                    <p>{format!("No pieces found matching \"{}\"", query.get())}</p>
                                </div>
                            }
                                .into_any()
                        } else {
                            found
                                .into_iter()
                                .map(|product| view! {
                                    <button
                                        class="zera-search__result"
                                        on:click=move |_| ctx.dispatch(Intent::SelectSearchResult(product.clone()))
                                    >
                                        <img class="zera-search__thumb zera-frame" src=product.image.clone() alt=product.name.clone() />
                                        <span class="zera-search__text">
                                            <span class="zera-label zera-gold">{product.category_label()}</span>
                                            <span class="zera-search__name">{product.name.clone()}</span>
                                            <span class="zera-search__description">{product.description.clone()}</span>
                                        </span>
                                        <Icon name=icons::ARROW_RIGHT class="zera-icon zera-icon--gold zera-search__arrow" />
                                    </button>
                                })
                                .collect_view()
                                .into_any()
                        }
                    }}
                </div>
            </Show>
        </OverlayFrame>
    }
}

fn focus_after_enter(input: NodeRef<html::Input>) {
    #[cfg(not(feature = "ssr"))]
    {
        use gloo_timers::future::TimeoutFuture;
        use wasm_bindgen_futures::spawn_local;

        spawn_local(async move {
            TimeoutFuture::new(ENTER_MS).await;
            if let Some(el) = input.get_untracked() {
                let _ = el.focus();
            }
        });
    }
    #[cfg(feature = "ssr")]
    {
        let _ = (input, ENTER_MS);
    }
}
