//! Fixed header with section links, search and selection buttons

use leptos::prelude::*;

use crate::core::navigation::{NAV_LINKS, Section, is_scrolled};
use crate::core::orchestrator::Intent;
use crate::ui::icon::{Icon, icons};
use crate::ui::scroll::{scroll_to_section, use_scroll_context};
use crate::ui::view_context::use_view_context;

/// Header component with mobile menu support
#[component]
pub fn Navigation() -> impl IntoView {
    let ctx = use_view_context();
    let scroll = use_scroll_context();
    let scrolled = Memo::new(move |_| is_scrolled(scroll.scroll_y.get()));
    let (mobile_menu_open, set_mobile_menu_open) = signal(false);

    // Anchor click: close the mobile menu and scroll smoothly
    let go_to = move |section: Section| {
        move |ev: leptos::ev::MouseEvent| {
            ev.prevent_default();
            set_mobile_menu_open.set(false);
            scroll_to_section(section);
        }
    };

    view! {
        <header class=move || {
            if scrolled.get() { "zera-nav zera-nav--scrolled" } else { "zera-nav" }
        }>
            <div class="zera-nav__inner">
                <a href=Section::Hero.href() class="zera-nav__brand" on:click=go_to(Section::Hero)>
                    <Icon name=icons::CROWN class="zera-icon zera-icon--gold" />
                    <span class="zera-wordmark">"ZERA " <span class="zera-gold">"XII"</span></span>
                </a>

                // Desktop Navigation
                <nav class="zera-nav__links" aria-label="Sections">
                    {NAV_LINKS
                        .into_iter()
                        .map(|(section, label)| view! {
                            <a href=section.href() class="zera-nav__link" on:click=go_to(section)>
                                {label}
                            </a>
                        })
                        .collect_view()}
                </nav>

                <div class="zera-nav__actions">
                    <button
                        class="zera-icon-button"
                        on:click=move |_| ctx.dispatch(Intent::OpenSearch)
                        aria-label="Search"
                    >
                        <Icon name=icons::SEARCH />
                    </button>
                    <button
                        class="zera-icon-button"
                        on:click=move |_| ctx.dispatch(Intent::OpenCart)
                        aria-label="Your selection"
                    >
                        <Icon name=icons::SHOPPING_BAG />
                    </button>

                    // Mobile menu button
                    <button
                        class="zera-icon-button zera-nav__toggle"
                        on:click=move |_| set_mobile_menu_open.update(|v| *v = !*v)
                        aria-label="Toggle mobile menu"
                        aria-expanded=move || mobile_menu_open.get().to_string()
                    >
                        {move || {
                            let name = if mobile_menu_open.get() { icons::X } else { icons::MENU };
                            view! { <Icon name=name /> }
                        }}
                    </button>
                </div>
            </div>

            // Mobile menu
            <div class=move || {
                if mobile_menu_open.get() {
                    "zera-nav__mobile zera-nav__mobile--open"
                } else {
                    "zera-nav__mobile"
                }
            }>
                <nav class="zera-nav__mobile-links">
                    {NAV_LINKS
                        .into_iter()
                        .map(|(section, label)| view! {
                            <a href=section.href() class="zera-nav__mobile-link" on:click=go_to(section)>
                                {label}
                            </a>
                        })
                        .collect_view()}
                </nav>
            </div>
        </header>
    }
}
