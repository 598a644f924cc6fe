//! 404 page for any path other than the showcase

use leptos::prelude::*;
use leptos_router::components::A;

use crate::ui::icon::{Icon, icons};

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="zera-not-found">
            <div class="zera-not-found__body">
                <div class="zera-not-found__emblem zera-frame">
                    <Icon name=icons::CROWN class="zera-icon zera-icon--gold zera-icon--large" />
                </div>

                <h1 class="zera-display">"404"</h1>
                <h2 class="zera-not-found__title">"Page Not Found"</h2>
                <p class="zera-lead">
                    "The piece you're looking for isn't part of our collection."
                </p>

                <A href="/" attr:class="zera-button zera-button--gold">
                    "Go Home"
                </A>
            </div>

            <p class="zera-not-found__footer">"© 2024 ZERA XII"</p>
        </div>
    }
}
