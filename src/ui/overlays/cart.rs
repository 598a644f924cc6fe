use leptos::prelude::*;

use crate::core::contact::{PHONE_DISPLAY, whatsapp_link};
use crate::core::orchestrator::Intent;
use crate::core::overlay::OverlayKind;
use crate::ui::common::{CloseButton, OverlayFrame};
use crate::ui::icon::{Icon, icons};

/// Side drawer explaining direct ordering. There is no basket; every order
/// goes through a conversation.
#[component]
pub fn CartDrawer() -> impl IntoView {
    view! {
        <OverlayFrame
            kind=OverlayKind::Cart
            on_close=Intent::CloseCart
            label="Your selection"
            panel_class="zera-panel zera-panel--drawer"
        >
            <div class="zera-drawer__header">
                <div class="zera-accent">
                    <Icon name=icons::CROWN class="zera-icon zera-icon--gold" />
                    <h2 class="zera-drawer__title">"Your Selection"</h2>
                </div>
                <CloseButton intent=Intent::CloseCart />
            </div>

            <div class="zera-drawer__body">
                <div class="zera-drawer__emblem zera-frame">
                    <Icon name=icons::SHOPPING_BAG class="zera-icon zera-icon--gold zera-icon--large" />
                </div>
                <h3 class="zera-drawer__heading">"Direct Ordering"</h3>
                <p class="zera-drawer__text">
                    "At ZERA XII, we offer a personalized ordering experience. Browse our collection and contact us directly to place your order."
                </p>
            </div>

            <div class="zera-drawer__footer">
                <a
                    class="zera-button zera-button--whatsapp zera-button--block"
                    href=whatsapp_link()
                    target="_blank"
                    rel="noopener noreferrer"
                >
                    <Icon name=icons::MESSAGE_CIRCLE />
                    <span>"Contact to Order"</span>
                </a>
                <p class="zera-drawer__phone">"WhatsApp: " {PHONE_DISPLAY}</p>
            </div>
        </OverlayFrame>
    }
}
