use leptos::prelude::*;

use crate::core::catalog::Product;
use crate::core::contact::{PHONE_DISPLAY, instagram_display, instagram_url, whatsapp_order_link};
use crate::core::orchestrator::Intent;
use crate::core::overlay::{DETAIL_CONTENT_REVEAL, DETAIL_CONTENT_STAGGER, OverlayKind};
use crate::ui::ENTER_KEYFRAMES;
use crate::ui::common::{CloseButton, OverlayFrame};
use crate::ui::icon::{Icon, icons};
use crate::ui::view_context::use_view_context;

const FEATURES: [(&str, &str); 3] = [("18K", "GOLD"), ("100%", "HANDMADE"), ("1YR", "WARRANTY")];

/// Full-screen detail view of the selected product
#[component]
pub fn ProductDetailModal() -> impl IntoView {
    let ctx = use_view_context();
    // keyed on the opening too, so reopening the same piece mid-exit still
    // remounts the content and replays its entrance
    let shown = Memo::new(move |_| {
        ctx.view
            .with(|v| v.selected_product().cloned().map(|product| (v.detail_opened(), product)))
    });

    view! {
        <OverlayFrame
            kind=OverlayKind::ProductDetail
            on_close=Intent::CloseProductModal
            label="Product details"
            panel_class="zera-panel zera-panel--detail"
        >
            <div class="zera-frame-corners" aria-hidden="true"></div>
            <CloseButton intent=Intent::CloseProductModal class="zera-close zera-close--floating" />
            {move || shown.get().map(|(_, product)| view! { <DetailContent product=product /> })}
        </OverlayFrame>
    }
}

#[component]
fn DetailContent(product: Product) -> impl IntoView {
    // content blocks rise in one after another once mounted
    let block = |index: usize| {
        DETAIL_CONTENT_REVEAL
            .staggered(index, DETAIL_CONTENT_STAGGER)
            .animation(ENTER_KEYFRAMES)
    };
    let order_link = whatsapp_order_link(&product);

    view! {
        <div class="zera-detail">
            <div class="zera-detail__image zera-frame">
                <img src=product.image.clone() alt=product.name.clone() />
            </div>

            <div class="zera-detail__content">
                <div class="zera-accent" aria-hidden="true" style=block(0)>
                    <Icon name=icons::CROWN class="zera-icon zera-icon--gold" />
                    <span class="zera-rule"></span>
                </div>
                <span class="zera-label zera-gold" style=block(1)>{product.category_label()}</span>
                <h2 class="zera-detail__name" style=block(2)>{product.name.clone()}</h2>
                <p class="zera-body" style=block(3)>{product.full_description.clone()}</p>

                <div class="zera-detail__features" style=block(4)>
                    {FEATURES
                        .into_iter()
                        .map(|(value, label)| view! {
                            <div class="zera-badge zera-badge--boxed">
                                <span class="zera-badge__value">{value}</span>
                                <p class="zera-badge__label">{label}</p>
                            </div>
                        })
                        .collect_view()}
                </div>

                <div class="zera-detail__price" style=block(5)>
                    <p><strong>"Price: "</strong>{product.price_label().to_string()}</p>
                    <p>"Available upon request. Contact us for pricing, availability, and sizing options."</p>
                </div>

                <div class="zera-detail__order" style=block(6)>
                    <p class="zera-label zera-gold">"ORDER NOW"</p>
                    <a
                        class="zera-button zera-button--whatsapp zera-button--block"
                        href=order_link
                        target="_blank"
                        rel="noopener noreferrer"
                    >
                        <Icon name=icons::MESSAGE_CIRCLE />
                        <span>"Order on WhatsApp"</span>
                    </a>
                    <a
                        class="zera-button zera-button--outline zera-button--block"
                        href=instagram_url()
                        target="_blank"
                        rel="noopener noreferrer"
                    >
                        <Icon name=icons::INSTAGRAM />
                        <span>"Order via Instagram"</span>
                    </a>
                </div>

                <div class="zera-detail__contact" style=block(7)>
                    <span>"WhatsApp: " {PHONE_DISPLAY}</span>
                    <span class="zera-gold">"|"</span>
                    <span>{instagram_display()}</span>
                </div>
            </div>
        </div>
    }
}
