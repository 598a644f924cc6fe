use leptos::prelude::*;

#[cfg(not(feature = "ssr"))]
use leptos::wasm_bindgen::JsCast;

use crate::core::orchestrator::Intent;
use crate::core::overlay::OverlayKind;
use crate::ui::icon::{Icon, icons};
use crate::ui::view_context::use_view_context;

/// Backdrop and animated panel shared by every overlay
///
/// Stays in the DOM while closed so the exit transition can play; the
/// backdrop ignores pointer events once the overlay stops being active.
#[component]
pub fn OverlayFrame(
    kind: OverlayKind,
    /// Sent when the backdrop (outside the panel) is clicked
    on_close: Intent,
    /// Accessible name of the dialog
    label: &'static str,
    /// Panel classes (placement and size)
    panel_class: &'static str,
    children: Children,
) -> impl IntoView {
    let ctx = use_view_context();
    let phase = ctx.phase(kind);
    let motion = kind.motion();

    view! {
        <div
            class=format!("zera-backdrop zera-backdrop--{}", kind)
            style=move || motion.backdrop_style(phase.get())
            aria-hidden=move || (!phase.get().is_active()).to_string()
            on:click=move |e| {
                #[cfg(not(feature = "ssr"))]
                {
                    if let Some(target) = e.target() {
                        if let Some(element) = target.dyn_ref::<web_sys::Element>() {
                            if element.class_list().contains("zera-backdrop") {
                                ctx.dispatch(on_close.clone());
                            }
                        }
                    }
                }
                #[cfg(feature = "ssr")]
                {
                    let _ = (e, &ctx, &on_close);
                }
            }
        >
            <div
                class=panel_class
                role="dialog"
                aria-modal="true"
                aria-label=label
                style=move || motion.panel_style(phase.get())
            >
                {children()}
            </div>
        </div>
    }
}

/// Square close button used in overlay headers
#[component]
pub fn CloseButton(
    intent: Intent,
    #[prop(default = "zera-close")] class: &'static str,
) -> impl IntoView {
    let ctx = use_view_context();

    view! {
        <button
            class=class
            on:click=move |_| ctx.dispatch(intent.clone())
            title="Close"
            aria-label="Close"
        >
            <Icon name=icons::X />
        </button>
    }
}
