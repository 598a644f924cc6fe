//! Page-wide view state shared through context
//!
//! Wraps [`ViewOrchestrator`] in a signal, turns its transition tickets into
//! timers and mirrors the scroll lock onto `<body>`.

use leptos::prelude::*;

use crate::core::filter::FilterState;
use crate::core::orchestrator::{Intent, ViewOrchestrator};
use crate::core::overlay::{OverlayKind, OverlayPhase, TransitionTicket};

#[derive(Clone, Copy)]
pub struct ViewContext {
    pub view: RwSignal<ViewOrchestrator>,
    /// Category chip and query of the product grid
    pub filters: RwSignal<FilterState>,
}

impl ViewContext {
    pub fn dispatch(&self, intent: Intent) {
        let tickets = self
            .view
            .try_update(|view| view.dispatch(intent))
            .unwrap_or_default();
        for ticket in tickets {
            self.schedule(ticket);
        }
    }

    pub fn phase(&self, kind: OverlayKind) -> Memo<OverlayPhase> {
        let view = self.view;
        Memo::new(move |_| view.with(|v| v.phase(kind)))
    }

    /// Settle `ticket` once its transition has run
    fn schedule(&self, ticket: TransitionTicket) {
        #[cfg(not(feature = "ssr"))]
        {
            use gloo_timers::future::TimeoutFuture;
            use wasm_bindgen_futures::spawn_local;

            let view = self.view;
            spawn_local(async move {
                TimeoutFuture::new(ticket.duration_ms).await;
                view.try_update(|v| v.settle(ticket));
            });
        }
        #[cfg(feature = "ssr")]
        {
            let _ = ticket;
        }
    }
}

pub fn provide_view_context() -> ViewContext {
    let ctx = ViewContext {
        view: RwSignal::new(ViewOrchestrator::new()),
        filters: RwSignal::new(FilterState::default()),
    };

    // Body scroll lock
    #[cfg(not(feature = "ssr"))]
    {
        let overflow = Memo::new(move |_| ctx.view.with(|v| v.scroll_lock().body_overflow()));
        Effect::new(move |_| {
            let overflow = overflow.get();
            if let Some(window) = web_sys::window() {
                if let Some(document) = window.document() {
                    if let Some(body) = document.body() {
                        let _ = body.style().set_property("overflow", overflow);
                    }
                }
            }
        });
    }

    // Escape closes whatever is open
    #[cfg(not(feature = "ssr"))]
    {
        use leptos::ev::keydown;

        let handle_keydown = window_event_listener(keydown, move |ev| {
            if ev.key() == "Escape" {
                ctx.dispatch(Intent::Escape);
            }
        });

        on_cleanup(move || drop(handle_keydown));
    }

    provide_context(ctx);
    ctx
}

pub fn use_view_context() -> ViewContext {
    expect_context::<ViewContext>()
}
