//! Window scroll tracking and scroll-driven hooks
//!
//! One pair of `scroll`/`resize` listeners feeds [`ScrollContext`]; reveal
//! and pinned-section hooks derive from it by measuring their element.

use leptos::html;
use leptos::prelude::*;

use crate::core::motion::{PIN_DISTANCE, Part, PinnedTimeline, RevealTrigger, pinned_progress};
use crate::core::navigation::Section;

#[derive(Clone, Copy)]
pub struct ScrollContext {
    /// `window.scrollY`
    pub scroll_y: RwSignal<f64>,
    /// `window.innerHeight`; zero until measured in the browser
    pub viewport_height: RwSignal<f64>,
}

impl ScrollContext {
    fn measure(&self) {
        #[cfg(not(feature = "ssr"))]
        {
            if let Some(window) = web_sys::window() {
                if let Ok(y) = window.scroll_y() {
                    self.scroll_y.set(y);
                }
                if let Some(h) = window.inner_height().ok().and_then(|h| h.as_f64()) {
                    self.viewport_height.set(h);
                }
            }
        }
    }
}

pub fn provide_scroll_context() -> ScrollContext {
    let ctx = ScrollContext {
        scroll_y: RwSignal::new(0.0),
        viewport_height: RwSignal::new(0.0),
    };

    #[cfg(not(feature = "ssr"))]
    {
        use leptos::ev::{resize, scroll};

        // first measurement after hydration
        Effect::new(move |_| ctx.measure());

        let on_scroll = window_event_listener(scroll, move |_| ctx.measure());
        let on_resize = window_event_listener(resize, move |_| ctx.measure());
        on_cleanup(move || {
            drop(on_scroll);
            drop(on_resize);
        });
    }

    provide_context(ctx);
    ctx
}

pub fn use_scroll_context() -> ScrollContext {
    expect_context::<ScrollContext>()
}

/// Viewport-relative top edge of the element behind `node`
fn top_of(node: NodeRef<html::Div>) -> Option<f64> {
    #[cfg(not(feature = "ssr"))]
    {
        node.get().map(|el| el.get_bounding_client_rect().top())
    }
    #[cfg(feature = "ssr")]
    {
        let _ = node;
        None
    }
}

fn section_top(node: NodeRef<html::Section>) -> Option<f64> {
    #[cfg(not(feature = "ssr"))]
    {
        node.get().map(|el| el.get_bounding_client_rect().top())
    }
    #[cfg(feature = "ssr")]
    {
        let _ = node;
        None
    }
}

/// Whether `node` has scrolled past `trigger`. Flips back when the visitor
/// scrolls above the threshold again.
pub fn use_reveal(node: NodeRef<html::Div>, trigger: RevealTrigger) -> Memo<bool> {
    let scroll = use_scroll_context();
    Memo::new(move |_| {
        scroll.scroll_y.track();
        let viewport = scroll.viewport_height.get();
        viewport > 0.0 && top_of(node).is_some_and(|top| trigger.is_active(top, viewport))
    })
}

/// Progress in `[0, 1]` through a pinned section
pub fn use_pinned_progress(node: NodeRef<html::Section>) -> Memo<f64> {
    let scroll = use_scroll_context();
    Memo::new(move |_| {
        scroll.scroll_y.track();
        let viewport = scroll.viewport_height.get();
        section_top(node).map_or(0.0, |top| pinned_progress(top, viewport))
    })
}

/// Inline styles of a pinned section's parts, scrubbed by scroll progress
#[derive(Clone, Copy)]
pub struct PinnedStyles {
    timeline: StoredValue<PinnedTimeline>,
    progress: Memo<f64>,
}

impl PinnedStyles {
    pub fn of(self, part: Part) -> impl Fn() -> String + Copy + Send + Sync + 'static {
        move || {
            let progress = self.progress.get();
            self.timeline.with_value(|t| t.style(part, progress))
        }
    }
}

pub fn use_pinned_timeline(node: NodeRef<html::Section>, timeline: PinnedTimeline) -> PinnedStyles {
    PinnedStyles {
        timeline: StoredValue::new(timeline),
        progress: use_pinned_progress(node),
    }
}

/// Outer height of a pinned section: one viewport plus the pin distance
pub fn pin_height_style() -> String {
    format!("height: {}vh;", (100.0 * (1.0 + PIN_DISTANCE)).round())
}

/// Smooth-scroll the page to `section`
pub fn scroll_to_section(section: Section) {
    #[cfg(not(feature = "ssr"))]
    {
        if let Some(window) = web_sys::window() {
            if let Some(document) = window.document() {
                if let Some(element) = document.get_element_by_id(&section.id()) {
                    let options = web_sys::ScrollIntoViewOptions::new();
                    options.set_behavior(web_sys::ScrollBehavior::Smooth);
                    element.scroll_into_view_with_scroll_into_view_options(&options);
                }
            }
        }
    }
    #[cfg(feature = "ssr")]
    {
        tracing::trace!(%section, "scroll requested during render");
    }
}
