//! Domain model and view logic of the showcase, independent of the browser

pub mod catalog;
#[cfg(feature = "ssr")]
pub mod config;
pub mod contact;
pub mod filter;
pub mod inquiry;
pub mod motion;
pub mod navigation;
pub mod orchestrator;
pub mod overlay;
pub mod scroll_lock;
pub mod seo;
#[cfg(test)]
mod tests;

pub use catalog::{Category, Product};
pub use filter::{CategoryFilter, FilterState};
pub use orchestrator::{Intent, ViewOrchestrator};
pub use overlay::{OverlayKind, OverlayPhase, TransitionTicket};
