pub mod common;
pub mod icon;
pub mod overlays;
pub mod pages;
pub mod scroll;
pub mod sections;
pub mod view_context;

pub use icon::{Icon, icons};

/// Keyframes in style/main.css animating from `--zera-from-*` to rest
pub const ENTER_KEYFRAMES: &str = "zera-enter";
