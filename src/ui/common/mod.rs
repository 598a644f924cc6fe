//! Building blocks shared by sections and overlays

pub mod form;
pub mod heading;
pub mod modal;

pub use form::{FormField, TextAreaField};
pub use heading::SectionHeading;
pub use modal::{CloseButton, OverlayFrame};
