//! Routed pages: the single-page showcase and the 404 fallback

mod home;
mod not_found;

pub use home::HomePage;
pub use not_found::NotFoundPage;
