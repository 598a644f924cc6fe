//! Page sections, top to bottom

mod about;
mod categories;
mod contact;
mod footer;
mod hero;
mod navigation;
mod products;
mod spotlight;

pub use about::About;
pub use categories::Categories;
pub use contact::Contact;
pub use footer::Footer;
pub use hero::Hero;
pub use navigation::Navigation;
pub use products::Products;
pub use spotlight::ProductSpotlight;
