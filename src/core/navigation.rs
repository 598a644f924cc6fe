//! Page sections and in-page navigation

use derive_more::Display;

/// Scroll offset after which the navigation bar switches to its solid style (px)
pub const SCROLLED_THRESHOLD: f64 = 100.0;

/// Anchor targets on the single page, in document order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Section {
    #[display("hero")]
    Hero,
    #[display("about")]
    About,
    #[display("categories")]
    Categories,
    #[display("products")]
    Products,
    #[display("contact")]
    Contact,
}

impl Section {
    /// DOM id of the section element
    pub fn id(self) -> String {
        self.to_string()
    }

    pub fn href(self) -> String {
        format!("#{}", self)
    }
}

/// Header links
pub const NAV_LINKS: [(Section, &str); 3] = [
    (Section::Products, "Collections"),
    (Section::Categories, "Categories"),
    (Section::Contact, "Contact"),
];

/// Footer quick links
pub const FOOTER_LINKS: [(Section, &str); 3] = [
    (Section::Products, "Collections"),
    (Section::Categories, "Categories"),
    (Section::Contact, "Contact Us"),
];

pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > SCROLLED_THRESHOLD
}

/// Where a click on a category card leads. The grid is not filtered; the
/// visitor lands on the full listing.
pub fn category_target(_category_id: &str) -> Section {
    Section::Products
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scrolled_threshold_is_exclusive() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(100.0));
        assert!(is_scrolled(100.5));
    }

    #[test]
    fn test_section_ids() {
        assert_eq!(Section::Products.id(), "products");
        assert_eq!(Section::Contact.href(), "#contact");
    }

    #[test]
    fn test_category_click_goes_to_listing() {
        assert_eq!(category_target("rings"), Section::Products);
        assert_eq!(category_target("unknown"), Section::Products);
    }

    #[test]
    fn test_footer_labels() {
        assert_eq!(FOOTER_LINKS[2], (Section::Contact, "Contact Us"));
        assert_eq!(NAV_LINKS.map(|(s, _)| s), FOOTER_LINKS.map(|(s, _)| s));
    }
}
