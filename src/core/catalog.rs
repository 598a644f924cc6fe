//! Static product catalog
//!
//! Products and categories are defined once and never change at runtime.
//! Everything here is a plain lookup over the in-memory lists.

use std::sync::LazyLock;

/// Root under which catalog image paths are served
pub const ASSET_ROOT: &str = "/images";

/// A piece of jewelry in the catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    pub id: String,
    pub name: String,
    /// Id of the owning [`Category`]
    pub category: String,
    pub description: String,
    pub full_description: String,
    pub image: String,
    pub price: Option<String>,
}

/// A browsable product category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub image: String,
    pub description: String,
}

/// Filter chip shown above the product grid: `(category id, label)`
pub const FILTER_CHIPS: [(&str, &str); 5] = [
    ("all", "All Pieces"),
    ("rings", "Rings"),
    ("necklaces", "Necklaces"),
    ("watches", "Watches"),
    ("earrings", "Earrings"),
];

/// Products given a pinned spotlight section, in display order
pub const FEATURED_PRODUCT_IDS: [&str; 2] = ["eternity-band", "heritage-timepiece"];

const CONTACT_FOR_PRICE: &str = "Contact for Price";

static CATEGORIES: LazyLock<Vec<Category>> = LazyLock::new(|| {
    [
        ("rings", "Rings", "category-rings.jpg", "Engagement & Wedding Rings"),
        ("necklaces", "Necklaces", "category-necklace.jpg", "Chains & Pendants"),
        ("earrings", "Earrings", "category-earrings.jpg", "Stud & Drop Earrings"),
        ("watches", "Watches", "category-watches.jpg", "Luxury Timepieces"),
        ("bracelets", "Bracelets", "category-bracelets.jpg", "Wrist Accessories"),
        ("couple", "Couple Sets", "category-couple.jpg", "Matching Jewelry"),
    ]
    .into_iter()
    .map(|(id, name, image, description)| Category {
        id: id.to_string(),
        name: name.to_string(),
        image: asset_path(image),
        description: description.to_string(),
    })
    .collect()
});

static PRODUCTS: LazyLock<Vec<Product>> = LazyLock::new(|| {
    vec![
        Product::listed(
            "royal-solitaire",
            "Royal Solitaire",
            "rings",
            "Crowning elegance in pure gold",
            "A magnificent solitaire diamond ring that captures the essence of eternal love. Set in pure 18K gold with exceptional craftsmanship that speaks of timeless luxury.",
            "hero-ring.jpg",
        ),
        Product::listed(
            "eternity-band",
            "Eternity Band",
            "rings",
            "A continuous circle of light",
            "A continuous circle of light, set in polished gold for everyday permanence. This exquisite eternity band features meticulously set diamonds that sparkle from every angle.",
            "product-ring-band.jpg",
        ),
        Product::listed(
            "gilded-chain",
            "Gilded Chain",
            "necklaces",
            "Weight that feels expensive",
            "Weight that feels expensive, links that lie perfectly, made to layer or stand alone. This gilded chain necklace is a statement piece for any occasion.",
            "product-necklace.jpg",
        ),
        Product::listed(
            "solitaire-drop",
            "Solitaire Drop",
            "necklaces",
            "A single point of focus",
            "A single point of focus, set to move with you, gleam without glare. This solitaire pendant features a brilliant diamond suspended from a delicate gold chain.",
            "product-pendant.jpg",
        ),
        Product::listed(
            "heritage-timepiece",
            "Heritage Timepiece",
            "watches",
            "Tradition made modern",
            "Clean indices, warm leather, and a case that feels like tradition made modern. This heritage timepiece combines classic design with contemporary elegance.",
            "product-watch.jpg",
        ),
        Product::listed(
            "pearl-droplets",
            "Pearl Droplets",
            "earrings",
            "Soft luster, quiet movement",
            "Soft luster, quiet movement, designed to catch light without asking for it. These pearl drop earrings feature lustrous pearls suspended from delicate gold hooks.",
            "product-earrings.jpg",
        ),
        Product::listed(
            "cuff-link",
            "Cuff & Link",
            "bracelets",
            "Architecture for your wrist",
            "A bracelet that sits like architecture: polished planes, soft edges, effortless closure. This cuff bracelet combines modern design with timeless elegance.",
            "product-bracelet.jpg",
        ),
        Product::listed(
            "union-bands",
            "Union Bands",
            "couple",
            "Two finishes, one intention",
            "Two finishes, one intention: rings designed to belong together, even when apart. These matching couple bands symbolize eternal love and commitment.",
            "product-couple-rings.jpg",
        ),
    ]
});

impl Product {
    fn listed(
        id: &str,
        name: &str,
        category: &str,
        description: &str,
        full_description: &str,
        image: &str,
    ) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            category: category.to_string(),
            description: description.to_string(),
            full_description: full_description.to_string(),
            image: asset_path(image),
            price: Some(CONTACT_FOR_PRICE.to_string()),
        }
    }

    /// Upper-cased category id, as printed on badges and labels
    pub fn category_label(&self) -> String {
        self.category.to_uppercase()
    }

    /// Price text, falling back to the on-request wording
    pub fn price_label(&self) -> &str {
        self.price.as_deref().unwrap_or(CONTACT_FOR_PRICE)
    }
}

/// Resolve an image file name against [`ASSET_ROOT`]
pub fn asset_path(file_name: &str) -> String {
    format!("{}/{}", ASSET_ROOT, file_name.trim_start_matches('/'))
}

/// The full catalog, in display order
pub fn products() -> &'static [Product] {
    &PRODUCTS
}

/// All categories, in display order
pub fn categories() -> &'static [Category] {
    &CATEGORIES
}

pub fn product_by_id(id: &str) -> Option<&'static Product> {
    products().iter().find(|p| p.id == id)
}

pub fn category_by_id(id: &str) -> Option<&'static Category> {
    categories().iter().find(|c| c.id == id)
}

/// Products whose category equals `category_id`, order preserved
pub fn products_by_category(category_id: &str) -> Vec<&'static Product> {
    products()
        .iter()
        .filter(|p| p.category == category_id)
        .collect()
}

/// Products shown in pinned spotlight sections
pub fn featured_products() -> Vec<&'static Product> {
    FEATURED_PRODUCT_IDS
        .iter()
        .filter_map(|id| product_by_id(id))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_sizes() {
        assert_eq!(products().len(), 8);
        assert_eq!(categories().len(), 6);
    }

    #[test]
    fn test_ids_are_unique() {
        let product_ids: HashSet<_> = products().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(product_ids.len(), products().len());

        let category_ids: HashSet<_> = categories().iter().map(|c| c.id.as_str()).collect();
        assert_eq!(category_ids.len(), categories().len());
    }

    #[test]
    fn test_every_product_references_known_category() {
        for product in products() {
            assert!(
                category_by_id(&product.category).is_some(),
                "{} has unknown category {}",
                product.id,
                product.category
            );
        }
    }

    #[test]
    fn test_product_by_id() {
        let product = product_by_id("pearl-droplets").unwrap();
        assert_eq!(product.name, "Pearl Droplets");
        assert_eq!(product.category, "earrings");

        assert!(product_by_id("missing").is_none());
    }

    #[test]
    fn test_products_by_category() {
        let rings: Vec<_> = products_by_category("rings")
            .into_iter()
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(rings, vec!["royal-solitaire", "eternity-band"]);

        assert!(products_by_category("tiaras").is_empty());
    }

    #[test]
    fn test_image_paths_resolve_under_asset_root() {
        for product in products() {
            assert!(product.image.starts_with("/images/"));
        }
        assert_eq!(asset_path("/hero-ring.jpg"), "/images/hero-ring.jpg");
        assert_eq!(
            category_by_id("couple").unwrap().image,
            "/images/category-couple.jpg"
        );
    }

    #[test]
    fn test_labels() {
        let product = product_by_id("cuff-link").unwrap();
        assert_eq!(product.category_label(), "BRACELETS");
        assert_eq!(product.price_label(), "Contact for Price");
    }

    #[test]
    fn test_featured_products_exist() {
        let featured = featured_products();
        assert_eq!(featured.len(), FEATURED_PRODUCT_IDS.len());
        assert_eq!(featured[0].id, "eternity-band");
    }

    #[test]
    fn test_filter_chips_reference_known_categories() {
        for (id, _) in FILTER_CHIPS.iter().skip(1) {
            assert!(category_by_id(id).is_some());
        }
        assert_eq!(FILTER_CHIPS[0], ("all", "All Pieces"));
    }
}
