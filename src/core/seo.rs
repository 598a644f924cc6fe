//! Search metadata of the home page

use serde::Serialize;
use serde_json::{Value, json};

use crate::core::catalog::{Product, products};
use crate::core::contact::{EMAIL, LOCATION, WHATSAPP_NUMBER, instagram_url};

pub const SITE_URL: &str = "https://zeraxii.com/";
pub const TITLE: &str = "ZERA XII | Luxury Jewelry";
pub const DESCRIPTION: &str = "Timeless luxury jewelry crafted in Lagos. Rings, necklaces, earrings, watches and bracelets made to order.";
pub const KEYWORDS: &str = "luxury jewelry, engagement rings, gold necklaces, diamond earrings, watches, bracelets, Lagos jeweler";
pub const OG_IMAGE: &str = "https://zeraxii.com/images/og-image.jpg";

/// schema.org `Offer` for one catalog piece; prices are given on request
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogOffer {
    #[serde(rename = "@type")]
    kind: &'static str,
    availability: &'static str,
    item_offered: OfferedItem,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OfferedItem {
    #[serde(rename = "@type")]
    kind: &'static str,
    name: String,
    description: String,
    category: String,
    /// Absolute image URL
    image: String,
}

impl From<&Product> for CatalogOffer {
    fn from(product: &Product) -> Self {
        Self {
            kind: "Offer",
            availability: "https://schema.org/InStock",
            item_offered: OfferedItem {
                kind: "Product",
                name: product.name.clone(),
                description: product.description.clone(),
                category: product.category.clone(),
                image: format!("{}{}", SITE_URL.trim_end_matches('/'), product.image),
            },
        }
    }
}

/// The whole catalog as an `OfferCatalog`
pub fn offer_catalog() -> Value {
    let offers: Vec<CatalogOffer> = products().iter().map(CatalogOffer::from).collect();
    json!({
        "@type": "OfferCatalog",
        "name": "ZERA XII Collection",
        "itemListElement": offers,
    })
}

/// schema.org `JewelryStore` description embedded as JSON-LD
pub fn structured_data() -> Value {
    json!({
        "@context": "https://schema.org",
        "@type": "JewelryStore",
        "name": "ZERA XII",
        "description": DESCRIPTION,
        "url": SITE_URL,
        "image": OG_IMAGE,
        "email": EMAIL,
        "telephone": format!("+{}", WHATSAPP_NUMBER),
        "address": {
            "@type": "PostalAddress",
            "addressLocality": LOCATION.split(',').next().unwrap_or(LOCATION).trim(),
            "addressCountry": "NG",
        },
        "openingHours": "Mo-Sa 09:00-18:00",
        "sameAs": [instagram_url()],
        "hasOfferCatalog": offer_catalog(),
    })
}
