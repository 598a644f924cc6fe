//! Contact details and outbound deep links
//!
//! Ordering happens off-site: every "buy" affordance resolves to one of these
//! links (WhatsApp chat, Instagram profile, mail or phone).

use super::catalog::Product;

/// WhatsApp number in international format without `+`
pub const WHATSAPP_NUMBER: &str = "2349027026576";
pub const PHONE_DISPLAY: &str = "+234 902 702 6576";
pub const INSTAGRAM_HANDLE: &str = "zeraxii_";
pub const EMAIL: &str = "contact@zeraxii.com";
pub const LOCATION: &str = "Lagos, Nigeria";
pub const BUSINESS_HOURS: &str = "Monday - Saturday: 9AM - 6PM";

const WHATSAPP_BASE: &str = "https://wa.me";

/// Pre-filled chat message for ordering `product_name`
pub fn order_message(product_name: &str) -> String {
    format!(
        "Hello ZERA XII, I'm interested in ordering the {}. Could you please provide more details about pricing and availability?",
        product_name
    )
}

/// WhatsApp chat with the order message for `product` pre-filled
pub fn whatsapp_order_link(product: &Product) -> String {
    format!(
        "{}?text={}",
        whatsapp_link(),
        urlencoding::encode(&order_message(&product.name))
    )
}

/// WhatsApp chat without a message
pub fn whatsapp_link() -> String {
    format!("{}/{}", WHATSAPP_BASE, WHATSAPP_NUMBER)
}

pub fn instagram_url() -> String {
    format!("https://instagram.com/{}", INSTAGRAM_HANDLE)
}

pub fn instagram_display() -> String {
    format!("@{}", INSTAGRAM_HANDLE)
}

pub fn mailto_link() -> String {
    format!("mailto:{}", EMAIL)
}

pub fn tel_link() -> String {
    format!("tel:+{}", WHATSAPP_NUMBER)
}
