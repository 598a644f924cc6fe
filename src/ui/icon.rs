use leptos::prelude::*;

/// Line icon served from `/icons/{name}.svg`
#[component]
pub fn Icon(
    /// Icon file name without the .svg extension
    name: &'static str,
    /// Sizing and color classes
    #[prop(default = "zera-icon")]
    class: &'static str,
) -> impl IntoView {
    let icon_path = format!("/icons/{}.svg", name);

    view! {
        <img
            src=icon_path
            class=class
            alt=""
            aria-hidden="true"
            draggable=false
        />
    }
}

/// Icon names shipped in `public/icons`
pub mod icons {
    pub const ARROW_RIGHT: &str = "arrow-right";
    pub const CHECK: &str = "check";
    pub const CROWN: &str = "crown";
    pub const INSTAGRAM: &str = "instagram";
    pub const MAIL: &str = "mail";
    pub const MAP_PIN: &str = "map-pin";
    pub const MENU: &str = "menu";
    pub const MESSAGE_CIRCLE: &str = "message-circle";
    pub const PHONE: &str = "phone";
    pub const SEARCH: &str = "search";
    pub const SEND: &str = "send";
    pub const SHOPPING_BAG: &str = "shopping-bag";
    pub const SPARKLES: &str = "sparkles";
    pub const X: &str = "x";
}
