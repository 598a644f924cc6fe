//! The showcase page
//!
//! Every section lives on one scrolling page. Overlays are mounted once at
//! the end and driven through the shared view context.

use leptos::prelude::*;
use leptos_meta::{Link, Meta, Title};

use crate::core::catalog::featured_products;
use crate::core::seo::{DESCRIPTION, KEYWORDS, OG_IMAGE, SITE_URL, TITLE, structured_data};
use crate::ui::overlays::{CartDrawer, ProductDetailModal, SearchModal};
use crate::ui::scroll::provide_scroll_context;
use crate::ui::sections::{
    About, Categories, Contact, Footer, Hero, Navigation, ProductSpotlight, Products,
};
use crate::ui::view_context::provide_view_context;

#[component]
pub fn HomePage() -> impl IntoView {
    provide_scroll_context();
    provide_view_context();

    view! {
        <SeoMeta />

        <div class="zera-page">
            <Navigation />

            <main>
                <Hero />
                <About />
                {featured_products()
                    .into_iter()
                    .enumerate()
                    .map(|(index, product)| view! { <ProductSpotlight product=product index=index /> })
                    .collect_view()}
                <Categories />
                <Products />
                <Contact />
            </main>

            <Footer />

            <ProductDetailModal />
            <SearchModal />
            <CartDrawer />
        </div>
    }
}

#[component]
fn SeoMeta() -> impl IntoView {
    view! {
        <Title text=TITLE />

        <Meta name="description" content=DESCRIPTION />
        <Meta name="keywords" content=KEYWORDS />

        // Open Graph
        <Meta property="og:type" content="website" />
        <Meta property="og:url" content=SITE_URL />
        <Meta property="og:title" content=TITLE />
        <Meta property="og:description" content=DESCRIPTION />
        <Meta property="og:image" content=OG_IMAGE />

        <Meta property="twitter:card" content="summary_large_image" />
        <Meta property="twitter:title" content=TITLE />
        <Meta property="twitter:description" content=DESCRIPTION />
        <Meta property="twitter:image" content=OG_IMAGE />

        <Link rel="canonical" href=SITE_URL />

        <script type="application/ld+json" inner_html=structured_data().to_string()></script>
    }
}
