use leptos::prelude::*;

use crate::core::contact::{
    EMAIL, LOCATION, PHONE_DISPLAY, instagram_display, instagram_url, mailto_link, tel_link,
    whatsapp_link,
};
use crate::core::navigation::FOOTER_LINKS;
use crate::ui::icon::{Icon, icons};
use crate::ui::scroll::scroll_to_section;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="zera-footer">
            <div class="zera-container">
                <div class="zera-footer__grid">
                    // Brand
                    <div class="zera-footer__brand">
                        <div class="zera-footer__logo">
                            <Icon name=icons::CROWN class="zera-icon zera-icon--gold" />
                            <h3 class="zera-wordmark">"ZERA " <span class="zera-gold">"XII"</span></h3>
                        </div>
                        <p class="zera-footer__lead">
                            "Adorned In Elegance, Defined By You. Luxury jewelry crafted for those who appreciate the finer details of life."
                        </p>
                        <div class="zera-footer__social">
                            <a class="zera-icon-button" href=instagram_url() target="_blank" rel="noopener noreferrer" aria-label="Instagram">
                                <Icon name=icons::INSTAGRAM />
                            </a>
                            <a class="zera-icon-button" href=whatsapp_link() target="_blank" rel="noopener noreferrer" aria-label="WhatsApp">
                                <Icon name=icons::MESSAGE_CIRCLE />
                            </a>
                            <a class="zera-icon-button" href=mailto_link() aria-label="Email">
                                <Icon name=icons::MAIL />
                            </a>
                        </div>
                    </div>

                    // Quick links
                    <div>
                        <h4 class="zera-label zera-gold">"QUICK LINKS"</h4>
                        <ul class="zera-footer__list">
                            {FOOTER_LINKS
                                .into_iter()
                                .map(|(section, label)| view! {
                                    <li>
                                        <button class="zera-footer__link" on:click=move |_| scroll_to_section(section)>
                                            {label}
                                        </button>
                                    </li>
                                })
                                .collect_view()}
                        </ul>
                    </div>

                    // Contact
                    <div>
                        <h4 class="zera-label zera-gold">"CONTACT"</h4>
                        <ul class="zera-footer__list">
                            <li>
                                <Icon name=icons::PHONE class="zera-icon zera-icon--small" />
                                <a href=tel_link()>{PHONE_DISPLAY}</a>
                            </li>
                            <li>
                                <Icon name=icons::INSTAGRAM class="zera-icon zera-icon--small" />
                                <a href=instagram_url() target="_blank" rel="noopener noreferrer">{instagram_display()}</a>
                            </li>
                            <li>
                                <Icon name=icons::MAIL class="zera-icon zera-icon--small" />
                                <a href=mailto_link()>{EMAIL}</a>
                            </li>
                            <li>
                                <Icon name=icons::MAP_PIN class="zera-icon zera-icon--small" />
                                <span>{LOCATION}</span>
                            </li>
                        </ul>
                    </div>
                </div>

                // Bottom bar
                <div class="zera-footer__bottom">
                    <span>"© 2024 ZERA XII. All rights reserved."</span>
                    <span class="zera-footer__tagline">"Crafted with elegance for the discerning few."</span>
                </div>
            </div>
        </footer>
    }
}
