//! Inquiry form and direct-contact card

use leptos::html;
use leptos::prelude::*;

use crate::core::contact::{
    BUSINESS_HOURS, PHONE_DISPLAY, instagram_display, instagram_url, tel_link, whatsapp_link,
};
use crate::core::inquiry::{CONFIRMATION_MS, InquiryError, InquiryField, InquiryForm};
use crate::core::motion::{
    CONTACT_CARD_REVEAL, CONTACT_FORM_REVEAL, CONTACT_HEADLINE_REVEAL, RevealTrigger,
};
use crate::core::navigation::Section;
use crate::ui::common::{FormField, SectionHeading, TextAreaField};
use crate::ui::icon::{Icon, icons};
use crate::ui::scroll::use_reveal;

#[component]
pub fn Contact() -> impl IntoView {
    let form_node = NodeRef::<html::Div>::new();
    let form_revealed = use_reveal(form_node, RevealTrigger::HEADLINE);
    let card_node = NodeRef::<html::Div>::new();
    let card_revealed = use_reveal(card_node, RevealTrigger::CARDS);

    view! {
        <section id=Section::Contact.id() class="zera-section zera-section--burgundy">
            <div class="zera-container zera-container--narrow">
                <SectionHeading label="GET IN TOUCH" title="Acquire a Piece" reveal=CONTACT_HEADLINE_REVEAL />

                <div class="zera-contact">
                    <div node_ref=form_node style=move || CONTACT_FORM_REVEAL.style(form_revealed.get())>
                        <p class="zera-contact__intro">
                            "Tell us what you're drawn to. We'll confirm availability, sizing, and delivery details."
                        </p>
                        <InquiryFormView />
                    </div>

                    <div node_ref=card_node style=move || CONTACT_CARD_REVEAL.style(card_revealed.get())>
                        <ContactCard />
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn InquiryFormView() -> impl IntoView {
    let form = RwSignal::new(InquiryForm::new());
    let error = RwSignal::new(None::<InquiryError>);

    let value = move |field: InquiryField| Signal::derive(move || form.with(|f| f.get(field).to_string()));
    let on_input = move |field: InquiryField| {
        Callback::new(move |text: String| {
            form.update(|f| f.set(field, text));
            // editing the offending field clears its message
            if error.with_untracked(|e| e.as_ref().is_some_and(|e| e.field() == field)) {
                error.set(None);
            }
        })
    };
    let error_for = move |field: InquiryField| {
        Signal::derive(move || {
            error.with(|e| e.as_ref().filter(|e| e.field() == field).map(|e| e.to_string()))
        })
    };
    let is_sent = Memo::new(move |_| form.with(|f| f.is_sent()));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let result = form.try_update(|f| f.submit()).unwrap_or(Ok(None));
        match result {
            Ok(Some(_)) => {
                error.set(None);
                reset_after_confirmation(form);
            }
            Ok(None) => {}
            Err(err) => error.set(Some(err)),
        }
    };

    view! {
        <form class="zera-form" novalidate=true on:submit=on_submit>
            <div class="zera-form__row">
                <FormField
                    label="NAME"
                    name="name"
                    placeholder="Your name"
                    required=true
                    value=value(InquiryField::Name)
                    on_input=on_input(InquiryField::Name)
                    error=error_for(InquiryField::Name)
                />
                <FormField
                    label="EMAIL"
                    name="email"
                    input_type="email"
                    placeholder="your@email.com"
                    required=true
                    value=value(InquiryField::Email)
                    on_input=on_input(InquiryField::Email)
                    error=error_for(InquiryField::Email)
                />
            </div>
            <FormField
                label="PIECE OF INTEREST"
                name="piece"
                placeholder="Which piece are you interested in?"
                value=value(InquiryField::Piece)
                on_input=on_input(InquiryField::Piece)
            />
            <TextAreaField
                label="MESSAGE"
                name="message"
                placeholder="Tell us more about your inquiry..."
                value=value(InquiryField::Message)
                on_input=on_input(InquiryField::Message)
            />

            <button type="submit" class="zera-button zera-button--gold zera-button--block" disabled=move || is_sent.get()>
                {move || {
                    if is_sent.get() {
                        view! {
                            <Icon name=icons::CHECK />
                            <span>"Message Sent!"</span>
                        }
                            .into_any()
                    } else {
                        view! {
                            <Icon name=icons::SEND />
                            <span>"Send Inquiry"</span>
                        }
                            .into_any()
                    }
                }}
            </button>
        </form>
    }
}

/// Clear the form once the confirmation has been shown
fn reset_after_confirmation(form: RwSignal<InquiryForm>) {
    #[cfg(not(feature = "ssr"))]
    {
        use gloo_timers::future::TimeoutFuture;
        use wasm_bindgen_futures::spawn_local;

        spawn_local(async move {
            TimeoutFuture::new(CONFIRMATION_MS).await;
            form.try_update(|f| f.reset());
        });
    }
    #[cfg(feature = "ssr")]
    {
        let _ = (form, CONFIRMATION_MS);
    }
}

#[component]
fn ContactCard() -> impl IntoView {
    view! {
        <div class="zera-contact-card">
            <div class="zera-accent" aria-hidden="true">
                <Icon name=icons::CROWN class="zera-icon zera-icon--gold" />
                <span class="zera-rule"></span>
            </div>
            <h3 class="zera-contact-card__title">"Prefer to message?"</h3>
            <p class="zera-contact-card__lead">"Reach out to us directly for immediate assistance"</p>

            <div class="zera-contact-card__links">
                <ContactLink
                    href=whatsapp_link()
                    icon=icons::MESSAGE_CIRCLE
                    label="WHATSAPP"
                    value=PHONE_DISPLAY.to_string()
                    class="zera-contact-link zera-contact-link--whatsapp"
                />
                <ContactLink
                    href=instagram_url()
                    icon=icons::INSTAGRAM
                    label="INSTAGRAM"
                    value=instagram_display()
                />
                <ContactLink
                    href=tel_link()
                    icon=icons::PHONE
                    label="PHONE"
                    value=PHONE_DISPLAY.to_string()
                    new_tab=false
                />
            </div>

            <div class="zera-divider" aria-hidden="true"></div>

            <div class="zera-contact-card__hours">
                <p class="zera-label zera-gold">"BUSINESS HOURS"</p>
                <p>{BUSINESS_HOURS}</p>
            </div>
        </div>
    }
}

#[component]
fn ContactLink(
    href: String,
    icon: &'static str,
    label: &'static str,
    value: String,
    #[prop(default = "zera-contact-link")] class: &'static str,
    #[prop(default = true)] new_tab: bool,
) -> impl IntoView {
    view! {
        <a
            href=href
            class=class
            target=new_tab.then_some("_blank")
            rel=new_tab.then_some("noopener noreferrer")
        >
            <Icon name=icon />
            <span class="zera-contact-link__text">
                <span class="zera-label">{label}</span>
                <span>{value}</span>
            </span>
        </a>
    }
}
