use leptos::html;
use leptos::prelude::*;

use crate::core::motion::{HEADLINE_REVEAL, Reveal, RevealTrigger, SUBHEAD_REVEAL};
use crate::ui::icon::{Icon, icons};
use crate::ui::scroll::use_reveal;

/// Crown accent, small caps label and a headline that rises in when the
/// heading reaches 80% of the viewport
#[component]
pub fn SectionHeading(
    label: &'static str,
    title: &'static str,
    #[prop(optional)] lead: Option<&'static str>,
    #[prop(default = HEADLINE_REVEAL)] reveal: Reveal,
) -> impl IntoView {
    let node = NodeRef::<html::Div>::new();
    let revealed = use_reveal(node, RevealTrigger::HEADLINE);

    view! {
        <div class="zera-section-heading" node_ref=node>
            <div class="zera-accent zera-accent--center" aria-hidden="true">
                <span class="zera-rule"></span>
                <Icon name=icons::CROWN class="zera-icon zera-icon--gold" />
                <span class="zera-rule zera-rule--flip"></span>
            </div>
            <span class="zera-label zera-gold">{label}</span>
            <h2 class="zera-section-title" style=move || reveal.style(revealed.get())>{title}</h2>
            {lead.map(|text| view! {
                <p class="zera-lead" style=move || SUBHEAD_REVEAL.style(revealed.get())>{text}</p>
            })}
        </div>
    }
}
