//! Contact block

use crate::app::AppState;
use crate::components::Section;
use crate::formatters::{mailto_href, tel_href};
use leptos::prelude::*;

#[component]
pub(crate) fn ContactSection() -> impl IntoView {
    let state = expect_context::<AppState>();
    let contact = state.content.contact.clone();
    let mailto = mailto_href(&contact.email);

    view! {
        <Section id="contact" title="Contact" tone="navy">
            <div class="contact">
                <p class="contact__tagline">{contact.tagline}</p>
                <p>
                    "Email: "
                    <a href=mailto class="link">{contact.email}</a>
                </p>
                {contact.phones.into_iter().map(|phone| {
                    let href = tel_href(&phone);
                    view! {
                        <p>
                            "Phone: "
                            <a href=href class="link">{phone}</a>
                        </p>
                    }
                }).collect_view()}
            </div>
        </Section>
    }
}
