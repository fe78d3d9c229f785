use std::rc::Rc;

use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::section_header::SectionHeader;
use crate::components::toast::ToastKind;
use crate::config::SiteConfig;
use crate::contact::draft::{ContactDraft, DraftError, DraftField};
use crate::contact::link::{build_whatsapp_link, compose_message, greeting};

fn open_in_new_tab(url: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Err(err) = window.open_with_url_and_target_and_features(url, "_blank", "noopener,noreferrer") {
        log::error!("could not open whatsapp link: {:?}", err);
    }
}

#[derive(Properties, PartialEq)]
pub struct ContactProps {
    pub config: Rc<SiteConfig>,
    pub on_notify: Callback<(ToastKind, String)>,
}

#[function_component(Contact)]
pub fn contact(props: &ContactProps) -> Html {
    let draft = use_state(ContactDraft::default);
    let missing = use_state(Vec::<DraftField>::new);

    let onsubmit = {
        let draft = draft.clone();
        let missing = missing.clone();
        let config = props.config.clone();
        let on_notify = props.on_notify.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            match draft.validate() {
                Err(DraftError::Incomplete { missing: fields }) => {
                    log::info!("contact form incomplete: {:?}", fields);
                    missing.set(fields);
                    on_notify.emit((ToastKind::Error, "Please complete all fields.".to_string()));
                }
                Ok(()) => {
                    missing.set(Vec::new());
                    let message = compose_message(&config.brand_name, &draft);
                    let url = build_whatsapp_link(&config.whatsapp_number, &message);
                    log::info!("opening whatsapp chat for {}", draft.name.trim());
                    on_notify.emit((ToastKind::Success, "Opening WhatsApp…".to_string()));
                    open_in_new_tab(&url);
                }
            }
        })
    };

    let update = |apply: fn(&mut ContactDraft, String)| {
        let draft = draft.clone();
        move |value: String| {
            let mut next = (*draft).clone();
            apply(&mut next, value);
            draft.set(next);
        }
    };
    let on_name = {
        let set = update(|d: &mut ContactDraft, v: String| d.name = v);
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            set(input.value());
        })
    };
    let on_contact = {
        let set = update(|d: &mut ContactDraft, v: String| d.contact = v);
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            set(input.value());
        })
    };
    let on_message = {
        let set = update(|d: &mut ContactDraft, v: String| d.message = v);
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            set(input.value());
        })
    };

    let field_class = |field: DraftField| classes!("field-input", missing.contains(&field).then(|| "field-error"));
    let direct_link = build_whatsapp_link(
        &props.config.whatsapp_number,
        &greeting(&props.config.brand_name),
    );

    html! {
        <section id="contact" class="contact-section">
            <div class="section-inner contact-grid">
                <div>
                    <SectionHeader
                        eyebrow="Contact"
                        title="Let’s build your presence"
                        desc="Send a note and we’ll continue on WhatsApp."
                    />
                    <div class="glass contact-info">
                        <div class="contact-row">
                            <span class="contact-label">{"WhatsApp"}</span>
                            <span class="contact-value">{&props.config.whatsapp_number}</span>
                        </div>
                        <div class="contact-row">
                            <span class="contact-label">{"Email"}</span>
                            <a class="contact-value" href={format!("mailto:{}", props.config.contact_email)}>
                                {&props.config.contact_email}
                            </a>
                        </div>
                        <div class="contact-row">
                            <span class="contact-label">{"Office"}</span>
                            <span class="contact-value">{&props.config.office_location}</span>
                        </div>
                        <a href={direct_link} target="_blank" rel="noreferrer" class="cta cta-primary">
                            {"Instant Connect"}
                        </a>
                    </div>
                </div>
                <form class="glass contact-form" onsubmit={onsubmit}>
                    <label for="contact-name">{"Name"}</label>
                    <input
                        id="contact-name"
                        type="text"
                        class={field_class(DraftField::Name)}
                        placeholder="Your full name"
                        value={draft.name.clone()}
                        oninput={on_name}
                    />
                    <label for="contact-contact">{"Email or phone"}</label>
                    <input
                        id="contact-contact"
                        type="text"
                        class={field_class(DraftField::Contact)}
                        placeholder={props.config.email_placeholder.clone()}
                        value={draft.contact.clone()}
                        oninput={on_contact}
                    />
                    <label for="contact-message">{"Project Brief"}</label>
                    <textarea
                        id="contact-message"
                        class={field_class(DraftField::Message)}
                        placeholder="Tell us about your vision..."
                        value={draft.message.clone()}
                        oninput={on_message}
                    />
                    <button type="submit" class="cta cta-primary">{"Confirm & Launch"}</button>
                    <p class="form-note">{"Opens Secure WhatsApp Chat"}</p>
                </form>
            </div>
        </section>
    }
}
