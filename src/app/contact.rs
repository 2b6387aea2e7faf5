use leptos::prelude::*;

use crate::profile::{Contact, Heading};

use super::{nav::Section, reveal::Reveal, sections::SectionHeading};

const BUILD_TIME: &str = env!("BUILD_TIME");

/// Year the site was built, taken from the RFC 3339 build timestamp.
pub fn copyright_year() -> &'static str {
    BUILD_TIME.get(..4).unwrap_or_default()
}

#[component]
fn ContactItem(icon: &'static str, children: Children) -> impl IntoView {
    view! {
        <div class="contact-item">
            <div class="contact-icon">
                <i class=format!("bi {icon}")></i>
            </div>
            <div class="contact-text">{children()}</div>
        </div>
    }
}

#[component]
pub fn ContactSection(heading: Heading, contact: Contact) -> impl IntoView {
    let mailto = contact.mailto_href();
    let tel = contact.tel_href();
    let linkedin = contact.linkedin_url();
    let (email_button, linkedin_button) = (mailto.clone(), linkedin.clone());
    let linkedin_display = contact.linkedin_display();
    let Contact {
        email,
        phone,
        location,
        ..
    } = contact;

    view! {
        <section id=Section::Contact.id() class="luxury-section">
            <div class="mx-auto max-w-4xl px-4">
                <SectionHeading heading />
                <Reveal delay_ms=200 class="contact-info">
                    <div class="grid gap-4 md:grid-cols-2">
                        <ContactItem icon="bi-envelope">
                            <a href=mailto class="contact-link">
                                {email}
                            </a>
                        </ContactItem>
                        <ContactItem icon="bi-phone">
                            <a href=tel class="contact-link">
                                {phone}
                            </a>
                        </ContactItem>
                        <ContactItem icon="bi-linkedin">
                            <a
                                href=linkedin
                                target="_blank"
                                rel="noopener noreferrer"
                                class="contact-link"
                            >
                                {linkedin_display}
                            </a>
                        </ContactItem>
                        <ContactItem icon="bi-geo-alt">{location}</ContactItem>
                    </div>
                    <div class="mt-6 flex flex-wrap justify-center gap-3">
                        <a href=email_button target="_blank" class="btn btn-luxury">
                            <i class="bi bi-envelope mr-2"></i>
                            "Send Email"
                        </a>
                        <a
                            href=linkedin_button
                            target="_blank"
                            rel="noopener noreferrer"
                            class="btn btn-outline-luxury"
                        >
                            <i class="bi bi-linkedin mr-2"></i>
                            "Connect on LinkedIn"
                        </a>
                    </div>
                </Reveal>
            </div>
        </section>
    }
}

#[component]
pub fn Footer(#[prop(into)] name: String, #[prop(into)] tagline: String) -> impl IntoView {
    view! {
        <footer class="luxury-section py-4 text-center">
            <p class="luxury-subtitle mb-0">
                {format!("© {} {name}. {tagline}", copyright_year())}
            </p>
        </footer>
    }
}
