use dioxus::prelude::*;
use trinity_types::{ContactInfo, FooterConfig};

use crate::platform::current_year;

#[component]
pub fn Footer(school_name: String, footer: FooterConfig, contact: ContactInfo) -> Element {
    let year = use_hook(current_year);

    rsx! {
        footer { class: "footer",
            div { class: "container footer-grid",
                div { class: "footer-info",
                    h3 { "{school_name}" }
                    p {
                        for line in footer.address_lines.iter() {
                            "{line}"
                            br {}
                        }
                    }
                    if let Some(email) = contact.emails.first() {
                        p { "Email: {email}" }
                    }
                    if let Some(phone) = contact.phones.first() {
                        p { "Phone: {phone}" }
                    }
                }
                div { class: "footer-links",
                    h4 { "Quick Links" }
                    ul {
                        for link in footer.quick_links.iter() {
                            li {
                                a { href: "{link.href}", "{link.label}" }
                            }
                        }
                    }
                }
            }
            div { class: "footer-bottom",
                p { "© {year} {school_name}. All rights reserved." }
            }
        }
    }
}
