//! Static content sections. Everything here renders straight from config.

use dioxus::prelude::*;
use trinity_types::{
    CardSection, ContactInfo, CtaBanner, Facility, GalleryImage, HighlightCard, LeaderCard,
};

use super::RevealSection;

#[component]
pub fn SectionHeader(title: String, #[props(default)] subtitle: String) -> Element {
    rsx! {
        div { class: "section-header text-center",
            h2 { class: "section-title", "{title}" }
            div { class: "title-underline" }
            if !subtitle.is_empty() {
                p { class: "section-subtitle", "{subtitle}" }
            }
        }
    }
}

#[component]
pub fn Highlights(section: CardSection<HighlightCard>) -> Element {
    rsx! {
        RevealSection { id: "why-trinity", class: "section-padding highlights secondary-bg",
            div { class: "container",
                SectionHeader { title: section.title.clone(), subtitle: section.subtitle.clone().unwrap_or_default() }
                div { class: "highlights-grid",
                    for (i, item) in section.items.iter().enumerate() {
                        div { key: "{i}", class: "highlight-card",
                            div { class: "card-icon", "{item.icon}" }
                            h3 { "{item.title}" }
                            p { "{item.text}" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn Facilities(section: CardSection<Facility>) -> Element {
    rsx! {
        RevealSection { id: "facilities", class: "section-padding facilities",
            div { class: "container",
                SectionHeader { title: section.title.clone(), subtitle: section.subtitle.clone().unwrap_or_default() }
                div { class: "facilities-grid",
                    for (i, facility) in section.items.iter().enumerate() {
                        div { key: "{i}", class: "facility-item",
                            div { class: "facility-image {facility.source} {facility.slice}",
                                span { class: "facility-badge", "{facility.badge}" }
                            }
                            div { class: "facility-info",
                                div { class: "facility-title-flex",
                                    span { class: "facility-icon-small", "{facility.icon}" }
                                    h3 { "{facility.title}" }
                                }
                                p { "{facility.text}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn Gallery(section: CardSection<GalleryImage>) -> Element {
    rsx! {
        RevealSection { id: "gallery", class: "section-padding gallery",
            div { class: "container",
                SectionHeader { title: section.title.clone(), subtitle: section.subtitle.clone().unwrap_or_default() }
                div { class: "gallery-grid",
                    for (i, image) in section.items.iter().enumerate() {
                        div { key: "{i}", class: "gallery-item",
                            img { src: "{image.src}", alt: "{image.alt}", "loading": "lazy" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn Leadership(section: CardSection<LeaderCard>) -> Element {
    rsx! {
        RevealSection { id: "faculty", class: "section-padding faculty",
            div { class: "container",
                SectionHeader { title: section.title.clone(), subtitle: section.subtitle.clone().unwrap_or_default() }
                div { class: "faculty-grid",
                    for (i, leader) in section.items.iter().enumerate() {
                        div { key: "{i}", class: "faculty-card",
                            div { class: "faculty-img-wrapper",
                                img { src: "{leader.image}", alt: "{leader.role}" }
                            }
                            h3 { "{leader.role}" }
                            p { "{leader.organisation}" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn CtaSection(banner: CtaBanner) -> Element {
    rsx! {
        RevealSection { id: "cta", class: "cta-banner",
            div { class: "container cta-flex",
                h2 { "{banner.heading}" }
                a { href: "{banner.link.href}", class: banner.link.style.class(), "{banner.link.label}" }
            }
        }
    }
}

#[component]
pub fn Location(contact: ContactInfo) -> Element {
    rsx! {
        RevealSection { id: "contact", class: "section-padding location",
            div { class: "container",
                SectionHeader { title: "Visit Us" }
                div { class: "location-grid",
                    div { class: "contact-card",
                        div { class: "contact-info-item",
                            span { class: "icon", "📍" }
                            div {
                                h4 { "Our Location" }
                                p { "{contact.address}" }
                            }
                        }
                        div { class: "contact-info-item",
                            span { class: "icon", "📞" }
                            div {
                                h4 { "Call Us" }
                                for phone in contact.phones.iter() {
                                    p { "{phone}" }
                                }
                            }
                        }
                        div { class: "contact-info-item",
                            span { class: "icon", "✉️" }
                            div {
                                h4 { "Email Us" }
                                for email in contact.emails.iter() {
                                    p {
                                        a { href: "mailto:{email}", "{email}" }
                                    }
                                }
                            }
                        }
                        div { class: "mt-2",
                            a {
                                href: "{contact.maps_link}",
                                target: "_blank",
                                class: "btn btn-primary w-full text-center",
                                "Open in Google Maps →"
                            }
                        }
                    }
                    div { class: "map-container",
                        iframe {
                            src: "{contact.map_embed}",
                            width: "100%",
                            height: "100%",
                            style: "border: 0",
                            "loading": "lazy",
                            allowfullscreen: true,
                        }
                    }
                }
            }
        }
    }
}
