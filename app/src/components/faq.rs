use dioxus::prelude::*;
use trinity_core::FaqAccordion;
use trinity_types::{CardSection, FaqEntry};

use super::RevealSection;
use super::sections::SectionHeader;

/// FAQ list where at most one answer is open.
#[component]
pub fn Faq(section: CardSection<FaqEntry>) -> Element {
    let mut accordion = use_signal(FaqAccordion::new);

    rsx! {
        RevealSection { id: "faq", class: "section-padding faq-section",
            div { class: "container",
                SectionHeader { title: section.title.clone(), subtitle: section.subtitle.clone().unwrap_or_default() }
                div { class: "faq-grid",
                    for (i, entry) in section.items.iter().enumerate() {
                        div {
                            key: "{i}",
                            class: if accordion.read().is_open(i) { "faq-item active" } else { "faq-item" },
                            onclick: move |_| accordion.write().toggle(i),
                            div { class: "faq-question",
                                h4 { "{entry.question}" }
                                span { class: "faq-icon", "{accordion.read().icon(i)}" }
                            }
                            div { class: "faq-answer",
                                p { "{entry.answer}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
