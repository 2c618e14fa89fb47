use dioxus::prelude::*;
use trinity_types::{HeroConfig, HeroStat};

use super::Counter;

#[component]
pub fn Hero(hero: HeroConfig, threshold: f64) -> Element {
    let (current, trail) = match hero.breadcrumb.split_last() {
        Some((last, rest)) => (last.clone(), rest.to_vec()),
        None => (String::new(), Vec::new()),
    };

    rsx! {
        section { class: "hero-modern",
            div { class: "hero-bg-image-container",
                img {
                    src: "{hero.background_image}",
                    alt: "Campus",
                    class: "hero-bg-image",
                }
            }
            div { class: "hero-overlay-dark" }
            div { class: "container hero-container fade-in",
                div { class: "hero-breadcrumb",
                    for crumb in trail {
                        "{crumb} / "
                    }
                    span { class: "active-crumb", "{current}" }
                }
                div { class: "hero-content-modern",
                    div { class: "hero-badge", "{hero.badge}" }
                    h1 { class: "hero-title", "{hero.title}" }
                    p { class: "hero-motto", "{hero.motto}" }
                    div { class: "hero-stats",
                        for stat in hero.stats.iter() {
                            div { class: "stat-item",
                                span { class: "stat-number",
                                    match stat {
                                        HeroStat::Counter { .. } => rsx! {
                                            if let Some(counter) = stat.counter() {
                                                Counter { counter, threshold }
                                            }
                                        },
                                        HeroStat::Text { value, .. } => rsx! { "{value}" },
                                    }
                                }
                                span { class: "stat-label", "{stat.label()}" }
                            }
                        }
                    }
                    div { class: "hero-actions",
                        for action in hero.actions.iter() {
                            a {
                                href: "{action.href}",
                                class: action.style.class(),
                                target: if action.external { "_blank" } else { "_self" },
                                "{action.label}"
                            }
                        }
                    }
                }
            }
        }
    }
}
