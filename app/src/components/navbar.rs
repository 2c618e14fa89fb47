use dioxus::prelude::*;
use trinity_core::ThemeState;
use trinity_types::NavLink;

use crate::platform::{LocalThemeStore, apply_theme};

#[component]
pub fn Navbar(
    logo: String,
    school_name: String,
    links: Vec<NavLink>,
    enquire_href: String,
) -> Element {
    let mut menu_open = use_signal(|| false);
    let mut theme = use_signal(|| ThemeState::load(LocalThemeStore));

    // Keep <html data-theme> in step with the signal
    use_effect(move || {
        apply_theme(theme.read().theme());
    });

    let icon = theme.read().theme().toggle_icon();
    let open = if menu_open() { " active" } else { "" };

    rsx! {
        nav { class: "navbar",
            div { class: "container nav-container",
                div { class: "logo",
                    a { href: "/",
                        img { src: "{logo}", alt: "{school_name} Logo", class: "nav-logo" }
                    }
                }

                div { class: "nav-links{open}", id: "navLinks",
                    for (i, link) in links.iter().enumerate() {
                        a {
                            href: "{link.href}",
                            class: if i == 0 { "nav-link active" } else { "nav-link" },
                            onclick: move |_| menu_open.set(false),
                            "{link.label}"
                        }
                    }
                    button {
                        class: "theme-btn",
                        title: "Toggle theme",
                        onclick: move |_| {
                            theme.write().toggle();
                        },
                        "{icon}"
                    }
                    a { href: "{enquire_href}", class: "btn btn-secondary btn-sm", "Enquire Now" }
                }

                button {
                    class: "mobile-toggle{open}",
                    onclick: move |_| menu_open.toggle(),
                    span { class: "bar" }
                    span { class: "bar" }
                    span { class: "bar" }
                }
            }
        }
    }
}
