#![allow(non_snake_case)]

use std::rc::Rc;

use dioxus::prelude::*;
use trinity_core::load_or_default;
use trinity_types::SiteConfig;

use crate::components::{
    CtaSection, Facilities, Faq, Footer, Gallery, Hero, Highlights, Inquiry, Leadership, Location,
    Navbar, use_reveal_provider,
};

static CSS: Asset = asset!("/assets/styles.css");

/// Page copy, embedded so the site ships as a single bundle
const SITE_TOML: &str = include_str!("../assets/site.toml");

pub fn App() -> Element {
    let config: Rc<SiteConfig> = use_hook(|| Rc::new(load_or_default(SITE_TOML)));
    let animation = config.animation;

    // Registers every `.reveal` section once the page is in the DOM
    use_reveal_provider(animation.reveal_threshold);

    rsx! {
        document::Title { "{config.school_name}" }
        link { rel: "stylesheet", href: CSS }
        div { id: "app-inner",
            Navbar {
                logo: config.logo.clone(),
                school_name: config.school_name.clone(),
                links: config.nav.clone(),
                enquire_href: config.enquire_href.clone(),
            }
            main {
                Hero { hero: config.hero.clone(), threshold: animation.counter_threshold }
                Highlights { section: config.highlights.clone() }
                Facilities { section: config.facilities.clone() }
                Gallery { section: config.gallery.clone() }
                Leadership { section: config.leadership.clone() }
                CtaSection { banner: config.cta.clone() }
                Faq { section: config.faq.clone() }
                Inquiry {}
                Location { contact: config.contact.clone() }
            }
            Footer {
                school_name: config.school_name.clone(),
                footer: config.footer.clone(),
                contact: config.contact.clone(),
            }
        }
    }
}
