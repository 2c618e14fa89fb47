//! UI Components
//!
//! One module per page region. Components receive their slice of the site
//! config as props; the stateful ones keep a `trinity-core` state holder in a
//! signal.

pub mod counter;
pub mod faq;
pub mod footer;
pub mod hero;
pub mod inquiry;
pub mod navbar;
pub mod reveal;
pub mod sections;

pub use counter::Counter;
pub use faq::Faq;
pub use footer::Footer;
pub use hero::Hero;
pub use inquiry::Inquiry;
pub use navbar::Navbar;
pub use reveal::{RevealSection, use_reveal_provider};
pub use sections::{CtaSection, Facilities, Gallery, Highlights, Leadership, Location};
