//! Interactive page state
//!
//! Small state holders behind the page's interactive widgets. They carry no
//! rendering; the frontend keeps one of each in a signal.

mod faq;
mod inquiry;
mod theme;

pub use faq::FaqAccordion;
pub use inquiry::{InquiryDraft, InquiryField, InquiryForm, InquiryPhase, SUCCESS_DISPLAY_MS};
pub use theme::{THEME_STORAGE_KEY, ThemeState, ThemeStore};
