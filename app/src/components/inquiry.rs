//! Admission inquiry form.
//!
//! Submission is local only: a valid form swaps to a thank-you message, then
//! resets itself after [`SUCCESS_DISPLAY_MS`].

use dioxus::prelude::*;
use dioxus_logger::tracing::{info, warn};
use gloo_timers::future::TimeoutFuture;
use trinity_core::page::{InquiryField, SUCCESS_DISPLAY_MS};
use trinity_core::{InquiryError, InquiryForm};
use trinity_types::GradeLevel;

use super::RevealSection;
use super::sections::SectionHeader;

#[component]
pub fn Inquiry() -> Element {
    let mut form = use_signal(InquiryForm::new);
    let mut error = use_signal(|| None::<InquiryError>);

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        let result = form.write().submit();
        match result {
            Ok(()) => {
                info!("admission inquiry submitted");
                error.set(None);
                spawn(async move {
                    TimeoutFuture::new(SUCCESS_DISPLAY_MS).await;
                    // Section may have unmounted while the message was up
                    let _ = form.try_write().map(|mut w| w.reset());
                });
            }
            Err(err) => {
                warn!(error = %err, "inquiry rejected");
                error.set(Some(err));
            }
        }
    };

    let invalid = |field: InquiryField| {
        error
            .read()
            .as_ref()
            .is_some_and(|err| err.fields().contains(&field))
    };
    let control = |field: InquiryField| {
        if invalid(field) {
            "form-control invalid"
        } else {
            "form-control"
        }
    };

    let submitted = form.read().is_submitted();
    let draft = form.read().draft().clone();

    rsx! {
        RevealSection { id: "admissions", class: "section-padding inquiry-section",
            div { class: "container",
                SectionHeader {
                    title: "Admission Inquiry",
                    subtitle: "Fill out the form below and we'll get back to you shortly.",
                }
                div { class: "form-container",
                    if submitted {
                        div { class: "success-message",
                            h3 { "✅ Thank You!" }
                            p { "Your inquiry has been submitted successfully. Our team will contact you soon." }
                        }
                    } else {
                        form { id: "admissionForm", novalidate: true, onsubmit,
                            if let Some(err) = error.read().as_ref() {
                                p { class: "form-error", "{err}" }
                            }
                            div { class: "form-group",
                                label { "{InquiryField::ParentName.label()}" }
                                input {
                                    r#type: "text",
                                    class: control(InquiryField::ParentName),
                                    placeholder: "Enter your full name",
                                    value: draft.parent_name,
                                    oninput: move |e| form.write().draft_mut().parent_name = e.value(),
                                }
                            }
                            div { class: "form-group",
                                label { "{InquiryField::Phone.label()}" }
                                input {
                                    r#type: "tel",
                                    class: control(InquiryField::Phone),
                                    placeholder: "Enter your mobile number",
                                    value: draft.phone,
                                    oninput: move |e| form.write().draft_mut().phone = e.value(),
                                }
                            }
                            div { class: "form-group",
                                label { "{InquiryField::Email.label()}" }
                                input {
                                    r#type: "email",
                                    class: control(InquiryField::Email),
                                    placeholder: "Enter your email",
                                    value: draft.email,
                                    oninput: move |e| form.write().draft_mut().email = e.value(),
                                }
                            }
                            div { class: "form-group",
                                label { "{InquiryField::Grade.label()}" }
                                select {
                                    class: control(InquiryField::Grade),
                                    value: draft.grade,
                                    onchange: move |e| form.write().draft_mut().grade = e.value(),
                                    option { value: "", "Select Grade" }
                                    for grade in GradeLevel::all() {
                                        option { value: grade.value(), "{grade.label()}" }
                                    }
                                }
                            }
                            div { class: "form-group",
                                label { "Your Message (Optional)" }
                                textarea {
                                    class: "form-control",
                                    rows: "4",
                                    placeholder: "Any specific questions?",
                                    value: draft.message,
                                    oninput: move |e| form.write().draft_mut().message = e.value(),
                                }
                            }
                            button { r#type: "submit", class: "btn btn-primary btn-block", "Submit Inquiry" }
                        }
                    }
                }
            }
        }
    }
}
