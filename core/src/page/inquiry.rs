//! Admission inquiry form (client-side only)
//!
//! Nothing leaves the browser: a valid submit shows a thank-you message for
//! [`SUCCESS_DISPLAY_MS`], after which the frontend calls
//! [`InquiryForm::reset`] and the empty form returns.

use tracing::debug;
use trinity_types::GradeLevel;

use crate::error::InquiryError;

/// How long the thank-you message stays up before the form resets
pub const SUCCESS_DISPLAY_MS: u32 = 3000;

const MIN_PHONE_DIGITS: usize = 10;
const MAX_PHONE_DIGITS: usize = 15;

/// Form fields in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InquiryField {
    ParentName,
    Phone,
    Email,
    Grade,
}

impl InquiryField {
    pub fn label(&self) -> &'static str {
        match self {
            InquiryField::ParentName => "Parent Name",
            InquiryField::Phone => "Phone Number",
            InquiryField::Email => "Email Address",
            InquiryField::Grade => "Grade Interested In",
        }
    }
}

/// What the parent has typed so far.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InquiryDraft {
    pub parent_name: String,
    pub phone: String,
    pub email: String,
    /// `<select>` value; empty until a grade is chosen
    pub grade: String,
    pub message: String,
}

impl InquiryDraft {
    /// Fields that fail validation, in display order
    pub fn invalid_fields(&self) -> Vec<InquiryField> {
        let mut fields = Vec::new();
        if self.parent_name.trim().is_empty() {
            fields.push(InquiryField::ParentName);
        }
        if !is_valid_phone(&self.phone) {
            fields.push(InquiryField::Phone);
        }
        if !is_valid_email(&self.email) {
            fields.push(InquiryField::Email);
        }
        if self.grade_level().is_none() {
            fields.push(InquiryField::Grade);
        }
        fields
    }

    pub fn grade_level(&self) -> Option<GradeLevel> {
        GradeLevel::from_value(self.grade.trim())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InquiryPhase {
    #[default]
    Editing,
    /// Thank-you message showing
    Submitted,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InquiryForm {
    draft: InquiryDraft,
    phase: InquiryPhase,
}

impl InquiryForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &InquiryDraft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut InquiryDraft {
        &mut self.draft
    }

    pub fn phase(&self) -> InquiryPhase {
        self.phase
    }

    pub fn is_submitted(&self) -> bool {
        self.phase == InquiryPhase::Submitted
    }

    /// Validate and move to `Submitted`. The draft is kept until [`reset`](Self::reset).
    pub fn submit(&mut self) -> Result<(), InquiryError> {
        let fields = self.draft.invalid_fields();
        if !fields.is_empty() {
            return Err(InquiryError::Invalid { fields });
        }
        debug!(grade = ?self.draft.grade_level(), "inquiry submitted");
        self.phase = InquiryPhase::Submitted;
        Ok(())
    }

    /// Clear the draft and show the empty form again
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

fn is_valid_phone(phone: &str) -> bool {
    let mut digits = 0;
    for c in phone.trim().chars() {
        match c {
            '0'..='9' => digits += 1,
            ' ' | '+' | '-' => {}
            _ => return false,
        }
    }
    (MIN_PHONE_DIGITS..=MAX_PHONE_DIGITS).contains(&digits)
}

fn is_valid_email(email: &str) -> bool {
    let email = email.trim();
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty() && !domain.is_empty() && !domain.contains('@') && !email.contains(' ')
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> InquiryForm {
        let mut form = InquiryForm::new();
        let draft = form.draft_mut();
        draft.parent_name = "Asha Verma".to_string();
        draft.phone = "+91 12345 67890".to_string();
        draft.email = "asha@example.com".to_string();
        draft.grade = "primary".to_string();
        form
    }

    #[test]
    fn empty_form_reports_every_required_field() {
        let mut form = InquiryForm::new();
        let err = form.submit().unwrap_err();
        assert_eq!(
            err.fields(),
            &[
                InquiryField::ParentName,
                InquiryField::Phone,
                InquiryField::Email,
                InquiryField::Grade
            ]
        );
        assert_eq!(form.phase(), InquiryPhase::Editing);
    }

    #[test]
    fn message_is_optional() {
        let mut form = filled();
        assert!(form.draft().message.is_empty());
        assert!(form.submit().is_ok());
        assert!(form.is_submitted());
        assert_eq!(form.draft().grade_level(), Some(GradeLevel::Primary));
    }

    #[test]
    fn bad_contact_details_are_rejected() {
        let mut form = filled();
        form.draft_mut().phone = "12345".to_string();
        form.draft_mut().email = "asha.example.com".to_string();
        let err = form.submit().unwrap_err();
        assert_eq!(err.fields(), &[InquiryField::Phone, InquiryField::Email]);
        assert_eq!(err.to_string(), "please check: Phone Number, Email Address");
    }

    #[test]
    fn whitespace_only_name_is_blank() {
        let mut form = filled();
        form.draft_mut().parent_name = "   ".to_string();
        assert_eq!(
            form.submit().unwrap_err().fields(),
            &[InquiryField::ParentName]
        );
    }

    #[test]
    fn unknown_grade_is_rejected() {
        let mut form = filled();
        form.draft_mut().grade = "college".to_string();
        assert_eq!(form.submit().unwrap_err().fields(), &[InquiryField::Grade]);
    }

    #[test]
    fn reset_returns_to_empty_editing_form() {
        let mut form = filled();
        form.submit().unwrap();
        form.reset();
        assert_eq!(form, InquiryForm::new());
        assert_eq!(form.phase(), InquiryPhase::Editing);
    }

    #[test]
    fn phone_validation() {
        assert!(is_valid_phone("9876543210"));
        assert!(is_valid_phone("+91-98765-43210"));
        assert!(!is_valid_phone("98765"));
        assert!(!is_valid_phone("98765abc43210"));
        assert!(!is_valid_phone("1234567890123456"));
    }

    #[test]
    fn email_validation() {
        assert!(is_valid_email("mail@trinityschool.in"));
        assert!(!is_valid_email("@trinityschool.in"));
        assert!(!is_valid_email("mail@"));
        assert!(!is_valid_email("a@b@c"));
        assert!(!is_valid_email("ma il@trinityschool.in"));
    }
}
