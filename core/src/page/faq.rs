//! FAQ accordion: at most one answer open

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FaqAccordion {
    active: Option<usize>,
}

impl FaqAccordion {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open entry `index`, or close it if it is already open.
    pub fn toggle(&mut self, index: usize) {
        self.active = if self.active == Some(index) {
            None
        } else {
            Some(index)
        };
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.active == Some(index)
    }

    pub fn active(&self) -> Option<usize> {
        self.active
    }

    /// Expand/collapse marker shown next to the question
    pub fn icon(&self, index: usize) -> &'static str {
        if self.is_open(index) { "-" } else { "+" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_entry_open_at_a_time() {
        let mut faq = FaqAccordion::new();
        assert_eq!(faq.active(), None);

        faq.toggle(1);
        assert!(faq.is_open(1));
        assert_eq!(faq.icon(1), "-");

        faq.toggle(3);
        assert!(!faq.is_open(1));
        assert!(faq.is_open(3));
        assert_eq!(faq.icon(1), "+");
    }

    #[test]
    fn toggling_open_entry_closes_it() {
        let mut faq = FaqAccordion::new();
        faq.toggle(0);
        faq.toggle(0);
        assert_eq!(faq.active(), None);
    }
}
