/// The seven wizard stages, in strict linear order. A step's rank is its
/// position; there is no terminal state and reaching Publish never saves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Step {
    Basics,
    Itinerary,
    Sponsors,
    Survey,
    Polls,
    QrMedia,
    Publish,
}

impl Step {
    pub const ALL: [Step; 7] = [
        Step::Basics,
        Step::Itinerary,
        Step::Sponsors,
        Step::Survey,
        Step::Polls,
        Step::QrMedia,
        Step::Publish,
    ];

    pub fn rank(self) -> usize {
        Self::ALL
            .iter()
            .position(|step| *step == self)
            .expect("step is part of ALL")
    }

    pub fn label(self) -> &'static str {
        match self {
            Step::Basics => "Basics",
            Step::Itinerary => "Itinerary",
            Step::Sponsors => "Sponsors",
            Step::Survey => "Survey",
            Step::Polls => "Polls",
            Step::QrMedia => "QR & Media",
            Step::Publish => "Publish",
        }
    }

    fn next(self) -> Option<Step> {
        Self::ALL.get(self.rank() + 1).copied()
    }

    fn prev(self) -> Option<Step> {
        self.rank().checked_sub(1).map(|rank| Self::ALL[rank])
    }
}

/// Cursor over the wizard steps. Movement is clamped at both ends; jumps are
/// unconditional because the progress strip is clickable and completeness is
/// display-only, never a gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepCursor {
    current: Step,
}

impl Default for StepCursor {
    fn default() -> Self {
        Self {
            current: Step::Basics,
        }
    }
}

impl StepCursor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Step {
        self.current
    }

    pub fn advance(&mut self) {
        if let Some(next) = self.current.next() {
            self.current = next;
        }
    }

    pub fn retreat(&mut self) {
        if let Some(prev) = self.current.prev() {
            self.current = prev;
        }
    }

    pub fn jump_to(&mut self, step: Step) {
        self.current = step;
    }

    /// Cosmetic progress marker: every step strictly before the current one
    /// counts as complete, regardless of what the user actually filled in.
    pub fn is_complete(&self, step: Step) -> bool {
        self.current.rank() > step.rank()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_clamps_at_publish() {
        let mut cursor = StepCursor::new();
        for _ in 0..Step::ALL.len() + 3 {
            cursor.advance();
        }
        assert_eq!(cursor.current(), Step::Publish);
    }

    #[test]
    fn retreat_clamps_at_basics() {
        let mut cursor = StepCursor::new();
        cursor.retreat();
        assert_eq!(cursor.current(), Step::Basics);
        cursor.advance();
        cursor.retreat();
        cursor.retreat();
        assert_eq!(cursor.current(), Step::Basics);
    }

    #[test]
    fn jump_ignores_completeness() {
        let mut cursor = StepCursor::new();
        cursor.jump_to(Step::Publish);
        assert_eq!(cursor.current(), Step::Publish);
        assert!(cursor.is_complete(Step::Polls));
        cursor.jump_to(Step::Itinerary);
        assert!(cursor.is_complete(Step::Basics));
        assert!(!cursor.is_complete(Step::Itinerary));
        assert!(!cursor.is_complete(Step::Publish));
    }

    #[test]
    fn ranks_follow_declaration_order() {
        for (index, step) in Step::ALL.into_iter().enumerate() {
            assert_eq!(step.rank(), index);
        }
    }
}
