/// Element classes that fade in the first time they scroll into view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealKind {
    SectionTitle,
    AboutText,
    SkillGroup,
    ProjectCard,
    CertificateCard,
    ContactCard,
}

impl RevealKind {
    pub fn class(self) -> &'static str {
        match self {
            RevealKind::SectionTitle => "section-title",
            RevealKind::AboutText => "about-text",
            RevealKind::SkillGroup => "skill-group",
            RevealKind::ProjectCard => "project-card",
            RevealKind::CertificateCard => "cert-card",
            RevealKind::ContactCard => "contact-card",
        }
    }
}

/// One-shot reveal state of a watched element.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RevealState {
    revealed: bool,
}

impl RevealState {
    /// Feeds one intersection report. Returns `true` only on the transition
    /// to revealed; the caller then stops watching the element.
    ///
    /// The observer is registered with the reveal threshold, so a report
    /// flagged as intersecting is the crossing itself. Its ratio can land a
    /// hair under the threshold and no second report follows.
    pub fn observe(&mut self, intersecting: bool) -> bool {
        if self.revealed || !intersecting {
            return false;
        }
        self.revealed = true;
        true
    }

    pub fn classes(self, kind: RevealKind) -> String {
        if self.revealed {
            format!("reveal {} revealed", kind.class())
        } else {
            format!("reveal {}", kind.class())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KINDS: [RevealKind; 6] = [
        RevealKind::SectionTitle,
        RevealKind::AboutText,
        RevealKind::SkillGroup,
        RevealKind::ProjectCard,
        RevealKind::CertificateCard,
        RevealKind::ContactCard,
    ];

    #[test]
    fn reveals_once_on_crossing() {
        let mut state = RevealState::default();
        assert!(!state.observe(false));
        assert!(!state.revealed);
        assert!(state.observe(true));
        assert!(state.revealed);
        assert!(!state.observe(true));
    }

    #[test]
    fn never_reverts_after_scrolling_away() {
        let mut state = RevealState::default();
        state.observe(true);
        for intersecting in [false, true, false] {
            state.observe(intersecting);
            assert!(state.revealed);
        }
    }

    #[test]
    fn initial_report_for_on_screen_element_reveals() {
        // observers deliver an initial report on attach
        let mut state = RevealState::default();
        assert!(state.observe(true));
    }

    #[test]
    fn kinds_have_distinct_classes() {
        let mut classes = KINDS.iter().map(|k| k.class()).collect::<Vec<_>>();
        classes.sort_unstable();
        classes.dedup();
        assert_eq!(classes.len(), KINDS.len());
    }

    #[test]
    fn classes_reflect_state() {
        let mut state = RevealState::default();
        assert_eq!(state.classes(RevealKind::ProjectCard), "reveal project-card");
        state.observe(true);
        assert_eq!(
            state.classes(RevealKind::ProjectCard),
            "reveal project-card revealed"
        );
    }
}
