//! Modal dialog bookkeeping.
//!
//! [`DialogController`] owns the single "currently open" reference. It is
//! generic over the panel identifier `P` and the focus handle `F` so the
//! browser layer can store DOM elements while tests use plain values.
//!
//! Opening a panel while another is open closes the first one before the
//! second opens. The focus target restored by that implicit close becomes
//! the restore target of the new panel, so closing it returns focus to the
//! control that started the chain.

/// The open panel together with the element to refocus on close.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveDialog<P, F> {
    pub panel: P,
    pub restore_focus: Option<F>,
}

#[derive(Debug)]
pub struct DialogController<P, F> {
    active: Option<ActiveDialog<P, F>>,
}

impl<P, F> Default for DialogController<P, F> {
    fn default() -> Self {
        Self { active: None }
    }
}

impl<P, F> DialogController<P, F> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.active.is_some()
    }

    pub fn active_panel(&self) -> Option<&P> {
        self.active.as_ref().map(|a| &a.panel)
    }

    /// Opens `panel`, remembering `trigger` for focus restoration.
    ///
    /// Returns the dialog that was displaced, if one was open. Its focus
    /// target has already been handed to the new panel.
    pub fn open(&mut self, panel: P, trigger: Option<F>) -> Option<ActiveDialog<P, F>> {
        let mut displaced = self.active.take();
        let restore_focus = displaced
            .as_mut()
            .and_then(|prev| prev.restore_focus.take())
            .or(trigger);
        self.active = Some(ActiveDialog {
            panel,
            restore_focus,
        });
        displaced
    }

    /// Closes the open panel. A no-op returning `None` if nothing is open.
    pub fn close(&mut self) -> Option<ActiveDialog<P, F>> {
        self.active.take()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabDirection {
    Forward,
    Backward,
}

/// Where focus must be redirected to keep it inside the open panel.
///
/// `count` is the number of focusable descendants captured when the trap
/// was installed and `current` the index of the focused one, or `None` when
/// focus sits elsewhere. Returns `None` when the browser's default tab
/// movement already stays inside the panel.
pub fn trap_focus(count: usize, current: Option<usize>, direction: TabDirection) -> Option<usize> {
    if count == 0 {
        return None;
    }
    let last = count - 1;
    match (current, direction) {
        (None, TabDirection::Forward) => Some(0),
        (None, TabDirection::Backward) => Some(last),
        (Some(i), TabDirection::Forward) if i >= last => Some(0),
        (Some(0), TabDirection::Backward) => Some(last),
        _ => None,
    }
}

/// Selector for elements that can receive keyboard focus.
pub const FOCUSABLE_SELECTOR: &str = "a[href], area[href], button:not([disabled]), \
    input:not([disabled]), select:not([disabled]), textarea:not([disabled]), \
    iframe, [tabindex]:not([tabindex=\"-1\"]), [contenteditable=\"true\"]";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn close_without_open_is_noop() {
        let mut dialogs = DialogController::<&str, u32>::new();
        assert!(dialogs.close().is_none());
        assert!(!dialogs.is_open());
    }

    #[test]
    fn open_then_close_restores_trigger() {
        let mut dialogs = DialogController::new();
        assert!(dialogs.open("project", Some(7)).is_none());
        assert!(dialogs.is_open());
        assert_eq!(dialogs.active_panel(), Some(&"project"));

        let closed = dialogs.close().expect("a dialog was open");
        assert_eq!(closed.panel, "project");
        assert_eq!(closed.restore_focus, Some(7));
        assert!(dialogs.active_panel().is_none());
    }

    #[test]
    fn second_open_closes_first() {
        let mut dialogs = DialogController::new();
        dialogs.open("cert-a", Some(1));
        let displaced = dialogs.open("cert-b", Some(2)).expect("first was open");
        assert_eq!(displaced.panel, "cert-a");
        assert_eq!(displaced.restore_focus, None);
        assert_eq!(dialogs.active_panel(), Some(&"cert-b"));

        // closing the chain returns focus to the original trigger
        let closed = dialogs.close().expect("second is open");
        assert_eq!(closed.restore_focus, Some(1));
        assert!(!dialogs.is_open());
    }

    #[test]
    fn second_open_keeps_new_trigger_when_first_had_none() {
        let mut dialogs = DialogController::new();
        dialogs.open("a", None);
        let displaced = dialogs.open("b", Some(5)).expect("first was open");
        assert_eq!(displaced.restore_focus, None);
        assert_eq!(dialogs.close().map(|d| d.restore_focus), Some(Some(5)));
    }

    #[test]
    fn trap_wraps_at_edges() {
        assert_eq!(trap_focus(3, Some(2), TabDirection::Forward), Some(0));
        assert_eq!(trap_focus(3, Some(0), TabDirection::Backward), Some(2));
        assert_eq!(trap_focus(3, Some(1), TabDirection::Forward), None);
        assert_eq!(trap_focus(3, Some(1), TabDirection::Backward), None);
    }

    #[test]
    fn trap_pulls_focus_back_inside() {
        assert_eq!(trap_focus(4, None, TabDirection::Forward), Some(0));
        assert_eq!(trap_focus(4, None, TabDirection::Backward), Some(3));
    }

    #[test]
    fn single_focusable_stays_put() {
        assert_eq!(trap_focus(1, Some(0), TabDirection::Forward), Some(0));
        assert_eq!(trap_focus(1, Some(0), TabDirection::Backward), Some(0));
    }

    #[test]
    fn empty_panel_is_noop() {
        assert_eq!(trap_focus(0, None, TabDirection::Forward), None);
        assert_eq!(trap_focus(0, None, TabDirection::Backward), None);
    }

    #[test]
    fn cycling_never_leaves_panel() {
        let count = 5;
        let mut focus = Some(0);
        for step in 0..40 {
            let direction = if step % 3 == 0 {
                TabDirection::Backward
            } else {
                TabDirection::Forward
            };
            let cur = focus.expect("focus stays inside");
            focus = match trap_focus(count, focus, direction) {
                Some(i) => Some(i),
                None => Some(match direction {
                    TabDirection::Forward => cur + 1,
                    TabDirection::Backward => cur - 1,
                }),
            };
            assert!(focus.is_some_and(|i| i < count));
        }
    }
}
