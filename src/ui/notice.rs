#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// Transient status message shown in the toast region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            text: text.into(),
        }
    }

    pub fn class(&self) -> &'static str {
        match self.kind {
            NoticeKind::Success => "toast toast-success",
            NoticeKind::Error => "toast toast-error",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self.kind {
            NoticeKind::Success => "✔",
            NoticeKind::Error => "⚠",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_set_kind() {
        let ok = Notice::success("sent");
        assert_eq!(ok.kind, NoticeKind::Success);
        assert_eq!(ok.text, "sent");
        assert_eq!(Notice::error("nope").kind, NoticeKind::Error);
    }

    #[test]
    fn styling_follows_kind() {
        assert_ne!(Notice::success("").class(), Notice::error("").class());
        assert_ne!(Notice::success("").icon(), Notice::error("").icon());
    }
}
