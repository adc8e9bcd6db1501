//! Copy-to-clipboard with a single fallback
//!
//! The primary sink is tried once. If it fails the fallback sink is tried
//! once and its result is not inspected further. The trigger control shows
//! `"copied!"` for [`COPY_FEEDBACK_MS`] either way.

use tracing::{debug, warn};

use crate::error::DesktopResult;

/// Text copied when the control does not name its own
pub const DEFAULT_COPY_TEXT: &str = "aaronedmccarthy@gmail.com";

/// Label shown on the trigger control after a copy
pub const COPIED_LABEL: &str = "copied!";

/// How long the copied label stays up
pub const COPY_FEEDBACK_MS: u32 = 1500;

/// Something text can be written to
pub trait ClipboardSink {
    fn write_text(&mut self, text: &str) -> DesktopResult<()>;
}

/// Which path performed the copy
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CopyOutcome {
    /// The primary clipboard accepted the text
    Primary,
    /// The primary failed and the fallback was attempted
    Fallback,
}

/// Settle a copy given the primary write's result.
///
/// On failure the fallback sink is tried once; whether it succeeds is
/// logged and otherwise ignored.
pub fn finish_copy<F: ClipboardSink>(
    primary: DesktopResult<()>,
    fallback: &mut F,
    text: &str,
) -> CopyOutcome {
    let Err(e) = primary else {
        return CopyOutcome::Primary;
    };
    warn!(error = %e, "clipboard unavailable, using fallback");
    if let Err(e) = fallback.write_text(text) {
        debug!(error = %e, "fallback copy failed");
    }
    CopyOutcome::Fallback
}

/// Copy through `primary`, falling back to `fallback` once on failure.
pub fn copy_with_fallback<P, F>(primary: &mut P, fallback: &mut F, text: &str) -> CopyOutcome
where
    P: ClipboardSink,
    F: ClipboardSink,
{
    let result = primary.write_text(text);
    finish_copy(result, fallback, text)
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct Feedback {
    outcome: CopyOutcome,
    revert_at_ms: f64,
}

/// Feedback state of one copy control
#[derive(Clone, Debug)]
pub struct CopyButton {
    original_label: String,
    text: String,
    feedback: Option<Feedback>,
    feedback_ms: u32,
}

impl CopyButton {
    /// Create a button that copies `text` (or [`DEFAULT_COPY_TEXT`])
    pub fn new(original_label: impl Into<String>, text: Option<String>) -> Self {
        Self {
            original_label: original_label.into(),
            text: text.unwrap_or_else(|| DEFAULT_COPY_TEXT.to_string()),
            feedback: None,
            feedback_ms: COPY_FEEDBACK_MS,
        }
    }

    /// Override how long the copied label stays up
    pub fn with_feedback_ms(mut self, feedback_ms: u32) -> Self {
        self.feedback_ms = feedback_ms;
        self
    }

    /// Text this control copies
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn feedback_ms(&self) -> u32 {
        self.feedback_ms
    }

    /// Label currently shown
    pub fn label(&self) -> &str {
        match self.feedback {
            Some(_) => COPIED_LABEL,
            None => &self.original_label,
        }
    }

    /// Whether the accent highlight is shown. Only a primary copy highlights.
    pub fn highlighted(&self) -> bool {
        matches!(
            self.feedback,
            Some(Feedback {
                outcome: CopyOutcome::Primary,
                ..
            })
        )
    }

    /// Record a copy at `now_ms`.
    ///
    /// A second copy while feedback is showing extends it; the label to
    /// revert to is always the original one.
    pub fn copied(&mut self, outcome: CopyOutcome, now_ms: f64) {
        self.feedback = Some(Feedback {
            outcome,
            revert_at_ms: now_ms + f64::from(self.feedback_ms),
        });
    }

    /// Revert the label if its time is up. Returns true if it reverted.
    pub fn tick(&mut self, now_ms: f64) -> bool {
        match self.feedback {
            Some(f) if now_ms >= f.revert_at_ms => {
                self.feedback = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DesktopError;

    #[derive(Default)]
    struct RecordingSink {
        fail: bool,
        written: Vec<String>,
    }

    impl ClipboardSink for RecordingSink {
        fn write_text(&mut self, text: &str) -> DesktopResult<()> {
            if self.fail {
                return Err(DesktopError::Clipboard("denied".to_string()));
            }
            self.written.push(text.to_string());
            Ok(())
        }
    }

    #[test]
    fn test_primary_success_skips_fallback() {
        let mut primary = RecordingSink::default();
        let mut fallback = RecordingSink::default();

        let outcome = copy_with_fallback(&mut primary, &mut fallback, DEFAULT_COPY_TEXT);
        assert_eq!(outcome, CopyOutcome::Primary);
        assert_eq!(primary.written, [DEFAULT_COPY_TEXT]);
        assert!(fallback.written.is_empty());
    }

    #[test]
    fn test_primary_failure_uses_fallback_once() {
        let mut primary = RecordingSink {
            fail: true,
            ..Default::default()
        };
        let mut fallback = RecordingSink::default();

        let outcome = copy_with_fallback(&mut primary, &mut fallback, "hi");
        assert_eq!(outcome, CopyOutcome::Fallback);
        assert_eq!(fallback.written, ["hi"]);
    }

    #[test]
    fn test_fallback_failure_not_distinguished() {
        let mut primary = RecordingSink {
            fail: true,
            ..Default::default()
        };
        let mut fallback = RecordingSink {
            fail: true,
            ..Default::default()
        };
        let outcome = copy_with_fallback(&mut primary, &mut fallback, "hi");
        assert_eq!(outcome, CopyOutcome::Fallback);
    }

    #[test]
    fn test_finish_copy_after_primary_success_leaves_fallback_alone() {
        let mut fallback = RecordingSink::default();
        let outcome = finish_copy(Ok(()), &mut fallback, "hi");
        assert_eq!(outcome, CopyOutcome::Primary);
        assert!(fallback.written.is_empty());
    }

    #[test]
    fn test_finish_copy_after_primary_error_writes_fallback_once() {
        let mut fallback = RecordingSink::default();
        let denied = Err(DesktopError::Clipboard("not allowed".to_string()));

        let outcome = finish_copy(denied, &mut fallback, "hi");
        assert_eq!(outcome, CopyOutcome::Fallback);
        assert_eq!(fallback.written, ["hi"]);
    }

    #[test]
    fn test_label_reverts_after_feedback_delay() {
        let mut button = CopyButton::new("copy", None);
        assert_eq!(button.text(), DEFAULT_COPY_TEXT);

        button.copied(CopyOutcome::Primary, 10_000.0);
        assert_eq!(button.label(), COPIED_LABEL);
        assert!(button.highlighted());

        assert!(!button.tick(11_499.0));
        assert_eq!(button.label(), COPIED_LABEL);

        assert!(button.tick(11_500.0));
        assert_eq!(button.label(), "copy");
        assert!(!button.highlighted());
    }

    #[test]
    fn test_fallback_copy_has_no_highlight() {
        let mut button = CopyButton::new("copy", Some("me@example.com".to_string()));
        button.copied(CopyOutcome::Fallback, 0.0);
        assert_eq!(button.label(), COPIED_LABEL);
        assert!(!button.highlighted());
    }

    #[test]
    fn test_buttons_are_independent() {
        let mut a = CopyButton::new("email", None);
        let b = CopyButton::new("phone", Some("555".to_string()));
        a.copied(CopyOutcome::Primary, 0.0);
        assert_eq!(a.label(), COPIED_LABEL);
        assert_eq!(b.label(), "phone");
    }

    #[test]
    fn test_repeat_copy_keeps_original_label() {
        let mut button = CopyButton::new("copy", None);
        button.copied(CopyOutcome::Primary, 0.0);
        button.copied(CopyOutcome::Primary, 1000.0);
        assert!(!button.tick(1500.0));
        assert!(button.tick(2500.0));
        assert_eq!(button.label(), "copy");
    }
}
