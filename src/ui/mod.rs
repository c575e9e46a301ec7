//! Browser UI surface
//!
//! Element ids the page is expected to provide. Every hook is optional: a
//! missing element disables only the feature that needs it.

#[cfg(target_arch = "wasm32")]
pub mod dom;

use crate::record::FeedbackRecord;

pub mod ids {
    pub const FORM: &str = "feedbackForm";
    pub const SUCCESS_BANNER: &str = "successMessage";
    pub const FEEDBACK_LIST: &str = "feedbackList";
    pub const PAGINATION: &str = "pagination";
    pub const PREV_BUTTON: &str = "prevBtn";
    pub const NEXT_BUTTON: &str = "nextBtn";
    pub const PAGE_INFO: &str = "pageInfo";
}

/// CSS class toggled to hide elements
pub const HIDDEN_CLASS: &str = "hidden";
/// CSS class marking an invalid field
pub const ERROR_CLASS: &str = "error";
/// Placeholder shown when no feedback has been stored
pub const EMPTY_TEXT: &str = "No feedback yet. Be the first to share your thoughts!";

/// Text to show for a stored field.
///
/// Stored text carries `&lt;`/`&gt;` from submit-time escaping; they are
/// turned back into `<`/`>` and the result is only ever set as text content,
/// never as markup.
pub fn display_text(stored: &str) -> String {
    stored.replace("&lt;", "<").replace("&gt;", ">")
}

/// `(tag, class, text)` for each element of a feedback card, in order
pub fn card_fields(record: &FeedbackRecord) -> [(&'static str, &'static str, String); 4] {
    [
        ("h4", "feedback-name", display_text(&record.name)),
        ("p", "feedback-email", display_text(&record.email)),
        ("p", "feedback-message", display_text(&record.message)),
        ("small", "feedback-date", display_text(&record.date)),
    ]
}

/// The success banner's pending auto-hide timeout.
///
/// A new submit cancels the previous hide so its banner gets the full delay.
#[derive(Debug, Default)]
pub struct BannerTimer {
    pending: Option<i32>,
}

impl BannerTimer {
    /// Handle of the outstanding hide that must be cleared before re-arming
    pub fn take_pending(&mut self) -> Option<i32> {
        self.pending.take()
    }

    /// Remember the newly scheduled hide
    pub fn arm(&mut self, handle: i32) {
        self.pending = Some(handle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_fields_are_plain_text() {
        let record = FeedbackRecord::new(
            "&lt;b&gt;Ada&lt;/b&gt;",
            "ada@example.com",
            "5 &gt; 3 & fine",
            "<img src=x onerror=alert(1)>",
        );
        let fields = card_fields(&record);

        assert_eq!(fields[0], ("h4", "feedback-name", "<b>Ada</b>".to_string()));
        assert_eq!(fields[2].2, "5 > 3 & fine");
        // Unsanitized legacy dates come through as literal text
        assert_eq!(fields[3], ("small", "feedback-date", "<img src=x onerror=alert(1)>".to_string()));
    }

    #[test]
    fn test_banner_timer_hands_back_previous_handle() {
        let mut timer = BannerTimer::default();
        assert_eq!(timer.take_pending(), None);

        timer.arm(7);
        assert_eq!(timer.take_pending(), Some(7));
        assert_eq!(timer.take_pending(), None);

        timer.arm(8);
        timer.arm(9);
        assert_eq!(timer.take_pending(), Some(9));
    }
}
