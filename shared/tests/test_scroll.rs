#[cfg(test)]
mod tests {
    use alhuda_shared::scroll::{NavChrome, ScrollTracker, ELEVATE_THRESHOLD, HIDE_THRESHOLD};

    #[test]
    fn at_rest_the_bar_is_plain_and_visible() {
        let mut tracker = ScrollTracker::default();
        assert_eq!(tracker.observe(0.0), NavChrome::default());
    }

    #[test]
    fn elevation_kicks_in_past_the_threshold() {
        let mut tracker = ScrollTracker::default();
        assert!(!tracker.observe(ELEVATE_THRESHOLD).elevated);
        assert!(tracker.observe(ELEVATE_THRESHOLD + 1.0).elevated);
    }

    #[test]
    fn bar_hides_only_when_scrolling_down_past_the_hide_threshold() {
        let mut tracker = ScrollTracker::default();
        // Downward but still above the threshold: stays visible.
        assert!(!tracker.observe(150.0).hidden);
        // Downward past the threshold: hides.
        assert!(tracker.observe(HIDE_THRESHOLD + 50.0).hidden);
    }

    #[test]
    fn any_upward_scroll_reveals_the_bar() {
        let mut tracker = ScrollTracker::default();
        tracker.observe(400.0);
        let chrome = tracker.observe(399.0);
        assert!(!chrome.hidden);
        assert!(chrome.elevated);
    }

    #[test]
    fn deep_offset_reached_upward_keeps_the_bar_visible() {
        let mut tracker = ScrollTracker::default();
        tracker.observe(1000.0);
        assert!(!tracker.observe(600.0).hidden);
        // Resuming downward movement hides it again.
        assert!(tracker.observe(700.0).hidden);
    }
}
