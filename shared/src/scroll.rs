//! Navigation-bar chrome derived from scroll position and direction.

/// Offset past which the bar gains a stronger background and shadow.
pub const ELEVATE_THRESHOLD: f64 = 100.0;

/// Offset past which downward scrolling hides the bar.
pub const HIDE_THRESHOLD: f64 = 200.0;

/// Presentation flags for the navigation bar at one scroll position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavChrome {
    /// Stronger background opacity and shadow.
    pub elevated: bool,
    /// Bar translated off-screen.
    pub hidden: bool,
}

/// Remembers the previous scroll offset so direction can be derived.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScrollTracker {
    last: f64,
}

impl ScrollTracker {
    /// Feeds one scroll offset and returns the chrome for it.
    ///
    /// The bar hides only while moving downward past [`HIDE_THRESHOLD`];
    /// any upward movement brings it back regardless of offset.
    pub fn observe(&mut self, offset: f64) -> NavChrome {
        let chrome = NavChrome {
            elevated: offset > ELEVATE_THRESHOLD,
            hidden: offset > self.last && offset > HIDE_THRESHOLD,
        };
        self.last = offset;
        chrome
    }
}
