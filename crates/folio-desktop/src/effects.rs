//! Scroll-driven visual effects
//!
//! Reveal-on-scroll, parallax and navbar tinting. None of these touch
//! window state; each is a function of the current scroll position.

/// Distance from the bottom of the viewport an element must clear to reveal
pub const REVEAL_OFFSET_PX: f32 = 100.0;

/// Scroll depth past which the navbar is tinted
pub const NAVBAR_TINT_THRESHOLD_PX: f32 = 50.0;

/// Tracks which elements have been revealed.
///
/// Reveal is one-way: scrolling back up does not hide an element again.
#[derive(Clone, Debug)]
pub struct RevealTracker {
    offset: f32,
    revealed: Vec<bool>,
}

impl RevealTracker {
    /// Track `count` elements with the default offset
    pub fn new(count: usize) -> Self {
        Self::with_offset(count, REVEAL_OFFSET_PX)
    }

    pub fn with_offset(count: usize, offset: f32) -> Self {
        Self {
            offset,
            revealed: vec![false; count],
        }
    }

    /// Update with each element's top edge relative to the viewport.
    ///
    /// Returns the indices revealed by this update.
    pub fn update(&mut self, viewport_height: f32, element_tops: &[f32]) -> Vec<usize> {
        let line = viewport_height - self.offset;
        let mut newly = Vec::new();
        for (i, (&top, revealed)) in element_tops.iter().zip(self.revealed.iter_mut()).enumerate() {
            if !*revealed && top < line {
                *revealed = true;
                newly.push(i);
            }
        }
        newly
    }

    pub fn is_revealed(&self, index: usize) -> bool {
        self.revealed.get(index).copied().unwrap_or(false)
    }
}

/// Vertical translation for a parallax layer
#[inline]
pub fn parallax_offset(scroll_y: f32, speed: f32) -> f32 {
    scroll_y.max(0.0) * speed
}

/// Whether the navbar should switch to its tinted background
#[inline]
pub fn navbar_tinted(scroll_y: f32, threshold: f32) -> bool {
    scroll_y > threshold
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reveal_is_one_way() {
        let mut tracker = RevealTracker::new(3);

        // viewport 800 => reveal line at 700
        let newly = tracker.update(800.0, &[100.0, 750.0, 1200.0]);
        assert_eq!(newly, [0]);

        let newly = tracker.update(800.0, &[-400.0, 300.0, 900.0]);
        assert_eq!(newly, [1]);

        // Scrolled back to the top
        let newly = tracker.update(800.0, &[100.0, 750.0, 1200.0]);
        assert!(newly.is_empty());
        assert!(tracker.is_revealed(1));
        assert!(!tracker.is_revealed(2));
        assert!(!tracker.is_revealed(9));
    }

    #[test]
    fn test_parallax_offset() {
        assert_eq!(parallax_offset(200.0, 0.5), 100.0);
        // Overscroll bounce never moves the layer down
        assert_eq!(parallax_offset(-30.0, 0.5), 0.0);
    }

    #[test]
    fn test_navbar_tint_threshold() {
        assert!(!navbar_tinted(0.0, NAVBAR_TINT_THRESHOLD_PX));
        assert!(!navbar_tinted(50.0, NAVBAR_TINT_THRESHOLD_PX));
        assert!(navbar_tinted(51.0, NAVBAR_TINT_THRESHOLD_PX));
    }
}
