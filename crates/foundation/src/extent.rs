/// Vertical interval math for scroll visibility.
///
/// Everything here works in page coordinates: `y` grows downward, a scroll
/// offset of 0 means the top of the page is at the top of the window.

/// A region's vertical span in page coordinates.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Extent {
    pub top: f64,
    pub height: f64,
}

impl Extent {
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// True when a page offset falls inside this span.
    pub fn contains_offset(&self, y: f64) -> bool {
        y >= self.top && y < self.bottom()
    }
}

/// The visible window.
///
/// `top_inset` shrinks the effective window from the top to account for
/// fixed navigation chrome: content hidden behind the nav bar does not
/// count as visible.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    pub scroll_y: f64,
    pub height: f64,
    pub top_inset: f64,
}

impl Viewport {
    pub fn new(scroll_y: f64, height: f64) -> Self {
        Self {
            scroll_y,
            height,
            top_inset: 0.0,
        }
    }

    pub fn with_top_inset(scroll_y: f64, height: f64, top_inset: f64) -> Self {
        Self {
            scroll_y,
            height,
            top_inset,
        }
    }

    pub fn at_scroll(&self, scroll_y: f64) -> Self {
        Self { scroll_y, ..*self }
    }

    /// Top of the effective (inset-adjusted) visible window, page coords.
    pub fn visible_top(&self) -> f64 {
        self.scroll_y + self.top_inset
    }

    pub fn visible_bottom(&self) -> f64 {
        self.scroll_y + self.height
    }

    /// Fraction of `extent`'s height inside the effective window, in [0, 1].
    ///
    /// Zero-height extents report 0 rather than NaN.
    pub fn visible_fraction(&self, extent: &Extent) -> f64 {
        if extent.height <= 0.0 {
            return 0.0;
        }
        let top = extent.top.max(self.visible_top());
        let bottom = extent.bottom().min(self.visible_bottom());
        let overlap = (bottom - top).max(0.0);
        (overlap / extent.height).min(1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::{Extent, Viewport};

    #[test]
    fn fully_visible_extent_reports_one() {
        let vp = Viewport::new(0.0, 800.0);
        let e = Extent::new(100.0, 200.0);
        assert_eq!(vp.visible_fraction(&e), 1.0);
    }

    #[test]
    fn offscreen_extents_report_zero() {
        let vp = Viewport::new(0.0, 800.0);
        assert_eq!(vp.visible_fraction(&Extent::new(1000.0, 200.0)), 0.0);
        let scrolled = vp.at_scroll(2000.0);
        assert_eq!(scrolled.visible_fraction(&Extent::new(1000.0, 200.0)), 0.0);
    }

    #[test]
    fn partial_overlap_is_proportional() {
        let vp = Viewport::new(0.0, 800.0);
        // Bottom half below the fold.
        let e = Extent::new(700.0, 200.0);
        assert_eq!(vp.visible_fraction(&e), 0.5);
    }

    #[test]
    fn top_inset_hides_content_behind_nav() {
        let vp = Viewport::with_top_inset(100.0, 800.0, 60.0);
        // Extent entirely behind the nav bar.
        let e = Extent::new(100.0, 60.0);
        assert_eq!(vp.visible_fraction(&e), 0.0);
    }

    #[test]
    fn zero_height_extent_is_never_visible() {
        let vp = Viewport::new(0.0, 800.0);
        assert_eq!(vp.visible_fraction(&Extent::new(100.0, 0.0)), 0.0);
    }

    #[test]
    fn contains_offset_is_half_open() {
        let e = Extent::new(100.0, 50.0);
        assert!(e.contains_offset(100.0));
        assert!(e.contains_offset(149.0));
        assert!(!e.contains_offset(150.0));
        assert!(!e.contains_offset(99.0));
    }
}
