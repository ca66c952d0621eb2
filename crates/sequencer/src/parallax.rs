use foundation::extent::{Extent, Viewport};

/// Axis and polarity of a parallax layer's drift.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ParallaxDirection {
    Up,
    Down,
    Left,
    Right,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ParallaxSpec {
    pub speed: f64,
    pub direction: ParallaxDirection,
}

impl Default for ParallaxSpec {
    fn default() -> Self {
        Self {
            speed: 0.2,
            direction: ParallaxDirection::Up,
        }
    }
}

/// Translation to apply to a decorative layer, in pixels.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Translation {
    pub x: f64,
    pub y: f64,
}

/// Parallax drift for an element, derived from how far its center sits
/// from the viewport center (as a fraction of half the viewport height).
///
/// Elements outside the viewport get `None`: offscreen layers are never
/// moved. The inset is ignored here on purpose — decorative layers behind
/// the nav bar still drift.
pub fn parallax_offset(
    extent: &Extent,
    viewport: &Viewport,
    spec: &ParallaxSpec,
) -> Option<Translation> {
    let in_view =
        extent.top < viewport.scroll_y + viewport.height && extent.bottom() > viewport.scroll_y;
    if !in_view || viewport.height <= 0.0 {
        return None;
    }

    let viewport_center = viewport.scroll_y + viewport.height / 2.0;
    let element_center = extent.top + extent.height / 2.0;
    let percent_from_center = (element_center - viewport_center) / (viewport.height / 2.0);
    let magnitude = percent_from_center * spec.speed * 100.0;

    Some(match spec.direction {
        ParallaxDirection::Up => Translation {
            x: 0.0,
            y: -magnitude,
        },
        ParallaxDirection::Down => Translation {
            x: 0.0,
            y: magnitude,
        },
        ParallaxDirection::Left => Translation {
            x: -magnitude,
            y: 0.0,
        },
        ParallaxDirection::Right => Translation {
            x: magnitude,
            y: 0.0,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::{ParallaxDirection, ParallaxSpec, Translation, parallax_offset};
    use foundation::extent::{Extent, Viewport};

    #[test]
    fn centered_element_does_not_move() {
        let vp = Viewport::new(0.0, 800.0);
        let e = Extent::new(300.0, 200.0); // center 400 == viewport center
        let t = parallax_offset(&e, &vp, &ParallaxSpec::default()).unwrap();
        assert_eq!(t, Translation { x: 0.0, y: 0.0 });
    }

    #[test]
    fn below_center_drifts_against_scroll_for_up() {
        let vp = Viewport::new(0.0, 800.0);
        let e = Extent::new(500.0, 200.0); // center 600, +200 from center
        let spec = ParallaxSpec {
            speed: 0.2,
            direction: ParallaxDirection::Up,
        };
        let t = parallax_offset(&e, &vp, &spec).unwrap();
        // +200 of a 400 half-viewport = 0.5; 0.5 * 0.2 * 100 = 10, negated.
        assert_eq!(t, Translation { x: 0.0, y: -10.0 });
    }

    #[test]
    fn horizontal_directions_use_x() {
        let vp = Viewport::new(0.0, 800.0);
        let e = Extent::new(500.0, 200.0);
        let spec = ParallaxSpec {
            speed: 0.2,
            direction: ParallaxDirection::Right,
        };
        let t = parallax_offset(&e, &vp, &spec).unwrap();
        assert_eq!(t, Translation { x: 10.0, y: 0.0 });
    }

    #[test]
    fn offscreen_elements_are_skipped() {
        let vp = Viewport::new(0.0, 800.0);
        assert_eq!(
            parallax_offset(&Extent::new(2000.0, 200.0), &vp, &ParallaxSpec::default()),
            None
        );
        assert_eq!(
            parallax_offset(
                &Extent::new(100.0, 200.0),
                &vp.at_scroll(1000.0),
                &ParallaxSpec::default()
            ),
            None
        );
    }
}
