/// Easing curves for staged reveals and counter animations.
///
/// Inputs are clamped to [0, 1] so callers can feed raw frame progress.
pub fn linear(t: f64) -> f64 {
    t.clamp(0.0, 1.0)
}

pub fn ease_out_quad(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    t * (2.0 - t)
}
