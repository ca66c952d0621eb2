/// Time primitives
///
/// Engine time is in seconds; effect delays are authored in milliseconds,
/// so conversion helpers live here rather than at every call site.
#[derive(Copy, Clone, Debug, PartialEq, PartialOrd)]
pub struct Time(pub f64); // seconds

impl Time {
    pub const ZERO: Time = Time(0.0);

    pub fn from_millis(ms: u64) -> Self {
        Time(ms as f64 / 1000.0)
    }

    pub fn as_millis(&self) -> f64 {
        self.0 * 1000.0
    }

    /// Time offset by a millisecond delay.
    pub fn after_millis(&self, ms: u64) -> Self {
        Time(self.0 + ms as f64 / 1000.0)
    }
}

#[cfg(test)]
mod tests {
    use super::Time;

    #[test]
    fn millis_round_trip() {
        let t = Time::from_millis(250);
        assert_eq!(t, Time(0.25));
        assert_eq!(t.as_millis(), 250.0);
    }

    #[test]
    fn after_millis_offsets() {
        let t = Time(1.0).after_millis(500);
        assert_eq!(t, Time(1.5));
        assert!(Time(1.0) < t);
    }
}
