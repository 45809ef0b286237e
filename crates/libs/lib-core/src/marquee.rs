//! # Continuous Marquee
//!
//! Pure motion model of the client logo strip. The track renders its content
//! twice back to back; the offset drifts left at a constant speed and snaps
//! back to zero once it has travelled half the track width, which is exactly
//! where the second copy lines up with where the first one started.
//!
//! The browser side only feeds frame timestamps and the measured track width
//! into [`Marquee::on_frame`] and writes [`MarqueeState::transform`] back.
//!
//! ```rust
//! use lib_core::marquee::Marquee;
//!
//! let mut marquee = Marquee::new(42.0);
//! marquee.on_frame(0.0, Some(80.0));
//! marquee.on_frame(100.0, Some(80.0));
//! assert!((marquee.state().offset_px + 4.2).abs() < 1e-9);
//! ```

/// Scroll position of the track
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MarqueeState {
    /// Horizontal translation in pixels; zero or negative while running
    pub offset_px: f64,
    /// Timestamp of the last frame that moved the track, in milliseconds
    pub last_frame_ms: Option<f64>,
}

impl MarqueeState {
    /// Move the track by `speed_px_per_sec * dt_secs` and wrap at `half_width`.
    ///
    /// After this step `|offset_px| < half_width`, or `offset_px == 0`.
    pub fn advance(self, dt_secs: f64, speed_px_per_sec: f64, half_width: f64) -> Self {
        let mut offset_px = self.offset_px - speed_px_per_sec * dt_secs;
        if offset_px.abs() >= half_width || !offset_px.is_finite() {
            offset_px = 0.0;
        }
        Self {
            offset_px,
            ..self
        }
    }

    /// Handle one animation frame.
    ///
    /// `half_width` is `None` while the track element is not attached; the
    /// frame is skipped entirely and the clock is not started.
    pub fn on_frame(self, timestamp_ms: f64, speed_px_per_sec: f64, half_width: Option<f64>) -> Self {
        let Some(half_width) = half_width else {
            return self;
        };

        let Some(last) = self.last_frame_ms else {
            return Self {
                last_frame_ms: Some(timestamp_ms),
                ..self
            };
        };

        // Frame clocks are monotonic; a timestamp going backwards moves nothing.
        let dt_secs = ((timestamp_ms - last) / 1000.0).max(0.0);
        Self {
            last_frame_ms: Some(timestamp_ms),
            ..self
        }
        .advance(dt_secs, speed_px_per_sec, half_width)
    }

    /// CSS transform for the current offset
    pub fn transform(&self) -> String {
        format!("translate3d({}px, 0, 0)", self.offset_px)
    }
}

/// A marquee running at a fixed speed
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Marquee {
    speed_px_per_sec: f64,
    state: MarqueeState,
}

impl Marquee {
    pub fn new(speed_px_per_sec: f64) -> Self {
        Self {
            speed_px_per_sec,
            state: MarqueeState::default(),
        }
    }

    pub fn speed(&self) -> f64 {
        self.speed_px_per_sec
    }

    pub fn state(&self) -> MarqueeState {
        self.state
    }

    /// Advance to `timestamp_ms` given the measured half width of the track.
    pub fn on_frame(&mut self, timestamp_ms: f64, half_width: Option<f64>) -> MarqueeState {
        self.state = self
            .state
            .on_frame(timestamp_ms, self.speed_px_per_sec, half_width);
        self.state
    }
}

/// Half of a track's full scroll width, the wrap point of a doubled track
pub fn half_width(scroll_width: f64) -> f64 {
    scroll_width / 2.0
}

#[cfg(test)]
mod tests {
    use super::*;

    const SPEED: f64 = 42.0;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_first_frame_only_starts_clock() {
        let mut marquee = Marquee::new(SPEED);
        let state = marquee.on_frame(0.0, Some(80.0));
        assert_eq!(state.offset_px, 0.0);
        assert_eq!(state.last_frame_ms, Some(0.0));
    }

    #[test]
    fn test_reference_scenario() {
        let mut marquee = Marquee::new(SPEED);
        marquee.on_frame(0.0, Some(80.0));

        let state = marquee.on_frame(100.0, Some(80.0));
        assert!(approx(state.offset_px, -4.2));

        // -4.2 - 84 = -88.2 reaches past half width 80, so it wraps
        let state = marquee.on_frame(2100.0, Some(80.0));
        assert_eq!(state.offset_px, 0.0);
        assert_eq!(state.last_frame_ms, Some(2100.0));
    }

    #[test]
    fn test_wraps_exactly_at_half_width() {
        let state = MarqueeState::default().advance(1.0, 40.0, 40.0);
        assert_eq!(state.offset_px, 0.0);
        let state = MarqueeState::default().advance(1.0, 39.0, 40.0);
        assert!(approx(state.offset_px, -39.0));
    }

    #[test]
    fn test_detached_track_skips_frame_and_keeps_clock() {
        let mut marquee = Marquee::new(SPEED);
        assert_eq!(marquee.on_frame(0.0, None), MarqueeState::default());

        marquee.on_frame(16.0, Some(100.0));
        marquee.on_frame(1016.0, Some(100.0));
        assert!(approx(marquee.state().offset_px, -42.0));

        // Track detaches for a frame: nothing changes
        let before = marquee.state();
        assert_eq!(marquee.on_frame(1032.0, None), before);
    }

    #[test]
    fn test_backwards_timestamp_does_not_move() {
        let mut marquee = Marquee::new(SPEED);
        marquee.on_frame(500.0, Some(100.0));
        let state = marquee.on_frame(400.0, Some(100.0));
        assert_eq!(state.offset_px, 0.0);
        assert_eq!(state.last_frame_ms, Some(400.0));
    }

    #[test]
    fn test_zero_width_track_stays_at_origin() {
        let mut marquee = Marquee::new(SPEED);
        marquee.on_frame(0.0, Some(0.0));
        assert_eq!(marquee.on_frame(16.0, Some(0.0)).offset_px, 0.0);
    }

    #[test]
    fn test_offset_bounded_for_irregular_frames() {
        let half = 137.5;
        let mut marquee = Marquee::new(SPEED);
        let mut t = 0.0;
        // Jittery frame intervals, including long stalls
        let mut seed: u64 = 0x2545_f491;
        for _ in 0..5_000 {
            seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            t += ((seed >> 33) % 4_000) as f64 / 10.0;
            let state = marquee.on_frame(t, Some(half));
            assert!(state.offset_px.abs() <= half, "offset {} escaped", state.offset_px);
            assert!(state.offset_px <= 0.0);
        }
    }

    #[test]
    fn test_deterministic_for_same_timestamps() {
        let timestamps = [0.0, 16.7, 33.3, 50.0, 400.0, 416.7, 3000.0, 3016.7];
        let run = || {
            let mut marquee = Marquee::new(SPEED);
            timestamps
                .iter()
                .map(|&t| marquee.on_frame(t, Some(60.0)).offset_px)
                .collect::<Vec<_>>()
        };
        assert_eq!(run(), run());
    }

    #[test]
    fn test_transform_string() {
        let state = MarqueeState {
            offset_px: -12.5,
            last_frame_ms: Some(1.0),
        };
        assert_eq!(state.transform(), "translate3d(-12.5px, 0, 0)");
        assert_eq!(half_width(300.0), 150.0);
    }
}
