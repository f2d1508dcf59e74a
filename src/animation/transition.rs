use crate::animation::clock::Clock;
use crate::animation::easing::EasingType;
use crate::core::geo::{LatLng, Size};
use crate::core::projection::zoom_center_around;
use serde::{Deserialize, Serialize};

/// One sampled step of a [`Transition`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TransitionFrame {
    pub center: LatLng,
    pub zoom: f64,
    pub finished: bool,
}

/// A pan/zoom animation from one view to another.
///
/// Holds no timer of its own; [`sample`](Transition::sample) is called with a
/// timestamp from the driver's [`Clock`]. Centers produced here are not
/// limited, the owning viewport clamps each frame before committing it.
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    from_center: LatLng,
    from_zoom: f64,
    to_center: LatLng,
    to_zoom: f64,
    zoom_around: Option<LatLng>,
    size: Size,
    start_ms: f64,
    duration_ms: f64,
    easing: EasingType,
}

impl Transition {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        from_center: LatLng,
        from_zoom: f64,
        to_center: LatLng,
        to_zoom: f64,
        zoom_around: Option<LatLng>,
        size: Size,
        start_ms: f64,
        duration_ms: f64,
        easing: EasingType,
    ) -> Self {
        Self {
            from_center,
            from_zoom,
            to_center,
            to_zoom,
            zoom_around,
            size,
            start_ms,
            duration_ms,
            easing,
        }
    }

    /// Starts a transition at the clock's current time
    #[allow(clippy::too_many_arguments)]
    pub fn start(
        clock: &impl Clock,
        from_center: LatLng,
        from_zoom: f64,
        to_center: LatLng,
        to_zoom: f64,
        zoom_around: Option<LatLng>,
        size: Size,
        duration_ms: f64,
        easing: EasingType,
    ) -> Self {
        Self::new(
            from_center,
            from_zoom,
            to_center,
            to_zoom,
            zoom_around,
            size,
            clock.now_ms(),
            duration_ms,
            easing,
        )
    }

    pub fn target_center(&self) -> LatLng {
        self.to_center
    }

    pub fn target_zoom(&self) -> f64 {
        self.to_zoom
    }

    /// Linear progress in `[0, 1]` at `now_ms`
    pub fn progress(&self, now_ms: f64) -> f64 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        ((now_ms - self.start_ms) / self.duration_ms).clamp(0.0, 1.0)
    }

    /// Intermediate view at `now_ms`. The last frame lands exactly on the target.
    pub fn sample(&self, now_ms: f64) -> TransitionFrame {
        let progress = self.progress(now_ms);
        if progress >= 1.0 {
            return TransitionFrame {
                center: self.to_center,
                zoom: self.to_zoom,
                finished: true,
            };
        }

        let eased = self.easing.apply(progress);
        let zoom = self.from_zoom + (self.to_zoom - self.from_zoom) * eased;
        let center = match &self.zoom_around {
            Some(around) => {
                zoom_center_around(&self.from_center, around, self.from_zoom, zoom, &self.size)
            }
            None => self.from_center.lerp(&self.to_center, eased),
        };

        TransitionFrame {
            center,
            zoom,
            finished: false,
        }
    }

    pub fn sample_with(&self, clock: &impl Clock) -> TransitionFrame {
        self.sample(clock.now_ms())
    }
}
