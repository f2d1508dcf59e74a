use crate::animation::clock::Clock;
use crate::animation::transition::{Transition, TransitionFrame};
use crate::core::bounds::{BoundsLimiter, MinMaxBounds};
use crate::core::config::ViewportConfig;
use crate::core::geo::{LatLng, Point, Size};
use crate::core::projection;
use crate::tiles::layout::TileLayout;

/// Manages the current view of one map: center, zoom and screen dimensions.
///
/// Owns the [`BoundsLimiter`] of that map, so every committed center is
/// limited against an envelope cached for this viewport only.
#[derive(Debug, Clone)]
pub struct Viewport {
    center: LatLng,
    zoom: f64,
    size: Size,
    config: ViewportConfig,
    limiter: BoundsLimiter,
}

impl Viewport {
    /// Creates a new viewport, clamping zoom to the configured limits and
    /// limiting the center
    pub fn new(center: LatLng, zoom: f64, size: Size, config: ViewportConfig) -> Self {
        let mut viewport = Self {
            center,
            zoom: config.clamp_zoom(zoom),
            size,
            config,
            limiter: BoundsLimiter::new(),
        };
        viewport.center = viewport.limit(&center, viewport.zoom);
        viewport
    }

    pub fn center(&self) -> LatLng {
        self.center
    }

    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn config(&self) -> &ViewportConfig {
        &self.config
    }

    /// Limits a candidate center at `zoom` for the current size
    pub fn limit(&mut self, center: &LatLng, zoom: f64) -> LatLng {
        let limit_to_center = self.config.bounds_mode.limits_to_center();
        self.limiter
            .limit_center_at_zoom(center, zoom, &self.size, limit_to_center)
    }

    /// Envelope of legal centers for the current zoom and size
    pub fn bounds(&mut self) -> MinMaxBounds {
        let limit_to_center = self.config.bounds_mode.limits_to_center();
        self.limiter
            .get_bounds_min_max(self.zoom, &self.size, limit_to_center)
    }

    /// Sets the center of the viewport with bounds checking
    pub fn set_center(&mut self, center: LatLng) {
        self.center = self.limit(&center, self.zoom);
    }

    /// Sets the zoom level, clamping to the configured range
    pub fn set_zoom(&mut self, zoom: f64) {
        self.zoom = self.config.clamp_zoom(zoom);
        let center = self.center;
        self.center = self.limit(&center, self.zoom);
    }

    /// Sets center and zoom in one step
    pub fn set_view(&mut self, center: LatLng, zoom: f64) {
        self.zoom = self.config.clamp_zoom(zoom);
        self.center = self.limit(&center, self.zoom);
    }

    /// Sets the viewport size
    pub fn set_size(&mut self, size: Size) {
        self.size = size;
        let center = self.center;
        self.center = self.limit(&center, self.zoom);
    }

    /// Converts a geographical coordinate to a pixel relative to the viewport top-left
    pub fn lat_lng_to_pixel(&self, lat_lng: &LatLng) -> Point {
        projection::lat_lng_to_pixel(lat_lng, &self.center, self.zoom, &self.size, None)
    }

    /// Converts a pixel relative to the viewport top-left back to a geographical coordinate
    pub fn pixel_to_lat_lng(&self, pixel: &Point) -> LatLng {
        projection::pixel_to_lat_lng(pixel, &self.center, self.zoom, &self.size, None)
    }

    /// Commits a drag: the map content moved by `pixel_delta` on screen.
    /// Returns the committed (limited) center.
    pub fn pan(&mut self, pixel_delta: Point) -> LatLng {
        let moved = projection::pixel_to_lat_lng(
            &self.size.center(),
            &self.center,
            self.zoom,
            &self.size,
            Some(&pixel_delta),
        );
        self.set_center(moved);
        self.center
    }

    /// Zooms while keeping the geographic point under `focus` fixed on screen
    pub fn zoom_around(&mut self, focus: &Point, zoom: f64) {
        let zoom = self.config.clamp_zoom(zoom);
        let around = self.pixel_to_lat_lng(focus);
        let center =
            projection::zoom_center_around(&self.center, &around, self.zoom, zoom, &self.size);
        self.zoom = zoom;
        self.center = self.limit(&center, zoom);
    }

    /// How many screens a move to `target`/`zoom` would travel
    pub fn distance_in_screens(&self, target: &LatLng, zoom: f64) -> f64 {
        projection::distance_in_screens(target, zoom, &self.center, self.zoom, &self.size, None)
    }

    /// Plans an animated move to `target` at `zoom`.
    ///
    /// Returns `None` when the caller should jump directly: animation is
    /// disabled or the target is more than `animate_max_screens` away (or the
    /// distance is undefined, as for a zero-size viewport). With
    /// `zoom_around` the target center is derived so that the given point
    /// stays fixed on screen.
    pub fn plan_transition(
        &mut self,
        target: LatLng,
        zoom: f64,
        zoom_around: Option<LatLng>,
        clock: &impl Clock,
    ) -> Option<Transition> {
        let zoom = self.config.clamp_zoom(zoom);
        let target = match &zoom_around {
            Some(around) => {
                projection::zoom_center_around(&self.center, around, self.zoom, zoom, &self.size)
            }
            None => target,
        };
        let target = self.limit(&target, zoom);

        let animation = &self.config.animation;
        if !animation.enabled {
            return None;
        }

        let distance = self.distance_in_screens(&target, zoom);
        if distance.is_nan() || distance > animation.animate_max_screens {
            log::debug!(
                "skipping transition: {:.2} screens exceeds limit {}",
                distance,
                animation.animate_max_screens
            );
            return None;
        }

        Some(Transition::start(
            clock,
            self.center,
            self.zoom,
            target,
            zoom,
            zoom_around,
            self.size,
            animation.duration_ms,
            animation.easing,
        ))
    }

    /// Moves toward `target`/`zoom`, animating when the plan allows it and
    /// jumping otherwise. Returns the transition to drive, if any.
    pub fn fly_to(
        &mut self,
        target: LatLng,
        zoom: f64,
        zoom_around: Option<LatLng>,
        clock: &impl Clock,
    ) -> Option<Transition> {
        let transition = self.plan_transition(target, zoom, zoom_around, clock);
        if transition.is_none() {
            match &zoom_around {
                Some(around) => {
                    let focus = self.lat_lng_to_pixel(around);
                    self.zoom_around(&focus, zoom);
                }
                None => self.set_view(target, zoom),
            }
        }
        transition
    }

    /// Applies the frame of `transition` at the clock's time, limited like
    /// any other center change
    pub fn apply_transition_frame(
        &mut self,
        transition: &Transition,
        clock: &impl Clock,
    ) -> TransitionFrame {
        let frame = transition.sample_with(clock);
        self.set_view(frame.center, frame.zoom);
        TransitionFrame {
            center: self.center,
            zoom: self.zoom,
            finished: frame.finished,
        }
    }

    /// Tiles covering the viewport
    pub fn tile_layout(&self) -> TileLayout {
        TileLayout::compute(&self.center, self.zoom, &self.size, None)
    }

    /// Tiles covering the viewport while a drag of `pixel_delta` is pending
    pub fn tile_layout_with_delta(&self, pixel_delta: &Point) -> TileLayout {
        TileLayout::compute(&self.center, self.zoom, &self.size, Some(pixel_delta))
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(
            LatLng::new(0.0, 0.0),
            2.0,
            Size::new(800.0, 600.0),
            ViewportConfig::default(),
        )
    }
}
