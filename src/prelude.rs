//! Prelude module for common tileview types and traits
//!
//! This module re-exports the most commonly used types, traits, and functions
//! for easy importing with `use tileview::prelude::*;`

pub use crate::core::{
    bounds::{absolute_bounds, BoundsLimiter, MinMaxBounds},
    config::{AnimationConfig, BoundsMode, ViewportConfig},
    geo::{LatLng, Point, Size, TileCoord, TilePoint},
    projection,
    viewport::Viewport,
};

pub use crate::animation::{
    ease_out_quad, Clock, EasingType, ManualClock, SystemClock, Transition, TransitionFrame,
};

pub use crate::tiles::{PlacedTile, TileLayout};

pub use crate::{Error as MapError, Result};
