pub mod clock;
pub mod easing;
pub mod transition;

// Re-export commonly used types and functions for convenience
pub use clock::{Clock, ManualClock, SystemClock};
pub use easing::{ease_out_quad, EasingType};
pub use transition::{Transition, TransitionFrame};
