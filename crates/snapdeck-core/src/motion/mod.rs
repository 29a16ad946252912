//! Motion primitives shared by the pager and the decorative effects
//!
//! - `easing` - pure easing curves
//! - `timing` - progress and interpolation helpers

pub mod easing;
pub mod timing;

pub use easing::Easing;
