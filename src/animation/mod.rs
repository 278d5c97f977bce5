//! Entrance transitions for primitives that enter a render pass.
//!
//! [`schedule`] turns entered primitives into [`AnimationPlan`]s with a
//! staggered delay; [`AnimationTimeline`] tracks the plans in flight against
//! an explicit clock so a later pass can cancel them.

mod easing;
mod plan;
mod timeline;

pub use easing::Easing;
pub use plan::{
    AREA_OUTLINE_DURATION_FACTOR, AnimationConfig, AnimationEffect, AnimationPlan,
    LINE_POINTER_GROW_MS, schedule,
};
pub use timeline::{AnimationSample, AnimationTimeline};
