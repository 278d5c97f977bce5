use indexmap::IndexMap;
use tracing::trace;

use crate::animation::AnimationPlan;
use crate::core::primitives::{PrimitiveKey, Shape};

/// Interpolated state of an animating primitive at the current clock.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationSample {
    pub shape: Shape,
    pub opacity: f64,
    pub dash_offset: Option<f64>,
    pub progress: f64,
}

#[derive(Debug, Clone, PartialEq)]
struct ActiveAnimation {
    plan: AnimationPlan,
    started_at_ms: f64,
}

/// In-flight entrance transitions, driven by an explicit clock.
///
/// Nothing here blocks or awaits: callers advance the clock and sample.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnimationTimeline {
    now_ms: f64,
    active: IndexMap<PrimitiveKey, ActiveAnimation>,
}

impl AnimationTimeline {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn now_ms(&self) -> f64 {
        self.now_ms
    }

    #[must_use]
    pub fn active_len(&self) -> usize {
        self.active.len()
    }

    #[must_use]
    pub fn is_animating(&self, key: &PrimitiveKey) -> bool {
        self.active.contains_key(key)
    }

    /// Starts `plans` at the current clock. Immediate plans are not tracked.
    pub fn start(&mut self, plans: &[AnimationPlan]) {
        for plan in plans.iter().filter(|plan| !plan.is_immediate()) {
            self.active.insert(
                plan.key.clone(),
                ActiveAnimation {
                    plan: plan.clone(),
                    started_at_ms: self.now_ms,
                },
            );
        }
    }

    /// Drops in-flight plans for `keys`; returns the keys that were animating.
    pub fn cancel<'a, I>(&mut self, keys: I) -> Vec<PrimitiveKey>
    where
        I: IntoIterator<Item = &'a PrimitiveKey>,
    {
        keys.into_iter()
            .filter_map(|key| self.active.shift_remove(key).map(|_| key.clone()))
            .collect()
    }

    /// Moves the clock forward and returns the keys whose plans completed.
    pub fn advance(&mut self, delta_ms: f64) -> Vec<PrimitiveKey> {
        if delta_ms.is_finite() && delta_ms > 0.0 {
            self.now_ms += delta_ms;
        }
        let now = self.now_ms;
        let finished: Vec<PrimitiveKey> = self
            .active
            .iter()
            .filter(|(_, active)| now - active.started_at_ms >= active.plan.end_ms())
            .map(|(key, _)| key.clone())
            .collect();
        for key in &finished {
            self.active.shift_remove(key);
        }
        if !finished.is_empty() {
            trace!(
                completed = finished.len(),
                remaining = self.active.len(),
                now_ms = now,
                "animations completed"
            );
        }
        finished
    }

    #[must_use]
    pub fn sample(&self, key: &PrimitiveKey) -> Option<AnimationSample> {
        self.active.get(key).map(|active| {
            let elapsed = self.now_ms - active.started_at_ms;
            AnimationSample {
                shape: active.plan.shape_at(elapsed),
                opacity: active.plan.opacity_at(elapsed),
                dash_offset: active.plan.dash_offset_at(elapsed),
                progress: active.plan.progress_at(elapsed),
            }
        })
    }
}
