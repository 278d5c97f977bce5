use indexmap::IndexMap;

use crate::animation::{AnimationSample, AnimationTimeline};
use crate::core::primitives::{Primitive, PrimitiveKey};
use crate::core::{Geometry, Series};
use crate::interaction::InteractionDispatcher;
use crate::render::{RenderPass, Renderer};

use super::{ChartEngine, ChartEngineConfig};

impl<R: Renderer> ChartEngine<R> {
    #[must_use]
    pub fn config(&self) -> &ChartEngineConfig {
        &self.config
    }

    #[must_use]
    pub fn geometry(&self) -> Geometry {
        self.geometry
    }

    #[must_use]
    pub fn series(&self) -> &[Series] {
        &self.series
    }

    /// Primitives committed by the last successful render, in build order.
    #[must_use]
    pub fn primitives(&self) -> &IndexMap<PrimitiveKey, Primitive> {
        self.reconciler.primitives()
    }

    #[must_use]
    pub fn last_pass(&self) -> Option<&RenderPass> {
        self.last_pass.as_ref()
    }

    #[must_use]
    pub fn timeline(&self) -> &AnimationTimeline {
        &self.timeline
    }

    #[must_use]
    pub fn dispatcher(&self) -> &InteractionDispatcher {
        &self.dispatcher
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Interpolated state of `key` if it is still animating.
    #[must_use]
    pub fn sample(&self, key: &PrimitiveKey) -> Option<AnimationSample> {
        self.timeline.sample(key)
    }

    /// Advances the animation clock; returns keys whose entrance completed.
    pub fn advance_clock(&mut self, delta_ms: f64) -> Vec<PrimitiveKey> {
        self.timeline.advance(delta_ms)
    }
}
