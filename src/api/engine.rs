use std::cell::RefCell;
use std::rc::Rc;

use crate::animation::AnimationTimeline;
use crate::core::{Geometry, Series};
use crate::error::ChartResult;
use crate::interaction::InteractionDispatcher;
use crate::render::{ReconciliationEngine, RenderPass, Renderer};

use super::ChartEngineConfig;
use super::render_coordinator::RenderCoordinator;

/// Main orchestration facade consumed by host applications.
///
/// `ChartEngine` owns the caller's series, the retained primitive set, the
/// in-flight animation timeline, and the event dispatcher, and drives the
/// renderer with one [`RenderPass`] per render.
pub struct ChartEngine<R: Renderer> {
    pub(super) renderer: R,
    pub(super) config: ChartEngineConfig,
    pub(super) geometry: Geometry,
    pub(super) series: Vec<Series>,
    pub(super) reconciler: ReconciliationEngine,
    pub(super) timeline: AnimationTimeline,
    pub(super) dispatcher: InteractionDispatcher,
    /// Series list queued by the internal legend listener; applied once
    /// dispatch has returned.
    pub(super) pending_series: Rc<RefCell<Option<Vec<Series>>>>,
    pub(super) last_pass: Option<RenderPass>,
}

impl<R: Renderer> ChartEngine<R> {
    /// Runs the full pipeline against the current series and configuration.
    ///
    /// On error the retained primitive set, timeline, and renderer state are
    /// left as they were before the call.
    pub fn render(&mut self) -> ChartResult<()> {
        RenderCoordinator::render(self)
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
