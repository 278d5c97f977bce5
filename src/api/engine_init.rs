use std::cell::RefCell;
use std::rc::Rc;

use tracing::debug;

use crate::animation::AnimationTimeline;
use crate::error::ChartResult;
use crate::interaction::{EventPayload, InteractionDispatcher, LEGEND_CLICK};
use crate::render::{ReconciliationEngine, Renderer};

use super::validation::validate_config;
use super::{ChartEngine, ChartEngineConfig};

/// Listener name the engine uses for its own legend subscription.
pub const ENGINE_LEGEND_LISTENER: &str = "chart";

impl<R: Renderer> ChartEngine<R> {
    /// Creates an engine with no data. Nothing is drawn until [`Self::render`].
    pub fn new(renderer: R, config: ChartEngineConfig) -> ChartResult<Self> {
        let geometry = validate_config(&config)?;

        let pending_series = Rc::new(RefCell::new(None));
        let mut dispatcher = InteractionDispatcher::for_chart(config.kind);
        let queue = Rc::clone(&pending_series);
        dispatcher.on(
            &format!("{LEGEND_CLICK}.{ENGINE_LEGEND_LISTENER}"),
            move |event| {
                if let EventPayload::Legend(series) = &event.payload {
                    *queue.borrow_mut() = Some(series.clone());
                }
            },
        )?;

        debug!(
            kind = ?config.kind,
            plot_width = geometry.plot_width,
            plot_height = geometry.plot_height,
            "chart engine created"
        );

        Ok(Self {
            renderer,
            config,
            geometry,
            series: Vec::new(),
            reconciler: ReconciliationEngine::new(),
            timeline: AnimationTimeline::new(),
            dispatcher,
            pending_series,
            last_pass: None,
        })
    }
}
