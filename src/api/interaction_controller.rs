use tracing::debug;

use crate::core::primitives::PrimitiveKey;
use crate::core::toggle;
use crate::error::{ChartError, ChartResult};
use crate::interaction::{ChartEvent, EventPayload, LEGEND_CLICK, ShapeEventKind};
use crate::render::Renderer;

use super::ChartEngine;
use super::engine_init::ENGINE_LEGEND_LISTENER;

impl<R: Renderer> ChartEngine<R> {
    /// Toggles the series at `index` (full-list position) and re-renders.
    ///
    /// The engine's own `legendClick` listener runs first and queues the
    /// toggled list. Other listeners are notified only once the re-render has
    /// committed; a failed render restores the previous series and notifies
    /// nobody else.
    pub fn legend_click(&mut self, index: usize) -> ChartResult<()> {
        let next = toggle(&self.series, index)?;
        let payload = EventPayload::Legend(next);
        self.dispatcher
            .emit_matching(LEGEND_CLICK, payload.clone(), |name| {
                name == ENGINE_LEGEND_LISTENER
            })?;

        let queued = self.pending_series.borrow_mut().take();
        if let Some(series) = queued {
            debug!(index, "applying legend toggle");
            let previous = std::mem::replace(&mut self.series, series);
            if let Err(err) = self.render() {
                self.series = previous;
                return Err(err);
            }
        }

        self.dispatcher
            .emit_matching(LEGEND_CLICK, payload, |name| name != ENGINE_LEGEND_LISTENER)?;
        Ok(())
    }

    pub fn shape_click(&mut self, key: &PrimitiveKey) -> ChartResult<usize> {
        self.emit_shape_event(ShapeEventKind::Click, key)
    }

    pub fn shape_mouse_over(&mut self, key: &PrimitiveKey) -> ChartResult<usize> {
        self.emit_shape_event(ShapeEventKind::MouseOver, key)
    }

    pub fn shape_mouse_out(&mut self, key: &PrimitiveKey) -> ChartResult<usize> {
        self.emit_shape_event(ShapeEventKind::MouseOut, key)
    }

    /// Registers a listener under `"type.name"`, replacing any listener with
    /// the same typename.
    pub fn on<F>(&mut self, typename: &str, handler: F) -> ChartResult<()>
    where
        F: FnMut(&ChartEvent) + 'static,
    {
        self.dispatcher.on(typename, handler)
    }

    pub fn off(&mut self, typename: &str) -> ChartResult<bool> {
        self.dispatcher.off(typename)
    }

    fn emit_shape_event(&mut self, kind: ShapeEventKind, key: &PrimitiveKey) -> ChartResult<usize> {
        let datum = self
            .reconciler
            .get(key)
            .map(|primitive| primitive.datum.clone())
            .ok_or_else(|| ChartError::InvalidData(format!("no live primitive `{key}`")))?;
        self.dispatcher
            .emit(&kind.event_type(self.config.kind), EventPayload::Shape(datum))
    }
}
