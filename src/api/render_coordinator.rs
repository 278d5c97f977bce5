use tracing::{debug, trace};

use crate::animation::schedule;
use crate::core::axis_label::{place_x_label, place_y_label};
use crate::core::{
    ColorScale, NoDataPlaceholder, ShapeContext, annotate, enabled_series, grid_lines,
    legend_entries, resolve_axis_scales,
};
use crate::core::primitives::PrimitiveKey;
use crate::error::ChartResult;
use crate::render::{RenderPass, Renderer};

use super::ChartEngine;
use super::validation::validate_series;

pub(super) struct RenderCoordinator;

impl RenderCoordinator {
    /// annotate -> scales/colors -> shapes -> stage -> schedule -> apply -> commit.
    pub(super) fn render<R: Renderer>(engine: &mut ChartEngine<R>) -> ChartResult<()> {
        let config = &engine.config;
        let geometry = engine.geometry;
        validate_series(&engine.series, config.kind)?;

        let annotated = annotate(&engine.series);
        let enabled = enabled_series(&annotated);
        let colors = ColorScale::new(
            engine.series.len(),
            config.use_color_scale,
            &config.color_scale,
            config.palette(),
        )?;
        let scales = if config.kind.uses_axes() && !enabled.is_empty() {
            Some(resolve_axis_scales(
                geometry,
                &enabled,
                config.scale_settings(),
            )?)
        } else {
            None
        };

        let next = if enabled.is_empty() {
            Vec::new()
        } else {
            let context = ShapeContext {
                geometry,
                scales: scales.as_ref(),
                colors: &colors,
                color_assignment: config.color_assignment,
                options: config.shape_options(),
            };
            config.kind.shape_builder().build(&enabled, &context)?
        };

        let staged = engine.reconciler.stage(next)?;
        let delta = staged.delta().clone();
        let plans = schedule(config.kind, &delta.entered, geometry, config.animation());

        // Exits and updates both land on their final geometry at once.
        let cancelled: Vec<PrimitiveKey> = delta
            .exited
            .iter()
            .chain(delta.updated.iter().map(|primitive| &primitive.key))
            .filter(|key| engine.timeline.is_animating(key))
            .cloned()
            .collect();

        let mut axis_labels = Vec::new();
        if config.kind.uses_axes() {
            if config.show_x_axis {
                axis_labels.extend(place_x_label(&config.axis_labels, geometry));
            }
            if config.show_y_axis {
                axis_labels.extend(place_y_label(&config.axis_labels, geometry));
            }
        }

        let grid = scales
            .as_ref()
            .filter(|_| config.show_grid)
            .map(|scales| grid_lines(scales, config.show_x_axis, config.show_y_axis));

        let pass = RenderPass {
            geometry,
            delta,
            plans,
            cancelled,
            legend: if config.show_legend {
                legend_entries(&engine.series, &colors)
            } else {
                Vec::new()
            },
            axis_labels,
            grid,
            no_data: enabled
                .is_empty()
                .then(|| NoDataPlaceholder::centered(config.no_data_message.clone(), geometry)),
        };

        engine.renderer.apply(&pass)?;

        engine.reconciler.commit(staged);
        let cancelled = engine.timeline.cancel(&pass.cancelled);
        if !cancelled.is_empty() {
            debug!(count = cancelled.len(), "cancelled in-flight animations");
        }
        engine.timeline.start(&pass.plans);
        trace!(
            live = engine.reconciler.len(),
            animating = engine.timeline.active_len(),
            "render pass committed"
        );
        engine.last_pass = Some(pass);
        Ok(())
    }
}
