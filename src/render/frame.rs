use crate::animation::AnimationPlan;
use crate::core::legend::LegendEntry;
use crate::core::primitives::PrimitiveKey;
use crate::core::{AxisLabelPlacement, Geometry, GridLines, NoDataPlaceholder};
use crate::error::{ChartError, ChartResult};
use crate::render::ReconcileDelta;

/// Everything a backend needs to bring its surface in line with one pass.
///
/// Backends apply `delta.exited` before `delta.updated` and `delta.entered`.
/// `plans` has one entry per entered primitive, in the same order.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderPass {
    pub geometry: Geometry,
    pub delta: ReconcileDelta,
    pub plans: Vec<AnimationPlan>,
    /// Keys whose in-flight entrance transition was cut short by this pass.
    pub cancelled: Vec<PrimitiveKey>,
    pub legend: Vec<LegendEntry>,
    pub axis_labels: Vec<AxisLabelPlacement>,
    /// Present when grid lines are enabled and the chart has axis scales.
    pub grid: Option<GridLines>,
    pub no_data: Option<NoDataPlaceholder>,
}

impl RenderPass {
    pub fn validate(&self) -> ChartResult<()> {
        if !self.geometry.plot_width.is_finite()
            || !self.geometry.plot_height.is_finite()
            || self.geometry.plot_width <= 0.0
            || self.geometry.plot_height <= 0.0
        {
            return Err(ChartError::InvalidViewport {
                width: self.geometry.outer_width(),
                height: self.geometry.outer_height(),
            });
        }

        for primitive in self.delta.updated.iter().chain(&self.delta.entered) {
            primitive.validate()?;
        }
        if self.plans.len() != self.delta.entered.len() {
            return Err(ChartError::InvalidData(format!(
                "render pass has {} animation plans for {} entered primitives",
                self.plans.len(),
                self.delta.entered.len()
            )));
        }
        for plan in &self.plans {
            plan.validate()?;
        }
        if let Some(grid) = &self.grid {
            if grid
                .vertical
                .iter()
                .chain(&grid.horizontal)
                .any(|position| !position.is_finite())
            {
                return Err(ChartError::InvalidData(
                    "render pass grid positions must be finite".to_owned(),
                ));
            }
        }
        for entry in &self.legend {
            entry.color.validate()?;
        }
        Ok(())
    }
}
