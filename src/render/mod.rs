mod frame;
mod null_renderer;
mod reconcile;

pub use frame::RenderPass;
pub use null_renderer::NullRenderer;
pub use reconcile::{ReconcileDelta, ReconciliationEngine, StagedPass};

use crate::error::ChartResult;

/// Contract implemented by any drawing surface adapter.
///
/// Adapters receive the keyed delta of a pass, never the chart domain, so
/// drawing code stays isolated from scale, reconcile, and interaction logic.
pub trait Renderer {
    fn apply(&mut self, pass: &RenderPass) -> ChartResult<()>;
}
