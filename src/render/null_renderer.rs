use std::collections::HashSet;

use crate::core::primitives::PrimitiveKey;
use crate::error::{ChartError, ChartResult};
use crate::render::{RenderPass, Renderer};

/// Headless renderer used by tests and engine usage without a surface.
///
/// It mirrors the set of live keys so tests can catch passes that enter a key
/// twice, update a key that was never entered, or exit an unknown key.
#[derive(Debug, Default)]
pub struct NullRenderer {
    live: HashSet<PrimitiveKey>,
    pub pass_count: usize,
    pub last_entered_count: usize,
    pub last_updated_count: usize,
    pub last_exited_count: usize,
    pub last_plan_count: usize,
}

impl NullRenderer {
    #[must_use]
    pub fn live_len(&self) -> usize {
        self.live.len()
    }

    #[must_use]
    pub fn is_live(&self, key: &PrimitiveKey) -> bool {
        self.live.contains(key)
    }
}

impl Renderer for NullRenderer {
    fn apply(&mut self, pass: &RenderPass) -> ChartResult<()> {
        pass.validate()?;

        for key in &pass.delta.exited {
            if !self.live.contains(key) {
                return Err(ChartError::InvalidData(format!(
                    "exit for unknown primitive `{key}`"
                )));
            }
        }
        for primitive in &pass.delta.updated {
            if !self.live.contains(&primitive.key) {
                return Err(ChartError::InvalidData(format!(
                    "update for primitive `{}` that was never entered",
                    primitive.key
                )));
            }
        }
        for primitive in &pass.delta.entered {
            if self.live.contains(&primitive.key) {
                return Err(ChartError::InvalidData(format!(
                    "primitive `{}` entered twice",
                    primitive.key
                )));
            }
        }

        for key in &pass.delta.exited {
            self.live.remove(key);
        }
        for primitive in &pass.delta.entered {
            self.live.insert(primitive.key.clone());
        }

        self.pass_count += 1;
        self.last_entered_count = pass.delta.entered.len();
        self.last_updated_count = pass.delta.updated.len();
        self.last_exited_count = pass.delta.exited.len();
        self.last_plan_count = pass.plans.len();
        Ok(())
    }
}
