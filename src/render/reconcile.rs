use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::primitives::{Primitive, PrimitiveKey};
use crate::core::{AnnotatedSeries, ShapeBuilder, ShapeContext};
use crate::error::{ChartError, ChartResult};

/// Keyed difference between two consecutive primitive sets.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReconcileDelta {
    /// Keys present before and absent now, in previous order.
    pub exited: Vec<PrimitiveKey>,
    /// Primitives present in both passes, recomputed.
    pub updated: Vec<Primitive>,
    /// Primitives new in this pass.
    pub entered: Vec<Primitive>,
}

impl ReconcileDelta {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.exited.is_empty() && self.updated.is_empty() && self.entered.is_empty()
    }

    /// Keys touched by the pass: exits first, then updates, then enters.
    pub fn keys(&self) -> impl Iterator<Item = &PrimitiveKey> {
        self.exited.iter().chain(
            self.updated
                .iter()
                .chain(self.entered.iter())
                .map(|primitive| &primitive.key),
        )
    }
}

/// Pass computed against the current set but not yet committed.
#[derive(Debug, Clone, PartialEq)]
pub struct StagedPass {
    next: IndexMap<PrimitiveKey, Primitive>,
    delta: ReconcileDelta,
}

impl StagedPass {
    #[must_use]
    pub fn delta(&self) -> &ReconcileDelta {
        &self.delta
    }
}

/// Retained primitive set plus the keyed diff that replaces it.
///
/// The set is the only state kept between passes. Every pass is staged in
/// full before it replaces the set, so a failing pass leaves it untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReconciliationEngine {
    primitives: IndexMap<PrimitiveKey, Primitive>,
}

impl ReconciliationEngine {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn primitives(&self) -> &IndexMap<PrimitiveKey, Primitive> {
        &self.primitives
    }

    #[must_use]
    pub fn get(&self, key: &PrimitiveKey) -> Option<&Primitive> {
        self.primitives.get(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    /// Builds the next set with `builder` and commits it.
    pub fn reconcile(
        &mut self,
        builder: &dyn ShapeBuilder,
        enabled: &[&AnnotatedSeries],
        context: &ShapeContext<'_>,
    ) -> ChartResult<ReconcileDelta> {
        let staged = self.stage(builder.build(enabled, context)?)?;
        Ok(self.commit(staged))
    }

    /// Diffs `next` against the current set without modifying it.
    ///
    /// Fails on duplicate keys or invalid geometry.
    pub fn stage(&self, next: Vec<Primitive>) -> ChartResult<StagedPass> {
        let mut staged: IndexMap<PrimitiveKey, Primitive> = IndexMap::with_capacity(next.len());
        for primitive in next {
            primitive.validate()?;
            if staged.contains_key(&primitive.key) {
                return Err(ChartError::InvalidData(format!(
                    "duplicate primitive key `{}` in one pass",
                    primitive.key
                )));
            }
            staged.insert(primitive.key.clone(), primitive);
        }

        let exited: Vec<PrimitiveKey> = self
            .primitives
            .keys()
            .filter(|key| !staged.contains_key(*key))
            .cloned()
            .collect();
        let mut updated = Vec::new();
        let mut entered = Vec::new();
        for (key, primitive) in &staged {
            if self.primitives.contains_key(key) {
                updated.push(primitive.clone());
            } else {
                entered.push(primitive.clone());
            }
        }

        Ok(StagedPass {
            next: staged,
            delta: ReconcileDelta {
                exited,
                updated,
                entered,
            },
        })
    }

    /// Replaces the current set with a staged pass.
    pub fn commit(&mut self, staged: StagedPass) -> ReconcileDelta {
        debug!(
            entered = staged.delta.entered.len(),
            updated = staged.delta.updated.len(),
            exited = staged.delta.exited.len(),
            "primitive set reconciled"
        );
        self.primitives = staged.next;
        staged.delta
    }
}

#[cfg(test)]
mod tests {
    use super::ReconciliationEngine;
    use crate::core::color::Color;
    use crate::core::primitives::{
        Primitive, PrimitiveKey, PrimitiveRole, PrimitiveStyle, Shape, ShapeDatum,
    };
    use crate::core::PieSlice;

    fn marker(index: usize) -> Primitive {
        Primitive::new(
            PrimitiveKey::point(PrimitiveRole::Point, "s", index),
            Shape::Circle {
                cx: index as f64,
                cy: 0.0,
                r: 1.0,
            },
            PrimitiveStyle::filled(Color::rgb(0.0, 0.0, 0.0)),
            ShapeDatum::Slice(PieSlice {
                label: "s".to_owned(),
                value: 1.0,
                index,
                series_index: 0,
                start_angle: 0.0,
                end_angle: 0.0,
            }),
        )
    }

    #[test]
    fn duplicate_keys_leave_previous_set_untouched() {
        let mut engine = ReconciliationEngine::new();
        let staged = engine.stage(vec![marker(0)]).expect("stage");
        engine.commit(staged);

        let result = engine.stage(vec![marker(1), marker(1)]);
        assert!(result.is_err());
        assert_eq!(engine.len(), 1);
        assert!(engine.get(&PrimitiveKey::point(PrimitiveRole::Point, "s", 0)).is_some());
    }
}
