use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::core::primitives::ShapeDatum;
use crate::core::{ChartKind, Series};
use crate::error::{ChartResult, ConfigError};

/// Event emitted after a legend entry toggles a series.
pub const LEGEND_CLICK: &str = "legendClick";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShapeEventKind {
    Click,
    MouseOver,
    MouseOut,
}

impl ShapeEventKind {
    #[must_use]
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::Click => "Click",
            Self::MouseOver => "MouseOver",
            Self::MouseOut => "MouseOut",
        }
    }

    /// Event type for this interaction on `kind` charts, e.g. `barClick`.
    #[must_use]
    pub fn event_type(self, kind: ChartKind) -> String {
        format!("{}{}", kind.event_prefix(), self.suffix())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum EventPayload {
    /// Series list after a legend toggle.
    Legend(Vec<Series>),
    /// Datum bound to the shape under the pointer.
    Shape(ShapeDatum),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartEvent {
    pub event_type: String,
    pub payload: EventPayload,
}

pub type EventHandler = Box<dyn FnMut(&ChartEvent)>;

/// Named-listener event hub owned by one chart instance.
///
/// Event types are fixed at construction. Listeners register under
/// `"type.name"`; registering an existing typename replaces the earlier
/// listener and moves it to the end of the call order.
#[derive(Default)]
pub struct InteractionDispatcher {
    listeners: IndexMap<String, IndexMap<String, EventHandler>>,
}

impl fmt::Debug for InteractionDispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for (event_type, listeners) in &self.listeners {
            map.entry(event_type, &listeners.keys().collect::<Vec<_>>());
        }
        map.finish()
    }
}

impl InteractionDispatcher {
    #[must_use]
    pub fn new<I, S>(event_types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            listeners: event_types
                .into_iter()
                .map(|event_type| (event_type.into(), IndexMap::new()))
                .collect(),
        }
    }

    /// Declares `legendClick` plus the three shape events for `kind`.
    #[must_use]
    pub fn for_chart(kind: ChartKind) -> Self {
        let mut types = vec![LEGEND_CLICK.to_owned()];
        types.extend(
            [
                ShapeEventKind::Click,
                ShapeEventKind::MouseOver,
                ShapeEventKind::MouseOut,
            ]
            .into_iter()
            .map(|event| event.event_type(kind)),
        );
        Self::new(types)
    }

    #[must_use]
    pub fn declares(&self, event_type: &str) -> bool {
        self.listeners.contains_key(event_type)
    }

    pub fn event_types(&self) -> impl Iterator<Item = &str> {
        self.listeners.keys().map(String::as_str)
    }

    /// Listener names registered for `event_type`, in call order.
    pub fn listener_names(&self, event_type: &str) -> ChartResult<Vec<&str>> {
        Ok(self
            .listeners_for(event_type)?
            .keys()
            .map(String::as_str)
            .collect())
    }

    pub fn on<F>(&mut self, typename: &str, handler: F) -> ChartResult<()>
    where
        F: FnMut(&ChartEvent) + 'static,
    {
        let (event_type, name) = split_typename(typename);
        let listeners = self.listeners_for_mut(event_type)?;
        if listeners.shift_remove(name).is_some() {
            debug!(event_type, name, "replacing event listener");
        }
        listeners.insert(name.to_owned(), Box::new(handler));
        Ok(())
    }

    /// Removes the listener registered under `typename`; returns whether one existed.
    pub fn off(&mut self, typename: &str) -> ChartResult<bool> {
        let (event_type, name) = split_typename(typename);
        Ok(self
            .listeners_for_mut(event_type)?
            .shift_remove(name)
            .is_some())
    }

    /// Calls every listener for `event_type` in registration order and
    /// returns how many ran.
    pub fn emit(&mut self, event_type: &str, payload: EventPayload) -> ChartResult<usize> {
        self.emit_matching(event_type, payload, |_| true)
    }

    /// Like [`Self::emit`], restricted to listeners whose name passes `filter`.
    pub fn emit_matching<F>(
        &mut self,
        event_type: &str,
        payload: EventPayload,
        filter: F,
    ) -> ChartResult<usize>
    where
        F: Fn(&str) -> bool,
    {
        let event = ChartEvent {
            event_type: event_type.to_owned(),
            payload,
        };
        let mut ran = 0;
        for (name, handler) in self.listeners_for_mut(event_type)? {
            if filter(name.as_str()) {
                handler(&event);
                ran += 1;
            }
        }
        trace!(event_type, listeners = ran, "event dispatched");
        Ok(ran)
    }

    fn listeners_for(&self, event_type: &str) -> ChartResult<&IndexMap<String, EventHandler>> {
        self.listeners
            .get(event_type)
            .ok_or_else(|| ConfigError::UnknownEvent(event_type.to_owned()).into())
    }

    fn listeners_for_mut(
        &mut self,
        event_type: &str,
    ) -> ChartResult<&mut IndexMap<String, EventHandler>> {
        self.listeners
            .get_mut(event_type)
            .ok_or_else(|| ConfigError::UnknownEvent(event_type.to_owned()).into())
    }
}

/// Splits `"type.name"`; a bare type registers the unnamed listener.
fn split_typename(typename: &str) -> (&str, &str) {
    typename.split_once('.').unwrap_or((typename, ""))
}

#[cfg(test)]
mod tests {
    use super::split_typename;

    #[test]
    fn typename_splits_on_first_dot() {
        assert_eq!(split_typename("legendClick.chart"), ("legendClick", "chart"));
        assert_eq!(split_typename("barClick"), ("barClick", ""));
        assert_eq!(split_typename("a.b.c"), ("a", "b.c"));
    }
}
