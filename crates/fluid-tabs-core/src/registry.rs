//! Ordered tab collection with a bijective value ↔ index map.

use std::cell::Cell;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::rc::Rc;

use crate::{Error, Result};

/// Position and size of a tab along the indicator axis
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TabSpan {
    pub start: f64,
    pub extent: f64,
}

impl TabSpan {
    pub fn new(start: f64, extent: f64) -> Self {
        Self { start, extent }
    }
}

/// A mounted tab whose layout can be queried at any time.
///
/// Geometry is read fresh every frame; implementations should report the
/// current layout rather than a snapshot taken at registration.
pub trait TabGeometry {
    fn span(&self) -> TabSpan;
}

impl TabGeometry for TabSpan {
    fn span(&self) -> TabSpan {
        *self
    }
}

/// Shared cell for layouts that change after registration
impl TabGeometry for Rc<Cell<TabSpan>> {
    fn span(&self) -> TabSpan {
        self.get()
    }
}

pub struct TabRegistry<V> {
    values: Vec<V>,
    tabs: Vec<Box<dyn TabGeometry>>,
    index_of: HashMap<V, usize>,
}

impl<V> Default for TabRegistry<V> {
    fn default() -> Self {
        Self {
            values: Vec::new(),
            tabs: Vec::new(),
            index_of: HashMap::new(),
        }
    }
}

impl<V: fmt::Debug> fmt::Debug for TabRegistry<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TabRegistry")
            .field("values", &self.values)
            .finish_non_exhaustive()
    }
}

impl<V> TabRegistry<V>
where
    V: Clone + Eq + Hash + fmt::Debug,
{
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    /// Append a tab in mount order
    pub fn register(&mut self, value: V, tab: impl TabGeometry + 'static) -> Result<usize> {
        let index = self.len();
        self.insert(index, value, tab)?;
        Ok(index)
    }

    /// Insert a tab at `index`, shifting later tabs
    pub fn insert(&mut self, index: usize, value: V, tab: impl TabGeometry + 'static) -> Result<()> {
        if self.index_of.contains_key(&value) {
            return Err(Error::DuplicateValue(format!("{:?}", value)));
        }
        if index > self.len() {
            return Err(Error::MissingTab {
                index,
                len: self.len(),
            });
        }

        self.values.insert(index, value);
        self.tabs.insert(index, Box::new(tab));
        self.rebuild_index();
        Ok(())
    }

    /// Remove a tab; later tabs move down so indices stay contiguous
    pub fn unregister(&mut self, value: &V) -> Result<usize> {
        let index = self
            .index_of(value)
            .ok_or_else(|| Error::UnknownValue(format!("{:?}", value)))?;

        self.values.remove(index);
        self.tabs.remove(index);
        self.rebuild_index();
        Ok(index)
    }

    #[inline]
    pub fn index_of(&self, value: &V) -> Option<usize> {
        self.index_of.get(value).copied()
    }

    #[inline]
    pub fn value_at(&self, index: usize) -> Option<&V> {
        self.values.get(index)
    }

    pub fn values(&self) -> &[V] {
        &self.values
    }

    /// Live geometry of the tab at `index`
    pub fn span(&self, index: usize) -> Result<TabSpan> {
        let tab = self.tabs.get(index).ok_or(Error::MissingTab {
            index,
            len: self.len(),
        })?;

        let span = tab.span();
        if !span.start.is_finite() || !span.extent.is_finite() || span.extent <= 0.0 {
            return Err(Error::InvalidGeometry {
                index,
                start: span.start,
                extent: span.extent,
            });
        }
        Ok(span)
    }

    fn rebuild_index(&mut self) {
        self.index_of = self
            .values
            .iter()
            .enumerate()
            .map(|(index, value)| (value.clone(), index))
            .collect();
    }
}
