use std::collections::HashSet;
use std::hash::Hash;

use tracing::trace;

use crate::view::ViewId;

/// Vertical extent of an element in document coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Region {
    pub top: f32,
    pub height: f32,
}

impl Region {
    pub fn new(top: f32, height: f32) -> Self {
        Self { top, height }
    }

    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }

    pub fn contains(&self, y: f32) -> bool {
        y >= self.top && y < self.bottom()
    }

    fn overlap(&self, other: &Region) -> f32 {
        (self.bottom().min(other.bottom()) - self.top.max(other.top)).max(0.0)
    }
}

/// Tracks which section of a continuous document is under the scroll probe
#[derive(Debug)]
pub struct ScrollSpy {
    offset: f32,
    current: Option<ViewId>,
}

impl ScrollSpy {
    pub const DEFAULT_OFFSET: f32 = 100.0;

    pub fn new(offset: f32) -> Self {
        Self {
            offset,
            current: None,
        }
    }

    pub fn current(&self) -> Option<&ViewId> {
        self.current.as_ref()
    }

    /// Aligns the spy with a view the host scrolled to on its own
    pub fn sync(&mut self, view: &ViewId) {
        self.current = Some(view.clone());
    }

    /// Returns the section under the probe, only when it differs from the
    /// last reported one.
    pub fn observe<'a, I>(&mut self, scroll_y: f32, sections: I) -> Option<ViewId>
    where
        I: IntoIterator<Item = (&'a ViewId, Region)>,
    {
        let probe = scroll_y + self.offset;

        let (view, _) = sections
            .into_iter()
            .find(|(_, region)| region.contains(probe))?;

        if self.current.as_ref() == Some(view) {
            return None;
        }

        trace!(%view, probe, "Section entered");
        self.current = Some(view.clone());

        Some(view.clone())
    }
}

impl Default for ScrollSpy {
    fn default() -> Self {
        Self::new(Self::DEFAULT_OFFSET)
    }
}

/// Element level intersection, reporting the entering edge only
#[derive(Debug)]
pub struct IntersectionTracker<K> {
    threshold: f32,
    bottom_margin: f32,
    intersecting: HashSet<K>,
}

impl<K: Eq + Hash + Clone> IntersectionTracker<K> {
    pub const DEFAULT_THRESHOLD: f32 = 0.1;
    pub const DEFAULT_BOTTOM_MARGIN: f32 = 50.0;

    pub fn new(threshold: f32, bottom_margin: f32) -> Self {
        Self {
            threshold,
            bottom_margin,
            intersecting: HashSet::new(),
        }
    }

    /// True when `element` starts intersecting `viewport`
    pub fn observe(&mut self, key: &K, element: Region, viewport: Region) -> bool {
        let root = Region::new(
            viewport.top,
            (viewport.height - self.bottom_margin).max(0.0),
        );

        let visible = if element.height <= 0.0 {
            root.contains(element.top)
        } else {
            element.overlap(&root) / element.height >= self.threshold
        };

        if visible {
            self.intersecting.insert(key.clone())
        } else {
            self.intersecting.remove(key);
            false
        }
    }

    pub fn is_intersecting(&self, key: &K) -> bool {
        self.intersecting.contains(key)
    }
}

impl<K: Eq + Hash + Clone> Default for IntersectionTracker<K> {
    fn default() -> Self {
        Self::new(Self::DEFAULT_THRESHOLD, Self::DEFAULT_BOTTOM_MARGIN)
    }
}
