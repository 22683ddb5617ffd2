use crate::view::ViewId;

/// Position of an indicator in declaration order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IndicatorId(pub usize);

impl std::fmt::Display for IndicatorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Indicator {
    pub id: IndicatorId,
    pub label: String,
    pub view: ViewId,
    /// Index of the bound view, resolved when the controller is built
    pub(crate) ordinal: usize,
    pub(crate) active: bool,
}

impl Indicator {
    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn ordinal(&self) -> usize {
        self.ordinal
    }
}

/// Indicators grouped by the view they control
#[derive(Debug, Default)]
pub struct IndicatorSet {
    indicators: Vec<Indicator>,
    by_view: Vec<Vec<IndicatorId>>,
}

impl IndicatorSet {
    pub(crate) fn new(indicators: Vec<Indicator>, view_count: usize) -> Self {
        let mut by_view = vec![vec![]; view_count];

        for indicator in &indicators {
            by_view[indicator.ordinal].push(indicator.id);
        }

        Self {
            indicators,
            by_view,
        }
    }

    pub fn get(&self, id: IndicatorId) -> Option<&Indicator> {
        self.indicators.get(id.0)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Indicator> {
        self.indicators.iter()
    }

    pub fn len(&self) -> usize {
        self.indicators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indicators.is_empty()
    }

    pub fn for_view(&self, ordinal: usize) -> &[IndicatorId] {
        self.by_view.get(ordinal).map(Vec::as_slice).unwrap_or(&[])
    }

    pub(crate) fn set_active(&mut self, id: IndicatorId, active: bool) {
        if let Some(indicator) = self.indicators.get_mut(id.0) {
            indicator.active = active;
        }
    }
}
