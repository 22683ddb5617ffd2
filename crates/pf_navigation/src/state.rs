/// The single source of navigation truth, owned by the controller
#[derive(Debug, Clone, PartialEq)]
pub struct NavigationState {
    active: usize,
    activating: Option<usize>,
}

impl NavigationState {
    pub(crate) fn new(initial: usize) -> Self {
        Self {
            active: initial,
            activating: None,
        }
    }

    pub fn active(&self) -> usize {
        self.active
    }

    /// Ordinal of the view whose activation is currently running
    pub fn activating(&self) -> Option<usize> {
        self.activating
    }

    pub fn is_activating(&self) -> bool {
        self.activating.is_some()
    }

    pub(crate) fn set_active(&mut self, ordinal: usize) {
        self.active = ordinal;
    }

    pub(crate) fn begin(&mut self, ordinal: usize) {
        self.activating = Some(ordinal);
    }

    pub(crate) fn finish(&mut self) {
        self.activating = None;
    }
}
