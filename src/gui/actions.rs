// A simple ui action queue so view functions only need shared references to the worksheet
#[derive(Debug, Clone, PartialEq)]
pub enum UiAction {
    // Navigation
    Navigate(Page),

    // Worksheet form
    SetField { id: &'static str, value: String },
    ToggleSection(u8),
    ExpandAll,
    CollapseAll,
    Save,
    StartOver,

    // Saved responses
    ToggleSummarySection(u8),
    Export,

    // Settings
    OpenSettings,
    ToggleDarkMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Page {
    #[default]
    Overview,
    Worksheet,
}

pub struct ActionQueue {
    actions: Vec<UiAction>,
}

impl ActionQueue {
    pub fn new() -> Self {
        Self { actions: Vec::new() }
    }

    pub fn push(&mut self, action: UiAction) {
        self.actions.push(action);
    }

    pub fn drain(&mut self) -> std::vec::Drain<'_, UiAction> {
        self.actions.drain(..)
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}

impl Default for ActionQueue {
    fn default() -> Self {
        Self::new()
    }
}
