use crate::gui::{
    error_modal::ErrorModal,
    modal::Modal,
    settings::SettingsModal,
};

pub struct Modals {
    pub error: ErrorModal,
    pub settings: SettingsModal,
    pub start_over: Modal<()>,
}

impl Default for Modals {
    fn default() -> Self {
        Self {
            error: ErrorModal::new(),
            settings: SettingsModal::new(),
            start_over: Modal::new("Start Over"),
        }
    }
}
