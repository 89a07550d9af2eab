use crate::gui::{
    error_modal::ErrorModal,
    import_modal::ImportModal,
    settings_modal::SettingsModal,
};

pub struct Modals {
    pub import: ImportModal,
    pub settings: SettingsModal,
    pub error: ErrorModal,
}

impl Default for Modals {
    fn default() -> Self {
        Self {
            import: ImportModal::new(),
            settings: SettingsModal::new(),
            error: ErrorModal::new(),
        }
    }
}
