use eframe::egui;
use serde::{
    Deserialize,
    Serialize,
};

use super::modal::{
    action_buttons,
    Modal,
    ModalResult,
};
use crate::gen::DEFAULT_MODEL;

/// Process-wide configuration with explicit load/save points: loaded from the
/// settings file at startup, saved when the user confirms an edit here.
#[derive(Clone, Serialize, Deserialize)]
pub struct SettingsData {
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_model")]
    pub model: String,
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

impl Default for SettingsData {
    fn default() -> Self {
        Self { api_key: String::new(), model: default_model() }
    }
}

pub struct SettingsModal {
    modal: Modal<SettingsData>,
}

impl SettingsModal {
    pub fn new() -> Self {
        Self {
            modal: Modal::new("Settings").with_fixed_size(egui::Vec2::new(420.0, 180.0)),
        }
    }

    pub fn open_settings(&mut self, current: SettingsData) {
        *self.modal.data_mut() = current;
        self.modal.open();
    }

    pub fn is_open(&self) -> bool {
        self.modal.is_open()
    }

    pub fn show(&mut self, ctx: &egui::Context) -> Option<SettingsData> {
        let result = self.modal.show(ctx, |ui, data| {
            ui.label("Generative language API key:");
            ui.add(
                egui::TextEdit::singleline(&mut data.api_key)
                    .password(true)
                    .desired_width(f32::INFINITY),
            );
            ui.small("Leave empty to fall back to the GEMINI_API_KEY environment variable.");

            ui.add_space(10.0);

            ui.horizontal(|ui| {
                ui.label("Model:");
                ui.text_edit_singleline(&mut data.model);
                if ui.button("Default").clicked() {
                    data.model = default_model();
                }
            });

            ui.add_space(15.0);
            action_buttons(ui, data, "Save", !data.model.trim().is_empty())
        });

        match result {
            Some(ModalResult::Confirmed(mut settings)) => {
                settings.api_key = settings.api_key.trim().to_string();
                settings.model = settings.model.trim().to_string();
                Some(settings)
            }
            _ => None,
        }
    }
}

impl Default for SettingsModal {
    fn default() -> Self {
        Self::new()
    }
}
