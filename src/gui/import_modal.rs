use std::path::PathBuf;

use eframe::egui;
use rfd::FileDialog;

use super::modal::{
    action_buttons,
    Modal,
    ModalResult,
};

#[derive(Clone, Copy, PartialEq, Eq, Default)]
enum ImportTab {
    #[default]
    Topic,
    Words,
    File,
    Url,
}

#[derive(Clone, Default)]
pub struct ImportData {
    tab: ImportTab,
    topic: String,
    words: String,
    file_path: String,
    url: String,
}

/// One confirmed import action. The app dispatches exactly one background
/// task per request.
#[derive(Debug, Clone)]
pub enum ImportRequest {
    Topic(String),
    Words(String),
    File(PathBuf),
    Url(String),
}

pub struct ImportModal {
    modal: Modal<ImportData>,
}

impl ImportModal {
    pub fn new() -> Self {
        Self {
            modal: Modal::new("New Deck").with_fixed_size(egui::Vec2::new(460.0, 280.0)),
        }
    }

    pub fn open(&mut self) {
        self.modal.open();
    }

    pub fn is_open(&self) -> bool {
        self.modal.is_open()
    }

    /// `busy` disables confirmation while an ingestion task is outstanding,
    /// so a second request cannot be issued before the first resolves.
    pub fn show(&mut self, ctx: &egui::Context, busy: bool) -> Option<ImportRequest> {
        let result = self.modal.show(ctx, |ui, data| {
            ui.horizontal(|ui| {
                ui.selectable_value(&mut data.tab, ImportTab::Topic, "Topic");
                ui.selectable_value(&mut data.tab, ImportTab::Words, "Word List");
                ui.selectable_value(&mut data.tab, ImportTab::File, "File");
                ui.selectable_value(&mut data.tab, ImportTab::Url, "URL");
            });
            ui.separator();

            match data.tab {
                ImportTab::Topic => {
                    ui.label("Generate a deck about a topic:");
                    ui.text_edit_singleline(&mut data.topic);
                    ui.small("e.g. 水果, ordering food, HSK 2 verbs");
                }
                ImportTab::Words => {
                    ui.label("Words or phrases, one per line.");
                    ui.small("A line like 苹果: 我爱吃苹果 keeps that phrase as the example.");
                    egui::ScrollArea::vertical().max_height(140.0).show(ui, |ui| {
                        ui.add(
                            egui::TextEdit::multiline(&mut data.words)
                                .desired_rows(6)
                                .desired_width(f32::INFINITY),
                        );
                    });
                }
                ImportTab::File => {
                    ui.label("Import a deck file or a plain word list:");
                    ui.add_space(5.0);
                    if ui.button("Browse for File").clicked() {
                        if let Some(path) = FileDialog::new()
                            .add_filter("Deck files", &["json"])
                            .add_filter("Text files", &["txt"])
                            .pick_file()
                        {
                            data.file_path = path.display().to_string();
                        }
                    }
                    if !data.file_path.is_empty() {
                        ui.add_space(5.0);
                        ui.label(format!(
                            "Selected: {}",
                            std::path::Path::new(&data.file_path)
                                .file_name()
                                .unwrap_or_default()
                                .to_string_lossy()
                        ));
                    }
                }
                ImportTab::Url => {
                    ui.label("Fetch a deck or word list from a URL:");
                    ui.text_edit_singleline(&mut data.url);
                }
            }

            ui.add_space(15.0);

            let can_confirm = !busy
                && match data.tab {
                    ImportTab::Topic => !data.topic.trim().is_empty(),
                    ImportTab::Words => !data.words.trim().is_empty(),
                    ImportTab::File => !data.file_path.is_empty(),
                    ImportTab::Url => !data.url.trim().is_empty(),
                };

            action_buttons(ui, data, "Create Deck", can_confirm)
        });

        match result {
            Some(ModalResult::Confirmed(data)) => {
                let request = match data.tab {
                    ImportTab::Topic => ImportRequest::Topic(data.topic.trim().to_string()),
                    ImportTab::Words => ImportRequest::Words(data.words.clone()),
                    ImportTab::File => ImportRequest::File(PathBuf::from(&data.file_path)),
                    ImportTab::Url => ImportRequest::Url(data.url.trim().to_string()),
                };

                *self.modal.data_mut() = ImportData::default();
                Some(request)
            }
            Some(ModalResult::Cancelled) => {
                *self.modal.data_mut() = ImportData::default();
                None
            }
            None => None,
        }
    }
}

impl Default for ImportModal {
    fn default() -> Self {
        Self::new()
    }
}
