use eframe::egui;

#[derive(Default, Clone)]
struct ErrorData {
    title: String,
    message: String,
    details: Option<String>,
}

/// Terminal-for-the-action error display: the failed action is reported, any
/// previously loaded deck stays as it was.
pub struct ErrorModal {
    open: bool,
    data: ErrorData,
}

impl ErrorModal {
    pub fn new() -> Self {
        Self { open: false, data: ErrorData::default() }
    }

    pub fn show_error(
        &mut self,
        title: impl Into<String>,
        message: impl Into<String>,
        details: Option<impl Into<String>>,
    ) {
        self.data = ErrorData {
            title: title.into(),
            message: message.into(),
            details: details.map(|d| d.into()),
        };

        self.open = true;
    }

    pub fn show(&mut self, ctx: &egui::Context) {
        if !self.open {
            return;
        }

        let modal = egui::Modal::new(egui::Id::new("error_modal")).show(ctx, |ui| {
            ui.set_width(420.0);

            ui.horizontal(|ui| {
                ui.label(egui::RichText::new("⚠").size(24.0).color(egui::Color32::RED));
                ui.label(egui::RichText::new(&self.data.title).size(18.0).strong());
            });

            ui.add_space(10.0);
            ui.label(&self.data.message);

            if let Some(details) = &self.data.details {
                ui.add_space(10.0);
                ui.collapsing("Details", |ui| {
                    ui.add(
                        egui::TextEdit::multiline(&mut details.as_str())
                            .desired_width(f32::INFINITY)
                            .desired_rows(4)
                            .code_editor(),
                    );
                });
            }

            ui.add_space(15.0);
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("OK").clicked() {
                    ui.close();
                }
            });
        });

        if modal.should_close() {
            self.open = false;
            self.data = ErrorData::default();
        }
    }
}

impl Default for ErrorModal {
    fn default() -> Self {
        Self::new()
    }
}
