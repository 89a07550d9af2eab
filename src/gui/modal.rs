use eframe::egui;

/// Shared shell for the app's dialog windows: open flag, working data, and a
/// result the caller consumes once.
pub struct Modal<T> {
    open: bool,
    title: String,
    data: T,
    fixed_size: Option<egui::Vec2>,
}

#[derive(Debug, Clone)]
pub enum ModalResult<T> {
    Confirmed(T),
    Cancelled,
}

impl<T: Default> Modal<T> {
    pub fn new(title: impl Into<String>) -> Self {
        Self { open: false, title: title.into(), data: T::default(), fixed_size: None }
    }
}

impl<T> Modal<T> {
    pub fn with_fixed_size(mut self, size: egui::Vec2) -> Self {
        self.fixed_size = Some(size);
        self
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn data_mut(&mut self) -> &mut T {
        &mut self.data
    }

    /// Draws the modal while open. A `Some` return from `content` closes it
    /// and hands the result to the caller.
    pub fn show<F>(&mut self, ctx: &egui::Context, content: F) -> Option<ModalResult<T>>
    where
        F: FnOnce(&mut egui::Ui, &mut T) -> Option<ModalResult<T>>,
    {
        if !self.open {
            return None;
        }

        let mut result = None;

        let mut window = egui::Window::new(&self.title)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO);

        if let Some(size) = self.fixed_size {
            window = window.fixed_size(size);
        }

        window.show(ctx, |ui| {
            if let Some(modal_result) = content(ui, &mut self.data) {
                self.open = false;
                result = Some(modal_result);
            }
        });

        result
    }
}

pub fn action_buttons<T: Clone>(
    ui: &mut egui::Ui,
    data: &T,
    confirm_text: &str,
    confirm_enabled: bool,
) -> Option<ModalResult<T>> {
    ui.horizontal(|ui| {
        let confirm = ui.add_enabled(confirm_enabled, egui::Button::new(confirm_text));
        if confirm.clicked() {
            Some(ModalResult::Confirmed(data.clone()))
        } else if ui.button("Cancel").clicked() {
            Some(ModalResult::Cancelled)
        } else {
            None
        }
    })
    .inner
}
