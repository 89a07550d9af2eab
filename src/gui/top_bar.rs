use eframe::egui::{
    self,
    containers,
};

use crate::{
    core::ReviewSession,
    gui::theme::Theme,
};

pub enum TopBarAction {
    OpenImport,
    ExportDeck,
    OpenSettings,
    ToggleScript,
}

pub struct TopBar;

impl TopBar {
    pub fn show(
        ctx: &egui::Context,
        theme: &Theme,
        session: Option<&ReviewSession>,
        busy: bool,
        api_key_set: bool,
    ) -> Option<TopBarAction> {
        let mut action = None;

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            containers::menu::Bar::new().ui(ui, |ui| {
                egui::widgets::global_theme_preference_switch(ui);

                ui.menu_button("File", |ui| {
                    if ui.add_enabled(!busy, egui::Button::new("New Deck...")).clicked() {
                        action = Some(TopBarAction::OpenImport);
                    }
                    if ui
                        .add_enabled(session.is_some(), egui::Button::new("Export Deck..."))
                        .clicked()
                    {
                        action = Some(TopBarAction::ExportDeck);
                    }
                    if ui.button("Quit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });

                ui.menu_button("Settings", |ui| {
                    if ui.button("API Settings").clicked() {
                        action = Some(TopBarAction::OpenSettings);
                    }
                });

                if let Some(session) = session {
                    let label = session.script().label();
                    if ui
                        .button(label)
                        .on_hover_text("Switch between simplified and traditional")
                        .clicked()
                    {
                        action = Some(TopBarAction::ToggleScript);
                    }
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    Self::show_status(ui, theme, session, api_key_set);
                });
            });
        });

        action
    }

    fn show_status(
        ui: &mut egui::Ui,
        theme: &Theme,
        session: Option<&ReviewSession>,
        api_key_set: bool,
    ) {
        let (color, tooltip) = if api_key_set {
            (theme.green(ui.ctx()), "Generation ready")
        } else {
            (theme.red(ui.ctx()), "No API key configured")
        };

        ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = 2.0;
            ui.small("AI").on_hover_text(tooltip);
            ui.small(egui::RichText::new("●").color(color)).on_hover_text(tooltip);
        });

        if let Some(session) = session {
            ui.add_space(8.0);
            ui.small(format!(
                "{} · {}/{}",
                session.deck().title,
                session.active_index() + 1,
                session.card_count()
            ));
        }
    }
}
