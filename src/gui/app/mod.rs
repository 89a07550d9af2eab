mod modals;

use eframe::egui;
use modals::Modals;

use super::{
    card_view::{
        CardAction,
        CardView,
    },
    fonts,
    import_modal::ImportRequest,
    message_overlay::MessageOverlay,
    settings_modal::SettingsData,
    theme::{
        set_theme,
        Theme,
    },
    top_bar::{
        TopBar,
        TopBarAction,
    },
};
use crate::{
    core::{
        export::export_filename,
        tasks::{
            TaskManager,
            TaskResult,
        },
        ReviewSession,
        ScriptMode,
    },
    gen::GenerationClient,
    persistence::{
        load_json_or_default,
        save_json,
    },
};

pub struct KapianApp {
    // Review state
    session: Option<ReviewSession>,
    script: ScriptMode,

    // Configuration
    settings_data: SettingsData,
    env_api_key: Option<String>,

    // UI state
    theme: Theme,
    card_view: CardView,
    message_overlay: MessageOverlay,
    modals: Modals,

    // Background work. One ingestion outstanding at a time.
    task_manager: TaskManager,
    ingest_busy: bool,
}

impl KapianApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let settings_data = load_json_or_default::<SettingsData>("settings.json");
        let env_api_key =
            std::env::var("GEMINI_API_KEY").ok().filter(|key| !key.trim().is_empty());

        let theme = Theme::default();
        fonts::setup_fonts(&cc.egui_ctx);
        set_theme(&cc.egui_ctx, &theme);

        Self {
            session: None,
            script: ScriptMode::default(),
            settings_data,
            env_api_key,
            theme,
            card_view: CardView::new(),
            message_overlay: MessageOverlay::new(),
            modals: Modals::default(),
            task_manager: TaskManager::new(),
            ingest_busy: false,
        }
    }

    fn api_key(&self) -> Option<String> {
        if !self.settings_data.api_key.is_empty() {
            return Some(self.settings_data.api_key.clone());
        }
        self.env_api_key.clone()
    }

    fn generation_client(&self) -> Option<GenerationClient> {
        self.api_key().map(|key| GenerationClient::new(key, self.settings_data.model.clone()))
    }

    fn handle_task_result(&mut self, result: TaskResult) {
        match result {
            TaskResult::DeckReady { source, result } => {
                self.ingest_busy = false;
                self.message_overlay.clear_message();

                match result {
                    Ok(deck) => {
                        println!("Loaded deck '{}' with {} cards", deck.title, deck.cards.len());
                        match ReviewSession::new(deck, self.script) {
                            Ok(session) => self.session = Some(session),
                            Err(e) => self.modals.error.show_error(
                                "Import Error",
                                "The deck could not be opened",
                                Some(e.to_string()),
                            ),
                        }
                    }
                    Err(error_msg) => {
                        self.modals.error.show_error(
                            "Import Error",
                            format!("The {} did not produce a deck", source.label()),
                            Some(&error_msg),
                        );
                    }
                }
            }

            TaskResult::ExportFinished(result) => match result {
                Ok(path) => println!("Deck exported: {}", path.display()),
                Err(error_msg) => {
                    self.modals.error.show_error(
                        "Export Error",
                        "The deck could not be saved",
                        Some(&error_msg),
                    );
                }
            },

            TaskResult::SpeechFinished(result) => {
                if let Err(error_msg) = result {
                    self.modals.error.show_error(
                        "Speech Error",
                        "Pronunciation playback failed",
                        Some(&error_msg),
                    );
                }
            }

            TaskResult::LoadingMessage(message) => {
                if self.ingest_busy {
                    self.message_overlay.set_message(message);
                }
            }
        }
    }

    fn dispatch_import(&mut self, request: ImportRequest) {
        let client = self.generation_client();

        // Topic generation has no non-AI route; fail fast without a key.
        if client.is_none() && matches!(request, ImportRequest::Topic(_)) {
            self.modals.error.show_error(
                "Generation Unavailable",
                "No API key configured. Set one in Settings or via GEMINI_API_KEY.",
                None::<String>,
            );
            return;
        }

        self.ingest_busy = true;
        self.message_overlay.set_message("Working...".to_string());

        match request {
            ImportRequest::Topic(topic) => {
                // Checked above.
                if let Some(client) = client {
                    self.task_manager.generate_from_topic(topic, client);
                }
            }
            ImportRequest::Words(text) => self.task_manager.ingest_text(text, client),
            ImportRequest::File(path) => self.task_manager.ingest_file(path, client),
            ImportRequest::Url(url) => self.task_manager.ingest_url(url, client),
        }
    }

    fn export_deck(&mut self) {
        let Some(session) = &self.session else {
            return;
        };

        let deck = session.deck().clone();
        if let Some(path) = rfd::FileDialog::new()
            .set_file_name(export_filename(&deck.title))
            .add_filter("Deck files", &["json"])
            .save_file()
        {
            self.task_manager.export_deck(deck, path);
        }
    }

    fn handle_card_action(&mut self, action: CardAction) {
        match action {
            CardAction::Flip => {
                if let Some(session) = &mut self.session {
                    session.flip();
                }
            }
            CardAction::Next => {
                if let Some(session) = &mut self.session {
                    session.next();
                }
            }
            CardAction::Previous => {
                if let Some(session) = &mut self.session {
                    session.previous();
                }
            }
            CardAction::Speak(text) => self.task_manager.speak(text),
        }
    }

    /// Spacebar/up/down flip, left/right navigate. Suppressed while any text
    /// input has focus and while a modal or overlay is up.
    fn handle_keyboard(&mut self, ctx: &egui::Context) {
        if self.session.is_none() || self.message_overlay.is_active() {
            return;
        }
        if self.modals.import.is_open() || self.modals.settings.is_open() {
            return;
        }
        if ctx.memory(|m| m.focused().is_some()) {
            return;
        }

        let (flip, next, previous) = ctx.input(|i| {
            (
                i.key_pressed(egui::Key::Space)
                    || i.key_pressed(egui::Key::ArrowUp)
                    || i.key_pressed(egui::Key::ArrowDown),
                i.key_pressed(egui::Key::ArrowRight),
                i.key_pressed(egui::Key::ArrowLeft),
            )
        });

        if let Some(session) = &mut self.session {
            if flip {
                session.flip();
            }
            if next {
                session.next();
            }
            if previous {
                session.previous();
            }
        }
    }

    fn save_settings(&self) {
        if let Err(e) = save_json(&self.settings_data, "settings.json") {
            eprintln!("Failed to save settings: {}", e);
        }
    }

    fn show_welcome(&mut self, ctx: &egui::Context) {
        let mut open_import = false;

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_space(ui.available_height() / 3.0);
            ui.vertical_centered(|ui| {
                ui.label(egui::RichText::new("卡片").size(64.0).strong());
                ui.heading("Kapian");
                ui.add_space(10.0);
                ui.label("Study Chinese vocabulary with AI-generated flashcards.");
                ui.add_space(20.0);
                if ui
                    .add_enabled(!self.ingest_busy, egui::Button::new("Create your first deck"))
                    .clicked()
                {
                    open_import = true;
                }
            });
        });

        if open_import {
            self.modals.import.open();
        }
    }
}

impl eframe::App for KapianApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        for result in self.task_manager.poll_results() {
            self.handle_task_result(result);
        }

        self.handle_keyboard(ctx);

        if let Some(action) = TopBar::show(
            ctx,
            &self.theme,
            self.session.as_ref(),
            self.ingest_busy,
            self.api_key().is_some(),
        ) {
            match action {
                TopBarAction::OpenImport => self.modals.import.open(),
                TopBarAction::ExportDeck => self.export_deck(),
                TopBarAction::OpenSettings => {
                    self.modals.settings.open_settings(self.settings_data.clone());
                }
                TopBarAction::ToggleScript => {
                    if let Some(session) = &mut self.session {
                        session.toggle_script();
                        self.script = session.script();
                    }
                }
            }
        }

        if self.session.is_some() {
            let card_action = match &self.session {
                Some(session) => self.card_view.show(ctx, session, &self.theme),
                None => None,
            };
            if let Some(action) = card_action {
                self.handle_card_action(action);
            }
        } else {
            self.show_welcome(ctx);
        }

        if let Some(request) = self.modals.import.show(ctx, self.ingest_busy) {
            self.dispatch_import(request);
        }

        if let Some(settings) = self.modals.settings.show(ctx) {
            self.settings_data = settings;
            self.save_settings();
        }

        self.message_overlay.show(ctx, &self.theme);
        self.modals.error.show(ctx);
    }
}
