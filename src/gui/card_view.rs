use eframe::egui;

use crate::{
    core::{
        Card,
        ReviewSession,
        ScriptMode,
    },
    gui::theme::Theme,
};

const REVEAL_SECS_PER_CHAR: f64 = 0.35;

pub enum CardAction {
    Flip,
    Next,
    Previous,
    Speak(String),
}

/// Central flip-card panel. Holds only presentation state (the headword
/// reveal animation); everything the session owns stays in the session.
pub struct CardView {
    reveal_card: Option<String>,
    reveal_start: f64,
}

impl CardView {
    pub fn new() -> Self {
        Self { reveal_card: None, reveal_start: 0.0 }
    }

    pub fn show(
        &mut self,
        ctx: &egui::Context,
        session: &ReviewSession,
        theme: &Theme,
    ) -> Option<CardAction> {
        let mut action = None;
        let card = session.current();
        let script = session.script();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_space(10.0);
            ui.vertical_centered(|ui| {
                ui.heading(&session.deck().title);
                ui.small(format!("Card {}/{}", session.active_index() + 1, session.card_count()));
            });
            ui.add_space(10.0);

            let face = self.show_face(ui, ctx, card, script, session.is_flipped(), theme);
            if face.clicked() {
                action = Some(CardAction::Flip);
            }

            ui.add_space(15.0);
            ui.vertical_centered(|ui| {
                ui.horizontal(|ui| {
                    ui.with_layout(egui::Layout::left_to_right(egui::Align::Center), |ui| {
                        ui.add_space(ui.available_width() / 2.0 - 160.0);

                        if ui.button("◀ Previous").clicked() {
                            action = Some(CardAction::Previous);
                        }
                        if ui.button(if session.is_flipped() { "Show Front" } else { "Flip" })
                            .clicked()
                        {
                            action = Some(CardAction::Flip);
                        }
                        if ui.button("Next ▶").clicked() {
                            action = Some(CardAction::Next);
                        }

                        ui.add_space(10.0);
                        if ui.button("🔊").on_hover_text("Pronounce").clicked() {
                            action =
                                Some(CardAction::Speak(card.headword(script).to_string()));
                        }
                        if ui.button("↻").on_hover_text("Replay strokes").clicked() {
                            self.reveal_card = None;
                        }
                    });
                });
                ui.add_space(8.0);
                ui.small("space flips · ←/→ navigate");
            });
        });

        action
    }

    fn show_face(
        &mut self,
        ui: &mut egui::Ui,
        ctx: &egui::Context,
        card: &Card,
        script: ScriptMode,
        flipped: bool,
        theme: &Theme,
    ) -> egui::Response {
        let size = egui::Vec2::new(ui.available_width().min(620.0), 320.0);

        let frame = egui::Frame::group(ui.style())
            .fill(theme.card_face(ctx))
            .corner_radius(12.0)
            .inner_margin(egui::Margin::same(20));

        let response = ui
            .vertical_centered(|ui| {
                frame
                    .show(ui, |ui| {
                        ui.set_min_size(size);
                        ui.set_max_width(size.x);

                        if flipped {
                            self.show_back(ui, ctx, card, script, theme);
                        } else {
                            self.show_front(ui, ctx, card, script, theme);
                        }
                    })
                    .response
            })
            .inner;

        response.interact(egui::Sense::click()).on_hover_text("Click to flip")
    }

    fn show_front(
        &mut self,
        ui: &mut egui::Ui,
        ctx: &egui::Context,
        card: &Card,
        script: ScriptMode,
        theme: &Theme,
    ) {
        let headword = card.headword(script);
        let visible = self.revealed_chars(ctx, card, headword);

        ui.add_space(90.0);
        ui.vertical_centered(|ui| {
            ui.label(
                egui::RichText::new(visible).size(72.0).color(theme.accent(ctx)).strong(),
            );
        });
    }

    fn show_back(
        &mut self,
        ui: &mut egui::Ui,
        ctx: &egui::Context,
        card: &Card,
        script: ScriptMode,
        theme: &Theme,
    ) {
        ui.add_space(10.0);
        ui.vertical_centered(|ui| {
            ui.label(egui::RichText::new(card.headword(script)).size(40.0).strong());

            let alternate = card.alternate(script);
            if alternate != card.headword(script) && !alternate.is_empty() {
                ui.label(egui::RichText::new(alternate).size(22.0).weak());
            }

            ui.label(egui::RichText::new(&card.pinyin).size(20.0).color(theme.accent(ctx)));
            ui.add_space(4.0);
            ui.label(egui::RichText::new(&card.english).size(18.0));
        });

        if !card.examples.is_empty() {
            ui.add_space(10.0);
            ui.separator();
            egui::ScrollArea::vertical().max_height(130.0).show(ui, |ui| {
                for example in &card.examples {
                    ui.add_space(4.0);
                    ui.label(egui::RichText::new(example.text(script)).size(17.0));
                    if let Some(pinyin) = &example.pinyin {
                        ui.label(
                            egui::RichText::new(pinyin).size(13.0).color(theme.yellow(ctx)),
                        );
                    }
                    ui.label(egui::RichText::new(&example.english).size(13.0).weak());
                }
            });
        }
    }

    /// Character-reveal animation: the headword appears one character at a
    /// time, full-width spaces holding the layout steady for the rest.
    fn revealed_chars(&mut self, ctx: &egui::Context, card: &Card, headword: &str) -> String {
        let now = ctx.input(|i| i.time);

        if self.reveal_card.as_deref() != Some(card.id.as_str()) {
            self.reveal_card = Some(card.id.clone());
            self.reveal_start = now;
        }

        let total_chars = headword.chars().count().max(1);
        let duration = (total_chars as f64 * REVEAL_SECS_PER_CHAR).clamp(0.5, 2.5);
        let fraction = ((now - self.reveal_start) / duration).clamp(0.0, 1.0);
        let visible = ((fraction * total_chars as f64).ceil() as usize).clamp(1, total_chars);

        if visible < total_chars {
            ctx.request_repaint();
        }

        headword
            .chars()
            .enumerate()
            .map(|(i, c)| if i < visible { c } else { '　' })
            .collect()
    }
}

impl Default for CardView {
    fn default() -> Self {
        Self::new()
    }
}
