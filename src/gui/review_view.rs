use eframe::egui;

use super::{
    app::AbhyasApp,
    theme::blend_colors,
};

const CARD_SIZE: egui::Vec2 = egui::Vec2::new(320.0, 190.0);

pub fn show(ctx: &egui::Context, app: &mut AbhyasApp) {
    egui::CentralPanel::default().show(ctx, |ui| {
        ui.heading(app.theme.heading("Review", ui.ctx()));

        if app.deck.is_empty() {
            empty_state(ui, app);
            return;
        }

        ui.add_space(30.0);
        ui.vertical_centered(|ui| {
            card_face(ui, app);
        });

        ui.add_space(20.0);
        ui.vertical_centered(|ui| {
            let deck_len = app.deck.len();

            ui.horizontal(|ui| {
                center_pad(ui, 220.0);
                if ui.button("⬅").clicked() {
                    app.session.prev(deck_len);
                }
                if ui.button("Flip (Space)").clicked() {
                    app.session.flip();
                }
                if ui.button("➡").clicked() {
                    app.session.next(deck_len);
                }
            });

            ui.add_space(12.0);
            ui.horizontal(|ui| {
                center_pad(ui, 260.0);
                ui.label("Did you get it?");
                if ui.button("Yes (1)").clicked() {
                    app.session.answer(true, deck_len, &mut app.stats);
                }
                if ui.button("No (0)").clicked() {
                    app.session.answer(false, deck_len, &mut app.stats);
                }
            });

            ui.add_space(16.0);
            let position = app.session.state().current_index % deck_len;
            ui.label(
                egui::RichText::new(format!("Card {} of {}", position + 1, deck_len))
                    .color(app.theme.comment(ui.ctx()))
                    .size(12.0),
            );
        });
    });
}

/// The card itself: front face, or back face once revealed. Clicking
/// flips, with a short cross-fade between the two faces.
fn card_face(ui: &mut egui::Ui, app: &mut AbhyasApp) {
    let (rect, response) = ui.allocate_exact_size(CARD_SIZE, egui::Sense::click());
    let response = response.on_hover_cursor(egui::CursorIcon::PointingHand);
    if response.clicked() {
        app.session.flip();
    }

    let flip = ui.ctx().animate_bool(egui::Id::new("card_flip"), app.session.revealed());

    let painter = ui.painter();
    let fill = blend_colors(app.theme.card_front(), app.theme.card_back(), flip);
    painter.rect_filled(rect.expand(2.0), 14.0, egui::Color32::from_black_alpha(60));
    painter.rect_filled(rect, 12.0, fill);

    if let Some(card) = app.session.current_card(app.deck.cards()) {
        // Swap the text at the halfway point of the cross-fade.
        let text = if flip < 0.5 { &card.front } else { &card.back };
        painter.text(
            rect.center(),
            egui::Align2::CENTER_CENTER,
            text,
            egui::FontId::proportional(30.0),
            app.theme.card_ink(),
        );
    }
}

fn empty_state(ui: &mut egui::Ui, app: &AbhyasApp) {
    ui.vertical_centered(|ui| {
        ui.add_space(100.0);
        ui.label(
            egui::RichText::new("No Cards Yet").size(30.0).color(app.theme.accent(ui.ctx())),
        );
        ui.add_space(4.0);
        ui.label(
            egui::RichText::new("Create a card or import a deck to start reviewing.")
                .size(13.0)
                .color(app.theme.comment(ui.ctx())),
        );
    });
}

/// Rough horizontal centering for a fixed-width control row.
fn center_pad(ui: &mut egui::Ui, row_width: f32) {
    let pad = (ui.available_width() - row_width).max(0.0) / 2.0;
    ui.add_space(pad);
}
