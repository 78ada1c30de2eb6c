use eframe::egui;
use egui_extras::{
    Column,
    TableBuilder,
};

use super::app::AbhyasApp;
use crate::core::search::search;

pub fn show(ctx: &egui::Context, app: &mut AbhyasApp) {
    egui::CentralPanel::default().show(ctx, |ui| {
        ui.heading(app.theme.heading("Search", ui.ctx()));
        ui.add_space(10.0);

        ui.add(
            egui::TextEdit::singleline(&mut app.search_query)
                .hint_text("Search front or back…")
                .desired_width(380.0),
        );

        ui.add_space(14.0);

        let results = search(app.deck.cards(), &app.search_query);
        if results.is_empty() {
            ui.label(
                egui::RichText::new("No cards match.").color(app.theme.comment(ui.ctx())),
            );
            return;
        }

        let text_height = egui::TextStyle::Body
            .resolve(ui.style())
            .size
            .max(ui.spacing().interact_size.y);

        egui::ScrollArea::vertical().show(ui, |ui| {
            TableBuilder::new(ui)
                .striped(true)
                .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
                .column(Column::auto().at_least(160.0))
                .column(Column::remainder())
                .header(25.0, |mut header| {
                    header.col(|ui| {
                        ui.label(app.theme.heading("Front", ui.ctx()));
                    });
                    header.col(|ui| {
                        ui.label(app.theme.heading("Back", ui.ctx()));
                    });
                })
                .body(|mut body| {
                    body.rows(text_height, results.len(), |mut row| {
                        let card = results[row.index()];
                        row.col(|ui| {
                            ui.strong(&card.front);
                        });
                        row.col(|ui| {
                            ui.label(&card.back);
                        });
                    });
                });
        });
    });
}
