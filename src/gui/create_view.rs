use eframe::egui;

use super::app::{
    AbhyasApp,
    View,
};

/// Field buffers for the authoring form. The form survives a rejected
/// submit so the user can correct it in place.
#[derive(Default, Clone)]
pub struct CardEditor {
    pub front: String,
    pub back: String,
}

pub fn show(ctx: &egui::Context, app: &mut AbhyasApp) {
    egui::CentralPanel::default().show(ctx, |ui| {
        ui.heading(app.theme.heading("Create Card", ui.ctx()));
        ui.add_space(10.0);

        let front_response = ui.add(
            egui::TextEdit::singleline(&mut app.editor.front)
                .hint_text("Front")
                .desired_width(380.0),
        );
        ui.add_space(6.0);
        let back_response = ui.add(
            egui::TextEdit::singleline(&mut app.editor.back)
                .hint_text("Back")
                .desired_width(380.0),
        );

        ui.add_space(10.0);

        let submitted_by_enter = (front_response.lost_focus() || back_response.lost_focus())
            && ui.input(|i| i.key_pressed(egui::Key::Enter));

        if ui.button("Add").clicked() || submitted_by_enter {
            submit(app);
        }

        ui.add_space(8.0);
        ui.label(
            egui::RichText::new("Both sides are required. New cards go to the top of the deck.")
                .size(12.0)
                .color(app.theme.comment(ui.ctx())),
        );
    });
}

fn submit(app: &mut AbhyasApp) {
    let front = app.editor.front.clone();
    let back = app.editor.back.clone();

    if app.deck.prepend(&front, &back) {
        app.editor = CardEditor::default();
        app.view = View::Review;
    }
}
