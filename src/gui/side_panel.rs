use eframe::egui;

use super::{
    app::View,
    theme::Theme,
};

pub enum SidePanelAction {
    Select(View),
    ImportDeck,
    ExportDeck,
}

/// Persistent navigation rail on the left: one tab per view plus the
/// deck transfer buttons. There is no other routing surface.
pub struct SidePanel;

impl SidePanel {
    pub fn show(
        ctx: &egui::Context,
        current_view: View,
        theme: &Theme,
    ) -> Option<SidePanelAction> {
        let mut action = None;

        egui::SidePanel::left("side_panel").resizable(false).exact_width(150.0).show(ctx, |ui| {
            ui.add_space(8.0);
            ui.vertical_centered_justified(|ui| {
                ui.label(theme.heading("ABHYAS", ui.ctx()));
            });
            ui.add_space(8.0);

            for view in View::ALL {
                let selected = view == current_view;
                let response = ui.add_sized(
                    [ui.available_width(), 36.0],
                    egui::SelectableLabel::new(selected, view.title()),
                );
                if response.clicked() && !selected {
                    action = Some(SidePanelAction::Select(view));
                }
            }

            ui.add_space(12.0);
            ui.separator();
            ui.add_space(12.0);

            ui.vertical_centered_justified(|ui| {
                if ui.button("Import deck…").clicked() {
                    action = Some(SidePanelAction::ImportDeck);
                }
                ui.add_space(4.0);
                if ui.button("Export deck").clicked() {
                    action = Some(SidePanelAction::ExportDeck);
                }
            });

            ui.with_layout(egui::Layout::bottom_up(egui::Align::Center), |ui| {
                ui.add_space(8.0);
                egui::widgets::global_theme_preference_switch(ui);
            });
        });

        action
    }
}
