use eframe::egui;

use super::app::AbhyasApp;
use crate::core::stats::StatsAggregate;

const CHART_HEIGHT: f32 = 220.0;
const LABEL_BAND: f32 = 18.0;

pub fn show(ctx: &egui::Context, app: &mut AbhyasApp) {
    egui::CentralPanel::default().show(ctx, |ui| {
        ui.heading(app.theme.heading("Statistics", ui.ctx()));
        ui.add_space(10.0);

        let agg = app.stats.aggregate();

        ui.label(format!("Total reviewed: {}", agg.total));
        ui.label(format!("Correct: {}", agg.correct));
        ui.label(format!("Accuracy: {}%", agg.accuracy_percent));

        ui.add_space(4.0);
        ui.label(
            egui::RichText::new("Statistics cover this session; the deck itself is saved.")
                .size(12.0)
                .color(app.theme.comment(ui.ctx())),
        );

        ui.add_space(20.0);

        if agg.daily_histogram.is_empty() {
            ui.label(
                egui::RichText::new("Grade some cards in Review to see your daily totals here.")
                    .color(app.theme.comment(ui.ctx())),
            );
        } else {
            daily_chart(ui, app, &agg);
        }
    });
}

/// Bar per calendar day, first-seen order left to right, scaled to the
/// busiest day.
fn daily_chart(ui: &mut egui::Ui, app: &AbhyasApp, agg: &StatsAggregate) {
    let width = ui.available_width().min(560.0);
    let (rect, _) =
        ui.allocate_exact_size(egui::vec2(width, CHART_HEIGHT), egui::Sense::hover());
    let painter = ui.painter_at(rect);

    painter.rect_filled(rect, 6.0, ui.visuals().faint_bg_color);

    let max_count = agg.daily_histogram.iter().map(|(_, count)| *count).max().unwrap_or(1);
    let plot_height = rect.height() - LABEL_BAND - 24.0;
    let slot = rect.width() / agg.daily_histogram.len() as f32;
    let bar_width = (slot * 0.6).min(48.0);
    let baseline = rect.bottom() - LABEL_BAND;

    for (i, (day, count)) in agg.daily_histogram.iter().enumerate() {
        let height = plot_height * (*count as f32) / (max_count as f32);
        let center_x = rect.left() + slot * (i as f32 + 0.5);
        let bar = egui::Rect::from_min_max(
            egui::pos2(center_x - bar_width / 2.0, baseline - height),
            egui::pos2(center_x + bar_width / 2.0, baseline),
        );

        painter.rect_filled(bar, 3.0, app.theme.accent(ui.ctx()));

        painter.text(
            egui::pos2(center_x, bar.top() - 4.0),
            egui::Align2::CENTER_BOTTOM,
            count.to_string(),
            egui::FontId::proportional(12.0),
            ui.visuals().text_color(),
        );

        // Month-day is enough on the axis; the year never varies within
        // a session's log.
        let label = day.get(5..).unwrap_or(day);
        painter.text(
            egui::pos2(center_x, baseline + 4.0),
            egui::Align2::CENTER_TOP,
            label,
            egui::FontId::proportional(11.0),
            app.theme.comment(ui.ctx()),
        );
    }
}
