//! Windows drawn over the panels: the per-step PSA choice and notices
//!
//! The caller owns the state; these only draw and report clicks.

use crate::calc::psa::{Choice, ChoiceRequest};
use crate::messages::Notice;
use crate::ui::format_value;
use egui::{Align2, Context, RichText};

pub enum ChoiceDialogAction {
    Choose(Choice),
    Abandon,
}

fn centered_window<'a>(title: impl Into<egui::WidgetText>, id: &str) -> egui::Window<'a> {
    egui::Window::new(title)
        .id(egui::Id::new(id))
        .collapsible(false)
        .resizable(false)
        .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
        .order(egui::Order::Foreground)
}

fn choice_lines(request: &ChoiceRequest) -> [String; 3] {
    [
        format!("현재 감도: {:.2}", request.sensitivity),
        format!("🔽 Lower: {}", format_value(request.bounds.low)),
        format!("🔼 Higher: {}", format_value(request.bounds.high)),
    ]
}

pub fn choice_dialog(ctx: &Context, request: &ChoiceRequest) -> Option<ChoiceDialogAction> {
    let mut action = None;
    let mut open = true;

    centered_window(format!("PSA 단계 {}", request.step), "psa_choice_dialog")
        .open(&mut open)
        .show(ctx, |ui| {
            let [current, lower, higher] = choice_lines(request);
            ui.label(current);
            ui.add_space(4.0);
            ui.label(lower);
            ui.label(higher);
            ui.add_space(4.0);

            ui.horizontal(|ui| {
                if ui.button("Lower").clicked() {
                    action = Some(ChoiceDialogAction::Choose(Choice::Lower));
                }
                if ui.button("Higher").clicked() {
                    action = Some(ChoiceDialogAction::Choose(Choice::Higher));
                }
            });
        });

    if !open {
        action = Some(ChoiceDialogAction::Abandon);
    }
    action
}

/// Returns `true` once the notice is dismissed
pub fn notice_dialog(ctx: &Context, notice: &Notice) -> bool {
    let mut dismissed = false;

    centered_window(notice.title.as_str(), "notice_dialog").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(RichText::new(notice.icon()).size(20.0));
            ui.label(notice.body.as_str());
        });
        ui.vertical_centered(|ui| {
            if ui.button("OK").clicked() {
                dismissed = true;
            }
        });
    });

    if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
        dismissed = true;
    }
    dismissed
}
