use egui::{Color32, Context, FontId, Stroke, Style, TextStyle, Visuals};

pub fn configure_style(ctx: &Context, font_size: f32) {
    let mut style = Style::default();

    style.spacing.item_spacing = egui::vec2(10.0, 10.0);
    style.spacing.window_margin = egui::Margin::same(12);
    style.spacing.button_padding = egui::vec2(10.0, 4.0);

    style
        .text_styles
        .insert(TextStyle::Body, FontId::proportional(font_size));
    style
        .text_styles
        .insert(TextStyle::Button, FontId::proportional(font_size));
    style
        .text_styles
        .insert(TextStyle::Heading, FontId::proportional(font_size + 4.0));

    ctx.set_style(style);

    let mut visuals = Visuals::light();
    visuals.window_shadow = egui::epaint::Shadow::NONE;
    visuals.popup_shadow = egui::epaint::Shadow::NONE;

    visuals.widgets.hovered.bg_fill = Color32::from_gray(235);
    visuals.widgets.active.bg_fill = Color32::from_gray(220);

    visuals.selection.bg_fill = Color32::from_rgb(200, 220, 255);
    visuals.selection.stroke = Stroke::new(1.0, Color32::from_rgb(100, 100, 100));

    ctx.set_visuals(visuals);
}
