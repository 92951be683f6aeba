use crate::calc::InputError;
use crate::calc::dpi;
use crate::config::DpiDefaults;
use crate::ui::format_value;
use egui::{RichText, Ui};

pub enum DpiPanelAction {
    Convert,
}

pub struct DpiPanel {
    sensitivity: String,
    old_dpi: String,
    new_dpi: String,
    result: Option<f64>,
}

impl DpiPanel {
    pub fn new(defaults: &DpiDefaults) -> Self {
        Self {
            sensitivity: format_value(defaults.sensitivity),
            old_dpi: defaults.old_dpi.to_string(),
            new_dpi: defaults.new_dpi.to_string(),
            result: None,
        }
    }

    pub fn show(&mut self, ui: &mut Ui) -> Option<DpiPanelAction> {
        let mut action = None;

        ui.label(RichText::new("🎯 DPI 감도 변환").heading().strong());
        ui.add_space(4.0);

        egui::Grid::new("dpi_inputs")
            .num_columns(2)
            .spacing([10.0, 10.0])
            .show(ui, |ui| {
                for (label, text) in [
                    ("현재 감도:", &mut self.sensitivity),
                    ("기존 DPI:", &mut self.old_dpi),
                    ("새 DPI:", &mut self.new_dpi),
                ] {
                    ui.label(label);
                    ui.add(egui::TextEdit::singleline(text).desired_width(f32::INFINITY));
                    ui.end_row();
                }
            });

        ui.vertical_centered(|ui| {
            if ui.button("DPI 변환 실행").clicked() {
                action = Some(DpiPanelAction::Convert);
            }
        });

        if let Some(result) = self.result {
            ui.label(format!("🔁 변환된 감도: {}", format_value(result)));
        }

        action
    }

    #[cfg(test)]
    pub fn set_fields(&mut self, sensitivity: &str, old_dpi: &str, new_dpi: &str) {
        self.sensitivity = sensitivity.to_owned();
        self.old_dpi = old_dpi.to_owned();
        self.new_dpi = new_dpi.to_owned();
    }

    pub fn result(&self) -> Option<f64> {
        self.result
    }

    /// Convert the current fields; a failed conversion keeps the last result
    pub fn convert(&mut self) -> Result<f64, InputError> {
        let result = dpi::convert_input(&self.sensitivity, &self.old_dpi, &self.new_dpi)?;
        self.result = Some(result);
        Ok(result)
    }
}
