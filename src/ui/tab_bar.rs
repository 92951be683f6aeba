use egui::{Align, Layout, Ui};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    #[default]
    Psa,
    Dpi,
}

impl Tab {
    pub const ALL: [Tab; 2] = [Tab::Psa, Tab::Dpi];

    pub fn label(self) -> &'static str {
        match self {
            Tab::Psa => "PSA 감도 조정",
            Tab::Dpi => "DPI 감도 변환",
        }
    }
}

pub struct TabBar;

impl TabBar {
    /// Returns the newly selected tab, if the user switched
    pub fn show(ui: &mut Ui, current: Tab, enabled: bool) -> Option<Tab> {
        let mut action = None;

        ui.with_layout(Layout::left_to_right(Align::Center), |ui| {
            for tab in Tab::ALL {
                let button = egui::Button::selectable(current == tab, tab.label());
                if ui.add_enabled(enabled, button).clicked() && tab != current {
                    action = Some(tab);
                }
            }
        });

        action
    }
}
