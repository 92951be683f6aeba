use crate::calc::InputError;
use crate::calc::psa::{self, Choice, ChoiceRequest, PsaOutcome, PsaSession};
use crate::ui::format_value;
use egui::{RichText, Ui};

pub enum PsaPanelAction {
    Start,
}

/// Input field for the initial sensitivity plus the session it started
pub struct PsaPanel {
    input: String,
    session: Option<PsaSession>,
}

impl PsaPanel {
    pub fn new(initial_sensitivity: f64) -> Self {
        Self {
            input: format_value(initial_sensitivity),
            session: None,
        }
    }

    pub fn show(&mut self, ui: &mut Ui) -> Option<PsaPanelAction> {
        let mut action = None;

        ui.label(RichText::new("🧪 PSA 감도 조정").heading().strong());
        ui.add_space(4.0);

        ui.label("초기 감도 (예: 50):");
        let response = ui.add(
            egui::TextEdit::singleline(&mut self.input).desired_width(f32::INFINITY),
        );
        if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
            action = Some(PsaPanelAction::Start);
        }

        ui.vertical_centered(|ui| {
            if ui.button("PSA 테스트 시작").clicked() {
                action = Some(PsaPanelAction::Start);
            }
        });

        action
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    /// Validate the field and begin a new session, replacing any running one
    pub fn start(&mut self) -> Result<(), InputError> {
        let initial = psa::parse_initial(&self.input)?;
        self.session = Some(PsaSession::start(initial)?);
        Ok(())
    }

    pub fn pending(&self) -> Option<ChoiceRequest> {
        self.session.as_ref().map(PsaSession::request)
    }

    /// Feed a decision into the running session.
    ///
    /// Returns the recommendation once the last step is answered; it is also
    /// written back into the input field.
    pub fn resolve(&mut self, choice: Choice) -> Option<f64> {
        let session = self.session.take()?;
        match session.resolve(choice) {
            PsaOutcome::Next(next) => {
                self.session = Some(next);
                None
            }
            PsaOutcome::Finished { recommended } => {
                self.input = format_value(recommended);
                Some(recommended)
            }
        }
    }

    pub fn abandon(&mut self) {
        if let Some(session) = self.session.take() {
            tracing::info!(
                "PSA session abandoned at step {} (sensitivity {})",
                session.step(),
                session.sensitivity()
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_formats_default() {
        let panel = PsaPanel::new(50.0);
        assert_eq!(panel.input(), "50.0");
        assert!(panel.pending().is_none());
    }

    #[test]
    fn test_start_rejects_bad_input() {
        for bad in ["abc", "", "0", "-5"] {
            let mut panel = PsaPanel::new(50.0);
            panel.set_input(bad);
            assert!(panel.start().is_err(), "input {:?}", bad);
            assert!(panel.pending().is_none());
        }
    }

    #[test]
    fn test_full_session_writes_back_result() {
        let mut panel = PsaPanel::new(50.0);
        panel.start().unwrap();

        let first = panel.pending().unwrap();
        assert_eq!(first.step, 1);
        assert_eq!(first.bounds.low, 25.0);
        assert_eq!(first.bounds.high, 75.0);

        for step in 1..7 {
            assert_eq!(panel.pending().unwrap().step, step);
            assert_eq!(panel.resolve(Choice::Lower), None);
        }
        let recommended = panel.resolve(Choice::Lower).unwrap();

        assert!(panel.pending().is_none());
        assert_eq!(recommended, 15.94);
        assert_eq!(panel.input(), format_value(recommended));
    }

    #[test]
    fn test_second_step_follows_choice() {
        let mut panel = PsaPanel::new(50.0);
        panel.start().unwrap();
        panel.resolve(Choice::Lower);

        let request = panel.pending().unwrap();
        assert_eq!(request.step, 2);
        assert_eq!(request.sensitivity, 37.5);
    }

    #[test]
    fn test_abandon_discards_session() {
        let mut panel = PsaPanel::new(50.0);
        panel.start().unwrap();
        panel.resolve(Choice::Higher);
        panel.abandon();

        assert!(panel.pending().is_none());
        assert_eq!(panel.resolve(Choice::Higher), None);
        assert_eq!(panel.input(), "50.0");
    }
}
