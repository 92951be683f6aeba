use crate::calc::InputError;
use crate::calc::psa::Choice;
use crate::config::{Config, Settings};
use crate::messages::Notice;
use crate::style::configure_style;
use crate::ui::dialog::{self, ChoiceDialogAction};
use crate::ui::dpi_panel::{DpiPanel, DpiPanelAction};
use crate::ui::format_value;
use crate::ui::psa_panel::{PsaPanel, PsaPanelAction};
use crate::ui::tab_bar::{Tab, TabBar};
use tracing::warn;

const INPUT_ERROR_TITLE: &str = "입력 오류";

pub struct SensitivityApp {
    tab: Tab,
    psa: PsaPanel,
    dpi: DpiPanel,
    notice: Option<Notice>,
}

impl SensitivityApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let config = Config::default();
        configure_style(&cc.egui_ctx, config.settings.font_size);
        Self::from_settings(&config.settings)
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            tab: Tab::default(),
            psa: PsaPanel::new(settings.psa.initial_sensitivity),
            dpi: DpiPanel::new(&settings.dpi),
            notice: None,
        }
    }

    fn is_blocked(&self) -> bool {
        self.notice.is_some() || self.psa.pending().is_some()
    }

    fn start_psa(&mut self) {
        if let Err(e) = self.psa.start() {
            self.report(e, "유효한 숫자를 입력해주세요! (예: 1.25)");
        }
    }

    fn choose(&mut self, choice: Choice) {
        if let Some(recommended) = self.psa.resolve(choice) {
            self.notice = Some(Notice::info(
                "PSA 완료",
                format!("🎉 최종 추천 감도: {}", format_value(recommended)),
            ));
        }
    }

    fn convert_dpi(&mut self) {
        if let Err(e) = self.dpi.convert() {
            self.report(e, "숫자를 정확히 입력해주세요!");
        }
    }

    fn report(&mut self, error: InputError, message: &str) {
        warn!("Rejected {} input: {}", error.field(), error);
        self.notice = Some(Notice::error(
            INPUT_ERROR_TITLE,
            format!("{}\n{}", message, error),
        ));
    }
}

impl eframe::App for SensitivityApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let blocked = self.is_blocked();

        // Tabs
        egui::TopBottomPanel::top("tab_bar_panel").show(ctx, |ui| {
            if let Some(tab) = TabBar::show(ui, self.tab, !blocked) {
                self.tab = tab;
            }
        });

        // Main Content
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_enabled_ui(!blocked, |ui| match self.tab {
                Tab::Psa => {
                    if let Some(PsaPanelAction::Start) = self.psa.show(ui) {
                        self.start_psa();
                    }
                }
                Tab::Dpi => {
                    if let Some(DpiPanelAction::Convert) = self.dpi.show(ui) {
                        self.convert_dpi();
                    }
                }
            });
        });

        // Dialogs, notices first so a finished PSA run shows its result
        if let Some(notice) = &self.notice {
            if dialog::notice_dialog(ctx, notice) {
                self.notice = None;
            }
        } else if let Some(request) = self.psa.pending() {
            match dialog::choice_dialog(ctx, &request) {
                Some(ChoiceDialogAction::Choose(choice)) => self.choose(choice),
                Some(ChoiceDialogAction::Abandon) => self.psa.abandon(),
                None => {}
            }
        }
    }
}
