// Window size constants
pub const DEFAULT_WINDOW_WIDTH: f32 = 500.0;
pub const DEFAULT_WINDOW_HEIGHT: f32 = 380.0;
pub const DEFAULT_WINDOW_TITLE: &str = "🎮 감도 조정 도구";

/// Application name, also used as the confy config name
pub const APP_NAME: &str = "Sense Tuner";

/// Default field values, matching a fresh install
pub const DEFAULT_PSA_SENSITIVITY: f64 = 50.0;
pub const DEFAULT_DPI_SENSITIVITY: f64 = 1.0;
pub const DEFAULT_OLD_DPI: u32 = 800;
pub const DEFAULT_NEW_DPI: u32 = 1600;
pub const DEFAULT_FONT_SIZE: f32 = 14.0;
