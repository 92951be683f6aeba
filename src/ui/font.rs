/// Font setup and configuration for the application
///
/// The labels are Korean, so a system font with Hangul coverage is loaded
/// through `font-kit` and put in front of egui's bundled fonts.
use eframe::egui::{FontData, FontDefinitions, FontFamily};
use std::sync::Arc;

const SYSTEM_FONT_NAME: &str = "SystemHangulFont";

/// Setup fonts for the application with Hangul support
///
/// # Font Priority by OS:
/// - macOS: Apple SD Gothic Neo, AppleGothic
/// - Windows: Malgun Gothic, Gulim
/// - Linux: Noto Sans CJK KR, NanumGothic
///
/// Falls back to a generic sans-serif, then to egui's defaults.
pub fn setup_fonts() -> FontDefinitions {
    let mut fonts = FontDefinitions::default();
    let source = font_kit::source::SystemSource::new();

    for font_name in preferred_font_names() {
        if let Some(data) = load_family(&source, font_name) {
            tracing::info!("Using system font '{}' for Hangul support", font_name);
            register(&mut fonts, data);
            return fonts;
        }
    }

    match load_sans_serif(&source) {
        Some(data) => {
            tracing::info!("Using generic system font for text");
            register(&mut fonts, data);
        }
        None => tracing::warn!("Could not find suitable system font, using defaults"),
    }

    fonts
}

fn preferred_font_names() -> &'static [&'static str] {
    match std::env::consts::OS {
        "macos" => &["Apple SD Gothic Neo", "AppleGothic"],
        "windows" => &["Malgun Gothic", "Gulim"],
        "linux" => &["Noto Sans CJK KR", "NanumGothic"],
        _ => &[],
    }
}

fn read_handle(handle: &font_kit::handle::Handle) -> Option<Vec<u8>> {
    match handle {
        font_kit::handle::Handle::Memory { bytes, .. } => Some(bytes.to_vec()),
        font_kit::handle::Handle::Path { path, .. } => std::fs::read(path).ok(),
    }
}

fn load_family(source: &font_kit::source::SystemSource, font_name: &str) -> Option<Vec<u8>> {
    let family = source.select_family_by_name(font_name).ok()?;
    let handle = family.fonts().first()?;
    read_handle(handle)
}

fn load_sans_serif(source: &font_kit::source::SystemSource) -> Option<Vec<u8>> {
    let handle = source
        .select_best_match(
            &[font_kit::family_name::FamilyName::SansSerif],
            &font_kit::properties::Properties::new(),
        )
        .ok()?;
    read_handle(&handle)
}

/// Primary for proportional text, fallback for monospace
fn register(fonts: &mut FontDefinitions, data: Vec<u8>) {
    fonts.font_data.insert(
        SYSTEM_FONT_NAME.to_owned(),
        Arc::new(FontData::from_owned(data)),
    );

    if let Some(family) = fonts.families.get_mut(&FontFamily::Proportional) {
        family.insert(0, SYSTEM_FONT_NAME.to_owned());
    }
    if let Some(family) = fonts.families.get_mut(&FontFamily::Monospace) {
        family.push(SYSTEM_FONT_NAME.to_owned());
    }
}
