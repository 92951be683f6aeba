pub mod dialog;
pub mod dpi_panel;
pub mod font;
pub mod psa_panel;
pub mod tab_bar;
pub mod viewport;

/// Render a value the way it is typed: whole numbers keep one decimal
pub fn format_value(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.1}", value)
    } else {
        value.to_string()
    }
}
