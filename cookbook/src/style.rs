//! Terminal styles.
use anstyle::Color;
use anstyle::RgbColor;
use anstyle::Style;

/// Styles.
pub struct Styles {
    /// User prompt style.
    pub user_prompt: Style,
    /// User prompt arrow style.
    pub user_prompt_arrow: Style,
    /// User message style.
    pub user_text: Style,
    /// Model prompt style.
    pub model_prompt: Style,
    /// Model prompt arrow style.
    pub model_prompt_arrow: Style,
    /// Model reply style.
    pub model_text: Style,
    /// Error and notice style.
    pub notice_text: Style,
}

impl Styles {

    /// Load styles.
    pub fn new() -> Self {
        let fg_user_color = Color::Rgb(RgbColor(128, 64, 64));
        let bg_user_color = Color::Rgb(RgbColor(128, 0, 0));
        let fg_model_color = Color::Rgb(RgbColor(64, 128, 64));
        let bg_model_color = Color::Rgb(RgbColor(0, 128, 0));
        let fg_notice_color = Color::Rgb(RgbColor(128, 128, 0));

        let white = Color::Rgb(RgbColor(255, 255, 255));

        Self {
            user_prompt: Style::new().bold().bg_color(Some(bg_user_color)).fg_color(Some(white)),
            user_prompt_arrow: Style::new().bold().fg_color(Some(bg_user_color)),
            user_text: Style::new().fg_color(Some(fg_user_color)),
            model_prompt: Style::new().bold().bg_color(Some(bg_model_color)).fg_color(Some(white)),
            model_prompt_arrow: Style::new().bold().fg_color(Some(bg_model_color)),
            model_text: Style::new().fg_color(Some(fg_model_color)),
            notice_text: Style::new().italic().fg_color(Some(fg_notice_color)),
        }
    }
}
