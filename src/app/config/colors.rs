use ratatui::style::Color;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ColorsConfig {
    /// Fill behind the device
    #[serde(default = "ColorsConfig::default_backdrop")]
    pub backdrop: String,
    #[serde(default = "ColorsConfig::default_body")]
    pub body: String,
    #[serde(default = "ColorsConfig::default_screen")]
    pub screen: String,
    #[serde(default = "ColorsConfig::default_screen_text")]
    pub screen_text: String,
    #[serde(default = "ColorsConfig::default_header")]
    pub header: String,
    #[serde(default = "ColorsConfig::default_highlight")]
    pub highlight: String,
    #[serde(default = "ColorsConfig::default_highlight_text")]
    pub highlight_text: String,
    #[serde(default = "ColorsConfig::default_wheel")]
    pub wheel: String,
    #[serde(default = "ColorsConfig::default_wheel_label")]
    pub wheel_label: String,
    #[serde(default = "ColorsConfig::default_center_button")]
    pub center_button: String,
    #[serde(default = "ColorsConfig::default_status")]
    pub status: String,
}

impl ColorsConfig {
    /// Parse a hex color string like "#FF5500" into RGB values
    pub fn parse_hex(hex: &str) -> Option<(u8, u8, u8)> {
        let hex = hex.trim_start_matches('#');
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
        Some((r, g, b))
    }

    fn resolve(hex: &str, fallback: Color) -> Color {
        Self::parse_hex(hex)
            .map(|(r, g, b)| Color::Rgb(r, g, b))
            .unwrap_or(fallback)
    }

    pub fn backdrop_color(&self) -> Color {
        Self::resolve(&self.backdrop, Color::Gray)
    }

    pub fn body_color(&self) -> Color {
        Self::resolve(&self.body, Color::White)
    }

    pub fn screen_color(&self) -> Color {
        Self::resolve(&self.screen, Color::White)
    }

    pub fn screen_text_color(&self) -> Color {
        Self::resolve(&self.screen_text, Color::Black)
    }

    pub fn header_color(&self) -> Color {
        Self::resolve(&self.header, Color::Black)
    }

    pub fn highlight_color(&self) -> Color {
        Self::resolve(&self.highlight, Color::Blue)
    }

    pub fn highlight_text_color(&self) -> Color {
        Self::resolve(&self.highlight_text, Color::White)
    }

    pub fn wheel_color(&self) -> Color {
        Self::resolve(&self.wheel, Color::White)
    }

    pub fn wheel_label_color(&self) -> Color {
        Self::resolve(&self.wheel_label, Color::DarkGray)
    }

    pub fn center_button_color(&self) -> Color {
        Self::resolve(&self.center_button, Color::Gray)
    }

    pub fn status_color(&self) -> Color {
        Self::resolve(&self.status, Color::Green)
    }

    fn default_backdrop() -> String {
        "#F0F1F6".to_string()
    }

    fn default_body() -> String {
        "#D9DBE0".to_string()
    }

    fn default_screen() -> String {
        "#F7F9FC".to_string()
    }

    fn default_screen_text() -> String {
        "#1C1C1E".to_string()
    }

    fn default_header() -> String {
        "#3A3A3C".to_string()
    }

    fn default_highlight() -> String {
        "#2F80ED".to_string()
    }

    fn default_highlight_text() -> String {
        "#FFFFFF".to_string()
    }

    fn default_wheel() -> String {
        "#FFFFFF".to_string()
    }

    fn default_wheel_label() -> String {
        "#8E8E93".to_string()
    }

    fn default_center_button() -> String {
        "#E5E5EA".to_string()
    }

    fn default_status() -> String {
        "#34A853".to_string()
    }
}

impl Default for ColorsConfig {
    fn default() -> Self {
        Self {
            backdrop: Self::default_backdrop(),
            body: Self::default_body(),
            screen: Self::default_screen(),
            screen_text: Self::default_screen_text(),
            header: Self::default_header(),
            highlight: Self::default_highlight(),
            highlight_text: Self::default_highlight_text(),
            wheel: Self::default_wheel(),
            wheel_label: Self::default_wheel_label(),
            center_button: Self::default_center_button(),
            status: Self::default_status(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex() {
        assert_eq!(ColorsConfig::parse_hex("#F0F1F6"), Some((0xF0, 0xF1, 0xF6)));
        assert_eq!(ColorsConfig::parse_hex("2f80ed"), Some((0x2F, 0x80, 0xED)));
        assert_eq!(ColorsConfig::parse_hex("#FFF"), None);
        assert_eq!(ColorsConfig::parse_hex("#GG0000"), None);
        assert_eq!(ColorsConfig::parse_hex("#ééé"), None);
    }

    #[test]
    fn test_invalid_color_falls_back() {
        let colors = ColorsConfig {
            highlight: "blue-ish".to_string(),
            ..ColorsConfig::default()
        };
        assert_eq!(colors.highlight_color(), Color::Blue);
        assert_eq!(colors.backdrop_color(), Color::Rgb(0xF0, 0xF1, 0xF6));
    }
}
