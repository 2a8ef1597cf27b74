//! Colors - Vigia Theme Colors

use gpui::{rgb, Rgba};

/// Vigia color palette - All colors are accessed via associated functions
pub struct VigiaColors;

impl VigiaColors {
    // Primary colors
    /// Header background - Emerald
    pub fn header_bg() -> Rgba { rgb(0x059669) }
    /// Primary accent - Green (actions, active chips)
    pub fn accent() -> Rgba { rgb(0x10b981) }

    // Background colors
    /// Main background
    pub fn background() -> Rgba { rgb(0xf5f5f5) }
    /// Content area background
    pub fn content_bg() -> Rgba { rgb(0xffffff) }
    /// Device card background
    pub fn card_bg() -> Rgba { rgb(0xf9fafb) }
    /// Log panel background - Dark blue
    pub fn log_panel_bg() -> Rgba { rgb(0x1a2332) }

    // Text colors
    /// Primary text
    pub fn text_primary() -> Rgba { rgb(0x1f2937) }
    /// Secondary text
    pub fn text_secondary() -> Rgba { rgb(0x6b7280) }
    /// Muted text
    pub fn text_muted() -> Rgba { rgb(0x9ca3af) }
    /// Header text
    pub fn text_header() -> Rgba { rgb(0xffffff) }

    // Status colors
    /// Success - Green
    pub fn success() -> Rgba { rgb(0x22c55e) }
    /// Warning - Amber
    pub fn warning() -> Rgba { rgb(0xf59e0b) }
    /// Error/Danger - Red
    pub fn danger() -> Rgba { rgb(0xef4444) }
    /// Info - Blue
    pub fn info() -> Rgba { rgb(0x3b82f6) }

    // Border colors
    /// Default border
    pub fn border() -> Rgba { rgb(0xe5e7eb) }
    /// Focused border
    pub fn border_focus() -> Rgba { rgb(0x10b981) }

    // Button colors
    /// Primary button background
    pub fn button_primary_bg() -> Rgba { rgb(0x10b981) }
    /// Primary button text
    pub fn button_primary_text() -> Rgba { rgb(0xffffff) }
    /// Danger button background
    pub fn button_danger_bg() -> Rgba { rgb(0xef4444) }
    /// Danger button text
    pub fn button_danger_text() -> Rgba { rgb(0xffffff) }
    /// Ghost button text
    pub fn button_ghost_text() -> Rgba { rgb(0x6b7280) }

    // Input colors
    /// Input background
    pub fn input_bg() -> Rgba { rgb(0xffffff) }
    /// Input border
    pub fn input_border() -> Rgba { rgb(0xd1d5db) }

    // Chart colors
    /// Chart series stroke
    pub fn chart_line() -> Rgba { rgb(0x10b981) }
    /// Chart series fill
    pub fn chart_fill() -> Rgba { gpui::rgba(0x10b9811a) }

    /// Background tint for an alert card by severity level
    pub fn severity_bg(severity: u8) -> Rgba {
        match severity {
            3 => rgb(0xfef2f2), // red-50
            2 => rgb(0xfff7ed), // orange-50
            1 => rgb(0xfefce8), // yellow-50
            _ => rgb(0xf9fafb), // gray-50
        }
    }

    /// Accent color for an alert card by severity level
    pub fn severity_accent(severity: u8) -> Rgba {
        match severity {
            3 => rgb(0xdc2626), // red-600
            2 => rgb(0xea580c), // orange-600
            1 => rgb(0xca8a04), // yellow-600
            _ => rgb(0x4b5563), // gray-600
        }
    }

    /// Icon for an alert card by severity level
    pub fn severity_icon(severity: u8) -> &'static str {
        match severity {
            3 => "🚨",
            2 => "⚠️",
            1 => "🔔",
            _ => "📢",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_mapping_covers_out_of_range_levels() {
        assert_eq!(VigiaColors::severity_icon(3), "🚨");
        assert_eq!(VigiaColors::severity_icon(0), "📢");
        assert_eq!(VigiaColors::severity_icon(9), "📢");
        assert_eq!(VigiaColors::severity_accent(0), VigiaColors::severity_accent(9));
    }
}
