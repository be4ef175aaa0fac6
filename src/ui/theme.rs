use serde::Deserialize;

use super::draw::{Font, FontFamily};
use super::list::ListEntryColor;
use super::scroll::ScrollContainerImage;
use super::slider::SliderImage;
use super::Edges;

/// Centralized visual style constants.
///
/// Widgets read from Theme at construction time instead of hardcoding
/// colors. Loadable from RON (see `loading::load_theme`); any field missing
/// from the file keeps its default.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Theme {
    // -- Color palette (sRGB RGBA) --
    /// Parchment background: #D4B896
    pub bg_parchment: [f32; 4],
    /// Gold accent: #C8A850
    pub gold: [f32; 4],
    /// Light text (on dark/parchment backgrounds): #F0E6D2
    pub text_light: [f32; 4],
    /// Dark text (on light backgrounds): #3C2A1A
    pub text_dark: [f32; 4],
    /// Disabled/inactive grey: #808080
    pub disabled: [f32; 4],

    // -- Font defaults --
    pub font_body_family: FontFamily,
    /// Body font size in pixels (12pt).
    pub font_body_size: f32,

    // -- List entries --
    pub entry_text_selected: [f32; 4],
    pub entry_text_unselected: [f32; 4],
    pub entry_text_disabled_selected: [f32; 4],
    pub entry_text_disabled_unselected: [f32; 4],
    pub entry_selected_bg: [f32; 4],
    pub entry_disabled_selected_bg: [f32; 4],
    /// Entry text padding in pixels, horizontal then vertical.
    pub entry_pad_h: f32,
    pub entry_pad_v: f32,
    /// Gap between the scroll area and its sliders.
    pub control_spacing: f32,

    // -- Scroll container --
    pub scroll_bg: [f32; 4],
    pub scroll_bg_disabled: [f32; 4],
    pub scroll_padding: f32,

    // -- Sliders --
    pub slider_track: [f32; 4],
    pub slider_track_disabled: [f32; 4],
    pub slider_handle: [f32; 4],
    pub slider_handle_hover: [f32; 4],
    pub slider_handle_disabled: [f32; 4],
    /// Track thickness in pixels.
    pub slider_thickness: f32,
    pub slider_min_handle: f32,
}

/// Convert a hex color (#RRGGBB) to sRGB [f32; 4] with alpha 1.0.
const fn hex(r: u8, g: u8, b: u8) -> [f32; 4] {
    [r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, 1.0]
}

/// Convert a hex color with custom alpha.
const fn hex_a(r: u8, g: u8, b: u8, a: f32) -> [f32; 4] {
    [r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, a]
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            bg_parchment: hex_a(0xD4, 0xB8, 0x96, 0.95),
            gold: hex(0xC8, 0xA8, 0x50),
            text_light: hex(0xF0, 0xE6, 0xD2),
            text_dark: hex(0x3C, 0x2A, 0x1A),
            disabled: hex(0x80, 0x80, 0x80),

            font_body_family: FontFamily::Serif,
            font_body_size: 12.0,

            entry_text_selected: hex(0xF0, 0xE6, 0xD2),
            entry_text_unselected: hex(0x3C, 0x2A, 0x1A),
            entry_text_disabled_selected: hex(0xA0, 0xA0, 0xA0),
            entry_text_disabled_unselected: hex(0x80, 0x80, 0x80),
            entry_selected_bg: hex(0x8B, 0x5A, 0x2B),        // saddle brown
            entry_disabled_selected_bg: hex(0x6A, 0x5A, 0x4A), // washed out
            entry_pad_h: 6.0,
            entry_pad_v: 2.0,
            control_spacing: 2.0,

            scroll_bg: hex_a(0xD4, 0xB8, 0x96, 0.95),
            scroll_bg_disabled: hex_a(0xB0, 0xA0, 0x90, 0.95),
            scroll_padding: 2.0,

            slider_track: hex_a(0x3C, 0x2A, 0x1A, 0.25),
            slider_track_disabled: hex_a(0x3C, 0x2A, 0x1A, 0.1),
            slider_handle: hex(0xC8, 0xA8, 0x50),
            slider_handle_hover: hex(0xDC, 0xBC, 0x64),
            slider_handle_disabled: hex(0x80, 0x80, 0x80),
            slider_thickness: 12.0,
            slider_min_handle: 16.0,
        }
    }
}

impl Theme {
    pub fn entry_font(&self) -> Font {
        Font {
            family: self.font_body_family,
            size: self.font_body_size,
        }
    }

    pub fn entry_text_padding(&self) -> Edges {
        Edges::symmetric(self.entry_pad_h, self.entry_pad_v)
    }

    pub fn list_entry_color(&self) -> ListEntryColor {
        ListEntryColor {
            unselected: self.entry_text_unselected,
            selected: self.entry_text_selected,
            disabled_unselected: self.entry_text_disabled_unselected,
            disabled_selected: self.entry_text_disabled_selected,
            selected_background: self.entry_selected_bg,
            disabled_selected_background: self.entry_disabled_selected_bg,
        }
    }

    pub fn scroll_container_image(&self) -> ScrollContainerImage {
        ScrollContainerImage {
            idle: self.scroll_bg,
            disabled: self.scroll_bg_disabled,
        }
    }

    pub fn slider_image(&self) -> SliderImage {
        SliderImage {
            track: self.slider_track,
            track_disabled: self.slider_track_disabled,
            handle: self.slider_handle,
            handle_hover: self.slider_handle_hover,
            handle_disabled: self.slider_handle_disabled,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_palette() {
        let t = Theme::default();

        // Parchment #D4B896 -> 212/255, 184/255, 150/255
        assert!((t.bg_parchment[0] - 0.831).abs() < 0.01);
        assert!((t.bg_parchment[1] - 0.722).abs() < 0.01);
        assert!((t.bg_parchment[2] - 0.588).abs() < 0.01);
        assert!((t.bg_parchment[3] - 0.95).abs() < 0.01);

        // Gold #C8A850
        assert!((t.gold[0] - 0.784).abs() < 0.01);
        assert!((t.gold[1] - 0.659).abs() < 0.01);
        assert!((t.gold[2] - 0.314).abs() < 0.01);

        assert_eq!(t.font_body_family, FontFamily::Serif);
        assert!((t.font_body_size - 12.0).abs() < 0.01);
    }

    #[test]
    fn hex_conversion() {
        let white = hex(0xFF, 0xFF, 0xFF);
        assert!((white[0] - 1.0).abs() < 0.001);
        assert!((white[1] - 1.0).abs() < 0.001);
        assert!((white[2] - 1.0).abs() < 0.001);
        assert!((white[3] - 1.0).abs() < 0.001);

        let black = hex(0x00, 0x00, 0x00);
        assert!(black[0].abs() < 0.001);
        assert!(black[1].abs() < 0.001);
        assert!(black[2].abs() < 0.001);

        let half_alpha = hex_a(0x80, 0x80, 0x80, 0.5);
        assert!((half_alpha[3] - 0.5).abs() < 0.001);
    }

    #[test]
    fn derived_styles_follow_fields() {
        let t = Theme::default();
        let colors = t.list_entry_color();
        assert_eq!(colors.selected_background, t.entry_selected_bg);
        assert_eq!(colors.unselected, t.entry_text_unselected);
        assert_eq!(t.slider_image().handle, t.slider_handle);
        assert_eq!(t.scroll_container_image().disabled, t.scroll_bg_disabled);
        assert_eq!(t.entry_text_padding(), Edges::symmetric(6.0, 2.0));
        assert_eq!(t.entry_font().size, t.font_body_size);
    }

    #[test]
    fn partial_ron_keeps_defaults() {
        let t: Theme = ron::from_str("(font_body_size: 20.0, control_spacing: 0.0)")
            .expect("partial theme parses");
        assert!((t.font_body_size - 20.0).abs() < 0.01);
        assert!(t.control_spacing.abs() < 0.01);
        assert!((t.slider_thickness - 12.0).abs() < 0.01);
    }
}
