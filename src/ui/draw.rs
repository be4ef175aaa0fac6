use super::Rect;

/// Font family selector. Resolved to a concrete face by the renderer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Deserialize)]
pub enum FontFamily {
    #[default]
    Serif,
    Mono,
}

/// Family plus pixel size. Metrics are approximate: the crate does no
/// shaping, so every glyph is assumed to be 0.6 em wide.
#[derive(Debug, Clone, Copy, PartialEq, serde::Deserialize)]
pub struct Font {
    pub family: FontFamily,
    pub size: f32,
}

impl Default for Font {
    fn default() -> Self {
        Self {
            family: FontFamily::Serif,
            size: 12.0,
        }
    }
}

impl Font {
    pub fn text_width(&self, text: &str) -> f32 {
        text.chars().count() as f32 * self.size * 0.6
    }

    pub fn line_height(&self) -> f32 {
        self.size
    }
}

/// Intermediate draw command for a panel quad.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelCommand {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub bg_color: [f32; 4],     // sRGB RGBA
    pub border_color: [f32; 4], // sRGB RGBA
    pub border_width: f32,
    /// Scissor rectangle from enclosing scroll containers.
    pub clip: Option<Rect>,
}

impl PanelCommand {
    /// Borderless quad covering `rect`.
    pub fn fill(rect: Rect, color: [f32; 4], clip: Option<Rect>) -> Self {
        Self {
            x: rect.x,
            y: rect.y,
            width: rect.width,
            height: rect.height,
            bg_color: color,
            border_color: [0.0; 4],
            border_width: 0.0,
            clip,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect {
            x: self.x,
            y: self.y,
            width: self.width,
            height: self.height,
        }
    }
}

/// Intermediate draw command for a text run.
#[derive(Debug, Clone, PartialEq)]
pub struct TextCommand {
    pub text: String,
    pub x: f32,
    pub y: f32,
    pub color: [f32; 4], // sRGB RGBA
    pub font_size: f32,
    pub font_family: FontFamily,
    pub clip: Option<Rect>,
}

/// Collects draw commands from the widget tree.
/// Decouples widget logic from whatever rasterizes them.
#[derive(Debug, Default)]
pub struct DrawList {
    pub panels: Vec<PanelCommand>,
    pub texts: Vec<TextCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self {
            panels: Vec::new(),
            texts: Vec::new(),
        }
    }

    /// Queue a panel. Fully transparent panels are dropped.
    pub fn push_panel(&mut self, panel: PanelCommand) {
        if panel.bg_color[3] <= 0.0 && (panel.border_width <= 0.0 || panel.border_color[3] <= 0.0)
        {
            return;
        }
        self.panels.push(panel);
    }

    pub fn clear(&mut self) {
        self.panels.clear();
        self.texts.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn approximate_metrics() {
        let font = Font {
            family: FontFamily::Mono,
            size: 10.0,
        };
        assert!((font.text_width("abc") - 18.0).abs() < 0.01);
        assert!(font.text_width("").abs() < 0.01);
        assert!((font.line_height() - 10.0).abs() < 0.01);
        // Counted in chars, not bytes.
        assert!((font.text_width("äö") - 12.0).abs() < 0.01);
    }

    #[test]
    fn transparent_panels_are_skipped() {
        let mut dl = DrawList::new();
        let r = Rect {
            x: 0.0,
            y: 0.0,
            width: 5.0,
            height: 5.0,
        };
        dl.push_panel(PanelCommand::fill(r, [0.0; 4], None));
        assert!(dl.panels.is_empty());
        dl.push_panel(PanelCommand::fill(r, [1.0, 0.0, 0.0, 0.5], None));
        assert_eq!(dl.panels.len(), 1);
        assert_eq!(dl.panels[0].rect(), r);

        dl.clear();
        assert!(dl.panels.is_empty());
    }
}
