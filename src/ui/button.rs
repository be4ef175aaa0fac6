use std::rc::Rc;

use super::draw::Font;
use super::event::{ButtonClicked, Event};
use super::widget::Widget;
use super::{Edges, Size, WidgetId, WidgetTree};

const TRANSPARENT: [f32; 4] = [0.0; 4];

/// Background colours per interaction state. States without a colour fall
/// back to `idle`.
///
/// Shared between many buttons through `Rc`; never mutated after it has been
/// handed out.
#[derive(Debug, Clone, PartialEq)]
pub struct ButtonImage {
    pub idle: [f32; 4],
    pub hover: Option<[f32; 4]>,
    pub pressed: Option<[f32; 4]>,
    pub disabled: Option<[f32; 4]>,
}

impl ButtonImage {
    /// Same colour in every state.
    pub fn solid(color: [f32; 4]) -> Self {
        Self {
            idle: color,
            hover: None,
            pressed: None,
            disabled: None,
        }
    }

    pub fn transparent() -> Self {
        Self::solid(TRANSPARENT)
    }

    pub fn color(&self, disabled: bool, hovered: bool, pressed: bool) -> [f32; 4] {
        let state = if disabled {
            self.disabled
        } else if pressed {
            self.pressed.or(self.hover)
        } else if hovered {
            self.hover
        } else {
            None
        };
        state.unwrap_or(self.idle)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ButtonTextColor {
    pub idle: [f32; 4],
    pub disabled: Option<[f32; 4]>,
}

impl ButtonTextColor {
    pub fn color(&self, disabled: bool) -> [f32; 4] {
        if disabled {
            self.disabled.unwrap_or(self.idle)
        } else {
            self.idle
        }
    }
}

/// Clickable text button. Text is left-aligned inside `text_padding`.
#[derive(Debug)]
pub struct Button {
    pub image: Rc<ButtonImage>,
    pub text_color: Rc<ButtonTextColor>,
    pub label: String,
    pub font: Font,
    pub text_padding: Edges,
    /// Cursor is over the button (maintained by `UiState`).
    pub hovered: bool,
    /// Mouse is held down on the button (maintained by `UiState`).
    pub pressed: bool,
    pub clicked: Event<ButtonClicked>,
}

impl Button {
    pub fn new(
        label: impl Into<String>,
        font: Font,
        image: Rc<ButtonImage>,
        text_color: Rc<ButtonTextColor>,
    ) -> Self {
        Self {
            image,
            text_color,
            label: label.into(),
            font,
            text_padding: Edges::ZERO,
            hovered: false,
            pressed: false,
            clicked: Event::new(),
        }
    }

    pub fn with_text_padding(mut self, padding: Edges) -> Self {
        self.text_padding = padding;
        self
    }

    pub fn on_click(mut self, handler: impl Fn(&mut WidgetTree, &ButtonClicked) + 'static) -> Self {
        self.clicked.add_handler(handler);
        self
    }

    pub fn preferred_size(&self) -> Size {
        Size {
            width: self.font.text_width(&self.label) + self.text_padding.horizontal(),
            height: self.font.line_height() + self.text_padding.vertical(),
        }
    }
}

impl WidgetTree {
    /// Fire the click event of an enabled button.
    pub fn click_button(&mut self, id: WidgetId) {
        if self.is_disabled(id) {
            return;
        }
        let Some(button) = self.button(id) else {
            return;
        };
        let dispatch = button.clicked.dispatcher();
        log::trace!("button {id:?} clicked");
        dispatch.fire(self, &ButtonClicked { button: id });
    }

    /// Replace a button's label. Relayouts, since the preferred width changes.
    pub fn set_button_label(&mut self, id: WidgetId, label: impl Into<String>) {
        let label = label.into();
        let changed = match self.button_mut(id) {
            Some(button) if button.label != label => {
                button.label = label;
                true
            }
            _ => false,
        };
        if changed {
            self.mark_dirty(id);
        }
    }

    /// Swap the shared image and text colour of a button.
    pub fn set_button_style(
        &mut self,
        id: WidgetId,
        image: &Rc<ButtonImage>,
        text_color: &Rc<ButtonTextColor>,
    ) {
        if let Some(button) = self.button_mut(id) {
            button.image = Rc::clone(image);
            button.text_color = Rc::clone(text_color);
        }
    }

    pub fn button_label(&self, id: WidgetId) -> Option<&str> {
        self.button(id).map(|b| b.label.as_str())
    }
}

impl From<Button> for Widget {
    fn from(button: Button) -> Self {
        Widget::Button(button)
    }
}
