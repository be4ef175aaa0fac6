use winit::keyboard::KeyCode;

use super::layout::Direction;
use super::{WidgetId, WidgetTree};

/// Mouse button identifier (decoupled from winit).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

/// What the input system did, for hosts that want to observe it.
/// Drained with [`UiState::drain_events`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UiEvent {
    /// Cursor entered this widget's rect.
    Hover(WidgetId),
    /// Press + release on the same widget.
    Click { widget: WidgetId, button: MouseButton },
    /// Keyboard focus moved.
    Focus(Option<WidgetId>),
    /// A press turned into a drag.
    DragStart { widget: WidgetId, x: f32, y: f32 },
    /// Drag ended (mouse released while captured).
    DragEnd { widget: WidgetId },
    /// Wheel delta delivered to a scroll container.
    Scroll { widget: WidgetId, y: f32 },
}

/// Minimum pixel distance before a press becomes a drag.
const DRAG_THRESHOLD: f32 = 4.0;

/// Active slider handle drag.
#[derive(Debug)]
struct SliderDrag {
    slider: WidgetId,
    /// Cursor position along the slider axis when the drag started.
    start_pos: f32,
    start_value: i32,
}

/// Interaction state for the widget system. Lives with the host loop, not in
/// the tree.
#[derive(Debug, Default)]
pub struct UiState {
    /// Widget currently under the cursor.
    pub hovered: Option<WidgetId>,
    /// Widget receiving keyboard events (Tab to cycle).
    pub focused: Option<WidgetId>,
    /// Widget being pressed (mouse down, not yet released).
    pressed: Option<WidgetId>,
    /// Mouse button that initiated the press.
    pressed_button: Option<MouseButton>,
    /// Widget with mouse capture (for drag operations).
    /// While captured, all mouse events route to this widget even if
    /// the cursor leaves its rect. Released on mouse-up.
    pub captured: Option<WidgetId>,
    /// Screen coords where the press started (for drag threshold).
    press_origin: Option<(f32, f32)>,
    /// Whether we've crossed the drag threshold for the current press.
    dragging: bool,
    /// Last known cursor position (screen coords).
    pub cursor: (f32, f32),
    slider_drag: Option<SliderDrag>,
    events: Vec<UiEvent>,
}

impl UiState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Events recorded since the last call.
    pub fn drain_events(&mut self) -> Vec<UiEvent> {
        std::mem::take(&mut self.events)
    }

    fn update_hover(&mut self, tree: &mut WidgetTree, hit: Option<WidgetId>) {
        if hit == self.hovered {
            return;
        }
        if let Some(old) = self.hovered {
            tree.set_hovered(old, false);
        }
        if let Some(new) = hit {
            tree.set_hovered(new, true);
            self.events.push(UiEvent::Hover(new));
        }
        self.hovered = hit;
    }

    fn set_focus(&mut self, focus: Option<WidgetId>) {
        if self.focused != focus {
            self.focused = focus;
            self.events.push(UiEvent::Focus(focus));
        }
    }

    /// Handle cursor movement. Returns true if the cursor is over a UI widget
    /// (event consumed, don't pass to the host).
    pub fn handle_cursor_moved(&mut self, tree: &mut WidgetTree, x: f32, y: f32) -> bool {
        self.cursor = (x, y);

        // Active slider drag: map cursor travel onto the slider range.
        if let Some(drag) = &self.slider_drag {
            let pos = match tree.slider(drag.slider).map(|s| s.direction) {
                Some(Direction::Horizontal) => x,
                _ => y,
            };
            let value = drag.start_value + tree.slider_value_delta(drag.slider, pos - drag.start_pos);
            tree.update_slider(drag.slider, value, true);
            let hit = tree.hit_test(x, y);
            self.update_hover(tree, hit);
            return true;
        }

        // If a widget has capture, track the drag threshold.
        if let Some(captured) = self.captured {
            if let Some(origin) = self.press_origin {
                let dx = x - origin.0;
                let dy = y - origin.1;
                if !self.dragging && (dx * dx + dy * dy).sqrt() >= DRAG_THRESHOLD {
                    self.dragging = true;
                    self.events.push(UiEvent::DragStart {
                        widget: captured,
                        x: origin.0,
                        y: origin.1,
                    });
                }
            }
            let hit = tree.hit_test(x, y);
            self.update_hover(tree, hit);
            return true;
        }

        let hit = tree.hit_test(x, y);
        self.update_hover(tree, hit);
        hit.is_some()
    }

    /// Handle mouse button press/release. Returns true if consumed by UI.
    pub fn handle_mouse_input(
        &mut self,
        tree: &mut WidgetTree,
        button: MouseButton,
        pressed: bool,
        x: f32,
        y: f32,
    ) -> bool {
        self.cursor = (x, y);

        if pressed {
            let hit = self.captured.or_else(|| tree.hit_test(x, y));

            let Some(widget_id) = hit else {
                // Clicked outside all widgets: clear focus.
                self.set_focus(None);
                return false;
            };
            if tree.is_disabled(widget_id) {
                return true;
            }

            self.pressed = Some(widget_id);
            self.pressed_button = Some(button);
            self.press_origin = Some((x, y));
            self.dragging = false;
            self.captured = Some(widget_id);

            if button == MouseButton::Left {
                if let Some(slider) = tree.slider(widget_id) {
                    let direction = slider.direction;
                    let start_value = slider.current();
                    self.set_focus(Some(widget_id));
                    let on_handle = tree
                        .slider_handle_rect(widget_id)
                        .is_some_and(|h| h.contains(x, y));
                    if on_handle {
                        self.slider_drag = Some(SliderDrag {
                            slider: widget_id,
                            start_pos: match direction {
                                Direction::Horizontal => x,
                                Direction::Vertical => y,
                            },
                            start_value,
                        });
                        self.events.push(UiEvent::DragStart {
                            widget: widget_id,
                            x,
                            y,
                        });
                    } else {
                        tree.slider_page_towards(widget_id, x, y);
                    }
                } else if tree.button(widget_id).is_some() {
                    self.set_focus(Some(widget_id));
                    tree.set_pressed(widget_id, true);
                }
            }
            return true;
        }

        // Mouse up
        let was_pressed = self.pressed.take();
        let was_button = self.pressed_button.take();
        let was_captured = self.captured.take();
        let was_dragging = self.dragging;
        let was_slider_drag = self.slider_drag.take();
        self.press_origin = None;
        self.dragging = false;

        if let Some(pressed_id) = was_pressed {
            tree.set_pressed(pressed_id, false);
        }

        let Some(captured) = was_captured else {
            return false;
        };
        if let Some(drag) = was_slider_drag {
            self.events.push(UiEvent::DragEnd {
                widget: drag.slider,
            });
        } else if was_dragging {
            self.events.push(UiEvent::DragEnd { widget: captured });
        } else if let Some(pressed_id) = was_pressed
            && let Some(btn) = was_button
            && tree.hit_test(x, y) == Some(pressed_id)
        {
            self.events.push(UiEvent::Click {
                widget: pressed_id,
                button: btn,
            });
            if btn == MouseButton::Left {
                tree.click_button(pressed_id);
            }
        }
        true
    }

    /// Handle keyboard input. Returns true if consumed by a focused widget.
    pub fn handle_key_input(&mut self, tree: &mut WidgetTree, key: KeyCode, pressed: bool) -> bool {
        if self.focused.is_some_and(|id| !tree.contains(id)) {
            self.set_focus(None);
        }
        if !pressed {
            return self.focused.is_some();
        }

        // Tab cycles focus through focusable widgets.
        if key == KeyCode::Tab {
            let focusable = tree.focusable_widgets();
            if focusable.is_empty() {
                self.set_focus(None);
                return false;
            }
            let next = match self.focused {
                None => focusable[0],
                Some(current) => match focusable.iter().position(|&id| id == current) {
                    Some(idx) => focusable[(idx + 1) % focusable.len()],
                    None => focusable[0],
                },
            };
            self.set_focus(Some(next));
            return true;
        }

        let Some(focused_id) = self.focused else {
            return false;
        };
        if tree.is_disabled(focused_id) {
            return true;
        }

        if tree.button(focused_id).is_some() {
            if matches!(key, KeyCode::Enter | KeyCode::NumpadEnter | KeyCode::Space) {
                tree.click_button(focused_id);
            }
            return true;
        }

        // Slider keyboard navigation.
        if let Some(slider) = tree.slider(focused_id) {
            let (current, min, max) = (slider.current(), slider.min, slider.max);
            let step = tree.slider_step(focused_id);
            let page = tree.slider_page_size(focused_id).max(1);
            let target = match key {
                KeyCode::ArrowUp | KeyCode::ArrowLeft => current - step,
                KeyCode::ArrowDown | KeyCode::ArrowRight => current + step,
                KeyCode::PageUp => current - page,
                KeyCode::PageDown => current + page,
                KeyCode::Home => min,
                KeyCode::End => max,
                _ => return true,
            };
            tree.set_slider_current(focused_id, target);
        }
        true
    }

    /// Handle the mouse wheel. `delta` follows winit line deltas: positive
    /// when the wheel is rolled away from the user. Returns true if the
    /// cursor is over a widget.
    pub fn handle_scroll(&mut self, tree: &mut WidgetTree, delta: f32) -> bool {
        let Some(widget_id) = tree.hit_test(self.cursor.0, self.cursor.1) else {
            return false;
        };
        if let Some(scroll_id) = tree.enclosing_scroll_container(widget_id)
            && !tree.is_disabled(scroll_id)
        {
            log::trace!("wheel {delta} -> {scroll_id:?}");
            self.events.push(UiEvent::Scroll {
                widget: scroll_id,
                y: delta,
            });
            tree.fire_scrolled(scroll_id, 0.0, delta);
        }
        true
    }
}
