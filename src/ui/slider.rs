use std::fmt;
use std::rc::Rc;

use super::event::{Event, SliderChanged};
use super::layout::Direction;
use super::widget::Widget;
use super::{Rect, Size, WidgetId, WidgetTree};

/// Computes the page size (visible share of the range) on demand.
pub type PageSizeFn = Rc<dyn Fn(&WidgetTree) -> i32>;

/// Track and handle colours.
#[derive(Debug, Clone, PartialEq)]
pub struct SliderImage {
    pub track: [f32; 4],
    pub track_disabled: [f32; 4],
    pub handle: [f32; 4],
    pub handle_hover: [f32; 4],
    pub handle_disabled: [f32; 4],
}

impl Default for SliderImage {
    fn default() -> Self {
        Self {
            track: [0.0, 0.0, 0.0, 0.25],
            track_disabled: [0.0, 0.0, 0.0, 0.1],
            handle: [0.78, 0.66, 0.31, 1.0],
            handle_hover: [0.86, 0.74, 0.39, 1.0],
            handle_disabled: [0.5, 0.5, 0.5, 1.0],
        }
    }
}

/// Construction options for sliders built by composite widgets.
#[derive(Debug, Clone, PartialEq)]
pub enum SliderOpt {
    Image(SliderImage),
    /// Track thickness across the slider axis, in pixels.
    Thickness(f32),
    /// Smallest handle length along the axis, in pixels.
    MinHandleSize(f32),
}

/// Draggable range control over the integers `min..=max`.
pub struct Slider {
    pub direction: Direction,
    pub min: i32,
    pub max: i32,
    current: i32,
    pub page_size: Option<PageSizeFn>,
    pub image: SliderImage,
    pub thickness: f32,
    pub min_handle_size: f32,
    /// Draw the track with its disabled colour while still accepting input.
    pub draw_track_disabled: bool,
    /// Cursor is over the slider (maintained by `UiState`).
    pub hovered: bool,
    pub changed: Event<SliderChanged>,
}

impl Slider {
    pub fn new(direction: Direction, min: i32, max: i32) -> Self {
        Self {
            direction,
            min,
            max: max.max(min),
            current: min,
            page_size: None,
            image: SliderImage::default(),
            thickness: 12.0,
            min_handle_size: 16.0,
            draw_track_disabled: false,
            hovered: false,
            changed: Event::new(),
        }
    }

    pub fn with_page_size(mut self, page_size: impl Fn(&WidgetTree) -> i32 + 'static) -> Self {
        self.page_size = Some(Rc::new(page_size));
        self
    }

    pub fn on_change(mut self, handler: impl Fn(&mut WidgetTree, &SliderChanged) + 'static) -> Self {
        self.changed.add_handler(handler);
        self
    }

    pub fn with_opts(mut self, opts: impl IntoIterator<Item = SliderOpt>) -> Self {
        for opt in opts {
            match opt {
                SliderOpt::Image(image) => self.image = image,
                SliderOpt::Thickness(t) => self.thickness = t,
                SliderOpt::MinHandleSize(s) => self.min_handle_size = s,
            }
        }
        self
    }

    pub fn current(&self) -> i32 {
        self.current
    }

    pub fn range(&self) -> i32 {
        self.max - self.min
    }

    pub fn preferred_size(&self) -> Size {
        match self.direction {
            Direction::Vertical => Size {
                width: self.thickness,
                height: self.min_handle_size,
            },
            Direction::Horizontal => Size {
                width: self.min_handle_size,
                height: self.thickness,
            },
        }
    }

    /// Length of the track along the slider axis.
    fn track_length(&self, rect: Rect) -> f32 {
        match self.direction {
            Direction::Vertical => rect.height,
            Direction::Horizontal => rect.width,
        }
    }

    /// Handle length for a given page size: the page's share of the range,
    /// no shorter than `min_handle_size`, no longer than the track.
    fn handle_length(&self, track: f32, page_size: i32) -> f32 {
        let range = self.range();
        if range <= 0 {
            return track;
        }
        let share = page_size.clamp(0, range) as f32 / range as f32;
        (track * share).max(self.min_handle_size).min(track)
    }

    /// Pixels the handle can travel along the track.
    fn travel(&self, track: f32, page_size: i32) -> f32 {
        (track - self.handle_length(track, page_size)).max(0.0)
    }
}

impl fmt::Debug for Slider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Slider")
            .field("direction", &self.direction)
            .field("min", &self.min)
            .field("max", &self.max)
            .field("current", &self.current)
            .field("has_page_size", &self.page_size.is_some())
            .field("changed", &self.changed)
            .finish()
    }
}

impl From<Slider> for Widget {
    fn from(slider: Slider) -> Self {
        Widget::Slider(slider)
    }
}

impl WidgetTree {
    pub fn slider_current(&self, id: WidgetId) -> Option<i32> {
        self.slider(id).map(Slider::current)
    }

    /// Set the slider value, clamped to its range. Fires the change event
    /// only when the value actually changes.
    pub fn set_slider_current(&mut self, id: WidgetId, value: i32) {
        self.update_slider(id, value, false);
    }

    pub(crate) fn update_slider(&mut self, id: WidgetId, value: i32, dragging: bool) {
        let Some(slider) = self.slider_mut(id) else {
            return;
        };
        let value = value.clamp(slider.min, slider.max);
        if value == slider.current {
            return;
        }
        slider.current = value;
        let dispatch = slider.changed.dispatcher();
        dispatch.fire(
            self,
            &SliderChanged {
                slider: id,
                current: value,
                dragging,
            },
        );
    }

    /// Current page size from the slider's callback; 1 without a callback.
    pub fn slider_page_size(&self, id: WidgetId) -> i32 {
        match self.slider(id) {
            Some(Slider {
                page_size: Some(page_size),
                ..
            }) => page_size(self),
            _ => 1,
        }
    }

    /// One keyboard/wheel notch: a third of a page, at least 1.
    pub fn slider_step(&self, id: WidgetId) -> i32 {
        (self.slider_page_size(id) / 3).max(1)
    }

    /// Rectangle of the draggable handle inside the slider's rect.
    pub fn slider_handle_rect(&self, id: WidgetId) -> Option<Rect> {
        let node = self.get(id)?;
        let Widget::Slider(slider) = &node.widget else {
            return None;
        };
        let rect = node.rect;
        let page = self.slider_page_size(id);
        let track = slider.track_length(rect);
        let length = slider.handle_length(track, page);
        let range = slider.range();
        let fraction = if range > 0 {
            (slider.current - slider.min) as f32 / range as f32
        } else {
            0.0
        };
        let offset = slider.travel(track, page) * fraction;
        Some(match slider.direction {
            Direction::Vertical => Rect {
                x: rect.x,
                y: rect.y + offset,
                width: rect.width,
                height: length,
            },
            Direction::Horizontal => Rect {
                x: rect.x + offset,
                y: rect.y,
                width: length,
                height: rect.height,
            },
        })
    }

    /// Value change for moving the handle by `pixels` along the axis.
    pub(crate) fn slider_value_delta(&self, id: WidgetId, pixels: f32) -> i32 {
        let Some(node) = self.get(id) else {
            return 0;
        };
        let Widget::Slider(slider) = &node.widget else {
            return 0;
        };
        let travel = slider.travel(slider.track_length(node.rect), self.slider_page_size(id));
        if travel <= 0.0 {
            return 0;
        }
        (pixels / travel * slider.range() as f32).round() as i32
    }

    /// Track click: move one page towards the point along the slider axis.
    pub(crate) fn slider_page_towards(&mut self, id: WidgetId, x: f32, y: f32) {
        let (Some(handle), Some(slider)) = (self.slider_handle_rect(id), self.slider(id)) else {
            return;
        };
        let before = match slider.direction {
            Direction::Vertical => y < handle.y,
            Direction::Horizontal => x < handle.x,
        };
        let page = self.slider_page_size(id).max(1);
        let current = slider.current;
        let target = if before { current - page } else { current + page };
        self.set_slider_current(id, target);
    }
}
