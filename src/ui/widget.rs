use super::button::Button;
use super::layout::Layout;
use super::scroll::ScrollContainer;
use super::slider::Slider;
use super::{Edges, Size, WidgetId, WidgetTree};

/// Flat enum widget identity.
/// Closed set: we know all widget types. No trait objects.
#[derive(Debug)]
pub enum Widget {
    /// Ordered children arranged by a layout strategy.
    Container(Container),
    /// Viewport onto a single, usually larger, content widget.
    ScrollContainer(ScrollContainer),
    Slider(Slider),
    Button(Button),
}

impl Widget {
    /// Whether a disabled widget of this kind disables its children.
    pub fn propagates_disabled(&self) -> bool {
        match self {
            Widget::Container(c) => c.auto_disable_children,
            Widget::ScrollContainer(_) => true,
            Widget::Slider(_) | Widget::Button(_) => false,
        }
    }

    /// Can take keyboard focus.
    pub fn is_focusable(&self) -> bool {
        matches!(self, Widget::Button(_) | Widget::Slider(_))
    }
}

/// Plain grouping widget. Draws only its optional background.
#[derive(Debug, Clone, Default)]
pub struct Container {
    pub layout: Layout,
    /// Children report disabled while this container is disabled.
    pub auto_disable_children: bool,
    pub background: Option<[f32; 4]>, // sRGB RGBA
}

impl Container {
    pub fn new(layout: Layout) -> Self {
        Self {
            layout,
            ..Self::default()
        }
    }

    pub fn with_auto_disable_children(mut self, auto: bool) -> Self {
        self.auto_disable_children = auto;
        self
    }

    pub fn with_background(mut self, color: [f32; 4]) -> Self {
        self.background = Some(color);
        self
    }
}

impl From<Container> for Widget {
    fn from(container: Container) -> Self {
        Widget::Container(container)
    }
}

/// Construction options for containers built by composite widgets.
#[derive(Debug, Clone, PartialEq)]
pub enum ContainerOpt {
    Background([f32; 4]),
    /// Overrides the padding of the container's layout.
    Padding(Edges),
    MinSize(Size),
}

impl WidgetTree {
    pub fn apply_container_opts(&mut self, id: WidgetId, opts: &[ContainerOpt]) {
        for opt in opts {
            match opt {
                ContainerOpt::Background(color) => {
                    if let Some(c) = self.container_mut(id) {
                        c.background = Some(*color);
                    }
                }
                ContainerOpt::Padding(padding) => {
                    if let Some(c) = self.container_mut(id) {
                        c.layout.set_padding(*padding);
                    }
                    self.mark_dirty(id);
                }
                ContainerOpt::MinSize(size) => self.set_min_size(id, *size),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::layout::{Direction, GridLayout};

    #[test]
    fn propagation_rules() {
        assert!(!Widget::Container(Container::default()).propagates_disabled());
        assert!(
            Widget::Container(Container::default().with_auto_disable_children(true))
                .propagates_disabled()
        );
        assert!(Widget::ScrollContainer(ScrollContainer::default()).propagates_disabled());
        assert!(!Widget::Slider(Slider::new(Direction::Vertical, 0, 10)).propagates_disabled());
    }

    #[test]
    fn container_opts_apply() {
        let mut tree = WidgetTree::new();
        let id = tree.insert_root(Container::new(Layout::Grid(GridLayout::default())).into());
        tree.apply_container_opts(
            id,
            &[
                ContainerOpt::Background([0.1, 0.2, 0.3, 1.0]),
                ContainerOpt::Padding(Edges::all(4.0)),
                ContainerOpt::MinSize(Size {
                    width: 40.0,
                    height: 30.0,
                }),
            ],
        );
        let c = tree.container(id).expect("container");
        assert_eq!(c.background, Some([0.1, 0.2, 0.3, 1.0]));
        assert_eq!(c.layout.padding(), Edges::all(4.0));
        let pref = tree.preferred_size(id);
        assert!((pref.width - 40.0).abs() < 0.01);
        assert!((pref.height - 30.0).abs() < 0.01);
    }
}
