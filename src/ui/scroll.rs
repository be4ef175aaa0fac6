use std::fmt;

use super::event::{Event, WidgetScrolled};
use super::widget::Widget;
use super::{Edges, Rect, WidgetId, WidgetTree};

/// Background colours of a scroll container.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScrollContainerImage {
    pub idle: [f32; 4],
    pub disabled: [f32; 4],
}

impl ScrollContainerImage {
    pub fn color(&self, disabled: bool) -> [f32; 4] {
        if disabled { self.disabled } else { self.idle }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ScrollContainerOpt {
    Image(ScrollContainerImage),
    /// Space between the container's edge and the viewport.
    Padding(Edges),
    /// Lay the content out exactly as wide as the viewport.
    StretchContentWidth(bool),
}

/// Shows a window onto its first child.
///
/// The scroll offsets are fractions of the overflow: 0 shows the top/left
/// edge of the content, 1 the bottom/right edge.
#[derive(Default)]
pub struct ScrollContainer {
    pub image: ScrollContainerImage,
    pub padding: Edges,
    pub stretch_content_width: bool,
    scroll_top: f32,
    scroll_left: f32,
    pub scrolled: Event<WidgetScrolled>,
}

impl ScrollContainer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_opts(mut self, opts: impl IntoIterator<Item = ScrollContainerOpt>) -> Self {
        for opt in opts {
            match opt {
                ScrollContainerOpt::Image(image) => self.image = image,
                ScrollContainerOpt::Padding(padding) => self.padding = padding,
                ScrollContainerOpt::StretchContentWidth(s) => self.stretch_content_width = s,
            }
        }
        self
    }

    pub fn on_scroll(
        mut self,
        handler: impl Fn(&mut WidgetTree, &WidgetScrolled) + 'static,
    ) -> Self {
        self.scrolled.add_handler(handler);
        self
    }

    pub fn scroll_top(&self) -> f32 {
        self.scroll_top
    }

    pub fn scroll_left(&self) -> f32 {
        self.scroll_left
    }
}

impl fmt::Debug for ScrollContainer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScrollContainer")
            .field("padding", &self.padding)
            .field("stretch_content_width", &self.stretch_content_width)
            .field("scroll_top", &self.scroll_top)
            .field("scroll_left", &self.scroll_left)
            .field("scrolled", &self.scrolled)
            .finish()
    }
}

impl From<ScrollContainer> for Widget {
    fn from(scroll: ScrollContainer) -> Self {
        Widget::ScrollContainer(scroll)
    }
}

impl WidgetTree {
    pub fn scroll_top(&self, id: WidgetId) -> f32 {
        self.scroll_container(id)
            .map_or(0.0, ScrollContainer::scroll_top)
    }

    pub fn scroll_left(&self, id: WidgetId) -> f32 {
        self.scroll_container(id)
            .map_or(0.0, ScrollContainer::scroll_left)
    }

    /// Set the vertical offset, clamped to [0, 1].
    pub fn set_scroll_top(&mut self, id: WidgetId, top: f32) {
        let top = top.clamp(0.0, 1.0);
        let changed = match self.scroll_container_mut(id) {
            Some(scroll) if scroll.scroll_top != top => {
                scroll.scroll_top = top;
                true
            }
            _ => false,
        };
        if changed {
            self.mark_dirty(id);
        }
    }

    /// Set the horizontal offset, clamped to [0, 1].
    pub fn set_scroll_left(&mut self, id: WidgetId, left: f32) {
        let left = left.clamp(0.0, 1.0);
        let changed = match self.scroll_container_mut(id) {
            Some(scroll) if scroll.scroll_left != left => {
                scroll.scroll_left = left;
                true
            }
            _ => false,
        };
        if changed {
            self.mark_dirty(id);
        }
    }

    /// Visible area of a scroll container: its rect minus padding.
    pub fn scroll_viewport(&self, id: WidgetId) -> Option<Rect> {
        let node = self.get(id)?;
        let Widget::ScrollContainer(scroll) = &node.widget else {
            return None;
        };
        Some(node.rect.inset(scroll.padding))
    }

    /// Where the content sits for the current offsets. Computed from the
    /// content's preferred size, so it is valid before any layout pass.
    pub fn scroll_content_rect(&self, id: WidgetId) -> Option<Rect> {
        let node = self.get(id)?;
        let Widget::ScrollContainer(scroll) = &node.widget else {
            return None;
        };
        let viewport = node.rect.inset(scroll.padding);
        let content = node
            .children
            .first()
            .map(|&c| self.preferred_size(c))
            .unwrap_or_default();
        let width = if scroll.stretch_content_width {
            viewport.width
        } else {
            content.width
        };
        let height = content.height;
        let overflow_x = (width - viewport.width).max(0.0);
        let overflow_y = (height - viewport.height).max(0.0);
        Some(Rect {
            x: viewport.x - (overflow_x * scroll.scroll_left).round(),
            y: viewport.y - (overflow_y * scroll.scroll_top).round(),
            width,
            height,
        })
    }

    /// Deliver a wheel delta to the container's scroll handlers.
    pub fn fire_scrolled(&mut self, id: WidgetId, x: f32, y: f32) {
        let Some(scroll) = self.scroll_container(id) else {
            return;
        };
        let dispatch = scroll.scrolled.dispatcher();
        dispatch.fire(self, &WidgetScrolled { widget: id, x, y });
    }

    /// Nearest scroll container at or above `id`.
    pub fn enclosing_scroll_container(&self, id: WidgetId) -> Option<WidgetId> {
        let mut current = Some(id);
        while let Some(cid) = current {
            if self.scroll_container(cid).is_some() {
                return Some(cid);
            }
            current = self.parent(cid);
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::layout::{Layout, LayoutData, RowLayout};
    use crate::ui::widget::Container;
    use crate::ui::Size;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn rect(x: f32, y: f32, width: f32, height: f32) -> Rect {
        Rect {
            x,
            y,
            width,
            height,
        }
    }

    /// Scroll container at (10, 10) 100x50 with a 200x400 content block.
    fn scroller(stretch: bool) -> (WidgetTree, WidgetId, WidgetId) {
        let mut tree = WidgetTree::new();
        let scroll = tree.insert_root(
            ScrollContainer::new()
                .with_opts([ScrollContainerOpt::StretchContentWidth(stretch)])
                .into(),
        );
        tree.set_location(scroll, rect(10.0, 10.0, 100.0, 50.0));
        let content = tree.insert(scroll, Container::new(Layout::default()).into());
        tree.set_min_size(
            content,
            Size {
                width: 200.0,
                height: 400.0,
            },
        );
        (tree, scroll, content)
    }

    #[test]
    fn offsets_clamp_to_unit_range() {
        let (mut tree, scroll, _) = scroller(false);
        tree.set_scroll_top(scroll, 1.5);
        tree.set_scroll_left(scroll, -2.0);
        assert_eq!(tree.scroll_top(scroll), 1.0);
        assert_eq!(tree.scroll_left(scroll), 0.0);
    }

    #[test]
    fn content_moves_by_overflow_fraction() {
        let (mut tree, scroll, content) = scroller(false);
        tree.set_scroll_top(scroll, 0.5);
        tree.set_scroll_left(scroll, 1.0);
        tree.layout();

        let r = tree.get(content).expect("content").rect;
        // 350px vertical overflow, 100px horizontal.
        assert!((r.y - (10.0 - 175.0)).abs() < 0.01);
        assert!((r.x - (10.0 - 100.0)).abs() < 0.01);
        assert!((r.height - 400.0).abs() < 0.01);
    }

    #[test]
    fn stretched_content_never_scrolls_sideways() {
        let (mut tree, scroll, _) = scroller(true);
        tree.set_scroll_left(scroll, 1.0);
        let r = tree.scroll_content_rect(scroll).expect("content rect");
        assert!((r.width - 100.0).abs() < 0.01);
        assert!((r.x - 10.0).abs() < 0.01);
    }

    #[test]
    fn padding_shrinks_viewport() {
        let mut tree = WidgetTree::new();
        let scroll = tree.insert_root(
            ScrollContainer::new()
                .with_opts([ScrollContainerOpt::Padding(Edges::all(5.0))])
                .into(),
        );
        tree.set_location(scroll, rect(0.0, 0.0, 100.0, 50.0));
        assert_eq!(
            tree.scroll_viewport(scroll),
            Some(rect(5.0, 5.0, 90.0, 40.0))
        );
    }

    #[test]
    fn set_scroll_marks_dirty_only_on_change() {
        let (mut tree, scroll, _) = scroller(false);
        tree.layout();
        tree.set_scroll_top(scroll, 0.0);
        assert!(!tree.get(scroll).expect("scroll").dirty);
        tree.set_scroll_top(scroll, 0.25);
        assert!(tree.get(scroll).expect("scroll").dirty);
    }

    #[test]
    fn fire_scrolled_reaches_handlers() {
        let mut tree = WidgetTree::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let s = Rc::clone(&seen);
        let scroll = tree.insert_root(
            ScrollContainer::new()
                .on_scroll(move |_, args| s.borrow_mut().push((args.widget, args.y)))
                .into(),
        );
        tree.fire_scrolled(scroll, 0.0, -2.0);
        assert_eq!(*seen.borrow(), vec![(scroll, -2.0)]);
    }

    #[test]
    fn hidden_content_is_clipped_and_unreachable() {
        let mut tree = WidgetTree::new();
        let scroll = tree.insert_root(ScrollContainer::new().into());
        tree.set_location(scroll, rect(0.0, 0.0, 100.0, 20.0));
        let column = tree.insert(
            scroll,
            Container::new(Layout::Row(RowLayout::default())).into(),
        );
        let mut items = Vec::new();
        for _ in 0..5 {
            let item = tree.insert(column, Container::default().with_background([1.0; 4]).into());
            tree.set_min_size(
                item,
                Size {
                    width: 100.0,
                    height: 10.0,
                },
            );
            tree.set_layout_data(item, LayoutData::Row { stretch: true });
            items.push(item);
        }
        tree.layout();

        // Only the first two rows intersect the 20px viewport.
        let mut dl = crate::ui::DrawList::new();
        tree.draw(&mut dl);
        assert_eq!(dl.panels.len(), 2);
        assert!(dl.panels.iter().all(|p| p.clip == Some(rect(0.0, 0.0, 100.0, 20.0))));

        assert_eq!(tree.hit_test(5.0, 15.0), Some(items[1]));
        assert_eq!(tree.enclosing_scroll_container(items[3]), Some(scroll));
    }
}
