mod button;
mod draw;
mod event;
mod input;
mod layout;
mod list;
mod once;
mod scroll;
mod slider;
mod theme;
mod widget;

pub use button::{Button, ButtonImage, ButtonTextColor};
pub use draw::{DrawList, Font, FontFamily, PanelCommand, TextCommand};
pub use event::{ButtonClicked, Dispatcher, Event, Handler, SliderChanged, WidgetScrolled};
pub use input::{MouseButton, UiEvent, UiState};
pub use layout::{Direction, GridLayout, Layout, LayoutData, RowLayout};
pub use list::{EntryStyle, List, ListEntryColor, ListEntrySelected, ListOpt};
pub use once::{InitState, InitStep, MultiOnce};
pub use scroll::{ScrollContainer, ScrollContainerImage, ScrollContainerOpt};
pub use slider::{PageSizeFn, Slider, SliderImage, SliderOpt};
pub use theme::Theme;
pub use widget::{Container, ContainerOpt, Widget};

use slotmap::{SlotMap, new_key_type};

new_key_type! {
    /// Handle into the widget arena. Stable across insertions/removals.
    pub struct WidgetId;
}

// ---------------------------------------------------------------------------
// Geometry primitives
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, serde::Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    /// Returns true if the point (px, py) is inside this rectangle.
    pub fn contains(&self, px: f32, py: f32) -> bool {
        px >= self.x && px < self.x + self.width && py >= self.y && py < self.y + self.height
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }

    /// Overlapping area of two rectangles. Empty (zero-sized) when disjoint.
    pub fn intersect(&self, other: &Rect) -> Rect {
        let x = self.x.max(other.x);
        let y = self.y.max(other.y);
        Rect {
            x,
            y,
            width: (self.right().min(other.right()) - x).max(0.0),
            height: (self.bottom().min(other.bottom()) - y).max(0.0),
        }
    }

    /// Shrink by `edges`. Width and height never go negative.
    pub fn inset(&self, edges: Edges) -> Rect {
        Rect {
            x: self.x + edges.left,
            y: self.y + edges.top,
            width: (self.width - edges.horizontal()).max(0.0),
            height: (self.height - edges.vertical()).max(0.0),
        }
    }
}

/// Padding edges (top, right, bottom, left; CSS order).
#[derive(Debug, Clone, Copy, Default, PartialEq, serde::Deserialize)]
pub struct Edges {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Edges {
    pub const ZERO: Self = Self {
        top: 0.0,
        right: 0.0,
        bottom: 0.0,
        left: 0.0,
    };

    pub fn all(v: f32) -> Self {
        Self {
            top: v,
            right: v,
            bottom: v,
            left: v,
        }
    }

    /// Same padding left/right and top/bottom.
    pub fn symmetric(horizontal: f32, vertical: f32) -> Self {
        Self {
            top: vertical,
            right: horizontal,
            bottom: vertical,
            left: horizontal,
        }
    }

    pub fn horizontal(&self) -> f32 {
        self.left + self.right
    }

    pub fn vertical(&self) -> f32 {
        self.top + self.bottom
    }
}

// ---------------------------------------------------------------------------
// Widget node (arena entry)
// ---------------------------------------------------------------------------

/// Arena entry pairing a widget with tree/layout metadata.
#[derive(Debug)]
pub struct WidgetNode {
    pub widget: Widget,
    pub parent: Option<WidgetId>,
    pub children: Vec<WidgetId>,
    /// Position rectangle in screen pixels. Set by the parent's layout, or
    /// directly with `set_location` for roots.
    pub rect: Rect,
    /// Own disabled flag. See [`WidgetTree::is_disabled`] for the effective
    /// state.
    pub disabled: bool,
    /// Lower bound applied to the preferred size.
    pub min_size: Size,
    pub layout_data: LayoutData,
    pub dirty: bool,
}

/// Capability to detach a child from the container it was added to.
///
/// Returned by [`WidgetTree::add_child`]. Consuming it removes the child and
/// its subtree from the tree, provided the child still belongs to the same
/// parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RemoveChild {
    parent: WidgetId,
    child: WidgetId,
}

impl RemoveChild {
    pub fn child(&self) -> WidgetId {
        self.child
    }

    pub fn remove(self, tree: &mut WidgetTree) {
        let attached = tree
            .arena
            .get(self.child)
            .is_some_and(|node| node.parent == Some(self.parent));
        if !attached {
            log::debug!(
                "remove capability for {:?} is stale (no longer under {:?})",
                self.child,
                self.parent
            );
            return;
        }
        tree.remove(self.child);
    }
}

// ---------------------------------------------------------------------------
// WidgetTree
// ---------------------------------------------------------------------------

/// Arena-backed retained widget tree.
#[derive(Debug, Default)]
pub struct WidgetTree {
    arena: SlotMap<WidgetId, WidgetNode>,
    roots: Vec<WidgetId>,
}

impl WidgetTree {
    pub fn new() -> Self {
        Self {
            arena: SlotMap::with_key(),
            roots: Vec::new(),
        }
    }

    /// Create a detached widget. It is neither a root nor anyone's child
    /// until passed to `add_root` or `add_child`.
    pub fn create(&mut self, widget: Widget) -> WidgetId {
        self.arena.insert(WidgetNode {
            widget,
            parent: None,
            children: Vec::new(),
            rect: Rect::default(),
            disabled: false,
            min_size: Size::default(),
            layout_data: LayoutData::None,
            dirty: true,
        })
    }

    /// Insert a widget as a root (no parent).
    pub fn insert_root(&mut self, widget: Widget) -> WidgetId {
        let id = self.create(widget);
        self.roots.push(id);
        id
    }

    /// Make an existing widget a root, detaching it from its parent.
    pub fn add_root(&mut self, id: WidgetId) {
        if !self.arena.contains_key(id) || self.roots.contains(&id) {
            return;
        }
        self.detach(id);
        self.roots.push(id);
    }

    /// Insert a widget as the last child of `parent`. Returns the new id.
    pub fn insert(&mut self, parent: WidgetId, widget: Widget) -> WidgetId {
        let id = self.create(widget);
        self.add_child(parent, id);
        id
    }

    /// Append `child` to `parent`'s children, moving it out of wherever it
    /// was before. Marks the parent for relayout.
    pub fn add_child(&mut self, parent: WidgetId, child: WidgetId) -> RemoveChild {
        let capability = RemoveChild { parent, child };
        if !self.arena.contains_key(parent) || !self.arena.contains_key(child) {
            log::warn!("add_child with unknown widget ({parent:?} <- {child:?})");
            return capability;
        }
        if self.is_ancestor_or_self(child, parent) {
            log::warn!("add_child would create a cycle ({parent:?} <- {child:?})");
            return capability;
        }

        self.detach(child);
        if let Some(node) = self.arena.get_mut(child) {
            node.parent = Some(parent);
        }
        if let Some(parent_node) = self.arena.get_mut(parent) {
            parent_node.children.push(child);
        }
        self.mark_dirty(parent);
        capability
    }

    /// Unlink a widget from its parent (or the root list) without destroying
    /// it.
    pub fn detach(&mut self, id: WidgetId) {
        let Some(node) = self.arena.get_mut(id) else {
            return;
        };
        match node.parent.take() {
            Some(parent_id) => {
                if let Some(parent) = self.arena.get_mut(parent_id) {
                    parent.children.retain(|c| *c != id);
                }
                self.mark_dirty(parent_id);
            }
            None => self.roots.retain(|r| *r != id),
        }
    }

    /// Remove a widget and all its descendants.
    pub fn remove(&mut self, id: WidgetId) {
        if !self.arena.contains_key(id) {
            return;
        }
        let mut to_remove = Vec::new();
        Self::collect_subtree(&self.arena, id, &mut to_remove);

        self.detach(id);

        for rid in to_remove {
            self.arena.remove(rid);
        }
    }

    fn collect_subtree(
        arena: &SlotMap<WidgetId, WidgetNode>,
        id: WidgetId,
        out: &mut Vec<WidgetId>,
    ) {
        out.push(id);
        if let Some(node) = arena.get(id) {
            for &child in &node.children {
                Self::collect_subtree(arena, child, out);
            }
        }
    }

    fn is_ancestor_or_self(&self, ancestor: WidgetId, id: WidgetId) -> bool {
        let mut current = Some(id);
        while let Some(cid) = current {
            if cid == ancestor {
                return true;
            }
            current = self.arena.get(cid).and_then(|n| n.parent);
        }
        false
    }

    pub fn contains(&self, id: WidgetId) -> bool {
        self.arena.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    /// Get a reference to a widget node.
    pub fn get(&self, id: WidgetId) -> Option<&WidgetNode> {
        self.arena.get(id)
    }

    /// Get a mutable reference to a widget node.
    pub fn get_mut(&mut self, id: WidgetId) -> Option<&mut WidgetNode> {
        self.arena.get_mut(id)
    }

    pub fn children(&self, id: WidgetId) -> &[WidgetId] {
        self.arena
            .get(id)
            .map(|n| n.children.as_slice())
            .unwrap_or(&[])
    }

    pub fn parent(&self, id: WidgetId) -> Option<WidgetId> {
        self.arena.get(id)?.parent
    }

    /// Root widget ids.
    pub fn roots(&self) -> &[WidgetId] {
        &self.roots
    }

    // ------------------------------------------------------------------
    // Typed access
    // ------------------------------------------------------------------

    pub fn container(&self, id: WidgetId) -> Option<&Container> {
        match &self.arena.get(id)?.widget {
            Widget::Container(c) => Some(c),
            _ => None,
        }
    }

    pub fn container_mut(&mut self, id: WidgetId) -> Option<&mut Container> {
        match &mut self.arena.get_mut(id)?.widget {
            Widget::Container(c) => Some(c),
            _ => None,
        }
    }

    pub fn scroll_container(&self, id: WidgetId) -> Option<&ScrollContainer> {
        match &self.arena.get(id)?.widget {
            Widget::ScrollContainer(s) => Some(s),
            _ => None,
        }
    }

    pub fn scroll_container_mut(&mut self, id: WidgetId) -> Option<&mut ScrollContainer> {
        match &mut self.arena.get_mut(id)?.widget {
            Widget::ScrollContainer(s) => Some(s),
            _ => None,
        }
    }

    pub fn slider(&self, id: WidgetId) -> Option<&Slider> {
        match &self.arena.get(id)?.widget {
            Widget::Slider(s) => Some(s),
            _ => None,
        }
    }

    pub fn slider_mut(&mut self, id: WidgetId) -> Option<&mut Slider> {
        match &mut self.arena.get_mut(id)?.widget {
            Widget::Slider(s) => Some(s),
            _ => None,
        }
    }

    pub fn button(&self, id: WidgetId) -> Option<&Button> {
        match &self.arena.get(id)?.widget {
            Widget::Button(b) => Some(b),
            _ => None,
        }
    }

    pub fn button_mut(&mut self, id: WidgetId) -> Option<&mut Button> {
        match &mut self.arena.get_mut(id)?.widget {
            Widget::Button(b) => Some(b),
            _ => None,
        }
    }

    // ------------------------------------------------------------------
    // Node state
    // ------------------------------------------------------------------

    /// Place a widget. Its children are re-arranged on the next layout pass.
    pub fn set_location(&mut self, id: WidgetId, rect: Rect) {
        if let Some(node) = self.arena.get_mut(id) {
            node.rect = rect;
        }
        self.mark_dirty(id);
    }

    pub fn set_disabled(&mut self, id: WidgetId, disabled: bool) {
        if let Some(node) = self.arena.get_mut(id) {
            node.disabled = disabled;
        }
    }

    /// Effective disabled state: the widget's own flag, or an ancestor's when
    /// every widget in between passes its disabled state down (scroll
    /// containers always do, containers when `auto_disable_children` is set).
    pub fn is_disabled(&self, id: WidgetId) -> bool {
        let mut current = id;
        loop {
            let Some(node) = self.arena.get(current) else {
                return false;
            };
            if node.disabled {
                return true;
            }
            let Some(parent_id) = node.parent else {
                return false;
            };
            match self.arena.get(parent_id) {
                Some(parent) if parent.widget.propagates_disabled() => current = parent_id,
                _ => return false,
            }
        }
    }

    pub fn set_min_size(&mut self, id: WidgetId, size: Size) {
        if let Some(node) = self.arena.get_mut(id) {
            node.min_size = size;
        }
        self.mark_dirty(id);
    }

    pub fn set_layout_data(&mut self, id: WidgetId, data: LayoutData) {
        if let Some(node) = self.arena.get_mut(id) {
            node.layout_data = data;
        }
        self.mark_dirty(id);
    }

    pub fn layout_data(&self, id: WidgetId) -> LayoutData {
        self.arena
            .get(id)
            .map(|n| n.layout_data)
            .unwrap_or_default()
    }

    /// Mark a widget and its ancestors as dirty.
    pub fn mark_dirty(&mut self, id: WidgetId) {
        let mut current = Some(id);
        while let Some(cid) = current {
            if let Some(node) = self.arena.get_mut(cid) {
                if node.dirty {
                    break; // already dirty up from here
                }
                node.dirty = true;
                current = node.parent;
            } else {
                break;
            }
        }
    }

    /// Ask for the widget's subtree to be re-arranged on the next layout.
    pub fn request_relayout(&mut self, id: WidgetId) {
        self.mark_dirty(id);
    }

    /// Update the hover flag of buttons and sliders.
    pub(crate) fn set_hovered(&mut self, id: WidgetId, hovered: bool) {
        match self.arena.get_mut(id).map(|n| &mut n.widget) {
            Some(Widget::Button(b)) => b.hovered = hovered,
            Some(Widget::Slider(s)) => s.hovered = hovered,
            _ => {}
        }
    }

    pub(crate) fn set_pressed(&mut self, id: WidgetId, pressed: bool) {
        if let Some(button) = self.button_mut(id) {
            button.pressed = pressed;
        }
    }

    // ------------------------------------------------------------------
    // Hit testing
    // ------------------------------------------------------------------

    /// Find the topmost widget whose rect contains the point (x, y).
    /// Walks back-to-front: last child / last root is topmost.
    pub fn hit_test(&self, x: f32, y: f32) -> Option<WidgetId> {
        for &root in self.roots.iter().rev() {
            if let Some(hit) = self.hit_test_node(root, x, y) {
                return Some(hit);
            }
        }
        None
    }

    fn hit_test_node(&self, id: WidgetId, x: f32, y: f32) -> Option<WidgetId> {
        let node = self.arena.get(id)?;
        if !node.rect.contains(x, y) {
            return None;
        }
        // Scrolled content is only reachable through the viewport.
        let children_reachable = match &node.widget {
            Widget::ScrollContainer(scroll) => node.rect.inset(scroll.padding).contains(x, y),
            _ => true,
        };
        if children_reachable {
            for &child in node.children.iter().rev() {
                if let Some(hit) = self.hit_test_node(child, x, y) {
                    return Some(hit);
                }
            }
        }
        Some(id)
    }

    /// Collect enabled focusable widgets in tree order (depth-first).
    pub fn focusable_widgets(&self) -> Vec<WidgetId> {
        let mut result = Vec::new();
        for &root in &self.roots {
            self.collect_focusable(root, &mut result);
        }
        result
    }

    fn collect_focusable(&self, id: WidgetId, out: &mut Vec<WidgetId>) {
        if let Some(node) = self.arena.get(id) {
            if node.widget.is_focusable() && !self.is_disabled(id) {
                out.push(id);
            }
            for &child in &node.children {
                self.collect_focusable(child, out);
            }
        }
    }

    // ------------------------------------------------------------------
    // Layout
    // ------------------------------------------------------------------

    /// Preferred size of a widget, never smaller than its minimum size.
    pub fn preferred_size(&self, id: WidgetId) -> Size {
        let Some(node) = self.arena.get(id) else {
            return Size::default();
        };
        let pref = match &node.widget {
            Widget::Container(container) => {
                let sizes: Vec<Size> = node
                    .children
                    .iter()
                    .map(|&c| self.preferred_size(c))
                    .collect();
                container.layout.preferred_size(&sizes)
            }
            Widget::ScrollContainer(scroll) => {
                let content = node
                    .children
                    .first()
                    .map(|&c| self.preferred_size(c))
                    .unwrap_or_default();
                Size {
                    width: content.width + scroll.padding.horizontal(),
                    height: content.height + scroll.padding.vertical(),
                }
            }
            Widget::Slider(slider) => slider.preferred_size(),
            Widget::Button(button) => button.preferred_size(),
        };
        Size {
            width: pref.width.max(node.min_size.width),
            height: pref.height.max(node.min_size.height),
        }
    }

    /// Re-arrange every dirty root.
    pub fn layout(&mut self) {
        let root_ids: Vec<WidgetId> = self.roots.clone();
        for root in root_ids {
            self.layout_widget(root);
        }
    }

    /// Re-arrange the subtree under `id` if it is dirty. The widget's own
    /// rect is left as is.
    pub fn layout_widget(&mut self, id: WidgetId) {
        if self.arena.get(id).is_some_and(|n| n.dirty) {
            self.arrange(id);
        }
    }

    fn arrange(&mut self, id: WidgetId) {
        let Some(node) = self.arena.get(id) else {
            return;
        };
        let children: Vec<WidgetId> = node.children.clone();
        let rects: Vec<Rect> = match &node.widget {
            Widget::Container(container) => {
                let hints: Vec<(Size, LayoutData)> = children
                    .iter()
                    .map(|&c| (self.preferred_size(c), self.layout_data(c)))
                    .collect();
                container.layout.arrange(node.rect, &hints)
            }
            Widget::ScrollContainer(_) => match self.scroll_content_rect(id) {
                Some(content) => vec![content; children.len()],
                None => Vec::new(),
            },
            Widget::Slider(_) | Widget::Button(_) => Vec::new(),
        };

        if let Some(node) = self.arena.get_mut(id) {
            node.dirty = false;
        }
        for (child, rect) in children.into_iter().zip(rects) {
            if let Some(child_node) = self.arena.get_mut(child) {
                child_node.rect = rect;
            }
            self.arrange(child);
        }
    }

    // ------------------------------------------------------------------
    // Draw
    // ------------------------------------------------------------------

    /// Walk the tree and emit draw commands into a `DrawList`.
    pub fn draw(&self, draw_list: &mut DrawList) {
        for &root in &self.roots {
            self.draw_node(root, draw_list, None, false);
        }
    }

    /// Draw one widget and its subtree, honouring the clip of enclosing
    /// scroll containers and inherited disabled state.
    pub fn draw_widget(&self, id: WidgetId, draw_list: &mut DrawList) {
        let mut clip: Option<Rect> = None;
        let mut current = self.parent(id);
        while let Some(ancestor) = current {
            if let Some(node) = self.arena.get(ancestor)
                && let Widget::ScrollContainer(scroll) = &node.widget
            {
                let viewport = node.rect.inset(scroll.padding);
                clip = Some(clip.map_or(viewport, |c| c.intersect(&viewport)));
            }
            current = self.parent(ancestor);
        }
        let inherited = self.parent(id).is_some_and(|p| {
            self.is_disabled(p)
                && self
                    .arena
                    .get(p)
                    .is_some_and(|n| n.widget.propagates_disabled())
        });
        self.draw_node(id, draw_list, clip, inherited);
    }

    fn draw_node(
        &self,
        id: WidgetId,
        draw_list: &mut DrawList,
        clip: Option<Rect>,
        inherited_disabled: bool,
    ) {
        let Some(node) = self.arena.get(id) else {
            return;
        };
        if let Some(clip) = clip
            && !node.rect.intersects(&clip)
        {
            return;
        }
        let disabled = node.disabled || inherited_disabled;
        let rect = node.rect;

        let mut child_clip = clip;
        match &node.widget {
            Widget::Container(container) => {
                if let Some(bg) = container.background {
                    draw_list.push_panel(PanelCommand::fill(rect, bg, clip));
                }
            }
            Widget::ScrollContainer(scroll) => {
                draw_list.push_panel(PanelCommand::fill(rect, scroll.image.color(disabled), clip));
                let viewport = rect.inset(scroll.padding);
                child_clip = Some(clip.map_or(viewport, |c| c.intersect(&viewport)));
            }
            Widget::Slider(slider) => {
                let track = if disabled || slider.draw_track_disabled {
                    slider.image.track_disabled
                } else {
                    slider.image.track
                };
                draw_list.push_panel(PanelCommand::fill(rect, track, clip));
                if let Some(handle) = self.slider_handle_rect(id) {
                    let color = if disabled {
                        slider.image.handle_disabled
                    } else if slider.hovered {
                        slider.image.handle_hover
                    } else {
                        slider.image.handle
                    };
                    draw_list.push_panel(PanelCommand::fill(handle, color, clip));
                }
            }
            Widget::Button(button) => {
                let bg = button.image.color(disabled, button.hovered, button.pressed);
                draw_list.push_panel(PanelCommand::fill(rect, bg, clip));
                draw_list.texts.push(TextCommand {
                    text: button.label.clone(),
                    x: rect.x + button.text_padding.left,
                    y: rect.y + button.text_padding.top,
                    color: button.text_color.color(disabled),
                    font_size: button.font.size,
                    font_family: button.font.family,
                    clip,
                });
            }
        }

        let pass_down = disabled && node.widget.propagates_disabled();
        for &child in &node.children {
            self.draw_node(child, draw_list, child_clip, pass_down);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    fn font() -> Font {
        Font {
            family: FontFamily::Serif,
            size: 10.0,
        }
    }

    fn button(label: &str) -> Widget {
        Button::new(
            label,
            font(),
            Rc::new(ButtonImage::solid([0.5, 0.5, 0.5, 1.0])),
            Rc::new(ButtonTextColor {
                idle: [1.0; 4],
                disabled: Some([0.5; 4]),
            }),
        )
        .into()
    }

    fn column() -> Widget {
        Widget::Container(Container::new(Layout::Row(RowLayout::default())))
    }

    fn rect(x: f32, y: f32, width: f32, height: f32) -> Rect {
        Rect {
            x,
            y,
            width,
            height,
        }
    }

    #[test]
    fn insert_root_and_child() {
        let mut tree = WidgetTree::new();
        let root = tree.insert_root(column());
        assert_eq!(tree.roots().len(), 1);

        let child = tree.insert(root, button("Hello"));
        let root_node = tree.get(root).expect("root exists");
        assert_eq!(root_node.children.len(), 1);
        assert_eq!(root_node.children[0], child);

        let child_node = tree.get(child).expect("child exists");
        assert_eq!(child_node.parent, Some(root));
    }

    #[test]
    fn remove_subtree() {
        let mut tree = WidgetTree::new();
        let root = tree.insert_root(column());
        let child = tree.insert(root, column());
        let grandchild = tree.insert(child, button("B"));

        tree.remove(child);

        assert!(tree.get(child).is_none());
        assert!(tree.get(grandchild).is_none());
        let root_node = tree.get(root).expect("root exists");
        assert!(root_node.children.is_empty());
    }

    #[test]
    fn dirty_propagation() {
        let mut tree = WidgetTree::new();
        let root = tree.insert_root(column());
        let child = tree.insert(root, button("X"));

        tree.layout();
        assert!(!tree.get(root).expect("root").dirty);
        assert!(!tree.get(child).expect("child").dirty);

        tree.mark_dirty(child);
        assert!(tree.get(child).expect("child").dirty);
        assert!(tree.get(root).expect("root").dirty);
    }

    #[test]
    fn add_child_moves_between_parents() {
        let mut tree = WidgetTree::new();
        let a = tree.insert_root(column());
        let b = tree.insert_root(column());
        let item = tree.create(button("moving"));
        assert!(tree.get(item).expect("item").parent.is_none());

        let stale = tree.add_child(a, item);
        let _ = tree.add_child(b, item);
        assert!(tree.children(a).is_empty());
        assert_eq!(tree.children(b), &[item]);

        // The capability from the first parent no longer applies.
        stale.remove(&mut tree);
        assert!(tree.contains(item));
    }

    #[test]
    fn remove_capability_destroys_child() {
        let mut tree = WidgetTree::new();
        let root = tree.insert_root(column());
        let item = tree.create(button("x"));
        let detach = tree.add_child(root, item);
        assert_eq!(detach.child(), item);

        detach.remove(&mut tree);
        assert!(!tree.contains(item));
        assert!(tree.children(root).is_empty());
        assert!(tree.get(root).expect("root").dirty);
    }

    #[test]
    fn add_child_rejects_cycles() {
        let mut tree = WidgetTree::new();
        let root = tree.insert_root(column());
        let child = tree.insert(root, column());
        let _ = tree.add_child(child, root);
        assert_eq!(tree.parent(child), Some(root));
        assert_eq!(tree.parent(root), None);
    }

    #[test]
    fn layout_arranges_column() {
        let mut tree = WidgetTree::new();
        let root = tree.insert_root(column());
        tree.set_location(root, rect(10.0, 20.0, 200.0, 100.0));
        let a = tree.insert(root, button("ab"));
        let b = tree.insert(root, button("abcd"));
        tree.set_layout_data(b, LayoutData::Row { stretch: true });

        tree.layout();

        let ra = tree.get(a).expect("a").rect;
        let rb = tree.get(b).expect("b").rect;
        assert!((ra.y - 20.0).abs() < 0.01);
        assert!((ra.width - 12.0).abs() < 0.01);
        assert!((rb.y - 30.0).abs() < 0.01);
        assert!((rb.width - 200.0).abs() < 0.01);
    }

    #[test]
    fn min_size_raises_preferred_size() {
        let mut tree = WidgetTree::new();
        let b = tree.insert_root(button("a"));
        tree.set_min_size(
            b,
            Size {
                width: 50.0,
                height: 3.0,
            },
        );
        let pref = tree.preferred_size(b);
        assert!((pref.width - 50.0).abs() < 0.01);
        assert!((pref.height - 10.0).abs() < 0.01);
    }

    #[test]
    fn disabled_inherits_only_through_propagating_parents() {
        let mut tree = WidgetTree::new();
        let plain = tree.insert_root(column());
        let in_plain = tree.insert(plain, button("a"));

        let auto = tree.insert_root(Widget::Container(
            Container::new(Layout::default()).with_auto_disable_children(true),
        ));
        let in_auto = tree.insert(auto, button("b"));

        tree.set_disabled(plain, true);
        tree.set_disabled(auto, true);

        assert!(!tree.is_disabled(in_plain));
        assert!(tree.is_disabled(in_auto));
        assert_eq!(tree.focusable_widgets(), vec![in_plain]);
    }

    #[test]
    fn hit_test_picks_topmost() {
        let mut tree = WidgetTree::new();
        let root = tree.insert_root(column());
        tree.set_location(root, rect(0.0, 0.0, 100.0, 100.0));
        let a = tree.insert(root, button("aaaa"));
        tree.layout();

        assert_eq!(tree.hit_test(5.0, 5.0), Some(a));
        assert_eq!(tree.hit_test(50.0, 50.0), Some(root));
        assert_eq!(tree.hit_test(500.0, 5.0), None);
    }

    #[test]
    fn draw_list_output() {
        let mut tree = WidgetTree::new();
        let root = tree.insert_root(Widget::Container(
            Container::new(Layout::default()).with_background([0.2, 0.2, 0.2, 1.0]),
        ));
        tree.set_location(root, rect(0.0, 0.0, 100.0, 100.0));
        tree.insert(root, button("Hi"));
        tree.layout();

        let mut dl = DrawList::new();
        tree.draw(&mut dl);
        // Container background + button background.
        assert_eq!(dl.panels.len(), 2);
        assert_eq!(dl.texts.len(), 1);
        assert_eq!(dl.texts[0].text, "Hi");
        assert!(dl.texts[0].clip.is_none());
    }

    #[test]
    fn disabled_button_draws_disabled_text() {
        let mut tree = WidgetTree::new();
        let b = tree.insert_root(button("off"));
        tree.set_disabled(b, true);
        let mut dl = DrawList::new();
        tree.draw(&mut dl);
        assert_eq!(dl.texts[0].color, [0.5; 4]);
    }

    #[test]
    fn rect_intersection() {
        let a = rect(0.0, 0.0, 10.0, 10.0);
        let b = rect(5.0, 5.0, 10.0, 10.0);
        assert!(a.intersects(&b));
        assert_eq!(a.intersect(&b), rect(5.0, 5.0, 5.0, 5.0));
        let far = rect(20.0, 0.0, 5.0, 5.0);
        assert!(!a.intersects(&far));
        assert_eq!(a.intersect(&far).width, 0.0);
    }
}
