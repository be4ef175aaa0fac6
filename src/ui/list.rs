use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use super::button::{Button, ButtonImage, ButtonTextColor};
use super::draw::{DrawList, Font};
use super::event::{Event, Handler};
use super::layout::{Direction, GridLayout, Layout, LayoutData, RowLayout};
use super::once::MultiOnce;
use super::scroll::{ScrollContainer, ScrollContainerOpt};
use super::slider::{Slider, SliderOpt};
use super::theme::Theme;
use super::widget::{Container, ContainerOpt};
use super::{Edges, Rect, RemoveChild, Size, WidgetId, WidgetTree};

/// Slider resolution. Scroll offsets in [0, 1] map onto 0..=SCROLL_RANGE.
const SCROLL_RANGE: i32 = 1000;

pub type LabelFn<E> = Rc<dyn Fn(&E) -> String>;
pub type EqualsFn<E> = Rc<dyn Fn(&E, &E) -> bool>;

/// Text and background colours of list entries.
#[derive(Debug, Clone, PartialEq)]
pub struct ListEntryColor {
    pub unselected: [f32; 4],
    pub selected: [f32; 4],
    pub disabled_unselected: [f32; 4],
    pub disabled_selected: [f32; 4],
    pub selected_background: [f32; 4],
    pub disabled_selected_background: [f32; 4],
}

impl ListEntryColor {
    /// Unselected entries have no background of their own.
    pub fn unselected_style(&self) -> EntryStyle {
        EntryStyle {
            image: Rc::new(ButtonImage {
                disabled: Some([0.0; 4]),
                ..ButtonImage::transparent()
            }),
            text_color: Rc::new(ButtonTextColor {
                idle: self.unselected,
                disabled: Some(self.disabled_unselected),
            }),
        }
    }

    pub fn selected_style(&self) -> EntryStyle {
        EntryStyle {
            image: Rc::new(ButtonImage {
                disabled: Some(self.disabled_selected_background),
                ..ButtonImage::solid(self.selected_background)
            }),
            text_color: Rc::new(ButtonTextColor {
                idle: self.selected,
                disabled: Some(self.disabled_selected),
            }),
        }
    }
}

/// Button image and text colour shared by every entry in one state.
#[derive(Debug, Clone)]
pub struct EntryStyle {
    pub image: Rc<ButtonImage>,
    pub text_color: Rc<ButtonTextColor>,
}

/// Fired after the selection changed (or was re-picked, with reselect on).
#[derive(Debug, Clone)]
pub struct ListEntrySelected<E> {
    pub list: List<E>,
    pub entry: E,
    pub previous_entry: Option<E>,
}

/// Declarative List construction options.
pub enum ListOpt<E> {
    Entries(Vec<E>),
    /// Required. Turns an entry into its button label.
    EntryLabel(LabelFn<E>),
    /// Entry identity. Defaults to `PartialEq`.
    EntryEquals(EqualsFn<E>),
    EntryFont(Font),
    EntryColor(ListEntryColor),
    EntryTextPadding(Edges),
    /// Gap between the scroll area and the sliders.
    ControlWidgetSpacing(f32),
    HideHorizontalSlider,
    HideVerticalSlider,
    /// Clicking the selected entry fires the selection event again.
    AllowReselect,
    EntrySelectedHandler(Handler<ListEntrySelected<E>>),
    ContainerOpts(Vec<ContainerOpt>),
    ScrollContainerOpts(Vec<ScrollContainerOpt>),
    /// Applied to both sliders.
    SliderOpts(Vec<SliderOpt>),
}

impl<E> ListOpt<E> {
    pub fn entry_label(f: impl Fn(&E) -> String + 'static) -> Self {
        ListOpt::EntryLabel(Rc::new(f))
    }

    pub fn entry_equals(f: impl Fn(&E, &E) -> bool + 'static) -> Self {
        ListOpt::EntryEquals(Rc::new(f))
    }

    pub fn entry_selected_handler(
        f: impl Fn(&mut WidgetTree, &ListEntrySelected<E>) + 'static,
    ) -> Self {
        ListOpt::EntrySelectedHandler(Rc::new(f))
    }

    /// Styling options derived from a theme.
    pub fn themed(theme: &Theme) -> Vec<Self> {
        vec![
            ListOpt::EntryFont(theme.entry_font()),
            ListOpt::EntryColor(theme.list_entry_color()),
            ListOpt::EntryTextPadding(theme.entry_text_padding()),
            ListOpt::ControlWidgetSpacing(theme.control_spacing),
            ListOpt::ScrollContainerOpts(vec![
                ScrollContainerOpt::Image(theme.scroll_container_image()),
                ScrollContainerOpt::Padding(Edges::all(theme.scroll_padding)),
            ]),
            ListOpt::SliderOpts(vec![
                SliderOpt::Image(theme.slider_image()),
                SliderOpt::Thickness(theme.slider_thickness),
                SliderOpt::MinHandleSize(theme.slider_min_handle),
            ]),
        ]
    }
}

/// One entry and the button showing it.
struct Row<E> {
    entry: E,
    button: WidgetId,
    detach: RemoveChild,
}

#[derive(Debug, Clone, Copy)]
struct ListWidgets {
    root: WidgetId,
    content: WidgetId,
    scroll: WidgetId,
    vertical_slider: Option<WidgetId>,
    horizontal_slider: Option<WidgetId>,
}

struct ListState<E> {
    /// Entries given at construction, turned into rows when the widget is
    /// built.
    pending: Vec<E>,
    rows: Vec<Row<E>>,
    selected_entry: Option<E>,
    label: Option<LabelFn<E>>,
    equals: EqualsFn<E>,
    font: Font,
    text_padding: Edges,
    control_spacing: f32,
    hide_horizontal_slider: bool,
    hide_vertical_slider: bool,
    allow_reselect: bool,
    unselected_style: EntryStyle,
    selected_style: EntryStyle,
    container_opts: Vec<ContainerOpt>,
    scroll_container_opts: Vec<ScrollContainerOpt>,
    slider_opts: Vec<SliderOpt>,
    widgets: Option<ListWidgets>,
}

impl<E> ListState<E> {
    fn label(&self, entry: &E) -> String {
        match &self.label {
            Some(label) => label(entry),
            None => panic!("List requires an entry label function (ListOpt::EntryLabel)"),
        }
    }
}

struct ListShared<E> {
    init: MultiOnce<List<E>>,
    state: RefCell<ListState<E>>,
    entry_selected: RefCell<Event<ListEntrySelected<E>>>,
}

/// Scrollable, selectable list of entries.
///
/// A cheap handle: clones refer to the same list. The widgets it builds live
/// in the [`WidgetTree`] passed to each operation; every operation builds
/// them on first use. Entry buttons only hold a weak reference back, so once
/// every handle is dropped their clicks do nothing.
///
/// Entries are identified by value. With duplicate entries, lookups by value
/// act on the first equal row.
pub struct List<E> {
    shared: Rc<ListShared<E>>,
}

impl<E> Clone for List<E> {
    fn clone(&self) -> Self {
        Self {
            shared: Rc::clone(&self.shared),
        }
    }
}

impl<E> fmt::Debug for List<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut d = f.debug_struct("List");
        d.field("init", &self.shared.init.state());
        if let Ok(state) = self.shared.state.try_borrow() {
            d.field("rows", &state.rows.len());
            d.field("widgets", &state.widgets);
        }
        d.finish()
    }
}

impl<E: Clone + PartialEq + 'static> List<E> {
    pub fn new(opts: impl IntoIterator<Item = ListOpt<E>>) -> Self {
        let colors = Theme::default().list_entry_color();
        let mut state = ListState {
            pending: Vec::new(),
            rows: Vec::new(),
            selected_entry: None,
            label: None,
            equals: Rc::new(|a: &E, b: &E| a == b),
            font: Font::default(),
            text_padding: Edges::ZERO,
            control_spacing: 0.0,
            hide_horizontal_slider: false,
            hide_vertical_slider: false,
            allow_reselect: false,
            unselected_style: colors.unselected_style(),
            selected_style: colors.selected_style(),
            container_opts: Vec::new(),
            scroll_container_opts: Vec::new(),
            slider_opts: Vec::new(),
            widgets: None,
        };
        let mut entry_selected = Event::new();

        for opt in opts {
            match opt {
                ListOpt::Entries(entries) => state.pending = entries,
                ListOpt::EntryLabel(f) => state.label = Some(f),
                ListOpt::EntryEquals(f) => state.equals = f,
                ListOpt::EntryFont(font) => state.font = font,
                ListOpt::EntryColor(colors) => {
                    state.unselected_style = colors.unselected_style();
                    state.selected_style = colors.selected_style();
                }
                ListOpt::EntryTextPadding(padding) => state.text_padding = padding,
                ListOpt::ControlWidgetSpacing(s) => state.control_spacing = s,
                ListOpt::HideHorizontalSlider => state.hide_horizontal_slider = true,
                ListOpt::HideVerticalSlider => state.hide_vertical_slider = true,
                ListOpt::AllowReselect => state.allow_reselect = true,
                ListOpt::EntrySelectedHandler(handler) => entry_selected.add_shared(handler),
                ListOpt::ContainerOpts(opts) => state.container_opts.extend(opts),
                ListOpt::ScrollContainerOpts(opts) => state.scroll_container_opts.extend(opts),
                ListOpt::SliderOpts(opts) => state.slider_opts.extend(opts),
            }
        }

        let list = List {
            shared: Rc::new(ListShared {
                init: MultiOnce::new(),
                state: RefCell::new(state),
                entry_selected: RefCell::new(entry_selected),
            }),
        };
        list.shared.init.append(Self::create_widget);
        list
    }

    fn ensure_init(&self, tree: &mut WidgetTree) {
        self.shared.init.run(self, tree);
    }

    fn widgets(&self) -> Option<ListWidgets> {
        self.shared.state.borrow().widgets
    }

    fn create_widget(&self, tree: &mut WidgetTree) {
        let mut guard = self.shared.state.borrow_mut();
        let state = &mut *guard;
        if state.label.is_none() {
            panic!("List requires an entry label function (ListOpt::EntryLabel)");
        }

        let columns = if state.hide_vertical_slider { 1 } else { 2 };
        let spacing = state.control_spacing;
        let root = tree.create(
            Container::new(Layout::Grid(GridLayout {
                columns,
                column_stretch: vec![true, false],
                row_stretch: vec![true, false],
                spacing: (spacing, spacing),
                padding: Edges::ZERO,
            }))
            .into(),
        );
        tree.apply_container_opts(root, &std::mem::take(&mut state.container_opts));

        let content = tree.create(
            Container::new(Layout::Row(RowLayout {
                direction: Direction::Vertical,
                ..RowLayout::default()
            }))
            .with_auto_disable_children(true)
            .into(),
        );

        let scroll = tree.create(
            ScrollContainer::new()
                .with_opts(std::mem::take(&mut state.scroll_container_opts))
                .with_opts([ScrollContainerOpt::StretchContentWidth(true)])
                .into(),
        );
        let _ = tree.add_child(scroll, content);
        let _ = tree.add_child(root, scroll);

        let slider_opts = std::mem::take(&mut state.slider_opts);

        let vertical_slider = if state.hide_vertical_slider {
            None
        } else {
            let slider = Slider::new(Direction::Vertical, 0, SCROLL_RANGE)
                .with_opts(slider_opts.clone())
                .with_page_size(move |tree| vertical_page_size(tree, scroll))
                .on_change(move |tree, args| {
                    tree.set_scroll_top(scroll, args.current as f32 / SCROLL_RANGE as f32);
                });
            let id = tree.create(slider.into());
            let _ = tree.add_child(root, id);
            if let Some(container) = tree.scroll_container_mut(scroll) {
                container
                    .scrolled
                    .add_handler(move |tree, args| scroll_by_wheel(tree, id, args.y));
            }
            Some(id)
        };

        let horizontal_slider = if state.hide_horizontal_slider {
            None
        } else {
            let slider = Slider::new(Direction::Horizontal, 0, SCROLL_RANGE)
                .with_opts(slider_opts)
                .with_page_size(move |tree| horizontal_page_size(tree, scroll))
                .on_change(move |tree, args| {
                    tree.set_scroll_left(scroll, args.current as f32 / SCROLL_RANGE as f32);
                });
            let id = tree.create(slider.into());
            let _ = tree.add_child(root, id);
            Some(id)
        };

        state.widgets = Some(ListWidgets {
            root,
            content,
            scroll,
            vertical_slider,
            horizontal_slider,
        });

        for entry in std::mem::take(&mut state.pending) {
            let row = self.new_row(state, tree, content, entry);
            state.rows.push(row);
        }
        log::debug!("list built with {} entries", state.rows.len());
    }

    fn new_row(
        &self,
        state: &ListState<E>,
        tree: &mut WidgetTree,
        content: WidgetId,
        entry: E,
    ) -> Row<E> {
        let weak = Rc::downgrade(&self.shared);
        let button = Button::new(
            state.label(&entry),
            state.font,
            Rc::clone(&state.unselected_style.image),
            Rc::clone(&state.unselected_style.text_color),
        )
        .with_text_padding(state.text_padding)
        .on_click(move |tree, args| {
            if let Some(shared) = weak.upgrade() {
                List { shared }.entry_clicked(tree, args.button);
            }
        });

        let button = tree.create(button.into());
        tree.set_layout_data(button, LayoutData::Row { stretch: true });
        let detach = tree.add_child(content, button);
        Row {
            entry,
            button,
            detach,
        }
    }

    /// Resolve the clicked button to its current row.
    fn entry_clicked(&self, tree: &mut WidgetTree, button: WidgetId) {
        let entry = self
            .shared
            .state
            .borrow()
            .rows
            .iter()
            .find(|row| row.button == button)
            .map(|row| row.entry.clone());
        match entry {
            Some(entry) => self.set_selected(tree, entry, true),
            None => log::debug!("click from {button:?}, which no longer shows an entry"),
        }
    }

    // ------------------------------------------------------------------
    // Widget surface
    // ------------------------------------------------------------------

    /// Root container of the list. Detached until the caller adds it to the
    /// tree (as a root or as someone's child).
    pub fn widget(&self, tree: &mut WidgetTree) -> WidgetId {
        self.ensure_init(tree);
        match self.widgets() {
            Some(w) => w.root,
            None => panic!("List widget requested while it is being built"),
        }
    }

    pub fn scroll_container(&self, tree: &mut WidgetTree) -> Option<WidgetId> {
        self.ensure_init(tree);
        self.widgets().map(|w| w.scroll)
    }

    pub fn vertical_slider(&self, tree: &mut WidgetTree) -> Option<WidgetId> {
        self.ensure_init(tree);
        self.widgets().and_then(|w| w.vertical_slider)
    }

    pub fn horizontal_slider(&self, tree: &mut WidgetTree) -> Option<WidgetId> {
        self.ensure_init(tree);
        self.widgets().and_then(|w| w.horizontal_slider)
    }

    pub fn preferred_size(&self, tree: &mut WidgetTree) -> Size {
        self.ensure_init(tree);
        self.widgets()
            .map(|w| tree.preferred_size(w.root))
            .unwrap_or_default()
    }

    pub fn set_location(&self, tree: &mut WidgetTree, rect: Rect) {
        self.ensure_init(tree);
        if let Some(w) = self.widgets() {
            tree.set_location(w.root, rect);
        }
    }

    pub fn request_relayout(&self, tree: &mut WidgetTree) {
        self.ensure_init(tree);
        if let Some(w) = self.widgets() {
            tree.request_relayout(w.root);
        }
    }

    pub fn set_disabled(&self, tree: &mut WidgetTree, disabled: bool) {
        self.ensure_init(tree);
        if let Some(w) = self.widgets() {
            tree.set_disabled(w.root, disabled);
        }
    }

    /// Sync disabled state down to the scroll area and slider tracks, lay
    /// out if needed, then draw.
    pub fn render(&self, tree: &mut WidgetTree, draw_list: &mut DrawList) {
        self.ensure_init(tree);
        let Some(w) = self.widgets() else {
            return;
        };
        let disabled = tree.get(w.root).is_some_and(|n| n.disabled);
        for id in [w.vertical_slider, w.horizontal_slider].into_iter().flatten() {
            if let Some(slider) = tree.slider_mut(id) {
                slider.draw_track_disabled = disabled;
            }
        }
        tree.set_disabled(w.scroll, disabled);

        tree.layout_widget(w.root);
        tree.draw_widget(w.root, draw_list);
    }

    // ------------------------------------------------------------------
    // Entries
    // ------------------------------------------------------------------

    pub fn entries(&self, tree: &mut WidgetTree) -> Vec<E> {
        self.ensure_init(tree);
        let state = self.shared.state.borrow();
        state.rows.iter().map(|row| row.entry.clone()).collect()
    }

    /// Entry buttons, index-aligned with `entries`.
    pub fn buttons(&self, tree: &mut WidgetTree) -> Vec<WidgetId> {
        self.ensure_init(tree);
        let state = self.shared.state.borrow();
        state.rows.iter().map(|row| row.button).collect()
    }

    pub fn len(&self, tree: &mut WidgetTree) -> usize {
        self.ensure_init(tree);
        self.shared.state.borrow().rows.len()
    }

    pub fn is_empty(&self, tree: &mut WidgetTree) -> bool {
        self.len(tree) == 0
    }

    pub fn add_entry(&self, tree: &mut WidgetTree, entry: E) {
        self.ensure_init(tree);
        let Some(w) = self.widgets() else {
            return;
        };
        let mut guard = self.shared.state.borrow_mut();
        let state = &mut *guard;
        let row = self.new_row(state, tree, w.content, entry);
        state.rows.push(row);
    }

    /// Remove the first entry equal to `entry`, along with its button. The
    /// selection is left as it is, even when it was this entry.
    pub fn remove_entry(&self, tree: &mut WidgetTree, entry: &E) {
        self.ensure_init(tree);
        let removed = {
            let mut state = self.shared.state.borrow_mut();
            let equals = Rc::clone(&state.equals);
            let index = state.rows.iter().position(|row| equals(&row.entry, entry));
            index.map(|i| state.rows.remove(i))
        };
        if let Some(row) = removed {
            row.detach.remove(tree);
        }
    }

    /// Remove the entry at `index` by value: with duplicates, the first equal
    /// entry goes, which may sit before `index`.
    ///
    /// Panics if `index` is out of bounds.
    pub fn remove_entry_at(&self, tree: &mut WidgetTree, index: usize) {
        self.ensure_init(tree);
        let entry = self.shared.state.borrow().rows[index].entry.clone();
        self.remove_entry(tree, &entry);
    }

    /// Overwrite the entry at `index` and relabel its button. The selection
    /// follows the entry; the button keeps its current style.
    ///
    /// Panics if `index` is out of bounds.
    pub fn replace_entry_at(&self, tree: &mut WidgetTree, index: usize, entry: E) {
        self.ensure_init(tree);
        let (button, label) = {
            let mut guard = self.shared.state.borrow_mut();
            let state = &mut *guard;
            let row = &mut state.rows[index];
            if state
                .selected_entry
                .as_ref()
                .is_some_and(|s| (state.equals)(s, &row.entry))
            {
                state.selected_entry = Some(entry.clone());
            }
            let label = match &state.label {
                Some(label) => label(&entry),
                None => String::new(),
            };
            row.entry = entry;
            (row.button, label)
        };
        tree.set_button_label(button, label);
    }

    /// Replace every entry equal to `current` with `entry`.
    pub fn replace_entry(&self, tree: &mut WidgetTree, current: &E, entry: E) {
        self.ensure_init(tree);
        let relabel: Vec<(WidgetId, String)> = {
            let mut guard = self.shared.state.borrow_mut();
            let state = &mut *guard;
            let equals = Rc::clone(&state.equals);
            let mut relabel = Vec::new();
            for row in state.rows.iter_mut() {
                if equals(&row.entry, current) {
                    row.entry = entry.clone();
                    relabel.push(row.button);
                }
            }
            if state
                .selected_entry
                .as_ref()
                .is_some_and(|s| equals(s, current))
            {
                state.selected_entry = Some(entry.clone());
            }
            let label = if relabel.is_empty() {
                String::new()
            } else {
                state.label(&entry)
            };
            relabel.into_iter().map(|b| (b, label.clone())).collect()
        };
        for (button, label) in relabel {
            tree.set_button_label(button, label);
        }
    }

    /// Make the list show `entries`, reusing existing buttons: surplus rows
    /// are dropped from the front, the remaining rows are overwritten in
    /// place, and missing rows are appended.
    pub fn update_entries(&self, tree: &mut WidgetTree, entries: &[E]) {
        self.ensure_init(tree);
        while self.len(tree) > entries.len() {
            self.remove_entry_at(tree, 0);
        }
        let kept = self.len(tree);
        for (i, entry) in entries.iter().take(kept).enumerate() {
            self.replace_entry_at(tree, i, entry.clone());
        }
        for entry in &entries[kept..] {
            self.add_entry(tree, entry.clone());
        }
    }

    // ------------------------------------------------------------------
    // Selection
    // ------------------------------------------------------------------

    pub fn selected_entry(&self, tree: &mut WidgetTree) -> Option<E> {
        self.ensure_init(tree);
        self.shared.state.borrow().selected_entry.clone()
    }

    /// Select `entry` programmatically. Never fires for the entry that is
    /// already selected.
    pub fn set_selected_entry(&self, tree: &mut WidgetTree, entry: E) {
        self.set_selected(tree, entry, false);
    }

    pub fn add_entry_selected_handler(
        &self,
        handler: impl Fn(&mut WidgetTree, &ListEntrySelected<E>) + 'static,
    ) {
        self.shared.entry_selected.borrow_mut().add_handler(handler);
    }

    fn set_selected(&self, tree: &mut WidgetTree, entry: E, user: bool) {
        self.ensure_init(tree);
        let previous_entry = {
            let mut guard = self.shared.state.borrow_mut();
            let state = &mut *guard;
            let equals = Rc::clone(&state.equals);
            let same = state
                .selected_entry
                .as_ref()
                .is_some_and(|s| equals(s, &entry));
            if same && !(user && state.allow_reselect) {
                return;
            }
            let previous = state.selected_entry.replace(entry.clone());
            for row in &state.rows {
                let style = if equals(&row.entry, &entry) {
                    &state.selected_style
                } else {
                    &state.unselected_style
                };
                tree.set_button_style(row.button, &style.image, &style.text_color);
            }
            previous
        };

        let dispatch = self.shared.entry_selected.borrow().dispatcher();
        dispatch.fire(
            tree,
            &ListEntrySelected {
                list: self.clone(),
                entry,
                previous_entry,
            },
        );
    }

    // ------------------------------------------------------------------
    // Scrolling
    // ------------------------------------------------------------------

    pub fn scroll_top(&self, tree: &mut WidgetTree) -> f32 {
        self.ensure_init(tree);
        self.widgets().map_or(0.0, |w| tree.scroll_top(w.scroll))
    }

    pub fn scroll_left(&self, tree: &mut WidgetTree) -> f32 {
        self.ensure_init(tree);
        self.widgets().map_or(0.0, |w| tree.scroll_left(w.scroll))
    }

    /// Scroll vertically, moving the vertical slider along.
    pub fn set_scroll_top(&self, tree: &mut WidgetTree, top: f32) {
        self.ensure_init(tree);
        let Some(w) = self.widgets() else {
            return;
        };
        if let Some(slider) = w.vertical_slider {
            tree.set_slider_current(slider, (top * SCROLL_RANGE as f32).round() as i32);
        }
        tree.set_scroll_top(w.scroll, top);
    }

    /// Scroll horizontally, moving the horizontal slider along.
    pub fn set_scroll_left(&self, tree: &mut WidgetTree, left: f32) {
        self.ensure_init(tree);
        let Some(w) = self.widgets() else {
            return;
        };
        if let Some(slider) = w.horizontal_slider {
            tree.set_slider_current(slider, (left * SCROLL_RANGE as f32).round() as i32);
        }
        tree.set_scroll_left(w.scroll, left);
    }
}

/// Visible share of the content on the slider scale. Empty content counts
/// as fully visible.
pub fn page_size(visible: f32, content: f32) -> i32 {
    if content <= 0.0 {
        return SCROLL_RANGE;
    }
    (visible / content * SCROLL_RANGE as f32).round() as i32
}

/// Slider units per wheel notch.
pub fn wheel_step(page_size: i32) -> i32 {
    (page_size / 3).max(1)
}

fn vertical_page_size(tree: &WidgetTree, scroll: WidgetId) -> i32 {
    match (tree.scroll_viewport(scroll), tree.scroll_content_rect(scroll)) {
        (Some(viewport), Some(content)) => page_size(viewport.height, content.height),
        _ => SCROLL_RANGE,
    }
}

fn horizontal_page_size(tree: &WidgetTree, scroll: WidgetId) -> i32 {
    match (tree.scroll_viewport(scroll), tree.scroll_content_rect(scroll)) {
        (Some(viewport), Some(content)) => page_size(viewport.width, content.width),
        _ => SCROLL_RANGE,
    }
}

/// Positive `y` (wheel away from the user) moves towards the top.
fn scroll_by_wheel(tree: &mut WidgetTree, slider: WidgetId, y: f32) {
    let step = wheel_step(tree.slider_page_size(slider));
    let current = tree.slider_current(slider).unwrap_or(0);
    tree.set_slider_current(slider, current - (y * step as f32).round() as i32);
}
