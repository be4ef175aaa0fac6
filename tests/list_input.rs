//! Mouse and keyboard input routed through `UiState` into a List.

use std::cell::RefCell;
use std::rc::Rc;

use winit::keyboard::KeyCode;

use parchment::ui::{List, ListEntrySelected, ListOpt, MouseButton, Rect, Theme, UiState, WidgetTree};

type Selections = Rc<RefCell<Vec<(String, Option<String>)>>>;

/// Themed 50-entry list at (0, 0) 200x100, rendered once.
fn setup() -> (WidgetTree, List<String>, Selections) {
    let mut tree = WidgetTree::new();
    let seen: Selections = Rc::new(RefCell::new(Vec::new()));
    let s = Rc::clone(&seen);

    let mut opts = ListOpt::themed(&Theme::default());
    opts.push(ListOpt::Entries((0..50).map(|i| format!("entry {i}")).collect()));
    opts.push(ListOpt::entry_label(|e: &String| e.clone()));
    opts.push(ListOpt::entry_selected_handler(move |_, args: &ListEntrySelected<String>| {
        s.borrow_mut()
            .push((args.entry.clone(), args.previous_entry.clone()));
    }));
    let list = List::new(opts);
    let root = list.widget(&mut tree);
    tree.add_root(root);
    list.set_location(
        &mut tree,
        Rect {
            x: 0.0,
            y: 0.0,
            width: 200.0,
            height: 100.0,
        },
    );
    render(&mut tree, &list);
    (tree, list, seen)
}

fn render(tree: &mut WidgetTree, list: &List<String>) {
    let mut dl = parchment::ui::DrawList::new();
    list.render(tree, &mut dl);
}

fn click(state: &mut UiState, tree: &mut WidgetTree, x: f32, y: f32) {
    state.handle_cursor_moved(tree, x, y);
    state.handle_mouse_input(tree, MouseButton::Left, true, x, y);
    state.handle_mouse_input(tree, MouseButton::Left, false, x, y);
}

fn center(tree: &WidgetTree, id: parchment::ui::WidgetId) -> (f32, f32) {
    let r = tree.get(id).expect("widget").rect;
    (r.x + r.width / 2.0, r.y + r.height / 2.0)
}

#[test]
fn clicking_entries_selects_them() {
    let (mut tree, list, seen) = setup();
    let mut state = UiState::new();
    let buttons = list.buttons(&mut tree);

    let (x, y) = center(&tree, buttons[1]);
    click(&mut state, &mut tree, x, y);
    let (x, y) = center(&tree, buttons[0]);
    click(&mut state, &mut tree, x, y);
    // Clicking the selected entry again does nothing without reselect.
    click(&mut state, &mut tree, x, y);

    assert_eq!(list.selected_entry(&mut tree), Some("entry 0".to_string()));
    assert_eq!(
        *seen.borrow(),
        vec![
            ("entry 1".to_string(), None),
            ("entry 0".to_string(), Some("entry 1".to_string())),
        ]
    );
}

#[test]
fn wheel_over_list_scrolls_it() {
    let (mut tree, list, _) = setup();
    let mut state = UiState::new();
    let scroll = list.scroll_container(&mut tree).expect("scroll");
    let (x, y) = center(&tree, scroll);

    state.handle_cursor_moved(&mut tree, x, y);
    assert!(state.handle_scroll(&mut tree, -1.0));
    let after_one = list.scroll_top(&mut tree);
    assert!(after_one > 0.0);

    for _ in 0..200 {
        state.handle_scroll(&mut tree, -1.0);
    }
    assert_eq!(list.scroll_top(&mut tree), 1.0);

    state.handle_scroll(&mut tree, 1.0);
    assert!(list.scroll_top(&mut tree) < 1.0);
}

#[test]
fn scrolled_out_entries_are_not_clickable() {
    let (mut tree, list, seen) = setup();
    let mut state = UiState::new();
    let first = list.buttons(&mut tree)[0];
    let (x, y) = center(&tree, first);

    list.set_scroll_top(&mut tree, 1.0);
    render(&mut tree, &list);
    let r = tree.get(first).expect("button").rect;
    assert!(r.bottom() < 0.0);

    // The point the first entry used to occupy now hits a later entry.
    click(&mut state, &mut tree, x, y);
    let selected = list.selected_entry(&mut tree).expect("something selected");
    assert_ne!(selected, "entry 0");
    assert_eq!(seen.borrow().len(), 1);
}

#[test]
fn disabled_list_ignores_input() {
    let (mut tree, list, seen) = setup();
    list.set_disabled(&mut tree, true);
    render(&mut tree, &list);
    let mut state = UiState::new();

    let buttons = list.buttons(&mut tree);
    let (x, y) = center(&tree, buttons[0]);
    click(&mut state, &mut tree, x, y);
    state.handle_scroll(&mut tree, -1.0);

    assert!(seen.borrow().is_empty());
    assert_eq!(list.scroll_top(&mut tree), 0.0);
    // Entries drop out of keyboard focus; the sliders stay usable.
    let focusable = tree.focusable_widgets();
    assert!(buttons.iter().all(|b| !focusable.contains(b)));
}

#[test]
fn keyboard_drives_sliders_and_entries() {
    let (mut tree, list, seen) = setup();
    let mut state = UiState::new();
    let buttons = list.buttons(&mut tree);
    let vertical = list.vertical_slider(&mut tree).expect("vertical slider");

    // Entries come first in tree order.
    state.handle_key_input(&mut tree, KeyCode::Tab, true);
    assert_eq!(state.focused, Some(buttons[0]));
    state.handle_key_input(&mut tree, KeyCode::Enter, true);
    assert_eq!(seen.borrow().len(), 1);

    state.focused = Some(vertical);
    state.handle_key_input(&mut tree, KeyCode::End, true);
    assert_eq!(list.scroll_top(&mut tree), 1.0);
    state.handle_key_input(&mut tree, KeyCode::Home, true);
    assert_eq!(list.scroll_top(&mut tree), 0.0);
}
