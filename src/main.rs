use std::sync::Arc;

use winit::application::ApplicationHandler;
use winit::event::{ElementState, MouseButton, WindowEvent};
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

use parchment::{loading, ui};
use ui::{DrawList, List, ListOpt, Rect, Theme, UiEvent, UiState, WidgetTree};

const THEME_PATH: &str = "data/theme.ron";
const ENTRIES_PATH: &str = "data/entries.ron";
/// Gap between the window edge and the list.
const MARGIN: f32 = 16.0;

/// Build the entry list and hang it into the tree as a root.
fn build_list(tree: &mut WidgetTree, theme: &Theme, entries: Vec<String>) -> List<String> {
    let mut opts = ListOpt::themed(theme);
    opts.push(ListOpt::Entries(entries));
    opts.push(ListOpt::entry_label(|e: &String| e.clone()));
    opts.push(ListOpt::entry_selected_handler(|_, args| {
        log::info!(
            "selected {:?} (was {:?})",
            args.entry,
            args.previous_entry
        );
    }));
    let list = List::new(opts);
    let root = list.widget(tree);
    tree.add_root(root);
    list
}

fn list_rect(width: f32, height: f32) -> Rect {
    Rect {
        x: MARGIN,
        y: MARGIN,
        width: (width - MARGIN * 2.0).max(0.0),
        height: (height - MARGIN * 2.0).max(0.0),
    }
}

fn log_frame(draw_list: &DrawList) {
    log::debug!(
        "frame: {} panels, {} texts",
        draw_list.panels.len(),
        draw_list.texts.len()
    );
    for cmd in &draw_list.texts {
        log::trace!("  text {:?} at ({}, {})", cmd.text, cmd.x, cmd.y);
    }
}

/// Handle keys the UI did not consume.
fn handle_app_key(tree: &mut WidgetTree, list: &List<String>, key: KeyCode) -> bool {
    match key {
        KeyCode::Delete => {
            if let Some(selected) = list.selected_entry(tree) {
                list.remove_entry(tree, &selected);
                log::info!("removed {selected:?}");
            }
        }
        KeyCode::Insert => {
            let n = list.len(tree);
            list.add_entry(tree, format!("Entry {}", n + 1));
        }
        KeyCode::Home => list.set_scroll_top(tree, 0.0),
        KeyCode::End => list.set_scroll_top(tree, 1.0),
        _ => return false,
    }
    true
}

struct App {
    window: Option<Arc<Window>>,
    cursor_pos: winit::dpi::PhysicalPosition<f64>,
    ui_state: UiState,
    ui_tree: WidgetTree,
    list: List<String>,
}

impl App {
    fn drain_ui_events(&mut self) {
        for event in self.ui_state.drain_events() {
            match event {
                UiEvent::Hover(_) => log::trace!("{event:?}"),
                _ => log::debug!("{event:?}"),
            }
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attrs = Window::default_attributes()
            .with_title("Parchment")
            .with_inner_size(winit::dpi::LogicalSize::new(480.0, 360.0));

        let window = Arc::new(event_loop.create_window(attrs).expect("create window"));
        let size = window.inner_size();
        self.list.set_location(
            &mut self.ui_tree,
            list_rect(size.width as f32, size.height as f32),
        );
        window.request_redraw();
        self.window = Some(window);
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::Resized(new_size) => {
                self.list.set_location(
                    &mut self.ui_tree,
                    list_rect(new_size.width as f32, new_size.height as f32),
                );
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor_pos = position;
                self.ui_state.handle_cursor_moved(
                    &mut self.ui_tree,
                    position.x as f32,
                    position.y as f32,
                );
            }
            WindowEvent::MouseWheel { delta, .. } => {
                let dy = match delta {
                    winit::event::MouseScrollDelta::LineDelta(_, y) => y,
                    winit::event::MouseScrollDelta::PixelDelta(pos) => pos.y as f32 / 20.0,
                };
                self.ui_state.handle_scroll(&mut self.ui_tree, dy);
            }
            WindowEvent::MouseInput {
                state: btn_state,
                button,
                ..
            } => {
                let ui_btn = match button {
                    MouseButton::Left => ui::MouseButton::Left,
                    MouseButton::Right => ui::MouseButton::Right,
                    MouseButton::Middle => ui::MouseButton::Middle,
                    _ => ui::MouseButton::Left,
                };
                self.ui_state.handle_mouse_input(
                    &mut self.ui_tree,
                    ui_btn,
                    btn_state == ElementState::Pressed,
                    self.cursor_pos.x as f32,
                    self.cursor_pos.y as f32,
                );
            }
            WindowEvent::KeyboardInput { event, .. } => {
                let PhysicalKey::Code(kc) = event.physical_key else {
                    return;
                };
                let pressed = event.state == ElementState::Pressed;
                // Route keyboard to UI first.
                if self.ui_state.handle_key_input(&mut self.ui_tree, kc, pressed) || !pressed {
                    return;
                }
                if kc == KeyCode::Escape {
                    event_loop.exit();
                } else {
                    handle_app_key(&mut self.ui_tree, &self.list, kc);
                }
            }
            WindowEvent::RedrawRequested => {
                let mut draw_list = DrawList::new();
                self.list.render(&mut self.ui_tree, &mut draw_list);
                log_frame(&draw_list);
            }
            _ => return,
        }
        self.drain_ui_events();
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

/// Scripted run without a window: scroll, click an entry, render.
fn run_headless(mut tree: WidgetTree, list: List<String>) {
    list.set_location(&mut tree, list_rect(480.0, 360.0));
    let mut draw_list = DrawList::new();
    list.render(&mut tree, &mut draw_list);
    log_frame(&draw_list);

    let mut state = UiState::new();
    let Some(scroll) = list.scroll_container(&mut tree) else {
        return;
    };
    let Some(viewport) = tree.scroll_viewport(scroll) else {
        return;
    };
    let (x, y) = (viewport.x + 4.0, viewport.y + 4.0);
    state.handle_cursor_moved(&mut tree, x, y);
    state.handle_scroll(&mut tree, -3.0);
    log::info!("scroll_top after wheel: {:.3}", list.scroll_top(&mut tree));

    draw_list.clear();
    list.render(&mut tree, &mut draw_list);
    state.handle_mouse_input(&mut tree, ui::MouseButton::Left, true, x, y);
    state.handle_mouse_input(&mut tree, ui::MouseButton::Left, false, x, y);
    for event in state.drain_events() {
        log::debug!("{event:?}");
    }

    draw_list.clear();
    list.render(&mut tree, &mut draw_list);
    log_frame(&draw_list);
    println!(
        "{} entries, selected {:?}",
        list.len(&mut tree),
        list.selected_entry(&mut tree)
    );
}

fn main() {
    env_logger::init();

    let theme = loading::load_theme(THEME_PATH);
    let entries = loading::load_entries(ENTRIES_PATH);

    let mut ui_tree = WidgetTree::new();
    let list = build_list(&mut ui_tree, &theme, entries);

    if std::env::args().any(|a| a == "--headless") {
        run_headless(ui_tree, list);
        return;
    }

    let event_loop = EventLoop::new().expect("create event loop");
    let mut app = App {
        window: None,
        cursor_pos: winit::dpi::PhysicalPosition::new(0.0, 0.0),
        ui_state: UiState::new(),
        ui_tree,
        list,
    };
    event_loop.run_app(&mut app).expect("run event loop");
}
