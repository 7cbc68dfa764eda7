use std::cell::Cell;
use std::collections::HashMap;
use std::rc::Rc;

use eframe::egui::{self, Event, Modifiers, Pos2, Rect, pos2, vec2};

use orbit_menu::{
    GraphEvent, GraphHost, MenuConfig, MenuController, MenuItem, RuleFns,
    menu::controller::EXIT_SECONDS,
};

struct FakeGraph {
    rects: HashMap<u32, Rect>,
    deselected: Vec<u32>,
}

impl FakeGraph {
    fn new() -> Self {
        let mut rects = HashMap::new();
        rects.insert(1, Rect::from_center_size(pos2(300.0, 300.0), vec2(40.0, 40.0)));
        rects.insert(2, Rect::from_center_size(pos2(520.0, 340.0), vec2(180.0, 120.0)));
        Self {
            rects,
            deselected: Vec::new(),
        }
    }
}

impl GraphHost for FakeGraph {
    type NodeId = u32;

    fn node_screen_rect(&self, node: &u32) -> Option<Rect> {
        self.rects.get(node).copied()
    }

    fn deselect(&mut self, node: &u32) {
        self.deselected.push(*node);
    }
}

fn counted_item(title: &str, count: &Rc<Cell<u32>>) -> MenuItem {
    let count = Rc::clone(count);
    MenuItem::new(title, move || count.set(count.get() + 1))
}

fn run_frame(
    ctx: &egui::Context,
    menu: &mut MenuController<FakeGraph>,
    host: &mut FakeGraph,
    time: f64,
    events: Vec<Event>,
) {
    let input = egui::RawInput {
        screen_rect: Some(Rect::from_min_size(Pos2::ZERO, vec2(800.0, 600.0))),
        time: Some(time),
        events,
        ..Default::default()
    };
    let _ = ctx.run(input, |ctx| {
        menu.show(ctx, host);
    });
}

fn click_events(pos: Pos2, pressed: bool) -> Vec<Event> {
    vec![
        Event::PointerMoved(pos),
        Event::PointerButton {
            pos,
            button: egui::PointerButton::Primary,
            pressed,
            modifiers: Modifiers::default(),
        },
    ]
}

const AFTER_EXIT: f64 = EXIT_SECONDS as f64 + 0.05;

#[test]
fn menu_opens_for_an_allowed_selection_and_survives_frames() {
    let ctx = egui::Context::default();
    let mut host = FakeGraph::new();
    let mut menu: MenuController<FakeGraph> =
        MenuController::register(MenuConfig::new(vec![MenuItem::new("inspect", || {})]));

    menu.on_graph_event(GraphEvent::NodeSelected(1), 0.0, &mut host);
    run_frame(&ctx, &mut menu, &mut host, 0.0, Vec::new());
    run_frame(&ctx, &mut menu, &mut host, 0.3, Vec::new());

    assert!(menu.is_visible());
    assert_eq!(menu.current_target(), Some(&1));
}

#[test]
fn rejected_selection_never_shows_anything() {
    let ctx = egui::Context::default();
    let mut host = FakeGraph::new();
    let config = MenuConfig::new(vec![MenuItem::new("inspect", || {})])
        .with_rules(RuleFns::new(|_| false, |_, _| true));
    let mut menu: MenuController<FakeGraph> = MenuController::register(config);

    menu.on_graph_event(GraphEvent::NodeSelected(1), 0.0, &mut host);
    run_frame(&ctx, &mut menu, &mut host, 0.0, Vec::new());

    assert!(!menu.is_attached());
    assert_eq!(host.deselected, vec![1]);
}

#[test]
fn pan_dismisses_and_the_exit_settles_through_frames() {
    let ctx = egui::Context::default();
    let mut host = FakeGraph::new();
    let mut menu: MenuController<FakeGraph> =
        MenuController::register(MenuConfig::new(vec![MenuItem::new("inspect", || {})]));

    menu.on_graph_event(GraphEvent::NodeSelected(1), 0.0, &mut host);
    run_frame(&ctx, &mut menu, &mut host, 0.0, Vec::new());

    menu.on_graph_event(GraphEvent::Pan, 0.3, &mut host);
    assert!(!menu.is_visible());
    assert!(menu.is_attached());

    run_frame(&ctx, &mut menu, &mut host, 0.31, Vec::new());
    assert!(menu.is_attached());

    run_frame(&ctx, &mut menu, &mut host, 0.3 + AFTER_EXIT, Vec::new());
    assert!(!menu.is_attached());
    assert_eq!(host.deselected, vec![1]);
}

#[test]
fn hide_is_idempotent_across_frames() {
    let ctx = egui::Context::default();
    let mut host = FakeGraph::new();
    let mut menu: MenuController<FakeGraph> =
        MenuController::register(MenuConfig::new(vec![MenuItem::new("inspect", || {})]));

    menu.on_graph_event(GraphEvent::NodeSelected(1), 0.0, &mut host);
    run_frame(&ctx, &mut menu, &mut host, 0.0, Vec::new());
    menu.on_graph_event(GraphEvent::Zoom, 0.2, &mut host);
    menu.on_graph_event(GraphEvent::Drag, 0.21, &mut host);
    menu.on_graph_event(GraphEvent::BackgroundClick, 0.22, &mut host);
    run_frame(&ctx, &mut menu, &mut host, 0.2 + AFTER_EXIT, Vec::new());

    assert!(!menu.is_attached());
    assert_eq!(host.deselected, vec![1]);

    menu.on_graph_event(GraphEvent::Zoom, 1.0, &mut host);
    run_frame(&ctx, &mut menu, &mut host, 1.0 + AFTER_EXIT, Vec::new());
    assert!(!menu.is_attached());
    assert_eq!(host.deselected, vec![1]);
}

#[test]
fn switching_targets_waits_for_the_exit_then_reopens() {
    let ctx = egui::Context::default();
    let mut host = FakeGraph::new();
    let mut menu: MenuController<FakeGraph> =
        MenuController::register(MenuConfig::new(vec![MenuItem::new("inspect", || {})]));

    menu.on_graph_event(GraphEvent::NodeSelected(1), 0.0, &mut host);
    run_frame(&ctx, &mut menu, &mut host, 0.0, Vec::new());

    menu.on_graph_event(GraphEvent::NodeSelected(2), 0.3, &mut host);
    run_frame(&ctx, &mut menu, &mut host, 0.31, Vec::new());
    assert!(!menu.is_visible());
    assert!(menu.is_attached());

    run_frame(&ctx, &mut menu, &mut host, 0.3 + AFTER_EXIT, Vec::new());
    assert!(menu.is_visible());
    assert_eq!(menu.current_target(), Some(&2));
    assert_eq!(host.deselected, vec![1]);
}

#[test]
fn backdrop_click_dismisses_the_menu() {
    let ctx = egui::Context::default();
    let mut host = FakeGraph::new();
    let mut menu: MenuController<FakeGraph> =
        MenuController::register(MenuConfig::new(vec![MenuItem::new("inspect", || {})]));

    menu.on_graph_event(GraphEvent::NodeSelected(1), 0.0, &mut host);
    run_frame(&ctx, &mut menu, &mut host, 0.0, Vec::new());
    run_frame(&ctx, &mut menu, &mut host, 0.2, Vec::new());

    let far_corner = pos2(720.0, 80.0);
    run_frame(&ctx, &mut menu, &mut host, 0.3, click_events(far_corner, true));
    run_frame(&ctx, &mut menu, &mut host, 0.35, click_events(far_corner, false));
    assert!(!menu.is_visible());

    run_frame(&ctx, &mut menu, &mut host, 0.35 + AFTER_EXIT, Vec::new());
    assert!(!menu.is_attached());
    assert_eq!(host.deselected, vec![1]);
}

#[test]
fn clicking_an_enabled_item_fires_its_action_once_and_dismisses() {
    let ctx = egui::Context::default();
    let count = Rc::new(Cell::new(0));
    let mut host = FakeGraph::new();
    let mut menu: MenuController<FakeGraph> =
        MenuController::register(MenuConfig::new(vec![counted_item("inspect", &count)]));

    menu.on_graph_event(GraphEvent::NodeSelected(1), 0.0, &mut host);
    run_frame(&ctx, &mut menu, &mut host, 0.0, Vec::new());
    run_frame(&ctx, &mut menu, &mut host, 0.2, Vec::new());

    // node 1 sits at (300, 300) with a 40 px box: spread radius 80, one
    // item on the horizontal, so its 56 px box is centered at (408, 300)
    let item_center = pos2(408.0, 300.0);
    run_frame(&ctx, &mut menu, &mut host, 0.3, click_events(item_center, true));
    run_frame(&ctx, &mut menu, &mut host, 0.35, click_events(item_center, false));

    assert_eq!(count.get(), 1);
    assert!(!menu.is_visible());

    run_frame(&ctx, &mut menu, &mut host, 0.35 + AFTER_EXIT, Vec::new());
    assert!(!menu.is_attached());
    assert_eq!(count.get(), 1);
    assert_eq!(host.deselected, vec![1]);
}

#[test]
fn clicking_a_disabled_item_is_swallowed() {
    let ctx = egui::Context::default();
    let count = Rc::new(Cell::new(0));
    let mut host = FakeGraph::new();
    let config = MenuConfig::new(vec![counted_item("inspect", &count)])
        .with_rules(RuleFns::new(|_| true, |_, _| false));
    let mut menu: MenuController<FakeGraph> = MenuController::register(config);

    menu.on_graph_event(GraphEvent::NodeSelected(1), 0.0, &mut host);
    run_frame(&ctx, &mut menu, &mut host, 0.0, Vec::new());
    run_frame(&ctx, &mut menu, &mut host, 0.2, Vec::new());

    let item_center = pos2(408.0, 300.0);
    run_frame(&ctx, &mut menu, &mut host, 0.3, click_events(item_center, true));
    run_frame(&ctx, &mut menu, &mut host, 0.35, click_events(item_center, false));

    assert_eq!(count.get(), 0);
    assert!(menu.is_visible());
    assert!(host.deselected.is_empty());
}
