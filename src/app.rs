use std::sync::mpsc::{self, Receiver, Sender};

use eframe::egui::{self, Color32, Context, Pos2, Rect, Vec2};

use orbit_menu::{GraphHost, MenuConfig, MenuController, MenuIcon, MenuItem, RuleFns};

use self::data::GraphData;

mod data;
mod view;

pub struct DemoApp {
    state: AppState,
}

enum AppState {
    Ready(Box<Session>),
    Error(String),
}

struct Session {
    view: ViewModel,
    menu: MenuController<ViewModel>,
    actions: Receiver<String>,
    status: String,
}

struct ViewModel {
    nodes: Vec<DemoNode>,
    edges: Vec<(usize, usize)>,
    selected: Option<usize>,
    pan: Vec2,
    zoom: f32,
    screen_positions: Vec<Pos2>,
    screen_radii: Vec<f32>,
}

struct DemoNode {
    label: String,
    world_pos: Vec2,
    base_radius: f32,
    is_hub: bool,
}

impl DemoApp {
    pub fn new(
        _cc: &eframe::CreationContext<'_>,
        graph_path: Option<String>,
        node_count: usize,
    ) -> Self {
        let graph = match graph_path {
            Some(path) => match data::load_graph(&path) {
                Ok(graph) => graph,
                Err(error) => {
                    return Self {
                        state: AppState::Error(format!("{error:#}")),
                    };
                }
            },
            None => data::sample_graph(node_count),
        };

        Self {
            state: AppState::Ready(Box::new(Session::new(graph))),
        }
    }
}

impl eframe::App for DemoApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        match &mut self.state {
            AppState::Error(error) => {
                egui::CentralPanel::default().show(ctx, |ui| {
                    ui.heading("Failed to load the graph");
                    ui.add_space(6.0);
                    ui.label(error.as_str());
                });
            }
            AppState::Ready(session) => session.show(ctx),
        }
    }
}

impl Session {
    fn new(graph: GraphData) -> Self {
        let degrees = data::degrees(&graph);
        let hubs: Vec<bool> = graph.nodes.iter().map(|record| record.hub).collect();
        let (tx, rx) = mpsc::channel();

        Self {
            view: ViewModel::new(&graph, &degrees),
            menu: MenuController::register(menu_config(hubs, degrees, tx)),
            actions: rx,
            status: "Click a node to open its menu".to_owned(),
        }
    }

    fn show(&mut self, ctx: &Context) {
        while let Ok(message) = self.actions.try_recv() {
            self.status = message;
        }
        let now = ctx.input(|input| input.time);

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(self.status.as_str());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label("drag: pan  |  scroll: zoom  |  hub nodes carry no menu");
                });
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let events = self.view.draw_graph(ui);
            for event in events {
                self.menu.on_graph_event(event, now, &mut self.view);
            }
        });

        self.menu.show(ctx, &mut self.view);
    }
}

fn menu_config(hubs: Vec<bool>, degrees: Vec<usize>, tx: Sender<String>) -> MenuConfig<usize> {
    let report = move |what: &'static str| {
        let tx = tx.clone();
        move || {
            let _ = tx.send(format!("{what} fired for the selected node"));
        }
    };

    let items = vec![
        MenuItem::new("Inspect", report("Inspect")).with_icon(MenuIcon::glyph("\u{1f50d}")),
        MenuItem::new("Pin", report("Pin")).with_icon(MenuIcon::glyph("\u{1f4cc}")),
        MenuItem::new("Expand", report("Expand")),
        MenuItem::new("Delete", report("Delete"))
            .with_icon(MenuIcon::glyph("\u{1f5d1}"))
            .with_color(Color32::from_rgb(242, 139, 130)),
    ];

    MenuConfig::new(items).with_rules(RuleFns::new(
        // hubs get no menu at all; selecting one just deselects it
        move |index: &usize| !hubs.get(*index).copied().unwrap_or(false),
        // well-connected nodes refuse deletion
        move |title, index: &usize| {
            title != "Delete" || degrees.get(*index).copied().unwrap_or(0) <= 2
        },
    ))
}

impl ViewModel {
    fn new(graph: &GraphData, degrees: &[usize]) -> Self {
        let nodes = graph
            .nodes
            .iter()
            .enumerate()
            .map(|(index, record)| {
                let degree = degrees.get(index).copied().unwrap_or(0);
                DemoNode {
                    label: record.label.clone(),
                    world_pos: data::scatter(index, graph.nodes.len(), &record.label, record.hub),
                    base_radius: if record.hub {
                        26.0
                    } else {
                        10.0 + (degree as f32 * 2.0).min(14.0)
                    },
                    is_hub: record.hub,
                }
            })
            .collect();

        Self {
            nodes,
            edges: graph.edges.clone(),
            selected: None,
            pan: Vec2::ZERO,
            zoom: 1.0,
            screen_positions: Vec::new(),
            screen_radii: Vec::new(),
        }
    }
}

impl GraphHost for ViewModel {
    type NodeId = usize;

    fn node_screen_rect(&self, node: &usize) -> Option<Rect> {
        let position = self.screen_positions.get(*node)?;
        let radius = self.screen_radii.get(*node)?;
        Some(Rect::from_center_size(*position, Vec2::splat(radius * 2.0)))
    }

    fn deselect(&mut self, node: &usize) {
        if self.selected == Some(*node) {
            self.selected = None;
        }
    }
}
