use std::mem;

use crate::config::MenuConfig;
use crate::host::{GraphEvent, GraphHost};

use super::build::{self, MenuScene};

/// Entry animation length in seconds.
pub const ENTER_SECONDS: f32 = 0.15;
/// Exit animation length in seconds; the time-reverse of entry, shorter.
pub const EXIT_SECONDS: f32 = 0.075;

enum State<N> {
    Hidden,
    Visible {
        target: N,
        scene: MenuScene,
        shown_at: f64,
    },
    Closing {
        target: N,
        scene: MenuScene,
        closing_at: f64,
        reopen: Option<N>,
    },
}

/// Owns the single "current menu" slot for one registration: which node the
/// menu is attached to, the prebuilt scene, and the animation clock. All
/// clocking is passed in explicitly so the machine runs headlessly.
///
/// A dismissed scene stays attached until its exit animation settles; a
/// selection arriving during that window is deferred, so two menus can never
/// coexist.
pub struct MenuController<H: GraphHost> {
    pub(super) config: MenuConfig<H::NodeId>,
    state: State<H::NodeId>,
}

impl<H: GraphHost> MenuController<H> {
    /// Registers a menu for the host type; the Rust rendition of installing
    /// an extension on the graph library's core object.
    pub fn register(config: MenuConfig<H::NodeId>) -> Self {
        Self {
            config,
            state: State::Hidden,
        }
    }

    /// Menu is open and interactable (not exit-animating).
    pub fn is_visible(&self) -> bool {
        matches!(self.state, State::Visible { .. })
    }

    /// A scene is attached: open, or still playing its exit animation.
    pub fn is_attached(&self) -> bool {
        !matches!(self.state, State::Hidden)
    }

    /// The node the menu is currently open for.
    pub fn current_target(&self) -> Option<&H::NodeId> {
        match &self.state {
            State::Visible { target, .. } => Some(target),
            _ => None,
        }
    }

    pub fn on_graph_event(&mut self, event: GraphEvent<H::NodeId>, now: f64, host: &mut H) {
        match event {
            GraphEvent::NodeSelected(node) => self.node_selected(node, now, host),
            GraphEvent::Drag | GraphEvent::Zoom | GraphEvent::Pan | GraphEvent::BackgroundClick => {
                self.dismiss(now);
            }
        }
    }

    fn node_selected(&mut self, node: H::NodeId, now: f64, host: &mut H) {
        match mem::replace(&mut self.state, State::Hidden) {
            State::Hidden => self.open(node, now, host),
            State::Visible {
                target,
                scene,
                shown_at,
            } => {
                if target == node {
                    self.state = State::Visible {
                        target,
                        scene,
                        shown_at,
                    };
                } else {
                    log::debug!("node menu: dismissing for a new target");
                    self.state = State::Closing {
                        target,
                        scene,
                        closing_at: now,
                        reopen: Some(node),
                    };
                }
            }
            State::Closing {
                target,
                scene,
                closing_at,
                ..
            } => {
                self.state = State::Closing {
                    target,
                    scene,
                    closing_at,
                    reopen: Some(node),
                };
            }
        }
    }

    /// Starts the exit animation. A no-op while hidden or already closing,
    /// so repeated dismissals are idempotent.
    pub fn dismiss(&mut self, now: f64) {
        match mem::replace(&mut self.state, State::Hidden) {
            State::Visible { target, scene, .. } => {
                log::debug!("node menu: dismissed");
                self.state = State::Closing {
                    target,
                    scene,
                    closing_at: now,
                    reopen: None,
                };
            }
            other => self.state = other,
        }
    }

    /// Runs an enabled item's action, then dismisses. Disabled items and
    /// exit-animating menus swallow the activation.
    pub fn activate_item(&mut self, index: usize, now: f64) {
        let State::Visible { scene, .. } = &self.state else {
            return;
        };
        let Some(entry) = scene.entries.get(index) else {
            return;
        };
        if !entry.enabled {
            return;
        }
        if let Some(item) = self.config.items.get(index) {
            (item.action)();
        }
        self.dismiss(now);
    }

    /// Finishes an elapsed exit animation: detaches the scene, deselects the
    /// dismissed target, and opens any deferred selection. Call once per
    /// frame; the presenter does this before drawing.
    pub fn settle(&mut self, now: f64, host: &mut H) {
        let elapsed = match &self.state {
            State::Closing { closing_at, .. } => now - closing_at >= EXIT_SECONDS as f64,
            _ => false,
        };
        if !elapsed {
            return;
        }

        let State::Closing { target, reopen, .. } = mem::replace(&mut self.state, State::Hidden)
        else {
            return;
        };
        log::debug!("node menu: exit settled");
        if reopen.as_ref() != Some(&target) {
            host.deselect(&target);
        }
        if let Some(next) = reopen {
            self.open(next, now, host);
        }
    }

    fn open(&mut self, node: H::NodeId, now: f64, host: &mut H) {
        if !self.config.rules.menu_enabled(&node) {
            host.deselect(&node);
            self.state = State::Hidden;
            return;
        }
        let Some(node_rect) = host.node_screen_rect(&node) else {
            host.deselect(&node);
            self.state = State::Hidden;
            return;
        };

        let scene = build::build_scene(&self.config, &node, node_rect);
        log::debug!("node menu: opened with {} items", scene.entries.len());
        self.state = State::Visible {
            target: node,
            scene,
            shown_at: now,
        };
    }

    /// Scene plus animation progress for the presenter; `None` while hidden.
    pub(super) fn frame(&self, now: f64) -> Option<MenuFrame<'_>> {
        match &self.state {
            State::Hidden => None,
            State::Visible {
                scene, shown_at, ..
            } => Some(MenuFrame {
                scene,
                progress: crate::util::progress(now, *shown_at, ENTER_SECONDS),
                closing: false,
            }),
            State::Closing {
                scene, closing_at, ..
            } => Some(MenuFrame {
                scene,
                progress: 1.0 - crate::util::progress(now, *closing_at, EXIT_SECONDS),
                closing: true,
            }),
        }
    }
}

pub(super) struct MenuFrame<'a> {
    pub scene: &'a MenuScene,
    /// 0.0 fully collapsed at the node center, 1.0 fully deployed.
    pub progress: f32,
    pub closing: bool,
}
