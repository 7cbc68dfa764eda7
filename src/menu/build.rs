use eframe::egui::{Color32, Pos2, Rect, pos2};

use crate::config::{MenuConfig, MenuIcon};
use crate::layout::{self, Bounds};
use crate::visuals::{DISABLED_FILL, ENABLED_FILL};

/// Horizontal distance the close control travels while animating in.
pub const CLOSE_SLIDE: f32 = 20.0;

const CLOSE_DROP: f32 = 16.0;

/// Everything the presenter needs to draw one open menu, computed once when
/// the menu opens. Predicates are evaluated here and never again.
pub struct MenuScene {
    pub entries: Vec<SceneEntry>,
    pub close: ClosePlacement,
    pub close_icon: MenuIcon,
    pub bounds: Bounds,
    pub node_rect: Rect,
}

/// One item, resolved against the current target: where it spawns, where it
/// lands, and whether it reacts to clicks.
pub struct SceneEntry {
    pub index: usize,
    pub title: String,
    pub icon: Option<MenuIcon>,
    pub fill: Color32,
    pub enabled: bool,
    /// Final top-left anchor on the arc.
    pub at: Pos2,
    /// Spawn anchor at the node center.
    pub from: Pos2,
}

/// Close control anchors; it slides in horizontally next to the node box.
pub struct ClosePlacement {
    pub at: Pos2,
    pub from: Pos2,
}

pub fn build_scene<N>(config: &MenuConfig<N>, target: &N, node_rect: Rect) -> MenuScene {
    let bounds = layout::bounds_around(node_rect);
    let total = config.items.len();

    let entries = config
        .items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let enabled = config.rules.item_enabled(&item.title, target);
            let fill = if enabled {
                item.color.unwrap_or(ENABLED_FILL)
            } else {
                DISABLED_FILL
            };

            SceneEntry {
                index,
                title: item.title.clone(),
                icon: item.icon.clone(),
                fill,
                enabled,
                at: layout::item_position(index, total, &bounds),
                from: bounds.center,
            }
        })
        .collect();

    let close_y = node_rect.bottom() + CLOSE_DROP;
    let close = ClosePlacement {
        at: pos2(node_rect.right() + CLOSE_SLIDE, close_y),
        from: pos2(node_rect.right() - CLOSE_SLIDE, close_y),
    };

    MenuScene {
        entries,
        close,
        close_icon: config.close_icon.clone(),
        bounds,
        node_rect,
    }
}
