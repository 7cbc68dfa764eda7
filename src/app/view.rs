use eframe::egui::{
    self, Align2, Color32, FontId, Painter, Pos2, Rect, Sense, Stroke, Ui, Vec2, vec2,
};

use orbit_menu::GraphEvent;

use super::ViewModel;

impl ViewModel {
    /// Draws the graph and reports the interactions the menu cares about.
    pub(super) fn draw_graph(&mut self, ui: &mut Ui) -> Vec<GraphEvent<usize>> {
        let (rect, response) = ui.allocate_exact_size(ui.available_size(), Sense::click_and_drag());
        let painter = ui.painter_at(rect);
        let mut events = Vec::new();

        draw_background(&painter, rect, self.pan, self.zoom);

        let pointer = ui.input(|input| input.pointer.hover_pos());
        let scroll = ui.input(|input| input.raw_scroll_delta.y);
        if scroll.abs() > f32::EPSILON
            && let Some(pointer) = pointer
            && rect.contains(pointer)
        {
            let world_before = screen_to_world(rect, self.pan, self.zoom, pointer);
            let factor = (1.0 + (scroll * 0.0018)).clamp(0.85, 1.15);
            self.zoom = (self.zoom * factor).clamp(0.2, 5.0);
            self.pan = pointer - rect.center() - (world_before * self.zoom);
            events.push(GraphEvent::Zoom);
        }

        if response.dragged_by(egui::PointerButton::Primary)
            || response.dragged_by(egui::PointerButton::Middle)
        {
            self.pan += response.drag_delta();
        }
        if response.drag_started() {
            events.push(GraphEvent::Pan);
        }

        self.screen_positions.clear();
        self.screen_radii.clear();
        for node in &self.nodes {
            self.screen_positions
                .push(world_to_screen(rect, self.pan, self.zoom, node.world_pos));
            self.screen_radii
                .push((node.base_radius * self.zoom.powf(0.4)).clamp(4.0, 46.0));
        }

        let hovered = pointer.and_then(|pointer| {
            (0..self.nodes.len())
                .filter_map(|index| {
                    let distance = self.screen_positions[index].distance(pointer);
                    (distance <= self.screen_radii[index]).then_some((index, distance))
                })
                .min_by(|a, b| a.1.total_cmp(&b.1))
                .map(|(index, _)| index)
        });

        if hovered.is_some() {
            ui.output_mut(|output| {
                output.cursor_icon = egui::CursorIcon::PointingHand;
            });
        }

        if response.clicked_by(egui::PointerButton::Primary) {
            match hovered {
                Some(index) => {
                    self.selected = Some(index);
                    events.push(GraphEvent::NodeSelected(index));
                }
                None => {
                    self.selected = None;
                    events.push(GraphEvent::BackgroundClick);
                }
            }
        }

        let edge_stroke = Stroke::new(
            (1.1 * self.zoom.sqrt()).clamp(0.5, 2.6),
            Color32::from_rgba_unmultiplied(86, 96, 110, 150),
        );
        for &(a, b) in &self.edges {
            if a >= self.nodes.len() || b >= self.nodes.len() {
                continue;
            }
            painter.line_segment(
                [self.screen_positions[a], self.screen_positions[b]],
                edge_stroke,
            );
        }

        for index in 0..self.nodes.len() {
            let node = &self.nodes[index];
            let position = self.screen_positions[index];
            let radius = self.screen_radii[index];

            let is_selected = self.selected == Some(index);
            let is_hovered = hovered == Some(index);
            let fill = if is_selected {
                Color32::from_rgb(245, 206, 93)
            } else if is_hovered {
                Color32::from_rgb(255, 164, 101)
            } else if node.is_hub {
                Color32::from_rgb(104, 156, 227)
            } else {
                Color32::from_rgb(96, 178, 160)
            };

            painter.circle_filled(position, radius, fill);
            painter.circle_stroke(
                position,
                radius,
                Stroke::new(1.0, Color32::from_rgba_unmultiplied(15, 15, 15, 190)),
            );

            if is_selected || is_hovered || node.is_hub || self.zoom > 1.6 {
                painter.text(
                    position + vec2(radius + 5.0, 0.0),
                    Align2::LEFT_CENTER,
                    node.label.as_str(),
                    FontId::proportional(12.0),
                    Color32::from_gray(235),
                );
            }
        }

        events
    }
}

fn draw_background(painter: &Painter, rect: Rect, pan: Vec2, zoom: f32) {
    painter.rect_filled(rect, 0.0, Color32::from_rgb(19, 23, 29));

    let step = (56.0 * zoom.clamp(0.6, 1.8)).max(20.0);
    let origin = rect.center() + pan;
    let grid_stroke = Stroke::new(1.0, Color32::from_rgba_unmultiplied(60, 70, 80, 60));

    let mut x = rect.left() + (origin.x - rect.left()).rem_euclid(step);
    while x < rect.right() {
        painter.line_segment(
            [Pos2::new(x, rect.top()), Pos2::new(x, rect.bottom())],
            grid_stroke,
        );
        x += step;
    }

    let mut y = rect.top() + (origin.y - rect.top()).rem_euclid(step);
    while y < rect.bottom() {
        painter.line_segment(
            [Pos2::new(rect.left(), y), Pos2::new(rect.right(), y)],
            grid_stroke,
        );
        y += step;
    }
}

fn world_to_screen(rect: Rect, pan: Vec2, zoom: f32, world: Vec2) -> Pos2 {
    rect.center() + pan + (world * zoom)
}

fn screen_to_world(rect: Rect, pan: Vec2, zoom: f32, screen: Pos2) -> Vec2 {
    (screen - rect.center() - pan) / zoom
}
