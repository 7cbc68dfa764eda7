use eframe::egui::{self, CursorIcon, Id, Order, Pos2, Rect, Sense, vec2};

use crate::host::GraphHost;
use crate::layout::ITEM_SIZE;
use crate::util::ease_in_out;
use crate::visuals::{self, CLOSE_SIZE, DISABLED_FILL, Disc};

use super::controller::MenuController;

impl<H: GraphHost> MenuController<H> {
    /// Per-frame presentation: settles any elapsed exit, then paints the
    /// scene on a foreground layer with a full-viewport click-catcher
    /// underneath, so presses over the canvas dismiss the menu instead of
    /// reaching node-level hit testing.
    pub fn show(&mut self, ctx: &egui::Context, host: &mut H) {
        let now = ctx.input(|input| input.time);
        self.settle(now, host);

        let Some(frame) = self.frame(now) else {
            return;
        };
        let eased = ease_in_out(frame.progress);
        let interactive = !frame.closing;
        let animating = frame.closing || frame.progress < 1.0;
        let scene = frame.scene;
        let screen_rect = ctx.screen_rect();

        let mut activated: Option<usize> = None;
        let mut dismissed = false;

        egui::Area::new(Id::new(("node-menu", self.config.id_salt)))
            .order(Order::Foreground)
            .fixed_pos(Pos2::ZERO)
            .show(ctx, |ui| {
                let catcher = ui.allocate_rect(screen_rect, Sense::click_and_drag());
                if interactive && (catcher.clicked() || catcher.drag_started()) {
                    dismissed = true;
                }

                let painter = ui.painter_at(screen_rect);

                for entry in &scene.entries {
                    let anchor = entry.from.lerp(entry.at, eased);
                    let rect = Rect::from_min_size(anchor, vec2(ITEM_SIZE, ITEM_SIZE));

                    visuals::paint_disc(
                        &painter,
                        &Disc::new(rect.center(), ITEM_SIZE / 2.0, entry.fill).with_opacity(eased),
                    );
                    match &entry.icon {
                        Some(icon) => visuals::paint_icon(&painter, rect.center(), icon, eased),
                        None => visuals::paint_label(&painter, rect.center(), &entry.title, eased),
                    }

                    if interactive {
                        let response =
                            ui.interact(rect, ui.id().with(("item", entry.index)), Sense::click());
                        if response.hovered() {
                            ui.output_mut(|output| {
                                output.cursor_icon = if entry.enabled {
                                    CursorIcon::PointingHand
                                } else {
                                    CursorIcon::NotAllowed
                                };
                            });
                        }
                        if response.clicked() && entry.enabled {
                            activated = Some(entry.index);
                        }
                    }
                }

                let anchor = scene.close.from.lerp(scene.close.at, eased);
                let rect = Rect::from_min_size(anchor, vec2(CLOSE_SIZE, CLOSE_SIZE));
                visuals::paint_disc(
                    &painter,
                    &Disc::new(rect.center(), CLOSE_SIZE / 2.0, DISABLED_FILL).with_opacity(eased),
                );
                visuals::paint_icon(&painter, rect.center(), &scene.close_icon, eased);

                if interactive {
                    let response = ui.interact(rect, ui.id().with("close"), Sense::click());
                    if response.hovered() {
                        ui.output_mut(|output| {
                            output.cursor_icon = CursorIcon::PointingHand;
                        });
                    }
                    if response.clicked() {
                        dismissed = true;
                    }
                }
            });

        if let Some(index) = activated {
            self.activate_item(index, now);
        } else if dismissed {
            self.dismiss(now);
        }
        if animating || activated.is_some() || dismissed {
            ctx.request_repaint();
        }
    }
}
