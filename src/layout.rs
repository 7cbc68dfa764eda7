use eframe::egui::{Pos2, Rect, pos2};

/// Smallest spread radius; keeps items usable around tiny nodes.
pub const MIN_RADIUS: f32 = 80.0;
/// Largest spread radius; keeps items reachable around huge nodes.
pub const MAX_RADIUS: f32 = 120.0;
/// Edge length of the square box an item occupies on screen.
pub const ITEM_SIZE: f32 = 56.0;

const ITEM_LIFT: f32 = ITEM_SIZE / 2.0;

/// The circle menu items are arranged on, derived from the target node's
/// rendered bounding box every time the menu opens.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub center: Pos2,
    pub radius: f32,
}

pub fn bounds_around(node_rect: Rect) -> Bounds {
    Bounds {
        center: node_rect.center(),
        radius: (node_rect.width() / 2.0).clamp(MIN_RADIUS, MAX_RADIUS),
    }
}

/// Angle in degrees for item `index` of `total`, measured from the positive
/// x axis. Consecutive items are 45 degrees apart for even counts and 22.5
/// for odd counts, so an odd count places its middle item straddling the
/// horizontal.
pub fn item_angle(index: usize, total: usize) -> f32 {
    let step = if total % 2 == 0 { 45.0 } else { 22.5 };
    (step / 2.0) * (total as f32 - 1.0 - (2.0 * index as f32))
}

/// Top-left anchor for item `index` of `total`: the arc point, lifted by
/// half an item box so the box is vertically centered on the arc.
pub fn item_position(index: usize, total: usize, bounds: &Bounds) -> Pos2 {
    let angle = item_angle(index, total).to_radians();
    pos2(
        bounds.center.x + bounds.radius * angle.cos(),
        bounds.center.y + bounds.radius * angle.sin() - ITEM_LIFT,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use eframe::egui::vec2;

    fn rect_with_width(width: f32) -> Rect {
        Rect::from_center_size(pos2(400.0, 300.0), vec2(width, width * 0.6))
    }

    #[test]
    fn radius_is_clamped_to_usable_band() {
        assert_eq!(bounds_around(rect_with_width(40.0)).radius, 80.0);
        assert_eq!(bounds_around(rect_with_width(300.0)).radius, 120.0);
        assert_eq!(bounds_around(rect_with_width(180.0)).radius, 90.0);
    }

    #[test]
    fn bounds_center_is_the_rect_center() {
        let bounds = bounds_around(rect_with_width(64.0));
        assert_eq!(bounds.center, pos2(400.0, 300.0));
    }

    #[test]
    fn four_items_fan_out_in_forty_five_degree_steps() {
        let angles: Vec<f32> = (0..4).map(|i| item_angle(i, 4)).collect();
        assert_eq!(angles, vec![67.5, 22.5, -22.5, -67.5]);
    }

    #[test]
    fn even_counts_step_forty_five_degrees() {
        for total in [2usize, 4, 6, 8] {
            for index in 1..total {
                let step = item_angle(index - 1, total) - item_angle(index, total);
                assert!((step - 45.0).abs() < 1e-4, "total {total} index {index}");
            }
        }
    }

    #[test]
    fn odd_counts_step_half_as_much_with_a_centered_middle_item() {
        for total in [3usize, 5, 7] {
            for index in 1..total {
                let step = item_angle(index - 1, total) - item_angle(index, total);
                assert!((step - 22.5).abs() < 1e-4, "total {total} index {index}");
            }
            assert_eq!(item_angle(total / 2, total), 0.0);
        }
    }

    #[test]
    fn single_item_sits_on_the_horizontal() {
        let bounds = Bounds {
            center: pos2(100.0, 100.0),
            radius: 80.0,
        };
        let anchor = item_position(0, 1, &bounds);
        assert!((anchor.x - 180.0).abs() < 1e-3);
        assert!((anchor.y - (100.0 - ITEM_SIZE / 2.0)).abs() < 1e-3);
    }

    #[test]
    fn positions_lie_on_the_circle_before_the_lift() {
        let bounds = Bounds {
            center: pos2(0.0, 0.0),
            radius: 100.0,
        };
        for total in 1..=8usize {
            for index in 0..total {
                let anchor = item_position(index, total, &bounds);
                let arc = pos2(anchor.x, anchor.y + ITEM_SIZE / 2.0);
                let distance = (arc.x * arc.x + arc.y * arc.y).sqrt();
                assert!((distance - 100.0).abs() < 1e-3);
            }
        }
    }
}
