pub fn ease_in_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - ((-2.0 * t + 2.0).powi(3) / 2.0)
    }
}

pub fn progress(now: f64, since: f64, duration: f32) -> f32 {
    if duration <= 0.0 {
        return 1.0;
    }
    (((now - since) / duration as f64) as f32).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ease_in_out_hits_endpoints_and_midpoint() {
        assert_eq!(ease_in_out(0.0), 0.0);
        assert_eq!(ease_in_out(1.0), 1.0);
        assert!((ease_in_out(0.5) - 0.5).abs() < 1e-6);
        assert_eq!(ease_in_out(-3.0), 0.0);
        assert_eq!(ease_in_out(7.0), 1.0);
    }

    #[test]
    fn ease_in_out_is_slow_at_the_edges() {
        assert!(ease_in_out(0.1) < 0.1);
        assert!(ease_in_out(0.9) > 0.9);
    }

    #[test]
    fn progress_clamps_and_scales() {
        assert_eq!(progress(0.0, 0.0, 0.15), 0.0);
        assert_eq!(progress(0.2, 0.0, 0.15), 1.0);
        assert!((progress(0.075, 0.0, 0.15) - 0.5).abs() < 1e-4);
        assert_eq!(progress(-1.0, 0.0, 0.15), 0.0);
        assert_eq!(progress(5.0, 0.0, 0.0), 1.0);
    }
}
