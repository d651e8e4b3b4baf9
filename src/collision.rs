use crate::types::Rect;

/// Strict AABB overlap test. Rectangles that only share an edge do not collide.
pub fn collides(a: &Rect, b: &Rect) -> bool {
    a.x < b.right() && a.right() > b.x && a.y < b.bottom() && a.bottom() > b.y
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn random_rect(rng: &mut StdRng) -> Rect {
        Rect::new(
            rng.gen_range(-50..50),
            rng.gen_range(-50..50),
            rng.gen_range(0..40),
            rng.gen_range(0..40),
        )
    }

    #[test]
    fn test_overlapping_rects_collide() {
        let a = Rect::new(0, 0, 10, 10);
        let b = Rect::new(5, 5, 10, 10);
        assert!(collides(&a, &b));
    }

    #[test]
    fn test_touching_edges_do_not_collide() {
        let a = Rect::new(0, 0, 10, 10);
        assert!(!collides(&a, &Rect::new(10, 0, 10, 10)), "right edge");
        assert!(!collides(&a, &Rect::new(0, 10, 10, 10)), "bottom edge");
        assert!(!collides(&a, &Rect::new(-10, 0, 10, 10)), "left edge");
        assert!(!collides(&a, &Rect::new(10, 10, 10, 10)), "corner");
    }

    #[test]
    fn test_separated_on_one_axis_never_collides() {
        let a = Rect::new(0, 0, 10, 10);
        // Overlaps on x but far apart on y
        assert!(!collides(&a, &Rect::new(2, 50, 5, 5)));
        // Overlaps on y but far apart on x
        assert!(!collides(&a, &Rect::new(50, 2, 5, 5)));
    }

    #[test]
    fn test_contained_rect_collides() {
        let outer = Rect::new(0, 0, 100, 100);
        let inner = Rect::new(40, 40, 5, 5);
        assert!(collides(&outer, &inner));
        assert!(collides(&inner, &outer));
    }

    #[test]
    fn test_rect_collides_with_itself() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            let mut a = random_rect(&mut rng);
            a.w = a.w.max(1);
            a.h = a.h.max(1);
            assert!(collides(&a, &a), "{:?} should collide with itself", a);
        }
    }

    #[test]
    fn test_zero_sized_rect_never_collides_with_itself() {
        let a = Rect::new(3, 3, 0, 10);
        assert!(!collides(&a, &a));
    }

    #[test]
    fn test_collision_is_symmetric() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..2000 {
            let a = random_rect(&mut rng);
            let b = random_rect(&mut rng);
            assert_eq!(collides(&a, &b), collides(&b, &a), "{:?} vs {:?}", a, b);
        }
    }

    #[test]
    fn test_bullet_against_enemy() {
        let bullet = Rect::new(154, 100, 25, 10);
        let enemy = Rect::new(154, 100, 50, 50);
        assert!(collides(&bullet, &enemy));
        let enemy_past = Rect::new(179, 100, 50, 50);
        assert!(!collides(&bullet, &enemy_past));
    }
}
