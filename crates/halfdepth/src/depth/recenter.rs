use nalgebra::Vector2;

/// Offsets `p - origin` for every `p` not exactly equal to `origin`, in input order.
///
/// Coincident points (the origin itself included) are dropped, so the result may be empty.
pub fn recenter(origin: Vector2<f64>, points: &[Vector2<f64>]) -> Vec<Vector2<f64>> {
    points
        .iter()
        .filter(|p| !(p.x == origin.x && p.y == origin.y))
        .map(|p| p - origin)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    #[test]
    fn drops_origin_and_copies() {
        let pts = vec![
            vector![1.0, 2.0],
            vector![3.0, 5.0],
            vector![1.0, 2.0],
            vector![0.0, 2.0],
        ];
        let rel = recenter(vector![1.0, 2.0], &pts);
        assert_eq!(rel, vec![vector![2.0, 3.0], vector![-1.0, 0.0]]);
    }

    #[test]
    fn all_coincident_gives_empty() {
        let pts = vec![vector![0.5, 0.5]; 4];
        assert!(recenter(vector![0.5, 0.5], &pts).is_empty());
    }

    #[test]
    fn origin_outside_the_set_keeps_everything() {
        let pts = vec![vector![1.0, 0.0], vector![0.0, 1.0]];
        let rel = recenter(vector![10.0, 10.0], &pts);
        assert_eq!(rel.len(), 2);
        assert_eq!(rel[0], vector![-9.0, -10.0]);
    }
}
