use super::SearchConfig;
use crate::TIE_BREAKER;
use grid_util::point::Point;

/// Estimated cost of a straight move.
pub const C: f32 = 1.0;
/// Estimated cost of a diagonal move, used only by the octile estimate.
pub const D: f32 = std::f32::consts::SQRT_2;

/// Estimate of the remaining cost from `point` to `goal`.
///
/// Without A* this is always 0, which turns the search into Dijkstra. Otherwise it is the
/// Manhattan distance on a 4-grid and the octile distance `C * (dx + dy) + (D - 2C) * min(dx, dy)`
/// on an 8-grid, optionally inflated by [TIE_BREAKER] to favour cells near the straight line to
/// the goal.
pub fn heuristic(config: &SearchConfig, point: &Point, goal: &Point) -> f32 {
    if !config.use_astar_heuristic {
        return 0.0;
    }
    let dx = (point.x - goal.x).abs() as f32;
    let dy = (point.y - goal.y).abs() as f32;
    let distance = if config.diagonal_movement_allowed {
        C * (dx + dy) + (D - 2.0 * C) * dx.min(dy)
    } else {
        C * (dx + dy)
    };
    if config.use_tie_breaker {
        distance * TIE_BREAKER
    } else {
        distance
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn dijkstra_has_no_estimate() {
        let config = SearchConfig {
            diagonal_movement_allowed: true,
            use_astar_heuristic: false,
            use_tie_breaker: true,
        };
        assert_eq!(heuristic(&config, &Point::new(0, 0), &Point::new(9, 4)), 0.0);
    }

    #[test]
    fn manhattan_without_diagonals() {
        let config = SearchConfig::astar(false);
        assert_eq!(heuristic(&config, &Point::new(0, 0), &Point::new(3, -4)), 7.0);
        assert_eq!(heuristic(&config, &Point::new(2, 2), &Point::new(2, 2)), 0.0);
    }

    #[test]
    fn octile_with_diagonals() {
        let config = SearchConfig::astar(true);
        let h = heuristic(&config, &Point::new(0, 0), &Point::new(3, 1));
        assert!(approx(h, 2.0 + std::f32::consts::SQRT_2));
        let h = heuristic(&config, &Point::new(0, 0), &Point::new(2, 2));
        assert!(approx(h, 2.0 * std::f32::consts::SQRT_2));
    }

    #[test]
    fn tie_breaker_inflates_slightly() {
        let config = SearchConfig {
            use_tie_breaker: true,
            ..SearchConfig::astar(false)
        };
        let h = heuristic(&config, &Point::new(0, 0), &Point::new(10, 0));
        assert!(approx(h, 10.01));
    }
}
