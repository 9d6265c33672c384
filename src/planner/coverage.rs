//! Boustrophedon (serpentine) coverage paths.
//!
//! # Algorithm
//!
//! The field is swept by `rows + 1` horizontal lines spaced
//! `height / rows` apart, where `rows = max(min_sweep_rows,
//! floor(height / row_spacing))`. Even lines run left to right, odd lines
//! right to left, so consecutive lines join at the field edge.
//!
//! # Complexity
//! O(rows) per field.

use crate::config::PlannerConfig;
use crate::models::{Field, Point};

/// Number of sweep rows used for a field.
///
/// Always at least `config.min_sweep_rows`.
pub fn sweep_rows(field: &Field, config: &PlannerConfig) -> usize {
    let scaled = (field.height / config.row_spacing).floor();
    let scaled = if scaled.is_finite() && scaled > 0.0 {
        scaled as usize
    } else {
        0
    };
    scaled.max(config.min_sweep_rows)
}

/// Generates the serpentine coverage path of one field.
///
/// Produces `2 * (rows + 1)` waypoints, one entry/exit pair per sweep line.
pub fn coverage_path(field: &Field, config: &PlannerConfig) -> Vec<Point> {
    let rows = sweep_rows(field, config);
    let step = field.height / rows as f64;
    let left = field.x;
    let right = field.x + field.width;

    let mut path = Vec::with_capacity(2 * (rows + 1));
    for i in 0..=rows {
        let row_y = field.y + step * i as f64;
        if i % 2 == 0 {
            path.push(Point::new(left, row_y));
            path.push(Point::new(right, row_y));
        } else {
            path.push(Point::new(right, row_y));
            path.push(Point::new(left, row_y));
        }
    }
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimum_rows_example() {
        let field = Field::new(0.0, 0.0, 10.0, 30.0);
        let config = PlannerConfig::default();

        assert_eq!(sweep_rows(&field, &config), 3);
        let path = coverage_path(&field, &config);
        let expected = [
            (0.0, 0.0),
            (10.0, 0.0),
            (10.0, 10.0),
            (0.0, 10.0),
            (0.0, 20.0),
            (10.0, 20.0),
            (10.0, 30.0),
            (0.0, 30.0),
        ];
        assert_eq!(path.len(), expected.len());
        for (p, &(x, y)) in path.iter().zip(expected.iter()) {
            assert!((p.x - x).abs() < 1e-10 && (p.y - y).abs() < 1e-10, "{p:?} != ({x}, {y})");
        }
    }

    #[test]
    fn test_rows_scale_with_height() {
        let config = PlannerConfig::default();
        assert_eq!(sweep_rows(&Field::new(0.0, 0.0, 5.0, 55.0), &config), 5);
        assert_eq!(sweep_rows(&Field::new(0.0, 0.0, 5.0, 120.0), &config), 12);
        assert_eq!(sweep_rows(&Field::new(0.0, 0.0, 5.0, 12.0), &config), 3);

        let path = coverage_path(&Field::new(0.0, 0.0, 5.0, 120.0), &config);
        assert_eq!(path.len(), 26);
    }

    #[test]
    fn test_offset_field() {
        let field = Field::new(100.0, 50.0, 20.0, 40.0);
        let path = coverage_path(&field, &PlannerConfig::default());
        // rows = 4, spacing = 10
        assert_eq!(path.len(), 10);
        assert_eq!(path[0], Point::new(100.0, 50.0));
        assert_eq!(path[1], Point::new(120.0, 50.0));
        assert_eq!(path[2], Point::new(120.0, 60.0));
        assert_eq!(path[8], Point::new(100.0, 90.0));
        assert_eq!(path[9], Point::new(120.0, 90.0));
    }

    #[test]
    fn test_consecutive_lines_share_an_edge() {
        let field = Field::new(3.0, 7.0, 25.0, 64.0);
        let path = coverage_path(&field, &PlannerConfig::default());
        for pair in path[1..].chunks(2) {
            if pair.len() == 2 {
                assert_eq!(pair[0].x, pair[1].x, "line transition must stay on one edge");
            }
        }
    }

    #[test]
    fn test_degenerate_field() {
        let config = PlannerConfig::default();

        let zero_height = coverage_path(&Field::new(1.0, 2.0, 10.0, 0.0), &config);
        assert_eq!(zero_height.len(), 8);
        assert!(zero_height.iter().all(|p| p.y == 2.0));

        let zero_width = coverage_path(&Field::new(1.0, 2.0, 0.0, 30.0), &config);
        assert_eq!(zero_width.len(), 8);
        assert!(zero_width.iter().all(|p| p.x == 1.0));
    }

    #[test]
    fn test_custom_spacing() {
        let config = PlannerConfig::new().with_row_spacing(2.0).with_min_sweep_rows(1);
        let field = Field::new(0.0, 0.0, 4.0, 6.0);
        assert_eq!(sweep_rows(&field, &config), 3);
        assert_eq!(coverage_path(&field, &config).len(), 8);
    }

    #[test]
    fn test_deterministic() {
        let field = Field::new(12.5, 3.25, 17.0, 93.0);
        let config = PlannerConfig::default();
        assert_eq!(coverage_path(&field, &config), coverage_path(&field, &config));
    }
}
