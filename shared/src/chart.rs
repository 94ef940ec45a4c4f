//! Chart geometry for the analytics screens
//!
//! Maps revenue series to pixel coordinates and resolves touches back to
//! the nearest plotted point. Knows nothing about how data is fetched.

/// Default touch radius for hit-testing, in pixels
pub const HIT_RADIUS: f64 = 24.0;

/// Share of a bar slot filled by the bar
const BAR_FILL: f64 = 0.6;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance(&self, other: &Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bar {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Bar {
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y)
    }
}

/// Drawing area with uniform padding
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartFrame {
    pub width: f64,
    pub height: f64,
    pub padding: f64,
}

impl Default for ChartFrame {
    fn default() -> Self {
        Self {
            width: 320.0,
            height: 200.0,
            padding: 20.0,
        }
    }
}

impl ChartFrame {
    pub fn new(width: f64, height: f64, padding: f64) -> Self {
        Self {
            width,
            height,
            padding,
        }
    }

    fn plot_width(&self) -> f64 {
        (self.width - 2.0 * self.padding).max(0.0)
    }

    fn plot_height(&self) -> f64 {
        (self.height - 2.0 * self.padding).max(0.0)
    }

    /// Line chart coordinates
    ///
    /// x is spread evenly across the plot width (a lone point is centred).
    /// y runs from the observed minimum at the bottom to the maximum at the
    /// top; a flat series sits at mid height.
    pub fn line_points(&self, values: &[f64]) -> Vec<Point> {
        let n = values.len();
        if n == 0 {
            return Vec::new();
        }
        let (min, max) = bounds(values);
        let span = max - min;
        let plot_w = self.plot_width();
        let plot_h = self.plot_height();

        values
            .iter()
            .enumerate()
            .map(|(i, v)| {
                let x = if n == 1 {
                    self.padding + plot_w / 2.0
                } else {
                    self.padding + i as f64 * plot_w / (n - 1) as f64
                };
                let ratio = if span.abs() < f64::EPSILON {
                    0.5
                } else {
                    (v - min) / span
                };
                let y = self.padding + (1.0 - ratio) * plot_h;
                Point::new(x, y)
            })
            .collect()
    }

    /// Bar chart rectangles, heights scaled from zero to the series maximum
    pub fn bar_rects(&self, values: &[f64]) -> Vec<Bar> {
        let n = values.len();
        if n == 0 {
            return Vec::new();
        }
        let (_, max) = bounds(values);
        let slot = self.plot_width() / n as f64;
        let width = slot * BAR_FILL;
        let plot_h = self.plot_height();
        let baseline = self.padding + plot_h;

        values
            .iter()
            .enumerate()
            .map(|(i, v)| {
                let height = if max <= 0.0 {
                    0.0
                } else {
                    v.max(0.0) / max * plot_h
                };
                Bar {
                    x: self.padding + i as f64 * slot + (slot - width) / 2.0,
                    y: baseline - height,
                    width,
                    height,
                }
            })
            .collect()
    }
}

fn bounds(values: &[f64]) -> (f64, f64) {
    values
        .iter()
        .copied()
        .filter(|v| v.is_finite())
        .fold(None, |acc: Option<(f64, f64)>, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
        .unwrap_or((0.0, 0.0))
}

/// Index of the plotted point closest to `touch`, if within `radius`
pub fn nearest_point(points: &[Point], touch: Point, radius: f64) -> Option<usize> {
    points
        .iter()
        .enumerate()
        .map(|(i, p)| (i, p.distance(&touch)))
        .filter(|(_, d)| *d <= radius)
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(i, _)| i)
}

/// Short month name for axis labels (1-12)
pub fn month_label(month: u32) -> &'static str {
    const MONTHS: [&str; 12] = [
        "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
    ];
    month
        .checked_sub(1)
        .and_then(|i| MONTHS.get(i as usize))
        .copied()
        .unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_points_scale_between_min_and_max() {
        let frame = ChartFrame::new(300.0, 200.0, 20.0);
        let points = frame.line_points(&[10.0, 30.0, 20.0]);
        assert_eq!(
            points,
            vec![
                Point::new(20.0, 180.0),
                Point::new(150.0, 20.0),
                Point::new(280.0, 100.0),
            ]
        );
    }

    #[test]
    fn test_line_points_degenerate_series() {
        let frame = ChartFrame::new(300.0, 200.0, 20.0);
        assert!(frame.line_points(&[]).is_empty());
        assert_eq!(frame.line_points(&[42.0]), vec![Point::new(150.0, 100.0)]);
        let flat = frame.line_points(&[5.0, 5.0]);
        assert!(flat.iter().all(|p| p.y == 100.0));
    }

    #[test]
    fn test_bar_rects() {
        let frame = ChartFrame::new(220.0, 120.0, 10.0);
        let bars = frame.bar_rects(&[50.0, 100.0]);
        assert_eq!(bars.len(), 2);
        assert_eq!(bars[0], Bar { x: 30.0, y: 60.0, width: 60.0, height: 50.0 });
        assert_eq!(bars[1], Bar { x: 130.0, y: 10.0, width: 60.0, height: 100.0 });
        assert_eq!(bars[1].center(), Point::new(160.0, 10.0));

        let empty = frame.bar_rects(&[0.0, 0.0]);
        assert!(empty.iter().all(|b| b.height == 0.0 && b.y == 110.0));
    }

    #[test]
    fn test_nearest_point_within_radius() {
        let points = vec![
            Point::new(20.0, 180.0),
            Point::new(150.0, 20.0),
            Point::new(280.0, 100.0),
        ];
        assert_eq!(nearest_point(&points, Point::new(145.0, 30.0), HIT_RADIUS), Some(1));
        assert_eq!(nearest_point(&points, Point::new(275.0, 95.0), HIT_RADIUS), Some(2));
        assert_eq!(nearest_point(&points, Point::new(85.0, 100.0), HIT_RADIUS), None);
        assert_eq!(nearest_point(&[], Point::new(0.0, 0.0), HIT_RADIUS), None);
    }

    #[test]
    fn test_month_label() {
        assert_eq!(month_label(1), "Jan");
        assert_eq!(month_label(12), "Dec");
        assert_eq!(month_label(0), "");
        assert_eq!(month_label(13), "");
    }
}
