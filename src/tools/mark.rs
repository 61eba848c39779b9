use egui::Pos2;

/// Coordinates are clamped to this magnitude before conversion; far beyond
/// any surface, small enough that square arithmetic cannot overflow.
const COORD_LIMIT: f32 = (1u32 << 30) as f32;

/// One pointer sample in surface pixel coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mark {
    pub x: i64,
    pub y: i64,
}

impl Mark {
    /// Fractional positions land on the pixel that contains them.
    /// Non-finite positions give no mark.
    pub fn from_pos(pos: Pos2) -> Option<Self> {
        if !pos.x.is_finite() || !pos.y.is_finite() {
            return None;
        }
        Some(Self {
            x: pos.x.clamp(-COORD_LIMIT, COORD_LIMIT).floor() as i64,
            y: pos.y.clamp(-COORD_LIMIT, COORD_LIMIT).floor() as i64,
        })
    }

    /// Top-left corner of the `size`-wide square centered on this sample
    pub fn square_origin(&self, size: u32) -> (i64, i64) {
        let half = i64::from(size / 2);
        (self.x.saturating_sub(half), self.y.saturating_sub(half))
    }
}

/// Region in which a mark can still touch the surface: the surface grown by
/// one brush width on every side. Bounds are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleBounds {
    pub min_x: i64,
    pub min_y: i64,
    pub max_x: i64,
    pub max_y: i64,
}

impl SampleBounds {
    pub fn around(width: u32, height: u32, brush_size: u32) -> Self {
        let margin = i64::from(brush_size);
        Self {
            min_x: -margin,
            min_y: -margin,
            max_x: i64::from(width) + margin,
            max_y: i64::from(height) + margin,
        }
    }
}

/// Turns the pointer samples of one gesture into marks.
///
/// Without interpolation every sample is one mark. With interpolation the
/// pixels on the line from the previous sample are marked too, so fast
/// strokes stay connected. Only the part of that line inside the sample
/// bounds is walked.
#[derive(Debug, Clone, Default)]
pub struct MarkSampler {
    last: Option<Mark>,
    interpolate: bool,
}

impl MarkSampler {
    pub fn new(interpolate: bool) -> Self {
        Self { last: None, interpolate }
    }

    /// Forget the previous sample (new gesture)
    pub fn reset(&mut self) {
        self.last = None;
    }

    pub fn last(&self) -> Option<Mark> {
        self.last
    }

    /// Marks to stamp for a new sample, in stroke order. A non-finite sample
    /// is dropped and the previous one kept.
    pub fn sample(&mut self, pos: Pos2, bounds: &SampleBounds) -> Vec<Mark> {
        let Some(mark) = Mark::from_pos(pos) else {
            return Vec::new();
        };
        let marks = match self.last {
            Some(previous) if self.interpolate && previous != mark => {
                match clip_segment(previous, mark, bounds) {
                    Some((start, end)) => {
                        let mut marks = if start != previous { vec![start] } else { Vec::new() };
                        marks.extend(line_between(start, end));
                        marks
                    }
                    None => Vec::new(),
                }
            }
            _ => vec![mark],
        };
        self.last = Some(mark);
        marks
    }
}

/// Liang-Barsky clip of the segment against `bounds`
fn clip_segment(from: Mark, to: Mark, bounds: &SampleBounds) -> Option<(Mark, Mark)> {
    let (x0, y0) = (from.x as f64, from.y as f64);
    let dx = to.x as f64 - x0;
    let dy = to.y as f64 - y0;

    let (mut t0, mut t1) = (0.0_f64, 1.0_f64);
    let edges = [
        (-dx, x0 - bounds.min_x as f64),
        (dx, bounds.max_x as f64 - x0),
        (-dy, y0 - bounds.min_y as f64),
        (dy, bounds.max_y as f64 - y0),
    ];
    for (p, q) in edges {
        if p == 0.0 {
            if q < 0.0 {
                return None;
            }
            continue;
        }
        let r = q / p;
        if p < 0.0 {
            if r > t1 {
                return None;
            }
            t0 = t0.max(r);
        } else {
            if r < t0 {
                return None;
            }
            t1 = t1.min(r);
        }
    }

    let at = |t: f64| Mark {
        x: ((x0 + t * dx).round() as i64).clamp(bounds.min_x, bounds.max_x),
        y: ((y0 + t * dy).round() as i64).clamp(bounds.min_y, bounds.max_y),
    };
    let start = if t0 > 0.0 { at(t0) } else { from };
    let end = if t1 < 1.0 { at(t1) } else { to };
    Some((start, end))
}

/// Bresenham line from `from` (exclusive) to `to` (inclusive)
fn line_between(from: Mark, to: Mark) -> Vec<Mark> {
    let dx = (to.x - from.x).abs();
    let dy = -(to.y - from.y).abs();
    let step_x = if from.x < to.x { 1 } else { -1 };
    let step_y = if from.y < to.y { 1 } else { -1 };

    let mut points = Vec::new();
    let (mut x, mut y) = (from.x, from.y);
    let mut err = dx + dy;
    while (x, y) != (to.x, to.y) {
        let doubled = 2 * err;
        if doubled >= dy {
            err += dy;
            x += step_x;
        }
        if doubled <= dx {
            err += dx;
            y += step_y;
        }
        points.push(Mark { x, y });
    }
    points
}
