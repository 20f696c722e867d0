/// Headroom above (and below, for negative data) the tallest bar so that
/// annotations stay inside the plot.
const PADDING_RATIO: f64 = 0.1;
const TARGET_TICKS: f64 = 5.0;

/// Linear mapping from data values to SVG y coordinates. Zero is always in range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scale {
    pub min: f64,
    pub max: f64,
    top: f64,
    height: f64,
}

impl Scale {
    pub fn new(values: impl IntoIterator<Item = f64>, top: f64, height: f64) -> Self {
        let (mut min, mut max) = values
            .into_iter()
            .filter(|v| v.is_finite())
            .fold((0.0_f64, 0.0_f64), |(lo, hi), v| (lo.min(v), hi.max(v)));

        if max - min <= 0.0 {
            max = 1.0;
        }
        let padding = (max - min) * PADDING_RATIO;
        if max > 0.0 {
            max += padding;
        }
        if min < 0.0 {
            min -= padding;
        }

        Self {
            min,
            max,
            top,
            height,
        }
    }

    pub fn y(&self, value: f64) -> f64 {
        self.top + (self.max - value) / (self.max - self.min) * self.height
    }

    pub fn ticks(&self) -> Vec<f64> {
        let step = nice_step((self.max - self.min) / TARGET_TICKS);
        let first = (self.min / step).ceil() as i64;
        let last = (self.max / step).floor() as i64;
        (first..=last).map(|k| k as f64 * step).collect()
    }
}

/// Rounds a raw tick step up to 1, 2 or 5 times a power of ten.
pub fn nice_step(raw: f64) -> f64 {
    if !(raw.is_finite() && raw > 0.0) {
        return 1.0;
    }
    let magnitude = 10_f64.powi(raw.log10().floor() as i32);
    let normalized = raw / magnitude;
    let nice = if normalized <= 1.0 {
        1.0
    } else if normalized <= 2.0 {
        2.0
    } else if normalized <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * magnitude
}
