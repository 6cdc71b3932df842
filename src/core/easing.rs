//! Cubic-Bézier-Easing: Fortschritt (Zeit-Ratio) → eingeschwungene Ratio.
//!
//! Kontrollpunkte (0,0), (x1,y1), (x2,y2), (1,1). Für eine Zeit-Ratio `x` wird
//! zunächst der Kurvenparameter `t` mit `X(t) = x` gesucht (Sample-Tabelle als
//! Startwert, dann Newton-Raphson oder Bisektion) und anschließend `Y(t)` geliefert.

use super::BezierValue;

const NEWTON_ITERATIONS: usize = 4;
const NEWTON_MIN_SLOPE: f32 = 0.001;
const SUBDIVISION_PRECISION: f32 = 1e-7;
const SUBDIVISION_MAX_ITERATIONS: usize = 10;

const SPLINE_TABLE_SIZE: usize = 11;
const SAMPLE_STEP_SIZE: f32 = 1.0 / (SPLINE_TABLE_SIZE - 1) as f32;

/// Polynomkoeffizienten einer Achse: `((a·t + b)·t + c)·t`
#[derive(Debug, Clone, Copy)]
struct Axis {
    a: f32,
    b: f32,
    c: f32,
}

impl Axis {
    fn new(p1: f32, p2: f32) -> Self {
        Self {
            a: 1.0 - 3.0 * p2 + 3.0 * p1,
            b: 3.0 * p2 - 6.0 * p1,
            c: 3.0 * p1,
        }
    }

    fn sample(&self, t: f32) -> f32 {
        ((self.a * t + self.b) * t + self.c) * t
    }

    fn slope(&self, t: f32) -> f32 {
        3.0 * self.a * t * t + 2.0 * self.b * t + self.c
    }
}

/// Vorberechnete Easing-Funktion zu einem `BezierValue`.
#[derive(Debug, Clone)]
pub struct CubicBezierEasing {
    x: Axis,
    y: Axis,
    samples: [f32; SPLINE_TABLE_SIZE],
    linear: bool,
}

impl CubicBezierEasing {
    /// Baut die Easing-Funktion auf.
    ///
    /// X-Komponenten außerhalb [0, 1] würden `X(t)` nicht-monoton machen und
    /// werden deshalb auf [0, 1] begrenzt.
    pub fn new(value: &BezierValue) -> Self {
        let x1 = value.x1().clamp(0.0, 1.0);
        let x2 = value.x2().clamp(0.0, 1.0);
        let (y1, y2) = (value.y1(), value.y2());

        let x = Axis::new(x1, x2);
        let mut samples = [0.0; SPLINE_TABLE_SIZE];
        for (i, sample) in samples.iter_mut().enumerate() {
            *sample = x.sample(i as f32 * SAMPLE_STEP_SIZE);
        }

        Self {
            x,
            y: Axis::new(y1, y2),
            samples,
            linear: x1 == y1 && x2 == y2,
        }
    }

    /// Eingeschwungene Ratio für eine Zeit-Ratio.
    ///
    /// Eingaben knapp außerhalb [0, 1] (Rundung am Animationsende) werden
    /// begrenzt; das Ergebnis darf bei Overshoot-Kurven [0, 1] verlassen.
    pub fn ease(&self, ratio: f32) -> f32 {
        if self.linear {
            return ratio.clamp(0.0, 1.0);
        }
        if ratio <= 0.0 {
            return 0.0;
        }
        if ratio >= 1.0 {
            return 1.0;
        }
        self.y.sample(self.t_for_x(ratio))
    }

    /// Gleichmäßig verteilte Stützstellen `ease(i / count)` für `i = 0..=count`.
    pub fn trace(&self, count: usize) -> Vec<f32> {
        if count == 0 {
            return vec![self.ease(0.0)];
        }
        (0..=count)
            .map(|i| self.ease(i as f32 / count as f32))
            .collect()
    }

    fn t_for_x(&self, x: f32) -> f32 {
        let last_sample = SPLINE_TABLE_SIZE - 1;
        let mut interval_start = 0.0;
        let mut current = 1;
        while current != last_sample && self.samples[current] <= x {
            interval_start += SAMPLE_STEP_SIZE;
            current += 1;
        }
        current -= 1;

        let span = self.samples[current + 1] - self.samples[current];
        let dist = if span.abs() > f32::EPSILON {
            (x - self.samples[current]) / span
        } else {
            0.0
        };
        let guess = interval_start + dist * SAMPLE_STEP_SIZE;

        let initial_slope = self.x.slope(guess);
        if initial_slope >= NEWTON_MIN_SLOPE {
            self.newton_raphson(x, guess)
        } else if initial_slope == 0.0 {
            guess
        } else {
            self.binary_subdivide(x, interval_start, interval_start + SAMPLE_STEP_SIZE)
        }
    }

    fn newton_raphson(&self, x: f32, mut guess: f32) -> f32 {
        for _ in 0..NEWTON_ITERATIONS {
            let slope = self.x.slope(guess);
            if slope == 0.0 {
                return guess;
            }
            guess -= (self.x.sample(guess) - x) / slope;
        }
        guess
    }

    fn binary_subdivide(&self, x: f32, mut lo: f32, mut hi: f32) -> f32 {
        let mut t = lo;
        for _ in 0..SUBDIVISION_MAX_ITERATIONS {
            t = lo + (hi - lo) / 2.0;
            let diff = self.x.sample(t) - x;
            if diff > 0.0 {
                hi = t;
            } else {
                lo = t;
            }
            if diff.abs() <= SUBDIVISION_PRECISION {
                break;
            }
        }
        t
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_linear_is_identity() {
        let easing = CubicBezierEasing::new(&BezierValue::LINEAR);
        for i in 0..=10 {
            let x = i as f32 / 10.0;
            assert_abs_diff_eq!(easing.ease(x), x, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_endpoints_are_exact() {
        let easing = CubicBezierEasing::new(&BezierValue::new(0.68, -0.55, 0.27, 1.55));
        assert_eq!(easing.ease(0.0), 0.0);
        assert_eq!(easing.ease(1.0), 1.0);
    }

    #[test]
    fn test_ease_in_out_is_point_symmetric() {
        let easing = CubicBezierEasing::new(&BezierValue::new(0.42, 0.0, 0.58, 1.0));
        assert_abs_diff_eq!(easing.ease(0.5), 0.5, epsilon = 1e-4);
        for i in 1..10 {
            let x = i as f32 / 10.0;
            assert_abs_diff_eq!(easing.ease(x) + easing.ease(1.0 - x), 1.0, epsilon = 1e-3);
        }
    }

    #[test]
    fn test_ease_matches_parametric_curve() {
        let value = BezierValue::new(0.25, 0.1, 0.25, 1.0);
        let easing = CubicBezierEasing::new(&value);
        let (x, y) = (Axis::new(0.25, 0.25), Axis::new(0.1, 1.0));
        for i in 1..20 {
            let t = i as f32 / 20.0;
            assert_abs_diff_eq!(easing.ease(x.sample(t)), y.sample(t), epsilon = 1e-3);
        }
    }

    #[test]
    fn test_back_curve_overshoots() {
        let easing = CubicBezierEasing::new(&BezierValue::new(0.68, -0.55, 0.27, 1.55));
        let trace = easing.trace(20);
        assert!(trace.iter().any(|v| *v < 0.0));
        assert!(trace.iter().any(|v| *v > 1.0));
    }

    #[test]
    fn test_ratio_slightly_outside_unit_range() {
        let easing = CubicBezierEasing::new(&BezierValue::new(0.18, 0.89, 0.32, 1.28));
        assert_eq!(easing.ease(1.0 + f32::EPSILON), 1.0);
        assert_eq!(easing.ease(-f32::EPSILON), 0.0);
        assert!(easing.ease(0.999_999).is_finite());
    }

    #[test]
    fn test_trace_has_count_plus_one_samples() {
        let easing = CubicBezierEasing::new(&BezierValue::EASE);
        let trace = easing.trace(20);
        assert_eq!(trace.len(), 21);
        assert_eq!(trace[0], 0.0);
        assert_eq!(trace[20], 1.0);
        assert!(trace.windows(2).all(|w| w[1] >= w[0]));
    }

    #[test]
    fn test_flat_end_stays_in_range() {
        // x1 = x2 = 1 → X'(t) ≈ 0 nahe t = 1
        let easing = CubicBezierEasing::new(&BezierValue::new(1.0, 0.0, 1.0, 1.0));
        let v = easing.ease(0.999_999);
        assert!(v > 0.9 && v <= 1.0 + 1e-4, "v = {v}");
    }
}
