// File: crates/tidemark-core/src/grid.rs
// Summary: Tick layout helpers: 1-2-5 tick steps, tick values and domain niceing.

/// Tick spacing for roughly `count` intervals over `[start, stop]`.
///
/// Steps are 1, 2 or 5 times a power of ten. Sub-unit steps are returned as
/// `Step::Inverse(k)` (step = 1/k) so tick values can be computed as `i / k`
/// without accumulating float error.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Step {
    Whole(f64),
    Inverse(f64),
}

impl Step {
    pub fn value(&self) -> f64 {
        match *self {
            Step::Whole(s) => s,
            Step::Inverse(k) => 1.0 / k,
        }
    }
}

const E10: f64 = 7.0710678118654755; // sqrt(50)
const E5: f64 = 3.1622776601683795; // sqrt(10)
const E2: f64 = std::f64::consts::SQRT_2;

pub fn tick_increment(start: f64, stop: f64, count: usize) -> Option<Step> {
    if count == 0 || !(stop > start) {
        return None;
    }
    let n = count as f64;
    let span = stop - start;
    // bounds near f64::MAX of opposite sign overflow the span
    let step = if span.is_finite() { span / n } else { stop / n - start / n };
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= E10 {
        10.0
    } else if error >= E5 {
        5.0
    } else if error >= E2 {
        2.0
    } else {
        1.0
    };
    let step = if power >= 0.0 {
        Step::Whole(factor * 10f64.powf(power))
    } else {
        Step::Inverse(10f64.powf(-power) / factor)
    };
    step.value().is_normal().then_some(step)
}

/// Round tick values inside `[start, stop]` (inclusive), ascending.
pub fn ticks(start: f64, stop: f64, count: usize) -> Vec<f64> {
    if start == stop {
        return if count > 0 && start.is_finite() { vec![start] } else { Vec::new() };
    }
    let (lo, hi, reverse) = if stop < start { (stop, start, true) } else { (start, stop, false) };
    let mut out = match tick_increment(lo, hi, count) {
        Some(Step::Whole(s)) => {
            let i0 = (lo / s).ceil() as i64;
            let i1 = (hi / s).floor() as i64;
            (i0..=i1).map(|i| i as f64 * s).collect::<Vec<_>>()
        }
        Some(Step::Inverse(k)) => {
            let i0 = (lo * k).ceil() as i64;
            let i1 = (hi * k).floor() as i64;
            (i0..=i1).map(|i| i as f64 / k).collect::<Vec<_>>()
        }
        None => Vec::new(),
    };
    if reverse {
        out.reverse();
    }
    out
}

/// Extend `[start, stop]` outward to tick boundaries. Stops once the step settles.
pub fn nice(mut start: f64, mut stop: f64, count: usize) -> (f64, f64) {
    let mut prev: Option<Step> = None;
    for _ in 0..10 {
        let Some(step) = tick_increment(start, stop, count) else { break };
        if prev == Some(step) {
            break;
        }
        match step {
            Step::Whole(s) => {
                start = (start / s).floor() * s;
                stop = (stop / s).ceil() * s;
            }
            Step::Inverse(k) => {
                start = (start * k).floor() / k;
                stop = (stop * k).ceil() / k;
            }
        }
        prev = Some(step);
    }
    (start, stop)
}
