/// `num` evenly spaced values from `start` to `stop`; the last one is `stop` exactly.
pub fn linspace(start: f64, stop: f64, num: usize) -> Vec<f64> {
    match num {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (num - 1) as f64;
            let mut values: Vec<f64> = (0..num - 1).map(|i| start + step * i as f64).collect();
            values.push(stop);
            values
        }
    }
}

/// Log-paper ticks: every `k * 10^n` (`k` in `1..=9`) inside `[lo, hi]`, for
/// decades `floor(log10(lo))` through `ceil(log10(hi))`, ascending.
///
/// Returns nothing unless `0 < lo <= hi` and both bounds are finite.
pub fn log_ticks(lo: f64, hi: f64) -> Vec<f64> {
    if !(lo.is_finite() && hi.is_finite() && lo > 0.0 && lo <= hi) {
        return Vec::new();
    }
    let first = lo.log10().floor() as i32;
    let last = hi.log10().ceil() as i32;

    let mut ticks = Vec::new();
    for exponent in first..=last {
        for k in 1..10u32 {
            let value = decade_value(k, exponent);
            if value >= lo && value <= hi {
                ticks.push(value);
            }
        }
    }
    ticks
}

// Dividing for negative exponents keeps 0.02, 0.1, ... identical to their literals.
fn decade_value(k: u32, exponent: i32) -> f64 {
    if exponent >= 0 {
        f64::from(k) * 10f64.powi(exponent)
    } else {
        f64::from(k) / 10f64.powi(-exponent)
    }
}
