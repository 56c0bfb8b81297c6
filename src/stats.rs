//! Small numeric helpers shared by the adaptation rules and the analyzer.
use crate::*;

/// Replace a near-zero denominator by ±EPSILON, keeping its sign.
/// Exact zero maps to +EPSILON.
pub fn guard(denominator: f64) -> f64 {
    if denominator.abs() < EPSILON {
        if denominator.is_sign_negative() && denominator != 0.0 {
            -EPSILON
        } else {
            EPSILON
        }
    } else {
        denominator
    }
}

/// Arithmetic mean, or None for an empty sample.
pub fn mean<I>(values: I) -> Option<f64>
where
    I: IntoIterator<Item = f64>,
{
    let (sum, n) = values
        .into_iter()
        .fold((0.0, 0usize), |(sum, n), x| (sum + x, n + 1));
    match n {
        0 => None,
        n => Some(sum / n as f64),
    }
}

/// Median of a sample, averaging the middle pair for even sizes.
pub fn median(values: &mut [f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    values.sort_by(f64::total_cmp);
    let mid = values.len() / 2;
    match values.len() % 2 {
        0 => Some((values[mid - 1] + values[mid]) / 2.0),
        _ => Some(values[mid]),
    }
}

/// Elementwise median across equal-length series.
/// Columns beyond the shortest series are ignored.
pub fn columns(series: &[&[f64]]) -> Vec<f64> {
    let len = series.iter().map(|s| s.len()).min().unwrap_or(0);
    let ref mut column = Vec::with_capacity(series.len());
    (0..len)
        .map(|i| {
            column.clear();
            column.extend(series.iter().map(|s| s[i]));
            median(&mut column[..]).unwrap_or_default()
        })
        .collect()
}

/// Moving average in "valid" mode: one output per full window,
/// `len - window + 1` values. Empty when the window does not fit.
pub fn moving_average(values: &[f64], window: usize) -> Vec<f64> {
    if window == 0 || values.len() < window {
        return Vec::new();
    }
    let mut sum = values[..window].iter().sum::<f64>();
    let mut out = Vec::with_capacity(values.len() - window + 1);
    out.push(sum / window as f64);
    for i in window..values.len() {
        sum += values[i] - values[i - window];
        out.push(sum / window as f64);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guard_keeps_regular_denominators() {
        assert_eq!(guard(0.5), 0.5);
        assert_eq!(guard(-0.5), -0.5);
        assert_eq!(guard(EPSILON), EPSILON);
        assert_eq!(guard(-EPSILON), -EPSILON);
    }

    #[test]
    fn guard_substitutes_tiny_denominators() {
        assert_eq!(guard(0.0), EPSILON);
        assert_eq!(guard(-0.0), EPSILON);
        assert_eq!(guard(1e-12), EPSILON);
        assert_eq!(guard(-1e-12), -EPSILON);
        assert_eq!(guard(EPSILON / 2.0), EPSILON);
    }

    #[test]
    fn means() {
        assert_eq!(mean(Vec::new()), None);
        assert_eq!(mean([2.0]), Some(2.0));
        assert_eq!(mean([1.0, 2.0, 3.0, 6.0]), Some(3.0));
    }

    #[test]
    fn medians() {
        assert_eq!(median(&mut []), None);
        assert_eq!(median(&mut [3.0, 1.0, 2.0]), Some(2.0));
        assert_eq!(median(&mut [4.0, 1.0, 3.0, 2.0]), Some(2.5));
    }

    #[test]
    fn elementwise_median_trims_to_shortest() {
        let a = [1.0, 10.0, 100.0, 7.0];
        let b = [2.0, 20.0, 200.0];
        let c = [3.0, 30.0, 300.0];
        assert_eq!(columns(&[&a[..], &b[..], &c[..]]), vec![2.0, 20.0, 200.0]);
        assert!(columns(&[]).is_empty());
    }

    #[test]
    fn moving_average_valid_mode() {
        let values = [1.0, 2.0, 3.0, 4.0, 5.0];
        assert_eq!(moving_average(&values, 2), vec![1.5, 2.5, 3.5, 4.5]);
        assert_eq!(moving_average(&values, 5), vec![3.0]);
        assert!(moving_average(&values, 6).is_empty());
        assert!(moving_average(&values, 0).is_empty());
    }
}
