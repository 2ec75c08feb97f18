//! Series preparation shared by the backends.

use std::ops::Range;

use log::debug;

/// Fraction of the data span added on each side of an axis
const AXIS_MARGIN: f64 = 0.05;
/// Largest magnitude an axis bound takes when the data span overflows f64
const AXIS_LIMIT: f64 = f64::MAX / 4.0;

/// Trim both series to the length of the shorter one.
pub(super) fn truncate<'a>(x: &'a [f64], y: &'a [f64]) -> (&'a [f64], &'a [f64]) {
    if x.len() != y.len() {
        debug!(
            "Series lengths differ ({} vs {}), plotting the first {} points",
            x.len(),
            y.len(),
            x.len().min(y.len())
        );
    }
    let n = x.len().min(y.len());
    (&x[..n], &y[..n])
}

/// Split the points into runs of finite coordinates.
pub(super) fn segments(x: &[f64], y: &[f64]) -> Vec<Vec<(f64, f64)>> {
    let (x, y) = truncate(x, y);
    let mut segments = Vec::new();
    let mut current = Vec::new();

    for (&sx, &sy) in x.iter().zip(y) {
        if sx.is_finite() && sy.is_finite() {
            current.push((sx, sy));
        } else if !current.is_empty() {
            segments.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        segments.push(current);
    }
    segments
}

/// Axis range covering the finite values with a small margin.
///
/// A single distinct value widens by one unit each way (or by the margin
/// fraction of its magnitude, once one unit is lost to rounding); no values at
/// all yields `0..1`. Both bounds and the span between them are always finite:
/// plotters never finishes laying out ticks over an infinite range.
pub(super) fn axis_range(values: impl IntoIterator<Item = f64>) -> Range<f64> {
    let bounds = values
        .into_iter()
        .filter(|v| v.is_finite())
        .fold(None, |acc: Option<(f64, f64)>, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        });

    let (lo, hi) = match bounds {
        None => return 0.0..1.0,
        Some(bounds) => bounds,
    };

    let margin = if lo == hi {
        1.0f64.max(lo.abs() * AXIS_MARGIN)
    } else {
        hi * AXIS_MARGIN - lo * AXIS_MARGIN
    };
    let padded = (lo - margin)..(hi + margin);
    if is_finite_range(&padded) {
        return padded;
    }

    // Margin overflowed: keep whichever side still fits.
    let start = if padded.start.is_finite() { padded.start } else { lo };
    let end = if padded.end.is_finite() { padded.end } else { hi };
    if start < end && is_finite_range(&(start..end)) {
        return start..end;
    }
    if lo < hi && is_finite_range(&(lo..hi)) {
        return lo..hi;
    }

    debug!("Axis span {:e}..{:e} overflows, clamping to ±{:e}", lo, hi, AXIS_LIMIT);
    lo.max(-AXIS_LIMIT)..hi.min(AXIS_LIMIT)
}

fn is_finite_range(range: &Range<f64>) -> bool {
    range.start.is_finite() && range.end.is_finite() && (range.end - range.start).is_finite()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_to_shorter() {
        let x = [0.0, 1.0, 2.0];
        let y = [5.0, 6.0];
        let (tx, ty) = truncate(&x, &y);
        assert_eq!(tx, &[0.0, 1.0]);
        assert_eq!(ty, &[5.0, 6.0]);
    }

    #[test]
    fn test_segments_split_on_gaps() {
        let x = [0.0, 1.0, 2.0, 3.0, 4.0, 5.0];
        let y = [1.0, 2.0, f64::NAN, 4.0, f64::INFINITY, 6.0];
        let segments = segments(&x, &y);
        assert_eq!(
            segments,
            vec![vec![(0.0, 1.0), (1.0, 2.0)], vec![(3.0, 4.0)], vec![(5.0, 6.0)]]
        );
    }

    #[test]
    fn test_segments_empty() {
        assert!(segments(&[], &[]).is_empty());
        assert!(segments(&[f64::NAN], &[1.0]).is_empty());
    }

    #[test]
    fn test_axis_range_with_margin() {
        let range = axis_range(vec![0.0, 10.0, f64::NAN, 5.0]);
        assert!((range.start + 0.5).abs() < 1e-12);
        assert!((range.end - 10.5).abs() < 1e-12);
    }

    #[test]
    fn test_axis_range_degenerate() {
        assert_eq!(axis_range(vec![3.0, 3.0]), 2.0..4.0);
        assert_eq!(axis_range(Vec::new()), 0.0..1.0);
        assert_eq!(axis_range(vec![f64::NAN]), 0.0..1.0);
    }

    #[test]
    fn test_axis_range_degenerate_large_magnitude() {
        let range = axis_range(vec![1e20]);
        assert!(range.start < 1e20 && range.end > 1e20);
        assert!(((range.end - range.start) / 1e19 - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_axis_range_margin_overflow_keeps_data() {
        let range = axis_range(vec![0.0, 1.79e308]);
        assert_eq!(range.end, 1.79e308);
        assert!(range.start <= 0.0);
        assert!((range.end - range.start).is_finite());
    }

    #[test]
    fn test_axis_range_finite_at_f64_limits() {
        let inputs = [
            vec![0.0, f64::MAX],
            vec![f64::MIN, 0.0],
            vec![f64::MIN, f64::MAX],
            vec![-1.7e308, 1.7e308],
            vec![f64::MAX],
            vec![f64::MIN],
            vec![f64::MAX, f64::MAX, f64::INFINITY],
        ];
        for values in inputs {
            let range = axis_range(values.clone());
            assert!(range.start.is_finite(), "{:?} -> {:?}", values, range);
            assert!(range.end.is_finite(), "{:?} -> {:?}", values, range);
            assert!((range.end - range.start).is_finite(), "{:?} -> {:?}", values, range);
            assert!(range.start < range.end, "{:?} -> {:?}", values, range);
        }
    }
}
