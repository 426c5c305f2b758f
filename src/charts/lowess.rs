//! Locally weighted scatterplot smoothing.
//!
//! Each point is fitted by a weighted linear regression over its nearest
//! `frac * n` neighbours (tricube weights), then refitted `iterations`
//! times with bisquare robustness weights derived from the residuals.

/// Neighbourhood fraction used for trend lines.
pub const DEFAULT_FRAC: f64 = 2.0 / 3.0;
/// Robustifying passes used for trend lines.
pub const DEFAULT_ITERATIONS: usize = 3;

/// Smooth `(x, y)` pairs. The result is sorted by `x`, one fitted value per
/// input point.
pub fn lowess(points: &[(f64, f64)], frac: f64, iterations: usize) -> Vec<(f64, f64)> {
    let mut sorted: Vec<(f64, f64)> = points
        .iter()
        .copied()
        .filter(|(x, y)| x.is_finite() && y.is_finite())
        .collect();
    sorted.sort_by(|a, b| a.0.total_cmp(&b.0));

    let n = sorted.len();
    if n < 2 {
        return sorted;
    }

    let xs: Vec<f64> = sorted.iter().map(|p| p.0).collect();
    let ys: Vec<f64> = sorted.iter().map(|p| p.1).collect();
    let neighbours = ((frac * n as f64).ceil() as usize).clamp(2, n);

    let mut robustness = vec![1.0; n];
    let mut fitted = vec![0.0; n];

    for pass in 0..=iterations {
        for i in 0..n {
            fitted[i] = fit_at(&xs, &ys, &robustness, i, neighbours);
        }

        if pass == iterations {
            break;
        }

        let residuals: Vec<f64> = ys.iter().zip(&fitted).map(|(y, f)| y - f).collect();
        let scale = median(residuals.iter().map(|r| r.abs()).collect());
        if scale <= f64::EPSILON {
            break;
        }
        for (weight, residual) in robustness.iter_mut().zip(&residuals) {
            *weight = bisquare(residual / (6.0 * scale));
        }
    }

    xs.into_iter().zip(fitted).collect()
}

fn fit_at(xs: &[f64], ys: &[f64], robustness: &[f64], i: usize, neighbours: usize) -> f64 {
    let x0 = xs[i];
    let mut distances: Vec<f64> = xs.iter().map(|x| (x - x0).abs()).collect();
    distances.sort_by(f64::total_cmp);
    let radius = distances[neighbours - 1];

    let (mut sw, mut swx, mut swy, mut swxx, mut swxy) = (0.0, 0.0, 0.0, 0.0, 0.0);
    for j in 0..xs.len() {
        let distance = (xs[j] - x0).abs();
        let local = if radius > 0.0 {
            tricube(distance / radius)
        } else if distance == 0.0 {
            1.0
        } else {
            0.0
        };
        let w = local * robustness[j];
        if w <= 0.0 {
            continue;
        }
        sw += w;
        swx += w * xs[j];
        swy += w * ys[j];
        swxx += w * xs[j] * xs[j];
        swxy += w * xs[j] * ys[j];
    }

    if sw <= 0.0 {
        return ys[i];
    }
    let denom = sw * swxx - swx * swx;
    if denom.abs() <= f64::EPSILON * sw * sw {
        return swy / sw;
    }
    let slope = (sw * swxy - swx * swy) / denom;
    let intercept = (swy - slope * swx) / sw;
    intercept + slope * x0
}

fn tricube(u: f64) -> f64 {
    if u >= 1.0 {
        0.0
    } else {
        (1.0 - u.powi(3)).powi(3)
    }
}

fn bisquare(u: f64) -> f64 {
    if u.abs() >= 1.0 {
        0.0
    } else {
        (1.0 - u * u).powi(2)
    }
}

fn median(mut values: Vec<f64>) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.sort_by(f64::total_cmp);
    let mid = values.len() / 2;
    if values.len() % 2 == 0 {
        (values[mid - 1] + values[mid]) / 2.0
    } else {
        values[mid]
    }
}
