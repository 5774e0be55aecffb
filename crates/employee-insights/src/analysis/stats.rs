//! Descriptive statistics over `f64` slices.
//!
//! Undefined results are reported as errors instead of NaN: an empty slice is
//! [`StatsError::Empty`], and dispersion or correlation over fewer than two
//! observations (or over a constant series) is [`StatsError::InsufficientVariance`].

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum StatsError {
    #[error("no observations")]
    Empty,
    #[error("insufficient variance across {observations} observation(s)")]
    InsufficientVariance { observations: usize },
    #[error("series lengths differ ({left} vs {right})")]
    LengthMismatch { left: usize, right: usize },
}

/// Arithmetic mean with compensated summation.
pub fn mean(data: &[f64]) -> Result<f64, StatsError> {
    if data.is_empty() {
        return Err(StatsError::Empty);
    }
    Ok(compensated_sum(data) / data.len() as f64)
}

/// Sample variance (denominator `n - 1`) using Welford's online update.
pub fn sample_variance(data: &[f64]) -> Result<f64, StatsError> {
    if data.len() < 2 {
        return Err(StatsError::InsufficientVariance {
            observations: data.len(),
        });
    }

    let mut count = 0.0_f64;
    let mut running_mean = 0.0_f64;
    let mut m2 = 0.0_f64;
    for &value in data {
        count += 1.0;
        let delta = value - running_mean;
        running_mean += delta / count;
        m2 += delta * (value - running_mean);
    }

    Ok(m2 / (count - 1.0))
}

pub fn sample_std_dev(data: &[f64]) -> Result<f64, StatsError> {
    sample_variance(data).map(f64::sqrt)
}

/// Pearson correlation coefficient, clamped to `[-1, 1]`.
pub fn pearson(x: &[f64], y: &[f64]) -> Result<f64, StatsError> {
    if x.len() != y.len() {
        return Err(StatsError::LengthMismatch {
            left: x.len(),
            right: y.len(),
        });
    }
    let observations = x.len();
    if observations < 2 || is_constant(x) || is_constant(y) {
        return Err(StatsError::InsufficientVariance { observations });
    }

    let mean_x = mean(x)?;
    let mean_y = mean(y)?;
    let (mut sxy, mut sxx, mut syy) = (0.0_f64, 0.0_f64, 0.0_f64);
    for (&xi, &yi) in x.iter().zip(y) {
        let dx = xi - mean_x;
        let dy = yi - mean_y;
        sxy += dx * dy;
        sxx += dx * dx;
        syy += dy * dy;
    }

    let denominator = (sxx * syy).sqrt();
    if denominator == 0.0 || !denominator.is_finite() {
        return Err(StatsError::InsufficientVariance { observations });
    }

    Ok((sxy / denominator).clamp(-1.0, 1.0))
}

// Decided on the raw values: a rounded mean can leave non-zero residuals for a constant series.
fn is_constant(data: &[f64]) -> bool {
    data.split_first()
        .map_or(true, |(first, rest)| rest.iter().all(|value| value == first))
}

// Neumaier variant: also compensates when the addend outweighs the running sum.
fn compensated_sum(data: &[f64]) -> f64 {
    let mut sum = 0.0_f64;
    let mut compensation = 0.0_f64;
    for &value in data {
        let total = sum + value;
        if sum.abs() >= value.abs() {
            compensation += (sum - total) + value;
        } else {
            compensation += (value - total) + sum;
        }
        sum = total;
    }
    sum + compensation
}
