//! Beta distribution posterior over a vote share, via `statrs`.
//!
//! Prior: Beta(1, 1) — uniform, no prior bias.
//! Posterior: Beta(1+k, 1+n-k) where k = winner votes, n = total votes.
//! The interval is reporting-only; gate decisions use the raw share.

use statrs::distribution::{Beta, ContinuousCDF};

/// Posterior (alpha, beta) for `k` winner votes out of `n` total.
pub fn posterior_params(winner_votes: u64, total_votes: u64) -> (f64, f64) {
    let k = winner_votes as f64;
    let n = total_votes as f64;
    (1.0 + k, 1.0 + (n - k).max(0.0))
}

/// Compute the credible interval for a Beta distribution.
///
/// Uses the inverse CDF to find the central interval containing `level`
/// probability mass (e.g. 0.95). Returns (low, high); guards against
/// invalid parameters and numerical issues by widening to (0, 1).
pub fn credible_interval(alpha: f64, beta_param: f64, level: f64) -> (f64, f64) {
    if alpha <= 0.0 || beta_param <= 0.0 || !alpha.is_finite() || !beta_param.is_finite() {
        return (0.0, 1.0);
    }

    let tail = (1.0 - level) / 2.0;

    match Beta::new(alpha, beta_param) {
        Ok(dist) => {
            let low = dist.inverse_cdf(tail);
            let high = dist.inverse_cdf(1.0 - tail);

            let low = if low.is_finite() { low.clamp(0.0, 1.0) } else { 0.0 };
            let high = if high.is_finite() { high.clamp(0.0, 1.0) } else { 1.0 };

            (low, high)
        }
        Err(_) => (0.0, 1.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn posterior_params_from_votes() {
        let (a, b) = posterior_params(2, 3);
        assert_eq!(a, 3.0); // 1 + 2
        assert_eq!(b, 2.0); // 1 + (3 - 2)
    }

    #[test]
    fn uniform_interval_is_wide() {
        let (low, high) = credible_interval(1.0, 1.0, 0.95);
        assert!(low < 0.1);
        assert!(high > 0.9);
    }

    #[test]
    fn interval_narrows_with_more_votes() {
        let (low1, high1) = credible_interval(3.0, 2.0, 0.95);
        let (low2, high2) = credible_interval(21.0, 11.0, 0.95);
        assert!(high2 - low2 < high1 - low1);
    }

    #[test]
    fn invalid_params_widen_to_unit_interval() {
        assert_eq!(credible_interval(0.0, 0.0, 0.95), (0.0, 1.0));
        assert_eq!(credible_interval(f64::NAN, 1.0, 0.95), (0.0, 1.0));
    }
}
