//! Expected value of a bet against several opponents who each fold
//! independently, and the fold frequency that makes the bet break even.

/// Search interval for [`calc_fold_equity`].
pub const FOLD_EQUITY_BRACKET: (f64, f64) = (0.0, 0.9999);

const TOLERANCE: f64 = 1e-10;
const MAX_ITERATIONS: u32 = 200;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum EvError {
    #[error("{name} out of range: {value}")]
    OutOfRange { name: &'static str, value: f64 },
    #[error("player count must be at least 2, got {0}")]
    PlayerCount(u32),
    #[error("no root in [{lo}, {hi}]: function does not change sign")]
    NoConvergence { lo: f64, hi: f64 },
}

fn check_probability(name: &'static str, value: f64) -> Result<(), EvError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(EvError::OutOfRange { name, value })
    }
}

fn check_inputs(showdown_equity: f64, pot_fraction: f64, player_count: u32) -> Result<(), EvError> {
    check_probability("showdown equity", showdown_equity)?;
    if !(pot_fraction.is_finite() && pot_fraction >= 0.0) {
        return Err(EvError::OutOfRange { name: "pot fraction", value: pot_fraction });
    }
    if player_count < 2 {
        return Err(EvError::PlayerCount(player_count));
    }
    Ok(())
}

/// Each of the `m` opponents calls with probability `1 - f`. With `c` callers
/// the hero wins with probability `se^c`, so summing the binomial over `c`
/// collapses to `(1 - (1 - f)·(1 - se))^m`: the chance that every opponent
/// either folds or is beaten.
fn ev_unchecked(showdown_equity: f64, pot_fraction: f64, fold_equity: f64, player_count: u32) -> f64 {
    let opponents = f64::from(player_count - 1);
    let survive = 1.0 - (1.0 - fold_equity) * (1.0 - showdown_equity);
    pot_fraction * (2.0 * survive.powf(opponents) - 1.0)
}

/// Expected value, in pot-fraction units, of risking `pot_fraction` against
/// `player_count - 1` opponents.
///
/// The stake is won when everyone folds or when the hero beats every caller,
/// and lost otherwise.
///
/// ```
/// use holdem_equity::ev::calc_ev;
///
/// // Heads up, coin flip, nobody folds: break even
/// assert!(calc_ev(0.5, 1.0, 0.0, 2).unwrap().abs() < 1e-12);
/// // Guaranteed win
/// assert_eq!(calc_ev(1.0, 0.75, 0.3, 6).unwrap(), 0.75);
/// ```
pub fn calc_ev(
    showdown_equity: f64,
    pot_fraction: f64,
    fold_equity: f64,
    player_count: u32,
) -> Result<f64, EvError> {
    check_inputs(showdown_equity, pot_fraction, player_count)?;
    check_probability("fold equity", fold_equity)?;
    Ok(ev_unchecked(showdown_equity, pot_fraction, fold_equity, player_count))
}

/// Smallest per-opponent fold frequency at which the bet breaks even.
///
/// Returns 0 when the bet is already profitable with nobody folding, and
/// [`EvError::NoConvergence`] when even folding at the top of
/// [`FOLD_EQUITY_BRACKET`] is not enough.
///
/// ```
/// use holdem_equity::ev::{calc_ev, calc_fold_equity};
///
/// assert_eq!(calc_fold_equity(0.6, 1.0, 2).unwrap(), 0.0);
/// let f = calc_fold_equity(0.3, 1.0, 3).unwrap();
/// assert!(calc_ev(0.3, 1.0, f, 3).unwrap().abs() < 1e-8);
/// ```
pub fn calc_fold_equity(showdown_equity: f64, pot_fraction: f64, player_count: u32) -> Result<f64, EvError> {
    check_inputs(showdown_equity, pot_fraction, player_count)?;
    if ev_unchecked(showdown_equity, pot_fraction, 0.0, player_count) >= 0.0 {
        return Ok(0.0);
    }
    let (lo, hi) = FOLD_EQUITY_BRACKET;
    bisect(|f| ev_unchecked(showdown_equity, pot_fraction, f, player_count), lo, hi, TOLERANCE, MAX_ITERATIONS)
}

/// Root of `f` on `[lo, hi]` by bisection.
///
/// `f(lo)` and `f(hi)` must differ in sign (or one of them be zero). Stops once
/// the bracket is narrower than `2 * tol`; fails if that takes more than
/// `max_iter` halvings.
pub fn bisect<F>(f: F, mut lo: f64, mut hi: f64, tol: f64, max_iter: u32) -> Result<f64, EvError>
where
    F: Fn(f64) -> f64,
{
    let mut f_lo = f(lo);
    let f_hi = f(hi);
    if f_lo == 0.0 {
        return Ok(lo);
    }
    if f_hi == 0.0 {
        return Ok(hi);
    }
    if f_lo.signum() == f_hi.signum() || f_lo.is_nan() || f_hi.is_nan() {
        return Err(EvError::NoConvergence { lo, hi });
    }

    for _ in 0..max_iter {
        let mid = lo + (hi - lo) / 2.0;
        if (hi - lo) / 2.0 < tol {
            return Ok(mid);
        }
        let f_mid = f(mid);
        if f_mid == 0.0 {
            return Ok(mid);
        }
        if f_mid.signum() == f_lo.signum() {
            lo = mid;
            f_lo = f_mid;
        } else {
            hi = mid;
        }
    }
    Err(EvError::NoConvergence { lo, hi })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heads_up_matches_direct_formula() {
        // One opponent: fold -> +p, call -> se*p - (1-se)*p
        let (se, p, f) = (0.35, 2.0, 0.4);
        let direct = f * p + (1.0 - f) * (se * p - (1.0 - se) * p);
        assert!((calc_ev(se, p, f, 2).unwrap() - direct).abs() < 1e-12);
    }

    #[test]
    fn three_way_matches_binomial_sum() {
        let (se, p, f): (f64, f64, f64) = (0.4, 1.0, 0.25);
        let m = 2;
        let mut sum = f.powi(m) * p;
        for c in 1..=m {
            let binom = if c == 1 { 2.0 } else { 1.0 };
            let win = se.powi(c);
            sum += binom * (1.0 - f).powi(c) * f.powi(m - c) * (win * p - (1.0 - win) * p);
        }
        assert!((calc_ev(se, p, f, 3).unwrap() - sum).abs() < 1e-12);
    }

    #[test]
    fn everyone_folds_wins_the_stake() {
        assert_eq!(calc_ev(0.0, 3.0, 1.0, 9).unwrap(), 3.0);
    }

    #[test]
    fn domain_checks() {
        assert_eq!(
            calc_ev(1.5, 1.0, 0.0, 2),
            Err(EvError::OutOfRange { name: "showdown equity", value: 1.5 })
        );
        assert_eq!(
            calc_ev(0.5, -1.0, 0.0, 2),
            Err(EvError::OutOfRange { name: "pot fraction", value: -1.0 })
        );
        assert!(matches!(calc_ev(0.5, f64::INFINITY, 0.0, 2), Err(EvError::OutOfRange { .. })));
        assert_eq!(
            calc_ev(0.5, 1.0, -0.1, 2),
            Err(EvError::OutOfRange { name: "fold equity", value: -0.1 })
        );
        assert_eq!(calc_ev(0.5, 1.0, 0.0, 1), Err(EvError::PlayerCount(1)));
        assert_eq!(calc_fold_equity(0.5, 1.0, 0), Err(EvError::PlayerCount(0)));
    }

    #[test]
    fn bisect_finds_sqrt_two() {
        let r = bisect(|x| x * x - 2.0, 0.0, 2.0, 1e-12, 200).unwrap();
        assert!((r - 2f64.sqrt()).abs() < 1e-11);
    }

    #[test]
    fn bisect_without_sign_change_fails() {
        assert_eq!(
            bisect(|x| x * x + 1.0, -1.0, 1.0, 1e-12, 200),
            Err(EvError::NoConvergence { lo: -1.0, hi: 1.0 })
        );
    }

    #[test]
    fn bisect_runs_out_of_iterations() {
        assert!(matches!(bisect(|x| x - 0.3, 0.0, 1.0, 1e-12, 3), Err(EvError::NoConvergence { .. })));
    }

    #[test]
    fn zero_fold_equity_when_already_profitable() {
        assert_eq!(calc_fold_equity(0.5, 1.0, 2).unwrap(), 0.0);
        assert_eq!(calc_fold_equity(0.2, 0.0, 4).unwrap(), 0.0);
    }

    #[test]
    fn unreachable_break_even_fails() {
        // 0.9999^10000 is about 1/e, still short of 1/2
        assert!(matches!(calc_fold_equity(0.0, 1.0, 10_001), Err(EvError::NoConvergence { .. })));
    }
}
