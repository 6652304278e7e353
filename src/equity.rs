//! Monte Carlo equity: many independent trials over the unknown cards,
//! aggregated into the share of pots each participant takes.

use crate::cards::Card;
use crate::deck::Deck;
use crate::hand::{validate_holdem, Board, HandError, HoleCards};
use crate::range::ComboProduct;
use crate::trial::{complete_board, deal_holes, showdown, Participant, TrialError};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::collections::{HashMap, HashSet};

/// Label of the bucket for trials the whole field splits.
pub const CHOP: &str = "CHOP";

pub const MIN_PARTICIPANTS: usize = 2;
pub const MAX_PARTICIPANTS: usize = 10;

/// Pot units per trial. Divisible by every split size up to ten ways, so
/// tallies stay exact integers whatever order trials are summed in.
const SHARE_UNITS: u64 = 2520;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum EquityError {
    #[error("invalid hand: {0}")]
    Hand(#[from] HandError),
    #[error("card {0} is held by more than one participant")]
    DuplicateCard(Card),
    #[error("equity needs 2 to 10 participants, got {0}")]
    ParticipantCount(usize),
    #[error("participant name '{0}' is used more than once")]
    DuplicateName(String),
    #[error("participant name 'CHOP' is reserved")]
    ReservedName,
    #[error("no ranges given")]
    NoRanges,
    #[error("range equity needs 2 to 10 ranges, got {0}")]
    RangeCount(usize),
    #[error("range {0} has no holdings")]
    EmptyRange(usize),
    #[error("deck has {available} cards left, simulation needs {needed}")]
    InsufficientCards { needed: usize, available: usize },
    #[error("range product is too large to enumerate")]
    TooManyAssignments,
    #[error("trial count must be positive")]
    ZeroTrials,
    #[error("trial failed: {0}")]
    Trial(#[from] TrialError),
}

/// Simulation parameters.
///
/// ```
/// use holdem_equity::equity::SimConfig;
///
/// let config = SimConfig::new(5_000).with_seed(42);
/// assert_eq!(config.trials, 5_000);
/// assert_eq!(config.seed, Some(42));
/// assert_eq!(SimConfig::default().trials, 1_000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    pub trials: u32,
    /// `None` draws a fresh seed per run; it is logged at debug level.
    pub seed: Option<u64>,
}

impl SimConfig {
    pub const DEFAULT_TRIALS: u32 = 1_000;

    pub fn new(trials: u32) -> Self {
        Self { trials, seed: None }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    fn resolve_seed(&self) -> u64 {
        self.seed.unwrap_or_else(|| rand::rng().random())
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_TRIALS)
    }
}

/// Equity per participant, in participant order, followed by [`CHOP`].
///
/// ```
/// use holdem_equity::equity::{compute_equity, SimConfig, CHOP};
/// use holdem_equity::deck::Deck;
/// use holdem_equity::hand::Board;
/// use holdem_equity::trial::Participant;
///
/// let seats = [
///     Participant::known("hero", "As Ac".parse().unwrap()),
///     Participant::known("villain", "Qs Qc".parse().unwrap()),
/// ];
/// let board: Board = "2s 7d 9c Jh Kd".parse().unwrap();
/// let result = compute_equity(&seats, &board, &Deck::standard(), &SimConfig::new(10)).unwrap();
/// assert_eq!(result.get("hero"), Some(1.0));
/// assert_eq!(result.get(CHOP), Some(0.0));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "Vec<(String, f64)>", into = "Vec<(String, f64)>")
)]
pub struct EquityResult {
    entries: Vec<(String, f64)>,
    index: HashMap<String, usize>,
}

impl EquityResult {
    pub fn get(&self, label: &str) -> Option<f64> {
        self.index.get(label).map(|&i| self.entries[i].1)
    }

    pub fn chop(&self) -> f64 {
        self.get(CHOP).unwrap_or(0.0)
    }

    /// `(label, equity)` pairs in presentation order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries.iter().map(|(l, v)| (l.as_str(), *v))
    }

    /// Sum over every bucket, chop included. 1.0 up to rounding.
    pub fn total(&self) -> f64 {
        self.entries.iter().map(|(_, v)| v).sum()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl From<Vec<(String, f64)>> for EquityResult {
    fn from(entries: Vec<(String, f64)>) -> Self {
        let index = entries.iter().enumerate().map(|(i, (l, _))| (l.clone(), i)).collect();
        Self { entries, index }
    }
}

impl From<EquityResult> for Vec<(String, f64)> {
    fn from(result: EquityResult) -> Self {
        result.entries
    }
}

/// Per-participant pot units won over a batch of trials.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Tally {
    shares: Vec<u64>,
    chop: u64,
    trials: u64,
}

impl Tally {
    fn new(participants: usize) -> Self {
        Self { shares: vec![0; participants], chop: 0, trials: 0 }
    }

    fn record(&mut self, winners: &[usize]) {
        self.trials += 1;
        match winners {
            [] => {}
            ws if ws.len() == self.shares.len() => self.chop += SHARE_UNITS,
            [w] => self.shares[*w] += SHARE_UNITS,
            ws => {
                let each = SHARE_UNITS / ws.len() as u64;
                for &w in ws {
                    self.shares[w] += each;
                }
            }
        }
    }

    #[cfg_attr(not(feature = "parallel"), allow(dead_code))]
    fn merge(mut self, other: Tally) -> Self {
        for (a, b) in self.shares.iter_mut().zip(other.shares) {
            *a += b;
        }
        self.chop += other.chop;
        self.trials += other.trials;
        self
    }

    /// Participant fractions followed by the chop fraction.
    fn fractions(&self) -> Vec<f64> {
        let denom = (SHARE_UNITS * self.trials.max(1)) as f64;
        self.shares
            .iter()
            .chain(std::iter::once(&self.chop))
            .map(|&units| units as f64 / denom)
            .collect()
    }
}

fn labelled(labels: impl IntoIterator<Item = String>, values: Vec<f64>) -> EquityResult {
    let entries: Vec<(String, f64)> =
        labels.into_iter().chain(std::iter::once(CHOP.to_string())).zip(values).collect();
    EquityResult::from(entries)
}

/// Check a seating and return the deck trials deal from: `deck` minus every
/// known card. Known cards the deck lacks are skipped.
fn trial_deck(
    participants: &[Participant],
    board: &Board,
    deck: &Deck,
    trials: u32,
) -> Result<Deck, EquityError> {
    if trials == 0 {
        return Err(EquityError::ZeroTrials);
    }
    let n = participants.len();
    if !(MIN_PARTICIPANTS..=MAX_PARTICIPANTS).contains(&n) {
        return Err(EquityError::ParticipantCount(n));
    }

    let mut names: HashSet<&str> = HashSet::with_capacity(n);
    for p in participants {
        if p.name() == CHOP {
            return Err(EquityError::ReservedName);
        }
        if !names.insert(p.name()) {
            return Err(EquityError::DuplicateName(p.name().to_string()));
        }
    }

    let mut known: Vec<Card> = board.as_slice().to_vec();
    let mut held: HashSet<Card> = HashSet::new();
    for hole in participants.iter().filter_map(Participant::hole) {
        validate_holdem(&hole, board)?;
        for card in hole.as_array() {
            if !held.insert(card) {
                return Err(EquityError::DuplicateCard(card));
            }
            known.push(card);
        }
    }

    let base = deck.without(&known);
    let unknown = participants.iter().filter(|p| p.hole().is_none()).count();
    let needed = 2 * unknown + 3 + board.missing();
    if base.len() < needed {
        return Err(EquityError::InsufficientCards { needed, available: base.len() });
    }
    Ok(base)
}

/// One trial on its own ChaCha stream: shuffle a copy of `base`, deal the
/// unknown holes, finish the board, return the winners.
fn trial_winners(
    participants: &[Participant],
    board: &Board,
    base: &Deck,
    seed: u64,
    index: u64,
) -> Result<Vec<usize>, TrialError> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    rng.set_stream(index);
    let mut deck = base.clone();
    deck.shuffle_with(&mut rng);
    let holes = deal_holes(participants, &mut deck)?;
    let full = complete_board(board, &mut deck)?;
    let winners = showdown(&full, &holes);
    log::trace!("trial {index}: board {full:?} winners {winners:?}");
    Ok(winners)
}

#[cfg(not(feature = "parallel"))]
fn simulate(
    participants: &[Participant],
    board: &Board,
    base: &Deck,
    trials: u32,
    seed: u64,
) -> Result<Tally, EquityError> {
    let mut tally = Tally::new(participants.len());
    for index in 0..u64::from(trials) {
        let winners = trial_winners(participants, board, base, seed, index)?;
        tally.record(&winners);
    }
    Ok(tally)
}

#[cfg(feature = "parallel")]
fn simulate(
    participants: &[Participant],
    board: &Board,
    base: &Deck,
    trials: u32,
    seed: u64,
) -> Result<Tally, EquityError> {
    use rayon::prelude::*;

    let n = participants.len();
    (0..u64::from(trials))
        .into_par_iter()
        .try_fold(
            || Tally::new(n),
            |mut tally, index| {
                let winners = trial_winners(participants, board, base, seed, index)?;
                tally.record(&winners);
                Ok::<_, EquityError>(tally)
            },
        )
        .try_reduce(|| Tally::new(n), |a, b| Ok(a.merge(b)))
}

/// Estimate each participant's equity over `config.trials` random run-outs.
///
/// Participants without hole cards get random ones every trial. A trial
/// the whole field splits goes to [`CHOP`]; a `k`-way split short of the
/// whole field gives each of the `k` a `1/k` share. Values sum to 1.
pub fn compute_equity(
    participants: &[Participant],
    board: &Board,
    deck: &Deck,
    config: &SimConfig,
) -> Result<EquityResult, EquityError> {
    let base = trial_deck(participants, board, deck, config.trials)?;
    let seed = config.resolve_seed();
    log::debug!(
        "equity: {} participants, {} board cards, {} trials, seed {seed}",
        participants.len(),
        board.len(),
        config.trials
    );

    let tally = simulate(participants, board, &base, config.trials, seed)?;
    let labels = participants.iter().map(|p| p.name().to_string());
    Ok(labelled(labels, tally.fractions()))
}

/// Exact average over every way of picking one holding from each range,
/// with [`compute_equity`] run for each pick. Ranges are labelled
/// `"Range 1"`, `"Range 2"`, ...
///
/// A pick whose holdings share a card is an error, not skipped. Every pick
/// is checked before the first one is simulated.
pub fn compute_range_equity(
    ranges: &[Vec<HoleCards>],
    board: &Board,
    deck: &Deck,
    config: &SimConfig,
) -> Result<EquityResult, EquityError> {
    if ranges.is_empty() {
        return Err(EquityError::NoRanges);
    }
    if !(MIN_PARTICIPANTS..=MAX_PARTICIPANTS).contains(&ranges.len()) {
        return Err(EquityError::RangeCount(ranges.len()));
    }
    if let Some(i) = ranges.iter().position(Vec::is_empty) {
        return Err(EquityError::EmptyRange(i + 1));
    }
    let lens: Vec<usize> = ranges.iter().map(Vec::len).collect();
    let total = ComboProduct::total(&lens).ok_or(EquityError::TooManyAssignments)?;

    let labels: Vec<String> = (1..=ranges.len()).map(|i| format!("Range {i}")).collect();
    let picks: Vec<(Vec<Participant>, Deck)> = ComboProduct::new(lens)
        .map(|indices| {
            let seats: Vec<Participant> = indices
                .iter()
                .zip(ranges)
                .zip(&labels)
                .map(|((&i, range), label)| Participant::known(label.clone(), range[i]))
                .collect();
            let base = trial_deck(&seats, board, deck, config.trials)?;
            Ok((seats, base))
        })
        .collect::<Result<_, EquityError>>()?;

    let seed = config.resolve_seed();
    log::debug!(
        "range equity: {} ranges, {total} assignments, {} trials each, seed {seed}",
        ranges.len(),
        config.trials
    );

    let mut sums = vec![0.0f64; ranges.len() + 1];
    for (pick, (seats, base)) in picks.iter().enumerate() {
        let tally = simulate(seats, board, base, config.trials, splitmix64(seed ^ pick as u64))?;
        for (sum, v) in sums.iter_mut().zip(tally.fractions()) {
            *sum += v;
        }
    }

    let averaged = sums.into_iter().map(|s| s / total as f64).collect();
    Ok(labelled(labels, averaged))
}

fn splitmix64(mut x: u64) -> u64 {
    x = x.wrapping_add(0x9E37_79B9_7F4A_7C15);
    x = (x ^ (x >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    x = (x ^ (x >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    x ^ (x >> 31)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seat(name: &str, hole: &str) -> Participant {
        Participant::known(name, hole.parse().unwrap())
    }

    #[test]
    fn tally_splits_partial_ties_and_chops_full_ties() {
        let mut t = Tally::new(3);
        t.record(&[0]);
        t.record(&[0, 2]);
        t.record(&[0, 1, 2]);
        assert_eq!(t.shares, vec![SHARE_UNITS + SHARE_UNITS / 2, 0, SHARE_UNITS / 2]);
        assert_eq!(t.chop, SHARE_UNITS);
        let f = t.fractions();
        assert!((f.iter().sum::<f64>() - 1.0).abs() < 1e-12);
        assert!((f[0] - 0.5).abs() < 1e-12);
        assert!((f[3] - 1.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn tally_merge_adds_everything() {
        let mut a = Tally::new(2);
        a.record(&[0]);
        let mut b = Tally::new(2);
        b.record(&[0, 1]);
        b.record(&[1]);
        let m = a.merge(b);
        assert_eq!(m.shares, vec![SHARE_UNITS, SHARE_UNITS]);
        assert_eq!(m.chop, SHARE_UNITS);
        assert_eq!(m.trials, 3);
    }

    #[test]
    fn seating_rules() {
        let board = Board::empty();
        let deck = Deck::standard();
        let lone = [seat("a", "As Ac")];
        assert_eq!(trial_deck(&lone, &board, &deck, 10), Err(EquityError::ParticipantCount(1)));

        let twins = [seat("a", "As Ac"), seat("a", "Ks Kc")];
        assert_eq!(
            trial_deck(&twins, &board, &deck, 10),
            Err(EquityError::DuplicateName("a".into()))
        );

        let chop = [seat("a", "As Ac"), Participant::unknown(CHOP)];
        assert_eq!(trial_deck(&chop, &board, &deck, 10), Err(EquityError::ReservedName));

        let shared = [seat("a", "As Ac"), seat("b", "As Kc")];
        assert!(matches!(
            trial_deck(&shared, &board, &deck, 10),
            Err(EquityError::DuplicateCard(_))
        ));

        let ok = [seat("a", "As Ac"), Participant::unknown("b")];
        assert_eq!(trial_deck(&ok, &board, &deck, 0), Err(EquityError::ZeroTrials));
        assert_eq!(trial_deck(&ok, &board, &deck, 1).unwrap().len(), 50);
    }

    #[test]
    fn hole_on_board_is_a_hand_error() {
        let board: Board = "As 7d 9c".parse().unwrap();
        let seats = [seat("a", "As Ac"), Participant::unknown("b")];
        assert_eq!(
            trial_deck(&seats, &board, &Deck::standard(), 10),
            Err(EquityError::Hand(HandError::Overlap))
        );
    }

    #[test]
    fn short_deck_is_reported() {
        let deck = Deck::from_cards(crate::cards::parse_cards("2c 3c 4c 5c 6c 7c").unwrap());
        let seats = [Participant::unknown("a"), Participant::unknown("b")];
        assert_eq!(
            trial_deck(&seats, &Board::empty(), &deck, 10),
            Err(EquityError::InsufficientCards { needed: 12, available: 6 })
        );
    }

    #[test]
    fn same_seed_same_result() {
        let seats = [seat("a", "Ah Kh"), Participant::unknown("b")];
        let board: Board = "2h 7h Qc".parse().unwrap();
        let config = SimConfig::new(200).with_seed(9);
        let a = compute_equity(&seats, &board, &Deck::standard(), &config).unwrap();
        let b = compute_equity(&seats, &board, &Deck::standard(), &config).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn result_lookup_and_order() {
        let r = EquityResult::from(vec![("x".to_string(), 0.25), (CHOP.to_string(), 0.75)]);
        assert_eq!(r.get("x"), Some(0.25));
        assert_eq!(r.chop(), 0.75);
        assert_eq!(r.get("y"), None);
        let labels: Vec<&str> = r.iter().map(|(l, _)| l).collect();
        assert_eq!(labels, vec!["x", CHOP]);
        assert_eq!(r.len(), 2);
    }

    #[test]
    fn derived_seeds_differ_per_pick() {
        assert_ne!(splitmix64(7), splitmix64(7 ^ 1));
    }
}
