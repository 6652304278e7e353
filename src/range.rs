//! Hand-range notation (`"77"`, `"AKs"`, `"AKo"`) and its expansion into
//! concrete two-card holdings.

use crate::cards::{Card, Rank, Suit};
use crate::hand::HoleCards;
use rand::seq::SliceRandom;
use rand::Rng;
use std::fmt;
use std::str::FromStr;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum RangeError {
    #[error("range entry '{0}' must be 2 or 3 characters")]
    Length(String),
    #[error("range entry '{0}' has an invalid rank")]
    Rank(String),
    #[error("range entry '{0}' must end in 's' or 'o'")]
    Suffix(String),
    #[error("range entry '{0}' names two ranks and needs an 's' or 'o' suffix")]
    MissingSuffix(String),
    #[error("pair entry '{0}' cannot be suited or offsuit")]
    PairWithSuffix(String),
    #[error("range has no entries")]
    Empty,
}

/// Pocket pair, suited or offsuit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    Pair,
    Suited,
    Offsuit,
}

impl Shape {
    /// Concrete holdings one entry of this shape expands to.
    pub const fn combos(self) -> usize {
        match self {
            Shape::Pair => 6,
            Shape::Suited => 4,
            Shape::Offsuit => 12,
        }
    }

    /// Holdings kept per entry when down-sampling: half of [`Shape::combos`].
    pub const fn simplified(self) -> usize {
        self.combos() / 2
    }
}

/// One entry of a range, normalized with the higher rank first.
///
/// ```
/// use holdem_equity::range::{RangeEntry, Shape};
///
/// let e: RangeEntry = "KAs".parse().unwrap();
/// assert_eq!(e.to_string(), "AKs");
/// assert_eq!(e.shape(), Shape::Suited);
/// assert_eq!(e.combos().len(), 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RangeEntry {
    high: Rank,
    low: Rank,
    shape: Shape,
}

impl RangeEntry {
    pub fn high(&self) -> Rank {
        self.high
    }

    pub fn low(&self) -> Rank {
        self.low
    }

    pub fn shape(&self) -> Shape {
        self.shape
    }

    /// Every concrete holding for this entry.
    ///
    /// Pairs give the C(4,2) suit pairs, suited hands one holding per suit and
    /// offsuit hands every ordered pair of different suits (high card first).
    pub fn combos(&self) -> Vec<HoleCards> {
        let mut out = Vec::with_capacity(self.shape.combos());
        match self.shape {
            Shape::Pair => {
                for (i, &s1) in Suit::ALL.iter().enumerate() {
                    for &s2 in &Suit::ALL[i + 1..] {
                        out.extend(self.holding(s1, s2));
                    }
                }
            }
            Shape::Suited => {
                for s in Suit::ALL {
                    out.extend(self.holding(s, s));
                }
            }
            Shape::Offsuit => {
                for s1 in Suit::ALL {
                    for s2 in Suit::ALL.into_iter().filter(|&s| s != s1) {
                        out.extend(self.holding(s1, s2));
                    }
                }
            }
        }
        out
    }

    fn holding(&self, high_suit: Suit, low_suit: Suit) -> Option<HoleCards> {
        HoleCards::try_new(Card::new(self.high, high_suit), Card::new(self.low, low_suit)).ok()
    }
}

impl fmt::Display for RangeEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.shape {
            Shape::Pair => write!(f, "{}{}", self.high, self.low),
            Shape::Suited => write!(f, "{}{}s", self.high, self.low),
            Shape::Offsuit => write!(f, "{}{}o", self.high, self.low),
        }
    }
}

impl FromStr for RangeEntry {
    type Err = RangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        let chars: Vec<char> = t.chars().collect();
        if !(2..=3).contains(&chars.len()) {
            return Err(RangeError::Length(s.to_string()));
        }
        let a = Rank::try_from(chars[0]).map_err(|_| RangeError::Rank(s.to_string()))?;
        let b = Rank::try_from(chars[1]).map_err(|_| RangeError::Rank(s.to_string()))?;
        let (high, low) = if a >= b { (a, b) } else { (b, a) };

        let shape = match (high == low, chars.get(2).map(|c| c.to_ascii_lowercase())) {
            (true, None) => Shape::Pair,
            (true, Some(_)) => return Err(RangeError::PairWithSuffix(s.to_string())),
            (false, None) => return Err(RangeError::MissingSuffix(s.to_string())),
            (false, Some('s')) => Shape::Suited,
            (false, Some('o')) => Shape::Offsuit,
            (false, Some(_)) => return Err(RangeError::Suffix(s.to_string())),
        };
        Ok(Self { high, low, shape })
    }
}

/// A parsed range: each distinct entry with the holdings it expanded to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Range {
    entries: Vec<(RangeEntry, Vec<HoleCards>)>,
}

impl Range {
    pub fn entries(&self) -> impl Iterator<Item = (&RangeEntry, &[HoleCards])> {
        self.entries.iter().map(|(e, hs)| (e, hs.as_slice()))
    }

    /// Holdings for one entry, if the range contains it.
    pub fn get(&self, entry: &RangeEntry) -> Option<&[HoleCards]> {
        self.entries.iter().find(|(e, _)| e == entry).map(|(_, hs)| hs.as_slice())
    }

    /// Every holding in entry order.
    pub fn combos(&self) -> Vec<HoleCards> {
        self.entries.iter().flat_map(|(_, hs)| hs.iter().copied()).collect()
    }

    /// Total number of holdings.
    pub fn len(&self) -> usize {
        self.entries.iter().map(|(_, hs)| hs.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl FromStr for Range {
    type Err = RangeError;

    /// Parse entries separated by commas or whitespace, fully expanded.
    ///
    /// ```
    /// use holdem_equity::range::Range;
    ///
    /// let r: Range = "AA, AKs 76o".parse().unwrap();
    /// assert_eq!(r.len(), 6 + 4 + 12);
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let entries: Vec<&str> =
            s.split(|c: char| c.is_whitespace() || c == ',').filter(|x| !x.is_empty()).collect();
        let parsed = parse_entries(&entries)?;
        let entries = parsed.into_iter().map(|e| (e, e.combos())).collect();
        Ok(Range { entries })
    }
}

fn parse_entries<S: AsRef<str>>(entries: &[S]) -> Result<Vec<RangeEntry>, RangeError> {
    if entries.is_empty() {
        return Err(RangeError::Empty);
    }
    let mut out: Vec<RangeEntry> = Vec::with_capacity(entries.len());
    for raw in entries {
        let e: RangeEntry = raw.as_ref().parse()?;
        if !out.contains(&e) {
            out.push(e);
        }
    }
    Ok(out)
}

/// Expand range notation into concrete holdings.
///
/// With `simplify`, each entry keeps a uniformly random half of its holdings
/// (pairs 3, suited 2, offsuit 6), chosen without replacement. Relative weight
/// between entries is preserved, so this suits quick approximate equities only.
///
/// ```
/// use holdem_equity::range::expand_range;
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
///
/// let mut rng = ChaCha8Rng::seed_from_u64(1);
/// let full = expand_range(&["77", "AKs", "AKo"], false, &mut rng).unwrap();
/// assert_eq!(full.len(), 22);
/// let half = expand_range(&["77", "AKs", "AKo"], true, &mut rng).unwrap();
/// assert_eq!(half.len(), 11);
/// ```
pub fn expand_range<S, R>(entries: &[S], simplify: bool, rng: &mut R) -> Result<Range, RangeError>
where
    S: AsRef<str>,
    R: Rng + ?Sized,
{
    let parsed = parse_entries(entries)?;
    let entries = parsed
        .into_iter()
        .map(|e| {
            let mut holdings = e.combos();
            if simplify {
                holdings.shuffle(rng);
                holdings.truncate(e.shape().simplified());
            }
            (e, holdings)
        })
        .collect();
    Ok(Range { entries })
}

/// Cartesian product over a list of lengths, yielding one index per list.
/// The last position advances fastest.
///
/// ```
/// use holdem_equity::range::ComboProduct;
///
/// let all: Vec<Vec<usize>> = ComboProduct::new(vec![2, 3]).collect();
/// assert_eq!(all.len(), 6);
/// assert_eq!(all[1], vec![0, 1]);
/// ```
#[derive(Debug, Clone)]
pub struct ComboProduct {
    lens: Vec<usize>,
    indices: Vec<usize>,
    done: bool,
}

impl ComboProduct {
    pub fn new(lens: Vec<usize>) -> Self {
        let done = lens.is_empty() || lens.contains(&0);
        let indices = vec![0; lens.len()];
        Self { lens, indices, done }
    }

    /// Number of tuples, or `None` if it overflows `usize`.
    pub fn total(lens: &[usize]) -> Option<usize> {
        if lens.is_empty() {
            return Some(0);
        }
        lens.iter().try_fold(1usize, |acc, &n| acc.checked_mul(n))
    }
}

impl Iterator for ComboProduct {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let result = self.indices.clone();

        // Odometer step: bump the last position, carrying leftwards
        let mut pos = self.indices.len();
        loop {
            if pos == 0 {
                self.done = true;
                break;
            }
            pos -= 1;
            self.indices[pos] += 1;
            if self.indices[pos] < self.lens[pos] {
                break;
            }
            self.indices[pos] = 0;
        }

        Some(result)
    }
}
