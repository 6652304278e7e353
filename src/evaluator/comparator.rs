use super::Evaluation;
use core::cmp::Ordering;

/// Outcome of comparing one evaluated hand against another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Showdown {
    Stronger,
    Weaker,
    Equal,
}

impl Showdown {
    pub fn reverse(self) -> Self {
        match self {
            Showdown::Stronger => Showdown::Weaker,
            Showdown::Weaker => Showdown::Stronger,
            Showdown::Equal => Showdown::Equal,
        }
    }
}

impl From<Showdown> for Ordering {
    fn from(s: Showdown) -> Self {
        match s {
            Showdown::Stronger => Ordering::Greater,
            Showdown::Weaker => Ordering::Less,
            Showdown::Equal => Ordering::Equal,
        }
    }
}

impl From<Ordering> for Showdown {
    fn from(o: Ordering) -> Self {
        match o {
            Ordering::Greater => Showdown::Stronger,
            Ordering::Less => Showdown::Weaker,
            Ordering::Equal => Showdown::Equal,
        }
    }
}

/// Compare `a` against `b`: lower category ordinal wins, then the tie-break
/// vectors are compared element by element with the higher rank winning.
///
/// ```
/// use holdem_equity::cards::parse_cards;
/// use holdem_equity::evaluator::{compare, evaluate_five, Showdown};
///
/// let a = evaluate_five(&parse_cards("Ah Ad Kc 7s 2d").unwrap().try_into().unwrap());
/// let b = evaluate_five(&parse_cards("As Ac Qh 7d 2c").unwrap().try_into().unwrap());
/// assert_eq!(compare(&a, &b), Showdown::Stronger);
/// assert_eq!(compare(&b, &a), Showdown::Weaker);
/// ```
pub fn compare(a: &Evaluation, b: &Evaluation) -> Showdown {
    let by_category = b.category.ordinal().cmp(&a.category.ordinal());
    by_category.then_with(|| a.tiebreak().cmp(b.tiebreak())).into()
}
