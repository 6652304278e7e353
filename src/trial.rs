//! One simulated hand: fill in unknown hole cards and board cards from a
//! trial-local deck, then find everybody tied for the best hand.

use crate::cards::Card;
use crate::deck::Deck;
use crate::evaluator::{compare, evaluate, Evaluation, Showdown};
use crate::hand::{Board, HandError, HoleCards};
use std::collections::HashSet;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TrialError {
    #[error("deck ran out of cards while dealing")]
    DeckExhausted,
    #[error("invalid hand: {0}")]
    InvalidHand(#[from] HandError),
    #[error("card {0} is already on the board, in a known hand, or left in the deck")]
    DuplicateCard(Card),
}

/// A seat in the simulation: a name plus hole cards, or `None` when they are
/// to be dealt at random every trial.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Participant {
    name: String,
    hole: Option<HoleCards>,
}

impl Participant {
    pub fn new(name: impl Into<String>, hole: Option<HoleCards>) -> Self {
        Self { name: name.into(), hole }
    }

    pub fn known(name: impl Into<String>, hole: HoleCards) -> Self {
        Self::new(name, Some(hole))
    }

    pub fn unknown(name: impl Into<String>) -> Self {
        Self::new(name, None)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn hole(&self) -> Option<HoleCards> {
        self.hole
    }
}

/// Hole cards for every participant, dealing the unknown ones from `deck`
/// the way a dealer does: one card to each in seat order, then a second round.
pub fn deal_holes(participants: &[Participant], deck: &mut Deck) -> Result<Vec<HoleCards>, TrialError> {
    let mut firsts: Vec<Option<Card>> = Vec::with_capacity(participants.len());
    for p in participants {
        let first = match p.hole {
            Some(_) => None,
            None => Some(deck.draw().ok_or(TrialError::DeckExhausted)?),
        };
        firsts.push(first);
    }

    participants
        .iter()
        .zip(firsts)
        .map(|(p, first)| match (p.hole, first) {
            (Some(hole), _) => Ok(hole),
            (None, Some(a)) => {
                let b = deck.draw().ok_or(TrialError::DeckExhausted)?;
                Ok(HoleCards::try_new(a, b)?)
            }
            (None, None) => Err(TrialError::DeckExhausted),
        })
        .collect()
}

/// Finish the board from `deck`. Each street (flop, turn, river) is preceded
/// by a burn card, including streets already on the board.
pub fn complete_board(board: &Board, deck: &mut Deck) -> Result<[Card; 5], TrialError> {
    let mut out = board.clone();
    for (street_end, street_len) in [(3, 3), (4, 1), (5, 1)] {
        if !deck.burn() {
            return Err(TrialError::DeckExhausted);
        }
        if out.len() < street_end {
            for _ in 0..street_len {
                out.push(deck.draw().ok_or(TrialError::DeckExhausted)?);
            }
        }
    }
    out.complete().ok_or(TrialError::DeckExhausted)
}

/// Indices of every hand that no other hand beats. More than one index is a chop.
pub fn showdown(board: &[Card; 5], holes: &[HoleCards]) -> Vec<usize> {
    let evals: Vec<Evaluation> = holes.iter().map(|h| evaluate(board, h)).collect();
    let Some(best) = evals.iter().max() else {
        return Vec::new();
    };
    evals
        .iter()
        .enumerate()
        .filter(|(_, e)| compare(e, best) == Showdown::Equal)
        .map(|(i, _)| i)
        .collect()
}

/// Every board and known hole card must be distinct and absent from `deck`.
fn check_known(board: &[Card; 5], participants: &[Participant], deck: &Deck) -> Result<(), TrialError> {
    let holes = participants.iter().filter_map(Participant::hole);
    let known = board.iter().copied().chain(holes.flat_map(|h| h.as_array()));
    let mut seen: HashSet<Card> = HashSet::with_capacity(5 + 2 * participants.len());
    for card in known {
        if !seen.insert(card) || deck.contains(card) {
            return Err(TrialError::DuplicateCard(card));
        }
    }
    Ok(())
}

/// Resolve one hand on a complete board: deal unknown hole cards, evaluate
/// everyone, return the winner set.
///
/// `deck` must already exclude the board and every known hole card.
pub fn run_trial(
    board: &[Card; 5],
    participants: &[Participant],
    deck: &mut Deck,
) -> Result<Vec<usize>, TrialError> {
    check_known(board, participants, deck)?;
    let holes = deal_holes(participants, deck)?;
    log::trace!("trial holes: {:?}", holes);
    Ok(showdown(board, &holes))
}
