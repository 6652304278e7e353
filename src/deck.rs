use crate::cards::{Card, Rank, Suit};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// An owned stack of unique cards. Drawing takes from the top (end) of the stack.
///
/// `Deck` is a plain value: cloning it gives an independent copy, which is how
/// each simulated trial gets its own deck.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// ```
    /// use holdem_equity::deck::Deck;
    ///
    /// let deck = Deck::standard();
    /// assert_eq!(deck.len(), 52);
    /// ```
    pub fn standard() -> Self {
        let mut cards = Vec::with_capacity(52);
        for s in Suit::ALL {
            for r in Rank::ALL {
                cards.push(Card::new(r, s));
            }
        }
        Self { cards }
    }

    /// Build a deck from an explicit card list. Repeated cards are kept only once.
    pub fn from_cards<I>(cards: I) -> Self
    where
        I: IntoIterator<Item = Card>,
    {
        let mut out: Vec<Card> = Vec::new();
        for c in cards {
            if !out.contains(&c) {
                out.push(c);
            }
        }
        Self { cards: out }
    }

    /// Copy of this deck with every card in `known` taken out.
    pub fn without(&self, known: &[Card]) -> Self {
        let cards = self.cards.iter().copied().filter(|c| !known.contains(c)).collect();
        Self { cards }
    }

    /// Remove a specific card. Returns whether it was present.
    pub fn remove(&mut self, card: Card) -> bool {
        match self.cards.iter().position(|&c| c == card) {
            Some(i) => {
                self.cards.remove(i);
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn as_slice(&self) -> &[Card] {
        &self.cards
    }

    /// Shuffle using a seeded RNG for reproducibility.
    pub fn shuffle_seeded(&mut self, seed: u64) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        self.cards.shuffle(&mut rng);
    }

    /// Shuffle using the provided RNG implementing Rng.
    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Draw one card from the top of the deck.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Discard the top card. Returns false if the deck was empty.
    pub fn burn(&mut self) -> bool {
        self.cards.pop().is_some()
    }

    /// Draw `n` cards from the top of the deck.
    pub fn draw_n(&mut self, n: usize) -> Vec<Card> {
        (0..n).filter_map(|_| self.draw()).collect()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_deck_has_52_unique_cards() {
        let d = Deck::standard();
        assert_eq!(d.len(), 52);
        let mut xs = d.as_slice().to_vec();
        xs.sort();
        xs.dedup();
        assert_eq!(xs.len(), 52);
    }

    #[test]
    fn seeded_shuffle_is_reproducible() {
        let mut d1 = Deck::standard();
        let mut d2 = Deck::standard();
        d1.shuffle_seeded(42);
        d2.shuffle_seeded(42);
        assert_eq!(d1, d2);
    }

    #[test]
    fn draw_and_burn_reduce_length() {
        let mut d = Deck::standard();
        d.shuffle_seeded(7);
        let c1 = d.draw().unwrap();
        let c2 = d.draw().unwrap();
        assert_ne!(c1, c2);
        assert!(d.burn());
        assert_eq!(d.len(), 49);
        let hand = d.draw_n(5);
        assert_eq!(hand.len(), 5);
        assert_eq!(d.len(), 44);
    }

    #[test]
    fn remove_and_without_take_out_known_cards() {
        let as_ = Card::new(Rank::Ace, Suit::Spades);
        let kd = Card::new(Rank::King, Suit::Diamonds);
        let mut d = Deck::standard();
        assert!(d.remove(as_));
        assert!(!d.remove(as_));
        assert!(!d.contains(as_));

        let copy = d.without(&[kd]);
        assert_eq!(copy.len(), 50);
        assert!(d.contains(kd), "original deck is untouched");
    }

    #[test]
    fn from_cards_drops_repeats() {
        let as_ = Card::new(Rank::Ace, Suit::Spades);
        let d = Deck::from_cards([as_, as_, Card::new(Rank::Two, Suit::Clubs)]);
        assert_eq!(d.len(), 2);
    }

    #[test]
    fn empty_deck_draws_nothing() {
        let mut d = Deck::from_cards([]);
        assert!(d.is_empty());
        assert_eq!(d.draw(), None);
        assert!(!d.burn());
    }
}
