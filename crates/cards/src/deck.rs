// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! A cards deck.
use log::debug;
use rand::prelude::*;

use crate::{Card, Rank, Suit};

/// A cards Deck.
///
/// A deck is not safe for concurrent mutation, shuffling and drawing require
/// exclusive access.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// The number of cards in the deck.
    pub const SIZE: usize = 52;

    /// Creates a new shuffled deck.
    pub fn new_and_shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut deck = Self::default();
        deck.shuffle(rng);
        deck
    }

    /// Puts all cards back into the deck in their initial order.
    ///
    /// The initial order is from deuces to aces with each rank ordered
    /// by spades, hearts, diamonds, and clubs.
    pub fn reset(&mut self) {
        self.cards.clear();
        self.cards.extend(
            Rank::ranks().flat_map(|r| Suit::suits().map(move |s| Card::new(r, s))),
        );
    }

    /// Shuffles the cards left in the deck.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Draws up to `n` cards from the top of the deck.
    ///
    /// Returns fewer cards if there are less than `n` cards left.
    pub fn draw(&mut self, n: usize) -> Vec<Card> {
        if n > self.cards.len() {
            debug!("Drawing {} of {n} requested cards", self.cards.len());
        }

        let n = n.min(self.cards.len());
        self.cards.drain(..n).collect()
    }

    /// Deals a card from the top of the deck.
    pub fn deal(&mut self) -> Option<Card> {
        if self.cards.is_empty() {
            None
        } else {
            Some(self.cards.remove(0))
        }
    }

    /// Checks if the deck is empty.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of cards in the deck.
    pub fn count(&self) -> usize {
        self.cards.len()
    }

    /// Removes a card from the deck.
    pub fn remove(&mut self, card: Card) {
        self.cards.retain(|c| c != &card);
    }

    /// Calls the `f` closure for each k-cards hand.
    ///
    /// Panics if k is not 2 <= k <= 7.
    pub fn for_each<F>(&self, k: usize, mut f: F)
    where
        F: FnMut(&[Card]),
    {
        assert!((2..=7).contains(&k), "2 <= k <= 7");

        let n = self.cards.len();
        if k > n {
            return;
        }

        // Lexicographic k-subsets of indices, idx[i] < idx[i + 1].
        let mut idx = [0usize; 7];
        for (i, v) in idx.iter_mut().enumerate().take(k) {
            *v = i;
        }

        let mut hand = [self.cards[0]; 7];
        loop {
            for (card, &i) in hand.iter_mut().zip(&idx[..k]) {
                *card = self.cards[i];
            }
            f(&hand[..k]);

            // Find the rightmost index that can still be incremented.
            let Some(i) = (0..k).rev().find(|&i| idx[i] < n - k + i) else {
                break;
            };

            idx[i] += 1;
            for j in (i + 1)..k {
                idx[j] = idx[j - 1] + 1;
            }
        }
    }
}

impl Default for Deck {
    fn default() -> Self {
        let mut deck = Self {
            cards: Vec::with_capacity(Self::SIZE),
        };
        deck.reset();
        deck
    }
}

impl AsRef<[Card]> for Deck {
    fn as_ref(&self) -> &[Card] {
        &self.cards
    }
}

impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = std::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ahash::HashSet;

    #[test]
    fn deck_order() {
        let deck = Deck::default();
        assert_eq!(deck.count(), Deck::SIZE);

        let cards = deck.as_ref();
        assert_eq!(cards[0].to_string(), "2s");
        assert_eq!(cards[1].to_string(), "2h");
        assert_eq!(cards[3].to_string(), "2c");
        assert_eq!(cards[4].to_string(), "3s");
        assert_eq!(cards[51].to_string(), "Ac");

        let unique = cards.iter().collect::<HashSet<_>>();
        assert_eq!(unique.len(), Deck::SIZE);
    }

    #[test]
    fn shuffle() {
        let mut d1 = Deck::default();
        let d2 = Deck::default();

        d1.shuffle(&mut StdRng::seed_from_u64(0));
        assert_ne!(d1.as_ref(), d2.as_ref());

        // Same cards in a different order.
        let mut sorted = d1.as_ref().to_vec();
        sorted.sort();
        let mut expected = d2.as_ref().to_vec();
        expected.sort();
        assert_eq!(sorted, expected);

        // Same seed gives the same order.
        let d3 = Deck::new_and_shuffled(&mut StdRng::seed_from_u64(0));
        assert_eq!(d1.as_ref(), d3.as_ref());
    }

    #[test]
    fn draw() {
        let mut deck = Deck::default();

        let cards = deck.draw(5);
        assert_eq!(cards.len(), 5);
        assert_eq!(cards[0].to_string(), "2s");
        assert_eq!(cards[4].to_string(), "3s");
        assert_eq!(deck.count(), 47);

        let cards = deck.draw(100);
        assert_eq!(cards.len(), 47);
        assert!(deck.is_empty());
        assert!(deck.draw(1).is_empty());
        assert_eq!(deck.deal(), None);
    }

    #[test]
    fn empty() {
        let mut deck = Deck::default();
        assert!(!deck.is_empty());

        deck.draw(51);
        assert!(!deck.is_empty());

        deck.draw(1);
        assert!(deck.is_empty());

        deck.reset();
        assert_eq!(deck.count(), Deck::SIZE);
    }

    #[test]
    fn deal_and_remove() {
        let mut deck = Deck::default();
        assert_eq!(deck.deal().map(|c| c.to_string()), Some("2s".to_string()));

        deck.remove(Card::new(Rank::Ace, Suit::Diamonds));
        deck.remove(Card::new(Rank::Ace, Suit::Diamonds));
        assert_eq!(deck.count(), 50);
    }

    #[test]
    fn deck_for_each() {
        let deck = Deck::default();

        let mut hands = HashSet::default();
        deck.for_each(5, |cards| {
            assert_eq!(cards.len(), 5);
            hands.insert(cards.to_owned());
        });
        assert_eq!(hands.len(), 2_598_960);

        hands.clear();
        deck.for_each(2, |cards| {
            assert_eq!(cards.len(), 2);
            hands.insert(cards.to_owned());
        });
        assert_eq!(hands.len(), 1_326);

        hands.clear();
        deck.for_each(3, |cards| {
            assert_eq!(cards.len(), 3);
            hands.insert(cards.to_owned());
        });
        assert_eq!(hands.len(), 22_100);
    }

    #[test]
    fn deck_for_each_small() {
        let mut deck = Deck::default();
        let cards = deck.draw(48);
        assert_eq!(cards.len(), 48);

        let mut count = 0;
        deck.for_each(4, |hand| {
            assert_eq!(hand.len(), 4);
            count += 1;
        });
        assert_eq!(count, 1);

        count = 0;
        deck.for_each(5, |_| count += 1);
        assert_eq!(count, 0);
    }
}
