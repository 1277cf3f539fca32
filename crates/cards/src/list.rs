// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! An ordered list of cards.
use serde::{Deserialize, Serialize};
use std::{fmt, ops, str::FromStr};

use crate::{Card, CardError};

/// An ordered list of cards.
///
/// The order is only relevant for display, for evaluation a list is a multiset
/// of cards. A list is parsed from whitespace separated cards and displayed as
/// cards separated by a single space:
///
/// ```
/// # use primerank_cards::CardList;
/// let cards = "As  Kd\tTc".parse::<CardList>().unwrap();
/// assert_eq!(cards.len(), 3);
/// assert_eq!(cards.to_string(), "As Kd Tc");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardList(Vec<Card>);

impl CardList {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a card at the end of the list.
    pub fn push(&mut self, card: Card) {
        self.0.push(card);
    }

    /// Returns the inner vector.
    pub fn into_inner(self) -> Vec<Card> {
        self.0
    }
}

impl FromStr for CardList {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.split_whitespace()
            .map(str::parse)
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }
}

impl fmt::Display for CardList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, card) in self.0.iter().enumerate() {
            if idx > 0 {
                write!(f, " ")?;
            }
            write!(f, "{card}")?;
        }

        Ok(())
    }
}

impl ops::Deref for CardList {
    type Target = [Card];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl ops::DerefMut for CardList {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl From<Vec<Card>> for CardList {
    fn from(cards: Vec<Card>) -> Self {
        Self(cards)
    }
}

impl From<&[Card]> for CardList {
    fn from(cards: &[Card]) -> Self {
        Self(cards.to_vec())
    }
}

impl FromIterator<Card> for CardList {
    fn from_iter<T: IntoIterator<Item = Card>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for CardList {
    type Item = Card;
    type IntoIter = std::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a CardList {
    type Item = &'a Card;
    type IntoIter = std::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Rank, Suit};

    #[test]
    fn parse_list() {
        let cards = "2h 5c".parse::<CardList>().unwrap();
        assert_eq!(
            &cards[..],
            &[
                Card::new(Rank::Deuce, Suit::Hearts),
                Card::new(Rank::Five, Suit::Clubs)
            ]
        );

        let cards = "2h 5c 7h Td Qc Kd As 2s".parse::<CardList>().unwrap();
        assert_eq!(cards.len(), 8);
        assert_eq!(cards[6], Card::new(Rank::Ace, Suit::Spades));
        assert_eq!(cards[7], Card::new(Rank::Deuce, Suit::Spades));

        let cards = "".parse::<CardList>().unwrap();
        assert!(cards.is_empty());
    }

    #[test]
    fn parse_list_errors() {
        assert_eq!(
            "2".parse::<CardList>(),
            Err(CardError::InvalidFormat("2".to_string()))
        );
        assert!("!fdasfjk324231FDAS".parse::<CardList>().is_err());
        assert_eq!(
            "As Kd 1c".parse::<CardList>(),
            Err(CardError::InvalidRank("1c".to_string()))
        );
    }

    #[test]
    fn display_list() {
        let cards = "2d 3d As Ks Qd Jh".parse::<CardList>().unwrap();
        assert_eq!(cards.to_string(), "2d 3d As Ks Qd Jh");
        assert_eq!(CardList::new().to_string(), "");
    }

    #[test]
    fn json_list() {
        let cards = "Ah Kh Qh".parse::<CardList>().unwrap();
        let json = serde_json::to_string(&cards).unwrap();
        assert_eq!(json, r#"["Ah","Kh","Qh"]"#);

        let parsed: CardList = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, cards);
    }
}
