// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Player hands and their evaluation results.
use log::trace;
use std::{fmt, str::FromStr};

use primerank_cards::{
    Card, CardError, CardList, Rank,
    sort::{sort_ace_high, sort_ace_low, sort_groups},
};

use crate::{
    EvalError,
    eval::{self, HandRank, HandValue},
};

/// A player hand.
///
/// The hand cards are the hole cards when evaluated together with community
/// cards, or the whole hand for games without community cards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: CardList,
}

impl Hand {
    /// Creates a hand with the given cards.
    pub fn new(cards: impl Into<CardList>) -> Self {
        Self {
            cards: cards.into(),
        }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// The hand cards.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Evaluates this hand with the given community cards.
    ///
    /// Without community cards the hand must have 5 to 7 cards. With community
    /// cards a 2 cards hand is evaluated as Texas Hold'em with 3 to 5 community
    /// cards, and a 4 cards hand is evaluated as Omaha with 5 community cards.
    pub fn evaluate(&self, community: &[Card]) -> Result<HandResult, EvalError> {
        let (hole, board) = (self.cards.len(), community.len());

        let (score, mut best) = match (hole, board) {
            (_, 0) => eval::best_hand(&self.cards)?,
            (2, 3..=5) => {
                let mut all = [self.cards[0]; 7];
                all[..2].copy_from_slice(&self.cards);
                all[2..2 + board].copy_from_slice(community);
                eval::best_hand(&all[..2 + board])?
            }
            (4, _) => {
                let (score, h, c) = eval::best_omaha_hand(&self.cards, community)?;
                (score, [h[0], h[1], c[0], c[1], c[2]])
            }
            _ => return Err(eval::invalid_count(hole, board)),
        };

        let rank = HandRank::from_score(score);
        sort_for_display(&mut best, rank);
        trace!("Hand {self} scored {score} ({rank})");

        Ok(HandResult {
            hole: self.cards.clone(),
            community: CardList::from(community),
            best,
            score,
            rank,
        })
    }
}

impl FromStr for Hand {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<CardList>().map(Hand::new)
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.cards)
    }
}

/// Sorts the best five cards so that they are easy to read.
fn sort_for_display(best: &mut [Card; 5], rank: HandRank) {
    match rank {
        HandRank::StraightFlush | HandRank::Straight => {
            // The Ace is low unless the two highest cards are above five.
            sort_ace_high(best);
            if best[1].rank() <= Rank::Five {
                sort_ace_low(best);
            }
        }
        HandRank::FourOfAKind
        | HandRank::FullHouse
        | HandRank::ThreeOfAKind
        | HandRank::TwoPair
        | HandRank::OnePair => sort_groups(best),
        HandRank::Flush | HandRank::HighCard => sort_ace_high(best),
    }
}

/// The result of a hand evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandResult {
    hole: CardList,
    community: CardList,
    best: [Card; 5],
    score: u16,
    rank: HandRank,
}

impl HandResult {
    /// The evaluated hand cards.
    pub fn hole(&self) -> &[Card] {
        &self.hole
    }

    /// The community cards used in the evaluation.
    pub fn community(&self) -> &[Card] {
        &self.community
    }

    /// The best five cards sorted for display.
    pub fn best(&self) -> &[Card; 5] {
        &self.best
    }

    /// The hand score, lower is better.
    pub fn score(&self) -> u16 {
        self.score
    }

    /// The hand category.
    pub fn rank(&self) -> HandRank {
        self.rank
    }

    /// The hand value for comparing results.
    pub fn value(&self) -> HandValue {
        HandValue::from_score(self.score)
    }

    /// Describes the hand, as in "Full House, Aces Over Kings".
    pub fn describe(&self) -> String {
        let high = self.best[0].rank();
        let low = self.best[4].rank();

        match self.rank {
            HandRank::StraightFlush if high == Rank::Ace => "Royal Flush".to_string(),
            HandRank::StraightFlush | HandRank::Straight | HandRank::Flush => {
                format!("{}-High {}", high.name(), self.rank)
            }
            HandRank::FullHouse => {
                format!("{}, {} Over {}", self.rank, high.plural(), low.plural())
            }
            HandRank::TwoPair => {
                let second = self.best[2].rank();
                format!("{}, {} And {}", self.rank, high.plural(), second.plural())
            }
            HandRank::FourOfAKind | HandRank::ThreeOfAKind | HandRank::OnePair => {
                format!("{}, {}", self.rank, high.plural())
            }
            HandRank::HighCard => format!("{} High", high.name()),
        }
    }
}

impl fmt::Display for HandResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", CardList::from(&self.best[..]), self.describe())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hand(s: &str) -> Hand {
        s.parse().unwrap()
    }

    fn cards(s: &str) -> CardList {
        s.parse().unwrap()
    }

    #[test]
    fn evaluate_hands() {
        let tests = [
            (7462, "2s 3d 4c 5h 7h", HandRank::HighCard),
            (6252, "As Ks Jc 7h 5d", HandRank::HighCard),
            (3448, "As Ac Jc 7h 5d", HandRank::OnePair),
            (2497, "3d As Ac Jc Jd 5d", HandRank::TwoPair),
            (1636, "3d As Ac Ad Jd 5d", HandRank::ThreeOfAKind),
            (1600, "2d 3d As Ks Qd Jh Td", HandRank::Straight),
            (1542, "2d 3d Ts 7s 4s 3s 2s", HandRank::Flush),
            (298, "2d 3d 4s 4c 4d 2s 2h", HandRank::FullHouse),
            (19, "2d 3d As Ac Ad Ah 5h", HandRank::FourOfAKind),
            (1, "2d 3d As Ks Qs Js Ts", HandRank::StraightFlush),
        ];

        for (score, cards, rank) in tests {
            let result = hand(cards).evaluate(&[]).unwrap();
            assert_eq!(result.score(), score, "{cards}");
            assert_eq!(result.rank(), rank, "{cards}");
            assert_eq!(result.hole(), hand(cards).cards());
            assert!(result.community().is_empty());
        }
    }

    #[test]
    fn describe() {
        let tests = [
            ("2s 3d 4c 5h 7h", "Seven High"),
            ("Ks Jc Ac 7h 5d", "Ace High"),
            ("As Ac Jc 7h 5d", "One Pair, Aces"),
            ("As Ac Jc Jd 5d", "Two Pair, Aces And Jacks"),
            ("Jd Ac Ad 5d As", "Three Of A Kind, Aces"),
            ("9d Qd Ks Jh As Td", "Ace-High Straight"),
            ("Ts 7s 4s 3s 2s", "Ten-High Flush"),
            ("2s 4c 4d 4s 2h", "Full House, Fours Over Twos"),
            ("As Ac Ah 5h Ad", "Four Of A Kind, Aces"),
            ("As 3s 5s 4s 2s", "Five-High Straight Flush"),
            ("Ks Qs As Js Ts", "Royal Flush"),
            ("Ad 2c 3h 4s 5d", "Five-High Straight"),
            ("6d 2c 3h 4s 5d", "Six-High Straight"),
        ];

        for (cards, description) in tests {
            let result = hand(cards).evaluate(&[]).unwrap();
            assert_eq!(result.describe(), description, "{cards}");
        }
    }

    #[test]
    fn display_order() {
        let tests = [
            ("As 3s 5s 4s 2s", "5s 4s 3s 2s As"),
            ("Ks Qs As Js Ts", "As Ks Qs Js Ts"),
            ("6d 2c 3h 4s 5d", "6d 5d 4s 3h 2c"),
            ("Ah 2d Ac 3s As", "Ac Ah As 3s 2d"),
            ("2s 4c 4d 4s 2h", "4c 4d 4s 2h 2s"),
            ("Ts 2s 7s 3s 4s", "Ts 7s 4s 3s 2s"),
        ];

        for (cards, expected) in tests {
            let result = hand(cards).evaluate(&[]).unwrap();
            assert_eq!(CardList::from(&result.best()[..]).to_string(), expected);
        }
    }

    #[test]
    fn texas_holdem() {
        let result = hand("9d 3d").evaluate(&cards("3h Qh 7h 4h 4s")).unwrap();
        assert_eq!(result.to_string(), "4h 4s 3d 3h Qh (Two Pair, Fours And Threes)");
        assert_eq!(result.community(), &cards("3h Qh 7h 4h 4s")[..]);

        // Flop and turn.
        let result = hand("Ah Kh").evaluate(&cards("Qh Jh Th")).unwrap();
        assert_eq!(result.describe(), "Royal Flush");
        let result = hand("Ah Kd").evaluate(&cards("As 7c 2d 2s")).unwrap();
        assert_eq!(result.describe(), "Two Pair, Aces And Twos");
    }

    #[test]
    fn omaha() {
        let board = cards("5s 8s Jc 8c 3s");
        let tests = [
            ("9d 4h 3c 4c", "8c 8s 4c 4h Jc", "Two Pair, Eights And Fours"),
            ("3d 4s 7c 5c", "8c 8s 5c 5s 7c", "Two Pair, Eights And Fives"),
            ("3h 8d 6s 9s", "8c 8d 8s 3h 3s", "Full House, Eights Over Threes"),
            ("Qh Tc 2c Kd", "8c 8s Kd Qh Jc", "One Pair, Eights"),
            ("Ah As Ad Ac", "Ah As 8c 8s Jc", "Two Pair, Aces And Eights"),
        ];

        let mut winner = None;
        for (hole, best, description) in tests {
            let result = hand(hole).evaluate(&board).unwrap();
            assert_eq!(CardList::from(&result.best()[..]).to_string(), best);
            assert_eq!(result.describe(), description);

            if winner.as_ref().is_none_or(|w: &HandResult| result.value() > w.value()) {
                winner = Some(result);
            }
        }

        let winner = winner.unwrap();
        assert_eq!(winner.hole(), &cards("3h 8d 6s 9s")[..]);
        assert_eq!(winner.rank(), HandRank::FullHouse);
    }

    #[test]
    fn invalid_hands() {
        let err = |n, community| {
            Err(EvalError::InvalidCardCount {
                cards: n,
                community,
            })
        };

        assert_eq!(hand("Ks Qs Js Ts").evaluate(&[]), err(4, 0));
        assert_eq!(hand("Ks Qs Js").evaluate(&cards("2c 3c 4c")), err(3, 3));
        assert_eq!(hand("Ks Qs").evaluate(&cards("2c 3c")), err(2, 2));
        assert_eq!(hand("Ks Qs").evaluate(&cards("2c 3c 4c 5c 6c 7c")), err(2, 6));
        assert_eq!(hand("Ks Qs Js Ts").evaluate(&cards("2c 3c 4c")), err(4, 3));
        assert_eq!(Hand::default().evaluate(&[]), err(0, 0));
    }

    #[test]
    fn build_hand() {
        let mut h = Hand::default();
        h.add_card("As".parse().unwrap());
        h.add_card("Kd".parse().unwrap());
        assert_eq!(h.to_string(), "As Kd");
        assert_eq!(h, Hand::new(cards("As Kd")));
        assert!("As Kx".parse::<Hand>().is_err());
    }
}
