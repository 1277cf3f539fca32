// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand categories.
use std::fmt;

/// A hand category, ordered from the weakest to the strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HandRank {
    /// High card.
    HighCard = 0,
    /// One pair.
    OnePair,
    /// Two pairs.
    TwoPair,
    /// Three of a kind.
    ThreeOfAKind,
    /// Straight.
    Straight,
    /// Flush.
    Flush,
    /// Full house.
    FullHouse,
    /// Four of a kind.
    FourOfAKind,
    /// Straight flush.
    StraightFlush,
}

impl HandRank {
    /// Number of hand categories.
    pub const COUNT: usize = 9;

    /// Returns the category of a hand score.
    pub fn from_score(score: u16) -> HandRank {
        match score {
            0..=10 => HandRank::StraightFlush,
            11..=166 => HandRank::FourOfAKind,
            167..=322 => HandRank::FullHouse,
            323..=1599 => HandRank::Flush,
            1600..=1609 => HandRank::Straight,
            1610..=2467 => HandRank::ThreeOfAKind,
            2468..=3325 => HandRank::TwoPair,
            3326..=6185 => HandRank::OnePair,
            _ => HandRank::HighCard,
        }
    }

    /// Returns all the categories from the weakest to the strongest.
    pub fn ranks() -> impl DoubleEndedIterator<Item = HandRank> {
        use HandRank::*;
        [
            HighCard,
            OnePair,
            TwoPair,
            ThreeOfAKind,
            Straight,
            Flush,
            FullHouse,
            FourOfAKind,
            StraightFlush,
        ]
        .into_iter()
    }
}

impl fmt::Display for HandRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rank = match self {
            HandRank::HighCard => "High Card",
            HandRank::OnePair => "One Pair",
            HandRank::TwoPair => "Two Pair",
            HandRank::ThreeOfAKind => "Three Of A Kind",
            HandRank::Straight => "Straight",
            HandRank::Flush => "Flush",
            HandRank::FullHouse => "Full House",
            HandRank::FourOfAKind => "Four Of A Kind",
            HandRank::StraightFlush => "Straight Flush",
        };

        write!(f, "{rank}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundaries() {
        let tests = [
            (0, HandRank::StraightFlush),
            (1, HandRank::StraightFlush),
            (10, HandRank::StraightFlush),
            (11, HandRank::FourOfAKind),
            (166, HandRank::FourOfAKind),
            (167, HandRank::FullHouse),
            (322, HandRank::FullHouse),
            (323, HandRank::Flush),
            (1599, HandRank::Flush),
            (1600, HandRank::Straight),
            (1609, HandRank::Straight),
            (1610, HandRank::ThreeOfAKind),
            (2467, HandRank::ThreeOfAKind),
            (2468, HandRank::TwoPair),
            (3325, HandRank::TwoPair),
            (3326, HandRank::OnePair),
            (6185, HandRank::OnePair),
            (6186, HandRank::HighCard),
            (7462, HandRank::HighCard),
        ];

        for (score, rank) in tests {
            assert_eq!(HandRank::from_score(score), rank, "score {score}");
        }
    }

    #[test]
    fn rank_to_string() {
        let tests = [
            (398, "Flush"),
            (2665, "Two Pair"),
            (6230, "High Card"),
            (4076, "One Pair"),
            (0, "Straight Flush"),
            (19, "Four Of A Kind"),
            (298, "Full House"),
            (1607, "Straight"),
            (1636, "Three Of A Kind"),
            (7221, "High Card"),
        ];

        for (score, name) in tests {
            assert_eq!(HandRank::from_score(score).to_string(), name);
        }
    }

    #[test]
    fn ordering() {
        let ranks = HandRank::ranks().collect::<Vec<_>>();
        assert_eq!(ranks.len(), HandRank::COUNT);
        assert!(ranks.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(ranks[HandRank::Flush as usize], HandRank::Flush);
    }
}
