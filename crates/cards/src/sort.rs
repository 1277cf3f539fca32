// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Cards orderings used to display hands.
//!
//! All orderings put the most valuable cards first, cards with the same rank
//! are ordered by their encoded value so that the output is deterministic.
use std::cmp::Reverse;

use crate::{Card, Rank};

/// Sorts cards by descending rank with the Ace as the highest card.
pub fn sort_ace_high(cards: &mut [Card]) {
    cards.sort_unstable_by_key(|c| Reverse((c.rank(), c.id())));
}

/// Sorts cards by descending rank with the Ace below the Deuce, used for five
/// high straights.
pub fn sort_ace_low(cards: &mut [Card]) {
    cards.sort_unstable_by_key(|c| {
        let value = match c.rank() {
            Rank::Ace => 0,
            r => r as u8 + 1,
        };
        Reverse((value, c.id()))
    });
}

/// Sorts cards in groups of the same rank.
///
/// Groups with more cards go first, groups with the same number of cards are
/// ordered by descending rank, for example `Ah 2d Ac 3s As` becomes
/// `Ac Ah As 3s 2d`.
pub fn sort_groups(cards: &mut [Card]) {
    let mut counts = [0u8; 13];
    for c in cards.iter() {
        counts[c.rank() as usize] += 1;
    }

    cards.sort_unstable_by_key(|c| Reverse((counts[c.rank() as usize], c.rank(), c.id())));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CardList;

    fn sorted(s: &str, f: fn(&mut [Card])) -> String {
        let mut cards = s.parse::<CardList>().unwrap();
        f(&mut cards);
        cards.to_string()
    }

    #[test]
    fn groups() {
        let tests = [
            ("2d 3d As Ks Jc 7h 5d", "As Ks Jc 7h 5d 3d 2d"),
            ("2d 3d Js Ac Jc 7h 5d", "Jc Js Ac 7h 5d 3d 2d"),
            ("2d 3d As Ac Jc Jd 5d", "Ac As Jc Jd 5d 3d 2d"),
            ("2c 3d As Ac Ad Jd 5d", "Ac Ad As Jd 5d 3d 2c"),
            ("2d 3d As Ks Qd Jh Td", "As Ks Qd Jh Td 3d 2d"),
            ("2d 3d Ts 7s 4s 3s 2s", "3d 3s 2d 2s Ts 7s 4s"),
            ("7d 3d 4s 2c 4d 2s 2h", "2c 2h 2s 4d 4s 7d 3d"),
            ("4d 7c 4c 7d 4s 4h 8d 8c", "4c 4d 4h 4s 8c 8d 7c 7d"),
        ];

        for (input, expected) in tests {
            assert_eq!(sorted(input, sort_groups), expected, "{input}");
        }
    }

    #[test]
    fn ace_low() {
        let tests = [
            ("2d 5d Ad 3d 4d", "5d 4d 3d 2d Ad"),
            ("Ac Kd 4h 5d 3d Kc 2c", "Kc Kd 5d 4h 3d 2c Ac"),
            ("Ks Jh Qd As Td", "Ks Qd Jh Td As"),
        ];

        for (input, expected) in tests {
            assert_eq!(sorted(input, sort_ace_low), expected, "{input}");
        }
    }

    #[test]
    fn ace_high() {
        assert_eq!(sorted("2d 5d Ad 3d 4d", sort_ace_high), "Ad 5d 4d 3d 2d");
        assert_eq!(sorted("Ks Kc As 2h Kd", sort_ace_high), "As Kc Kd Ks 2h");
    }
}
