// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker hand evaluator.
//!
//! This evaluator is a port of the [Cactus Kev's][kevlink] poker evaluator with
//! the perfect hash lookup for paired hands to evaluate 5, 6, and 7 cards
//! poker hands and Omaha hands.
//!
//! A hand score goes from 1 for a royal flush to 7462 for the worst high card,
//! lower scores are stronger hands. The [evaluate] and [evaluate_omaha]
//! functions compute the score of a hand without extracting its best five cards,
//! useful for computing odds and other stats, the slightly slower [best_hand]
//! and [best_omaha_hand] also return the five cards that made the score, useful
//! for UIs to show a winning hand.
//!
//! [kevlink]: http://suffe.cool/poker/evaluator.html
use log::debug;
use std::{cmp::Ordering, fmt};

use crate::EvalError;
use primerank_cards::Card;

mod five;
pub use five::eval5;

mod rank;
pub use rank::HandRank;

mod search;
mod tables;

/// Evaluates a 5, 6, or 7 cards hand and returns its score.
pub fn evaluate(cards: &[Card]) -> Result<u16, EvalError> {
    match cards.len() {
        5 => Ok(eval5(cards[0], cards[1], cards[2], cards[3], cards[4])),
        6 | 7 => Ok(search::eval_more(cards)),
        n => Err(invalid_count(n, 0)),
    }
}

/// Evaluates a 5, 6, or 7 cards hand and returns its score with the five cards
/// that made it.
///
/// The five cards are returned in the same relative order they have in the
/// hand, if more than one subset has the best score the first one is returned.
pub fn best_hand(cards: &[Card]) -> Result<(u16, [Card; 5]), EvalError> {
    match cards.len() {
        5 => {
            let best = [cards[0], cards[1], cards[2], cards[3], cards[4]];
            Ok((eval5(best[0], best[1], best[2], best[3], best[4]), best))
        }
        6 | 7 => Ok(search::best_more(cards)),
        n => Err(invalid_count(n, 0)),
    }
}

/// Evaluates an Omaha hand with 4 hole cards and 5 community cards.
///
/// The hand must use exactly two of the hole cards and three of the
/// community cards.
pub fn evaluate_omaha(hole: &[Card], community: &[Card]) -> Result<u16, EvalError> {
    check_omaha(hole, community)?;
    Ok(search::eval_omaha(hole, community))
}

/// Evaluates an Omaha hand and returns its score with the two hole cards and
/// the three community cards that made it.
pub fn best_omaha_hand(
    hole: &[Card],
    community: &[Card],
) -> Result<(u16, [Card; 2], [Card; 3]), EvalError> {
    check_omaha(hole, community)?;
    Ok(search::best_omaha(hole, community))
}

/// Returns the category of a hand score.
pub fn classify(score: u16) -> HandRank {
    HandRank::from_score(score)
}

fn check_omaha(hole: &[Card], community: &[Card]) -> Result<(), EvalError> {
    if hole.len() == 4 && community.len() == 5 {
        Ok(())
    } else {
        Err(invalid_count(hole.len(), community.len()))
    }
}

pub(crate) fn invalid_count(cards: usize, community: usize) -> EvalError {
    debug!("Cannot evaluate {cards} cards with {community} community cards");
    EvalError::InvalidCardCount { cards, community }
}

/// A hand value that compares greater for stronger hands.
///
/// ```
/// # use primerank_eval::*;
/// let nuts = "As Ks Qs Js Ts".parse::<CardList>().unwrap();
/// let trash = "7h 5d 4c 3s 2s".parse::<CardList>().unwrap();
/// let v1 = HandValue::eval(&nuts).unwrap();
/// let v2 = HandValue::eval(&trash).unwrap();
/// assert!(v1 > v2);
/// assert_eq!(v1.score(), 1);
/// assert_eq!(v2.rank(), HandRank::HighCard);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HandValue(u16);

impl HandValue {
    /// Evaluates a 5, 6, or 7 cards hand.
    pub fn eval(cards: &[Card]) -> Result<Self, EvalError> {
        evaluate(cards).map(Self)
    }

    /// Evaluates a 5, 6, or 7 cards hand and returns its best five cards.
    pub fn eval_with_best_hand(cards: &[Card]) -> Result<(Self, [Card; 5]), EvalError> {
        best_hand(cards).map(|(score, best)| (Self(score), best))
    }

    /// Evaluates an Omaha hand.
    pub fn eval_omaha(hole: &[Card], community: &[Card]) -> Result<Self, EvalError> {
        evaluate_omaha(hole, community).map(Self)
    }

    /// Creates a value from a score, used to compare stored scores.
    pub fn from_score(score: u16) -> Self {
        Self(score)
    }

    /// The hand score, 1 is a royal flush.
    pub fn score(&self) -> u16 {
        self.0
    }

    /// The hand category.
    pub fn rank(&self) -> HandRank {
        HandRank::from_score(self.0)
    }
}

impl Ord for HandValue {
    fn cmp(&self, other: &Self) -> Ordering {
        // Lower scores are stronger.
        other.0.cmp(&self.0)
    }
}

impl PartialOrd for HandValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for HandValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.rank(), self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use primerank_cards::{CardList, Deck};
    use rand::prelude::*;

    fn cards(s: &str) -> CardList {
        s.parse().unwrap()
    }

    #[test]
    fn evaluate_hands() {
        let tests = [
            // Five cards.
            (7462, "2s 3d 4c 5h 7h", HandRank::HighCard),
            (6252, "As Ks Jc 7h 5d", HandRank::HighCard),
            (3448, "As Ac Jc 7h 5d", HandRank::OnePair),
            (2497, "As Ac Jc Jd 5d", HandRank::TwoPair),
            (1636, "As Ac Ad Jd 5d", HandRank::ThreeOfAKind),
            (1600, "As Ks Qd Jh Td", HandRank::Straight),
            (1542, "Ts 7s 4s 3s 2s", HandRank::Flush),
            (298, "4s 4c 4d 2s 2h", HandRank::FullHouse),
            (19, "As Ac Ad Ah 5h", HandRank::FourOfAKind),
            (1, "As Ks Qs Js Ts", HandRank::StraightFlush),
            // Six cards.
            (6252, "3d As Ks Jc 7h 5d", HandRank::HighCard),
            (3448, "3d As Ac Jc 7h 5d", HandRank::OnePair),
            (2497, "3d As Ac Jc Jd 5d", HandRank::TwoPair),
            (1636, "3d As Ac Ad Jd 5d", HandRank::ThreeOfAKind),
            (1600, "3d As Ks Qd Jh Td", HandRank::Straight),
            (1542, "3d Ts 7s 4s 3s 2s", HandRank::Flush),
            (298, "3d 4s 4c 4d 2s 2h", HandRank::FullHouse),
            (19, "3d As Ac Ad Ah 5h", HandRank::FourOfAKind),
            (1, "3d As Ks Qs Js Ts", HandRank::StraightFlush),
            // Seven cards.
            (6252, "2d 3d As Ks Jc 7h 5d", HandRank::HighCard),
            (3448, "2d 3d As Ac Jc 7h 5d", HandRank::OnePair),
            (2497, "2d 3d As Ac Jc Jd 5d", HandRank::TwoPair),
            (1636, "2c 3d As Ac Ad Jd 5d", HandRank::ThreeOfAKind),
            (1600, "2d 3d As Ks Qd Jh Td", HandRank::Straight),
            (1542, "2d 3d Ts 7s 4s 3s 2s", HandRank::Flush),
            (298, "2d 3d 4s 4c 4d 2s 2h", HandRank::FullHouse),
            (19, "2d 3d As Ac Ad Ah 5h", HandRank::FourOfAKind),
            (1, "2d 3d As Ks Qs Js Ts", HandRank::StraightFlush),
        ];

        for (score, hand, rank) in tests {
            let value = evaluate(&cards(hand)).unwrap();
            assert_eq!(value, score, "{hand}");
            assert_eq!(classify(value), rank, "{hand}");
        }
    }

    #[test]
    fn invalid_card_counts() {
        let err = |n, community| EvalError::InvalidCardCount {
            cards: n,
            community,
        };

        assert_eq!(evaluate(&cards("Ks Qs Js Ts")), Err(err(4, 0)));
        assert_eq!(evaluate(&cards("Tc 2d 3d As Ks Qs Js Ts")), Err(err(8, 0)));
        assert_eq!(evaluate(&[]), Err(err(0, 0)));
        assert_eq!(best_hand(&cards("Ks Qs Js Ts")), Err(err(4, 0)));

        let hole = cards("Ac Qd Js 4h");
        let board = cards("5c Kd Th 2s 3h");
        assert_eq!(evaluate_omaha(&hole[..3], &board), Err(err(3, 5)));
        assert_eq!(evaluate_omaha(&hole, &board[..4]), Err(err(4, 4)));
        assert_eq!(best_omaha_hand(&board, &hole), Err(err(5, 4)));
    }

    #[test]
    fn best_hands() {
        let tests = [
            ("As Ks Jc 7h 5d", "As Ks Jc 7h 5d"),
            ("2d 3d As Ks Jc 7h 5d", "As Ks Jc 7h 5d"),
            ("2d 3d As Ac Jc 7h 5d", "As Ac Jc 7h 5d"),
            ("2d 3d As Ac Jc Jd 5d", "As Ac Jc Jd 5d"),
            ("2c 3d 3h 3c Ad Jd 5d", "3d 3h 3c Ad Jd"),
            ("Jh 2d 3d Ks As Qd Td", "Jh Ks As Qd Td"),
            ("2s 3d Ts 7s 4s 3s 9s", "Ts 7s 4s 3s 9s"),
            ("2d 3d 4s 4c 4d 3s 3h", "3d 4s 4c 4d 3s"),
            ("2d 3d 2s 2c Ad 2h 5h", "2d 2s 2c Ad 2h"),
            ("2s 3d As Ks 4s 3s 5s", "2s As 4s 3s 5s"),
        ];

        for (hand, expected) in tests {
            let hand = cards(hand);
            let (score, best) = best_hand(&hand).unwrap();
            assert_eq!(CardList::from(&best[..]).to_string(), expected);
            assert_eq!(score, evaluate(&hand).unwrap());
        }

        let (score, best) = best_hand(&cards("2d 3d As Ks Jc 7h 5d")).unwrap();
        assert_eq!(score, 6252);
        assert_eq!(CardList::from(&best[..]), cards("As Ks Jc 7h 5d"));
    }

    #[test]
    fn omaha_hands() {
        let tests = [
            (6251, "8c 3d As Ks", "Jc 7h 5d 2d 6s", "As Ks", "Jc 7h 6s"),
            (6251, "Qc 3d As Ks", "Jc 7h 5d 2d 6s", "As Ks", "Jc 7h 6s"),
            (6699, "Qc 3d Ks Ts", "Jc 7h 5d 2d 6s", "Qc Ks", "Jc 7h 6s"),
            (722, "Js 8h Th 7d", "8c 3h Ah 5h 8s", "8h Th", "3h Ah 5h"),
            // No flush with a single suited hole card.
            (6699, "Qc 3d Ks Ts", "Jc 7c 5c 2c 6c", "Qc Ks", "Jc 7c 6c"),
            // Lowest straight as a broadway needs three hole cards.
            (1609, "Ac Qd Js 4h", "5c Kd Th 2s 3h", "Ac 4h", "5c 2s 3h"),
            (1600, "Ac Qd 3h 4h", "5c Kd Th 2s Js", "Ac Qd", "Kd Th Js"),
            (2853, "2c Jd 8h 4h", "Jc 8d 3h Qs Ad", "Jd 8h", "Jc 8d Ad"),
            (5093, "7h As Jc 6d", "6s Kd 2s 4s 3d", "As 6d", "6s Kd 4s"),
            (288, "Kc 2s 4c Qd", "3h 7c 4d 4s Kd", "Kc 4c", "4d 4s Kd"),
        ];

        for (score, hole, board, best_hole, best_board) in tests {
            let (hole, board) = (cards(hole), cards(board));
            assert_eq!(evaluate_omaha(&hole, &board), Ok(score), "{hole} {board}");

            let (value, h, b) = best_omaha_hand(&hole, &board).unwrap();
            assert_eq!(value, score);
            assert_eq!(CardList::from(&h[..]).to_string(), best_hole);
            assert_eq!(CardList::from(&b[..]).to_string(), best_board);
        }
    }

    #[test]
    fn omaha_is_not_best_of_nine() {
        let hole = cards("Ac Qd Js 4h");
        let board = cards("5c Kd Th 2s 3h");

        let mut all = hole.to_vec();
        all.extend_from_slice(&board[..3]);
        // Broadway with three hole cards.
        assert_eq!(evaluate(&all), Ok(1600));
        assert_eq!(evaluate_omaha(&hole, &board), Ok(1609));
    }

    #[test]
    fn six_and_seven_cards_match_best_five() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..1_000 {
            let mut deck = Deck::new_and_shuffled(&mut rng);
            let hand = deck.draw(7);

            for n in [6, 7] {
                let hand = &hand[..n];
                let (score, best) = best_hand(hand).unwrap();
                assert_eq!(evaluate(hand), Ok(score));
                assert_eq!(eval5(best[0], best[1], best[2], best[3], best[4]), score);
                assert!(best.iter().all(|c| hand.contains(c)));

                // No five cards subset is stronger.
                let mut min = u16::MAX;
                for skip in 0..n {
                    let rest = hand
                        .iter()
                        .enumerate()
                        .filter(|&(i, _)| i != skip)
                        .map(|(_, c)| *c)
                        .collect::<Vec<_>>();
                    min = min.min(evaluate(&rest).unwrap());
                }
                assert_eq!(min, score);
            }
        }
    }

    #[test]
    fn hand_values_order() {
        let v1 = HandValue::eval(&cards("As Ks Qs Js Ts")).unwrap();
        let v2 = HandValue::eval(&cards("2d 3d As Ks Jc 7h 5d")).unwrap();
        assert!(v1 > v2);
        assert_eq!(v1.rank(), HandRank::StraightFlush);
        assert_eq!(v2.score(), 6252);
        assert_eq!(v2.to_string(), "High Card (6252)");
        assert_eq!(HandValue::from_score(1), v1);

        let (v3, best) = HandValue::eval_with_best_hand(&cards("2d 3d As Ks Jc 7h 5d")).unwrap();
        assert_eq!(v3, v2);
        assert_eq!(CardList::from(&best[..]).to_string(), "As Ks Jc 7h 5d");

        let omaha = HandValue::eval_omaha(&cards("Ac Qd Js 4h"), &cards("5c Kd Th 2s 3h"));
        assert_eq!(omaha.map(|v| v.rank()), Ok(HandRank::Straight));
    }

    #[test]
    fn concurrent_evaluation() {
        let hands = (0..8u64)
            .map(|seed| Deck::new_and_shuffled(&mut StdRng::seed_from_u64(seed)).draw(7))
            .collect::<Vec<_>>();
        let expected = hands
            .iter()
            .map(|h| evaluate(h).unwrap())
            .collect::<Vec<_>>();

        std::thread::scope(|s| {
            let handles = hands
                .iter()
                .map(|h| s.spawn(move || (0..1_000).map(|_| evaluate(h).unwrap()).max()))
                .collect::<Vec<_>>();

            for (handle, expected) in handles.into_iter().zip(expected) {
                assert_eq!(handle.join().unwrap(), Some(expected));
            }
        });
    }
}
