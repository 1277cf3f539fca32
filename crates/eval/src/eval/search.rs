// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Best five cards search for 6, 7 cards hands and Omaha hands.
//!
//! The search evaluates each five cards subset from fixed tables of indices and
//! keeps the first subset with the minimum score, so ties are resolved by the
//! tables lexicographic order.
use primerank_cards::Card;

use super::five::eval5;

/// 5-subsets of 6 cards.
const PERMS6: [[usize; 5]; 6] = [
    [0, 1, 2, 3, 4],
    [0, 1, 2, 3, 5],
    [0, 1, 2, 4, 5],
    [0, 1, 3, 4, 5],
    [0, 2, 3, 4, 5],
    [1, 2, 3, 4, 5],
];

/// 5-subsets of 7 cards.
#[rustfmt::skip]
const PERMS7: [[usize; 5]; 21] = [
    [0, 1, 2, 3, 4], [0, 1, 2, 3, 5], [0, 1, 2, 3, 6],
    [0, 1, 2, 4, 5], [0, 1, 2, 4, 6], [0, 1, 2, 5, 6],
    [0, 1, 3, 4, 5], [0, 1, 3, 4, 6], [0, 1, 3, 5, 6],
    [0, 1, 4, 5, 6], [0, 2, 3, 4, 5], [0, 2, 3, 4, 6],
    [0, 2, 3, 5, 6], [0, 2, 4, 5, 6], [0, 3, 4, 5, 6],
    [1, 2, 3, 4, 5], [1, 2, 3, 4, 6], [1, 2, 3, 5, 6],
    [1, 2, 4, 5, 6], [1, 3, 4, 5, 6], [2, 3, 4, 5, 6],
];

/// 2-subsets of the 4 Omaha hole cards.
const OMAHA_HOLE: [[usize; 2]; 6] = [[0, 1], [0, 2], [0, 3], [1, 2], [1, 3], [2, 3]];

/// 3-subsets of the 5 Omaha board cards.
#[rustfmt::skip]
const OMAHA_BOARD: [[usize; 3]; 10] = [
    [0, 1, 2], [0, 1, 3], [0, 1, 4], [0, 2, 3], [0, 2, 4],
    [0, 3, 4], [1, 2, 3], [1, 2, 4], [1, 3, 4], [2, 3, 4],
];

#[inline]
fn perms(cards: &[Card]) -> &'static [[usize; 5]] {
    if cards.len() == 6 { &PERMS6 } else { &PERMS7 }
}

/// Minimum score of a 6 or 7 cards hand.
pub(crate) fn eval_more(cards: &[Card]) -> u16 {
    debug_assert!(cards.len() == 6 || cards.len() == 7);

    perms(cards)
        .iter()
        .map(|p| eval5(cards[p[0]], cards[p[1]], cards[p[2]], cards[p[3]], cards[p[4]]))
        .min()
        .unwrap_or(u16::MAX)
}

/// Minimum score of a 6 or 7 cards hand and the cards that made it.
pub(crate) fn best_more(cards: &[Card]) -> (u16, [Card; 5]) {
    debug_assert!(cards.len() == 6 || cards.len() == 7);

    let mut best_score = u16::MAX;
    let mut best = PERMS6[0];

    for p in perms(cards) {
        let score = eval5(cards[p[0]], cards[p[1]], cards[p[2]], cards[p[3]], cards[p[4]]);
        if score < best_score {
            best_score = score;
            best = *p;
        }
    }

    (best_score, best.map(|i| cards[i]))
}

/// Minimum score of an Omaha hand using two hole cards and three board cards.
pub(crate) fn eval_omaha(hole: &[Card], board: &[Card]) -> u16 {
    debug_assert!(hole.len() == 4 && board.len() == 5);

    let mut best_score = u16::MAX;
    for h in &OMAHA_HOLE {
        for b in &OMAHA_BOARD {
            let score = eval5(hole[h[0]], hole[h[1]], board[b[0]], board[b[1]], board[b[2]]);
            best_score = best_score.min(score);
        }
    }

    best_score
}

/// Minimum score of an Omaha hand with the hole and board cards that made it.
pub(crate) fn best_omaha(hole: &[Card], board: &[Card]) -> (u16, [Card; 2], [Card; 3]) {
    debug_assert!(hole.len() == 4 && board.len() == 5);

    let mut best_score = u16::MAX;
    let (mut best_hole, mut best_board) = (OMAHA_HOLE[0], OMAHA_BOARD[0]);

    for h in &OMAHA_HOLE {
        for b in &OMAHA_BOARD {
            let score = eval5(hole[h[0]], hole[h[1]], board[b[0]], board[b[1]], board[b[2]]);
            if score < best_score {
                best_score = score;
                best_hole = *h;
                best_board = *b;
            }
        }
    }

    (
        best_score,
        best_hole.map(|i| hole[i]),
        best_board.map(|i| board[i]),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use ahash::HashSet;

    #[test]
    fn subsets_tables() {
        fn check<const K: usize>(table: &[[usize; K]], n: usize, count: usize) {
            let unique = table.iter().collect::<HashSet<_>>();
            assert_eq!(unique.len(), count);
            for s in table {
                assert!(s.windows(2).all(|w| w[0] < w[1]));
                assert!(s.iter().all(|&i| i < n));
            }
            assert!(table.windows(2).all(|w| w[0] < w[1]));
        }

        check(&PERMS6, 6, 6);
        check(&PERMS7, 7, 21);
        check(&OMAHA_HOLE, 4, 6);
        check(&OMAHA_BOARD, 5, 10);
    }
}
