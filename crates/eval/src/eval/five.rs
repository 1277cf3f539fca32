// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Five cards evaluator.
use primerank_cards::Card;

use super::tables::{FLUSHES, HASH_ADJUST, HASH_VALUES, UNIQUE5};

/// Evaluates a five cards hand and returns its score.
///
/// The score goes from 1 for a royal flush to 7462 for a seven high, the
/// cards must be distinct.
#[inline]
pub fn eval5(c1: Card, c2: Card, c3: Card, c4: Card, c5: Card) -> u16 {
    let (c1, c2, c3, c4, c5) = (c1.id(), c2.id(), c3.id(), c4.id(), c5.id());
    let q = ((c1 | c2 | c3 | c4 | c5) >> 16) as usize;

    if c1 & c2 & c3 & c4 & c5 & 0xf000 != 0 {
        return FLUSHES[q];
    }

    let s = UNIQUE5[q];
    if s != 0 {
        return s;
    }

    let product = (c1 & 0xff) * (c2 & 0xff) * (c3 & 0xff) * (c4 & 0xff) * (c5 & 0xff);
    HASH_VALUES[find_fast(product)]
}

/// Perfect hash of a ranks primes product for hands with paired ranks.
#[inline]
pub(crate) fn find_fast(mut u: u32) -> usize {
    u = u.wrapping_add(0xe91aaa35);
    u ^= u >> 16;
    u = u.wrapping_add(u << 8);
    u ^= u >> 4;
    let b = (u >> 8) & 0x1ff;
    let a = u.wrapping_add(u << 2) >> 19;
    (a ^ HASH_ADJUST[b as usize] as u32) as usize
}

#[cfg(test)]
mod tests {
    use super::*;
    use ahash::HashSet;
    use primerank_cards::{CardList, Deck};

    use crate::HandRank;

    fn eval(s: &str) -> u16 {
        let c = s.parse::<CardList>().unwrap();
        eval5(c[0], c[1], c[2], c[3], c[4])
    }

    #[test]
    fn known_hands() {
        assert_eq!(eval("As Ks Qs Js Ts"), 1);
        assert_eq!(eval("5h 4h 3h 2h Ah"), 10);
        assert_eq!(eval("As Ac Ad Ah 5h"), 19);
        assert_eq!(eval("4s 4c 4d 2s 2h"), 298);
        assert_eq!(eval("Ts 7s 4s 3s 2s"), 1542);
        assert_eq!(eval("As Ks Qd Jh Td"), 1600);
        assert_eq!(eval("5d 4c 3h 2s Ah"), 1609);
        assert_eq!(eval("As Ac Ad Jd 5d"), 1636);
        assert_eq!(eval("As Ac Jc Jd 5d"), 2497);
        assert_eq!(eval("As Ac Jc 7h 5d"), 3448);
        assert_eq!(eval("As Ks Jc 7h 5d"), 6252);
        assert_eq!(eval("2s 3d 4c 5h 7h"), 7462);
    }

    #[test]
    fn permutations() {
        let c = "Kd Kh 7c 7s 2d".parse::<CardList>().unwrap();
        let expected = eval5(c[0], c[1], c[2], c[3], c[4]);

        let mut count = 0;
        for a in 0..5 {
            for b in (0..5).filter(|&b| b != a) {
                for d in (0..5).filter(|&d| d != a && d != b) {
                    for e in (0..5).filter(|&e| e != a && e != b && e != d) {
                        let f = 10 - a - b - d - e;
                        assert_eq!(eval5(c[a], c[b], c[d], c[e], c[f]), expected);
                        count += 1;
                    }
                }
            }
        }

        assert_eq!(count, 120);
    }

    #[test]
    fn all_five_cards_hands() {
        let mut counts = [0usize; 9];
        let mut scores = HashSet::default();

        Deck::default().for_each(5, |c| {
            let score = eval5(c[0], c[1], c[2], c[3], c[4]);
            assert!((1..=7462).contains(&score));
            counts[HandRank::from_score(score) as usize] += 1;
            scores.insert(score);
        });

        assert_eq!(scores.len(), 7462);
        assert_eq!(counts[HandRank::HighCard as usize], 1_302_540);
        assert_eq!(counts[HandRank::OnePair as usize], 1_098_240);
        assert_eq!(counts[HandRank::TwoPair as usize], 123_552);
        assert_eq!(counts[HandRank::ThreeOfAKind as usize], 54_912);
        assert_eq!(counts[HandRank::Straight as usize], 10_200);
        assert_eq!(counts[HandRank::Flush as usize], 5_108);
        assert_eq!(counts[HandRank::FullHouse as usize], 3_744);
        assert_eq!(counts[HandRank::FourOfAKind as usize], 624);
        assert_eq!(counts[HandRank::StraightFlush as usize], 40);
    }

    #[test]
    fn hash_is_collision_free() {
        let mut indices = HashSet::default();
        let mut products = HashSet::default();

        Deck::default().for_each(5, |c| {
            let unique = c.iter().fold(0, |acc, c| acc | c.bit_rank()).count_ones() == 5;
            if !unique {
                let product = c.iter().map(|c| c.prime()).product::<u32>();
                if products.insert(product) {
                    assert!(indices.insert(find_fast(product)));
                }
            }
        });

        assert_eq!(products.len(), 4888);
        assert_eq!(indices.len(), 4888);
    }
}
