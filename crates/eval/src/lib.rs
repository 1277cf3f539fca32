// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Primerank Poker hand evaluator.
//!
//! Poker hand evaluator for 5, 6 and 7 cards hands and Omaha hands. This
//! evaluator is a port of the [Cactus Kev's][kevlink] poker evaluator that
//! encodes each card with a prime number and uses a perfect hash to look up
//! the score of paired hands.
//!
//! Use [HandValue] to compare hands:
//!
//! ```
//! # use primerank_eval::*;
//! let flush = "Ts 7s 4s 3s 2s".parse::<CardList>().unwrap();
//! let pair = "3d As Ac Jc 7h 5d".parse::<CardList>().unwrap();
//! let v1 = HandValue::eval(&flush).unwrap();
//! let v2 = HandValue::eval(&pair).unwrap();
//! assert!(v1 > v2);
//! ```
//!
//! or [Hand] to get the best five cards and a description of the hand:
//!
//! ```
//! # use primerank_eval::*;
//! let hand = "9d 3d".parse::<Hand>().unwrap();
//! let board = "3h Qh 7h 4h 4s".parse::<CardList>().unwrap();
//! let result = hand.evaluate(&board).unwrap();
//! assert_eq!(result.rank(), HandRank::TwoPair);
//! assert_eq!(result.describe(), "Two Pair, Fours And Threes");
//! ```
//!
//! [kevlink]: http://suffe.cool/poker/evaluator.html
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod eval;
pub use eval::{
    HandRank, HandValue, best_hand, best_omaha_hand, classify, eval5, evaluate, evaluate_omaha,
};

mod error;
pub use error::EvalError;

mod hand;
pub use hand::{Hand, HandResult};

// Reexport cards types.
pub use primerank_cards::{Card, CardError, CardList, Deck, Rank, Suit, sort};
