// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Primerank Poker cards types.
//!
//! This crate define types to create cards:
//!
//! ```
//! # use primerank_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! let kd = "Kd".parse::<Card>().unwrap();
//! assert_eq!(ah.to_string(), "Ah");
//! assert_eq!(kd.rank(), Rank::King);
//! ```
//!
//! a [CardList] type to parse and display hands:
//!
//! ```
//! # use primerank_cards::{CardList, sort};
//! let mut cards = "Ah 2d Ac 3s As".parse::<CardList>().unwrap();
//! sort::sort_groups(&mut cards);
//! assert_eq!(cards.to_string(), "Ac Ah As 3s 2d");
//! ```
//!
//! and a [Deck] type for shuffling, drawing, and iterating cards in the deck.
//!
//! For example to iterate through all 5 cards hands:
//!
//! ```no_run
//! # use primerank_cards::Deck;
//! let mut counter = 0;
//! Deck::default().for_each(5, |hand| {
//!     counter += 1;
//! });
//! assert_eq!(counter, 2_598_960);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod card;
pub use card::{Card, Rank, Suit};

mod deck;
pub use deck::Deck;

mod error;
pub use error::CardError;

mod list;
pub use list::CardList;

pub mod sort;
