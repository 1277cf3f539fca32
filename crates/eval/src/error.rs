// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Evaluation errors.
use thiserror::Error;

/// An error evaluating a hand.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EvalError {
    /// The number of cards is not valid for the requested evaluation.
    #[error("invalid card count: {cards} cards with {community} community cards")]
    InvalidCardCount {
        /// Number of hand or hole cards.
        cards: usize,
        /// Number of community cards.
        community: usize,
    },
}
