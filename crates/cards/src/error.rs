// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Cards parsing errors.
use thiserror::Error;

/// An error parsing a card from its text representation.
#[derive(Error, Debug, Clone, PartialEq, Eq, Hash)]
pub enum CardError {
    /// The card text is not exactly two characters.
    #[error("invalid card {0:?}: need a two characters string")]
    InvalidFormat(String),
    /// The first character is not a valid rank.
    #[error("invalid card {0:?}: invalid rank")]
    InvalidRank(String),
    /// The second character is not a valid suit.
    #[error("invalid card {0:?}: invalid suit")]
    InvalidSuit(String),
}
