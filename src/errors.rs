// Copyright 2017-2019 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Errors raised at the boundary of the engine. Everything below the parsers
//! (move generation, legality filtering, move application and perft) is total
//! over well-formed positions and never produces one of these.
use thiserror::Error;

/// A square written in algebraic notation could not be understood.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum NotationError {
    #[error("algebraic square must be exactly two characters: {0:?}")]
    InvalidLength(String),
    #[error("invalid file character: {0:?}")]
    InvalidFile(char),
    #[error("invalid rank character: {0:?}")]
    InvalidRank(char),
    #[error("square index out of range: {0}")]
    IndexOutOfRange(usize),
}

/// Possible errors that can arise when parsing a FEN string into a `Position`.
/// Every variant carries the offending portion of the input.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum FenParseError {
    #[error("FEN string is not printable ASCII: {0:?}")]
    NotPrintableAscii(String),
    #[error("FEN string doesn't have exactly 6 data fields: {0:?}")]
    WrongFieldCount(String),
    #[error("piece placement data contains invalid characters: {0:?}")]
    InvalidPlacement(String),
    #[error("at least one of the kings is missing: {0:?}")]
    MissingKing(String),
    #[error("a side has more than one king: {0:?}")]
    TooManyKings(String),
    #[error("piece placement data doesn't have exactly 8 ranks: {0:?}")]
    WrongRankCount(String),
    #[error("rank doesn't describe exactly 8 files: {0:?}")]
    FileDoesNotSumToEight(String),
    #[error("illegal side to move: {0:?}")]
    InvalidSideToMove(String),
    #[error("castling availability is incorrect: {0:?}")]
    InvalidCastle(String),
    #[error("en passant target is not a valid target square: {0:?}")]
    InvalidEnPassant(String),
    #[error("halfmove clock is not an integer in 0..=4294967295: {0:?}")]
    InvalidHalfmove(String),
    #[error("fullmove counter is not an integer in 1..=4294967295: {0:?}")]
    InvalidFullmove(String),
}

/// A move that is structurally malformed, or that is not legal in the
/// position it was offered to.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum IllegalMoveError {
    #[error("move source and destination are the same square: {0}")]
    SameSquare(String),
    #[error("move is not legal in this position: {0}")]
    NotLegal(String),
    #[error("move text does not name a legal move: {0:?}")]
    Unrecognized(String),
}
