// Copyright 2017-2019 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! King-safety filtering of pseudo-legal moves.
//!
//! A candidate is legal exactly when, after playing it, the mover's king is
//! not on a square the opponent attacks. Each candidate is made on a copy of
//! the position, tested and thrown away.
use crate::attacks;
use crate::move_generator::{self, MoveVec};
use crate::move_maker;
use crate::moves::Move;
use crate::position::Position;

/// Whether `mov`, known to be pseudo-legal in `pos`, keeps the mover's king
/// safe.
pub fn is_legal_given_pseudolegal(pos: &Position, mov: Move) -> bool {
    let color = pos.side_to_move();
    let next = move_maker::make(pos, mov);
    match next.king_square(color) {
        Some(king) => !attacks::attacked_squares(next.board(), color.toggle()).test(king),
        None => true,
    }
}

/// Keeps only the candidates that do not leave the mover's king attacked.
pub fn filter(pos: &Position, pseudo_legal: &[Move]) -> MoveVec {
    pseudo_legal
        .iter()
        .copied()
        .filter(|&mov| is_legal_given_pseudolegal(pos, mov))
        .collect()
}

/// Every legal move for the side to move.
pub fn legal_moves(pos: &Position) -> MoveVec {
    let pseudo_legal = move_generator::generate(pos);
    filter(pos, &pseudo_legal)
}
