// Copyright 2017-2019 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Move application. `make` never touches the position it is given; it
//! returns the successor.
use crate::moves::Move;
use crate::position::Position;
use crate::types::{CastlingRights, Color, Piece, PieceKind, Square};

/// Applies `mov` to `pos`, producing the next position.
///
/// No validation is performed. The move must have come from the move
/// generator for this position, or otherwise be structurally sound for it.
pub fn make(pos: &Position, mov: Move) -> Position {
    let mut next = pos.clone();
    let color = pos.side_to_move();
    let moving_piece = mov.piece();

    // Remove the captured piece first. The victim is usually on the
    // destination square; en passant is the exception, where it lies one rank
    // behind the destination from the mover's point of view.
    if mov.is_capture() {
        let target_square = if mov.is_en_passant() {
            mov.destination().towards(color.toggle().forward())
        } else {
            mov.destination()
        };

        next.board.remove(target_square);
        next.castling_rights &= !rights_lost_at(target_square);
    }

    // Castles move two pieces. The rook is handled here and the king below.
    if let Some((rook_source, rook_destination)) = mov.rook() {
        if let Some(rook) = next.board.remove(rook_source) {
            next.board.put(rook_destination, rook);
        }
    }

    let piece_to_add = match mov.promotion() {
        Some(kind) => Piece::new(kind, color),
        None => moving_piece,
    };

    next.board.remove(mov.source());
    next.board.put(mov.destination(), piece_to_add);

    next.en_passant_target = if mov.is_double_push() {
        Some(mov.source().towards(color.forward()))
    } else {
        None
    };

    if moving_piece.kind == PieceKind::King {
        next.castling_rights &= !CastlingRights::both(color);
    }
    next.castling_rights &= !rights_lost_at(mov.source());

    next.halfmove_clock = if mov.is_capture() || moving_piece.kind == PieceKind::Pawn {
        0
    } else {
        pos.halfmove_clock().saturating_add(1)
    };

    if color == Color::Black {
        next.fullmove_counter = pos.fullmove_counter().saturating_add(1);
    }

    next.side_to_move = color.toggle();
    next
}

/// The castling right that depends on a rook standing on `square`. Anything
/// leaving or being captured on a rook's home square clears that right.
fn rights_lost_at(square: Square) -> CastlingRights {
    match square {
        Square::A1 => CastlingRights::WHITE_QUEENSIDE,
        Square::H1 => CastlingRights::WHITE_KINGSIDE,
        Square::A8 => CastlingRights::BLACK_QUEENSIDE,
        Square::H8 => CastlingRights::BLACK_KINGSIDE,
        _ => CastlingRights::NONE,
    }
}
