// Copyright 2017-2019 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Pseudo-legal move generation. Every move produced here obeys the movement
//! rules of its piece, but may leave the mover's own king in check; the
//! `legality` module removes those.
use arrayvec::ArrayVec;

use crate::attacks;
use crate::bitboard::Bitboard;
use crate::bitboard::{BB_RANK_1, BB_RANK_2, BB_RANK_7, BB_RANK_8};
use crate::moves::Move;
use crate::position::Position;
use crate::types::{Color, Direction, Piece, PieceKind, Square, PROMOTION_KINDS};

pub type MoveVec = ArrayVec<[Move; 256]>;

#[derive(Copy, Clone, Debug, Default)]
pub struct MoveGenerator;

impl MoveGenerator {
    pub fn new() -> MoveGenerator {
        MoveGenerator
    }

    /// Appends every pseudo-legal move for the side to move to `moves`.
    pub fn generate_moves(&self, pos: &Position, moves: &mut MoveVec) {
        let color = pos.side_to_move();
        self.generate_pawn_moves(pos, color, moves);
        self.generate_knight_moves(pos, color, moves);
        self.generate_sliding_moves(pos, color, PieceKind::Bishop, moves);
        self.generate_sliding_moves(pos, color, PieceKind::Rook, moves);
        self.generate_sliding_moves(pos, color, PieceKind::Queen, moves);
        self.generate_king_moves(pos, color, moves);
    }

    fn generate_pawn_moves(&self, pos: &Position, color: Color, moves: &mut MoveVec) {
        let enemy_pieces = pos.pieces(color.toggle());
        let piece_map = pos.board().occupancy();
        let (start_rank, promo_rank, pawn_dir, ep_dir) = match color {
            Color::White => (BB_RANK_2, BB_RANK_8, Direction::North, Direction::South),
            Color::Black => (BB_RANK_7, BB_RANK_1, Direction::South, Direction::North),
        };

        for pawn in pos.pieces_of_kind(color, PieceKind::Pawn) {
            // A pawn can't stand on its promotion rank, so one step forward
            // always stays on the board.
            if promo_rank.test(pawn) {
                continue;
            }

            let target = pawn.towards(pawn_dir);
            if !piece_map.test(target) {
                if promo_rank.test(target) {
                    for &kind in PROMOTION_KINDS.iter() {
                        moves.push(Move::promotion_push(color, pawn, target, kind));
                    }
                } else {
                    moves.push(Move::pawn_push(color, pawn, target));
                    if start_rank.test(pawn) {
                        let two_push_target = target.towards(pawn_dir);
                        if !piece_map.test(two_push_target) {
                            moves.push(Move::double_push(color, pawn, two_push_target));
                        }
                    }
                }
            }

            let pawn_attacks = attacks::pawn_attacks(pawn, color);
            for target in pawn_attacks & enemy_pieces {
                if promo_rank.test(target) {
                    for &kind in PROMOTION_KINDS.iter() {
                        moves.push(Move::promotion_capture(color, pawn, target, kind));
                    }
                } else {
                    moves.push(Move::capture(
                        Piece::new(PieceKind::Pawn, color),
                        pawn,
                        target,
                    ));
                }
            }

            if let Some(ep_square) = pos.en_passant_target() {
                // The pawn that double-pushed stands directly behind the
                // target square, from this side's point of view.
                if pawn_attacks.test(ep_square)
                    && !piece_map.test(ep_square)
                    && pos
                        .pieces_of_kind(color.toggle(), PieceKind::Pawn)
                        .test(ep_square.towards(ep_dir))
                {
                    moves.push(Move::en_passant(color, pawn, ep_square));
                }
            }
        }
    }

    fn generate_knight_moves(&self, pos: &Position, color: Color, moves: &mut MoveVec) {
        let piece = Piece::new(PieceKind::Knight, color);
        for knight in pos.pieces_of_kind(color, PieceKind::Knight) {
            let targets = attacks::knight_attacks(knight);
            self.push_targets(pos, piece, knight, targets, moves);
        }
    }

    fn generate_sliding_moves(
        &self,
        pos: &Position,
        color: Color,
        kind: PieceKind,
        moves: &mut MoveVec,
    ) {
        let piece = Piece::new(kind, color);
        let occupancy = pos.board().occupancy();
        for source in pos.pieces_of_kind(color, kind) {
            let targets = piece.attacks(source, occupancy);
            self.push_targets(pos, piece, source, targets, moves);
        }
    }

    fn generate_king_moves(&self, pos: &Position, color: Color, moves: &mut MoveVec) {
        let piece = Piece::new(PieceKind::King, color);
        let king = match pos.king_square(color) {
            Some(king) => king,
            None => return,
        };

        self.push_targets(pos, piece, king, attacks::king_attacks(king), moves);

        let can_kingside = pos.can_castle_kingside(color);
        let can_queenside = pos.can_castle_queenside(color);
        if !can_kingside && !can_queenside {
            return;
        }

        let home = match color {
            Color::White => Square::E1,
            Color::Black => Square::E8,
        };

        if king != home {
            return;
        }

        let piece_map = pos.board().occupancy();
        let danger = attacks::attacked_squares(pos.board(), color.toggle());

        // can't castle out of check
        if danger.test(king) {
            return;
        }

        let rooks = pos.pieces_of_kind(color, PieceKind::Rook);
        if can_kingside {
            let one = king.towards(Direction::East);
            let two = one.towards(Direction::East);
            let rook = two.towards(Direction::East);
            if rooks.test(rook)
                && !piece_map.test(one)
                && !piece_map.test(two)
                && !danger.test(one)
                && !danger.test(two)
            {
                moves.push(Move::short_castle(color));
            }
        }

        if can_queenside {
            let one = king.towards(Direction::West);
            let two = one.towards(Direction::West);
            let three = two.towards(Direction::West);
            let rook = three.towards(Direction::West);

            // three can be attacked, but it can't be occupied. The rook
            // crosses it on the way to its destination but the king does not.
            if rooks.test(rook)
                && !piece_map.test(one)
                && !piece_map.test(two)
                && !piece_map.test(three)
                && !danger.test(one)
                && !danger.test(two)
            {
                moves.push(Move::long_castle(color));
            }
        }
    }

    fn push_targets(
        &self,
        pos: &Position,
        piece: Piece,
        source: Square,
        targets: Bitboard,
        moves: &mut MoveVec,
    ) {
        let enemy_pieces = pos.pieces(piece.color.toggle());
        let allied_pieces = pos.pieces(piece.color);
        for target in targets & !allied_pieces {
            if enemy_pieces.test(target) {
                moves.push(Move::capture(piece, source, target));
            } else {
                moves.push(Move::normal(piece, source, target));
            }
        }
    }
}

/// Every pseudo-legal move for the side to move.
pub fn generate(pos: &Position) -> MoveVec {
    let mut moves = MoveVec::default();
    MoveGenerator::new().generate_moves(pos, &mut moves);
    moves
}
