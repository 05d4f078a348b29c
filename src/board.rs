// Copyright 2017-2019 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The occupancy model: where every piece stands.
use std::fmt::{self, Write};

use crate::attacks;
use crate::bitboard::Bitboard;
use crate::types::{Color, Piece, PieceKind, Square, TableIndex};
use crate::types::{FILES, PIECE_KINDS, RANKS};

/// Twelve disjoint piece sets, one per (color, kind), plus a per-color union
/// and the location of each king.
///
/// The piece sets are indexed `kind + 6 * color`, so white pawns through
/// white king come first and black pawns through black king after.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    boards_by_piece: [Bitboard; 12],
    boards_by_color: [Bitboard; 2],
    kings: [Option<Square>; 2],
}

fn board_index(color: Color, kind: PieceKind) -> usize {
    kind.as_index() + 6 * color.as_index()
}

impl Board {
    /// A board with nothing on it.
    pub fn empty() -> Board {
        Board {
            boards_by_piece: [Bitboard::none(); 12],
            boards_by_color: [Bitboard::none(); 2],
            kings: [None; 2],
        }
    }

    pub fn pieces(&self, color: Color) -> Bitboard {
        self.boards_by_color[color.as_index()]
    }

    pub fn pieces_of_kind(&self, color: Color, kind: PieceKind) -> Bitboard {
        self.boards_by_piece[board_index(color, kind)]
    }

    pub fn occupancy(&self) -> Bitboard {
        self.pieces(Color::White) | self.pieces(Color::Black)
    }

    /// The piece standing on `square`, if any. The twelve sets are consulted
    /// in a fixed order, white pawns first and black king last.
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        if !self.occupancy().test(square) {
            return None;
        }

        for (index, board) in self.boards_by_piece.iter().enumerate() {
            if board.test(square) {
                let color = if index < 6 { Color::White } else { Color::Black };
                return Some(Piece::new(PIECE_KINDS[index % 6], color));
            }
        }

        None
    }

    /// The square of `color`'s king. Every position reachable through the FEN
    /// parser or the move maker has exactly one king per color, so this is
    /// only `None` for hand-built boards.
    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.kings[color.as_index()]
    }

    /// Places `piece` on `square`, which must be empty.
    pub(crate) fn put(&mut self, square: Square, piece: Piece) {
        debug_assert!(self.piece_at(square).is_none(), "square already occupied");
        self.boards_by_piece[board_index(piece.color, piece.kind)].set(square);
        self.boards_by_color[piece.color.as_index()].set(square);
        if piece.kind == PieceKind::King {
            self.kings[piece.color.as_index()] = Some(square);
        }
    }

    /// Clears `square`, returning whatever stood there.
    pub(crate) fn remove(&mut self, square: Square) -> Option<Piece> {
        let piece = self.piece_at(square)?;
        self.boards_by_piece[board_index(piece.color, piece.kind)].unset(square);
        self.boards_by_color[piece.color.as_index()].unset(square);
        if piece.kind == PieceKind::King && self.kings[piece.color.as_index()] == Some(square) {
            self.kings[piece.color.as_index()] = None;
        }
        Some(piece)
    }

    /// Every piece of `attacker`'s that attacks `target`.
    ///
    /// Works backwards from the target: a piece of some kind attacks the target
    /// exactly when a piece of that kind standing on the target would attack
    /// it. Pawns are the exception, since their attacks depend on direction,
    /// so the reverse lookup uses the defending color's pawn pattern.
    pub fn squares_attacking(&self, attacker: Color, target: Square) -> Bitboard {
        let occupancy = self.occupancy();
        let queens = self.pieces_of_kind(attacker, PieceKind::Queen);
        let diagonal = self.pieces_of_kind(attacker, PieceKind::Bishop) | queens;
        let straight = self.pieces_of_kind(attacker, PieceKind::Rook) | queens;

        (attacks::bishop_attacks(target, occupancy) & diagonal)
            | (attacks::rook_attacks(target, occupancy) & straight)
            | (attacks::knight_attacks(target) & self.pieces_of_kind(attacker, PieceKind::Knight))
            | (attacks::king_attacks(target) & self.pieces_of_kind(attacker, PieceKind::King))
            | (attacks::pawn_attacks(target, attacker.toggle())
                & self.pieces_of_kind(attacker, PieceKind::Pawn))
    }

    /// Whether `color`'s king stands on a square the other side attacks.
    pub fn is_check(&self, color: Color) -> bool {
        match self.king_square(color) {
            Some(king) => !self.squares_attacking(color.toggle(), king).empty(),
            None => false,
        }
    }
}

impl Default for Board {
    fn default() -> Board {
        Board::empty()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for &rank in RANKS.iter().rev() {
            for &file in FILES.iter() {
                let sq = Square::of(rank, file);
                match self.piece_at(sq) {
                    Some(piece) => write!(f, " {} ", piece)?,
                    None => write!(f, " . ")?,
                }
            }

            writeln!(f, "| {}", rank)?;
        }

        for _ in FILES.iter() {
            write!(f, "---")?;
        }

        writeln!(f)?;
        for file in FILES.iter() {
            f.write_char(' ')?;
            write!(f, "{}", file)?;
            f.write_char(' ')?;
        }

        writeln!(f)
    }
}
