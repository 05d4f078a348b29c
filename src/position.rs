// Copyright 2017-2019 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use std::fmt;

use crate::bitboard::Bitboard;
use crate::board::Board;
use crate::errors::FenParseError;
use crate::fen;
use crate::legality;
use crate::moves::Move;
use crate::types::{CastlingRights, Color, Piece, PieceKind, Square};

pub const START_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// A complete snapshot of the game at one instant. Positions are never edited
/// once built; making a move produces a new one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Position {
    pub(crate) board: Board,
    pub(crate) side_to_move: Color,
    pub(crate) castling_rights: CastlingRights,
    pub(crate) en_passant_target: Option<Square>,
    pub(crate) halfmove_clock: u32,
    pub(crate) fullmove_counter: u32,
}

//
// Board state getters
//

impl Position {
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    pub fn castling_rights(&self) -> CastlingRights {
        self.castling_rights
    }

    /// The square a pawn passed over on the previous move, if that move was a
    /// double push.
    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant_target
    }

    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    pub fn fullmove_counter(&self) -> u32 {
        self.fullmove_counter
    }

    pub fn can_castle_kingside(&self, color: Color) -> bool {
        self.castling_rights
            .contains(CastlingRights::kingside(color))
    }

    pub fn can_castle_queenside(&self, color: Color) -> bool {
        self.castling_rights
            .contains(CastlingRights::queenside(color))
    }

    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.board.piece_at(square)
    }

    pub fn pieces(&self, color: Color) -> Bitboard {
        self.board.pieces(color)
    }

    pub fn pieces_of_kind(&self, color: Color, kind: PieceKind) -> Bitboard {
        self.board.pieces_of_kind(color, kind)
    }

    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.board.king_square(color)
    }

    /// Whether the side to move is in check.
    pub fn is_check(&self) -> bool {
        self.board.is_check(self.side_to_move)
    }
}

//
// Construction and notation
//

impl Position {
    /// The standard initial position.
    pub fn start_position() -> Position {
        let mut board = Board::empty();
        let back_rank = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];

        for (file, &kind) in back_rank.iter().enumerate() {
            board.put(Square::A1.plus(file as i32), Piece::new(kind, Color::White));
            board.put(
                Square::A2.plus(file as i32),
                Piece::new(PieceKind::Pawn, Color::White),
            );
            board.put(
                Square::A7.plus(file as i32),
                Piece::new(PieceKind::Pawn, Color::Black),
            );
            board.put(Square::A8.plus(file as i32), Piece::new(kind, Color::Black));
        }

        Position {
            board,
            side_to_move: Color::White,
            castling_rights: CastlingRights::WHITE | CastlingRights::BLACK,
            en_passant_target: None,
            halfmove_clock: 0,
            fullmove_counter: 1,
        }
    }

    pub fn from_fen<S: AsRef<str>>(fen: S) -> Result<Position, FenParseError> {
        fen::parse(fen.as_ref())
    }

    pub fn to_fen(&self) -> String {
        fen::format(self)
    }

    /// Parses the UCI representation of a move (`e2e4`, `e7e8q`) into one of
    /// the legal moves of this position. Returns `None` for malformed text and
    /// for moves that are not legal here.
    pub fn move_from_uci(&self, move_str: &str) -> Option<Move> {
        let len = move_str.len();
        if len != 4 && len != 5 {
            return None;
        }

        legality::legal_moves(self)
            .iter()
            .find(|mov| mov.to_string() == move_str)
            .copied()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.board)?;
        writeln!(f)?;
        writeln!(f, "{}", self.to_fen())
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::start_position()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::moves::MoveKind;

    #[test]
    fn start_position_matches_fen() {
        let from_fen = Position::from_fen(START_POSITION_FEN).unwrap();
        assert_eq!(from_fen, Position::start_position());
        assert_eq!(START_POSITION_FEN, Position::start_position().to_fen());
    }

    #[test]
    fn start_position_getters() {
        let pos = Position::start_position();
        assert_eq!(Color::White, pos.side_to_move());
        assert!(pos.can_castle_kingside(Color::White));
        assert!(pos.can_castle_queenside(Color::Black));
        assert_eq!(None, pos.en_passant_target());
        assert_eq!(0, pos.halfmove_clock());
        assert_eq!(1, pos.fullmove_counter());
        assert_eq!(Some(Square::E1), pos.king_square(Color::White));
        assert_eq!(Some(Square::E8), pos.king_square(Color::Black));
        assert_eq!(16, pos.pieces(Color::Black).count());
        assert_eq!(
            8,
            pos.pieces_of_kind(Color::White, PieceKind::Pawn).count()
        );
        assert!(!pos.is_check());
    }

    #[test]
    fn uci_double_push() {
        let pos = Position::start_position();
        let mov = pos.move_from_uci("e2e4").unwrap();
        assert_eq!(MoveKind::DoublePush, mov.kind());
        assert_eq!(Square::E2, mov.source());
        assert_eq!(Square::E4, mov.destination());
    }

    #[test]
    fn uci_rejects_illegal_and_malformed() {
        let pos = Position::start_position();
        assert_eq!(None, pos.move_from_uci("e2e5"));
        assert_eq!(None, pos.move_from_uci("e2"));
        assert_eq!(None, pos.move_from_uci("e2e4qq"));
        assert_eq!(None, pos.move_from_uci("e7e5"));
    }

    #[test]
    fn uci_castle_and_promotion() {
        let pos = Position::from_fen("r3k3/1P6/8/8/8/8/8/4K2R w K - 0 1").unwrap();
        let castle = pos.move_from_uci("e1g1").unwrap();
        assert_eq!(MoveKind::ShortCastle, castle.kind());

        let promo = pos.move_from_uci("b7a8n").unwrap();
        assert!(promo.is_capture());
        assert_eq!(Some(PieceKind::Knight), promo.promotion());

        // a promotion needs its piece letter
        assert_eq!(None, pos.move_from_uci("b7b8"));
    }

    #[test]
    fn display_contains_grid_and_fen() {
        let text = Position::start_position().to_string();
        assert!(text.contains(" r  n  b  q  k  b  n  r | 8"));
        assert!(text.contains(" P  P  P  P  P  P  P  P | 2"));
        assert!(text.contains(START_POSITION_FEN));
    }
}
