// Copyright 2017-2019 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The `moves` module contains the definition of moves in the engine.
//!
//! A move records what kind of move it is, which piece makes it, where it
//! starts and where it ends. Promotion is orthogonal to the kind: a pawn push
//! or a pawn capture onto the last rank carries the kind of piece the pawn
//! becomes. Castles additionally carry the rook's source and destination so
//! that applying one never has to recompute where the rook goes.
use std::fmt::{self, Write};

use crate::errors::IllegalMoveError;
use crate::types::{Color, Piece, PieceKind, Square};

/// The shape of a move, independent of promotion.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum MoveKind {
    /// A non-capturing move by anything other than a pawn.
    Normal,
    /// A capture of the piece standing on the destination square.
    Capture,
    /// A single-square pawn advance.
    PawnPush,
    /// A two-square pawn advance from the pawn's starting rank.
    DoublePush,
    /// A pawn capture of a pawn that has just double-pushed past it.
    EnPassant,
    ShortCastle,
    LongCastle,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Move {
    kind: MoveKind,
    piece: Piece,
    source: Square,
    destination: Square,
    promotion: Option<PieceKind>,
    rook: Option<(Square, Square)>,
}

impl Move {
    /// Constructs a move after checking that it is structurally sound: the
    /// source and destination must differ.
    pub fn new(
        kind: MoveKind,
        piece: Piece,
        source: Square,
        destination: Square,
        promotion: Option<PieceKind>,
    ) -> Result<Move, IllegalMoveError> {
        if source == destination {
            return Err(IllegalMoveError::SameSquare(source.to_string()));
        }

        let rook = match kind {
            MoveKind::ShortCastle => Some(short_castle_rook(piece.color)),
            MoveKind::LongCastle => Some(long_castle_rook(piece.color)),
            _ => None,
        };

        Ok(Move {
            kind,
            piece,
            source,
            destination,
            promotion,
            rook,
        })
    }

    fn unchecked(kind: MoveKind, piece: Piece, source: Square, destination: Square) -> Move {
        debug_assert!(source != destination);
        Move {
            kind,
            piece,
            source,
            destination,
            promotion: None,
            rook: None,
        }
    }

    /// Constructs a quiet move by a piece other than a pawn.
    pub fn normal(piece: Piece, source: Square, destination: Square) -> Move {
        Move::unchecked(MoveKind::Normal, piece, source, destination)
    }

    /// Constructs a capture of whatever stands on the destination square.
    pub fn capture(piece: Piece, source: Square, destination: Square) -> Move {
        Move::unchecked(MoveKind::Capture, piece, source, destination)
    }

    pub fn pawn_push(color: Color, source: Square, destination: Square) -> Move {
        Move::unchecked(
            MoveKind::PawnPush,
            Piece::new(PieceKind::Pawn, color),
            source,
            destination,
        )
    }

    pub fn double_push(color: Color, source: Square, destination: Square) -> Move {
        Move::unchecked(
            MoveKind::DoublePush,
            Piece::new(PieceKind::Pawn, color),
            source,
            destination,
        )
    }

    pub fn en_passant(color: Color, source: Square, destination: Square) -> Move {
        Move::unchecked(
            MoveKind::EnPassant,
            Piece::new(PieceKind::Pawn, color),
            source,
            destination,
        )
    }

    /// Constructs a pawn push onto the last rank.
    pub fn promotion_push(
        color: Color,
        source: Square,
        destination: Square,
        kind: PieceKind,
    ) -> Move {
        let mut mov = Move::pawn_push(color, source, destination);
        mov.promotion = Some(kind);
        mov
    }

    /// Constructs a pawn capture onto the last rank.
    pub fn promotion_capture(
        color: Color,
        source: Square,
        destination: Square,
        kind: PieceKind,
    ) -> Move {
        let mut mov = Move::capture(Piece::new(PieceKind::Pawn, color), source, destination);
        mov.promotion = Some(kind);
        mov
    }

    /// Constructs a kingside castle for `color`, e1g1 or e8g8.
    pub fn short_castle(color: Color) -> Move {
        let (source, destination) = match color {
            Color::White => (Square::E1, Square::G1),
            Color::Black => (Square::E8, Square::G8),
        };

        let mut mov = Move::unchecked(
            MoveKind::ShortCastle,
            Piece::new(PieceKind::King, color),
            source,
            destination,
        );
        mov.rook = Some(short_castle_rook(color));
        mov
    }

    /// Constructs a queenside castle for `color`, e1c1 or e8c8.
    pub fn long_castle(color: Color) -> Move {
        let (source, destination) = match color {
            Color::White => (Square::E1, Square::C1),
            Color::Black => (Square::E8, Square::C8),
        };

        let mut mov = Move::unchecked(
            MoveKind::LongCastle,
            Piece::new(PieceKind::King, color),
            source,
            destination,
        );
        mov.rook = Some(long_castle_rook(color));
        mov
    }

    pub fn kind(self) -> MoveKind {
        self.kind
    }

    pub fn piece(self) -> Piece {
        self.piece
    }

    pub fn source(self) -> Square {
        self.source
    }

    pub fn destination(self) -> Square {
        self.destination
    }

    pub fn promotion(self) -> Option<PieceKind> {
        self.promotion
    }

    /// For castles, the rook's source and destination squares.
    pub fn rook(self) -> Option<(Square, Square)> {
        self.rook
    }

    /// Whether this move removes an enemy piece, including en passant.
    pub fn is_capture(self) -> bool {
        match self.kind {
            MoveKind::Capture | MoveKind::EnPassant => true,
            _ => false,
        }
    }

    pub fn is_en_passant(self) -> bool {
        self.kind == MoveKind::EnPassant
    }

    pub fn is_castle(self) -> bool {
        match self.kind {
            MoveKind::ShortCastle | MoveKind::LongCastle => true,
            _ => false,
        }
    }

    pub fn is_promotion(self) -> bool {
        self.promotion.is_some()
    }

    pub fn is_double_push(self) -> bool {
        self.kind == MoveKind::DoublePush
    }

    /// Returns an UCI-compatible string representation of this move.
    pub fn as_uci(self) -> String {
        self.to_string()
    }
}

fn short_castle_rook(color: Color) -> (Square, Square) {
    match color {
        Color::White => (Square::H1, Square::F1),
        Color::Black => (Square::H8, Square::F8),
    }
}

fn long_castle_rook(color: Color) -> (Square, Square) {
    match color {
        Color::White => (Square::A1, Square::D1),
        Color::Black => (Square::A8, Square::D8),
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}", self.source, self.destination)?;
        if let Some(kind) = self.promotion {
            f.write_char(kind.symbol())?;
        }

        Ok(())
    }
}
