// Copyright 2017-2019 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Value types shared by every part of the engine: squares, ranks, files,
//! colors, pieces, ray directions and castling rights.
use num_traits::{FromPrimitive, ToPrimitive};
use std::convert::TryFrom;
use std::fmt::{self, Display, Write};

use crate::attacks;
use crate::bitboard::Bitboard;
use crate::errors::NotationError;

// TableIndex is a trait for all types that can serve as an index into a table,
// such as the attack tables and the per-piece bitboards.
pub trait TableIndex {
    fn as_index(self) -> usize;
}

impl<T> TableIndex for T
where
    T: FromPrimitive + ToPrimitive,
{
    fn as_index(self) -> usize {
        self.to_usize().unwrap_or(0)
    }
}

macro_rules! squares {
    ($($name:ident),*) => {
        /// A square on the board, numbered little-endian rank-file: `A1` is 0,
        /// `H1` is 7, `A8` is 56 and `H8` is 63.
        #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, FromPrimitive, ToPrimitive)]
        pub enum Square {
            $($name),*
        }

        /// Every square, indexed by its own discriminant.
        pub static SQUARES: [Square; 64] = [$(Square::$name),*];
    };
}

squares! {
    A1, B1, C1, D1, E1, F1, G1, H1,
    A2, B2, C2, D2, E2, F2, G2, H2,
    A3, B3, C3, D3, E3, F3, G3, H3,
    A4, B4, C4, D4, E4, F4, G4, H4,
    A5, B5, C5, D5, E5, F5, G5, H5,
    A6, B6, C6, D6, E6, F6, G6, H6,
    A7, B7, C7, D7, E7, F7, G7, H7,
    A8, B8, C8, D8, E8, F8, G8, H8
}

impl Square {
    pub fn of(rank: Rank, file: File) -> Square {
        SQUARES[rank as usize * 8 + file as usize]
    }

    /// Checked conversion from a raw 0-63 index.
    pub fn try_from_index(index: usize) -> Result<Square, NotationError> {
        SQUARES
            .get(index)
            .copied()
            .ok_or(NotationError::IndexOutOfRange(index))
    }

    /// Parses a square written in algebraic notation, such as `e4`.
    pub fn from_algebraic(text: &str) -> Result<Square, NotationError> {
        let mut chars = text.chars();
        let (file_c, rank_c) = match (chars.next(), chars.next(), chars.next()) {
            (Some(f), Some(r), None) => (f, r),
            _ => return Err(NotationError::InvalidLength(text.to_owned())),
        };

        let file = File::try_from(file_c).map_err(|_| NotationError::InvalidFile(file_c))?;
        let rank = Rank::try_from(rank_c).map_err(|_| NotationError::InvalidRank(rank_c))?;
        Ok(Square::of(rank, file))
    }

    pub fn to_algebraic(self) -> String {
        self.to_string()
    }

    pub fn rank(self) -> Rank {
        RANKS[self as usize >> 3]
    }

    pub fn file(self) -> File {
        FILES[self as usize & 7]
    }

    pub fn plus(self, offset: i32) -> Square {
        SQUARES[(self as i32 + offset) as usize]
    }

    pub fn towards(self, dir: Direction) -> Square {
        self.plus(dir.as_vector())
    }
}

impl Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}", self.file(), self.rank())
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, FromPrimitive, ToPrimitive)]
pub enum Rank {
    One,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
}

impl Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_char((b'1' + *self as u8) as char)
    }
}

impl TryFrom<char> for Rank {
    type Error = ();

    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value {
            '1'..='8' => Ok(RANKS[value as usize - '1' as usize]),
            _ => Err(()),
        }
    }
}

pub static RANKS: [Rank; 8] = [
    Rank::One,
    Rank::Two,
    Rank::Three,
    Rank::Four,
    Rank::Five,
    Rank::Six,
    Rank::Seven,
    Rank::Eight,
];

#[derive(Copy, Clone, Debug, PartialEq, Eq, FromPrimitive, ToPrimitive)]
pub enum File {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
}

impl Display for File {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_char((b'a' + *self as u8) as char)
    }
}

impl TryFrom<char> for File {
    type Error = ();

    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value {
            'a'..='h' => Ok(FILES[value as usize - 'a' as usize]),
            _ => Err(()),
        }
    }
}

pub static FILES: [File; 8] = [
    File::A,
    File::B,
    File::C,
    File::D,
    File::E,
    File::F,
    File::G,
    File::H,
];

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, FromPrimitive, ToPrimitive)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub fn toggle(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// The direction this color's pawns advance in.
    pub fn forward(self) -> Direction {
        match self {
            Color::White => Direction::North,
            Color::Black => Direction::South,
        }
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let chr = match self {
            Color::White => 'w',
            Color::Black => 'b',
        };
        f.write_char(chr)
    }
}

impl TryFrom<&str> for Color {
    type Error = ();

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "w" => Ok(Color::White),
            "b" => Ok(Color::Black),
            _ => Err(()),
        }
    }
}

pub static COLORS: [Color; 2] = [Color::White, Color::Black];

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, FromPrimitive, ToPrimitive)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// The lowercase FEN letter for this kind.
    pub fn symbol(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }
}

impl Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_char(self.symbol())
    }
}

pub static PIECE_KINDS: [PieceKind; 6] = [
    PieceKind::Pawn,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Rook,
    PieceKind::Queen,
    PieceKind::King,
];

/// Pieces a pawn may promote to, in the order the move generator emits them.
pub static PROMOTION_KINDS: [PieceKind; 4] = [
    PieceKind::Queen,
    PieceKind::Rook,
    PieceKind::Bishop,
    PieceKind::Knight,
];

#[derive(Copy, Clone, Debug, PartialEq, Eq, FromPrimitive, ToPrimitive)]
pub enum Direction {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl Direction {
    pub fn as_vector(self) -> i32 {
        match self {
            Direction::North => 8,
            Direction::NorthEast => 9,
            Direction::East => 1,
            Direction::SouthEast => -7,
            Direction::South => -8,
            Direction::SouthWest => -9,
            Direction::West => -1,
            Direction::NorthWest => 7,
        }
    }
}

bitflags! {
    /// The four independent castling rights. A right that has been cleared
    /// is never set again for the rest of the game.
    pub struct CastlingRights: u8 {
        const NONE = 0;
        const WHITE_KINGSIDE = 0b0000_0001;
        const WHITE_QUEENSIDE =0b0000_0010;
        const WHITE = Self::WHITE_KINGSIDE.bits | Self::WHITE_QUEENSIDE.bits;
        const BLACK_KINGSIDE = 0b0000_0100;
        const BLACK_QUEENSIDE = 0b0000_1000;
        const BLACK = Self::BLACK_KINGSIDE.bits | Self::BLACK_QUEENSIDE.bits;
    }
}

impl CastlingRights {
    pub fn kingside(color: Color) -> CastlingRights {
        match color {
            Color::White => CastlingRights::WHITE_KINGSIDE,
            Color::Black => CastlingRights::BLACK_KINGSIDE,
        }
    }

    pub fn queenside(color: Color) -> CastlingRights {
        match color {
            Color::White => CastlingRights::WHITE_QUEENSIDE,
            Color::Black => CastlingRights::BLACK_QUEENSIDE,
        }
    }

    pub fn both(color: Color) -> CastlingRights {
        match color {
            Color::White => CastlingRights::WHITE,
            Color::Black => CastlingRights::BLACK,
        }
    }
}

impl Display for CastlingRights {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_empty() {
            return f.write_char('-');
        }

        let letters = [
            (CastlingRights::WHITE_KINGSIDE, 'K'),
            (CastlingRights::WHITE_QUEENSIDE, 'Q'),
            (CastlingRights::BLACK_KINGSIDE, 'k'),
            (CastlingRights::BLACK_QUEENSIDE, 'q'),
        ];
        for &(right, letter) in letters.iter() {
            if self.contains(right) {
                f.write_char(letter)?;
            }
        }

        Ok(())
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
}

impl Piece {
    pub fn new(kind: PieceKind, color: Color) -> Piece {
        Piece { kind, color }
    }

    /// Squares this piece attacks from `sq`, given the occupancy of the whole
    /// board. Sliding attacks include the first blocker whatever its color.
    pub fn attacks(&self, sq: Square, occupancy: Bitboard) -> Bitboard {
        match self.kind {
            PieceKind::Pawn => attacks::pawn_attacks(sq, self.color),
            PieceKind::Knight => attacks::knight_attacks(sq),
            PieceKind::Bishop => attacks::bishop_attacks(sq, occupancy),
            PieceKind::Rook => attacks::rook_attacks(sq, occupancy),
            PieceKind::Queen => attacks::queen_attacks(sq, occupancy),
            PieceKind::King => attacks::king_attacks(sq),
        }
    }

    pub fn is_sliding(&self) -> bool {
        match self.kind {
            PieceKind::Pawn | PieceKind::Knight | PieceKind::King => false,
            _ => true,
        }
    }
}

impl TryFrom<char> for Piece {
    type Error = ();

    fn try_from(c: char) -> Result<Self, Self::Error> {
        let color = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };

        let kind = match c.to_ascii_lowercase() {
            'p' => PieceKind::Pawn,
            'n' => PieceKind::Knight,
            'b' => PieceKind::Bishop,
            'r' => PieceKind::Rook,
            'q' => PieceKind::Queen,
            'k' => PieceKind::King,
            _ => return Err(()),
        };
        Ok(Piece::new(kind, color))
    }
}

impl Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let chr = self.kind.symbol();
        match self.color {
            Color::White => f.write_char(chr.to_ascii_uppercase()),
            Color::Black => f.write_char(chr),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::convert::TryFrom;

    use super::*;
    use crate::errors::NotationError;

    #[test]
    fn square_of_is_lerf() {
        assert_eq!(0, Square::of(Rank::One, File::A) as usize);
        assert_eq!(7, Square::of(Rank::One, File::H) as usize);
        assert_eq!(28, Square::of(Rank::Four, File::E) as usize);
        assert_eq!(63, Square::of(Rank::Eight, File::H) as usize);
    }

    #[test]
    fn algebraic_round_trip() {
        for &sq in SQUARES.iter() {
            let text = sq.to_algebraic();
            assert_eq!(sq, Square::from_algebraic(&text).unwrap());
        }
    }

    #[test]
    fn algebraic_corners() {
        assert_eq!(Square::A1, Square::from_algebraic("a1").unwrap());
        assert_eq!(Square::H8, Square::from_algebraic("h8").unwrap());
        assert_eq!("e4", Square::E4.to_algebraic());
    }

    #[test]
    fn algebraic_errors() {
        assert_eq!(
            NotationError::InvalidLength("e44".to_owned()),
            Square::from_algebraic("e44").unwrap_err()
        );
        assert_eq!(
            NotationError::InvalidLength("".to_owned()),
            Square::from_algebraic("").unwrap_err()
        );
        assert_eq!(
            NotationError::InvalidFile('i'),
            Square::from_algebraic("i1").unwrap_err()
        );
        assert_eq!(
            NotationError::InvalidRank('9'),
            Square::from_algebraic("a9").unwrap_err()
        );
        assert_eq!(
            NotationError::InvalidFile('E'),
            Square::from_algebraic("E4").unwrap_err()
        );
    }

    #[test]
    fn checked_index() {
        assert_eq!(Square::H8, Square::try_from_index(63).unwrap());
        assert_eq!(
            NotationError::IndexOutOfRange(64),
            Square::try_from_index(64).unwrap_err()
        );
    }

    #[test]
    fn rank_and_file() {
        assert_eq!(Rank::Five, Square::C5.rank());
        assert_eq!(File::C, Square::C5.file());
        assert_eq!(Square::D4, Square::D3.towards(Direction::North));
        assert_eq!(Square::C2, Square::D3.towards(Direction::SouthWest));
    }

    #[test]
    fn piece_symbols() {
        let queen = Piece::try_from('Q').unwrap();
        assert_eq!(Piece::new(PieceKind::Queen, Color::White), queen);
        assert_eq!("Q", queen.to_string());
        let knight = Piece::try_from('n').unwrap();
        assert_eq!(Piece::new(PieceKind::Knight, Color::Black), knight);
        assert_eq!("n", knight.to_string());
        assert!(Piece::try_from('x').is_err());
    }

    #[test]
    fn castling_rights_display() {
        assert_eq!("-", CastlingRights::NONE.to_string());
        assert_eq!(
            "KQkq",
            (CastlingRights::WHITE | CastlingRights::BLACK).to_string()
        );
        assert_eq!(
            "Kq",
            (CastlingRights::BLACK_QUEENSIDE | CastlingRights::WHITE_KINGSIDE).to_string()
        );
    }
}
