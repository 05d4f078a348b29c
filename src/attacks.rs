// Copyright 2017-2019 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Attack tables and the attack generator.
//!
//! Pawns, knights and kings attack a fixed set of squares from any given
//! square, so their attacks are precomputed once into tables. Sliding pieces
//! use a per-direction ray table: the attack along a ray is the full ray with
//! everything past the first blocker cut away, so the first occupied square
//! is part of the attack and nothing behind it is.
use crate::bitboard::Bitboard;
use crate::board::Board;
use crate::types::{Color, Direction, PieceKind, Square, TableIndex, PIECE_KINDS, SQUARES};

const KING_STEPS: [(i32, i32); 8] = [
    (1, -1),
    (1, 0),
    (1, 1),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 0),
    (-1, 1),
];

const KNIGHT_STEPS: [(i32, i32); 8] = [
    (2, -1),
    (2, 1),
    (1, -2),
    (1, 2),
    (-1, -2),
    (-1, 2),
    (-2, -1),
    (-2, 1),
];

const DIRECTIONS: [Direction; 8] = [
    Direction::North,
    Direction::NorthEast,
    Direction::East,
    Direction::SouthEast,
    Direction::South,
    Direction::SouthWest,
    Direction::West,
    Direction::NorthWest,
];

/// `(rank, file)` delta of a single step in `dir`.
fn step_of(dir: Direction) -> (i32, i32) {
    match dir {
        Direction::North => (1, 0),
        Direction::NorthEast => (1, 1),
        Direction::East => (0, 1),
        Direction::SouthEast => (-1, 1),
        Direction::South => (-1, 0),
        Direction::SouthWest => (-1, -1),
        Direction::West => (0, -1),
        Direction::NorthWest => (1, -1),
    }
}

/// The square `rank_delta` ranks and `file_delta` files away, if it is on the
/// board.
fn offset(sq: Square, (rank_delta, file_delta): (i32, i32)) -> Option<Square> {
    let rank = sq.rank() as i32 + rank_delta;
    let file = sq.file() as i32 + file_delta;
    if (0..8).contains(&rank) && (0..8).contains(&file) {
        Some(SQUARES[(rank * 8 + file) as usize])
    } else {
        None
    }
}

fn leaper_table(steps: &[(i32, i32)]) -> [Bitboard; 64] {
    let mut table = [Bitboard::none(); 64];
    for &sq in SQUARES.iter() {
        for target in steps.iter().filter_map(|&step| offset(sq, step)) {
            table[sq.as_index()].set(target);
        }
    }
    table
}

struct AttackTables {
    king: [Bitboard; 64],
    knight: [Bitboard; 64],
    pawn: [[Bitboard; 64]; 2],
    /// Row 64 is all-empty and stands in for "no blocker on this ray".
    rays: [[Bitboard; 8]; 65],
}

impl AttackTables {
    fn new() -> AttackTables {
        let mut pawn = [
            leaper_table(&[(1, -1), (1, 1)]),
            leaper_table(&[(-1, -1), (-1, 1)]),
        ];

        // A pawn on its last rank has already promoted; it attacks nothing.
        for file in 0..8 {
            pawn[Color::White.as_index()][56 + file] = Bitboard::none();
            pawn[Color::Black.as_index()][file] = Bitboard::none();
        }

        let mut rays = [[Bitboard::none(); 8]; 65];
        for &sq in SQUARES.iter() {
            for &dir in DIRECTIONS.iter() {
                let step = step_of(dir);
                let ray = &mut rays[sq.as_index()][dir.as_index()];
                let mut cursor = offset(sq, step);
                while let Some(next) = cursor {
                    ray.set(next);
                    cursor = offset(next, step);
                }
            }
        }

        AttackTables {
            king: leaper_table(&KING_STEPS),
            knight: leaper_table(&KNIGHT_STEPS),
            pawn,
            rays,
        }
    }

    fn ray(&self, index: usize, dir: Direction) -> Bitboard {
        self.rays[index][dir.as_index()]
    }
}

lazy_static! {
    static ref TABLES: AttackTables = AttackTables::new();
}

// Rays that grow towards higher square indices: the nearest blocker is the
// lowest set bit.
fn positive_ray_attacks(sq: Square, occupancy: Bitboard, dir: Direction) -> Bitboard {
    debug_assert!(dir.as_vector() > 0);
    let ray = TABLES.ray(sq.as_index(), dir);
    let blockers = (ray & occupancy).bits();
    let nearest = blockers.trailing_zeros() as usize;
    ray ^ TABLES.ray(nearest, dir)
}

// Rays that grow towards lower square indices: the nearest blocker is the
// highest set bit.
fn negative_ray_attacks(sq: Square, occupancy: Bitboard, dir: Direction) -> Bitboard {
    debug_assert!(dir.as_vector() < 0);
    let ray = TABLES.ray(sq.as_index(), dir);
    let blockers = (ray & occupancy).bits();
    let nearest = if blockers == 0 {
        64
    } else {
        63 - blockers.leading_zeros() as usize
    };
    ray ^ TABLES.ray(nearest, dir)
}

fn slide(sq: Square, occupancy: Bitboard, rising: Direction, falling: Direction) -> Bitboard {
    positive_ray_attacks(sq, occupancy, rising) | negative_ray_attacks(sq, occupancy, falling)
}

pub fn pawn_attacks(sq: Square, color: Color) -> Bitboard {
    TABLES.pawn[color.as_index()][sq.as_index()]
}

pub fn knight_attacks(sq: Square) -> Bitboard {
    TABLES.knight[sq.as_index()]
}

pub fn king_attacks(sq: Square) -> Bitboard {
    TABLES.king[sq.as_index()]
}

pub fn bishop_attacks(sq: Square, occupancy: Bitboard) -> Bitboard {
    slide(sq, occupancy, Direction::NorthWest, Direction::SouthEast)
        | slide(sq, occupancy, Direction::NorthEast, Direction::SouthWest)
}

pub fn rook_attacks(sq: Square, occupancy: Bitboard) -> Bitboard {
    slide(sq, occupancy, Direction::North, Direction::South)
        | slide(sq, occupancy, Direction::East, Direction::West)
}

pub fn queen_attacks(sq: Square, occupancy: Bitboard) -> Bitboard {
    bishop_attacks(sq, occupancy) | rook_attacks(sq, occupancy)
}

/// Every square threatened by `color`'s pieces on `board`.
///
/// Rays stop at the first occupied square. That square is included when it
/// holds a piece of the other color; squares holding `color`'s own pieces are
/// never part of the result. Whether `color`'s own king would be left exposed
/// is not considered.
pub fn attacked_squares(board: &Board, color: Color) -> Bitboard {
    let occupancy = board.occupancy();
    let mut attacks = Bitboard::none();
    for &kind in PIECE_KINDS.iter() {
        for sq in board.pieces_of_kind(color, kind) {
            attacks |= match kind {
                PieceKind::Pawn => pawn_attacks(sq, color),
                PieceKind::Knight => knight_attacks(sq),
                PieceKind::Bishop => bishop_attacks(sq, occupancy),
                PieceKind::Rook => rook_attacks(sq, occupancy),
                PieceKind::Queen => queen_attacks(sq, occupancy),
                PieceKind::King => king_attacks(sq),
            };
        }
    }

    attacks & !board.pieces(color)
}
