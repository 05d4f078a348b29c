// Copyright 2017-2019 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Sets of squares packed into a single `u64`.
//!
//! Bit `i` is the square with LERF index `i`, so `A1` is the least
//! significant bit and `H8` the most significant. Piece locations, attack
//! sets and occupancy masks are all bitboards, and set algebra on them is
//! plain integer bit twiddling.
use std::fmt;
use std::ops;

use crate::types::{Square, FILES, RANKS, SQUARES};

const fn rank_mask(rank: u32) -> Bitboard {
    Bitboard::from_bits(0xFF << (8 * rank))
}

#[derive(Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Bitboard {
    bits: u64,
}

impl Bitboard {
    pub const fn from_bits(bits: u64) -> Bitboard {
        Bitboard { bits }
    }

    /// Every square on the board.
    pub const fn all() -> Bitboard {
        Bitboard::from_bits(!0)
    }

    /// No squares at all.
    pub const fn none() -> Bitboard {
        Bitboard::from_bits(0)
    }

    pub const fn single(square: Square) -> Bitboard {
        Bitboard::from_bits(1 << square as u32)
    }

    pub const fn test(self, square: Square) -> bool {
        self.bits & Bitboard::single(square).bits != 0
    }

    pub fn set(&mut self, square: Square) {
        self.bits |= Bitboard::single(square).bits;
    }

    pub fn unset(&mut self, square: Square) {
        self.bits &= !Bitboard::single(square).bits;
    }

    pub fn toggle(&mut self, square: Square) {
        self.bits ^= Bitboard::single(square).bits;
    }

    /// Intersection.
    pub const fn and(self, other: Bitboard) -> Bitboard {
        Bitboard::from_bits(self.bits & other.bits)
    }

    /// Union.
    pub const fn or(self, other: Bitboard) -> Bitboard {
        Bitboard::from_bits(self.bits | other.bits)
    }

    /// Symmetric difference.
    pub const fn xor(self, other: Bitboard) -> Bitboard {
        Bitboard::from_bits(self.bits ^ other.bits)
    }

    pub const fn complement(self) -> Bitboard {
        Bitboard::from_bits(!self.bits)
    }

    /// Squares in this set, lowest index first.
    pub fn iter(self) -> BitboardIterator {
        BitboardIterator { bits: self.bits }
    }

    pub const fn bits(self) -> u64 {
        self.bits
    }

    pub const fn count(self) -> u32 {
        self.bits.count_ones()
    }

    pub const fn empty(self) -> bool {
        self.bits == 0
    }

    /// The lowest-indexed square in the set.
    pub fn first(self) -> Option<Square> {
        if self.empty() {
            None
        } else {
            Some(SQUARES[self.bits.trailing_zeros() as usize])
        }
    }
}

impl fmt::Debug for Bitboard {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Bitboard({:#018x})", self.bits)
    }
}

/// Eight lines of `x` and `.`, rank 8 first.
impl fmt::Display for Bitboard {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for &rank in RANKS.iter().rev() {
            let line: String = FILES
                .iter()
                .map(|&file| {
                    if self.test(Square::of(rank, file)) {
                        'x'
                    } else {
                        '.'
                    }
                })
                .collect();
            writeln!(f, "{} {}", rank, line)?;
        }

        writeln!(f, "  abcdefgh")
    }
}

macro_rules! bitboard_operator {
    ($op:ident, $method:ident, $assign_op:ident, $assign_method:ident, $set_op:ident) => {
        impl ops::$op for Bitboard {
            type Output = Bitboard;

            fn $method(self, rhs: Bitboard) -> Bitboard {
                self.$set_op(rhs)
            }
        }

        impl ops::$assign_op for Bitboard {
            fn $assign_method(&mut self, rhs: Bitboard) {
                *self = self.$set_op(rhs);
            }
        }
    };
}

bitboard_operator!(BitAnd, bitand, BitAndAssign, bitand_assign, and);
bitboard_operator!(BitOr, bitor, BitOrAssign, bitor_assign, or);
bitboard_operator!(BitXor, bitxor, BitXorAssign, bitxor_assign, xor);

impl ops::Not for Bitboard {
    type Output = Bitboard;

    fn not(self) -> Bitboard {
        self.complement()
    }
}

/// Drains a bitboard one square at a time by clearing its lowest set bit.
pub struct BitboardIterator {
    bits: u64,
}

impl Iterator for BitboardIterator {
    type Item = Square;

    fn next(&mut self) -> Option<Square> {
        let square = Bitboard::from_bits(self.bits).first()?;
        self.bits &= self.bits - 1;
        Some(square)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.bits.count_ones() as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for BitboardIterator {}

impl IntoIterator for Bitboard {
    type Item = Square;
    type IntoIter = BitboardIterator;

    fn into_iter(self) -> BitboardIterator {
        self.iter()
    }
}

pub const BB_RANK_1: Bitboard = rank_mask(0);
pub const BB_RANK_2: Bitboard = rank_mask(1);
pub const BB_RANK_7: Bitboard = rank_mask(6);
pub const BB_RANK_8: Bitboard = rank_mask(7);
