// Copyright 2017-2019 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Performance test: walk the legal move tree to a fixed depth and count what
//! is found there. The counts are compared against published reference
//! values to validate move generation end to end.
use hashbrown::HashMap;
use rayon::prelude::*;
use std::fmt::Write;
use std::ops::{Add, AddAssign};

use crate::legality;
use crate::move_maker;
use crate::moves::Move;
use crate::position::Position;

/// Counts gathered by a detailed perft. Every counter except `nodes`
/// describes the moves made at the last ply, the ones leading to the leaves.
/// `checks` includes the checks that are also checkmates.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct PerftResults {
    pub nodes: u64,
    pub captures: u64,
    pub en_passants: u64,
    pub castles: u64,
    pub promotions: u64,
    pub checks: u64,
    pub checkmates: u64,
}

impl Add for PerftResults {
    type Output = PerftResults;

    fn add(self, other: PerftResults) -> PerftResults {
        PerftResults {
            nodes: self.nodes + other.nodes,
            captures: self.captures + other.captures,
            en_passants: self.en_passants + other.en_passants,
            castles: self.castles + other.castles,
            promotions: self.promotions + other.promotions,
            checks: self.checks + other.checks,
            checkmates: self.checkmates + other.checkmates,
        }
    }
}

impl AddAssign for PerftResults {
    fn add_assign(&mut self, other: PerftResults) {
        *self = *self + other;
    }
}

/// Number of leaf nodes `depth` plies below `pos`. Depth 0 counts the
/// position itself.
pub fn perft(pos: &Position, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = legality::legal_moves(pos);
    if depth == 1 {
        return moves.len() as u64;
    }

    moves
        .iter()
        .map(|&mov| perft(&move_maker::make(pos, mov), depth - 1))
        .sum()
}

/// Same count as `perft`, with the root moves spread across the rayon
/// thread pool.
pub fn perft_parallel(pos: &Position, depth: u32) -> u64 {
    if depth <= 1 {
        return perft(pos, depth);
    }

    legality::legal_moves(pos)
        .par_iter()
        .map(|&mov| perft(&move_maker::make(pos, mov), depth - 1))
        .sum()
}

/// Leaf count below each legal root move. Empty at depth 0.
pub fn perft_divide(pos: &Position, depth: u32) -> HashMap<Move, u64> {
    let mut counts = HashMap::new();
    if depth == 0 {
        return counts;
    }

    for mov in legality::legal_moves(pos) {
        let nodes = perft(&move_maker::make(pos, mov), depth - 1);
        trace!("divide {}: {}", mov, nodes);
        counts.insert(mov, nodes);
    }

    counts
}

/// A divide in the familiar text form: one `move: count` line per root move,
/// sorted by move, then the total.
pub fn divide_report(pos: &Position, depth: u32) -> String {
    let divide = perft_divide(pos, depth);
    let mut lines: Vec<(String, u64)> = divide
        .iter()
        .map(|(mov, &count)| (mov.to_string(), count))
        .collect();
    lines.sort();

    let mut report = String::new();
    for (mov, count) in lines.iter() {
        let _ = writeln!(&mut report, "{}: {}", mov, count);
    }

    let total: u64 = divide.values().sum();
    let _ = write!(&mut report, "\nNodes searched: {}", total);
    report
}

/// Perft that also classifies the moves made at the last ply.
pub fn perft_detailed(pos: &Position, depth: u32) -> PerftResults {
    if depth == 0 {
        return PerftResults {
            nodes: 1,
            ..PerftResults::default()
        };
    }

    let mut results = PerftResults::default();
    for mov in legality::legal_moves(pos) {
        results += detailed_move(pos, mov, depth);
    }

    results
}

/// Detailed counts below each legal root move. Empty at depth 0.
pub fn perft_detailed_divide(pos: &Position, depth: u32) -> HashMap<Move, PerftResults> {
    let mut results = HashMap::new();
    if depth == 0 {
        return results;
    }

    for mov in legality::legal_moves(pos) {
        let subtree = detailed_move(pos, mov, depth);
        trace!("detailed divide {}: {}", mov, subtree.nodes);
        results.insert(mov, subtree);
    }

    results
}

// Counts for the subtree reached by playing `mov` in `pos`, where `depth`
// includes `mov` itself.
fn detailed_move(pos: &Position, mov: Move, depth: u32) -> PerftResults {
    let next = move_maker::make(pos, mov);
    if depth > 1 {
        return perft_detailed(&next, depth - 1);
    }

    let mut leaf = PerftResults {
        nodes: 1,
        ..PerftResults::default()
    };

    if mov.is_capture() {
        leaf.captures = 1;
    }
    if mov.is_en_passant() {
        leaf.en_passants = 1;
    }
    if mov.is_castle() {
        leaf.castles = 1;
    }
    if mov.is_promotion() {
        leaf.promotions = 1;
    }
    if next.is_check() {
        leaf.checks = 1;
        if legality::legal_moves(&next).is_empty() {
            leaf.checkmates = 1;
        }
    }

    leaf
}

#[cfg(test)]
mod tests {
    use super::*;

    const KIWIPETE: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";

    #[test]
    fn depth_zero_is_one() {
        let pos = Position::start_position();
        assert_eq!(1, perft(&pos, 0));
        assert_eq!(1, perft_detailed(&pos, 0).nodes);
        assert!(perft_divide(&pos, 0).is_empty());
        assert!(perft_detailed_divide(&pos, 0).is_empty());
    }

    #[test]
    fn parallel_agrees() {
        let pos = Position::from_fen(KIWIPETE).unwrap();
        assert_eq!(perft(&pos, 2), perft_parallel(&pos, 2));
        assert_eq!(48, perft_parallel(&pos, 1));
    }

    #[test]
    fn divide_sums_to_perft() {
        let pos = Position::from_fen(KIWIPETE).unwrap();
        let divide = perft_divide(&pos, 2);
        assert_eq!(48, divide.len());
        assert_eq!(2039, divide.values().sum::<u64>());
    }

    #[test]
    fn report_format() {
        let report = divide_report(&Position::start_position(), 1);
        let lines: Vec<&str> = report.lines().collect();
        assert_eq!(22, lines.len());
        assert_eq!("a2a3: 1", lines[0]);
        assert_eq!("h2h4: 1", lines[19]);
        assert_eq!("", lines[20]);
        assert_eq!("Nodes searched: 20", lines[21]);
    }

    #[test]
    fn detailed_start_depth_3() {
        let results = perft_detailed(&Position::start_position(), 3);
        assert_eq!(
            PerftResults {
                nodes: 8902,
                captures: 34,
                en_passants: 0,
                castles: 0,
                promotions: 0,
                checks: 12,
                checkmates: 0,
            },
            results
        );
    }

    #[test]
    fn detailed_kiwipete_depth_1() {
        let results = perft_detailed(&Position::from_fen(KIWIPETE).unwrap(), 1);
        assert_eq!(48, results.nodes);
        assert_eq!(8, results.captures);
        assert_eq!(2, results.castles);
        assert_eq!(0, results.checks);
    }

    #[test]
    fn detailed_divide_sums_to_detailed() {
        let pos = Position::from_fen(KIWIPETE).unwrap();
        let total = perft_detailed_divide(&pos, 2)
            .values()
            .fold(PerftResults::default(), |acc, &r| acc + r);
        assert_eq!(perft_detailed(&pos, 2), total);
    }
}
