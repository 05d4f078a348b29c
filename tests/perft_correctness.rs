// Copyright 2017-2019 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use rookery::{perft, perft_detailed, perft_parallel, PerftResults, Position};

const START: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";
const KIWIPETE: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";
const POSITION_3: &str = "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1";
const POSITION_4: &str = "r2q1rk1/pP1p2pp/Q4n2/bbp1p3/Np6/1B3NBn/pPPP1PPP/R3K2R b KQ - 0 1";
const POSITION_5: &str = "rnbq1k1r/pp1Pbppp/2p5/8/2B5/8/PPP1NnPP/RNBQK2R w KQ - 1 8";

fn perft_test(fen: &'static str, depth: u32, count: u64) {
    let pos = Position::from_fen(fen).unwrap();
    assert_eq!(count, perft(&pos, depth));
}

macro_rules! perft_tests {
    () => {};
    ($name:ident ($depth:expr): $fen:expr => $count:expr; $($tail:tt)*) => {
        #[test]
        fn $name() {
            perft_test($fen, $depth, $count)
        }

        perft_tests!($($tail)*);
    };

    (skip $name:ident ($depth:expr): $fen:expr => $count:expr; $($tail:tt)*) => {
        #[test]
        #[ignore]
        fn $name() {
            perft_test($fen, $depth, $count)
        }

        perft_tests!($($tail)*);
    };
}

perft_tests! {
    start_0 (0): START => 1;
    start_1 (1): START => 20;
    start_2 (2): START => 400;
    start_3 (3): START => 8_902;
    start_4 (4): START => 197_281;
    skip start_5 (5): START => 4_865_609;

    kiwipete_0 (0): KIWIPETE => 1;
    kiwipete_1 (1): KIWIPETE => 48;
    kiwipete_2 (2): KIWIPETE => 2_039;
    kiwipete_3 (3): KIWIPETE => 97_862;
    skip kiwipete_4 (4): KIWIPETE => 4_085_603;

    position_3_1 (1): POSITION_3 => 14;
    position_3_2 (2): POSITION_3 => 191;
    position_3_3 (3): POSITION_3 => 2_812;
    position_3_4 (4): POSITION_3 => 43_238;

    position_4_1 (1): POSITION_4 => 6;
    position_4_2 (2): POSITION_4 => 264;
    position_4_3 (3): POSITION_4 => 9_467;
    skip position_4_4 (4): POSITION_4 => 422_333;

    position_5_1 (1): POSITION_5 => 44;
    position_5_2 (2): POSITION_5 => 1_486;
    position_5_3 (3): POSITION_5 => 62_379;
    skip position_5_4 (4): POSITION_5 => 2_103_487;
}

#[test]
fn parallel_matches_sequential() {
    let pos = Position::from_fen(KIWIPETE).unwrap();
    assert_eq!(97_862, perft_parallel(&pos, 3));
}

mod initial_position {
    use super::*;

    fn detailed(depth: u32) -> PerftResults {
        perft_detailed(&Position::from_fen(START).unwrap(), depth)
    }

    #[test]
    fn perft_1() {
        let results = detailed(1);
        assert_eq!(20, results.nodes);
        assert_eq!(0, results.captures);
        assert_eq!(0, results.en_passants);
        assert_eq!(0, results.castles);
        assert_eq!(0, results.promotions);
        assert_eq!(0, results.checks);
        assert_eq!(0, results.checkmates);
    }

    #[test]
    fn perft_3() {
        let results = detailed(3);
        assert_eq!(8_902, results.nodes);
        assert_eq!(34, results.captures);
        assert_eq!(0, results.en_passants);
        assert_eq!(0, results.castles);
        assert_eq!(0, results.promotions);
        assert_eq!(12, results.checks);
        assert_eq!(0, results.checkmates);
    }

    #[test]
    fn perft_4() {
        let results = detailed(4);
        assert_eq!(197_281, results.nodes);
        assert_eq!(1_576, results.captures);
        assert_eq!(0, results.en_passants);
        assert_eq!(0, results.castles);
        assert_eq!(0, results.promotions);
        assert_eq!(469, results.checks);
        assert_eq!(8, results.checkmates);
    }

    #[test]
    #[ignore]
    fn perft_5() {
        let results = detailed(5);
        assert_eq!(4_865_609, results.nodes);
        assert_eq!(82_719, results.captures);
        assert_eq!(258, results.en_passants);
        assert_eq!(0, results.castles);
        assert_eq!(0, results.promotions);
        assert_eq!(27_351, results.checks);
        assert_eq!(347, results.checkmates);
    }
}

mod kiwipete {
    use super::*;

    #[test]
    fn perft_2() {
        let results = perft_detailed(&Position::from_fen(KIWIPETE).unwrap(), 2);
        assert_eq!(2_039, results.nodes);
        assert_eq!(351, results.captures);
        assert_eq!(1, results.en_passants);
        assert_eq!(91, results.castles);
        assert_eq!(0, results.promotions);
        assert_eq!(3, results.checks);
        assert_eq!(0, results.checkmates);
    }
}
