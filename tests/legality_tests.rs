// Copyright 2017-2019 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use rookery::{
    attacks, find_destinations, find_moves, legal_moves, status, Color, MoveKind, PlayerStatus,
    Position, Square,
};

fn uci_moves(fen: &str) -> Vec<String> {
    let pos = Position::from_fen(fen).unwrap();
    let mut moves: Vec<String> = legal_moves(&pos).iter().map(|m| m.to_string()).collect();
    moves.sort();
    moves
}

#[test]
fn queenside_castle_with_b1_attacked() {
    let moves = uci_moves("1r5k/8/8/8/8/8/8/R3K3 w Q - 0 1");
    assert!(moves.contains(&"e1c1".to_owned()));
}

#[test]
fn no_castle_when_d1_attacked() {
    let moves = uci_moves("3r3k/8/8/8/8/8/8/R3K3 w Q - 0 1");
    assert!(!moves.contains(&"e1c1".to_owned()));
}

#[test]
fn no_castle_without_right() {
    let moves = uci_moves("7k/8/8/8/8/8/8/R3K2R w - - 0 1");
    assert!(!moves.contains(&"e1c1".to_owned()));
    assert!(!moves.contains(&"e1g1".to_owned()));
}

#[test]
fn absolute_pin() {
    // the knight on d2 is pinned by the bishop on a5
    let moves = uci_moves("4k3/8/8/b7/8/8/3N4/4K3 w - - 0 1");
    assert!(moves.iter().all(|m| !m.starts_with("d2")));
}

#[test]
fn pinned_slider_moves_along_pin() {
    let moves = uci_moves("4r1k1/8/8/8/8/8/4R3/4K3 w - - 0 1");
    let rook: Vec<_> = moves.iter().filter(|m| m.starts_with("e2")).collect();
    assert_eq!(6, rook.len());
    assert!(moves.contains(&"e2e8".to_owned()));
    assert!(!moves.contains(&"e2d2".to_owned()));
}

#[test]
fn double_check_only_king_moves() {
    // rook and knight both give check; the knight on b2 could take one checker
    let pos = Position::from_fen("4k3/8/8/8/8/3n4/1N6/r3K3 w - - 0 1").unwrap();
    let moves = legal_moves(&pos);
    assert_eq!(PlayerStatus::Checked, status(&pos));
    assert!(moves.iter().any(|m| m.destination() == Square::E2));
    assert!(moves.iter().all(|m| m.destination() != Square::F1));
    assert!(moves.iter().all(|m| m.source() == Square::E1));
}

#[test]
fn attacked_squares_of_start_position() {
    let pos = Position::start_position();
    let white = attacks::attacked_squares(pos.board(), Color::White);
    // every square on the third rank, nothing beyond it
    assert_eq!(8, white.count());
    for file in 0..8 {
        assert!(white.test(Square::A3.plus(file)));
    }
}

#[test]
fn checkmate_and_stalemate() {
    let mate =
        Position::from_fen("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3").unwrap();
    assert!(legal_moves(&mate).is_empty());
    assert_eq!(PlayerStatus::Checkmated, status(&mate));

    let stale = Position::from_fen("7k/5K2/6Q1/8/8/8/8/8 b - - 0 1").unwrap();
    assert!(legal_moves(&stale).is_empty());
    assert_eq!(PlayerStatus::Stalemated, status(&stale));
}

#[test]
fn move_finder() {
    let pos = Position::start_position();
    let moves = legal_moves(&pos);
    let dests = find_destinations(&moves, Square::E2);
    assert_eq!(2, dests.count());
    assert!(dests.test(Square::E3));
    assert!(dests.test(Square::E4));

    let found = find_moves(&moves, Square::E2, Square::E4);
    assert_eq!(1, found.len());
    assert_eq!(MoveKind::DoublePush, found[0].kind());
    assert!(find_moves(&moves, Square::E2, Square::E2).is_empty());
    assert!(find_moves(&moves, Square::E2, Square::E5).is_empty());
}
