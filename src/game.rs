// Copyright 2017-2019 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! A game in progress: the current position, the moves that led to it, and
//! the legal moves available from it.
use crate::attacks;
use crate::bitboard::Bitboard;
use crate::errors::{FenParseError, IllegalMoveError};
use crate::legality;
use crate::move_generator::MoveVec;
use crate::move_maker;
use crate::moves::Move;
use crate::position::Position;
use crate::status::{self, PlayerStatus};
use crate::types::Square;

/// Squares reachable from `source` by any of `moves`.
pub fn find_destinations(moves: &[Move], source: Square) -> Bitboard {
    let mut destinations = Bitboard::none();
    for mov in moves.iter().filter(|m| m.source() == source) {
        destinations.set(mov.destination());
    }

    destinations
}

/// The moves going from `source` to `destination`. There is more than one
/// when the move is a promotion. A move never starts and ends on the same
/// square, so that query is always empty.
pub fn find_moves(moves: &[Move], source: Square, destination: Square) -> Vec<Move> {
    if source == destination {
        return Vec::new();
    }

    moves
        .iter()
        .filter(|m| m.source() == source && m.destination() == destination)
        .copied()
        .collect()
}

#[derive(Clone, Debug)]
pub struct Game {
    position: Position,
    history: Vec<Move>,
    outcomes: Vec<PlayerStatus>,
    legal_moves: MoveVec,
}

impl Game {
    /// A game from the standard initial position.
    pub fn new() -> Game {
        Game::from_position(Position::start_position())
    }

    pub fn from_fen(fen: &str) -> Result<Game, FenParseError> {
        Position::from_fen(fen).map(Game::from_position)
    }

    pub fn from_position(position: Position) -> Game {
        let legal_moves = legality::legal_moves(&position);
        Game {
            position,
            history: Vec::new(),
            outcomes: Vec::new(),
            legal_moves,
        }
    }

    pub fn position(&self) -> &Position {
        &self.position
    }

    /// Moves played so far, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// The status each move in `history` left the opponent in.
    pub fn outcomes(&self) -> &[PlayerStatus] {
        &self.outcomes
    }

    /// Moves played so far, each paired with the status it produced.
    pub fn annotated_history(&self) -> impl Iterator<Item = (Move, PlayerStatus)> + '_ {
        self.history.iter().copied().zip(self.outcomes.iter().copied())
    }

    pub fn legal_moves(&self) -> &[Move] {
        &self.legal_moves
    }

    pub fn status(&self) -> PlayerStatus {
        status::classify(self.legal_moves.is_empty(), self.position.is_check())
    }

    /// Squares attacked by the side not to move.
    pub fn opponent_attacks(&self) -> Bitboard {
        let opponent = self.position.side_to_move().toggle();
        attacks::attacked_squares(self.position.board(), opponent)
    }

    /// The square of the king of the side to move.
    pub fn king_square(&self) -> Option<Square> {
        self.position.king_square(self.position.side_to_move())
    }

    pub fn fen(&self) -> String {
        self.position.to_fen()
    }

    /// Squares the piece on `source` can legally move to.
    pub fn destinations(&self, source: Square) -> Bitboard {
        find_destinations(&self.legal_moves, source)
    }

    /// Plays `mov`, which must be one of the current legal moves.
    pub fn make_move(&mut self, mov: Move) -> Result<(), IllegalMoveError> {
        if !self.legal_moves.contains(&mov) {
            debug!("refusing move {} in {}", mov, self.position.to_fen());
            return Err(IllegalMoveError::NotLegal(mov.to_string()));
        }

        let next = move_maker::make(&self.position, mov);
        info!("{} plays {}", self.position.side_to_move(), mov);
        self.legal_moves = legality::legal_moves(&next);
        self.position = next;
        self.history.push(mov);
        self.outcomes.push(self.status());
        Ok(())
    }

    /// Plays the move written in UCI notation, returning the move played.
    pub fn make_uci_move(&mut self, uci: &str) -> Result<Move, IllegalMoveError> {
        let mov = match self.position.move_from_uci(uci) {
            Some(mov) => mov,
            None => {
                debug!("refusing move {:?} in {}", uci, self.position.to_fen());
                return Err(IllegalMoveError::Unrecognized(uci.to_owned()));
            }
        };

        self.make_move(mov)?;
        Ok(mov)
    }
}

impl Default for Game {
    fn default() -> Game {
        Game::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Color, PieceKind};

    #[test]
    fn destinations_of_knight() {
        let game = Game::new();
        let dests = game.destinations(Square::G1);
        assert_eq!(2, dests.count());
        assert!(dests.test(Square::F3));
        assert!(dests.test(Square::H3));
        assert!(game.destinations(Square::E4).empty());
    }

    #[test]
    fn promotion_has_four_moves() {
        let game = Game::from_fen("4k3/P7/8/8/8/8/8/4K3 w - - 0 1").unwrap();
        let moves = find_moves(game.legal_moves(), Square::A7, Square::A8);
        assert_eq!(4, moves.len());
        assert!(find_moves(game.legal_moves(), Square::A7, Square::A7).is_empty());
    }

    #[test]
    fn plays_moves_and_records_history() {
        let mut game = Game::new();
        game.make_uci_move("e2e4").unwrap();
        game.make_uci_move("e7e5").unwrap();
        assert_eq!(2, game.history().len());
        assert_eq!("e2e4", game.history()[0].to_string());
        assert_eq!(Color::White, game.position().side_to_move());
        assert_eq!(
            "rnbqkbnr/pppp1ppp/8/4p3/4P3/8/PPPP1PPP/RNBQKBNR w KQkq e6 0 2",
            game.fen()
        );
    }

    #[test]
    fn refuses_illegal_moves() {
        let mut game = Game::new();
        assert_eq!(
            Err(IllegalMoveError::Unrecognized("e2e5".to_owned())),
            game.make_uci_move("e2e5")
        );

        let black_move = Move::double_push(Color::Black, Square::E7, Square::E5);
        assert_eq!(
            Err(IllegalMoveError::NotLegal("e7e5".to_owned())),
            game.make_move(black_move)
        );
        assert!(game.history().is_empty());
        assert!(game.outcomes().is_empty());
    }

    #[test]
    fn history_records_outcome_of_each_move() {
        let mut game = Game::from_fen("4k3/8/8/8/8/8/8/R3K3 w Q - 0 1").unwrap();
        game.make_uci_move("a1a8").unwrap();
        game.make_uci_move("e8e7").unwrap();
        game.make_uci_move("e1f2").unwrap();

        let annotated: Vec<_> = game
            .annotated_history()
            .map(|(mov, status)| (mov.to_string(), status))
            .collect();
        assert_eq!(
            vec![
                ("a1a8".to_owned(), PlayerStatus::Checked),
                ("e8e7".to_owned(), PlayerStatus::Ok),
                ("e1f2".to_owned(), PlayerStatus::Ok),
            ],
            annotated
        );
    }

    #[test]
    fn fools_mate() {
        let mut game = Game::new();
        for uci in ["f2f3", "e7e5", "g2g4", "d8h4"].iter() {
            game.make_uci_move(uci).unwrap();
        }

        assert_eq!(PlayerStatus::Checkmated, game.status());
        assert_eq!(Some(&PlayerStatus::Checkmated), game.outcomes().last());
        assert!(game.legal_moves().is_empty());
        assert_eq!(Some(Square::E1), game.king_square());
        assert!(game.opponent_attacks().test(Square::E1));
        let queen = game.position().piece_at(Square::H4).unwrap();
        assert_eq!(PieceKind::Queen, queen.kind);
    }
}
