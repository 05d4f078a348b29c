// Copyright 2017-2019 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! A bitboard chess rules engine: positions, legal move generation, move
//! application, game status and perft.

#[macro_use]
extern crate num_derive;
#[macro_use]
extern crate bitflags;
#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate log;
#[macro_use]
extern crate serde_derive;

pub mod attacks;
mod bitboard;
mod board;
mod errors;
mod fen;
mod game;
mod legality;
mod move_generator;
mod move_maker;
mod moves;
mod perft;
mod position;
mod status;
mod types;

pub use bitboard::{Bitboard, BitboardIterator};
pub use board::Board;
pub use errors::{FenParseError, IllegalMoveError, NotationError};
pub use game::{find_destinations, find_moves, Game};
pub use legality::{filter, is_legal_given_pseudolegal, legal_moves};
pub use move_generator::{generate, MoveGenerator, MoveVec};
pub use move_maker::make;
pub use moves::{Move, MoveKind};
pub use perft::{
    divide_report, perft, perft_detailed, perft_detailed_divide, perft_divide, perft_parallel,
    PerftResults,
};
pub use position::{Position, START_POSITION_FEN};
pub use status::{classify, status, PlayerStatus};
pub use types::{CastlingRights, Color, Direction, File, Piece, PieceKind, Rank, Square};
