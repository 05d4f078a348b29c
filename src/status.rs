// Copyright 2017-2019 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use std::fmt;

use crate::legality;
use crate::position::Position;

/// The situation of the side to move. Always derived from a position, never
/// stored.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum PlayerStatus {
    Ok,
    Checked,
    Checkmated,
    Stalemated,
}

impl PlayerStatus {
    /// Whether the game is over for this player.
    pub fn is_terminal(self) -> bool {
        match self {
            PlayerStatus::Checkmated | PlayerStatus::Stalemated => true,
            PlayerStatus::Ok | PlayerStatus::Checked => false,
        }
    }
}

impl fmt::Display for PlayerStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let text = match self {
            PlayerStatus::Ok => "ok",
            PlayerStatus::Checked => "checked",
            PlayerStatus::Checkmated => "checkmated",
            PlayerStatus::Stalemated => "stalemated",
        };
        f.write_str(text)
    }
}

/// | no legal moves | king attacked | status     |
/// |----------------|---------------|------------|
/// | no             | no            | Ok         |
/// | no             | yes           | Checked    |
/// | yes            | yes           | Checkmated |
/// | yes            | no            | Stalemated |
pub fn classify(legal_moves_empty: bool, king_attacked: bool) -> PlayerStatus {
    match (legal_moves_empty, king_attacked) {
        (false, false) => PlayerStatus::Ok,
        (false, true) => PlayerStatus::Checked,
        (true, true) => PlayerStatus::Checkmated,
        (true, false) => PlayerStatus::Stalemated,
    }
}

/// The status of the side to move in `pos`.
pub fn status(pos: &Position) -> PlayerStatus {
    let no_moves = legality::legal_moves(pos).is_empty();
    classify(no_moves, pos.is_check())
}
