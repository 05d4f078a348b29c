// Copyright 2017-2019 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Forsyth-Edwards Notation, the textual form of a `Position`.
//!
//! A FEN string has six space-separated fields: piece placement (rank 8
//! first), side to move, castling availability, en passant target, halfmove
//! clock and fullmove counter. Parsing checks the fields in that order and
//! stops at the first problem, reporting the text that caused it.
use regex::Regex;
use std::convert::TryFrom;
use std::fmt::Write;

use crate::board::Board;
use crate::errors::FenParseError;
use crate::position::Position;
use crate::types::{CastlingRights, Color, Piece, Rank, Square, FILES, RANKS};

const DATA_FIELDS: usize = 6;

lazy_static! {
    static ref PLACEMENT_PATTERN: Regex = Regex::new("^[/PNBRQKpnbrqk1-8]*$").unwrap();
    static ref CASTLING_PATTERN: Regex = Regex::new("^(-|K?Q?k?q?)$").unwrap();
    static ref EN_PASSANT_PATTERN: Regex = Regex::new("^(-|[a-h][36])$").unwrap();
}

/// Parses a FEN string into a `Position`.
pub fn parse(fen: &str) -> Result<Position, FenParseError> {
    let result = parse_fields(fen);
    if let Err(ref err) = result {
        debug!("rejected FEN {:?}: {}", fen, err);
    }

    result
}

fn parse_fields(fen: &str) -> Result<Position, FenParseError> {
    if !fen.bytes().all(|b| b >= 0x20 && b < 0x7f) {
        return Err(FenParseError::NotPrintableAscii(fen.to_owned()));
    }

    let fields: Vec<&str> = fen.split(' ').collect();
    if fields.len() != DATA_FIELDS {
        return Err(FenParseError::WrongFieldCount(fen.to_owned()));
    }

    let ranks = parse_ranks(fields[0])?;
    let side_to_move = parse_side_to_move(fields[1])?;
    let castling_rights = parse_castling_rights(fields[2])?;
    let en_passant_target = parse_en_passant_target(fields[3])?;
    let halfmove_clock = parse_halfmove_clock(fields[4])?;
    let fullmove_counter = parse_fullmove_counter(fields[5])?;
    let board = build_board(&ranks)?;

    Ok(Position {
        board,
        side_to_move,
        castling_rights,
        en_passant_target,
        halfmove_clock,
        fullmove_counter,
    })
}

fn parse_ranks(data: &str) -> Result<Vec<&str>, FenParseError> {
    if !PLACEMENT_PATTERN.is_match(data) {
        return Err(FenParseError::InvalidPlacement(data.to_owned()));
    }

    let white_kings = data.matches('K').count();
    let black_kings = data.matches('k').count();
    if white_kings == 0 || black_kings == 0 {
        return Err(FenParseError::MissingKing(data.to_owned()));
    }

    if white_kings > 1 || black_kings > 1 {
        return Err(FenParseError::TooManyKings(data.to_owned()));
    }

    let ranks: Vec<&str> = data.split('/').collect();
    if ranks.len() != RANKS.len() {
        return Err(FenParseError::WrongRankCount(data.to_owned()));
    }

    Ok(ranks)
}

fn parse_side_to_move(data: &str) -> Result<Color, FenParseError> {
    Color::try_from(data).map_err(|_| FenParseError::InvalidSideToMove(data.to_owned()))
}

fn parse_castling_rights(data: &str) -> Result<CastlingRights, FenParseError> {
    if !CASTLING_PATTERN.is_match(data) {
        return Err(FenParseError::InvalidCastle(data.to_owned()));
    }

    let mut rights = CastlingRights::NONE;
    for c in data.chars() {
        match c {
            'K' => rights |= CastlingRights::WHITE_KINGSIDE,
            'Q' => rights |= CastlingRights::WHITE_QUEENSIDE,
            'k' => rights |= CastlingRights::BLACK_KINGSIDE,
            'q' => rights |= CastlingRights::BLACK_QUEENSIDE,
            _ => {}
        }
    }

    Ok(rights)
}

fn parse_en_passant_target(data: &str) -> Result<Option<Square>, FenParseError> {
    if !EN_PASSANT_PATTERN.is_match(data) {
        return Err(FenParseError::InvalidEnPassant(data.to_owned()));
    }

    if data == "-" {
        return Ok(None);
    }

    Square::from_algebraic(data)
        .map(Some)
        .map_err(|_| FenParseError::InvalidEnPassant(data.to_owned()))
}

fn parse_halfmove_clock(data: &str) -> Result<u32, FenParseError> {
    data.parse::<i64>()
        .ok()
        .and_then(|value| u32::try_from(value).ok())
        .ok_or_else(|| FenParseError::InvalidHalfmove(data.to_owned()))
}

fn parse_fullmove_counter(data: &str) -> Result<u32, FenParseError> {
    data.parse::<i64>()
        .ok()
        .filter(|&value| value >= 1)
        .and_then(|value| u32::try_from(value).ok())
        .ok_or_else(|| FenParseError::InvalidFullmove(data.to_owned()))
}

fn build_board(ranks: &[&str]) -> Result<Board, FenParseError> {
    let mut board = Board::empty();

    // Placement data lists rank 8 first.
    for (&rank_data, &rank) in ranks.iter().zip(RANKS.iter().rev()) {
        let mut file = 0;
        for c in rank_data.chars() {
            if let Some(skip) = c.to_digit(10) {
                file += skip as usize;
                continue;
            }

            if file >= FILES.len() {
                return Err(FenParseError::FileDoesNotSumToEight(rank_data.to_owned()));
            }

            let piece = Piece::try_from(c)
                .map_err(|_| FenParseError::InvalidPlacement(rank_data.to_owned()))?;
            board.put(Square::of(rank, FILES[file]), piece);
            file += 1;
        }

        if file != FILES.len() {
            return Err(FenParseError::FileDoesNotSumToEight(rank_data.to_owned()));
        }
    }

    Ok(board)
}

/// Renders a position as FEN. For any canonical FEN string `f`,
/// `format(&parse(f)?) == f`.
pub fn format(pos: &Position) -> String {
    let mut buf = String::new();
    for &rank in RANKS.iter().rev() {
        let mut empty_squares = 0;
        for &file in FILES.iter() {
            let square = Square::of(rank, file);
            if let Some(piece) = pos.piece_at(square) {
                if empty_squares != 0 {
                    let _ = write!(&mut buf, "{}", empty_squares);
                }
                let _ = write!(&mut buf, "{}", piece);
                empty_squares = 0;
            } else {
                empty_squares += 1;
            }
        }

        if empty_squares != 0 {
            let _ = write!(&mut buf, "{}", empty_squares);
        }

        if rank != Rank::One {
            buf.push('/');
        }
    }

    let en_passant = match pos.en_passant_target() {
        Some(square) => square.to_string(),
        None => "-".to_owned(),
    };

    let _ = write!(
        &mut buf,
        " {} {} {} {} {}",
        pos.side_to_move(),
        pos.castling_rights(),
        en_passant,
        pos.halfmove_clock(),
        pos.fullmove_counter()
    );
    buf
}
