// Copyright 2017-2019 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

#[macro_use]
extern crate clap;
#[macro_use]
extern crate serde_derive;

use std::process;
use std::time::Instant;

use clap::{App, Arg, ArgMatches};
use rookery::{
    divide_report, perft, perft_detailed, perft_parallel, status, PerftResults, PlayerStatus,
    Position, START_POSITION_FEN,
};

#[derive(Serialize)]
struct PerftReport<'a> {
    fen: &'a str,
    depth: u32,
    status: PlayerStatus,
    millis: u64,
    results: PerftResults,
}

fn main() {
    env_logger::init();
    let matches = App::new(crate_name!())
        .version(crate_version!())
        .author(crate_authors!())
        .about("PERFT analysis of board positions")
        .arg(
            Arg::with_name("FEN")
                .help("FEN string for a board position")
                .default_value(START_POSITION_FEN)
                .index(1),
        )
        .arg(
            Arg::with_name("depth")
                .help("Depth of move tree to search")
                .value_name("DEPTH")
                .short("d")
                .long("depth")
                .default_value("4")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("divide")
                .help("Print the node count below each root move")
                .long("divide"),
        )
        .arg(
            Arg::with_name("detailed")
                .help("Count captures, en passants, castles, promotions, checks and checkmates")
                .long("detailed"),
        )
        .arg(
            Arg::with_name("parallel")
                .help("Split the root moves across threads")
                .long("parallel"),
        )
        .arg(
            Arg::with_name("json")
                .help("Print the results at the requested depth as JSON")
                .long("json"),
        )
        .get_matches();

    run_perft(&matches);
}

fn run_perft(matches: &ArgMatches) -> ! {
    let fen = matches.value_of("FEN").unwrap_or(START_POSITION_FEN);
    let depth = value_t_or_exit!(matches, "depth", u32);
    let pos = match Position::from_fen(fen) {
        Ok(pos) => pos,
        Err(err) => {
            eprintln!("invalid fen: {}", err);
            process::exit(1);
        }
    };

    if matches.is_present("divide") {
        println!("{}", divide_report(&pos, depth));
        process::exit(0);
    }

    let detailed = matches.is_present("detailed");
    let parallel = matches.is_present("parallel");
    let count = |depth: u32| -> PerftResults {
        if detailed {
            perft_detailed(&pos, depth)
        } else if parallel {
            PerftResults {
                nodes: perft_parallel(&pos, depth),
                ..PerftResults::default()
            }
        } else {
            PerftResults {
                nodes: perft(&pos, depth),
                ..PerftResults::default()
            }
        }
    };

    if matches.is_present("json") {
        let start = Instant::now();
        let results = count(depth);
        let report = PerftReport {
            fen,
            depth,
            status: status(&pos),
            millis: start.elapsed().as_millis() as u64,
            results,
        };

        match serde_json::to_string_pretty(&report) {
            Ok(text) => println!("{}", text),
            Err(err) => {
                eprintln!("failed to serialize results: {}", err);
                process::exit(1);
            }
        }
        process::exit(0);
    }

    println!("fen:   {}", fen);
    println!("depth: {}", depth);
    println!();
    println!("{}", pos);
    for i in 1..depth + 1 {
        let start = Instant::now();
        let results = count(i);
        let ms = start.elapsed().as_millis();
        if detailed {
            println!(
                "perft({}) = {} ({} ms) captures={} ep={} castles={} promotions={} checks={} mates={}",
                i,
                results.nodes,
                ms,
                results.captures,
                results.en_passants,
                results.castles,
                results.promotions,
                results.checks,
                results.checkmates
            );
        } else {
            println!("perft({}) = {} ({} ms)", i, results.nodes, ms);
        }
    }

    process::exit(0);
}
