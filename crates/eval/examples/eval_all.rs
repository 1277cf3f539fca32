// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
//
// Evaluates all the hands with the given number of cards and prints how many
// hands there are for each category.
//
// Run with:
//
// ```bash
// $ cargo r --release --example eval_all -- --cards 7
// ...
// Total hands      133784560
//
// High Card:       23294460
// One Pair:        58627800
// Two Pair:        31433400
// Three Of A Kind: 6461620
// Straight:        6180020
// Flush:           4047644
// Full House:      3473184
// Four Of A Kind:  224848
// Straight Flush:  41584
// ```
use anyhow::{Result, bail};
use clap::Parser;
use log::{debug, info};
use std::time::Instant;

use primerank_eval::{Card, Deck, Hand, HandRank, evaluate};

#[derive(Debug, Parser)]
struct Cli {
    /// Number of cards in each hand.
    #[clap(long, short, default_value_t = 7, value_parser = clap::value_parser!(u8).range(5..=7))]
    cards: u8,
    /// Log the first hand found for each category.
    #[clap(long, short)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    env_logger::builder()
        .filter_level(level)
        .format_target(false)
        .format_timestamp_millis()
        .init();

    let k = cli.cards as usize;
    info!("Evaluating all {k} cards hands");

    let now = Instant::now();
    let mut counts = [0usize; HandRank::COUNT];
    let mut failed = 0usize;

    Deck::default().for_each(k, |cards| match evaluate(cards) {
        Ok(score) => {
            let rank = HandRank::from_score(score);
            if counts[rank as usize] == 0 {
                log_first(cards);
            }
            counts[rank as usize] += 1;
        }
        Err(_) => failed += 1,
    });

    if failed > 0 {
        bail!("{failed} hands failed to evaluate");
    }

    let elapsed = now.elapsed().as_secs_f64();
    let total = counts.iter().sum::<usize>();
    info!("Evaluated {total} hands in {elapsed:.3}s");

    println!("Total hands      {total}");
    println!("Hands/sec:       {:.0}\n", total as f64 / elapsed);

    for rank in HandRank::ranks() {
        let label = format!("{rank}:");
        println!("{label:<17}{}", counts[rank as usize]);
    }

    Ok(())
}

fn log_first(cards: &[Card]) {
    match Hand::new(cards).evaluate(&[]) {
        Ok(result) => debug!("First {}: {result}", result.rank()),
        Err(e) => debug!("{e}"),
    }
}
