//! Klondike deck shuffle generator
//!
//! Emits pseudo-random 104-character deck lines on stdout, one deck per
//! line, in the exact format the solver driver reads. Pipe it straight in:
//!
//! ```text
//! shuffle 100 42 | solver 30
//! ```
//!
//! With a seed the stream is reproducible; without one it is entropy-seeded.

use std::process;

use klondike_game_engine::Deck;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let count: usize = match args.first() {
        None => 1,
        Some(arg) => match arg.parse() {
            Ok(count) => count,
            Err(_) => usage(arg),
        },
    };
    let mut rng: StdRng = match args.get(1) {
        None => StdRng::from_entropy(),
        Some(arg) => match arg.parse() {
            Ok(seed) => StdRng::seed_from_u64(seed),
            Err(_) => usage(arg),
        },
    };

    let mut cards = Deck::standard().into_cards();
    for _ in 0..count {
        cards.shuffle(&mut rng);
        let line: String = cards.iter().map(|card| card.to_string()).collect();
        println!("{}", line);
    }
}

fn usage(bad: &str) -> ! {
    eprintln!("Invalid argument {:?}", bad);
    eprintln!("Usage: shuffle [count] [seed]");
    process::exit(2);
}
