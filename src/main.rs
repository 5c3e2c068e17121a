//! Binary entry point: default parameters, OS-seeded randomness, stdout.

use std::io;

use speed_comparison::{BenchParams, Reporter, run};

fn main() -> io::Result<()> {
    let params = BenchParams::default();
    let mut rng = rand::rng();
    let stdout = io::stdout();
    let mut reporter = Reporter::new(stdout.lock());
    run(&params, &mut rng, &mut reporter)
}
