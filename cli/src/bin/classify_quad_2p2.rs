//! Stability verdict for a 2+2 hierarchical quadruple
//!
//! Runs the built-in reference scenario (or one supplied via `--config`)
//! against the pickled 2+2 MLP classifier. Prints exactly one of
//! `ML stable` / `ML unstable` / `ERROR` on stdout and exits 0 for all
//! three verdicts.

use anyhow::Result;
use clap::Parser;
use stability_classifier_cli::{init_tracing, scenario::Scenario2p2, Cli};
use stability_classifier_core_rs::{classify, Verdict};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut scenario = match &cli.config {
        Some(path) => Scenario2p2::from_file(path)?,
        None => Scenario2p2::default(),
    };
    if let Some(model_file) = cli.model_file {
        scenario.model_path = model_file;
    }

    let verdict = Verdict::from(classify(&scenario.request()));
    println!("{}", verdict);
    Ok(())
}
