//! Audit that every asset referenced by the compiled-in game data exists on
//! disk. Useful before packaging: a missing clip is silent in-game.

use std::collections::BTreeSet;
use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Parser;

use rainbow_learners::core::mixer::combination_table;
use rainbow_learners::core::quiz::question_deck;
use rainbow_learners::core::registry::seed_records;

#[derive(Parser, Debug)]
#[command(about = "Check that every image/audio path referenced by the game data exists")]
struct Args {
    /// Asset root the in-game paths are resolved against.
    #[arg(long, default_value = "assets")]
    asset_root: PathBuf,
    /// Print every checked path, not just the missing ones.
    #[arg(long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut referenced: BTreeSet<&'static str> = BTreeSet::new();
    for record in seed_records() {
        referenced.insert(record.image);
        referenced.insert(record.audio);
    }
    for question in question_deck() {
        referenced.insert(question.image);
        referenced.insert(question.audio);
    }
    for combination in combination_table() {
        referenced.insert(combination.audio);
    }

    let mut missing = 0usize;
    for path in &referenced {
        let on_disk = args.asset_root.join(path);
        if on_disk.is_file() {
            if args.verbose {
                println!("ok      {}", on_disk.display());
            }
        } else {
            println!("missing {}", on_disk.display());
            missing += 1;
        }
    }

    println!("{} assets referenced, {} missing", referenced.len(), missing);
    if missing > 0 {
        bail!("{missing} referenced assets are missing under {}", args.asset_root.display());
    }
    Ok(())
}
