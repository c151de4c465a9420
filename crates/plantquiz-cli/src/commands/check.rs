//! The `plantquiz check` command.

use anyhow::Result;

use plantquiz_core::matching::{best_match, normalize};

pub fn execute(input: String, accepted: Vec<String>, threshold: u8) -> Result<()> {
    anyhow::ensure!(!accepted.is_empty(), "at least one --accepted name is required");

    println!("Input: \"{}\"", normalize(&input));

    match best_match(&input, accepted.as_slice()) {
        Some(best) => {
            println!("Best match: {} ({:.1}%)", best.option, best.score);
            if best.passes(threshold) {
                println!("Verdict: match (threshold {threshold})");
            } else {
                println!("Verdict: no match (threshold {threshold})");
            }
        }
        None => {
            println!("Verdict: no match (empty answer)");
        }
    }

    Ok(())
}
