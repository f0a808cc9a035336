use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;

use libg2p_core::RuleSet;

/// Check a .g2p rule file against the rule grammar.
///
/// Exits non-zero when the file is unreadable or any line violates the
/// two-field `grapheme phone` shape.
#[derive(Parser)]
struct Args {
    /// Rule file to check
    profile: PathBuf,

    /// Print every rule after a successful check
    #[arg(long)]
    dump: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let text = fs::read_to_string(&args.profile)
        .with_context(|| format!("cannot read '{}'", args.profile.display()))?;

    match RuleSet::parse(&text) {
        Ok(rules) => {
            println!("✓ {}: {} rules", args.profile.display(), rules.len());
            if args.dump {
                let mut entries: Vec<(&str, &str)> = rules.iter().collect();
                entries.sort();
                for (grapheme, phone) in entries {
                    println!("{grapheme}\t{phone}");
                }
            }
            Ok(())
        }
        Err(e) => bail!("✗ {}: {}", args.profile.display(), e),
    }
}
