use std::io::{self, BufRead};

use clap::Parser;

use libortho::{supported_languages, Backend, Separator};

/// Transcribe stdin lines to phones using an orthography profile.
#[derive(Parser)]
#[command(name = "libortho", version)]
struct Args {
    /// Bundled language name or path to a .g2p rule file
    #[arg(long, default_value = "cree")]
    language: String,

    /// Remove the trailing separator from each output line
    #[arg(long)]
    strip: bool,

    /// Marker inserted between phones
    #[arg(long)]
    phone_sep: Option<String>,

    /// Marker inserted at syllable boundaries
    #[arg(long)]
    syllable_sep: Option<String>,

    /// Marker inserted between words
    #[arg(long)]
    word_sep: Option<String>,

    /// List bundled languages and exit
    #[arg(long)]
    list: bool,
}

fn main() {
    let args = Args::parse();

    if args.list {
        for name in supported_languages() {
            println!("{name}");
        }
        return;
    }

    let backend = match Backend::new(&args.language) {
        Ok(b) => b,
        Err(e) => {
            eprintln!("✗ {e}");
            std::process::exit(1);
        }
    };

    let mut separator = Separator::default();
    if let Some(s) = args.phone_sep {
        separator = separator.with_phone(s);
    }
    if let Some(s) = args.syllable_sep {
        separator = separator.with_syllable(s);
    }
    if let Some(s) = args.word_sep {
        separator = separator.with_word(s);
    }

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                eprintln!("✗ read error: {e}");
                std::process::exit(1);
            }
        };
        match backend.phonemize(&[line], &separator, args.strip) {
            Ok(out) => println!("{}", out[0]),
            Err(e) => {
                eprintln!("✗ {e}");
                std::process::exit(1);
            }
        }
    }
}
