use std::io::{self, BufRead, Write};

use libortho::{supported_languages, Backend, Separator};

/// Interactive demo: type a line of text, get its transcription back.
///
/// Commands:
///   :lang <name-or-path>   switch language
///   :strip                 toggle trailing-separator stripping
///   :quit                  exit
fn main() {
    let mut backend = match Backend::new("cree") {
        Ok(b) => b,
        Err(e) => {
            eprintln!("✗ {e}");
            std::process::exit(1);
        }
    };
    let separator = Separator::default();
    let mut strip = false;

    println!(
        "libortho interactive demo (language: cree, {} rules)",
        backend.engine().rules().len()
    );
    println!("bundled languages: {}", supported_languages().join(", "));
    println!("commands: :lang <name>, :strip, :quit");

    let stdin = io::stdin();
    loop {
        print!("g2p> ");
        let _ = io::stdout().flush();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(e) => {
                eprintln!("✗ read error: {e}");
                break;
            }
        }
        let line = line.trim();

        if line.is_empty() {
            continue;
        }
        if line == ":quit" {
            break;
        }
        if line == ":strip" {
            strip = !strip;
            println!("strip = {strip}");
            continue;
        }
        if let Some(lang) = line.strip_prefix(":lang ") {
            match Backend::new(lang.trim()) {
                Ok(b) => {
                    backend = b;
                    println!(
                        "✓ switched to '{}' ({} rules)",
                        backend.language(),
                        backend.engine().rules().len()
                    );
                }
                Err(e) => eprintln!("✗ {e}"),
            }
            continue;
        }

        match backend.phonemize(&[line], &separator, strip) {
            Ok(out) => println!("{}", out[0]),
            Err(e) => eprintln!("✗ {e}"),
        }
    }
}
