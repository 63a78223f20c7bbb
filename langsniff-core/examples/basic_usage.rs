//! Basic usage of the guesser, the detector and adaptive training

use langsniff_core::{classify_script, Config, DetectOptions, Guesser};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Example 1: Guess with the embedded models
    println!("=== Example 1: Guessing ===");
    let guesser = Guesser::new()?;
    for text in [
        "The quick brown fox jumps over the lazy dog",
        "Le chat est sur la table et il dort",
        "Я люблю читать книги вечером",
        "ภาษาไทยเป็นภาษาที่สวยงาม",
    ] {
        match guesser.guess_best(text, &[] as &[&str]) {
            Some(guess) => println!("{text} -> {} ({:.3})", guess.name, guess.score),
            None => println!("{text} -> undetermined"),
        }
    }

    // Example 2: Restrict candidates and inspect raw scores
    println!("\n=== Example 2: Allow list ===");
    for guess in guesser.guess("Hello World", &["en", "fr", "de"], None) {
        println!("  {} {:.3}", guess.alpha3, guess.score);
    }
    let script = classify_script("Hello World");
    println!("  script: {} ({:.2})", script.id(), script.ratio);

    // Example 3: Configuration with an extra model and training
    println!("\n=== Example 3: Configuration ===");
    let config = Config::builder()
        .extra_model("ell", "ell", "καλ|αλη|λημ|ημέ|μέρ|έρα")
        .training_sentence("eo", "Mi amas legi librojn vespere")
        .limit(Some(3))
        .build()?;
    let custom = Guesser::with_config(config)?;

    let candidates = custom
        .detector()
        .detect_all("Καλημέρα σε όλους", &DetectOptions::default());
    println!("Greek candidates: {candidates:?}");

    let best = custom.guess_best("Mi amas legi librojn vespere", &["eo", "es"]);
    println!("Trained guess: {best:?}");

    Ok(())
}
