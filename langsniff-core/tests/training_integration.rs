//! Adaptive training and concurrent access

use std::sync::Arc;
use std::thread;

use langsniff_core::{DetectOptions, Detector, Guesser, RankModel};

const SENTENCE: &str = "Supercalifragilistic expialidocious";

fn trained_model(guesser: &Guesser, code: &str) -> Option<RankModel> {
    guesser.detector().registry().model("Latin", code).cloned()
}

#[test]
fn test_process_extra_sentences_is_idempotent() {
    let guesser = Guesser::new().unwrap();
    guesser.add_extra_sentence("en", SENTENCE);
    guesser.add_extra_sentence("xxx", "Another invented sentence here");

    let once = (trained_model(&guesser, "eng"), trained_model(&guesser, "xxx"));
    guesser.process_extra_sentences();
    let twice = (trained_model(&guesser, "eng"), trained_model(&guesser, "xxx"));
    guesser.process_extra_sentences();
    let thrice = (trained_model(&guesser, "eng"), trained_model(&guesser, "xxx"));

    assert_eq!(once, twice);
    assert_eq!(twice, thrice);
}

#[test]
fn test_rebuild_then_replay_restores_training() {
    let guesser = Guesser::new().unwrap();
    guesser.add_extra_sentence("xxx", SENTENCE);
    let trained = trained_model(&guesser, "xxx").unwrap();

    guesser.detector().build_all_models();
    assert!(trained_model(&guesser, "xxx").is_none());

    guesser.process_extra_sentences();
    assert_eq!(trained_model(&guesser, "xxx").unwrap(), trained);
}

#[test]
fn test_trained_language_wins_its_own_sentence() {
    let guesser = Guesser::new().unwrap();
    // Esperanto has metadata but no bundled model
    guesser.add_extra_sentence("eo", SENTENCE);

    let best = guesser.guess_best(SENTENCE, &["eo", "en"]).unwrap();
    assert_eq!(best.alpha3, "epo");
    assert_eq!(best.score, 1.0);
}

#[test]
fn test_training_ignores_unmodeled_script() {
    let guesser = Guesser::new().unwrap();
    assert!(!guesser.add_extra_sentence("th", "ภาษาไทยเป็นภาษาที่สวยงาม"));
    // the sample is still recorded
    assert_eq!(guesser.training_samples().len(), 1);
    assert!(!guesser.detector().registry().contains_script("tha"));
}

#[test]
fn test_add_model_then_detect() {
    let guesser = Guesser::new().unwrap();
    guesser
        .add_model("ell", "ell", "καλ|αλη|λημ|ημέ|μέρ|έρα")
        .unwrap();

    let candidates = guesser
        .detector()
        .detect_all("Καλημέρα σε όλους", &DetectOptions::default());
    assert_eq!(candidates.len(), 1);
    assert_eq!(candidates[0].code, "ell");
}

#[test]
fn test_concurrent_detection_and_training() {
    let detector = Arc::new(Detector::new().unwrap());
    let text = "The quick brown fox jumps over the lazy dog";
    let expected = detector.detect_all(text, &DetectOptions::default());
    let bundled = detector.registry().languages("Latin").len();

    let readers: Vec<_> = (0..4)
        .map(|_| {
            let detector = Arc::clone(&detector);
            thread::spawn(move || {
                for _ in 0..50 {
                    let result = detector.detect_all(text, &DetectOptions::default());
                    assert_eq!(result[0].code, "eng");
                }
            })
        })
        .collect();

    let writers: Vec<_> = (0..2)
        .map(|i| {
            let detector = Arc::clone(&detector);
            thread::spawn(move || {
                for j in 0..20 {
                    detector.add_trigrams(&format!("x{i}-{j}"), "zzzz qqqq wwww");
                }
            })
        })
        .collect();

    for handle in readers.into_iter().chain(writers) {
        handle.join().unwrap();
    }

    assert_eq!(detector.registry().languages("Latin").len(), bundled + 40);

    detector.build_all_models();
    assert_eq!(detector.detect_all(text, &DetectOptions::default()), expected);
}

#[test]
fn test_guesser_shared_across_threads() {
    let guesser = Arc::new(Guesser::new().unwrap());

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let guesser = Arc::clone(&guesser);
            thread::spawn(move || {
                guesser.add_extra_sentence(&format!("q{i}x"), "Invented sentence words");
                guesser
                    .guess("Le chat est sur la table et il dort", &["fr", "en"], Some(1))
                    .pop()
            })
        })
        .collect();

    for handle in handles {
        let best = handle.join().unwrap().unwrap();
        assert_eq!(best.alpha3, "fra");
    }
    assert_eq!(guesser.training_samples().len(), 4);
}
