//! Lexicon hot reload under concurrent readers.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;

use archetype_core::PatternType;
use archetype_engine::{EngineSettings, RecommendationEngine};
use archetype_lexicon::{IndicatorDef, Lexicon, LexiconDef};

fn lexicon(version: &str) -> Lexicon {
    let mut def = LexiconDef::builtin();
    def.version = version.to_string();
    Lexicon::compile(def).unwrap()
}

/// Built-in table where "dashboard" is a strong STRUCTURED_OUTPUT indicator.
fn dashboard_lexicon(version: &str) -> Lexicon {
    let mut def = LexiconDef::builtin();
    def.version = version.to_string();
    def.indicators.push(IndicatorDef {
        pattern: PatternType::StructuredOutput,
        keyword: "dashboard".to_string(),
        weight: 1.0,
        category: archetype_core::IndicatorCategory::Primary,
    });
    Lexicon::compile(def).unwrap()
}

#[test]
fn readers_see_one_whole_lexicon_per_call() {
    let engine = Arc::new(RecommendationEngine::new(
        lexicon("v1"),
        EngineSettings::default(),
    ));
    let stop = Arc::new(AtomicBool::new(false));

    let readers: Vec<_> = (0..4)
        .map(|_| {
            let engine = Arc::clone(&engine);
            let stop = Arc::clone(&stop);
            thread::spawn(move || {
                let mut seen = 0usize;
                while !stop.load(Ordering::Relaxed) || seen == 0 {
                    let report = engine.explain("A dashboard for the admin", &[]).unwrap();
                    match report.lexicon_version.as_str() {
                        // Old table: "dashboard" is not an indicator.
                        v if v.starts_with("plain") || v == "v1" => {
                            assert!(report.fallback);
                            assert_eq!(report.recommendation.primary, PatternType::Workflow);
                        }
                        // New table: it is, and nothing else matched.
                        v if v.starts_with("dash") => {
                            assert!(!report.fallback);
                            assert_eq!(
                                report.recommendation.primary,
                                PatternType::StructuredOutput
                            );
                        }
                        other => panic!("unexpected lexicon {other}"),
                    }
                    seen += 1;
                }
                seen
            })
        })
        .collect();

    for i in 0..50 {
        if i % 2 == 0 {
            engine.reload_lexicon(dashboard_lexicon(&format!("dash-{i}")));
        } else {
            engine.reload_lexicon(lexicon(&format!("plain-{i}")));
        }
    }
    stop.store(true, Ordering::Relaxed);

    for r in readers {
        assert!(r.join().unwrap() > 0);
    }
    assert_eq!(engine.lexicon_version(), "plain-49");
}

#[test]
fn reload_returns_previous_and_keeps_it_alive() {
    let engine = RecommendationEngine::new(lexicon("v1"), EngineSettings::default());
    let held = engine.lexicon();
    let previous = engine.reload_lexicon(lexicon("v2"));
    assert_eq!(previous.version(), "v1");
    assert_eq!(held.version(), "v1");
    assert_eq!(engine.lexicon_version(), "v2");
}

#[test]
fn failed_file_reload_keeps_current_lexicon() {
    let engine = RecommendationEngine::new(lexicon("v1"), EngineSettings::default());
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.toml");
    std::fs::write(&path, "version = \"v2\"\n[[indicators]]\npattern = \"NOPE\"\n").unwrap();

    assert!(engine.reload_lexicon_from_file(&path).is_err());
    assert_eq!(engine.lexicon_version(), "v1");
}

#[test]
fn file_reload_swaps_in_exported_table() {
    let engine = RecommendationEngine::new(lexicon("v1"), EngineSettings::default());
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("lexicon.toml");
    let mut def = LexiconDef::builtin();
    def.version = "from-file".to_string();
    std::fs::write(&path, def.to_toml().unwrap()).unwrap();

    let previous = engine.reload_lexicon_from_file(&path).unwrap();
    assert_eq!(previous.version(), "v1");
    assert_eq!(engine.lexicon_version(), "from-file");
}
