//! Sequential and parallel execution must agree event for event

use textseg_engine::executor::SequentialExecutor;
use textseg_engine::{BreakOpportunity, Config, EngineConfig, ExecutionMode, Executor, Segmenter};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn sample_text(lines: usize) -> String {
    let mut text = String::new();
    for i in 0..lines {
        match i % 4 {
            0 => text.push_str("The quick brown fox jumps over the lazy dog.\n"),
            1 => text.push_str("\u{3053}\u{308C}\u{306F}\u{300C}\u{30C6}\u{30B9}\u{30C8}\u{300D}\u{3067}\u{3059}\u{3002}\r\n"),
            2 => text.push_str("   indented (with \u{201C}quotes\u{201D}) 12.5%\u{2028}"),
            _ => text.push_str("\u{1F1EF}\u{1F1F5}\u{1F1FA}\u{1F1F8} \u{05D0}-\u{05D1}\r"),
        }
    }
    text
}

fn parallel_config(emit_text_edges: bool) -> EngineConfig {
    EngineConfig {
        classification: Config::east_asian(),
        emit_text_edges,
        execution_mode: ExecutionMode::Parallel,
        threads: Some(3),
        parallel_threshold: 0,
        chunk_target_bytes: 16,
        ..EngineConfig::default()
    }
}

#[test]
fn test_parallel_matches_sequential() {
    init_logging();
    let text = sample_text(200);

    for edges in [true, false] {
        let parallel = Segmenter::new(parallel_config(edges)).unwrap();
        let expected: Vec<_> = parallel.segment_str(&text).collect();
        let events = parallel.events(&text).unwrap();
        assert_eq!(events.len(), expected.len());
        assert_eq!(events, expected);
    }
}

#[test]
fn test_mandatory_breaks_survive_chunking() {
    let text = sample_text(40);
    let segmenter = Segmenter::new(parallel_config(true)).unwrap();
    let mandatory = segmenter
        .events(&text)
        .unwrap()
        .into_iter()
        .filter(|e| e.opportunity == BreakOpportunity::Mandatory)
        .count();
    // one per line; the last line's break is the end of text
    assert_eq!(mandatory, 40);
}

#[test]
fn test_adaptive_selects_by_size() {
    let config = EngineConfig {
        parallel_threshold: 1024,
        ..EngineConfig::default()
    };
    let segmenter = Segmenter::new(config).unwrap();
    let small = "short text";
    let large = sample_text(100);
    assert_eq!(
        segmenter.events(small).unwrap(),
        segmenter.segment_str(small).collect::<Vec<_>>()
    );
    assert_eq!(
        segmenter.events(&large).unwrap(),
        segmenter.segment_str(&large).collect::<Vec<_>>()
    );
}

#[test]
fn test_batch_parallel_matches_sequential() {
    init_logging();
    let owned: Vec<String> = (0..32).map(|i| sample_text(i % 5)).collect();
    let texts: Vec<&str> = owned.iter().map(String::as_str).collect();

    let parallel = Segmenter::new(parallel_config(true)).unwrap();
    let sequential = Segmenter::new(EngineConfig {
        execution_mode: ExecutionMode::Sequential,
        ..parallel_config(true)
    })
    .unwrap();

    let expected = SequentialExecutor.process_batch(&sequential, &texts).unwrap();
    assert_eq!(SequentialExecutor.mode(), ExecutionMode::Sequential);
    assert_eq!(parallel.segment_batch(&texts).unwrap(), expected);
}

#[test]
fn test_invalid_thread_count() {
    let config = EngineConfig {
        threads: Some(0),
        ..EngineConfig::default()
    };
    assert!(Segmenter::new(config).is_err());
}
