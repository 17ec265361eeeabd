//! Column-width wrapping

use proptest::prelude::*;
use textseg_engine::{
    Config, EngineConfig, EngineError, LineFormat, Segmenter, UrgentBreak, WrapOptions,
};

fn segmenter() -> Segmenter {
    Segmenter::new(EngineConfig::sequential()).unwrap()
}

fn options(width: usize) -> WrapOptions {
    WrapOptions::with_width(width)
}

#[test]
fn test_ideographs_take_two_columns() {
    let lines = segmenter().wrap("漢字漢字漢字", 4).unwrap();
    assert_eq!(lines, ["漢字\n", "漢字\n", "漢字"]);
}

#[test]
fn test_ideographs_wrap_individually() {
    let lines = segmenter().wrap("漢字漢", 3).unwrap();
    assert_eq!(lines, ["漢\n", "字\n", "漢"]);
}

#[test]
fn test_ambiguous_width_follows_context() {
    // Greek alpha is ambiguous: one column by default, two in East Asian context.
    let text = "\u{03B1}\u{03B1} \u{03B1}";
    let narrow = segmenter().wrap(text, 4).unwrap();
    assert_eq!(narrow, [text]);

    let east_asian = Segmenter::new(EngineConfig::new(Config::east_asian())).unwrap();
    let wide = east_asian.wrap(text, 4).unwrap();
    assert_eq!(wide, ["\u{03B1}\u{03B1} \n", "\u{03B1}"]);
}

#[test]
fn test_mandatory_breaks_end_lines() {
    let lines = segmenter().wrap("one\ntwo three\r\nfour", 0).unwrap();
    assert_eq!(lines, ["one\n", "two three\r\n", "four"]);
}

#[test]
fn test_newline_format_normalizes_terminators() {
    let options = WrapOptions {
        width: 0,
        newline: "\r\n".to_string(),
        format: LineFormat::Newline,
        ..WrapOptions::default()
    };
    let lines = segmenter().wrap_with("ab  \ncd ef ", &options).unwrap();
    assert_eq!(lines, ["ab\r\n", "cd ef\r\n"]);

    let ended = segmenter().wrap_with("ab\n", &options).unwrap();
    assert_eq!(ended, ["ab\r\n"]);
    assert!(segmenter().wrap_with("", &options).unwrap().is_empty());
}

#[test]
fn test_trim_drops_spaces_at_wrap_points() {
    let trim = WrapOptions {
        format: LineFormat::Trim,
        ..options(5)
    };
    let text = "abc   def";
    assert_eq!(segmenter().wrap_with(text, &trim).unwrap(), ["abc\n", "def"]);
    assert_eq!(segmenter().wrap(text, 5).unwrap(), ["abc   \n", "def"]);
}

#[test]
fn test_char_max_limits_code_points() {
    let options = WrapOptions {
        width: 0,
        char_max: 5,
        ..WrapOptions::default()
    };
    let lines = segmenter().wrap_with("abc def ghi", &options).unwrap();
    assert_eq!(lines, ["abc \n", "def \n", "ghi"]);
}

#[test]
fn test_excessive_run_handling() {
    let text = "ab abcdef";

    let forced = segmenter().wrap(text, 3).unwrap();
    assert_eq!(forced, ["ab \n", "abc\n", "def"]);

    let keep = WrapOptions {
        urgent: UrgentBreak::Keep,
        ..options(3)
    };
    assert_eq!(segmenter().wrap_with(text, &keep).unwrap(), ["ab \n", "abcdef"]);

    let error = WrapOptions {
        urgent: UrgentBreak::Error,
        ..options(3)
    };
    assert!(matches!(
        segmenter().wrap_with(text, &error),
        Err(EngineError::ExcessiveLine { byte_offset: 3 })
    ));
}

#[test]
fn test_custom_newline_at_wrap_points() {
    let options = WrapOptions {
        newline: "<br>".to_string(),
        ..options(5)
    };
    let lines = segmenter().wrap_with("hello world", &options).unwrap();
    assert_eq!(lines, ["hello <br>", "world"]);
}

#[test]
fn test_configured_options_apply() {
    let config = EngineConfig {
        wrap: WrapOptions {
            format: LineFormat::Trim,
            ..WrapOptions::default()
        },
        ..EngineConfig::default()
    };
    let segmenter = Segmenter::new(config).unwrap();
    assert_eq!(segmenter.wrap("hello world", 5).unwrap(), ["hello\n", "world"]);
}

const WORDS: &[char] = &['a', 'b', 'c', ' ', ' ', '漢', '字'];

fn wrap_text() -> impl Strategy<Value = String> {
    (
        prop::sample::select(&['a', '漢'][..]),
        prop::collection::vec(prop::sample::select(WORDS), 0..48),
    )
        .prop_map(|(first, rest)| std::iter::once(first).chain(rest).collect())
}

proptest! {
    #[test]
    fn prop_lines_fit_and_keep_text(text in wrap_text(), width in 2usize..16) {
        let segmenter = segmenter();
        let lines = segmenter.wrap(&text, width).unwrap();

        prop_assert_eq!(lines.concat().replace('\n', ""), text);
        for line in &lines {
            let content = line.trim_end_matches('\n').trim_end_matches(' ');
            prop_assert!(
                segmenter.columns(content) <= width,
                "{:?} is wider than {}", line, width
            );
        }
    }
}
