//! End-to-end encoding of lines into the delimited output

use cleave_core::{LineProcessor, ProcessorConfig, Strategy, StreamReceiver, Receiver};

fn encode(strategy: Strategy, input: &str) -> (String, u64) {
    let mut processor = LineProcessor::new(strategy);
    let mut out = Vec::new();
    let changed = processor.process_reader(input.as_bytes(), &mut out).unwrap();
    (String::from_utf8(out).unwrap(), changed)
}

#[test]
fn test_empty_line_is_preserved() {
    let mut processor = LineProcessor::new(Strategy::Unicode);
    let mut out = Vec::new();
    assert!(processor.process_line("", &mut out).unwrap());
    assert_eq!(out, b"\n");
}

#[test]
fn test_whitespace_only_line_vanishes() {
    for strategy in Strategy::ALL {
        let mut processor = LineProcessor::new(strategy);
        let mut out = Vec::new();
        assert!(!processor.process_line("   \t     ", &mut out).unwrap());
        assert!(out.is_empty());
    }
}

#[test]
fn test_three_lines_one_blank_after_filtering() {
    let (output, changed) = encode(Strategy::Unicode, "one\n   \t\t\t \ntwo\n");
    assert_eq!(output.chars().count(), 18);
    assert_eq!(changed, 2);
}

#[test]
fn test_receiver_single_character() {
    let mut receiver = StreamReceiver::new(Vec::new());
    receiver.add_char("a").unwrap();
    receiver.end_word().unwrap();
    assert!(receiver.end_line().unwrap());
    assert_eq!(receiver.into_inner(), b"a\n \n\n");
}

#[test]
fn test_literal_blank_line_differs_from_filtered_line() {
    let (output, changed) = encode(Strategy::Unicode, "a\n\n!!!\nb\n");
    assert_eq!(output, "a\n \n\n\nb\n \n\n");
    assert_eq!(changed, 3);
}

#[test]
fn test_strategies_disagree_on_punctuation() {
    let (unicode, unicode_changed) = encode(Strategy::Unicode, "...\n");
    let (whitespace, whitespace_changed) = encode(Strategy::Whitespace, "...\n");

    assert_eq!(unicode, "");
    assert_eq!(unicode_changed, 0);
    assert_eq!(whitespace, ".\n.\n.\n \n\n");
    assert_eq!(whitespace_changed, 1);
}

#[test]
fn test_encoding_is_recoverable() {
    let input = "Hello, wörld! e\u{301}clair 42\n\nsecond line";
    let (output, _) = encode(Strategy::Unicode, input);

    // decode: lines end with an empty record, words with a lone space
    let mut lines: Vec<Vec<String>> = vec![Vec::new()];
    let mut word = String::new();
    for record in output.split_terminator('\n') {
        match record {
            "" => lines.push(Vec::new()),
            " " => lines
                .last_mut()
                .unwrap()
                .push(std::mem::take(&mut word)),
            grapheme => word.push_str(grapheme),
        }
    }
    lines.pop();

    assert_eq!(
        lines,
        vec![
            vec!["Hello", "wörld", "e\u{301}clair", "42"],
            vec![],
            vec!["second", "line"],
        ]
    );
}

#[test]
fn test_config_built_processor_matches_direct() {
    let mut from_config = ProcessorConfig::builder()
        .whitespace()
        .build()
        .unwrap()
        .build_processor()
        .unwrap();
    let mut direct = LineProcessor::new(Strategy::Whitespace);

    let mut a = Vec::new();
    let mut b = Vec::new();
    from_config.process_reader("x #y\n".as_bytes(), &mut a).unwrap();
    direct.process_reader("x #y\n".as_bytes(), &mut b).unwrap();

    assert_eq!(a, b);
    assert_eq!(from_config.stats(), direct.stats());
}
