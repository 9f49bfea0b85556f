// SPDX-License-Identifier: MIT OR Apache-2.0

//! Column layout and path shortening through the public API.

use logx::stack::{RawFrame, ScriptedStack};
use logx::{Config, InMemorySink, Logger, StackWalker, pad, shorten_path};
use std::path::MAIN_SEPARATOR;
use std::sync::Arc;

#[test]
fn pad_scenarios() {
    assert_eq!(pad("ab", 8, 6).len(), 10);
    assert_eq!(pad(&"a".repeat(60), 56, 4).len(), 64);
}

#[test]
fn pad_properties_hold_over_a_range() {
    for min_width in [0, 1, 8, 12, 56] {
        for column_width in [1, 4, 6, 12] {
            for n in 0..100 {
                let text = "z".repeat(n);
                let padded = pad(&text, min_width, column_width);
                assert!(padded.starts_with(&text));
                if n < min_width {
                    assert_eq!(padded.len(), min_width + 2);
                } else {
                    assert_eq!(padded.len() % column_width, 0);
                    assert!(padded.len() >= n + 2);
                }
            }
        }
    }
}

#[test]
fn shorten_path_scenario() {
    let sep = MAIN_SEPARATOR;
    assert_eq!(
        shorten_path("/a/b/c/d/file.go", 2),
        format!("c{sep}d{sep}file.go")
    );
}

#[test]
fn trace_over_three_frame_stack() {
    let stack = Arc::new(ScriptedStack::new([
        RawFrame::new("/w/pkg/foo.go", 10),
        RawFrame::new("/w/pkg/bar.go", 20),
        RawFrame::new("/w/main.go", 30),
    ]));
    let walker = StackWalker::new(stack);
    let trace = walker.trace(0, 5, 2);
    assert_eq!(trace.len(), 3);
    let lines: Vec<u32> = trace.iter().map(|frame| frame.line).collect();
    assert_eq!(lines, vec![10, 20, 30]);
}

#[test]
fn aligned_lines_share_tab_stops() {
    let stack = Arc::new(ScriptedStack::new(
        (0..6).map(|i| RawFrame::new(format!("/w/pkg/{}.rs", "m".repeat(i * 3)), 7)),
    ));
    let sink = Arc::new(InMemorySink::new());
    let logger = Logger::new(Config::default(), sink.clone()).with_stack_source(stack);
    logger.printf(format_args!("first"));
    logger.printf(format_args!("second, longer message"));

    for line in sink.drain_lines() {
        let body_start = line.find("first").or_else(|| line.find("second")).unwrap();
        assert_eq!(body_start % 6, 0, "{line:?}");
    }
}
