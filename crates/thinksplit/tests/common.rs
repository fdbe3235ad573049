#![allow(missing_docs)]

pub const ORIGINAL: &str = "Sure! <think>The user wants a haiku.\n<think>nested</think>\nCount syllables.</think>\n\nAutumn moon rises<br></think> end";

// This stream simulates a reasoning model's response. It intentionally cuts
// chunks inside tags to exercise the splitter.
#[rustfmt::skip]
pub const STREAM: [&str; 13] = [
    "Sure",
    "! <th",                   // open tag starts
    "ink>The user wants",      // open tag completes
    " a haiku.",
    "\n<thi",                  // nested open tag starts
    "nk>nested</th",           // nested open completes, nested close starts
    "ink>\n",                  // nested close completes
    "Count syllables.</",      // top-level close starts
    "think>",                  // top-level close completes
    "\n\nAutumn moon",
    " rises<",                 // after the close, '<' is plain reply text
    "br>",
    "</think> end",            // so is a late close tag
];

#[test]
fn assert_stream_example() {
    assert_eq!(STREAM.concat(), ORIGINAL);
}
