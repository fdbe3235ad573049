//! Demonstrates how to show a reasoning model's "thinking" and its answer in
//! separate places while the response is still streaming.
//!
//! Reasoning models such as DeepSeek-R1 or Qwen3 wrap their chain of thought
//! in `<think>...</think>` and then write the reply. Token-streaming APIs
//! deliver that text in arbitrary fragments, so a tag may arrive split across
//! several chunks. The splitter below:
//!
//! 1. Prints every reasoning fragment to `stderr` as soon as it is known not
//!    to be part of a tag.
//! 2. Prints reply fragments to `stdout`, so `2>/dev/null` leaves only the
//!    answer.
//! 3. Logs (through `tracing`) when the reasoning phase completes.
//!
//! Run with
//!
//! ```bash
//! RUST_LOG=debug cargo run -p thinksplit --example llm_reasoning_stream
//! ```

use std::io::Write;

use thinksplit::{SplitterListener, SplitterOptions, StreamTagSplitter};
use tracing_subscriber::EnvFilter;

/// Routes the two regions to different outputs.
#[derive(Default)]
struct Terminal {
    think_bytes: usize,
}

impl SplitterListener for Terminal {
    fn on_think_increment(&mut self, delta: &str) {
        self.think_bytes += delta.len();
        eprint!("{delta}");
    }

    fn on_think_complete(&mut self, think: &str) {
        eprintln!();
        tracing::info!(
            streamed = self.think_bytes,
            total = think.len(),
            "reasoning finished"
        );
    }

    fn on_reply_increment(&mut self, delta: &str) {
        print!("{delta}");
    }
}

fn main() -> std::io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    // A *toy* model response streamed in small chunks. In real life this
    // would come from the network, e.g. the `delta.content` fields of an SSE
    // response.
    let simulated_stream: [&str; 9] = [
        "<th",
        "ink>The user asks for the capital of France",
        ". That is Paris; it has been the capital since",
        " the 10th century.\n<",
        "/thi",
        "nk>\n\nThe capital",
        " of France is **Paris**",
        ". 3 < 4, and",
        " tags like </think> are plain text now.\n",
    ];

    let mut splitter =
        StreamTagSplitter::with_listener(SplitterOptions::default(), Terminal::default());

    let mut stdout = std::io::stdout();
    for chunk in simulated_stream {
        splitter.process_chunk(chunk);
        stdout.flush()?;
    }
    println!();

    if !splitter.is_think_complete() && splitter.has_think_content() {
        // If the stream ended inside the reasoning block, decide whatever is
        // appropriate for your app.
        eprintln!("⚠️  Stream ended before reasoning was complete");
    }
    if !splitter.pending_tag().is_empty() {
        eprintln!(
            "⚠️  Stream ended inside a tag: {:?}",
            splitter.pending_tag()
        );
    }

    assert_eq!(
        splitter.reply_content(),
        "The capital of France is **Paris**. 3 < 4, and tags like </think> are plain text now."
    );
    Ok(())
}
