#![no_main]
use std::cell::RefCell;

use arbitrary::{Arbitrary, Unstructured};
use libfuzzer_sys::{fuzz_mutator, fuzz_target, fuzzer_mutate};
use rand::rngs::SmallRng; // faster than StdRng
use rand::{Rng, RngCore, SeedableRng};
use thinksplit::{EventCollector, SplitEvent, SplitterOptions, StreamTagSplitter};

const HEADER: usize = 5; // 1 tag-pair byte + 4-byte seed

thread_local! {
    // One SmallRng per thread, seeded once from the host OS
    static RNG: RefCell<SmallRng> =
        RefCell::new(SmallRng::from_os_rng());
}

// Pieces that keep the matcher busy: complete tags for every tag pair below,
// their prefixes, and near misses.
static FRAGMENT_TABLE: &[&[u8]] = &[
    b"<think>",
    b"</think>",
    b"<",
    b"</",
    b"<thi",
    b"</thin",
    b"<<",
    b"[[",
    b"]]",
    b"[",
    b"<r>",
    b"</r>",
    b"{",
    b"}",
    b" ",
    b"\n",
    b"text",
    "\u{e9}".as_bytes(),
    "\u{1F60A}".as_bytes(),
];

#[derive(Debug, Arbitrary)]
enum TagPair {
    Think,
    Brackets,
    Short,
    Single,
}

impl TagPair {
    fn options(&self) -> SplitterOptions {
        let (open, close) = match self {
            TagPair::Think => return SplitterOptions::default(),
            TagPair::Brackets => ("[[", "]]"),
            TagPair::Short => ("<r>", "</r>"),
            TagPair::Single => ("{", "}"),
        };
        SplitterOptions::new(open, close).expect("fuzz tag pairs are valid")
    }
}

/// Helper: borrow the thread-local RNG and run a closure with it.
fn with_rng<F, R>(f: F) -> R
where
    F: FnOnce(&mut SmallRng) -> R,
{
    RNG.with(|cell| f(&mut cell.borrow_mut()))
}

fn mutator(data: &mut [u8], size: usize, max_size: usize, seed: u32) -> usize {
    if size < HEADER || seed.is_multiple_of(10) {
        data[0] = with_rng(|rng| rng.next_u32() as u8);

        // 2) split-seed
        data[1..5].copy_from_slice(&with_rng(|rng| rng.next_u32().to_le_bytes()));

        let mut prefix = HEADER;

        while prefix < size.max(HEADER + 1) && prefix < max_size {
            let written = append_fragment(&mut data[prefix..], max_size - prefix);
            if written == 0 {
                break;
            }
            prefix += written;
        }

        prefix
    } else {
        fuzzer_mutate(data, size, max_size)
    }
}

/// Append one fragment from `FRAGMENT_TABLE` to `buf`, but never exceed
/// `limit`. Returns the number of bytes written.
fn append_fragment(buf: &mut [u8], limit: usize) -> usize {
    with_rng(|rng| {
        let f = FRAGMENT_TABLE[rng.random_range(0..FRAGMENT_TABLE.len())];
        if f.len() > limit {
            return 0;
        }
        buf[..f.len()].copy_from_slice(f);
        f.len()
    })
}

fuzz_mutator!(|data: &mut [u8], size: usize, max_size: usize, seed: u32| {
    mutator(data, size, max_size, seed)
});

#[derive(Debug, PartialEq)]
struct Observed {
    think: String,
    reply: String,
    pending: String,
    has_think: bool,
    complete: bool,
    events: Vec<SplitEvent>,
}

fn run(options: &SplitterOptions, chunks: &[&str]) -> Observed {
    let mut splitter = StreamTagSplitter::with_listener(options.clone(), EventCollector::new());
    for chunk in chunks {
        splitter.process_chunk(chunk);
        splitter.assert_invariants();
    }
    Observed {
        think: splitter.think_content().to_string(),
        reply: splitter.reply_content().to_string(),
        pending: splitter.pending_tag().to_string(),
        has_think: splitter.has_think_content(),
        complete: splitter.is_think_complete(),
        events: splitter.into_listener().into_events(),
    }
}

fn splitter(data: &[u8]) {
    if data.len() < HEADER {
        return;
    }

    let tag_pair = TagPair::arbitrary(&mut Unstructured::new(&data[..1])).unwrap_or(TagPair::Think);
    let split_seed = u32::from_le_bytes(data[1..5].try_into().unwrap()) as u64;
    let data = &data[HEADER..];

    let text = String::from_utf8_lossy(data).into_owned();
    let options = tag_pair.options();

    // Use the random number we chose to split the input into chunks:
    let chunked = run(&options, &split_into_safe_chunks(&text, split_seed));
    let whole = run(&options, &[text.as_str()]);
    assert_eq!(chunked, whole, "chunking changed the outcome for {text:?}");

    let mut think = String::new();
    let mut reply = String::new();
    for event in &whole.events {
        match event {
            SplitEvent::ThinkIncrement { delta } => think.push_str(delta),
            SplitEvent::ReplyIncrement { delta } => reply.push_str(delta),
            SplitEvent::ReplyUpdate { reply: full } => assert_eq!(full, &reply),
            SplitEvent::ThinkComplete { think: full } => assert_eq!(full, &think),
        }
    }
    assert_eq!(think.trim(), whole.think);
    assert_eq!(reply.trim(), whole.reply);
}

fuzz_target!(|data: &[u8]| splitter(data));

/// Split a UTF-8 `&str` into boundary-safe chunks using a deterministic random
/// value to generate splits.
///
/// * `split_seed` may be any `u64`.
/// * Each chunk is at least one byte.
/// * Every slice ends on a valid UTF-8 boundary, so it can’t panic.
fn split_into_safe_chunks(serialized: &str, split_seed: u64) -> Vec<&str> {
    let mut chunks = Vec::new();
    let mut start = 0;
    let len = serialized.len();

    while start < len {
        let remaining = len - start;

        // Derive a candidate size from the fixed seed.
        let mut size = (split_seed as usize % remaining) + 1;

        // Bump `size` forward until it lands on a char boundary
        // (or hits the end of the string, which is always a boundary).
        while start + size < len && !serialized.is_char_boundary(start + size) {
            size += 1;
        }

        chunks.push(&serialized[start..start + size]);
        start += size;
    }

    chunks
}
