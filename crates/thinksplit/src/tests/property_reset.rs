use alloc::borrow::ToOwned;

use quickcheck::QuickCheck;

use super::{
    arbitrary::TaggedText,
    utils::{Outcome, collecting_splitter, quickcheck_tests, run_chunks},
};

/// Property: after `reset()` a used splitter behaves exactly like a fresh one,
/// including both pairs of increment marks.
#[test]
fn reset_matches_fresh_quickcheck() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(first: TaggedText, second: TaggedText, poll_first: bool) -> bool {
        let mut splitter = collecting_splitter();
        splitter.process_chunk(&first.0);
        if poll_first {
            let _ = splitter.think_content_increment();
            let _ = splitter.reply_content_increment();
        }
        splitter.reset();
        splitter.listener_mut().drain().for_each(drop);

        if !(splitter.pending_tag().is_empty()
            && splitter.think_content().is_empty()
            && splitter.reply_content().is_empty()
            && !splitter.has_think_content()
            && !splitter.is_think_complete()
            && splitter.think_nest_depth() == 0)
        {
            return false;
        }

        splitter.process_chunk(&second.0);
        splitter.assert_invariants();
        let reused = Outcome::of(&splitter);
        let think_increment = splitter.think_content_increment().to_owned();
        let reply_increment = splitter.reply_content_increment().to_owned();

        let mut fresh = collecting_splitter();
        fresh.process_chunk(&second.0);

        reused == run_chunks([second.0.as_str()])
            && think_increment == fresh.think_content_increment()
            && reply_increment == fresh.reply_content_increment()
    }

    QuickCheck::new()
        .tests(quickcheck_tests())
        .quickcheck(prop as fn(TaggedText, TaggedText, bool) -> bool);
}

#[test]
fn reset_keeps_options_and_listener() {
    use crate::{EventCollector, SplitterOptions, StreamTagSplitter};

    let options = SplitterOptions::new("<r>", "</r>").unwrap();
    let mut splitter = StreamTagSplitter::with_listener(options.clone(), EventCollector::new());
    splitter.process_chunk("<r>x</r>y");
    splitter.reset();
    assert_eq!(splitter.options(), &options);
    assert_eq!(splitter.listener().events().len(), 4);

    splitter.process_chunk("<r>z</r>");
    assert_eq!(splitter.think_content(), "z");
}
