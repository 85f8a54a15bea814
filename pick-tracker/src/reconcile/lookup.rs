//! Reverse pick lookup.

use crate::inference::PickIndex;
use tracing::warn;

/// Answers "was `source` picked onto `branch`?".
///
/// Returns the number of the one PR merged into `branch` that picks `source`.
/// When several PRs claim the same source the data is inconsistent; that is
/// logged and treated as no match so the result never depends on which
/// claimant happens to come first.
#[must_use]
pub fn find_pick(index: &PickIndex, source: u64, branch: &str) -> Option<u64> {
    match index.picks_onto(source, branch) {
        [] => None,
        [single] => Some(*single),
        many => {
            warn!(pr = source, branch, picks = ?many, "PR has too many picks");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::{Corpus, PrRecord};
    use std::io;
    use std::sync::{Arc, Mutex};

    /// Collects formatted log output.
    #[derive(Clone, Default)]
    struct LogBuffer(Arc<Mutex<Vec<u8>>>);

    impl io::Write for LogBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl LogBuffer {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    fn with_captured_logs<T>(f: impl FnOnce() -> T) -> (T, String) {
        let buffer = LogBuffer::default();
        let writer = buffer.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_ansi(false)
            .with_max_level(tracing::Level::DEBUG)
            .with_writer(move || writer.clone())
            .finish();

        let result = tracing::subscriber::with_default(subscriber, f);
        (result, buffer.contents())
    }

    #[test]
    fn finds_single_pick() {
        let corpus = Corpus::from_records([
            PrRecord::new(1, "dev"),
            PrRecord::new(2, "master").with_title("Cherry-pick of #1"),
        ])
        .unwrap();
        let index = PickIndex::build(&corpus);

        assert_eq!(find_pick(&index, 1, "master"), Some(2));
        assert_eq!(find_pick(&index, 1, "release"), None);
        assert_eq!(find_pick(&index, 2, "master"), None);
    }

    #[test]
    fn multiple_picks_are_no_match() {
        let corpus = Corpus::from_records([
            PrRecord::new(1, "dev"),
            PrRecord::new(2, "master").with_title("Cherry-pick of #1"),
            PrRecord::new(3, "master").with_body("backport of #1"),
        ])
        .unwrap();
        let index = PickIndex::build(&corpus);

        assert_eq!(index.picks_onto(1, "master"), &[2, 3]);
        assert_eq!(find_pick(&index, 1, "master"), None);
    }

    #[test]
    fn multiple_picks_log_a_warning() {
        let corpus = Corpus::from_records([
            PrRecord::new(1, "dev"),
            PrRecord::new(2, "master").with_title("Cherry-pick of #1"),
            PrRecord::new(3, "master").with_body("backport of #1"),
        ])
        .unwrap();
        let index = PickIndex::build(&corpus);

        let (found, logs) = with_captured_logs(|| find_pick(&index, 1, "master"));

        assert_eq!(found, None);
        assert!(logs.contains("WARN"), "logs: {logs}");
        assert!(logs.contains("PR has too many picks"), "logs: {logs}");
        assert!(logs.contains("picks=[2, 3]"), "logs: {logs}");
    }

    #[test]
    fn single_pick_logs_nothing() {
        let corpus = Corpus::from_records([
            PrRecord::new(1, "dev"),
            PrRecord::new(2, "master").with_title("Cherry-pick of #1"),
        ])
        .unwrap();
        let index = PickIndex::build(&corpus);

        let (found, logs) = with_captured_logs(|| find_pick(&index, 1, "master"));

        assert_eq!(found, Some(2));
        assert!(!logs.contains("WARN"), "logs: {logs}");
    }
}
