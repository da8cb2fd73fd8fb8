//! Greedy merge of small fragments into bounded chunks with overlap.

use std::collections::VecDeque;

use ctxsplit_core::LengthFunction;
use tracing::warn;

/// Joins fragments back together into chunks of at most `chunk_size` units,
/// keeping roughly `chunk_overlap` units of trailing content from one chunk
/// at the start of the next.
#[derive(Clone)]
pub struct SplitMerger {
    chunk_overlap: usize,
    length_function: LengthFunction,
}

impl SplitMerger {
    pub fn new(chunk_overlap: usize, length_function: LengthFunction) -> Self {
        Self {
            chunk_overlap,
            length_function,
        }
    }

    /// Merge `splits` with `separator` between them.
    ///
    /// A chunk can exceed `chunk_size` only when a single fragment already
    /// does; such chunks are still emitted and a warning is logged.
    pub fn merge<S: AsRef<str>>(&self, splits: &[S], separator: &str, chunk_size: usize) -> Vec<String> {
        let separator_len = (self.length_function)(separator);

        let mut chunks = Vec::new();
        let mut current: VecDeque<&str> = VecDeque::new();
        let mut total = 0usize;

        for split in splits {
            let split = split.as_ref();
            let len = (self.length_function)(split);

            if total + len + penalty(&current, 0, separator_len) > chunk_size {
                if total > chunk_size {
                    warn!(
                        chunk_len = total,
                        chunk_size,
                        "Created a chunk of size {}, which is longer than the specified {}",
                        total,
                        chunk_size
                    );
                }

                if !current.is_empty() {
                    if let Some(chunk) = join(current.iter().copied(), separator) {
                        chunks.push(chunk);
                    }

                    // Slide the window: drop the oldest fragments until what
                    // is left fits in the overlap and leaves room for `split`.
                    while total > self.chunk_overlap
                        || (total + len + penalty(&current, 0, separator_len) > chunk_size
                            && total > 0)
                    {
                        let Some(oldest) = current.pop_front() else {
                            break;
                        };
                        let dropped = (self.length_function)(oldest)
                            + penalty(&current, 0, separator_len);
                        total = total.saturating_sub(dropped);
                    }
                }
            }

            current.push_back(split);
            total += len + penalty(&current, 1, separator_len);
        }

        if let Some(chunk) = join(current.iter().copied(), separator) {
            chunks.push(chunk);
        }

        chunks
    }
}

/// Separator cost when the buffer holds more than `threshold` fragments.
fn penalty(current: &VecDeque<&str>, threshold: usize, separator_len: usize) -> usize {
    if current.len() > threshold {
        separator_len
    } else {
        0
    }
}

/// Join fragments and trim the result; whitespace-only output is dropped.
pub(crate) fn join<'a, I>(parts: I, separator: &str) -> Option<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let joined = parts.into_iter().collect::<Vec<_>>().join(separator);
    let trimmed = joined.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::capture_warnings;
    use ctxsplit_core::char_count;

    fn merger(overlap: usize) -> SplitMerger {
        SplitMerger::new(overlap, char_count())
    }

    #[test]
    fn test_merge_fits_in_one_chunk() {
        let chunks = merger(0).merge(&["Hello", "world"], " ", 20);
        assert_eq!(chunks, vec!["Hello world"]);
    }

    #[test]
    fn test_merge_without_overlap() {
        let chunks = merger(0).merge(&["Hello", "world", "this", "is", "a", "test"], " ", 10);
        assert_eq!(chunks, vec!["Hello", "world this", "is a test"]);
    }

    #[test]
    fn test_merge_with_overlap() {
        let chunks = merger(5).merge(
            &["Hello", "world", "this", "is", "a", "test", "message"],
            " ",
            15,
        );
        assert_eq!(
            chunks,
            vec!["Hello world", "world this is a", "is a test", "test message"]
        );
    }

    #[test]
    fn test_merge_overlap_is_bounded_by_chunk_size() {
        // The retained window must leave room for the incoming fragment.
        let chunks = merger(10).merge(&["aaaa", "bbbb", "cccccccc"], " ", 10);
        assert_eq!(chunks, vec!["aaaa bbbb", "cccccccc"]);
    }

    #[test]
    fn test_merge_suppresses_whitespace_chunks() {
        let chunks = merger(0).merge(&["", " ", ""], "\n", 10);
        assert!(chunks.is_empty());

        let chunks = merger(0).merge(&[" padded "], " ", 10);
        assert_eq!(chunks, vec!["padded"]);
    }

    #[test]
    fn test_merge_empty_input() {
        let splits: [&str; 0] = [];
        assert!(merger(0).merge(&splits, " ", 10).is_empty());
    }

    #[test]
    fn test_merge_warns_on_oversized_chunk_but_keeps_it() {
        let (chunks, warnings) =
            capture_warnings(|| merger(1).merge(&["aaaaaaaaaaaa", "b"], " ", 5));

        assert_eq!(chunks, vec!["aaaaaaaaaaaa", "b"]);
        assert_eq!(warnings, 1);
    }

    #[test]
    fn test_merge_uses_length_function_for_separator() {
        // Separator counted as 5 units: two one-char words no longer fit in 6.
        let merger = SplitMerger::new(
            0,
            std::sync::Arc::new(|s: &str| if s == "|" { 5 } else { s.chars().count() }),
        );
        let chunks = merger.merge(&["a", "b"], "|", 6);
        assert_eq!(chunks, vec!["a", "b"]);

        let chunks = merger.merge(&["a", "b"], "|", 7);
        assert_eq!(chunks, vec!["a|b"]);
    }
}
