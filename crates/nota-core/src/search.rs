//! Literal substring scanning for the find and replace operations.

use memchr::memmem;

/// Byte-offset range of a single match within the buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Returns the spans of every non-overlapping occurrence of `needle` in
/// `haystack`, scanning left to right and advancing past each match.
///
/// An empty needle yields no matches.
pub fn find_spans(haystack: &str, needle: &str) -> Vec<Span> {
    if needle.is_empty() {
        return Vec::new();
    }

    memmem::find_iter(haystack.as_bytes(), needle.as_bytes())
        .map(|start| Span::new(start, start + needle.len()))
        .collect()
}

/// Replaces every non-overlapping occurrence of `needle` with `replacement`,
/// using the same left-to-right scan as [`find_spans`]. Returns the rewritten
/// text along with the number of replacements made.
///
/// An empty needle leaves the text untouched.
pub fn replace_all(haystack: &str, needle: &str, replacement: &str) -> (String, usize) {
    if needle.is_empty() {
        return (haystack.to_string(), 0);
    }

    let mut output = String::with_capacity(haystack.len());
    let mut count = 0;
    let mut last = 0;

    for start in memmem::find_iter(haystack.as_bytes(), needle.as_bytes()) {
        output.push_str(&haystack[last..start]);
        output.push_str(replacement);
        last = start + needle.len();
        count += 1;
    }

    output.push_str(&haystack[last..]);
    (output, count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_ordered_non_overlapping_matches() {
        let spans = find_spans("ababab", "ab");
        assert_eq!(
            spans,
            vec![Span::new(0, 2), Span::new(2, 4), Span::new(4, 6)]
        );
    }

    #[test]
    fn overlapping_candidates_are_skipped() {
        // "aaaa" holds three overlapping "aa" positions; the scan advances
        // past each match, so only two survive.
        let spans = find_spans("aaaa", "aa");
        assert_eq!(spans, vec![Span::new(0, 2), Span::new(2, 4)]);
    }

    #[test]
    fn empty_needle_yields_no_matches() {
        assert_eq!(find_spans("hello world", ""), Vec::new());
        assert_eq!(find_spans("", ""), Vec::new());
    }

    #[test]
    fn no_match_returns_empty() {
        assert_eq!(find_spans("hello world", "xyz"), Vec::new());
    }

    #[test]
    fn needle_longer_than_haystack() {
        assert_eq!(find_spans("hi", "hello"), Vec::new());
    }

    #[test]
    fn unicode_spans_are_byte_offsets() {
        let spans = find_spans("héllo wörld héllo", "héllo");
        assert_eq!(spans, vec![Span::new(0, 6), Span::new(14, 20)]);
    }

    #[test]
    fn replaces_every_occurrence() {
        let (text, count) = replace_all("aaa", "a", "bb");
        assert_eq!(text, "bbbbbb");
        assert_eq!(count, 3);
    }

    #[test]
    fn replacement_scan_does_not_revisit_output() {
        // Replacing "a" with "ab" must not match the freshly inserted "a"s.
        let (text, count) = replace_all("aa", "a", "ab");
        assert_eq!(text, "abab");
        assert_eq!(count, 2);
    }

    #[test]
    fn empty_needle_is_a_replace_no_op() {
        let (text, count) = replace_all("abc", "", "x");
        assert_eq!(text, "abc");
        assert_eq!(count, 0);
    }

    #[test]
    fn replace_with_empty_string_deletes() {
        let (text, count) = replace_all("one, two, three", ", ", "");
        assert_eq!(text, "onetwothree");
        assert_eq!(count, 2);
    }
}
