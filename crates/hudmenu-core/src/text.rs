use unicode_segmentation::UnicodeSegmentation;

/// Longest piece a host text component accepts.
pub const MAX_TEXT_CHUNK: usize = 99;

/// Splits `text` into pieces of at most `max` grapheme clusters without
/// breaking a cluster.
pub fn chunk_graphemes(text: &str, max: usize) -> Vec<&str> {
    let max = max.max(1);
    let mut chunks = Vec::new();
    let mut start = 0;
    let mut count = 0;
    for (idx, _) in text.grapheme_indices(true) {
        if count == max {
            chunks.push(&text[start..idx]);
            start = idx;
            count = 0;
        }
        count += 1;
    }
    if start < text.len() {
        chunks.push(&text[start..]);
    }
    chunks
}
