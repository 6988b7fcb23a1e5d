/// Characters per summarization chunk.
pub const SUMMARY_CHUNK_CHARS: usize = 1024;

/// Characters per sentiment chunk.
pub const SENTIMENT_CHUNK_CHARS: usize = 512;

/// Splits `text` into consecutive slices of at most `size` characters.
///
/// Slicing is naive (no sentence awareness) but always lands on char boundaries,
/// and concatenating the slices gives back `text`. Empty text yields no chunks.
///
/// # Panics
///
/// Panics if `size` is zero.
pub fn chunk_chars(text: &str, size: usize) -> Vec<&str> {
    assert!(size > 0, "chunk size must be positive");

    let mut chunks = Vec::new();
    let mut start = 0;
    let mut count = 0;
    for (idx, _) in text.char_indices() {
        if count == size {
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
