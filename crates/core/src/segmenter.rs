//! Splits a document's text into ordered blocks. The primary strategy cuts
//! at structural section markers; uniform character slicing is the
//! fallback when no markers are present.

use crate::error::EngineError;
use regex::Regex;
use std::sync::OnceLock;

/// Recurring section prefix in the harvested corpus, e.g. "01/", "02/".
fn marker() -> &'static Regex {
    static MARKER: OnceLock<Regex> = OnceLock::new();
    MARKER.get_or_init(|| Regex::new(r"\d{2}/").expect("static marker pattern"))
}

/// Segment `text` into trimmed, non-empty blocks. Falls back to uniform
/// slicing into `target_block_count` parts when at most one marker-delimited
/// segment is found. The output may legitimately hold fewer blocks than
/// requested once empty slices are dropped.
pub fn segment(text: &str, target_block_count: usize) -> Result<Vec<String>, EngineError> {
    if target_block_count == 0 {
        return Err(EngineError::InvalidBlockCount(target_block_count));
    }
    let blocks = split_at_markers(text);
    if blocks.len() > 1 {
        return Ok(blocks);
    }
    Ok(uniform_slices(text, target_block_count))
}

/// Cut before every marker occurrence; the marker stays with the segment
/// it opens.
fn split_at_markers(text: &str) -> Vec<String> {
    let mut bounds = vec![0];
    bounds.extend(marker().find_iter(text).map(|m| m.start()).filter(|&s| s != 0));
    bounds.push(text.len());

    bounds
        .windows(2)
        .map(|w| text[w[0]..w[1]].trim())
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
        .collect()
}

/// Divide the text into `parts` contiguous slices of `char_len / parts`
/// characters, the final slice absorbing the remainder. Slices cover the
/// text exactly, with no gap or overlap; slices empty after trimming are
/// dropped. Boundaries are computed in characters so multi-byte text never
/// splits mid-codepoint.
fn uniform_slices(text: &str, parts: usize) -> Vec<String> {
    let mut offsets: Vec<usize> = text.char_indices().map(|(i, _)| i).collect();
    offsets.push(text.len());
    let char_len = offsets.len() - 1;
    let approx = char_len / parts;

    let mut slices = Vec::new();
    for i in 0..parts {
        let start = i * approx;
        let end = if i + 1 == parts { char_len } else { (i + 1) * approx };
        let trimmed = text[offsets[start]..offsets[end]].trim();
        if !trimmed.is_empty() {
            slices.push(trimmed.to_string());
        }
    }
    slices
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_block_count_is_a_configuration_error() {
        assert_eq!(segment("текст", 0), Err(EngineError::InvalidBlockCount(0)));
    }

    #[test]
    fn splits_at_section_markers() {
        let text = "01/ Первый раздел 02/ Второй раздел 03/ Третий раздел";
        let blocks = segment(text, 9).unwrap();
        assert_eq!(blocks.len(), 3);
        assert!(blocks[0].starts_with("01/"));
        assert!(blocks[2].contains("Третий"));
    }

    #[test]
    fn falls_back_to_uniform_slicing_without_markers() {
        let text = "а".repeat(90);
        let blocks = segment(&text, 9).unwrap();
        assert_eq!(blocks.len(), 9);
    }

    #[test]
    fn uniform_slices_cover_the_text_exactly() {
        // No whitespace at slice boundaries, so trimming is a no-op and the
        // concatenation must reconstruct the input.
        let text = "абвгдежзиклмнопрст";
        let blocks = uniform_slices(text, 4);
        assert_eq!(blocks.concat(), text);
    }

    #[test]
    fn final_slice_absorbs_the_remainder() {
        let text = "abcdefghij"; // 10 chars, 3 parts -> 3/3/4
        let blocks = uniform_slices(text, 3);
        assert_eq!(blocks, vec!["abc", "def", "ghij"]);
    }

    #[test]
    fn short_text_yields_fewer_blocks() {
        // Fewer characters than requested parts: every non-final slice is
        // empty and gets dropped.
        let blocks = segment("абв", 9).unwrap();
        assert_eq!(blocks, vec!["абв"]);
    }

    #[test]
    fn empty_text_yields_no_blocks() {
        assert!(segment("", 9).unwrap().is_empty());
    }

    #[test]
    fn single_marker_still_uses_marker_split() {
        // One marker mid-text makes two segments, enough to skip the fallback.
        let text = "вступление 01/ раздел";
        let blocks = segment(text, 9).unwrap();
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[1], "01/ раздел");
    }
}
