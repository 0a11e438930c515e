//! The two masking algorithms.
//!
//! Both are pure: they read the input and build a new string of exactly the
//! same character count. All positions are Unicode scalar values.

use std::ops::Range;

use fancy_regex::Regex;

use crate::error::MaskError;

/// Replaces every character at index `i` with `start_offset <= i < len - end_offset`.
///
/// Characters before `start_offset` and the last `end_offset` characters stay
/// visible. `(0, 0)` masks the whole value; `start_offset + end_offset == len`
/// masks nothing.
///
/// Fails with [`MaskError::InvalidRange`] when `start_offset + end_offset`
/// exceeds the value's length. The offsets are never clamped.
pub fn mask_by_offset(
    value: &str,
    start_offset: usize,
    end_offset: usize,
    placeholder: char,
) -> Result<String, MaskError> {
    let length = value.chars().count();
    let end = start_offset
        .checked_add(end_offset)
        .filter(|keep| *keep <= length)
        .map(|_| length - end_offset)
        .ok_or(MaskError::InvalidRange {
            start_offset,
            end_offset,
            length,
        })?;

    Ok(value
        .chars()
        .enumerate()
        .map(|(index, ch)| {
            if (start_offset..end).contains(&index) {
                placeholder
            } else {
                ch
            }
        })
        .collect())
}

/// Replaces every character inside a non-empty match of `pattern`.
///
/// Matches are found left to right without overlap; empty matches are
/// skipped. Characters outside every match stay untouched, and a value with
/// no match comes back as an unchanged copy.
///
/// Fails with [`MaskError::PatternExecution`] when the matcher gives up, e.g.
/// on the backtrack limit.
pub fn mask_by_pattern(
    value: &str,
    pattern: &Regex,
    placeholder: char,
) -> Result<String, MaskError> {
    let spans = match_spans(value, pattern)?;
    if spans.is_empty() {
        return Ok(value.to_string());
    }

    let mut spans = spans.into_iter().peekable();
    let mut masked = String::with_capacity(value.len());
    for (offset, ch) in value.char_indices() {
        while spans.next_if(|span| span.end <= offset).is_some() {}
        match spans.peek() {
            Some(span) if span.start <= offset => masked.push(placeholder),
            _ => masked.push(ch),
        }
    }
    Ok(masked)
}

/// Byte ranges of the non-empty matches, in order.
fn match_spans(value: &str, pattern: &Regex) -> Result<Vec<Range<usize>>, MaskError> {
    let mut spans = Vec::new();
    for found in pattern.find_iter(value) {
        let found = found.map_err(|err| {
            MaskError::pattern_execution(pattern.as_str(), value.chars().count(), err)
        })?;
        if !found.as_str().is_empty() {
            spans.push(found.range());
        }
    }
    Ok(spans)
}
