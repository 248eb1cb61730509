//! Parsing of the combined "Bevinding" field.

use crate::error::DocError;

/// Splits a finding into its attention-point label and description.
///
/// The field is `"<label>: <description>"`; a missing colon means the
/// source row is malformed and must fail loudly. When an introductory
/// sentence precedes the short code, only the trailing two characters of
/// the part before the colon form the label (the attention-point code
/// convention).
pub fn split_finding(raw: &str) -> Result<(String, String), DocError> {
    let (head, tail) = raw
        .split_once(':')
        .ok_or_else(|| DocError::MalformedFinding(raw.to_string()))?;

    let mut label = head.trim().to_string();
    if label.chars().count() > 2 {
        let cut = label
            .char_indices()
            .rev()
            .nth(1)
            .map(|(index, _)| index)
            .unwrap_or(0);
        label = label[cut..].to_string();
    }

    Ok((label, tail.trim().to_string()))
}
