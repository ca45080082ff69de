//! Substring scanning shared by the line and expression parsers.

use nom::{
    IResult,
    bytes::complete::{tag, take_until},
    sequence::terminated,
};

/// Marker that starts a comment extending to the end of the line.
pub const COMMENT_MARKER: &str = "#";

/// Marker separating the destination of an instruction from its expression.
pub const ASSIGNMENT_MARKER: &str = "=";

/// Splits `input` around the first occurrence of `marker`.
///
/// Returns the text before and after the marker, or `None` if `marker` does not occur.
pub fn split_first<'a>(input: &'a str, marker: &str) -> Option<(&'a str, &'a str)> {
    let result: IResult<&'a str, &'a str, ()> = terminated(take_until(marker), tag(marker))(input);

    result.ok().map(|(after, before)| (before, after))
}

/// Removes the comment from a source line, if it has one.
pub fn strip_comment(line: &str) -> &str {
    match split_first(line, COMMENT_MARKER) {
        Some((code, _comment)) => code,
        None => line,
    }
}
