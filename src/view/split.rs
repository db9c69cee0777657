/// Split one span of diff text into its logical lines.
///
/// Lines break on `\n` and `\r\n`; the terminator is not part of the line.
/// A span that ends in a terminator does not produce a trailing empty line,
/// so `"a\n"` is one line, not two. A bare `\r` is ordinary content.
///
/// # Examples
///
/// ```
/// use line_diff_view::view::split::split_lines;
///
/// assert_eq!(split_lines("a\nb\n"), vec!["a", "b"]);
/// assert_eq!(split_lines("a\r\n\r\nb"), vec!["a", "", "b"]);
/// assert_eq!(split_lines("no terminator"), vec!["no terminator"]);
/// ```
#[must_use]
pub fn split_lines(span: &str) -> Vec<&str> {
    span.split_inclusive('\n')
        .map(|line| {
            line.strip_suffix("\r\n")
                .or_else(|| line.strip_suffix('\n'))
                .unwrap_or(line)
        })
        .collect()
}

/// Whether `span` ends on a line boundary
pub(crate) fn ends_with_terminator(span: &str) -> bool {
    span.ends_with('\n')
}
