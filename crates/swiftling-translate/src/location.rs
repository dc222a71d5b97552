use swiftling_common::Span;

/// Parse a `range` attribute value into a `Span` of source lines.
///
/// Accepts either a single location token (`file.swift:LINE:COL`) or a
/// range of two, separated by `" - "` (`file.swift:L1:C1 - file.swift:L2:C2`).
pub fn parse_range(range: &str) -> Option<Span> {
    match range.split_once(" - ") {
        Some((start, end)) => {
            let start_line = parse_location_line(start)?;
            let end_line = parse_location_line(end)?;
            Some(Span::new(start_line.min(end_line), start_line.max(end_line)))
        }
        None => {
            let line = parse_location_line(range)?;
            Some(Span::single(line))
        }
    }
}

/// Parse a single `file.swift:LINE:COL` (or `...@file:LINE:COL`) token
/// into its line number.
fn parse_location_line(token: &str) -> Option<u32> {
    let token = token.rsplit('@').next().unwrap_or(token);
    let mut parts = token.rsplit(':');
    let _col = parts.next()?;
    let line = parts.next()?;
    line.parse().ok()
}
