//! Shared rendering helpers and constants.

/// Tab stop width for display alignment.
pub const TAB_WIDTH: usize = 8;

fn sanitize_char(c: char) -> char {
    match c {
        '\x00'..='\x1f' | '\x7f' => '\u{FFFD}',
        _ => c,
    }
}

/// Make a line of git output safe to draw.
///
/// Tabs expand to the next tab stop and carriage returns from CRLF files are
/// dropped; any other control character becomes U+FFFD.
pub fn sanitize_line(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut col = 0;
    for c in s.chars() {
        match c {
            '\t' => {
                let width = TAB_WIDTH - col % TAB_WIDTH;
                out.extend(std::iter::repeat(' ').take(width));
                col += width;
            }
            '\r' => {}
            c => {
                out.push(sanitize_char(c));
                col += 1;
            }
        }
    }
    out
}
