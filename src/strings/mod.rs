//! Small text layout helpers.

mod tests;

/// Pads `text` with trailing spaces until it is `width` characters long. Text which is already
/// long enough is returned unchanged rather than truncated.
pub fn pad_right(text: &str, width: usize) -> String {
    let len = text.chars().count();
    let mut padded = String::with_capacity(text.len() + width.saturating_sub(len));
    padded.push_str(text);
    padded.extend(std::iter::repeat_n(' ', width.saturating_sub(len)));
    padded
}

/// Greedily wraps `text` into lines of at most `width` characters, breaking on whitespace.
///
/// Runs of whitespace collapse to a single space. A word longer than `width` gets a line to itself
/// instead of being split. A `width` of 0 is treated as 1.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut line = String::new();
    let mut line_len = 0;

    for word in text.split_whitespace() {
        let word_len = word.chars().count();

        if line_len > 0 && line_len + 1 + word_len > width {
            lines.push(std::mem::take(&mut line));
            line_len = 0;
        }

        if line_len > 0 {
            line.push(' ');
            line_len += 1;
        }
        line.push_str(word);
        line_len += word_len;
    }

    if line_len > 0 {
        lines.push(line);
    }
    lines
}
