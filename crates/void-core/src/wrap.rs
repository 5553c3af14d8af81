use smallvec::SmallVec;

/// Wrapped display lines for one message. Most messages fit in a handful.
pub type Lines = SmallVec<[String; 4]>;

/// Greedily pack whitespace-delimited words into lines of at most `max_chars`
/// characters (counting the joining space). A word longer than `max_chars`
/// gets a line of its own rather than being split.
///
/// Empty or whitespace-only input yields no lines.
pub fn wrap_lines(text: &str, max_chars: usize) -> Lines {
    let max_chars = max_chars.max(1);
    let mut lines = Lines::new();
    let mut current = String::new();
    let mut current_len = 0usize;
    for word in text.split_whitespace() {
        let word_len = word.chars().count();
        if current_len > 0 && current_len + 1 + word_len > max_chars {
            lines.push(std::mem::take(&mut current));
            current_len = 0;
        }
        if current_len > 0 {
            current.push(' ');
            current_len += 1;
        }
        current.push_str(word);
        current_len += word_len;
    }
    if current_len > 0 {
        lines.push(current);
    }
    lines
}

/// Coarse line count used for height estimation: `ceil(chars / per_line)`.
///
/// Deliberately ignores word boundaries, so it can disagree with
/// [`wrap_lines`] by a line or so.
pub fn estimate_line_count(text: &str, chars_per_line: usize) -> usize {
    let chars = text.chars().count();
    chars.div_ceil(chars_per_line.max(1))
}
