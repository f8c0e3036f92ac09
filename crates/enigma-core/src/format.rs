//! Ciphertext presentation.

/// Group width used on historical message forms.
pub const HISTORICAL_BLOCK_SIZE: usize = 5;

/// Split text into space-separated groups of `width` characters.
///
/// The last group may be shorter. A width of zero returns the text as is.
pub fn group_blocks(text: &str, width: usize) -> String {
    if width == 0 {
        return text.to_string();
    }

    let mut grouped = String::with_capacity(text.len() + text.len() / width);
    for (i, c) in text.chars().enumerate() {
        if i > 0 && i % width == 0 {
            grouped.push(' ');
        }
        grouped.push(c);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_in_fives() {
        assert_eq!(group_blocks("WLQUCDIFFVVH", HISTORICAL_BLOCK_SIZE), "WLQUC DIFFV VH");
    }

    #[test]
    fn exact_multiple_has_no_trailing_space() {
        assert_eq!(group_blocks("ABCDEFGHIJ", 5), "ABCDE FGHIJ");
    }

    #[test]
    fn zero_width_disables_grouping() {
        assert_eq!(group_blocks("ABCDEFG", 0), "ABCDEFG");
    }

    #[test]
    fn empty_text_stays_empty() {
        assert_eq!(group_blocks("", 5), "");
    }
}
