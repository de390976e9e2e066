//! Formatting utilities for terminal output

/// Width of a board column: the number of digits in its 1-based index
fn column_width(index: usize) -> usize {
    (index + 1).to_string().len()
}

/// Format the reveal state as a row of letters and underscores
///
/// Unset slots fill their column with underscores.
#[must_use]
pub fn format_reveal_row(reveal: &[Option<char>]) -> String {
    reveal
        .iter()
        .enumerate()
        .map(|(i, slot)| {
            let width = column_width(i);
            slot.map_or_else(|| "_".repeat(width), |c| format!("{c:<width$}"))
        })
        .collect::<Vec<_>>()
        .join(" ")
        .trim_end()
        .to_string()
}

/// Format the 1-based index ruler shown under the reveal row
#[must_use]
pub fn format_ruler(len: usize) -> String {
    (1..=len)
        .map(|n| n.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Remaining-mistakes status line
#[must_use]
pub fn mistakes_message(mistakes_left: u8) -> String {
    if mistakes_left == 0 {
        "Game over!".to_string()
    } else {
        format!("You can play until {mistakes_left} more mistake(s)")
    }
}

/// Comma-separated list of missed letters, if any
#[must_use]
pub fn format_misses(misses: &[char]) -> Option<String> {
    if misses.is_empty() {
        return None;
    }
    let letters: Vec<String> = misses.iter().map(char::to_string).collect();
    Some(format!("Missed: {}", letters.join(", ")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveal_row_short_word() {
        let row = format_reveal_row(&[Some('c'), None, None]);
        assert_eq!(row, "c _ _");
        assert_eq!(format_ruler(3), "1 2 3");
    }

    #[test]
    fn reveal_row_aligns_two_digit_columns() {
        let mut reveal = vec![None; 12];
        reveal[10] = Some('o');
        let row = format_reveal_row(&reveal);
        let ruler = format_ruler(12);

        assert_eq!(row, "_ _ _ _ _ _ _ _ _ __ o  __");
        assert_eq!(ruler, "1 2 3 4 5 6 7 8 9 10 11 12");
        assert_eq!(row.len(), ruler.len());
    }

    #[test]
    fn reveal_row_trailing_letter_trimmed() {
        let mut reveal = vec![None; 10];
        reveal[9] = Some('n');
        assert_eq!(format_reveal_row(&reveal), "_ _ _ _ _ _ _ _ _ n");
    }

    #[test]
    fn mistakes_message_counts_down() {
        assert_eq!(mistakes_message(3), "You can play until 3 more mistake(s)");
        assert_eq!(mistakes_message(0), "Game over!");
    }

    #[test]
    fn misses_formatting() {
        assert_eq!(format_misses(&[]), None);
        assert_eq!(format_misses(&['z', 'q']).as_deref(), Some("Missed: z, q"));
    }
}
