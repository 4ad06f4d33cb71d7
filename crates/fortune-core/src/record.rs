//! Splitting fortune file text into records.
//!
//! Records are separated by lines consisting solely of `%`:
//!
//! ```text
//! Well begun is half done.
//! %
//! Beware of low-flying butterflies.
//! ```

/// The line that separates two records.
pub const DELIMITER: &str = "%";

/// Split file text into records.
///
/// Consecutive non-delimiter lines are joined with `\n` into one record.
/// Delimiter lines are dropped, and a record is only emitted when it holds
/// at least one line, so runs of delimiters never produce empty records.
/// Empty input has no records.
pub fn parse_records(text: &str) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }

    let mut records = Vec::new();
    let mut buffer: Vec<&str> = Vec::new();

    for line in text.split('\n') {
        if line == DELIMITER {
            flush(&mut buffer, &mut records);
        } else {
            buffer.push(line);
        }
    }
    flush(&mut buffer, &mut records);

    records
}

fn flush(buffer: &mut Vec<&str>, records: &mut Vec<String>) {
    if !buffer.is_empty() {
        records.push(buffer.join("\n"));
        buffer.clear();
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn splits_on_delimiter_lines() {
        let records = parse_records("one\n%\ntwo\nlines\n%\nthree");
        assert_eq!(records, vec!["one", "two\nlines", "three"]);
    }

    #[test]
    fn empty_input_has_no_records() {
        assert!(parse_records("").is_empty());
    }

    #[test]
    fn delimiters_only_has_no_records() {
        assert!(parse_records("%").is_empty());
        assert!(parse_records("%\n%\n%").is_empty());
    }

    #[test]
    fn no_delimiter_is_one_record() {
        let text = "first line\nsecond line\nthird line";
        assert_eq!(parse_records(text), vec![text]);
    }

    #[test]
    fn leading_and_trailing_delimiters_are_ignored() {
        assert_eq!(parse_records("%\nalpha\n%\nbeta\n%"), vec!["alpha", "beta"]);
    }

    #[test]
    fn repeated_delimiters_do_not_emit_empty_records() {
        assert_eq!(parse_records("alpha\n%\n%\n%\nbeta"), vec!["alpha", "beta"]);
    }

    #[test]
    fn blank_lines_stay_inside_records() {
        assert_eq!(parse_records("alpha\n\nbeta"), vec!["alpha\n\nbeta"]);
        assert_eq!(parse_records("alpha\n%\n\n%\nbeta"), vec!["alpha", "", "beta"]);
    }

    #[test]
    fn percent_inside_a_line_is_not_a_delimiter() {
        assert_eq!(parse_records("100%\n% off\n %"), vec!["100%\n% off\n %"]);
    }

    fn record() -> impl Strategy<Value = String> {
        prop::collection::vec("[a-z][a-z %.,]{0,16}", 1..4).prop_map(|lines| lines.join("\n"))
    }

    proptest! {
        #[test]
        fn joined_records_parse_back(records in prop::collection::vec(record(), 1..8)) {
            let text = records.join("\n%\n");
            prop_assert_eq!(parse_records(&text), records);
        }

        #[test]
        fn surrounding_delimiters_do_not_change_records(
            records in prop::collection::vec(record(), 1..8),
            lead in 0usize..3,
            trail in 0usize..3,
        ) {
            let body = records.join("\n%\n");
            let text = format!("{}{body}{}", "%\n".repeat(lead), "\n%".repeat(trail));
            prop_assert_eq!(parse_records(&text), records);
        }
    }
}
