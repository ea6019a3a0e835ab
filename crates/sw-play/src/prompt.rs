//! Reading and validating numbered-menu selections.

use std::io::BufRead;

use crate::presenter::Presenter;

/// Why an input line was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// The line contained anything other than decimal digits.
    NotANumber,
    /// The line was a number outside the offered range.
    OutOfRange,
}

/// What to do when input closes mid-session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OnClosedInput {
    /// Pick option 1, so piped and truncated input still reaches an ending.
    #[default]
    PickFirst,
    /// Stop the session where it stands.
    EndSession,
}

/// Read one selection between 1 and `max_option` from `input`.
///
/// Each attempt consumes exactly one line and announces itself through
/// [`Presenter::prompt`]. Only the line terminator is stripped before
/// validation; any other whitespace disqualifies the line. Empty lines
/// re-prompt silently, anything non-numeric or out of range re-prompts
/// through [`Presenter::reject`]. When the reader has no more lines the
/// `on_closed` policy decides: pick option 1, or give up with `None`.
///
/// `max_option` must be at least 1. The traversal loop guarantees that by
/// never prompting on a scene without choices.
pub fn read_selection(
    input: &mut impl BufRead,
    presenter: &mut impl Presenter,
    max_option: usize,
    on_closed: OnClosedInput,
) -> Option<usize> {
    let mut line = String::new();
    loop {
        presenter.prompt(max_option);

        line.clear();
        match input.read_line(&mut line) {
            Ok(n) if n > 0 => {}
            // End of input, or a reader that cannot produce another line.
            _ => {
                return match on_closed {
                    OnClosedInput::PickFirst => Some(1),
                    OnClosedInput::EndSession => None,
                };
            }
        }

        let entry = strip_terminator(&line);
        if entry.is_empty() {
            continue;
        }
        if !entry.bytes().all(|b| b.is_ascii_digit()) {
            presenter.reject(Rejection::NotANumber);
            continue;
        }
        // All-digit entries too large for usize are out of range like any
        // other number beyond the menu.
        match entry.parse::<usize>() {
            Ok(n) if (1..=max_option).contains(&n) => return Some(n),
            _ => presenter.reject(Rejection::OutOfRange),
        }
    }
}

/// Strip one trailing line terminator, and nothing else. A `\r` is only
/// part of the terminator when a `\n` follows it; a bare trailing `\r`
/// stays in the line and disqualifies it like any other non-digit byte.
fn strip_terminator(line: &str) -> &str {
    match line.strip_suffix('\n') {
        Some(line) => line.strip_suffix('\r').unwrap_or(line),
        None => line,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presenter::{Recorder, Shown, Silent};

    fn read(input: &str, max_option: usize) -> (Option<usize>, Recorder) {
        let mut recorder = Recorder::new();
        let got = read_selection(
            &mut input.as_bytes(),
            &mut recorder,
            max_option,
            OnClosedInput::PickFirst,
        );
        (got, recorder)
    }

    #[test]
    fn accepts_a_number_in_range() {
        let (got, recorder) = read("2\n", 3);
        assert_eq!(got, Some(2));
        assert!(recorder.rejections().is_empty());
    }

    #[test]
    fn accepts_the_range_bounds() {
        assert_eq!(read("1\n", 3).0, Some(1));
        assert_eq!(read("3\n", 3).0, Some(3));
    }

    #[test]
    fn accepts_a_line_without_terminator() {
        assert_eq!(read("2", 3).0, Some(2));
    }

    #[test]
    fn accepts_a_crlf_terminated_line() {
        assert_eq!(read("2\r\n", 3).0, Some(2));
    }

    #[test]
    fn rejects_a_bare_carriage_return_line() {
        // No newline follows, so the \r is part of the line, not a terminator.
        let (got, recorder) = read("2\r", 3);
        assert_eq!(got, Some(1));
        assert_eq!(recorder.rejections(), vec![Rejection::NotANumber]);
    }

    #[test]
    fn leading_zeroes_read_as_the_same_number() {
        assert_eq!(read("002\n", 3).0, Some(2));
    }

    #[test]
    fn rejects_words_then_accepts() {
        let (got, recorder) = read("abc\n2\n", 3);
        assert_eq!(got, Some(2));
        assert_eq!(recorder.rejections(), vec![Rejection::NotANumber]);
    }

    #[test]
    fn rejects_out_of_range_numbers() {
        let (got, recorder) = read("9\n0\n1\n", 3);
        assert_eq!(got, Some(1));
        assert_eq!(
            recorder.rejections(),
            vec![Rejection::OutOfRange, Rejection::OutOfRange]
        );
    }

    #[test]
    fn does_not_trim_whitespace() {
        let (got, recorder) = read(" 1\n1 \n1\n", 3);
        assert_eq!(got, Some(1));
        assert_eq!(
            recorder.rejections(),
            vec![Rejection::NotANumber, Rejection::NotANumber]
        );
    }

    #[test]
    fn signs_and_decimals_are_not_numbers() {
        let (_, recorder) = read("+2\n-2\n2.0\n2\n", 3);
        assert_eq!(recorder.rejections().len(), 3);
        assert!(
            recorder
                .rejections()
                .iter()
                .all(|r| *r == Rejection::NotANumber)
        );
    }

    #[test]
    fn mixed_digits_and_letters_are_not_numbers() {
        let (got, recorder) = read("1a\n1\n", 3);
        assert_eq!(got, Some(1));
        assert_eq!(recorder.rejections(), vec![Rejection::NotANumber]);
    }

    #[test]
    fn empty_lines_reprompt_silently() {
        let (got, recorder) = read("\n\n2\n", 3);
        assert_eq!(got, Some(2));
        assert!(recorder.rejections().is_empty());

        let prompts = recorder
            .events
            .iter()
            .filter(|e| matches!(e, Shown::Prompt(_)))
            .count();
        assert_eq!(prompts, 3);
    }

    #[test]
    fn digits_beyond_usize_are_out_of_range() {
        let (got, recorder) = read("99999999999999999999999999\n1\n", 3);
        assert_eq!(got, Some(1));
        assert_eq!(recorder.rejections(), vec![Rejection::OutOfRange]);
    }

    #[test]
    fn closed_input_picks_the_first_option() {
        let mut silent = Silent;
        let got = read_selection(&mut "".as_bytes(), &mut silent, 3, OnClosedInput::PickFirst);
        assert_eq!(got, Some(1));
    }

    #[test]
    fn closed_input_can_end_the_session_instead() {
        let mut silent = Silent;
        let got = read_selection(
            &mut "".as_bytes(),
            &mut silent,
            3,
            OnClosedInput::EndSession,
        );
        assert_eq!(got, None);
    }

    #[test]
    fn input_closing_after_rejections_still_falls_back() {
        let (got, recorder) = read("abc\n", 3);
        assert_eq!(got, Some(1));
        assert_eq!(recorder.rejections(), vec![Rejection::NotANumber]);
    }

    // -------------------------------------------------------------------
    // Properties
    // -------------------------------------------------------------------

    use proptest::prelude::*;

    fn max_and_pick() -> impl Strategy<Value = (usize, usize)> {
        (1usize..=9).prop_flat_map(|max| (Just(max), 1..=max))
    }

    proptest! {
        #[test]
        fn selections_always_land_in_range(
            bytes in prop::collection::vec(any::<u8>(), 0..200),
            max_option in 1usize..=9,
        ) {
            let mut input = bytes.as_slice();
            let got = read_selection(
                &mut input,
                &mut Silent,
                max_option,
                OnClosedInput::PickFirst,
            );
            prop_assert!(got.is_some_and(|n| (1..=max_option).contains(&n)));
        }

        #[test]
        fn garbage_lines_reprompt_until_the_valid_pick(
            garbage in prop::collection::vec("[a-z !?.]{1,6}", 0..6),
            (max_option, pick) in max_and_pick(),
        ) {
            let mut text = garbage.join("\n");
            if !text.is_empty() {
                text.push('\n');
            }
            text.push_str(&format!("{pick}\n"));

            let mut recorder = Recorder::new();
            let got = read_selection(
                &mut text.as_bytes(),
                &mut recorder,
                max_option,
                OnClosedInput::EndSession,
            );
            prop_assert_eq!(got, Some(pick));
            prop_assert_eq!(recorder.rejections().len(), garbage.len());
        }
    }
}
