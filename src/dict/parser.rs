use core::hash::BuildHasher;

use crate::{ParseWarning, ParseWarningKind};

use super::Dictionary;

/// Parses two-column dictionary text into `dict`.
///
/// Each record is one line: a word and a frequency separated by a single ASCII space. Nothing
/// here is fatal. Malformed records are skipped and a word seen twice is overwritten, each
/// reported as a [`ParseWarning`] carrying the 1-based line number.
pub(crate) fn parse<S: BuildHasher>(
    text: &str,
    mut dict: Dictionary<S>,
) -> (Dictionary<S>, Vec<ParseWarning>) {
    let mut warnings = Vec::new();

    for (line_number, line) in text.lines().enumerate() {
        if line.is_empty() {
            continue;
        }

        let Some((word, frequency)) = split_record(line) else {
            warnings.push(warning(ParseWarningKind::MalformedLine, line_number));
            continue;
        };

        let frequency = match frequency.parse::<u64>() {
            Ok(frequency) => frequency,
            Err(err) => {
                warnings.push(warning(
                    ParseWarningKind::MalformedFrequency(err),
                    line_number,
                ));
                continue;
            }
        };

        if dict.insert(word.to_string(), frequency).is_some() {
            warnings.push(warning(
                ParseWarningKind::DuplicateWord(word.to_string()),
                line_number,
            ));
        }
    }

    (dict, warnings)
}

/// Splits a record into its word and frequency fields.
/// A record has exactly one space, so the word of a well-formed record is never empty.
fn split_record(line: &str) -> Option<(&str, &str)> {
    let (word, frequency) = line.split_once(' ')?;
    if word.is_empty() || frequency.contains(' ') {
        return None;
    }
    Some((word, frequency))
}

fn warning(kind: ParseWarningKind, line_number: usize) -> ParseWarning {
    ParseWarning {
        kind,
        line_number: line_number + 1,
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn parse(text: &str) -> (Dictionary<ahash::RandomState>, Vec<ParseWarning>) {
        super::parse(text, Dictionary::with_hasher(ahash::RandomState::new()))
    }

    #[test]
    fn well_formed_records() {
        let (dict, warnings) = parse("cat 5\ncar 5\ncart 2\ndog 9\n");
        assert!(warnings.is_empty());
        assert_eq!(dict.len(), 4);
        assert_eq!(dict.get("cart"), Some(2));
    }

    #[test]
    fn empty_lines_are_skipped_silently() {
        let (dict, warnings) = parse("cat 5\n\n\ndog 9");
        assert!(warnings.is_empty());
        assert_eq!(dict.len(), 2);
    }

    #[test]
    fn malformed_lines_warn_and_are_skipped() {
        let (dict, warnings) = parse("cat 5\njust-one-field\na b c\n 3\ndog 9");
        assert_eq!(dict.len(), 2);
        assert_eq!(
            warnings
                .iter()
                .map(|w| w.line_number)
                .collect::<Vec<usize>>(),
            [2, 3, 4]
        );
        assert!(warnings
            .iter()
            .all(|w| matches!(w.kind, ParseWarningKind::MalformedLine)));
    }

    #[test]
    fn non_numeric_frequency_warns_and_is_skipped() {
        let (dict, warnings) = parse("cat five\ndog 9");
        assert_eq!(dict.len(), 1);
        assert_eq!(dict.get("cat"), None);
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].line_number, 1);
        assert!(matches!(
            warnings[0].kind,
            ParseWarningKind::MalformedFrequency(_)
        ));
    }

    #[test]
    fn negative_frequency_is_malformed() {
        // Frequencies are non-negative by construction: u64 parsing rejects a sign.
        let (dict, warnings) = parse("cat -1");
        assert!(dict.is_empty());
        assert!(matches!(
            warnings[0].kind,
            ParseWarningKind::MalformedFrequency(_)
        ));
    }

    #[test]
    fn duplicate_word_warns_and_the_last_record_wins() {
        let (dict, warnings) = parse("cat 5\ncat 8");
        assert_eq!(dict.get("cat"), Some(8));
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].line_number, 2);
        assert_eq!(
            warnings[0].kind,
            ParseWarningKind::DuplicateWord("cat".to_string())
        );
    }
}
