//! Normalization of the raw maintenance answer.

use crate::engine::errors::FaultNetError;
use crate::locale::Locale;

/// Parses a yes/no answer in `locale`.
///
/// Input is trimmed and lowercased. Returns `UnrecognizedObservation` for
/// anything that is neither an affirmative nor a negative word.
pub fn parse_observation(raw: &str, locale: Locale) -> Result<bool, FaultNetError> {
    let answer = raw.trim().to_lowercase();
    if locale.affirmative_words().contains(&answer.as_str()) {
        Ok(true)
    } else if locale.negative_words().contains(&answer.as_str()) {
        Ok(false)
    } else {
        Err(FaultNetError::UnrecognizedObservation(raw.trim().to_string()))
    }
}

/// Like [`parse_observation`], but an unrecognized answer is treated as
/// "not maintained". Only an explicit affirmative counts as maintenance.
pub fn normalize_observation(raw: &str, locale: Locale) -> bool {
    match parse_observation(raw, locale) {
        Ok(value) => value,
        Err(_err) => {
            #[cfg(feature = "tracing")]
            tracing::warn!(error = %_err, "treating unrecognized maintenance answer as 'no'");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_lithuanian_answers() {
        assert_eq!(parse_observation("Taip\n", Locale::Lithuanian), Ok(true));
        assert_eq!(parse_observation(" ne ", Locale::Lithuanian), Ok(false));
    }

    #[test]
    fn recognizes_english_answers() {
        assert_eq!(parse_observation("YES", Locale::English), Ok(true));
        assert_eq!(parse_observation("n", Locale::English), Ok(false));
    }

    #[test]
    fn unrecognized_answer_is_an_error_but_normalizes_to_false() {
        let err = parse_observation("maybe", Locale::English).unwrap_err();
        assert_eq!(err, FaultNetError::UnrecognizedObservation("maybe".into()));
        assert!(!normalize_observation("maybe", Locale::English));
        assert!(!normalize_observation("", Locale::Lithuanian));
        assert!(!normalize_observation("yes", Locale::Lithuanian));
    }
}
