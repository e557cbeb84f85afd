//! Textual angle parser
//!
//! Recognizes strings of the form `[-]D° [M'] [S["]]`, for example
//! `-12° 30' 15.5"`. Degrees, minutes and seconds are located by three
//! independent patterns; only the degrees token is mandatory. Seconds are the
//! trailing number after the degrees or minutes token, and their closing `"`
//! may be left out, so `10° 20' 30` reads as thirty seconds. The sign is read
//! from the first character of the whole string, so `-0° 30'` is negative even
//! though its degrees token is zero.

use lazy_static::lazy_static;
use regex::Regex;

use crate::constants::{MAX_DEGREES, MAX_MINUTES};
use crate::errors::{AngleError, AngleField, Result};

lazy_static! {
    static ref DEGREES_REGEX: std::result::Result<Regex, regex::Error> = Regex::new(r"^-?(\d+)°");
    static ref MINUTES_REGEX: std::result::Result<Regex, regex::Error> = Regex::new(r"\b(\d+)'");
    static ref SECONDS_REGEX: std::result::Result<Regex, regex::Error> =
        Regex::new(r#"[°']\s*(\d+(?:\.\d+)?)"?\s*$"#);
}

/// Raw tokens extracted from an angle string, before range checking
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedAngle {
    /// Degrees magnitude
    pub degrees: u64,
    /// Minutes magnitude, 0 when absent
    pub minutes: u64,
    /// Seconds magnitude, 0.0 when absent
    pub seconds: f64,
    /// Whether the string starts with `-`
    pub negative: bool,
}

/// Parses an angle string into its raw tokens.
///
/// Fails with [`AngleError::NoMatch`] when the degrees token is missing, and
/// with [`AngleError::ParserEngine`] if a pattern could not be compiled.
/// Out-of-range values are not rejected here, except a degrees or minutes
/// count too large for `u64`, which is reported as an overflow of that field.
pub fn parse(input: &str) -> Result<ParsedAngle> {
    let degrees = capture(&DEGREES_REGEX, input)?.ok_or_else(|| AngleError::no_match(input))?;
    let minutes = capture(&MINUTES_REGEX, input)?;
    let seconds = capture(&SECONDS_REGEX, input)?;

    Ok(ParsedAngle {
        degrees: parse_count(degrees, AngleField::Degrees, MAX_DEGREES, input)?,
        minutes: minutes
            .map(|m| parse_count(m, AngleField::Minutes, MAX_MINUTES - 1, input))
            .transpose()?
            .unwrap_or(0),
        seconds: seconds.map(parse_seconds).transpose()?.unwrap_or(0.0),
        negative: input.starts_with('-'),
    })
}

fn capture<'t>(
    regex: &std::result::Result<Regex, regex::Error>,
    input: &'t str,
) -> Result<Option<&'t str>> {
    let regex = regex.as_ref().map_err(AngleError::parser_engine)?;
    Ok(regex
        .captures(input)
        .and_then(|captures| captures.get(1))
        .map(|m| m.as_str()))
}

// Tokens are digit runs, so the only failure is a value too large for u64.
fn parse_count(token: &str, field: AngleField, limit: u32, input: &str) -> Result<u64> {
    token
        .parse()
        .map_err(|_| AngleError::overflow(field, f64::INFINITY, f64::from(limit), input))
}

// The pattern admits only decimal literals.
fn parse_seconds(token: &str) -> Result<f64> {
    token
        .parse()
        .map_err(|err: std::num::ParseFloatError| AngleError::parser_engine(err))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_parse_full_angle_string() {
        let parsed = parse("12° 30' 15.5\"").unwrap();
        assert_eq!(
            parsed,
            ParsedAngle {
                degrees: 12,
                minutes: 30,
                seconds: 15.5,
                negative: false
            }
        );
    }

    #[test]
    fn test_parse_negative_sign_from_first_character() {
        let parsed = parse("-0° 30'").unwrap();
        assert_eq!(parsed.degrees, 0);
        assert_eq!(parsed.minutes, 30);
        assert!(parsed.negative);
    }

    #[rstest]
    #[case("45°", 45, 0, 0.0)]
    #[case("45° 10'", 45, 10, 0.0)]
    #[case("45° 7\"", 45, 0, 7.0)]
    #[case("45°10'20\"", 45, 10, 20.0)]
    #[case("10° 20' 30", 10, 20, 30.0)]
    #[case("10° 20' 30.5 ", 10, 20, 30.5)]
    #[case("10° 30", 10, 0, 30.0)]
    fn test_parse_optional_tokens(
        #[case] input: &str,
        #[case] degrees: u64,
        #[case] minutes: u64,
        #[case] seconds: f64,
    ) {
        let parsed = parse(input).unwrap();
        assert_eq!(parsed.degrees, degrees);
        assert_eq!(parsed.minutes, minutes);
        assert_eq!(parsed.seconds, seconds);
    }

    #[test]
    fn test_parse_keeps_out_of_range_values() {
        let parsed = parse("361° 75' 99\"").unwrap();
        assert_eq!(parsed.degrees, 361);
        assert_eq!(parsed.minutes, 75);
        assert_eq!(parsed.seconds, 99.0);
    }

    #[rstest]
    #[case("")]
    #[case("30' 10\"")]
    #[case("twelve degrees")]
    #[case(" 12° 0' 0\"")]
    fn test_parse_missing_degrees_is_no_match(#[case] input: &str) {
        assert_eq!(parse(input), Err(AngleError::no_match(input)));
    }

    #[rstest]
    #[case("99999999999999999999° 0' 0\"", AngleField::Degrees)]
    #[case("1° 99999999999999999999' 0\"", AngleField::Minutes)]
    fn test_parse_oversized_token_is_overflow(#[case] input: &str, #[case] field: AngleField) {
        let err = parse(input).unwrap_err();
        assert_eq!(err.overflowed_field(), Some(field));
        assert!(err.to_string().contains(input));
    }
}
