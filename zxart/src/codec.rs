//! Scalar codecs for zxart wire fields
//!
//! The API ships several scalars as loosely formatted strings: HTML-escaped
//! titles, percent-encoded file names, `H:MM:SS.ff` timecodes, `DD.MM.YYYY`
//! dates and Unix timestamps. The functions here turn them into typed values;
//! [`de`] wraps them as serde adapters for the models.

use std::time::Duration;

use chrono::{DateTime, Local, NaiveDate, TimeZone};

use crate::{Error, Result};

const DATE_FORMAT: &str = "%d.%m.%Y";

/// Seconds per clock part, read right-to-left: seconds, minutes, hours
const CLOCK_UNITS: [u64; 3] = [1, 60, 3600];

/// Fraction digits kept (nanosecond resolution)
const FRACTION_DIGITS: usize = 9;

/// Decode HTML entities, unwrapping a value fully enclosed in `<pre>...</pre>`.
///
/// # Examples
///
/// ```
/// use zxart::codec::unescape_html;
///
/// assert_eq!(unescape_html("<pre>a &amp; b</pre>"), "a & b");
/// assert_eq!(unescape_html("a &amp; b"), "a & b");
/// ```
pub fn unescape_html(raw: &str) -> String {
    let decoded = html_escape::decode_html_entities(raw);
    if let Some(inner) = decoded
        .strip_prefix("<pre>")
        .and_then(|rest| rest.strip_suffix("</pre>"))
    {
        return inner.to_string();
    }
    decoded.into_owned()
}

/// Percent-decode a URL component.
///
/// Malformed escapes are kept verbatim and invalid UTF-8 is replaced, so this
/// never fails.
pub fn url_decode(raw: &str) -> String {
    let bytes = urlencoding::decode_binary(raw.as_bytes());
    String::from_utf8_lossy(&bytes).into_owned()
}

/// Parse a `[[H:]M:]S[.fraction]` timecode.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use zxart::codec::parse_duration;
///
/// assert_eq!(parse_duration("3:15").unwrap(), Duration::from_secs(195));
/// assert_eq!(
///     parse_duration("1:02:03.04").unwrap(),
///     Duration::new(3723, 40_000_000)
/// );
/// ```
pub fn parse_duration(raw: &str) -> Result<Duration> {
    let malformed = || Error::MalformedDuration(raw.to_string());
    let trimmed = raw.trim();

    let (clock, fraction) = match trimmed.split_once('.') {
        Some((clock, fraction)) => (clock, Some(fraction)),
        None => (trimmed, None),
    };

    let parts: Vec<&str> = clock.split(':').collect();
    if parts.len() > CLOCK_UNITS.len() {
        return Err(malformed());
    }

    let mut seconds: u64 = 0;
    for (part, unit) in parts.iter().rev().zip(CLOCK_UNITS) {
        seconds = parse_digits(part)
            .and_then(|value| value.checked_mul(unit))
            .and_then(|value| value.checked_add(seconds))
            .ok_or_else(malformed)?;
    }

    let nanos = match fraction {
        Some(fraction) => parse_fraction(fraction).ok_or_else(malformed)?,
        None => 0,
    };

    Ok(Duration::new(seconds, nanos))
}

/// Parse a `DD.MM.YYYY` date.
pub fn parse_date(raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT)
        .map_err(|_| Error::MalformedDate(raw.to_string()))
}

/// Interpret Unix epoch seconds as a local timestamp.
pub fn parse_timestamp(seconds: i64) -> Result<DateTime<Local>> {
    Local
        .timestamp_opt(seconds, 0)
        .single()
        .ok_or(Error::MalformedTimestamp(seconds))
}

fn is_digits(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit())
}

fn parse_digits(value: &str) -> Option<u64> {
    if !is_digits(value) {
        return None;
    }
    value.parse().ok()
}

/// Decimal fraction digits to nanoseconds ("04" -> 40ms)
fn parse_fraction(value: &str) -> Option<u32> {
    if !is_digits(value) {
        return None;
    }
    let digits = &value[..value.len().min(FRACTION_DIGITS)];
    let scale = 10u32.pow((FRACTION_DIGITS - digits.len()) as u32);
    digits.parse::<u32>().ok().map(|value| value * scale)
}

/// Serde adapters applying the codecs to individual fields.
///
/// Optional adapters treat an empty string the same as a missing field.
pub(crate) mod de {
    use std::time::Duration;

    use chrono::{DateTime, Local, NaiveDate};
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer};
    use url::Url;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawTimestamp {
        Seconds(i64),
        Fractional(f64),
        Text(String),
    }

    fn non_empty<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        Ok(raw.filter(|value| !value.trim().is_empty()))
    }

    pub fn html<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(super::unescape_html(&raw))
    }

    pub fn opt_html<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        Ok(raw.as_deref().map(super::unescape_html))
    }

    pub fn opt_url_decoded<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        Ok(raw.as_deref().map(super::url_decode))
    }

    pub fn timestamp<'de, D>(deserializer: D) -> Result<DateTime<Local>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let seconds = match RawTimestamp::deserialize(deserializer)? {
            RawTimestamp::Seconds(seconds) => seconds,
            // Sub-second part is dropped
            RawTimestamp::Fractional(seconds) => seconds.trunc() as i64,
            RawTimestamp::Text(text) => {
                let text = text.trim();
                match text.parse::<i64>() {
                    Ok(seconds) => seconds,
                    Err(_) => text
                        .parse::<f64>()
                        .ok()
                        .filter(|seconds| seconds.is_finite())
                        .map(|seconds| seconds.trunc() as i64)
                        .ok_or_else(|| {
                            D::Error::custom(format!("invalid timestamp: {text:?}"))
                        })?,
                }
            }
        };
        super::parse_timestamp(seconds).map_err(D::Error::custom)
    }

    pub fn opt_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        non_empty(deserializer)?
            .map(|raw| super::parse_date(&raw).map_err(D::Error::custom))
            .transpose()
    }

    pub fn opt_duration<'de, D>(deserializer: D) -> Result<Option<Duration>, D::Error>
    where
        D: Deserializer<'de>,
    {
        non_empty(deserializer)?
            .map(|raw| super::parse_duration(&raw).map_err(D::Error::custom))
            .transpose()
    }

    pub fn opt_url<'de, D>(deserializer: D) -> Result<Option<Url>, D::Error>
    where
        D: Deserializer<'de>,
    {
        non_empty(deserializer)?
            .map(|raw| Url::parse(&raw).map_err(D::Error::custom))
            .transpose()
    }
}
