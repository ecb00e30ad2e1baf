//! Canonical phone identity for Brazilian mobile numbers.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Canonical phone identity: digits only, `55` + 2-digit area + `9` +
/// 8-digit line, 13 digits for any well-formed Brazilian mobile number.
///
/// Every component compares phones through this key; raw phone strings must
/// never reach comparison logic. Two representations of the same real number
/// normalize to the same key:
///
/// ```rust
/// use chat_core::PhoneKey;
///
/// assert_eq!(
///     PhoneKey::normalize("11987654321"),
///     PhoneKey::normalize("5511987654321"),
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PhoneKey(String);

impl PhoneKey {
    /// Normalize any raw phone string into a canonical key.
    ///
    /// Total and deterministic: inputs too short or garbled to yield a
    /// confident 13-digit key still produce a best-effort key rather than an
    /// error, because every caller needs a usable map key. For valid 10, 11
    /// and 13-digit Brazilian inputs the function is idempotent.
    pub fn normalize(raw: &str) -> Self {
        let mut digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();

        // Leading noise (double country codes, formatting artifacts) is
        // discarded; only the last 13 digits can matter.
        if digits.len() > 13 {
            digits = digits[digits.len() - 13..].to_string();
        }

        if digits.len() == 13 && digits.starts_with("55") {
            return PhoneKey(digits);
        }

        // Country code present but the number is short: usually an old-style
        // number missing the mobile `9` flag.
        if digits.starts_with("55") && digits.len() > 4 && digits.len() < 13 {
            let rest = &digits[2..];
            let tail = last_n(rest, 11);
            let (area, subscriber) = tail.split_at(2);
            let mut subscriber = subscriber.to_string();
            if subscriber.len() == 8 {
                subscriber.insert(0, '9');
            }
            if subscriber.len() == 9 {
                return PhoneKey(format!("55{area}{subscriber}"));
            }
            // Malformed subscriber: fall through to the generic rules.
        }

        if digits.len() >= 11 {
            let tail = last_n(&digits, 11);
            let (area, subscriber) = tail.split_at(2);
            let mut subscriber = subscriber.to_string();
            if subscriber.len() == 8 {
                subscriber.insert(0, '9');
            }
            return PhoneKey(format!("55{area}{subscriber}"));
        }

        // Area code + 8-digit line, no mobile flag and no country code.
        if digits.len() == 10 {
            let (area, line) = digits.split_at(2);
            return PhoneKey(format!("55{area}9{line}"));
        }

        // Last resort for short or ambiguous input: tag with the country
        // code and keep whatever digits are there.
        if !digits.starts_with("55") {
            digits.insert_str(0, "55");
        }
        PhoneKey(last_n(&digits, 13).to_string())
    }

    /// The canonical digit string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Human-readable Brazilian grouping: `(DD) DDDDD-DDDD` for 9-digit
    /// lines, `(DD) DDDD-DDDD` for legacy 8-digit lines. Used as the roster
    /// display-name fallback when no usable contact name exists.
    pub fn format_display(&self) -> String {
        let digits = &self.0;
        let national = digits.strip_prefix("55").unwrap_or(digits);
        if national.len() == 11 {
            let (area, line) = national.split_at(2);
            let (head, tail) = line.split_at(5);
            format!("({area}) {head}-{tail}")
        } else if national.len() == 10 {
            let (area, line) = national.split_at(2);
            let (head, tail) = line.split_at(4);
            format!("({area}) {head}-{tail}")
        } else {
            digits.clone()
        }
    }
}

impl fmt::Display for PhoneKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn last_n(s: &str, n: usize) -> &str {
    if s.len() > n {
        &s[s.len() - n..]
    } else {
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_key_passes_through() {
        assert_eq!(PhoneKey::normalize("5511987654321").as_str(), "5511987654321");
    }

    #[test]
    fn eleven_digits_gets_country_code() {
        assert_eq!(PhoneKey::normalize("11987654321").as_str(), "5511987654321");
    }

    #[test]
    fn ten_digits_gets_country_code_and_mobile_flag() {
        assert_eq!(PhoneKey::normalize("1133334444").as_str(), "5511933334444");
    }

    #[test]
    fn formatting_is_stripped() {
        assert_eq!(
            PhoneKey::normalize("+55 (11) 98765-4321").as_str(),
            "5511987654321"
        );
        assert_eq!(PhoneKey::normalize("(11) 98765-4321").as_str(), "5511987654321");
    }

    #[test]
    fn country_code_with_legacy_line_promotes_mobile_flag() {
        // 55 + area + 8-digit line = 12 digits, missing the `9` flag.
        assert_eq!(PhoneKey::normalize("551133334444").as_str(), "5511933334444");
    }

    #[test]
    fn doubled_country_code_keeps_last_13() {
        assert_eq!(
            PhoneKey::normalize("55 5511987654321").as_str(),
            "5511987654321"
        );
    }

    #[test]
    fn idempotent_for_valid_inputs() {
        for raw in ["1133334444", "11987654321", "5511987654321"] {
            let once = PhoneKey::normalize(raw);
            let twice = PhoneKey::normalize(once.as_str());
            assert_eq!(once, twice, "input {raw}");
        }
    }

    #[test]
    fn short_input_still_yields_a_key() {
        // Best-effort output for garbled input, never a panic.
        let key = PhoneKey::normalize("9876");
        assert!(key.as_str().starts_with("55"));
    }

    #[test]
    fn display_formatting() {
        assert_eq!(
            PhoneKey::normalize("5511987654321").format_display(),
            "(11) 98765-4321"
        );
    }
}
