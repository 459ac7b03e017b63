//! Health-per-experience display stat

use std::fmt;

/// Label for fields holding the "none" sentinel or zero experience
pub const NONE_LABEL: &str = "None";
/// Label for values that cannot be computed
pub const NOT_APPLICABLE_LABEL: &str = "N/A";

/// Result of [`hp_per_exp`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DerivedStat {
    /// Health / experience in hundredths, rounded half away from zero
    Ratio(i128),
    /// A field was "none", or experience is zero
    None,
    /// A field is missing or malformed
    NotApplicable,
}

impl fmt::Display for DerivedStat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DerivedStat::Ratio(h) => {
                let sign = if *h < 0 { "-" } else { "" };
                let abs = h.unsigned_abs();
                write!(f, "{}{}.{:02}", sign, abs / 100, abs % 100)
            }
            DerivedStat::None => f.write_str(NONE_LABEL),
            DerivedStat::NotApplicable => f.write_str(NOT_APPLICABLE_LABEL),
        }
    }
}

/// Compute health per point of base experience
///
/// Total over any pair of strings: the "none" sentinel (any case) in either
/// field and zero experience give [`DerivedStat::None`], anything else that
/// is not a pair of integers with positive experience gives
/// [`DerivedStat::NotApplicable`].
pub fn hp_per_exp(health: &str, base_experience: &str) -> DerivedStat {
    let health = health.trim();
    let base_experience = base_experience.trim();

    if is_none_sentinel(health) || is_none_sentinel(base_experience) {
        return DerivedStat::None;
    }

    let exp = match base_experience.parse::<i64>() {
        Ok(0) => return DerivedStat::None,
        Ok(exp) if exp > 0 => exp,
        _ => return DerivedStat::NotApplicable,
    };

    match health.parse::<i64>() {
        Ok(hp) => DerivedStat::Ratio(rounded_hundredths(hp, exp)),
        Err(_) => DerivedStat::NotApplicable,
    }
}

fn is_none_sentinel(value: &str) -> bool {
    value.eq_ignore_ascii_case("none")
}

/// round(hp * 100 / exp), half away from zero; `exp` is positive
fn rounded_hundredths(hp: i64, exp: i64) -> i128 {
    let num = hp as i128 * 100;
    let den = exp as i128;
    let rounded = (num.abs() * 2 + den) / (den * 2);
    if num < 0 {
        -rounded
    } else {
        rounded
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_even_division() {
        assert_eq!(hp_per_exp("50000", "2000").to_string(), "25.00");
    }

    #[test]
    fn test_two_decimal_places() {
        assert_eq!(hp_per_exp("8", "3").to_string(), "2.67");
        assert_eq!(hp_per_exp("15", "4").to_string(), "3.75");
        assert_eq!(hp_per_exp("1", "3").to_string(), "0.33");
    }

    #[test]
    fn test_half_rounds_away_from_zero() {
        // 1 / 8 = 0.125
        assert_eq!(hp_per_exp("1", "8").to_string(), "0.13");
        // 1 / 200 = 0.005
        assert_eq!(hp_per_exp("1", "200").to_string(), "0.01");
        assert_eq!(hp_per_exp("-1", "8").to_string(), "-0.13");
    }

    #[test]
    fn test_none_sentinel_any_case() {
        assert_eq!(hp_per_exp("none", "3"), DerivedStat::None);
        assert_eq!(hp_per_exp("NONE", "abc"), DerivedStat::None);
        assert_eq!(hp_per_exp("None", ""), DerivedStat::None);
        assert_eq!(hp_per_exp("8", "nOnE").to_string(), "None");
    }

    #[test]
    fn test_zero_experience_is_none() {
        assert_eq!(hp_per_exp("8", "0").to_string(), "None");
        assert_eq!(hp_per_exp("oops", "0"), DerivedStat::None);
    }

    #[test]
    fn test_malformed_is_not_applicable() {
        assert_eq!(hp_per_exp("", "3").to_string(), "N/A");
        assert_eq!(hp_per_exp("8", "").to_string(), "N/A");
        assert_eq!(hp_per_exp("8.5", "3"), DerivedStat::NotApplicable);
        assert_eq!(hp_per_exp("8", "-3"), DerivedStat::NotApplicable);
        assert_eq!(hp_per_exp("lots", "many"), DerivedStat::NotApplicable);
    }

    #[test]
    fn test_large_values_do_not_overflow() {
        let hp = i64::MAX.to_string();
        assert_eq!(
            hp_per_exp(&hp, "1").to_string(),
            format!("{}.00", i64::MAX)
        );
    }
}
