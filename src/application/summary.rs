//! Text rendering of mobile queries shared by the demo and the `show` command

use itertools::Itertools;

use crate::domain::Mobile;

/// Render a float the way the report prints masses and leaf weights.
///
/// Plain decimals (`6.0`, `2.5`) for magnitudes in `[1e-3, 1e7)`, otherwise
/// computerized scientific notation with at least one fraction digit
/// (`1.0E7`, `1.5E-4`).
pub fn fmt_float(value: f32) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        let text = if value > 0.0 { "Infinity" } else { "-Infinity" };
        return text.to_string();
    }
    let magnitude = value.abs();
    if magnitude == 0.0 || (1e-3..1e7).contains(&magnitude) {
        return format!("{:?}", value);
    }
    let sci = format!("{:e}", value);
    match sci.split_once('e') {
        Some((mantissa, exponent)) if mantissa.contains('.') => format!("{}E{}", mantissa, exponent),
        Some((mantissa, exponent)) => format!("{}.0E{}", mantissa, exponent),
        None => sci,
    }
}

/// Leaf weights, each followed by a single space.
pub fn fmt_leaves(leaves: &[f32]) -> String {
    format!("{} ", leaves.iter().copied().map(fmt_float).join(" "))
}

pub fn balance_verdict(balanced: bool) -> &'static str {
    if balanced {
        "Balanced!"
    } else {
        "Not balanced!"
    }
}

pub fn equality_verdict(equal: bool) -> &'static str {
    if equal {
        "Equal!"
    } else {
        "Not equal!"
    }
}

pub fn identity_verdict(identical: bool) -> &'static str {
    if identical {
        "Identical!"
    } else {
        "Not identical!"
    }
}

/// Snapshot of the read-only queries on one mobile.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub total_mass: f32,
    pub height: usize,
    pub leaves: Vec<f32>,
    pub pretty: String,
    pub balanced: bool,
    pub hash_code: i32,
}

impl Summary {
    pub fn of(mobile: &Mobile) -> Self {
        Self {
            total_mass: mobile.weight(),
            height: mobile.height(),
            leaves: mobile.flatten().collect(),
            pretty: mobile.pretty(),
            balanced: mobile.is_balanced(),
            hash_code: mobile.hash_code(),
        }
    }

    /// The report lines up to and including the balance verdict.
    pub fn lines(&self) -> Vec<String> {
        vec![
            format!("Total mass: {}", fmt_float(self.total_mass)),
            format!("Height:     {}", self.height),
            fmt_leaves(&self.leaves),
            self.pretty.clone(),
            balance_verdict(self.balanced).to_string(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(6.0, "6.0")]
    #[case(2.5, "2.5")]
    #[case(0.1, "0.1")]
    #[case(0.001, "0.001")]
    #[case(9999999.0, "9999999.0")]
    #[case(1e7, "1.0E7")]
    #[case(-2.5e8, "-2.5E8")]
    #[case(1.5e-4, "1.5E-4")]
    #[case(0.0, "0.0")]
    #[case(f32::NAN, "NaN")]
    #[case(f32::NEG_INFINITY, "-Infinity")]
    fn test_fmt_float(#[case] value: f32, #[case] expected: &str) {
        assert_eq!(fmt_float(value), expected);
    }

    #[test]
    fn test_fmt_leaves_has_trailing_space() {
        assert_eq!(fmt_leaves(&[2.0, 3.0]), "2.0 3.0 ");
        assert_eq!(fmt_leaves(&[1.0]), "1.0 ");
    }

    #[test]
    fn test_summary_lines() {
        let m = Mobile::composite(Mobile::simple(2.0), 5.0, Mobile::simple(3.0), 4.0);
        let summary = Summary::of(&m);
        assert_eq!(
            summary.lines(),
            vec![
                "Total mass: 5.0",
                "Height:     2",
                "2.0 3.0 ",
                "[(3),4,(2),5]",
                "Not balanced!",
            ]
        );
    }
}
