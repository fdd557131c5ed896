//! # Number formatting
//!
//! Turns a floating point value into a LaTeX-safe string.
//!
//! Number formats are printf-style patterns with exactly one conversion, e.g. `%.2f`,
//! `%d`, `%.4g`, `%e`. They are parsed once into [`NumberFormat`] so that rendering
//! itself never fails. Literal text around the conversion is kept (`%%` is a percent sign).
//!
//! Rendering rules (see [`render_value`]):
//! - without exponent: `3.25`, negative values are bracketed: `\left( -3.25 \right)`
//! - with exponent `e`: the value is scaled by `10^(-e)` and the power is appended:
//!   `{ 434.00 \cdot 10^{-2} }`, negative values again bracketed by `\left( ... \right)`
//!
//! Unit formats are simple patterns where `%s` stands for the unit, default `\mathrm{%s}`.
use crate::symbolic::latex_error::{LatexExprError, LatexResult};
use regex::Regex;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

/// default format of numeric values: fixed point with two decimals
pub const DEFAULT_NUMBER_FORMAT: &str = "%.2f";
/// default format of units: upright font in math mode
pub const DEFAULT_UNIT_FORMAT: &str = r"\mathrm{%s}";

static CONVERSION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"%([-+ 0#]*)(\d+)?(?:\.(\d*))?([A-Za-z%])")
        .expect("conversion pattern is a valid regex")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Conversion {
    /// %d, %i
    Integer,
    /// %f, %F
    Fixed { upper: bool },
    /// %e, %E
    Exponent { upper: bool },
    /// %g, %G
    General { upper: bool },
    /// %s - shortest representation that round-trips
    Shortest,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
struct Flags {
    left_align: bool,
    plus: bool,
    space: bool,
    zero_pad: bool,
    alternate: bool,
}

/// Parsed printf-style pattern for a single floating point value
#[derive(Debug, Clone, PartialEq)]
pub struct NumberFormat {
    pattern: String,
    prefix: String,
    suffix: String,
    flags: Flags,
    width: Option<usize>,
    precision: Option<usize>,
    conversion: Conversion,
}

impl NumberFormat {
    /// `%.<precision>f`
    pub fn fixed(precision: usize) -> Self {
        NumberFormat {
            pattern: format!("%.{}f", precision),
            prefix: String::new(),
            suffix: String::new(),
            flags: Flags::default(),
            width: None,
            precision: Some(precision),
            conversion: Conversion::Fixed { upper: false },
        }
    }
    /// `%d`
    pub fn integer() -> Self {
        NumberFormat {
            pattern: "%d".to_string(),
            precision: None,
            conversion: Conversion::Integer,
            ..NumberFormat::fixed(0)
        }
    }
    /// `%g`
    pub fn general() -> Self {
        NumberFormat {
            pattern: "%g".to_string(),
            precision: None,
            conversion: Conversion::General { upper: false },
            ..NumberFormat::fixed(0)
        }
    }
    /// the original pattern
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn parse(pattern: &str) -> LatexResult<Self> {
        let invalid = |reason: &str| LatexExprError::InvalidFormat {
            pattern: pattern.to_string(),
            reason: reason.to_string(),
        };
        let mut prefix = String::new();
        let mut suffix = String::new();
        let mut found: Option<(Flags, Option<usize>, Option<usize>, Conversion)> = None;
        let mut last_end = 0;
        for caps in CONVERSION.captures_iter(pattern) {
            let whole = caps.get(0).ok_or_else(|| invalid("empty match"))?;
            let literal = &pattern[last_end..whole.start()];
            if literal.contains('%') {
                return Err(invalid("dangling '%'"));
            }
            let target = if found.is_some() { &mut suffix } else { &mut prefix };
            target.push_str(literal);
            last_end = whole.end();

            let flags_str = caps.get(1).map_or("", |m| m.as_str());
            let conv_char = caps.get(4).map_or("", |m| m.as_str());
            if conv_char == "%" {
                if !flags_str.is_empty() || caps.get(2).is_some() || caps.get(3).is_some() {
                    return Err(invalid("'%%' does not take flags, width or precision"));
                }
                target.push('%');
                continue;
            }
            if found.is_some() {
                return Err(invalid("more than one conversion, exactly one value is formatted"));
            }
            let conversion = match conv_char {
                "d" | "i" => Conversion::Integer,
                "f" => Conversion::Fixed { upper: false },
                "F" => Conversion::Fixed { upper: true },
                "e" => Conversion::Exponent { upper: false },
                "E" => Conversion::Exponent { upper: true },
                "g" => Conversion::General { upper: false },
                "G" => Conversion::General { upper: true },
                "s" => Conversion::Shortest,
                other => {
                    return Err(invalid(&format!(
                        "conversion '{}' cannot format a number",
                        other
                    )));
                }
            };
            let flags = Flags {
                left_align: flags_str.contains('-'),
                plus: flags_str.contains('+'),
                space: flags_str.contains(' '),
                zero_pad: flags_str.contains('0'),
                alternate: flags_str.contains('#'),
            };
            let width = match caps.get(2) {
                Some(m) => Some(
                    m.as_str()
                        .parse::<usize>()
                        .map_err(|_| invalid("width is too large"))?,
                ),
                None => None,
            };
            // "%.f" means precision 0, as in C
            let precision = match caps.get(3) {
                Some(m) if m.as_str().is_empty() => Some(0),
                Some(m) => Some(
                    m.as_str()
                        .parse::<usize>()
                        .map_err(|_| invalid("precision is too large"))?,
                ),
                None => None,
            };
            found = Some((flags, width, precision, conversion));
        }
        let tail = &pattern[last_end..];
        if tail.contains('%') {
            return Err(invalid("dangling '%'"));
        }
        let (flags, width, precision, conversion) =
            found.ok_or_else(|| invalid("no conversion found"))?;
        suffix.push_str(tail);
        Ok(NumberFormat {
            pattern: pattern.to_string(),
            prefix,
            suffix,
            flags,
            width,
            precision,
            conversion,
        })
    }

    /// Formats a single value with the pattern
    pub fn format(&self, x: f64) -> String {
        let body = if !x.is_finite() {
            let upper = matches!(
                self.conversion,
                Conversion::Fixed { upper: true }
                    | Conversion::Exponent { upper: true }
                    | Conversion::General { upper: true }
            );
            let s = if x.is_nan() { "nan" } else { "inf" };
            if upper { s.to_uppercase() } else { s.to_string() }
        } else {
            let v = x.abs();
            match self.conversion {
                Conversion::Integer => {
                    let digits = format!("{:.0}", v.trunc());
                    match self.precision {
                        Some(p) if p > digits.len() => {
                            format!("{}{}", "0".repeat(p - digits.len()), digits)
                        }
                        _ => digits,
                    }
                }
                Conversion::Fixed { .. } => {
                    let p = self.precision.unwrap_or(6);
                    let mut s = format!("{:.*}", p, v);
                    if p == 0 && self.flags.alternate {
                        s.push('.');
                    }
                    s
                }
                Conversion::Exponent { upper } => {
                    c_exponent(v, self.precision.unwrap_or(6), upper, self.flags.alternate)
                }
                Conversion::General { upper } => {
                    c_general(v, self.precision, upper, self.flags.alternate)
                }
                Conversion::Shortest => format!("{:?}", v),
            }
        };
        let negative = match self.conversion {
            Conversion::Integer => x.trunc() < 0.0,
            _ => x.is_sign_negative(),
        };
        let sign = if x.is_nan() {
            ""
        } else if negative {
            "-"
        } else if self.flags.plus {
            "+"
        } else if self.flags.space {
            " "
        } else {
            ""
        };
        let len = sign.chars().count() + body.chars().count();
        let padded = match self.width {
            Some(w) if w > len => {
                let fill = w - len;
                if self.flags.left_align {
                    format!("{}{}{}", sign, body, " ".repeat(fill))
                } else if self.flags.zero_pad && x.is_finite() {
                    format!("{}{}{}", sign, "0".repeat(fill), body)
                } else {
                    format!("{}{}{}", " ".repeat(fill), sign, body)
                }
            }
            _ => format!("{}{}", sign, body),
        };
        format!("{}{}{}", self.prefix, padded, self.suffix)
    }
}

/// splits Rust `{:e}` output ("1.5e-7") into mantissa and exponent
fn split_exponent(v: f64, precision: usize) -> (String, i32) {
    let s = format!("{:.*e}", precision, v);
    match s.split_once('e') {
        Some((mantissa, exp)) => (mantissa.to_string(), exp.parse::<i32>().unwrap_or(0)),
        None => (s, 0),
    }
}

fn exponent_suffix(exp: i32, upper: bool) -> String {
    let e = if upper { 'E' } else { 'e' };
    let sign = if exp < 0 { '-' } else { '+' };
    format!("{}{}{:02}", e, sign, exp.abs())
}

/// C-style %e: 1.234500e+03
fn c_exponent(v: f64, precision: usize, upper: bool, alternate: bool) -> String {
    let (mut mantissa, exp) = split_exponent(v, precision);
    if precision == 0 && alternate {
        mantissa.push('.');
    }
    format!("{}{}", mantissa, exponent_suffix(exp, upper))
}

fn strip_fraction_zeros(s: &str) -> String {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        s.to_string()
    }
}

/// C-style %g: fixed or exponent notation depending on the magnitude
fn c_general(v: f64, precision: Option<usize>, upper: bool, alternate: bool) -> String {
    let p = match precision {
        Some(0) => 1,
        Some(p) => p,
        None => 6,
    };
    let exp = if v == 0.0 { 0 } else { split_exponent(v, p - 1).1 };
    if exp < -4 || exp >= p as i32 {
        let (mantissa, exp) = split_exponent(v, p - 1);
        let mantissa = if alternate {
            mantissa
        } else {
            strip_fraction_zeros(&mantissa)
        };
        format!("{}{}", mantissa, exponent_suffix(exp, upper))
    } else {
        let decimals = (p as i32 - 1 - exp).max(0) as usize;
        let s = format!("{:.*}", decimals, v);
        if alternate { s } else { strip_fraction_zeros(&s) }
    }
}

impl Default for NumberFormat {
    fn default() -> Self {
        NumberFormat::fixed(2)
    }
}

impl FromStr for NumberFormat {
    type Err = LatexExprError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NumberFormat::parse(s)
    }
}

impl fmt::Display for NumberFormat {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.pattern)
    }
}

/// Renders a value with given format, scientific exponent (0 = none) and bracketing of
/// negative values.
pub fn render_value(x: f64, format: &NumberFormat, exponent: i32) -> String {
    if exponent == 0 {
        if x < 0.0 {
            return format!(r"\left( {} \right)", format.format(x));
        }
        return format.format(x);
    }
    let val = x * 10f64.powf(-f64::from(exponent));
    let power = format!(r"\cdot 10^{{{}}}", exponent);
    if x < 0.0 {
        format!(r"\left( {} {} \right)", format.format(val), power)
    } else {
        format!("{{ {} {} }}", format.format(val), power)
    }
}

/// Substitutes the unit into the unit format (`%s` -> unit, `%%` -> `%`)
pub fn apply_unit_format(unit_format: &str, unit: &str) -> String {
    unit_format
        .split("%%")
        .map(|part| part.replace("%s", unit))
        .collect::<Vec<_>>()
        .join("%")
}

/// `result \ unit`
pub fn render_with_unit(result: &str, unit: &str, unit_format: &str) -> String {
    format!(r"{} \ {}", result, apply_unit_format(unit_format, unit))
}
