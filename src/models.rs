use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};
use std::collections::HashMap;
use std::fmt;

/// Rate mapping returned by the provider, kept in payload order
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Rates(Vec<(String, f64)>);

impl Rates {
    pub fn new(entries: Vec<(String, f64)>) -> Self {
        Rates(entries)
    }

    /// Rate for `code`, if the provider listed it
    pub fn get(&self, code: &str) -> Option<f64> {
        self.0.iter().find(|(c, _)| c == code).map(|(_, r)| *r)
    }

    /// Currency codes in the order the provider sent them
    pub fn codes(&self) -> Vec<String> {
        self.0.iter().map(|(c, _)| c.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'de> Deserialize<'de> for Rates {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct RatesVisitor;

        impl<'de> Visitor<'de> for RatesVisitor {
            type Value = Rates;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of currency code to numeric rate")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Rates, A::Error>
            where
                A: MapAccess<'de>,
            {
                let capacity = map.size_hint().unwrap_or(0);
                let mut entries: Vec<(String, f64)> = Vec::with_capacity(capacity);
                let mut index: HashMap<String, usize> = HashMap::with_capacity(capacity);
                while let Some((code, rate)) = map.next_entry::<String, f64>()? {
                    // A repeated key keeps its first position and takes the last value
                    match index.get(&code).copied() {
                        Some(at) => entries[at].1 = rate,
                        None => {
                            index.insert(code.clone(), entries.len());
                            entries.push((code, rate));
                        }
                    }
                }
                Ok(Rates(entries))
            }
        }

        deserializer.deserialize_map(RatesVisitor)
    }
}

/// One `latest/{BASE}` response. Only `rates` is required.
#[derive(Clone, Debug, Deserialize)]
pub struct RateSnapshot {
    #[serde(default)]
    pub base: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    pub rates: Rates,
}

/// Parse user text the way `parseFloat` does: longest numeric prefix after
/// leading whitespace, NaN when there is none.
pub fn parse_amount(text: &str) -> f64 {
    let s = text.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end = 1;
    }
    if s[end..].starts_with("Infinity") {
        return if s.starts_with('-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        if digits > 0 {
            end = frac_end;
        }
    }
    if digits == 0 {
        return f64::NAN;
    }

    // Exponent only counts when at least one digit follows it
    if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && (bytes[exp_end] == b'+' || bytes[exp_end] == b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end].parse::<f64>().unwrap_or(f64::NAN)
}

/// Result line for a conversion, or None when there is nothing to show.
///
/// Zero and NaN are hidden, like any falsy value in the original widget.
pub fn format_result(
    amount: &str,
    source: &str,
    converted: Option<f64>,
    target: &str,
    precision: usize,
) -> Option<String> {
    let value = converted.filter(|v| *v != 0.0 && !v.is_nan())?;
    Some(format!(
        "{} {} equals {:.*} {}",
        amount, source, precision, value, target
    ))
}
