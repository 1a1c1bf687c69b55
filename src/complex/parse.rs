use super::Complex;
use regex::{Captures, Regex};
use simple_error::{bail, SimpleError};
use std::str::FromStr;
use std::sync::OnceLock;

const UNSIGNED: &str = r"(?:(?:\d+(?:\.\d*)?|\.\d+)(?:[eE][+-]?\d+)?|inf|NaN)";

fn complex_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        let pattern = format!(
            r"^\s*(?:(?<re>[+-]?{u})(?:\s*(?<op>[+-])\s*(?<im>{u})?\s*\*?\s*i)?|(?<pure>[+-]?(?:{u})?)\s*\*?\s*i)\s*$",
            u = UNSIGNED
        );
        Regex::new(&pattern).expect("Invalid regex!")
    })
}

fn parse_number(text: &str) -> Result<f64, SimpleError> {
    match text.parse::<f64>() {
        Ok(val) => Ok(val),
        Err(err) => bail!("invalid number {:?}: {}", text, err),
    }
}

// Coefficient of a bare `i` term: "", "+" and "-" stand for ±1.
fn parse_coefficient(text: &str) -> Result<f64, SimpleError> {
    match text {
        "" | "+" => Ok(1.0),
        "-" => Ok(-1.0),
        _ => parse_number(text),
    }
}

fn from_captures(caps: &Captures) -> Result<Complex, SimpleError> {
    if let Some(pure) = caps.name("pure") {
        return Ok(Complex::from_imag(parse_coefficient(pure.as_str())?));
    }

    let re = match caps.name("re") {
        Some(re) => parse_number(re.as_str())?,
        None => bail!("missing real part"),
    };
    let im = match caps.name("op") {
        None => 0.0,
        Some(op) => {
            let magnitude = caps
                .name("im")
                .map_or(Ok(1.0), |im| parse_number(im.as_str()))?;
            if op.as_str() == "-" {
                -magnitude
            } else {
                magnitude
            }
        }
    };
    Ok(Complex::new(re, im))
}

impl FromStr for Complex {
    type Err = SimpleError;

    /// Parse the text form written by `Display`, e.g. `3 + 4i`, `-2.5 - i`,
    /// `7`, `4i`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match complex_regex().captures(s) {
            Some(caps) => from_captures(&caps),
            None => bail!("string not a valid complex number: {:?}", s),
        }
    }
}
