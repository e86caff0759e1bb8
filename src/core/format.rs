//! Cell format mini-language
//!
//! Templates follow the positional-field convention
//! `[[fill]align][sign][0][width][.precision][type]`, e.g. `".2f"` for
//! two-decimal fixed point, `">8"` for right-aligned minimum width 8, or
//! `"+d"` for an always-signed integer.
//!
//! Supported types: `f` (fixed point), `e`/`E` (scientific), `d`
//! (integer), `b`/`o`/`x`/`X` (integer radix), `%` (percentage), `s`
//! (string). A template that does not parse, or that is incompatible
//! with the cell's value, falls back to the value's plain text
//! conversion; a single bad cell never aborts the table.

use lazy_static::lazy_static;
use regex::Regex;
use unicode_width::UnicodeWidthStr;

use super::value::Value;

lazy_static! {
    static ref SPEC_RE: Regex = Regex::new(
        r"^(?:(?P<fill>[^{}])?(?P<align>[<^>]))?(?P<sign>[+ -])?(?P<zero>0)?(?P<width>\d+)?(?:\.(?P<prec>\d+))?(?P<kind>[bdeEfosxX%])?$"
    )
    .expect("format spec regex is valid");
}

#[derive(Debug, Clone, Default)]
struct Spec {
    fill: Option<char>,
    align: Option<char>,
    sign: Option<char>,
    zero: bool,
    width: Option<usize>,
    precision: Option<usize>,
    kind: Option<char>,
}

/// Format one cell with the given template.
///
/// An empty template, an unparseable template, and a template/value type
/// mismatch all yield the plain `Display` conversion.
pub fn format_cell(template: &str, value: &Value) -> String {
    if template.is_empty() {
        return value.to_string();
    }
    try_format(template, value).unwrap_or_else(|| value.to_string())
}

fn parse_spec(template: &str) -> Option<Spec> {
    let caps = SPEC_RE.captures(template)?;
    Some(Spec {
        fill: caps.name("fill").and_then(|m| m.as_str().chars().next()),
        align: caps.name("align").and_then(|m| m.as_str().chars().next()),
        sign: caps.name("sign").and_then(|m| m.as_str().chars().next()),
        zero: caps.name("zero").is_some(),
        width: caps.name("width").and_then(|m| m.as_str().parse().ok()),
        precision: caps.name("prec").and_then(|m| m.as_str().parse().ok()),
        kind: caps.name("kind").and_then(|m| m.as_str().chars().next()),
    })
}

fn try_format(template: &str, value: &Value) -> Option<String> {
    let spec = parse_spec(template)?;
    let body = render_body(&spec, value)?;
    Some(pad_body(&spec, body, value.is_numeric()))
}

fn render_body(spec: &Spec, value: &Value) -> Option<String> {
    match spec.kind {
        Some('f') => {
            let x = value.as_f64()?;
            if !x.is_finite() {
                return Some(value.to_string());
            }
            Some(format!("{:.*}", spec.precision.unwrap_or(6), x))
        }
        Some('e') | Some('E') => {
            let x = value.as_f64()?;
            if !x.is_finite() {
                return Some(value.to_string());
            }
            let body = match spec.precision {
                Some(p) => format!("{:.*e}", p, x),
                None => format!("{:e}", x),
            };
            if spec.kind == Some('E') {
                Some(body.replace('e', "E"))
            } else {
                Some(body)
            }
        }
        Some('%') => {
            let x = value.as_f64()?;
            if !x.is_finite() {
                return Some(value.to_string());
            }
            Some(format!("{:.*}%", spec.precision.unwrap_or(6), x * 100.0))
        }
        Some('d') => match value {
            Value::Int(i) => Some(i.to_string()),
            _ => None,
        },
        Some('b') | Some('o') | Some('x') | Some('X') => {
            let i = match value {
                Value::Int(i) => *i,
                _ => return None,
            };
            let digits = match spec.kind {
                Some('b') => format!("{:b}", i.unsigned_abs()),
                Some('o') => format!("{:o}", i.unsigned_abs()),
                Some('x') => format!("{:x}", i.unsigned_abs()),
                _ => format!("{:X}", i.unsigned_abs()),
            };
            Some(if i < 0 {
                format!("-{}", digits)
            } else {
                digits
            })
        }
        Some('s') => match value {
            Value::Str(s) => Some(s.clone()),
            _ => None,
        },
        None => match (value, spec.precision) {
            // Bare precision on a float means fixed point
            (Value::Float(x), Some(p)) if x.is_finite() => Some(format!("{:.*}", p, x)),
            _ => Some(value.to_string()),
        },
        _ => None,
    }
}

fn pad_body(spec: &Spec, body: String, numeric: bool) -> String {
    let mut text = body;

    // Sign handling applies to numeric bodies without an explicit sign
    if numeric && !text.starts_with('-') {
        match spec.sign {
            Some('+') => text.insert(0, '+'),
            Some(' ') => text.insert(0, ' '),
            _ => {}
        }
    }

    let width = match spec.width {
        Some(w) => w,
        None => return text,
    };
    let current = UnicodeWidthStr::width(text.as_str());
    if current >= width {
        return text;
    }
    let gap = width - current;

    let fill = spec.fill.unwrap_or(if spec.zero { '0' } else { ' ' });
    let align = spec.align.unwrap_or(if spec.zero && numeric {
        '='
    } else if numeric {
        '>'
    } else {
        '<'
    });

    let padding: String = std::iter::repeat(fill).take(gap).collect();
    match align {
        '<' => format!("{}{}", text, padding),
        '>' => format!("{}{}", padding, text),
        '^' => {
            let left = gap / 2;
            format!(
                "{}{}{}",
                fill.to_string().repeat(left),
                text,
                fill.to_string().repeat(gap - left)
            )
        }
        // '=': zero-pad between the sign and the digits
        _ => {
            if let Some(first) = text.chars().next() {
                if first == '-' || first == '+' || first == ' ' {
                    let rest: String = text.chars().skip(1).collect();
                    return format!("{}{}{}", first, padding, rest);
                }
            }
            format!("{}{}", padding, text)
        }
    }
}
