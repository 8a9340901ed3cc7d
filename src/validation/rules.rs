//! A rule-string validator: `required|min:3|max:20|email`.

use logos::Logos;
use tracing::{debug, trace};

use super::Validator;

#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t\n\r\f]+")]
enum RuleToken {
    #[token("|")]
    Pipe,

    #[token(":")]
    Colon,

    #[token(",")]
    Comma,

    #[regex(r"[^|:, \t\n\r\f]+")]
    Word,
}

/// One parsed validation rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rule {
    Required,
    Min(usize),
    Max(usize),
    Email,
    Numeric,
    Accepted,
    In(Vec<String>),
}

/// Parse a pipe-separated rule string. Unknown or malformed rules are
/// skipped.
pub fn parse_rules(rules: &str) -> Vec<Rule> {
    let mut parsed = Vec::new();
    let mut lexer = RuleToken::lexer(rules);
    let mut segment: Vec<(RuleToken, String)> = Vec::new();

    loop {
        match lexer.next() {
            Some(Ok(RuleToken::Pipe)) => flush(&mut segment, &mut parsed),
            Some(Ok(token)) => segment.push((token, lexer.slice().to_owned())),
            Some(Err(())) => trace!(rule = lexer.slice(), "skipping unlexable rule text"),
            None => {
                flush(&mut segment, &mut parsed);
                break;
            }
        }
    }
    parsed
}

fn flush(segment: &mut Vec<(RuleToken, String)>, parsed: &mut Vec<Rule>) {
    if let Some(rule) = rule_from_segment(segment) {
        parsed.push(rule);
    }
    segment.clear();
}

fn rule_from_segment(segment: &[(RuleToken, String)]) -> Option<Rule> {
    let (RuleToken::Word, name) = segment.first()? else {
        return None;
    };
    let params: Vec<&str> = match segment.get(1) {
        Some((RuleToken::Colon, _)) => segment[2..]
            .iter()
            .filter(|(t, _)| *t == RuleToken::Word)
            .map(|(_, text)| text.as_str())
            .collect(),
        _ => Vec::new(),
    };
    let number = || params.first().and_then(|p| p.parse::<usize>().ok());
    let rule = match name.as_str() {
        "required" => Rule::Required,
        "min" => Rule::Min(number()?),
        "max" => Rule::Max(number()?),
        "email" => Rule::Email,
        "numeric" => Rule::Numeric,
        "accepted" => Rule::Accepted,
        "in" => Rule::In(params.iter().map(|p| (*p).to_owned()).collect()),
        other => {
            trace!(rule = other, "ignoring unknown validation rule");
            return None;
        }
    };
    Some(rule)
}

/// Built-in [`Validator`] over [`Rule`] strings, with English messages.
///
/// Empty values only fail `required` and `accepted`; other rules apply to
/// non-empty input. Length rules count characters, or compare the number
/// itself when the field is also `numeric`.
#[derive(Debug, Clone, Default)]
pub struct RuleValidator;

impl RuleValidator {
    pub fn new() -> Self {
        Self
    }
}

impl Validator for RuleValidator {
    fn validate_field(&self, field: &str, value: &str, rules: &str) -> Option<String> {
        let rules = parse_rules(rules);
        let numeric = rules.contains(&Rule::Numeric);
        let label = field.replace(['_', '-'], " ");
        let value = value.trim();

        for rule in &rules {
            let failure = match rule {
                Rule::Required if value.is_empty() => {
                    Some(format!("The {label} field is required."))
                }
                Rule::Accepted if !matches!(value, "1" | "true" | "on" | "yes") => {
                    Some(format!("The {label} field must be accepted."))
                }
                _ if value.is_empty() => None,
                Rule::Min(min) => {
                    let too_small = if numeric {
                        value.parse::<f64>().is_ok_and(|n| n < *min as f64)
                    } else {
                        value.chars().count() < *min
                    };
                    too_small.then(|| {
                        if numeric {
                            format!("The {label} field must be at least {min}.")
                        } else {
                            format!("The {label} field must be at least {min} characters.")
                        }
                    })
                }
                Rule::Max(max) => {
                    let too_large = if numeric {
                        value.parse::<f64>().is_ok_and(|n| n > *max as f64)
                    } else {
                        value.chars().count() > *max
                    };
                    too_large.then(|| {
                        if numeric {
                            format!("The {label} field must not be greater than {max}.")
                        } else {
                            format!("The {label} field must not be greater than {max} characters.")
                        }
                    })
                }
                Rule::Email if !is_email(value) => {
                    Some(format!("The {label} field must be a valid email address."))
                }
                Rule::Numeric if value.parse::<f64>().is_err() => {
                    Some(format!("The {label} field must be a number."))
                }
                Rule::In(options) if !value.split(',').all(|v| options.iter().any(|o| o == v)) => {
                    Some(format!("The selected {label} is invalid."))
                }
                _ => None,
            };
            if let Some(message) = failure {
                debug!(field, ?rule, "validation failed");
                return Some(message);
            }
        }
        None
    }
}

fn is_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain
            .split_once('.')
            .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty())
        && !value.chars().any(char::is_whitespace)
}
