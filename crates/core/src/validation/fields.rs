//! Typed per-field parsers over raw form input.
//!
//! Each parser looks up one field, records any violation in the shared
//! [`ValidationErrors`] accumulator, and returns a placeholder value on
//! failure. Placeholders never escape: callers hand the accumulated errors
//! back through [`ValidationErrors::finish`], which rejects the record if
//! anything was recorded.

use validator::{ValidateEmail, ValidateUrl};

use super::{FormInput, ValidationErrors};

/// Look up a field, treating absent and empty-after-trim as missing.
fn lookup<'a>(input: &'a FormInput, field: &str) -> Option<&'a str> {
    input
        .get(field)
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
}

/// A required non-empty string.
pub fn required(input: &FormInput, field: &'static str, errors: &mut ValidationErrors) -> String {
    match lookup(input, field) {
        Some(value) => value.to_string(),
        None => {
            errors.push(field, format!("{field} is required"));
            String::new()
        }
    }
}

/// A required string with a minimum character count.
pub fn required_min(
    input: &FormInput,
    field: &'static str,
    min_chars: usize,
    errors: &mut ValidationErrors,
) -> String {
    let value = required(input, field, errors);
    if !value.is_empty() && value.chars().count() < min_chars {
        errors.push(
            field,
            format!("{field} must be at least {min_chars} characters"),
        );
    }
    value
}

/// An optional string; absent or empty maps to `None`.
pub fn optional(input: &FormInput, field: &str) -> Option<String> {
    lookup(input, field).map(str::to_string)
}

/// A required, well-formed email address.
pub fn email(input: &FormInput, field: &'static str, errors: &mut ValidationErrors) -> String {
    match lookup(input, field) {
        Some(value) if value.validate_email() => value.to_string(),
        Some(_) => {
            errors.push(field, "Invalid email address");
            String::new()
        }
        None => {
            errors.push(field, format!("{field} is required"));
            String::new()
        }
    }
}

/// An optional absolute URL. Absent and empty both map to `None` ("absent",
/// never null-vs-empty ambiguity); anything else must parse as a URL.
pub fn url_or_empty(
    input: &FormInput,
    field: &'static str,
    errors: &mut ValidationErrors,
) -> Option<String> {
    match lookup(input, field) {
        None => None,
        Some(value) if value.validate_url() => Some(value.to_string()),
        Some(_) => {
            errors.push(field, "Invalid URL");
            None
        }
    }
}

/// A non-negative integer coerced from its string form, with a default
/// applied when the field is absent.
pub fn non_negative_int(
    input: &FormInput,
    field: &'static str,
    default: i32,
    errors: &mut ValidationErrors,
) -> i32 {
    bounded_int(input, field, 0, i32::MAX, default, errors)
}

/// An integer coerced from its string form, bounded inclusively, with a
/// default applied when the field is absent.
pub fn bounded_int(
    input: &FormInput,
    field: &'static str,
    min: i32,
    max: i32,
    default: i32,
    errors: &mut ValidationErrors,
) -> i32 {
    let Some(raw) = lookup(input, field) else {
        return default;
    };
    match raw.parse::<i32>() {
        Ok(value) if (min..=max).contains(&value) => value,
        Ok(_) => {
            errors.push(field, format!("{field} must be between {min} and {max}"));
            default
        }
        Err(_) => {
            errors.push(field, format!("{field} must be an integer"));
            default
        }
    }
}

/// An HTML checkbox value. The literal strings `"on"` and `"true"` map to
/// true; anything else, including absence, maps to false.
pub fn checkbox(input: &FormInput, field: &str) -> bool {
    matches!(input.get(field).map(String::as_str), Some("on" | "true"))
}

/// An optional comma-separated list; entries are trimmed, empties dropped.
pub fn list(input: &FormInput, field: &str) -> Vec<String> {
    lookup(input, field)
        .map(|raw| {
            raw.split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

/// A required comma-separated list: at least one non-empty entry.
pub fn list_required(
    input: &FormInput,
    field: &'static str,
    errors: &mut ValidationErrors,
) -> Vec<String> {
    let entries = list(input, field);
    if entries.is_empty() {
        errors.push(field, format!("{field} is required"));
    }
    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(pairs: &[(&str, &str)]) -> FormInput {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_required_rejects_missing_and_blank() {
        let mut errors = ValidationErrors::new();
        required(&input(&[]), "name", &mut errors);
        required(&input(&[("title", "   ")]), "title", &mut errors);
        assert!(errors.contains("name"));
        assert!(errors.contains("title"));
    }

    #[test]
    fn test_required_trims() {
        let mut errors = ValidationErrors::new();
        let value = required(&input(&[("name", "  Ada ")]), "name", &mut errors);
        assert_eq!(value, "Ada");
        assert!(errors.is_empty());
    }

    #[test]
    fn test_required_min_boundary() {
        // Nine characters rejected, exactly ten accepted.
        let mut errors = ValidationErrors::new();
        required_min(&input(&[("message", "123456789")]), "message", 10, &mut errors);
        assert!(errors.contains("message"));

        let mut errors = ValidationErrors::new();
        let value =
            required_min(&input(&[("message", "1234567890")]), "message", 10, &mut errors);
        assert_eq!(value, "1234567890");
        assert!(errors.is_empty());
    }

    #[test]
    fn test_email_grammar() {
        let mut errors = ValidationErrors::new();
        let value = email(&input(&[("email", "a@example.com")]), "email", &mut errors);
        assert_eq!(value, "a@example.com");
        assert!(errors.is_empty());

        let mut errors = ValidationErrors::new();
        email(&input(&[("email", "not-an-email")]), "email", &mut errors);
        assert!(errors.contains("email"));
    }

    #[test]
    fn test_url_or_empty_treats_empty_as_absent() {
        let mut errors = ValidationErrors::new();
        assert_eq!(url_or_empty(&input(&[("github", "")]), "github", &mut errors), None);
        assert_eq!(url_or_empty(&input(&[]), "github", &mut errors), None);
        assert!(errors.is_empty());
    }

    #[test]
    fn test_url_or_empty_rejects_malformed() {
        let mut errors = ValidationErrors::new();
        url_or_empty(&input(&[("github", "not-a-url")]), "github", &mut errors);
        assert!(errors.contains("github"));
    }

    #[test]
    fn test_url_or_empty_accepts_absolute_url() {
        let mut errors = ValidationErrors::new();
        let value = url_or_empty(
            &input(&[("github", "https://github.com/example")]),
            "github",
            &mut errors,
        );
        assert_eq!(value.as_deref(), Some("https://github.com/example"));
        assert!(errors.is_empty());
    }

    #[test]
    fn test_int_default_applied_when_absent() {
        let mut errors = ValidationErrors::new();
        assert_eq!(non_negative_int(&input(&[]), "years_exp", 0, &mut errors), 0);
        assert_eq!(bounded_int(&input(&[]), "proficiency", 0, 100, 80, &mut errors), 80);
        assert!(errors.is_empty());
    }

    #[test]
    fn test_int_coercion_and_bounds() {
        let mut errors = ValidationErrors::new();
        assert_eq!(
            non_negative_int(&input(&[("years_exp", "7")]), "years_exp", 0, &mut errors),
            7
        );
        assert!(errors.is_empty());

        let mut errors = ValidationErrors::new();
        non_negative_int(&input(&[("years_exp", "-3")]), "years_exp", 0, &mut errors);
        assert!(errors.contains("years_exp"));

        let mut errors = ValidationErrors::new();
        bounded_int(&input(&[("proficiency", "101")]), "proficiency", 0, 100, 80, &mut errors);
        assert!(errors.contains("proficiency"));

        let mut errors = ValidationErrors::new();
        non_negative_int(&input(&[("years_exp", "many")]), "years_exp", 0, &mut errors);
        assert!(errors.contains("years_exp"));
    }

    #[test]
    fn test_checkbox_literals() {
        assert!(checkbox(&input(&[("featured", "on")]), "featured"));
        assert!(checkbox(&input(&[("featured", "true")]), "featured"));
        assert!(!checkbox(&input(&[("featured", "yes")]), "featured"));
        assert!(!checkbox(&input(&[("featured", "")]), "featured"));
        assert!(!checkbox(&input(&[]), "featured"));
    }

    #[test]
    fn test_list_splits_and_trims() {
        let entries = list(&input(&[("tech_stack", "Rust, axum ,, sqlx ")]), "tech_stack");
        assert_eq!(entries, vec!["Rust", "axum", "sqlx"]);
        assert!(list(&input(&[]), "images").is_empty());
    }

    #[test]
    fn test_list_required_rejects_empty() {
        let mut errors = ValidationErrors::new();
        list_required(&input(&[("tech_stack", " , ,")]), "tech_stack", &mut errors);
        assert!(errors.contains("tech_stack"));
    }
}
