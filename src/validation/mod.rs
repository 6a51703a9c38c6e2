//! Shape validation for event submissions.
//!
//! Every rule in [`RULES`] runs against the raw request, whatever the other
//! rules report. Failures are grouped per field in the order fields appear in
//! the table, so a form can show each message beside its control.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use crate::models::CreateEventRequest;
use crate::utils::datetime::parse_datetime;

pub const NAME_MAX_LENGTH: usize = 32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    Name,
    StartDate,
    EndDate,
    Timezone,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::StartDate => "startDate",
            Field::EndDate => "endDate",
            Field::Timezone => "timezone",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

struct Rule {
    field: Field,
    constraint: &'static str,
    check: fn(&CreateEventRequest) -> bool,
    message: &'static str,
}

const RULES: &[Rule] = &[
    Rule {
        field: Field::Name,
        constraint: "isNotEmpty",
        check: name_not_empty,
        message: "name should not be empty",
    },
    Rule {
        field: Field::Name,
        constraint: "maxLength",
        check: name_within_limit,
        message: "Name must not exceed 32 characters",
    },
    Rule {
        field: Field::StartDate,
        constraint: "isNotEmpty",
        check: |request| !request.start_date.is_empty(),
        message: "startDate should not be empty",
    },
    Rule {
        field: Field::StartDate,
        constraint: "isDateString",
        check: |request| parse_datetime(&request.start_date).is_some(),
        message: "Start date must be a valid ISO 8601 date string",
    },
    Rule {
        field: Field::EndDate,
        constraint: "isNotEmpty",
        check: |request| !request.end_date.is_empty(),
        message: "endDate should not be empty",
    },
    Rule {
        field: Field::EndDate,
        constraint: "isDateString",
        check: |request| parse_datetime(&request.end_date).is_some(),
        message: "End date must be a valid ISO 8601 date string",
    },
    Rule {
        field: Field::EndDate,
        constraint: "dateRange",
        check: end_not_before_start,
        message: "End date must be after start date",
    },
    Rule {
        field: Field::Timezone,
        constraint: "isNotEmpty",
        check: |request| !request.timezone.is_empty(),
        message: "timezone should not be empty",
    },
    Rule {
        field: Field::Timezone,
        constraint: "matches",
        check: timezone_charset,
        message: "Timezone must be a valid IANA timezone identifier",
    },
];

fn name_not_empty(request: &CreateEventRequest) -> bool {
    !request.name.trim().is_empty()
}

fn name_within_limit(request: &CreateEventRequest) -> bool {
    request.name.trim().chars().count() <= NAME_MAX_LENGTH
}

// Only `end < start` fails; equal instants are left to the store.
// Unparseable or missing dates pass here, their own rules report them.
fn end_not_before_start(request: &CreateEventRequest) -> bool {
    match (
        parse_datetime(&request.start_date),
        parse_datetime(&request.end_date),
    ) {
        (Some(start), Some(end)) => end >= start,
        _ => true,
    }
}

fn timezone_charset(request: &CreateEventRequest) -> bool {
    !request.timezone.is_empty()
        && request
            .timezone
            .chars()
            .all(|c| c.is_ascii_alphabetic() || matches!(c, '_' | '/' | '+' | '-'))
}

/// Every violated rule for a single field, keyed by constraint name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub property: Field,
    pub constraints: BTreeMap<&'static str, &'static str>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    pub fn fields(&self) -> &[FieldError] {
        &self.0
    }

    pub fn get(&self, field: Field) -> Option<&FieldError> {
        self.0.iter().find(|error| error.property == field)
    }

    pub fn has(&self, field: Field, constraint: &str) -> bool {
        self.get(field)
            .is_some_and(|error| error.constraints.contains_key(constraint))
    }

    fn push(&mut self, rule: &Rule) {
        match self.0.iter_mut().find(|error| error.property == rule.field) {
            Some(existing) => {
                existing.constraints.insert(rule.constraint, rule.message);
            }
            None => self.0.push(FieldError {
                property: rule.field,
                constraints: BTreeMap::from([(rule.constraint, rule.message)]),
            }),
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<String> = self
            .0
            .iter()
            .flat_map(|error| {
                error
                    .constraints
                    .values()
                    .map(move |message| format!("{}: {}", error.property, message))
            })
            .collect();
        f.write_str(&messages.join("; "))
    }
}

impl std::error::Error for ValidationErrors {}

/// A request that passed every rule, with its name trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidEvent(CreateEventRequest);

impl ValidEvent {
    pub fn into_inner(self) -> CreateEventRequest {
        self.0
    }
}

pub fn validate_event(request: &CreateEventRequest) -> Result<ValidEvent, ValidationErrors> {
    let mut errors = ValidationErrors(Vec::new());

    for rule in RULES.iter().filter(|rule| !(rule.check)(request)) {
        errors.push(rule);
    }

    if !errors.0.is_empty() {
        return Err(errors);
    }

    Ok(ValidEvent(CreateEventRequest {
        name: request.name.trim().to_string(),
        ..request.clone()
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> CreateEventRequest {
        CreateEventRequest {
            name: "Test Event".into(),
            description: "Test Description".into(),
            start_date: "2025-05-01T10:00:00Z".into(),
            end_date: "2025-05-01T12:00:00Z".into(),
            timezone: "UTC".into(),
        }
    }

    #[test]
    fn test_valid_request_passes_unchanged() {
        let valid = validate_event(&request()).unwrap();
        assert_eq!(valid.into_inner(), request());
    }

    #[test]
    fn test_name_is_trimmed() {
        let mut input = request();
        input.name = "  Padded  ".into();

        let valid = validate_event(&input).unwrap();
        assert_eq!(valid.into_inner().name, "Padded");
    }

    #[test]
    fn test_name_boundary() {
        let mut input = request();
        input.name = "A".repeat(32);
        assert!(validate_event(&input).is_ok());

        input.name = "A".repeat(33);
        let errors = validate_event(&input).unwrap_err();
        assert!(errors.has(Field::Name, "maxLength"));
        assert_eq!(errors.fields().len(), 1);
    }

    #[test]
    fn test_name_length_counts_characters() {
        let mut input = request();
        input.name = "é".repeat(32);
        assert!(validate_event(&input).is_ok());
    }

    #[test]
    fn test_blank_name_rejected() {
        let mut input = request();
        input.name = "   ".into();

        let errors = validate_event(&input).unwrap_err();
        assert!(errors.has(Field::Name, "isNotEmpty"));
        assert!(!errors.has(Field::Name, "maxLength"));
    }

    #[test]
    fn test_empty_description_allowed() {
        let mut input = request();
        input.description = String::new();
        assert!(validate_event(&input).is_ok());

        input.description = "x".repeat(10_000);
        assert!(validate_event(&input).is_ok());
    }

    #[test]
    fn test_invalid_start_date_reported_without_range_error() {
        let mut input = request();
        input.start_date = "not-a-date".into();

        let errors = validate_event(&input).unwrap_err();
        let start = errors.get(Field::StartDate).unwrap();
        assert_eq!(
            start.constraints.get("isDateString"),
            Some(&"Start date must be a valid ISO 8601 date string")
        );
        assert!(!start.constraints.contains_key("isNotEmpty"));
        assert!(errors.get(Field::EndDate).is_none());
    }

    #[test]
    fn test_missing_date_fails_both_rules() {
        let mut input = request();
        input.end_date = String::new();

        let errors = validate_event(&input).unwrap_err();
        assert!(errors.has(Field::EndDate, "isNotEmpty"));
        assert!(errors.has(Field::EndDate, "isDateString"));
        assert!(!errors.has(Field::EndDate, "dateRange"));
    }

    #[test]
    fn test_end_before_start_rejected() {
        let mut input = request();
        input.end_date = "2025-05-01T09:00:00Z".into();

        let errors = validate_event(&input).unwrap_err();
        assert!(errors.has(Field::EndDate, "dateRange"));
    }

    #[test]
    fn test_equal_dates_pass_shape_validation() {
        let mut input = request();
        input.end_date = input.start_date.clone();
        assert!(validate_event(&input).is_ok());

        // Same instant, different offset.
        input.end_date = "2025-05-01T12:00:00+02:00".into();
        assert!(validate_event(&input).is_ok());
    }

    #[test]
    fn test_timezone_charset() {
        let mut input = request();
        for zone in ["America/New_York", "Asia/Ho_Chi_Minh", "America/Port-au-Prince"] {
            input.timezone = zone.into();
            assert!(validate_event(&input).is_ok(), "{zone} should pass");
        }

        for zone in ["UTC 1", "Etc/GMT+5", "Europe/Paris;"] {
            input.timezone = zone.into();
            let errors = validate_event(&input).unwrap_err();
            assert!(errors.has(Field::Timezone, "matches"), "{zone} should fail");
            assert!(!errors.has(Field::Timezone, "isNotEmpty"));
        }

        input.timezone = String::new();
        let errors = validate_event(&input).unwrap_err();
        assert!(errors.has(Field::Timezone, "isNotEmpty"));
        assert!(errors.has(Field::Timezone, "matches"));
    }

    #[test]
    fn test_errors_collected_across_fields_in_order() {
        let input = CreateEventRequest {
            name: "B".repeat(40),
            description: String::new(),
            start_date: "nope".into(),
            end_date: "2025-05-01T12:00:00Z".into(),
            timezone: "Mars Base".into(),
        };

        let errors = validate_event(&input).unwrap_err();
        let fields: Vec<Field> = errors.fields().iter().map(|e| e.property).collect();
        assert_eq!(fields, vec![Field::Name, Field::StartDate, Field::Timezone]);
    }

    #[test]
    fn test_display_lists_every_message() {
        let mut input = request();
        input.name = String::new();
        input.timezone = "bad zone".into();

        let errors = validate_event(&input).unwrap_err();
        assert_eq!(
            errors.to_string(),
            "name: name should not be empty; \
             timezone: Timezone must be a valid IANA timezone identifier"
        );
    }

    #[test]
    fn test_errors_serialize_per_field() {
        let mut input = request();
        input.timezone = "bad zone".into();

        let value = serde_json::to_value(validate_event(&input).unwrap_err()).unwrap();
        assert_eq!(
            value,
            serde_json::json!([{
                "property": "timezone",
                "constraints": {
                    "matches": "Timezone must be a valid IANA timezone identifier"
                }
            }])
        );
    }
}
