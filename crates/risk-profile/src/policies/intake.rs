use serde_json::{Map, Value};

use super::domain::{ApplicantProfile, House, MaritalStatus, OwnershipStatus, Vehicle};

/// Rejections raised before a request ever reaches the scoring engine.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("request body is empty")]
    EmptyBody,
    #[error("request body is not valid JSON: {0}")]
    MalformedBody(String),
    #[error("request body must be a JSON object")]
    BodyNotAnObject,
    #[error("missing required field `{0}`")]
    MissingField(&'static str),
    #[error("field `{field}` must be a non-negative integer")]
    NotANonNegativeInteger { field: &'static str },
    #[error("field `{field}` must be an integer")]
    NotAnInteger { field: &'static str },
    #[error("field `{field}` is out of range")]
    OutOfRange { field: &'static str },
    #[error("field `{field}` must be a string")]
    NotAString { field: &'static str },
    #[error("field `{field}` must be an object")]
    NotAnObject { field: &'static str },
    #[error("field `{field}` must be an array")]
    NotAnArray { field: &'static str },
    #[error("risk_questions[{index}] must be 0 or 1")]
    InvalidRiskAnswer { index: usize },
    #[error("expected {expected} risk answers, found {found}")]
    RiskAnswerCount { expected: usize, found: usize },
    #[error("unknown marital_status '{0}'")]
    UnknownMaritalStatus(String),
    #[error("unknown house.ownership_status '{0}'")]
    UnknownOwnershipStatus(String),
}

impl ValidationError {
    /// Field the rejection points at, when it concerns a single field.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            ValidationError::MissingField(field)
            | ValidationError::NotANonNegativeInteger { field }
            | ValidationError::NotAnInteger { field }
            | ValidationError::OutOfRange { field }
            | ValidationError::NotAString { field }
            | ValidationError::NotAnObject { field }
            | ValidationError::NotAnArray { field } => Some(*field),
            ValidationError::InvalidRiskAnswer { .. }
            | ValidationError::RiskAnswerCount { .. } => Some("risk_questions"),
            ValidationError::UnknownMaritalStatus(_) => Some("marital_status"),
            ValidationError::UnknownOwnershipStatus(_) => Some("house.ownership_status"),
            ValidationError::EmptyBody
            | ValidationError::MalformedBody(_)
            | ValidationError::BodyNotAnObject => None,
        }
    }
}

/// Guard responsible for producing `ApplicantProfile` instances from wire payloads.
///
/// By default any number of risk answers is accepted; `with_question_count`
/// pins the questionnaire length.
#[derive(Debug, Clone, Default)]
pub struct IntakeGuard {
    risk_question_count: Option<usize>,
}

impl IntakeGuard {
    pub fn with_question_count(risk_question_count: usize) -> Self {
        Self {
            risk_question_count: Some(risk_question_count),
        }
    }

    pub fn risk_question_count(&self) -> Option<usize> {
        self.risk_question_count
    }

    /// Parse raw body bytes, then validate.
    pub fn profile_from_slice(&self, body: &[u8]) -> Result<ApplicantProfile, ValidationError> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Err(ValidationError::EmptyBody);
        }

        let value: Value = serde_json::from_slice(body)
            .map_err(|err| ValidationError::MalformedBody(err.to_string()))?;
        self.profile_from_json(&value)
    }

    /// Convert an inbound JSON document into a validated applicant profile.
    pub fn profile_from_json(&self, value: &Value) -> Result<ApplicantProfile, ValidationError> {
        let body = value.as_object().ok_or(ValidationError::BodyNotAnObject)?;

        let age = narrow(non_negative(body, "age")?, "age")?;
        let dependents = narrow(non_negative(body, "dependents")?, "dependents")?;
        let income = non_negative(body, "income")?;

        let marital_raw = string_field(body, "marital_status")?;
        let marital_status = MaritalStatus::parse(marital_raw)
            .ok_or_else(|| ValidationError::UnknownMaritalStatus(marital_raw.to_string()))?;

        let risk_answers = self.risk_answers(body)?;

        let house = match asset_record(body, "house")? {
            Some(record) => {
                let raw = string_field(record, "house.ownership_status")?;
                let ownership_status = OwnershipStatus::parse(raw)
                    .ok_or_else(|| ValidationError::UnknownOwnershipStatus(raw.to_string()))?;
                Some(House { ownership_status })
            }
            None => None,
        };

        let vehicle = match asset_record(body, "vehicle")? {
            Some(record) => {
                let raw = lookup(record, "vehicle.year")
                    .ok_or(ValidationError::MissingField("vehicle.year"))?;
                let year = raw.as_i64().ok_or(ValidationError::NotAnInteger {
                    field: "vehicle.year",
                })?;
                let year = i32::try_from(year).map_err(|_| ValidationError::OutOfRange {
                    field: "vehicle.year",
                })?;
                Some(Vehicle { year })
            }
            None => None,
        };

        Ok(ApplicantProfile {
            age,
            dependents,
            income,
            marital_status,
            risk_answers,
            house,
            vehicle,
        })
    }

    fn risk_answers(&self, body: &Map<String, Value>) -> Result<Vec<u8>, ValidationError> {
        let raw = lookup(body, "risk_questions")
            .ok_or(ValidationError::MissingField("risk_questions"))?
            .as_array()
            .ok_or(ValidationError::NotAnArray {
                field: "risk_questions",
            })?;

        if let Some(expected) = self.risk_question_count {
            if raw.len() != expected {
                return Err(ValidationError::RiskAnswerCount {
                    expected,
                    found: raw.len(),
                });
            }
        }

        raw.iter()
            .enumerate()
            .map(|(index, answer)| match answer.as_u64() {
                Some(0) => Ok(0),
                Some(1) => Ok(1),
                _ => Err(ValidationError::InvalidRiskAnswer { index }),
            })
            .collect()
    }
}

/// Looks up a possibly dotted field name; `null` counts as absent.
fn lookup<'a>(record: &'a Map<String, Value>, field: &str) -> Option<&'a Value> {
    let key = field.rsplit('.').next().unwrap_or(field);
    record.get(key).filter(|value| !value.is_null())
}

fn non_negative(record: &Map<String, Value>, field: &'static str) -> Result<u64, ValidationError> {
    let value = lookup(record, field).ok_or(ValidationError::MissingField(field))?;
    value
        .as_u64()
        .ok_or(ValidationError::NotANonNegativeInteger { field })
}

fn narrow(value: u64, field: &'static str) -> Result<u32, ValidationError> {
    u32::try_from(value).map_err(|_| ValidationError::OutOfRange { field })
}

fn string_field<'a>(
    record: &'a Map<String, Value>,
    field: &'static str,
) -> Result<&'a str, ValidationError> {
    lookup(record, field)
        .ok_or(ValidationError::MissingField(field))?
        .as_str()
        .ok_or(ValidationError::NotAString { field })
}

/// Asset fields must be present as objects; `{}` declares that the asset is not held.
fn asset_record<'a>(
    body: &'a Map<String, Value>,
    field: &'static str,
) -> Result<Option<&'a Map<String, Value>>, ValidationError> {
    let value = body.get(field).ok_or(ValidationError::MissingField(field))?;
    let record = value
        .as_object()
        .ok_or(ValidationError::NotAnObject { field })?;
    Ok(if record.is_empty() { None } else { Some(record) })
}
