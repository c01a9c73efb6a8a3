use serde_json::Value;

/// Every constraint an incoming payload violated, in the order they were checked.
#[derive(Debug, Clone, Default, PartialEq, Eq, thiserror::Error)]
#[error("{}", .violations.join(", "))]
pub struct ValidationError {
    violations: Vec<String>,
}

impl ValidationError {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn single(violation: impl Into<String>) -> Self {
        Self {
            violations: vec![violation.into()],
        }
    }

    pub fn push(&mut self, violation: impl Into<String>) {
        self.violations.push(violation.into());
    }

    pub fn extend(&mut self, other: ValidationError) {
        self.violations.extend(other.violations);
    }

    pub fn violations(&self) -> &[String] {
        &self.violations
    }

    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    /// Returns `value` when nothing was recorded, otherwise the collected violations.
    pub fn into_result<T>(self, value: T) -> Result<T, ValidationError> {
        if self.is_empty() { Ok(value) } else { Err(self) }
    }
}

/// Looks up an object field. `null` counts as absent, non-object payloads have no fields.
pub fn field<'a>(payload: &'a Value, name: &str) -> Option<&'a Value> {
    payload.get(name).filter(|value| !value.is_null())
}

/// Coerces JSON numbers and numeric strings (query values arrive as text).
pub fn coerce_number(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse::<f64>().ok(),
        _ => None,
    };
    number.filter(|number| number.is_finite())
}

/// Checks that `value` is a positive whole number, recording one violation per broken rule.
pub fn positive_integer(name: &str, value: &Value, errors: &mut ValidationError) -> Option<i64> {
    let Some(number) = coerce_number(value) else {
        errors.push(format!("{name} must be a number"));
        return None;
    };

    let mut valid = true;
    if number <= 0.0 {
        errors.push(format!("{name} must be a positive number"));
        valid = false;
    }
    if number.fract() != 0.0 {
        errors.push(format!("{name} must be an integer number"));
        valid = false;
    }
    if !valid {
        return None;
    }
    if number >= i64::MAX as f64 {
        errors.push(format!("{name} is out of range"));
        return None;
    }

    let exact = match value {
        Value::Number(number) => number.as_i64(),
        Value::String(text) => text.trim().parse::<i64>().ok(),
        _ => None,
    };
    Some(exact.unwrap_or(number as i64))
}
