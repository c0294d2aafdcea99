use serde::Serialize;

/// One violated rule on one input field, surfaced in the 400 response body.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FieldRule {
    pub field: String,
    pub rule: String,
}

impl FieldRule {
    pub fn new(field: &str, rule: &str) -> Self {
        Self {
            field: field.to_string(),
            rule: rule.to_string(),
        }
    }
}

pub fn is_cpf(value: &str) -> bool {
    value.len() == 11 && value.chars().all(|c| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cpf_must_be_exactly_eleven_digits() {
        assert!(is_cpf("12345678901"));
        assert!(!is_cpf("1234567890"));
        assert!(!is_cpf("123456789012"));
        assert!(!is_cpf("1234567890a"));
        assert!(!is_cpf(""));
    }
}
