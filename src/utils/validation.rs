use crate::utils::error::{ParkingError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ParkingError::InvalidConfigValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(ParkingError::InvalidConfigValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("plate", "AA-11-BB").is_ok());
        assert!(validate_non_empty_string("plate", "").is_err());
        assert!(validate_non_empty_string("plate", "   ").is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("floors", 3, 1, 5).is_ok());
        assert!(validate_range("floors", 0, 1, 5).is_err());
        assert!(validate_range("floors", 6, 1, 5).is_err());
    }
}
