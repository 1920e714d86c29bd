use crate::utils::error::{BlockError, Result};
use chrono_tz::Tz;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_timezone(field_name: &str, value: &str) -> Result<Tz> {
    value
        .parse::<Tz>()
        .map_err(|e| BlockError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: e.to_string(),
        })
}

pub fn validate_label(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(BlockError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "label cannot be empty".to_string(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_iana_timezone_names() {
        assert_eq!(
            validate_timezone("timezone", "America/New_York").unwrap(),
            chrono_tz::America::New_York
        );
        assert_eq!(validate_timezone("timezone", "UTC").unwrap(), chrono_tz::UTC);
    }

    #[test]
    fn rejects_unknown_timezone() {
        let err = validate_timezone("timezone", "Mars/Olympus_Mons").unwrap_err();
        assert!(matches!(
            err,
            BlockError::InvalidConfigValueError { ref field, .. } if field == "timezone"
        ));
    }

    #[test]
    fn rejects_blank_label() {
        assert!(validate_label("label", "  ").is_err());
        assert!(validate_label("label", "The Local Library").is_ok());
    }
}
