//! Setting value validation.

use epd_bitmap::ResizeFilter;

/// Validate a setting value. Returns `Ok(())` if valid, or an error message.
pub fn validate_setting(key: &str, value: &str) -> Result<(), String> {
    match key {
        "EPD_WIDTH" | "EPD_HEIGHT" => validate_int_range(value, 1, 16384)?,
        "EPD_THRESHOLD" => validate_int_range(value, 0, 255)?,
        "EPD_RESIZE_FILTER" => {
            value.parse::<ResizeFilter>()?;
        }
        _ => {}
    }
    Ok(())
}

fn validate_int_range(value: &str, min: i64, max: i64) -> Result<(), String> {
    let v: i64 = value.trim().parse().map_err(|_| "must be an integer")?;
    if v < min || v > max {
        return Err(format!("must be between {min} and {max}"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_dimensions() {
        assert!(validate_setting("EPD_WIDTH", "400").is_ok());
        assert!(validate_setting("EPD_HEIGHT", "1").is_ok());
        assert!(validate_setting("EPD_WIDTH", "0").is_err());
        assert!(validate_setting("EPD_HEIGHT", "-3").is_err());
        assert!(validate_setting("EPD_WIDTH", "wide").is_err());
    }

    #[test]
    fn test_valid_threshold() {
        assert!(validate_setting("EPD_THRESHOLD", "0").is_ok());
        assert!(validate_setting("EPD_THRESHOLD", "255").is_ok());
        assert_eq!(
            validate_setting("EPD_THRESHOLD", "256"),
            Err("must be between 0 and 255".into())
        );
    }

    #[test]
    fn test_valid_filter() {
        assert!(validate_setting("EPD_RESIZE_FILTER", "lanczos3").is_ok());
        assert!(validate_setting("EPD_RESIZE_FILTER", "bicubic").is_ok());
        assert!(validate_setting("EPD_RESIZE_FILTER", "sinc").is_err());
    }

    #[test]
    fn test_unknown_key_is_accepted() {
        assert!(validate_setting("SOMETHING_ELSE", "anything").is_ok());
    }
}
