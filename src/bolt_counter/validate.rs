use crate::bolt_counter::error::ValidationError;
use crate::detector::interface::RadiusBounds;

/// Radius text exactly as it sits in the input fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RadiusInput {
    pub min_text: String,
    pub max_text: String,
}

impl RadiusInput {
    #[allow(dead_code)]
    pub fn new(min_text: &str, max_text: &str) -> Self {
        Self {
            min_text: min_text.to_string(),
            max_text: max_text.to_string(),
        }
    }
}

fn parse_radius(text: &str) -> Result<i32, ValidationError> {
    text.trim()
        .parse::<i32>()
        .map_err(|_| ValidationError::NonNumericRadius)
}

/// Parses both bounds without checking their order. Used on every tick while
/// running, where edits take effect unvalidated.
pub fn parse_bounds(input: &RadiusInput) -> Result<RadiusBounds, ValidationError> {
    if input.min_text.trim().is_empty() || input.max_text.trim().is_empty() {
        return Err(ValidationError::MissingRadius);
    }
    Ok(RadiusBounds {
        min: parse_radius(&input.min_text)?,
        max: parse_radius(&input.max_text)?,
    })
}

/// The gate in front of a session start.
pub fn validate_radius_input(input: &RadiusInput) -> Result<RadiusBounds, ValidationError> {
    let bounds = parse_bounds(input)?;
    if bounds.min >= bounds.max {
        return Err(ValidationError::RadiusOrder);
    }
    Ok(bounds)
}
