//! Resource identifiers
//!
//! The API addresses everything by numeric id, but callers have always been
//! able to pass ids as numbers or as strings. [`ResourceId`] captures both
//! forms; [`ResourceId::path_segment`] turns one into the URL segment the
//! resource accessors interpolate.

/// A resource or workspace identifier, given as a number or a string.
///
/// Identifiers are never stored by the accessors; they are consumed
/// immediately to build a path segment.
#[derive(Debug, Clone, PartialEq)]
pub enum ResourceId {
    /// Native numeric identifier.
    Number(u64),
    /// String identifier, coerced to numeric form when the path is built.
    Text(String),
}

impl ResourceId {
    /// Render this identifier as a URL path segment.
    ///
    /// Numbers and numeric strings produce the canonical decimal form
    /// (`"007"` becomes `"7"`, `" 42 "` becomes `"42"`). Anything that does
    /// not coerce to a finite number produces the literal segment `"NaN"`,
    /// and the request goes out with that segment for the server to refuse.
    /// This coercion quirk is deliberate and covered by tests; callers that
    /// want validation should parse their ids before building one of these.
    pub fn path_segment(&self) -> String {
        match self {
            ResourceId::Number(id) => id.to_string(),
            ResourceId::Text(id) => coerce_numeric(id),
        }
    }
}

impl From<u64> for ResourceId {
    fn from(id: u64) -> Self {
        ResourceId::Number(id)
    }
}

impl From<&str> for ResourceId {
    fn from(id: &str) -> Self {
        ResourceId::Text(id.to_string())
    }
}

impl From<String> for ResourceId {
    fn from(id: String) -> Self {
        ResourceId::Text(id)
    }
}

/// Coerce a string id to its decimal form, or the `"NaN"` token.
fn coerce_numeric(id: &str) -> String {
    match id.trim().parse::<f64>() {
        Ok(n) if n.is_finite() => format_decimal(n),
        _ => "NaN".to_string(),
    }
}

/// Format a finite float the way a decimal id should read: integral values
/// print without a fraction, everything else keeps the float rendering.
fn format_decimal(n: f64) -> String {
    const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0; // 2^53

    if n.fract() == 0.0 && n.abs() < MAX_EXACT_INTEGER {
        format!("{}", n as i64)
    } else {
        n.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_ids_render_decimal() {
        assert_eq!(ResourceId::from(1u64).path_segment(), "1");
        assert_eq!(ResourceId::from(1337u64).path_segment(), "1337");
        assert_eq!(ResourceId::from(u64::MAX).path_segment(), u64::MAX.to_string());
    }

    #[test]
    fn numeric_strings_normalize() {
        assert_eq!(ResourceId::from("1").path_segment(), "1");
        assert_eq!(ResourceId::from("007").path_segment(), "7");
        assert_eq!(ResourceId::from(" 42 ").path_segment(), "42");
        assert_eq!(ResourceId::from("1e3").path_segment(), "1000");
    }

    #[test]
    fn fractional_strings_keep_their_fraction() {
        assert_eq!(ResourceId::from("1.5").path_segment(), "1.5");
    }

    #[test]
    fn negative_zero_renders_plain_zero() {
        assert_eq!(ResourceId::from("-0").path_segment(), "0");
    }

    #[test]
    fn non_numeric_strings_become_nan() {
        assert_eq!(ResourceId::from("foobar").path_segment(), "NaN");
        assert_eq!(ResourceId::from("").path_segment(), "NaN");
        assert_eq!(ResourceId::from("12abc").path_segment(), "NaN");
        assert_eq!(ResourceId::from("1,000").path_segment(), "NaN");
    }

    #[test]
    fn non_finite_forms_become_nan() {
        assert_eq!(ResourceId::from("inf").path_segment(), "NaN");
        assert_eq!(ResourceId::from("NaN").path_segment(), "NaN");
    }
}
