use url::Url;

use factboard_common::{Category, NewFact, ValidationFailure, MAX_TEXT_LEN};

/// Validate a candidate fact. Pure: no side effects, no requests.
///
/// All three checks run so the failure lists every unmet condition, surfaced
/// to the user as one combined notice. On success returns the typed insert
/// payload.
pub fn validate(text: &str, source: &str, category: &str) -> Result<NewFact, ValidationFailure> {
    let mut reasons = Vec::new();

    if text.is_empty() {
        reasons.push("text must not be empty".to_string());
    } else if text.chars().count() > MAX_TEXT_LEN {
        reasons.push(format!("text must be at most {MAX_TEXT_LEN} characters"));
    }

    if !is_http_url(source) {
        reasons.push("source must be a valid http or https URL".to_string());
    }

    let parsed_category = category.parse::<Category>();
    if parsed_category.is_err() {
        reasons.push("category must be one of the known categories".to_string());
    }

    match parsed_category {
        Ok(category) if reasons.is_empty() => Ok(NewFact {
            text: text.to_string(),
            source: source.to_string(),
            category,
        }),
        _ => Err(ValidationFailure { reasons }),
    }
}

/// True iff `s` parses as an absolute URL with scheme http or https.
fn is_http_url(s: &str) -> bool {
    match Url::parse(s) {
        Ok(url) => url.scheme() == "http" || url.scheme() == "https",
        Err(_) => false,
    }
}
