//! Payload normalization for form submissions.
//!
//! The public forms post in several shapes: JSON from the React widgets,
//! `multipart/form-data` from plain HTML forms, urlencoded from older embeds,
//! and with either English or Norwegian field names. This module parses any of
//! those into a flat key/value payload and resolves each logical field through
//! an ordered synonym-key list into a [`CanonicalSubmission`].

use actix_multipart::Multipart;
use actix_web::error::PayloadError;
use actix_web::http::header::{self, HeaderMap};
use actix_web::web::Bytes;
use futures_util::{StreamExt, stream};
use serde_json::{Map, Value};

use crate::domain::submission::{CanonicalSubmission, SubmissionKind};
use crate::forms::FormError;

/// Synonym keys per logical field, highest priority first. The English key
/// wins whenever both spellings carry a non-empty value.
const NAME_KEYS: &[&str] = &["name", "navn"];
const EMAIL_KEYS: &[&str] = &["email", "epost"];
const PHONE_KEYS: &[&str] = &["phone", "telefon"];
const MESSAGE_KEYS: &[&str] = &["message", "ekstra"];
const COMPANY_KEYS: &[&str] = &["company", "bedrift"];
const ORG_NUMBER_KEYS: &[&str] = &["orgNumber", "orgnr"];
const SERVICE_KEYS: &[&str] = &["serviceRequested", "tjeneste"];
const PROJECT_TYPE_KEYS: &[&str] = &["projectType"];
const ESTIMATED_PRICE_KEYS: &[&str] = &["estimatedPrice"];
const SITE_TYPE_KEYS: &[&str] = &["siteType", "type"];
const PAGE_COUNT_KEYS: &[&str] = &["pageCount", "pages"];
const DESIGN_KEYS: &[&str] = &["designPreferences", "design"];
const INTEGRATION_KEYS: &[&str] = &["integrations"];
const BUDGET_KEYS: &[&str] = &["budgetBand", "budget"];
const EXTRA_NOTES_KEYS: &[&str] = &["extraNotes", "ekstra"];
/// Discriminator used by the generic send endpoint.
pub const KIND_KEYS: &[&str] = &["type"];

/// A parsed submission body: a flat map of field name to value, before any
/// language normalization.
#[derive(Debug, Default)]
pub struct RawPayload(Map<String, Value>);

impl RawPayload {
    /// Resolves a text field against an ordered synonym-key list. Empty
    /// strings count as absent; values pass through untransformed.
    pub fn text(&self, keys: &[&str]) -> Option<String> {
        keys.iter().find_map(|key| match self.0.get(*key) {
            Some(Value::String(s)) if !s.is_empty() => Some(s.clone()),
            Some(Value::Number(n)) => Some(n.to_string()),
            _ => None,
        })
    }

    /// Resolves an integer field, accepting either a JSON number or a numeric
    /// string (form transports only carry strings).
    pub fn integer(&self, keys: &[&str]) -> Option<i64> {
        keys.iter().find_map(|key| match self.0.get(*key) {
            Some(Value::Number(n)) => n.as_i64(),
            Some(Value::String(s)) => s.trim().parse().ok(),
            _ => None,
        })
    }

    /// Resolves a list field. A scalar string is treated as a single-element
    /// list; a missing field resolves to an empty list.
    pub fn list(&self, keys: &[&str]) -> Vec<String> {
        keys.iter()
            .find_map(|key| match self.0.get(*key) {
                Some(Value::Array(items)) => Some(
                    items
                        .iter()
                        .filter_map(|item| item.as_str())
                        .map(str::to_owned)
                        .collect(),
                ),
                Some(Value::String(s)) if !s.is_empty() => Some(vec![s.clone()]),
                _ => None,
            })
            .unwrap_or_default()
    }
}

/// Parses a request body into a [`RawPayload`] according to its declared
/// `Content-Type`. A JSON or multipart body that does not parse, or a missing
/// or unknown content type, falls back to form-data (urlencoded) parsing
/// before the payload is rejected as malformed.
pub async fn parse_payload(headers: &HeaderMap, body: Bytes) -> Result<RawPayload, FormError> {
    match declared_content_type(headers) {
        Some(content_type) if content_type.starts_with("application/json") => {
            match serde_json::from_slice::<Value>(&body) {
                Ok(Value::Object(map)) => Ok(RawPayload(map)),
                _ => parse_urlencoded(&body),
            }
        }
        Some(content_type) if content_type.starts_with("multipart/form-data") => {
            match parse_multipart(headers, body.clone()).await {
                Ok(payload) => Ok(payload),
                Err(_) => parse_urlencoded(&body),
            }
        }
        _ => parse_urlencoded(&body),
    }
}

fn declared_content_type(headers: &HeaderMap) -> Option<&str> {
    headers.get(header::CONTENT_TYPE)?.to_str().ok()
}

fn parse_urlencoded(body: &[u8]) -> Result<RawPayload, FormError> {
    let pairs: Vec<(String, String)> =
        serde_html_form::from_bytes(body).map_err(|_| FormError::MalformedPayload)?;

    let mut map = Map::new();
    for (key, value) in pairs {
        insert_value(&mut map, key, value);
    }
    Ok(RawPayload(map))
}

async fn parse_multipart(headers: &HeaderMap, body: Bytes) -> Result<RawPayload, FormError> {
    let payload = stream::once(async move { Ok::<Bytes, PayloadError>(body) });
    let mut multipart = Multipart::new(headers, payload);

    let mut map = Map::new();
    while let Some(field) = multipart.next().await {
        let mut field = field.map_err(|_| FormError::MalformedPayload)?;
        let Some(name) = field.name().map(str::to_owned) else {
            continue;
        };

        let mut data = Vec::new();
        while let Some(chunk) = field.next().await {
            let chunk = chunk.map_err(|_| FormError::MalformedPayload)?;
            data.extend_from_slice(&chunk);
        }
        insert_value(&mut map, name, String::from_utf8_lossy(&data).into_owned());
    }
    Ok(RawPayload(map))
}

/// Repeated keys (checkbox groups) accumulate into a list value.
fn insert_value(map: &mut Map<String, Value>, key: String, value: String) {
    match map.get_mut(&key) {
        Some(Value::Array(items)) => items.push(Value::String(value)),
        Some(existing) => {
            let first = existing.take();
            *existing = Value::Array(vec![first, Value::String(value)]);
        }
        None => {
            map.insert(key, Value::String(value));
        }
    }
}

/// Builds the canonical record for one submission kind, collecting only the
/// fields that kind's form carries.
pub fn canonicalize(kind: SubmissionKind, raw: &RawPayload) -> CanonicalSubmission {
    let mut submission = CanonicalSubmission {
        name: raw.text(NAME_KEYS),
        email: raw.text(EMAIL_KEYS),
        ..CanonicalSubmission::default()
    };

    match kind {
        SubmissionKind::Contact => {
            submission.phone = raw.text(PHONE_KEYS);
            submission.message = raw.text(MESSAGE_KEYS);
            submission.company = raw.text(COMPANY_KEYS);
            submission.org_number = raw.text(ORG_NUMBER_KEYS);
            submission.service_requested = raw.text(SERVICE_KEYS);
        }
        SubmissionKind::Calculator => {
            submission.phone = raw.text(PHONE_KEYS);
            submission.project_type = raw.text(PROJECT_TYPE_KEYS);
            submission.estimated_price = raw.text(ESTIMATED_PRICE_KEYS);
        }
        SubmissionKind::Newsletter => {}
        SubmissionKind::PriceQuote => {
            submission.phone = raw.text(PHONE_KEYS);
            submission.company = raw.text(COMPANY_KEYS);
            submission.site_type = raw.text(SITE_TYPE_KEYS);
            submission.page_count = raw.integer(PAGE_COUNT_KEYS);
            submission.design_preferences = raw.list(DESIGN_KEYS);
            submission.integrations = raw.list(INTEGRATION_KEYS);
            submission.budget_band = raw.text(BUDGET_KEYS);
            submission.extra_notes = raw.text(EXTRA_NOTES_KEYS);
        }
    }

    submission
}

#[cfg(test)]
mod tests {
    use actix_web::http::header::{CONTENT_TYPE, HeaderValue};
    use serde_json::json;

    use super::*;

    fn json_payload(value: Value) -> RawPayload {
        match value {
            Value::Object(map) => RawPayload(map),
            _ => panic!("test payload must be a JSON object"),
        }
    }

    fn headers_with(content_type: Option<&str>) -> HeaderMap {
        let mut headers = HeaderMap::new();
        if let Some(value) = content_type {
            headers.insert(CONTENT_TYPE, HeaderValue::from_str(value).unwrap());
        }
        headers
    }

    #[test]
    fn norwegian_names_resolve_to_canonical_fields() {
        let raw = json_payload(json!({
            "navn": "Ola",
            "epost": "ola@example.no",
            "ekstra": "Hei"
        }));
        let submission = canonicalize(SubmissionKind::Contact, &raw);
        assert_eq!(submission.name.as_deref(), Some("Ola"));
        assert_eq!(submission.email.as_deref(), Some("ola@example.no"));
        assert_eq!(submission.message.as_deref(), Some("Hei"));
    }

    #[test]
    fn english_spelling_wins_when_both_present() {
        let raw = json_payload(json!({
            "name": "Ola",
            "navn": "Kari",
            "email": "ola@example.no",
            "epost": "kari@example.no",
            "message": "hello"
        }));
        let submission = canonicalize(SubmissionKind::Contact, &raw);
        assert_eq!(submission.name.as_deref(), Some("Ola"));
        assert_eq!(submission.email.as_deref(), Some("ola@example.no"));
    }

    #[test]
    fn empty_english_value_falls_back_to_norwegian() {
        let raw = json_payload(json!({"name": "", "navn": "Kari"}));
        let submission = canonicalize(SubmissionKind::Newsletter, &raw);
        assert_eq!(submission.name.as_deref(), Some("Kari"));
    }

    #[test]
    fn absent_fields_stay_unset() {
        let raw = json_payload(json!({"navn": "Ola"}));
        let submission = canonicalize(SubmissionKind::Contact, &raw);
        assert_eq!(submission.email, None);
        assert_eq!(submission.message, None);
        assert_eq!(submission.phone, None);
    }

    #[test]
    fn quote_fields_collect_lists_and_numbers() {
        let raw = json_payload(json!({
            "type": "Nettbutikk",
            "pages": 8,
            "design": ["Minimalistisk", "Moderne"],
            "integrations": [],
            "budget": "50-100k",
            "ekstra": "Haster",
            "navn": "Kari",
            "bedrift": "Kari AS",
            "epost": "kari@example.no",
            "telefon": "99887766"
        }));
        let submission = canonicalize(SubmissionKind::PriceQuote, &raw);
        assert_eq!(submission.site_type.as_deref(), Some("Nettbutikk"));
        assert_eq!(submission.page_count, Some(8));
        assert_eq!(submission.design_preferences.len(), 2);
        assert!(submission.integrations.is_empty());
        assert_eq!(submission.budget_band.as_deref(), Some("50-100k"));
        assert_eq!(submission.extra_notes.as_deref(), Some("Haster"));
        assert_eq!(submission.company.as_deref(), Some("Kari AS"));
        // the quote form's "type" is the site type, not a message field
        assert_eq!(submission.message, None);
    }

    #[test]
    fn page_count_accepts_numeric_strings() {
        let raw = json_payload(json!({"pages": "12"}));
        assert_eq!(raw.integer(PAGE_COUNT_KEYS), Some(12));
    }

    #[actix_web::test]
    async fn json_body_parses_as_object() {
        let headers = headers_with(Some("application/json"));
        let body = Bytes::from_static(b"{\"navn\":\"Ola\",\"epost\":\"ola@example.no\"}");
        let raw = parse_payload(&headers, body).await.unwrap();
        assert_eq!(raw.text(NAME_KEYS).as_deref(), Some("Ola"));
    }

    #[actix_web::test]
    async fn missing_content_type_falls_back_to_form_data() {
        let headers = headers_with(None);
        let body = Bytes::from_static(b"name=Ola&email=ola%40example.no&message=Hei");
        let raw = parse_payload(&headers, body).await.unwrap();
        assert_eq!(raw.text(EMAIL_KEYS).as_deref(), Some("ola@example.no"));
        assert_eq!(raw.text(MESSAGE_KEYS).as_deref(), Some("Hei"));
    }

    #[actix_web::test]
    async fn repeated_urlencoded_keys_accumulate() {
        let headers = headers_with(Some("application/x-www-form-urlencoded"));
        let body = Bytes::from_static(b"design=Minimalistisk&design=Moderne");
        let raw = parse_payload(&headers, body).await.unwrap();
        assert_eq!(
            raw.list(DESIGN_KEYS),
            vec!["Minimalistisk".to_string(), "Moderne".to_string()]
        );
    }

    #[actix_web::test]
    async fn multipart_body_parses_fields() {
        let boundary = "3d66cbe9a8e44f4b8b77f82a6cf8d0ce";
        let headers = headers_with(Some(&format!("multipart/form-data; boundary={boundary}")));
        let body = format!(
            "--{boundary}\r\n\
             Content-Disposition: form-data; name=\"navn\"\r\n\r\n\
             Ola\r\n\
             --{boundary}\r\n\
             Content-Disposition: form-data; name=\"epost\"\r\n\r\n\
             ola@example.no\r\n\
             --{boundary}\r\n\
             Content-Disposition: form-data; name=\"message\"\r\n\r\n\
             Hei der\r\n\
             --{boundary}--\r\n"
        );
        let raw = parse_payload(&headers, Bytes::from(body)).await.unwrap();
        assert_eq!(raw.text(NAME_KEYS).as_deref(), Some("Ola"));
        assert_eq!(raw.text(MESSAGE_KEYS).as_deref(), Some("Hei der"));
    }

    #[actix_web::test]
    async fn invalid_json_falls_back_before_failing() {
        let headers = headers_with(Some("application/json"));
        let body = Bytes::from_static(b"name=Ola&email=ola%40example.no");
        let raw = parse_payload(&headers, body).await.unwrap();
        assert_eq!(raw.text(NAME_KEYS).as_deref(), Some("Ola"));
    }
}
