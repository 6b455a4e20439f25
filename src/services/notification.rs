//! Notification message rendering.
//!
//! One template per submission kind, Norwegian-market copy. Optional fields
//! are omitted from the output entirely; the price-quote template renders
//! absent informational scalars as "Ingen" and keeps list labels even when
//! the list is empty. The HTML part is sanitized as a whole so user-supplied
//! values cannot smuggle markup into the notification.

use crate::domain::submission::{CanonicalSubmission, SubmissionKind};
use crate::notifier::EmailMessage;

/// Renders the notification for one submission, addressed to the configured
/// destination.
pub fn render(kind: SubmissionKind, submission: &CanonicalSubmission, to: &str) -> EmailMessage {
    let (subject, text_body, html_body) = match kind {
        SubmissionKind::Contact => render_contact(submission),
        SubmissionKind::Calculator => render_calculator(submission),
        SubmissionKind::Newsletter => render_newsletter(submission),
        SubmissionKind::PriceQuote => render_price_quote(submission),
    };

    EmailMessage {
        to: to.to_string(),
        subject,
        text_body,
        html_body: ammonia::clean(&html_body),
    }
}

fn render_contact(s: &CanonicalSubmission) -> (String, String, String) {
    let rows = present_rows(&[
        ("Navn", &s.name),
        ("E-post", &s.email),
        ("Telefon", &s.phone),
        ("Bedrift", &s.company),
        ("Org.nr", &s.org_number),
        ("Tjeneste", &s.service_requested),
    ]);

    let mut text = String::from("Ny kontaktforespørsel\n\n");
    text.push_str(&text_rows(&rows));
    let mut html = String::from("<h2>Ny kontaktforespørsel</h2>\n");
    html.push_str(&html_rows(&rows));

    if let Some(message) = &s.message {
        text.push_str("\nMelding:\n");
        text.push_str(message);
        text.push('\n');
        html.push_str("<h3>Melding:</h3>\n<p>");
        html.push_str(&message.replace('\n', "<br>"));
        html.push_str("</p>\n");
    }

    text.push_str("\nDenne meldingen ble sendt fra kontaktskjemaet.\n");

    ("Ny kontaktforespørsel".to_string(), text, html)
}

fn render_calculator(s: &CanonicalSubmission) -> (String, String, String) {
    let rows = present_rows(&[
        ("Navn", &s.name),
        ("E-post", &s.email),
        ("Telefon", &s.phone),
        ("Prosjekttype", &s.project_type),
        ("Estimert pris", &s.estimated_price),
    ]);

    (
        "Ny prisberegning".to_string(),
        format!("Ny prisberegning\n\n{}", text_rows(&rows)),
        format!("<h2>Ny prisberegning</h2>\n{}", html_rows(&rows)),
    )
}

fn render_newsletter(s: &CanonicalSubmission) -> (String, String, String) {
    let rows = present_rows(&[("Navn", &s.name), ("E-post", &s.email)]);

    (
        "Ny nyhetsbrev-abonnement".to_string(),
        format!("Ny nyhetsbrev-abonnement\n\n{}", text_rows(&rows)),
        format!("<h2>Ny nyhetsbrev-abonnement</h2>\n{}", html_rows(&rows)),
    )
}

fn render_price_quote(s: &CanonicalSubmission) -> (String, String, String) {
    let name = s.name.clone().unwrap_or_default();
    let subject = format!("Nytt prisforslag fra {name}");

    let quote_rows = vec![
        ("Type", or_ingen(&s.site_type)),
        (
            "Antall sider",
            s.page_count
                .map(|count| count.to_string())
                .unwrap_or_else(|| "Ingen".to_string()),
        ),
        ("Designpreferanser", s.design_preferences.join(", ")),
        ("Integrasjoner", s.integrations.join(", ")),
        ("Budsjett", or_ingen(&s.budget_band)),
        ("Ekstra opplysninger", or_ingen(&s.extra_notes)),
    ];
    let contact_rows = present_rows(&[
        ("Navn", &s.name),
        ("Bedrift", &s.company),
        ("E-post", &s.email),
        ("Telefon", &s.phone),
    ]);

    let text = format!(
        "Nytt prisforslag\n\n{}\nKontaktinformasjon\n{}",
        text_rows(&quote_rows),
        text_rows(&contact_rows)
    );
    let html = format!(
        "<h2>Nytt prisforslag</h2>\n{}<hr>\n<h3>Kontaktinformasjon</h3>\n{}",
        html_rows(&quote_rows),
        html_rows(&contact_rows)
    );

    (subject, text, html)
}

fn or_ingen(value: &Option<String>) -> String {
    value.clone().unwrap_or_else(|| "Ingen".to_string())
}

fn present_rows(
    candidates: &[(&'static str, &Option<String>)],
) -> Vec<(&'static str, String)> {
    candidates
        .iter()
        .filter_map(|(label, value)| value.as_ref().map(|v| (*label, v.clone())))
        .collect()
}

fn text_rows(rows: &[(&'static str, String)]) -> String {
    rows.iter()
        .map(|(label, value)| format!("{label}: {value}\n"))
        .collect()
}

fn html_rows(rows: &[(&'static str, String)]) -> String {
    rows.iter()
        .map(|(label, value)| format!("<p><strong>{label}:</strong> {value}</p>\n"))
        .collect()
}
