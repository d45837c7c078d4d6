use crate::domain::model::{InterestForm, ReservationForm};
use chrono::Datelike;

/// Rendered email content: HTML part plus its plain-text alternative.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailBody {
    pub html: String,
    pub text: String,
}

/// Escapes user-supplied text for interpolation into HTML markup.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escapes, then turns newlines into `<br>` so free-text fields keep
/// their line structure in the HTML body.
pub fn escape_multiline(input: &str) -> String {
    escape_html(input).replace("\r\n", "\n").replace('\n', "<br>\n")
}

const EMAIL_STYLE: &str = "\
body { font-family: 'Open Sans', Arial, sans-serif; color: #2d3748; line-height: 1.6; }\n\
.container { max-width: 600px; margin: 0 auto; padding: 20px; background-color: #f9f9f9; border-radius: 10px; }\n\
.header { background: linear-gradient(135deg, #1b5e20 0%, #388e3c 100%); color: white; padding: 20px; border-radius: 5px; text-align: center; margin-bottom: 20px; }\n\
.content { background-color: white; padding: 20px; border-radius: 5px; margin-bottom: 20px; }\n\
.field { margin-bottom: 15px; border-bottom: 1px solid #e0e0e0; padding-bottom: 15px; }\n\
.label { font-weight: 600; color: #1b5e20; margin-bottom: 5px; }\n\
.value { color: #555; word-break: break-word; }\n\
.footer { text-align: center; color: #999; font-size: 12px; padding-top: 20px; border-top: 1px solid #e0e0e0; }";

fn shell(header: &str, content: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset='UTF-8'>\n<style>\n{EMAIL_STYLE}\n</style>\n</head>\n<body>\n<div class='container'>\n{header}\n{content}\n</div>\n</body>\n</html>"
    )
}

fn field_row(label: &str, value: &str) -> String {
    format!("<div class='field'><div class='label'>{label}</div><div class='value'>{value}</div></div>")
}

pub fn reservation_notification(form: &ReservationForm) -> EmailBody {
    let email = escape_html(&form.email);
    let rows = [
        field_row("Full Name", &escape_html(&form.full_name)),
        field_row("Email", &format!("<a href='mailto:{email}'>{email}</a>")),
        field_row("Phone", &escape_html(&form.phone)),
        field_row("Reservation Date", &escape_html(&form.date)),
        field_row("Service", &escape_html(&form.service)),
        field_row("Selected Doctor", &escape_html(&form.doctor)),
        field_row("Notes", &escape_multiline(&form.notes)),
    ]
    .join("\n");

    let header = "<div class='header'>\n<h2>New Reservation Request</h2>\n<p>A user submitted a reservation via the website.</p>\n</div>";
    let content = format!(
        "<div class='content'>\n{rows}\n</div>\n<div class='footer'><p>This is an automated email from your contact form.</p></div>"
    );

    let text = format!(
        "New Reservation Request\n\nFull Name: {}\nEmail: {}\nPhone: {}\nReservation Date: {}\nService: {}\nSelected Doctor: {}\nNotes: {}\n",
        form.full_name, form.email, form.phone, form.date, form.service, form.doctor, form.notes
    );

    EmailBody {
        html: shell(header, &content),
        text,
    }
}

pub fn interest_notification(form: &InterestForm) -> EmailBody {
    let email = escape_html(&form.email);
    let interest_label = form.interests.join(", ");
    let rows = [
        field_row("Full Name", &escape_html(&form.full_name)),
        field_row("Email", &format!("<a href='mailto:{email}'>{email}</a>")),
        field_row("Interests", &escape_html(&interest_label)),
        field_row("Message", &escape_multiline(&form.message)),
    ]
    .join("\n");

    let header = "<div class='header'>\n<h2>New Interest Submission</h2>\n<p>A visitor expressed interest via the website.</p>\n</div>";
    let content = format!(
        "<div class='content'>\n{rows}\n</div>\n<div class='footer'><p>This is an automated email from your contact form.</p></div>"
    );

    let text = format!(
        "New Interest Submission\n\nFull Name: {}\nEmail: {}\nInterests: {}\nMessage: {}\n",
        form.full_name, form.email, interest_label, form.message
    );

    EmailBody {
        html: shell(header, &content),
        text,
    }
}

pub fn confirmation(full_name: &str, company_name: &str, website_url: Option<&str>) -> EmailBody {
    let name = escape_html(full_name);
    let company = escape_html(company_name);
    let year = chrono::Utc::now().year();

    let header = format!("<div class='header'>\n<h2>Thank You, {name}!</h2>\n</div>");
    let website = website_url
        .map(|url| format!("\n<p><a href='{url}'>Visit our website</a></p>"))
        .unwrap_or_default();
    let content = format!(
        "<div class='content'>\n\
         <p>Thank you for reaching out to {company}. We have received your message and will get back to you as soon as possible.</p>\n\
         <p>Our team will review your inquiry and contact you within 24-48 hours.</p>\n\
         <p>Best regards,<br><strong>{company} Team</strong></p>\n\
         </div>\n\
         <div class='footer'>\n<p>&copy; {year} {company}. All rights reserved.</p>{website}\n</div>"
    );

    let text = format!(
        "Thank You, {full_name}!\n\nThank you for reaching out to {company_name}. We have received your message and will get back to you as soon as possible.\n\nOur team will review your inquiry and contact you within 24-48 hours.\n\nBest regards,\n{company_name} Team\n"
    );

    EmailBody {
        html: shell(&header, &content),
        text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html_neutralizes_markup() {
        assert_eq!(
            escape_html("<script>alert('x')</script>"),
            "&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt;"
        );
        assert_eq!(escape_html("Tom & \"Jerry\""), "Tom &amp; &quot;Jerry&quot;");
    }

    #[test]
    fn test_escape_multiline_converts_newlines() {
        assert_eq!(escape_multiline("a\nb"), "a<br>\nb");
        assert_eq!(escape_multiline("a\r\nb"), "a<br>\nb");
        // escaping happens before the break insertion
        assert_eq!(escape_multiline("<b>\nx"), "&lt;b&gt;<br>\nx");
    }

    #[test]
    fn test_reservation_notification_escapes_user_text() {
        let form = ReservationForm {
            full_name: "Jane <script>".to_string(),
            email: "jane@example.com".to_string(),
            phone: "+1 555-0100".to_string(),
            date: "2026-09-01".to_string(),
            service: "consultation".to_string(),
            doctor: String::new(),
            notes: "line one\nline two".to_string(),
        };
        let body = reservation_notification(&form);
        assert!(body.html.contains("Jane &lt;script&gt;"));
        assert!(!body.html.contains("Jane <script>"));
        assert!(body.html.contains("line one<br>"));
        assert!(body.html.contains("mailto:jane@example.com"));
        assert!(body.text.contains("Full Name: Jane <script>"));
    }

    #[test]
    fn test_interest_notification_joins_interest_labels() {
        let form = InterestForm {
            full_name: "Jane".to_string(),
            email: "jane@example.com".to_string(),
            interests: vec!["training".to_string(), "nursing".to_string()],
            message: String::new(),
        };
        let body = interest_notification(&form);
        assert!(body.html.contains("training, nursing"));
        assert!(body.html.contains("New Interest Submission"));
        assert!(body.text.contains("Interests: training, nursing"));
    }

    #[test]
    fn test_confirmation_carries_company_identity() {
        let body = confirmation("Jane", "Pash Medical Solutions", Some("https://example.com"));
        assert!(body.html.contains("Thank You, Jane!"));
        assert!(body.html.contains("Pash Medical Solutions Team"));
        assert!(body.html.contains("https://example.com"));
        assert!(body.text.contains("Thank You, Jane!"));

        let no_site = confirmation("Jane", "Pash Medical Solutions", None);
        assert!(!no_site.html.contains("Visit our website"));
    }
}
