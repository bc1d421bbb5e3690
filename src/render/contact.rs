//! Contact section markup.
//!
//! Placeholders and `required` flags come straight from the four form field
//! records; there is no validation beyond the native attribute.

use super::markup::escape_html;
use crate::models::{ContactConfig, FormField};

pub fn render_contact(contact: &ContactConfig) -> String {
    let fields = &contact.form_fields;
    format!(
        concat!(
            r#"<div class="row"><div class="contact-info-item padd-15"><div class="icon"><i class="fa fa-envelope"></i><h4>Email</h4><p>{email}</p></div></div></div>"#,
            r#"<div class="row"><form action="{action}" class="contact-form padd-15">"#,
            r#"<div class="row">"#,
            r#"<div class="form-item col-6 padd-15"><div class="form-group">{name}</div></div>"#,
            r#"<div class="form-item col-6 padd-15"><div class="form-group">{mail}</div></div>"#,
            r#"</div>"#,
            r#"<div class="row"><div class="form-item col-12 padd-15"><div class="form-group">{subject}</div></div></div>"#,
            r#"<div class="row"><div class="form-item col-12 padd-15"><div class="form-group">{message}</div></div></div>"#,
            r#"<div class="row"><div class="col-12 padd-15"><button type="submit" class="btn">Send Message</button></div></div>"#,
            r#"</form></div>"#,
        ),
        email = escape_html(&contact.email),
        action = escape_html(&contact.form_action),
        name = input("text", "name", &fields.name),
        mail = input("email", "email", &fields.email),
        subject = input("text", "subject", &fields.subject),
        message = textarea("message", &fields.message),
    )
}

fn input(kind: &str, name: &str, field: &FormField) -> String {
    format!(
        r#"<input type="{}" name="{}" class="form-control" placeholder="{}"{}>"#,
        kind,
        name,
        escape_html(&field.placeholder),
        required(field),
    )
}

fn textarea(name: &str, field: &FormField) -> String {
    format!(
        r#"<textarea class="form-control" name="{}" placeholder="{}"{}></textarea>"#,
        name,
        escape_html(&field.placeholder),
        required(field),
    )
}

fn required(field: &FormField) -> &'static str {
    if field.required { " required" } else { "" }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FormFields;

    fn field(placeholder: &str, required: bool) -> FormField {
        FormField { placeholder: placeholder.to_string(), required }
    }

    #[test]
    fn test_render_contact_fields() {
        let contact = ContactConfig {
            email: "ada@example.com".to_string(),
            form_action: "https://formspree.io/f/abc".to_string(),
            form_fields: FormFields {
                name: field("Name", true),
                email: field("Email", true),
                subject: field("Subject", false),
                message: field("Message \"here\"", true),
            },
        };
        let html = render_contact(&contact);

        assert!(html.contains("<p>ada@example.com</p>"));
        assert!(html.contains(r#"<form action="https://formspree.io/f/abc" class="contact-form padd-15">"#));
        assert!(html.contains(r#"<input type="text" name="name" class="form-control" placeholder="Name" required>"#));
        assert!(html.contains(r#"<input type="email" name="email" class="form-control" placeholder="Email" required>"#));
        assert!(html.contains(r#"<input type="text" name="subject" class="form-control" placeholder="Subject">"#));
        assert!(html.contains(
            r#"<textarea class="form-control" name="message" placeholder="Message &quot;here&quot;" required></textarea>"#
        ));
    }
}
