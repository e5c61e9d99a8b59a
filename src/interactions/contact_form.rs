use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use log::{debug, info};
use once_cell::sync::Lazy;
use regex::Regex;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{
    Document, Element, HtmlButtonElement, HtmlFormElement, HtmlInputElement, HtmlSelectElement,
    HtmlTextAreaElement,
};

use crate::config;
use crate::dom::{self, Listener};
use crate::error::InitError;

// Deliberately loose: anything@anything.anything with no whitespace.
static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Service,
    Message,
}

impl Field {
    pub const REQUIRED: [Field; 4] = [Field::Name, Field::Email, Field::Service, Field::Message];

    pub fn element_id(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Service => "service",
            Field::Message => "message",
        }
    }

    fn selector(self) -> &'static str {
        match self {
            Field::Name => "#name",
            Field::Email => "#email",
            Field::Service => "#service",
            Field::Message => "#message",
        }
    }

    /// Event that re-checks the field outside of a submit.
    pub fn recheck_event(self) -> &'static str {
        match self {
            Field::Service => "change",
            _ => "blur",
        }
    }

    pub fn check(self, value: &str) -> Validity {
        match self {
            // Select values are compared raw: "" is the placeholder option.
            Field::Service if value.is_empty() => Validity::Empty,
            Field::Service => Validity::Valid,
            _ if value.trim().is_empty() => Validity::Empty,
            Field::Email if !is_valid_email(value.trim()) => Validity::InvalidFormat,
            _ => Validity::Valid,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Validity {
    Valid,
    Empty,
    InvalidFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldReport {
    pub field: Field,
    pub validity: Validity,
}

impl FieldReport {
    pub fn is_valid(&self) -> bool {
        self.validity == Validity::Valid
    }

    /// Text shown under the field, `None` when it passed.
    pub fn message(&self) -> Option<&'static str> {
        match (self.field, self.validity) {
            (_, Validity::Valid) => None,
            (Field::Name, _) => Some("Name is required"),
            (Field::Email, Validity::Empty) => Some("Email is required"),
            (Field::Email, Validity::InvalidFormat) => Some("Please enter a valid email"),
            (Field::Service, _) => Some("Please select a service"),
            (Field::Message, _) => Some("Message is required"),
        }
    }
}

/// Snapshot of the contact form's values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub service: String,
    pub message: String,
}

impl ContactForm {
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Service => &self.service,
            Field::Message => &self.message,
        }
    }

    /// One report per required field, in form order. Phone is optional.
    pub fn validate(&self) -> Vec<FieldReport> {
        Field::REQUIRED
            .iter()
            .map(|&field| FieldReport {
                field,
                validity: field.check(self.value(field)),
            })
            .collect()
    }

    pub fn is_submittable(&self) -> bool {
        self.validate().iter().all(FieldReport::is_valid)
    }
}

/// The phase a submit moves to, or `None` when the form is invalid or a send
/// is already in flight.
pub fn try_submit(form: &ContactForm, phase: SubmitPhase) -> Option<SubmitPhase> {
    if !form.is_submittable() {
        return None;
    }
    phase.begin()
}

/// Blur/change re-checks only ever clear an error, never raise one.
pub fn recheck_clears(field: Field, value: &str) -> bool {
    field.check(value) == Validity::Valid
}

/// Simulated submission lifecycle of the submit button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Sending,
    Sent,
}

impl SubmitPhase {
    /// Starting is only possible from `Idle`.
    pub fn begin(self) -> Option<SubmitPhase> {
        match self {
            SubmitPhase::Idle => Some(SubmitPhase::Sending),
            _ => None,
        }
    }

    pub fn advance(self) -> SubmitPhase {
        match self {
            SubmitPhase::Idle => SubmitPhase::Idle,
            SubmitPhase::Sending => SubmitPhase::Sent,
            SubmitPhase::Sent => SubmitPhase::Idle,
        }
    }

    /// How long the phase is shown before advancing.
    pub fn hold_ms(self) -> Option<u32> {
        match self {
            SubmitPhase::Idle => None,
            SubmitPhase::Sending => Some(config::contact::SENDING_MS),
            SubmitPhase::Sent => Some(config::contact::SENT_MS),
        }
    }

    pub fn button_disabled(self) -> bool {
        self != SubmitPhase::Idle
    }

    fn button_html(self) -> Option<&'static str> {
        match self {
            SubmitPhase::Idle => None,
            SubmitPhase::Sending => Some(SENDING_HTML),
            SubmitPhase::Sent => Some(SENT_HTML),
        }
    }
}

const SENDING_HTML: &str = r#"
        <svg class="spinner" viewBox="0 0 50 50">
          <circle cx="25" cy="25" r="20" fill="none" stroke="currentColor" stroke-width="5"></circle>
        </svg>
        Sending...
      "#;

const SENT_HTML: &str = r#"
          <svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
            <path d="M22 11.08V12a10 10 0 1 1-5.93-9.14"></path>
            <polyline points="22 4 12 14.01 9 11.01"></polyline>
          </svg>
          Message Sent!
        "#;

fn element_value(el: &Element) -> String {
    if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
        input.value()
    } else if let Some(select) = el.dyn_ref::<HtmlSelectElement>() {
        select.value()
    } else if let Some(area) = el.dyn_ref::<HtmlTextAreaElement>() {
        area.value()
    } else {
        String::new()
    }
}

fn show_error(document: &Document, input: &Element, message: &str) {
    let Some(group) = input.closest(".form-group").ok().flatten() else {
        return;
    };
    let existing = group.query_selector(".error-message").ok().flatten();
    let label = match existing {
        Some(label) => label,
        None => match document.create_element("small") {
            Ok(label) => {
                let _ = group.append_child(&label);
                label
            }
            Err(_) => return,
        },
    };
    label.set_class_name("error-message");
    label.set_text_content(Some(message));
    dom::add_class(&group, "error");
}

fn show_success(input: &Element) {
    let Some(group) = input.closest(".form-group").ok().flatten() else {
        return;
    };
    if let Some(label) = group.query_selector(".error-message").ok().flatten() {
        label.remove();
    }
    dom::remove_class(&group, "error");
}

#[derive(Clone)]
struct Inputs {
    name: Element,
    email: Element,
    phone: Option<Element>,
    service: Element,
    message: Element,
}

impl Inputs {
    fn find(document: &Document) -> Result<Self, InitError> {
        let by_id = |field: Field| {
            document
                .get_element_by_id(field.element_id())
                .ok_or(InitError::MissingElement(field.selector()))
        };
        Ok(Self {
            name: by_id(Field::Name)?,
            email: by_id(Field::Email)?,
            phone: document.get_element_by_id("phone"),
            service: by_id(Field::Service)?,
            message: by_id(Field::Message)?,
        })
    }

    fn element(&self, field: Field) -> &Element {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Service => &self.service,
            Field::Message => &self.message,
        }
    }

    fn read(&self) -> ContactForm {
        ContactForm {
            name: element_value(&self.name),
            email: element_value(&self.email),
            phone: self.phone.as_ref().map(element_value).unwrap_or_default(),
            service: element_value(&self.service),
            message: element_value(&self.message),
        }
    }
}

async fn run_submission(
    document: Document,
    form: HtmlFormElement,
    button: HtmlButtonElement,
    phase: Rc<Cell<SubmitPhase>>,
) {
    let original_html = button.inner_html();
    let mut current = phase.get();

    while let (Some(html), Some(hold)) = (current.button_html(), current.hold_ms()) {
        button.set_inner_html(html);
        button.set_disabled(current.button_disabled());
        TimeoutFuture::new(hold).await;
        current = current.advance();
        phase.set(current);
    }

    form.reset();
    button.set_inner_html(&original_html);
    button.set_disabled(current.button_disabled());
    for group in dom::query_all(&document, ".form-group") {
        dom::remove_class(&group, "active");
    }
    info!("contact form reset after simulated send");
}

pub struct ContactFormHandle {
    _listeners: Vec<Listener>,
}

pub fn init(document: &Document) -> Result<ContactFormHandle, InitError> {
    let form = document
        .get_element_by_id("contactForm")
        .and_then(|el| el.dyn_into::<HtmlFormElement>().ok())
        .ok_or(InitError::MissingElement("#contactForm"))?;
    let inputs = Inputs::find(document)?;
    let button = form
        .query_selector("button[type=\"submit\"]")?
        .and_then(|el| el.dyn_into::<HtmlButtonElement>().ok())
        .ok_or(InitError::MissingElement("button[type=\"submit\"]"))?;

    let phase = Rc::new(Cell::new(SubmitPhase::Idle));
    let mut listeners = Vec::new();

    {
        let document = document.clone();
        let inputs = inputs.clone();
        let submit_form = form.clone();
        listeners.push(Listener::new(&form, "submit", move |event| {
            event.prevent_default();

            let values = inputs.read();
            let reports = values.validate();
            for report in &reports {
                let input = inputs.element(report.field);
                match report.message() {
                    Some(message) => show_error(&document, input, message),
                    None => show_success(input),
                }
            }

            let Some(next) = try_submit(&values, phase.get()) else {
                let invalid = reports.iter().filter(|r| !r.is_valid()).count();
                debug!("contact form not sent: {} invalid field(s)", invalid);
                return;
            };
            phase.set(next);
            spawn_local(run_submission(
                document.clone(),
                submit_form.clone(),
                button.clone(),
                phase.clone(),
            ));
        })?);
    }

    for field in Field::REQUIRED {
        let input = inputs.element(field).clone();
        let target = input.clone();
        listeners.push(Listener::new(&target, field.recheck_event(), move |_| {
            if recheck_clears(field, &element_value(&input)) {
                show_success(&input);
            }
        })?);
    }

    Ok(ContactFormHandle {
        _listeners: listeners,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        ContactForm {
            name: "Jane".into(),
            email: "jane@x.com".into(),
            phone: String::new(),
            service: "branding".into(),
            message: "Hi".into(),
        }
    }

    #[test]
    fn email_pattern_accepts_minimal_address() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("first.last@sub.example.org"));
    }

    #[test]
    fn email_pattern_rejects_malformed_addresses() {
        for bad in ["", "plainaddress", "a@b", "a@@b.com", "a b@c.com", "@b.com"] {
            assert!(!is_valid_email(bad), "{bad:?} should be rejected");
        }
    }

    #[test]
    fn complete_form_is_submittable() {
        let form = filled();
        assert!(form.is_submittable());
        assert!(form.validate().iter().all(|r| r.message().is_none()));
    }

    #[test]
    fn each_missing_field_blocks_submission() {
        for field in Field::REQUIRED {
            let mut form = filled();
            match field {
                Field::Name => form.name = "   ".into(),
                Field::Email => form.email = String::new(),
                Field::Service => form.service = String::new(),
                Field::Message => form.message = "\n\t".into(),
            }
            assert!(!form.is_submittable(), "{field:?} left empty");
            let report = form.validate().into_iter().find(|r| r.field == field).unwrap();
            assert_eq!(report.validity, Validity::Empty);
        }
    }

    #[test]
    fn malformed_email_reports_format_error() {
        let form = ContactForm {
            email: "jane@x".into(),
            ..filled()
        };
        let report = form.validate()[1];
        assert_eq!(report.field, Field::Email);
        assert_eq!(report.validity, Validity::InvalidFormat);
        assert_eq!(report.message(), Some("Please enter a valid email"));
        assert!(!form.is_submittable());
    }

    #[test]
    fn email_is_trimmed_before_matching() {
        assert_eq!(Field::Email.check("  jane@x.com  "), Validity::Valid);
    }

    #[test]
    fn phone_is_never_required() {
        let form = ContactForm {
            phone: "not a number".into(),
            ..filled()
        };
        assert!(form.is_submittable());
    }

    #[test]
    fn empty_messages_match_fields() {
        let empty = ContactForm::default();
        let messages: Vec<_> = empty.validate().iter().filter_map(FieldReport::message).collect();
        assert_eq!(
            messages,
            vec![
                "Name is required",
                "Email is required",
                "Please select a service",
                "Message is required",
            ]
        );
    }

    #[test]
    fn service_and_blur_events() {
        assert_eq!(Field::Service.recheck_event(), "change");
        assert_eq!(Field::Name.recheck_event(), "blur");
        assert_eq!(Field::Message.element_id(), "message");
    }

    #[test]
    fn submit_cycle_runs_idle_sending_sent_idle() {
        let start = SubmitPhase::default();
        let sending = start.begin().unwrap();
        assert_eq!(sending, SubmitPhase::Sending);
        assert_eq!(sending.hold_ms(), Some(1500));
        assert!(sending.button_disabled());

        let sent = sending.advance();
        assert_eq!(sent, SubmitPhase::Sent);
        assert_eq!(sent.hold_ms(), Some(2000));
        assert!(sent.button_disabled());

        let back = sent.advance();
        assert_eq!(back, SubmitPhase::Idle);
        assert_eq!(back.hold_ms(), None);
        assert!(!back.button_disabled());
    }

    #[test]
    fn invalid_form_stays_idle_on_submit() {
        let form = ContactForm {
            email: "jane@x".into(),
            ..filled()
        };
        assert_eq!(try_submit(&form, SubmitPhase::Idle), None);
        assert_eq!(try_submit(&ContactForm::default(), SubmitPhase::Idle), None);
    }

    #[test]
    fn valid_form_starts_sending() {
        assert_eq!(try_submit(&filled(), SubmitPhase::Idle), Some(SubmitPhase::Sending));
        assert_eq!(try_submit(&filled(), SubmitPhase::Sending), None);
        assert_eq!(try_submit(&filled(), SubmitPhase::Sent), None);
    }

    #[test]
    fn recheck_never_raises_an_error() {
        assert!(!recheck_clears(Field::Email, "a@b"));
        assert!(!recheck_clears(Field::Name, "  "));
        assert!(!recheck_clears(Field::Service, ""));
        assert!(!recheck_clears(Field::Message, ""));

        assert!(recheck_clears(Field::Email, "a@b.co"));
        assert!(recheck_clears(Field::Name, "Jane"));
        assert!(recheck_clears(Field::Service, "web"));
        assert!(recheck_clears(Field::Message, "Hi"));
    }

    #[test]
    fn submit_cannot_restart_mid_flight() {
        assert_eq!(SubmitPhase::Sending.begin(), None);
        assert_eq!(SubmitPhase::Sent.begin(), None);
    }
}
