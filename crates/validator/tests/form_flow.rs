//! End-to-end form scenarios: several fields, listeners, cross-field rules
//! and state restore.

use std::sync::{Arc, Mutex};

use formcheck_validator::prelude::*;
use pretty_assertions::assert_eq;
use tracing::Level;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(Level::TRACE)
        .try_init();
}

/// Records every notification as text.
#[derive(Default)]
struct Log {
    lines: Mutex<Vec<String>>,
}

impl Log {
    fn take(&self) -> Vec<String> {
        std::mem::take(&mut *self.lines.lock().unwrap())
    }
}

impl ValidationListener<str> for Log {
    fn on_success(&self, subject: &str) {
        self.lines.lock().unwrap().push(format!("{subject} ok"));
    }

    fn on_failure(&self, subject: &str, channel: Channel, rule: &SharedRule<str>) {
        self.lines
            .lock()
            .unwrap()
            .push(format!("{subject} {channel:?}: {}", rule.message()));
    }
}

struct SignUp {
    username: TextField,
    password: TextField,
    confirm: TextField,
    log: Arc<Log>,
}

fn sign_up() -> SignUp {
    let log = Arc::new(Log::default());

    let mut username = TextField::new("username");
    username.add_rule(not_empty("Required").unwrap().shared());
    username.add_rule(
        letter_or_number("Letters, digits and _ only", Case::CaseInsensitive, false, &['_'])
            .unwrap()
            .shared(),
    );
    username.add_rule(begins_with_uppercase_letter("Start with a capital").unwrap().shared());
    username.set_max_characters(12, "Too long").unwrap();
    username.add_listener(log.clone());

    let mut password = TextField::new("password");
    password.add_rule(min_length("At least 8 characters", 8).unwrap().shared());
    password.add_rule(no_whitespace("No spaces").unwrap().shared());
    password.add_listener(log.clone());

    let mut confirm = TextField::new("confirm");
    confirm.add_rule(equal("Passwords do not match", password.value()).unwrap().shared());
    confirm.add_listener(log.clone());

    SignUp {
        username,
        password,
        confirm,
        log,
    }
}

#[test]
fn every_failure_reaches_listeners() {
    init_tracing();
    let mut form = sign_up();

    form.username.set_text("bob smith");
    assert!(!form.username.validate());
    assert_eq!(form.username.error().unwrap().message, "Letters, digits and _ only");
    assert_eq!(
        form.log.take(),
        vec![
            "username Left: Letters, digits and _ only",
            "username Left: Start with a capital",
        ]
    );

    form.username.set_text("Bob_the_builder");
    assert!(!form.username.validate());
    assert!(form.username.error().is_none());
    assert_eq!(form.username.subject().right_error().unwrap().message, "Too long");
    assert_eq!(form.log.take(), vec!["username Right: Too long"]);

    form.username.set_text("Bob_42");
    assert!(form.username.validate());
    assert_eq!(form.log.take(), vec!["username ok"]);
}

#[test]
fn confirmation_follows_password_edits() {
    init_tracing();
    let mut form = sign_up();
    form.confirm.subject_mut().set_validate_on_value_change(true);

    form.password.set_text("correct horse");
    assert_eq!(form.confirm.set_text("correct horse"), Some(true));

    form.password.set_text("battery staple");
    assert!(!form.confirm.validate());
    assert_eq!(form.confirm.error().unwrap().message, "Passwords do not match");
}

#[test]
fn removed_listener_is_not_notified() {
    init_tracing();
    let mut form = sign_up();
    let handle: SharedListener<str> = form.log.clone();
    assert!(form.password.remove_listener(&handle));
    assert!(!form.password.remove_listener(&handle));

    form.password.set_text("short");
    assert!(!form.password.validate());
    assert!(form.log.take().is_empty());
}

#[test]
fn removed_rule_no_longer_fails() {
    let mut form = sign_up();
    let spaces = form.password.subject().rules().rules()[1].clone();
    form.password.set_text("with spaces inside");
    assert!(!form.password.validate());

    assert!(form.password.remove_rule(&spaces));
    assert!(form.password.validate());
}

#[test]
fn clear_error_hides_message_until_next_validation() {
    let mut form = sign_up();
    form.username.set_text("");
    assert!(!form.username.validate());
    form.username.clear_error();
    assert!(form.username.error().is_none());
    assert_eq!(form.username.subject().validity(), Validity::Unvalidated);

    assert!(!form.username.validate());
    assert_eq!(form.username.error().unwrap().message, "Required");
}

#[test]
fn restore_reproduces_outcome_and_message() {
    init_tracing();
    let mut form = sign_up();
    form.username.subject_mut().set_validate_on_focus_lost(true);
    form.username.set_text("alice");
    assert_eq!(form.username.focus_lost(), Some(false));
    let saved = form.username.save_subject_state().encode().unwrap();
    let message = form.username.error().cloned();

    let mut fresh = sign_up();
    fresh.username.set_text("alice");
    fresh
        .username
        .restore_subject_state(&SubjectState::decode(&saved).unwrap());

    assert!(fresh.username.subject().is_validated_on_focus_lost());
    assert!(!fresh.username.subject().is_validated_on_value_change());
    assert_eq!(fresh.username.subject().validity(), Validity::Invalid);
    assert_eq!(fresh.username.error().cloned(), message);
}

#[test]
fn selection_field_requires_a_choice() {
    let mut country = SelectionField::new(
        "country",
        vec!["France".to_owned(), "Japan".to_owned()],
    );
    country.add_rule(not_null::<String>("Choose a country").unwrap().shared());
    country.add_rule(
        custom("Not available yet", |choice: &Option<String>| {
            choice.as_deref() != Some("Japan")
        })
        .unwrap()
        .shared(),
    );

    assert!(!country.validate());
    assert_eq!(country.error().unwrap().message, "Choose a country");

    country.select(Some(1));
    assert!(!country.validate());
    assert_eq!(country.error().unwrap().message, "Not available yet");

    country.select(Some(0));
    assert!(country.validate());
}

#[test]
fn messages_resolved_from_a_source() {
    let mut messages = std::collections::HashMap::new();
    messages.insert("error.required".to_owned(), "Ce champ est obligatoire".to_owned());

    let message = Message::from_source(&messages, "error.required").unwrap();
    let rule = not_empty(message).unwrap();
    assert_eq!(rule.validate("").unwrap_err().message, "Ce champ est obligatoire");

    assert!(matches!(
        Message::from_source(&messages, "error.missing"),
        Err(InvalidArgument::UnresolvedMessage { .. })
    ));
}

#[test]
fn icons_travel_with_the_failure() {
    let rule = email("Invalid email").unwrap().with_icon("ic_error_email");
    let err = rule.validate("nope").unwrap_err();
    assert_eq!(err.icon, Some(Icon::new("ic_error_email")));
}
