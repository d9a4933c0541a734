//! Sign-up form example for formcheck-validator
//!
//! Wires three text fields the way a host toolkit would: rules on each
//! field, a confirmation field that reads the password, a strength helper on
//! the password, and a listener that prints every failure.

use std::sync::Arc;

use formcheck_validator::prelude::*;

struct PrintListener;

impl ValidationListener<str> for PrintListener {
    fn on_success(&self, subject: &str) {
        println!("  ✓ {subject}");
    }

    fn on_failure(&self, subject: &str, channel: Channel, rule: &SharedRule<str>) {
        println!("  ✗ {subject} ({channel:?}): {}", rule.message());
    }
}

fn main() -> Result<(), InvalidArgument> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let listener: SharedListener<str> = Arc::new(PrintListener);

    let mut email_field = TextField::new("email");
    email_field.add_rule(not_empty("Required")?.shared());
    email_field.add_rule(email("Not an email address")?.shared());
    email_field.add_listener(listener.clone());

    let mut strength = PasswordStrength::from_config(StrengthConfig {
        helper_texts: vec!["Weak".into(), "Fair".into(), "Strong".into()],
        helper_colors: vec![Color::from_rgb(0xF4, 0x43, 0x36), Color::from_rgb(0x4C, 0xAF, 0x50)],
        prefix: Some("Strength".into()),
    });
    strength.add_all_constraints([
        MinLengthConstraint::new(10)?.shared(),
        ContainsUppercaseLetter.shared(),
        ContainsNumber.shared(),
        ContainsSymbol.shared(),
    ]);

    let mut password = TextField::new("password");
    password.add_rule(min_length("At least 8 characters", 8)?.shared());
    password.set_password_strength(Some(strength));
    password.add_listener(listener.clone());

    let mut confirm = TextField::new("confirm");
    confirm.add_rule(equal("Passwords do not match", password.value())?.shared());
    confirm.add_listener(listener);

    for attempt in [("ada@", "hunter2", "hunter"), ("ada@example.com", "Hunter2!2024", "Hunter2!2024")] {
        let (mail, pass, again) = attempt;
        println!("submitting {mail:?} / {pass:?}");
        email_field.set_text(mail);
        password.set_text(pass);
        confirm.set_text(again);

        if let Some(helper) = password.helper_text() {
            println!("  password helper: {helper}");
        }

        let ok = [email_field.validate(), password.validate(), confirm.validate()]
            .iter()
            .all(|valid| *valid);
        println!("  form valid: {ok}\n");
    }

    Ok(())
}
