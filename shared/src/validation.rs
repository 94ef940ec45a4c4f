//! Form validation
//!
//! Every check returns the message a screen shows when the input is rejected.

use regex::Regex;
use std::sync::LazyLock;

use crate::error::{AppError, AppResult, ErrorCode};
use crate::models::PriceTable;
use crate::order::money::parse_price;

// ── Limits ──────────────────────────────────────────────────────────

pub const MIN_MOBILE_LEN: usize = 10;
pub const MIN_SIGNUP_PASSWORD_LEN: usize = 6;
pub const MIN_STRONG_PASSWORD_LEN: usize = 8;
pub const OTP_LEN: usize = 4;
pub const MAX_NAME_LEN: usize = 200;
pub const MAX_MESSAGE_LEN: usize = 2000;

// Literal patterns; `test_static_patterns_compile` forces both.
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

static SPECIAL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"[!@#$%^&*(),.?":{}|<>]"#).expect("valid special char regex"));

// ── Helpers ─────────────────────────────────────────────────────────

/// Reject blank values
pub fn validate_required(value: &str, field: &str) -> AppResult<()> {
    if value.trim().is_empty() {
        return Err(AppError::required(field));
    }
    Ok(())
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email.trim())
}

// ── Auth forms ──────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SignupForm {
    pub name: String,
    pub email: String,
    pub mobile: String,
    pub password: String,
    pub address: String,
}

pub fn validate_signup(form: &SignupForm) -> AppResult<()> {
    for (value, field) in [
        (&form.name, "name"),
        (&form.email, "email"),
        (&form.mobile, "mobile"),
        (&form.password, "password"),
        (&form.address, "address"),
    ] {
        validate_required(value, field)?;
    }
    if form.name.len() > MAX_NAME_LEN {
        return Err(AppError::validation("Name is too long").with_detail("field", "name"));
    }
    if !is_valid_email(&form.email) {
        return Err(
            AppError::validation("Please enter a valid email address").with_detail("field", "email"),
        );
    }
    if form.mobile.trim().len() < MIN_MOBILE_LEN {
        return Err(
            AppError::validation("Please enter a valid mobile number").with_detail("field", "mobile"),
        );
    }
    if form.password.len() < MIN_SIGNUP_PASSWORD_LEN {
        return Err(AppError::with_message(
            ErrorCode::WeakPassword,
            "Password must be at least 6 characters",
        ));
    }
    Ok(())
}

pub fn validate_login(email: &str, password: &str) -> AppResult<()> {
    validate_required(email, "email")?;
    validate_required(password, "password")?;
    if !is_valid_email(email) {
        return Err(
            AppError::validation("Please enter a valid email address").with_detail("field", "email"),
        );
    }
    Ok(())
}

/// OTP must be exactly four ASCII digits
pub fn validate_otp(otp: &str) -> AppResult<()> {
    let otp = otp.trim();
    if otp.len() != OTP_LEN || !otp.bytes().all(|b| b.is_ascii_digit()) {
        return Err(AppError::new(ErrorCode::InvalidOtp));
    }
    Ok(())
}

/// Upper, lower, digit and special character
pub fn is_strong_password(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_uppercase())
        && password.chars().any(|c| c.is_ascii_lowercase())
        && password.chars().any(|c| c.is_ascii_digit())
        && SPECIAL_RE.is_match(password)
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PasswordChangeForm {
    pub current_password: String,
    pub new_password: String,
    pub confirm_password: String,
}

pub fn validate_password_change(form: &PasswordChangeForm) -> AppResult<()> {
    validate_required(&form.current_password, "currentPassword")?;
    validate_required(&form.new_password, "newPassword")?;
    validate_required(&form.confirm_password, "confirmPassword")?;
    if form.new_password.len() < MIN_STRONG_PASSWORD_LEN {
        return Err(AppError::with_message(
            ErrorCode::WeakPassword,
            "Password must be at least 8 characters long",
        ));
    }
    if form.new_password != form.confirm_password {
        return Err(AppError::with_message(
            ErrorCode::PasswordMismatch,
            "New password and confirm password do not match",
        ));
    }
    if !is_strong_password(&form.new_password) {
        return Err(AppError::with_message(
            ErrorCode::WeakPassword,
            "Password does not meet security requirements",
        ));
    }
    Ok(())
}

// ── Contact ─────────────────────────────────────────────────────────

pub fn validate_contact(subject: &str, message: &str) -> AppResult<()> {
    validate_required(subject, "subject")?;
    validate_required(message, "message")?;
    if message.len() > MAX_MESSAGE_LEN {
        return Err(AppError::validation("Message is too long").with_detail("field", "message"));
    }
    Ok(())
}

// ── Provider menu form ──────────────────────────────────────────────

/// Raw menu form input as typed by the provider
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MenuForm {
    /// `YYYY-MM-DD`
    pub date: String,
    pub sabjis: Vec<String>,
    pub full_price: String,
    pub half_price: String,
    pub rice_only_price: String,
}

/// Cleaned menu form
#[derive(Debug, Clone, PartialEq)]
pub struct ValidMenu {
    pub date: String,
    pub sabjis: Vec<String>,
    pub prices: PriceTable,
}

pub fn validate_menu_form(form: &MenuForm) -> AppResult<ValidMenu> {
    let date = form.date.trim();
    if date.is_empty() {
        return Err(AppError::with_message(ErrorCode::InvalidMenuDate, "Please select a date"));
    }
    if crate::menu_filter::menu_day(date).is_none() {
        return Err(AppError::new(ErrorCode::InvalidMenuDate).with_detail("date", date));
    }

    let sabjis: Vec<String> = form
        .sabjis
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect();
    if sabjis.is_empty() {
        return Err(AppError::with_message(
            ErrorCode::MenuHasNoSabjis,
            "Please add at least one sabzi",
        ));
    }

    let raw = [
        (&form.full_price, "full"),
        (&form.half_price, "half"),
        (&form.rice_only_price, "riceOnly"),
    ];
    if raw.iter().any(|(v, _)| v.trim().is_empty()) {
        return Err(AppError::with_message(ErrorCode::InvalidPrice, "Please fill in all prices"));
    }
    let full = parse_price(&form.full_price, "full")?;
    let half = parse_price(&form.half_price, "half")?;
    let rice_only = parse_price(&form.rice_only_price, "riceOnly")?;

    Ok(ValidMenu {
        date: date.to_string(),
        sabjis,
        prices: PriceTable::new(full, half, rice_only),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_patterns_compile() {
        assert!(EMAIL_RE.is_match("asha@example.com"));
        assert!(SPECIAL_RE.is_match("a!b"));
        assert!(!SPECIAL_RE.is_match("Tiffin2026"));
    }

    fn signup() -> SignupForm {
        SignupForm {
            name: "Asha".into(),
            email: "asha@example.com".into(),
            mobile: "9876543210".into(),
            password: "secret1".into(),
            address: "12 MG Road".into(),
        }
    }

    #[test]
    fn test_signup_ok() {
        assert!(validate_signup(&signup()).is_ok());
    }

    #[test]
    fn test_signup_rules() {
        let mut form = signup();
        form.address = "  ".into();
        assert_eq!(validate_signup(&form).unwrap_err().message, "Please fill in all fields");

        let mut form = signup();
        form.email = "asha@example".into();
        assert_eq!(
            validate_signup(&form).unwrap_err().message,
            "Please enter a valid email address"
        );

        let mut form = signup();
        form.mobile = "98765".into();
        assert_eq!(
            validate_signup(&form).unwrap_err().message,
            "Please enter a valid mobile number"
        );

        let mut form = signup();
        form.password = "abc".into();
        assert_eq!(validate_signup(&form).unwrap_err().code, ErrorCode::WeakPassword);
    }

    #[test]
    fn test_otp() {
        assert!(validate_otp("1234").is_ok());
        assert!(validate_otp(" 0420 ").is_ok());
        assert!(validate_otp("123").is_err());
        assert!(validate_otp("12a4").is_err());
        assert!(validate_otp("12345").is_err());
    }

    #[test]
    fn test_password_change() {
        let ok = PasswordChangeForm {
            current_password: "old".into(),
            new_password: "Tiffin@2026".into(),
            confirm_password: "Tiffin@2026".into(),
        };
        assert!(validate_password_change(&ok).is_ok());

        let mut short = ok.clone();
        short.new_password = "Ab1!".into();
        short.confirm_password = "Ab1!".into();
        assert_eq!(validate_password_change(&short).unwrap_err().code, ErrorCode::WeakPassword);

        let mut mismatch = ok.clone();
        mismatch.confirm_password = "Tiffin@2025".into();
        assert_eq!(
            validate_password_change(&mismatch).unwrap_err().code,
            ErrorCode::PasswordMismatch
        );

        let mut no_special = ok.clone();
        no_special.new_password = "Tiffin2026".into();
        no_special.confirm_password = "Tiffin2026".into();
        assert_eq!(
            validate_password_change(&no_special).unwrap_err().message,
            "Password does not meet security requirements"
        );
    }

    #[test]
    fn test_contact() {
        assert!(validate_contact("Late delivery", "Order came cold").is_ok());
        assert!(validate_contact("", "body").is_err());
        assert!(validate_contact("subject", " ").is_err());
    }

    #[test]
    fn test_menu_form_cleans_sabjis() {
        let form = MenuForm {
            date: "2026-10-18".into(),
            sabjis: vec![" Paneer ".into(), "".into(), "Dal".into(), "   ".into()],
            full_price: "120".into(),
            half_price: "70".into(),
            rice_only_price: "40".into(),
        };
        let menu = validate_menu_form(&form).unwrap();
        assert_eq!(menu.sabjis, vec!["Paneer", "Dal"]);
        assert_eq!(menu.prices, PriceTable::new(120.0, 70.0, 40.0));
    }

    #[test]
    fn test_menu_form_rejections() {
        let base = MenuForm {
            date: "2026-10-18".into(),
            sabjis: vec!["Paneer".into()],
            full_price: "120".into(),
            half_price: "70".into(),
            rice_only_price: "40".into(),
        };

        let mut f = base.clone();
        f.date.clear();
        assert_eq!(validate_menu_form(&f).unwrap_err().message, "Please select a date");

        let mut f = base.clone();
        f.sabjis = vec!["  ".into()];
        assert_eq!(validate_menu_form(&f).unwrap_err().message, "Please add at least one sabzi");

        let mut f = base.clone();
        f.half_price = "".into();
        assert_eq!(validate_menu_form(&f).unwrap_err().message, "Please fill in all prices");

        let mut f = base.clone();
        f.rice_only_price = "0".into();
        assert_eq!(validate_menu_form(&f).unwrap_err().code, ErrorCode::InvalidPrice);

        let mut f = base;
        f.full_price = "abc".into();
        assert!(validate_menu_form(&f).is_err());
    }
}
