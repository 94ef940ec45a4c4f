//! Signup, OTP verification and login

use shared::client::VerifyOtpRequest;
use shared::models::UserRole;
use shared::validation::{self, SignupForm};
use tiffin_client::HttpClient;

use super::Route;
use crate::context::AppContext;
use crate::failure::{Failure, ScreenResult};

/// Address an OTP was sent to, plus the signup details when it is a new user
#[derive(Debug, Clone, PartialEq)]
pub struct PendingOtp {
    pub email: String,
    pub signup: Option<SignupForm>,
}

#[derive(Debug, Default)]
pub struct AuthScreen {
    pending: Option<PendingOtp>,
}

impl AuthScreen {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resume at the OTP step, e.g. after a restart
    pub fn with_pending(pending: PendingOtp) -> Self {
        Self {
            pending: Some(pending),
        }
    }

    pub fn pending(&self) -> Option<&PendingOtp> {
        self.pending.as_ref()
    }

    /// Validate the signup form and email an OTP
    pub async fn signup<H: HttpClient>(
        &mut self,
        ctx: &AppContext<H>,
        form: SignupForm,
    ) -> ScreenResult<String> {
        validation::validate_signup(&form)?;
        let email = form.email.trim().to_string();
        let resp = ctx
            .api()
            .generate_otp(&email)
            .await
            .map_err(|e| Failure::from_action(&e, "Failed to send OTP"))?;
        tracing::info!(email = %email, "signup otp sent");
        self.pending = Some(PendingOtp {
            email,
            signup: Some(form),
        });
        Ok(resp.message)
    }

    /// Email an OTP to an existing account
    pub async fn request_otp<H: HttpClient>(
        &mut self,
        ctx: &AppContext<H>,
        email: &str,
    ) -> ScreenResult<String> {
        let email = email.trim();
        validation::validate_required(email, "email")?;
        if !validation::is_valid_email(email) {
            return Err(Failure::Alert("Please enter a valid email address".into()));
        }
        let resp = ctx
            .api()
            .generate_otp(email)
            .await
            .map_err(|e| Failure::from_action(&e, "Failed to send OTP"))?;
        self.pending = Some(PendingOtp {
            email: email.to_string(),
            signup: None,
        });
        Ok(resp.message)
    }

    /// Verify the 4-digit code; new users are created with the customer role
    pub async fn verify_otp<H: HttpClient>(
        &mut self,
        ctx: &AppContext<H>,
        otp: &str,
    ) -> ScreenResult<Route> {
        let pending = self
            .pending
            .as_ref()
            .ok_or_else(|| Failure::Alert("Please request an OTP first".into()))?;
        validation::validate_otp(otp)?;

        let mut req = VerifyOtpRequest {
            email: pending.email.clone(),
            otp: otp.trim().to_string(),
            name: None,
            mobile: None,
            password: None,
            address: None,
            role: None,
        };
        if let Some(form) = &pending.signup {
            req.name = Some(form.name.trim().to_string());
            req.mobile = Some(form.mobile.trim().to_string());
            req.password = Some(form.password.clone());
            req.address = Some(form.address.trim().to_string());
            req.role = Some(UserRole::User);
        }

        let user = ctx
            .session()
            .verify_otp(&req)
            .await
            .map_err(|e| Failure::Alert(e.user_message("Invalid OTP")))?;
        self.pending = None;
        Ok(user.as_ref().map(Route::home_for).unwrap_or(Route::Login))
    }

    /// Send the OTP again to the pending address
    pub async fn resend_otp<H: HttpClient>(&self, ctx: &AppContext<H>) -> ScreenResult<String> {
        let pending = self
            .pending
            .as_ref()
            .ok_or_else(|| Failure::Alert("Please request an OTP first".into()))?;
        ctx.api()
            .generate_otp(&pending.email)
            .await
            .map_err(|e| Failure::from_action(&e, "Failed to resend OTP"))?;
        Ok("OTP has been resent to your email".to_string())
    }

    pub async fn login<H: HttpClient>(
        &mut self,
        ctx: &AppContext<H>,
        email: &str,
        password: &str,
    ) -> ScreenResult<Route> {
        validation::validate_login(email, password)?;
        let user = ctx
            .session()
            .login(email.trim(), password)
            .await
            .map_err(|e| Failure::Alert(e.user_message("Failed to login")))?;
        Ok(Route::home_for(&user))
    }
}
