//! Authentication and account endpoints

use shared::client::{
    AuthResponse, ContactRequest, CurrentUserResponse, GenerateOtpRequest, LoginRequest,
    MessageResponse, PasswordUpdateRequest, VerifyOtpRequest,
};
use shared::models::User;

use super::TiffinClient;
use crate::ClientResult;
use crate::http::HttpClient;

impl<H: HttpClient> TiffinClient<H> {
    /// Ask the backend to email a one-time password
    pub async fn generate_otp(&self, email: &str) -> ClientResult<MessageResponse> {
        let req = GenerateOtpRequest {
            email: email.trim().to_string(),
        };
        self.http.post("/auth/generate-otp", &req).await
    }

    /// Verify an OTP; new accounts send their signup fields along
    pub async fn verify_otp(&self, req: &VerifyOtpRequest) -> ClientResult<AuthResponse> {
        self.http.post("/auth/verify-otp", req).await
    }

    pub async fn login(&self, email: &str, password: &str) -> ClientResult<AuthResponse> {
        let req = LoginRequest {
            email: email.trim().to_string(),
            password: password.to_string(),
        };
        self.http.post("/auth/login", &req).await
    }

    /// The user the session cookie belongs to
    pub async fn current_user(&self) -> ClientResult<User> {
        let resp: CurrentUserResponse = self.http.get("/auth/user").await?;
        Ok(resp.user)
    }

    pub async fn update_password(
        &self,
        user_id: &str,
        current_password: &str,
        new_password: &str,
    ) -> ClientResult<MessageResponse> {
        let req = PasswordUpdateRequest {
            user_id: user_id.to_string(),
            current_password: current_password.to_string(),
            new_password: new_password.to_string(),
        };
        self.http.put("/auth/update-password", &req).await
    }

    /// Send a support message by email
    pub async fn contact(
        &self,
        user_id: &str,
        subject: &str,
        message: &str,
    ) -> ClientResult<MessageResponse> {
        let req = ContactRequest {
            user_id: user_id.to_string(),
            subject: subject.trim().to_string(),
            message: message.trim().to_string(),
        };
        self.http.post("/auth/contact", &req).await
    }
}
