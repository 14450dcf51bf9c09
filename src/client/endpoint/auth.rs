use crate::{
    client::{api::ApiClient, error::ApiError},
    model::{
        api::{ApiResponse, MessageResponse},
        auth::{AdminUserDto, ChangePasswordDto, LoginDto, LoginResponseDto},
    },
};

pub struct AuthApi<'a> {
    client: &'a ApiClient,
}

impl ApiClient {
    pub fn auth(&self) -> AuthApi<'_> {
        AuthApi { client: self }
    }
}

impl AuthApi<'_> {
    /// Logs in and stores the returned token pair.
    pub async fn login(&self, username: &str, password: &str) -> Result<LoginResponseDto, ApiError> {
        let body = LoginDto {
            username: username.to_string(),
            password: password.to_string(),
        };

        let response: ApiResponse<LoginResponseDto> = self
            .client
            .post_anonymous("/api/auth/login", &body)
            .await?;

        self.client
            .tokens()
            .set_tokens(&response.data.access_token, &response.data.refresh_token);

        Ok(response.data)
    }

    /// Revokes the session server-side. Local tokens are cleared even when the
    /// request fails.
    pub async fn logout(&self) -> Result<(), ApiError> {
        let result = self
            .client
            .post::<_, MessageResponse>("/api/auth/logout", &())
            .await;

        self.client.tokens().clear();

        result.map(|_| ())
    }

    pub async fn me(&self) -> Result<AdminUserDto, ApiError> {
        let response: ApiResponse<AdminUserDto> = self.client.get("/api/auth/me").await?;

        Ok(response.data)
    }

    pub async fn change_password(
        &self,
        current_password: &str,
        new_password: &str,
    ) -> Result<(), ApiError> {
        let body = ChangePasswordDto {
            current_password: current_password.to_string(),
            new_password: new_password.to_string(),
        };

        self.client
            .post::<_, MessageResponse>("/api/auth/change-password", &body)
            .await?;

        Ok(())
    }

    /// Requests a new access token with the stored refresh token.
    pub async fn refresh(&self) -> bool {
        self.client.refresh_session().await
    }
}
