use async_trait::async_trait;
use tracing::info;

/// Session artifact handed back on a successful sign-in.
///
/// A real backend would return a token here; the stub only echoes the
/// identity it was given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    Rejected(String),
    Unexpected(String),
}

impl std::fmt::Display for AuthError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Rejected(e) => write!(f, "Request rejected: {}", e),
            Self::Unexpected(e) => write!(f, "Unexpected error: {}", e),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Identity {
    Personal {
        first_name: String,
        last_name: String,
    },
    Business {
        company_name: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAccount {
    pub identity: Identity,
    pub email: String,
    pub password: String,
}

/// The integration seam towards the authentication service.
///
/// Every screen submits through this trait, so wiring a real backend in
/// later only means providing another implementation.
#[async_trait]
pub trait AuthBackend: Send + Sync {
    async fn sign_in(&self, email: &str, password: &str) -> Result<Session, AuthError>;
    async fn register(&self, account: NewAccount) -> Result<(), AuthError>;
    async fn request_reset(&self, email: &str) -> Result<(), AuthError>;
    async fn verify_code(&self, code: &str) -> Result<(), AuthError>;
    async fn reset_password(&self, password: &str) -> Result<(), AuthError>;
}

/// Placeholder backend accepting everything it is given.
pub struct StubBackend;

#[async_trait]
impl AuthBackend for StubBackend {
    async fn sign_in(&self, email: &str, _password: &str) -> Result<Session, AuthError> {
        info!("stub backend: sign-in accepted for {}", email);
        Ok(Session {
            email: email.to_string(),
        })
    }

    async fn register(&self, account: NewAccount) -> Result<(), AuthError> {
        info!("stub backend: account registered for {}", account.email);
        Ok(())
    }

    async fn request_reset(&self, email: &str) -> Result<(), AuthError> {
        info!("stub backend: password reset requested for {}", email);
        Ok(())
    }

    async fn verify_code(&self, code: &str) -> Result<(), AuthError> {
        info!("stub backend: verification code {} accepted", code);
        Ok(())
    }

    async fn reset_password(&self, _password: &str) -> Result<(), AuthError> {
        info!("stub backend: password updated");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn stub_backend_accepts_everything() {
        let backend = StubBackend;
        assert_eq!(
            backend.sign_in("johndoe@email.com", "hunter2").await,
            Ok(Session {
                email: "johndoe@email.com".to_string()
            })
        );
        assert_eq!(backend.verify_code("123456").await, Ok(()));
        assert_eq!(backend.request_reset("johndoe@email.com").await, Ok(()));
        assert_eq!(backend.reset_password("abc123").await, Ok(()));
        assert_eq!(
            backend
                .register(NewAccount {
                    identity: Identity::Business {
                        company_name: "Acme".to_string()
                    },
                    email: "ops@acme.com".to_string(),
                    password: "hunter2".to_string(),
                })
                .await,
            Ok(())
        );
    }
}
