//! Admin code service for bootstrapping the first administrator.
//!
//! When the server starts without any admin account it generates a one-time code and
//! logs it. Supplying that code as `admin_code` during registration creates the account
//! with the admin role. Codes live in memory only, expire after 60 seconds and are
//! invalidated on first successful use.

use std::sync::Arc;
use std::time::Duration;
use tokio::{sync::RwLock, time::Instant};

use crate::server::util::token::generate_random_string;

/// Time-to-live for admin codes in seconds.
const ADMIN_CODE_TTL_SECONDS: u64 = 60;

/// Length of a generated admin code.
const ADMIN_CODE_LENGTH: usize = 32;

/// Stored admin code with expiration timestamp.
#[derive(Clone)]
struct AdminCode {
    code: String,
    expires_at: Instant,
}

impl AdminCode {
    fn new(code: String) -> Self {
        Self {
            code,
            expires_at: Instant::now() + Duration::from_secs(ADMIN_CODE_TTL_SECONDS),
        }
    }

    fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }
}

/// Holds at most one live bootstrap code.
///
/// Cloning shares the same slot, so the copy in `AppState` and the one used at
/// startup see the same code.
#[derive(Clone)]
pub struct AdminCodeService {
    code: Arc<RwLock<Option<AdminCode>>>,
}

impl AdminCodeService {
    /// Creates a service with no active code.
    pub fn new() -> Self {
        Self {
            code: Arc::new(RwLock::new(None)),
        }
    }

    /// Generates a new random admin code, replacing any previous one.
    ///
    /// # Returns
    /// - `String` - The 32-character alphanumeric code, valid for 60 seconds
    pub async fn generate(&self) -> String {
        let code = generate_random_string(ADMIN_CODE_LENGTH);
        *self.code.write().await = Some(AdminCode::new(code.clone()));
        code
    }

    /// Validates `input_code` and consumes it on success.
    ///
    /// Expired codes are dropped and fail validation. A wrong code leaves the stored
    /// code in place.
    ///
    /// # Returns
    /// - `true` - Code matched and was still valid; it can no longer be used
    /// - `false` - No code, wrong code, or expired code
    pub async fn validate_and_consume(&self, input_code: &str) -> bool {
        let mut code = self.code.write().await;

        let Some(stored) = code.as_ref() else {
            return false;
        };

        if stored.is_expired() {
            *code = None;
            return false;
        }

        if stored.code == input_code {
            *code = None;
            return true;
        }

        false
    }

    /// Whether a non-expired code is currently stored.
    #[cfg(test)]
    pub async fn has_valid_code(&self) -> bool {
        self.code
            .read()
            .await
            .as_ref()
            .is_some_and(|stored| !stored.is_expired())
    }
}

impl Default for AdminCodeService {
    fn default() -> Self {
        Self::new()
    }
}
