//! Staff claims and roles
//!
//! Staff tokens are issued by the external identity provider; this server
//! only validates them and reads the claims.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::AppError;

/// Staff role carried in the token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StaffRole {
    Admin,
    Manager,
    Barber,
}

/// JWT claims for authenticated staff
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StaffClaims {
    pub sub: String,
    pub staff_id: Uuid,
    pub barbershop_id: Uuid,
    pub role: StaffRole,
    pub exp: i64,
    pub iat: i64,
}

impl StaffClaims {
    /// Create a signed token (used by provisioning tooling and tests; the
    /// production issuer lives in the identity provider)
    pub fn create_token(&self, secret: &str) -> Result<String, jsonwebtoken::errors::Error> {
        use jsonwebtoken::{encode, EncodingKey, Header};
        encode(
            &Header::default(),
            self,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
    }

    /// Parse and validate a JWT token
    pub fn from_token(token: &str, secret: &str) -> Result<Self, jsonwebtoken::errors::Error> {
        use jsonwebtoken::{decode, DecodingKey, Validation};
        let token_data = decode::<Self>(
            token,
            &DecodingKey::from_secret(secret.as_bytes()),
            &Validation::default(),
        )?;
        Ok(token_data.claims)
    }

    // Authorization checks
    pub fn require_manage_schedules(&self) -> Result<(), AppError> {
        match self.role {
            StaffRole::Admin | StaffRole::Manager => Ok(()),
            StaffRole::Barber => Err(AppError::Authorization(
                "Insufficient rights to manage schedules".to_string(),
            )),
        }
    }

    pub fn require_manage_appointments(&self) -> Result<(), AppError> {
        // All staff roles work the PDV agenda
        Ok(())
    }

    pub fn require_manage_catalog(&self) -> Result<(), AppError> {
        match self.role {
            StaffRole::Admin | StaffRole::Manager => Ok(()),
            StaffRole::Barber => Err(AppError::Authorization(
                "Insufficient rights to manage the catalog".to_string(),
            )),
        }
    }

    pub fn require_manage_clients(&self) -> Result<(), AppError> {
        match self.role {
            StaffRole::Admin | StaffRole::Manager => Ok(()),
            StaffRole::Barber => Err(AppError::Authorization(
                "Insufficient rights to manage clients".to_string(),
            )),
        }
    }
}
