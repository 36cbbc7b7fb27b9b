//! # Session models — roles, login payloads and validated updates
//!
//! The authentication collaborator hands the client a loosely-shaped JSON
//! object after sign-in (or after a profile refresh). This module turns that
//! object into something the [`crate::Session`] can apply safely.
//!
//! ## Types
//!
//! | Type | Represents |
//! |------|-----------|
//! | [`Role`] | Authorization level, serialized as `"USER"` / `"ADMIN"`. |
//! | [`LoginPayload`] | The raw payload as received. Every field is optional; the identifier may arrive as `_id` or `id`. |
//! | [`SessionUpdate`] | A validated, fully-typed update. Produced by [`LoginPayload::validate`]. |
//!
//! ## Validation rules
//!
//! - `token` is carried only when non-empty, so a payload without a token
//!   refreshes the profile and keeps the current token.
//! - `_id` wins over `id`; empty strings count as absent.
//! - A missing `account` becomes `""`, a missing `role` becomes [`Role::User`],
//!   a missing `cart` becomes `0`.
//! - Unknown roles and negative / oversized cart counts reject the whole payload.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SessionError;

/// Authorization level of the signed-in account.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    #[default]
    User,
    Admin,
}

impl Role {
    /// Wire name of the role.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "USER",
            Role::Admin => "ADMIN",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = SessionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "USER" => Ok(Role::User),
            "ADMIN" => Ok(Role::Admin),
            other => Err(SessionError::InvalidRole(other.to_string())),
        }
    }
}

/// Login payload as produced by the authentication collaborator.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LoginPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    /// Backend document identifier (`_id`), preferred over [`Self::id`].
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub object_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account: Option<String>,
    /// Raw role string; checked against [`Role`] during validation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cart: Option<i64>,
}

impl LoginPayload {
    /// Parse a payload from the JSON body returned by the auth endpoint.
    pub fn from_json(s: &str) -> Result<Self, SessionError> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn with_account(mut self, account: impl Into<String>) -> Self {
        self.account = Some(account.into());
        self
    }

    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }

    pub fn with_cart(mut self, cart: i64) -> Self {
        self.cart = Some(cart);
        self
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_object_id(mut self, id: impl Into<String>) -> Self {
        self.object_id = Some(id.into());
        self
    }

    /// Check every field and produce a typed [`SessionUpdate`].
    pub fn validate(&self) -> Result<SessionUpdate, SessionError> {
        let role = match self.role.as_deref() {
            None => Role::default(),
            Some(raw) => raw.parse()?,
        };

        let cart = match self.cart {
            None => 0,
            Some(n) => u32::try_from(n).map_err(|_| SessionError::InvalidCart(n))?,
        };

        let id = non_empty(&self.object_id)
            .or_else(|| non_empty(&self.id))
            .unwrap_or_default()
            .to_string();

        Ok(SessionUpdate {
            token: non_empty(&self.token).map(str::to_string),
            id,
            account: self.account.clone().unwrap_or_default(),
            role,
            cart,
        })
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

/// A validated session update, ready to be applied.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionUpdate {
    /// New token, or `None` to keep the current one.
    pub token: Option<String>,
    pub id: String,
    pub account: String,
    pub role: Role,
    pub cart: u32,
}
