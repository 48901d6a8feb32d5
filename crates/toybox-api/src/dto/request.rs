//! Request DTOs with validation.

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use toybox_entity::toy::{Label, NewToy, ToyPatch};
use toybox_entity::user::UpdateUser;
use toybox_service::auth::SignupRequest as SvcSignup;

/// Login request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    /// Username.
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,
    /// Password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Signup request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SignupRequest {
    /// Username.
    #[validate(length(min = 1, max = 100, message = "Username is required"))]
    pub username: String,
    /// Password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
    /// Display name.
    #[validate(length(min = 1, max = 200, message = "Full name is required"))]
    pub fullname: String,
}

impl From<SignupRequest> for SvcSignup {
    fn from(req: SignupRequest) -> Self {
        Self {
            username: req.username,
            password: req.password,
            fullname: req.fullname,
        }
    }
}

/// Body of `POST /api/toy`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AddToyRequest {
    /// Display name.
    #[validate(length(min = 1, max = 200, message = "Toy name is required"))]
    pub name: String,
    /// Price.
    #[validate(range(min = 0.0, message = "Price cannot be negative"))]
    pub price: f64,
    /// Labels.
    #[serde(default)]
    pub labels: Vec<Label>,
    /// Stock flag, in stock when omitted.
    #[serde(default)]
    pub in_stock: Option<bool>,
}

impl From<AddToyRequest> for NewToy {
    fn from(req: AddToyRequest) -> Self {
        Self {
            name: req.name,
            price: req.price,
            labels: req.labels,
            in_stock: req.in_stock,
            ..Self::default()
        }
    }
}

/// Body of `PUT /api/toy/{toy_id}`. Omitted fields are left unchanged;
/// an `id` in the body is ignored in favour of the path.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateToyRequest {
    /// New name.
    #[validate(length(min = 1, max = 200, message = "Toy name cannot be empty"))]
    pub name: Option<String>,
    /// New price.
    #[validate(range(min = 0.0, message = "Price cannot be negative"))]
    pub price: Option<f64>,
    /// Replacement labels.
    pub labels: Option<Vec<Label>>,
    /// New stock flag.
    pub in_stock: Option<bool>,
}

impl UpdateToyRequest {
    /// Build the patch for the toy named in the path.
    pub fn into_patch(self, toy_id: Uuid) -> ToyPatch {
        ToyPatch {
            id: toy_id,
            name: self.name,
            price: self.price,
            labels: self.labels,
            in_stock: self.in_stock,
        }
    }
}

/// Body of `POST /api/toy/{toy_id}/msg`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AddMessageRequest {
    /// Message body.
    #[serde(alias = "txt")]
    #[validate(length(min = 1, max = 2000, message = "Message text is required"))]
    pub text: String,
}

/// Body of `PUT /api/user/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateUserRequest {
    /// New display name.
    #[validate(length(min = 1, max = 200, message = "Full name cannot be empty"))]
    pub fullname: Option<String>,
}

impl UpdateUserRequest {
    /// Build the update for the user named in the path.
    pub fn into_update(self, user_id: Uuid) -> UpdateUser {
        UpdateUser {
            id: user_id,
            fullname: self.fullname,
        }
    }
}
