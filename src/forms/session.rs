use serde::{Deserialize, Serialize};
use serde_valid::Validate;

/// Authorization code handed back by the identity provider's redirect.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SessionForm {
    #[validate(min_length = 1)]
    pub code: String,
}
