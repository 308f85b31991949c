use crate::models::user::User as UserModel;
use serde::{Deserialize, Serialize};

/// `GET /users/me` payload of the identity service.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserForm {
    pub id: String,
    #[serde(default)]
    pub email: String,
    #[serde(default, alias = "google_user_data")]
    pub profile: Option<Profile>,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: Option<String>,
    pub given_name: Option<String>,
    pub picture: Option<String>,
}

impl TryInto<UserModel> for UserForm {
    type Error = String;

    fn try_into(self) -> Result<UserModel, Self::Error> {
        if self.id.trim().is_empty() {
            return Err("identity service returned a user without id".to_string());
        }

        let profile = self.profile.unwrap_or_default();
        Ok(UserModel {
            id: self.id,
            email: self.email,
            name: profile.name.or(profile.given_name),
            picture: profile.picture,
        })
    }
}
