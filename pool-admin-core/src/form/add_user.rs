//! Add-user form

use serde::Serialize;

use crate::credentials::{CredentialGenerator, EntropySource};
use crate::error::{ConsoleError, ConsoleResult};
use crate::list::ListController;
use crate::types::{today, User, UserStatus};

/// Shortest accepted temporary password, after trimming
pub const MIN_TEMP_PASSWORD_LEN: usize = 8;

const CONTACT_REQUIRED: &str = "Please provide at least an email or a phone number.";
const PASSWORD_TOO_SHORT: &str = "Temporary password must be at least 8 characters.";

/// How the new user receives access
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InviteMode {
    #[default]
    Invite,
    Temp,
}

/// Invitation delivery channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Delivery {
    #[default]
    Email,
    Sms,
}

/// Custom attribute row
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AttributeRow {
    pub name: String,
    pub value: String,
}

/// Payload handed to the submission target
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewUserPayload {
    pub username: String,
    pub email: String,
    pub phone: String,
    pub given_name: String,
    pub family_name: String,
    #[serde(rename = "inviteMode")]
    pub invite_mode: InviteMode,
    pub delivery: Delivery,
    pub temp_password: String,
    pub require_reset: bool,
    pub email_verified: bool,
    pub phone_verified: bool,
    pub attributes: Vec<AttributeRow>,
}

/// Validated submission: payload plus the row to add to the user table
#[derive(Debug, Clone)]
pub struct PreparedUser {
    pub payload: NewUserPayload,
    pub record: User,
}

/// Add-user form state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddUserForm {
    pub username: String,
    pub email: String,
    pub phone: String,
    pub given_name: String,
    pub family_name: String,
    pub invite_mode: InviteMode,
    pub delivery: Delivery,
    pub temp_password: String,
    pub require_reset: bool,
    pub email_verified: bool,
    pub phone_verified: bool,
    pub attributes: Vec<AttributeRow>,
}

impl Default for AddUserForm {
    fn default() -> Self {
        Self {
            username: String::new(),
            email: String::new(),
            phone: String::new(),
            given_name: String::new(),
            family_name: String::new(),
            invite_mode: InviteMode::Invite,
            delivery: Delivery::Email,
            temp_password: String::new(),
            require_reset: true,
            email_verified: false,
            phone_verified: false,
            attributes: Vec::new(),
        }
    }
}

impl AddUserForm {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn add_attribute(&mut self) {
        self.attributes.push(AttributeRow::default());
    }

    pub fn remove_attribute(&mut self, index: usize) -> ConsoleResult<AttributeRow> {
        if index >= self.attributes.len() {
            return Err(ConsoleError::RecordNotFound(format!("attribute row {index}")));
        }
        Ok(self.attributes.remove(index))
    }

    /// Fill the temporary password and switch to temporary-password mode
    pub fn generate_password<E: EntropySource>(
        &mut self,
        generator: &mut CredentialGenerator<E>,
    ) -> ConsoleResult<()> {
        self.temp_password = generator.temporary_password()?;
        self.invite_mode = InviteMode::Temp;
        Ok(())
    }

    /// Validate and build the payload; nothing is mutated
    pub fn prepare(&self, users: &ListController<User>) -> ConsoleResult<PreparedUser> {
        let email = self.email.trim();
        let phone = self.phone.trim();
        let temp_password = self.temp_password.trim();

        if email.is_empty() && phone.is_empty() {
            return Err(ConsoleError::Validation(CONTACT_REQUIRED.to_string()));
        }
        if self.invite_mode == InviteMode::Temp
            && temp_password.chars().count() < MIN_TEMP_PASSWORD_LEN
        {
            return Err(ConsoleError::Validation(PASSWORD_TOO_SHORT.to_string()));
        }

        let attributes = self
            .attributes
            .iter()
            .map(|row| AttributeRow {
                name: row.name.trim().to_string(),
                value: row.value.trim().to_string(),
            })
            .filter(|row| !row.name.is_empty() && !row.value.is_empty())
            .collect();

        let payload = NewUserPayload {
            username: self.username.trim().to_string(),
            email: email.to_string(),
            phone: phone.to_string(),
            given_name: self.given_name.trim().to_string(),
            family_name: self.family_name.trim().to_string(),
            invite_mode: self.invite_mode,
            delivery: self.delivery,
            temp_password: temp_password.to_string(),
            require_reset: self.require_reset,
            email_verified: self.email_verified,
            phone_verified: self.phone_verified,
            attributes,
        };

        let record = user_from_payload(&payload);
        if users.store().contains(&record.username) {
            return Err(ConsoleError::Validation(format!(
                "User {} already exists.",
                record.username
            )));
        }

        Ok(PreparedUser { payload, record })
    }

    /// Prepend the prepared user and clear the form
    pub fn commit(&mut self, users: &mut ListController<User>, prepared: PreparedUser) -> ConsoleResult<User> {
        let record = prepared.record;
        users.prepend(record.clone())?;
        log::info!("User created: {}", record.username);
        self.reset();
        Ok(record)
    }

    pub fn submit(&mut self, users: &mut ListController<User>) -> ConsoleResult<User> {
        let prepared = self.prepare(users)?;
        self.commit(users, prepared)
    }
}

fn user_from_payload(payload: &NewUserPayload) -> User {
    let username = [&payload.username, &payload.email, &payload.phone]
        .into_iter()
        .find(|s| !s.is_empty())
        .cloned()
        .unwrap_or_default();

    let name = format!("{} {}", payload.given_name, payload.family_name)
        .trim()
        .to_string();

    User {
        username,
        email: if payload.email.is_empty() {
            "-".to_string()
        } else {
            payload.email.clone()
        },
        name: if name.is_empty() { "-".to_string() } else { name },
        status: UserStatus::Active,
        created: today(),
        last_sign_in: "-".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::CategoryMatch;
    use crate::sample;
    use crate::store::RecordStore;

    fn users() -> ListController<User> {
        ListController::new(RecordStore::new(sample::users()).unwrap(), CategoryMatch::Exact)
    }

    #[test]
    fn missing_contact_is_checked_first() {
        let form = AddUserForm {
            invite_mode: InviteMode::Temp,
            temp_password: "short".into(),
            ..AddUserForm::default()
        };
        let err = form.prepare(&users()).unwrap_err();
        assert_eq!(
            err.user_message(),
            "Please provide at least an email or a phone number."
        );
    }

    #[test]
    fn short_temp_password_is_rejected() {
        let form = AddUserForm {
            email: "new@example.com".into(),
            invite_mode: InviteMode::Temp,
            temp_password: "  abc1234  ".into(),
            ..AddUserForm::default()
        };
        let err = form.prepare(&users()).unwrap_err();
        assert_eq!(
            err.user_message(),
            "Temporary password must be at least 8 characters."
        );
    }

    #[test]
    fn short_password_ignored_in_invite_mode() {
        let form = AddUserForm {
            phone: "+639171234567".into(),
            temp_password: "x".into(),
            ..AddUserForm::default()
        };
        assert!(form.prepare(&users()).is_ok());
    }

    #[test]
    fn incomplete_attribute_rows_are_dropped() {
        let form = AddUserForm {
            email: "new@example.com".into(),
            attributes: vec![
                AttributeRow {
                    name: "custom:department".into(),
                    value: " Engineering ".into(),
                },
                AttributeRow {
                    name: "custom:empty".into(),
                    value: "  ".into(),
                },
                AttributeRow::default(),
            ],
            ..AddUserForm::default()
        };
        let prepared = form.prepare(&users()).unwrap();
        assert_eq!(
            prepared.payload.attributes,
            vec![AttributeRow {
                name: "custom:department".into(),
                value: "Engineering".into()
            }]
        );
    }

    #[test]
    fn submit_prepends_active_user() {
        let mut list = users();
        let mut form = AddUserForm {
            username: "new.user".into(),
            email: "new.user@example.com".into(),
            given_name: "New".into(),
            family_name: "User".into(),
            ..AddUserForm::default()
        };
        let user = form.submit(&mut list).unwrap();

        assert_eq!(user.name, "New User");
        assert_eq!(user.status, UserStatus::Active);
        assert_eq!(list.store().len(), 16);
        assert_eq!(list.store().records()[0].username, "new.user");
        assert_eq!(form, AddUserForm::default());
    }

    #[test]
    fn blank_username_falls_back_to_email() {
        let form = AddUserForm {
            email: "someone@example.com".into(),
            ..AddUserForm::default()
        };
        let prepared = form.prepare(&users()).unwrap();
        assert_eq!(prepared.record.username, "someone@example.com");
    }

    #[test]
    fn duplicate_username_is_a_validation_error() {
        let mut list = users();
        let mut form = AddUserForm {
            username: "john.doe".into(),
            email: "x@example.com".into(),
            ..AddUserForm::default()
        };
        assert!(matches!(
            form.submit(&mut list),
            Err(ConsoleError::Validation(_))
        ));
        assert_eq!(list.store().len(), 15);
    }

    #[test]
    fn generating_password_switches_mode() {
        let mut form = AddUserForm::default();
        form.generate_password(&mut CredentialGenerator::os()).unwrap();
        assert_eq!(form.invite_mode, InviteMode::Temp);
        assert_eq!(form.temp_password.len(), 16);
    }

    #[test]
    fn payload_field_names() {
        let form = AddUserForm {
            email: "a@example.com".into(),
            ..AddUserForm::default()
        };
        let json = serde_json::to_value(form.prepare(&users()).unwrap().payload).unwrap();
        assert_eq!(json["inviteMode"], "invite");
        assert_eq!(json["delivery"], "email");
        assert_eq!(json["require_reset"], true);
    }
}
