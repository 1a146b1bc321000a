//! App client modal form

use serde::Serialize;

use crate::credentials::{CredentialGenerator, EntropySource, OsEntropy};
use crate::error::{ConsoleError, ConsoleResult};
use crate::list::ListController;
use crate::types::{today, AppClient, ClientType, Record, Scope, DEFAULT_FLOW};

use super::{FormMode, FormView};

const NAME_REQUIRED: &str = "Please provide a client name.";

/// Editable fields of the app client form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppClientFields {
    pub name: String,
    pub callbacks: String,
    pub logouts: String,
    pub scopes: Vec<Scope>,
}

impl AppClientFields {
    fn from_client(client: &AppClient) -> Self {
        Self {
            name: client.name.clone(),
            callbacks: client.callbacks.clone(),
            logouts: client.logouts.clone(),
            scopes: Scope::parse_list(&client.scopes),
        }
    }

    pub fn has_scope(&self, scope: Scope) -> bool {
        self.scopes.contains(&scope)
    }
}

/// Payload delivered to the submission target.
///
/// Carries no secret.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppClientPayload {
    pub client_id: String,
    pub name: String,
    pub callbacks: String,
    pub logouts: String,
    pub flows: String,
    pub scopes: String,
}

/// Identifier and secret shown once after creation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuedCredentials {
    pub name: String,
    pub client_id: String,
    pub client_secret: String,
}

/// Result of a successful submit
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Created(IssuedCredentials),
    Saved(String),
}

/// Validated submission, not yet written to the store
#[derive(Debug, Clone)]
pub enum PreparedClient {
    Create {
        record: AppClient,
        secret: String,
    },
    Edit {
        id: String,
        fields: AppClientFields,
    },
}

impl PreparedClient {
    pub fn payload(&self) -> AppClientPayload {
        match self {
            Self::Create { record, .. } => AppClientPayload {
                client_id: record.client_id.clone(),
                name: record.name.clone(),
                callbacks: record.callbacks.clone(),
                logouts: record.logouts.clone(),
                flows: record.flows.clone(),
                scopes: record.scopes.clone(),
            },
            Self::Edit { id, fields } => AppClientPayload {
                client_id: id.clone(),
                name: fields.name.clone(),
                callbacks: fields.callbacks.clone(),
                logouts: fields.logouts.clone(),
                flows: DEFAULT_FLOW.to_string(),
                scopes: Scope::join(&fields.scopes),
            },
        }
    }

    pub fn is_create(&self) -> bool {
        matches!(self, Self::Create { .. })
    }
}

/// Proof that the user was asked to confirm deleting one client
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteToken {
    id: String,
    serial: u64,
}

impl DeleteToken {
    /// Client the token deletes
    pub fn id(&self) -> &str {
        &self.id
    }
}

/// App client create / edit / view state machine
#[derive(Debug)]
pub struct AppClientForm<E: EntropySource = OsEntropy> {
    mode: FormMode,
    fields: AppClientFields,
    generator: CredentialGenerator<E>,
    pending_delete: Option<DeleteToken>,
    delete_serial: u64,
}

impl Default for AppClientForm<OsEntropy> {
    fn default() -> Self {
        Self::new(CredentialGenerator::os())
    }
}

impl<E: EntropySource> AppClientForm<E> {
    pub fn new(generator: CredentialGenerator<E>) -> Self {
        Self {
            mode: FormMode::Closed,
            fields: AppClientFields::default(),
            generator,
            pending_delete: None,
            delete_serial: 0,
        }
    }

    pub fn mode(&self) -> &FormMode {
        &self.mode
    }

    pub fn fields(&self) -> &AppClientFields {
        &self.fields
    }

    pub fn view(&self) -> FormView {
        FormView::for_mode(&self.mode)
    }

    fn ensure_closed(&self) -> ConsoleResult<()> {
        if self.mode.is_open() {
            return Err(ConsoleError::InvalidFormState(format!(
                "form is already open in {} mode",
                self.mode.name()
            )));
        }
        Ok(())
    }

    fn ensure_editable(&self) -> ConsoleResult<()> {
        if self.mode.is_editable() {
            Ok(())
        } else {
            Err(ConsoleError::InvalidFormState(format!(
                "inputs are disabled in {} mode",
                self.mode.name()
            )))
        }
    }

    pub fn open_create(&mut self) -> ConsoleResult<()> {
        self.ensure_closed()?;
        self.fields = AppClientFields::default();
        self.mode = FormMode::Create;
        Ok(())
    }

    pub fn open_edit(&mut self, list: &ListController<AppClient>, id: &str) -> ConsoleResult<()> {
        self.ensure_closed()?;
        let client = list
            .find(id)
            .ok_or_else(|| ConsoleError::RecordNotFound(id.to_string()))?;
        self.fields = AppClientFields::from_client(client);
        self.mode = FormMode::Edit(id.to_string());
        Ok(())
    }

    pub fn open_view(&mut self, list: &ListController<AppClient>, id: &str) -> ConsoleResult<()> {
        self.ensure_closed()?;
        let client = list
            .find(id)
            .ok_or_else(|| ConsoleError::RecordNotFound(id.to_string()))?;
        self.fields = AppClientFields::from_client(client);
        self.mode = FormMode::View(id.to_string());
        Ok(())
    }

    /// Close / cancel / overlay click
    pub fn close(&mut self) {
        self.mode = FormMode::Closed;
        self.fields = AppClientFields::default();
    }

    pub fn set_name(&mut self, name: &str) -> ConsoleResult<()> {
        self.ensure_editable()?;
        self.fields.name = name.to_string();
        Ok(())
    }

    pub fn set_callbacks(&mut self, callbacks: &str) -> ConsoleResult<()> {
        self.ensure_editable()?;
        self.fields.callbacks = callbacks.to_string();
        Ok(())
    }

    pub fn set_logouts(&mut self, logouts: &str) -> ConsoleResult<()> {
        self.ensure_editable()?;
        self.fields.logouts = logouts.to_string();
        Ok(())
    }

    pub fn toggle_scope(&mut self, scope: Scope) -> ConsoleResult<()> {
        self.ensure_editable()?;
        if let Some(pos) = self.fields.scopes.iter().position(|s| *s == scope) {
            self.fields.scopes.remove(pos);
        } else {
            self.fields.scopes.push(scope);
        }
        Ok(())
    }

    /// Validate the form and generate credentials without touching the store
    pub fn prepare(&mut self, list: &ListController<AppClient>) -> ConsoleResult<PreparedClient> {
        let name = self.fields.name.trim().to_string();

        match &self.mode {
            FormMode::Create => {
                if name.is_empty() {
                    return Err(ConsoleError::Validation(NAME_REQUIRED.to_string()));
                }
                let client_id = self
                    .generator
                    .unique_client_id(|id| list.store().contains(id))?;
                let secret = self.generator.client_secret()?;
                let record = AppClient {
                    name,
                    client_id,
                    client_type: ClientType::Confidential,
                    flows: DEFAULT_FLOW.to_string(),
                    created: today(),
                    last_used: "-".to_string(),
                    callbacks: self.fields.callbacks.clone(),
                    logouts: self.fields.logouts.clone(),
                    scopes: Scope::join(&self.fields.scopes),
                };
                Ok(PreparedClient::Create { record, secret })
            }
            FormMode::Edit(id) => {
                if name.is_empty() {
                    return Err(ConsoleError::Validation(NAME_REQUIRED.to_string()));
                }
                if !list.store().contains(id) {
                    return Err(ConsoleError::RecordNotFound(id.clone()));
                }
                let mut fields = self.fields.clone();
                fields.name = name;
                Ok(PreparedClient::Edit {
                    id: id.clone(),
                    fields,
                })
            }
            FormMode::View(_) | FormMode::Closed => Err(ConsoleError::InvalidFormState(format!(
                "cannot submit in {} mode",
                self.mode.name()
            ))),
        }
    }

    /// Write a prepared submission to the store and close the form
    pub fn commit(
        &mut self,
        list: &mut ListController<AppClient>,
        prepared: PreparedClient,
    ) -> ConsoleResult<SubmitOutcome> {
        let outcome = match prepared {
            PreparedClient::Create { record, secret } => {
                let issued = IssuedCredentials {
                    name: record.name.clone(),
                    client_id: record.client_id.clone(),
                    client_secret: secret,
                };
                list.prepend(record)?;
                log::info!("App client created: {}", issued.client_id);
                SubmitOutcome::Created(issued)
            }
            PreparedClient::Edit { id, fields } => {
                list.update(&id, |client| {
                    client.name = fields.name;
                    client.callbacks = fields.callbacks;
                    client.logouts = fields.logouts;
                    client.flows = DEFAULT_FLOW.to_string();
                    client.scopes = Scope::join(&fields.scopes);
                })?;
                log::info!("App client updated: {id}");
                SubmitOutcome::Saved(id)
            }
        };
        self.close();
        Ok(outcome)
    }

    /// `prepare` followed by `commit`
    pub fn submit(&mut self, list: &mut ListController<AppClient>) -> ConsoleResult<SubmitOutcome> {
        let prepared = self.prepare(list)?;
        self.commit(list, prepared)
    }

    /// First delete step: returns the token the confirmation must present
    pub fn request_delete(
        &mut self,
        list: &ListController<AppClient>,
        id: &str,
    ) -> ConsoleResult<DeleteToken> {
        if !list.store().contains(id) {
            return Err(ConsoleError::RecordNotFound(id.to_string()));
        }
        self.delete_serial += 1;
        let token = DeleteToken {
            id: id.to_string(),
            serial: self.delete_serial,
        };
        self.pending_delete = Some(token.clone());
        Ok(token)
    }

    pub fn pending_delete(&self) -> Option<&DeleteToken> {
        self.pending_delete.as_ref()
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    /// Second delete step: removes exactly the client the token names
    pub fn confirm_delete(
        &mut self,
        list: &mut ListController<AppClient>,
        token: &DeleteToken,
    ) -> ConsoleResult<AppClient> {
        match &self.pending_delete {
            Some(pending) if pending == token => {}
            _ => {
                return Err(ConsoleError::InvalidFormState(
                    "delete was not confirmed".to_string(),
                ))
            }
        }
        self.pending_delete = None;
        let removed = list.remove(token.id())?;
        log::info!("App client deleted: {}", removed.id());
        Ok(removed)
    }
}
