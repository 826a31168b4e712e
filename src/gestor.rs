use crate::novedades::api::{APIError, NovedadesAPI};
use crate::novedades::model::{Notice, NoticeForm};
use crate::novedades::validation::{validate_edit, validate_new, ValidationError};
use crate::novedades::view::{build_view, ListView};
use chrono::NaiveDateTime;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{info, instrument, warn};

const SUBMIT_LABEL: &str = "Agregar";
const SUBMITTING_LABEL: &str = "Agregando...";

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::IntoStaticStr)]
pub enum Action {
    Load,
    Create,
    Update,
    Delete,
}

impl Action {
    pub fn failure_message(&self) -> &'static str {
        match self {
            Action::Load => "Error al cargar Novedades",
            Action::Create => "Error al agregar Novedad",
            Action::Update => "Error al editar Novedad",
            Action::Delete => "Error al eliminar Novedad",
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum GestorError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("{}", .action.failure_message())]
    Request {
        action: Action,
        #[source]
        source: APIError,
    },
    #[error("No existe la novedad '{0}'")]
    UnknownNotice(String),
    #[error("No hay ninguna novedad en edición")]
    NoEditInProgress,
}

/// Shared view of the create button: readable while `Gestor::add` is awaiting
#[derive(Debug, Clone, Default)]
pub struct SubmitStatus {
    submitting: Arc<AtomicBool>,
}

impl SubmitStatus {
    pub fn is_submitting(&self) -> bool {
        self.submitting.load(Ordering::SeqCst)
    }

    pub fn label(&self) -> &'static str {
        if self.is_submitting() {
            SUBMITTING_LABEL
        } else {
            SUBMIT_LABEL
        }
    }

    fn start(&self) -> SubmittingGuard {
        self.submitting.store(true, Ordering::SeqCst);

        SubmittingGuard {
            submitting: self.submitting.clone(),
        }
    }
}

/// Clears the flag even when the request future is dropped
struct SubmittingGuard {
    submitting: Arc<AtomicBool>,
}

impl Drop for SubmittingGuard {
    fn drop(&mut self) {
        self.submitting.store(false, Ordering::SeqCst);
    }
}

/// Notice being edited in the modal, kept apart from the create form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSession {
    pub id: String,
    pub form: NoticeForm,
}

/// State of the "Gestor de novedades" page
pub struct Gestor {
    api: NovedadesAPI,
    notices: Vec<Notice>,
    pub form: NoticeForm,
    pub search: String,
    edit: Option<EditSession>,
    status: SubmitStatus,
}

impl Gestor {
    pub fn new(api: NovedadesAPI) -> Self {
        Self {
            api,
            notices: Vec::new(),
            form: NoticeForm::default(),
            search: String::new(),
            edit: None,
            status: SubmitStatus::default(),
        }
    }

    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    pub fn editing(&self) -> Option<&EditSession> {
        self.edit.as_ref()
    }

    pub fn edit_form_mut(&mut self) -> Option<&mut NoticeForm> {
        self.edit.as_mut().map(|session| &mut session.form)
    }

    pub fn submit_status(&self) -> SubmitStatus {
        self.status.clone()
    }

    pub fn is_submitting(&self) -> bool {
        self.status.is_submitting()
    }

    pub fn submit_label(&self) -> &'static str {
        self.status.label()
    }

    /// Replaces the held list with a fresh fetch
    #[instrument(skip(self))]
    pub async fn load(&mut self) -> Result<(), GestorError> {
        self.notices = self
            .api
            .get_notices()
            .await
            .map_err(|source| request_failed(Action::Load, source))?;

        Ok(())
    }

    #[instrument(skip(self), fields(name = %self.form.name))]
    pub async fn add(&mut self) -> Result<(), GestorError> {
        validate_new(&self.form)?;

        let result = {
            let _submitting = self.status.start();
            self.api.create_notice(&self.form).await
        };

        result.map_err(|source| request_failed(Action::Create, source))?;

        self.form.clear();
        self.load().await
    }

    #[instrument(skip(self))]
    pub async fn delete(&mut self, id: &str) -> Result<(), GestorError> {
        self.api
            .delete_notice(id)
            .await
            .map_err(|source| request_failed(Action::Delete, source))?;

        self.load().await
    }

    pub fn start_edit(&mut self, id: &str) -> Result<(), GestorError> {
        let notice = self
            .notices
            .iter()
            .find(|notice| notice.id == id)
            .ok_or_else(|| GestorError::UnknownNotice(id.to_string()))?;

        self.edit = Some(EditSession {
            id: notice.id.clone(),
            form: NoticeForm::from_notice(notice),
        });

        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn save_edit(&mut self) -> Result<(), GestorError> {
        let session = self.edit.as_ref().ok_or(GestorError::NoEditInProgress)?;

        validate_edit(&session.form)?;

        self.api
            .update_notice(&session.id, &session.form)
            .await
            .map_err(|source| request_failed(Action::Update, source))?;

        self.edit = None;
        self.load().await
    }

    pub fn cancel_edit(&mut self) {
        if let Some(session) = self.edit.take() {
            info!("Discarding edit of notice {}", session.id);
        }
    }

    pub fn view(&self, now: NaiveDateTime) -> ListView<'_> {
        build_view(&self.notices, &self.search, now)
    }
}

fn request_failed(action: Action, source: APIError) -> GestorError {
    let action_name: &'static str = action.into();
    warn!("{} failed: {}", action_name, source);

    GestorError::Request { action, source }
}
