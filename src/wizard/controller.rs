use crate::catalog;
use crate::config::key_store::{KeyStore, KeyStoreError};
use crate::llm::client::{FailureKind, GenerationRequest, LLMError, TextGenerator};
use crate::llm::{prompts, response};
use crate::wizard::options::{Theme, WebsiteOptions};
use crate::wizard::step::Step;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Misuse of the controller: an action that the current state does not allow
///
/// Failed generation calls are not errors at this level; they are recorded in
/// the session and reported through [`GenerationOutcome`].
#[derive(Debug, Error)]
pub enum WizardError {
    #[error("'{action}' is not available during the {step} step")]
    InvalidTransition { step: Step, action: &'static str },

    #[error("The wizard is locked until an API key is entered")]
    Locked,

    #[error("A generation call is already in progress")]
    Busy,

    #[error("No {0} has been selected yet")]
    MissingSelection(&'static str),

    #[error("Unknown {kind}: {value}")]
    UnknownOption { kind: &'static str, value: String },

    #[error("A palette needs at least two colors")]
    InvalidPalette,

    #[error("API key cannot be empty")]
    EmptyCredential,

    #[error("Key store error: {0}")]
    KeyStore(#[from] KeyStoreError),
}

/// Result of one generation call, after the session has been updated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationOutcome {
    Completed,
    Failed { kind: FailureKind },
}

/// Everything the wizard knows about the current session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    pub step: Step,
    pub options: WebsiteOptions,
    pub description: String,
    pub generated_code: String,
    pub is_loading: bool,
    pub error: Option<String>,
    pub credential: Option<String>,
}

impl SessionState {
    pub fn new(credential: Option<String>) -> Self {
        Self {
            step: Step::Type,
            options: WebsiteOptions::default(),
            description: String::new(),
            generated_code: String::new(),
            is_loading: false,
            error: None,
            credential,
        }
    }
}

/// Drives the step flow and the two generation calls
///
/// The controller is the only writer of [`SessionState`]. Both generation
/// operations take `&mut self`, so at most one call can be in flight.
pub struct WizardController {
    session: SessionState,
    generator: Box<dyn TextGenerator>,
    key_store: Box<dyn KeyStore>,
    max_output_tokens: u32,
}

impl std::fmt::Debug for WizardController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WizardController")
            .field("step", &self.session.step)
            .field("max_output_tokens", &self.max_output_tokens)
            .finish_non_exhaustive()
    }
}

impl WizardController {
    /// Create a controller, loading any saved credential from `key_store`
    pub fn new(
        generator: Box<dyn TextGenerator>,
        key_store: Box<dyn KeyStore>,
    ) -> Result<Self, WizardError> {
        let credential = key_store.load()?;
        debug!(unlocked = credential.is_some(), "Wizard session created");

        Ok(Self {
            session: SessionState::new(credential),
            generator,
            key_store,
            max_output_tokens: 8000,
        })
    }

    /// Token cap for the code generation call
    pub fn with_max_output_tokens(mut self, tokens: u32) -> Self {
        self.max_output_tokens = tokens;
        self
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    pub fn step(&self) -> Step {
        self.session.step
    }

    pub fn options(&self) -> &WebsiteOptions {
        &self.session.options
    }

    pub fn description(&self) -> &str {
        &self.session.description
    }

    pub fn generated_code(&self) -> &str {
        &self.session.generated_code
    }

    pub fn error(&self) -> Option<&str> {
        self.session.error.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.session.is_loading
    }

    pub fn is_unlocked(&self) -> bool {
        self.session.credential.is_some()
    }

    /// Whether generic back navigation is offered right now
    pub fn can_go_back(&self) -> bool {
        self.session.step.shows_back()
    }

    /// Store a new credential and restart the flow at TYPE
    pub fn submit_credential(&mut self, input: &str) -> Result<(), WizardError> {
        let key = input.trim();
        if key.is_empty() {
            return Err(WizardError::EmptyCredential);
        }

        self.key_store.save(key)?;
        self.session.credential = Some(key.to_string());
        self.session.step = Step::Type;
        info!("API key saved, wizard unlocked");
        Ok(())
    }

    /// Forget the credential and reset the whole session
    pub fn revoke_credential(&mut self) -> Result<(), WizardError> {
        self.key_store.clear()?;
        self.session = SessionState::new(None);
        info!("API key revoked, session cleared");
        Ok(())
    }

    pub fn select_type(&mut self, name: &str) -> Result<(), WizardError> {
        self.require(Step::Type, "select type")?;
        if !catalog::is_website_type(name) {
            return Err(WizardError::UnknownOption {
                kind: "website type",
                value: name.to_string(),
            });
        }

        self.session.options.site_type = name.to_string();
        self.advance_to(Step::Style);
        Ok(())
    }

    pub fn select_style(&mut self, name: &str) -> Result<(), WizardError> {
        self.require(Step::Style, "select style")?;
        if !catalog::is_style(name) {
            return Err(WizardError::UnknownOption {
                kind: "style",
                value: name.to_string(),
            });
        }

        self.session.options.style = name.to_string();
        self.advance_to(Step::Branding);
        Ok(())
    }

    pub fn set_colors(&mut self, colors: Vec<String>) -> Result<(), WizardError> {
        self.require(Step::Branding, "set colors")?;
        if colors.len() < 2 {
            return Err(WizardError::InvalidPalette);
        }
        self.session.options.colors = colors;
        Ok(())
    }

    pub fn set_font(&mut self, font: &str) -> Result<(), WizardError> {
        self.require(Step::Branding, "set font")?;
        if !catalog::is_font(font) {
            return Err(WizardError::UnknownOption {
                kind: "font",
                value: font.to_string(),
            });
        }
        self.session.options.font = font.to_string();
        Ok(())
    }

    pub fn set_theme(&mut self, theme: Theme) -> Result<(), WizardError> {
        self.require(Step::Branding, "set theme")?;
        self.session.options.theme = theme;
        Ok(())
    }

    /// Leave BRANDING for DESCRIPTION_GENERATION
    ///
    /// Callers that render a loading screen do this first, draw, and then
    /// await [`generate_description`](Self::generate_description).
    pub fn confirm_branding(&mut self) -> Result<(), WizardError> {
        self.require(Step::Branding, "confirm branding")?;
        if let Some(field) = self.session.options.missing_field() {
            return Err(WizardError::MissingSelection(field));
        }
        self.advance_to(Step::DescriptionGeneration);
        Ok(())
    }

    /// Ask the model for a layout description of the current options
    ///
    /// Accepts BRANDING (confirming it first) or DESCRIPTION_GENERATION.
    /// Success moves to DESCRIPTION_CONFIRM; failure records the error and
    /// returns to BRANDING.
    pub async fn generate_description(&mut self) -> Result<GenerationOutcome, WizardError> {
        if self.session.step == Step::Branding {
            self.confirm_branding()?;
        }
        self.require(Step::DescriptionGeneration, "generate description")?;
        let credential = self.begin_call()?;

        let request = GenerationRequest::new(prompts::description_prompt(&self.session.options));
        let result = self.generator.generate(&credential, &request).await;
        self.session.is_loading = false;

        match result {
            Ok(text) => {
                self.session.description = text.trim().to_string();
                self.advance_to(Step::DescriptionConfirm);
                info!(chars = self.session.description.len(), "Description generated");
                Ok(GenerationOutcome::Completed)
            }
            Err(e) => Ok(self.fail("Failed to generate the layout description", e, Step::Branding)),
        }
    }

    /// Return from DESCRIPTION_CONFIRM to BRANDING without building anything
    pub fn reject_description(&mut self) -> Result<(), WizardError> {
        self.require(Step::DescriptionConfirm, "go back")?;
        self.advance_to(Step::Branding);
        Ok(())
    }

    /// Leave DESCRIPTION_CONFIRM for CODE_GENERATION
    pub fn confirm_description(&mut self) -> Result<(), WizardError> {
        self.require(Step::DescriptionConfirm, "confirm description")?;
        if self.session.description.is_empty() {
            return Err(WizardError::MissingSelection("description"));
        }
        self.advance_to(Step::CodeGeneration);
        Ok(())
    }

    /// Ask the model for the HTML document
    ///
    /// Accepts DESCRIPTION_CONFIRM (confirming it first) or CODE_GENERATION.
    /// Success stores the unfenced markup and moves to DONE; failure records
    /// the error and returns to DESCRIPTION_CONFIRM.
    pub async fn generate_code(&mut self) -> Result<GenerationOutcome, WizardError> {
        if self.session.step == Step::DescriptionConfirm {
            self.confirm_description()?;
        }
        self.require(Step::CodeGeneration, "generate code")?;
        let credential = self.begin_call()?;

        let request = GenerationRequest::new(prompts::code_prompt(
            &self.session.options,
            &self.session.description,
        ))
        .with_max_output_tokens(self.max_output_tokens);
        let result = self.generator.generate(&credential, &request).await;
        self.session.is_loading = false;

        match result {
            Ok(text) => {
                self.session.generated_code = response::strip_code_fence(&text);
                self.advance_to(Step::Done);
                info!(chars = self.session.generated_code.len(), "Website code generated");
                Ok(GenerationOutcome::Completed)
            }
            Err(e) => Ok(self.fail(
                "Failed to generate the website code",
                e,
                Step::DescriptionConfirm,
            )),
        }
    }

    /// Start over from BRANDING, keeping every chosen option
    pub fn start_new_project(&mut self) -> Result<(), WizardError> {
        self.require(Step::Done, "start a new project")?;
        self.session.description.clear();
        self.session.generated_code.clear();
        self.advance_to(Step::Branding);
        Ok(())
    }

    /// Generic back navigation between TYPE and BRANDING
    pub fn back(&mut self) -> Result<(), WizardError> {
        let step = self.session.step;
        match step.previous() {
            Some(previous) if step.shows_back() => {
                self.advance_to(previous);
                Ok(())
            }
            _ => Err(WizardError::InvalidTransition { step, action: "back" }),
        }
    }

    fn require(&self, expected: Step, action: &'static str) -> Result<(), WizardError> {
        if !self.is_unlocked() {
            return Err(WizardError::Locked);
        }
        if self.session.is_loading {
            return Err(WizardError::Busy);
        }
        if self.session.step != expected {
            return Err(WizardError::InvalidTransition {
                step: self.session.step,
                action,
            });
        }
        Ok(())
    }

    /// Move to `step`, clearing any error shown for the previous one
    fn advance_to(&mut self, step: Step) {
        debug!(from = %self.session.step, to = %step, "Step transition");
        self.session.error = None;
        self.session.step = step;
    }

    fn begin_call(&mut self) -> Result<String, WizardError> {
        let credential = self.session.credential.clone().ok_or(WizardError::Locked)?;
        self.session.error = None;
        self.session.is_loading = true;
        Ok(credential)
    }

    fn fail(&mut self, context: &str, error: LLMError, fallback: Step) -> GenerationOutcome {
        let kind = error.kind();
        warn!(step = %self.session.step, ?kind, "{}: {}", context, error);

        if kind == FailureKind::Credential {
            // Force the key to be entered again
            if let Err(e) = self.key_store.clear() {
                warn!("Failed to clear rejected API key: {}", e);
            }
            self.session.credential = None;
        }

        self.session.step = fallback;
        self.session.error = Some(format!("{}: {}", context, error));
        GenerationOutcome::Failed { kind }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::key_store::MemoryKeyStore;
    use async_trait::async_trait;
    use std::sync::{Arc, Mutex};

    /// Replies with queued results and records every prompt it receives
    struct ScriptedGenerator {
        replies: Mutex<Vec<Result<String, LLMError>>>,
        requests: Arc<Mutex<Vec<GenerationRequest>>>,
    }

    #[async_trait]
    impl TextGenerator for ScriptedGenerator {
        async fn generate(&self, _credential: &str, request: &GenerationRequest) -> Result<String, LLMError> {
            self.requests.lock().unwrap().push(request.clone());
            self.replies.lock().unwrap().remove(0)
        }
    }

    fn controller(replies: Vec<Result<String, LLMError>>) -> (WizardController, Arc<Mutex<Vec<GenerationRequest>>>) {
        let requests = Arc::new(Mutex::new(Vec::new()));
        let generator = ScriptedGenerator {
            replies: Mutex::new(replies),
            requests: Arc::clone(&requests),
        };
        let controller = WizardController::new(
            Box::new(generator),
            Box::new(MemoryKeyStore::with_value("test-key")),
        )
        .unwrap();
        (controller, requests)
    }

    fn at_branding(controller: &mut WizardController) {
        controller.select_type("Blog").unwrap();
        controller.select_style("Modern").unwrap();
    }

    #[test]
    fn test_new_session_defaults() {
        let (controller, _) = controller(vec![]);
        let session = controller.session();
        assert_eq!(session.step, Step::Type);
        assert!(session.description.is_empty());
        assert!(session.generated_code.is_empty());
        assert!(!session.is_loading);
        assert!(session.error.is_none());
        assert_eq!(session.credential.as_deref(), Some("test-key"));
    }

    #[test]
    fn test_locked_without_credential() {
        let mut controller =
            WizardController::new(Box::new(ScriptedGenerator {
                replies: Mutex::new(vec![]),
                requests: Arc::new(Mutex::new(vec![])),
            }), Box::new(MemoryKeyStore::new()))
            .unwrap();

        assert!(!controller.is_unlocked());
        assert!(matches!(controller.select_type("Blog"), Err(WizardError::Locked)));
    }

    #[test]
    fn test_selection_transitions() {
        let (mut controller, _) = controller(vec![]);
        controller.select_type("Portfolio").unwrap();
        assert_eq!(controller.step(), Step::Style);
        controller.select_style("Minimalist").unwrap();
        assert_eq!(controller.step(), Step::Branding);
        assert_eq!(controller.options().site_type, "Portfolio");
        assert_eq!(controller.options().style, "Minimalist");
    }

    #[test]
    fn test_unknown_options_are_rejected() {
        let (mut controller, _) = controller(vec![]);
        assert!(matches!(
            controller.select_type("Forum"),
            Err(WizardError::UnknownOption { kind: "website type", .. })
        ));
        assert_eq!(controller.step(), Step::Type);
    }

    #[test]
    fn test_branding_edits_stay_on_branding() {
        let (mut controller, _) = controller(vec![]);
        at_branding(&mut controller);

        controller
            .set_colors(vec!["#000".to_string(), "#fff".to_string()])
            .unwrap();
        controller.set_font("Poppins").unwrap();
        controller.set_theme(Theme::Dark).unwrap();

        assert_eq!(controller.step(), Step::Branding);
        assert_eq!(controller.options().font, "Poppins");
        assert_eq!(controller.options().theme, Theme::Dark);
    }

    #[test]
    fn test_colors_never_empty() {
        let (mut controller, _) = controller(vec![]);
        at_branding(&mut controller);

        assert!(matches!(controller.set_colors(vec![]), Err(WizardError::InvalidPalette)));
        assert!(matches!(
            controller.set_colors(vec!["#000".to_string()]),
            Err(WizardError::InvalidPalette)
        ));
        assert_eq!(controller.options().colors.len(), 3);
    }

    #[test]
    fn test_back_navigation() {
        let (mut controller, _) = controller(vec![]);
        assert!(controller.back().is_err());

        at_branding(&mut controller);
        controller.back().unwrap();
        assert_eq!(controller.step(), Step::Style);
        controller.back().unwrap();
        assert_eq!(controller.step(), Step::Type);
        assert!(matches!(
            controller.back(),
            Err(WizardError::InvalidTransition { step: Step::Type, .. })
        ));
    }

    #[tokio::test]
    async fn test_description_prompt_and_trim() {
        let (mut controller, requests) = controller(vec![Ok("  A calm blog.\n".to_string())]);
        at_branding(&mut controller);

        let outcome = controller.generate_description().await.unwrap();
        assert_eq!(outcome, GenerationOutcome::Completed);
        assert_eq!(controller.description(), "A calm blog.");

        let requests = requests.lock().unwrap();
        assert_eq!(requests.len(), 1);
        assert!(requests[0].prompt.contains("Blog"));
        assert_eq!(requests[0].max_output_tokens, None);
    }

    #[tokio::test]
    async fn test_code_request_carries_token_cap() {
        let (controller, requests) = controller(vec![
            Ok("desc".to_string()),
            Ok("<html></html>".to_string()),
        ]);
        let mut controller = controller.with_max_output_tokens(1234);
        at_branding(&mut controller);

        controller.generate_description().await.unwrap();
        controller.generate_code().await.unwrap();

        let requests = requests.lock().unwrap();
        assert_eq!(requests[1].max_output_tokens, Some(1234));
        assert!(requests[1].prompt.contains("Layout: desc"));
    }

    #[tokio::test]
    async fn test_generation_from_wrong_step() {
        let (mut controller, requests) = controller(vec![]);
        assert!(matches!(
            controller.generate_description().await,
            Err(WizardError::InvalidTransition { step: Step::Type, .. })
        ));
        assert!(controller.generate_code().await.is_err());
        assert!(requests.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_error_cleared_on_next_transition() {
        let (mut controller, _) = controller(vec![
            Err(LLMError::Timeout),
            Ok("desc".to_string()),
        ]);
        at_branding(&mut controller);

        controller.generate_description().await.unwrap();
        assert!(controller.error().is_some());
        assert_eq!(controller.step(), Step::Branding);

        controller.generate_description().await.unwrap();
        assert!(controller.error().is_none());
        assert_eq!(controller.step(), Step::DescriptionConfirm);
    }

    #[test]
    fn test_submit_credential_validation() {
        let (mut controller, _) = controller(vec![]);
        assert!(matches!(controller.submit_credential("   "), Err(WizardError::EmptyCredential)));

        at_branding(&mut controller);
        controller.submit_credential(" new-key ").unwrap();
        assert_eq!(controller.session().credential.as_deref(), Some("new-key"));
        assert_eq!(controller.step(), Step::Type);
    }

    #[test]
    fn test_revoke_resets_session() {
        let (mut controller, _) = controller(vec![]);
        at_branding(&mut controller);

        controller.revoke_credential().unwrap();
        assert!(!controller.is_unlocked());
        assert_eq!(controller.session(), &SessionState::new(None));
    }
}
