// src/session.rs
//! One user session: input snapshotting, the analyze and enhance workflows,
//! and the result state they feed. Each workflow runs to a terminal outcome;
//! a second submission on the same workflow is refused while one is in
//! flight. Analyze and enhance keep independent states, so one of each may
//! run at the same time the way the original UI allows.

use anyhow::Result;
use tracing::{error, info};

use crate::artifact::ArtifactStore;
use crate::config::ServiceConfig;
use crate::core::EnhancerServiceClient;
use crate::error::EnhancerError;
use crate::input::InputState;
use crate::request::RequestBuilder;
use crate::store::{OperationState, ResultStore};

const DEFAULT_DOWNLOAD_NAME: &str = "enhanced_resume.pdf";

pub struct EnhancerSession {
    client: EnhancerServiceClient,
    store: ResultStore,
    artifacts: ArtifactStore,
}

impl EnhancerSession {
    pub fn new(config: &ServiceConfig) -> Result<Self> {
        Ok(Self {
            client: EnhancerServiceClient::new(config)?,
            store: ResultStore::new(),
            artifacts: ArtifactStore::new(),
        })
    }

    pub fn store(&self) -> &ResultStore {
        &self.store
    }

    /// Bytes of the currently installed enhanced document, if any.
    pub fn artifact_bytes(&self) -> Option<&[u8]> {
        self.store
            .artifact()
            .and_then(|handle| self.artifacts.read(handle))
    }

    /// Live artifact handles; stays at one across repeated enhance calls.
    pub fn live_artifacts(&self) -> usize {
        self.artifacts.live_count()
    }

    /// Run one analyze submission to its terminal state. On success the
    /// store's report is replaced wholesale; on any failure the store is
    /// untouched and the error is surfaced exactly once.
    pub async fn analyze(&mut self, input: &InputState) -> Result<(), EnhancerError> {
        if !self.store.analyze_state().can_submit() {
            return Err(EnhancerError::OperationInFlight {
                operation: "analyze",
            });
        }
        // Snapshot the input before going in-flight; a missing document
        // fails here, before any network activity.
        let payload = RequestBuilder::build(input)?;

        let mut guard = InFlightGuard::new(&mut self.store, Workflow::Analyze);
        match self.client.analyze(&payload).await {
            Ok(report) => {
                info!(
                    "Analysis complete: {} suggested changes",
                    report.detailed_changes.len()
                );
                let store = guard.disarm();
                store.set_analysis(report);
                store.set_analyze_state(OperationState::Succeeded);
                Ok(())
            }
            Err(e) => {
                error!("Analyze workflow failed: {}", e);
                guard.disarm().set_analyze_state(OperationState::Failed);
                Err(e)
            }
        }
    }

    /// Run one enhance submission to its terminal state. On success the
    /// previous artifact handle is released before the new one is installed;
    /// on failure the previous artifact stays as it was.
    pub async fn enhance(&mut self, input: &InputState) -> Result<(), EnhancerError> {
        if !self.store.enhance_state().can_submit() {
            return Err(EnhancerError::OperationInFlight {
                operation: "enhance",
            });
        }
        let payload = RequestBuilder::build(input)?;

        let mut guard = InFlightGuard::new(&mut self.store, Workflow::Enhance);
        match self.client.enhance(&payload).await {
            Ok(document) => {
                info!("Enhancement complete: {} bytes", document.bytes.len());
                let file_name = download_file_name(document.content_type.as_deref());
                let handle = self.artifacts.acquire(document.bytes, file_name);
                let store = guard.disarm();
                store.install_artifact(&mut self.artifacts, handle);
                store.set_enhance_state(OperationState::Succeeded);
                Ok(())
            }
            Err(e) => {
                error!("Enhance workflow failed: {}", e);
                guard.disarm().set_enhance_state(OperationState::Failed);
                Err(e)
            }
        }
    }

    /// Release the current artifact, if any. Called on teardown; releasing
    /// again is a no-op.
    pub fn clear_artifact(&mut self) {
        if let Some(handle) = self.store.take_artifact() {
            self.artifacts.release(&handle);
        }
    }
}

#[derive(Clone, Copy)]
enum Workflow {
    Analyze,
    Enhance,
}

/// Marks one workflow in-flight for as long as its submission future lives.
/// The success and error arms disarm it after recording the outcome; if the
/// caller drops the future mid-flight instead (timeout, select), the guard
/// records `Failed` so the marker never goes stale.
struct InFlightGuard<'a> {
    store: &'a mut ResultStore,
    workflow: Workflow,
    armed: bool,
}

impl<'a> InFlightGuard<'a> {
    fn new(store: &'a mut ResultStore, workflow: Workflow) -> Self {
        match workflow {
            Workflow::Analyze => store.set_analyze_state(OperationState::InFlight),
            Workflow::Enhance => store.set_enhance_state(OperationState::InFlight),
        }
        Self {
            store,
            workflow,
            armed: true,
        }
    }

    /// Hand the store back to the caller, which now owns the terminal
    /// transition.
    fn disarm(&mut self) -> &mut ResultStore {
        self.armed = false;
        self.store
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        if self.armed {
            match self.workflow {
                Workflow::Analyze => self.store.set_analyze_state(OperationState::Failed),
                Workflow::Enhance => self.store.set_enhance_state(OperationState::Failed),
            }
        }
    }
}

/// Download name for the enhanced document. The service normally answers
/// with a PDF; a wordprocessing content type switches the extension.
fn download_file_name(content_type: Option<&str>) -> String {
    match content_type {
        Some(ct) if ct.contains("wordprocessingml") => "enhanced_resume.docx".to_string(),
        _ => DEFAULT_DOWNLOAD_NAME.to_string(),
    }
}
