// src/store.rs
//! Session-lifetime result state. Mutated only by workflow completion
//! handlers in `session`; everything else reads.

use crate::artifact::{ArtifactStore, EnhancementArtifact};
use crate::types::AnalysisReport;

/// Lifecycle of one submission. Each workflow tracks its own state instead
/// of sharing a single loading flag, so analyze and enhance can run
/// independently without clobbering each other's indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OperationState {
    #[default]
    Idle,
    InFlight,
    Succeeded,
    Failed,
}

impl OperationState {
    /// InFlight is the only non-restartable state; both terminal states and
    /// Idle accept a new submission.
    pub fn can_submit(&self) -> bool {
        !matches!(self, OperationState::InFlight)
    }
}

/// Latest results for the active session. Nothing here survives a restart.
#[derive(Debug, Default)]
pub struct ResultStore {
    analysis: Option<AnalysisReport>,
    artifact: Option<EnhancementArtifact>,
    analyze_state: OperationState,
    enhance_state: OperationState,
}

impl ResultStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total replace; called only on analyze success.
    pub fn set_analysis(&mut self, report: AnalysisReport) {
        self.analysis = Some(report);
    }

    /// Release-then-install: the previous artifact's bytes are dropped from
    /// `artifacts` before the new handle goes in, so repeated enhance calls
    /// never accumulate dead handles.
    pub fn install_artifact(
        &mut self,
        artifacts: &mut ArtifactStore,
        artifact: EnhancementArtifact,
    ) {
        if let Some(previous) = self.artifact.take() {
            artifacts.release(&previous);
        }
        self.artifact = Some(artifact);
    }

    pub fn analysis(&self) -> Option<&AnalysisReport> {
        self.analysis.as_ref()
    }

    pub fn artifact(&self) -> Option<&EnhancementArtifact> {
        self.artifact.as_ref()
    }

    /// Remove the current handle without releasing it; the caller owns the
    /// release. Used by teardown.
    pub(crate) fn take_artifact(&mut self) -> Option<EnhancementArtifact> {
        self.artifact.take()
    }

    pub fn analyze_state(&self) -> OperationState {
        self.analyze_state
    }

    pub fn enhance_state(&self) -> OperationState {
        self.enhance_state
    }

    /// True while either workflow is in flight.
    pub fn is_busy(&self) -> bool {
        self.analyze_state == OperationState::InFlight
            || self.enhance_state == OperationState::InFlight
    }

    pub(crate) fn set_analyze_state(&mut self, state: OperationState) {
        self.analyze_state = state;
    }

    pub(crate) fn set_enhance_state(&mut self, state: OperationState) {
        self.enhance_state = state;
    }
}
