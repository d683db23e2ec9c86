// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Post-execution default actions

use vr_adapters::{ClipboardAdapter, HostAdapter, HostError, NotifyAdapter};
use vr_core::{CommandExecutionResult, DefaultAction};

/// What a default action did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// `none`: the caller presents the result itself
    Skipped,
    Copied,
    Replaced,
    Inserted,
    Appended,
    NoActiveEditor,
    NoSelection,
    NoActiveDocument,
    /// The collaborator refused the write
    Failed(String),
}

impl DispatchOutcome {
    /// Whether the action took effect
    pub fn applied(&self) -> bool {
        matches!(self, Self::Copied | Self::Replaced | Self::Inserted | Self::Appended)
    }

    fn notice(&self) -> Option<(&'static str, String)> {
        let notice = match self {
            Self::Skipped => return None,
            Self::Copied => ("Copied", "output copied to clipboard".to_string()),
            Self::Replaced => ("Replaced", "selection replaced with output".to_string()),
            Self::Inserted => ("Inserted", "output inserted at cursor".to_string()),
            Self::Appended => ("Appended", "output appended to note".to_string()),
            Self::NoActiveEditor => ("Nothing to do", "no active editor".to_string()),
            Self::NoSelection => ("Nothing to do", "no text selected".to_string()),
            Self::NoActiveDocument => ("Nothing to do", "no active note".to_string()),
            Self::Failed(reason) => ("Action failed", reason.clone()),
        };
        Some(notice)
    }
}

fn host_failure(e: HostError) -> DispatchOutcome {
    match e {
        HostError::NoActiveEditor => DispatchOutcome::NoActiveEditor,
        HostError::NoActiveDocument => DispatchOutcome::NoActiveDocument,
        other => DispatchOutcome::Failed(other.to_string()),
    }
}

/// Applies a default action to a captured result.
#[derive(Clone)]
pub struct Dispatcher<H, C, N> {
    host: H,
    clipboard: C,
    notifier: N,
}

impl<H, C, N> Dispatcher<H, C, N>
where
    H: HostAdapter,
    C: ClipboardAdapter,
    N: NotifyAdapter,
{
    pub fn new(host: H, clipboard: C, notifier: N) -> Self {
        Self { host, clipboard, notifier }
    }

    /// Perform `action` with `result.output` and report it to the user.
    ///
    /// Never fails; missing editors, selections or documents come back as
    /// outcomes.
    pub async fn apply(
        &self,
        action: DefaultAction,
        result: &CommandExecutionResult,
    ) -> DispatchOutcome {
        let outcome = match action {
            DefaultAction::None => DispatchOutcome::Skipped,
            DefaultAction::Copy => match self.clipboard.write_text(&result.output).await {
                Ok(()) => DispatchOutcome::Copied,
                Err(e) => DispatchOutcome::Failed(e.to_string()),
            },
            DefaultAction::Replace => self.replace(&result.output).await,
            DefaultAction::Insert => self.insert(&result.output).await,
            DefaultAction::Append => self.append(&result.output).await,
        };

        tracing::info!(%action, ?outcome, "applied default action");
        if let Some((title, message)) = outcome.notice() {
            if let Err(e) = self.notifier.notify(title, &message).await {
                tracing::debug!(error = %e, "notice not delivered");
            }
        }
        outcome
    }

    async fn replace(&self, output: &str) -> DispatchOutcome {
        let Some(editor) = self.host.editor_state() else {
            return DispatchOutcome::NoActiveEditor;
        };
        if !matches!(editor.selection.as_deref(), Some(s) if !s.is_empty()) {
            return DispatchOutcome::NoSelection;
        }
        match self.host.replace_selection(output).await {
            Ok(()) => DispatchOutcome::Replaced,
            Err(e) => host_failure(e),
        }
    }

    async fn insert(&self, output: &str) -> DispatchOutcome {
        if self.host.editor_state().is_none() {
            return DispatchOutcome::NoActiveEditor;
        }
        match self.host.insert_at_cursor(output).await {
            Ok(()) => DispatchOutcome::Inserted,
            Err(e) => host_failure(e),
        }
    }

    /// Full read-modify-write of the active document.
    async fn append(&self, output: &str) -> DispatchOutcome {
        let Some(doc) = self.host.active_document() else {
            return DispatchOutcome::NoActiveDocument;
        };
        let current = match self.host.read_document(&doc).await {
            Ok(text) => text,
            Err(e) => return host_failure(e),
        };
        let updated = format!("{current}\n{output}");
        match self.host.write_document(&doc, &updated).await {
            Ok(()) => DispatchOutcome::Appended,
            Err(e) => host_failure(e),
        }
    }
}

#[cfg(test)]
#[path = "dispatch_tests.rs"]
mod tests;
