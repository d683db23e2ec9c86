// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Top-level invocation flow: collect, prompt, substitute, run, dispatch

use crate::collector::ContextCollector;
use crate::dispatch::{DispatchOutcome, Dispatcher};
use crate::executor::Executor;
use indexmap::IndexMap;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use vr_adapters::{
    ClipboardAdapter, HostAdapter, NotifyAdapter, PromptAdapter, PromptError, PromptOutcome,
    ResultPresenter,
};
use vr_core::{
    CommandExecutionResult, CommandScript, DefaultAction, ParameterContext, PromptSpec,
    ScriptStore,
};
use vr_shell::{Escaper, ResolvedShell, ShellEnv, Substitutor};

/// Errors that stop an invocation before anything runs
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("no script matches `{0}`")]
    ScriptNotFound(String),
    #[error(transparent)]
    Prompt(#[from] PromptError),
}

/// How one invocation ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvokeOutcome {
    /// The script is disabled; nothing ran
    Disabled,
    /// The user dismissed the prompt form; nothing ran
    Cancelled,
    /// Spawned detached; no result is captured
    Background { command: String },
    /// Foreground run finished. `dispatch` is `None` when the result was
    /// handed to the presenter instead of a default action.
    Completed { result: CommandExecutionResult, dispatch: Option<DispatchOutcome> },
}

/// External collaborators the controller drives
pub struct HostDeps<H, N, C, P, R> {
    pub host: H,
    pub notifier: N,
    pub clipboard: C,
    pub prompt: P,
    pub presenter: R,
}

/// Owns the script store and runs user-triggered invocations.
///
/// Each call works from one settings snapshot taken at its start, so
/// concurrent invocations share nothing mutable.
pub struct Controller<H, N, C, P, R> {
    store: Arc<ScriptStore>,
    env: ShellEnv,
    collector: ContextCollector<H>,
    executor: Executor<N>,
    dispatcher: Dispatcher<H, C, N>,
    prompt: P,
    presenter: R,
}

impl<H, N, C, P, R> Controller<H, N, C, P, R>
where
    H: HostAdapter,
    N: NotifyAdapter,
    C: ClipboardAdapter,
    P: PromptAdapter,
    R: ResultPresenter,
{
    pub fn new(store: Arc<ScriptStore>, env: ShellEnv, deps: HostDeps<H, N, C, P, R>) -> Self {
        Self {
            store,
            env,
            collector: ContextCollector::new(deps.host.clone()),
            executor: Executor::new(deps.notifier.clone()),
            dispatcher: Dispatcher::new(deps.host, deps.clipboard, deps.notifier),
            prompt: deps.prompt,
            presenter: deps.presenter,
        }
    }

    /// Override the foreground timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.executor = self.executor.with_timeout(timeout);
        self
    }

    pub fn store(&self) -> &ScriptStore {
        &self.store
    }

    /// Shell for the current settings
    pub fn shell(&self) -> ResolvedShell {
        ResolvedShell::resolve(&self.store.snapshot(), &self.env)
    }

    pub async fn collect_context(&self) -> ParameterContext {
        self.collector.collect().await
    }

    /// The literal command `script` would run against `ctx`.
    pub fn preview(&self, script: &CommandScript, ctx: &ParameterContext) -> String {
        substitutor(&self.shell()).substitute(&script.template, ctx)
    }

    /// Run the script named (or identified) by `key`.
    ///
    /// `supplied` carries prompt values known up front; only the remaining
    /// prompts go to the prompt collaborator.
    pub async fn invoke(
        &self,
        key: &str,
        supplied: IndexMap<String, String>,
    ) -> Result<InvokeOutcome, EngineError> {
        let settings = self.store.snapshot();
        let script = settings
            .find(key)
            .cloned()
            .ok_or_else(|| EngineError::ScriptNotFound(key.to_string()))?;
        if !script.enabled {
            tracing::info!(script = %script.name, "script disabled, not running");
            return Ok(InvokeOutcome::Disabled);
        }

        let ctx = self.collector.collect().await;
        let Some(ctx) = self.gather_prompts(&script, ctx, supplied).await? else {
            tracing::info!(script = %script.name, "prompt cancelled");
            return Ok(InvokeOutcome::Cancelled);
        };

        let shell = ResolvedShell::resolve(&settings, &self.env);
        let command = substitutor(&shell).substitute(&script.template, &ctx);

        if script.background {
            self.executor.run_detached(&shell, &settings, &script, &command, &ctx).await;
            return Ok(InvokeOutcome::Background { command });
        }

        let result = self.executor.run(&shell, &settings, &script, &command, &ctx).await;
        let dispatch = self.finish(&script, &result).await;
        Ok(InvokeOutcome::Completed { result, dispatch })
    }

    /// Merge supplied values and ask for the rest. `None` means cancelled.
    async fn gather_prompts(
        &self,
        script: &CommandScript,
        ctx: ParameterContext,
        supplied: IndexMap<String, String>,
    ) -> Result<Option<ParameterContext>, EngineError> {
        let mut values: IndexMap<String, String> =
            supplied.into_iter().map(|(k, v)| (k.to_lowercase(), v)).collect();
        let missing: Vec<PromptSpec> = script
            .prompts
            .iter()
            .filter(|p| !values.contains_key(&p.normalized_keyword()))
            .cloned()
            .collect();

        if !missing.is_empty() {
            match self.prompt.collect(&script.name, &missing).await? {
                PromptOutcome::Submitted(answers) => values.extend(answers),
                PromptOutcome::Cancelled => return Ok(None),
            }
        }
        Ok(Some(ctx.with_prompts(values)))
    }

    /// Exactly one of: apply the default action, or present the result.
    async fn finish(
        &self,
        script: &CommandScript,
        result: &CommandExecutionResult,
    ) -> Option<DispatchOutcome> {
        if result.success && script.default_action != DefaultAction::None {
            Some(self.dispatcher.apply(script.default_action, result).await)
        } else {
            self.presenter.present(result).await;
            None
        }
    }
}

fn substitutor(shell: &ResolvedShell) -> Substitutor {
    Substitutor::new(Escaper::for_dialect_or_default(&shell.dialect))
}

#[cfg(test)]
#[path = "controller_tests.rs"]
mod tests;
