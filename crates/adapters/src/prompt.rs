// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use async_trait::async_trait;
use indexmap::IndexMap;
use thiserror::Error;
use vr_core::PromptSpec;

/// Errors from prompting the user
#[derive(Debug, Error)]
pub enum PromptError {
    #[error("prompt failed: {0}")]
    Io(#[from] std::io::Error),
}

/// What the user did with a prompt form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptOutcome {
    /// Keyword to value, one entry per requested prompt
    Submitted(IndexMap<String, String>),
    Cancelled,
}

/// Adapter for asking the user for named values
#[async_trait]
pub trait PromptAdapter: Clone + Send + Sync + 'static {
    /// Suspend until the user submits or cancels.
    async fn collect(
        &self,
        script_name: &str,
        prompts: &[PromptSpec],
    ) -> Result<PromptOutcome, PromptError>;
}

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(coverage_nightly, coverage(off))]
mod fake {
    use super::{PromptAdapter, PromptError, PromptOutcome};
    use async_trait::async_trait;
    use indexmap::IndexMap;
    use parking_lot::Mutex;
    use std::sync::Arc;
    use vr_core::PromptSpec;

    struct FakePromptState {
        answers: IndexMap<String, String>,
        cancel: bool,
        requests: Vec<Vec<String>>,
    }

    /// Fake prompt that answers from a fixed table
    #[derive(Clone)]
    pub struct FakePrompt {
        inner: Arc<Mutex<FakePromptState>>,
    }

    impl Default for FakePrompt {
        fn default() -> Self {
            Self {
                inner: Arc::new(Mutex::new(FakePromptState {
                    answers: IndexMap::new(),
                    cancel: false,
                    requests: Vec::new(),
                })),
            }
        }
    }

    impl FakePrompt {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn answer(self, keyword: &str, value: &str) -> Self {
            self.inner.lock().answers.insert(keyword.to_string(), value.to_string());
            self
        }

        /// Cancel every prompt form
        pub fn cancelling() -> Self {
            let fake = Self::default();
            fake.inner.lock().cancel = true;
            fake
        }

        /// Keywords requested per call
        pub fn requests(&self) -> Vec<Vec<String>> {
            self.inner.lock().requests.clone()
        }
    }

    #[async_trait]
    impl PromptAdapter for FakePrompt {
        async fn collect(
            &self,
            _script_name: &str,
            prompts: &[PromptSpec],
        ) -> Result<PromptOutcome, PromptError> {
            let mut state = self.inner.lock();
            state.requests.push(prompts.iter().map(|p| p.keyword.clone()).collect());
            if state.cancel {
                return Ok(PromptOutcome::Cancelled);
            }
            let values = prompts
                .iter()
                .map(|p| {
                    let value = state.answers.get(&p.keyword).cloned().unwrap_or_default();
                    (p.keyword.clone(), value)
                })
                .collect();
            Ok(PromptOutcome::Submitted(values))
        }
    }
}

#[cfg(any(test, feature = "test-support"))]
pub use fake::FakePrompt;
