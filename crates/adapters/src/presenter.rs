// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use async_trait::async_trait;
use vr_core::CommandExecutionResult;

/// Receives results that no default action consumed
#[async_trait]
pub trait ResultPresenter: Clone + Send + Sync + 'static {
    async fn present(&self, result: &CommandExecutionResult);
}

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(coverage_nightly, coverage(off))]
mod fake {
    use super::ResultPresenter;
    use async_trait::async_trait;
    use parking_lot::Mutex;
    use std::sync::Arc;
    use vr_core::CommandExecutionResult;

    /// Fake presenter that records every result
    #[derive(Clone, Default)]
    pub struct FakePresenter {
        presented: Arc<Mutex<Vec<CommandExecutionResult>>>,
    }

    impl FakePresenter {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn presented(&self) -> Vec<CommandExecutionResult> {
            self.presented.lock().clone()
        }
    }

    #[async_trait]
    impl ResultPresenter for FakePresenter {
        async fn present(&self, result: &CommandExecutionResult) {
            self.presented.lock().push(result.clone());
        }
    }
}

#[cfg(any(test, feature = "test-support"))]
pub use fake::FakePresenter;
