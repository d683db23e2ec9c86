// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

mod actions;
mod config;
mod help;
mod preview;
mod run;
mod scripts;
