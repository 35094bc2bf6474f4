// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! UI components for the build editor.

pub mod canvas;
pub mod paint;
pub mod palette;
pub mod properties;
pub mod toolbar;
