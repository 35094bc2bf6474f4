// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Editor data model.

pub mod canvas;
pub mod color;
pub mod element;
pub mod template;
