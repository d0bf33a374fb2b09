// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Tests for the resource core against the mock remote store
//!
//! Covers name derivation, list refresh, the mutation flows, module
//! switching and the panel facade.


mod panel_tests;
mod selector_tests;
mod store_tests;
