// SPDX-License-Identifier: MPL-2.0
//! UI components: navbar, gallery viewer, and decorative effects.

pub mod effects;
pub mod navbar;
pub mod viewer;
