//! Building the replacement license header.
//!
//! - [`attribution`] — pulls `SPDX-FileCopyrightText` holders out of a matched span.
//! - [`template`] — the fixed GPL boilerplate and the `@copyright` line renderer.

pub mod attribution;
pub mod template;
