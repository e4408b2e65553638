// Copyright 2025 the Ringchart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Float helpers for `no_std` builds.
//!
//! `f64::floor` is not available in `core`, so percentages in legend rows go through this trait,
//! which dispatches to `libm` when the `std` feature is off.

#[cfg_attr(
    test,
    allow(dead_code, reason = "test builds link std, whose inherent methods take precedence")
)]
pub(crate) trait FloatExt {
    fn floor(self) -> Self;
}

#[cfg(all(not(feature = "std"), feature = "libm"))]
impl FloatExt for f64 {
    fn floor(self) -> Self {
        libm::floor(self)
    }
}

#[cfg(all(not(feature = "std"), not(feature = "libm")))]
compile_error!("ringchart requires either the `std` or `libm` feature");
