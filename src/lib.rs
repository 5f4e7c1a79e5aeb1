//! # applist
//!
//! Generates the list of apps shipped with the O_C firmware.
//!
//! The firmware registers its plugins with `DECLARE_APP`-style macro calls in
//! two source files. applist scans those files line by line, pulls the app
//! name out of each registration and prints two markdown bullet lists:
//!
//! - **o_C APPS** from `OC_apps.cpp`
//! - **Hemisphere APPS** from `hemisphere_config.h`
//!
//! The scan is purely textual. There is no C/C++ parsing, so a registration
//! must fit on one line.

pub mod catalog;
pub mod cli;
pub mod common;
pub mod extract;
