//! Rebrands a Jitsi Meet checkout and its YunoHost package as LiberChat Vidéo.
//!
//! Every edit is a literal find-and-replace over a fixed list of files. The
//! first time a file is rewritten its original is copied aside with a
//! `.backup` suffix, and each change is recorded for the final report.

pub mod config;
pub mod enums;
pub mod errors;
pub mod helpers;
pub mod logger;
pub mod services;
pub mod structs;
pub mod workers;
