//! # Covergrid
//!
//! Covergrid is the backend for a small web app for browsing manga covers
//! and arranging them into shareable 3×3 grids. It verifies Google identity
//! tokens, stores per-user grid documents, and proxies external cover images
//! so the browser canvas can read them without tripping over CORS.

// =========================================================================
//                  Canonical lints for whole crate
// =========================================================================
// Official docs:
//   https://doc.rust-lang.org/nightly/clippy/lints.html
//
// We set base lints to give the fullest, most pedantic feedback possible.
// Though we prefer that they are just warnings during development so that
// build-denial is only enforced in CI.
//
#![warn(
    // `clippy::all` is already on by default. It implies the following:
    //   clippy::correctness code that is outright wrong or useless
    //   clippy::suspicious code that is most likely wrong or useless
    //   clippy::complexity code that does something simple but in a complex way
    //   clippy::perf code that can be written to run faster
    //   clippy::style code that should be written in a more idiomatic way
    clippy::all,

    // It's always good to write as much documentation as possible
    missing_docs,

    // > clippy::pedantic lints which are rather strict or might have false positives
    clippy::pedantic,

    // > new lints that are still under development
    // (so "nursery" doesn't mean "Rust newbies")
    clippy::nursery,
)]
// =========================================================================
//   Individually blanket-allow single lints relevant to this whole crate
// =========================================================================
#![allow(clippy::implicit_return, reason = "This is idiomatic Rust")]
#![allow(
    clippy::question_mark_used,
    reason = "We rely on propagating errors with question mark extensively"
)]
#![allow(
    clippy::mod_module_files,
    reason = "The mod.rs layout is the convention in this codebase"
)]
#![allow(
    clippy::module_name_repetitions,
    reason = "Re-exported item names read better fully qualified"
)]

pub mod db;
pub mod server;
pub mod utils;
