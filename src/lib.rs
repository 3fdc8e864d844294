// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]
// Float-heavy choreography code compares and truncates constantly;
// keep the precision lints at cast-boundaries only.
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::float_cmp)]

//! Gesture-driven 3D particle installation engine.
//!
//! Arbo choreographs a particle cloud that morphs between a tree
//! formation and a scattered formation, steered by hand gestures from an
//! external classifier, with a synchronized video overlay and background
//! audio.
//!
//! # Key entry points
//!
//! - [`engine::InstallationEngine`] - the per-frame orchestrator
//! - [`scene::InstallationScene`] - particle families and overlay state
//! - [`options::Options`] - runtime configuration (formation, gestures,
//!   choreography, media)
//! - [`gesture::GestureInterpreter`] - the mode-switching policy
//!
//! # Architecture
//!
//! Formation tables are generated once at startup; every display-refresh
//! tick blends live particle positions toward the table selected by the
//! current mode and reacts to mode edges with one-shot media side
//! effects. The graphics device, hand-landmark classifier, and media
//! elements are external collaborators behind seam traits
//! ([`scene::FrameSink`], [`media::VideoSurface`],
//! [`media::AudioChannel`]).

pub mod engine;
pub mod error;
pub mod formation;
pub mod gesture;
pub mod media;
pub mod options;
pub mod scene;
pub mod session;
pub mod util;
