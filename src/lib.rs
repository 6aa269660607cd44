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
// Complexity limits
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Interactive spinning-model viewer built on wgpu.
//!
//! Gyre fuses pointer, touch and wheel input into two continuously eased
//! quantities: a spin angle about the model's forward axis and a look-at
//! direction the model turns toward. Every frame the eased pose is handed to
//! a render surface.
//!
//! # Key entry points
//!
//! - [`SpinViewer`] - the viewer core: input in, one pose per frame out
//! - [`input::InputAggregator`] - reduces device events into spin and
//!   look-at targets
//! - [`orientation::OrientationController`] - per-frame easing
//! - [`render::RenderSurface`] - the seam a renderer implements
//! - [`options::Options`] - runtime configuration (interaction, display)
//!
//! [`gpu::MeshRenderer`] draws the model through wgpu. With the `viewer`
//! feature, `Viewer` opens a winit window around it.

pub mod assets;
pub mod engine;
pub mod error;
pub mod frame;
pub mod gpu;
pub mod input;
pub mod options;
pub mod orientation;
pub mod render;
#[cfg(feature = "viewer")]
pub mod viewer;

pub use engine::SpinViewer;
pub use error::GyreError;
pub use input::{InputEvent, MouseButton};
pub use options::Options;
#[cfg(feature = "viewer")]
pub use viewer::{Viewer, ViewerBuilder};
