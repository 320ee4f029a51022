//! Interactive zygosity angle chart for the browser.
//!
//! This crate is compiled to WebAssembly. It draws four rays from the origin
//! (the boundaries between homozygous and heterozygous calls) and a curve
//! around the no-call region, and lets the user drag them. Every drag step is
//! checked against the ordering of the ray angles, the scene is redrawn, and
//! the angle readouts in the page are updated. The host JavaScript layer only
//! forwards pointer events to [`bindings::AngleChart`].
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level engine and testable [`engine::ChartCore`] |
//! | [`state`] | Rays, curve, and the ordering invariant |
//! | [`geometry`] | Points, viewport clamping, angles |
//! | [`scale`] | Domain ↔ pixel linear scales |
//! | [`input`] | Drag state machine and per-frame drag math |
//! | [`hit`] | Hit-regions over rays and curve |
//! | [`render`] | Scene description and canvas painter |
//! | [`surface`] | Chart surface trait and its canvas implementation |
//! | [`labels`] | Angle readout formatting and sync |
//! | [`dom`] | Readout elements and cursor styling |
//! | [`config`] | JSON-loadable configuration |
//! | [`error`] | Error type |
//! | [`bindings`] | JavaScript entry points |
//! | [`consts`] | Shared numeric constants |

pub mod bindings;
pub mod config;
pub mod consts;
pub mod dom;
pub mod engine;
pub mod error;
pub mod geometry;
pub mod hit;
pub mod input;
pub mod labels;
pub mod render;
pub mod scale;
pub mod state;
pub mod surface;
