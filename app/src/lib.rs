// grubdash/src/lib.rs

//! GrubDash: an in-memory ordering backend for dishes and orders.
//!
//! Every create, read, update and delete runs through a named-step
//! validation pipeline (see [`pipelines`]) registered on a
//! `grubdash_core::PipelineRegistry`. The pipeline short-circuits on the
//! first failing rule and its error becomes the HTTP response.

pub mod config;
pub mod errors;
pub mod models;
pub mod pipelines;
pub mod services;
pub mod state;
pub mod store;
pub mod telemetry;
pub mod web;
