//! Seqflow Core Types and Definitions
//!
//! This crate provides the foundational types shared by the seqflow
//! transformations. It includes:
//!
//! - **Labels**: Cleaning of raw message and condition text ([`label`] module)
//! - **Activity**: The activity-diagram output model ([`activity`] module)

pub mod activity;
pub mod label;
