//! Landscape Core Types
//!
//! This crate provides the in-memory architecture model that system
//! definitions populate. It includes:
//!
//! - **Identifiers**: string-interned identifiers ([`identifier::Id`])
//! - **Model**: software systems and their relationships ([`model`] module)
//! - **Views**: rendering specifications over the model ([`view`] module)
//! - **Workspace**: a named model plus its views ([`workspace::Workspace`])
//! - **Errors**: definition mistakes detected while populating a model ([`error`] module)

pub mod error;
pub mod identifier;
pub mod model;
pub mod view;
pub mod workspace;
