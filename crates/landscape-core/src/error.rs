//! Errors raised while populating a [`Model`](crate::model::Model).
//!
//! Every variant describes a programming mistake in a system or domain
//! definition. None of them are transient, so callers abort the build
//! instead of retrying.

use std::fmt;

use thiserror::Error;

/// The definition round in which a model operation was attempted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Registration of software systems.
    ModelEntities,
    /// Declaration of relationships between registered systems.
    Relationships,
    /// Declaration of views over registered systems and relationships.
    Views,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Phase::ModelEntities => "model entities",
            Phase::Relationships => "relationships",
            Phase::Views => "views",
        };
        f.write_str(name)
    }
}

/// Errors produced while defining model entities, relationships and views.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    /// Two definitions registered a software system under the same name.
    #[error("software system `{name}` is defined more than once")]
    DuplicateDefinition { name: String },

    /// A system was referenced before (or without) its definition running.
    #[error("software system `{name}` was referenced during the {phase} phase before it was defined")]
    UninitializedReference { name: String, phase: Phase },

    /// A name or view key was empty or only whitespace.
    #[error("blank name given during the {phase} phase")]
    InvalidName { phase: Phase },

    /// A relationship would connect a system to itself.
    #[error("software system `{name}` cannot have a relationship with itself ({phase} phase)")]
    InvalidRelationship { name: String, phase: Phase },

    /// Two views were registered under the same key.
    #[error("view `{key}` is defined more than once")]
    DuplicateView { key: String },
}

impl ModelError {
    /// Stable machine-readable code identifying the kind of error.
    pub fn code(&self) -> &'static str {
        match self {
            ModelError::DuplicateDefinition { .. } => "landscape::duplicate_definition",
            ModelError::UninitializedReference { .. } => "landscape::uninitialized_reference",
            ModelError::InvalidName { .. } => "landscape::invalid_name",
            ModelError::InvalidRelationship { .. } => "landscape::invalid_relationship",
            ModelError::DuplicateView { .. } => "landscape::duplicate_view",
        }
    }

    /// Suggestion for fixing the offending definition.
    pub fn help(&self) -> &'static str {
        match self {
            ModelError::DuplicateDefinition { .. } => {
                "each software system must be registered by exactly one definition"
            }
            ModelError::UninitializedReference { .. } => {
                "make sure the system's definition is listed in an assembled domain"
            }
            ModelError::InvalidName { .. } => "give the element a non-blank name",
            ModelError::InvalidRelationship { .. } => {
                "relationships must connect two different software systems"
            }
            ModelError::DuplicateView { .. } => "choose a unique key for each view",
        }
    }

    /// Phase in which the error was raised, when it is tied to one.
    pub fn phase(&self) -> Option<Phase> {
        match self {
            ModelError::DuplicateDefinition { .. } => Some(Phase::ModelEntities),
            ModelError::UninitializedReference { phase, .. }
            | ModelError::InvalidName { phase }
            | ModelError::InvalidRelationship { phase, .. } => Some(*phase),
            ModelError::DuplicateView { .. } => Some(Phase::Views),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uninitialized_reference_message_names_system_and_phase() {
        let err = ModelError::UninitializedReference {
            name: "NOMIS".to_string(),
            phase: Phase::Relationships,
        };

        assert_eq!(
            err.to_string(),
            "software system `NOMIS` was referenced during the relationships phase before it was defined"
        );
        assert_eq!(err.code(), "landscape::uninitialized_reference");
        assert_eq!(err.phase(), Some(Phase::Relationships));
    }

    #[test]
    fn test_duplicate_definition() {
        let err = ModelError::DuplicateDefinition {
            name: "NDH".to_string(),
        };

        assert_eq!(err.to_string(), "software system `NDH` is defined more than once");
        assert_eq!(err.phase(), Some(Phase::ModelEntities));
    }

    #[test]
    fn test_phase_display() {
        assert_eq!(Phase::ModelEntities.to_string(), "model entities");
        assert_eq!(Phase::Relationships.to_string(), "relationships");
        assert_eq!(Phase::Views.to_string(), "views");
    }
}
