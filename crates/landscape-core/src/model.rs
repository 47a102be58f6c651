//! The architecture model: software systems and the relationships between them.
//!
//! [`Model`] is the graph container populated by system definitions. It
//! offers the primitives definitions need (register a system, declare that
//! one system uses another) and guards the invariants the rest of the
//! pipeline relies on:
//!
//! - a system's name is unique within a model,
//! - a relationship only ever references systems that are already registered,
//! - names and descriptions of relationships are never blank.
//!
//! Systems are referred to through [`SystemHandle`]s, which can only be
//! obtained from [`Model::add_software_system`] or a lookup on an existing
//! model.

mod graph;

use log::{debug, trace};
use serde::{Serialize, Serializer, ser::SerializeStruct};

use crate::{
    error::{ModelError, Phase},
    identifier::Id,
};

use graph::Graph;

/// Tags carried by every software system.
pub const SOFTWARE_SYSTEM_TAGS: [&str; 2] = ["Element", "Software System"];

/// Tag carried by every relationship.
pub const RELATIONSHIP_TAG: &str = "Relationship";

/// Reference to a software system registered in a [`Model`].
///
/// Serializes as the system's name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct SystemHandle(Id);

impl SystemHandle {
    /// Identifier of the referenced system.
    pub fn id(&self) -> Id {
        self.0
    }
}

/// A named, described node of the model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SoftwareSystem {
    id: Id,
    name: String,
    description: String,
    tags: Vec<String>,
}

impl SoftwareSystem {
    fn new(id: Id, name: &str, description: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            description: description.to_string(),
            tags: SOFTWARE_SYSTEM_TAGS.iter().map(|t| t.to_string()).collect(),
        }
    }

    pub fn id(&self) -> Id {
        self.id
    }

    pub fn handle(&self) -> SystemHandle {
        SystemHandle(self.id)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Tags in the order they were added, starting with the default tags.
    pub fn tags(&self) -> &[String] {
        &self.tags
    }
}

/// A directed, labeled edge: `source` uses `target`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Relationship {
    source: Id,
    target: Id,
    description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    technology: Option<String>,
    tags: Vec<String>,
}

impl Relationship {
    pub fn source(&self) -> SystemHandle {
        SystemHandle(self.source)
    }

    pub fn target(&self) -> SystemHandle {
        SystemHandle(self.target)
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn technology(&self) -> Option<&str> {
        self.technology.as_deref()
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }
}

/// The graph of software systems and relationships for one documentation build.
///
/// Two models compare equal when they hold the same systems and the same
/// relationships, which makes repeated assemblies easy to check for
/// structural identity.
///
/// # Examples
///
/// ```
/// use landscape_core::model::Model;
///
/// let mut model = Model::new();
/// let nomis = model.add_software_system("NOMIS", "Prison case management")?;
/// let ndh = model.add_software_system("NDH", "NOMIS data hub")?;
/// model.uses(ndh, nomis, "extract offender data")?;
///
/// assert_eq!(model.software_systems().count(), 2);
/// assert_eq!(model.relationships().count(), 1);
/// # Ok::<(), landscape_core::error::ModelError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Model {
    graph: Graph<SoftwareSystem, Relationship>,
}

impl Model {
    /// Creates an empty model.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a software system.
    ///
    /// # Errors
    ///
    /// - [`ModelError::InvalidName`] if `name` is blank.
    /// - [`ModelError::DuplicateDefinition`] if a system with the same name exists.
    pub fn add_software_system(
        &mut self,
        name: &str,
        description: &str,
    ) -> Result<SystemHandle, ModelError> {
        if name.trim().is_empty() {
            return Err(ModelError::InvalidName {
                phase: Phase::ModelEntities,
            });
        }

        let id = Id::new(name);
        if self.graph.contains_node(id) {
            return Err(ModelError::DuplicateDefinition {
                name: name.to_string(),
            });
        }

        self.graph
            .add_node(id, SoftwareSystem::new(id, name, description));
        debug!(system = name; "Software system added");

        Ok(SystemHandle(id))
    }

    /// Adds a tag to a registered system. Tags already present are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::UninitializedReference`] if the system is not
    /// part of this model and [`ModelError::InvalidName`] if `tag` is blank.
    pub fn add_tag(&mut self, system: SystemHandle, tag: &str) -> Result<(), ModelError> {
        if tag.trim().is_empty() {
            return Err(ModelError::InvalidName {
                phase: Phase::ModelEntities,
            });
        }

        let node = self
            .graph
            .node_mut(system.0)
            .ok_or_else(|| uninitialized(system, Phase::ModelEntities))?;
        if !node.tags.iter().any(|existing| existing == tag) {
            node.tags.push(tag.to_string());
        }
        Ok(())
    }

    /// Declares that `source` uses `target`.
    ///
    /// Declaring the same `(source, target, description)` twice keeps a
    /// single relationship. A relationship with a technology never matches
    /// one without.
    ///
    /// # Errors
    ///
    /// - [`ModelError::UninitializedReference`] if either system is not part of this model.
    /// - [`ModelError::InvalidRelationship`] if `source` and `target` are the same system.
    /// - [`ModelError::InvalidName`] if `description` is blank.
    pub fn uses(
        &mut self,
        source: SystemHandle,
        target: SystemHandle,
        description: &str,
    ) -> Result<(), ModelError> {
        self.add_relationship(source, target, description, None)
    }

    /// Declares that `source` uses `target` over the given technology.
    ///
    /// # Errors
    ///
    /// Same as [`Model::uses`].
    pub fn uses_via(
        &mut self,
        source: SystemHandle,
        target: SystemHandle,
        description: &str,
        technology: &str,
    ) -> Result<(), ModelError> {
        self.add_relationship(source, target, description, Some(technology))
    }

    fn add_relationship(
        &mut self,
        source: SystemHandle,
        target: SystemHandle,
        description: &str,
        technology: Option<&str>,
    ) -> Result<(), ModelError> {
        let phase = Phase::Relationships;
        for endpoint in [source, target] {
            if !self.contains(endpoint) {
                return Err(uninitialized(endpoint, phase));
            }
        }
        if source == target {
            return Err(ModelError::InvalidRelationship {
                name: source.0.as_string(),
                phase,
            });
        }
        if description.trim().is_empty() {
            return Err(ModelError::InvalidName { phase });
        }

        let duplicate = self.graph.edges().any(|(s, t, rel)| {
            s == source.0
                && t == target.0
                && rel.description == description
                && rel.technology.as_deref() == technology
        });
        if duplicate {
            trace!(source:% = source.0, target:% = target.0, description; "Relationship already declared");
            return Ok(());
        }

        self.graph.add_edge(
            source.0,
            target.0,
            Relationship {
                source: source.0,
                target: target.0,
                description: description.to_string(),
                technology: technology.map(str::to_string),
                tags: vec![RELATIONSHIP_TAG.to_string()],
            },
        );
        debug!(source:% = source.0, target:% = target.0, description; "Relationship added");

        Ok(())
    }

    /// Returns `true` if the handle refers to a system of this model.
    pub fn contains(&self, system: SystemHandle) -> bool {
        self.graph.contains_node(system.0)
    }

    /// Returns the system behind a handle.
    pub fn software_system(&self, system: SystemHandle) -> Option<&SoftwareSystem> {
        self.graph.node(system.0)
    }

    /// Looks up a system by its exact name.
    pub fn software_system_by_name(&self, name: &str) -> Option<&SoftwareSystem> {
        Id::get(name).and_then(|id| self.graph.node(id))
    }

    /// Systems in registration order.
    pub fn software_systems(&self) -> impl Iterator<Item = &SoftwareSystem> {
        self.graph.nodes()
    }

    /// Relationships in declaration order.
    pub fn relationships(&self) -> impl Iterator<Item = &Relationship> {
        self.graph.edges().map(|(_, _, rel)| rel)
    }

    /// Systems that nothing else uses.
    pub fn entry_points(&self) -> impl Iterator<Item = &SoftwareSystem> {
        self.graph.roots()
    }

    /// Systems directly connected to `system` in either direction, each once,
    /// outgoing targets first.
    pub fn neighbours(&self, system: SystemHandle) -> Vec<SystemHandle> {
        let mut neighbours: Vec<SystemHandle> = Vec::new();
        let connected = self
            .graph
            .outgoing_nodes(system.0)
            .chain(self.graph.incoming_nodes(system.0))
            .map(SystemHandle);
        for handle in connected {
            if handle != system && !neighbours.contains(&handle) {
                neighbours.push(handle);
            }
        }
        neighbours
    }

    pub fn software_systems_count(&self) -> usize {
        self.graph.nodes_count()
    }

    pub fn relationships_count(&self) -> usize {
        self.graph.edges_count()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.nodes_count() == 0
    }
}

impl Serialize for Model {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let systems: Vec<&SoftwareSystem> = self.software_systems().collect();
        let relationships: Vec<&Relationship> = self.relationships().collect();

        let mut state = serializer.serialize_struct("Model", 2)?;
        state.serialize_field("softwareSystems", &systems)?;
        state.serialize_field("relationships", &relationships)?;
        state.end()
    }
}

fn uninitialized(system: SystemHandle, phase: Phase) -> ModelError {
    ModelError::UninitializedReference {
        name: system.0.as_string(),
        phase,
    }
}
