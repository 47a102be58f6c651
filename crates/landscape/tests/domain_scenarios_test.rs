//! Assembly of the described domains.

use landscape::{
    ModelError, Phase,
    assembly::{Assembly, assemble},
    definition::{Domain, SoftwareSystemDefinition},
    domains::{Prison, Probation},
    model::SystemHandle,
    scope::{EntityScope, Registration, RelationshipScope},
    workspace::Workspace,
};

fn fresh() -> Workspace {
    Workspace::new("HMPPS", "")
}

#[test]
fn test_prison_domain() {
    let workspace = assemble(fresh(), [Box::new(Prison) as Box<dyn Domain>]).unwrap();
    let model = workspace.model();

    assert_eq!(model.software_systems_count(), 2);
    let names: Vec<_> = model.software_systems().map(|s| s.name()).collect();
    assert_eq!(names, vec!["NOMIS", "NDH"]);

    let relationships: Vec<_> = model.relationships().collect();
    assert_eq!(relationships.len(), 1);
    let nomis = model.software_system_by_name("NOMIS").unwrap().handle();
    let ndh = model.software_system_by_name("NDH").unwrap().handle();
    assert_eq!(relationships[0].source(), ndh);
    assert_eq!(relationships[0].target(), nomis);
    assert_eq!(relationships[0].description(), "extract offender data");

    assert!(workspace.views().is_empty());
}

#[test]
fn test_probation_domain() {
    let workspace = assemble(fresh(), [Box::new(Probation) as Box<dyn Domain>]).unwrap();
    let model = workspace.model();

    assert_eq!(model.software_systems_count(), 1);
    let equip = model.software_system_by_name("EQuiP").unwrap();
    assert_eq!(
        equip.description(),
        "Central repository for all step-by-step business processes (in probation?)"
    );
    assert_eq!(model.relationships_count(), 0);
    assert_eq!(workspace.views().len(), 0);
}

#[test]
fn test_assembly_is_repeatable() {
    let build = || {
        let domains: Vec<Box<dyn Domain>> = vec![Box::new(Prison), Box::new(Probation)];
        assemble(fresh(), domains).unwrap()
    };

    let first = build();
    let second = build();

    assert_eq!(first.model(), second.model());
    assert_eq!(first, second);
}

#[test]
fn test_phases_can_be_driven_one_at_a_time() {
    let entities = Assembly::new(fresh())
        .with_domain(Box::new(Prison))
        .define_model_entities()
        .unwrap();
    assert_eq!(entities.registry().len(), 2);
    assert!(entities.registry().get("NOMIS").is_some());

    let relationships = entities.define_relationships().unwrap();
    let workspace = relationships.define_views().unwrap().finish();

    assert_eq!(workspace.model().relationships_count(), 1);
}

/// A system that depends on a system from a domain that is not assembled.
struct Orphan;

impl SoftwareSystemDefinition for Orphan {
    fn name(&self) -> &str {
        "Orphan"
    }

    fn define_model_entities(&self, scope: EntityScope<'_>) -> Result<Registration, ModelError> {
        scope.add_software_system("Orphan", "Depends on NOMIS")
    }

    fn define_relationships(
        &self,
        this: SystemHandle,
        scope: &mut RelationshipScope<'_>,
    ) -> Result<(), ModelError> {
        let nomis = scope.system("NOMIS")?;
        scope.uses(this, nomis, "reads offender data")
    }
}

struct OrphanDomain;

impl Domain for OrphanDomain {
    fn name(&self) -> &str {
        "orphan"
    }

    fn systems(&self) -> Vec<Box<dyn SoftwareSystemDefinition>> {
        vec![Box::new(Orphan)]
    }
}

#[test]
fn test_reference_outside_assembled_domains_fails() {
    let err = assemble(fresh(), [Box::new(OrphanDomain) as Box<dyn Domain>]).unwrap_err();

    assert_eq!(
        err,
        ModelError::UninitializedReference {
            name: "NOMIS".to_string(),
            phase: Phase::Relationships,
        }
    );
}

#[test]
fn test_reference_across_domains_succeeds() {
    let domains: Vec<Box<dyn Domain>> = vec![Box::new(OrphanDomain), Box::new(Prison)];
    let workspace = assemble(fresh(), domains).unwrap();

    // Orphan is defined first but NOMIS exists by the relationships round.
    assert_eq!(workspace.model().relationships_count(), 2);
}

#[test]
fn test_same_domain_twice_is_a_duplicate_definition() {
    let domains: Vec<Box<dyn Domain>> = vec![Box::new(Probation), Box::new(Probation)];
    let err = assemble(fresh(), domains).unwrap_err();

    assert_eq!(
        err,
        ModelError::DuplicateDefinition {
            name: "EQuiP".to_string()
        }
    );
}
