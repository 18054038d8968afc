//! Mutable specification builders and the freeze step.
//!
//! A [`TypeSpecBuilder`] moves through [`BuildState::Pending`] (created,
//! not yet introspected), [`BuildState::Introspected`] (every factory has
//! run) and [`BuildState::Frozen`] (published as a [`TypeSpec`]).

use std::sync::Arc;

use super::error::MetamodelError;
use super::immutable::{ActionSpec, AssociationKind, AssociationSpec, ParameterSpec, SpecKind, TypeSpec};
use super::order::MemberOrderComparator;
use super::spec::{SpecHolder, Specification, delegate_to_holder};
use crate::base::{Identifier, TypeName};

/// Lifecycle of a type specification builder.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BuildState {
    Pending,
    Introspected,
    Frozen,
}

// ============================================================================
// TYPE BUILDER
// ============================================================================

/// Builder for one type specification.
#[derive(Clone, Debug)]
pub struct TypeSpecBuilder {
    holder: SpecHolder,
    kind: SpecKind,
    state: BuildState,
    superclass: Option<TypeName>,
    interfaces: Vec<TypeName>,
    fields: Vec<AssociationSpecBuilder>,
    actions: Vec<ActionSpecBuilder>,
}

impl TypeSpecBuilder {
    pub fn new(full_name: impl Into<TypeName>, kind: SpecKind) -> Self {
        Self {
            holder: SpecHolder::new(Identifier::for_type(full_name)),
            kind,
            state: BuildState::Pending,
            superclass: None,
            interfaces: Vec::new(),
            fields: Vec::new(),
            actions: Vec::new(),
        }
    }

    pub fn full_name(&self) -> &TypeName {
        self.holder.identifier().type_name()
    }

    pub fn kind(&self) -> SpecKind {
        self.kind
    }

    /// Reclassify the type, e.g. once a collection or value facet is found.
    pub fn set_kind(&mut self, kind: SpecKind) {
        if self.kind != SpecKind::Service {
            self.kind = kind;
        }
    }

    pub fn state(&self) -> BuildState {
        self.state
    }

    pub fn is_pending(&self) -> bool {
        self.state == BuildState::Pending
    }

    pub fn superclass(&self) -> Option<&TypeName> {
        self.superclass.as_ref()
    }

    pub fn set_superclass(&mut self, superclass: Option<TypeName>) {
        self.superclass = superclass;
    }

    pub fn interfaces(&self) -> &[TypeName] {
        &self.interfaces
    }

    pub fn set_interfaces(&mut self, interfaces: Vec<TypeName>) {
        self.interfaces = interfaces;
    }

    pub fn fields(&self) -> &[AssociationSpecBuilder] {
        &self.fields
    }

    pub fn actions(&self) -> &[ActionSpecBuilder] {
        &self.actions
    }

    /// Install the introspected members, sorted into member order.
    pub fn set_members(
        &mut self,
        mut fields: Vec<AssociationSpecBuilder>,
        mut actions: Vec<ActionSpecBuilder>,
    ) {
        let comparator = MemberOrderComparator;
        comparator.sort(&mut fields);
        comparator.sort(&mut actions);
        self.fields = fields;
        self.actions = actions;
    }

    /// Record that every factory has processed this builder.
    pub fn mark_introspected(&mut self) {
        if self.state == BuildState::Pending {
            self.state = BuildState::Introspected;
        }
    }

    /// Produce the immutable specification. Further mutation fails.
    pub fn freeze(&mut self) -> Result<TypeSpec, MetamodelError> {
        match self.state {
            BuildState::Pending => {
                return Err(MetamodelError::NotIntrospected(self.identifier().clone()));
            }
            BuildState::Frozen => {
                return Err(MetamodelError::AlreadyFrozen(self.identifier().clone()));
            }
            BuildState::Introspected => {}
        }

        let facets = self.holder.freeze()?;
        let fields = self
            .fields
            .iter_mut()
            .map(|f| f.freeze().map(Arc::new))
            .collect::<Result<Vec<_>, _>>()?;
        let actions = self
            .actions
            .iter_mut()
            .map(|a| a.freeze().map(Arc::new))
            .collect::<Result<Vec<_>, _>>()?;
        self.state = BuildState::Frozen;

        Ok(TypeSpec {
            identifier: self.identifier().clone(),
            facets,
            kind: self.kind,
            superclass: self.superclass.clone(),
            interfaces: self.interfaces.clone(),
            fields,
            actions,
        })
    }
}

// ============================================================================
// MEMBER BUILDERS
// ============================================================================

/// Builder for a property or collection specification.
#[derive(Clone, Debug)]
pub struct AssociationSpecBuilder {
    holder: SpecHolder,
    kind: AssociationKind,
    return_type: TypeName,
}

impl AssociationSpecBuilder {
    pub fn new(identifier: Identifier, kind: AssociationKind, return_type: TypeName) -> Self {
        Self {
            holder: SpecHolder::new(identifier),
            kind,
            return_type,
        }
    }

    pub fn kind(&self) -> AssociationKind {
        self.kind
    }

    pub fn return_type(&self) -> &TypeName {
        &self.return_type
    }

    fn freeze(&mut self) -> Result<AssociationSpec, MetamodelError> {
        let facets = self.holder.freeze()?;
        Ok(AssociationSpec {
            identifier: self.identifier().clone(),
            facets,
            kind: self.kind,
            return_type: self.return_type.clone(),
        })
    }
}

/// Builder for an action specification.
#[derive(Clone, Debug)]
pub struct ActionSpecBuilder {
    holder: SpecHolder,
    return_type: Option<TypeName>,
    parameters: Vec<ParameterSpecBuilder>,
}

impl ActionSpecBuilder {
    pub fn new(identifier: Identifier, return_type: Option<TypeName>) -> Self {
        Self {
            holder: SpecHolder::new(identifier),
            return_type,
            parameters: Vec::new(),
        }
    }

    pub fn return_type(&self) -> Option<&TypeName> {
        self.return_type.as_ref()
    }

    pub fn parameters(&self) -> &[ParameterSpecBuilder] {
        &self.parameters
    }

    pub fn parameters_mut(&mut self) -> &mut [ParameterSpecBuilder] {
        &mut self.parameters
    }

    pub fn set_parameters(&mut self, parameters: Vec<ParameterSpecBuilder>) {
        self.parameters = parameters;
    }

    fn freeze(&mut self) -> Result<ActionSpec, MetamodelError> {
        let facets = self.holder.freeze()?;
        let parameters = self
            .parameters
            .iter_mut()
            .map(|p| p.freeze().map(Arc::new))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(ActionSpec {
            identifier: self.identifier().clone(),
            facets,
            return_type: self.return_type.clone(),
            parameters,
        })
    }
}

/// Builder for an action parameter specification.
#[derive(Clone, Debug)]
pub struct ParameterSpecBuilder {
    holder: SpecHolder,
    index: usize,
    parameter_type: TypeName,
}

impl ParameterSpecBuilder {
    pub fn new(action: &Identifier, index: usize, parameter_type: TypeName) -> Self {
        Self {
            holder: SpecHolder::new(action.parameter(index)),
            index,
            parameter_type,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn parameter_type(&self) -> &TypeName {
        &self.parameter_type
    }

    fn freeze(&mut self) -> Result<ParameterSpec, MetamodelError> {
        let facets = self.holder.freeze()?;
        Ok(ParameterSpec {
            identifier: self.identifier().clone(),
            facets,
            index: self.index,
            parameter_type: self.parameter_type.clone(),
        })
    }
}

delegate_to_holder!(
    TypeSpecBuilder,
    AssociationSpecBuilder,
    ActionSpecBuilder,
    ParameterSpecBuilder,
);
