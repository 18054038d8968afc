//! JSON persistence of a reflected metamodel.
//!
//! Invocation thunks are not serialised; call [`Metamodel::rebind`] with the
//! registry of the running process after loading.

use serde::{Deserialize, Serialize};

use super::error::MetamodelError;
use super::immutable::TypeSpec;
use super::metamodel::{Metamodel, SpecMap};
use crate::reflect::TypeRegistry;

#[derive(Serialize, Deserialize)]
struct MetamodelImage {
    specifications: Vec<TypeSpec>,
}

impl Metamodel {
    pub fn to_json(&self) -> Result<String, MetamodelError> {
        let image = MetamodelImage {
            specifications: self
                .all_specifications()
                .into_iter()
                .map(|spec| (*spec).clone())
                .collect(),
        };
        serde_json::to_string_pretty(&image).map_err(|e| MetamodelError::Serialization(e.to_string()))
    }

    /// Load a metamodel and rebind its method thunks from `registry`.
    pub fn from_json(json: &str, registry: &TypeRegistry) -> Result<Metamodel, MetamodelError> {
        let image: MetamodelImage =
            serde_json::from_str(json).map_err(|e| MetamodelError::Serialization(e.to_string()))?;
        let mut specs = SpecMap::new();
        for spec in image.specifications {
            specs.insert(spec.full_name().clone(), spec);
        }
        let mut metamodel = Metamodel::new(specs);
        let bound = metamodel.rebind(registry);
        tracing::debug!(specs = metamodel.len(), bound, "Loaded metamodel from JSON");
        Ok(metamodel)
    }
}
