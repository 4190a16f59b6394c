/// Resource-level material type.
///
/// A Material is a pure data description of a surface's visual properties:
/// the pipeline (shader family) it renders with and its named parameters.
///
/// Materials are compared by identity, never by value. Two materials built
/// from identical descriptors are two distinct GPU states and must land in
/// two distinct render batches. `Material` therefore has no `PartialEq`;
/// use `MaterialKey` (or `Arc::ptr_eq`) to ask "is this the same material".

use std::collections::HashMap;
use std::sync::Arc;
use crate::error::Result;
use crate::engine_bail;

// ===== PARAMETER VALUES =====

/// A typed parameter value for the material
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    Float(f32),
    Vec2([f32; 2]),
    Vec3([f32; 3]),
    Vec4([f32; 4]),
    Int(i32),
    UInt(u32),
}

// ===== MATERIAL KEY =====

/// Identity key of a shared material instance.
///
/// Derived from the address of the `Arc` allocation. The key is only
/// meaningful while some `Arc<Material>` for that allocation is alive;
/// the render batches hold one for as long as they hold the key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MaterialKey(usize);

impl MaterialKey {
    /// Identity key of a shared material
    pub fn of(material: &Arc<Material>) -> Self {
        Self(Arc::as_ptr(material) as *const () as usize)
    }
}

// ===== MATERIAL =====

/// Material resource: visual description of a surface
#[derive(Debug)]
pub struct Material {
    name: String,
    pipeline: String,
    params: Vec<(String, ParamValue)>,
    param_names: HashMap<String, usize>,
}

/// Material creation descriptor
#[derive(Debug, Clone)]
pub struct MaterialDesc {
    pub name: String,
    /// Name of the shader family this material renders with
    pub pipeline: String,
    pub params: Vec<(String, ParamValue)>,
}

impl Material {
    /// Create a material from a descriptor
    ///
    /// # Errors
    ///
    /// Returns an error if the pipeline name is empty or if two parameters
    /// share a name.
    pub fn from_desc(desc: MaterialDesc) -> Result<Self> {
        if desc.pipeline.is_empty() {
            engine_bail!("galaxy3d::Material",
                "Material '{}' has no pipeline", desc.name);
        }

        let mut params = Vec::with_capacity(desc.params.len());
        let mut param_names = HashMap::with_capacity(desc.params.len());

        for (vec_index, (param_name, value)) in desc.params.into_iter().enumerate() {
            if param_names.insert(param_name.clone(), vec_index).is_some() {
                engine_bail!("galaxy3d::Material",
                    "Material '{}': duplicate parameter name '{}'", desc.name, param_name);
            }
            params.push((param_name, value));
        }

        Ok(Self {
            name: desc.name,
            pipeline: desc.pipeline,
            params,
            param_names,
        })
    }

    /// Create a shared material from a descriptor
    pub fn shared(desc: MaterialDesc) -> Result<Arc<Self>> {
        Self::from_desc(desc).map(Arc::new)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Shader family name
    pub fn pipeline(&self) -> &str {
        &self.pipeline
    }

    // ===== PARAM ACCESS =====

    /// Get parameter value by name
    pub fn param(&self, name: &str) -> Option<&ParamValue> {
        let idx = self.param_names.get(name)?;
        self.params.get(*idx).map(|(_, v)| v)
    }

    /// Get parameter name and value by index
    pub fn param_at(&self, index: usize) -> Option<(&str, &ParamValue)> {
        self.params.get(index).map(|(n, v)| (n.as_str(), v))
    }

    pub fn param_count(&self) -> usize {
        self.params.len()
    }
}

#[cfg(test)]
#[path = "material_tests.rs"]
mod tests;
