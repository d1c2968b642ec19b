//! Alpha-properties: structural facts that pin the independence number.

use inp_core::errors::{ErrorInfo, InpError};
use tracing::trace;

use crate::context::GraphContext;
use crate::critical::critical_independence_union;
use crate::subsets;

/// Signature shared by every alpha-property predicate.
pub type PropertyFn = fn(&GraphContext<'_>) -> Result<bool, InpError>;

/// A named alpha-property.
#[derive(Clone, Copy)]
pub struct Property {
    /// Stable name recorded in provenance and verdicts.
    pub name: &'static str,
    /// The predicate.
    pub check: PropertyFn,
}

impl Property {
    /// Pairs a name with its predicate.
    pub const fn new(name: &'static str, check: PropertyFn) -> Self {
        Self { name, check }
    }
}

impl std::fmt::Debug for Property {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Property").field(&self.name).finish()
    }
}

/// Ordered list of alpha-properties.
///
/// Entries are evaluated in registration order and evaluation stops at the
/// first one that holds. Predicates are pure functions of the context.
#[derive(Debug, Clone, Default)]
pub struct PropertyRegistry {
    entries: Vec<Property>,
}

impl PropertyRegistry {
    /// Registry without entries.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Dominating vertex, claw-free, pendant vertex, simplicial vertex,
    /// bipartite and almost-KE, in that order.
    pub fn standard() -> Self {
        Self {
            entries: vec![
                Property::new("dominating-vertex", has_dominating_vertex),
                Property::new("claw-free", is_claw_free),
                Property::new("pendant-vertex", has_pendant_vertex),
                Property::new("simplicial-vertex", has_simplicial_vertex),
                Property::new("bipartite", is_bipartite),
                Property::new("almost-ke", is_almost_ke),
            ],
        }
    }

    /// The standard entries followed by the non-empty KE part test.
    pub fn survey() -> Self {
        let mut registry = Self::standard();
        registry.entries.push(Property::new("nonempty-ke-part", has_nonempty_ke_part));
        registry
    }

    /// Appends `property`; names must be unique within the registry.
    pub fn register(&mut self, property: Property) -> Result<(), InpError> {
        if self.entries.iter().any(|entry| entry.name == property.name) {
            return Err(InpError::Registry(
                ErrorInfo::new("duplicate-entry", "property already registered")
                    .with_context("name", property.name),
            ));
        }
        self.entries.push(property);
        Ok(())
    }

    /// Registered properties in evaluation order.
    pub fn entries(&self) -> &[Property] {
        &self.entries
    }

    /// Registered names in evaluation order.
    pub fn names(&self) -> Vec<String> {
        self.entries.iter().map(|entry| entry.name.to_string()).collect()
    }

    /// Name of the first property that holds, if any.
    pub fn first_satisfied(
        &self,
        ctx: &GraphContext<'_>,
    ) -> Result<Option<&'static str>, InpError> {
        for entry in &self.entries {
            if (entry.check)(ctx)? {
                trace!(property = entry.name, "alpha-property holds");
                return Ok(Some(entry.name));
            }
        }
        Ok(None)
    }

    /// Whether any registered property holds.
    pub fn has_alpha_property(&self, ctx: &GraphContext<'_>) -> Result<bool, InpError> {
        Ok(self.first_satisfied(ctx)?.is_some())
    }
}

/// Some vertex is adjacent to every other vertex.
pub fn has_dominating_vertex(ctx: &GraphContext<'_>) -> Result<bool, InpError> {
    let graph = ctx.graph();
    Ok(graph.order() > 0 && graph.max_degree() == graph.order() - 1)
}

/// No induced `K_{1,3}`.
pub fn is_claw_free(ctx: &GraphContext<'_>) -> Result<bool, InpError> {
    Ok(subsets::is_claw_free(ctx.graph()))
}

/// Some vertex has degree one.
pub fn has_pendant_vertex(ctx: &GraphContext<'_>) -> Result<bool, InpError> {
    Ok(ctx.graph().degrees().contains(&1))
}

/// Some vertex has a neighbourhood inducing a clique. Isolated vertices count.
pub fn has_simplicial_vertex(ctx: &GraphContext<'_>) -> Result<bool, InpError> {
    let graph = ctx.graph();
    Ok((0..graph.order()).any(|v| graph.is_clique(graph.neighbor_mask(v))))
}

/// Two-colourable.
pub fn is_bipartite(ctx: &GraphContext<'_>) -> Result<bool, InpError> {
    Ok(ctx.graph().is_bipartite())
}

/// Deleting some vertex leaves a König–Egerváry graph.
pub fn is_almost_ke(ctx: &GraphContext<'_>) -> Result<bool, InpError> {
    subsets::is_almost_ke(ctx)
}

/// The union of maximum critical independent sets is non-empty.
pub fn has_nonempty_ke_part(ctx: &GraphContext<'_>) -> Result<bool, InpError> {
    Ok(critical_independence_union(ctx.graph())? != 0)
}
