//! Field descriptors.
//!
//! A `FieldDescriptor` is what every parse entry point returns: the field's
//! name, its canonical type string, and whatever the type string said about
//! arrays, bitfields and template arguments. The derived queries here are what
//! a code emitter asks when writing the field's declaration.

use smallvec::SmallVec;

use crate::{FieldType, TemplateNode};

/// Array dimensions, outermost first. Schema fields rarely have more than two.
pub type ArrayDims = SmallVec<[usize; 2]>;

/// One parsed schema field.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FieldDescriptor {
    /// The field's identifier, as given.
    pub name: String,
    /// Alias-normalized type name, rebuilt from `template_info` when generic.
    pub canonical_type: String,
    /// The datamap tag for enum-parsed fields, `FieldType::Unused` otherwise.
    pub field_type: FieldType,
    /// Array dimensions, outermost first. Empty for scalars.
    pub array_dimensions: ArrayDims,
    /// Bit width, present only when the type string carried a bitfield marker.
    pub bitfield_width: Option<usize>,
    /// The instantiation tree, present when the type string was generic.
    pub template_info: Option<TemplateNode>,
}

impl FieldDescriptor {
    /// Create an empty scalar descriptor for `name`.
    pub fn new(name: impl Into<String>) -> Self {
        FieldDescriptor {
            name: name.into(),
            ..FieldDescriptor::default()
        }
    }

    /// Create an empty descriptor for `name` with the given dimensions.
    ///
    /// Both parse entry points start here; the dimensions are copied as-is.
    pub fn with_dimensions(name: impl Into<String>, dims: &[usize]) -> Self {
        FieldDescriptor {
            array_dimensions: SmallVec::from_slice(dims),
            ..FieldDescriptor::new(name)
        }
    }

    /// A bitfield has a non-zero width.
    #[inline]
    pub fn is_bitfield(&self) -> bool {
        self.bitfield_width.is_some_and(|width| width != 0)
    }

    #[inline]
    pub fn is_array(&self) -> bool {
        !self.array_dimensions.is_empty()
    }

    /// Textual check: the canonical type contains both `<` and `>`.
    ///
    /// Weaker than `template_info.is_some()`; enum-path types such as
    /// `CHandle<CBaseEntity>` are templated but never carry a tree.
    #[inline]
    pub fn is_templated(&self) -> bool {
        self.canonical_type.contains('<') && self.canonical_type.contains('>')
    }

    /// Product of all dimensions, folded from the first one.
    ///
    /// Returns 0 for scalars.
    pub fn total_array_size(&self) -> usize {
        let mut dims = self.array_dimensions.iter().copied();
        dims.next()
            .map_or(0, |first| dims.fold(first, usize::saturating_mul))
    }

    /// `[4][2]`-style dimension list, outermost first.
    pub fn formatted_array_sizes(&self) -> String {
        use std::fmt::Write;

        let mut out = String::new();
        for dim in &self.array_dimensions {
            // Writing to a String cannot fail.
            let _ = write!(out, "[{dim}]");
        }
        out
    }

    /// What follows the name in a declaration: `: <width>` for bitfields,
    /// the dimension list for arrays, nothing otherwise.
    pub fn declarator_suffix(&self) -> String {
        match self.bitfield_width {
            Some(width) if width != 0 => format!(": {width}"),
            _ if self.is_array() => self.formatted_array_sizes(),
            _ => String::new(),
        }
    }

    /// The name with its declarator suffix, e.g. `m_nFlags: 3` or `m_vecPoints[4][2]`.
    pub fn formatted_name(&self) -> String {
        format!("{}{}", self.name, self.declarator_suffix())
    }

    /// A one-line declaration: `<canonical_type> <formatted_name>;`.
    pub fn declaration(&self) -> String {
        format!("{} {};", self.canonical_type, self.formatted_name())
    }
}
