//! Template instantiation trees.
//!
//! A type string such as `CUtlVector<CHandle<C_BaseEntity>>*` is captured as a
//! `TemplateNode` whose arguments are either plain type names or further
//! nodes. The `Display` impl is the canonical serialization used to rebuild a
//! descriptor's type string, so it must stay lossless:
//!
//! ```text
//! type_name '<' arg (',' arg)* '>' ['*']
//! ```
//!
//! No whitespace is ever emitted.

use std::fmt;

/// One argument slot of a template instantiation.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum TemplateArg {
    /// A plain type name (or non-type argument such as `4`).
    Leaf(String),
    /// A nested instantiation, e.g. the `CHandle<...>` in `CUtlVector<CHandle<...>>`.
    Node(TemplateNode),
}

impl TemplateArg {
    /// Create a leaf argument.
    #[inline]
    pub fn leaf(name: impl Into<String>) -> Self {
        TemplateArg::Leaf(name.into())
    }

    /// The leaf text, if this is a leaf.
    #[inline]
    pub fn as_leaf(&self) -> Option<&str> {
        match self {
            TemplateArg::Leaf(name) => Some(name),
            TemplateArg::Node(_) => None,
        }
    }

    /// The nested node, if this is one.
    #[inline]
    pub fn as_node(&self) -> Option<&TemplateNode> {
        match self {
            TemplateArg::Node(node) => Some(node),
            TemplateArg::Leaf(_) => None,
        }
    }
}

impl From<TemplateNode> for TemplateArg {
    fn from(node: TemplateNode) -> Self {
        TemplateArg::Node(node)
    }
}

impl fmt::Display for TemplateArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemplateArg::Leaf(name) => f.write_str(name),
            TemplateArg::Node(node) => fmt::Display::fmt(node, f),
        }
    }
}

/// A parsed generic instantiation.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TemplateNode {
    /// The generic identifier before the first `<`.
    pub type_name: String,
    /// Arguments in source order, left to right.
    pub arguments: Vec<TemplateArg>,
    /// Whether the instantiation is followed by a `*`.
    pub is_pointer: bool,
}

impl TemplateNode {
    /// Create a node with no arguments yet.
    pub fn new(type_name: impl Into<String>) -> Self {
        TemplateNode {
            type_name: type_name.into(),
            arguments: Vec::new(),
            is_pointer: false,
        }
    }

    /// Builder-style: append an argument.
    #[must_use]
    pub fn with_arg(mut self, arg: impl Into<TemplateArg>) -> Self {
        self.arguments.push(arg.into());
        self
    }

    /// Builder-style: append a leaf argument.
    #[must_use]
    pub fn with_leaf(self, name: impl Into<String>) -> Self {
        self.with_arg(TemplateArg::leaf(name))
    }

    /// Builder-style: mark as pointer.
    #[must_use]
    pub fn pointer(mut self) -> Self {
        self.is_pointer = true;
        self
    }

    /// Nesting depth. A node whose arguments are all leaves has depth 1.
    pub fn depth(&self) -> usize {
        1 + self
            .arguments
            .iter()
            .filter_map(TemplateArg::as_node)
            .map(TemplateNode::depth)
            .max()
            .unwrap_or(0)
    }

    /// Every leaf argument in the tree, depth-first, left to right.
    pub fn leaves(&self) -> Vec<&str> {
        let mut out = Vec::new();
        self.collect_leaves(&mut out);
        out
    }

    fn collect_leaves<'a>(&'a self, out: &mut Vec<&'a str>) {
        for arg in &self.arguments {
            match arg {
                TemplateArg::Leaf(name) => out.push(name),
                TemplateArg::Node(node) => node.collect_leaves(out),
            }
        }
    }
}

impl fmt::Display for TemplateNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.type_name)?;
        f.write_str("<")?;
        for (i, arg) in self.arguments.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{arg}")?;
        }
        f.write_str(">")?;
        if self.is_pointer {
            f.write_str("*")?;
        }
        Ok(())
    }
}
