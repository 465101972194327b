//! Parsed-declaration IR.
//!
//! Only the shapes the extractor cares about are modeled: top-level
//! interfaces, their property signatures, and whether a declared type is a
//! plain named-type reference. Everything else collapses into the `Other`
//! variants.

/// All top-level interface declarations of one input file, in source order.
#[derive(Debug, Clone)]
pub struct Module {
    pub interfaces: Vec<Interface>,
}

impl Module {
    /// Look up a top-level interface by name.
    pub fn interface(&self, name: &str) -> Option<&Interface> {
        self.interfaces.iter().find(|i| i.name == name)
    }
}

#[derive(Debug, Clone)]
pub struct Interface {
    pub name: String,
    pub members: Vec<Member>,
}

/// One interface member.
#[derive(Debug, Clone, PartialEq)]
pub enum Member {
    /// A simple property signature: `name: Type;` (the name may be a
    /// string literal, the property may be optional).
    Property { name: String, ty: TypeExpr },
    /// Method, call, index or otherwise non-property signature.
    Other,
}

/// Classification of a property's declared type.
#[derive(Debug, Clone, PartialEq)]
pub enum TypeExpr {
    /// A bare named-type reference (`Users`, `Foo<Bar>` -> `Foo`).
    Reference(String),
    /// Anything else: keyword types, unions, arrays, tuples, inline object
    /// types, function types, qualified names.
    Other,
}
