//! Language-agnostic class declarations.
//!
//! A [`ClassDecl`] lists *what* a generated class contains (fields,
//! constructor, methods) in output order. Backends decide *how* to print it.
//! Field names here are bare property names; backends apply the configured
//! field prefix.

/// A declarative specification for a generated class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassDecl {
    /// Class name.
    pub name: String,
    /// Namespace, `None` for the global namespace.
    pub namespace: Option<String>,
    /// Members in output order.
    pub members: Vec<Member>,
}

impl ClassDecl {
    pub fn fields(&self) -> impl Iterator<Item = &FieldDecl> {
        self.members.iter().filter_map(|m| match m {
            Member::Field(field) => Some(field),
            _ => None,
        })
    }

    pub fn constructor(&self) -> Option<&ConstructorDecl> {
        self.members.iter().find_map(|m| match m {
            Member::Constructor(ctor) => Some(ctor),
            _ => None,
        })
    }

    pub fn methods(&self) -> impl Iterator<Item = &MethodDecl> {
        self.members.iter().filter_map(|m| match m {
            Member::Method(method) => Some(method),
            _ => None,
        })
    }

    /// Find a method by name.
    pub fn method(&self, name: &str) -> Option<&MethodDecl> {
        self.methods().find(|m| m.name == name)
    }
}

/// A member of a class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Member {
    Field(FieldDecl),
    Constructor(ConstructorDecl),
    Method(MethodDecl),
}

/// A private field backing one property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDecl {
    pub name: String,
}

/// A constructor or method parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamDecl {
    pub name: String,
    /// Fully-qualified type, untyped when `None`.
    pub ty: Option<String>,
    /// Whether the parameter defaults to null.
    pub optional: bool,
}

impl ParamDecl {
    pub fn new(name: impl Into<String>, ty: Option<String>) -> Self {
        Self {
            name: name.into(),
            ty,
            optional: false,
        }
    }

    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }
}

/// The two constructor shapes that produce code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConstructorDecl {
    /// Assigns one field from an optional parameter.
    Plain { param: ParamDecl },
    /// Reads every field from the builder through its getters.
    FromBuilder {
        builder_class: String,
        /// `(field, getter)` pairs in property order.
        assignments: Vec<(String, String)>,
    },
}

/// A method with a fixed-template body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodDecl {
    pub name: String,
    pub params: Vec<ParamDecl>,
    pub body: MethodBody,
}

impl MethodDecl {
    pub fn new(name: impl Into<String>, body: MethodBody) -> Self {
        Self {
            name: name.into(),
            params: Vec::new(),
            body,
        }
    }

    pub fn param(mut self, param: ParamDecl) -> Self {
        self.params.push(param);
        self
    }

    /// Whether the method returns the current instance.
    pub fn is_fluent(&self) -> bool {
        matches!(self.body, MethodBody::AssignField { fluent: true, .. })
    }
}

/// Method body templates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MethodBody {
    /// Return the field's value.
    ReturnField { field: String },
    /// Return whether the field holds a non-empty value.
    ReturnPresence { field: String },
    /// Assign a parameter to the field, optionally returning the instance.
    AssignField {
        field: String,
        param: String,
        fluent: bool,
    },
    /// Return a new instance of `class` built from `args`.
    NewInstance { class: String, args: Vec<Arg> },
}

/// An argument passed to a constructor call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Arg {
    /// A parameter of the enclosing method.
    Param(String),
    /// The current instance.
    This,
}
