/// One field/accessor/mutator unit of a generated class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    /// Bare property name, used verbatim as the parameter name.
    pub name: String,
    /// Fully-qualified type used to annotate constructor and setter parameters.
    pub fqn: Option<String>,
    /// Whether the accessor is an `is<Name>` truthiness check.
    pub boolean: bool,
}

impl Property {
    /// Create an untyped property.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fqn: None,
            boolean: false,
        }
    }

    /// Annotate parameters for this property with a fully-qualified type.
    pub fn typed(mut self, fqn: impl Into<String>) -> Self {
        self.fqn = Some(fqn.into());
        self
    }

    /// Mark this property as boolean.
    pub fn boolean(mut self) -> Self {
        self.boolean = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_property_builder() {
        let prop = Property::new("age").typed("Integer");
        assert_eq!(prop.name, "age");
        assert_eq!(prop.fqn.as_deref(), Some("Integer"));
        assert!(!prop.boolean);

        let flag = Property::new("active").boolean();
        assert!(flag.boolean);
        assert_eq!(flag.fqn, None);
    }
}
