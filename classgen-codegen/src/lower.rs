//! Lowering from [`ResolvedClass`] to [`ClassDecl`].
//!
//! Decides which members exist and in what order:
//!
//! 1. one field per property
//! 2. the constructor (plus `createBuilder` for immutable classes)
//! 3. per property, the accessor then the mutator (mutators skipped for immutable classes)
//! 4. `build()` for builders

use classgen_core::upper_first;
use classgen_ir::{ConstructorShape, Property, ResolvedClass};

use crate::class::{
    Arg, ClassDecl, ConstructorDecl, FieldDecl, Member, MethodBody, MethodDecl, ParamDecl,
};

/// Lower a resolved class into its declaration list.
pub fn lower(class: &ResolvedClass) -> ClassDecl {
    let mut members: Vec<Member> = class
        .properties
        .iter()
        .map(|p| {
            Member::Field(FieldDecl {
                name: p.name.clone(),
            })
        })
        .collect();

    match &class.constructor {
        ConstructorShape::None => {}
        ConstructorShape::Plain(prop) => {
            members.push(Member::Constructor(ConstructorDecl::Plain {
                param: param_for(prop).optional(),
            }));
        }
        ConstructorShape::BuilderConsuming {
            builder_class,
            construct,
        } => {
            let assignments = class
                .properties
                .iter()
                .map(|p| (p.name.clone(), getter_name("get", p)))
                .collect();
            members.push(Member::Constructor(ConstructorDecl::FromBuilder {
                builder_class: builder_class.clone(),
                assignments,
            }));
            members.push(Member::Method(create_builder(builder_class, construct.as_ref())));
        }
    }

    let fluent = class.patterns.is_builder();
    for prop in &class.properties {
        members.push(Member::Method(accessor(prop)));
        if class.has_mutators() {
            members.push(Member::Method(mutator(prop, fluent)));
        }
    }

    if let Some(built) = class.patterns.built_class() {
        members.push(Member::Method(MethodDecl::new(
            "build",
            MethodBody::NewInstance {
                class: built.to_string(),
                args: vec![Arg::This],
            },
        )));
    }

    ClassDecl {
        name: class.class_name.clone(),
        namespace: (!class.namespace.is_empty()).then(|| class.namespace()),
        members,
    }
}

fn param_for(prop: &Property) -> ParamDecl {
    ParamDecl::new(prop.name.clone(), prop.fqn.clone())
}

fn getter_name(prefix: &str, prop: &Property) -> String {
    format!("{}{}", prefix, upper_first(&prop.name))
}

fn accessor(prop: &Property) -> MethodDecl {
    let field = prop.name.clone();
    if prop.boolean {
        MethodDecl::new(getter_name("is", prop), MethodBody::ReturnPresence { field })
    } else {
        MethodDecl::new(getter_name("get", prop), MethodBody::ReturnField { field })
    }
}

fn mutator(prop: &Property, fluent: bool) -> MethodDecl {
    MethodDecl::new(
        getter_name("set", prop),
        MethodBody::AssignField {
            field: prop.name.clone(),
            param: prop.name.clone(),
            fluent,
        },
    )
    .param(param_for(prop))
}

fn create_builder(builder_class: &str, construct: Option<&Property>) -> MethodDecl {
    let method = MethodDecl::new(
        "createBuilder",
        MethodBody::NewInstance {
            class: builder_class.to_string(),
            args: construct
                .map(|p| Arg::Param(p.name.clone()))
                .into_iter()
                .collect(),
        },
    );
    match construct {
        Some(prop) => method.param(param_for(prop).optional()),
        None => method,
    }
}
