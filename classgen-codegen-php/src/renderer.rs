//! PHP rendering of class declarations.

use classgen_codegen::{
    Arg, ClassDecl, CodeBuilder, ConstructorDecl, GenerateConfig, Member, MethodBody, MethodDecl,
    ParamDecl,
};

/// Renders [`ClassDecl`]s as PHP source.
#[derive(Debug, Clone, Default)]
pub struct PhpRenderer {
    config: GenerateConfig,
}

impl PhpRenderer {
    pub fn new(config: GenerateConfig) -> Self {
        Self { config }
    }

    /// Render a whole class file.
    pub fn render_class(&self, class: &ClassDecl) -> String {
        let header = format!("class {} {{", class.name);
        let builder =
            CodeBuilder::new(self.config.indent, self.config.line_ending).line("<?php");
        let builder = match &class.namespace {
            Some(namespace) => builder.line(&format!("namespace {};", namespace)).blank(),
            None => builder.blank(),
        };

        builder
            .block_with_close(&header, "}", |b| {
                let b = b
                    .each(class.fields(), |b, field| {
                        b.line(&format!("private ${};", self.field(&field.name)))
                    })
                    .blank();
                b.each(
                    class.members.iter().filter(|m| !matches!(m, Member::Field(_))),
                    |b, member| self.render_member(b, member).blank(),
                )
            })
            .blank()
            .build()
    }

    fn render_member(&self, b: CodeBuilder, member: &Member) -> CodeBuilder {
        match member {
            Member::Field(_) => b,
            Member::Constructor(ctor) => self.render_constructor(b, ctor),
            Member::Method(method) => self.render_method(b, method),
        }
    }

    fn render_constructor(&self, b: CodeBuilder, ctor: &ConstructorDecl) -> CodeBuilder {
        match ctor {
            ConstructorDecl::Plain { param } => b.block_with_close(
                &format!("public function __construct({}) {{", self.param(param)),
                "}",
                |b| {
                    b.line(&format!(
                        "$this->{} = ${};",
                        self.field(&param.name),
                        param.name
                    ))
                },
            ),
            ConstructorDecl::FromBuilder {
                builder_class,
                assignments,
            } => b.block_with_close(
                &format!(
                    "public function __construct({} $builder) {{",
                    qualified(builder_class)
                ),
                "}",
                |b| {
                    b.each(assignments, |b, (field, getter)| {
                        b.line(&format!(
                            "$this->{} = $builder->{}();",
                            self.field(field),
                            getter
                        ))
                    })
                },
            ),
        }
    }

    fn render_method(&self, b: CodeBuilder, method: &MethodDecl) -> CodeBuilder {
        let params = method
            .params
            .iter()
            .map(|p| self.param(p))
            .collect::<Vec<_>>()
            .join(", ");
        let header = format!("public function {}({}) {{", method.name, params);

        b.block_with_close(&header, "}", |b| match &method.body {
            MethodBody::ReturnField { field } => {
                b.line(&format!("return $this->{};", self.field(field)))
            }
            MethodBody::ReturnPresence { field } => b.line(&format!(
                "return empty($this->{}) ? false : true;",
                self.field(field)
            )),
            MethodBody::AssignField {
                field,
                param,
                fluent,
            } => b
                .line(&format!("$this->{} = ${};", self.field(field), param))
                .when(*fluent, |b| b.line("return $this;")),
            MethodBody::NewInstance { class, args } => {
                let args = args
                    .iter()
                    .map(|arg| match arg {
                        Arg::Param(name) => format!("${}", name),
                        Arg::This => "$this".to_string(),
                    })
                    .collect::<Vec<_>>()
                    .join(", ");
                b.line(&format!("return new {}({});", qualified(class), args))
            }
        })
    }

    fn field(&self, name: &str) -> String {
        self.config.field_name(name)
    }

    /// `[\Type ]$name[ = null]`
    fn param(&self, param: &ParamDecl) -> String {
        let mut out = String::new();
        if let Some(ty) = &param.ty {
            out.push_str(&qualified(ty));
            out.push(' ');
        }
        out.push('$');
        out.push_str(&param.name);
        if param.optional {
            out.push_str(" = null");
        }
        out
    }
}

/// Fully qualify a class name from the global namespace.
fn qualified(name: &str) -> String {
    format!("\\{}", name.trim_start_matches('\\'))
}
