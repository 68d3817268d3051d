//! Snapshot tests for PHP class generation.
//!
//! These tests verify that the generated PHP matches expected output.
//! Run `cargo insta review` to update snapshots when making intentional changes.

use classgen_codegen::LineEnding;
use classgen_codegen_php::{GenerateConfig, Generator};
use classgen_core::FileRules;
use classgen_manifest::{Format, ModelFile, extract};

/// Generate every class of a YAML model and return (relative path, content) pairs.
fn generate_files(yaml: &str) -> Vec<(String, String)> {
    let model = ModelFile::from_str_with_format(yaml, "models.yaml", Format::Yaml)
        .expect("Failed to parse model");
    let generator = Generator::new(GenerateConfig::default().with_line_ending(LineEnding::Lf));

    model
        .entries()
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            let class = extract(entry, index).expect("Failed to extract class");
            let file = generator.generate(&class, FileRules::default());
            (
                file.relative_path().display().to_string().replace('\\', "/"),
                file.content().to_string(),
            )
        })
        .collect()
}

fn generate_one(yaml: &str) -> String {
    let mut files = generate_files(yaml);
    assert_eq!(files.len(), 1);
    files.remove(0).1
}

fn count_lines(code: &str, prefix: &str) -> usize {
    code.lines().filter(|l| l.trim_start().starts_with(prefix)).count()
}

#[test]
fn test_user_example() {
    let files = generate_files(
        r#"
        - fqn: App\Model\User
          props:
            - name
            - { prop: age, fqn: Integer }
            - { prop: active, type: boolean }
        "#,
    );

    assert_eq!(files.len(), 1);
    assert_eq!(files[0].0, "App/Model/User.php");
    insta::assert_snapshot!(files[0].1, @r#"
<?php
namespace App\Model;

class User {
    private $_name;
    private $_age;
    private $_active;

    public function getName() {
        return $this->_name;
    }

    public function setName($name) {
        $this->_name = $name;
    }

    public function getAge() {
        return $this->_age;
    }

    public function setAge(\Integer $age) {
        $this->_age = $age;
    }

    public function isActive() {
        return empty($this->_active) ? false : true;
    }

    public function setActive($active) {
        $this->_active = $active;
    }

}
"#);
}

#[test]
fn test_member_counts_without_patterns() {
    let code = generate_one(
        r#"
        - fqn: App\Shop\Order
          props: [number, total, { prop: paid, type: boolean }, { prop: customer, fqn: App\Shop\Customer }]
        "#,
    );

    assert_eq!(count_lines(&code, "private $"), 4);
    assert_eq!(
        count_lines(&code, "public function get") + count_lines(&code, "public function is"),
        4
    );
    assert_eq!(count_lines(&code, "public function set"), 4);
    assert_eq!(count_lines(&code, "public function __construct"), 0);
    assert!(code.contains("public function setCustomer(\\App\\Shop\\Customer $customer) {"));
}

#[test]
fn test_plain_constructor() {
    let code = generate_one(
        r#"
        - fqn: App\Shop\Order
          construct: { prop: id, fqn: App\Shop\OrderId }
          props: [total]
        "#,
    );

    assert_eq!(count_lines(&code, "public function __construct"), 1);
    assert!(code.contains(
        "    public function __construct(\\App\\Shop\\OrderId $id = null) {\n        $this->_id = $id;\n    }\n"
    ));
    // The constructor property also gets a field, accessor and mutator.
    assert!(code.contains("    private $_id;\n    private $_total;\n"));
    assert!(code.contains("public function getId() {"));
    assert!(code.contains("public function setId(\\App\\Shop\\OrderId $id) {"));
}

#[test]
fn test_immutable_class() {
    let code = generate_one(
        r#"
        - fqn: App\Model\User
          construct: { prop: id, fqn: App\Model\UserId }
          props:
            - name
            - { prop: active, type: boolean }
          class-patterns: [immutable]
          class-metadata:
            builderClass: App\Model\UserBuilder
        "#,
    );

    insta::assert_snapshot!(code, @r#"
<?php
namespace App\Model;

class User {
    private $_id;
    private $_name;
    private $_active;

    public function __construct(\App\Model\UserBuilder $builder) {
        $this->_id = $builder->getId();
        $this->_name = $builder->getName();
        $this->_active = $builder->getActive();
    }

    public function createBuilder(\App\Model\UserId $id = null) {
        return new \App\Model\UserBuilder($id);
    }

    public function getId() {
        return $this->_id;
    }

    public function getName() {
        return $this->_name;
    }

    public function isActive() {
        return empty($this->_active) ? false : true;
    }

}
"#);
}

#[test]
fn test_immutable_without_construct() {
    let code = generate_one(
        r#"
        - fqn: App\Builder
          props: [name]
          class-patterns: [immutable]
          class-metadata: { builderClass: App\Builder }
        "#,
    );

    assert!(code.contains("public function __construct(\\App\\Builder $builder) {"));
    assert!(code.contains("$this->_name = $builder->getName();"));
    assert!(code.contains(
        "    public function createBuilder() {\n        return new \\App\\Builder();\n    }\n"
    ));
    assert_eq!(count_lines(&code, "public function set"), 0);
}

#[test]
fn test_builder_class() {
    let code = generate_one(
        r#"
        - fqn: App\Model\UserBuilder
          construct: id
          props: [name]
          class-patterns: [builder]
          class-metadata:
            builtClass: App\Model\User
        "#,
    );

    insta::assert_snapshot!(code, @r#"
<?php
namespace App\Model;

class UserBuilder {
    private $_id;
    private $_name;

    public function __construct($id = null) {
        $this->_id = $id;
    }

    public function getId() {
        return $this->_id;
    }

    public function setId($id) {
        $this->_id = $id;
        return $this;
    }

    public function getName() {
        return $this->_name;
    }

    public function setName($name) {
        $this->_name = $name;
        return $this;
    }

    public function build() {
        return new \App\Model\User($this);
    }

}
"#);
}

#[test]
fn test_builder_and_immutable_together() {
    let code = generate_one(
        r#"
        - fqn: App\Model\Snapshot
          props: [value]
          class-patterns: [builder, immutable]
          class-metadata:
            builderClass: App\Model\SnapshotBuilder
            builtClass: App\Model\Snapshot
        "#,
    );

    assert!(code.contains("public function __construct(\\App\\Model\\SnapshotBuilder $builder) {"));
    assert!(code.contains("public function createBuilder() {"));
    assert!(code.contains("return new \\App\\Model\\Snapshot($this);"));
    assert_eq!(count_lines(&code, "public function set"), 0);
}

#[test]
fn test_unknown_patterns_are_ignored() {
    let with_unknown = generate_one(
        r#"
        - fqn: App\Tag
          props: [label]
          class-patterns: [singleton]
        "#,
    );
    let without = generate_one(
        r#"
        - fqn: App\Tag
          props: [label]
        "#,
    );

    assert_eq!(with_unknown, without);
}

#[test]
fn test_global_namespace() {
    let files = generate_files(
        r#"
        - fqn: Tag
          props: [label]
        "#,
    );

    assert_eq!(files[0].0, "Tag.php");
    assert!(files[0].1.starts_with("<?php\n\nclass Tag {\n"));
}

#[test]
fn test_batch_keeps_document_order() {
    let files = generate_files(
        r#"
        - fqn: App\Zeta
        - fqn: App\Alpha\Beta
        "#,
    );

    let paths: Vec<&str> = files.iter().map(|(p, _)| p.as_str()).collect();
    assert_eq!(paths, vec!["App/Zeta.php", "App/Alpha/Beta.php"]);
}

#[test]
fn test_rendering_is_deterministic() {
    let yaml = r#"
        - fqn: App\Model\User
          props: [name, { prop: active, type: boolean }]
          class-patterns: [builder]
          class-metadata: { builtClass: App\Model\Frozen }
    "#;

    assert_eq!(generate_files(yaml), generate_files(yaml));
}
