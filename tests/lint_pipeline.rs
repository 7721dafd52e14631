//! End-to-end tests for the lint pipeline
//!
//! Exercises the parse-then-validate pipeline the way the CLI drives it:
//! schema text in, ordered issue sequence out.

use schema_lint::{
    has_errors, lint_file, lint_source, render_json, LintError, Issue, RuleEngine, SchemaParser,
    Severity,
};

const BLOG_SCHEMA: &str = r#"
model User {
  id        String   @id @default(cuid())
  email     String   @unique
  name      String?
  posts     Post[]
  createdAt DateTime @default(now())
  updatedAt DateTime @updatedAt
}

model Post {
  id        String   @id @default(cuid())
  title     String
  authorId  String
  author    User     @relation(fields: [authorId], references: [id])
  createdAt DateTime @default(now())
  updatedAt DateTime @updatedAt

  @@index([authorId])
}
"#;

#[test]
fn test_well_formed_schema_has_no_errors_or_warnings() {
    let issues = lint_source(BLOG_SCHEMA);
    assert!(!has_errors(&issues));
    // The only finding is the suggestion to annotate the back-relation
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].severity, Severity::Info);
    assert_eq!(issues[0].field, "posts");
}

#[test]
fn test_missing_id_emits_exactly_one_error() {
    let issues = lint_source("model Profile {\n  bio String\n  createdAt DateTime\n}");
    let id_errors: Vec<_> = issues
        .iter()
        .filter(|i| i.severity == Severity::Error && i.model == "Profile")
        .collect();
    assert_eq!(id_errors.len(), 1);
    assert!(id_errors[0].message.contains("@id"));
}

#[test]
fn test_pipeline_is_deterministic() {
    let schema = r#"
        model user { bio String }
        model Post {
          id       Int @id
          authorId Int
          author   Writer @relation(fields: [authorId], references: [id])
          account_status String
        }
    "#;
    let first = lint_source(schema);
    let second = lint_source(schema);
    assert_eq!(first, second);
    // Byte-identical renderings too
    assert_eq!(
        render_json(&first).unwrap(),
        render_json(&second).unwrap()
    );
}

#[test]
fn test_unannotated_relation_emits_one_info() {
    let schema = r#"
        model User {
          id        Int @id
          createdAt DateTime
        }
        model Post {
          id        Int  @id
          author    User
          createdAt DateTime
        }
    "#;
    let issues = lint_source(schema);
    let relation_infos: Vec<_> = issues
        .iter()
        .filter(|i| i.severity == Severity::Info && i.field == "author")
        .collect();
    assert_eq!(relation_infos.len(), 1);
    assert!(relation_infos[0].message.contains("@relation"));
}

#[test]
fn test_foreign_key_index_coverage() {
    let indexed = r#"
        model Post {
          id        Int  @id
          authorId  Int
          author    User @relation(fields: [authorId], references: [id])
          createdAt DateTime
          @@index([authorId])
        }
    "#;
    let fk_issues = |issues: &[Issue]| {
        issues
            .iter()
            .filter(|i| i.field == "authorId" && i.severity == Severity::Warning)
            .count()
    };
    assert_eq!(fk_issues(&lint_source(indexed)), 0);

    let unindexed = indexed.replace("@@index([authorId])", "");
    assert_eq!(fk_issues(&lint_source(&unindexed)), 1);
}

#[test]
fn test_unterminated_block_is_dropped() {
    let issues = lint_source("model Foo {\n  id Int @id\n  name String\n");
    assert!(issues.is_empty());
}

#[test]
fn test_no_model_blocks_is_clean_success() {
    let schema = r#"
        generator client {
          provider = "prisma-client-js"
        }

        datasource db {
          provider = "postgresql"
          url      = env("DATABASE_URL")
        }
    "#;
    let issues = lint_source(schema);
    assert!(issues.is_empty());
    assert!(!has_errors(&issues));
}

#[test]
fn test_lowercase_model_collects_three_issues() {
    let issues = lint_source("model user { bio String }");
    assert_eq!(issues.len(), 3);

    // Battery order: missing-id, missing-timestamps, then naming
    assert_eq!(issues[0].severity, Severity::Error);
    assert!(issues[0].message.contains("@id"));
    assert_eq!(issues[1].severity, Severity::Warning);
    assert!(issues[1].message.contains("timestamp"));
    assert_eq!(issues[2].severity, Severity::Warning);
    assert!(issues[2].message.contains("uppercase"));

    assert!(has_errors(&issues));
}

#[test]
fn test_issue_order_rule_then_model() {
    let schema = r#"
        model Alpha { name String }
        model Beta { name String }
    "#;
    let issues = lint_source(schema);

    // All missing-id errors first (Alpha then Beta), then all warnings
    assert_eq!(issues[0].model, "Alpha");
    assert_eq!(issues[0].severity, Severity::Error);
    assert_eq!(issues[1].model, "Beta");
    assert_eq!(issues[1].severity, Severity::Error);
    assert_eq!(issues[2].model, "Alpha");
    assert_eq!(issues[2].severity, Severity::Warning);
    assert_eq!(issues[3].model, "Beta");
    assert_eq!(issues[3].severity, Severity::Warning);
}

#[test]
fn test_disabled_rules_are_skipped() {
    let models = SchemaParser::new().parse("model User { id Int @id }");
    let engine = RuleEngine::without(&["missing-timestamps".to_string()]);
    assert!(engine.run(&models).is_empty());

    // The full battery still flags it
    assert_eq!(RuleEngine::new().run(&models).len(), 1);
}

#[test]
fn test_lint_file_reads_schema() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("schema.prisma");
    std::fs::write(&path, BLOG_SCHEMA).unwrap();

    let issues = lint_file(&path).unwrap();
    assert_eq!(issues, lint_source(BLOG_SCHEMA));
    assert!(!has_errors(&issues));
}

#[test]
fn test_lint_file_missing_path() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.prisma");

    match lint_file(&missing) {
        Err(LintError::SchemaNotFound { path }) => assert_eq!(path, missing),
        other => panic!("Expected SchemaNotFound, got {:?}", other),
    }
}

#[test]
fn test_cycles_are_not_errors() {
    let schema = r#"
        model Employee {
          id        Int      @id
          managerId Int?
          manager   Employee? @relation(fields: [managerId], references: [id])
          reports   Employee[]
          createdAt DateTime
          @@index([managerId])
        }
    "#;
    let issues = lint_source(schema);
    assert!(!has_errors(&issues), "cycle reported as error: {:?}", issues);
}
