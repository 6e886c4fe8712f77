//! Laws that hold for every dialect and compatibility mode.

mod common;
use common::*;

use std::thread;

use oxide_ddl::prelude::*;

#[test]
fn generation_is_deterministic_across_threads() {
    let expressions = one_of_each();
    for dialect in Dialect::ALL {
        let generator = loose(*dialect);
        let expected = generator.generate_all(&expressions).unwrap();

        thread::scope(|s| {
            let handles: Vec<_> = (0..4)
                .map(|_| s.spawn(|| generator.generate_all(&expressions).unwrap()))
                .collect();
            for handle in handles {
                assert_eq!(handle.join().unwrap(), expected, "dialect {dialect}");
            }
        });
    }
}

#[test]
fn loose_mode_mirrors_strict_mode() {
    for dialect in Dialect::ALL {
        let strict = strict(*dialect);
        let loose = loose(*dialect);
        for expression in one_of_each() {
            let kind = expression.kind();
            let relaxed = loose.generate(&expression).unwrap();
            match strict.generate(&expression) {
                Ok(sql) => assert_eq!(relaxed, sql, "{dialect} {kind}"),
                Err(e) => {
                    assert!(e.is_unsupported(), "{dialect} {kind}: {e}");
                    assert_eq!(relaxed, "", "{dialect} {kind}");
                }
            }
        }
    }
}

#[test]
fn generic_baseline_supports_every_kind() {
    let generic = strict(Dialect::Generic);
    let expressions = one_of_each();
    assert_eq!(expressions.len(), ExpressionKind::ALL.len());
    for expression in &expressions {
        assert!(!generate(&generic, expression.clone()).is_empty());
    }
}

#[test]
fn sqlite_rejects_what_it_cannot_express() {
    let sqlite = strict(Dialect::Sqlite);
    let rejected: Vec<ExpressionKind> = one_of_each()
        .into_iter()
        .filter(|e| sqlite.generate(e).is_err())
        .map(|e| e.kind())
        .collect();
    assert_eq!(
        rejected,
        vec![
            ExpressionKind::AlterColumn,
            ExpressionKind::AlterDefaultConstraint,
            ExpressionKind::DeleteDefaultConstraint,
            ExpressionKind::CreateForeignKey,
            ExpressionKind::DeleteForeignKey,
            ExpressionKind::CreateSequence,
            ExpressionKind::DeleteSequence,
            ExpressionKind::DeleteConstraint,
        ]
    );
}

#[test]
fn unique_constraints_rewrite_to_indexes_on_sqlite() {
    let sqlite = strict(Dialect::Sqlite);
    let constraint = ConstraintDefinition::unique("UQ_Orders_Ref", "Orders", ["Ref", "Region"])
        .schema("sales");

    let create = CreateConstraintExpression::new(constraint.clone());
    assert_eq!(
        generate(&sqlite, create.clone()),
        generate(&sqlite, create.to_unique_index())
    );

    let delete = DeleteConstraintExpression::new(constraint);
    assert_eq!(
        generate(&sqlite, delete.clone()),
        generate(&sqlite, delete.to_index_drop())
    );
}

#[test]
fn embedded_foreign_keys_are_silent_everywhere() {
    let flagged = ForeignKeyDefinition::new("FK_Orders_Users", "Orders", "Users")
        .column("UserId", "Id")
        .embedded();
    let prefixed = ForeignKeyDefinition::new("$$IGNORE$$_FK_Orders_Users", "Orders", "Users")
        .column("UserId", "Id");

    for dialect in Dialect::ALL {
        for generator in [strict(*dialect), loose(*dialect)] {
            for fk in [&flagged, &prefixed] {
                assert_eq!(generate(&generator, CreateForeignKeyExpression::new(fk.clone())), "");
                assert_eq!(generate(&generator, DeleteForeignKeyExpression::new(fk.clone())), "");
            }
        }
    }
}

#[test]
fn index_columns_keep_their_direction() {
    let index = IndexDefinition::new("IX_Events", "Events")
        .column(IndexColumnDefinition::descending("a"))
        .column(IndexColumnDefinition::new("b"));

    for dialect in Dialect::ALL {
        let sql = generate(&strict(*dialect), CreateIndexExpression::new(index.clone()));
        assert!(sql.ends_with(r#"("a" DESC, "b" ASC)"#), "{dialect}: {sql}");
    }
}

#[test]
fn embedded_marker_round_trips_through_json() {
    let json = r#"{
        "name": "FK_Orders_Users",
        "foreign_table": "Orders",
        "foreign_columns": ["UserId"],
        "primary_table": "Users",
        "primary_columns": ["Id"],
        "already_embedded": true
    }"#;
    let fk: ForeignKeyDefinition = serde_json::from_str(json).unwrap();
    assert!(fk.is_already_embedded());
    assert_eq!(
        generate(&strict(Dialect::Postgres), CreateForeignKeyExpression::new(fk)),
        ""
    );
}

#[test]
fn index_without_columns_is_never_rendered() {
    let empty = CreateIndexExpression::new(IndexDefinition::new("IX_Events", "Events"));
    for dialect in Dialect::ALL {
        assert!(generate_err(&strict(*dialect), empty.clone()).is_unsupported());
        assert_eq!(generate(&loose(*dialect), empty.clone()), "");
    }
}
