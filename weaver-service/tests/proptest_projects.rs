//! Property-based tests over whole generated projects.

use proptest::prelude::*;
use weaver_codegen::{
    pipeline::Assembler,
    renderer::{GenerationStamp, RendererRegistry},
};
use weaver_core::DatabaseKind;
use weaver_ir::{Ecosystem, Field, GenerationRequest, SchemaEntity};
use weaver_service::{Targets, archive::archive};

fn arb_ecosystem() -> impl Strategy<Value = Ecosystem> {
    prop::sample::select(Ecosystem::ALL.to_vec())
}

fn arb_database() -> impl Strategy<Value = DatabaseKind> {
    prop::sample::select(vec![DatabaseKind::Mysql, DatabaseKind::Mongodb])
}

/// Distinct lowercase entity names that are never reserved by any target.
fn arb_entities() -> impl Strategy<Value = Vec<SchemaEntity>> {
    prop::collection::btree_set("t_[a-z0-9]{1,8}", 1..6).prop_map(|names| {
        names
            .into_iter()
            .map(|name| {
                SchemaEntity::new(name)
                    .with_field(Field::new("amount", "decimal(10,2)"))
                    .with_field(Field::new("label", "varchar(40)").nullable())
            })
            .collect()
    })
}

fn arb_request() -> impl Strategy<Value = GenerationRequest> {
    (arb_ecosystem(), arb_database(), arb_entities(), any::<bool>()).prop_map(
        |(ecosystem, database, entities, auth)| {
            GenerationRequest::new(ecosystem, database, entities).with_auth(auth)
        },
    )
}

fn stamp() -> GenerationStamp {
    GenerationStamp::new("2024-05-01 12:00:00")
}

/// Names close to what the generated modules bind themselves.
const NEAR_MISSES: &[&str] = &[
    "orders",
    "Orders",
    "orders_routes",
    "orders_bp",
    "Orders_bp",
    "orders_payload",
    "session_local",
    "object_id",
    "return_document",
    "base_model",
    "mongo_client",
    "base",
    "flask",
    "app",
    "engine",
    "client",
    "index",
    "health",
    "open_db",
    "p_o_r_t",
    "m_o_d_e_l_s",
    "sequelize",
    "data_types",
    "router",
    "express",
    "users",
    "users_routes",
    "_",
    "_1",
    "_orders",
    "__orders",
];

fn arb_tricky_name() -> impl Strategy<Value = String> {
    prop_oneof![
        prop::sample::select(NEAR_MISSES).prop_map(str::to_string),
        "_[a-z0-9_]{0,6}",
        "[a-zA-Z][a-z]{0,5}(_routes|_bp|Routes|_payload)?",
    ]
}

fn arb_tricky_request() -> impl Strategy<Value = GenerationRequest> {
    (
        arb_ecosystem(),
        arb_database(),
        prop::collection::vec(arb_tricky_name(), 1..5),
        any::<bool>(),
    )
        .prop_map(|(ecosystem, database, names, auth)| {
            let entities = names
                .into_iter()
                .map(|name| SchemaEntity::new(name).with_field(Field::new("note", "text")))
                .collect();
            GenerationRequest::new(ecosystem, database, entities).with_auth(auth)
        })
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_' || c == '$')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

/// Names bound at module level by a generated Python file.
fn python_bindings(source: &str) -> Vec<String> {
    let mut names = Vec::new();
    let mut in_string = false;

    for line in source.lines() {
        let quotes = line.matches("\"\"\"").count();
        if in_string || quotes > 0 {
            if quotes % 2 == 1 {
                in_string = !in_string;
            }
            continue;
        }
        if line.starts_with(char::is_whitespace) {
            continue;
        }

        if let Some(rest) = line.strip_prefix("from ") {
            if let Some((_, imported)) = rest.split_once(" import ") {
                for item in imported.split(", ") {
                    let bound = item.rsplit(" as ").next().unwrap_or(item);
                    names.push(bound.trim().to_string());
                }
            }
        } else if let Some(rest) = line.strip_prefix("import ") {
            let bound = match rest.split_once(" as ") {
                Some((_, alias)) => alias,
                None => rest.split('.').next().unwrap_or(rest),
            };
            names.push(bound.trim().to_string());
        } else if let Some(rest) = line.strip_prefix("class ").or(line.strip_prefix("def ")) {
            let end = rest.find(['(', ':']).unwrap_or(rest.len());
            names.push(rest[..end].to_string());
        } else if let Some((target, _)) = line.split_once(" = ") {
            if is_identifier(target) {
                names.push(target.to_string());
            }
        }
    }
    names
}

/// Names bound at module level by a generated JavaScript file.
fn javascript_bindings(source: &str) -> Vec<String> {
    let mut names = Vec::new();

    for line in source.lines() {
        let Some(rest) = line.strip_prefix("const ") else {
            continue;
        };
        let Some((pattern, _)) = rest.split_once(" = ") else {
            continue;
        };
        match pattern.strip_prefix("{ ").and_then(|p| p.strip_suffix(" }")) {
            Some(list) => names.extend(list.split(", ").map(str::to_string)),
            None => names.push(pattern.to_string()),
        }
    }
    names
}

fn first_duplicate(names: &[String]) -> Option<&String> {
    let mut seen = std::collections::HashSet::new();
    names.iter().find(|name| !seen.insert(name.as_str()))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    /// Property: separable targets emit 2N + 3 files, inlined targets N + 3
    #[test]
    fn proptest_file_count(request in arb_request()) {
        let assembly = Assembler::new(&Targets).assemble(&request, stamp()).unwrap();
        let n = request.entities.len();

        let expected = match assembly.ecosystem {
            Ecosystem::Flask | Ecosystem::Express => 2 * n + 3,
            Ecosystem::FastApi => n + 3,
        };
        prop_assert_eq!(assembly.tree.len(), expected);
    }

    /// Property: assembling the same request twice yields identical trees and archives
    #[test]
    fn proptest_assembly_is_deterministic(request in arb_request()) {
        let assembler = Assembler::new(&Targets);
        let first = assembler.assemble(&request, stamp()).unwrap();
        let second = assembler.assemble(&request, stamp()).unwrap();

        prop_assert_eq!(&first.tree, &second.tree);
        prop_assert_eq!(archive(&first.tree).unwrap(), archive(&second.tree).unwrap());
    }

    /// Property: the entrypoint mounts every entity under its own route segment
    /// and references its model file stem
    #[test]
    fn proptest_entrypoint_matches_bundles(request in arb_request()) {
        let assembly = Assembler::new(&Targets).assemble(&request, stamp()).unwrap();
        let layout = Targets.renderer(assembly.ecosystem).layout();
        let entrypoint = assembly.tree.get_str(layout.entrypoint).unwrap();

        for entity in &assembly.entities {
            let ids = &entity.ids;
            prop_assert!(assembly.tree.contains(&layout.model_path(ids)));
            if let Some(routes) = layout.routes_path(ids) {
                prop_assert!(assembly.tree.contains(&routes));
            }
            prop_assert!(entrypoint.contains(&ids.collection_path()));
            let imports_model = entrypoint.contains(&format!("models/{}", ids.file_stem()))
                || entrypoint.contains(&format!("models.{}", ids.file_stem()));
            prop_assert!(imports_model);
        }
    }

    /// Property: only files carrying the stamp change when the stamp changes
    #[test]
    fn proptest_stamp_is_the_only_variation(request in arb_request()) {
        let assembler = Assembler::new(&Targets);
        let first = assembler.assemble(&request, stamp()).unwrap();
        let later = assembler
            .assemble(&request, GenerationStamp::new("2030-01-01 00:00:00"))
            .unwrap();

        prop_assert_eq!(first.tree.len(), later.tree.len());
        for (path, content) in first.tree.iter() {
            let other = later.tree.get(path).unwrap();
            if content != other {
                let text = String::from_utf8_lossy(content);
                prop_assert!(text.contains("2024-05-01 12:00:00"), "{} changed without a stamp", path);
            }
        }
    }

    /// Property: near-miss entity names are either rejected, or every
    /// generated module binds each top-level name exactly once
    #[test]
    fn proptest_module_bindings_are_unique(request in arb_tricky_request()) {
        let Ok(assembly) = Assembler::new(&Targets).assemble(&request, stamp()) else {
            return Ok(());
        };
        let layout = Targets.renderer(assembly.ecosystem).layout();

        let mut modules = vec![layout.entrypoint.to_string()];
        for entity in &assembly.entities {
            modules.push(layout.model_path(&entity.ids));
            modules.extend(layout.routes_path(&entity.ids));
        }

        for path in &modules {
            let source = assembly.tree.get_str(path).unwrap();
            let names = match assembly.ecosystem {
                Ecosystem::Express => javascript_bindings(source),
                Ecosystem::Flask | Ecosystem::FastApi => python_bindings(source),
            };
            prop_assert!(!names.is_empty(), "{} binds nothing", path);
            prop_assert_eq!(first_duplicate(&names), None, "{} in {}", path, source);
        }
    }
}
