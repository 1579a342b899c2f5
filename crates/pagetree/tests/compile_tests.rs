//! Integration tests for pagetree::compile
//!
//! Covers the observable properties of the compiled tree:
//! - determinism and re-entrancy
//! - fullPath assignment
//! - sync propagation through layouts and groups
//! - sibling ordering, with and without a group order
//! - empty directories
//! - serialization round trips and the hidden metadata slot
//! - error and collision reporting

use pagetree::*;
use pretty_assertions::assert_eq;
use serde_json::json;

fn pages(paths: &[&str]) -> Vec<(String, String)> {
    paths
        .iter()
        .map(|p| (p.to_string(), p.trim_start_matches("./pages/").to_string()))
        .collect()
}

fn compile_paths(paths: &[&str], options: &CompileOptions) -> CompiledRoutes<String> {
    compile(pages(paths), options).unwrap()
}

fn names<H>(nodes: &[RouteNode<H>]) -> Vec<&str> {
    nodes.iter().map(RouteNode::display_name).collect()
}

fn find_by_source<'a, H>(compiled: &'a CompiledRoutes<H>, source: &str) -> &'a RouteNode<H> {
    compiled
        .walk()
        .map(|(_, node)| node)
        .find(|node| node.meta().source_path() == source)
        .unwrap_or_else(|| panic!("no node backed by {}", source))
}

const APP: &[&str] = &[
    "./pages/(main)/layout",
    "./pages/(main)/index",
    "./pages/(main)/settings/layout",
    "./pages/(main)/settings/profile.sync",
    "./pages/(main)/users/[id]/index",
    "./pages/(main)/users/[id]/edit",
    "./pages/(external)/layout",
    "./pages/(auth)/login",
    "./pages/add/layout",
    "./pages/add/index",
    "./pages/docs/[...slug]",
    "./pages/preview",
];

// ============================================================================
// Determinism
// ============================================================================

#[test]
fn test_input_order_does_not_matter() {
    let options = CompileOptions::new().with_group_order(["main"]);
    let forward = compile_paths(APP, &options);

    let mut reversed: Vec<&str> = APP.to_vec();
    reversed.reverse();
    let backward = compile_paths(&reversed, &options);

    assert_eq!(forward.roots, backward.roots);

    let manifest = |c: &CompiledRoutes<String>| {
        serde_json::to_value(c.roots.iter().map(RouteNode::manifest).collect::<Vec<_>>()).unwrap()
    };
    assert_eq!(manifest(&forward), manifest(&backward));
}

#[test]
fn test_concurrent_calls_are_independent() {
    let options = CompileOptions::default();
    let expected = compile_paths(APP, &options);

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| compile_paths(APP, &options)))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap().roots, expected.roots);
        }
    });
}

// ============================================================================
// fullPath
// ============================================================================

#[test]
fn test_full_path_of_layout_and_index() {
    let compiled = compile_paths(&["./pages/add/layout", "./pages/add/index"], &CompileOptions::default());

    assert_eq!(find_by_source(&compiled, "./pages/add/layout").meta().full_path(), "/add");
    assert_eq!(find_by_source(&compiled, "./pages/add/index").meta().full_path(), "/add/");
}

#[test]
fn test_full_path_skips_groups_and_keeps_params() {
    let compiled = compile_paths(APP, &CompileOptions::default());

    let cases = [
        ("./pages/(main)/layout", ""),
        ("./pages/(main)/index", "/"),
        ("./pages/(main)/settings/layout", "/settings"),
        ("./pages/(main)/settings/profile.sync", "/settings/profile"),
        ("./pages/(main)/users/[id]/index", "/users/:id/"),
        ("./pages/(main)/users/[id]/edit", "/users/:id/edit"),
        ("./pages/(auth)/login", "/login"),
        ("./pages/docs/[...slug]", "/docs/*slug"),
        ("./pages/preview", "/preview"),
    ];
    for (source, full_path) in cases {
        assert_eq!(find_by_source(&compiled, source).meta().full_path(), full_path, "{}", source);
    }
}

#[test]
fn test_paths_of_special_nodes_are_empty() {
    let compiled = compile_paths(APP, &CompileOptions::default());

    for (_, node) in compiled.walk() {
        match node.meta().kind() {
            NodeKind::Group | NodeKind::Layout | NodeKind::Index => assert_eq!(node.path, ""),
            NodeKind::Directory | NodeKind::Leaf => assert_ne!(node.path, ""),
        }
    }
}

#[test]
fn test_dotted_page_names_stay_distinct() {
    let compiled = compile(vec![("./pages/v1.2", 1), ("./pages/v1.3", 2)], &CompileOptions::default()).unwrap();

    assert_eq!(names(&compiled.roots), vec!["v1.2", "v1.3"]);
    assert_eq!(compiled.roots[0].meta().full_path(), "/v1.2");
    assert!(compiled.collisions.is_empty());
}

#[test]
fn test_only_configured_extensions_are_stripped() {
    let options = CompileOptions::new().with_extensions(["vue"]);
    let compiled = compile(
        vec![("./pages/about.vue", 1), ("./pages/notes.tsx", 2)],
        &options,
    )
    .unwrap();
    assert_eq!(names(&compiled.roots), vec!["about", "notes.tsx"]);
}

#[test]
fn test_root_matches_with_or_without_current_dir_prefix() {
    let options = CompileOptions::default();
    let full_paths = |path: &str| -> Vec<String> {
        compile(vec![(path, ())], &options)
            .unwrap()
            .walk()
            .map(|(_, node)| node.meta().full_path().to_string())
            .collect()
    };

    assert_eq!(full_paths("./pages/about"), vec!["/about"]);
    assert_eq!(full_paths("pages/about"), vec!["/about"]);
    assert_eq!(
        compile(vec![("pages/about", ())], &options).unwrap().roots,
        compile(vec![("./pages/about", ())], &options).unwrap().roots
    );
}

// ============================================================================
// Sync propagation
// ============================================================================

#[test]
fn test_sync_page_marks_its_layout() {
    let compiled = compile_paths(
        &["./pages/settings/layout", "./pages/settings/profile.sync"],
        &CompileOptions::default(),
    );

    let layout = find_by_source(&compiled, "./pages/settings/layout");
    assert_eq!(layout.meta().kind(), NodeKind::Layout);
    assert_eq!(layout.meta().is_sync(), Some(true));
    assert_eq!(compiled.roots[0].meta().is_sync(), Some(true));
}

#[test]
fn test_sync_page_marks_its_group() {
    let compiled = compile_paths(
        &["./pages/(main)/layout", "./pages/(main)/profile.sync"],
        &CompileOptions::default(),
    );

    let group = &compiled.roots[0];
    assert_eq!(group.meta().kind(), NodeKind::Group);
    assert_eq!(group.meta().is_sync(), Some(true));
}

#[test]
fn test_sync_stays_inside_its_branch() {
    let compiled = compile_paths(APP, &CompileOptions::default());

    let add_layout = find_by_source(&compiled, "./pages/add/layout");
    assert_eq!(add_layout.meta().is_sync(), Some(false));

    let users = find_by_source(&compiled, "./pages/(main)/users");
    assert_eq!(users.meta().is_sync(), Some(false));

    let main = find_by_source(&compiled, "./pages/(main)/layout");
    assert_eq!(main.meta().is_sync(), Some(true));
}

// ============================================================================
// Ordering
// ============================================================================

#[test]
fn test_non_groups_come_before_groups() {
    let compiled = compile_paths(
        &[
            "./pages/add/layout",
            "./pages/preview",
            "./pages/(main)/layout",
            "./pages/(external)/layout",
        ],
        &CompileOptions::default(),
    );
    assert_eq!(names(&compiled.roots), vec!["add", "preview", "(external)", "(main)"]);
}

#[test]
fn test_custom_group_order() {
    let paths = [
        "./pages/(admin)/layout",
        "./pages/(external)/layout",
        "./pages/(main)/layout",
        "./pages/(settings)/layout",
    ];
    let options = CompileOptions::new().with_group_order(["main"]);
    let compiled = compile_paths(&paths, &options);
    assert_eq!(
        names(&compiled.roots),
        vec!["(main)", "(admin)", "(external)", "(settings)"]
    );
}

#[test]
fn test_group_order_tolerates_parentheses() {
    let paths = [
        "./pages/(admin)/layout",
        "./pages/(login)/index",
        "./pages/(main)/layout",
    ];
    let options = CompileOptions::new().with_group_order(["(main)", "login", "missing"]);
    let compiled = compile_paths(&paths, &options);
    assert_eq!(names(&compiled.roots), vec!["(main)", "(login)", "(admin)"]);
}

#[test]
fn test_ordering_applies_at_every_level() {
    let options = CompileOptions::new().with_group_order(["main"]);
    let compiled = compile_paths(APP, &options);

    assert_eq!(
        names(&compiled.roots),
        vec!["add", "docs", "preview", "(main)", "(auth)", "(external)"]
    );

    let main = find_by_source(&compiled, "./pages/(main)/layout");
    assert_eq!(names(main.child_nodes()), vec!["", "settings", "users"]);

    let id = find_by_source(&compiled, "./pages/(main)/users/[id]");
    assert_eq!(names(id.child_nodes()), vec!["", "edit"]);
}

// ============================================================================
// Shape
// ============================================================================

#[test]
fn test_empty_group_has_empty_children() {
    let compiled = compile_paths(&["./pages/(external)/layout"], &CompileOptions::default());
    let group = &compiled.roots[0];
    assert_eq!(group.children, Some(Vec::new()));
    assert_eq!(group.loader_handle.as_deref(), Some("(external)/layout"));
}

#[test]
fn test_public_shape_serialization() {
    let compiled = compile_paths(
        &["./pages/add/layout", "./pages/add/index", "./pages/preview"],
        &CompileOptions::default(),
    );

    let value = serde_json::to_value(&compiled.roots).unwrap();
    assert_eq!(
        value,
        json!([
            {
                "path": "add",
                "children": [
                    {
                        "path": "",
                        "loaderHandle": "add/layout",
                        "children": [
                            { "path": "", "loaderHandle": "add/index" }
                        ]
                    }
                ]
            },
            { "path": "preview", "loaderHandle": "preview" }
        ])
    );
}

#[test]
fn test_serialize_round_trip_equals_recompile() {
    let options = CompileOptions::new().with_group_order(["main"]);
    let compiled = compile_paths(APP, &options);

    let text = serde_json::to_string(&compiled.roots).unwrap();
    assert!(!text.contains("fullPath"));
    assert!(!text.contains("isSync"));

    let reparsed: Vec<RouteNode<String>> = serde_json::from_str(&text).unwrap();
    assert_eq!(reparsed, compile_paths(APP, &options).roots);
}

#[test]
fn test_manifest_carries_metadata() {
    let compiled = compile_paths(&["./pages/(main)/profile.sync"], &CompileOptions::default());

    let value = serde_json::to_value(compiled.roots[0].manifest()).unwrap();
    assert_eq!(
        value,
        json!({
            "path": "",
            "fullPath": "",
            "sourcePath": "./pages/(main)",
            "kind": "group",
            "isSync": true,
            "children": [
                {
                    "path": "profile",
                    "fullPath": "/profile",
                    "sourcePath": "./pages/(main)/profile.sync",
                    "kind": "leaf",
                    "isSync": true,
                    "loaderHandle": "(main)/profile.sync"
                }
            ]
        })
    );
}

// ============================================================================
// Errors and diagnostics
// ============================================================================

#[test]
fn test_parse_error_aborts_compile() {
    let result = compile(pages(&["./pages/about", "./pages/([id])/index"]), &CompileOptions::default());
    match result {
        Err(CompileError::Parse(ParseError::UnsupportedSegment { segment, .. })) => {
            assert_eq!(segment, "([id])");
        }
        other => panic!("expected unsupported segment, got {:?}", other.map(|c| c.roots.len())),
    }
}

#[test]
fn test_empty_path_is_rejected() {
    let result = compile(vec![("", 0u8)], &CompileOptions::default());
    assert!(matches!(result, Err(CompileError::Parse(ParseError::Empty))));
}

#[test]
fn test_role_collision_prefers_sync_and_is_reported() {
    let compiled = compile_paths(
        &["./pages/settings/layout.sync", "./pages/settings/layout", "./pages/settings/index"],
        &CompileOptions::default(),
    );

    assert_eq!(compiled.collisions.len(), 1);
    let collision = &compiled.collisions[0];
    assert_eq!(collision.role, SpecialRole::Layout);
    assert_eq!(collision.kept, "./pages/settings/layout.sync");
    assert_eq!(collision.discarded, "./pages/settings/layout");

    let layout = &compiled.roots[0].child_nodes()[0];
    assert_eq!(layout.loader_handle.as_deref(), Some("settings/layout.sync"));
    assert_eq!(layout.meta().is_sync(), Some(true));
}

#[test]
fn test_custom_virtual_root() {
    let options = CompileOptions::new().with_virtual_root("/src/routes");
    let compiled = compile(
        vec![("/src/routes/blog/[slug].tsx", 1), ("/src/routes/index.tsx", 2)],
        &options,
    )
    .unwrap();

    assert_eq!(names(&compiled.roots), vec!["", "blog"]);
    assert_eq!(compiled.roots[0].meta().full_path(), "/");
    let slug = &compiled.roots[1].child_nodes()[0];
    assert_eq!(slug.path, ":slug");
    assert_eq!(slug.meta().full_path(), "/blog/:slug");
    assert_eq!(compiled.roots[1].meta().source_path(), "/src/routes/blog");
}
