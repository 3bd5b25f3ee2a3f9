use docent_graph::{NodeId, Project, ReflectionKind};
use docent_nav::build_toc;

/// A module under the project root with `functions` plain children.
fn module_with_functions(functions: usize) -> (Project, NodeId, Vec<NodeId>) {
    let mut project = Project::new("demo");
    let root = project.root();
    let module = project
        .add_child(root, "/src/lib.ts", ReflectionKind::Module)
        .unwrap();
    let children = (0..functions)
        .map(|index| {
            project
                .add_child(module, format!("fn{index}"), ReflectionKind::Function)
                .unwrap()
        })
        .collect();
    (project, module, children)
}

#[test]
fn small_container_lists_every_non_module_child() {
    let (project, module, children) = module_with_functions(5);

    let toc = build_toc(&project, module).unwrap();

    assert_eq!(toc.children.len(), 5);
    for (item, id) in toc.children.iter().zip(&children) {
        assert_eq!(item.target, Some(*id));
        assert!(!item.is_in_path);
        assert!(!item.is_current);
        assert!(item.children.is_empty());
    }
}

#[test]
fn module_kind_children_are_skipped() {
    let (mut project, module, _children) = module_with_functions(2);
    project
        .add_child(module, "inner", ReflectionKind::Namespace)
        .unwrap();

    let toc = build_toc(&project, module).unwrap();

    assert_eq!(toc.children.len(), 2);
    assert!(toc.children.iter().all(|item| item.title.starts_with("fn")));
}

#[test]
fn child_page_marks_its_own_entry_current() {
    let (project, _module, children) = module_with_functions(3);
    let current = children[1];

    let toc = build_toc(&project, current).unwrap();

    assert_eq!(toc.children.len(), 3);
    for (index, item) in toc.children.iter().enumerate() {
        assert_eq!(item.is_in_path, index == 1);
        assert_eq!(item.is_current, index == 1);
    }
}

#[test]
fn nested_page_expands_only_trail_entries() {
    let mut project = Project::new("demo");
    let root = project.root();
    let module = project
        .add_child(root, "/src/lib.ts", ReflectionKind::Module)
        .unwrap();
    let class = project
        .add_child(module, "Widget", ReflectionKind::Class)
        .unwrap();
    let sibling = project
        .add_child(module, "Other", ReflectionKind::Class)
        .unwrap();
    let method = project
        .add_child(class, "render", ReflectionKind::Method)
        .unwrap();
    let other_method = project
        .add_child(class, "resize", ReflectionKind::Method)
        .unwrap();

    let toc = build_toc(&project, method).unwrap();

    assert_eq!(toc.children.len(), 2);

    let class_item = &toc.children[0];
    assert_eq!(class_item.target, Some(class));
    assert!(class_item.is_in_path);
    assert!(!class_item.is_current);

    // Only the trail entry was expanded.
    let sibling_item = &toc.children[1];
    assert_eq!(sibling_item.target, Some(sibling));
    assert!(sibling_item.children.is_empty());

    assert_eq!(class_item.children.len(), 2);
    let method_item = &class_item.children[0];
    assert_eq!(method_item.target, Some(method));
    assert!(method_item.is_in_path);
    assert!(method_item.is_current);

    let other_item = &class_item.children[1];
    assert_eq!(other_item.target, Some(other_method));
    assert!(!other_item.is_in_path);
}

#[test]
fn oversized_container_collapses_to_the_trail_branch() {
    let (project, _module, children) = module_with_functions(45);
    let current = children[7];

    let toc = build_toc(&project, current).unwrap();

    // Siblings are not materialized, only the branch to the current page.
    assert_eq!(toc.children.len(), 1);
    let item = &toc.children[0];
    assert_eq!(item.target, Some(current));
    assert!(item.is_in_path);
    assert!(!item.is_current);
}

#[test]
fn collapse_only_applies_above_the_threshold() {
    let (project, _module, children) = module_with_functions(40);
    let current = children[0];

    let toc = build_toc(&project, current).unwrap();

    // Exactly at the threshold the container is still fully listed.
    assert_eq!(toc.children.len(), 40);
    assert!(toc.children[0].is_current);
}

#[test]
fn re_exported_entries_appear_in_the_toc() {
    let mut project = Project::new("demo");
    let root = project.root();
    let index = project
        .add_child(root, "/src/index.ts", ReflectionKind::Module)
        .unwrap();
    let helpers = project
        .add_child(root, "/src/helpers.ts", ReflectionKind::Module)
        .unwrap();

    let own = project
        .add_child(index, "local", ReflectionKind::Function)
        .unwrap();
    let re_exported = project
        .add_child(helpers, "helper", ReflectionKind::Function)
        .unwrap();
    project.node_mut(re_exported).unwrap().mark_exported();
    project
        .node_mut(index)
        .unwrap()
        .add_wildcard_import("/src/helpers.ts");

    let toc = build_toc(&project, index).unwrap();

    assert_eq!(toc.children.len(), 2);
    assert_eq!(toc.children[0].target, Some(own));
    assert_eq!(toc.children[1].target, Some(re_exported));
    assert_eq!(toc.children[1].title, "helper");
}

#[test]
fn serde_roundtrip_preserves_the_tree() {
    let (project, _module, children) = module_with_functions(3);
    let toc = build_toc(&project, children[2]).unwrap();

    let json = serde_json::to_string(&toc).unwrap();
    let restored: docent_nav::NavigationItem = serde_json::from_str(&json).unwrap();

    assert_eq!(restored, toc);
}
