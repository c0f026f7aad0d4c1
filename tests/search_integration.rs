//! Integration tests for refscout.
//!
//! Wires the search engine to in-memory host collaborators: a module
//! registry playing the role of process type enumeration, a script registry
//! standing in for the project's compiled script assets, and template/scene
//! stores backing the two graph universes.
#![allow(clippy::unwrap_used, clippy::panic, clippy::too_many_lines)]

use std::cell::RefCell;
use std::rc::Rc;

use refscout::{
    AssetLocator, CompiledClass, Component, ComponentSearchEngine, EngineTypeSource, Error,
    FinderConfig, GraphUniverse, LiveNode, ModuleRegistry, ObjectGraphSource, ProjectScriptSource,
    SceneIndex, ScriptHandle, ScriptRegistry, TemplateNode, TemplateStore, TypeCatalogBuilder,
    TypeId, TypeIndex,
};

/// Process type enumeration: two modules, one engine and one not.
struct Modules;

impl ModuleRegistry for Modules {
    fn loaded_modules(&self) -> Vec<String> {
        vec!["engine_core".to_string(), "third_party".to_string()]
    }

    fn module_types(&self, module: &str) -> Vec<TypeId> {
        match module {
            "engine_core" => vec![
                TypeId::new("engine::Transform"),
                TypeId::new("engine::physics::Rigidbody"),
                TypeId::new("engine::ui::Button"),
            ],
            _ => vec![TypeId::new("vendor::Tween")],
        }
    }
}

/// Project scripts, mutable so tests can compile new classes mid-session.
#[derive(Clone)]
struct Scripts {
    inner: Rc<RefCell<Vec<(ScriptHandle, Option<CompiledClass>)>>>,
}

impl Scripts {
    fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(vec![
                (
                    ScriptHandle::new("Assets/PlayerController.script"),
                    compiled("scripts::PlayerController"),
                ),
                (
                    ScriptHandle::new("Assets/Button.script"),
                    compiled("scripts::Button"),
                ),
                // A non-class script: enumerated but never resolves.
                (ScriptHandle::new("Assets/notes.script"), None),
                // Authored but not compiled yet; tests flip these live.
                (ScriptHandle::new("Assets/BossPhaseDriver.script"), None),
                (ScriptHandle::new("Assets/WaveSpawner.script"), None),
            ])),
        }
    }

    /// Marks an already-enumerated script as compiled. The script list
    /// itself is memoized inside the catalog source, so tests exercise the
    /// case the rescan is built for: a known asset whose class appears
    /// between builds.
    fn compile_script(&self, handle: &str, qualified: &str) {
        let mut scripts = self.inner.borrow_mut();
        let entry = scripts
            .iter_mut()
            .find(|(h, _)| h.as_str() == handle)
            .unwrap();
        entry.1 = compiled(qualified);
    }
}

fn compiled(qualified: &str) -> Option<CompiledClass> {
    Some(CompiledClass {
        type_id: TypeId::new(qualified),
        module: "scripts".to_string(),
    })
}

impl ScriptRegistry for Scripts {
    fn all_scripts(&self) -> Vec<ScriptHandle> {
        self.inner.borrow().iter().map(|(h, _)| h.clone()).collect()
    }

    fn compiled_class(&self, handle: &ScriptHandle) -> Option<CompiledClass> {
        self.inner
            .borrow()
            .iter()
            .find(|(h, _)| h == handle)
            .and_then(|(_, class)| class.clone())
    }
}

struct Templates(Vec<TemplateNode>);

impl TemplateStore for Templates {
    fn find_template_assets(&self) -> Vec<AssetLocator> {
        (0..self.0.len())
            .map(|i| AssetLocator::new(format!("templates/{i}")))
            .collect()
    }

    fn load_template(&self, locator: &AssetLocator) -> refscout::Result<TemplateNode> {
        let idx: usize = locator
            .as_str()
            .trim_start_matches("templates/")
            .parse()
            .map_err(|_| Error::TemplateLoad {
                locator: locator.to_string(),
                cause: "bad locator".to_string(),
            })?;
        Ok(self.0[idx].clone())
    }
}

struct Scenes(Vec<Vec<LiveNode>>);

impl SceneIndex for Scenes {
    fn loaded_scene_count(&self) -> usize {
        self.0.len()
    }

    fn scene_roots(&self, index: usize) -> Vec<LiveNode> {
        self.0.get(index).cloned().unwrap_or_default()
    }
}

fn rigidbody() -> Component {
    Component::new(TypeId::new("engine::physics::Rigidbody"))
}

fn build_engine(
    scripts: &Scripts,
    templates: Vec<TemplateNode>,
    scenes: Vec<Vec<LiveNode>>,
) -> ComponentSearchEngine {
    let config = FinderConfig::default();
    let builder = TypeCatalogBuilder::new(vec![
        Box::new(EngineTypeSource::new(
            Box::new(Modules),
            config.engine_namespaces.clone(),
        )),
        Box::new(ProjectScriptSource::new(
            Box::new(scripts.clone()),
            config.project_module.clone(),
        )),
    ]);
    let graphs = ObjectGraphSource::new(Box::new(Templates(templates)), Box::new(Scenes(scenes)));
    ComponentSearchEngine::new(&config, TypeIndex::new(builder), graphs)
}

#[test]
fn search_finds_matches_in_both_universes_templates_first() {
    let scripts = Scripts::new();
    let template = TemplateNode::new("Crate").with_component(rigidbody());
    let live = LiveNode::new("Barrel").with_component(rigidbody());
    let mut engine = build_engine(&scripts, vec![template], vec![vec![live]]);

    let matches = engine.search("Rigidbody").unwrap();
    assert_eq!(matches.len(), 2);
    assert_eq!(matches[0].universe, GraphUniverse::Template);
    assert_eq!(matches[0].node_name, "Crate");
    assert_eq!(matches[1].universe, GraphUniverse::Live);
    assert_eq!(matches[1].node_name, "Barrel");
}

#[test]
fn unresolvable_name_aborts_with_no_partial_results() {
    let scripts = Scripts::new();
    let template = TemplateNode::new("Crate").with_component(rigidbody());
    let mut engine = build_engine(&scripts, vec![template], vec![]);

    match engine.search("DoesNotExist") {
        Err(Error::TypeNotFound(name)) => assert_eq!(name, "DoesNotExist"),
        other => panic!("expected TypeNotFound, got {other:?}"),
    }
}

#[test]
fn zero_matches_is_distinguishable_from_not_found() {
    let scripts = Scripts::new();
    let mut engine = build_engine(&scripts, vec![TemplateNode::new("Empty")], vec![]);

    // Rigidbody resolves (it is in the engine catalog) but owns no nodes.
    let matches = engine.search("Rigidbody").unwrap();
    assert!(matches.is_empty());
}

#[test]
fn ambiguous_short_name_resolves_to_engine_candidate() {
    // Both engine::ui::Button and scripts::Button share the short name; the
    // engine source enumerates first, so its candidate wins every time.
    let scripts = Scripts::new();
    let live = LiveNode::new("Menu").with_component(Component::new(TypeId::new(
        "engine::ui::Button",
    )));
    let mut engine = build_engine(&scripts, vec![], vec![vec![live]]);

    let matches = engine.search("Button").unwrap();
    assert_eq!(matches.len(), 1);
    assert_eq!(
        matches[0].component_type,
        TypeId::new("engine::ui::Button")
    );

    let candidates = engine.index_mut().candidates("Button");
    assert_eq!(candidates.len(), 2);
    assert_eq!(candidates[0], TypeId::new("engine::ui::Button"));
    assert_eq!(candidates[1], TypeId::new("scripts::Button"));
}

#[test]
fn deep_template_descendant_yields_exactly_one_entry() {
    let scripts = Scripts::new();
    let template = TemplateNode::new("Root").with_child(
        TemplateNode::new("C1").with_child(TemplateNode::new("C2").with_component(rigidbody())),
    );
    let mut engine = build_engine(&scripts, vec![template], vec![]);

    let matches = engine.search("Rigidbody").unwrap();
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].path, "Root/C1/C2");
}

#[test]
fn two_matching_components_on_one_node_yield_two_entries() {
    let scripts = Scripts::new();
    let live = LiveNode::new("Wheel")
        .with_component(rigidbody())
        .with_component(rigidbody());
    let mut engine = build_engine(&scripts, vec![], vec![vec![live]]);

    let matches = engine.search("Rigidbody").unwrap();
    assert_eq!(matches.len(), 2);
    assert_eq!(matches[0].node_name, "Wheel");
    assert_eq!(matches[1].node_name, "Wheel");
}

#[test]
fn same_shape_in_both_universes_is_not_deduplicated() {
    // A template instantiated into a scene shows up twice: once per
    // universe. The core makes no attempt to correlate them.
    let scripts = Scripts::new();
    let template = TemplateNode::new("Enemy").with_component(rigidbody());
    let live = LiveNode::new("Enemy").with_component(rigidbody());
    let mut engine = build_engine(&scripts, vec![template], vec![vec![live]]);

    assert_eq!(engine.search("Rigidbody").unwrap().len(), 2);
}

#[test]
fn project_script_types_are_searchable() {
    let scripts = Scripts::new();
    let live = LiveNode::new("Player").with_component(Component::new(TypeId::new(
        "scripts::PlayerController",
    )));
    let mut engine = build_engine(&scripts, vec![], vec![vec![live]]);

    let matches = engine.search("PlayerController").unwrap();
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].universe, GraphUniverse::Live);
}

#[test]
fn script_compiled_after_first_build_is_found_via_rescan() {
    let scripts = Scripts::new();
    let live = LiveNode::new("Boss").with_component(Component::new(TypeId::new(
        "scripts::BossPhaseDriver",
    )));
    let mut engine = build_engine(&scripts, vec![], vec![vec![live]]);

    // Warm the index, then compile the script behind its back.
    assert!(engine.search("BossPhaseDriver").is_err());
    scripts.compile_script("Assets/BossPhaseDriver.script", "scripts::BossPhaseDriver");

    // The miss-triggered rescan rebuilds the catalog and finds it.
    let matches = engine.search("BossPhaseDriver").unwrap();
    assert_eq!(matches.len(), 1);
}

#[test]
fn reset_index_rebuilds_catalog_on_reopen() {
    let scripts = Scripts::new();
    let live = LiveNode::new("Spawner").with_component(Component::new(TypeId::new(
        "scripts::WaveSpawner",
    )));
    let mut engine = build_engine(&scripts, vec![], vec![vec![live]]);

    engine.index_mut().prime();
    scripts.compile_script("Assets/WaveSpawner.script", "scripts::WaveSpawner");

    // Reopening the tool resets the index; the next search sees the new
    // class without relying on the one-shot rescan.
    engine.reset_index();
    assert_eq!(engine.search("WaveSpawner").unwrap().len(), 1);
}

#[test]
fn blank_input_behaves_like_type_not_found() {
    let scripts = Scripts::new();
    let mut engine = build_engine(&scripts, vec![], vec![]);

    assert!(matches!(engine.search(""), Err(Error::TypeNotFound(_))));
    assert!(matches!(engine.search("   "), Err(Error::TypeNotFound(_))));
}

#[test]
fn repeated_resolution_is_stable_across_searches() {
    let scripts = Scripts::new();
    let live = LiveNode::new("Menu").with_component(Component::new(TypeId::new(
        "engine::ui::Button",
    )));
    let mut engine = build_engine(&scripts, vec![], vec![vec![live]]);

    let first = engine.search("Button").unwrap();
    let second = engine.search("Button").unwrap();
    assert_eq!(first, second);
}

#[test]
fn inactive_live_roots_are_included_by_default() {
    let scripts = Scripts::new();
    let hidden = LiveNode::new("Hidden")
        .inactive()
        .with_component(rigidbody());
    let mut engine = build_engine(&scripts, vec![], vec![vec![hidden]]);

    assert_eq!(engine.search("Rigidbody").unwrap().len(), 1);
}

#[test]
fn multiple_scenes_concatenate_in_load_order() {
    let scripts = Scripts::new();
    let scene_a = vec![LiveNode::new("A").with_component(rigidbody())];
    let scene_b = vec![LiveNode::new("B").with_component(rigidbody())];
    let mut engine = build_engine(&scripts, vec![], vec![scene_a, scene_b]);

    let matches = engine.search("Rigidbody").unwrap();
    let names: Vec<&str> = matches.iter().map(|m| m.node_name.as_str()).collect();
    assert_eq!(names, vec!["A", "B"]);
}
