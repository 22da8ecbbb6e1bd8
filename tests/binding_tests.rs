// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integration tests for binding typed schemas to a store.
//!
//! These tests load nested property records from a configuration file, edit
//! them, and write them back the way an application would.

mod common;

use bstkcfg::bind_field;
use bstkcfg::domain::key::{instance_prefix, DEFAULT_ROOT};
use bstkcfg::prelude::*;
use common::{init_tracing, write_conf, SAMPLE_CONF};
use tempfile::TempDir;

#[derive(Debug, Default, Clone, PartialEq)]
struct Display {
    name: String,
    fb_width: i32,
    fb_height: i32,
    dpi: i16,
}

#[derive(Debug, Default, Clone, PartialEq)]
struct Performance {
    max_fps: f32,
    enable_high_fps: bool,
    cpus: u8,
}

#[derive(Debug, Default, Clone, PartialEq)]
struct InstanceProps {
    display: Display,
    performance: Performance,
    ram: u32,
}

impl Schema for InstanceProps {
    fn fields() -> Vec<FieldBinding<Self>> {
        vec![
            bind_field!(InstanceProps, "display_name", text, display.name),
            bind_field!(InstanceProps, "fb_width", integer, display.fb_width),
            bind_field!(InstanceProps, "fb_height", integer, display.fb_height),
            bind_field!(InstanceProps, "dpi", integer, display.dpi),
            bind_field!(InstanceProps, "max_fps", real, performance.max_fps),
            bind_field!(InstanceProps, "enable_high_fps", boolean, performance.enable_high_fps),
            bind_field!(InstanceProps, "cpus", integer, performance.cpus),
            bind_field!(InstanceProps, "ram", integer, ram),
        ]
    }
}

#[derive(Debug, Default, PartialEq)]
struct GlobalProps {
    country: String,
    system_ram: i64,
    enable_adb_access: bool,
}

impl Schema for GlobalProps {
    fn fields() -> Vec<FieldBinding<Self>> {
        vec![
            bind_field!(GlobalProps, "country", text, country),
            bind_field!(GlobalProps, "system_ram", integer, system_ram),
            bind_field!(GlobalProps, "enable_adb_access", boolean, enable_adb_access),
        ]
    }
}

fn load_instances(store: &FlatStore) -> Vec<(String, InstanceProps)> {
    store
        .instance_names()
        .into_iter()
        .map(|name| {
            let mut props = InstanceProps {
                ram: 2048,
                ..InstanceProps::default()
            };
            props
                .load_scoped(store, &instance_prefix(DEFAULT_ROOT, &name))
                .unwrap();
            (name, props)
        })
        .collect()
}

#[test]
fn test_load_all_instances_from_file() {
    init_tracing();
    let dir = TempDir::new().unwrap();
    let path = write_conf(dir.path(), "bluestacks.conf", SAMPLE_CONF);

    let mut store = FlatStore::new();
    store.try_load_file(&path).unwrap();

    let mut globals = GlobalProps::default();
    globals.load_scoped(&store, DEFAULT_ROOT).unwrap();
    assert_eq!(globals.country, "US");
    assert_eq!(globals.system_ram, 16384);
    assert!(globals.enable_adb_access);

    let instances = load_instances(&store);
    assert_eq!(instances.len(), 2);

    let (name, pie) = &instances[0];
    assert_eq!(name, "Pie64");
    assert_eq!(pie.display.name, "BlueStacks App Player");
    assert_eq!(pie.display.dpi, 240);
    assert_eq!(pie.ram, 2048);

    let (name, rvc) = &instances[1];
    assert_eq!(name, "Rvc64");
    assert_eq!((rvc.display.fb_width, rvc.display.fb_height), (1920, 1080));
    assert_eq!(rvc.performance.max_fps, 59.5);
    assert!(rvc.display.name.is_empty());
}

#[test]
fn test_edit_and_save_instance() {
    init_tracing();
    let dir = TempDir::new().unwrap();
    let path = write_conf(dir.path(), "bluestacks.conf", SAMPLE_CONF);

    let mut store = FlatStore::new();
    assert!(store.load_file(&path));

    let prefix = instance_prefix(DEFAULT_ROOT, "Pie64");
    let mut pie = InstanceProps::default();
    pie.load_scoped(&store, &prefix).unwrap();
    pie.performance.enable_high_fps = true;
    pie.performance.cpus = 4;
    pie.save_scoped(&mut store, &prefix);
    assert!(store.save_file(&path));

    let mut reloaded = FlatStore::new();
    assert!(reloaded.load_file(&path));
    assert_eq!(
        reloaded.get("bst.instance.Pie64.enable_high_fps"),
        Some(&Value::Boolean(true))
    );
    assert_eq!(reloaded.get("bst.instance.Pie64.cpus"), Some(&Value::Integer(4)));
    // every bound field is written, including ones absent before the save
    assert!(reloaded.has("bst.instance.Pie64.max_fps"));

    let mut copy = InstanceProps::default();
    copy.load_scoped(&reloaded, &prefix).unwrap();
    assert_eq!(copy, pie);

    // other instances are untouched
    assert!(!reloaded.has("bst.instance.Rvc64.cpus"));
}

#[test]
fn test_new_instance_from_template() {
    let mut store = FlatStore::parse(SAMPLE_CONF);
    let mut template = InstanceProps::default();
    template
        .load_scoped(&store, &instance_prefix(DEFAULT_ROOT, "Rvc64"))
        .unwrap();

    template.display.name = "Clone of Rvc64".to_string();
    template.save_scoped(&mut store, &instance_prefix(DEFAULT_ROOT, "Rvc64_1"));

    assert_eq!(store.instance_names(), vec!["Pie64", "Rvc64", "Rvc64_1"]);
    let clone = InstanceProps::from_store(&store.instance_config("Rvc64_1")).unwrap();
    assert_eq!(clone, template);
}

#[test]
fn test_load_through_dyn_store() {
    let mut store = FlatStore::parse("country=\"DE\"\nsystem_ram=\"4096\"");
    let fields = GlobalProps::fields();
    let mut globals = GlobalProps::default();

    let dyn_store: &mut dyn ValueStore = &mut store;
    let loaded = load_fields(&*dyn_store, &fields, &mut globals).unwrap();
    assert_eq!(loaded, 2);
    assert_eq!(globals.country, "DE");
    assert_eq!(globals.system_ram, 4096);

    globals.enable_adb_access = true;
    save_fields(dyn_store, &fields, &globals);
    assert_eq!(store.get("enable_adb_access"), Some(&Value::Boolean(true)));
}

#[test]
fn test_bad_real_stops_loading() {
    let store = FlatStore::parse(
        "bst.instance.X.fb_width=\"800\"\nbst.instance.X.max_fps=\"sixty\"\nbst.instance.X.ram=\"1024\"",
    );
    let mut props = InstanceProps::default();
    let err = props
        .load_scoped(&store, "bst.instance.X")
        .unwrap_err();

    // the reported key names the instance, not just the field
    assert!(err.to_string().contains("'bst.instance.X.max_fps'"));
    // fields ahead of the failing one were already applied
    assert_eq!(props.display.fb_width, 800);
    assert_eq!(props.ram, 0);
}

#[test]
fn test_field_table_metadata() {
    let fields = InstanceProps::fields();
    let reals: Vec<&str> = fields
        .iter()
        .filter(|f| f.kind() == FieldKind::Real)
        .map(FieldBinding::key)
        .collect();
    assert_eq!(reals, vec!["max_fps"]);
}
