use std::cell::Cell;
use std::path::{Path, PathBuf};
use xjs_engine::{
    Error, FilterOptions, Result, RevisionLookup, RevisionTable, annotate_revisions,
    apply_filters, build_controller, collect_charm_ids, filter_applications, load_controller,
};
use xjs_schema::{DocumentFormat, parse_document};
use xjs_types::{Controller, Model, Placement, format_instant};

fn sample(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("../xjs-schema/tests/samples")
        .join(name)
}

fn only_model(controller: &Controller) -> &Model {
    controller.models().next().expect("one model")
}

struct FixedLookup {
    table: RevisionTable,
    calls: Cell<usize>,
}

impl FixedLookup {
    fn new(entries: &[(&str, i64)]) -> Self {
        Self {
            table: entries.iter().map(|(k, v)| (k.to_string(), *v)).collect(),
            calls: Cell::new(0),
        }
    }
}

impl RevisionLookup for FixedLookup {
    fn latest_revisions(&self, _ids: &[String]) -> Result<RevisionTable> {
        self.calls.set(self.calls.get() + 1);
        Ok(self.table.clone())
    }
}

struct BrokenLookup;

impl RevisionLookup for BrokenLookup {
    fn latest_revisions(&self, _ids: &[String]) -> Result<RevisionTable> {
        Err(Error::Lookup("connection refused".to_string()))
    }
}

#[test]
fn test_2x_graph() {
    let controller = load_controller(&sample("status_2x.yaml")).unwrap();
    let model = only_model(&controller);

    assert_eq!(controller.name, "maas-controller");
    assert_eq!(
        format_instant(&controller.timestamp()),
        "20 Jan 2019 09:30:12Z"
    );
    assert_eq!(model.machines().count(), 3);
    assert_eq!(model.containers().count(), 2);
    assert_eq!(model.relations().count(), 5);

    let ntp = model.get_application("ntp").unwrap();
    assert_eq!(ntp.scale(), 0);
    let links: Vec<_> = ntp.subordinates().keys().map(String::as_str).collect();
    assert_eq!(links, ["ntp/0", "ntp/1"]);

    let keystone_unit = model
        .get_application("keystone")
        .and_then(|app| app.get_unit("keystone/0"))
        .unwrap();
    let sub = keystone_unit.subordinates().next().unwrap();
    assert_eq!(sub.application.as_deref(), Some("ntp"));
    assert_eq!(sub.core.notes(), ["Upgrading from cs:ntp-24"]);

    let custom = model.get_application("custom-app").unwrap();
    assert_eq!(custom.notes(), ["Not from Charm Store"]);
    assert_eq!(custom.charm_id, "");
    let db = model.get_relation("db", "custom-app", "remote-db").unwrap();
    assert!(db.partner.is_placeholder());
}

#[test]
fn test_1x_graph() {
    let controller = load_controller(&sample("status_1x.yaml")).unwrap();
    let model = only_model(&controller);

    assert_eq!(controller.name, "status_1x");
    assert!(!controller.timestamp_provided());
    assert_eq!(
        format_instant(&controller.timestamp()),
        "11 Feb 2016 07:00:00Z"
    );

    let wordpress = model.get_application("wordpress").unwrap();
    assert_eq!(wordpress.series, "trusty");
    assert_eq!(wordpress.charm_id, "cs:trusty/wordpress");
    assert_eq!(wordpress.charm_rev, 4);
    assert_eq!(wordpress.notes(), ["exposed"]);

    let mysql_unit = model
        .get_application("mysql")
        .and_then(|app| app.get_unit("mysql/0"))
        .unwrap();
    assert_eq!(
        mysql_unit.placement,
        Some(Placement::Container("1/lxc/0".to_string()))
    );
    assert_eq!(mysql_unit.core.workload.message, "waiting for machine");

    let machine = model.get_machine("0").unwrap();
    assert_eq!(machine.core.machine_status.current, "NA");
    assert_eq!(machine.core.agent_version, "1.25.6");
}

#[test]
fn test_json_graph() {
    let controller = load_controller(&sample("status.json")).unwrap();
    let model = only_model(&controller);

    assert_eq!(
        format_instant(&controller.timestamp()),
        "05 Jun 2023 12:45:00Z"
    );

    let postgresql = model.get_application("postgresql").unwrap();
    assert_eq!(postgresql.charm_origin, "charmhub");
    assert_eq!(postgresql.notes(), ["Not from Charm Store"]);

    let unit = postgresql.get_unit("postgresql/0").unwrap();
    assert_eq!(unit.placement, None);
    assert!(unit.core.leader);

    let relation = model.get_relation("database", "app", "postgresql").unwrap();
    assert!(relation.partner.is_placeholder());
}

#[test]
fn test_graph_serializes() {
    let controller = load_controller(&sample("status_2x.yaml")).unwrap();
    let json = serde_json::to_value(&controller).unwrap();

    assert_eq!(json["name"], "maas-controller");
    let mysql = &json["models"]["openstack"]["applications"]["mysql"];
    assert_eq!(mysql["charm_name"], "percona-cluster");
    assert_eq!(mysql["units"]["mysql/0"]["placement"]["kind"], "container");
}

#[test]
fn test_lookup_raises_latest_revision() {
    let mut controllers = vec![load_controller(&sample("status_2x.yaml")).unwrap()];
    let lookup = FixedLookup::new(&[
        ("cs:bionic/percona-cluster", 280),
        ("cs:bionic/keystone", 285),
    ]);

    annotate_revisions(&mut controllers, Some(&lookup));

    let model = only_model(&controllers[0]);
    assert_eq!(lookup.calls.get(), 1);
    assert_eq!(
        model.get_application("mysql").unwrap().notes(),
        ["Revision 280 Available"]
    );
    assert_eq!(
        model.get_application("keystone").unwrap().notes(),
        ["exposed", "Using Non-Stable Rev"]
    );
    assert!(model.get_application("ntp").unwrap().notes().is_empty());
}

#[test]
fn test_failed_lookup_keeps_document_revisions() {
    let mut controllers = vec![load_controller(&sample("status_2x.yaml")).unwrap()];

    annotate_revisions(&mut controllers, Some(&BrokenLookup));

    let mysql = only_model(&controllers[0]).get_application("mysql").unwrap();
    assert_eq!(mysql.charm_latest_rev, 276);
    assert_eq!(mysql.notes(), ["Revision 276 Available"]);
}

#[test]
fn test_collect_charm_ids_skips_local_charms() {
    let controllers = vec![load_controller(&sample("status_2x.yaml")).unwrap()];
    insta::assert_snapshot!(
        collect_charm_ids(&controllers).join(" "),
        @"cs:bionic/keystone cs:bionic/ntp cs:bionic/percona-cluster"
    );
}

const SHARED_HOST: &str = r#"
model:
  name: shared
machines:
  "0":
    juju-status:
      current: started
    instance-id: i-0
    containers:
      0/lxd/0:
        juju-status:
          current: started
        instance-id: c-0
      0/lxd/1:
        juju-status:
          current: started
        instance-id: c-1
  "1":
    juju-status:
      current: started
    instance-id: i-1
applications:
  mysql:
    charm: cs:mysql-58
    exposed: false
    application-status:
      current: active
    units:
      mysql/0:
        workload-status:
          current: active
        juju-status:
          current: idle
        machine: 0/lxd/0
        subordinates:
          filebeat/0:
            workload-status:
              current: active
            juju-status:
              current: idle
  wordpress:
    charm: cs:wordpress-5
    exposed: false
    application-status:
      current: active
    units:
      wordpress/0:
        workload-status:
          current: active
        juju-status:
          current: idle
        machine: 0/lxd/1
      wordpress/1:
        workload-status:
          current: active
        juju-status:
          current: idle
        machine: "1"
        subordinates:
          filebeat/1:
            workload-status:
              current: active
            juju-status:
              current: idle
  filebeat:
    charm: cs:filebeat-20
    exposed: false
    application-status:
      current: active
"#;

fn shared_host() -> Controller {
    let doc = parse_document(SHARED_HOST, DocumentFormat::Yaml).unwrap();
    build_controller(&doc, "shared").unwrap()
}

fn names<'a>(items: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    items.collect()
}

#[test]
fn test_filter_applications_prunes_machines_and_containers() {
    let mut controller = shared_host();
    let model = controller.models_mut().get_mut("shared").unwrap();

    filter_applications(model, "mysql");

    assert_eq!(names(model.applications().map(|a| a.name.as_str())), ["mysql"]);
    assert_eq!(names(model.machines().map(|m| m.name())), ["0"]);
    assert_eq!(names(model.containers().map(|c| c.name())), ["0/lxd/0"]);

    let host = model.get_machine("0").unwrap();
    assert!(host.has_container("0/lxd/0"));
    assert!(!host.has_container("0/lxd/1"));
}

#[test]
fn test_filter_subordinate_application_keeps_its_principals() {
    let mut controller = shared_host();
    let model = controller.models_mut().get_mut("shared").unwrap();

    filter_applications(model, "filebeat");

    assert_eq!(
        names(model.applications().map(|a| a.name.as_str())),
        ["filebeat", "mysql", "wordpress"]
    );
    assert_eq!(names(model.machines().map(|m| m.name())), ["0", "1"]);
    assert_eq!(
        names(model.containers().map(|c| c.name())),
        ["0/lxd/0", "0/lxd/1"]
    );
}

#[test]
fn test_filter_principal_does_not_pull_in_other_hosts() {
    let mut controller = shared_host();
    let model = controller.models_mut().get_mut("shared").unwrap();

    filter_applications(model, "wordpress");

    assert_eq!(names(model.applications().map(|a| a.name.as_str())), ["wordpress"]);
    assert_eq!(names(model.machines().map(|m| m.name())), ["0", "1"]);
    assert_eq!(names(model.containers().map(|c| c.name())), ["0/lxd/1"]);
    assert!(!model.get_machine("0").unwrap().has_container("0/lxd/0"));
}

#[test]
fn test_apply_filters_by_unit_and_model() {
    let mut controllers = vec![shared_host()];

    apply_filters(
        &mut controllers,
        &FilterOptions {
            unit: Some("/1".to_string()),
            ..Default::default()
        },
    );
    let wordpress = only_model(&controllers[0]).get_application("wordpress").unwrap();
    let units: Vec<_> = wordpress.units().map(|u| u.name()).collect();
    assert_eq!(units, ["wordpress/1"]);

    apply_filters(
        &mut controllers,
        &FilterOptions {
            model: Some("prod".to_string()),
            ..Default::default()
        },
    );
    assert_eq!(controllers[0].model_count(), 0);
}
