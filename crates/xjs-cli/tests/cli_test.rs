use predicates::prelude::*;
use xjs_testing::TestWorld;
use xjs_testing::fixtures::{STATUS_1X, STATUS_2X, STATUS_JSON};

#[test]
fn test_all_sections_by_default() {
    let world = TestWorld::new().with_sample(STATUS_2X);
    let result = world.run(&[STATUS_2X]).unwrap();

    assert!(result.success(), "stderr: {}", result.stderr());
    for header in [
        "Cloud/Region",
        "Scale",
        "Public address",
        "Inst id",
        "Interface",
        "Application A",
    ] {
        assert!(result.stdout().contains(header), "missing {}", header);
    }
    assert!(!result.stdout().contains('\u{1b}'));
}

#[test]
fn test_single_section_and_leader_marker() {
    let world = TestWorld::new().with_sample(STATUS_2X);
    let result = world.run(&["-u", STATUS_2X]).unwrap();

    assert!(result.success());
    assert!(result.stdout().contains("mysql/0*"));
    assert!(result.stdout().contains("  ntp/1"));
    assert!(!result.stdout().contains("Cloud/Region"));
}

#[test]
fn test_guessed_timestamp_warning() {
    let world = TestWorld::new().with_sample(STATUS_1X);
    let result = world.run(&["--model", STATUS_1X]).unwrap();

    assert!(result.success());
    assert!(
        result
            .stdout()
            .starts_with("WARNING: Guessing at the controller timestamp")
    );
    assert!(result.stdout().contains("11 Feb 2016 07:00:00Z"));
}

fn keys(value: &serde_json::Value) -> Vec<String> {
    value
        .as_object()
        .map(|map| map.keys().cloned().collect())
        .unwrap_or_default()
}

#[test]
fn test_filter_app_prunes_machines() {
    let world = TestWorld::new().with_sample(STATUS_2X);
    let result = world
        .run(&["--format", "json", "--filter-app", "keystone", STATUS_2X])
        .unwrap();

    assert!(result.success());
    let model = &result.json().unwrap()[0]["models"]["openstack"];
    assert_eq!(keys(&model["applications"]), ["keystone"]);
    assert_eq!(keys(&model["machines"]), ["1"]);
    assert_eq!(keys(&model["containers"]), ["1/lxd/0"]);
}

#[test]
fn test_filter_subordinate_app_keeps_principals() {
    let world = TestWorld::new().with_sample(STATUS_2X);
    let result = world
        .run(&["-u", "-m", "--filter-app", "ntp", STATUS_2X])
        .unwrap();

    assert!(result.success());
    let out = result.stdout();
    assert!(out.contains("keystone/0*"));
    assert!(out.contains("mysql/0*"));
    assert!(out.contains("  ntp/1"));
    assert!(out.contains("0/lxd/0"));
    assert!(out.contains("1/lxd/0"));
    assert!(!out.contains("Deploying"));
}

#[test]
fn test_json_output() {
    let world = TestWorld::new().with_sample(STATUS_JSON);
    let result = world.run(&["--format", "json", STATUS_JSON]).unwrap();

    assert!(result.success());
    let json = result.json().unwrap();
    assert_eq!(json[0]["name"], "micro");
    assert_eq!(
        json[0]["models"]["k8s"]["applications"]["postgresql"]["charm_origin"],
        "charmhub"
    );
}

#[test]
fn test_multiple_reports_get_prefix_columns() {
    let world = TestWorld::new()
        .with_sample(STATUS_2X)
        .with_sample_as(STATUS_JSON, "k8s.json");
    let result = world.run(&["-r", STATUS_2X, "-i", "k8s.json"]).unwrap();

    assert!(result.success());
    let header = result.stdout().lines().next().unwrap();
    assert!(header.contains("Controller"));
    assert!(header.contains("Model"));
    assert!(result.stdout().contains("maas-controller"));
    assert!(result.stdout().contains("micro"));
}

#[test]
fn test_color_always() {
    let world = TestWorld::new().with_sample(STATUS_2X);
    let result = world.run(&["-a", "--color", "always", STATUS_2X]).unwrap();

    assert!(result.success());
    assert!(result.stdout().contains("\u{1b}[32mactive"));
}

#[test]
fn test_config_file_hides_scale_zero() {
    let world = TestWorld::new()
        .with_sample(STATUS_2X)
        .with_file("xjs.toml", "hide_scale_zero = true\n");
    let result = world
        .run(&["-a", "--config", "xjs.toml", STATUS_2X])
        .unwrap();

    assert!(result.success());
    assert!(!result.stdout().contains("custom-app"));
    assert!(result.stdout().contains("keystone"));
}

#[test]
fn test_missing_file_fails() {
    let world = TestWorld::new();
    let result = world.run(&["absent.yaml"]).unwrap();

    assert_eq!(result.code(), Some(1));
    assert!(result.stderr().starts_with("Error:"));
}

#[test]
fn test_schema_violation_fails() {
    let world = TestWorld::new().with_file(
        "broken.yaml",
        "model:\n  name: m\napplications:\n  a:\n    charm: cs:a-1\n    exposed: false\n",
    );
    let result = world.run(&["broken.yaml"]).unwrap();

    assert_eq!(result.code(), Some(1));
    assert!(predicate::str::contains("no application-status").eval(result.stderr()));
}

#[test]
fn test_no_input_fails() {
    let world = TestWorld::new();
    let result = world.run(&[]).unwrap();

    assert!(!result.success());
    assert!(result.stderr().contains("no status report given"));
}

#[test]
fn test_unreachable_lookup_only_warns() {
    let world = TestWorld::new().with_sample(STATUS_2X).with_file(
        "xjs.toml",
        "[revision_lookup]\nendpoint = \"http://127.0.0.1:9/meta\"\ntimeout_secs = 1\n",
    );
    let result = world
        .run(&[
            "-a",
            "--lookup-revisions",
            "--config",
            "xjs.toml",
            STATUS_2X,
        ])
        .unwrap();

    assert!(result.success());
    assert!(result.stdout().contains("Revision 276 Available"));
    assert!(result.stderr().contains("charm revision lookup failed"));
}

#[test]
fn test_unit_on_absent_machine_is_pending() {
    let world = TestWorld::new().with_file(
        "orphan.yaml",
        r#"model:
  name: orphan
machines:
  "0":
    juju-status:
      current: started
    instance-id: i-0
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
        machine: "4"
"#,
    );
    let result = world.run(&["-u", "orphan.yaml"]).unwrap();

    assert!(result.success(), "stderr: {}", result.stderr());
    let cells: Vec<&str> = result
        .stdout()
        .lines()
        .find(|line| line.contains("mysql/0"))
        .unwrap()
        .split('|')
        .map(str::trim)
        .collect();
    let unit = cells.iter().position(|c| *c == "mysql/0").unwrap();
    assert_eq!(cells[unit + 3], "PENDING");
}
