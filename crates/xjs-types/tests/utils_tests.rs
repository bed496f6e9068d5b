use xjs_types::*;

#[test]
fn test_utc_designator_and_zero_offset_agree() {
    let z = parse_since("25 Feb 2019 17:01:22Z").unwrap();
    let offset = parse_since("25 Feb 2019 17:01:22+0000").unwrap();
    assert_eq!(z, offset);
}

#[test]
fn test_format_instant_round_trips_display_layout() {
    let instant = parse_since("07 Mar 2019 09:05:00+0100").unwrap();
    assert_eq!(format_instant(&instant), "07 Mar 2019 08:05:00Z");
}

#[test]
fn test_machine_ids_sort_naturally() {
    let mut ids = vec!["10", "2", "0/lxd/10", "0", "0/lxd/2"];
    ids.sort_by(|a, b| natural_cmp(a, b));
    assert_eq!(ids, ["0", "0/lxd/2", "0/lxd/10", "2", "10"]);
}

#[test]
fn test_placement_serializes_tagged() {
    let placement = Placement::Container("0/lxd/2".to_string());
    let json = serde_json::to_value(&placement).unwrap();
    assert_eq!(
        json,
        serde_json::json!({ "kind": "container", "name": "0/lxd/2" })
    );
}

#[test]
fn test_unit_serializes_flat_core() {
    let core = UnitCore::new("mysql/0", StatusInfo::new("active"), StatusInfo::new("idle"));
    let unit = Unit::new(core, "mysql");
    let json = serde_json::to_value(&unit).unwrap();

    assert_eq!(json["name"], "mysql/0");
    assert_eq!(json["application"], "mysql");
    assert_eq!(json["public_address"], PENDING);
    assert!(json["placement"].is_null());
}

#[test]
fn test_tone_serializes_lowercase() {
    let json = serde_json::to_string(&Tone::Pending).unwrap();
    assert_eq!(json, "\"pending\"");
}
