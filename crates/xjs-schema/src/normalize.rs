//! Raw document fragments to canonical entities.
//!
//! Each function builds one entity from its raw fragment and the context it
//! needs (the controller for timestamp reconstruction, the model for machine
//! lookups). Wiring entities to each other is left to the caller.

use crate::charm::{CharmRef, latest_revision_from_upgrade};
use crate::hardware::parse_hardware;
use crate::schema::{RawApplication, RawInterface, RawMachine, RawUnit, StatusDocument};
use crate::shapes;
use crate::{Error, Result};
use tracing::debug;
use xjs_types::{
    Application, Container, Controller, Hardware, Machine, MachineCore, MeterStatus, Model,
    NOT_AVAILABLE, NetworkInterface, PENDING, SubordinateUnit, UNKNOWN_REVISION, Unit,
    UnitCore, parse_time_of_day,
};

/// Controller named after the model's controller (or the top-level one),
/// carrying the document's time of day when it has one.
pub fn controller_from(doc: &StatusDocument) -> Result<Controller> {
    let nested = doc.model.as_ref().and_then(|m| m.controller.as_ref());
    let top = doc.controller.as_ref();

    let name = nested
        .and_then(|c| c.name())
        .or_else(|| top.and_then(|c| c.name()))
        .unwrap_or(NOT_AVAILABLE);

    let time_of_day = match top
        .and_then(|c| c.timestamp())
        .or_else(|| nested.and_then(|c| c.timestamp()))
    {
        Some(value) => Some(parse_time_of_day(value)?),
        None => None,
    };

    Ok(Controller::new(name, time_of_day))
}

/// Model scalars; applications and machines are added by the caller
pub fn model_from(doc: &StatusDocument, controller: &mut Controller) -> Result<Model> {
    let Some(raw) = &doc.model else {
        return match &doc.environment {
            Some(environment) => {
                let mut model = Model::new(environment.clone());
                model.controller = controller.name.clone();
                Ok(model)
            }
            None => Err(Error::schema(
                "document",
                "status",
                "neither a model nor an environment",
            )),
        };
    };

    let mut model = Model::new(raw.name.clone());
    model.controller = controller.name.clone();
    model.model_type = raw.model_type.clone().unwrap_or_else(na);
    model.cloud = raw.cloud.clone().unwrap_or_else(na);
    model.region = raw.region.clone();
    model.version = raw
        .version
        .clone()
        .map(String::from)
        .unwrap_or_else(na);
    model.sla = raw.sla.clone().unwrap_or_else(na);

    if let Some(status) = &raw.model_status {
        model.status = shapes::status_from_block(status, controller)?;
    }
    model.meter = raw.meter_status.as_ref().map(|meter| MeterStatus {
        color: meter.color.clone(),
        message: meter.message.clone().unwrap_or_default(),
    });

    debug!(model = %model.name, "normalized model");
    Ok(model)
}

fn machine_core(name: &str, raw: &RawMachine, controller: &mut Controller) -> Result<MachineCore> {
    let (agent, agent_version) =
        shapes::agent_status("machine", name, &raw.agent_fields(), controller)?;

    let mut core = MachineCore::new(name, raw.instance_id.as_str());
    core.agent = agent;
    core.agent_version = agent_version;
    core.machine_status = shapes::machine_status(raw, controller)?;
    core.dns_name = raw.dns_name.clone().unwrap_or_default();
    core.ip_addresses = raw.ip_addresses.clone();
    core.series = raw.series.clone().unwrap_or_else(na);
    core.constraints = raw.constraints.clone().unwrap_or_default();
    core.hardware = match &raw.hardware {
        Some(value) => parse_hardware(name, value)?,
        None => Hardware::default(),
    };

    for (iface_name, iface) in &raw.network_interfaces {
        core.add_interface(interface_from(iface_name, name, iface));
    }

    Ok(core)
}

fn interface_from(name: &str, owner: &str, raw: &RawInterface) -> NetworkInterface {
    let mut iface = NetworkInterface::new(name, owner, raw.mac_address.clone());
    iface.ip_addresses = raw.ip_addresses.clone();
    iface.up = raw.is_up;
    iface.space = raw.space.clone();
    iface.gateway = raw.gateway.clone();
    iface
}

/// A machine and the containers it hosts
pub fn machine_from(
    name: &str,
    raw: &RawMachine,
    controller: &mut Controller,
) -> Result<(Machine, Vec<Container>)> {
    let mut machine = Machine::new(machine_core(name, raw, controller)?);
    let mut containers = Vec::with_capacity(raw.containers.len());

    for (container_name, raw_container) in &raw.containers {
        let container_name = container_name.as_str();
        let core = machine_core(container_name, raw_container, controller)?;
        machine.add_container(container_name);
        containers.push(Container::new(core, name));
    }

    debug!(machine = name, containers = containers.len(), "normalized machine");
    Ok((machine, containers))
}

/// Application without its units
pub fn application_from(
    name: &str,
    raw: &RawApplication,
    controller: &mut Controller,
) -> Result<Application> {
    let charm = CharmRef::parse(&raw.charm).ok_or_else(|| {
        Error::schema(
            "application",
            name,
            format!("malformed charm reference '{}'", raw.charm),
        )
    })?;

    let mut app = Application::new(name);
    app.charm = raw.charm.clone();
    app.series = raw
        .series
        .clone()
        .or_else(|| charm.series.clone())
        .unwrap_or_else(na);
    app.os = raw.os.clone().unwrap_or_else(na);
    app.version = raw
        .version
        .clone()
        .map(String::from)
        .unwrap_or_else(na);
    if let Some(origin) = raw.charm_origin.clone().or_else(|| charm.origin()) {
        app.charm_origin = origin;
    }
    app.charm_name = raw
        .charm_name
        .clone()
        .unwrap_or_else(|| charm.name.clone());
    app.charm_rev = raw.charm_rev.or(charm.revision).unwrap_or(0);
    app.charm_id = charm.store_id(&app.series);
    app.exposed = raw.exposed;
    app.status = shapes::application_status(name, raw, controller)?;

    app.charm_latest_rev = match &raw.can_upgrade_to {
        Some(value) => latest_revision_from_upgrade(value).unwrap_or_else(|| {
            debug!(application = name, value = %value, "can-upgrade-to has no revision");
            UNKNOWN_REVISION
        }),
        None => UNKNOWN_REVISION,
    };

    app.relations = raw
        .relations
        .iter()
        .map(|(endpoint, peers)| {
            let names: Vec<String> = peers.iter().map(|p| p.application().to_string()).collect();
            (endpoint.clone(), names)
        })
        .collect();
    app.endpoint_bindings = raw
        .endpoint_bindings
        .iter()
        .map(|(endpoint, space)| (endpoint.clone(), space.clone().unwrap_or_default()))
        .collect();

    if app.exposed {
        app.add_note("exposed");
    }
    if !app.is_from_store() {
        app.add_note("Not from Charm Store");
    }

    debug!(application = name, charm_id = %app.charm_id, "normalized application");
    Ok(app)
}

fn unit_core(name: &str, raw: &RawUnit, controller: &mut Controller) -> Result<UnitCore> {
    let workload = shapes::workload_status(name, raw, controller)?;
    let (agent, agent_version) = shapes::agent_status("unit", name, &raw.agent_fields(), controller)?;

    let mut core = UnitCore::new(name, workload, agent);
    core.agent_version = agent_version;
    core.public_address = raw
        .public_address
        .clone()
        .unwrap_or_else(|| PENDING.to_string());
    core.open_ports = raw.open_ports.iter().map(|p| p.as_str().to_string()).collect();
    core.leader = raw.leader;
    Ok(core)
}

/// Principal unit with its subordinates, placed on a machine or container
/// already registered on `model`.
pub fn unit_from(
    name: &str,
    raw: &RawUnit,
    application: &str,
    model: &Model,
    controller: &mut Controller,
) -> Result<Unit> {
    let mut unit = Unit::new(unit_core(name, raw, controller)?, application);

    if let Some(machine_id) = &raw.machine {
        let machine_id = machine_id.as_str();
        unit.placement = model.resolve_placement(machine_id);
        if unit.placement.is_none() {
            debug!(unit = name, machine = machine_id, "unit machine not registered");
        }
        unit.machine_id = Some(machine_id.to_string());
    }

    for (sub_name, raw_sub) in &raw.subordinates {
        unit.add_subordinate(subordinate_from(sub_name, raw_sub, name, controller)?);
    }

    Ok(unit)
}

pub fn subordinate_from(
    name: &str,
    raw: &RawUnit,
    principal: &str,
    controller: &mut Controller,
) -> Result<SubordinateUnit> {
    let mut sub = SubordinateUnit::new(unit_core(name, raw, controller)?, principal);
    sub.upgrading_from = raw.upgrading_from.clone();
    Ok(sub)
}

fn na() -> String {
    NOT_AVAILABLE.to_string()
}
