//! Status-block schema variants.
//!
//! Each status kind has been written several ways over the tool's history.
//! The variant is detected once from which keys are present, then one
//! adapter turns it into a [`StatusInfo`]. Every parsed `since` is handed to
//! the controller's timestamp reconstruction on the way through.

use crate::schema::{RawApplication, RawMachine, RawStatus, RawUnit, Scalar};
use crate::{Error, Result};
use xjs_types::{Controller, NOT_AVAILABLE, StatusInfo, parse_since};

/// Agent fields as found on a unit or a machine
#[derive(Debug, Clone, Copy)]
pub struct AgentFields<'a> {
    pub juju_status: Option<&'a RawStatus>,
    pub agent_status: Option<&'a RawStatus>,
    pub agent_state: Option<&'a str>,
    pub agent_state_info: Option<&'a str>,
    pub agent_version: Option<&'a Scalar>,
}

impl RawUnit {
    pub fn agent_fields(&self) -> AgentFields<'_> {
        AgentFields {
            juju_status: self.juju_status.as_ref(),
            agent_status: self.agent_status.as_ref(),
            agent_state: self.agent_state.as_deref(),
            agent_state_info: self.agent_state_info.as_deref(),
            agent_version: self.agent_version.as_ref(),
        }
    }
}

impl RawMachine {
    pub fn agent_fields(&self) -> AgentFields<'_> {
        AgentFields {
            juju_status: self.juju_status.as_ref(),
            agent_status: self.agent_status.as_ref(),
            agent_state: self.agent_state.as_deref(),
            agent_state_info: self.agent_state_info.as_deref(),
            agent_version: self.agent_version.as_ref(),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub enum AgentShape<'a> {
    /// `juju-status: {current, message, since, version}`
    Juju(&'a RawStatus),
    /// `agent-status: {...}` written by early 2.0 agents
    Agent(&'a RawStatus),
    /// 1.x `agent-state` / `agent-state-info` / `agent-version`, no timestamp
    Flat {
        state: &'a str,
        info: Option<&'a str>,
    },
}

impl<'a> AgentShape<'a> {
    pub fn detect(fields: &AgentFields<'a>) -> Option<Self> {
        if let Some(block) = fields.juju_status {
            Some(AgentShape::Juju(block))
        } else if let Some(block) = fields.agent_status {
            Some(AgentShape::Agent(block))
        } else {
            fields.agent_state.map(|state| AgentShape::Flat {
                state,
                info: fields.agent_state_info,
            })
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub enum WorkloadShape<'a> {
    Block(&'a RawStatus),
    /// 1.x units report the workload through the agent state
    Legacy {
        state: &'a str,
        info: Option<&'a str>,
    },
}

impl<'a> WorkloadShape<'a> {
    pub fn detect(unit: &'a RawUnit) -> Option<Self> {
        if let Some(block) = &unit.workload_status {
            Some(WorkloadShape::Block(block))
        } else {
            unit.agent_state.as_deref().map(|state| WorkloadShape::Legacy {
                state,
                info: unit.agent_state_info.as_deref(),
            })
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub enum MachineStatusShape<'a> {
    Block(&'a RawStatus),
    /// 1.x `instance-state`
    Legacy(&'a str),
}

impl<'a> MachineStatusShape<'a> {
    pub fn detect(machine: &'a RawMachine) -> Option<Self> {
        if let Some(block) = &machine.machine_status {
            Some(MachineStatusShape::Block(block))
        } else {
            machine
                .instance_state
                .as_deref()
                .map(MachineStatusShape::Legacy)
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub enum ApplicationStatusShape<'a> {
    Application(&'a RawStatus),
    /// 1.x `service-status`
    Service(&'a RawStatus),
}

impl<'a> ApplicationStatusShape<'a> {
    pub fn detect(app: &'a RawApplication) -> Option<Self> {
        if let Some(block) = &app.application_status {
            Some(ApplicationStatusShape::Application(block))
        } else {
            app.service_status
                .as_ref()
                .map(ApplicationStatusShape::Service)
        }
    }
}

/// Canonical status from a nested block
pub fn status_from_block(block: &RawStatus, controller: &mut Controller) -> Result<StatusInfo> {
    let since = match &block.since {
        Some(value) => {
            let instant = parse_since(value)?;
            controller.update_timestamp(instant);
            Some(instant)
        }
        None => None,
    };

    Ok(StatusInfo::new(block.current.clone())
        .with_message(block.message.clone().unwrap_or_default())
        .with_since(since))
}

/// Agent status and agent version of a unit or machine
pub fn agent_status(
    entity: &'static str,
    name: &str,
    fields: &AgentFields<'_>,
    controller: &mut Controller,
) -> Result<(StatusInfo, String)> {
    let shape = AgentShape::detect(fields)
        .ok_or_else(|| Error::schema(entity, name, "no juju-status, agent-status or agent-state"))?;

    let flat_version = fields.agent_version.map(|v| v.as_str().to_string());

    match shape {
        AgentShape::Juju(block) | AgentShape::Agent(block) => {
            let status = status_from_block(block, controller)?;
            let version = block
                .version
                .as_ref()
                .map(|v| v.as_str().to_string())
                .or(flat_version)
                .unwrap_or_else(|| NOT_AVAILABLE.to_string());
            Ok((status, version))
        }
        AgentShape::Flat { state, info } => {
            let status = StatusInfo::new(state).with_message(info.unwrap_or_default());
            Ok((status, flat_version.unwrap_or_else(|| NOT_AVAILABLE.to_string())))
        }
    }
}

pub fn workload_status(
    name: &str,
    unit: &RawUnit,
    controller: &mut Controller,
) -> Result<StatusInfo> {
    match WorkloadShape::detect(unit) {
        Some(WorkloadShape::Block(block)) => status_from_block(block, controller),
        Some(WorkloadShape::Legacy { state, info }) => {
            Ok(StatusInfo::new(state).with_message(info.unwrap_or_default()))
        }
        None => Err(Error::schema("unit", name, "no workload-status or agent-state")),
    }
}

/// Machine status; a machine that reports none (pending 1.x containers) is `NA`
pub fn machine_status(machine: &RawMachine, controller: &mut Controller) -> Result<StatusInfo> {
    match MachineStatusShape::detect(machine) {
        Some(MachineStatusShape::Block(block)) => status_from_block(block, controller),
        Some(MachineStatusShape::Legacy(state)) => Ok(StatusInfo::new(state)),
        None => Ok(StatusInfo::default()),
    }
}

pub fn application_status(
    name: &str,
    app: &RawApplication,
    controller: &mut Controller,
) -> Result<StatusInfo> {
    match ApplicationStatusShape::detect(app) {
        Some(ApplicationStatusShape::Application(block))
        | Some(ApplicationStatusShape::Service(block)) => status_from_block(block, controller),
        None => Err(Error::schema(
            "application",
            name,
            "no application-status or service-status",
        )),
    }
}
