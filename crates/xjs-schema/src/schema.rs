//! Raw status document, field for field.
//!
//! Every schema generation the viewer accepts is described here at once:
//! renamed keys are separate optional fields and the shape adapters in
//! [`crate::shapes`] decide which one applies.

use serde::de::{self, Deserializer, Visitor};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fmt;

/// A scalar read as text whatever its YAML type (`version: 2.5`, `"0":`)
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Scalar(pub String);

impl Scalar {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<Scalar> for String {
    fn from(value: Scalar) -> Self {
        value.0
    }
}

impl<'de> Deserialize<'de> for Scalar {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ScalarVisitor;

        impl<'de> Visitor<'de> for ScalarVisitor {
            type Value = Scalar;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a string, number or boolean")
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<Scalar, E> {
                Ok(Scalar(value.to_string()))
            }

            fn visit_string<E: de::Error>(self, value: String) -> Result<Scalar, E> {
                Ok(Scalar(value))
            }

            fn visit_i64<E: de::Error>(self, value: i64) -> Result<Scalar, E> {
                Ok(Scalar(value.to_string()))
            }

            fn visit_u64<E: de::Error>(self, value: u64) -> Result<Scalar, E> {
                Ok(Scalar(value.to_string()))
            }

            fn visit_f64<E: de::Error>(self, value: f64) -> Result<Scalar, E> {
                Ok(Scalar(value.to_string()))
            }

            fn visit_bool<E: de::Error>(self, value: bool) -> Result<Scalar, E> {
                Ok(Scalar(value.to_string()))
            }
        }

        deserializer.deserialize_any(ScalarVisitor)
    }
}

/// Top level of a status report
#[derive(Debug, Deserialize, Clone, Default)]
#[serde(rename_all = "kebab-case")]
pub struct StatusDocument {
    #[serde(default)]
    pub model: Option<RawModel>,
    /// 1.x name for the model
    #[serde(default)]
    pub environment: Option<String>,
    #[serde(default)]
    pub controller: Option<ControllerRef>,
    #[serde(default)]
    pub machines: BTreeMap<Scalar, RawMachine>,
    #[serde(default)]
    pub applications: Option<BTreeMap<String, RawApplication>>,
    /// 1.x name for applications
    #[serde(default)]
    pub services: Option<BTreeMap<String, RawApplication>>,
}

/// `controller:` is either a bare name or a mapping
#[derive(Debug, Deserialize, Clone)]
#[serde(untagged)]
pub enum ControllerRef {
    Name(String),
    Info(RawController),
}

impl ControllerRef {
    pub fn name(&self) -> Option<&str> {
        match self {
            ControllerRef::Name(name) => Some(name),
            ControllerRef::Info(info) => info.name.as_deref(),
        }
    }

    pub fn timestamp(&self) -> Option<&str> {
        match self {
            ControllerRef::Name(_) => None,
            ControllerRef::Info(info) => info.timestamp.as_deref(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct RawController {
    #[serde(default)]
    pub name: Option<String>,
    /// Time of day only, e.g. `"10:15:00Z"`
    #[serde(default)]
    pub timestamp: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "kebab-case")]
pub struct RawModel {
    pub name: String,
    #[serde(rename = "type", default)]
    pub model_type: Option<String>,
    #[serde(default)]
    pub controller: Option<ControllerRef>,
    #[serde(default)]
    pub cloud: Option<String>,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub version: Option<Scalar>,
    #[serde(default)]
    pub model_status: Option<RawStatus>,
    #[serde(default)]
    pub meter_status: Option<RawMeterStatus>,
    #[serde(default)]
    pub sla: Option<String>,
}

/// Nested status block shared by every entity
#[derive(Debug, Deserialize, Clone)]
pub struct RawStatus {
    pub current: String,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub since: Option<String>,
    #[serde(default)]
    pub version: Option<Scalar>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct RawMeterStatus {
    pub color: String,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "kebab-case")]
pub struct RawMachine {
    #[serde(default)]
    pub juju_status: Option<RawStatus>,
    #[serde(default)]
    pub agent_status: Option<RawStatus>,
    #[serde(default)]
    pub agent_state: Option<String>,
    #[serde(default)]
    pub agent_state_info: Option<String>,
    #[serde(default)]
    pub agent_version: Option<Scalar>,
    #[serde(default)]
    pub dns_name: Option<String>,
    #[serde(default)]
    pub ip_addresses: Vec<String>,
    pub instance_id: Scalar,
    #[serde(default)]
    pub machine_status: Option<RawStatus>,
    /// 1.x flat machine status
    #[serde(default)]
    pub instance_state: Option<String>,
    #[serde(default)]
    pub series: Option<String>,
    #[serde(default)]
    pub constraints: Option<String>,
    #[serde(default)]
    pub hardware: Option<String>,
    #[serde(default)]
    pub network_interfaces: BTreeMap<String, RawInterface>,
    #[serde(default)]
    pub containers: BTreeMap<Scalar, RawMachine>,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "kebab-case")]
pub struct RawInterface {
    #[serde(default)]
    pub ip_addresses: Vec<String>,
    pub mac_address: String,
    #[serde(default)]
    pub gateway: Option<String>,
    #[serde(default)]
    pub space: Option<String>,
    pub is_up: bool,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "kebab-case")]
pub struct RawApplication {
    pub charm: String,
    #[serde(default)]
    pub series: Option<String>,
    #[serde(default)]
    pub os: Option<String>,
    #[serde(default)]
    pub version: Option<Scalar>,
    #[serde(default)]
    pub charm_origin: Option<String>,
    #[serde(default)]
    pub charm_name: Option<String>,
    #[serde(default)]
    pub charm_rev: Option<i64>,
    #[serde(default)]
    pub can_upgrade_to: Option<String>,
    pub exposed: bool,
    #[serde(default)]
    pub application_status: Option<RawStatus>,
    /// 1.x name for application-status
    #[serde(default)]
    pub service_status: Option<RawStatus>,
    #[serde(default)]
    pub relations: BTreeMap<String, Vec<RawRelationPeer>>,
    #[serde(default)]
    pub endpoint_bindings: BTreeMap<String, Option<String>>,
    #[serde(default)]
    pub units: BTreeMap<String, RawUnit>,
}

/// Relation partner: a bare application name, or the detailed form newer
/// agents write
#[derive(Debug, Deserialize, Clone)]
#[serde(untagged)]
pub enum RawRelationPeer {
    Name(String),
    Detailed {
        #[serde(rename = "related-application")]
        related_application: String,
    },
}

impl RawRelationPeer {
    pub fn application(&self) -> &str {
        match self {
            RawRelationPeer::Name(name) => name,
            RawRelationPeer::Detailed {
                related_application,
            } => related_application,
        }
    }
}

/// Principal and subordinate units share one layout
#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "kebab-case")]
pub struct RawUnit {
    #[serde(default)]
    pub workload_status: Option<RawStatus>,
    #[serde(default)]
    pub juju_status: Option<RawStatus>,
    #[serde(default)]
    pub agent_status: Option<RawStatus>,
    #[serde(default)]
    pub agent_state: Option<String>,
    #[serde(default)]
    pub agent_state_info: Option<String>,
    #[serde(default)]
    pub agent_version: Option<Scalar>,
    #[serde(default)]
    pub machine: Option<Scalar>,
    #[serde(default)]
    pub public_address: Option<String>,
    #[serde(default)]
    pub open_ports: Vec<Scalar>,
    #[serde(default)]
    pub leader: bool,
    #[serde(default)]
    pub upgrading_from: Option<String>,
    #[serde(default)]
    pub subordinates: BTreeMap<String, RawUnit>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_accepts_numbers() {
        let raw: BTreeMap<Scalar, Scalar> = serde_yaml::from_str("0: 2.5\n1: true\n").unwrap();
        let pairs: Vec<_> = raw
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        assert_eq!(pairs, [("0", "2.5"), ("1", "true")]);
    }

    #[test]
    fn test_controller_ref_shapes() {
        let bare: ControllerRef = serde_yaml::from_str("lxd-controller").unwrap();
        assert_eq!(bare.name(), Some("lxd-controller"));
        assert_eq!(bare.timestamp(), None);

        let mapping: ControllerRef = serde_yaml::from_str("timestamp: 10:15:00Z").unwrap();
        assert_eq!(mapping.name(), None);
        assert_eq!(mapping.timestamp(), Some("10:15:00Z"));
    }

    #[test]
    fn test_relation_peer_shapes() {
        let yaml = "db:\n- wordpress\n- related-application: keystone\n  interface: mysql\n";
        let relations: BTreeMap<String, Vec<RawRelationPeer>> = serde_yaml::from_str(yaml).unwrap();
        let peers: Vec<_> = relations["db"].iter().map(|p| p.application()).collect();
        assert_eq!(peers, ["wordpress", "keystone"]);
    }

    #[test]
    fn test_missing_required_field_is_rejected() {
        let yaml = "charm: cs:mysql-58\n";
        let err = serde_yaml::from_str::<RawApplication>(yaml).unwrap_err();
        assert!(err.to_string().contains("exposed"));
    }
}
