use crate::{Error, Result};
use xjs_types::Hardware;

/// Parse `"arch=amd64 cores=2 mem=4096M"` into attributes.
///
/// A token without `=` means the string is not a hardware description.
pub fn parse_hardware(machine: &str, value: &str) -> Result<Hardware> {
    let mut hardware = Hardware::default();

    for pair in value.split_whitespace() {
        let (key, val) = pair.split_once('=').ok_or_else(|| {
            Error::schema("machine", machine, format!("malformed hardware entry '{}'", pair))
        })?;
        hardware.insert(key, val);
    }

    Ok(hardware)
}
