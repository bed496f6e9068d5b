//! Semantic tones for status values.
//!
//! Classifiers here decide what a value *means* (healthy, broken, in
//! progress); mapping a tone onto terminal colors is left to the renderer.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Good,
    Bad,
    Pending,
    Warning,
    /// Rendered as-is
    Neutral,
}

/// Application status and unit workload status
pub fn workload_tone(status: &str) -> Tone {
    match status {
        "active" => Tone::Good,
        "error" | "blocked" => Tone::Bad,
        "waiting" => Tone::Neutral,
        "maintenance" => Tone::Pending,
        _ => Tone::Warning,
    }
}

pub fn unit_agent_tone(status: &str) -> Tone {
    match status {
        "idle" | "executing" => Tone::Good,
        "error" => Tone::Bad,
        _ => Tone::Warning,
    }
}

pub fn machine_agent_tone(status: &str) -> Tone {
    match status {
        "started" => Tone::Good,
        "error" | "down" => Tone::Bad,
        "pending" => Tone::Pending,
        _ => Tone::Warning,
    }
}

pub fn machine_status_tone(status: &str) -> Tone {
    if status == "running" {
        Tone::Good
    } else {
        Tone::Warning
    }
}

pub fn container_message_tone(message: &str) -> Tone {
    if message == "Container started" {
        Tone::Good
    } else {
        Tone::Warning
    }
}

/// 2.x agents are current, 1.x are old, anything else is unexpected
pub fn model_version_tone(version: &str) -> Tone {
    if version.starts_with('2') {
        Tone::Good
    } else if version.starts_with('1') {
        Tone::Warning
    } else {
        Tone::Bad
    }
}

pub fn model_status_tone(status: &str) -> Tone {
    if status == "available" {
        Tone::Good
    } else {
        Tone::Bad
    }
}

pub fn meter_tone(color: &str) -> Tone {
    match color {
        "green" => Tone::Good,
        "red" => Tone::Bad,
        "amber" => Tone::Pending,
        _ => Tone::Neutral,
    }
}

pub fn scale_tone(scale: usize) -> Tone {
    if scale == 0 { Tone::Bad } else { Tone::Neutral }
}

/// Revision in use against the latest known one (`-1` when unknown)
pub fn revision_tone(rev: i64, latest: i64) -> Tone {
    if latest < 0 {
        Tone::Neutral
    } else if rev == latest {
        Tone::Good
    } else if rev < latest {
        Tone::Warning
    } else {
        Tone::Neutral
    }
}

pub fn origin_tone(from_store: bool) -> Tone {
    if from_store {
        Tone::Neutral
    } else {
        Tone::Warning
    }
}

pub fn interface_tone(up: bool) -> Tone {
    if up { Tone::Good } else { Tone::Bad }
}
