//! Static lookup tables for the intake form.
//!
//! Pure configuration data: the front end renders these as chips and option
//! buttons. No logic in this crate depends on the values.

use serde::Serialize;
use ts_rs::TS;

use crate::models::intake::{ClinicalFlag, JointPattern, OnsetSpeed, SignGroup};

pub const JOINTS: &[&str] = &[
    "Knee (Right)",
    "Knee (Left)",
    "Ankle (Right)",
    "Ankle (Left)",
    "MTP 1 (Right)",
    "MTP 1 (Left)",
    "Hip (Right)",
    "Hip (Left)",
    "Wrist (Right)",
    "Wrist (Left)",
    "MCPs",
    "PIPs",
    "DIPs",
    "Elbow",
    "Shoulder",
    "Spine/SI",
];

pub const COMMON_MEDICATIONS: &[&str] = &[
    "Diuretics (Thiazide/Loop)",
    "Aspirin (Low dose)",
    "Immunosuppressants",
    "Antibiotics",
    "Urate lowering therapy",
];

#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
pub struct Catalog {
    pub joints: Vec<String>,
    pub medications: Vec<String>,
    pub patterns: Vec<OptionEntry<JointPattern>>,
    pub onsets: Vec<OptionEntry<OnsetSpeed>>,
    pub flags: Vec<FlagEntry>,
}

#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
pub struct OptionEntry<T> {
    pub value: T,
    pub label: String,
}

#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
pub struct FlagEntry {
    pub flag: ClinicalFlag,
    pub group: SignGroup,
    pub label: String,
}

pub fn catalog() -> Catalog {
    Catalog {
        joints: JOINTS.iter().map(|j| j.to_string()).collect(),
        medications: COMMON_MEDICATIONS.iter().map(|m| m.to_string()).collect(),
        patterns: JointPattern::ALL
            .iter()
            .map(|&p| OptionEntry {
                value: p,
                label: p.option_label().to_string(),
            })
            .collect(),
        onsets: OnsetSpeed::ALL
            .iter()
            .map(|&o| OptionEntry {
                value: o,
                label: o.option_label().to_string(),
            })
            .collect(),
        flags: ClinicalFlag::ALL
            .iter()
            .map(|&flag| FlagEntry {
                flag,
                group: flag.group(),
                label: flag.chip_label().to_string(),
            })
            .collect(),
    }
}
