//! Intake form controller.
//!
//! Owns the draft [`ClinicalIntakeRecord`] and exposes the mutations the
//! form can perform on it. Nothing here validates input: a non-numeric age
//! or an empty history is accepted and only shows up in the generated note.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::intake::{
    ClinicalFlag, ClinicalIntakeRecord, Gender, JointPattern, OnsetSpeed, OutputLanguage,
};

/// A single scalar field assignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "field", content = "value", rename_all = "camelCase")]
#[ts(export)]
pub enum FieldUpdate {
    Age(String),
    Gender(Gender),
    JointPattern(JointPattern),
    OnsetSpeed(OnsetSpeed),
    CustomSigns(String),
    Medications(String),
    Comorbidities(String),
    Labs(String),
    OutputLanguage(OutputLanguage),
}

#[derive(Debug, Clone, Default)]
pub struct IntakeForm {
    record: ClinicalIntakeRecord,
}

impl IntakeForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self) -> &ClinicalIntakeRecord {
        &self.record
    }

    pub fn update(&mut self, update: FieldUpdate) {
        let record = &mut self.record;
        match update {
            FieldUpdate::Age(v) => record.age = v,
            FieldUpdate::Gender(v) => record.gender = v,
            FieldUpdate::JointPattern(v) => record.joint_pattern = v,
            FieldUpdate::OnsetSpeed(v) => record.onset_speed = v,
            FieldUpdate::CustomSigns(v) => record.custom_signs = v,
            FieldUpdate::Medications(v) => record.medications = v,
            FieldUpdate::Comorbidities(v) => record.comorbidities = v,
            FieldUpdate::Labs(v) => record.labs = v,
            FieldUpdate::OutputLanguage(v) => record.output_language = v,
        }
    }

    /// Flip one clinical-sign flag and return its new value.
    pub fn toggle_flag(&mut self, flag: ClinicalFlag) -> bool {
        let value = self.record.signs.get_mut(flag);
        *value = !*value;
        *value
    }

    /// Add `joint` if absent, remove it if present. Returns whether the joint
    /// is selected afterwards.
    pub fn toggle_joint(&mut self, joint: &str) -> bool {
        let joints = &mut self.record.affected_joints;
        if let Some(pos) = joints.iter().position(|j| j == joint) {
            joints.remove(pos);
            false
        } else {
            joints.push(joint.to_string());
            true
        }
    }

    /// Append a medication suggestion to the free-text field.
    ///
    /// Plain text concatenation: appending the same suggestion twice lists
    /// it twice.
    pub fn append_medication(&mut self, suggestion: &str) {
        let meds = &mut self.record.medications;
        if meds.is_empty() {
            *meds = suggestion.to_string();
        } else {
            meds.push_str(", ");
            meds.push_str(suggestion);
        }
    }

    /// Snapshot of the record as entered, with no trimming or normalization.
    /// The form keeps its values so the clinician can resubmit.
    pub fn submit(&self) -> ClinicalIntakeRecord {
        self.record.clone()
    }

    pub fn reset(&mut self) {
        self.record = ClinicalIntakeRecord::default();
    }
}
