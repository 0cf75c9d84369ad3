use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// The draft patient-finding record collected by the intake form.
///
/// Wire names are camelCase so the browser form and the record share one
/// shape. Free-text fields are never validated; whatever the clinician typed
/// is what reaches the prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ClinicalIntakeRecord {
    // Demographics
    pub age: String,
    pub gender: Gender,

    pub joint_pattern: JointPattern,
    pub onset_speed: OnsetSpeed,

    #[serde(flatten)]
    pub signs: ClinicalSigns,
    pub custom_signs: String,

    pub affected_joints: Vec<String>,
    pub medications: String,
    pub comorbidities: String,
    pub labs: String,

    pub output_language: OutputLanguage,
}

impl Default for ClinicalIntakeRecord {
    fn default() -> Self {
        Self {
            age: String::new(),
            gender: Gender::Male,
            joint_pattern: JointPattern::Mono,
            onset_speed: OnsetSpeed::Acute,
            signs: ClinicalSigns::default(),
            custom_signs: String::new(),
            affected_joints: Vec::new(),
            medications: String::new(),
            comorbidities: String::new(),
            labs: String::new(),
            output_language: OutputLanguage::Korean,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn label(self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum JointPattern {
    Mono,
    Oligo,
    Poly,
}

impl JointPattern {
    pub const ALL: [JointPattern; 3] = [Self::Mono, Self::Oligo, Self::Poly];

    /// Label used when the pattern is written into the model prompt.
    pub fn label(self) -> &'static str {
        match self {
            Self::Mono => "Monoarticular",
            Self::Oligo => "Oligoarticular (2-4)",
            Self::Poly => "Polyarticular (>4)",
        }
    }

    /// Label shown on the form's option buttons.
    pub fn option_label(self) -> &'static str {
        match self {
            Self::Mono => "Monoarticular (1 joint)",
            Self::Oligo => "Oligoarticular (2-4 joints)",
            Self::Poly => "Polyarticular (>4 joints)",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum OnsetSpeed {
    Acute,
    Chronic,
    Episodic,
}

impl OnsetSpeed {
    pub const ALL: [OnsetSpeed; 3] = [Self::Acute, Self::Chronic, Self::Episodic];

    pub fn label(self) -> &'static str {
        match self {
            Self::Acute => "Acute (<6 weeks)",
            Self::Chronic => "Chronic (>6 weeks)",
            Self::Episodic => "Episodic/Recurrent",
        }
    }

    pub fn option_label(self) -> &'static str {
        match self {
            Self::Acute => "Acute (<6 weeks)",
            Self::Chronic => "Chronic (>6 weeks)",
            Self::Episodic => "Episodic / Recurrent",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum OutputLanguage {
    English,
    Korean,
}

impl OutputLanguage {
    pub fn label(self) -> &'static str {
        match self {
            Self::English => "English",
            Self::Korean => "Korean",
        }
    }
}

/// Boolean clinical signs. Every flag defaults to `false`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ClinicalSigns {
    // Articular characteristics
    pub morning_stiffness: bool,
    pub better_with_activity: bool,
    pub worse_with_activity: bool,
    pub redness: bool,
    pub joint_edema: bool,
    pub limited_motion: bool,
    pub trauma_history: bool,

    // Systemic / extra-articular
    pub fever: bool,
    pub psoriasis: bool,
    pub malar_rash: bool,
    pub raynauds: bool,
    pub oral_ulcers: bool,
    pub genital_ulcers: bool,
    pub uveitis: bool,
    pub dry_eye_mouth: bool,
    pub diarrhea: bool,
    pub ild: bool,
}

impl ClinicalSigns {
    pub fn get(&self, flag: ClinicalFlag) -> bool {
        match flag {
            ClinicalFlag::MorningStiffness => self.morning_stiffness,
            ClinicalFlag::BetterWithActivity => self.better_with_activity,
            ClinicalFlag::WorseWithActivity => self.worse_with_activity,
            ClinicalFlag::Redness => self.redness,
            ClinicalFlag::JointEdema => self.joint_edema,
            ClinicalFlag::LimitedMotion => self.limited_motion,
            ClinicalFlag::TraumaHistory => self.trauma_history,
            ClinicalFlag::Fever => self.fever,
            ClinicalFlag::Psoriasis => self.psoriasis,
            ClinicalFlag::MalarRash => self.malar_rash,
            ClinicalFlag::Raynauds => self.raynauds,
            ClinicalFlag::OralUlcers => self.oral_ulcers,
            ClinicalFlag::GenitalUlcers => self.genital_ulcers,
            ClinicalFlag::Uveitis => self.uveitis,
            ClinicalFlag::DryEyeMouth => self.dry_eye_mouth,
            ClinicalFlag::Diarrhea => self.diarrhea,
            ClinicalFlag::Ild => self.ild,
        }
    }

    pub fn get_mut(&mut self, flag: ClinicalFlag) -> &mut bool {
        match flag {
            ClinicalFlag::MorningStiffness => &mut self.morning_stiffness,
            ClinicalFlag::BetterWithActivity => &mut self.better_with_activity,
            ClinicalFlag::WorseWithActivity => &mut self.worse_with_activity,
            ClinicalFlag::Redness => &mut self.redness,
            ClinicalFlag::JointEdema => &mut self.joint_edema,
            ClinicalFlag::LimitedMotion => &mut self.limited_motion,
            ClinicalFlag::TraumaHistory => &mut self.trauma_history,
            ClinicalFlag::Fever => &mut self.fever,
            ClinicalFlag::Psoriasis => &mut self.psoriasis,
            ClinicalFlag::MalarRash => &mut self.malar_rash,
            ClinicalFlag::Raynauds => &mut self.raynauds,
            ClinicalFlag::OralUlcers => &mut self.oral_ulcers,
            ClinicalFlag::GenitalUlcers => &mut self.genital_ulcers,
            ClinicalFlag::Uveitis => &mut self.uveitis,
            ClinicalFlag::DryEyeMouth => &mut self.dry_eye_mouth,
            ClinicalFlag::Diarrhea => &mut self.diarrhea,
            ClinicalFlag::Ild => &mut self.ild,
        }
    }
}

/// Identifier for one boolean clinical sign on the intake form.
///
/// Serialized with the same camelCase name as the record field it controls,
/// so `"dryEyeMouth"` addresses `ClinicalSigns::dry_eye_mouth`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub enum ClinicalFlag {
    MorningStiffness,
    BetterWithActivity,
    WorseWithActivity,
    Redness,
    JointEdema,
    LimitedMotion,
    TraumaHistory,
    Fever,
    Psoriasis,
    MalarRash,
    Raynauds,
    OralUlcers,
    GenitalUlcers,
    Uveitis,
    DryEyeMouth,
    Diarrhea,
    Ild,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum SignGroup {
    Articular,
    Systemic,
}

impl ClinicalFlag {
    /// All flags, in prompt order.
    pub const ALL: [ClinicalFlag; 17] = [
        Self::MorningStiffness,
        Self::BetterWithActivity,
        Self::WorseWithActivity,
        Self::Redness,
        Self::JointEdema,
        Self::LimitedMotion,
        Self::TraumaHistory,
        Self::Fever,
        Self::Psoriasis,
        Self::MalarRash,
        Self::Raynauds,
        Self::OralUlcers,
        Self::GenitalUlcers,
        Self::Uveitis,
        Self::DryEyeMouth,
        Self::Diarrhea,
        Self::Ild,
    ];

    pub fn group(self) -> SignGroup {
        match self {
            Self::MorningStiffness
            | Self::BetterWithActivity
            | Self::WorseWithActivity
            | Self::Redness
            | Self::JointEdema
            | Self::LimitedMotion
            | Self::TraumaHistory => SignGroup::Articular,
            _ => SignGroup::Systemic,
        }
    }

    /// Label written into the model prompt.
    pub fn prompt_label(self) -> &'static str {
        match self {
            Self::MorningStiffness => "Morning Stiffness (>1hr)",
            Self::BetterWithActivity => "Improved with Exercise (Inflammatory)",
            Self::WorseWithActivity => "Worsened with Exercise (Mechanical)",
            Self::Redness => "Redness/Warmth",
            Self::JointEdema => "Joint Swelling / Edema",
            Self::LimitedMotion => "Limited Range of Motion (LOM)",
            Self::TraumaHistory => "History of Trauma",
            Self::Fever => "Fever",
            Self::Psoriasis => "Psoriasis",
            Self::MalarRash => "Malar Rash",
            Self::Raynauds => "Raynaud's Phenomenon",
            Self::OralUlcers => "Oral Ulcers",
            Self::GenitalUlcers => "Genital Ulcers",
            Self::Uveitis => "Uveitis",
            Self::DryEyeMouth => "Dry Eye/Mouth (Sicca)",
            Self::Diarrhea => "Chronic Diarrhea",
            Self::Ild => "ILD (Interstitial Lung Disease)",
        }
    }

    /// Short label for the form's toggle chip.
    pub fn chip_label(self) -> &'static str {
        match self {
            Self::MorningStiffness => "Morning Stiffness >1hr",
            Self::BetterWithActivity => "Improved w/ Exercise",
            Self::WorseWithActivity => "Worsened w/ Exercise",
            Self::Redness => "Redness / Warmth",
            Self::JointEdema => "Joint Edema / Swelling",
            Self::LimitedMotion => "Limited Motion (LOM)",
            Self::TraumaHistory => "Recent Trauma",
            Self::Fever => "Fever / Chills",
            Self::Psoriasis => "Psoriasis",
            Self::MalarRash => "Malar Rash",
            Self::Raynauds => "Raynaud's",
            Self::OralUlcers => "Oral Ulcers",
            Self::GenitalUlcers => "Genital Ulcers",
            Self::Uveitis => "Uveitis / Red Eye",
            Self::DryEyeMouth => "Dry Eye/Mouth",
            Self::Diarrhea => "Chronic Diarrhea",
            Self::Ild => "ILD / Dyspnea",
        }
    }
}
