use std::fmt;

use serde::{Deserialize, Serialize};

use crate::intake::IntakeError;

pub const GPA_SCALE: f64 = 4.0;

/// Career field a candidate is assessed for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Field {
    #[serde(rename = "Software Engineer")]
    SoftwareEngineer,
    #[serde(rename = "Data Scientist")]
    DataScientist,
    #[serde(rename = "Editor")]
    Editor,
    #[serde(rename = "Animator")]
    Animator,
    #[serde(rename = "Computer Vision Engineer")]
    ComputerVisionEngineer,
    #[serde(rename = "Robotics Engineer")]
    RoboticsEngineer,
    #[serde(rename = "UI/UX Designer")]
    UiUxDesigner,
}

impl Field {
    pub const ALL: [Field; 7] = [
        Field::SoftwareEngineer,
        Field::DataScientist,
        Field::Editor,
        Field::Animator,
        Field::ComputerVisionEngineer,
        Field::RoboticsEngineer,
        Field::UiUxDesigner,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Field::SoftwareEngineer => "Software Engineer",
            Field::DataScientist => "Data Scientist",
            Field::Editor => "Editor",
            Field::Animator => "Animator",
            Field::ComputerVisionEngineer => "Computer Vision Engineer",
            Field::RoboticsEngineer => "Robotics Engineer",
            Field::UiUxDesigner => "UI/UX Designer",
        }
    }

    /// Subfields offered for this field, in display order.
    pub fn subfields(self) -> &'static [&'static str] {
        match self {
            Field::SoftwareEngineer => &["Backend", "Frontend", "Full Stack", "Mobile", "Cloud"],
            Field::Editor => &["Video", "Content", "Technical", "News", "Creative"],
            Field::Animator => &["2D", "3D", "Motion Graphics", "Character", "Visual Effects"],
            Field::ComputerVisionEngineer => {
                &["Object Detection", "Image Processing", "Video Analytics"]
            }
            Field::RoboticsEngineer => &["Industrial", "Research", "AI", "Control Systems"],
            Field::DataScientist | Field::UiUxDesigner => &["General"],
        }
    }

    /// Case-insensitive lookup returning the canonical subfield label.
    pub fn canonical_subfield(self, subfield: &str) -> Option<&'static str> {
        let wanted = subfield.trim();
        self.subfields()
            .iter()
            .copied()
            .find(|s| s.eq_ignore_ascii_case(wanted))
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Grade point average on a 4.0 scale.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Gpa(f64);

impl Gpa {
    pub fn new(value: f64) -> Result<Self, IntakeError> {
        if value.is_finite() && (0.0..=GPA_SCALE).contains(&value) {
            Ok(Gpa(value))
        } else {
            Err(IntakeError::GpaOutOfRange { value })
        }
    }

    pub fn value(self) -> f64 {
        self.0
    }

    /// Linear mapping onto 0–100.
    pub fn as_percentage(self) -> f64 {
        self.0 / GPA_SCALE * 100.0
    }

    /// The value exactly as entered, with at least one decimal place (`3.0`, `3.95`).
    pub fn exact(self) -> String {
        if self.0.fract() == 0.0 {
            format!("{:.1}", self.0)
        } else {
            self.0.to_string()
        }
    }
}

impl fmt::Display for Gpa {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{:.1}", self.exact(), GPA_SCALE)
    }
}

/// Validated intake data. Only constructed by a complete, valid intake form.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CandidateProfile {
    field: Field,
    subfield: &'static str,
    gpa: Gpa,
    responses: Vec<usize>,
}

impl CandidateProfile {
    pub(crate) fn new(field: Field, subfield: &'static str, gpa: Gpa, responses: Vec<usize>) -> Self {
        Self {
            field,
            subfield,
            gpa,
            responses,
        }
    }

    pub fn field(&self) -> Field {
        self.field
    }

    pub fn subfield(&self) -> &'static str {
        self.subfield
    }

    pub fn gpa(&self) -> Gpa {
        self.gpa
    }

    pub fn responses(&self) -> &[usize] {
        &self.responses
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gpa_percentage_is_linear() {
        assert_eq!(Gpa::new(0.0).unwrap().as_percentage(), 0.0);
        assert_eq!(Gpa::new(2.0).unwrap().as_percentage(), 50.0);
        assert_eq!(Gpa::new(4.0).unwrap().as_percentage(), 100.0);
    }

    #[test]
    fn test_gpa_rejects_out_of_range() {
        assert!(Gpa::new(-0.1).is_err());
        assert!(Gpa::new(4.01).is_err());
        assert!(Gpa::new(f64::NAN).is_err());
    }

    #[test]
    fn test_gpa_display() {
        assert_eq!(Gpa::new(3.5).unwrap().to_string(), "3.5/4.0");
        assert_eq!(Gpa::new(3.0).unwrap().to_string(), "3.0/4.0");
    }

    #[test]
    fn test_gpa_display_is_not_rounded() {
        assert_eq!(Gpa::new(3.95).unwrap().to_string(), "3.95/4.0");
        assert_eq!(Gpa::new(3.67).unwrap().exact(), "3.67");
        assert_eq!(Gpa::new(4.0).unwrap().exact(), "4.0");
    }

    #[test]
    fn test_fields_without_mapping_get_general() {
        assert_eq!(Field::DataScientist.subfields(), &["General"]);
        assert_eq!(Field::UiUxDesigner.subfields(), &["General"]);
    }

    #[test]
    fn test_canonical_subfield_case_insensitive() {
        assert_eq!(
            Field::SoftwareEngineer.canonical_subfield("full stack"),
            Some("Full Stack")
        );
        assert_eq!(Field::Animator.canonical_subfield(" 3d "), Some("3D"));
        assert_eq!(Field::Editor.canonical_subfield("Backend"), None);
    }

    #[test]
    fn test_field_serde_uses_labels() {
        let json = serde_json::to_string(&Field::UiUxDesigner).unwrap();
        assert_eq!(json, "\"UI/UX Designer\"");
        let field: Field = serde_json::from_str("\"Computer Vision Engineer\"").unwrap();
        assert_eq!(field, Field::ComputerVisionEngineer);
    }
}
