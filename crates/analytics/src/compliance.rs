//! SANS 241 drinking water compliance panel data.

use serde::{Deserialize, Serialize};

/// Traffic-light status of a single compliance parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ComplianceStatus {
    Compliant,
    AttentionNeeded,
    NonCompliant,
}

/// One water quality parameter measured against its SANS 241 limit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplianceParameter {
    pub name: &'static str,
    pub current_value: f32,
    pub sans241_limit: f32,
    pub status: ComplianceStatus,
}

/// The current SANS 241 compliance readout shown on the operations tab.
pub fn compliance_parameters() -> Vec<ComplianceParameter> {
    vec![
        ComplianceParameter {
            name: "pH Levels",
            current_value: 7.2,
            sans241_limit: 7.0,
            status: ComplianceStatus::Compliant,
        },
        ComplianceParameter {
            name: "Turbidity",
            current_value: 2.8,
            sans241_limit: 1.0,
            status: ComplianceStatus::AttentionNeeded,
        },
        ComplianceParameter {
            name: "E.coli",
            current_value: 15.0,
            sans241_limit: 0.0,
            status: ComplianceStatus::NonCompliant,
        },
        ComplianceParameter {
            name: "Free Chlorine",
            current_value: 0.8,
            sans241_limit: 0.5,
            status: ComplianceStatus::Compliant,
        },
        ComplianceParameter {
            name: "Total Coliform",
            current_value: 8.0,
            sans241_limit: 5.0,
            status: ComplianceStatus::AttentionNeeded,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_five_parameters() {
        assert_eq!(compliance_parameters().len(), 5);
    }

    #[test]
    fn test_ecoli_is_non_compliant() {
        let params = compliance_parameters();
        let ecoli = params.iter().find(|p| p.name == "E.coli").unwrap();
        assert_eq!(ecoli.status, ComplianceStatus::NonCompliant);
        assert_eq!(ecoli.sans241_limit, 0.0);
    }

    #[test]
    fn test_names_unique() {
        let params = compliance_parameters();
        let mut names: Vec<&str> = params.iter().map(|p| p.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), params.len());
    }
}
