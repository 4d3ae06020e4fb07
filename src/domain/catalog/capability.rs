use serde::Serialize;

/// Percentage of AI capability per medical task and specialty.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CapabilityMatrix {
    pub tasks: Vec<String>,
    pub specialties: Vec<String>,
    /// `values[task][specialty]`
    pub values: Vec<Vec<u8>>,
}

pub fn capability_matrix() -> CapabilityMatrix {
    let tasks = [
        "Provide documentation",
        "Provide emphatic care to patients",
        "Formulate personalized medication and/or treatment plans",
        "Evaluate referral type",
        "Establish prognoses",
        "Detect criminal behavior",
        "Detect self-harmful behavior",
        "Reach diagnoses",
        "Perform physical examination",
        "Interview patients",
        "Average for each task",
    ];
    let specialties = [
        "Psychiatry",
        "Pathology",
        "Radiology",
        "Surgical Specialities",
        "Average",
    ];
    let by_specialty: [[u8; 11]; 5] = [
        [49, 9, 30, 33, 67, 35, 44, 72, 16, 51, 41],
        [73, 13, 60, 73, 87, 40, 53, 73, 33, 80, 59],
        [35, 6, 65, 53, 71, 35, 35, 65, 29, 29, 42],
        [38, 8, 46, 51, 64, 36, 23, 64, 31, 59, 42],
        [49, 9, 50, 53, 72, 37, 39, 69, 27, 54, 46],
    ];

    let values = (0..tasks.len())
        .map(|t| by_specialty.iter().map(|column| column[t]).collect())
        .collect();

    CapabilityMatrix {
        tasks: tasks.iter().map(|s| s.to_string()).collect(),
        specialties: specialties.iter().map(|s| s.to_string()).collect(),
        values,
    }
}

/// Share of surveyed respondents using AI for a clinical purpose.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UseCaseShare {
    pub use_case: String,
    pub share_percent: f64,
}

pub fn use_case_shares() -> Vec<UseCaseShare> {
    [
        ("Clinical decision support tools", 29.0),
        ("Predictive analytics and risk stratification", 25.0),
        ("Clinical workflow optimization and automation", 23.0),
        ("Treatment and therapy recommendations for providers", 19.0),
        ("Diagnosis and treatment recommendations", 16.0),
        ("Clinical documentation and dictation", 15.0),
    ]
    .into_iter()
    .map(|(use_case, share_percent)| UseCaseShare {
        use_case: use_case.to_string(),
        share_percent,
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matrix_is_tasks_by_specialties() {
        let matrix = capability_matrix();
        assert_eq!(matrix.values.len(), 11);
        assert!(matrix.values.iter().all(|row| row.len() == 5));
        // "Establish prognoses" for Pathology
        assert_eq!(matrix.values[4][1], 87);
        // "Average for each task" for Average
        assert_eq!(matrix.values[10][4], 46);
    }

    #[test]
    fn six_use_cases() {
        let cases = use_case_shares();
        assert_eq!(cases.len(), 6);
        assert_eq!(cases[0].share_percent, 29.0);
    }
}
