//! The fixed selection sets offered by the search form.
//!
//! Search accepts only values from these sets; anything else is rejected
//! before the store is touched.

use serde::Serialize;

/// The sentinel a client sends for a dropdown left on its placeholder.
pub const UNSELECTED: &str = "Select";

/// Job titles offered by the search form.
pub const JOB_TITLES: [&str; 11] = [
    "Software Engineer",
    "Data Scientist",
    "Product Manager",
    "Registered Nurse",
    "HR Specialist",
    "Financial Analyst",
    "Construction Manager",
    "Investment Banker",
    "Teacher",
    "Event Planner",
    "Customer Service Representative",
];

pub fn is_known_title(title: &str) -> bool {
    JOB_TITLES.contains(&title)
}

/// Employment types offered by the search form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EmploymentType {
    Intern,
    FullTime,
    PartTime,
}

impl EmploymentType {
    pub const ALL: [EmploymentType; 3] = [
        EmploymentType::Intern,
        EmploymentType::FullTime,
        EmploymentType::PartTime,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EmploymentType::Intern => "Intern",
            EmploymentType::FullTime => "Full-time",
            EmploymentType::PartTime => "Part-time",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_recognizes_its_own_titles() {
        for title in JOB_TITLES {
            assert!(is_known_title(title));
        }
        assert!(!is_known_title("Astronaut"));
        assert!(!is_known_title(UNSELECTED));
    }

    #[test]
    fn employment_type_round_trips() {
        for et in EmploymentType::ALL {
            assert_eq!(EmploymentType::parse(et.as_str()), Some(et));
        }
    }

    #[test]
    fn employment_type_rejects_unknown_and_sentinel() {
        assert_eq!(EmploymentType::parse("Contract"), None);
        assert_eq!(EmploymentType::parse(UNSELECTED), None);
        // exact match only: the dropdown sends canonical casing
        assert_eq!(EmploymentType::parse("full-time"), None);
    }
}
