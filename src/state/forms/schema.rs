//! Step layout of the waitlist form

use super::field::FieldSpec;

/// One screen of the waitlist form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepSpec {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub fields: &'static [FieldSpec],
}

impl StepSpec {
    /// Look up a field on this step by payload key
    pub fn field(&self, name: &str) -> Option<&'static FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }
}

const CONTACT_FIELDS: &[FieldSpec] = &[
    FieldSpec::email(
        "email",
        "Email",
        "Enter your email",
        "Please enter your email address.",
        "Please enter a valid email address",
    ),
    FieldSpec::min_length(
        "name",
        "Name",
        "Your name",
        2,
        "Name must be at least 2 characters",
    ),
];

const TEAM_FIELDS: &[FieldSpec] = &[
    FieldSpec::min_length(
        "company",
        "Company",
        "Company name",
        2,
        "Company name must be at least 2 characters",
    ),
    FieldSpec::min_length("role", "Role", "Your role", 2, "Please specify your role"),
    FieldSpec::min_length(
        "teamSize",
        "Team Size",
        "Team size",
        1,
        "Please specify your team size",
    ),
    FieldSpec::min_length(
        "useCase",
        "Use Case",
        "Describe your use case",
        10,
        "Please provide more details about your use case",
    )
    .multiline(),
];

const DATA_FIELDS: &[FieldSpec] = &[
    FieldSpec::min_length(
        "dataType",
        "Data Type",
        "Type of data to label",
        1,
        "Please specify your data type",
    ),
    FieldSpec::min_length(
        "dataVolume",
        "Data Volume",
        "Monthly data volume",
        1,
        "Please specify your data volume",
    ),
    FieldSpec::min_length(
        "timeline",
        "Timeline",
        "When do you want to start?",
        1,
        "Please specify your timeline",
    ),
    FieldSpec::min_length(
        "budget",
        "Budget",
        "Monthly budget",
        1,
        "Please specify your budget",
    ),
];

const PROCESS_FIELDS: &[FieldSpec] = &[
    FieldSpec::min_length(
        "currentProcess",
        "Current Process",
        "Describe your current data labeling process",
        10,
        "Please describe your current process",
    )
    .multiline(),
    FieldSpec::min_length(
        "challenges",
        "Challenges",
        "What challenges are you facing with your current process?",
        10,
        "Please describe your challenges",
    )
    .multiline(),
    FieldSpec::min_length(
        "integrations",
        "Integrations",
        "What tools/platforms would you like ModelShip to integrate with?",
        1,
        "Please specify desired integrations",
    ),
    FieldSpec::min_length(
        "expectations",
        "Expectations",
        "What are your expectations from ModelShip?",
        10,
        "Please describe your expectations",
    )
    .multiline(),
];

/// The waitlist form, in order
pub const WAITLIST_STEPS: &[StepSpec] = &[
    StepSpec {
        title: "Join the Waitlist",
        subtitle: "Be among the first to experience ModelShip's AI-powered data labeling.",
        fields: CONTACT_FIELDS,
    },
    StepSpec {
        title: "About your team",
        subtitle: "Help us understand how we can best serve you.",
        fields: TEAM_FIELDS,
    },
    StepSpec {
        title: "Your data",
        subtitle: "What are you labeling, and at what scale?",
        fields: DATA_FIELDS,
    },
    StepSpec {
        title: "Your process",
        subtitle: "Tell us what works today and what doesn't.",
        fields: PROCESS_FIELDS,
    },
];

/// Find a field anywhere in a step list
pub fn find_field(steps: &[StepSpec], name: &str) -> Option<&'static FieldSpec> {
    steps.iter().find_map(|s| s.field(name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_four_steps() {
        assert_eq!(WAITLIST_STEPS.len(), 4);
    }

    #[test]
    fn test_first_step_is_email_and_name() {
        let names: Vec<_> = WAITLIST_STEPS[0].fields.iter().map(|f| f.name).collect();
        assert_eq!(names, vec!["email", "name"]);
    }

    #[test]
    fn test_field_names_are_unique() {
        let mut seen = HashSet::new();
        for step in WAITLIST_STEPS {
            for field in step.fields {
                assert!(seen.insert(field.name), "duplicate field {}", field.name);
            }
        }
        assert_eq!(seen.len(), 14);
    }

    #[test]
    fn test_every_step_has_fields() {
        assert!(WAITLIST_STEPS.iter().all(|s| !s.fields.is_empty()));
    }

    #[test]
    fn test_find_field() {
        let field = find_field(WAITLIST_STEPS, "teamSize").unwrap();
        assert_eq!(field.label, "Team Size");
        assert!(find_field(WAITLIST_STEPS, "phone").is_none());
    }

    #[test]
    fn test_step_field_lookup_is_scoped() {
        assert!(WAITLIST_STEPS[0].field("email").is_some());
        assert!(WAITLIST_STEPS[0].field("company").is_none());
    }
}
