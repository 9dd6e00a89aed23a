use crate::signals::SignalSet;
use ctrlguard_types::ids;

/// One named compliance requirement.
#[derive(Clone, Copy, Debug)]
pub struct Requirement {
    /// Stable dotted id (see [`ctrlguard_types::ids`]).
    pub id: &'static str,
    /// Label printed in the text report.
    pub label: &'static str,
    /// Satisfied when this returns true.
    pub check: fn(&SignalSet) -> bool,
}

impl Requirement {
    pub fn is_satisfied_by(&self, signals: &SignalSet) -> bool {
        (self.check)(signals)
    }
}

impl PartialEq for Requirement {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Requirement {}

/// Declaration order is report order.
static STANDARD_REQUIREMENTS: [Requirement; 6] = [
    Requirement {
        id: ids::REQ_LOGGER,
        label: ids::LABEL_LOGGER,
        check: |s| s.has_logger,
    },
    Requirement {
        id: ids::REQ_ERROR_HANDLING,
        label: ids::LABEL_ERROR_HANDLING,
        check: |s| s.has_error_handling,
    },
    Requirement {
        id: ids::REQ_OPERATION_DOC,
        label: ids::LABEL_OPERATION_DOC,
        check: |s| s.has_operation_doc,
    },
    Requirement {
        id: ids::REQ_RESPONSE_DOC,
        label: ids::LABEL_RESPONSE_DOC,
        check: |s| s.has_response_doc,
    },
    Requirement {
        id: ids::REQ_STATUS_SET,
        label: ids::LABEL_STATUS_SET,
        check: |s| s.has_required_statuses,
    },
    Requirement {
        id: ids::REQ_ACCESS_CONTROL,
        label: ids::LABEL_ACCESS_CONTROL,
        check: |s| s.has_access_control,
    },
];

/// An immutable, ordered set of requirements.
#[derive(Clone, Copy, Debug)]
pub struct Policy {
    requirements: &'static [Requirement],
}

impl Policy {
    /// The fixed controller policy.
    pub fn standard() -> Self {
        Self {
            requirements: &STANDARD_REQUIREMENTS,
        }
    }

    pub fn requirements(&self) -> &'static [Requirement] {
        self.requirements
    }
}

impl Default for Policy {
    fn default() -> Self {
        Self::standard()
    }
}

/// Whether findings should turn the verdict into a failure.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FailOn {
    /// Advisory: findings only warn.
    #[default]
    Never,
    Findings,
}
