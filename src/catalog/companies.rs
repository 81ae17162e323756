//! Company targets used for secondary readiness scores

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CompanyTarget {
    pub name: &'static str,
    pub divisor: f64,
}

/// Displayed in this order, independent of the selected role.
pub const COMPANY_TARGETS: [CompanyTarget; 4] = [
    CompanyTarget { name: "Amazon SDE", divisor: 1.2 },
    CompanyTarget { name: "Google SWE", divisor: 1.25 },
    CompanyTarget { name: "Infosys Graduate Engineer", divisor: 0.9 },
    CompanyTarget { name: "Startup Intern", divisor: 0.8 },
];
