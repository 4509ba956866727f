use fedgraph_core::ResolutionPolicy;

use crate::cli::Resolution;

// CLI enums -> library enums

impl From<Resolution> for ResolutionPolicy {
    fn from(r: Resolution) -> Self {
        match r {
            Resolution::Exact => ResolutionPolicy::Exact,
            Resolution::CaseInsensitive => ResolutionPolicy::CaseInsensitive,
            Resolution::Fuzzy => ResolutionPolicy::Fuzzy,
        }
    }
}
