mod conversion;
mod error;
mod k_anonymity;
mod l_diversity;
mod partition;
mod summary;
mod table;

pub use crate::conversion::{records_to_table, table_to_records};
pub use crate::error::MetricsError;
pub use crate::k_anonymity::{
    get_full_k_anonymity_report, get_k_anonymity, get_k_reverse_membership, KAnonymity,
    KAnonymityReport,
};
pub use crate::l_diversity::{
    get_full_l_diversity_report, get_l_diversity, LDiversity, LDiversityReport,
};
pub use crate::partition::{partition_table, Partition};
pub use crate::summary::{
    get_k_summary, get_k_summary_table, get_l_summary, get_l_summary_table, KSummary, LSummary,
};
pub use crate::table::{Table, Value, ValueKind};
