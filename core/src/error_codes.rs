//! Stable string codes for every error the crate can surface.
//!
//! Codes are embedded in error messages and exposed through `code()`
//! accessors so callers can match on them without parsing message text.

pub const CONFIG_INVALID_SUFFIX_PATTERN: &str = "FACDIF_CFG_001";
pub const CONFIG_EMPTY_ALIAS_LIST: &str = "FACDIF_CFG_002";
pub const PREP_INSUFFICIENT_COLUMNS: &str = "FACDIF_PREP_001";
pub const TABLE_CSV_READ: &str = "FACDIF_TABLE_001";
