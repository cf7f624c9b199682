//! Common types and constants
//!
//! Shared type aliases and the fixed endpoint/output constants of the pipeline.

use std::time::Duration;

// ============================================================================
// Type Aliases
// ============================================================================

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;

/// Parsed JSON document returned by the statistics API
pub type RawResponse = JsonValue;

// ============================================================================
// Fixed Endpoint and Output
// ============================================================================

/// SIDRA endpoint listing the IPCA (table 1737) periods
pub const IPCA_URL: &str = "https://sidra.ibge.gov.br/Ajax/JSon/Tabela/1/1737?versao=-1";

/// Output file, relative to the working directory
pub const DEFAULT_OUTPUT_PATH: &str = "data/ipca_dados.parquet";

/// Request timeout for the single GET
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Keys descended through to reach the period records
pub const PERIODS_PATH: [&str; 2] = ["Periodos", "Periodos"];

// ============================================================================
// Column Names
// ============================================================================

/// Output column names, in persisted order
pub mod columns {
    pub const ID: &str = "id_periodo";
    pub const CODE: &str = "codigo_periodo";
    pub const NAME: &str = "nome_periodo";
    pub const AVAILABLE: &str = "disponivel";
    pub const RELEASE_DATE: &str = "data_liberacao";

    /// All five columns in order
    pub const ALL: [&str; 5] = [ID, CODE, NAME, AVAILABLE, RELEASE_DATE];
}

/// Source field names, as sent by the API
pub mod source_fields {
    pub const ID: &str = "Id";
    pub const CODE: &str = "Codigo";
    pub const NAME: &str = "Nome";
    pub const AVAILABLE: &str = "Disponivel";
    pub const RELEASE_DATE: &str = "DataLiberacao";
}
