//! Transform module
//!
//! Turns the raw SIDRA response into a normalized [`PeriodTable`].
//!
//! # Column mapping
//!
//! | source          | column           |
//! |-----------------|------------------|
//! | `Id`            | `id_periodo`     |
//! | `Codigo`        | `codigo_periodo` |
//! | `Nome`          | `nome_periodo`   |
//! | `Disponivel`    | `disponivel`     |
//! | `DataLiberacao` | `data_liberacao` |
//!
//! Other source fields are dropped.

mod coerce;
mod periods;
mod types;

pub use coerce::parse_datetime;
pub use periods::transform;
pub use types::{PeriodRow, PeriodTable};
