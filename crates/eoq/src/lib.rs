//! EOQ model library.
//!
//! Pure, stateless order-quantity models (classic EOQ and the planned-
//! shortages variant) plus the numeric chart series derived from them.
//! No IO, no storage, no policy constants: callers supply every cost
//! parameter (see [`CostPolicy`]).

pub mod model;
pub mod policy;
pub mod series;

pub use model::{basic, with_shortages, BasicEoq, ShortageEoq, DAYS_PER_YEAR};
pub use policy::CostPolicy;
pub use series::{cost_curve, cycle_profile};
