//! Point-charge field and potential evaluation.

mod charge;
mod sample;
mod superposition;

pub use charge::{Charge, Polarity};
pub use sample::FieldSample;
pub use superposition::{
    compute_field,
    compute_potential,
    field_at_point,
    potential_at_point,
    FieldGrid,
};
