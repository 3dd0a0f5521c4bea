//! The demo "healthy life gained" estimator and the habit profile it is fed from.

mod model;
mod profile;

pub use model::{estimate, estimate_profile, Coefficients, GainDetail, GainEstimator, GainResult};
pub use profile::{
    HabitProfile, InputError, Sex, AGE_RANGE, DAYS_RANGE, DRINKS_PER_OCCASION_RANGE,
    YEARS_DRINKING_RANGE,
};
