mod api;
mod domain_service;
mod outcome;
mod value_objects;

pub use api::SignInApi;
pub use domain_service::{
    CheckInDomainService, SignInResolution, ALREADY_SIGNED_MARKER, SEVENTH_DAY_BONUS,
};
pub use outcome::SignInOutcome;
pub use value_objects::{
    integral_from_f64, AssetsInfo, SignInData, SignInResponse, VoucherResponse,
};
