//! Domain entities - Results and records flowing through the core

mod address_suggestions;
mod driver;
mod fare;
mod route_estimate;

pub use address_suggestions::AddressSuggestions;
pub use driver::Driver;
pub use fare::{FareEstimate, FareRate, FareSchedule, VehicleType};
pub use route_estimate::RouteEstimate;
