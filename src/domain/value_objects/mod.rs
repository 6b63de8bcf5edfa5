pub mod enums;
pub mod parcels;
