pub mod pages;
pub mod parcels;
