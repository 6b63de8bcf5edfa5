pub mod parcels;
