pub mod shipment_locales;
pub mod shipment_speeds;
pub mod shipment_statuses;
pub mod shipment_types;
