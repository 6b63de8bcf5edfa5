use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ShipmentStatus {
    Created,
    Received,
}

impl Display for ShipmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let shipment_status = match self {
            ShipmentStatus::Created => "created",
            ShipmentStatus::Received => "Received",
        };
        write!(f, "{}", shipment_status)
    }
}
