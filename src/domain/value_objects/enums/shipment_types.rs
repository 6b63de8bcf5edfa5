use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ShipmentType {
    Mail,
    Parcel,
}

impl ShipmentType {
    pub const ALL: [ShipmentType; 2] = [ShipmentType::Mail, ShipmentType::Parcel];

    pub fn label(&self) -> &'static str {
        match self {
            ShipmentType::Mail => "Mail",
            ShipmentType::Parcel => "Parcel",
        }
    }
}

impl Display for ShipmentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let shipment_type = match self {
            ShipmentType::Mail => "mail",
            ShipmentType::Parcel => "parcel",
        };
        write!(f, "{}", shipment_type)
    }
}
