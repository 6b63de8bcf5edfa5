use std::fmt::Display;

/// Service tier, fastest first.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ShipmentSpeed {
    One,
    Two,
    Three,
}

impl ShipmentSpeed {
    pub const ALL: [ShipmentSpeed; 3] = [
        ShipmentSpeed::One,
        ShipmentSpeed::Two,
        ShipmentSpeed::Three,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ShipmentSpeed::One => "One",
            ShipmentSpeed::Two => "Two",
            ShipmentSpeed::Three => "Three",
        }
    }
}

impl Display for ShipmentSpeed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let shipment_speed = match self {
            ShipmentSpeed::One => "one",
            ShipmentSpeed::Two => "two",
            ShipmentSpeed::Three => "three",
        };
        write!(f, "{}", shipment_speed)
    }
}
