use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ShipmentLocale {
    Local,
    National,
    International,
}

impl ShipmentLocale {
    pub const ALL: [ShipmentLocale; 3] = [
        ShipmentLocale::Local,
        ShipmentLocale::National,
        ShipmentLocale::International,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ShipmentLocale::Local => "Within the Lower Mainland",
            ShipmentLocale::National => "Within Canada",
            ShipmentLocale::International => "International",
        }
    }
}

impl Display for ShipmentLocale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let shipment_locale = match self {
            ShipmentLocale::Local => "local",
            ShipmentLocale::National => "national",
            ShipmentLocale::International => "international",
        };
        write!(f, "{}", shipment_locale)
    }
}
