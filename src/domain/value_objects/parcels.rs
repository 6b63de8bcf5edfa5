use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer, de};
use serde_json::Value;

use crate::domain::{
    entities::parcels::{InsertParcelEntity, ReceiveParcelEntity},
    value_objects::enums::shipment_statuses::ShipmentStatus,
};

/// Intake payload. Server-owned fields (`barcode`, `creation_date`,
/// `received_date`, `shipment_status`) are not part of the model, so any
/// client-supplied value for them is dropped during deserialization. JSON
/// numbers are stored as their text.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct CreateParcelModel {
    #[serde(deserialize_with = "string_or_number")]
    pub user_id: Option<String>,
    #[serde(deserialize_with = "string_or_number")]
    pub file_id: Option<String>,
    #[serde(deserialize_with = "string_or_number")]
    pub attn_name: Option<String>,
    #[serde(deserialize_with = "string_or_number")]
    pub attn_phone: Option<String>,
    #[serde(deserialize_with = "string_or_number")]
    pub attn_organization: Option<String>,
    #[serde(deserialize_with = "string_or_number")]
    pub street_address: Option<String>,
    #[serde(deserialize_with = "string_or_number")]
    pub city: Option<String>,
    #[serde(deserialize_with = "string_or_number")]
    pub state_or_province: Option<String>,
    #[serde(deserialize_with = "string_or_number")]
    pub country: Option<String>,
    #[serde(deserialize_with = "string_or_number")]
    pub postal_code: Option<String>,
    #[serde(deserialize_with = "string_or_number")]
    pub shipment_type: Option<String>,
    #[serde(deserialize_with = "string_or_number")]
    pub shipment_locale: Option<String>,
    #[serde(deserialize_with = "string_or_number")]
    pub shipment_speed: Option<String>,
}

impl CreateParcelModel {
    pub fn to_entity(self, barcode: String, creation_date: NaiveDateTime) -> InsertParcelEntity {
        InsertParcelEntity {
            barcode,
            user_id: self.user_id,
            file_id: self.file_id,
            attn_name: self.attn_name,
            attn_phone: self.attn_phone,
            attn_organization: self.attn_organization,
            street_address: self.street_address,
            city: self.city,
            state_or_province: self.state_or_province,
            country: self.country,
            postal_code: self.postal_code,
            shipment_type: self.shipment_type,
            shipment_locale: self.shipment_locale,
            shipment_speed: self.shipment_speed,
            shipment_status: ShipmentStatus::Created.to_string(),
            creation_date,
        }
    }
}

/// Receiving payload: physical measurements and shipping details only.
/// Everything is kept as text; JSON numbers are accepted and stringified.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ReceiveParcelModel {
    #[serde(deserialize_with = "string_or_number")]
    pub shipment_weight: Option<String>,
    #[serde(deserialize_with = "string_or_number")]
    pub shipment_length: Option<String>,
    #[serde(deserialize_with = "string_or_number")]
    pub shipment_width: Option<String>,
    #[serde(deserialize_with = "string_or_number")]
    pub shipment_height: Option<String>,
    #[serde(deserialize_with = "string_or_number")]
    pub shipping_method: Option<String>,
    #[serde(deserialize_with = "string_or_number")]
    pub shipment_status: Option<String>,
}

impl ReceiveParcelModel {
    pub fn to_entity(self, received_date: NaiveDateTime) -> ReceiveParcelEntity {
        ReceiveParcelEntity {
            shipment_weight: self.shipment_weight,
            shipment_length: self.shipment_length,
            shipment_width: self.shipment_width,
            shipment_height: self.shipment_height,
            shipping_method: self.shipping_method,
            shipment_status: self
                .shipment_status
                .unwrap_or_else(|| ShipmentStatus::Received.to_string()),
            received_date: Some(received_date),
        }
    }
}

fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(text)) => Ok(Some(text)),
        Some(Value::Number(number)) => Ok(Some(number.to_string())),
        Some(other) => Err(de::Error::custom(format!(
            "expected a string or a number, found {other}"
        ))),
    }
}
