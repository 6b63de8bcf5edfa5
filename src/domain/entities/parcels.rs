use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::infrastructure::sqlite::schema::parcels;

#[derive(Debug, Clone, PartialEq, Identifiable, Selectable, Queryable)]
#[diesel(table_name = parcels)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct ParcelEntity {
    pub id: i32,
    pub barcode: String,
    pub user_id: Option<String>,
    pub file_id: Option<String>,
    pub attn_name: Option<String>,
    pub attn_phone: Option<String>,
    pub attn_organization: Option<String>,
    pub street_address: String,
    pub city: String,
    pub state_or_province: String,
    pub country: String,
    pub postal_code: String,
    pub shipment_type: Option<String>,
    pub shipment_locale: Option<String>,
    pub shipment_speed: Option<String>,
    pub shipment_status: String,
    pub shipment_weight: Option<String>,
    pub shipment_length: Option<String>,
    pub shipment_width: Option<String>,
    pub shipment_height: Option<String>,
    pub shipping_method: Option<String>,
    pub creation_date: NaiveDateTime,
    pub received_date: Option<NaiveDateTime>,
}

/// New row. Address columns stay optional here so that a missing value is
/// rejected by the table's NOT NULL constraint rather than stored as "".
#[derive(Debug, Clone, PartialEq, Insertable)]
#[diesel(table_name = parcels)]
pub struct InsertParcelEntity {
    pub barcode: String,
    pub user_id: Option<String>,
    pub file_id: Option<String>,
    pub attn_name: Option<String>,
    pub attn_phone: Option<String>,
    pub attn_organization: Option<String>,
    pub street_address: Option<String>,
    pub city: Option<String>,
    pub state_or_province: Option<String>,
    pub country: Option<String>,
    pub postal_code: Option<String>,
    pub shipment_type: Option<String>,
    pub shipment_locale: Option<String>,
    pub shipment_speed: Option<String>,
    pub shipment_status: String,
    pub creation_date: NaiveDateTime,
}

/// Receiving update. Every listed column is overwritten, absent values included.
#[derive(Debug, Clone, PartialEq, AsChangeset)]
#[diesel(table_name = parcels)]
#[diesel(treat_none_as_null = true)]
pub struct ReceiveParcelEntity {
    pub shipment_weight: Option<String>,
    pub shipment_length: Option<String>,
    pub shipment_width: Option<String>,
    pub shipment_height: Option<String>,
    pub shipping_method: Option<String>,
    pub shipment_status: String,
    pub received_date: Option<NaiveDateTime>,
}
