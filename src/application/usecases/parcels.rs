use anyhow::Result;
use chrono::{NaiveDateTime, Utc};
use serde::Serialize;
use std::sync::Arc;
use tracing::{error, info};
use uuid::Uuid;

use crate::domain::{
    entities::parcels::ParcelEntity,
    repositories::parcels::ParcelRepository,
    value_objects::parcels::{CreateParcelModel, ReceiveParcelModel},
};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParcelDto {
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

impl From<ParcelEntity> for ParcelDto {
    fn from(value: ParcelEntity) -> Self {
        Self {
            id: value.id,
            barcode: value.barcode,
            user_id: value.user_id,
            file_id: value.file_id,
            attn_name: value.attn_name,
            attn_phone: value.attn_phone,
            attn_organization: value.attn_organization,
            street_address: value.street_address,
            city: value.city,
            state_or_province: value.state_or_province,
            country: value.country,
            postal_code: value.postal_code,
            shipment_type: value.shipment_type,
            shipment_locale: value.shipment_locale,
            shipment_speed: value.shipment_speed,
            shipment_status: value.shipment_status,
            shipment_weight: value.shipment_weight,
            shipment_length: value.shipment_length,
            shipment_width: value.shipment_width,
            shipment_height: value.shipment_height,
            shipping_method: value.shipping_method,
            creation_date: value.creation_date,
            received_date: value.received_date,
        }
    }
}

pub struct ParcelUseCase<R>
where
    R: ParcelRepository + Send + Sync + 'static,
{
    parcel_repository: Arc<R>,
}

impl<R> ParcelUseCase<R>
where
    R: ParcelRepository + Send + Sync + 'static,
{
    pub fn new(parcel_repository: Arc<R>) -> Self {
        Self { parcel_repository }
    }

    /// Stores a new parcel under a fresh v4 barcode and returns that barcode.
    /// UUID collisions are not retried.
    pub async fn create(&self, create_parcel_model: CreateParcelModel) -> Result<String> {
        let barcode = Uuid::new_v4().to_string();
        let creation_date = Utc::now().naive_utc();

        info!(%barcode, "parcels: create requested");

        let insert_parcel_entity = create_parcel_model.to_entity(barcode.clone(), creation_date);

        let barcode = self
            .parcel_repository
            .insert(insert_parcel_entity)
            .await
            .map_err(|err| {
                error!(%barcode, db_error = ?err, "parcels: failed to insert parcel");
                err
            })?;

        info!(%barcode, "parcels: parcel created");
        Ok(barcode)
    }

    pub async fn get_all(&self) -> Result<Vec<ParcelDto>> {
        let parcels = self.parcel_repository.list_all().await.map_err(|err| {
            error!(db_error = ?err, "parcels: failed to list parcels");
            err
        })?;

        Ok(parcels.into_iter().map(ParcelDto::from).collect())
    }

    pub async fn get_one(&self, barcode: &str) -> Result<Option<ParcelDto>> {
        let parcel = self
            .parcel_repository
            .find_by_barcode(barcode)
            .await
            .map_err(|err| {
                error!(%barcode, db_error = ?err, "parcels: failed to find parcel");
                err
            })?;

        Ok(parcel.map(ParcelDto::from))
    }

    /// Receiving update: stamps `received_date` and overwrites the physical
    /// fields. Returns the number of rows changed, 0 for an unknown barcode.
    pub async fn receive(
        &self,
        barcode: &str,
        receive_parcel_model: ReceiveParcelModel,
    ) -> Result<usize> {
        let received_date = Utc::now().naive_utc();
        let receive_parcel_entity = receive_parcel_model.to_entity(received_date);

        let affected = self
            .parcel_repository
            .receive(barcode, receive_parcel_entity)
            .await
            .map_err(|err| {
                error!(%barcode, db_error = ?err, "parcels: failed to receive parcel");
                err
            })?;

        info!(%barcode, affected, "parcels: receive applied");
        Ok(affected)
    }

    pub async fn delete(&self, barcode: &str) -> Result<usize> {
        let affected = self.parcel_repository.delete(barcode).await.map_err(|err| {
            error!(%barcode, db_error = ?err, "parcels: failed to delete parcel");
            err
        })?;

        info!(%barcode, affected, "parcels: delete applied");
        Ok(affected)
    }
}
