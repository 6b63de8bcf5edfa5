use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;

use crate::domain::entities::parcels::{InsertParcelEntity, ParcelEntity, ReceiveParcelEntity};

/// Single-table store of parcel records, addressed by barcode.
///
/// A barcode that matches nothing is not an error: lookups yield `None` and
/// writes report zero affected rows.
#[automock]
#[async_trait]
pub trait ParcelRepository {
    /// All records in insertion order.
    async fn list_all(&self) -> Result<Vec<ParcelEntity>>;
    async fn find_by_barcode(&self, barcode: &str) -> Result<Option<ParcelEntity>>;
    /// Returns the barcode of the stored row.
    async fn insert(&self, insert_parcel_entity: InsertParcelEntity) -> Result<String>;
    async fn receive(
        &self,
        barcode: &str,
        receive_parcel_entity: ReceiveParcelEntity,
    ) -> Result<usize>;
    async fn delete(&self, barcode: &str) -> Result<usize>;
}
