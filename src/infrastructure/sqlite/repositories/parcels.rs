use anyhow::Result;
use async_trait::async_trait;
use diesel::{RunQueryDsl, prelude::*};
use std::sync::Arc;

use crate::domain::{
    entities::parcels::{InsertParcelEntity, ParcelEntity, ReceiveParcelEntity},
    repositories::parcels::ParcelRepository,
};
use crate::infrastructure::sqlite::{schema::parcels, sqlite_connection::SqlitePoolSquad};

pub struct ParcelSqlite {
    db_pool: Arc<SqlitePoolSquad>,
}

impl ParcelSqlite {
    pub fn new(db_pool: Arc<SqlitePoolSquad>) -> Self {
        Self { db_pool }
    }
}

#[async_trait]
impl ParcelRepository for ParcelSqlite {
    async fn list_all(&self) -> Result<Vec<ParcelEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let rows = parcels::table
            .order(parcels::id.asc())
            .select(ParcelEntity::as_select())
            .load::<ParcelEntity>(&mut conn)?;

        Ok(rows)
    }

    async fn find_by_barcode(&self, barcode: &str) -> Result<Option<ParcelEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let row = parcels::table
            .filter(parcels::barcode.eq(barcode))
            .select(ParcelEntity::as_select())
            .first::<ParcelEntity>(&mut conn)
            .optional()?;

        Ok(row)
    }

    async fn insert(&self, insert_parcel_entity: InsertParcelEntity) -> Result<String> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        diesel::insert_into(parcels::table)
            .values(&insert_parcel_entity)
            .execute(&mut conn)?;

        Ok(insert_parcel_entity.barcode)
    }

    async fn receive(
        &self,
        barcode: &str,
        receive_parcel_entity: ReceiveParcelEntity,
    ) -> Result<usize> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let affected = diesel::update(parcels::table.filter(parcels::barcode.eq(barcode)))
            .set(&receive_parcel_entity)
            .execute(&mut conn)?;

        Ok(affected)
    }

    async fn delete(&self, barcode: &str) -> Result<usize> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let affected = diesel::delete(parcels::table.filter(parcels::barcode.eq(barcode)))
            .execute(&mut conn)?;

        Ok(affected)
    }
}
