use std::sync::Arc;

use chrono::Utc;
use tempfile::TempDir;

use crate::{
    config::{
        config_model::{Database, DotEnvyConfig, Server},
        stage::Stage,
    },
    domain::entities::parcels::InsertParcelEntity,
    infrastructure::sqlite::sqlite_connection::{SqlitePoolSquad, establish_connection},
};

pub fn database_in(dir: &TempDir) -> Database {
    Database {
        url: dir.path().join("mailroom.sqlite").to_string_lossy().into_owned(),
        max_connections: 4,
    }
}

/// Pool over a fresh SQLite file. Keep the `TempDir` alive for the test.
pub fn sqlite_pool() -> (TempDir, Arc<SqlitePoolSquad>) {
    let dir = tempfile::tempdir().unwrap();
    let pool = establish_connection(&database_in(&dir)).unwrap();
    (dir, Arc::new(pool))
}

pub fn test_config(dir: &TempDir) -> DotEnvyConfig {
    DotEnvyConfig {
        server: Server {
            port: 0,
            body_limit: 1,
        },
        database: database_in(dir),
        stage: Stage::Test,
    }
}

pub fn sample_insert(barcode: &str) -> InsertParcelEntity {
    InsertParcelEntity {
        barcode: barcode.to_string(),
        user_id: Some("A".to_string()),
        file_id: Some("F-1".to_string()),
        attn_name: Some("Jane Doe".to_string()),
        attn_phone: None,
        attn_organization: None,
        street_address: Some("1 Main St".to_string()),
        city: Some("X".to_string()),
        state_or_province: Some("BC".to_string()),
        country: Some("Canada".to_string()),
        postal_code: Some("V5K 0A1".to_string()),
        shipment_type: Some("parcel".to_string()),
        shipment_locale: Some("local".to_string()),
        shipment_speed: Some("one".to_string()),
        shipment_status: "created".to_string(),
        creation_date: Utc::now().naive_utc(),
    }
}
