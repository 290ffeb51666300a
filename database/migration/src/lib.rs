pub use sea_orm_migration::prelude::*;

mod m20241101_000001_create_validator_tables;
mod m20241101_000002_create_snapshot_tables;
mod m20241115_000001_create_stats_views;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20241101_000001_create_validator_tables::Migration),
            Box::new(m20241101_000002_create_snapshot_tables::Migration),
            Box::new(m20241115_000001_create_stats_views::Migration),
        ]
    }
}
