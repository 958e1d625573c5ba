pub use sea_orm_migration::prelude::*;

mod m20260801_create_catalog_tables;
mod m20260801_add_natural_key_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260801_create_catalog_tables::Migration),
            Box::new(m20260801_add_natural_key_indexes::Migration),
        ]
    }
}
