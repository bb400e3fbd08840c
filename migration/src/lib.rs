pub use sea_orm_migration::prelude::*;

mod m20251201_000001_create_barrio_user_table;
mod m20251201_000002_create_barrio_event_table;
mod m20251201_000003_create_barrio_registration_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251201_000001_create_barrio_user_table::Migration),
            Box::new(m20251201_000002_create_barrio_event_table::Migration),
            Box::new(m20251201_000003_create_barrio_registration_table::Migration),
        ]
    }
}
