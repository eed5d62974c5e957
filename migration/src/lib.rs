pub use sea_orm_migration::prelude::*;

mod m20220101_000001_create_user_table;
mod m20250214_000002_create_expertise_tables;
mod m20250214_000003_create_mentorship_table;
mod m20250214_000004_create_focus_area_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20220101_000001_create_user_table::Migration),
            Box::new(m20250214_000002_create_expertise_tables::Migration),
            Box::new(m20250214_000003_create_mentorship_table::Migration),
            Box::new(m20250214_000004_create_focus_area_table::Migration),
        ]
    }
}
