pub use sea_orm_migration::prelude::*;

mod m20250901_000001_initial;
mod m20250905_000001_add_instant_and_ar_lottery;
mod m20250910_000001_add_vip_shop;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250901_000001_initial::Migration),
            Box::new(m20250905_000001_add_instant_and_ar_lottery::Migration),
            Box::new(m20250910_000001_add_vip_shop::Migration),
        ]
    }
}
