pub use sea_orm_migration::prelude::*;

mod m20261001_000001_create_admin_users_table;
mod m20261001_000002_create_refresh_tokens_table;
mod m20261001_000003_create_menu_items_table;
mod m20261001_000004_create_gallery_images_table;
mod m20261001_000005_create_reservations_table;
mod m20261001_000006_create_settings_table;
mod m20261002_000007_create_menu_pdfs_table;
mod m20261002_000008_create_faqs_table;
mod m20261002_000009_create_contacts_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20261001_000001_create_admin_users_table::Migration),
            Box::new(m20261001_000002_create_refresh_tokens_table::Migration),
            Box::new(m20261001_000003_create_menu_items_table::Migration),
            Box::new(m20261001_000004_create_gallery_images_table::Migration),
            Box::new(m20261001_000005_create_reservations_table::Migration),
            Box::new(m20261001_000006_create_settings_table::Migration),
            Box::new(m20261002_000007_create_menu_pdfs_table::Migration),
            Box::new(m20261002_000008_create_faqs_table::Migration),
            Box::new(m20261002_000009_create_contacts_table::Migration),
        ]
    }
}
