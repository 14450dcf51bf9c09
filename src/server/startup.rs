use sea_orm::DatabaseConnection;

use crate::server::{
    config::Config,
    data::{
        gallery_image::GalleryImageRepository, menu_item::MenuItemRepository,
        setting::SettingRepository,
    },
    error::AppError,
    model::{gallery::CreateGalleryImageParams, menu_item::SaveMenuItemParams},
    service::auth::AuthService,
    state::AppState,
};

/// Menu shown on a fresh install: `(category, name, description, price)`.
const SEED_MENU_ITEMS: [(&str, &str, &str, &str); 3] = [
    (
        "Entrées",
        "Smoked Atlantic Scallops",
        "With fermented parsnip purée and brown butter emulsion",
        "28",
    ),
    (
        "Plats Principaux",
        "Wagyu Beef Rossini",
        "Foie gras, truffle jus, and local heritage carrots",
        "64",
    ),
    (
        "Plats Principaux",
        "Roasted Wild Sea Bass",
        "Champagne velouté, caviar, and sea succulents",
        "48",
    ),
];

/// Gallery shown on a fresh install: `(url, alt, title)`.
const SEED_GALLERY_IMAGES: [(&str, &str, &str); 4] = [
    (
        "https://lh3.googleusercontent.com/aida-public/AB6AXuBgfW82niTFxVqPjDWA4M90BNMM_gBK4B4-49VTMqvydcALqWZ5ribPD_78VPU_RlZ69ld1rNaR9WpR7hnVkyuqUGZMT8Acf_rOjL3LGUY_Bn76zDhIyWURFFO-4RC2VrnuE8Xbch8jk7NdGo9ZBNxdACGEKV9WR-hmQuyArlKPEgbS2Z3I2rgmfBgZC6g_0-klyIknMU1f1P-dKWTJAf4y0HC0YlL6xj1KRo8kuvMdMgJaolcxk19MvgpjaiRn4j7870vJA3-0UTsE",
        "Gourmet dish presentation",
        "Signature Sea Bass",
    ),
    (
        "https://lh3.googleusercontent.com/aida-public/AB6AXuCQ6tnjdHZT7fp-suIXFoaJasIol7zbGoO695N9yupDvzDOqKgQOtYbFcz8nz2E2CfqRBy17xKPMPk8k0exaPSYlAofRQwTHGe22-INOrekE3zEYC5tpF1X0VzhKoYITEennXqmduJo2SwfWGZA-boMbNkw7xgaQNyXEvAEm75i6oaU21vSnN4xwKMF2Vef4KRy4Hb5ILXtaFXNsWAJFdtPhct0yDyroMPoO6-O300BxkEuWXVukAA5avm8_7iwZvuOJHwumiKr46bX",
        "Restaurant interior seating",
        "",
    ),
    (
        "https://lh3.googleusercontent.com/aida-public/AB6AXuD5RUptQJCmqc1KTW9TXQP027wdLHNTIhiu8O8g9l47Ly7GlRcLOhBidflrJk_B1NEa_nxZmInrioQwK_eEuHXUIgjztL4u2sO898dtK6R4tt0nMTygcvfA6b5F0fH1EZmP3_rg4zYwKaHcAG2BH7ZVP7u3FzIWrFhquhhbD0lKn5Mfxw15rbUr_C4mHMhIQ1AUd4K22KMp_tvwOn6BUgadNNyqHpT18mxC0zSoQ-BhKZhXo4RxaqoJRTI7Th8_sr5ibhVMp6t_Ewds",
        "Chef plating food",
        "",
    ),
    (
        "https://lh3.googleusercontent.com/aida-public/AB6AXuB0FDxe4lGS8ef940eqXVBbpZtardqbe1HfI4sz45fxYzy_N2u19USe0uytat3V3qxPCQ3fFsMmd2r5eKF6YsMVXBoffw_64kuClSed4g_AqSigJi0mgp4ds8zeN1w8XfwQtSTh_X2DMjmgqugVFSNFjViPAynrXBv7Ezh20Q96-aZ1S0SK1za2iAAMphYyChdEMdEv5DqQaAAXbS6NZBJFD5NyCsUkJnimxvTLW-FIQT6IVxigc-wf7x4lcpYSkCusZR6jDZdecEO_",
        "Cocktails at the bar",
        "",
    ),
];

/// Site settings written on a fresh install.
const SEED_SETTINGS: [(&str, &str); 6] = [
    ("address", "128 Noir Boulevard, Gastronomy District, Paris 75001"),
    ("phone", "+33 (0) 1 23 45 67 89"),
    ("email", "contact@easternoriental.com"),
    ("hours_mon_thu", "17:00 - 23:00"),
    ("hours_fri_sat", "17:00 - 01:00"),
    ("hours_sun", "Closed"),
];

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the connection string from
/// configuration, then automatically runs all pending SeaORM migrations to ensure the database
/// schema is up-to-date. This function must complete successfully before the application can
/// access the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(Error)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Inserts the initial menu, gallery and settings into empty tables.
///
/// Each table is seeded independently and only while it has no rows, so content the
/// admin later deletes is never brought back.
pub async fn seed_database(db: &DatabaseConnection) -> Result<(), AppError> {
    let menu_repo = MenuItemRepository::new(db);
    if menu_repo.count().await? == 0 {
        for (category, name, description, price) in SEED_MENU_ITEMS {
            menu_repo
                .create(SaveMenuItemParams {
                    category: category.to_string(),
                    name: name.to_string(),
                    description: description.to_string(),
                    price: price.to_string(),
                })
                .await?;
        }
        tracing::info!("Seeded {} menu items", SEED_MENU_ITEMS.len());
    }

    let gallery_repo = GalleryImageRepository::new(db);
    if gallery_repo.count().await? == 0 {
        for (url, alt, title) in SEED_GALLERY_IMAGES {
            gallery_repo
                .create(CreateGalleryImageParams {
                    url: url.to_string(),
                    alt: alt.to_string(),
                    title: title.to_string(),
                    filename: None,
                })
                .await?;
        }
        tracing::info!("Seeded {} gallery images", SEED_GALLERY_IMAGES.len());
    }

    let setting_repo = SettingRepository::new(db);
    if setting_repo.count().await? == 0 {
        setting_repo
            .upsert_many(
                SEED_SETTINGS
                    .iter()
                    .map(|(key, value)| (key.to_string(), value.to_string())),
            )
            .await?;
        tracing::info!("Seeded {} settings", SEED_SETTINGS.len());
    }

    Ok(())
}

/// Creates the configured admin account when the admin table is empty.
///
/// Logs a warning when the default password is in use so a forgotten
/// `ADMIN_PASSWORD` does not go unnoticed.
pub async fn check_for_admin(state: &AppState, config: &Config) -> Result<(), AppError> {
    let service = AuthService::new(&state.db, &state.jwt, state.refresh_token_ttl);

    if let Some(admin) = service
        .seed_admin(&config.admin_username, &config.admin_password)
        .await?
    {
        tracing::info!("Created admin account '{}'", admin.username);

        if config.uses_default_admin_password() {
            tracing::warn!(
                "Admin account uses the default password; change it after logging in"
            );
        }
    }

    Ok(())
}
