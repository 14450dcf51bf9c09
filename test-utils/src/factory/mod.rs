//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests.
//!
//! # Overview
//!
//! Each entity has its own factory module with both a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     let reservation = factory::create_reservation(&db).await?;
//!     let faq = factory::faq::FaqFactory::new(&db)
//!         .question("Do you take walk-ins?")
//!         .active(false)
//!         .build()
//!         .await?;
//!
//!     Ok(())
//! }
//! ```

pub mod admin_user;
pub mod contact;
pub mod faq;
pub mod gallery_image;
pub mod helpers;
pub mod menu_item;
pub mod menu_pdf;
pub mod reservation;
pub mod setting;

pub use admin_user::create_admin_user;
pub use contact::create_contact;
pub use faq::create_faq;
pub use gallery_image::create_gallery_image;
pub use menu_item::create_menu_item;
pub use menu_pdf::create_menu_pdf;
pub use reservation::create_reservation;
pub use setting::create_setting;
