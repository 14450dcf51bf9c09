pub use super::admin_user::Entity as AdminUser;
pub use super::contact::Entity as Contact;
pub use super::faq::Entity as Faq;
pub use super::gallery_image::Entity as GalleryImage;
pub use super::menu_item::Entity as MenuItem;
pub use super::menu_pdf::Entity as MenuPdf;
pub use super::refresh_token::Entity as RefreshToken;
pub use super::reservation::Entity as Reservation;
pub use super::setting::Entity as Setting;
