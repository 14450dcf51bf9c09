mod admin_user;
mod contact;
mod faq;
mod gallery_image;
mod menu_item;
mod menu_pdf;
mod refresh_token;
mod setting;
