use chrono::Duration;

use crate::server::util::jwt::JwtKeys;

mod gallery;
mod menu_pdf;

const SECRET: &str = "0123456789abcdef0123456789abcdef";

fn jwt_keys() -> JwtKeys {
    JwtKeys::new(SECRET, Duration::minutes(15))
}
