mod exchange;
mod logout;
mod me;
mod redirect;

pub use exchange::*;
pub use logout::*;
pub use me::*;
pub use redirect::*;

use crate::configuration::SessionSettings;
use actix_web::cookie::{time::Duration, Cookie, SameSite};

/// Session cookie as the browser must store it: script-invisible, sent cross-site over TLS.
fn session_cookie(settings: &SessionSettings, value: String, max_age: Duration) -> Cookie<'static> {
    Cookie::build(settings.cookie_name.clone(), value)
        .http_only(true)
        .path("/")
        .same_site(SameSite::None)
        .secure(true)
        .max_age(max_age)
        .finish()
}
