use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::OffsetDateTime;

use crate::types::Cookie;

// RFC 6265 expects the IMF-fixdate form, e.g. "Tue, 14 Nov 2023 22:13:20 GMT".
const IMF_FIXDATE: &[BorrowedFormatItem<'static>] = format_description!(
    "[weekday repr:short], [day] [month repr:short] [year] [hour]:[minute]:[second] GMT"
);

/// Renders the cookie as a `Set-Cookie` header value with RFC 6265 attribute
/// names. The domain attribute is emitted verbatim; it is already canonical
/// by the time it is stored on the cookie.
pub fn set_cookie_header(cookie: &Cookie) -> String {
    let mut header = format!("{}={}", cookie.name(), cookie.value());
    if let Some(date) = http_date(cookie.expires_at()) {
        header.push_str("; Expires=");
        header.push_str(&date);
    }
    header.push_str("; Path=");
    header.push_str(cookie.path());
    if let Some(domain) = cookie.domain() {
        header.push_str("; Domain=");
        header.push_str(domain);
    }
    if cookie.is_secure() {
        header.push_str("; Secure");
    }
    if cookie.is_http_only() {
        header.push_str("; HttpOnly");
    }
    header
}

/// Timestamps outside the representable range yield `None` and the Expires
/// attribute is simply omitted.
fn http_date(timestamp: i64) -> Option<String> {
    let datetime = OffsetDateTime::from_unix_timestamp(timestamp).ok()?;
    datetime.format(IMF_FIXDATE).ok()
}
