// `application/x-www-form-urlencoded` body with a single `file1` field.

pub const FIELD_NAME: &str = "file1";
pub const CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Encode raw file bytes as `file1=<escaped bytes>`. Works on bytes rather
/// than `&str` so non-UTF-8 files are sent unchanged.
pub fn encode(contents: &[u8]) -> String {
    let mut body = String::with_capacity(FIELD_NAME.len() + 1 + contents.len());
    body.push_str(FIELD_NAME);
    body.push('=');
    body.extend(form_urlencoded::byte_serialize(contents));
    body
}
