use bytes::Bytes;

pub const HEAD_MARKER: &str = "<<<<<<< HEAD\n";
pub const SEPARATOR_MARKER: &str = "=======\n";
pub const END_MARKER: &str = ">>>>>>>\n";

/// Working file content for a conflicting path
///
/// An absent side contributes no bytes.
pub fn render_conflict(head: Option<&[u8]>, other: Option<&[u8]>) -> Bytes {
    let head = head.unwrap_or_default();
    let other = other.unwrap_or_default();

    let mut content = Vec::with_capacity(
        HEAD_MARKER.len() + head.len() + SEPARATOR_MARKER.len() + other.len() + END_MARKER.len(),
    );
    content.extend_from_slice(HEAD_MARKER.as_bytes());
    content.extend_from_slice(head);
    content.extend_from_slice(SEPARATOR_MARKER.as_bytes());
    content.extend_from_slice(other);
    content.extend_from_slice(END_MARKER.as_bytes());

    Bytes::from(content)
}
