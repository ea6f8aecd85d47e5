//! Label text for custom objects.

/// Build the label shown next to a custom object.
///
/// The first line is the name; catalog name, date and comments follow on
/// their own lines, in that order, when present.
pub fn compose_label(
    name: &str,
    catalog_name: Option<&str>,
    baptism_date: Option<&str>,
    comments: Option<&str>,
) -> String {
    let mut text = String::from(name);
    for (prefix, value) in [
        ("Cat", catalog_name),
        ("Date", baptism_date),
        ("Comments", comments),
    ] {
        if let Some(value) = value {
            text.push('\n');
            text.push_str(prefix);
            text.push_str(": ");
            text.push_str(value);
        }
    }
    text
}
