use toml_edit::{DocumentMut, Item, Value};

/// Helpers for reading and editing string fields inside a TOML document
/// without disturbing the surrounding formatting.
pub struct TomlUtils;

impl TomlUtils {
    /// Returns the string stored at `table.key`, whether `table` is a standard,
    /// inline, or dotted table.
    pub fn nested_str<'a>(doc: &'a DocumentMut, table: &str, key: &str) -> Option<&'a str> {
        doc.get(table)
            .and_then(|item| item.as_table_like())
            .and_then(|t| t.get(key))
            .and_then(|item| item.as_str())
    }

    /// Mutable access to `table.key`, regardless of table style.
    pub fn nested_item_mut<'a>(
        doc: &'a mut DocumentMut,
        table: &str,
        key: &str,
    ) -> Option<&'a mut Item> {
        doc.get_mut(table)
            .and_then(|item| item.as_table_like_mut())
            .and_then(|t| t.get_mut(key))
    }

    /// Replaces a string value in place, keeping its decor (surrounding whitespace and
    /// trailing comment). Returns false when the item is not a string.
    pub fn replace_str(item: &mut Item, new_value: &str) -> bool {
        let Some(value) = item.as_value_mut() else {
            return false;
        };
        if !value.is_str() {
            return false;
        }

        let decor = value.decor().clone();
        *value = Value::from(new_value);
        *value.decor_mut() = decor;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_version_from_standard_table() {
        let doc: DocumentMut = "[package]\nname = \"app\"\nversion = \"1.0.0\"\n"
            .parse()
            .unwrap();
        assert_eq!(TomlUtils::nested_str(&doc, "package", "version"), Some("1.0.0"));
    }

    #[test]
    fn reads_version_from_inline_and_dotted_tables() {
        let inline: DocumentMut = r#"package = { name = "app", version = "2.1.0" }"#
            .parse()
            .unwrap();
        assert_eq!(
            TomlUtils::nested_str(&inline, "package", "version"),
            Some("2.1.0")
        );

        let dotted: DocumentMut = "package.version = \"0.3.1\"\n".parse().unwrap();
        assert_eq!(
            TomlUtils::nested_str(&dotted, "package", "version"),
            Some("0.3.1")
        );
    }

    #[test]
    fn non_string_version_is_not_a_str() {
        let doc: DocumentMut = "[package]\nversion.workspace = true\n".parse().unwrap();
        assert_eq!(TomlUtils::nested_str(&doc, "package", "version"), None);

        let mut doc = doc;
        let item = TomlUtils::nested_item_mut(&mut doc, "package", "version").unwrap();
        assert!(!TomlUtils::replace_str(item, "1.0.0"));
    }

    #[test]
    fn replace_keeps_trailing_comment() {
        let mut doc: DocumentMut = "[package]\nversion = \"1.0.0\" # keep me\nedition = \"2021\"\n"
            .parse()
            .unwrap();
        let item = TomlUtils::nested_item_mut(&mut doc, "package", "version").unwrap();
        assert!(TomlUtils::replace_str(item, "1.1.0"));
        assert_eq!(
            doc.to_string(),
            "[package]\nversion = \"1.1.0\" # keep me\nedition = \"2021\"\n"
        );
    }
}
