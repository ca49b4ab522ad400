//! Env-file updates for resolved contract addresses

use std::path::Path;

use crate::addresses::AddressBook;
use crate::casing::upper_snake_case;
use crate::error::Result;

/// Environment-variable key for a contract's deployed address
/// (`InvoiceVault` -> `VITE_INVOICE_VAULT_ADDRESS`).
pub fn env_key(name: &str) -> String {
    format!("VITE_{}_ADDRESS", upper_snake_case(name))
}

/// Upsert one `KEY=value` line into env-file content.
///
/// A line whose key matches exactly is replaced in place; otherwise the new
/// line is appended, preceded by a newline if the content does not already
/// end with one.
pub fn upsert_line(content: &str, key: &str, value: &str) -> String {
    let prefix = format!("{}=", key);
    let replacement = format!("{}={}", key, value);

    if content.lines().any(|line| line.starts_with(&prefix)) {
        let mut lines: Vec<String> = content
            .lines()
            .map(|line| {
                if line.starts_with(&prefix) {
                    replacement.clone()
                } else {
                    line.to_string()
                }
            })
            .collect();
        lines.push(String::new()); // keep trailing newline
        lines.join("\n")
    } else {
        let mut out = content.to_string();
        if !out.is_empty() && !out.ends_with('\n') {
            out.push('\n');
        }
        out.push_str(&replacement);
        out.push('\n');
        out
    }
}

/// Write one address line per book entry into the env file at `path`.
///
/// An absent file starts from empty content. Any other read failure is an
/// error: the file holds user-authored keys and must never be rewritten from
/// a partial or unreadable state. The caller is expected to skip this step
/// entirely when the book is empty.
pub fn sync_env_file(path: &Path, book: &AddressBook) -> Result<()> {
    let mut content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => String::new(),
        Err(e) => return Err(e.into()),
    };

    for (name, address) in book.iter() {
        content = upsert_line(&content, &env_key(name), address);
    }

    std::fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_key() {
        assert_eq!(env_key("InvoiceVault"), "VITE_INVOICE_VAULT_ADDRESS");
        assert_eq!(env_key("MockUSDC"), "VITE_MOCK_U_S_D_C_ADDRESS");
    }

    #[test]
    fn test_upsert_replaces_in_place() {
        let content = "VITE_FOO_ADDRESS=0x111\nVITE_BAR_ADDRESS=0x333\n";
        let updated = upsert_line(content, "VITE_FOO_ADDRESS", "0x222");
        assert_eq!(
            updated,
            "VITE_FOO_ADDRESS=0x222\nVITE_BAR_ADDRESS=0x333\n"
        );
    }

    #[test]
    fn test_upsert_does_not_duplicate() {
        let content = "VITE_FOO_ADDRESS=0x111\n";
        let updated = upsert_line(content, "VITE_FOO_ADDRESS", "0x222");
        assert_eq!(updated.matches("VITE_FOO_ADDRESS").count(), 1);
    }

    #[test]
    fn test_upsert_appends_missing_key() {
        let content = "VITE_FOO_ADDRESS=0x111\n";
        let updated = upsert_line(content, "VITE_BAR_ADDRESS", "0x222");
        assert_eq!(
            updated,
            "VITE_FOO_ADDRESS=0x111\nVITE_BAR_ADDRESS=0x222\n"
        );
    }

    #[test]
    fn test_upsert_adds_newline_before_append() {
        let content = "VITE_FOO_ADDRESS=0x111";
        let updated = upsert_line(content, "VITE_BAR_ADDRESS", "0x222");
        assert_eq!(
            updated,
            "VITE_FOO_ADDRESS=0x111\nVITE_BAR_ADDRESS=0x222\n"
        );
    }

    #[test]
    fn test_upsert_into_empty_content() {
        let updated = upsert_line("", "VITE_FOO_ADDRESS", "0x1");
        assert_eq!(updated, "VITE_FOO_ADDRESS=0x1\n");
    }

    #[test]
    fn test_anchored_match_ignores_similar_keys() {
        let content = "VITE_FOO_ADDRESS_OLD=0x111\n";
        let updated = upsert_line(content, "VITE_FOO_ADDRESS", "0x222");
        assert!(updated.contains("VITE_FOO_ADDRESS_OLD=0x111"));
        assert!(updated.contains("VITE_FOO_ADDRESS=0x222"));
    }

    #[test]
    fn test_sync_env_file_preserves_unrelated_keys() {
        let dir = tempfile::tempdir().unwrap();
        let env_path = dir.path().join(".env");
        std::fs::write(&env_path, "SOME_API_KEY=s3cr3t\n").unwrap();

        let mut book = AddressBook::new();
        book.apply_override("--Foo=0x1");
        sync_env_file(&env_path, &book).unwrap();

        let after = std::fs::read_to_string(&env_path).unwrap();
        assert!(after.contains("SOME_API_KEY=s3cr3t"));
        assert!(after.contains("VITE_FOO_ADDRESS=0x1"));
    }

    #[test]
    fn test_sync_env_file_unreadable_content_is_error_not_wipe() {
        let dir = tempfile::tempdir().unwrap();
        let env_path = dir.path().join(".env");
        let original = b"SOME_API_KEY=s3cr3t\nBINARY=\xff\xfe\n";
        std::fs::write(&env_path, original).unwrap();

        let mut book = AddressBook::new();
        book.apply_override("--Foo=0x1");
        let result = sync_env_file(&env_path, &book);

        assert!(result.is_err());
        assert_eq!(std::fs::read(&env_path).unwrap(), original);
    }

    #[test]
    fn test_sync_env_file_creates_and_updates() {
        let dir = tempfile::tempdir().unwrap();
        let env_path = dir.path().join(".env");

        let mut book = AddressBook::new();
        book.apply_override("--Foo=0x111");
        sync_env_file(&env_path, &book).unwrap();
        assert_eq!(
            std::fs::read_to_string(&env_path).unwrap(),
            "VITE_FOO_ADDRESS=0x111\n"
        );

        let mut book = AddressBook::new();
        book.apply_override("--Foo=0x222");
        book.apply_override("--Bar=0x333");
        sync_env_file(&env_path, &book).unwrap();
        assert_eq!(
            std::fs::read_to_string(&env_path).unwrap(),
            "VITE_FOO_ADDRESS=0x222\nVITE_BAR_ADDRESS=0x333\n"
        );
    }
}
