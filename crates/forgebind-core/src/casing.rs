//! Name transforms for generated exports and environment keys

/// Lower-case the first character of a contract name for a camelCase export
/// (`IdentityRegistry` -> `identityRegistry`).
pub fn camel_case(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Upper-snake-case a contract name for address constants and env keys.
///
/// The transform is naive: it inserts a separator before every uppercase
/// letter, upper-cases the whole string, and strips one leading separator.
/// Consecutive capitals therefore each get their own separator
/// (`MockUSDC` -> `MOCK_U_S_D_C`). Frontends already consume env keys in
/// this shape, so the behavior is pinned and must not be "fixed" to an
/// acronym-aware form.
pub fn upper_snake_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len() * 2);
    for c in name.chars() {
        if c.is_uppercase() {
            out.push('_');
        }
        for u in c.to_uppercase() {
            out.push(u);
        }
    }
    out.strip_prefix('_').map(str::to_string).unwrap_or(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camel_case() {
        assert_eq!(camel_case("IdentityRegistry"), "identityRegistry");
        assert_eq!(camel_case("InvoiceVault"), "invoiceVault");
        assert_eq!(camel_case("already"), "already");
        assert_eq!(camel_case(""), "");
    }

    #[test]
    fn test_upper_snake_case() {
        assert_eq!(upper_snake_case("IdentityRegistry"), "IDENTITY_REGISTRY");
        assert_eq!(upper_snake_case("InvoiceToken"), "INVOICE_TOKEN");
        assert_eq!(upper_snake_case("token"), "TOKEN");
    }

    #[test]
    fn test_upper_snake_case_consecutive_capitals() {
        // Pinned quirk: one separator before every capital letter.
        assert_eq!(upper_snake_case("MockUSDC"), "MOCK_U_S_D_C");
        assert_eq!(upper_snake_case("USDC"), "U_S_D_C");
    }

    #[test]
    fn test_upper_snake_case_single_word() {
        assert_eq!(upper_snake_case("Vault"), "VAULT");
        assert_eq!(upper_snake_case(""), "");
    }
}
