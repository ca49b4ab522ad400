//! Rendering of generated TypeScript modules
//!
//! Output shape is fixed by the consuming frontend: one `<camelName>ABI.ts`
//! module per contract and a single `contracts.ts` aggregate. ABI entries are
//! re-serialized verbatim, never interpreted.

use crate::addresses::AddressBook;
use crate::casing::{camel_case, upper_snake_case};
use crate::error::Result;

/// A contract that survived filtering and carries a usable ABI.
#[derive(Debug, Clone)]
pub struct ProcessedContract {
    pub name: String,
    pub abi: serde_json::Value,
}

/// Exported constant name for a contract's binding (`InvoiceVault` ->
/// `invoiceVaultABI`).
pub fn binding_export_name(name: &str) -> String {
    format!("{}ABI", camel_case(name))
}

/// File name of a contract's binding module.
pub fn binding_file_name(name: &str) -> String {
    format!("{}ABI.ts", camel_case(name))
}

/// File name of the aggregate module.
pub const AGGREGATE_FILE_NAME: &str = "contracts.ts";

/// RFC 3339 UTC timestamp for the aggregate header.
pub fn generation_timestamp() -> String {
    chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true)
}

/// Render one binding module exporting the contract's ABI as a const.
pub fn render_binding_module(contract: &ProcessedContract) -> Result<String> {
    let abi_json = serde_json::to_string_pretty(&contract.abi)?;
    Ok(format!(
        "export const {} =\n{} as const;\n",
        binding_export_name(&contract.name),
        abi_json
    ))
}

/// Render the aggregate module combining every processed contract's address
/// and ABI reference, plus one exported address constant per contract.
///
/// Contracts with no resolved address get the empty string; address
/// resolution is best-effort and never blocks generation.
pub fn render_aggregate_module(
    contracts: &[ProcessedContract],
    addresses: &AddressBook,
    generated_at: &str,
) -> String {
    let mut out = String::new();
    out.push_str("// Auto-generated contract configuration\n");
    out.push_str(&format!("// Generated on: {}\n", generated_at));

    for contract in contracts {
        // Module file name (sans extension) matches the export name
        let export = binding_export_name(&contract.name);
        out.push_str(&format!("import {{ {} }} from './{}';\n", export, export));
    }

    out.push_str("\nexport const contracts = {\n");
    for contract in contracts {
        let address = addresses.get(&contract.name).unwrap_or("");
        out.push_str(&format!("  {}: {{\n", contract.name));
        out.push_str(&format!(
            "    address: '{}' as `0x${{string}}`,\n",
            address
        ));
        out.push_str(&format!("    abi: {},\n", binding_export_name(&contract.name)));
        out.push_str("  },\n");
    }
    out.push_str("} as const;\n");

    out.push_str("\n// Export individual addresses for convenience\n");
    for contract in contracts {
        let address = addresses.get(&contract.name).unwrap_or("");
        out.push_str(&format!(
            "export const {}_ADDRESS = '{}' as `0x${{string}}`;\n",
            upper_snake_case(&contract.name),
            address
        ));
    }

    out
}
