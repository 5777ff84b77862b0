//! Implementation of the `osgi-validator prefixes` command.

use crate::cli::PrefixesArgs;
use crate::error::{Result, ValidatorError};
use crate::prefix::create_allowed_prefixes;

/// Print every allowed prefix, one per line, in derivation order.
pub fn cmd_prefixes(args: PrefixesArgs) -> Result<()> {
    for prefix in allowed_prefixes(&args)? {
        println!("{}", prefix);
    }
    Ok(())
}

fn allowed_prefixes(args: &PrefixesArgs) -> Result<Vec<String>> {
    if args.group_id.trim().is_empty() || args.artifact_id.trim().is_empty() {
        return Err(ValidatorError::ConfigurationError(
            "group id and artifact id must not be empty".to_string(),
        ));
    }

    let parts: Vec<String> = args
        .package_parts_to_skip
        .iter()
        .filter(|p| !p.is_empty())
        .cloned()
        .collect();

    Ok(create_allowed_prefixes(&args.group_id, &args.artifact_id, &parts))
}
