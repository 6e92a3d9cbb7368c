//! Handler for the `sites` command.

use super::command::SitesArgs;
use crate::error::Result;
use crate::infrastructure::config::settings::Config;

/// Execute `sites`.
pub fn execute(args: &SitesArgs, config: &Config) -> Result<()> {
    let registry = config.registry();
    if args.json {
        let sites: Vec<_> = registry.iter().collect();
        println!("{}", serde_json::to_string_pretty(&sites)?);
        return Ok(());
    }

    println!("{:<12} {:<12} DOMAINS", "ID", "NAME");
    for site in registry.iter() {
        let domains = std::iter::once(site.domain.as_str())
            .chain(site.mirrors.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(", ");
        println!("{:<12} {:<12} {domains}", site.id.as_str(), site.name);
    }
    Ok(())
}
