use anyhow::Result;

use fetchnodes::{CachePolicy, NodeRegistry};

pub fn cmd_list(registry: &NodeRegistry) {
    println!("📦 {} nodes registered\n", registry.len());

    for descriptor in registry.descriptors() {
        let cache = match descriptor.cache {
            CachePolicy::Inputs => "cached",
            CachePolicy::AlwaysRerun => "always re-run",
        };
        println!(
            "{:<22} {} [{}] ({cache})",
            descriptor.id, descriptor.display_name, descriptor.category
        );

        let inputs: Vec<_> = descriptor
            .inputs
            .iter()
            .map(|i| format!("{}: {}", i.name, i.kind))
            .collect();
        let outputs: Vec<_> = descriptor
            .outputs
            .iter()
            .map(|o| format!("{} {}", o.kind, o.name))
            .collect();
        println!("    in:  {}", inputs.join(", "));
        println!("    out: {}", outputs.join(", "));
    }
}

pub fn cmd_manifest(registry: &NodeRegistry) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(&registry.manifest())?);
    Ok(())
}
