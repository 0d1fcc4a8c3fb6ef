//! Kit generation behind `kitgen`.

use std::io::Write;

use anyhow::Result;
use log::debug;
use typekit::{Client, FamilySelection, FamilySpec, Transport, config::DEFAULT_DOMAIN};

use crate::{cli::KitgenCli, error::UsageError};

/// What to create, with defaults applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KitPlan {
    pub name: String,
    pub domains: Vec<String>,
    pub families: Vec<FamilySpec>,
}

impl KitPlan {
    /// Validate arguments and fill in defaults.
    ///
    /// Domains default to `localhost`, the name to the first domain.
    pub fn new<S: AsRef<str>>(
        name: Option<&str>,
        domains: &[String],
        families: &[S],
    ) -> Result<Self, UsageError> {
        if families.is_empty() {
            return Err(UsageError::MissingFamily);
        }
        let families = families
            .iter()
            .map(|family| family.as_ref().parse())
            .collect::<Result<Vec<FamilySpec>, _>>()?;

        let domains = if domains.is_empty() {
            vec![DEFAULT_DOMAIN.to_owned()]
        } else {
            domains.to_vec()
        };
        let name = match name.filter(|name| !name.is_empty()) {
            Some(name) => name.to_owned(),
            None => domains[0].clone(),
        };

        Ok(Self {
            name,
            domains,
            families,
        })
    }

    pub fn from_cli(cli: &KitgenCli) -> Result<Self, UsageError> {
        Self::new(cli.name.as_deref(), &cli.domains, &cli.families)
    }
}

/// Resolve every family slug, in order, failing on the first unknown one.
pub fn resolve_families<T: Transport>(
    client: &Client<T>,
    families: &[FamilySpec],
) -> typekit::Result<Vec<FamilySelection>> {
    families
        .iter()
        .map(|spec| client.family_id(&spec.slug).map(|id| spec.resolved(id)))
        .collect()
}

/// Resolve families, create the kit, attach the families, and report the kit ID.
pub fn generate<T: Transport, W: Write>(
    client: &Client<T>,
    plan: &KitPlan,
    out: &mut W,
) -> Result<String> {
    debug!("  name is {}", plan.name);
    debug!("  domains are {}", plan.domains.join(" "));

    let families = resolve_families(client, &plan.families)?;
    debug!("processed families are {}", join_display(&families));

    let kit_id = client.create_kit(&plan.name, &plan.domains)?;
    client.add_families(&kit_id, &families)?;

    writeln!(out, "Kit created; id is {kit_id}")?;
    Ok(kit_id)
}

/// Entry point of the `kitgen` binary after argument parsing.
pub fn run<W: Write>(cli: &KitgenCli, out: &mut W) -> Result<String> {
    let config = cli.api.client_config()?;
    let plan = KitPlan::from_cli(cli)?;
    debug!("parsed options");
    debug!("  families are {}", cli.families.join(" "));

    let client = Client::new(config)?;
    generate(&client, &plan, out)
}

fn join_display(families: &[FamilySelection]) -> String {
    families.iter().map(ToString::to_string).collect::<Vec<_>>().join(" ")
}
