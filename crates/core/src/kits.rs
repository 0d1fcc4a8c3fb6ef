//! Kit operations layered on [`Client::request`].

use serde_json::Value;

use crate::{
    client::Client,
    error::{Error, Result},
    transport::{Method, Transport},
    types::{FamilyEnvelope, FamilySelection, KitEnvelope, KitList},
};

impl<T: Transport> Client<T> {
    /// `GET /kits`.
    pub fn list_kits(&self) -> Result<KitList> {
        self.request_as(Method::Get, "/kits", &[])
    }

    /// `GET /kits/{id}`.
    pub fn kit(&self, id: &str) -> Result<KitEnvelope> {
        self.request_as(Method::Get, &format!("/kits/{id}"), &[])
    }

    /// `DELETE /kits/{id}`.
    pub fn delete_kit(&self, id: &str) -> Result<()> {
        self.request(Method::Delete, &format!("/kits/{id}"), &[]).map(drop)
    }

    /// Create a kit and return its ID.
    ///
    /// Domains are sent comma-joined, e.g. `example.com,example.org`.
    pub fn create_kit<S: AsRef<str>>(&self, name: &str, domains: &[S]) -> Result<String> {
        let domains = domains
            .iter()
            .map(AsRef::as_ref)
            .collect::<Vec<_>>()
            .join(",");
        let form = [("name", name), ("domains", domains.as_str())];
        let data = self.request(Method::Post, "/kits", &form)?;
        string_at(&data, "/kit/id").ok_or(Error::MissingField("kit.id"))
    }

    /// Attach one family to a kit.
    ///
    /// Note: the default character subset cannot be overridden.
    pub fn add_family(&self, kit_id: &str, family: &FamilySelection) -> Result<()> {
        let path = format!("/kits/{kit_id}/families/{}", family.id);
        let form = match family.variations.as_deref() {
            Some(variations) => vec![("variations", variations)],
            None => Vec::new(),
        };
        self.request(Method::Post, &path, &form).map(drop)
    }

    /// Attach families in order, stopping at the first failure.
    ///
    /// Families already attached stay attached when a later one fails.
    pub fn add_families(&self, kit_id: &str, families: &[FamilySelection]) -> Result<()> {
        families.iter().try_for_each(|family| self.add_family(kit_id, family))
    }

    /// Resolve a family slug such as `droid-sans` to its family ID.
    pub fn family_id(&self, slug: &str) -> Result<String> {
        let data = self.request(Method::Get, &format!("/families/{slug}"), &[])?;
        let envelope: FamilyEnvelope = serde_json::from_value(data).unwrap_or_default();
        envelope
            .family
            .and_then(|family| family.id)
            .filter(|id| !id.is_empty())
            .ok_or_else(|| Error::FamilyNotFound(slug.to_owned()))
    }
}

fn string_at(data: &Value, pointer: &str) -> Option<String> {
    data.pointer(pointer).and_then(Value::as_str).map(str::to_owned)
}
