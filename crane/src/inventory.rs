//! Pure reshaping of registry applications into Ansible inventory form.
//! No I/O; everything operates on the list one fetch produced.

use crate::registry::{Application, Instance};
use serde_json::{Map, Value, json};

/// Reserved Ansible top-level key carrying per-host variables.
pub const META_KEY: &str = "_meta";

const HOSTNAME_KEY: &str = "hostName";

/// One group per application, keyed by application name, holding the ordered
/// `hostName` list of its instances. A repeated application name replaces
/// the earlier group wholesale; nothing is merged. Real registries are not
/// expected to produce duplicate names, so treat an overwrite seen in the
/// wild as a registry anomaly worth investigating.
pub fn host_groups(applications: &[Application]) -> Map<String, Value> {
    let mut groups = Map::new();
    for app in applications {
        let hosts: Vec<&str> = app.instances.iter().filter_map(host_name).collect();
        groups.insert(app.name.clone(), json!({ "hosts": hosts }));
    }
    groups
}

/// Flattens every instance (applications in input order, then instances in
/// input order) and keys the result by `hostName`, records kept verbatim.
/// Later duplicates overwrite earlier ones — a known sharp edge: two
/// applications sharing a hostname leave only the later record's variables
/// visible to the inventory consumer.
pub fn host_metadata(applications: &[Application]) -> Map<String, Value> {
    let mut hostvars = Map::new();
    for instance in flatten(applications) {
        if let Some(name) = host_name(instance) {
            hostvars.insert(name.to_string(), Value::Object(instance.clone()));
        }
    }
    hostvars
}

/// First instance in flattened order whose `hostName` matches, if any.
/// An unknown hostname is not an error.
pub fn find_host<'a>(applications: &'a [Application], hostname: &str) -> Option<&'a Instance> {
    flatten(applications).find(|instance| host_name(instance) == Some(hostname))
}

/// The full dynamic-inventory document: every group plus the reserved
/// `_meta.hostvars` map. `_meta` is inserted last, so a group literally
/// named `_meta` loses to the metadata.
pub fn inventory_document(applications: &[Application]) -> Map<String, Value> {
    let mut document = host_groups(applications);
    document.insert(
        META_KEY.to_string(),
        json!({ "hostvars": host_metadata(applications) }),
    );
    document
}

fn flatten(applications: &[Application]) -> impl Iterator<Item = &Instance> {
    applications.iter().flat_map(|app| app.instances.iter())
}

fn host_name(instance: &Instance) -> Option<&str> {
    instance.get(HOSTNAME_KEY).and_then(Value::as_str)
}
