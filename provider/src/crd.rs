use crate::client::gvr;
use crate::client::ObjectGetter;
use crate::datasource::DataSource;
use crate::datasource::ProviderData;
use crate::datasource::ReadRequest;
use crate::datasource::ReadResponse;
use crate::diagnostics::Diagnostics;
use crate::errors::Error;
use crate::errors::ReadError;
use crate::schema;
use crate::schema::Schema;

use async_trait::async_trait;
use heck::ToSnakeCase;
use kube::api::ApiResource;
use kube::CustomResourceExt;
use kube::Resource;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde::Serialize;
use serde_json::Map;
use serde_json::Value;
use std::collections::BTreeMap;
use std::marker::PhantomData;
use std::sync::Arc;

/*
 * Anything kube-derive generated for a custom resource mirror.
 */
pub trait CrdKind: Resource<DynamicType = ()> + CustomResourceExt + DeserializeOwned + Serialize + Send + Sync + 'static {}

impl<K> CrdKind for K
where
    K: Resource<DynamicType = ()> + CustomResourceExt + DeserializeOwned + Serialize + Send + Sync + 'static,
{}

/*
 * Data source type name of a custom resource, for example
 * `k8s_ceph_rook_io_ceph_cluster_v1` for CephCluster in ceph.rook.io/v1.
 */
pub fn type_name<K: Resource<DynamicType = ()>>(provider_type_name: &str) -> String {
    let group = K::group(&()).replace(['.', '-'], "_");

    format!("{}_{}_{}_{}", provider_type_name, group, K::kind(&()).to_snake_case(), K::version(&()))
}

#[derive(Deserialize)]
struct ReadConfig {
    metadata: IdentityConfig,
}

#[derive(Deserialize)]
struct IdentityConfig {
    name: String,
    namespace: String,
}

/*
 * The object as it is published into state, still keyed by its Kubernetes
 * JSON names; `Schema::conform` renames and completes it.
 */
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct StateModel<'a> {
    id: String,
    api_version: String,
    kind: String,
    metadata: MetadataModel<'a>,
    spec: Value,
}

#[derive(Serialize)]
struct MetadataModel<'a> {
    name: &'a str,
    namespace: &'a str,

    #[serde(skip_serializing_if = "Option::is_none")]
    labels: Option<&'a BTreeMap<String, String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    annotations: Option<&'a BTreeMap<String, String>>,
}

/*
 * Collects the paths present (and non-null) in `raw` that did not survive
 * the typed decode, i.e. what the mirror does not know about.
 */
fn dropped_fields(raw: &Value, typed: &Value, path: &str, dropped: &mut Vec<String>) {
    match (raw, typed) {
	(Value::Object(raw), Value::Object(typed)) => {
	    for (key, value) in raw {
		if value.is_null() {
		    continue;
		}
		let child = format!("{}.{}", path, key);
		match typed.get(key) {
		    Some(kept) => dropped_fields(value, kept, &child, dropped),
		    None => dropped.push(child),
		}
	    }
	},
	(Value::Array(raw), Value::Array(typed)) => {
	    for (i, (value, kept)) in raw.iter().zip(typed.iter()).enumerate() {
		dropped_fields(value, kept, &format!("{}[{}]", path, i), dropped);
	    }
	},
	_ => {},
    }
}

/*
 * CrdDataSource reads one namespaced object of the custom resource `K`
 * and republishes it as state. Group, version and kind all come from `K`.
 */
pub struct CrdDataSource<K> {
    schema: Schema,
    resource: ApiResource,

    client: Option<Arc<dyn ObjectGetter>>,
    offline: bool,

    _kind: PhantomData<fn() -> K>,
}

impl<K: CrdKind> CrdDataSource<K> {

    pub fn new() -> Result<Self, Error> {
	let schema = schema::from_crd(&K::crd(), &K::version(&()))?;

	Ok(Self{
	    schema: schema,
	    resource: ApiResource::erase::<K>(&()),
	    client: None,
	    offline: false,
	    _kind: PhantomData,
	})
    }

    fn identity(&self, config: &Value) -> Result<IdentityConfig, ReadError> {
	let diagnostics = self.schema.validate_config(config);
	if diagnostics.has_error() {
	    return Err(ReadError::InvalidConfig(diagnostics.into_iter().collect()));
	}

	match serde_json::from_value::<ReadConfig>(config.clone()) {
	    Ok(cfg) => Ok(cfg.metadata),
	    Err(err) => {
		let mut diagnostics = Diagnostics::new();
		diagnostics.add_error("Invalid Configuration", format!("Unable to read the data source configuration: {}", err));
		Err(ReadError::InvalidConfig(diagnostics.into_iter().collect()))
	    }
	}
    }

    /*
     * The read itself: at most one GET, then marshal, typed decode and
     * state rendering. Returns the state and the dropped field paths.
     */
    async fn fetch(&self, config: &Value) -> Result<(Value, Vec<String>), ReadError> {
	if self.offline {
	    return Err(ReadError::Offline);
	}
	let client = self.client.as_ref().ok_or(ReadError::Unconfigured)?;
	let identity = self.identity(config)?;

	log::debug!("GET {} {}/{}", gvr(&self.resource), identity.namespace, identity.name);
	let object = match client.get(&self.resource, &identity.namespace, &identity.name).await {
	    Ok(object) => object,
	    Err(err) => {
		return Err(ReadError::Fetch{
		    resource: gvr(&self.resource),
		    source: err,
		});
	    }
	};

	let raw = serde_json::to_value(&object).map_err(ReadError::Marshal)?;

	// an object without a spec decodes as an empty one but keeps a null spec in state
	let has_spec = !raw["spec"].is_null();
	let mut decodable = raw.clone();
	if let (false, Value::Object(fields)) = (has_spec, &mut decodable) {
	    fields.insert(String::from("spec"), Value::Object(Map::new()));
	}

	let typed: K = serde_json::from_value(decodable).map_err(ReadError::Unmarshal)?;
	let typed_value = serde_json::to_value(&typed).map_err(ReadError::Marshal)?;

	let mut dropped = vec![];
	dropped_fields(&raw["spec"], &typed_value["spec"], "spec", &mut dropped);

	let meta = typed.meta();
	let model = StateModel{
	    id: format!("{}/{}", identity.name, identity.namespace),
	    api_version: K::api_version(&()).to_string(),
	    kind: K::kind(&()).to_string(),
	    metadata: MetadataModel{
		name: &identity.name,
		namespace: &identity.namespace,
		labels: meta.labels.as_ref(),
		annotations: meta.annotations.as_ref(),
	    },
	    spec: match has_spec {
		true => typed_value["spec"].clone(),
		false => Value::Null,
	    },
	};

	let model = serde_json::to_value(&model).map_err(ReadError::Marshal)?;
	let state = self.schema.conform(&model).map_err(|err| ReadError::State(err.to_string()))?;

	Ok((state, dropped))
    }
}

#[async_trait]
impl<K: CrdKind> DataSource for CrdDataSource<K> {

    fn metadata(&self, provider_type_name: &str) -> String {
	type_name::<K>(provider_type_name)
    }

    fn schema(&self) -> &Schema {
	&self.schema
    }

    fn configure(&mut self, data: Option<&ProviderData>) {
	if let Some(data) = data {
	    self.client = data.client.clone();
	    self.offline = data.offline;
	}
    }

    async fn read(&self, req: ReadRequest) -> ReadResponse {
	let (state, dropped) = match self.fetch(&req.config).await {
	    Ok(res) => res,
	    Err(err) => {
		log::debug!("read of {} failed: {}", K::kind(&()), err);
		return ReadResponse::failed(err.into_diagnostics().into());
	    }
	};

	let mut diagnostics = Diagnostics::new();
	if !dropped.is_empty() {
	    let id = state["id"].as_str().unwrap_or_default();
	    log::warn!("{} {} carries fields unknown to this data source: {}", K::kind(&()), id, dropped.join(", "));

	    diagnostics.add_warning(
		"Unknown fields dropped",
		format!(
		    "The {} {} carries fields this data source does not know about. \
		     They are not part of the state: {}",
		    K::kind(&()), id, dropped.join(", "),
		),
	    );
	}

	ReadResponse{
	    state: Some(state),
	    diagnostics: diagnostics,
	}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::fake::FakeGetter;
    use ceph_rook_api::CephBlockPool;
    use ceph_rook_api::CephCluster;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn rook_ceph() -> Value {
	json!({
	    "apiVersion": "ceph.rook.io/v1",
	    "kind": "CephCluster",
	    "metadata": {
		"name": "rook-ceph",
		"namespace": "rook-ceph",
		"labels": {"app": "rook-ceph"},
		"resourceVersion": "1234",
	    },
	    "spec": {"mon": {"count": 3}},
	    "status": {"phase": "Ready"},
	})
    }

    fn request(name: &str, namespace: &str) -> ReadRequest {
	ReadRequest{
	    config: json!({"metadata": {"name": name, "namespace": namespace}}),
	}
    }

    fn configured(getter: Arc<FakeGetter>) -> CrdDataSource<CephCluster> {
	let mut ds = CrdDataSource::<CephCluster>::new().unwrap();
	ds.configure(Some(&ProviderData::online(getter)));
	ds
    }

    #[test]
    fn type_names() {
	assert_eq!(type_name::<CephCluster>("k8s"), "k8s_ceph_rook_io_ceph_cluster_v1");
	assert_eq!(type_name::<CephBlockPool>("k8s"), "k8s_ceph_rook_io_ceph_block_pool_v1");
    }

    #[tokio::test]
    async fn reads_example_cluster() {
	let getter = Arc::new(FakeGetter::new().with_object("cephclusters", rook_ceph()));
	let ds = configured(getter.clone());

	let resp = ds.read(request("rook-ceph", "rook-ceph")).await;
	assert!(resp.diagnostics.is_empty(), "{:?}", resp.diagnostics);

	let state = resp.state.unwrap();
	assert_eq!(state["id"], json!("rook-ceph/rook-ceph"));
	assert_eq!(state["api_version"], json!("ceph.rook.io/v1"));
	assert_eq!(state["kind"], json!("CephCluster"));
	assert_eq!(state["metadata"]["labels"], json!({"app": "rook-ceph"}));
	assert_eq!(state["metadata"]["annotations"], Value::Null);
	assert_eq!(state["spec"]["mon"]["count"], json!(3));
	assert_eq!(state["spec"]["mon"]["allow_multiple_per_node"], Value::Null);
	assert_eq!(state["spec"]["storage"], Value::Null);
	assert_eq!(state["spec"]["data_dir_host_path"], Value::Null);
    }

    #[tokio::test]
    async fn id_is_name_then_namespace() {
	let mut object = rook_ceph();
	object["metadata"]["name"] = json!("my-cluster");
	object["metadata"]["namespace"] = json!("storage");
	let getter = Arc::new(FakeGetter::new().with_object("cephclusters", object));
	let ds = configured(getter);

	let state = ds.read(request("my-cluster", "storage")).await.state.unwrap();
	assert_eq!(state["id"], json!("my-cluster/storage"));
	assert_eq!(state["metadata"]["name"], json!("my-cluster"));
	assert_eq!(state["metadata"]["namespace"], json!("storage"));
    }

    #[tokio::test]
    async fn copies_fields_verbatim() {
	let mut object = rook_ceph();
	object["spec"] = json!({
	    "cephVersion": {"image": "quay.io/ceph/ceph:v18.2.2", "allowUnsupported": false},
	    "dataDirHostPath": "/var/lib/rook",
	    "mon": {"count": 3, "allowMultiplePerNode": false},
	    "network": {"connections": {"encryption": {"enabled": true}, "requireMsgr2": true}},
	    "storage": {"useAllNodes": true, "useAllDevices": false, "deviceFilter": "^sd."},
	    "placement": {"osd": {"tolerations": [{"key": "storage", "operator": "Exists", "effect": "NoSchedule"}]}},
	});
	let getter = Arc::new(FakeGetter::new().with_object("cephclusters", object));
	let ds = configured(getter);

	let state = ds.read(request("rook-ceph", "rook-ceph")).await.state.unwrap();
	let spec = &state["spec"];
	assert_eq!(spec["ceph_version"]["image"], json!("quay.io/ceph/ceph:v18.2.2"));
	assert_eq!(spec["ceph_version"]["allow_unsupported"], json!(false));
	assert_eq!(spec["data_dir_host_path"], json!("/var/lib/rook"));
	assert_eq!(spec["network"]["connections"]["encryption"]["enabled"], json!(true));
	assert_eq!(spec["network"]["connections"]["require_msgr2"], json!(true));
	assert_eq!(spec["storage"]["device_filter"], json!("^sd."));
	assert_eq!(spec["placement"]["osd"]["tolerations"][0]["effect"], json!("NoSchedule"));
    }

    #[tokio::test]
    async fn only_gets_once() {
	let getter = Arc::new(FakeGetter::new().with_object("cephclusters", rook_ceph()));
	let ds = configured(getter.clone());

	ds.read(request("rook-ceph", "rook-ceph")).await;
	assert_eq!(getter.calls(), vec![String::from("GET ceph.rook.io/v1/cephclusters/rook-ceph/rook-ceph")]);
    }

    #[tokio::test]
    async fn offline_short_circuits() {
	let getter = Arc::new(FakeGetter::new().with_object("cephclusters", rook_ceph()));
	let mut ds = configured(getter.clone());
	ds.configure(Some(&ProviderData{
	    client: Some(getter.clone()),
	    offline: true,
	}));

	let resp = ds.read(request("rook-ceph", "rook-ceph")).await;
	assert_eq!(resp.state, None);
	let diagnostic = resp.diagnostics.errors().next().unwrap();
	assert_eq!(diagnostic.summary, "Provider in Offline Mode");
	assert!(diagnostic.detail.contains("disable offline mode"));
	assert!(getter.calls().is_empty());
    }

    #[tokio::test]
    async fn unconfigured_is_an_error() {
	let ds = CrdDataSource::<CephCluster>::new().unwrap();

	let resp = ds.read(request("rook-ceph", "rook-ceph")).await;
	assert_eq!(resp.state, None);
	assert_eq!(resp.diagnostics.errors().next().unwrap().summary, "Unconfigured Kubernetes Client");
    }

    #[tokio::test]
    async fn configure_without_data_keeps_previous_client() {
	let getter = Arc::new(FakeGetter::new().with_object("cephclusters", rook_ceph()));
	let mut ds = configured(getter.clone());
	ds.configure(None);

	let resp = ds.read(request("rook-ceph", "rook-ceph")).await;
	assert!(resp.state.is_some());
    }

    #[tokio::test]
    async fn not_found_is_propagated() {
	let getter = Arc::new(FakeGetter::new());
	let ds = configured(getter.clone());

	let resp = ds.read(request("missing", "rook-ceph")).await;
	assert_eq!(resp.state, None);

	let diagnostic = resp.diagnostics.errors().next().unwrap();
	assert_eq!(diagnostic.summary, "Unable to GET resource");
	assert!(diagnostic.detail.contains("GET Error (ceph.rook.io/v1/cephclusters)"));
	assert!(diagnostic.detail.contains("cephclusters.ceph.rook.io \"missing\" not found"));
	assert_eq!(getter.calls().len(), 1);
    }

    #[tokio::test]
    async fn empty_identity_makes_no_call() {
	let getter = Arc::new(FakeGetter::new().with_object("cephclusters", rook_ceph()));
	let ds = configured(getter.clone());

	let resp = ds.read(request("", "rook-ceph")).await;
	assert_eq!(resp.state, None);
	let diagnostic = resp.diagnostics.errors().next().unwrap();
	assert_eq!(diagnostic.attribute.as_deref(), Some("metadata.name"));

	let resp = ds.read(ReadRequest{ config: json!({"metadata": {"name": "rook-ceph"}}) }).await;
	assert!(resp.diagnostics.has_error());
	assert!(getter.calls().is_empty());
    }

    #[tokio::test]
    async fn decode_failure_writes_no_state() {
	let mut object = rook_ceph();
	object["spec"]["mon"]["count"] = json!("three");
	let getter = Arc::new(FakeGetter::new().with_object("cephclusters", object));
	let ds = configured(getter);

	let resp = ds.read(request("rook-ceph", "rook-ceph")).await;
	assert_eq!(resp.state, None);
	let diagnostic = resp.diagnostics.errors().next().unwrap();
	assert_eq!(diagnostic.summary, "Unable to unmarshal resource");
	assert!(diagnostic.detail.contains("JSON Error"));
    }

    #[tokio::test]
    async fn unknown_fields_are_dropped_with_a_warning() {
	let mut object = rook_ceph();
	object["spec"] = json!({
	    "mon": {"count": 3, "futureKnob": true},
	    "mgr": {"modules": [{"name": "pg_autoscaler", "enabled": true, "extra": 1}]},
	    "brandNew": {"a": 1},
	    "nullIsFine": null,
	});
	let getter = Arc::new(FakeGetter::new().with_object("cephclusters", object));
	let ds = configured(getter);

	let resp = ds.read(request("rook-ceph", "rook-ceph")).await;
	assert!(!resp.diagnostics.has_error());

	let warning = resp.diagnostics.warnings().next().unwrap();
	assert_eq!(warning.summary, "Unknown fields dropped");
	assert!(warning.detail.contains("spec.brandNew"));
	assert!(warning.detail.contains("spec.mon.futureKnob"));
	assert!(warning.detail.contains("spec.mgr.modules[0].extra"));
	assert!(!warning.detail.contains("nullIsFine"));

	let state = resp.state.unwrap();
	assert_eq!(state["spec"]["mon"]["count"], json!(3));
	assert!(state["spec"].get("brandNew").is_none());
	assert_eq!(state["spec"]["mgr"]["modules"][0]["name"], json!("pg_autoscaler"));
    }

    #[tokio::test]
    async fn reads_are_idempotent() {
	let mut object = rook_ceph();
	object["spec"]["cephConfig"] = json!({"global": {"osd_pool_default_size": "3", "mon_warn_on_pool_no_redundancy": "false"}});
	object["spec"]["placement"] = json!({"mon": {}, "all": {"tolerations": []}});
	let getter = Arc::new(FakeGetter::new().with_object("cephclusters", object));
	let ds = configured(getter.clone());

	let first = ds.read(request("rook-ceph", "rook-ceph")).await.state.unwrap();
	let second = ds.read(request("rook-ceph", "rook-ceph")).await.state.unwrap();
	assert_eq!(serde_json::to_vec(&first).unwrap(), serde_json::to_vec(&second).unwrap());
	assert_eq!(getter.calls().len(), 2);
    }

    #[tokio::test]
    async fn reflects_cluster_changes_between_reads() {
	let getter = Arc::new(FakeGetter::new().with_object("cephclusters", rook_ceph()));
	let ds = configured(getter.clone());

	let before = ds.read(request("rook-ceph", "rook-ceph")).await.state.unwrap();
	let mut object = rook_ceph();
	object["spec"]["mon"]["count"] = json!(5);
	getter.replace("cephclusters", object);
	let after = ds.read(request("rook-ceph", "rook-ceph")).await.state.unwrap();

	assert_eq!(before["spec"]["mon"]["count"], json!(3));
	assert_eq!(after["spec"]["mon"]["count"], json!(5));
    }

    #[tokio::test]
    async fn volume_claim_template_holds_only_what_was_read() {
	let mut object = rook_ceph();
	object["spec"]["mon"]["volumeClaimTemplate"] = json!({"spec": {"storageClassName": "gp2"}});
	let getter = Arc::new(FakeGetter::new().with_object("cephclusters", object));
	let ds = configured(getter);

	let resp = ds.read(request("rook-ceph", "rook-ceph")).await;
	assert!(resp.diagnostics.is_empty(), "{:?}", resp.diagnostics);

	let state = resp.state.unwrap();
	let template = &state["spec"]["mon"]["volume_claim_template"];
	assert_eq!(template["metadata"], Value::Null);
	assert_eq!(template["spec"]["storage_class_name"], json!("gp2"));
	assert_eq!(template["spec"]["resources"], Value::Null);
	assert!(template.get("api_version").is_none());
	assert!(template.get("kind").is_none());
    }

    #[tokio::test]
    async fn numeric_quantities_read_as_strings() {
	let mut object = rook_ceph();
	object["spec"]["resources"] = json!({"mon": {"limits": {"cpu": 2, "memory": "2Gi"}, "requests": {"cpu": "500m"}}});
	let getter = Arc::new(FakeGetter::new().with_object("cephclusters", object));
	let ds = configured(getter);

	let resp = ds.read(request("rook-ceph", "rook-ceph")).await;
	assert!(resp.diagnostics.is_empty(), "{:?}", resp.diagnostics);

	let state = resp.state.unwrap();
	let mon = &state["spec"]["resources"]["mon"];
	assert_eq!(mon["limits"], json!({"cpu": "2", "memory": "2Gi"}));
	assert_eq!(mon["requests"], json!({"cpu": "500m"}));
	assert_eq!(mon["claims"], Value::Null);
    }

    #[tokio::test]
    async fn missing_spec_reads_as_null() {
	let mut object = rook_ceph();
	object.as_object_mut().unwrap().remove("spec");
	let getter = Arc::new(FakeGetter::new().with_object("cephclusters", object));
	let ds = configured(getter);

	let resp = ds.read(request("rook-ceph", "rook-ceph")).await;
	assert!(resp.diagnostics.is_empty(), "{:?}", resp.diagnostics);

	let state = resp.state.unwrap();
	assert_eq!(state["id"], json!("rook-ceph/rook-ceph"));
	assert_eq!(state["spec"], Value::Null);
    }

    #[tokio::test]
    async fn reads_block_pool() {
	let getter = Arc::new(FakeGetter::new().with_object("cephblockpools", json!({
	    "apiVersion": "ceph.rook.io/v1",
	    "kind": "CephBlockPool",
	    "metadata": {"name": "replicapool", "namespace": "rook-ceph"},
	    "spec": {"failureDomain": "host", "replicated": {"size": 3}},
	})));
	let mut ds = CrdDataSource::<CephBlockPool>::new().unwrap();
	ds.configure(Some(&ProviderData::online(getter.clone())));

	let state = ds.read(request("replicapool", "rook-ceph")).await.state.unwrap();
	assert_eq!(state["kind"], json!("CephBlockPool"));
	assert_eq!(state["spec"]["failure_domain"], json!("host"));
	assert_eq!(state["spec"]["replicated"]["size"], json!(3));
	assert_eq!(getter.calls(), vec![String::from("GET ceph.rook.io/v1/cephblockpools/rook-ceph/replicapool")]);
    }
}
