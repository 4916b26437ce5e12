use crate::client::ObjectGetter;
use crate::config::ProviderConfig;
use crate::config::PROVIDER_TYPE_NAME;
use crate::crd::CrdDataSource;
use crate::datasource::DataSource;
use crate::datasource::ProviderData;
use crate::datasource::ReadRequest;
use crate::datasource::ReadResponse;
use crate::diagnostics::Diagnostic;
use crate::errors::Error;

use ceph_rook_api::CephBlockPool;
use ceph_rook_api::CephCluster;
use std::collections::BTreeMap;
use std::sync::Arc;

/*
 * Provider owns one instance of every supported data source, keyed by
 * type name, and wires the kubernetes client into them.
 */
pub struct Provider {
    config: ProviderConfig,
    data_sources: BTreeMap<String, Box<dyn DataSource>>,
}

impl Provider {

    /*
     * Registers all data sources. Their schemas are generated here, once.
     */
    pub fn new(config: ProviderConfig) -> Result<Self, Error> {
	let mut provider = Self{
	    config: config,
	    data_sources: BTreeMap::new(),
	};

	provider.register(Box::new(CrdDataSource::<CephCluster>::new()?));
	provider.register(Box::new(CrdDataSource::<CephBlockPool>::new()?));
	Ok(provider)
    }

    fn register(&mut self, data_source: Box<dyn DataSource>) {
	let type_name = data_source.metadata(PROVIDER_TYPE_NAME);

	log::debug!("registering data source {}", type_name);
	self.data_sources.insert(type_name, data_source);
    }

    pub fn config(&self) -> &ProviderConfig {
	&self.config
    }

    pub fn type_names(&self) -> Vec<&str> {
	self.data_sources.keys().map(String::as_str).collect()
    }

    pub fn data_source(&self, type_name: &str) -> Option<&dyn DataSource> {
	self.data_sources.get(type_name).map(|ds| ds.as_ref())
    }

    /*
     * Builds the kubernetes client from the provider configuration (none
     * when offline) and hands it to every data source.
     */
    pub async fn configure(&mut self) -> Result<(), Error> {
	let data = match self.config.client().await? {
	    Some(client) => ProviderData::online(Arc::new(client)),
	    None => ProviderData::offline(),
	};

	self.configure_with(data);
	Ok(())
    }

    /*
     * Same as configure(), with an already built client handle.
     */
    pub fn configure_with(&mut self, data: ProviderData) {
	for data_source in self.data_sources.values_mut() {
	    data_source.configure(Some(&data));
	}
    }

    pub fn configure_client(&mut self, client: Arc<dyn ObjectGetter>) {
	let data = match self.config.offline {
	    true => ProviderData::offline(),
	    false => ProviderData::online(client),
	};

	self.configure_with(data);
    }

    /*
     * Reads through the data source registered under `type_name`.
     */
    pub async fn read(&self, type_name: &str, req: ReadRequest) -> ReadResponse {
	match self.data_source(type_name) {
	    Some(data_source) => data_source.read(req).await,
	    None => {
		let detail = format!(
		    "The provider does not support data source \"{}\". Supported data sources: {}",
		    type_name,
		    self.type_names().join(", "),
		);
		ReadResponse::failed(vec![Diagnostic::error("Unknown data source", detail)].into())
	    }
	}
    }
}
