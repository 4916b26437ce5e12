use crate::client::ObjectGetter;
use crate::diagnostics::Diagnostics;
use crate::schema::Schema;

use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;

/*
 * What the provider hands to each data source once it is configured.
 * `client` is None when the provider runs offline.
 */
#[derive(Clone)]
pub struct ProviderData {
    pub client: Option<Arc<dyn ObjectGetter>>,
    pub offline: bool,
}

impl ProviderData {

    pub fn online(client: Arc<dyn ObjectGetter>) -> Self {
	Self{
	    client: Some(client),
	    offline: false,
	}
    }

    pub fn offline() -> Self {
	Self{
	    client: None,
	    offline: true,
	}
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ReadRequest {

    // the caller's configuration block, keyed by state names
    pub config: Value,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ReadResponse {
    pub state: Option<Value>,
    pub diagnostics: Diagnostics,
}

impl ReadResponse {

    pub fn failed(diagnostics: Diagnostics) -> Self {
	Self{
	    state: None,
	    diagnostics: diagnostics,
	}
    }
}

/*
 * A read-only accessor: the four entry points a host framework drives.
 */
#[async_trait]
pub trait DataSource: Send + Sync {

    /*
     * Full type name of the data source under the given provider prefix.
     */
    fn metadata(&self, provider_type_name: &str) -> String;

    fn schema(&self) -> &Schema;

    /*
     * Called once the provider is configured; `None` means the provider
     * has not been configured yet and the call must be a no-op.
     */
    fn configure(&mut self, data: Option<&ProviderData>);

    async fn read(&self, req: ReadRequest) -> ReadResponse;
}
