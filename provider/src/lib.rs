/*
 * kubecrd-provider - read-only data sources over Kubernetes custom
 * resources: each one GETs a single object, decodes it into its typed
 * mirror and republishes it as computed state
 */

pub mod client;
pub use client::ObjectGetter;

pub mod config;
pub use config::ProviderConfig;
pub use config::PROVIDER_TYPE_NAME;

pub mod crd;
pub use crd::CrdDataSource;

pub mod datasource;
pub use datasource::DataSource;
pub use datasource::ProviderData;
pub use datasource::ReadRequest;
pub use datasource::ReadResponse;

pub mod diagnostics;
pub use diagnostics::Diagnostic;
pub use diagnostics::Diagnostics;

pub mod errors;
pub use errors::Error;
pub use errors::ReadError;

pub mod provider;
pub use provider::Provider;

pub mod schema;
pub use schema::Schema;
