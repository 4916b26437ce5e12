use crate::errors::Error;

use kube::config::KubeConfigOptions;
use kube::config::Kubeconfig;
use kube::Client as KubeClient;
use kube::Config as KubeConfig;
use serde::Deserialize;
use std::path::PathBuf;

/* type name prefix of every data source this provider registers */
pub const PROVIDER_TYPE_NAME: &str = "k8s";

/*
 * The provider level configuration block.
 *
 *   provider "k8s" {
 *     offline    = false
 *     kubeconfig = "~/.kube/config"
 *     context    = "kind-rook"
 *   }
 */
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProviderConfig {

    // when set, no data source may talk to a cluster
    #[serde(default)]
    pub offline: bool,

    // kubeconfig file to load instead of the default inference chain
    #[serde(default)]
    pub kubeconfig: Option<PathBuf>,

    // kubeconfig context to use instead of the current one
    #[serde(default)]
    pub context: Option<String>,
}

impl ProviderConfig {

    pub fn offline() -> Self {
	Self{
	    offline: true,
	    ..Self::default()
	}
    }

    fn kubeconfig_options(&self) -> KubeConfigOptions {
	KubeConfigOptions{
	    context: self.context.clone(),
	    cluster: None,
	    user: None,
	}
    }

    /*
     * Resolves the kube client configuration:
     *
     *  1. an explicit kubeconfig file (with the optional context)
     *  2. the default kubeconfig with an explicit context
     *  3. the standard inference chain (in-cluster env, $KUBECONFIG, ~/.kube/config)
     */
    pub async fn kube_config(&self) -> Result<KubeConfig, Error> {
	let config = match (&self.kubeconfig, &self.context) {
	    (Some(path), _) => {
		log::debug!("loading kubeconfig from {}", path.display());
		let kubeconfig = Kubeconfig::read_from(path)?;
		KubeConfig::from_custom_kubeconfig(kubeconfig, &self.kubeconfig_options()).await?
	    },
	    (None, Some(context)) => {
		log::debug!("loading default kubeconfig with context {}", context);
		KubeConfig::from_kubeconfig(&self.kubeconfig_options()).await?
	    },
	    (None, None) => KubeConfig::infer().await?,
	};

	Ok(config)
    }

    /*
     * Builds the client handed to every data source, or none at all when
     * the provider runs offline.
     */
    pub async fn client(&self) -> Result<Option<KubeClient>, Error> {
	if self.offline {
	    log::info!("provider is offline, not building a kubernetes client");
	    return Ok(None);
	}

	let config = self.kube_config().await?;
	log::debug!("using kubernetes API server at {}", config.cluster_url);
	Ok(Some(KubeClient::try_from(config)?))
    }
}
