use async_trait::async_trait;
use kube::api::ApiResource;
use kube::api::DynamicObject;
use kube::Api as KubeApi;
use kube::Client as KubeClient;
use kube::Error as KubeError;

/*
 * The only thing a data source needs from the Kubernetes API: fetch one
 * namespaced object of a given resource type, untyped. Nothing here
 * writes to the cluster.
 */
#[async_trait]
pub trait ObjectGetter: Send + Sync {
    async fn get(&self, resource: &ApiResource, namespace: &str, name: &str) -> Result<DynamicObject, KubeError>;
}

#[async_trait]
impl ObjectGetter for KubeClient {
    async fn get(&self, resource: &ApiResource, namespace: &str, name: &str) -> Result<DynamicObject, KubeError> {
	let api: KubeApi<DynamicObject> = KubeApi::namespaced_with(self.clone(), namespace, resource);

	api.get(name).await
    }
}

/*
 * "group/version/plural" of a resource, as used in log lines and error
 * messages.
 */
pub fn gvr(resource: &ApiResource) -> String {
    if resource.group.is_empty() {
	format!("{}/{}", resource.version, resource.plural)
    } else {
	format!("{}/{}/{}", resource.group, resource.version, resource.plural)
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use ceph_rook_api::CephCluster;
    use k8s_openapi::api::core::v1::ConfigMap;
    use pretty_assertions::assert_eq;

    #[test]
    fn gvr_of_custom_and_core_resources() {
	assert_eq!(gvr(&ApiResource::erase::<CephCluster>(&())), "ceph.rook.io/v1/cephclusters");
	assert_eq!(gvr(&ApiResource::erase::<ConfigMap>(&())), "v1/configmaps");
    }

    #[tokio::test]
    async fn fake_records_calls_and_reports_not_found() {
	let getter = fake::FakeGetter::new();
	let resource = ApiResource::erase::<CephCluster>(&());

	let err = getter.get(&resource, "rook-ceph", "missing").await.unwrap_err();
	assert!(err.to_string().contains("not found"));
	assert_eq!(getter.calls(), vec![String::from("GET ceph.rook.io/v1/cephclusters/rook-ceph/missing")]);
    }
}
