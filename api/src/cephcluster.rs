use k8s_openapi::api::core::v1::NodeAffinity;
use k8s_openapi::api::core::v1::PodAffinity;
use k8s_openapi::api::core::v1::PodAntiAffinity;
use k8s_openapi::api::core::v1::Probe;
use k8s_openapi::api::core::v1::ResourceClaim;
use k8s_openapi::api::core::v1::Toleration;
use k8s_openapi::api::core::v1::TopologySpreadConstraint;
use k8s_openapi::api::core::v1::TypedLocalObjectReference;
use k8s_openapi::api::core::v1::TypedObjectReference;
use k8s_openapi::apimachinery::pkg::apis::meta::v1::LabelSelector;
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use k8s_openapi::apimachinery::pkg::util::intstr::IntOrString;
use kube_derive::CustomResource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/*
 * Mirror of the Rook `CephCluster` custom resource (ceph.rook.io/v1).
 *
 * Only the `spec` is mirrored. Every field is optional: the mirror is read
 * back from the cluster and never written, so whatever the server omits
 * stays absent. Fields the cluster returns but this mirror does not know
 * about are ignored by the decoder.
 */
#[derive(CustomResource, Clone, Debug, Default, PartialEq, Deserialize, Serialize, JsonSchema)]
#[kube(group = "ceph.rook.io", version = "v1", kind = "CephCluster", namespaced)]
#[serde(rename_all = "camelCase")]
pub struct CephClusterSpec {

    /// The version information that instructs Rook to orchestrate a particular version of Ceph.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ceph_version: Option<CephVersionSpec>,

    /// The path on the host where config and data can be persisted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir_host_path: Option<String>,

    /// SkipUpgradeChecks defines if an upgrade should be forced even if one of the check fails.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skip_upgrade_checks: Option<bool>,

    /// ContinueUpgradeAfterChecksEvenIfNotHealthy defines if an upgrade should continue even if PGs are not clean.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub continue_upgrade_after_checks_even_if_not_healthy: Option<bool>,

    /// WaitTimeoutForHealthyOSDInMinutes defines the time the operator would wait before an OSD can be stopped for upgrade or restart.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[serde(rename = "waitTimeoutForHealthyOSDInMinutes")]
    pub wait_timeout_for_healthy_osd_in_minutes: Option<i64>,

    /// UpgradeOSDRequiresHealthyPGs defines if OSD upgrade requires PGs are clean.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[serde(rename = "upgradeOSDRequiresHealthyPGs")]
    pub upgrade_osd_requires_healthy_pgs: Option<bool>,

    /// A spec for mon related options.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mon: Option<MonSpec>,

    /// A spec for mgr related options.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mgr: Option<MgrSpec>,

    /// Dashboard settings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dashboard: Option<DashboardSpec>,

    /// Prometheus based Monitoring settings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monitoring: Option<MonitoringSpec>,

    /// Network related configuration.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub network: Option<NetworkSpec>,

    /// A spec for the crash controller.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crash_collector: Option<CrashCollectorSpec>,

    /// Logging settings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_collector: Option<LogCollectorSpec>,

    /// Indicates user intent when deleting a cluster; blocks orchestration and should not be set if cluster deletion is not imminent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cleanup_policy: Option<CleanupPolicySpec>,

    /// Remove the OSD that is out and safe to remove only if this option is true.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[serde(rename = "removeOSDsIfOutAndSafeToRemove")]
    pub remove_osds_if_out_and_safe_to_remove: Option<bool>,

    /// Placement constraints, keyed by daemon type (all, mon, mgr, osd, ...).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placement: Option<BTreeMap<String, Placement>>,

    /// The annotations-related configuration to add/set on each Pod related object, keyed by daemon type.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub annotations: Option<BTreeMap<String, BTreeMap<String, String>>>,

    /// The labels-related configuration to add/set on each Pod related object, keyed by daemon type.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labels: Option<BTreeMap<String, BTreeMap<String, String>>>,

    /// Resources set resource requests and limits, keyed by daemon type.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resources: Option<BTreeMap<String, ResourceSpec>>,

    /// PriorityClassNames sets priority classes on components.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority_class_names: Option<BTreeMap<String, String>>,

    /// A spec for available storage in the cluster and how it should be used.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage: Option<StorageScopeSpec>,

    /// A spec for configuring disruption management.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disruption_management: Option<DisruptionManagementSpec>,

    /// Internal daemon healthchecks and liveness probe.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub health_check: Option<CephClusterHealthCheckSpec>,

    /// Security represents security settings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub security: Option<SecuritySpec>,

    /// Whether the Ceph Cluster is running external to this Kubernetes cluster.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external: Option<ExternalSpec>,

    /// Ceph config options, keyed by config section (global, osd, mon.a, ...).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ceph_config: Option<BTreeMap<String, BTreeMap<String, String>>>,

    /// CSI Driver Options applied per cluster.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub csi: Option<CsiDriverSpec>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CephVersionSpec {

    /// Image is the container image used to launch the ceph daemons, such as quay.io/ceph/ceph:<tag>.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    /// Whether to allow unsupported versions (do not set to true in production).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_unsupported: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_pull_policy: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct MonSpec {

    /// Count is the number of Ceph monitors.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<i64>,

    /// AllowMultiplePerNode determines if we can run multiple monitors on the same node (not recommended).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_multiple_per_node: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failure_domain_label: Option<String>,

    /// Zones are specified when we want to provide zonal awareness to mons.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zones: Option<Vec<MonZoneSpec>>,

    /// StretchCluster is the stretch cluster specification.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stretch_cluster: Option<StretchClusterSpec>,

    /// VolumeClaimTemplate is the PVC definition.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume_claim_template: Option<VolumeClaimTemplate>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct MonZoneSpec {

    /// Name is the name of the zone.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Arbiter determines if the zone contains the arbiter used for stretch cluster mode.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arbiter: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume_claim_template: Option<VolumeClaimTemplate>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct StretchClusterSpec {

    /// FailureDomainLabel the failure domain name (e,g: zone).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failure_domain_label: Option<String>,

    /// SubFailureDomain is the failure domain within a zone.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_failure_domain: Option<String>,

    /// Zones is the list of zones.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zones: Option<Vec<MonZoneSpec>>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct MgrSpec {

    /// Count is the number of manager daemons to run.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_multiple_per_node: Option<bool>,

    /// Modules is the list of ceph manager modules to enable/disable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modules: Option<Vec<MgrModule>>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct MgrModule {

    /// Name is the name of the ceph manager module.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Enabled determines whether a module should be enabled or not.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settings: Option<MgrModuleSettings>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct MgrModuleSettings {

    /// BalancerMode sets the `balancer` module with different modes like `upmap`, `crush-compact` etc.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub balancer_mode: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSpec {

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,

    /// URLPrefix is a prefix for all URLs to use the dashboard with a reverse proxy.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url_prefix: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ssl: Option<bool>,

    /// Endpoint for the Prometheus host.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prometheus_endpoint: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[serde(rename = "prometheusEndpointSSLVerify")]
    pub prometheus_endpoint_ssl_verify: Option<bool>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct MonitoringSpec {

    /// Enabled determines whether to create the prometheus rules for the ceph cluster.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,

    /// Whether to disable the metrics reported by Ceph.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metrics_disabled: Option<bool>,

    /// ExternalMgrEndpoints points to an existing Ceph prometheus exporter endpoint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_mgr_endpoints: Option<Vec<MonitoringEndpoint>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_mgr_prometheus_port: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<i64>,

    /// Interval determines prometheus scrape interval.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interval: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct MonitoringEndpoint {

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hostname: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node_name: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct NetworkSpec {

    /// Provider is what provides network connectivity to the cluster e.g. "host" or "multus".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,

    /// Selectors define NetworkAttachmentDefinitions to be used for Ceph public and/or cluster networks.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selectors: Option<BTreeMap<String, String>>,

    /// AddressRanges specify a list of CIDRs that Rook will apply to Ceph's 'public_network' and/or 'cluster_network' configurations.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_ranges: Option<AddressRangesSpec>,

    /// Settings for network connections such as compression and encryption across the wire.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connections: Option<ConnectionsSpec>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host_network: Option<bool>,

    /// IPFamily is the single stack IPv6 or IPv4 protocol.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip_family: Option<String>,

    /// DualStack determines whether Ceph daemons should listen on both IPv4 and IPv6.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dual_stack: Option<bool>,

    /// Enable multiClusterService to export the Services between peer clusters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub multi_cluster_service: Option<MultiClusterServiceSpec>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddressRangesSpec {

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cluster: Option<Vec<String>>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionsSpec {

    /// Encryption settings for the network connections.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub encryption: Option<EnabledSpec>,

    /// Compression settings for the network connections.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compression: Option<EnabledSpec>,

    /// Whether to require msgr2 (port 3300) even if compression or encryption are not enabled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub require_msgr2: Option<bool>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct EnabledSpec {

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct MultiClusterServiceSpec {

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,

    /// ClusterID uniquely identifies a cluster. It is used as a prefix to nslookup exported services.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[serde(rename = "clusterID")]
    pub cluster_id: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CrashCollectorSpec {

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disable: Option<bool>,

    /// DaysToRetain represents the number of days to retain crash until they get pruned.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub days_to_retain: Option<i64>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct LogCollectorSpec {

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,

    /// Periodicity is the periodicity of the log rotation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub periodicity: Option<String>,

    /// MaxLogSize is the maximum size of the log per ceph daemons. Must be at least 1M.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_log_size: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CleanupPolicySpec {

    /// Confirmation represents the cleanup confirmation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confirmation: Option<String>,

    /// SanitizeDisks represents way we sanitize disks.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sanitize_disks: Option<SanitizeDisksSpec>,

    /// AllowUninstallWithVolumes defines whether we can proceed with the uninstall if they are RBD images still present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_uninstall_with_volumes: Option<bool>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SanitizeDisksSpec {

    /// Method is the method we use to sanitize disks.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,

    /// DataSource is the data source to use to sanitize the disk with.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_source: Option<String>,

    /// Iteration is the number of pass to apply the sanitizing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iteration: Option<i64>,
}

/*
 * Resource requests and limits as the Rook CRD declares them. Quantities
 * are int-or-string there, so `cpu: 2` is as valid as `cpu: "500m"`.
 */
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ResourceSpec {

    /// Limits describes the maximum amount of compute resources allowed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limits: Option<BTreeMap<String, IntOrString>>,

    /// Requests describes the minimum amount of compute resources required.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requests: Option<BTreeMap<String, IntOrString>>,

    /// Claims lists the names of resources, defined in spec.resourceClaims, that are used by this container.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub claims: Option<Vec<ResourceClaim>>,
}

/*
 * A PVC template: only the object metadata and the claim spec, never the
 * apiVersion/kind of a standalone PersistentVolumeClaim.
 */
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct VolumeClaimTemplate {

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<ObjectMeta>,

    /// Spec defines the desired characteristics of a volume requested by a pod author.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spec: Option<VolumeClaimSpec>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct VolumeClaimSpec {

    /// AccessModes contains the desired access modes the volume should have.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_modes: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_source: Option<TypedLocalObjectReference>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_source_ref: Option<TypedObjectReference>,

    /// Resources represents the minimum resources the volume should have.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resources: Option<VolumeResources>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selector: Option<LabelSelector>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage_class_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume_attributes_class_name: Option<String>,

    /// VolumeMode defines what type of volume is required by the claim.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume_mode: Option<String>,

    /// VolumeName is the binding reference to the PersistentVolume backing this claim.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume_name: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct VolumeResources {

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limits: Option<BTreeMap<String, IntOrString>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requests: Option<BTreeMap<String, IntOrString>>,
}

/*
 * Placement is the placement for an object: the same four affinity
 * knobs a Pod spec carries, reusing the upstream Kubernetes types.
 */
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Placement {

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node_affinity: Option<NodeAffinity>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pod_affinity: Option<PodAffinity>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pod_anti_affinity: Option<PodAntiAffinity>,

    /// The pod this Toleration is attached to tolerates any taint that matches the triple <key,value,effect>.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tolerations: Option<Vec<Toleration>>,

    /// TopologySpreadConstraints specifies how to spread matching pods among the given topology.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topology_spread_constraints: Option<Vec<TopologySpreadConstraint>>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct StorageScopeSpec {

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub use_all_nodes: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub use_all_devices: Option<bool>,

    /// A regular expression to allow more fine-grained selection of devices on nodes across the cluster.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device_filter: Option<String>,

    /// A regular expression to allow more fine-grained selection of devices with path names.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device_path_filter: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<BTreeMap<String, String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nodes: Option<Vec<StorageNode>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub devices: Option<Vec<Device>>,

    /// PersistentVolumeClaims to use as storage.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume_claim_templates: Option<Vec<VolumeClaimTemplate>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage_class_device_sets: Option<Vec<StorageClassDeviceSet>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[serde(rename = "onlyApplyOSDPlacement")]
    pub only_apply_osd_placement: Option<bool>,

    /// FlappingRestartIntervalHours defines the time for which the OSD pods, that failed with zero exit code, will sleep before restarting.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flapping_restart_interval_hours: Option<i64>,

    /// FullRatio is the ratio at which the cluster is considered full and ceph will stop accepting writes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_ratio: Option<f64>,

    /// NearFullRatio is the ratio at which the cluster is considered nearly full and will raise a ceph health warning.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub near_full_ratio: Option<f64>,

    /// BackfillFullRatio is the ratio at which the cluster is too full for backfill.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub backfill_full_ratio: Option<f64>,

    /// OSDStore is the backend storage type used for creating the OSDs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub store: Option<OsdStore>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct StorageNode {

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resources: Option<ResourceSpec>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<BTreeMap<String, String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub use_all_devices: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device_filter: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device_path_filter: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub devices: Option<Vec<Device>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume_claim_templates: Option<Vec<VolumeClaimTemplate>>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Device {

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fullpath: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<BTreeMap<String, String>>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct StorageClassDeviceSet {

    /// Name is a unique identifier for the set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Count is the number of devices in this set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<i64>,

    /// Portable represents OSD portability across the hosts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub portable: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tune_device_class: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tune_fast_device_class: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scheduler_name: Option<String>,

    /// Whether to encrypt the deviceSet.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub encrypted: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placement: Option<Placement>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prepare_placement: Option<Placement>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resources: Option<ResourceSpec>,

    /// Provider-specific device configuration.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<BTreeMap<String, String>>,

    /// VolumeClaimTemplates is a list of PVC templates for the underlying storage devices.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume_claim_templates: Option<Vec<VolumeClaimTemplate>>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct OsdStore {

    /// Type of backend storage to be used while creating OSDs. If empty, then bluestore will be used.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[serde(rename = "type")]
    pub type_: Option<String>,

    /// UpdateStore updates the backend store for existing OSDs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub update_store: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DisruptionManagementSpec {

    /// This enables management of poddisruptionbudgets.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manage_pod_budgets: Option<bool>,

    /// OSDMaintenanceTimeout sets how many additional minutes the DOWN/OUT interval is for drained failure domains.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[serde(rename = "osdMaintenanceTimeout")]
    pub osd_maintenance_timeout: Option<i64>,

    /// PGHealthCheckTimeout is the time (in minutes) that the operator will wait for the placement groups to become healthy.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[serde(rename = "pgHealthCheckTimeout")]
    pub pg_health_check_timeout: Option<i64>,

    /// PgHealthyRegex is the regular expression that is used to determine which PG states should be considered healthy.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pg_healthy_regex: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manage_machine_disruption_budgets: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub machine_disruption_budget_namespace: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CephClusterHealthCheckSpec {

    /// DaemonHealth is the health check for a given daemon.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub daemon_health: Option<DaemonHealthSpec>,

    /// LivenessProbe allows changing the livenessProbe configuration for a given daemon.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub liveness_probe: Option<BTreeMap<String, ProbeSpec>>,

    /// StartupProbe allows changing the startupProbe configuration for a given daemon.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub startup_probe: Option<BTreeMap<String, ProbeSpec>>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DaemonHealthSpec {

    /// Status represents the health check settings for the Ceph health.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<HealthCheckSpec>,

    /// Monitor represents the health check settings for the Ceph monitor.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mon: Option<HealthCheckSpec>,

    /// ObjectStorageDaemon represents the health check settings for the Ceph OSDs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub osd: Option<HealthCheckSpec>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct HealthCheckSpec {

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disabled: Option<bool>,

    /// Interval is the internal in second or minute for the health check to run like 60s for 60 seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interval: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProbeSpec {

    /// Disabled determines whether probe is disable or not.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disabled: Option<bool>,

    /// Probe describes a health check to be performed against a container.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub probe: Option<Probe>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SecuritySpec {

    /// KeyManagementService is the main Key Management option.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kms: Option<KeyManagementServiceSpec>,

    /// KeyRotation defines options for Key Rotation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_rotation: Option<KeyRotationSpec>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct KeyManagementServiceSpec {

    /// ConnectionDetails contains the KMS connection details (address, port etc).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connection_details: Option<BTreeMap<String, String>>,

    /// TokenSecretName is the kubernetes secret containing the KMS token.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_secret_name: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct KeyRotationSpec {

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,

    /// Schedule represents the cron schedule for key rotation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schedule: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExternalSpec {

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enable: Option<bool>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CsiDriverSpec {

    /// ReadAffinity defines the read affinity settings for CSI driver.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub read_affinity: Option<ReadAffinitySpec>,

    /// CephFS defines CSI Driver settings for CephFS driver.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cephfs: Option<CsiCephFsSpec>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReadAffinitySpec {

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,

    /// CrushLocationLabels defines which node labels to use as CRUSH location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crush_location_labels: Option<Vec<String>>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CsiCephFsSpec {

    /// KernelMountOptions defines the mount options for kernel mounter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kernel_mount_options: Option<String>,

    /// FuseMountOptions defines the mount options for ceph fuse mounter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fuse_mount_options: Option<String>,
}
