use kube_derive::CustomResource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/*
 * Mirror of the Rook `CephBlockPool` custom resource (ceph.rook.io/v1):
 * a RADOS pool backing RBD images.
 */
#[derive(CustomResource, Clone, Debug, Default, PartialEq, Deserialize, Serialize, JsonSchema)]
#[kube(group = "ceph.rook.io", version = "v1", kind = "CephBlockPool", namespaced)]
#[serde(rename_all = "camelCase")]
pub struct CephBlockPoolSpec {

    /// The desired name of the pool if different from the CephBlockPool CR name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// The failure domain: osd/host/(region or zone if available) - technically also any type in the crush map.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failure_domain: Option<String>,

    /// The root of the crush hierarchy utilized by the pool.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crush_root: Option<String>,

    /// The device class the OSD should set to for use in the pool.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device_class: Option<String>,

    /// The inline compression mode in Bluestore OSD to set to (options are: none, passive, aggressive, force).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compression_mode: Option<String>,

    /// The replication settings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replicated: Option<ReplicatedSpec>,

    /// The erasure code settings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub erasure_coded: Option<ErasureCodedSpec>,

    /// Parameters is a list of properties to enable on a given pool.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameters: Option<BTreeMap<String, String>>,

    /// EnableRBDStats is used to enable gathering of statistics for all RBD images in the pool.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[serde(rename = "enableRBDStats")]
    pub enable_rbd_stats: Option<bool>,

    /// The mirroring settings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mirroring: Option<MirroringSpec>,

    /// The mirroring statusCheck.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_check: Option<MirrorHealthCheckSpec>,

    /// The quota settings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quotas: Option<QuotaSpec>,

    /// The application name to set on the pool. Only expected to be set for rgw pools.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application: Option<String>,

    /// Allow rook operator to change the pool CRUSH tunables once the pool is created.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enable_crush_updates: Option<bool>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReplicatedSpec {

    /// Size - Number of copies per object in a replicated storage pool, including the object itself (required for replicated pool type).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<i64>,

    /// RequireSafeReplicaSize if false allows you to set replica 1.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub require_safe_replica_size: Option<bool>,

    /// ReplicasPerFailureDomain the number of replica in the specified failure domain.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replicas_per_failure_domain: Option<i64>,

    /// SubFailureDomain the name of the sub-failure domain.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_failure_domain: Option<String>,

    /// TargetSizeRatio gives a hint (%) to Ceph in terms of expected consumption of the total cluster capacity.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_size_ratio: Option<f64>,

    /// HybridStorage represents hybrid storage tier settings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hybrid_storage: Option<HybridStorageSpec>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct HybridStorageSpec {

    /// PrimaryDeviceClass represents high performance tier (for example SSD or NVME) for Primary OSD.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_device_class: Option<String>,

    /// SecondaryDeviceClass represents low performance tier (for example HDDs) for remaining OSDs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary_device_class: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ErasureCodedSpec {

    /// Number of coding chunks per object in an erasure coded storage pool (required for erasure-coded pool type).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coding_chunks: Option<i64>,

    /// Number of data chunks per object in an erasure coded storage pool (required for erasure-coded pool type).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_chunks: Option<i64>,

    /// The algorithm for erasure coding.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub algorithm: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct MirroringSpec {

    /// Enabled whether this pool is mirrored or not.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,

    /// Mode is the mirroring mode: either pool or image.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,

    /// SnapshotSchedules is the scheduling of snapshot for mirrored images/pools.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snapshot_schedules: Option<Vec<SnapshotScheduleSpec>>,

    /// Peers represents the peers spec.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub peers: Option<MirroringPeerSpec>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotScheduleSpec {

    /// Interval represent the periodicity of the snapshot.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interval: Option<String>,

    /// StartTime indicates when to start the snapshot.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,

    /// Path is the path to snapshot, only valid for CephFS.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct MirroringPeerSpec {

    /// SecretNames represents the Kubernetes Secret names to add rbd-mirror or cephfs-mirror peers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secret_names: Option<Vec<String>>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct MirrorHealthCheckSpec {

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mirror: Option<crate::cephcluster::HealthCheckSpec>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct QuotaSpec {

    /// MaxBytes represents the quota in bytes. Deprecated in favor of MaxSize.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_bytes: Option<i64>,

    /// MaxSize represents the quota in bytes as a string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_size: Option<String>,

    /// MaxObjects represents the quota in objects.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_objects: Option<i64>,
}
