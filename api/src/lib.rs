/*
 * ceph-rook-api - typed mirrors of the Rook custom resources (ceph.rook.io)
 * read back by the kubecrd data sources
 */

pub mod cephcluster;
pub use cephcluster::CephCluster;
pub use cephcluster::CephClusterSpec;
pub use cephcluster::Placement;
pub use cephcluster::ResourceSpec;
pub use cephcluster::VolumeClaimTemplate;

pub mod cephblockpool;
pub use cephblockpool::CephBlockPool;
pub use cephblockpool::CephBlockPoolSpec;
