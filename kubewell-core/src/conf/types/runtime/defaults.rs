pub const DEFAULT_INGRESS_CLASS: &str = "Kubewell";
pub const DEFAULT_HEALTH_STATUS_URI: &str = "/Kubewell-health";
pub const DEFAULT_STATUS_PORT: u16 = 8080;
pub const DEFAULT_STATUS_ALLOW_CIDRS: &str = "127.0.0.1";
pub const DEFAULT_PROMETHEUS_PORT: u16 = 9113;
pub const DEFAULT_REPLICA_COUNT: i32 = 1;
pub const DEFAULT_LOG_LEVEL: u8 = 0;
pub const DEFAULT_RELOAD_TIMEOUT_MS: u32 = 60_000;
pub const DEFAULT_CRDS_ENABLED: bool = true;
pub const DEFAULT_LEADER_ELECTION_ENABLED: bool = true;
