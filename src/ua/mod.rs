mod check;
pub use check::UserAgentCheck;

mod global;
pub use global::{
    APP_NAME_ENV_KEY, USER_AGENT_ENV_KEY, global_sniffer, init_global_sniffer,
    try_init_global_sniffer,
};

mod patterns;

mod report;
pub use report::UserAgentReport;

mod sniffer;
pub use sniffer::{DEFAULT_APP_NAME, IE_APP_NAME, UNKNOWN_IE_VERSION, UserAgentSniffer};
