pub mod constants;

mod case;
mod header;
mod host_port;
mod hostname;
mod known_ports;
mod matcher;
mod origin;
mod pattern;
mod pattern_set;

pub use header::extract_origin;
pub use host_port::HostPortError;
pub use matcher::{match_any, matches, MatchError};
pub use origin::{Origin, OriginError};
pub use pattern::{Pattern, PatternComponent, PatternError};
pub use pattern_set::PatternSet;
