//! Subscriber setup for the binary.
//!
//! Library code only emits `tracing` events. Output goes to stderr so the
//! token listing on stdout stays machine readable.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Level used when neither `--log` nor `RUST_LOG` is given.
pub const DEFAULT_FILTER: &str = "warn";

/// Build the filter from an explicit directive, then `RUST_LOG`, then the default.
pub fn filter(directive: Option<&str>) -> EnvFilter {
	match directive {
		Some(directive) => EnvFilter::try_new(directive).unwrap_or_else(|e| {
			eprintln!("Invalid log filter {directive:?}: {e}");
			EnvFilter::new(DEFAULT_FILTER)
		}),
		None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER)),
	}
}

/// Install the global subscriber. Calling it twice is a no-op.
pub fn init(directive: Option<&str>) {
	let layer = fmt::layer().compact().with_target(true).without_time().with_writer(std::io::stderr);
	if let Err(e) = tracing_subscriber::registry().with(layer).with(filter(directive)).try_init() {
		eprintln!("Failed init logging: {e}");
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn explicit_directive_wins() {
		let filter = filter(Some("loxscan::scanner=trace")).to_string().to_lowercase();
		assert!(filter.contains("loxscan::scanner"));
		assert!(filter.contains("trace"));
	}

	#[test]
	fn default_is_warn() { assert!(filter(Some(DEFAULT_FILTER)).to_string().to_lowercase().contains("warn")) }
}
