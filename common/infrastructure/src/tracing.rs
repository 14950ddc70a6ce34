use std::sync::Once;
use tracing_subscriber::{
    field::MakeExt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

const RUST_LOG: &str = "info";

static INIT: Once = Once::new();

/// Initialize logging, once per process.
///
/// The filter is taken from `RUST_LOG`, falling back to `info`. Events of the `log` crate are
/// forwarded too.
pub fn init_tracing() {
    INIT.call_once(init_fmt);
}

fn init_fmt() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        eprintln!("RUST_LOG is unset, using default: '{RUST_LOG}'");
        EnvFilter::new(RUST_LOG)
    });

    let result = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .map_fmt_fields(|f| f.debug_alt())
                .with_ansi(true)
                .with_level(true)
                .compact(),
        )
        .try_init();

    if let Err(err) = result {
        eprintln!("Error initializing logging: {:?}", err);
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn init_twice() {
        init_tracing();
        init_tracing();
        log::info!("logging after init");
    }
}
