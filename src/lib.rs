//! # KLoROS
//!
//! Command-line entry point for KLoROS. The interesting part is the
//! [`core::Dispatcher`]: an ordered table of named handlers with a default
//! command, and a help listing shown for any name it does not know.
//!
//! ## Example
//!
//! ```
//! use kloros::core::{CommandOutput, Dispatcher};
//!
//! let mut dispatcher = Dispatcher::new("kloros", "KLoROS command-line interface");
//! dispatcher.register("ping", "Health check (prints pong)", || CommandOutput::success("pong"))?;
//! dispatcher.set_default("ping")?;
//!
//! let mut out = Vec::new();
//! assert_eq!(dispatcher.dispatch_to(None, &mut out)?, 0);
//! assert_eq!(out, b"pong\n");
//! # Ok::<(), kloros::error::KlorosError>(())
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod error;

use crate::error::{KlorosError, Result};
use std::fmt;
use tracing::{Event, Subscriber};
use tracing_subscriber::{
    EnvFilter,
    fmt::{FmtContext, FormatEvent, FormatFields, format::Writer},
    layer::SubscriberExt,
    registry::LookupSpan,
    util::SubscriberInitExt,
};

/// Event format producing `LEVEL | message` lines
#[derive(Debug, Clone, Copy, Default)]
pub struct LevelPipeFormat;

impl<S, N> FormatEvent<S, N> for LevelPipeFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        write!(writer, "{} | ", event.metadata().level())?;
        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

/// Initialize logging at INFO level on standard error
pub fn setup_logging() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(false)
                .event_format(LevelPipeFormat),
        )
        .with(EnvFilter::new("info"))
        .try_init()
        .map_err(|e| KlorosError::logging(format!("Failed to initialize logging: {e}")))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{
        io,
        sync::{Arc, Mutex},
    };

    #[derive(Clone, Default)]
    struct SharedBuf(Arc<Mutex<Vec<u8>>>);

    impl io::Write for SharedBuf {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_level_pipe_format() {
        let buf = SharedBuf::default();
        let writer = buf.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .event_format(LevelPipeFormat)
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            tracing::info!("dispatcher ready");
            tracing::warn!("slow health check");
        });

        let logged = String::from_utf8(buf.0.lock().unwrap().clone()).unwrap();
        assert_eq!(logged, "INFO | dispatcher ready\nWARN | slow health check\n");
    }
}
