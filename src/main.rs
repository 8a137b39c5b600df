//! Fixed demonstration run of a multifunctional device.
//!
//! Activity lines go to stdout; diagnostics go to stderr and are filtered
//! with `RUST_LOG` (default `office_sim=info`).

use office_sim::{
    Document, DocumentFormat, FaxCapable, MultifunctionalDevice, PoweredDevice, PrintCapable,
    ScanCapable,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const FAX_NUMBER: &str = "123456789";

fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("office_sim=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .init();
}

fn main() {
    init_logging();

    let mut xerox = MultifunctionalDevice::new();
    xerox.power_on();

    let doc1 = Document::new("aaa.pdf");
    xerox.print(&doc1);

    let doc2 = xerox.scan(DocumentFormat::default());
    tracing::debug!(scanned = ?doc2.as_ref().map(Document::filename), "scan finished");

    xerox.scan_and_print();
    xerox.send_fax(&doc1, FAX_NUMBER);

    println!("{}", xerox.report());
}
