use std::io::{self, BufWriter, Write};
use std::net::Ipv4Addr;
use std::time::Instant;

use anyhow::Context;
use colored::*;
use lanlist_common::config::ListOptions;
use lanlist_core::Enumerator;
use tracing::info;

use crate::commands::ListArgs;
use crate::terminal::{colors, print};

pub async fn list(args: &ListArgs, q_level: u8) -> anyhow::Result<()> {
    let start_time: Instant = Instant::now();
    let lister = args.source.lister()?;
    let options = args.options();

    print::header("listing hosts", q_level);
    for (key, value) in settings(&options, q_level) {
        print::aligned_line(key, value, 8);
    }

    if args.count {
        let snapshot = lister.snapshot().await.context("failed to resolve the default network")?;
        let plan = Enumerator::from_options(&options).plan(&snapshot, &options.omit)?;
        let mut out = io::stdout().lock();
        writeln!(out, "{}", plan.len())?;
        return Ok(());
    }

    let written: u64 = match options.max_hosts {
        Some(_) => {
            let ips = lister
                .list_addrs(&options)
                .await
                .context("failed to list hosts")?;
            write_addrs(&mut BufWriter::new(io::stdout().lock()), ips)?
        }
        None => {
            let hosts = lister.stream(&options).await.context("failed to list hosts")?;
            write_addrs(&mut BufWriter::new(io::stdout().lock()), hosts)?
        }
    };

    let total_time: ColoredString = format!("{:.2}s", start_time.elapsed().as_secs_f64()).bold().yellow();
    info!("Wrote {} addresses in {total_time}", written.to_string().green().bold());
    Ok(())
}

/// The key/value lines shown under the header. Hidden together with the header.
fn settings(options: &ListOptions, q_level: u8) -> Vec<(&'static str, ColoredString)> {
    if q_level > 0 {
        return Vec::new();
    }
    vec![
        ("Omitting", options.omit.to_string().color(colors::ACCENT)),
        ("Mode", options.mode.to_string().normal()),
    ]
}

/// Writes one address per line and returns how many were written.
fn write_addrs<W, I>(out: &mut W, ips: I) -> io::Result<u64>
where
    W: Write,
    I: IntoIterator<Item = Ipv4Addr>,
{
    let mut written = 0;
    for ip in ips {
        writeln!(out, "{ip}")?;
        written += 1;
    }
    out.flush()?;
    Ok(written)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
