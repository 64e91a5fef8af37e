use anyhow::{Context, bail};
use clap::Parser;
use snel_intervals::interval::{
    Bucket, Granularity, LabelStyle, NamedRange, get_buckets, get_buckets_from_strs,
    get_keyed_index,
};
use snel_intervals::logging;
use snel_intervals::shared::config::CONFIG;
use snel_intervals::shared::response::{OutputFormat, renderer_for};
use std::io::{self, Write};
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "snel_intervals")]
#[command(about = "Split a date-time range into calendar buckets", long_about = None)]
struct Args {
    /// hour(ly), day/daily, week(ly), month(ly), year(ly), total
    #[arg(short, long)]
    granularity: String,

    /// Range start, e.g. "2024-03-01" or "2024-03-01 08:00:00"
    #[arg(long, requires = "end", conflicts_with = "range")]
    start: Option<String>,

    /// Range end, inclusive
    #[arg(long, requires = "start", conflicts_with = "range")]
    end: Option<String>,

    /// Named range relative to today, e.g. last_week or last_3_months
    #[arg(short, long)]
    range: Option<String>,

    /// json or text; defaults to the configured format
    #[arg(short, long)]
    format: Option<OutputFormat>,

    /// plain, markup or newline; defaults to the configured style
    #[arg(long)]
    label_style: Option<LabelStyle>,

    /// Print the raw buckets instead of the merged index
    #[arg(long)]
    raw: bool,
}

fn buckets_for_args(args: &Args) -> anyhow::Result<Vec<Bucket>> {
    if let Some(name) = &args.range {
        let named = NamedRange::from_name(name)
            .with_context(|| format!("Unknown range name: {name}"))?;
        let today = chrono::Local::now().date_naive();
        let Some(range) = named.resolve(today) else {
            bail!("Range '{name}' has no fixed bounds; pass --start and --end instead");
        };
        info!(range = %range, "Resolved named range");
        let (start, end) = range.bounds();
        return Ok(get_buckets(&args.granularity, start, end));
    }

    match (&args.start, &args.end) {
        (Some(start), Some(end)) => Ok(get_buckets_from_strs(&args.granularity, start, end)?),
        _ => bail!("Either --range or both --start and --end are required"),
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logging::init(&CONFIG.logging)?;

    if Granularity::from_name(&args.granularity).is_none() {
        warn!(granularity = %args.granularity, "Unknown granularity, no buckets produced");
    }

    let buckets = buckets_for_args(&args)?;
    let format = args.format.unwrap_or(CONFIG.output.format);
    let style = args.label_style.unwrap_or(CONFIG.output.label_style);
    let renderer = renderer_for(format);

    let output = if args.raw {
        renderer.render_buckets(&buckets)
    } else {
        renderer.render_index(&get_keyed_index(buckets), style)
    };

    let mut stdout = io::stdout().lock();
    stdout.write_all(&output)?;
    if format == OutputFormat::Json {
        stdout.write_all(b"\n")?;
    }
    Ok(())
}
