mod config;
mod dto;
mod errors;
mod trace;

#[cfg(test)]
mod tests;

use std::{
  fs::File,
  io::{self, BufReader, BufWriter, Read, Write},
  path::Path,
};

use libosmatch::prelude::*;
use tracing::instrument;

use crate::{
  config::Config,
  dto::{Batch, BatchItem, DecisionRecord},
  errors::AppError,
};

fn main() -> anyhow::Result<()> {
  let config = Config::from_env()?;
  let _guard = trace::init_tracing(&config, io::stderr());

  let matcher = config.matcher()?;
  let batch = read_batch(config.input.as_deref())?;

  run(&matcher, batch, BufWriter::new(io::stdout().lock()))
}

fn read_batch(input: Option<&Path>) -> Result<Batch, AppError> {
  let reader: Box<dyn Read> = match input {
    Some(path) => Box::new(BufReader::new(File::open(path)?)),
    None => Box::new(io::stdin().lock()),
  };

  Ok(serde_json::from_reader(reader)?)
}

/// Matches and disambiguates a batch, writing one JSON decision per line.
#[instrument(name = "run_batch", skip_all, fields(items = batch.items.len(), bad = batch.bad.len()))]
fn run<W: Write>(matcher: &Matcher, batch: Batch, mut out: W) -> anyhow::Result<()> {
  let Batch { items, bad } = batch;

  tracing::info!("matching batch");

  let items = matcher.match_items(items.into_iter().map(|BatchItem { item, rows }| (item, rows)).collect());

  let mut confirmed = 0;
  let mut noted = 0;

  for (item, decision) in disambiguate(&items, &bad) {
    match decision {
      Decision::Candidate(_) => confirmed += 1,
      Decision::Note(_) => noted += 1,
    }

    let record = DecisionRecord {
      item_id: item.item_id,
      search_radius_km: matcher.search_radius_km(item),
      decision,
    };

    serde_json::to_writer(&mut out, &record)?;
    writeln!(out)?;
  }

  out.flush()?;

  tracing::info!(confirmed, noted, "batch disambiguated");

  Ok(())
}
